mod display;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use clausewise_ai::{DEFAULT_BASE_URL, Gateway, GatewayConfig, GeminiClient};
use clausewise_core::{ArbitrationSeat, ClauseCategory, ContractAnalysis, Jurisdiction};
use clausewise_session::view::{self, Panel};
use clausewise_session::{
    Controller, Field, Intent, SLOT_COUNT, SessionStore, Settings, UploadTarget, WorkflowKind,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Contract risk audits, cross-contract comparison, and a clause reference.
#[derive(Parser)]
#[command(name = "clausewise", version)]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Base URL of the models endpoint
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Model used for audits and comparisons
    #[arg(long, global = true)]
    analysis_model: Option<String>,

    /// Model used for follow-up questions
    #[arg(long, global = true)]
    chat_model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 120, global = true)]
    timeout_secs: u64,

    /// Governing law (slug or label, see `clausewise options`)
    #[arg(long, default_value_t = Jurisdiction::default(), global = true)]
    jurisdiction: Jurisdiction,

    /// Seat of arbitration (slug or label)
    #[arg(long, default_value_t = ArbitrationSeat::default(), global = true)]
    seat: ArbitrationSeat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a single contract for buyer and seller exposure
    Audit {
        /// Contract file (PDF, Word, or plain text)
        #[arg(conflicts_with = "text", required_unless_present = "text")]
        file: Option<PathBuf>,
        /// Contract text to audit instead of a file
        #[arg(long)]
        text: Option<String>,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare 2 to 4 contracts and spot errors across them
    Compare {
        /// Contract files, in slot order
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,
        /// What the audit should focus on
        #[arg(short, long)]
        query: Option<String>,
        /// Print the raw result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask follow-up questions interactively (/clear to reset, /quit to leave)
    Chat {
        /// Saved audit JSON (from `audit --json`) to ground answers in
        #[arg(long)]
        context: Option<PathBuf>,
    },
    /// Browse the clause reference library
    Clauses {
        /// Case-insensitive match on title or explanation
        #[arg(short, long, default_value = "")]
        search: String,
        /// Restrict to one category
        #[arg(short, long)]
        category: Option<ClauseCategory>,
        /// Show one clause in full
        #[arg(long)]
        show: Option<String>,
    },
    /// List the available jurisdictions and arbitration seats
    Options,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("clausewise v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let settings = Settings {
        jurisdiction: cli.jurisdiction,
        seat: cli.seat,
    };

    match &cli.command {
        Commands::Audit { file, text, json } => {
            let mut ctl = controller(&cli, settings)?;
            cmd_audit(&mut ctl, file.as_deref(), text.clone(), *json).await
        }
        Commands::Compare { files, query, json } => {
            let mut ctl = controller(&cli, settings)?;
            cmd_compare(&mut ctl, files, query.clone(), *json).await
        }
        Commands::Chat { context } => {
            let mut ctl = controller(&cli, settings)?;
            cmd_chat(&mut ctl, context.as_deref()).await
        }
        Commands::Clauses {
            search,
            category,
            show,
        } => cmd_clauses(search, *category, show.as_deref()),
        Commands::Options => {
            display::print_options();
            Ok(())
        }
    }
}

fn controller(cli: &Cli, settings: Settings) -> anyhow::Result<Controller> {
    let api_key = cli
        .api_key
        .clone()
        .context("set GEMINI_API_KEY or pass --api-key")?;
    let client = GeminiClient::new(
        api_key,
        cli.base_url.clone(),
        Duration::from_secs(cli.timeout_secs),
    )
    .context("building Gemini client")?;

    let mut config = GatewayConfig::default();
    if let Some(model) = &cli.analysis_model {
        config.analysis_model = model.clone();
    }
    if let Some(model) = &cli.chat_model {
        config.chat_model = model.clone();
    }
    Ok(Controller::new(Gateway::new(Arc::new(client), config), settings))
}

async fn cmd_audit(
    ctl: &mut Controller,
    file: Option<&Path>,
    text: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    match (file, text) {
        (Some(path), _) => {
            ctl.upload_file(UploadTarget::Audit, path)
                .await
                .with_context(|| format!("loading {}", path.display()))?;
            eprintln!("  Auditing {} ...", path.display());
        }
        (None, Some(text)) => {
            ctl.dispatch(Intent::SetField(Field::ContractText(text))).await?;
            eprintln!("  Auditing pasted text ...");
        }
        (None, None) => bail!("give a contract file or --text"),
    }
    ctl.dispatch(Intent::Submit(WorkflowKind::Audit)).await?;

    if json && let Some(analysis) = ctl.store().audit.result() {
        println!("{}", serde_json::to_string_pretty(analysis)?);
        return Ok(());
    }
    match view::dashboard(ctl.store()) {
        Panel::Ready(dashboard) => display::print_dashboard(&dashboard),
        Panel::Error(message) => bail!("{message}"),
        Panel::Empty | Panel::Loading => bail!("audit did not complete"),
    }
    Ok(())
}

async fn cmd_compare(
    ctl: &mut Controller,
    files: &[PathBuf],
    query: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    if files.len() > SLOT_COUNT {
        eprintln!(
            "  Only the first {} files are compared; {} ignored",
            SLOT_COUNT,
            files.len() - SLOT_COUNT
        );
    }
    ctl.upload_files(files).await.context("loading contracts")?;
    if let Some(query) = query {
        ctl.dispatch(Intent::SetField(Field::ComparisonQuery(query))).await?;
    }
    eprintln!(
        "  Comparing {} contracts ...",
        ctl.store().comparison_input.occupied()
    );
    ctl.dispatch(Intent::Submit(WorkflowKind::Comparison)).await?;

    match view::comparison_report(ctl.store()) {
        Panel::Ready(report) if json => {
            println!("{}", serde_json::to_string_pretty(report.result)?);
        }
        Panel::Ready(report) => display::print_comparison(&report),
        Panel::Error(message) => bail!("{message}"),
        Panel::Empty | Panel::Loading => bail!("comparison did not complete"),
    }
    Ok(())
}

async fn cmd_chat(ctl: &mut Controller, context: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = context {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let analysis: ContractAnalysis = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a saved audit", path.display()))?;
        ctl.store_mut().restore_audit(analysis);
    }
    println!("{}", view::chat(ctl.store()).context_label);
    println!("Type /clear to start over, /quit to leave.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                ctl.dispatch(Intent::ClearChat).await?;
                println!("(transcript cleared)");
                continue;
            }
            _ => {}
        }
        let before = ctl.store().chat.messages.len();
        ctl.dispatch(Intent::SendMessage(line)).await?;
        // The user's own turn is already on screen.
        for message in view::chat(ctl.store()).messages.iter().skip(before + 1) {
            display::print_message(message);
        }
    }
    Ok(())
}

fn cmd_clauses(
    search: &str,
    category: Option<ClauseCategory>,
    show: Option<&str>,
) -> anyhow::Result<()> {
    let mut store = SessionStore::default();
    store.handle(Intent::FilterClauses {
        search: search.to_string(),
        category,
    })?;
    if let Some(id) = show {
        store.handle(Intent::SelectClause(id.to_string()))?;
        if let Some(clause) = view::library(&store).selected {
            display::print_clause(clause);
        }
        return Ok(());
    }

    let library = view::library(&store);
    if library.entries.is_empty() {
        eprintln!("  No clauses match.");
    }
    display::print_clause_list(&library.entries);
    Ok(())
}
