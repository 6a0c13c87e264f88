//! Terminal rendering for audit dashboards, comparison reports, chat turns,
//! and the clause library.

use chrono::Local;
use clausewise_core::{ArbitrationSeat, ChatMessage, ClauseDetail, Jurisdiction, RiskLevel, Role};
use clausewise_session::view::{ComparisonReportView, DashboardView};

const MAX_LIST_ITEMS: usize = 10;

// ── Public API ──

pub fn print_dashboard(view: &DashboardView<'_>) {
    println!("=== {} ===", view.title);
    println!("{}", view.jurisdiction);
    println!();

    println!("Scores");
    println!("  {:<26} {:.0}/100", "Risk", view.risk_score);
    println!("  {:<26} {:.0}/100", "Safety", view.safety_score);
    println!();

    println!("Summary");
    print_wrapped(view.summary);
    println!("  {:<26} {}", "Buyer exposure", view.buyer_exposure);
    println!("  {:<26} {}", "Seller exposure", view.seller_exposure);
    println!();

    if !view.histogram.is_empty() {
        println!("Risk Distribution");
        // Most severe first.
        for level in RiskLevel::ALL.iter().rev() {
            if let Some(count) = view.histogram.get(level) {
                println!("  {:<26} {:>3}  {}", level.as_str(), count, "#".repeat(*count));
            }
        }
        println!();
    }

    if !view.exposures.is_empty() {
        println!("Exposures ({})", view.exposures.len());
        for (i, exposure) in view.exposures.iter().enumerate() {
            println!(
                "  {}. [{}] {}",
                i + 1,
                exposure.risk_level.as_str(),
                exposure.clause_title
            );
            println!("      {:<22} {}", "Original", truncate(&exposure.original_text, 100));
            println!("      {:<22} {}", "Impact on buyer", exposure.impact_on_buyer);
            println!("      {:<22} {}", "Impact on seller", exposure.impact_on_seller);
            println!("      {:<22} {}", "Why", exposure.explanation);
            println!("      {:<22} {}", "Suggested revision", exposure.suggested_revision);
        }
        println!();
    }

    print_list("Missing Clauses", view.missing_clauses);
}

pub fn print_comparison(view: &ComparisonReportView<'_>) {
    let result = view.result;
    println!(
        "=== Comparison of {} contracts ({}) ===",
        view.document_count, view.jurisdiction
    );
    println!();

    println!("Summary");
    print_wrapped(&result.summary);
    println!();

    print_list("Conflict Alerts", &result.conflict_alerts);

    if !result.holistic_exposure_for_parties.is_empty() {
        println!("Party Exposure");
        for party in &result.holistic_exposure_for_parties {
            println!("  {:<26} {}", party.party, party.exposure_level);
            if !party.critical_warning.is_empty() {
                println!("      ! {}", party.critical_warning);
            }
        }
        println!();
    }

    if !result.cross_contract_exposures.is_empty() {
        println!("Cross-Contract Exposure");
        for exposure in &result.cross_contract_exposures {
            println!("  {} (most favourable: {})", exposure.category, exposure.winner);
            for finding in &exposure.findings {
                println!(
                    "      {:<22} [{}] {}",
                    finding.contract_name,
                    finding.risk_level.as_str(),
                    finding.summary
                );
            }
            println!("      -> {}", exposure.recommendation);
        }
        println!();
    }

    if !result.spotted_errors.is_empty() {
        println!("Spotted Errors ({})", result.spotted_errors.len());
        for error in &result.spotted_errors {
            println!(
                "  [{}] {:<20} {}",
                error.severity.as_str(),
                error.location,
                error.description
            );
        }
        println!();
    }

    if !result.suggested_improvements.is_empty() {
        println!("Suggested Improvements ({})", result.suggested_improvements.len());
        for improvement in &result.suggested_improvements {
            println!("  - {}", truncate(&improvement.original_clause, 80));
            println!("      {:<22} {}", "Change", improvement.suggested_change);
            println!("      {:<22} {}", "Benefit", improvement.benefit);
        }
        println!();
    }
}

pub fn print_message(message: &ChatMessage) {
    let who = match message.role {
        Role::User => "you",
        Role::Assistant => "clausewise",
    };
    let at = message.timestamp.with_timezone(&Local).format("%H:%M");
    println!("[{at}] {who}: {}", message.text);
    println!();
}

pub fn print_clause_list(entries: &[&ClauseDetail]) {
    for clause in entries {
        println!(
            "  {:<10} {:<22} {}",
            clause.id,
            clause.category.label(),
            clause.title
        );
    }
}

pub fn print_clause(clause: &ClauseDetail) {
    println!("=== {} ===", clause.title);
    println!("{} ({})", clause.category.label(), clause.id);
    println!();
    println!("{}", clause.explanation);
    println!();

    println!("Standard Language");
    print_wrapped(clause.standard_language);
    println!();
    println!("Pro-Buyer Variation");
    print_wrapped(clause.pro_buyer_variation);
    println!();
    println!("Pro-Seller Variation");
    print_wrapped(clause.pro_seller_variation);
    println!();

    println!("Implications");
    println!("  {:<26} {}", "Buyer", clause.buyer_implications);
    println!("  {:<26} {}", "Seller", clause.seller_implications);
}

pub fn print_options() {
    println!("Jurisdictions (--jurisdiction)");
    for j in Jurisdiction::ALL {
        let marker = if j == Jurisdiction::default() { "*" } else { " " };
        println!(" {marker}{:<26} {}", j.slug(), j.label());
    }
    println!();
    println!("Arbitration seats (--seat)");
    for s in ArbitrationSeat::ALL {
        let marker = if s == ArbitrationSeat::default() { "*" } else { " " };
        println!(" {marker}{:<26} {}", s.slug(), s.label());
    }
}

// ── Helpers ──

fn print_list(header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{header} ({})", items.len());
    for item in items.iter().take(MAX_LIST_ITEMS) {
        println!("  - {item}");
    }
    if items.len() > MAX_LIST_ITEMS {
        println!("  ... and {} more", items.len() - MAX_LIST_ITEMS);
    }
    println!();
}

fn print_wrapped(text: &str) {
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        println!("  {}", line.trim());
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("§§§§§§§§", 5), "§§...");
    }
}
