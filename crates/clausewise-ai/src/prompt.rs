use clausewise_core::{ArbitrationSeat, ContractAnalysis, Jurisdiction};

// ── User-facing failure text ──

pub const ANALYSIS_FAILED: &str = "Analysis failed. Please try a different document format.";
pub const COMPARISON_FAILED: &str =
    "Comparison failed. Ensure files are valid PDFs or Word documents.";
pub const CHAT_FALLBACK: &str =
    "I encountered an error while processing your request. Please try again.";
pub const EMPTY_ANSWER: &str = "Error processing request.";

// ── Prompt templates ──

pub const CHAT_SYSTEM_PROMPT: &str =
    "You are Clausewise, a contract review assistant. Be professional and concise.";

const GENERAL_AUDIT: &str = "GENERAL AUDIT: Review all major commercial terms including \
Liability, Force Majeure, Termination, and Indemnity.";

pub fn audit_instruction(jurisdiction: Jurisdiction, seat: ArbitrationSeat) -> String {
    format!(
        "Analyze the following contract under the laws of {jurisdiction}.\n\
         The chosen seat of arbitration is {seat}.\n\
         Provide a detailed breakdown of risks for both Buyer and Seller.\n\
         Suggest fair redline revisions for problematic clauses."
    )
}

pub fn contract_text(text: &str) -> String {
    format!("Contract Text:\n{text}")
}

/// Instruction heading a comparison. `query` replaces the general audit
/// brief when the user supplied one.
pub fn comparison_instruction(
    document_count: usize,
    jurisdiction: Jurisdiction,
    query: Option<&str>,
) -> String {
    let focus = match query {
        Some(q) => format!("USER SPECIFIC REQUEST: \"{q}\""),
        None => GENERAL_AUDIT.to_string(),
    };
    format!(
        "You are an international contract auditor. Compare the attached {document_count} \
         contracts under {jurisdiction} law.\n\
         \n\
         PRIMARY OBJECTIVES:\n\
         1. ASCERTAIN EXPOSURE: Map the financial and operational risks for Buyer and Seller. \
         Point out where one party is heavily exposed by the other's favourable terms.\n\
         2. SPOT ERRORS: Identify contradictory clauses across the documents, logical failures, \
         missing definitions, or breaches of {jurisdiction} mandatory law.\n\
         3. CORRECTION & IMPROVEMENT: Give specific redline suggestions that improve quality, \
         fairness, and legal robustness.\n\
         \n\
         {focus}\n\
         \n\
         Be critical and precise."
    )
}

/// Label placed before each compared document; `index` is zero-based.
pub fn document_separator(index: usize, name: &str) -> String {
    format!("--- DOCUMENT {}: {name} ---", index + 1)
}

pub fn chat_system_prompt(context: Option<&ContractAnalysis>) -> String {
    match context {
        Some(analysis) => format!(
            "{CHAT_SYSTEM_PROMPT}\n\
             The user is reviewing \"{title}\" under {jurisdiction}. \
             Ground answers in that contract where relevant.",
            title = analysis.contract_title,
            jurisdiction = analysis.jurisdiction,
        ),
        None => CHAT_SYSTEM_PROMPT.to_string(),
    }
}
