use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod generator;
pub mod text;

pub use generator::generate_report;
pub use text::{render_rounds, write_winners};

/// Full runoff report, as written by `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionReport {
    pub candidates: Vec<String>,
    pub ballot_count: usize,
    /// Vote count a candidate must exceed to win.
    pub majority: usize,
    pub results: Vec<RoundResult>,
    pub summary: ResultSummary,
    pub generated_at: DateTime<Utc>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTally {
    pub name: String,
    pub votes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round: u32,
    /// Candidates still in the running this round, in roster order.
    pub tally: Vec<CandidateTally>,
    pub eliminated: Vec<String>,
    pub exhausted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Winner,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub outcome: OutcomeKind,
    /// One name for a majority winner, every remaining name for a tie.
    pub winners: Vec<String>,
    pub total_rounds: usize,
}
