use super::{CandidateTally, ElectionReport, OutcomeKind, ResultSummary, RoundResult};
use crate::model::election::Election;
use crate::tabulator::{Outcome, RoundOutcome, Tabulation};
use chrono::Utc;
use instant::Instant;

/// Resolve the election and build its report
pub fn generate_report(election: &mut Election) -> ElectionReport {
    let start = Instant::now();
    let tabulation = election.resolve();
    let duration_ms = start.elapsed().as_millis() as u64;

    build_report(election, &tabulation, duration_ms)
}

fn build_report(election: &Election, tabulation: &Tabulation, duration_ms: u64) -> ElectionReport {
    let names: Vec<String> = election
        .candidates()
        .iter()
        .map(|c| c.name.clone())
        .collect();

    let results = tabulation
        .rounds
        .iter()
        .map(|tally| {
            let counts = names
                .iter()
                .zip(&tally.votes)
                .filter_map(|(name, votes)| {
                    votes.map(|votes| CandidateTally {
                        name: name.clone(),
                        votes,
                    })
                })
                .collect();

            let eliminated = match &tally.outcome {
                RoundOutcome::Continue { eliminated } => {
                    eliminated.iter().map(|&i| names[i].clone()).collect()
                }
                _ => Vec::new(), // No eliminations in the final round
            };

            RoundResult {
                round: tally.round,
                tally: counts,
                eliminated,
                exhausted: tally.exhausted,
            }
        })
        .collect();

    let outcome = match tabulation.outcome {
        Outcome::Winner(_) => OutcomeKind::Winner,
        Outcome::Tie(_) => OutcomeKind::Tie,
    };

    let summary = ResultSummary {
        outcome,
        winners: tabulation
            .outcome
            .winners()
            .into_iter()
            .map(|i| names[i].clone())
            .collect(),
        total_rounds: tabulation.rounds.len(),
    };

    ElectionReport {
        candidates: names,
        ballot_count: election.voter_count(),
        majority: election.majority(),
        results,
        summary,
        generated_at: Utc::now(),
        duration_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn election() -> Election {
        let mut election = Election::new(vec!["Alice", "Bob", "Charlie"]).unwrap();
        for ballot in [
            ["Alice", "Bob", "Charlie"],
            ["Alice", "Bob", "Charlie"],
            ["Bob", "Alice", "Charlie"],
            ["Bob", "Charlie", "Alice"],
            ["Charlie", "Bob", "Alice"],
        ] {
            election.record_ranking(&ballot).unwrap();
        }
        election
    }

    #[test]
    fn report_names_rounds_and_eliminations() {
        let report = generate_report(&mut election());

        assert_eq!(report.candidates, vec!["Alice", "Bob", "Charlie"]);
        assert_eq!(report.ballot_count, 5);
        assert_eq!(report.majority, 2);
        assert_eq!(report.results.len(), 2);

        let first = &report.results[0];
        assert_eq!(first.round, 1);
        assert_eq!(first.eliminated, vec!["Charlie"]);
        assert_eq!(
            first.tally,
            vec![
                CandidateTally { name: "Alice".into(), votes: 2 },
                CandidateTally { name: "Bob".into(), votes: 2 },
                CandidateTally { name: "Charlie".into(), votes: 1 },
            ]
        );

        let second = &report.results[1];
        assert_eq!(second.tally.len(), 2);
        assert!(second.eliminated.is_empty());

        assert_eq!(report.summary.outcome, OutcomeKind::Winner);
        assert_eq!(report.summary.winners, vec!["Bob"]);
        assert_eq!(report.summary.total_rounds, 2);
    }

    #[test]
    fn tie_lists_every_remaining_candidate() {
        let mut election = Election::new(vec!["Alice", "Bob"]).unwrap();
        election.record_ranking(&["Alice", "Bob"]).unwrap();
        election.record_ranking(&["Bob", "Alice"]).unwrap();

        let report = generate_report(&mut election);
        assert_eq!(report.summary.outcome, OutcomeKind::Tie);
        assert_eq!(report.summary.winners, vec!["Alice", "Bob"]);
    }

    #[test]
    fn serializes_camel_case() {
        let report = generate_report(&mut election());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["ballotCount"], 5);
        assert_eq!(json["summary"]["outcome"], "winner");
        assert_eq!(json["summary"]["totalRounds"], 2);
        assert_eq!(json["results"][0]["eliminated"][0], "Charlie");
        assert!(json["generatedAt"].is_string());
    }
}
