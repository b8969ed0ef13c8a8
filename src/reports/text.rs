use super::{ElectionReport, OutcomeKind};
use colored::*;
use itertools::Itertools;
use std::io::Write;

/// Writes the winning names, one per line in roster order.
pub fn write_winners<W: Write>(out: &mut W, report: &ElectionReport) -> std::io::Result<()> {
    for name in &report.summary.winners {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Human-readable round-by-round trace.
pub fn render_rounds(report: &ElectionReport) -> String {
    let mut lines = vec![format!(
        "📋 {} candidates, {} ballots, majority is more than {}",
        report.candidates.len().to_string().bright_yellow(),
        report.ballot_count.to_string().bright_yellow(),
        report.majority
    )];

    for result in &report.results {
        let tally = result
            .tally
            .iter()
            .map(|t| format!("{} {}", t.name, t.votes.to_string().bold()))
            .join(", ");
        lines.push(format!("  📊 Round {}: {}", result.round, tally));

        if result.exhausted > 0 {
            lines.push(format!(
                "     {} exhausted",
                result.exhausted.to_string().dimmed()
            ));
        }
        if !result.eliminated.is_empty() {
            lines.push(format!(
                "     ✂️  Eliminated: {}",
                result.eliminated.iter().join(", ").red()
            ));
        }
    }

    let winners = report.summary.winners.iter().join(", ");
    lines.push(match report.summary.outcome {
        OutcomeKind::Winner => format!(
            "🏆 Winner after {} round(s): {}",
            report.summary.total_rounds,
            winners.bright_green().bold()
        ),
        OutcomeKind::Tie => format!(
            "🤝 Tie after {} round(s): {}",
            report.summary.total_rounds,
            winners.bright_cyan().bold()
        ),
    });

    lines.join("\n")
}
