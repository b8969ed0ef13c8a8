use crate::config::Limits;
use crate::error::Result;
use crate::formats::collect_election;
use crate::reports::{generate_report, render_rounds, write_winners, ElectionReport};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub candidates: Vec<String>,
    pub limits: Limits,
    /// Write the full report as JSON instead of bare names.
    pub json: bool,
    /// Trace every round on the diagnostics stream.
    pub verbose: bool,
}

/// Collects ballots from `input`, resolves the runoff and writes the result
/// to `out`. Prompts and the round trace go to `diagnostics`.
pub fn runoff<R, O, D>(
    options: &RunOptions,
    input: R,
    out: &mut O,
    diagnostics: &mut D,
) -> Result<ElectionReport>
where
    R: BufRead,
    O: Write,
    D: Write,
{
    let mut election =
        collect_election(&options.candidates, &options.limits, input, &mut *diagnostics)?;

    let report = generate_report(&mut election);

    if options.verbose {
        writeln!(diagnostics, "{}", render_rounds(&report))?;
    }

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_winners(out, &report)?;
    }

    Ok(report)
}
