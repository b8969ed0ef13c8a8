use clap::Parser;
use runoff::commands::{runoff, RunOptions};
use runoff::config::{DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_VOTERS};
use runoff::{ElectionError, Limits};
use std::io;

/// Instant-runoff election: reads the number of voters and each voter's
/// ranking from stdin, then prints the winner (or every tied candidate).
#[derive(Parser)]
#[clap(name = "runoff")]
struct Opts {
    /// Candidate names, in roster order.
    candidates: Vec<String>,
    /// Maximum number of candidates.
    #[clap(long, env = "RUNOFF_MAX_CANDIDATES", default_value_t = DEFAULT_MAX_CANDIDATES)]
    max_candidates: usize,
    /// Maximum number of voters.
    #[clap(long, env = "RUNOFF_MAX_VOTERS", default_value_t = DEFAULT_MAX_VOTERS)]
    max_voters: usize,
    /// Print the full round-by-round report as JSON.
    #[clap(long)]
    json: bool,
    /// Trace each round on stderr.
    #[clap(short, long)]
    verbose: bool,
}

impl Opts {
    fn into_run_options(self) -> RunOptions {
        RunOptions {
            candidates: self.candidates,
            limits: Limits {
                max_candidates: self.max_candidates,
                max_voters: self.max_voters,
            },
            json: self.json,
            verbose: self.verbose,
        }
    }
}

/// Line printed on stderr before exiting with `e.exit_code()`.
fn error_line(e: &ElectionError) -> String {
    match e {
        ElectionError::NoCandidates => e.to_string(),
        _ => format!("❌ {}", e),
    }
}

fn main() {
    let options = Opts::parse().into_run_options();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = runoff(
        &options,
        stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    if let Err(e) = result {
        eprintln!("{}", error_line(&e));
        std::process::exit(e.exit_code());
    }
}
