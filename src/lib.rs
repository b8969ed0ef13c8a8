pub mod commands;
pub mod config;
pub mod error;
pub mod formats;
pub mod model;
pub mod reports;
pub mod tabulator;

pub use config::Limits;
pub use error::{ElectionError, Result};
pub use model::election::{Ballot, Candidate, Election};
pub use tabulator::{Outcome, RoundOutcome, RoundTally, Tabulation};
