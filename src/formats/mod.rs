pub mod prompt;

pub use prompt::{collect_election, PromptReader};
