mod runoff;

pub use runoff::{runoff, RunOptions};
