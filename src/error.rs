#[derive(Debug, thiserror::Error)]
pub enum ElectionError {
    #[error("Usage: runoff [candidate ...]")]
    NoCandidates,
    #[error("Duplicate candidate: {0}")]
    DuplicateCandidate(String),
    #[error("Maximum number of candidates is {max}")]
    TooManyCandidates { max: usize, given: usize },
    #[error("Maximum number of voters is {max}")]
    TooManyVoters { max: usize, given: usize },
    #[error("Invalid vote: voter {voter}, rank {rank}: {name:?}")]
    InvalidVote {
        voter: usize,
        rank: usize,
        name: String,
    },
    #[error("Ballot for voter {voter} ranks {given} of {expected} candidates")]
    IncompleteBallot {
        voter: usize,
        given: usize,
        expected: usize,
    },
    #[error("Ballots are closed once counting has started (round {0})")]
    BallotsClosed(u32),
    #[error("Input ended while reading {0}")]
    UnexpectedEof(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ElectionError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ElectionError::NoCandidates => 1,
            ElectionError::TooManyCandidates { .. } => 2,
            ElectionError::TooManyVoters { .. } => 3,
            ElectionError::InvalidVote { .. } | ElectionError::IncompleteBallot { .. } => 4,
            ElectionError::DuplicateCandidate(_)
            | ElectionError::BallotsClosed(_)
            | ElectionError::UnexpectedEof(_)
            | ElectionError::Io(_)
            | ElectionError::Json(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, ElectionError>;
