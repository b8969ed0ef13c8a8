use crate::error::{ElectionError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_CANDIDATES: usize = 9;
pub const DEFAULT_MAX_VOTERS: usize = 100;

/// Capacity limits enforced while collecting input. The tabulator itself
/// assumes its input is already within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub max_candidates: usize,
    pub max_voters: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_voters: DEFAULT_MAX_VOTERS,
        }
    }
}

impl Limits {
    pub fn check_candidates(&self, given: usize) -> Result<()> {
        if given > self.max_candidates {
            return Err(ElectionError::TooManyCandidates {
                max: self.max_candidates,
                given,
            });
        }
        Ok(())
    }

    pub fn check_voters(&self, given: usize) -> Result<()> {
        if given > self.max_voters {
            return Err(ElectionError::TooManyVoters {
                max: self.max_voters,
                given,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let limits = Limits::default();
        assert_eq!(limits.max_candidates, 9);
        assert_eq!(limits.max_voters, 100);
    }

    #[test]
    fn bounds_are_inclusive() {
        let limits = Limits::default();
        assert!(limits.check_candidates(9).is_ok());
        assert!(matches!(
            limits.check_candidates(10),
            Err(ElectionError::TooManyCandidates { max: 9, given: 10 })
        ));
        assert!(limits.check_voters(100).is_ok());
        assert!(matches!(
            limits.check_voters(101),
            Err(ElectionError::TooManyVoters { max: 100, given: 101 })
        ));
    }

    #[test]
    fn deserializes_camel_case() {
        let limits: Limits =
            serde_json::from_str(r#"{"maxCandidates": 4, "maxVoters": 12}"#).unwrap();
        assert_eq!(
            limits,
            Limits {
                max_candidates: 4,
                max_voters: 12
            }
        );
    }
}
