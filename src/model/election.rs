use crate::error::{ElectionError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Votes counted in the current round. Recomputed from scratch every round.
    pub votes: usize,
    /// Once set, never cleared.
    pub eliminated: bool,
}

impl Candidate {
    pub fn new(name: String) -> Candidate {
        Candidate {
            name,
            votes: 0,
            eliminated: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}

/// One voter's ranking, as roster indices. Rank 0 is the most preferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    ranking: Vec<usize>,
}

impl Ballot {
    pub fn new(ranking: Vec<usize>) -> Ballot {
        Ballot { ranking }
    }

    pub fn ranking(&self) -> &[usize] {
        &self.ranking
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Roster, ballots and round counter of a single runoff.
#[derive(Debug, Clone)]
pub struct Election {
    pub(crate) candidates: Vec<Candidate>,
    pub(crate) ballots: Vec<Ballot>,
    pub(crate) round: u32,
}

impl Election {
    pub fn new<I, S>(names: I) -> Result<Election>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut candidates: Vec<Candidate> = Vec::new();

        for name in names {
            let name = name.into();
            if candidates.iter().any(|c| c.name == name) {
                return Err(ElectionError::DuplicateCandidate(name));
            }
            candidates.push(Candidate::new(name));
        }

        if candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }

        Ok(Election {
            candidates,
            ballots: Vec::new(),
            round: 0,
        })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn ballots(&self) -> &[Ballot] {
        &self.ballots
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn voter_count(&self) -> usize {
        self.ballots.len()
    }

    /// Number of the last round run, 0 before the first.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn active_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.is_active()).count()
    }

    /// Case-sensitive exact match against the roster.
    pub fn candidate_index(&self, name: &str) -> Option<usize> {
        self.candidates.iter().position(|c| c.name == name)
    }

    /// Validates one ranked choice and returns the roster index to store at
    /// `ballot[voter][rank]`.
    pub fn vote(&self, voter: usize, rank: usize, name: &str) -> Result<usize> {
        self.candidate_index(name)
            .ok_or_else(|| ElectionError::InvalidVote {
                voter,
                rank,
                name: name.to_string(),
            })
    }

    /// Records a complete ballot. Ballots must rank as many entries as there
    /// are candidates, and must be recorded before the first round.
    pub fn record_ballot(&mut self, ballot: Ballot) -> Result<()> {
        let voter = self.ballots.len();

        if self.round > 0 {
            return Err(ElectionError::BallotsClosed(self.round));
        }
        if ballot.len() != self.candidates.len() {
            return Err(ElectionError::IncompleteBallot {
                voter,
                given: ballot.len(),
                expected: self.candidates.len(),
            });
        }
        if let Some((rank, index)) = ballot
            .ranking()
            .iter()
            .enumerate()
            .find(|(_, &i)| i >= self.candidates.len())
        {
            return Err(ElectionError::InvalidVote {
                voter,
                rank,
                name: index.to_string(),
            });
        }

        self.ballots.push(ballot);
        Ok(())
    }

    /// Resolves every name through [`Election::vote`] and records the ballot.
    /// Nothing is recorded if any name fails to resolve.
    pub fn record_ranking<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let voter = self.ballots.len();
        let ranking = names
            .iter()
            .enumerate()
            .map(|(rank, name)| self.vote(voter, rank, name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        self.record_ballot(Ballot::new(ranking))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn election() -> Election {
        Election::new(vec!["Alice", "Bob", "Charlie"]).unwrap()
    }

    #[test]
    fn roster_starts_active_with_no_votes() {
        let election = election();
        assert_eq!(election.candidate_count(), 3);
        assert_eq!(election.active_count(), 3);
        assert_eq!(election.round(), 0);
        assert!(election.candidates().iter().all(|c| c.votes == 0));
    }

    #[test]
    fn empty_roster_is_rejected() {
        let names: Vec<String> = Vec::new();
        assert!(matches!(
            Election::new(names),
            Err(ElectionError::NoCandidates)
        ));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        assert!(matches!(
            Election::new(vec!["Alice", "Bob", "Alice"]),
            Err(ElectionError::DuplicateCandidate(name)) if name == "Alice"
        ));
    }

    #[test]
    fn vote_matches_case_sensitively() {
        let election = election();
        assert_eq!(election.vote(0, 0, "Bob").unwrap(), 1);
        assert!(matches!(
            election.vote(2, 1, "bob"),
            Err(ElectionError::InvalidVote { voter: 2, rank: 1, .. })
        ));
        assert!(election.vote(0, 0, "Bob ").is_err());
    }

    #[test]
    fn record_ranking_stores_indices() {
        let mut election = election();
        election
            .record_ranking(&["Charlie", "Alice", "Bob"])
            .unwrap();
        assert_eq!(election.ballots()[0].ranking(), &[2, 0, 1]);
        assert_eq!(election.voter_count(), 1);
    }

    #[test]
    fn invalid_ranking_records_nothing() {
        let mut election = election();
        let err = election
            .record_ranking(&["Alice", "Dave", "Bob"])
            .unwrap_err();
        assert!(matches!(err, ElectionError::InvalidVote { rank: 1, .. }));
        assert_eq!(election.voter_count(), 0);
    }

    #[test]
    fn short_ballot_is_rejected() {
        let mut election = election();
        assert!(matches!(
            election.record_ranking(&["Alice", "Bob"]),
            Err(ElectionError::IncompleteBallot {
                given: 2,
                expected: 3,
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut election = election();
        assert!(election.record_ballot(Ballot::new(vec![0, 1, 7])).is_err());
        assert!(election.record_ballot(Ballot::new(vec![0, 1, 2])).is_ok());
    }

    #[test]
    fn repeated_names_are_accepted() {
        let mut election = election();
        assert!(election.record_ranking(&["Alice", "Alice", "Alice"]).is_ok());
    }
}
