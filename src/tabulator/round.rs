use crate::model::election::Election;

impl Election {
    pub fn reset_votes(&mut self) {
        for candidate in &mut self.candidates {
            candidate.votes = 0;
        }
    }

    /// Gives each ballot's vote to its highest-ranked active candidate.
    /// Votes are added to the current counts, so call [`Election::reset_votes`]
    /// first. Returns the number of exhausted ballots, which cast no vote.
    pub fn tabulate(&mut self) -> usize {
        let candidates = &mut self.candidates;
        let mut exhausted = 0;

        for ballot in &self.ballots {
            let choice = ballot
                .ranking()
                .iter()
                .copied()
                .find(|&index| candidates[index].is_active());

            match choice {
                Some(index) => candidates[index].votes += 1,
                None => exhausted += 1,
            }
        }

        exhausted
    }

    /// More than half of the original voter count. Exhausted ballots do not
    /// lower it.
    pub fn majority(&self) -> usize {
        self.voter_count() / 2
    }

    /// Index of the candidate holding a strict majority, if any.
    pub fn find_winner(&self) -> Option<usize> {
        let majority = self.majority();
        self.candidates
            .iter()
            .position(|c| c.is_active() && c.votes > majority)
    }

    /// Smallest vote count among active candidates.
    pub fn find_min(&self) -> usize {
        self.candidates
            .iter()
            .filter(|c| c.is_active())
            .fold(self.voter_count(), |min, c| min.min(c.votes))
    }

    /// Whether every active candidate holds exactly `min` votes.
    pub fn is_tie(&self, min: usize) -> bool {
        let mut remaining = 0;
        let mut at_min = 0;

        for candidate in self.candidates.iter().filter(|c| c.is_active()) {
            remaining += 1;
            if candidate.votes == min {
                at_min += 1;
            }
        }

        remaining == at_min
    }

    /// Eliminates every active candidate holding `min` votes, all in one pass.
    /// Returns their roster indices.
    pub fn eliminate(&mut self, min: usize) -> Vec<usize> {
        let mut eliminated = Vec::new();

        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            if candidate.is_active() && candidate.votes == min {
                candidate.eliminated = true;
                eliminated.push(index);
            }
        }

        eliminated
    }
}
