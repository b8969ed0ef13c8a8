// Instant-runoff tabulation: repeated count / winner / tie / eliminate rounds

mod round;

use crate::model::election::Election;

/// Result of a single counting round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A candidate holds a strict majority.
    Winner(usize),
    /// Every remaining candidate holds the same count.
    Tied(Vec<usize>),
    /// The listed candidates were eliminated; another round follows.
    Continue { eliminated: Vec<usize> },
}

impl RoundOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::Continue { .. })
    }
}

/// Counts as they stood at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTally {
    pub round: u32,
    /// Per roster entry; `None` for candidates eliminated before this round.
    pub votes: Vec<Option<usize>>,
    pub exhausted: usize,
    pub outcome: RoundOutcome,
}

/// Final result of a runoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Winner(usize),
    /// Joint winners, in roster order.
    Tie(Vec<usize>),
}

impl Outcome {
    pub fn winners(&self) -> Vec<usize> {
        match self {
            Outcome::Winner(index) => vec![*index],
            Outcome::Tie(indices) => indices.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabulation {
    pub rounds: Vec<RoundTally>,
    pub outcome: Outcome,
}

impl Election {
    /// Runs one round: reset, tabulate, then check for a winner, a full tie,
    /// or eliminate the trailing candidates.
    pub fn run_round(&mut self) -> RoundTally {
        self.round += 1;
        self.reset_votes();
        let exhausted = self.tabulate();

        let votes = self
            .candidates
            .iter()
            .map(|c| if c.is_active() { Some(c.votes) } else { None })
            .collect();

        let outcome = if let Some(winner) = self.find_winner() {
            RoundOutcome::Winner(winner)
        } else {
            let min = self.find_min();
            if self.is_tie(min) {
                RoundOutcome::Tied(self.active_indices())
            } else {
                RoundOutcome::Continue {
                    eliminated: self.eliminate(min),
                }
            }
        };

        RoundTally {
            round: self.round,
            votes,
            exhausted,
            outcome,
        }
    }

    /// Runs rounds until a winner emerges or all remaining candidates tie.
    ///
    /// Every non-terminal round eliminates at least one candidate and a tie is
    /// detected before the last ones could go, so this always terminates.
    pub fn resolve(&mut self) -> Tabulation {
        let mut rounds = Vec::new();

        loop {
            let tally = self.run_round();
            let outcome = match &tally.outcome {
                RoundOutcome::Winner(index) => Some(Outcome::Winner(*index)),
                RoundOutcome::Tied(indices) => Some(Outcome::Tie(indices.clone())),
                RoundOutcome::Continue { .. } => None,
            };
            rounds.push(tally);

            if let Some(outcome) = outcome {
                return Tabulation { rounds, outcome };
            }
        }
    }

    fn active_indices(&self) -> Vec<usize> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_active())
            .map(|(index, _)| index)
            .collect()
    }
}
