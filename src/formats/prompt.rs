use crate::config::Limits;
use crate::error::{ElectionError, Result};
use crate::model::election::{Ballot, Election};
use std::io::{BufRead, Write};

/// Line-oriented ballot collector: asks for the voter count, then every
/// voter's ranking one rank at a time.
pub struct PromptReader<R, W> {
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        Self { input, prompts }
    }

    fn ask(&mut self, prompt: &str, what: &str) -> Result<String> {
        write!(self.prompts, "{}", prompt)?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ElectionError::UnexpectedEof(what.to_string()));
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Re-prompts until a non-negative integer is entered.
    pub fn read_voter_count(&mut self, limits: &Limits) -> Result<usize> {
        let count = loop {
            let answer = self.ask("Number of voters: ", "number of voters")?;
            if let Ok(count) = answer.trim().parse::<usize>() {
                break count;
            }
        };

        limits.check_voters(count)?;
        Ok(count)
    }

    /// Reads `voters` complete rankings. The first unknown name aborts.
    pub fn read_ballots(&mut self, election: &mut Election, voters: usize) -> Result<()> {
        let ranks = election.candidate_count();

        for voter in 0..voters {
            let mut ranking = Vec::with_capacity(ranks);
            for rank in 0..ranks {
                let name = self.ask(
                    &format!("Rank {}: ", rank + 1),
                    &format!("voter {} rank {}", voter + 1, rank + 1),
                )?;
                ranking.push(election.vote(voter, rank, &name)?);
            }
            election.record_ballot(Ballot::new(ranking))?;
            writeln!(self.prompts)?;
        }

        Ok(())
    }
}

/// Builds an election from a roster and ballots read from `input`.
pub fn collect_election<R, W>(
    names: &[String],
    limits: &Limits,
    input: R,
    prompts: W,
) -> Result<Election>
where
    R: BufRead,
    W: Write,
{
    if names.is_empty() {
        return Err(ElectionError::NoCandidates);
    }
    limits.check_candidates(names.len())?;

    let mut election = Election::new(names.iter().cloned())?;
    let mut reader = PromptReader::new(input, prompts);
    let voters = reader.read_voter_count(limits)?;
    reader.read_ballots(&mut election, voters)?;

    Ok(election)
}
