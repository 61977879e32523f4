use std::io::{BufRead, Write};
use shared::models::Candidate;

use crate::form::{VotingForm, CONFIRM_RESET_PROMPT, CONFIRM_VOTE_PROMPT};

/// Line-oriented stand-in for the voting window: one ID, one choice and
/// one confirmation per vote.
pub struct Session<'a, R, W> {
    form: &'a VotingForm,
    input: R,
    output: W,
}

/// Accepts a menu number or a candidate name. Anything else counts as no
/// selection.
pub fn parse_selection(input: &str) -> Option<Candidate> {
    let input = input.trim();
    input.parse::<usize>().ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Candidate::ALL.get(i).copied())
        .or_else(|| Candidate::from_name(input))
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(form: &'a VotingForm, input: R, output: W) -> Self {
        Self { form, input, output }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        self.print_tally()?;
        loop {
            let Some(line) = self.prompt("Unique ID (or tally, reset, quit): ")? else { break };
            match line.as_str() {
                "quit" | "exit" => break,
                "tally" => self.print_tally()?,
                "reset" => {
                    let confirmed = self.confirm(CONFIRM_RESET_PROMPT)?;
                    if self.form.reset(|| confirmed)? {
                        writeln!(self.output, "All votes erased")?;
                        self.print_tally()?;
                    }
                }
                raw_id => {
                    if !self.cast(raw_id)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns `false` once input runs out.
    fn cast(&mut self, raw_id: &str) -> anyhow::Result<bool> {
        let choices: Vec<String> = Candidate::ALL.iter().enumerate()
            .map(|(i, c)| format!("({}) {}", i + 1, c))
            .collect();
        let Some(choice) = self.prompt(&format!("Vote {}: ", choices.join("  ")))? else {
            return Ok(false);
        };
        let confirmed = self.confirm(CONFIRM_VOTE_PROMPT)?;

        let outcome = self.form.submit_vote(raw_id, parse_selection(&choice), || confirmed);
        writeln!(self.output, "{}", outcome.message())?;
        if outcome.is_recorded() {
            self.print_tally()?;
        }
        Ok(true)
    }

    fn print_tally(&mut self) -> anyhow::Result<()> {
        let line = self.form.tally_line()?;
        writeln!(self.output, "Current Tally: {}", line)?;
        Ok(())
    }

    fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        let answer = self.prompt(&format!("{} [y/N]: ", question))?;
        Ok(matches!(answer.as_deref(), Some("y" | "Y" | "yes" | "Yes")))
    }

    /// Trimmed next line, `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
