use std::io::{BufRead, Write};
use shared::error::Error;
use shared::tally::Tally;
use tracing::info;

use crate::config::Command;
use crate::form::{SubmitOutcome, VotingForm, CONFIRM_RESET_PROMPT, CONFIRM_VOTE_PROMPT};
use crate::session::Session;

pub fn run<R: BufRead, W: Write>(
    form: &VotingForm,
    command: Command,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()> {
    match command {
        Command::Interactive => Session::new(form, input, output).run(),
        Command::Vote { id, candidate, yes } => {
            let confirmed = yes || ask(&mut input, &mut output, CONFIRM_VOTE_PROMPT)?;
            let outcome = form.submit_vote(&id, Some(candidate), || confirmed);
            writeln!(output, "{}", outcome.message())?;
            match outcome {
                SubmitOutcome::Recorded(_) | SubmitOutcome::Cancelled => Ok(()),
                SubmitOutcome::Rejected(err) => Err(Error::from(err).into()),
                SubmitOutcome::Failed(err) => Err(err.into()),
            }
        }
        Command::Tally { json } => {
            let tally = form.tally()?;
            if json {
                writeln!(output, "{}", serde_json::to_string_pretty(&tally)?)?;
            } else {
                writeln!(output, "Current Tally: {}", tally)?;
                writeln!(output, "{}", leader_line(&tally))?;
            }
            Ok(())
        }
        Command::List => {
            let rows = form.store().rows()?;
            writeln!(output, "ID\tVote")?;
            for row in rows {
                writeln!(output, "{}\t{}", row.id, row.vote)?;
            }
            Ok(())
        }
        Command::Reset { yes } => {
            let confirmed = yes || ask(&mut input, &mut output, CONFIRM_RESET_PROMPT)?;
            if form.reset(|| confirmed)? {
                info!("Votes reset from the command line");
                writeln!(output, "All votes erased")?;
            } else {
                writeln!(output, "Reset cancelled")?;
            }
            Ok(())
        }
        Command::Status => {
            let store = form.store();
            writeln!(output, "Record file: {}", store.data_file().display())?;
            writeln!(output, "Mirror file: {}", store.backup_file().display())?;
            writeln!(output, "Rows: {}", store.rows()?.len())?;
            writeln!(output, "{}", leader_line(&form.tally()?))?;
            writeln!(output, "Mirror in sync: {}", store.mirror_in_sync()?)?;
            Ok(())
        }
    }
}

fn leader_line(tally: &Tally) -> String {
    match tally.leader() {
        Some(candidate) => format!("Leading: {}", candidate),
        None => "Leading: tie".into(),
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<bool> {
    write!(output, "{} [y/N]: ", question)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
