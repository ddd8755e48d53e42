//! The read-resolve-write loop.
//!
//! [`run`] reads one [`Command`] per input line, submits it, and writes the
//! outcome as one [`Outbound`] line. Blank lines are skipped. The loop ends
//! at end of input or when the session ends.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use furrow_core::{EndReason, GameSession};
use furrow_types::Command;
use furrow_world::RandomSource;

use crate::error::EngineError;
use crate::protocol::Outbound;

/// Drive `session` from `input` until it ends or input runs out.
///
/// Returns why the session ended, or `None` if input ran out first.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails. Bad
/// commands are answered with an `error` line and the loop continues.
pub fn run<R, I, W>(
    session: &mut GameSession<R>,
    input: I,
    mut output: W,
) -> Result<Option<EndReason>, EngineError>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    write_line(&mut output, &Outbound::welcome(session))?;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index.saturating_add(1);

        let command: Command = match serde_json::from_str(line) {
            Ok(command) => command,
            Err(err) => {
                warn!(line = line_number, error = %err, "Unreadable command");
                write_line(
                    &mut output,
                    &Outbound::Error {
                        error: format!("invalid command: {err}"),
                    },
                )?;
                continue;
            }
        };

        match session.submit(&command) {
            Ok(report) => {
                debug!(line = line_number, action = %report.action, success = report.success, "Reported");
                write_line(&mut output, &Outbound::report(session, &report))?;
            }
            Err(err) => {
                warn!(line = line_number, error = %err, "Command refused");
                write_line(
                    &mut output,
                    &Outbound::Error {
                        error: err.to_string(),
                    },
                )?;
            }
        }

        if let Some(reason) = session.outcome() {
            write_line(&mut output, &Outbound::game_over(session, reason))?;
            return Ok(Some(reason));
        }
    }

    info!(day = session.day(), "Input closed");
    Ok(None)
}

fn write_line<W: Write, T: Serialize>(output: &mut W, message: &T) -> Result<(), EngineError> {
    serde_json::to_writer(&mut *output, message)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}
