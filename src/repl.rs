//! Interactive REPL
//!
//! Reads commands from stdin one line at a time and dispatches them against
//! the session. A failed command prints its error and the loop keeps going;
//! only `exit` or end-of-input leaves the loop.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands::{dispatch, Flow, Session};
use crate::error::{DexError, Result};

/// The prompt shown before every command.
const PROMPT: &str = "Pokedex > ";

/// Runs the read-dispatch loop until `exit` or EOF.
pub async fn run(session: &mut Session) -> Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print_prompt()?;

        let Some(line) = lines.next_line().await? else {
            // EOF (e.g. piped input ran out) ends the session like `exit`.
            debug!("stdin closed, leaving REPL");
            break;
        };

        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = words.split_first() else {
            continue;
        };

        match dispatch(session, command, args).await {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(DexError::UnknownCommand(_)) => {
                println!("Invalid command. Use `help` for a list of commands.");
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Prints the prompt without a trailing newline and flushes it out.
fn print_prompt() -> Result<()> {
    println!();
    print!("{PROMPT}");
    std::io::stdout().flush()?;
    Ok(())
}
