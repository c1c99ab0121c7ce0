//! Chat screen: canned replies with a simulated typing pause.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use elyra_core::chat;
use rand::Rng;
use tokio::io::{AsyncBufReadExt, BufReader};

/// A random pause between one and two seconds.
pub fn typing_delay() -> Duration {
    return Duration::from_millis(rand::rng().random_range(1000..2000));
}

fn say<W: Write>(out: &mut W, text: &str) -> Result<()> {
    queue!(
        out,
        PrintStyledContent("Elyra: ".magenta().bold()),
        Print(text),
        Print("\n\n")
    )?;
    out.flush()?;
    return Ok(());
}

/// Runs the chat REPL until EOF or Ctrl+C.
pub async fn run() -> Result<()> {
    let mut stdout = io::stdout();
    say(&mut stdout, chat::GREETING)?;

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    loop {
        queue!(stdout, PrintStyledContent("you> ".cyan()))?;
        stdout.flush()?;

        let line = tokio::select! {
            line = input.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(message) = line else {
            break;
        };
        if message.trim().is_empty() {
            continue;
        }

        queue!(stdout, PrintStyledContent("Elyra is typing...".dim()))?;
        stdout.flush()?;
        tokio::time::sleep(typing_delay()).await;
        queue!(stdout, Print("\r"), crossterm::terminal::Clear(crossterm::terminal::ClearType::CurrentLine))?;

        say(&mut stdout, chat::reply(&message))?;
    }

    return Ok(());
}
