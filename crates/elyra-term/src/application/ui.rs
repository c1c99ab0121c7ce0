//! Interactive prompt loop and transcript rendering.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::cursor::{MoveTo, MoveToPreviousLine};
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use crate::domain::models::{Line, LineKind, TerminalGateway};
use crate::domain::services::{texts, Interpreter, SessionBuffer, Submission};

fn color(kind: LineKind) -> Option<Color> {
    return match kind {
        LineKind::Input => Some(Color::Cyan),
        LineKind::System => Some(Color::Magenta),
        LineKind::Error => Some(Color::Red),
        LineKind::Output => None,
    };
}

/// Prints lines appended since the last flush, or the whole transcript
/// after a clear.
pub struct Renderer {
    epoch: u64,
    printed: usize,
    styled: bool,
}

impl Renderer {
    pub fn new(styled: bool) -> Renderer {
        return Renderer {
            epoch: 0,
            printed: 0,
            styled,
        };
    }

    pub fn flush<W: Write>(&mut self, interpreter: &Interpreter, out: &mut W) -> Result<()> {
        let (epoch, printed) = (self.epoch, self.printed);
        let (current_epoch, fresh) = interpreter.read(|buffer: &SessionBuffer| {
            let from = if buffer.epoch() == epoch {
                printed.min(buffer.len())
            } else {
                0
            };
            (buffer.epoch(), buffer.lines()[from..].to_vec())
        });

        if current_epoch != self.epoch {
            if self.styled {
                queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            self.epoch = current_epoch;
            self.printed = 0;
        }

        for line in &fresh {
            self.write_line(out, line)?;
        }
        self.printed += fresh.len();
        out.flush()?;

        return Ok(());
    }

    fn write_line<W: Write>(&self, out: &mut W, line: &Line) -> Result<()> {
        match color(line.kind).filter(|_| self.styled) {
            Some(color) => queue!(
                out,
                PrintStyledContent(line.content.as_str().with(color)),
                Print("\n")
            )?,
            None => queue!(out, Print(&line.content), Print("\n"))?,
        }
        return Ok(());
    }
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    queue!(out, PrintStyledContent(format!("{} ", texts::PROMPT).cyan()))?;
    out.flush()?;
    return Ok(());
}

/// Runs the interactive terminal until EOF or Ctrl+C.
pub async fn start_loop(interpreter: Arc<Interpreter>) -> Result<()> {
    let mut stdout = io::stdout();
    let interactive = io::stdin().is_terminal();
    let styled = stdout.is_terminal();
    let input = BufReader::new(tokio::io::stdin());
    return drive(interpreter, input, &mut stdout, interactive, styled).await;
}

/// Feeds `input` to the interpreter one line at a time.
///
/// Input is not read while a command is in flight, so every accepted command
/// runs to completion and is printed before the next line, or EOF, is seen.
pub async fn drive<R, W>(
    interpreter: Arc<Interpreter>,
    input: R,
    out: &mut W,
    interactive: bool,
    styled: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut renderer = Renderer::new(styled);
    renderer.flush(&interpreter, out)?;
    prompt(out)?;

    let mut input = input.lines();
    let mut in_flight: Option<JoinHandle<Submission>> = None;
    let mut refresh = tokio::time::interval(Duration::from_millis(100));

    loop {
        tokio::select! {
            line = input.next_line(), if in_flight.is_none() => {
                let Some(line) = line? else {
                    break;
                };

                if interactive {
                    // Replace the typed line with its coloured echo.
                    queue!(out, MoveToPreviousLine(1), Clear(ClearType::CurrentLine))?;
                }

                let interpreter = interpreter.clone();
                in_flight = Some(tokio::spawn(async move { interpreter.submit(&line).await }));
            }
            result = async {
                match in_flight.as_mut() {
                    Some(task) => task.await,
                    None => std::future::pending().await,
                }
            }, if in_flight.is_some() => {
                in_flight = None;
                match result {
                    Ok(Submission::Rejected) => {
                        queue!(out, PrintStyledContent("Loading...\n".magenta()))?;
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("Command task failed: {}", e),
                }
                renderer.flush(&interpreter, out)?;
                prompt(out)?;
            }
            _ = refresh.tick(), if in_flight.is_some() => {
                renderer.flush(&interpreter, out)?;
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Received Ctrl+C, leaving terminal");
                break;
            }
        }
    }

    if let Some(task) = in_flight {
        task.abort();
    }
    queue!(out, Print("\n"))?;
    out.flush()?;
    return Ok(());
}

/// Runs one command and prints its output without styling. Fails when the
/// command produced an error line.
pub async fn run_once(gateway: Arc<dyn TerminalGateway>, command: &str) -> Result<()> {
    let interpreter = Interpreter::with_buffer(gateway, SessionBuffer::new());
    interpreter.submit(command).await;

    let mut stdout = io::stdout();
    let mut failure = None;
    for line in interpreter.lines() {
        match line.kind {
            LineKind::Input => {}
            LineKind::Error => failure = Some(line.content),
            _ => writeln!(stdout, "{}", line.content)?,
        }
    }
    stdout.flush()?;

    if let Some(message) = failure {
        bail!(message);
    }
    return Ok(());
}
