//! Loading sequence shown before the prompt opens.
//!
//! Three one-shot timers feed a channel: a progress ticker, the fade start
//! and completion. Dropping the sequence aborts whichever are still pending.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const BAR_WIDTH: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootEvent {
    Progress(u8),
    Fade,
    Complete,
}

#[derive(Clone, Copy, Debug)]
pub struct BootTimings {
    pub tick: Duration,
    /// Time for the progress bar to reach 100%.
    pub fill: Duration,
    pub fade_at: Duration,
    pub done_at: Duration,
}

impl Default for BootTimings {
    fn default() -> BootTimings {
        return BootTimings {
            tick: Duration::from_millis(30),
            fill: Duration::from_millis(2500),
            fade_at: Duration::from_millis(2800),
            done_at: Duration::from_millis(3500),
        };
    }
}

pub struct BootSequence {
    handles: Vec<JoinHandle<()>>,
    events: mpsc::UnboundedReceiver<BootEvent>,
}

impl BootSequence {
    pub fn start(timings: BootTimings) -> BootSequence {
        let (tx, events) = mpsc::unbounded_channel();

        let ticker = {
            let tx = tx.clone();
            let increment = 100.0 * timings.tick.as_secs_f64() / timings.fill.as_secs_f64();
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(timings.tick);
                // The first tick completes immediately.
                interval.tick().await;
                let mut progress = 0.0;
                loop {
                    interval.tick().await;
                    progress += increment;
                    if progress >= 100.0 {
                        let _ = tx.send(BootEvent::Progress(100));
                        break;
                    }
                    if tx.send(BootEvent::Progress(progress as u8)).is_err() {
                        break;
                    }
                }
            })
        };

        let fade = {
            let tx = tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(timings.fade_at).await;
                let _ = tx.send(BootEvent::Fade);
            })
        };

        let done = tokio::spawn(async move {
            tokio::time::sleep(timings.done_at).await;
            let _ = tx.send(BootEvent::Complete);
        });

        return BootSequence {
            handles: vec![ticker, fade, done],
            events,
        };
    }

    pub async fn next_event(&mut self) -> Option<BootEvent> {
        return self.events.recv().await;
    }
}

impl Drop for BootSequence {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

fn bar(progress: u8) -> String {
    let filled = BAR_WIDTH * progress as usize / 100;
    return format!(
        "[{}{}] {:>3}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        progress
    );
}

/// Plays the loading sequence on `out` until it completes.
pub async fn run<W: Write>(timings: BootTimings, out: &mut W) -> Result<()> {
    let mut sequence = BootSequence::start(timings);
    let title = "ElyraOS".magenta().bold();

    while let Some(event) = sequence.next_event().await {
        match event {
            BootEvent::Progress(progress) => {
                queue!(
                    out,
                    MoveToColumn(0),
                    Clear(ClearType::CurrentLine),
                    Print(format!("{} loading {}", title, bar(progress)))
                )?;
            }
            BootEvent::Fade => {
                queue!(
                    out,
                    MoveToColumn(0),
                    Clear(ClearType::CurrentLine),
                    Print("Your on-chain companion is waking up...".dim())
                )?;
            }
            BootEvent::Complete => {
                queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                out.flush()?;
                break;
            }
        }
        out.flush()?;
    }

    return Ok(());
}
