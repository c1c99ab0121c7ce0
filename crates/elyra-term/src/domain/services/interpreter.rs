#[cfg(test)]
#[path = "interpreter_test.rs"]
mod tests;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::models::{Command, GatewayError, Line, LineKind, ParsedCommand, TerminalGateway};
use crate::domain::services::{render, texts, SessionBuffer};

/// Outcome of handing one input line to the interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Blank input. Nothing was appended.
    Empty,
    /// Another command was still in flight. Nothing was appended.
    Rejected,
    /// The command ran to completion.
    Accepted,
}

/// Dispatches parsed commands and records their output in the session
/// buffer.
///
/// Only one command runs at a time. The buffer lock is never held across a
/// gateway call, so readers can render while a command is waiting.
pub struct Interpreter {
    gateway: Arc<dyn TerminalGateway>,
    buffer: Mutex<SessionBuffer>,
    busy: AtomicBool,
}

/// Releases the busy flag when the in-flight command ends, however it ends.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Interpreter {
    pub fn new(gateway: Arc<dyn TerminalGateway>) -> Interpreter {
        return Interpreter::with_buffer(gateway, SessionBuffer::with_welcome());
    }

    pub fn with_buffer(gateway: Arc<dyn TerminalGateway>, buffer: SessionBuffer) -> Interpreter {
        return Interpreter {
            gateway,
            buffer: Mutex::new(buffer),
            busy: AtomicBool::new(false),
        };
    }

    pub fn is_busy(&self) -> bool {
        return self.busy.load(Ordering::Acquire);
    }

    /// Runs `f` against the current transcript.
    pub fn read<R>(&self, f: impl FnOnce(&SessionBuffer) -> R) -> R {
        return f(&self.buffer());
    }

    pub fn lines(&self) -> Vec<Line> {
        return self.read(|buffer| buffer.lines().to_vec());
    }

    pub async fn submit(&self, raw: &str) -> Submission {
        let Some(parsed) = ParsedCommand::parse(raw) else {
            return Submission::Empty;
        };

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("Rejected '{}' while another command is running", parsed.name);
            return Submission::Rejected;
        }
        let _guard = BusyGuard(&self.busy);

        log::debug!("Dispatching '{}' with {} arg(s)", parsed.name, parsed.args.len());
        self.dispatch(raw, &parsed).await;
        return Submission::Accepted;
    }

    fn buffer(&self) -> MutexGuard<'_, SessionBuffer> {
        return self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
    }

    fn append(&self, kind: LineKind, content: &str) {
        self.buffer().append(kind, content);
    }

    fn fail(&self, command: &str, err: GatewayError) {
        log::error!("Command '{}' failed: {}", command, err);
        self.append(LineKind::Error, texts::GENERIC_ERROR);
    }

    async fn dispatch(&self, raw: &str, parsed: &ParsedCommand) {
        let command = Command::from(parsed);
        if command == Command::Clear {
            self.buffer().clear();
            return;
        }

        self.append(LineKind::Input, &texts::input_echo(raw));

        match command {
            Command::Clear => {}
            Command::Help => self.append(LineKind::Output, texts::HELP_TEXT),
            Command::About => self.append(LineKind::Output, texts::ABOUT_TEXT),
            Command::Status => self.append(LineKind::Output, texts::STATUS_TEXT),
            Command::Trending => match self.gateway.trending().await {
                Ok(tokens) => self.append(LineKind::Output, &render::trending(&tokens)),
                Err(e) => self.fail("trending", e),
            },
            Command::NewPairs => match self.gateway.new_pairs().await {
                Ok(pairs) => self.append(LineKind::Output, &render::new_pairs(&pairs)),
                Err(e) => self.fail("newpairs", e),
            },
            Command::Sol => match self.gateway.sol().await {
                Ok(status) => self.append(LineKind::Output, &render::sol(&status)),
                Err(e) => self.fail("sol", e),
            },
            Command::Scan { address: None } => self.append(LineKind::Error, texts::SCAN_USAGE),
            Command::Scan {
                address: Some(address),
            } => {
                self.append(LineKind::Output, &texts::scanning(&address));
                match self.gateway.scan(&address).await {
                    Ok(report) => self.append(LineKind::Output, &render::scan_panel(&report)),
                    Err(GatewayError::NotFound(detail)) => {
                        log::warn!("Scan found nothing: {}", detail);
                        self.append(LineKind::Error, texts::TOKEN_NOT_FOUND);
                    }
                    Err(e) => self.fail("scan", e),
                }
            }
            Command::Ask { question, .. } if question.is_empty() => {
                self.append(LineKind::Error, texts::ASK_USAGE)
            }
            Command::Ask { question, address } => {
                self.append(LineKind::Output, texts::THINKING);
                match self.gateway.ask(&question, address.as_deref()).await {
                    Ok(answer) => self.append(LineKind::Output, &texts::answer(&answer)),
                    Err(e) => self.fail("ask", e),
                }
            }
            Command::Unknown(name) => {
                self.append(LineKind::Error, &texts::command_not_found(&name))
            }
        }
    }
}
