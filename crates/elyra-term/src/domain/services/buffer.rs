use crate::domain::models::{Line, LineKind};
use crate::domain::services::texts;

/// Ordered transcript of one terminal session.
///
/// Lines are only ever appended. `clear` drops everything at once and bumps
/// the epoch so renderers know to redraw from scratch.
#[derive(Clone, Debug, Default)]
pub struct SessionBuffer {
    lines: Vec<Line>,
    epoch: u64,
}

impl SessionBuffer {
    pub fn new() -> SessionBuffer {
        return SessionBuffer::default();
    }

    /// A fresh session opened with the welcome banner.
    pub fn with_welcome() -> SessionBuffer {
        let mut buffer = SessionBuffer::new();
        for row in texts::WELCOME_BANNER {
            buffer.append(LineKind::System, row);
        }
        buffer.append(LineKind::Output, texts::WELCOME_HINT);
        return buffer;
    }

    pub fn append(&mut self, kind: LineKind, content: &str) -> &Line {
        self.lines.push(Line::new(kind, content));
        return &self.lines[self.lines.len() - 1];
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.epoch += 1;
    }

    pub fn lines(&self) -> &[Line] {
        return &self.lines;
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.lines.is_empty();
    }

    /// Number of clears since the session started.
    pub fn epoch(&self) -> u64 {
        return self.epoch;
    }
}
