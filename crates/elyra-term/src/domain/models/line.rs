use std::fmt;

use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    System,
    Error,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Input => "input",
            LineKind::Output => "output",
            LineKind::System => "system",
            LineKind::Error => "error",
        };
        return f.write_str(name);
    }
}

/// One entry of the session transcript. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub id: Uuid,
    pub kind: LineKind,
    pub content: String,
}

impl Line {
    pub fn new(kind: LineKind, content: &str) -> Line {
        return Line {
            id: Uuid::new_v4(),
            kind,
            content: content.to_string(),
        };
    }
}
