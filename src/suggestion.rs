/// An ordered sequence of suggested text lines.
///
/// The first line continues the line the cursor is on; every following line
/// is rendered (and, on acceptance, inserted) below it. Lines never contain
/// embedded newlines. A suggestion is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    lines: Vec<String>,
}

impl Suggestion {
    /// Build a suggestion from already-split lines.
    pub fn new(lines: Vec<String>) -> Self {
        debug_assert!(
            lines.iter().all(|line| !line.contains('\n')),
            "suggestion lines must not contain embedded newlines"
        );
        Self { lines }
    }

    /// Split raw completion text into suggestion lines.
    ///
    /// Completion backends deliver a single string; CRLF endings are
    /// normalized so a trailing `\r` never leaks into the buffer.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
