use serde::{Deserialize, Serialize};

/// The recovered source text of one method.
///
/// An empty `text` means brace repair could not settle on a balanced range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpan {
    /// 1-based first line of `text`.
    pub start_line: usize,
    /// 1-based last line of `text`, `None` when ambiguous.
    pub end_line: Option<usize>,
    pub text: String,
}

impl MethodSpan {
    #[must_use]
    pub const fn ambiguous(start_line: usize) -> Self {
        Self {
            start_line,
            end_line: None,
            text: String::new(),
        }
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the text holds as many `{` as `}`.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let (open, close) = brace_counts(&self.text);
        open == close
    }
}

/// Count of `{` and `}` in `text`.
#[must_use]
pub fn brace_counts(text: &str) -> (usize, usize) {
    text.chars().fold((0, 0), |(open, close), c| match c {
        '{' => (open + 1, close),
        '}' => (open, close + 1),
        _ => (open, close),
    })
}
