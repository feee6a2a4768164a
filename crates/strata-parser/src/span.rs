//! Method span recovery from start-only positions.
//!
//! The syntax tree anchors where a declaration starts, never where it ends.
//! A method's text is rebuilt from raw lines:
//!
//! 1. the candidate range runs from the method's start up to (not including)
//!    the line of the next declaration outside the method, or end of file;
//! 2. the start walks upward over the annotation lines directly above it
//!    (including multi-line argument lists), never past the previous span;
//! 3. the range is cut after its last `}` and then trimmed back one closing
//!    brace at a time until `{` and `}` counts agree.
//!
//! Step 2 depends on where the previous method ended, so spans inside one type
//! are requested top to bottom through a [`SpanCursor`].

use crate::error::ParserError;
use crate::index::{SourceUnit, SyntaxTree};
use crate::types::{DeclarationNode, MethodSpan, brace_counts};

const ANNOTATION_MARKER: char = '@';
const VISIBILITY_MODIFIERS: &[&str] = &["public", "protected", "private"];

/// Line of the first declaration after `method` that is not nested inside it.
#[must_use]
pub fn candidate_end(tree: &SyntaxTree, method: &DeclarationNode) -> Option<usize> {
    tree.next_outside(method).map(|next| next.position.line)
}

/// Recover a brace-balanced method span from raw lines.
///
/// `start_line` and `candidate_end` are 1-based; `prior_end` is the last line
/// already consumed (previous span end, or the enclosing type's opening line).
/// Returns an ambiguous (empty) span when no balanced cut exists.
#[must_use]
pub fn extract_span(
    lines: &[String],
    start_line: usize,
    candidate_end: Option<usize>,
    prior_end: usize,
) -> MethodSpan {
    if start_line == 0 || start_line > lines.len() {
        return MethodSpan::ambiguous(start_line);
    }

    let start = annotation_start(lines, start_line, prior_end);

    let end_index = candidate_end
        .map_or(lines.len(), |end| end.saturating_sub(1))
        .min(lines.len());
    if end_index < start {
        return MethodSpan::ambiguous(start);
    }

    let mut text = lines[start - 1..end_index].join("\n");
    truncate_after_last_close(&mut text);

    loop {
        if text.is_empty() {
            return MethodSpan::ambiguous(start);
        }
        let (open, close) = brace_counts(&text);
        if open == close {
            break;
        }
        let Some(last) = text.rfind('}') else {
            return MethodSpan::ambiguous(start);
        };
        text.truncate(last);
        truncate_after_last_close(&mut text);
    }

    let line_count = text.lines().count().max(1);
    MethodSpan {
        start_line: start,
        end_line: Some(start + line_count - 1),
        text,
    }
}

/// First line of the annotation block sitting directly on top of `start_line`.
fn annotation_start(lines: &[String], start_line: usize, prior_end: usize) -> usize {
    let floor = prior_end + 1;
    let mut start = start_line;
    while start > floor {
        let above = start - 1;
        if is_annotation_line(&lines[above - 1]) {
            start = above;
            continue;
        }
        match open_annotation(lines, above, floor) {
            Some(first) => start = first,
            None => break,
        }
    }
    start
}

/// First line of a multi-line annotation whose argument list closes on `last`.
fn open_annotation(lines: &[String], last: usize, floor: usize) -> Option<usize> {
    let first = (floor..last)
        .rev()
        .find(|&line| is_annotation_line(&lines[line - 1]))?;
    let mut depth = 0_i64;
    for line in first..=last {
        depth += paren_delta(&lines[line - 1]);
        if line < last && depth <= 0 {
            return None;
        }
    }
    (depth == 0).then_some(first)
}

fn is_annotation_line(line: &str) -> bool {
    line.trim_start().starts_with(ANNOTATION_MARKER)
}

fn paren_delta(line: &str) -> i64 {
    line.chars().fold(0, |depth, c| match c {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}

fn truncate_after_last_close(text: &mut String) {
    match text.rfind('}') {
        Some(last) => text.truncate(last + 1),
        None => text.clear(),
    }
}

/// Project a span to its contract form: visibility dropped, body replaced by `;`.
///
/// Starts at the first line whose trimmed text begins with a visibility
/// modifier; a signature wrapped over several lines is joined up to the line
/// holding the opening brace.
#[must_use]
pub fn to_signature(span: &MethodSpan) -> Option<String> {
    let mut lines = span.text.lines().skip_while(|line| {
        let trimmed = line.trim_start();
        !VISIBILITY_MODIFIERS
            .iter()
            .any(|modifier| starts_with_word(trimmed, modifier))
    });

    let first = lines.next()?.trim();
    let modifier = VISIBILITY_MODIFIERS
        .iter()
        .find(|modifier| starts_with_word(first, modifier))?;

    let mut signature = first[modifier.len()..].trim().to_string();
    while !signature.contains('{') {
        let Some(next) = lines.next() else {
            break;
        };
        signature.push(' ');
        signature.push_str(next.trim());
    }

    let head = signature
        .split_once('{')
        .map_or(signature.as_str(), |(head, _)| head);
    let normalized = head.split_whitespace().collect::<Vec<_>>().join(" ");
    let normalized = normalized.trim_end_matches(';').trim_end();
    Some(format!("{normalized};"))
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// Sequential span extraction for the methods of one type.
///
/// Tracks the last consumed line so annotation back-extension never reaches
/// into the previous method, and rejects out-of-order requests.
#[derive(Debug)]
pub struct SpanCursor<'u> {
    unit: &'u SourceUnit,
    prior_end: usize,
    last_start: Option<usize>,
}

impl<'u> SpanCursor<'u> {
    /// Start a cursor at the opening line of `owner`'s body.
    #[must_use]
    pub fn new(unit: &'u SourceUnit, owner: &DeclarationNode) -> Self {
        Self {
            unit,
            prior_end: owner.body_line.unwrap_or(owner.position.line),
            last_start: None,
        }
    }

    /// Last line consumed so far.
    #[must_use]
    pub const fn prior_end(&self) -> usize {
        self.prior_end
    }

    /// Extract the next method's span.
    ///
    /// # Errors
    /// `OutOfOrder` when `method` does not start after the previously
    /// extracted method.
    pub fn extract(&mut self, method: &DeclarationNode) -> Result<MethodSpan, ParserError> {
        let line = method.position.line;
        if let Some(previous) = self.last_start {
            if line <= previous {
                return Err(ParserError::OutOfOrder {
                    method: method.name.clone(),
                    line,
                    previous,
                });
            }
        }

        let span = extract_span(
            &self.unit.lines,
            line,
            candidate_end(&self.unit.tree, method),
            self.prior_end,
        );

        self.last_start = Some(line);
        self.prior_end = span.end_line.unwrap_or(line).max(self.prior_end);
        if span.is_ambiguous() {
            tracing::debug!(method = %method.name, line, "span extraction ambiguous");
        }
        Ok(span)
    }
}
