//! ast-grep wrapper and Java source detection from file extensions.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Extension of the source files the indexer understands.
pub const JAVA_EXTENSION: &str = "java";

/// Whether `path` ends in `.{extension}`.
#[must_use]
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

/// Parse Java source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Java.ast_grep(source)
}

/// First syntax error in the tree as a 1-based `(line, column)`, if any.
///
/// tree-sitter always yields a tree; broken input shows up as `ERROR` nodes
/// or as zero-width `MISSING` tokens inserted during recovery.
#[must_use]
pub fn first_syntax_error(tree: &AstTree) -> Option<(usize, usize)> {
    let root = tree.root();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_pos();
            return Some((pos.line() + 1, pos.column(&node) + 1));
        }
        let mut children: Vec<_> = node.children().collect();
        children.reverse();
        stack.extend(children);
    }
    None
}
