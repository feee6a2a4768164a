//! Source indexing: one Java file in, one [`SourceUnit`] out.
//!
//! The ast-grep tree is walked once in pre-order and flattened into a list of
//! [`DeclarationNode`]s. Each node records the pre-order index of its last
//! nested declaration, which is enough to answer "the first declaration after
//! this one that is not inside it" without keeping the tree alive.

use std::path::{Path, PathBuf};

use ast_grep_core::Node;

use crate::error::ParserError;
use crate::java::helpers;
use crate::parser::{JAVA_EXTENSION, first_syntax_error, has_extension, parse_source};
use crate::types::{DeclarationKind, DeclarationNode};

/// Flattened declaration view of one parsed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    pub package: Option<String>,
    pub imports: Vec<String>,
    declarations: Vec<DeclarationNode>,
}

impl SyntaxTree {
    /// Every declaration in pre-order (source order).
    #[must_use]
    pub fn declarations(&self) -> &[DeclarationNode] {
        &self.declarations
    }

    /// Declarations of one kind, source order preserved.
    pub fn declarations_of(&self, kind: DeclarationKind) -> impl Iterator<Item = &DeclarationNode> {
        self.declarations.iter().filter(move |node| node.kind == kind)
    }

    /// Declarations directly owned by `owner` (not nested deeper).
    pub fn members_of<'a>(
        &'a self,
        owner: &'a DeclarationNode,
    ) -> impl Iterator<Item = &'a DeclarationNode> {
        self.declarations[owner.index + 1..=owner.subtree_end]
            .iter()
            .filter(move |node| node.parent == Some(owner.index))
    }

    /// The nearest enclosing declaration of `node`.
    #[must_use]
    pub fn parent_of(&self, node: &DeclarationNode) -> Option<&DeclarationNode> {
        node.parent.and_then(|index| self.declarations.get(index))
    }

    /// First declaration after `node` in traversal order that is not nested inside it.
    #[must_use]
    pub fn next_outside(&self, node: &DeclarationNode) -> Option<&DeclarationNode> {
        self.declarations.get(node.subtree_end + 1)
    }

    /// Whether any type declared in the file is of `kind`.
    #[must_use]
    pub fn declares(&self, kind: DeclarationKind) -> bool {
        self.declarations_of(kind).next().is_some()
    }
}

/// One parsed source file: package, primary type, raw lines and the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub package: Option<String>,
    pub primary_type: Option<String>,
    pub lines: Vec<String>,
    pub tree: SyntaxTree,
}

impl SourceUnit {
    /// First class declared in the file, falling back to any type.
    #[must_use]
    pub fn primary_class(&self) -> Option<&DeclarationNode> {
        self.tree
            .declarations_of(DeclarationKind::Class)
            .next()
            .or_else(|| self.tree.declarations().iter().find(|d| d.kind.is_type()))
    }
}

/// Read and parse a Java file.
///
/// # Errors
/// `UnsupportedSource` for non-`.java` paths, `Io` when the file cannot be
/// read, `ParseFailed` when the tree contains syntax errors.
pub fn index(path: &Path) -> Result<SourceUnit, ParserError> {
    index_with_extension(path, JAVA_EXTENSION)
}

/// Read and parse Java source stored under a non-standard file extension.
///
/// # Errors
/// As [`index`], with `UnsupportedSource` for paths not ending in
/// `.{extension}`.
pub fn index_with_extension(path: &Path, extension: &str) -> Result<SourceUnit, ParserError> {
    if !has_extension(path, extension) {
        return Err(ParserError::UnsupportedSource(path.to_path_buf()));
    }
    let source = std::fs::read_to_string(path)?;
    index_source(path, &source)
}

/// Parse already loaded Java source.
///
/// # Errors
/// `ParseFailed` when the tree contains syntax errors.
pub fn index_source(path: &Path, source: &str) -> Result<SourceUnit, ParserError> {
    let ast = parse_source(source);
    if let Some((line, column)) = first_syntax_error(&ast) {
        return Err(ParserError::ParseFailed {
            path: path.to_path_buf(),
            message: format!("syntax error at line {line}, column {column}"),
        });
    }

    let mut tree = SyntaxTree::default();
    collect(&ast.root(), None, &mut tree);

    let primary_type = tree
        .declarations_of(DeclarationKind::Class)
        .next()
        .or_else(|| tree.declarations.iter().find(|d| d.kind.is_type()))
        .map(|d| d.name.clone());

    tracing::debug!(
        path = %path.display(),
        declarations = tree.declarations.len(),
        imports = tree.imports.len(),
        "indexed source"
    );

    Ok(SourceUnit {
        path: path.to_path_buf(),
        package: tree.package.clone(),
        primary_type,
        lines: source.lines().map(ToString::to_string).collect(),
        tree,
    })
}

fn collect<D: ast_grep_core::Doc>(node: &Node<D>, parent: Option<usize>, tree: &mut SyntaxTree) {
    let kind = node.kind();
    match kind.as_ref() {
        "package_declaration" => {
            tree.package = helpers::package_name(node);
            return;
        }
        "import_declaration" => {
            if let Some(path) = helpers::import_path(node) {
                tree.imports.push(path);
            }
            return;
        }
        _ => {}
    }

    let Some(decl_kind) = DeclarationKind::from_node_kind(kind.as_ref()) else {
        for child in node.children() {
            collect(&child, parent, tree);
        }
        return;
    };

    let index = tree.declarations.len();
    tree.declarations.push(DeclarationNode {
        kind: decl_kind,
        name: helpers::declaration_name(node).unwrap_or_default(),
        position: helpers::anchor_position(node),
        modifiers: helpers::extract_modifiers(node).into_iter().collect(),
        annotations: helpers::extract_annotations(node),
        type_name: helpers::declared_type(node),
        body_line: if decl_kind.is_type() {
            helpers::body_line(node)
        } else {
            None
        },
        parent,
        index,
        subtree_end: index,
    });

    for child in node.children() {
        collect(&child, Some(index), tree);
    }

    let last = tree.declarations.len() - 1;
    tree.declarations[index].subtree_end = last;
}
