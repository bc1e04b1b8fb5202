//! Generic document nodes handed to the host renderer.
//!
//! The tree is intentionally renderer-agnostic: sections, titled blocks,
//! paragraphs of inline runs, bullet lists, tables and error admonitions.
//! It serializes with an internal `type` tag so hosts can consume it as
//! JSON or YAML.

use serde::Serialize;

/// A block-level document node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Section {
        ids: Vec<String>,
        title: String,
        children: Vec<Node>,
    },
    /// A titled admonition-style block; one per documented operation.
    Block {
        title: String,
        children: Vec<Node>,
    },
    Paragraph {
        inlines: Vec<Inline>,
    },
    BulletList {
        items: Vec<Vec<Node>>,
    },
    Table(Table),
    Error {
        children: Vec<Node>,
    },
}

/// An inline run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
}

impl Inline {
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) | Inline::Strong(s) | Inline::Emphasis(s) => s,
        }
    }
}

/// A simple grid table: one header row plus body rows of plain-text cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub colwidths: Vec<u32>,
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
}

impl Table {
    /// Build a table. Widths default to one unit per column; an override whose
    /// length doesn't match the header is ignored.
    pub fn new(head: &[&str], body: Vec<Vec<String>>, colwidths: Option<&[u32]>) -> Self {
        let colwidths = match colwidths {
            Some(widths) if widths.len() == head.len() => widths.to_vec(),
            Some(widths) => {
                log::warn!(
                    "ignoring {} column widths for a {}-column table",
                    widths.len(),
                    head.len()
                );
                vec![1; head.len()]
            }
            None => vec![1; head.len()],
        };
        Self {
            colwidths,
            head: head.iter().map(|h| h.to_string()).collect(),
            body,
        }
    }
}

impl Node {
    pub fn section(title: impl Into<String>, children: Vec<Node>) -> Self {
        let title = title.into();
        Node::Section {
            ids: vec![title.clone()],
            title,
            children,
        }
    }

    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Node::Paragraph { inlines }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::paragraph(vec![Inline::Text(text.into())])
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Node::paragraph(vec![Inline::Strong(text.into())])
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Node::paragraph(vec![Inline::Emphasis(text.into())])
    }

    /// Title of a section or block.
    pub fn title(&self) -> Option<&str> {
        match self {
            Node::Section { title, .. } | Node::Block { title, .. } => Some(title),
            _ => None,
        }
    }

    /// Child nodes of container nodes; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children, .. }
            | Node::Block { children, .. }
            | Node::Error { children } => children,
            _ => &[],
        }
    }

    /// Concatenated inline text of a paragraph, or of every paragraph below a
    /// container.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Paragraph { inlines } => inlines.iter().map(Inline::as_str).collect(),
            Node::BulletList { items } => items
                .iter()
                .flatten()
                .map(Node::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            Node::Table(_) => String::new(),
            _ => self
                .children()
                .iter()
                .map(Node::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Node::Error { .. })
    }
}
