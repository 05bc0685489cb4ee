//! Markdown document model.
//!
//! The viewer only needs structure the mindmap and table-of-contents
//! features read: headings, lists with their nesting, and the inline text
//! and images inside them. Everything else markdown can express is either
//! flattened into paragraph text or dropped during ingestion.

mod markdown;

pub use markdown::parse_markdown;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Image { src: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 through 6.
    pub level: u8,
    pub inlines: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub inlines: Vec<Inline>,
    /// Lists nested directly under this item, in source order.
    pub sublists: Vec<List>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    List(List),
    Paragraph(Vec<Inline>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// One table-of-contents row. Anchors follow the `heading-{index}` ids the
/// viewer assigns to rendered headings in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub anchor: String,
}

impl Heading {
    /// Concatenated text of the heading's `Text` inlines. Image alt text
    /// does not contribute.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for inline in &self.inlines {
            if let Inline::Text(text) = inline {
                out.push_str(text);
            }
        }
        out
    }
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Trimmed text of the first level-1 heading. `Some("")` when that
    /// heading exists but has no text of its own.
    pub fn first_h1_text(&self) -> Option<String> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading(h) if h.level == 1 => Some(h.text().trim().to_owned()),
            _ => None,
        })
    }

    pub fn headings(&self) -> impl Iterator<Item = &Heading> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading(h) => Some(h),
            _ => None,
        })
    }

    /// Table-of-contents entries for every heading, in document order.
    pub fn toc(&self) -> Vec<TocEntry> {
        self.headings()
            .enumerate()
            .map(|(index, h)| TocEntry {
                level: h.level,
                text: h.text().trim().to_owned(),
                anchor: format!("heading-{index}"),
            })
            .collect()
    }
}
