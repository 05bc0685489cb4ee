#![forbid(unsafe_code)]

//! Mindmap synthesis for markdown documents.
//!
//! Documents opt in by tagging outline structure with placeholder images
//! whose src contains `1x1`; the alt text of each marker names a node.
//! This crate parses the markdown, detects those markers, assembles the
//! labeled headings and list items into a forest, and serializes the
//! forest as Mermaid diagram text in one of three layouts: a radial
//! spider mindmap, a top-down tree, or a left-to-right tree.
//!
//! [`Engine`] is the front door; the modules underneath expose each
//! pipeline stage for callers that need only part of it.

pub mod config;
pub mod detect;
pub mod document;
mod error;
pub mod extract;
pub mod sanitize;
pub mod serialize;
mod tree;

pub use config::ViewerConfig;
pub use document::{Block, Document, Heading, Inline, List, ListItem, TocEntry, parse_markdown};
pub use error::{Error, Result};
pub use serialize::{LayoutType, describe};
pub use tree::MindmapNode;

use tracing::debug;

/// Everything the viewer needs to display one synthesized mindmap.
#[derive(Debug, Clone, PartialEq)]
pub struct MindmapSynthesis {
    /// Display title, already clean.
    pub title: String,
    pub forest: Vec<MindmapNode>,
    /// Mermaid text for `forest` under `layout`.
    pub description: String,
    pub layout: LayoutType,
}

/// Stateless entry point running the synthesis pipeline under one config.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: ViewerConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose config is `overlay` merged over the built-in defaults.
    pub fn with_config(mut self, overlay: ViewerConfig) -> Self {
        let mut merged = ViewerConfig::default();
        merged.deep_merge(overlay.as_value());
        self.config = merged;
        self
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Layout the config selects for new diagrams.
    pub fn layout_type(&self) -> LayoutType {
        self.config.layout_type()
    }

    pub fn parse_document(&self, markdown: &str) -> Document {
        document::parse_markdown(markdown)
    }

    /// True when the document carries a mindmap marker anywhere.
    pub fn detect_mindmap(&self, doc: &Document) -> bool {
        detect::document_has_markers(doc)
    }

    /// Mindmap forest for a parsed document, in document order.
    pub fn extract(&self, doc: &Document) -> Vec<MindmapNode> {
        extract::extract_outline(doc)
    }

    /// Display title from the document's first H1, with fallback.
    pub fn derive_title(&self, doc: &Document) -> String {
        sanitize::title_label(doc.first_h1_text().as_deref())
    }

    /// Mermaid text for an already extracted forest.
    pub fn describe(&self, title: &str, forest: &[MindmapNode], layout: LayoutType) -> String {
        serialize::describe(title, forest, layout)
    }

    /// Runs the full pipeline on a parsed document with the configured
    /// layout. `None` when the document yields no marked structure.
    pub fn synthesize_sync(&self, doc: &Document) -> Option<MindmapSynthesis> {
        let forest = self.extract(doc);
        if forest.is_empty() {
            debug!("no marked structure found");
            return None;
        }
        let layout = self.layout_type();
        let title = self.derive_title(doc);
        let description = self.describe(&title, &forest, layout);
        debug!(layout = layout.as_str(), roots = forest.len(), "synthesized mindmap");
        Some(MindmapSynthesis {
            title,
            forest,
            description,
            layout,
        })
    }

    pub async fn synthesize(&self, doc: &Document) -> Option<MindmapSynthesis> {
        self.synthesize_sync(doc)
    }

    pub fn synthesize_markdown_sync(&self, markdown: &str) -> Option<MindmapSynthesis> {
        let doc = self.parse_document(markdown);
        self.synthesize_sync(&doc)
    }

    pub async fn synthesize_markdown(&self, markdown: &str) -> Option<MindmapSynthesis> {
        self.synthesize_markdown_sync(markdown)
    }
}

#[cfg(test)]
mod tests;
