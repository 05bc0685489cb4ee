//! Sentinel image detection.
//!
//! Documents opt into mindmap synthesis with placeholder images whose src
//! contains the `1x1` token. The image alt text carries the node label, so
//! a marker can sit anywhere text can.

use crate::document::{Block, Document, Heading, Inline, List, ListItem};

/// Substring of an image src that marks mindmap structure. Matching is
/// case sensitive.
pub const SENTINEL_TOKEN: &str = "1x1";

pub fn is_marker_src(src: &str) -> bool {
    src.contains(SENTINEL_TOKEN)
}

fn first_marker_in_inlines(inlines: &[Inline]) -> Option<&str> {
    inlines.iter().find_map(|inline| match inline {
        Inline::Image { src, alt } if is_marker_src(src) => Some(alt.as_str()),
        _ => None,
    })
}

/// First marker alt in the item's subtree: the item's own inlines, then
/// its sublists in order.
fn first_marker_in_item(item: &ListItem) -> Option<&str> {
    first_marker_in_inlines(&item.inlines)
        .or_else(|| item.sublists.iter().find_map(|sub| first_marker_in_list(sub)))
}

fn first_marker_in_list(list: &List) -> Option<&str> {
    list.items.iter().find_map(|item| first_marker_in_item(item))
}

/// Label that makes a list item a mindmap node. `None` when the item has
/// no marker, or when the first marker's alt trims to empty; either way
/// the item contributes nothing.
pub fn item_marker_label(item: &ListItem) -> Option<String> {
    let alt = first_marker_in_item(item)?;
    let trimmed = alt.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// True when any item in the list's subtree carries a marker image, with
/// or without usable alt text.
pub fn list_has_markers(list: &List) -> bool {
    first_marker_in_list(list).is_some()
}

/// Raw alt of the first marker image in a heading, if any.
pub fn heading_marker(heading: &Heading) -> Option<&str> {
    first_marker_in_inlines(&heading.inlines)
}

/// Document-level gate: true when a marker image appears anywhere in
/// headings, lists, or paragraph text.
pub fn document_has_markers(doc: &Document) -> bool {
    doc.blocks.iter().any(|block| match block {
        Block::Heading(h) => first_marker_in_inlines(&h.inlines).is_some(),
        Block::List(list) => list_has_markers(list),
        Block::Paragraph(inlines) => first_marker_in_inlines(inlines).is_some(),
    })
}
