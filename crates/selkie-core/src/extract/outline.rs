use crate::detect::{heading_marker, list_has_markers};
use crate::document::{Block, Document, Heading, List};
use crate::tree::MindmapNode;

use super::list::extract_list;

/// Headings and unordered lists in the order the rendered page presents
/// them. Nested lists surface as their own entries so the marker guard
/// sees every candidate, the way a flattened element query would.
enum OutlineEntry<'a> {
    Heading(&'a Heading),
    List {
        list: &'a List,
        /// Marker status of the nearest enclosing unordered list.
        parent_has_markers: bool,
    },
}

fn outline_entries(doc: &Document) -> Vec<OutlineEntry<'_>> {
    let mut entries = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::Heading(h) => entries.push(OutlineEntry::Heading(h)),
            Block::List(list) => push_list_entries(list, None, &mut entries),
            Block::Paragraph(_) => {}
        }
    }
    entries
}

/// Pre-order walk over a list and everything nested below it. `enclosing`
/// carries the marker status of the nearest unordered ancestor; ordered
/// lists are not entries themselves but pass that context through.
fn push_list_entries<'a>(
    list: &'a List,
    enclosing: Option<bool>,
    entries: &mut Vec<OutlineEntry<'a>>,
) {
    let child_context = if list.ordered {
        enclosing
    } else {
        entries.push(OutlineEntry::List {
            list,
            parent_has_markers: enclosing.unwrap_or(false),
        });
        Some(list_has_markers(list))
    };
    for item in &list.items {
        for sub in &item.sublists {
            push_list_entries(sub, child_context, entries);
        }
    }
}

struct OpenHeading {
    level: u8,
    node: MindmapNode,
    /// Forest index reserved when this heading opened at root level.
    root_slot: Option<usize>,
}

/// Assembles the mindmap forest from a document's headings and lists.
///
/// Marked headings nest by level through a stack; marked top-level lists
/// hang off the most recent marked heading, or join the forest directly
/// when a plain heading has cleared that context. Forest order follows
/// document order.
pub fn extract_outline(doc: &Document) -> Vec<MindmapNode> {
    let mut roots: Vec<Option<MindmapNode>> = Vec::new();
    let mut stack: Vec<OpenHeading> = Vec::new();
    // Whether list nodes currently attach to the stack top. A heading
    // without a marker clears this without touching the stack.
    let mut attach_to_top = false;

    for entry in outline_entries(doc) {
        match entry {
            OutlineEntry::Heading(heading) => {
                let Some(alt) = heading_marker(heading) else {
                    attach_to_top = false;
                    continue;
                };
                let label = alt.trim();
                if label.is_empty() {
                    // Marker present but unusable: the heading changes nothing.
                    continue;
                }
                while stack.last().is_some_and(|open| open.level >= heading.level) {
                    close_one(&mut stack, &mut roots);
                }
                let root_slot = if stack.is_empty() {
                    roots.push(None);
                    Some(roots.len() - 1)
                } else {
                    None
                };
                stack.push(OpenHeading {
                    level: heading.level,
                    node: MindmapNode::new(label),
                    root_slot,
                });
                attach_to_top = true;
            }
            OutlineEntry::List {
                list,
                parent_has_markers,
            } => {
                if parent_has_markers || !list_has_markers(list) {
                    continue;
                }
                let nodes = extract_list(list);
                match stack.last_mut() {
                    Some(open) if attach_to_top => open.node.children.extend(nodes),
                    _ => roots.extend(nodes.into_iter().map(Some)),
                }
            }
        }
    }

    while !stack.is_empty() {
        close_one(&mut stack, &mut roots);
    }
    roots.into_iter().flatten().collect()
}

fn close_one(stack: &mut Vec<OpenHeading>, roots: &mut Vec<Option<MindmapNode>>) {
    let Some(open) = stack.pop() else {
        return;
    };
    match (open.root_slot, stack.last_mut()) {
        (Some(slot), _) => roots[slot] = Some(open.node),
        (None, Some(parent)) => parent.node.children.push(open.node),
        // A slot-less heading always has its parent still on the stack.
        (None, None) => roots.push(Some(open.node)),
    }
}
