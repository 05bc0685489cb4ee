use crate::detect::item_marker_label;
use crate::document::List;
use crate::tree::MindmapNode;

/// Collects mindmap nodes from a list's items. Items without a usable
/// marker label contribute nothing, sublists included. Children come from
/// the item's first unordered sublist only.
pub fn extract_list(list: &List) -> Vec<MindmapNode> {
    let mut nodes = Vec::new();
    for item in &list.items {
        let Some(label) = item_marker_label(item) else {
            continue;
        };
        let children = item
            .sublists
            .iter()
            .find(|sub| !sub.ordered)
            .map(extract_list)
            .unwrap_or_default();
        nodes.push(MindmapNode { label, children });
    }
    nodes
}
