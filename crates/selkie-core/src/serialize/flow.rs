use crate::sanitize::{LABEL_LIMIT, sanitize_label};
use crate::tree::MindmapNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FlowDirection {
    Down,
    Right,
}

impl FlowDirection {
    fn header(self) -> &'static str {
        match self {
            FlowDirection::Down => "flowchart TD\n",
            FlowDirection::Right => "flowchart LR\n",
        }
    }
}

const DEFAULT_CLASS_DEF: &str =
    "    classDef default fill:#ffffff,stroke:#667eea,stroke-width:2px,color:#333333\n";
const ROOT_CLASS_DEF: &str =
    "    classDef rootStyle fill:#667eea,stroke:#4c63d2,stroke-width:3px,color:#ffffff\n";

/// Mermaid `flowchart` text. Node definitions come first in visit order,
/// then every edge, then the styling block. With two or more roots a
/// virtual root labeled with the document title binds the forest together;
/// with exactly one root, that node takes the root styling itself.
pub(super) fn write_flow(title: &str, forest: &[MindmapNode], direction: FlowDirection) -> String {
    let mut nodes = String::new();
    let mut edges = String::new();
    let mut next_id = 0usize;

    let root_id = if forest.len() > 1 {
        let virtual_id = next_id;
        next_id += 1;
        nodes.push_str(&format!("    N{virtual_id}[{title}]\n"));
        for node in forest {
            visit(node, Some(virtual_id), &mut next_id, &mut nodes, &mut edges);
        }
        Some(virtual_id)
    } else if let Some(only) = forest.first() {
        Some(visit(only, None, &mut next_id, &mut nodes, &mut edges))
    } else {
        None
    };

    let mut out = String::from(direction.header());
    out.push_str(&nodes);
    out.push_str(&edges);
    out.push('\n');
    out.push_str(DEFAULT_CLASS_DEF);
    out.push_str(ROOT_CLASS_DEF);
    if let Some(id) = root_id {
        out.push_str(&format!("    class N{id} rootStyle\n"));
    }
    out
}

/// Emits the node line for `node`, the edge from its parent, and then its
/// children, assigning `N{id}` ids in visit order. Returns the id given to
/// `node` itself.
fn visit(
    node: &MindmapNode,
    parent: Option<usize>,
    next_id: &mut usize,
    nodes: &mut String,
    edges: &mut String,
) -> usize {
    let id = *next_id;
    *next_id += 1;
    let label = sanitize_label(&node.label, LABEL_LIMIT);
    nodes.push_str(&format!("    N{id}[{label}]\n"));
    if let Some(parent_id) = parent {
        edges.push_str(&format!("    N{parent_id} --> N{id}\n"));
    }
    for child in &node.children {
        visit(child, Some(id), next_id, nodes, edges);
    }
    id
}
