use crate::sanitize::strip_parentheses;
use crate::tree::MindmapNode;

/// Mermaid `mindmap` text: a cloud-shaped root line followed by branch
/// labels nested by indentation, two spaces per level. Branch labels lose
/// parentheses and nothing else; depth alone conveys structure here, so
/// truncation never applies.
pub(super) fn write_spider(title: &str, forest: &[MindmapNode]) -> String {
    let mut out = String::from("mindmap\n");
    out.push_str(&format!("  root){title}(\n"));
    for node in forest {
        write_node(node, 2, &mut out);
    }
    out
}

fn write_node(node: &MindmapNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&strip_parentheses(&node.label));
    out.push('\n');
    for child in &node.children {
        write_node(child, depth + 1, out);
    }
}
