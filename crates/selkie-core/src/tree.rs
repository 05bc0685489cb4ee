use serde::{Deserialize, Serialize};

/// One node of the synthesized mindmap forest.
///
/// Labels arrive already trimmed from extraction but are otherwise raw;
/// serializers apply their own cleanup when emitting diagram text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindmapNode {
    pub label: String,
    #[serde(default)]
    pub children: Vec<MindmapNode>,
}

impl MindmapNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), children: Vec::new() }
    }

    pub fn with_children(label: impl Into<String>, children: Vec<MindmapNode>) -> Self {
        Self { label: label.into(), children }
    }
}
