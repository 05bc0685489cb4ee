//! Mermaid text serialization.
//!
//! Three layouts share one forest model: the spider mindmap radiates from
//! a cloud-shaped root, while the two tree layouts emit a flowchart that
//! reads top-down or left-to-right.

mod flow;
mod spider;

use std::str::FromStr;

use crate::tree::MindmapNode;

use flow::FlowDirection;

/// Layout selected for the synthesized diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutType {
    #[default]
    Spider,
    TreeDown,
    TreeRight,
}

impl LayoutType {
    /// Name used in config files and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutType::Spider => "spider",
            LayoutType::TreeDown => "tree-down",
            LayoutType::TreeRight => "tree-right",
        }
    }

    /// Next layout in the cycling order spider, tree-down, tree-right.
    pub fn cycle(self) -> Self {
        match self {
            LayoutType::Spider => LayoutType::TreeDown,
            LayoutType::TreeDown => LayoutType::TreeRight,
            LayoutType::TreeRight => LayoutType::Spider,
        }
    }
}

impl FromStr for LayoutType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spider" => Ok(LayoutType::Spider),
            // `tree` is the historical name for the top-down layout.
            "tree" | "tree-down" => Ok(LayoutType::TreeDown),
            "tree-right" => Ok(LayoutType::TreeRight),
            _ => Err(()),
        }
    }
}

/// Serializes a forest into Mermaid text for the given layout. The title
/// must already be display-clean; the tree layouts interpolate it verbatim
/// as the virtual root label.
pub fn describe(title: &str, forest: &[MindmapNode], layout: LayoutType) -> String {
    match layout {
        LayoutType::Spider => spider::write_spider(title, forest),
        LayoutType::TreeDown => flow::write_flow(title, forest, FlowDirection::Down),
        LayoutType::TreeRight => flow::write_flow(title, forest, FlowDirection::Right),
    }
}
