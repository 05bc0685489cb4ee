use crate::*;

#[test]
fn spider_output_golden() {
    let forest = vec![
        MindmapNode::with_children("A", vec![MindmapNode::new("B")]),
        MindmapNode::new("C"),
    ];
    let out = describe("My Title", &forest, LayoutType::Spider);
    assert_eq!(out, "mindmap\n  root)My Title(\n    A\n      B\n    C\n");
}

#[test]
fn spider_branch_labels_lose_parentheses_only() {
    let forest = vec![MindmapNode::new(
        "Deliverables (Q3) & [misc] stuff plus a very long tail",
    )];
    let out = describe("T", &forest, LayoutType::Spider);
    assert!(out.contains("    Deliverables Q3 & [misc] stuff plus a very long tail\n"));
}

#[test]
fn tree_down_single_root_golden() {
    let forest = vec![MindmapNode::with_children(
        "A",
        vec![MindmapNode::new("B"), MindmapNode::new("C")],
    )];
    let out = describe("unused", &forest, LayoutType::TreeDown);
    let expected = concat!(
        "flowchart TD\n",
        "    N0[A]\n",
        "    N1[B]\n",
        "    N2[C]\n",
        "    N0 --> N1\n",
        "    N0 --> N2\n",
        "\n",
        "    classDef default fill:#ffffff,stroke:#667eea,stroke-width:2px,color:#333333\n",
        "    classDef rootStyle fill:#667eea,stroke:#4c63d2,stroke-width:3px,color:#ffffff\n",
        "    class N0 rootStyle\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn tree_right_uses_lr_header() {
    let forest = vec![MindmapNode::new("A")];
    let out = describe("unused", &forest, LayoutType::TreeRight);
    assert!(out.starts_with("flowchart LR\n"));
    assert!(out.contains("    class N0 rootStyle\n"));
}

#[test]
fn virtual_root_appears_only_for_multiple_roots() {
    let single = describe("T", &[MindmapNode::new("A")], LayoutType::TreeDown);
    assert!(!single.contains("[T]"));

    let forest = vec![MindmapNode::new("A"), MindmapNode::new("B")];
    let multi = describe("T", &forest, LayoutType::TreeDown);
    assert!(multi.contains("    N0[T]\n"));
    assert!(multi.contains("    N0 --> N1\n"));
    assert!(multi.contains("    N0 --> N2\n"));
    assert!(multi.contains("    class N0 rootStyle\n"));
}

#[test]
fn tree_labels_are_cleaned_and_truncated() {
    let forest = vec![MindmapNode::new("abcdefghijklmnopqrstuvwxyz012345")];
    let out = describe("T", &forest, LayoutType::TreeDown);
    assert!(out.contains("    N0[abcdefghijklmnopqrstuvwxyz0...]\n"));

    let forest = vec![MindmapNode::new("(R&D)")];
    let out = describe("T", &forest, LayoutType::TreeDown);
    assert!(out.contains("    N0[RandD]\n"));
}

#[test]
fn empty_forest_yields_bare_scaffolding() {
    let out = describe("T", &[], LayoutType::TreeDown);
    let expected = concat!(
        "flowchart TD\n",
        "\n",
        "    classDef default fill:#ffffff,stroke:#667eea,stroke-width:2px,color:#333333\n",
        "    classDef rootStyle fill:#667eea,stroke:#4c63d2,stroke-width:3px,color:#ffffff\n",
    );
    assert_eq!(out, expected);
}

#[test]
fn layout_parsing_accepts_the_legacy_tree_name() {
    assert_eq!("spider".parse(), Ok(LayoutType::Spider));
    assert_eq!("tree".parse(), Ok(LayoutType::TreeDown));
    assert_eq!("tree-down".parse(), Ok(LayoutType::TreeDown));
    assert_eq!("tree-right".parse(), Ok(LayoutType::TreeRight));
    assert!("diagonal".parse::<LayoutType>().is_err());
}

#[test]
fn layout_cycle_order() {
    assert_eq!(LayoutType::Spider.cycle(), LayoutType::TreeDown);
    assert_eq!(LayoutType::TreeDown.cycle(), LayoutType::TreeRight);
    assert_eq!(LayoutType::TreeRight.cycle(), LayoutType::Spider);
}
