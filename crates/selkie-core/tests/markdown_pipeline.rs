use selkie_core::{Engine, LayoutType, ViewerConfig};

const DOC: &str = "\
# Trip Planning & Logistics

Intro prose that the mindmap never sees.

## ![Destinations](assets/1x1.png)

- ![Coast (north)](assets/1x1.png)
  - ![Harbor town](assets/1x1.png)
- plain note
- ![Mountains](assets/1x1.png)

## Notes

## ![Budget](assets/1x1.png)
";

fn engine_with_layout(layout: &str) -> Engine {
    let json = format!(r#"{{"mindmap":{{"type":"{layout}"}}}}"#);
    let config = ViewerConfig::from_json_str(&json).unwrap();
    Engine::new().with_config(config)
}

#[test]
fn spider_description_end_to_end() {
    let synthesis = Engine::new().synthesize_markdown_sync(DOC).unwrap();
    assert_eq!(synthesis.layout, LayoutType::Spider);
    let expected = concat!(
        "mindmap\n",
        "  root)Trip Planning and Logistics(\n",
        "    Destinations\n",
        "      Coast north\n",
        "        Harbor town\n",
        "      Mountains\n",
        "    Budget\n",
    );
    assert_eq!(synthesis.description, expected);
}

#[test]
fn tree_down_description_end_to_end() {
    let synthesis = engine_with_layout("tree-down")
        .synthesize_markdown_sync(DOC)
        .unwrap();
    let expected = concat!(
        "flowchart TD\n",
        "    N0[Trip Planning and Logistics]\n",
        "    N1[Destinations]\n",
        "    N2[Coast north]\n",
        "    N3[Harbor town]\n",
        "    N4[Mountains]\n",
        "    N5[Budget]\n",
        "    N0 --> N1\n",
        "    N1 --> N2\n",
        "    N2 --> N3\n",
        "    N1 --> N4\n",
        "    N0 --> N5\n",
        "\n",
        "    classDef default fill:#ffffff,stroke:#667eea,stroke-width:2px,color:#333333\n",
        "    classDef rootStyle fill:#667eea,stroke:#4c63d2,stroke-width:3px,color:#ffffff\n",
        "    class N0 rootStyle\n",
    );
    assert_eq!(synthesis.description, expected);
}

#[test]
fn tree_right_description_end_to_end() {
    let synthesis = engine_with_layout("tree-right")
        .synthesize_markdown_sync(DOC)
        .unwrap();
    assert!(synthesis.description.starts_with("flowchart LR\n"));
    assert!(synthesis.description.contains("    N0[Trip Planning and Logistics]\n"));
    assert!(synthesis.description.ends_with("    class N0 rootStyle\n"));
}

#[test]
fn layout_choice_never_changes_the_forest() {
    let spider = Engine::new().synthesize_markdown_sync(DOC).unwrap();
    let tree = engine_with_layout("tree-down")
        .synthesize_markdown_sync(DOC)
        .unwrap();
    assert_eq!(spider.forest, tree.forest);
    assert_eq!(spider.title, tree.title);
    assert_ne!(spider.description, tree.description);
}
