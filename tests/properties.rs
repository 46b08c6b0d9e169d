// ABOUTME: Property tests for settings validation, ordering, and grouping.
// ABOUTME: Random descriptor sets and settings must always produce a well-formed tree.

mod support;

use docktree::descriptor::RawDescriptor;
use docktree::diagnostics::Diagnostics;
use docktree::resource::{FormatKey, ResourceKind};
use docktree::settings::validate_settings;
use docktree::types::{ImageRef, RelativeTime};
use docktree::{TreeNode, build_tree};
use proptest::prelude::*;
use serde_json::{Map, Value, json};
use support::NOW;

const IMAGES: &[&str] = &[
    "nginx",
    "nginx:1.25",
    "node:8.0",
    "mcr.microsoft.com/dotnet/core/sdk:latest",
    "localhost:5000/app:dev",
];
const STATES: &[&str] = &["running", "paused", "exited", "created"];

/// (name index, image index, state index, age in seconds)
type Row = (usize, usize, usize, i64);

fn containers(rows: &[Row]) -> Vec<RawDescriptor> {
    let listing: Vec<Value> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, image, state, age))| {
            json!({
                "Id": format!("{i:064x}"),
                "Names": [format!("/c{name}")],
                "Image": IMAGES[*image],
                "Created": NOW - age,
                "State": STATES[*state],
                "Status": format!("status {state}")
            })
        })
        .collect();
    serde_json::from_value(Value::Array(listing)).unwrap()
}

fn rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (0..6usize, 0..IMAGES.len(), 0..STATES.len(), 0..(3 * 365 * 86_400i64)),
        0..24,
    )
}

fn loose_value() -> impl Strategy<Value = Value> {
    let key_names: Vec<&'static str> = FormatKey::ALL.iter().map(|k| k.as_str()).collect();
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z]{0,12}".prop_map(Value::from),
        prop::sample::select(key_names).prop_map(Value::from),
        Just(Value::from("None")),
        Just(Value::from("Label")),
    ]
}

fn loose_settings() -> impl Strategy<Value = Value> {
    let field = || prop::option::of(loose_value());
    let description = prop::option::of(prop_oneof![
        loose_value(),
        prop::collection::vec(loose_value(), 0..4).prop_map(Value::Array),
    ]);
    (field(), description, field(), field()).prop_map(|(label, description, group_by, sort_by)| {
        let mut fields = Map::new();
        for (name, value) in [
            ("label", label),
            ("description", description),
            ("groupBy", group_by),
            ("sortBy", sort_by),
        ] {
            if let Some(value) = value {
                fields.insert(name.to_string(), value);
            }
        }
        Value::Object(fields)
    })
}

fn leaf_ids(nodes: &[TreeNode]) -> Vec<usize> {
    nodes
        .iter()
        .flat_map(|node| match node {
            TreeNode::Leaf(l) => vec![usize::from_str_radix(&l.backing_id, 16).unwrap()],
            TreeNode::Group(g) => leaf_ids(&g.children),
        })
        .collect()
}

proptest! {
    #[test]
    fn validated_keys_belong_to_the_adapter(raw in loose_settings()) {
        for kind in ResourceKind::ALL {
            let adapter = kind.adapter();
            let settings = validate_settings(adapter, &raw, &mut Diagnostics::default());
            prop_assert!(adapter.label_keys().contains(&settings.label_key));
            for key in &settings.description_keys {
                prop_assert!(adapter.description_keys().contains(key));
            }
            if let Some(key) = settings.group_by_key {
                prop_assert!(adapter.group_by_keys().contains(&key));
            }
            prop_assert!(adapter.sort_by_keys().contains(&settings.sort_by_key));
        }
    }

    #[test]
    fn every_item_appears_exactly_once(rows in rows(), raw in loose_settings()) {
        let tree = build_tree(ResourceKind::Containers, &containers(&rows), &raw, NOW);
        let mut ids = leaf_ids(&tree);
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..rows.len()).collect::<Vec<_>>());
    }

    #[test]
    fn building_is_idempotent(rows in rows(), raw in loose_settings()) {
        let descriptors = containers(&rows);
        prop_assert_eq!(
            build_tree(ResourceKind::Containers, &descriptors, &raw, NOW),
            build_tree(ResourceKind::Containers, &descriptors, &raw, NOW)
        );
    }

    #[test]
    fn created_time_sort_is_newest_first_and_stable(rows in rows()) {
        let settings = json!({ "sortBy": "CreatedTime" });
        let tree = build_tree(ResourceKind::Containers, &containers(&rows), &settings, NOW);
        let ids = leaf_ids(&tree);
        for pair in ids.windows(2) {
            let (a, b) = (rows[pair[0]].3, rows[pair[1]].3);
            prop_assert!(a < b || (a == b && pair[0] < pair[1]));
        }
    }

    #[test]
    fn label_sort_is_ordered_and_stable(rows in rows()) {
        let settings = json!({ "sortBy": "Label", "label": "ContainerName" });
        let tree = build_tree(ResourceKind::Containers, &containers(&rows), &settings, NOW);
        let ids = leaf_ids(&tree);
        for pair in ids.windows(2) {
            let (a, b) = (rows[pair[0]].0, rows[pair[1]].0);
            prop_assert!(a < b || (a == b && pair[0] < pair[1]));
        }
    }

    #[test]
    fn groups_are_unique_and_ordered(rows in rows(), group_by in prop::sample::select(vec!["CreatedTime", "Registry", "State", "Tag"])) {
        let settings = json!({ "groupBy": group_by });
        let tree = build_tree(ResourceKind::Containers, &containers(&rows), &settings, NOW);
        let groups: Vec<_> = tree
            .iter()
            .map(|node| match node {
                TreeNode::Group(g) => g,
                TreeNode::Leaf(_) => panic!("grouped tree has a top-level leaf"),
            })
            .collect();
        for pair in groups.windows(2) {
            prop_assert!(pair[0].sort_rank < pair[1].sort_rank);
            if group_by != "CreatedTime" {
                prop_assert!(pair[0].label < pair[1].label);
            }
            prop_assert!(!pair[0].children.is_empty());
        }
    }

    #[test]
    fn rank_is_monotonic_in_age(a in any::<u64>(), b in any::<u64>()) {
        let (young, old) = (a.min(b), a.max(b));
        let (young, old) = (RelativeTime::from_age(young), RelativeTime::from_age(old));
        prop_assert!(young.rank() <= old.rank());
        prop_assert_eq!(young.rank() == old.rank(), young.label() == old.label());
    }

    #[test]
    fn image_parsing_is_total(input in ".*") {
        let img = ImageRef::parse(&input);
        prop_assert!(!img.registry().is_empty());
    }
}
