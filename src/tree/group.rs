// ABOUTME: Grouping engine partitioning items into one level of named groups.
// ABOUTME: Time groups order youngest bucket first; other groups order by label text.

use super::sort::{Labeled, sort_labeled};
use crate::resource::{FormatKey, ResourceAdapter, SortKey};
use std::collections::HashMap;

/// One group before it becomes a node.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub label: String,
    /// Position in display order: the age bucket rank for time groups, the
    /// group's index otherwise.
    pub rank: u64,
    pub members: Vec<Labeled<'a>>,
}

/// Partition entries by `group_by`, order the groups, and sort each group's
/// members by `sort_by`.
pub fn group_labeled<'a>(
    adapter: &dyn ResourceAdapter,
    entries: Vec<Labeled<'a>>,
    group_by: FormatKey,
    sort_by: SortKey,
) -> Vec<Group<'a>> {
    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let label = adapter.format(group_by, entry.item);
        let index = *index_of.entry(label.clone()).or_insert_with(|| {
            groups.push(Group {
                rank: entry.item.age().rank(),
                label,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].members.push(entry);
    }

    if group_by == FormatKey::CreatedTime {
        groups.sort_by_key(|g| g.rank);
    } else {
        groups.sort_by(|a, b| a.label.cmp(&b.label));
        for (position, group) in groups.iter_mut().enumerate() {
            group.rank = position as u64;
        }
    }

    for group in &mut groups {
        sort_labeled(&mut group.members, sort_by);
    }

    tracing::debug!(%group_by, groups = groups.len(), "grouped items");
    groups
}
