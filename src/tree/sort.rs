// ABOUTME: Sort engine ordering items by creation time or by label text.
// ABOUTME: All orderings are stable so ties keep their input order.

use crate::normalize::NormalizedItem;
use crate::resource::SortKey;
use std::cmp::Reverse;

/// An item paired with its resolved label, so labels are formatted once.
#[derive(Debug, Clone)]
pub struct Labeled<'a> {
    pub item: &'a NormalizedItem,
    pub label: String,
}

/// Order items in place.
///
/// `CreatedTime` puts the most recent first; `Label` compares label text
/// ordinally (byte order, case-sensitive).
pub fn sort_labeled(entries: &mut [Labeled<'_>], key: SortKey) {
    match key {
        SortKey::CreatedTime => entries.sort_by_key(|e| Reverse(e.item.created_at())),
        SortKey::Label => entries.sort_by(|a, b| a.label.cmp(&b.label)),
    }
}
