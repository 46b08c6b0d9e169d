// ABOUTME: Relative-time bucketing for creation timestamps.
// ABOUTME: Maps an age in seconds to a label like "3 days ago" and a sortable rank.

use std::fmt;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

/// How a bucket's label is produced.
enum Wording {
    Fixed(&'static str),
    /// "{n} {unit}s ago" with n = age / unit, rounded half up.
    Counted { unit: u64, noun: &'static str },
}

struct Bucket {
    /// Exclusive upper age bound in seconds.
    upper: u64,
    lower: u64,
    wording: Wording,
}

const BUCKETS: &[Bucket] = &[
    Bucket { lower: 0, upper: 45, wording: Wording::Fixed("a few seconds ago") },
    Bucket { lower: 45, upper: 90, wording: Wording::Fixed("a minute ago") },
    Bucket { lower: 90, upper: 45 * MINUTE, wording: Wording::Counted { unit: MINUTE, noun: "minutes" } },
    Bucket { lower: 45 * MINUTE, upper: 90 * MINUTE, wording: Wording::Fixed("an hour ago") },
    Bucket { lower: 90 * MINUTE, upper: 22 * HOUR, wording: Wording::Counted { unit: HOUR, noun: "hours" } },
    Bucket { lower: 22 * HOUR, upper: 36 * HOUR, wording: Wording::Fixed("a day ago") },
    Bucket { lower: 36 * HOUR, upper: 25 * DAY, wording: Wording::Counted { unit: DAY, noun: "days" } },
    Bucket { lower: 25 * DAY, upper: 45 * DAY, wording: Wording::Fixed("a month ago") },
    Bucket { lower: 45 * DAY, upper: 320 * DAY, wording: Wording::Counted { unit: MONTH, noun: "months" } },
    Bucket { lower: 320 * DAY, upper: 548 * DAY, wording: Wording::Fixed("a year ago") },
    Bucket { lower: 548 * DAY, upper: u64::MAX, wording: Wording::Counted { unit: YEAR, noun: "years" } },
];

/// A human-readable age together with its chronological rank.
///
/// `rank` is the smallest age (in seconds) that produces the same label, so
/// ordering by rank orders labels from youngest to oldest without looking at
/// their text. Bounds are inclusive-lower, exclusive-upper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeTime {
    label: String,
    rank: u64,
}

impl RelativeTime {
    pub fn from_age(age_secs: u64) -> Self {
        // The last bucket is unbounded, so the search always succeeds.
        let bucket = BUCKETS
            .iter()
            .find(|b| age_secs < b.upper)
            .unwrap_or(&BUCKETS[BUCKETS.len() - 1]);

        match bucket.wording {
            Wording::Fixed(label) => Self {
                label: label.to_string(),
                rank: bucket.lower,
            },
            Wording::Counted { unit, noun } => {
                let n = age_secs.saturating_add(unit / 2) / unit;
                let first_age_for_n = (n * unit).saturating_sub(unit / 2);
                Self {
                    label: format!("{n} {noun} ago"),
                    rank: first_age_for_n.max(bucket.lower),
                }
            }
        }
    }

    /// Classify a creation timestamp relative to `now` (both epoch seconds).
    /// Timestamps in the future count as brand new.
    pub fn between(created_at: i64, now: i64) -> Self {
        let age = now.saturating_sub(created_at).max(0) as u64;
        Self::from_age(age)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rank(&self) -> u64 {
        self.rank
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
