// ABOUTME: Parsed value types shared by the normalizer and the adapters.
// ABOUTME: Image references and relative-time buckets.

mod image_ref;
mod relative_time;

pub use image_ref::{DEFAULT_REGISTRY, DEFAULT_TAG, ImageRef};
pub use relative_time::RelativeTime;
