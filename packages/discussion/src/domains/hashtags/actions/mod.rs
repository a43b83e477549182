pub mod reconcile;

pub use reconcile::{parse_tags, reconcile};
