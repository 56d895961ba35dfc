pub mod types;

pub use types::{BrandRule, Finding, FindingKind, Page};
