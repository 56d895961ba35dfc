pub mod excerpt;

pub use excerpt::{excerpt, truncate, DEFAULT_PAD};
