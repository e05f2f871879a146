mod expander;

pub use expander::{normalize, PathExpander};
