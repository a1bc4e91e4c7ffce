// Re-exporting models for easier access
pub mod global;
pub mod graph;
pub mod serde_parsers;
pub mod ticker;

// Public exports
pub use {global::*, graph::*, serde_parsers::*, ticker::*};
