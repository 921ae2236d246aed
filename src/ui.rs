//! src/ui.rs
//!
//! UI composition: the `Panel` trait and the per-frame layout tree.

pub mod node;

pub use node::{Node, Panel, column, leaf, row};
