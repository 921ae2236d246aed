//! src/graph.rs
//!
//! Top-level `graph` module: the sample window, chart models and the
//! flow-vector figure.

pub mod buffer;
pub mod chart;
pub mod config;
pub mod spline;
pub mod vector;

/// Re-exports
pub use buffer::{Sample, SampleBuffer};
pub use chart::{ChartModel, Charts};
pub use vector::VectorFigure;
