//! src/panels.rs
//!
//! Dashboard panels and re-exports.

pub mod graph;
pub mod history;
pub mod info;
pub mod settings;
pub mod status;
pub mod title;
pub mod vector;

pub use graph::GraphPanel;
pub use history::HistoryPanel;
pub use info::{InfoPanel, LiveValues};
pub use settings::SettingsPanel;
pub use status::{Status, StatusPanel};
pub use title::TitlePanel;
pub use vector::VectorPanel;
