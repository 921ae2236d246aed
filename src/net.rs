//! src/net.rs
//!
//! Sensor polling: payload decoding, reading sources and the poll timer.

pub mod poller;
pub mod reading;
pub mod source;

pub use poller::{FetchOutcome, Poller};
pub use reading::Reading;
pub use source::{HttpSource, SampleSource, SimulatedSource};
