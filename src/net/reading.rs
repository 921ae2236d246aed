//! src/net/reading.rs
//!
//! Decoded `/data` payload.

use std::fmt;

use serde::Deserialize;

use crate::graph::Sample;
use crate::graph::vector::format_number;

/// One sensor reading as served by the endpoint.
///
/// The firmware's own handler names the flow fields `raw_flow_x`/`raw_flow_y`;
/// both spellings are accepted. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Reading {
    #[serde(alias = "raw_flow_x")]
    pub flow_x: f64,
    #[serde(alias = "raw_flow_y")]
    pub flow_y: f64,
    pub height: f64,
    pub quality: Quality,
}

/// Quality is shown verbatim and may arrive as a number or a string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quality {
    Number(f64),
    Text(String),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Number(n) => f.write_str(&format_number(*n)),
            Quality::Text(s) => f.write_str(s),
        }
    }
}

impl Reading {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Buffered part of the reading, stamped with `timestamp`.
    pub fn to_sample(&self, timestamp: String) -> Sample {
        Sample {
            timestamp,
            flow_x: self.flow_x,
            flow_y: self.flow_y,
            height: self.height,
        }
    }
}
