//! src/net/source.rs
//!
//! Where readings come from: the sensor's HTTP endpoint, or a random-walk
//! simulator for running without hardware.

use std::sync::Mutex;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

use super::reading::{Quality, Reading};

/// Why a poll tick produced no reading.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("HTTP error, status {0}")]
    Status(u16),

    #[error("could not read response body: {0}")]
    Body(#[from] std::io::Error),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch worker panicked: {0}")]
    Panicked(String),
}

/// Anything the poller can fetch a reading from. Fetches run on worker threads.
pub trait SampleSource: Send + Sync {
    fn fetch(&self) -> Result<Reading, FetchError>;

    /// Short human-readable origin, shown in the title bar.
    fn describe(&self) -> String;
}

/// `GET <url>` returning the JSON reading.
pub struct HttpSource {
    agent: ureq::Agent,
    url: String,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            url: url.to_string(),
        }
    }
}

impl SampleSource for HttpSource {
    fn fetch(&self) -> Result<Reading, FetchError> {
        let response = match self.agent.get(&self.url).call() {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(t)) => {
                return Err(FetchError::Transport {
                    url: self.url.clone(),
                    reason: t.to_string(),
                });
            }
        };
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status(status));
        }
        let body = response.into_string()?;
        Ok(Reading::from_json(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[derive(Debug)]
struct WalkState {
    flow_x: f64,
    flow_y: f64,
    height: f64,
}

/// Random-walk readings bounded to plausible sensor ranges.
pub struct SimulatedSource {
    state: Mutex<WalkState>,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(WalkState {
                flow_x: 0.0,
                flow_y: 0.0,
                height: 500.0,
            }),
        }
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for SimulatedSource {
    fn fetch(&self) -> Result<Reading, FetchError> {
        let mut rng = rand::rng();
        // a poisoned lock only means a previous fetch panicked mid-step
        let mut s = self.state.lock().unwrap_or_else(|e| e.into_inner());
        s.flow_x = (s.flow_x + rng.random_range(-12.0..12.0)).clamp(-150.0, 150.0);
        s.flow_y = (s.flow_y + rng.random_range(-12.0..12.0)).clamp(-150.0, 150.0);
        s.height = (s.height + rng.random_range(-20.0..20.0)).clamp(0.0, 2000.0);
        Ok(Reading {
            flow_x: s.flow_x.round(),
            flow_y: s.flow_y.round(),
            height: s.height,
            quality: Quality::Number(rng.random_range(100..=255) as f64),
        })
    }

    fn describe(&self) -> String {
        "simulated sensor".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response and return the URL to hit.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut rdr = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while rdr.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let reply = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(reply.as_bytes());
        });
        format!("http://{addr}/data")
    }

    #[test]
    fn http_source_decodes_ok_response() {
        let url = serve_once(
            "200 OK",
            r#"{"flow_x": 4, "flow_y": -8, "height": 250.5, "quality": 201}"#,
        );
        let r = HttpSource::new(&url, Duration::from_secs(2)).fetch().unwrap();
        assert_eq!((r.flow_x, r.flow_y, r.height), (4.0, -8.0, 250.5));
        assert_eq!(r.quality, Quality::Number(201.0));
    }

    #[test]
    fn http_source_reports_bad_status() {
        let url = serve_once("500 Internal Server Error", "oops");
        let err = HttpSource::new(&url, Duration::from_secs(2)).fetch().unwrap_err();
        assert!(matches!(err, FetchError::Status(500)), "{err:?}");
    }

    #[test]
    fn http_source_reports_malformed_body() {
        let url = serve_once("200 OK", r#"{"flow_x": 1}"#);
        let err = HttpSource::new(&url, Duration::from_secs(2)).fetch().unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
    }

    #[test]
    fn simulated_readings_stay_in_range() {
        let src = SimulatedSource::new();
        for _ in 0..500 {
            let r = src.fetch().unwrap();
            assert!((-150.0..=150.0).contains(&r.flow_x));
            assert!((-150.0..=150.0).contains(&r.flow_y));
            assert!((0.0..=2000.0).contains(&r.height));
            assert!(matches!(r.quality, Quality::Number(q) if (100.0..=255.0).contains(&q)));
        }
    }

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        // grab a free port, then close it again
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let url = format!("http://{addr}/data");
        let src = HttpSource::new(&url, Duration::from_millis(500));
        match src.fetch() {
            Err(FetchError::Transport { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error, status 503");
        let decode = Reading::from_json("{").unwrap_err();
        assert!(FetchError::from(decode).to_string().starts_with("malformed payload"));
    }
}
