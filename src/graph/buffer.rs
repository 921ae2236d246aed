//! src/graph/buffer.rs
//!
//! Sliding window of recent samples kept as parallel sequences, plus the
//! owned snapshot handed to the chart renderer.

use std::collections::VecDeque;

/// Default number of samples kept in the window.
pub const DEFAULT_CAPACITY: usize = 50;

/// One successful poll tick, as buffered for the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Time-of-day label captured when the reading arrived.
    pub timestamp: String,
    pub flow_x: f64,
    pub flow_y: f64,
    pub height: f64,
}

/// Ordered view of the buffer (oldest first); all four sequences share a length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub timestamps: Vec<String>,
    pub flow_x: Vec<f64>,
    pub flow_y: Vec<f64>,
    pub height: Vec<f64>,
}

#[derive(Debug)]
pub struct SampleBuffer {
    timestamps: VecDeque<String>,
    flow_x: VecDeque<f64>,
    flow_y: VecDeque<f64>,
    height: VecDeque<f64>,
    capacity: usize,
}

impl SampleBuffer {
    /// Create an empty buffer bounded to `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            timestamps: VecDeque::with_capacity(capacity + 1),
            flow_x: VecDeque::with_capacity(capacity + 1),
            flow_y: VecDeque::with_capacity(capacity + 1),
            height: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Change the bound. Nothing is truncated: each later push still evicts
    /// at most one entry, so a lowered bound is not reached by pushing alone.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Append a sample; if that puts the window over capacity, drop the single
    /// oldest entry.
    ///
    /// All four sequences grow and shrink in lockstep, so `len()` is the same
    /// for each of them after every call.
    pub fn push(&mut self, sample: Sample) {
        self.timestamps.push_back(sample.timestamp);
        self.flow_x.push_back(sample.flow_x);
        self.flow_y.push_back(sample.flow_y);
        self.height.push_back(sample.height);

        if self.timestamps.len() > self.capacity {
            self.timestamps.pop_front();
            self.flow_x.pop_front();
            self.flow_y.pop_front();
            self.height.pop_front();
        }
    }

    /// Newest sample, if any.
    pub fn latest(&self) -> Option<Sample> {
        Some(Sample {
            timestamp: self.timestamps.back()?.clone(),
            flow_x: *self.flow_x.back()?,
            flow_y: *self.flow_y.back()?,
            height: *self.height.back()?,
        })
    }

    /// Iterate samples oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.timestamps
            .iter()
            .zip(&self.flow_x)
            .zip(&self.flow_y)
            .zip(&self.height)
            .map(|(((ts, &fx), &fy), &h)| Sample {
                timestamp: ts.clone(),
                flow_x: fx,
                flow_y: fy,
                height: h,
            })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            timestamps: self.timestamps.iter().cloned().collect(),
            flow_x: self.flow_x.iter().copied().collect(),
            flow_y: self.flow_y.iter().copied().collect(),
            height: self.height.iter().copied().collect(),
        }
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn sample(i: usize) -> Sample {
        Sample {
            timestamp: format!("t{i}"),
            flow_x: i as f64,
            flow_y: -(i as f64),
            height: 10.0 * i as f64,
        }
    }

    #[test]
    fn push_below_capacity_keeps_everything_in_order() {
        let mut buf = SampleBuffer::new(10);
        for i in 0..7 {
            buf.push(sample(i));
        }
        assert_eq!(buf.len(), 7);
        let snap = buf.snapshot();
        assert_eq!(snap.timestamps, (0..7).map(|i| format!("t{i}")).collect::<Vec<_>>());
        assert_eq!(snap.flow_x, (0..7).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn overflow_evicts_oldest_across_all_fields() {
        let mut buf = SampleBuffer::new(3);
        for i in 0..5 {
            buf.push(sample(i));
        }
        let snap = buf.snapshot();
        assert_eq!(snap.timestamps, vec!["t2", "t3", "t4"]);
        assert_eq!(snap.flow_x, vec![2.0, 3.0, 4.0]);
        assert_eq!(snap.flow_y, vec![-2.0, -3.0, -4.0]);
        assert_eq!(snap.height, vec![20.0, 30.0, 40.0]);
    }

    #[test]
    fn random_push_sequences_retain_most_recent_window() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let capacity = rng.random_range(10..=200);
            let pushes = rng.random_range(0..500);
            let mut buf = SampleBuffer::new(capacity);
            for i in 0..pushes {
                buf.push(sample(i));
                assert!(buf.len() <= capacity);
            }
            let expected: Vec<f64> = (pushes.saturating_sub(capacity)..pushes)
                .map(|i| i as f64)
                .collect();
            assert_eq!(buf.snapshot().flow_x, expected);
        }
    }

    #[test]
    fn lowering_capacity_evicts_one_entry_per_push() {
        let mut buf = SampleBuffer::new(20);
        for i in 0..20 {
            buf.push(sample(i));
        }
        buf.set_capacity(10);
        assert_eq!(buf.len(), 20);

        buf.push(sample(20));
        assert_eq!(buf.len(), 20);
        assert_eq!(buf.snapshot().timestamps.first().map(String::as_str), Some("t1"));

        for i in 21..30 {
            buf.push(sample(i));
        }
        assert_eq!(buf.len(), 20);
        assert_eq!(buf.latest(), Some(sample(29)));
    }

    #[test]
    fn raising_capacity_lets_the_window_grow() {
        let mut buf = SampleBuffer::new(3);
        for i in 0..3 {
            buf.push(sample(i));
        }
        buf.set_capacity(5);
        for i in 3..8 {
            buf.push(sample(i));
        }
        assert_eq!(buf.snapshot().flow_x, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn latest_and_iter_follow_push_order() {
        let mut buf = SampleBuffer::new(4);
        assert!(buf.latest().is_none());
        for i in 0..6 {
            buf.push(sample(i));
        }
        assert_eq!(buf.latest(), Some(sample(5)));
        let xs: Vec<f64> = buf.iter().map(|s| s.flow_x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0, 5.0]);
    }
}
