//! Series aggregation: many trials, one 8-way frequency table.

use log::debug;
use serde::Serialize;

use crate::event::{Orientation, Tag, generate_observation};
use crate::source::RandomSource;

/// Outcome counts for one series, indexed by `(Orientation, Tag, Tag)`.
///
/// The partition is total and disjoint: every trial increments exactly one of
/// the 8 counters, so the counters always sum to the number of recorded
/// trials. Read-only once the series completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: [u64; 8],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self { counts: [0; 8] }
    }

    /// Build a table from raw counters, indexed as
    /// `orientation * 4 + tag1 * 2 + tag2` with `Plus` before `Minus`.
    pub fn from_counts(counts: [u64; 8]) -> Self {
        Self { counts }
    }

    fn slot(orientation: Orientation, tag1: Tag, tag2: Tag) -> usize {
        orientation.index() * 4 + tag1.index() * 2 + tag2.index()
    }

    /// Record one observation triple.
    pub fn record(&mut self, orientation: Orientation, tag1: Tag, tag2: Tag) {
        self.counts[Self::slot(orientation, tag1, tag2)] += 1;
    }

    /// Counter for one `(orientation, tag1, tag2)` triple.
    pub fn count(&self, orientation: Orientation, tag1: Tag, tag2: Tag) -> u64 {
        self.counts[Self::slot(orientation, tag1, tag2)]
    }

    /// Total recorded trials (sum of all 8 counters).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Relative frequency of one triple. The table must be non-empty.
    pub fn frequency(&self, orientation: Orientation, tag1: Tag, tag2: Tag) -> f64 {
        let total = self.total();
        assert!(total > 0, "frequency requested from an empty table");
        self.count(orientation, tag1, tag2) as f64 / total as f64
    }

    /// Raw counters in slot order.
    pub fn counts(&self) -> &[u64; 8] {
        &self.counts
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `trial_count` trials at the given detector angles and tabulate the
/// outcomes. `trial_count` must be positive; a zero-length series is a
/// precondition violation, not an empty result.
pub fn run_series(
    rng: &mut dyn RandomSource,
    angle1: f64,
    angle2: f64,
    trial_count: u32,
) -> FrequencyTable {
    assert!(trial_count > 0, "run_series requires a positive trial count");

    let mut table = FrequencyTable::new();
    for _ in 0..trial_count {
        let obs = generate_observation(rng, angle1, angle2);
        table.record(obs.orientation, obs.tag1, obs.tag2);
    }

    debug!(
        "series complete: generator={} angle1={:.6} angle2={:.6} trials={} counts={:?}",
        rng.name(),
        angle1,
        angle2,
        trial_count,
        table.counts()
    );
    table
}
