//! Rolling window of force readings plus the table-view time counter.
//!
//! The series always holds exactly [`SERIES_LEN`] readings, oldest first,
//! starting as all zeros. Storage is an index-based ring (head pointer +
//! modulo) so recording is O(1); enumeration re-orders on the fly so the
//! renderer always sees oldest-to-newest regardless of the head position.

use crate::config::{SERIES_LEN, TIME_STEP};

/// Fixed-capacity rolling window of the last [`SERIES_LEN`] readings.
///
/// Owns all mutation of historical data: [`record`](Self::record) is the only
/// way a value enters the window, and it atomically updates the window, the
/// latest-value scalar, and the time counter.
pub struct ReadingSeries {
    /// Ring storage. `head` indexes the oldest sample.
    values: [i32; SERIES_LEN],

    /// Index of the oldest sample; the newest lives at `head - 1` (mod len).
    head: usize,

    /// Most recently recorded value. Always equals the last element.
    latest: i32,

    /// Monotonic time label, advanced by [`TIME_STEP`] per accepted reading.
    time: i32,
}

impl ReadingSeries {
    /// Create a series of all-zero readings at time zero.
    pub const fn new() -> Self {
        Self {
            values: [0; SERIES_LEN],
            head: 0,
            latest: 0,
            time: 0,
        }
    }

    /// Record a new reading: the oldest sample drops out, `value` becomes the
    /// newest, and the time counter advances one step.
    pub const fn record(&mut self, value: i32) {
        self.values[self.head] = value;
        self.head = (self.head + 1) % SERIES_LEN;
        self.latest = value;
        self.time += TIME_STEP;
    }

    /// Most recently recorded value (0 before the first reading).
    #[inline]
    pub const fn latest(&self) -> i32 { self.latest }

    /// Current time counter value.
    #[inline]
    pub const fn time(&self) -> i32 { self.time }

    /// Reading at position `i` in oldest-first order (`i < SERIES_LEN`).
    #[inline]
    pub const fn get(&self, i: usize) -> i32 { self.values[(self.head + i) % SERIES_LEN] }

    /// Iterate the window oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        (0..SERIES_LEN).map(move |i| self.get(i))
    }

    /// Time label for the table row at oldest-first position `i`:
    /// the oldest row reads `SERIES_LEN - 1` steps before the current time.
    #[inline]
    pub const fn time_label(&self, i: usize) -> i32 {
        self.time - (SERIES_LEN as i32 - 1 - i as i32) * TIME_STEP
    }
}

impl Default for ReadingSeries {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(series: &ReadingSeries) -> Vec<i32> { series.iter().collect() }

    #[test]
    fn test_new_series_is_all_zeros() {
        let series = ReadingSeries::new();
        assert_eq!(collect(&series), vec![0; SERIES_LEN], "series starts zero-filled");
        assert_eq!(series.latest(), 0, "latest starts at 0");
        assert_eq!(series.time(), 0, "time counter starts at 0");
    }

    #[test]
    fn test_record_appends_newest_last() {
        let mut series = ReadingSeries::new();
        series.record(100);
        series.record(200);

        let values = collect(&series);
        assert_eq!(values[SERIES_LEN - 1], 200, "newest reading is the last element");
        assert_eq!(values[SERIES_LEN - 2], 100, "previous reading sits just before it");
        assert_eq!(values[0], 0, "unfilled slots are still the initial zeros");
    }

    #[test]
    fn test_window_keeps_last_n_in_order() {
        let mut series = ReadingSeries::new();

        // Record well past capacity; only the last SERIES_LEN survive
        for v in 1..=25 {
            series.record(v * 10);
        }

        let expected: Vec<i32> = (16..=25).map(|v| v * 10).collect();
        assert_eq!(collect(&series), expected, "window must equal the last 10 readings in order");
        assert_eq!(series.latest(), 250, "latest must equal the most recent reading");
    }

    #[test]
    fn test_length_is_always_exact() {
        let mut series = ReadingSeries::new();
        for v in 0..100 {
            series.record(v);
            assert_eq!(series.iter().count(), SERIES_LEN, "window length never changes");
        }
    }

    #[test]
    fn test_get_matches_iter() {
        let mut series = ReadingSeries::new();
        for v in 0..7 {
            series.record(v * 3);
        }
        let values = collect(&series);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(series.get(i), v, "get(i) must agree with oldest-first iteration");
        }
    }

    #[test]
    fn test_time_advances_per_reading() {
        let mut series = ReadingSeries::new();
        for _ in 0..20 {
            series.record(1);
        }
        assert_eq!(series.time(), 20 * TIME_STEP, "time advances one step per reading");
    }

    #[test]
    fn test_time_labels_span_window() {
        let mut series = ReadingSeries::new();

        // 20 readings at step 1 -> labels must read 11..=20, oldest first
        for _ in 0..20 {
            series.record(0);
        }
        let labels: Vec<i32> = (0..SERIES_LEN).map(|i| series.time_label(i)).collect();
        assert_eq!(labels, (11..=20).collect::<Vec<i32>>(), "labels run Time 11 .. Time 20");
    }

    #[test]
    fn test_negative_readings_accepted() {
        let mut series = ReadingSeries::new();
        series.record(-500);
        assert_eq!(series.latest(), -500, "readings are signed");
    }
}
