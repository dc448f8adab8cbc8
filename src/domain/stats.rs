//! Running session counters fed directly by the arrival stream.
//!
//! The event buffer is a truncated recency window, so totals are never
//! recomputed from it. `Stats` accumulates from each arriving event instead
//! and stays correct after old events are evicted. Counters are cumulative
//! for the life of the session: no decay, no windowing.

use serde::{Deserialize, Serialize};

use super::event::{Event, Severity};

/// Monotonically non-decreasing counters for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total: u64,
    pub critical: u64,
    pub errors: u64,
    pub warnings: u64,
}

impl Stats {
    /// Records one arrived event.
    ///
    /// `total` always increments; at most one severity counter increments
    /// with it. Info and unrecognized severities count toward the total
    /// only.
    pub fn record(&mut self, event: &Event) {
        self.total += 1;
        match event.severity {
            Severity::Critical => self.critical += 1,
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info | Severity::Unknown => {}
        }
    }

    /// Sum of the severity-specific counters.
    pub fn classified(&self) -> u64 {
        self.critical + self.errors + self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn event_with_severity(severity: Severity) -> Event {
        Event {
            id: None,
            event_type: "com.test.event".to_string(),
            source: "https://test.com/demo".to_string(),
            time: None,
            subject: "test".to_string(),
            severity,
            category: None,
            correlation_id: None,
            data: None,
        }
    }

    #[test]
    fn record_increments_total_and_matching_counter() {
        let mut stats = Stats::default();
        stats.record(&event_with_severity(Severity::Critical));
        stats.record(&event_with_severity(Severity::Error));
        stats.record(&event_with_severity(Severity::Warning));

        assert_eq!(stats.total, 3);
        assert_eq!(stats.critical, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.warnings, 1);
    }

    #[test]
    fn info_increments_total_only() {
        let mut stats = Stats::default();
        stats.record(&event_with_severity(Severity::Info));

        assert_eq!(stats.total, 1);
        assert_eq!(stats.classified(), 0);
    }

    #[test]
    fn unknown_severity_increments_total_only() {
        let mut stats = Stats::default();
        stats.record(&event_with_severity(Severity::Unknown));

        assert_eq!(stats.total, 1);
        assert_eq!(stats.classified(), 0);
    }

    fn arb_severity() -> impl Strategy<Value = Severity> {
        prop_oneof![
            Just(Severity::Critical),
            Just(Severity::Error),
            Just(Severity::Warning),
            Just(Severity::Info),
            Just(Severity::Unknown),
        ]
    }

    proptest! {
        #[test]
        fn total_equals_recorded_count(severities in prop::collection::vec(arb_severity(), 0..200)) {
            let mut stats = Stats::default();
            for severity in &severities {
                stats.record(&event_with_severity(*severity));
            }
            prop_assert_eq!(stats.total, severities.len() as u64);
        }

        #[test]
        fn classified_never_exceeds_total(severities in prop::collection::vec(arb_severity(), 0..200)) {
            let mut stats = Stats::default();
            for severity in &severities {
                stats.record(&event_with_severity(*severity));
            }
            prop_assert!(stats.classified() <= stats.total);
        }
    }
}
