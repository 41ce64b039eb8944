//! Small-carrier inclusion policy.

use crate::domain::shared::Resolved;

use super::super::value_objects::FleetInfo;

/// Default maximum fleet size for a "small carrier".
pub const DEFAULT_MAX_TRUCKS: u32 = 10;

/// Whether a driver stays in the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VettingDecision {
    /// Carrier is small enough, or could not be verified.
    Include,
    /// Carrier verifiably exceeds the fleet threshold.
    Exclude,
}

impl VettingDecision {
    /// True for [`VettingDecision::Include`].
    #[must_use]
    pub const fn is_include(&self) -> bool {
        matches!(self, Self::Include)
    }
}

/// Decides inclusion from a fleet resolution.
///
/// Fail-open by design: only a verified truck count above the threshold
/// excludes a driver. Missing DOT numbers, registry failures, and records
/// without a truck count all include.
#[derive(Debug, Clone, Copy)]
pub struct SmallCarrierPolicy {
    max_trucks: u32,
}

impl SmallCarrierPolicy {
    /// Create a policy with an explicit threshold.
    #[must_use]
    pub const fn new(max_trucks: u32) -> Self {
        Self { max_trucks }
    }

    /// The inclusion threshold.
    #[must_use]
    pub const fn max_trucks(&self) -> u32 {
        self.max_trucks
    }

    /// Apply the decision table to a fleet resolution.
    #[must_use]
    pub fn decide(&self, fleet: &Resolved<FleetInfo>) -> VettingDecision {
        match fleet {
            Resolved::Known(info) => match info.truck_units {
                Resolved::Known(trucks) if trucks > self.max_trucks => VettingDecision::Exclude,
                _ => VettingDecision::Include,
            },
            Resolved::Unknown | Resolved::Failed(_) => VettingDecision::Include,
        }
    }
}

impl Default for SmallCarrierPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRUCKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::DotNumber;
    use test_case::test_case;

    fn fleet_with_trucks(trucks: Resolved<u32>) -> Resolved<FleetInfo> {
        let mut info = FleetInfo::counts_unknown(DotNumber::from_raw("123").unwrap());
        info.truck_units = trucks;
        Resolved::Known(info)
    }

    #[test_case(1 => VettingDecision::Include; "single truck")]
    #[test_case(10 => VettingDecision::Include; "at the threshold")]
    #[test_case(11 => VettingDecision::Exclude; "one over the threshold")]
    #[test_case(150 => VettingDecision::Exclude; "large fleet")]
    fn verified_counts(trucks: u32) -> VettingDecision {
        SmallCarrierPolicy::default().decide(&fleet_with_trucks(Resolved::Known(trucks)))
    }

    #[test]
    fn unresolved_fleet_includes() {
        let policy = SmallCarrierPolicy::default();
        assert_eq!(policy.decide(&Resolved::Unknown), VettingDecision::Include);
        assert_eq!(
            policy.decide(&Resolved::Failed("timeout".to_string())),
            VettingDecision::Include
        );
    }

    #[test]
    fn record_without_truck_count_includes() {
        let policy = SmallCarrierPolicy::default();
        assert_eq!(
            policy.decide(&fleet_with_trucks(Resolved::Unknown)),
            VettingDecision::Include
        );
        assert_eq!(
            policy.decide(&fleet_with_trucks(Resolved::Failed("bad field".to_string()))),
            VettingDecision::Include
        );
    }

    #[test]
    fn custom_threshold() {
        let policy = SmallCarrierPolicy::new(3);
        assert_eq!(
            policy.decide(&fleet_with_trucks(Resolved::Known(3))),
            VettingDecision::Include
        );
        assert_eq!(
            policy.decide(&fleet_with_trucks(Resolved::Known(4))),
            VettingDecision::Exclude
        );
    }
}
