//! Listener-rule priority derivation.
//!
//! Load-balancer listener rules need unique priorities in 1..=50000. Priority
//! 1 is permanently reserved for the admin domain, so tenant priorities are
//! the admin-service ordinal offset by one. The admin service owns ordinal
//! allocation; this module only derives and bounds-checks.

use std::fmt;

use crate::error::ValidationError;

/// Offset applied to tenant ordinals (the admin rule occupies priority 1).
const RULE_NUMBER_OFFSET: u32 = 1;

/// Highest priority the load balancer accepts.
const MAX_RULE_PRIORITY: u32 = 50_000;

/// Routing priority of a tenant's listener rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RulePriority(u32);

impl RulePriority {
    /// Derive the priority for an admin-service ordinal.
    ///
    /// Pure and injective: distinct ordinals never collide. Ordinal 0 is
    /// rejected because it would map onto the reserved admin priority.
    pub fn for_ordinal(ordinal: u32) -> Result<Self, ValidationError> {
        let priority = u64::from(ordinal) + u64::from(RULE_NUMBER_OFFSET);

        if ordinal == 0 || priority > u64::from(MAX_RULE_PRIORITY) {
            return Err(ValidationError::PriorityRange { ordinal, priority });
        }

        Ok(Self(priority as u32))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RulePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_ordinal_by_one() {
        assert_eq!(RulePriority::for_ordinal(5).unwrap().value(), 6);
        assert_eq!(RulePriority::for_ordinal(1).unwrap().value(), 2);
    }

    #[test]
    fn never_produces_the_reserved_admin_priority() {
        assert!(RulePriority::for_ordinal(0).is_err());
    }

    #[test]
    fn bounded_by_max_rule_priority() {
        assert_eq!(
            RulePriority::for_ordinal(49_999).unwrap().value(),
            50_000
        );
        assert!(RulePriority::for_ordinal(50_000).is_err());
        assert!(RulePriority::for_ordinal(u32::MAX).is_err());
    }

    #[test]
    fn distinct_ordinals_never_collide() {
        let mut seen = std::collections::HashSet::new();
        for ordinal in 1..=1000 {
            let priority = RulePriority::for_ordinal(ordinal).unwrap();
            assert!(seen.insert(priority.value()), "collision at {ordinal}");
        }
    }

    #[test]
    fn monotonic_in_the_ordinal() {
        let a = RulePriority::for_ordinal(10).unwrap();
        let b = RulePriority::for_ordinal(11).unwrap();
        assert!(a < b);
    }
}
