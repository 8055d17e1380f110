//! Skip-condition matching against a host profile.

use crate::domain::host_profile::HostProfile;
use crate::domain::role::SkipCondition;

/// Condition value for the `os` key that matches the whole Linux family.
const LINUX_FAMILY: &str = "linux";

/// Whether any condition matches `profile`.
///
/// Conditions are OR-ed; keys within a condition are AND-ed. `os: linux`
/// matches every Linux distribution identifier. Keys naming no profile field
/// and non-string values never match.
pub fn should_skip(profile: &HostProfile, conditions: &[SkipCondition]) -> bool {
    conditions.iter().any(|condition| condition_matches(profile, condition))
}

/// Whether every key of `condition` matches `profile`.
pub fn condition_matches(profile: &HostProfile, condition: &SkipCondition) -> bool {
    condition.entries().all(|(key, expected)| {
        let Some(expected) = expected else {
            return false;
        };
        if key == "os" && expected == LINUX_FAMILY {
            return profile.is_linux();
        }
        profile.field(key) == Some(expected)
    })
}
