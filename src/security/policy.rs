//! Path-based access policy rules.
//!
//! # Responsibilities
//! - Match request paths against an ordered rule list
//! - Exact match (`/api/v1/ping`) and prefix wildcard (`/actuator/**`)
//! - Default-deny for anything no rule matches
//!
//! # Design Decisions
//! - First match wins; rule order is registration order
//! - No regex to guarantee O(n) matching over the rule list
//! - Evaluation is pure: (table, path) → policy, no side effects

use crate::config::SecurityConfig;

/// Access policy attached to a path rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Admit without credentials.
    Public,
    /// Require a valid credential.
    Authenticated,
}

/// A compiled path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathPattern {
    /// Matches the path exactly.
    Exact(String),
    /// Matches the bare prefix and anything under it (`/**` wildcard).
    Prefix(String),
}

impl PathPattern {
    /// Compile a pattern string. `/actuator/**` becomes a prefix match on
    /// `/actuator`; anything else is an exact match.
    fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => PathPattern::Prefix(prefix.to_string()),
            None => PathPattern::Exact(pattern.to_string()),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(expected) => path == expected,
            PathPattern::Prefix(prefix) => {
                path == prefix
                    || (path.len() > prefix.len()
                        && path.starts_with(prefix.as_str())
                        && path.as_bytes()[prefix.len()] == b'/')
            }
        }
    }
}

/// One (pattern, policy) pair.
#[derive(Debug, Clone)]
pub struct PathRule {
    pattern: PathPattern,
    policy: AccessPolicy,
}

impl PathRule {
    /// Create a rule from a pattern string.
    pub fn new(pattern: &str, policy: AccessPolicy) -> Self {
        Self {
            pattern: PathPattern::parse(pattern),
            policy,
        }
    }
}

/// Ordered rule table evaluated top-down with a deny fallback.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: Vec<PathRule>,
}

impl PolicyTable {
    /// Create a table from an explicit rule list.
    pub fn new(rules: Vec<PathRule>) -> Self {
        Self { rules }
    }

    /// Build the table from the configured allow-list. Each configured
    /// pattern becomes a Public rule, in config order.
    pub fn from_config(security: &SecurityConfig) -> Self {
        let rules = security
            .public_paths
            .iter()
            .map(|pattern| PathRule::new(pattern, AccessPolicy::Public))
            .collect();
        Self::new(rules)
    }

    /// Decide the policy for a request path. First matching rule wins;
    /// unmatched paths require authentication.
    pub fn evaluate(&self, path: &str) -> AccessPolicy {
        for rule in &self.rules {
            if rule.pattern.matches(path) {
                return rule.policy;
            }
        }
        AccessPolicy::Authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> PolicyTable {
        PolicyTable::from_config(&SecurityConfig::default())
    }

    #[test]
    fn actuator_namespace_is_public() {
        let table = default_table();
        assert_eq!(table.evaluate("/actuator"), AccessPolicy::Public);
        assert_eq!(table.evaluate("/actuator/health"), AccessPolicy::Public);
        assert_eq!(
            table.evaluate("/actuator/health/liveness"),
            AccessPolicy::Public
        );
    }

    #[test]
    fn wildcard_does_not_match_lookalike_prefix() {
        let table = default_table();
        // "/actuators" shares a string prefix but is a different namespace.
        assert_eq!(table.evaluate("/actuators"), AccessPolicy::Authenticated);
    }

    #[test]
    fn ping_is_public_exact_only() {
        let table = default_table();
        assert_eq!(table.evaluate("/api/v1/ping"), AccessPolicy::Public);
        // Exact rules do not admit sub-paths.
        assert_eq!(
            table.evaluate("/api/v1/ping/extra"),
            AccessPolicy::Authenticated
        );
    }

    #[test]
    fn info_requires_authentication() {
        // The original allow-list leaves /api/v1/info gated; keep it that way.
        let table = default_table();
        assert_eq!(table.evaluate("/api/v1/info"), AccessPolicy::Authenticated);
    }

    #[test]
    fn unmatched_path_falls_through_to_deny() {
        let table = default_table();
        assert_eq!(
            table.evaluate("/api/v1/unknown"),
            AccessPolicy::Authenticated
        );
        assert_eq!(table.evaluate("/"), AccessPolicy::Authenticated);
    }

    #[test]
    fn first_match_wins() {
        let table = PolicyTable::new(vec![
            PathRule::new("/api/**", AccessPolicy::Public),
            PathRule::new("/api/v1/secret", AccessPolicy::Authenticated),
        ]);
        // The later, stricter rule is shadowed by the earlier wildcard.
        assert_eq!(table.evaluate("/api/v1/secret"), AccessPolicy::Public);
    }

    #[test]
    fn empty_table_denies_everything() {
        let table = PolicyTable::new(Vec::new());
        assert_eq!(table.evaluate("/api/v1/ping"), AccessPolicy::Authenticated);
    }
}
