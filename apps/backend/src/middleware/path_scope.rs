//! Include/exclude path rules governing which requests the admin gate
//! inspects.
//!
//! Patterns compare path segments; a trailing `**` segment matches any
//! number (including zero) of remaining segments. Exclude patterns take
//! absolute precedence over include patterns, so an exact exclude beats a
//! broader wildcard include (`/admin/**` include plus `/admin/employee/login`
//! exclude leaves the login path uninspected).

/// Outcome of matching a request path against the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateScope {
    /// An exclude pattern matched; the gate must not inspect the request.
    Excluded,
    /// An include pattern matched and no exclude did; the gate inspects.
    Included,
    /// No pattern matched; the request is outside the gate's jurisdiction.
    Unmatched,
}

/// A single path pattern such as `/admin/**` or `/admin/employee/login`.
#[derive(Debug, Clone)]
pub struct PathPattern {
    segments: Vec<String>,
    trailing_wildcard: bool,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let mut segments: Vec<String> = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let trailing_wildcard = segments.last().map(|s| s == "**").unwrap_or(false);
        if trailing_wildcard {
            segments.pop();
        }

        Self {
            segments,
            trailing_wildcard,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if self.trailing_wildcard {
            parts.len() >= self.segments.len()
                && self.segments.iter().zip(parts.iter()).all(|(a, b)| a == b)
        } else {
            parts.len() == self.segments.len()
                && self.segments.iter().zip(parts.iter()).all(|(a, b)| a == b)
        }
    }
}

/// Ordered include/exclude pattern sets, immutable after startup.
#[derive(Debug, Clone)]
pub struct PathRules {
    include: Vec<PathPattern>,
    exclude: Vec<PathPattern>,
}

impl PathRules {
    pub fn new(include: Vec<PathPattern>, exclude: Vec<PathPattern>) -> Self {
        Self { include, exclude }
    }

    pub fn scope(&self, path: &str) -> GateScope {
        // Exclude wins even when an include pattern also matches.
        if self.exclude.iter().any(|p| p.matches(path)) {
            return GateScope::Excluded;
        }
        if self.include.iter().any(|p| p.matches(path)) {
            GateScope::Included
        } else {
            GateScope::Unmatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_rules() -> PathRules {
        PathRules::new(
            vec![PathPattern::parse("/admin/**")],
            vec![PathPattern::parse("/admin/employee/login")],
        )
    }

    #[test]
    fn exact_pattern_matches_only_the_exact_path() {
        let pattern = PathPattern::parse("/admin/employee/login");

        assert!(pattern.matches("/admin/employee/login"));
        assert!(pattern.matches("/admin/employee/login/"));
        assert!(!pattern.matches("/admin/employee"));
        assert!(!pattern.matches("/admin/employee/login/extra"));
        assert!(!pattern.matches("/admin/employee/logout"));
    }

    #[test]
    fn trailing_wildcard_matches_zero_or_more_segments() {
        let pattern = PathPattern::parse("/admin/**");

        assert!(pattern.matches("/admin"));
        assert!(pattern.matches("/admin/orders"));
        assert!(pattern.matches("/admin/orders/list"));
        assert!(!pattern.matches("/administrator"));
        assert!(!pattern.matches("/public/menu"));
    }

    #[test]
    fn segments_are_not_prefixes() {
        let pattern = PathPattern::parse("/admin/orders/**");

        assert!(pattern.matches("/admin/orders/42"));
        assert!(!pattern.matches("/admin/ordersarchive"));
    }

    #[test]
    fn exclude_beats_include() {
        let rules = admin_rules();

        assert_eq!(rules.scope("/admin/employee/login"), GateScope::Excluded);
        assert_eq!(rules.scope("/admin/orders/list"), GateScope::Included);
        assert_eq!(rules.scope("/admin"), GateScope::Included);
    }

    #[test]
    fn unmatched_paths_are_out_of_jurisdiction() {
        let rules = admin_rules();

        assert_eq!(rules.scope("/public/menu"), GateScope::Unmatched);
        assert_eq!(rules.scope("/health"), GateScope::Unmatched);
        assert_eq!(rules.scope("/"), GateScope::Unmatched);
    }

    #[test]
    fn multiple_patterns_are_unioned() {
        let rules = PathRules::new(
            vec![
                PathPattern::parse("/admin/**"),
                PathPattern::parse("/internal/**"),
            ],
            vec![
                PathPattern::parse("/admin/employee/login"),
                PathPattern::parse("/internal/status"),
            ],
        );

        assert_eq!(rules.scope("/internal/jobs"), GateScope::Included);
        assert_eq!(rules.scope("/internal/status"), GateScope::Excluded);
        assert_eq!(rules.scope("/admin/orders"), GateScope::Included);
    }
}
