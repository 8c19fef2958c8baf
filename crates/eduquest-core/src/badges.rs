//! Badge rule table.
//!
//! A badge is granted once the cumulative score across all games crosses a
//! fixed threshold, and is never revoked. The rule table is data, not logic:
//! the engine walks whatever ordered table it was constructed with.

use serde::{Deserialize, Serialize};

/// One badge rule: cross `threshold` total points, earn `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRule {
    pub threshold: u32,
    pub name: String,
}

impl BadgeRule {
    pub fn new(threshold: u32, name: &str) -> Self {
        Self {
            threshold,
            name: name.to_string(),
        }
    }
}

/// The default table, ascending by threshold.
pub fn default_rules() -> Vec<BadgeRule> {
    vec![
        BadgeRule::new(30, "Bronze"),
        BadgeRule::new(60, "Silver"),
        BadgeRule::new(100, "Gold"),
    ]
}

/// Names from `rules` that `total` has crossed but `earned` does not yet
/// contain, in rule-table order.
///
/// Thresholds are evaluated independently: a jump from 0 to 100 yields all
/// three default badges in one call.
pub fn newly_earned<'a>(rules: &'a [BadgeRule], earned: &[String], total: u32) -> Vec<&'a str> {
    rules
        .iter()
        .filter(|rule| total >= rule.threshold && !earned.iter().any(|b| *b == rule.name))
        .map(|rule| rule.name.as_str())
        .collect()
}
