//! Occurrence generation.
//!
//! The only place that talks to the rrule crate. Everything above it works with
//! plain epoch seconds.

use rrule::RRuleSet;

use crate::error::{CalvisError, CalvisResult};
use crate::event::TimeInterval;
use crate::recurrence::rule::NormalizedRule;

/// A parsed rule set, ready to be expanded.
#[derive(Debug, Clone)]
pub struct Schedule {
    set: RRuleSet,
}

impl Schedule {
    pub fn parse(rule: &NormalizedRule) -> CalvisResult<Self> {
        let set = rule
            .to_ics_string()
            .parse::<RRuleSet>()
            .map_err(|e| CalvisError::MalformedRule {
                rule: rule.rrule().to_string(),
                reason: e.to_string(),
            })?
            // Enables rrule's iteration guard, so rules that never match terminate
            .limit();

        Ok(Schedule { set })
    }

    /// Occurrence starts `t` with `window.start_time <= t <= window.end_time`, in order.
    ///
    /// Lazy: nothing past the window end is ever generated, so unbounded rules
    /// (no COUNT or UNTIL) still yield a finite sequence. rrule cannot seek, so
    /// starts between the anchor and the window start are walked through and skipped.
    pub fn starts_within(&self, window: TimeInterval) -> impl Iterator<Item = i64> + '_ {
        (&self.set)
            .into_iter()
            .map(|dt| dt.timestamp())
            .skip_while(move |start| *start < window.start_time)
            .take_while(move |start| *start <= window.end_time)
    }
}
