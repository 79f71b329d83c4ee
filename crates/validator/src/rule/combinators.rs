//! Pure concatenation of rule sequences.
//!
//! None of these deduplicate or reorder: a rule that appears twice is
//! evaluated twice.

use super::{Rule, Rules};

/// Returns `rules` with `rule` appended.
#[must_use]
pub fn append<R, M>(mut rules: Rules<R, M>, rule: Rule<R, M>) -> Rules<R, M> {
    rules.push(rule);
    rules
}

/// Returns `first` followed by `second`.
#[must_use]
pub fn append_all<R, M>(mut first: Rules<R, M>, second: Rules<R, M>) -> Rules<R, M> {
    first.extend(second);
    first
}

/// Returns `rules` with `rule` in front.
#[must_use]
pub fn prepend<R, M>(rule: Rule<R, M>, rules: Rules<R, M>) -> Rules<R, M> {
    let mut out = Vec::with_capacity(rules.len() + 1);
    out.push(rule);
    out.extend(rules);
    out
}

/// Flattens a sequence of sequences, keeping order and multiplicity.
#[must_use]
pub fn combine_all<R, M>(groups: impl IntoIterator<Item = Rules<R, M>>) -> Rules<R, M> {
    groups.into_iter().flatten().collect()
}
