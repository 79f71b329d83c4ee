//! Ordered, short-circuiting rule evaluation.

use warden_value::ValueLimits;

use super::{CallContext, Rule};
use crate::foundation::ValidationError;

/// Checks `rules` in order under the default [`ValueLimits`], stopping at
/// the first rejection.
pub fn check_all<R: CallContext, M>(
    rules: &[Rule<R, M>],
    request: &R,
    message: &M,
) -> Result<(), ValidationError> {
    check_all_with(rules, request, message, &ValueLimits::default())
}

/// [`check_all`] under explicit limits.
///
/// The returned error carries the index of the rejecting rule as the
/// `rule_index` parameter.
pub fn check_all_with<R: CallContext, M>(
    rules: &[Rule<R, M>],
    request: &R,
    message: &M,
    limits: &ValueLimits,
) -> Result<(), ValidationError> {
    for (index, rule) in rules.iter().enumerate() {
        if let Err(err) = rule.check(request, message, limits) {
            tracing::debug!(
                rule = rule.name(),
                kind = %rule.kind(),
                index,
                reason = %err.reason,
                "request rejected"
            );
            return Err(err.with_param("rule_index", index.to_string()));
        }
    }
    Ok(())
}

/// Whether every rule accepts the request.
pub fn passes_all<R: CallContext, M>(rules: &[Rule<R, M>], request: &R, message: &M) -> bool {
    check_all(rules, request, message).is_ok()
}
