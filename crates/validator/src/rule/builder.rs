//! Fluent rule pipeline builder.

use std::borrow::Cow;

use warden_value::DynamicValue;

use super::{Rule, Rules};

/// Accumulates rules in order, one method per rule kind.
///
/// The builder is owned by whoever is assembling a pipeline. [`build`]
/// returns a snapshot; later additions do not affect snapshots already
/// taken.
///
/// [`build`]: RuleBuilder::build
///
/// # Examples
///
/// ```rust
/// use warden_validator::rule::RuleBuilder;
/// use warden_value::{DynamicValue, Principal};
///
/// struct Msg {
///     payload: DynamicValue,
/// }
///
/// let rules = RuleBuilder::<Principal, Msg>::new()
///     .require_auth()
///     .dynamic_size(|m: &Msg| &m.payload, None, Some(1024))
///     .dynamic_depth(|m: &Msg| &m.payload, 8)
///     .build();
/// assert_eq!(rules.len(), 3);
/// ```
pub struct RuleBuilder<R, M> {
    rules: Rules<R, M>,
}

impl<R, M> RuleBuilder<R, M> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Require a non-anonymous caller.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_auth(self) -> Self {
        self.add(Rule::require_auth())
    }

    /// Bound the character length of a text field.
    #[must_use = "builder methods must be chained or built"]
    pub fn text_size<F>(self, accessor: F, min: Option<usize>, max: Option<usize>) -> Self
    where
        F: Fn(&M) -> &str + Send + Sync + 'static,
    {
        self.add(Rule::text_size(accessor, min, max))
    }

    /// Require a dynamic field to carry the given type label.
    #[must_use = "builder methods must be chained or built"]
    pub fn dynamic_type<F>(self, accessor: F, expected: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
    {
        self.add(Rule::dynamic_type(accessor, expected))
    }

    /// Bound the estimated size of a dynamic field.
    #[must_use = "builder methods must be chained or built"]
    pub fn dynamic_size<F>(self, accessor: F, min: Option<usize>, max: Option<usize>) -> Self
    where
        F: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
    {
        self.add(Rule::dynamic_size(accessor, min, max))
    }

    /// Cap the nesting depth of a dynamic field.
    #[must_use = "builder methods must be chained or built"]
    pub fn dynamic_depth<F>(self, accessor: F, max_depth: usize) -> Self
    where
        F: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
    {
        self.add(Rule::dynamic_depth(accessor, max_depth))
    }

    /// Bound the length of a sequence field.
    #[must_use = "builder methods must be chained or built"]
    pub fn array_size<F>(self, accessor: F, min: Option<usize>, max: Option<usize>) -> Self
    where
        F: Fn(&M) -> usize + Send + Sync + 'static,
    {
        self.add(Rule::array_size(accessor, min, max))
    }

    /// Add a named predicate over the request and message.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom<F>(self, name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&R, &M) -> bool + Send + Sync + 'static,
    {
        self.add(Rule::custom(name, predicate))
    }

    /// Add an already-built rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn add(mut self, rule: Rule<R, M>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add every rule from a sequence, in order.
    #[must_use = "builder methods must be chained or built"]
    pub fn add_all(mut self, rules: impl IntoIterator<Item = Rule<R, M>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Number of rules accumulated so far.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Drops every accumulated rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Snapshot of the accumulated rules.
    #[must_use]
    pub fn build(&self) -> Rules<R, M> {
        self.rules.clone()
    }

    /// Consumes the builder, returning its rules without cloning.
    #[must_use]
    pub fn into_rules(self) -> Rules<R, M> {
        self.rules
    }
}

impl<R, M> Default for RuleBuilder<R, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, M> std::fmt::Debug for RuleBuilder<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleBuilder")
            .field("rules", &self.rules)
            .finish()
    }
}
