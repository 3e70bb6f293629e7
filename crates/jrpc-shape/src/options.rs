use std::collections::BTreeSet;

/// How a field listed in the [`OverrideTable`] is rewritten before generic
/// normalization. Every rule has a shape guard; when the guard does not match
/// the value falls through to the generic rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// `{}` becomes `null`, `[x]` becomes `x` verbatim.
    Unwrap,
    /// `[]` becomes `{}`.
    EmptySeqToMap,
    /// `{}` becomes `[]`.
    EmptyMapToSeq,
    /// Any array stays an array, even with one element; elements are
    /// normalized generically.
    Passthrough,
    /// Any object keeps its members; each member holding `[x]` becomes `x`,
    /// everything else is left untouched.
    ElementwiseUnwrapShallow,
}

/// Ordered lookup from field name to [`FieldRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable {
    entries: Vec<(String, FieldRule)>,
}

impl OverrideTable {
    /// A table with no overrides: every field is normalized generically.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn get(&self, field: &str) -> Option<FieldRule> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| *rule)
    }

    /// Adds a rule, replacing any rule already registered for `field`.
    pub fn insert(&mut self, field: impl Into<String>, rule: FieldRule) -> Option<FieldRule> {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => Some(std::mem::replace(existing, rule)),
            None => {
                self.entries.push((field, rule));
                None
            }
        }
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldRule> {
        let idx = self.entries.iter().position(|(name, _)| name == field)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldRule)> {
        self.entries.iter().map(|(name, rule)| (name.as_str(), *rule))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for OverrideTable {
    fn default() -> Self {
        let entries = [
            ("id", FieldRule::Unwrap),
            ("tools", FieldRule::EmptySeqToMap),
            ("properties", FieldRule::EmptySeqToMap),
            ("required", FieldRule::EmptyMapToSeq),
            ("content", FieldRule::Passthrough),
            ("error", FieldRule::ElementwiseUnwrapShallow),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|(name, rule)| (name.to_string(), rule))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Field-specific rules, checked before generic recursion
    pub overrides: OverrideTable,
    /// Fields whose empty-object value is kept as `{}` instead of becoming
    /// `null`. Empty by default.
    pub keep_empty_objects: BTreeSet<String>,
}

impl Options {
    pub fn keep_empty_object(mut self, field: impl Into<String>) -> Self {
        self.keep_empty_objects.insert(field.into());
        self
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }
}
