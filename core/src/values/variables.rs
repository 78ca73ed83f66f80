//! Variable lookup for the value evaluator.
//!
//! The evaluator resolves variable stages through the [`Variables`] trait, so
//! hosts can back lookups with whatever storage they already have. A missing
//! name is reported by the evaluator as an unknown-variable error.

use super::Value;
use ecow::EcoString;
use hashbrown::HashMap;

/// Resolves variable names to runtime values.
pub trait Variables {
    /// Look up a variable by name.
    fn get(&self, name: &str) -> Option<Value>;
}

/// Variables that resolve nothing. Used for expressions without parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl Variables for NoVariables {
    fn get(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// Hash-map backed variables.
#[derive(Debug, Clone, Default)]
pub struct MapVariables(HashMap<EcoString, Value>);

impl MapVariables {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Bind `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<EcoString>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<EcoString>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Variables for MapVariables {
    fn get(&self, name: &str) -> Option<Value> {
        self.0.get(name).cloned()
    }
}

impl<K: Into<EcoString>, V: Into<Value>> FromIterator<(K, V)> for MapVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl Variables for [(&str, Value)] {
    fn get(&self, name: &str) -> Option<Value> {
        self.iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| value.clone())
    }
}

impl<const N: usize> Variables for [(&str, Value); N] {
    fn get(&self, name: &str) -> Option<Value> {
        Variables::get(self.as_slice(), name)
    }
}

impl<V: Variables + ?Sized> Variables for &V {
    fn get(&self, name: &str) -> Option<Value> {
        (**self).get(name)
    }
}
