//! Named collection of variables, the host side of the accessor.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::vars::Variable;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("expected name=value, got '{0}'")]
    MissingEquals(String),

    #[error("variable name is empty in '{0}'")]
    EmptyName(String),
}

/// Variables known to the host, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableStore {
    values: BTreeMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`. Unknown names yield an absent variable rather than an
    /// error, so presence is checked with [`Variable::require_non_empty`].
    pub fn get(&self, name: &str) -> Variable {
        match self.values.get(name) {
            Some(v) => Variable::new(name, v.clone()),
            None => Variable::absent(name),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply `name=value` overrides on top of the stored values.
    pub fn apply_overrides(&mut self, overrides: &[(String, String)]) {
        for (name, value) in overrides {
            tracing::debug!(var = %name, "override");
            self.set(name.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Split `name=value` on the first `=`. The value may be empty or contain `=`.
pub fn parse_assignment(s: &str) -> Result<(String, String), AssignmentError> {
    let (name, value) = s.split_once('=').ok_or_else(|| AssignmentError::MissingEquals(s.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AssignmentError::EmptyName(s.to_string()));
    }
    Ok((name.to_string(), value.to_string()))
}
