// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named and built-in parameter storage for family symbols and instances.
//!
//! A family symbol carries default parameter values; placing an instance
//! copies those defaults into the instance's own set. Writes through a
//! transaction only succeed for parameters the set already defines,
//! matching host semantics where a failed parameter lookup aborts the
//! operation rather than silently creating the parameter.

use rustc_hash::FxHashMap;

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterValue {
    /// A length in model units (feet in the original host, unit-agnostic here).
    Length(f64),
    /// Free text.
    Text(String),
}

impl ParameterValue {
    /// Returns the contained length, if this is a length value.
    pub fn as_length(&self) -> Option<f64> {
        match self {
            ParameterValue::Length(v) => Some(*v),
            ParameterValue::Text(_) => None,
        }
    }
}

/// Built-in parameters every family instance understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltInParameter {
    /// Vertical offset of the instance from its hosting level.
    ElevationFromLevel,
}

/// Parameter storage: user-named parameters plus built-in slots.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSet {
    named: FxHashMap<String, ParameterValue>,
    builtin: FxHashMap<BuiltInParameter, ParameterValue>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: define a named length parameter.
    pub fn with_length(mut self, name: impl Into<String>, value: f64) -> Self {
        self.named.insert(name.into(), ParameterValue::Length(value));
        self
    }

    /// Builder: define a built-in parameter.
    pub fn with_builtin(mut self, param: BuiltInParameter, value: f64) -> Self {
        self.builtin.insert(param, ParameterValue::Length(value));
        self
    }

    /// Defines or overwrites a named parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.named.insert(name.into(), value);
    }

    /// Looks up a named parameter.
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.named.get(name)
    }

    /// Looks up a built-in parameter.
    pub fn get_builtin(&self, param: BuiltInParameter) -> Option<&ParameterValue> {
        self.builtin.get(&param)
    }

    /// Replaces the value of an existing named parameter, returning the
    /// previous value. Returns `None` (and writes nothing) if the
    /// parameter is not defined on this set.
    pub(crate) fn replace(&mut self, name: &str, value: ParameterValue) -> Option<ParameterValue> {
        let slot = self.named.get_mut(name)?;
        Some(std::mem::replace(slot, value))
    }

    /// Replaces the value of an existing built-in parameter, returning
    /// the previous value. Returns `None` if the slot is not defined.
    pub(crate) fn replace_builtin(
        &mut self,
        param: BuiltInParameter,
        value: ParameterValue,
    ) -> Option<ParameterValue> {
        let slot = self.builtin.get_mut(&param)?;
        Some(std::mem::replace(slot, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_requires_existing_parameter() {
        let mut params = ParameterSet::new().with_length("Opening Width", 0.0);

        let old = params.replace("Opening Width", ParameterValue::Length(0.4));
        assert_eq!(old, Some(ParameterValue::Length(0.0)));
        assert_eq!(
            params.get("Opening Width"),
            Some(&ParameterValue::Length(0.4))
        );

        assert!(params
            .replace("Opening Depth", ParameterValue::Length(1.0))
            .is_none());
        assert!(params.get("Opening Depth").is_none());
    }

    #[test]
    fn builtin_slots_are_separate_from_named() {
        let params = ParameterSet::new()
            .with_length("Opening Width", 0.3)
            .with_builtin(BuiltInParameter::ElevationFromLevel, 1.5);

        assert_eq!(
            params
                .get_builtin(BuiltInParameter::ElevationFromLevel)
                .and_then(ParameterValue::as_length),
            Some(1.5)
        );
        assert!(params.get("ElevationFromLevel").is_none());
    }
}
