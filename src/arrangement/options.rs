// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Options used to configure arrangements.
//!
//! Every arrangement declares the options it recognises along with their
//! default values. When constructing an arrangement, each recognised option
//! takes the caller's value if one was supplied, otherwise the default. Any
//! supplied option that isn't recognised is an error; nothing is silently
//! ignored.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{ArrangementError, ArrangementType};

/// The name of the option setting the number of sources.
pub const NUM_SOURCES_OPTION: &str = "Nsrcs";

/// The name of the option setting a fixed altitude \[degrees\].
pub const ALT_OPTION: &str = "alt";

/// The name of the option setting a minimum altitude \[degrees\].
pub const MIN_ALT_OPTION: &str = "min_alt";

/// The name of the option setting the random seed.
pub const RANDOM_SEED_OPTION: &str = "rseed";

/// The value of a single arrangement option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Float(f64),
    /// No value, e.g. an unseeded random seed.
    Null,
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Float(fl) => write!(f, "{fl}"),
            OptionValue::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Int(i.into())
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        OptionValue::Int(i.into())
    }
}

impl From<u64> for OptionValue {
    fn from(i: u64) -> Self {
        // Values beyond i64::MAX can't be represented; saturate.
        OptionValue::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<usize> for OptionValue {
    fn from(i: usize) -> Self {
        OptionValue::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<f64> for OptionValue {
    fn from(f: f64) -> Self {
        OptionValue::Float(f)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => v.into(),
            None => OptionValue::Null,
        }
    }
}

/// Options supplied by a caller when constructing an arrangement. Insertion
/// order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrangementOptions(IndexMap<String, OptionValue>);

impl ArrangementOptions {
    pub fn new() -> ArrangementOptions {
        ArrangementOptions::default()
    }

    /// Add (or replace) an option, returning `self` so calls can be chained.
    pub fn with<V: Into<OptionValue>>(mut self, name: &str, value: V) -> ArrangementOptions {
        self.insert(name, value);
        self
    }

    /// Add (or replace) an option. The previous value is returned, if there
    /// was one.
    pub fn insert<V: Into<OptionValue>>(&mut self, name: &str, value: V) -> Option<OptionValue> {
        self.0.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, OptionValue)> for ArrangementOptions {
    fn from_iter<I: IntoIterator<Item = (K, OptionValue)>>(iter: I) -> Self {
        ArrangementOptions(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// The options that define an arrangement; these are exactly the options that
/// the arrangement recognises, with their current values. Derived quantities
/// are never included. Passing these options back to the same arrangement type
/// reproduces an equivalent arrangement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefiningDict(IndexMap<String, OptionValue>);

impl DefiningDict {
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert into options suitable for constructing an arrangement.
    pub fn into_options(self) -> ArrangementOptions {
        ArrangementOptions(self.0)
    }
}

impl<K: Into<String>> FromIterator<(K, OptionValue)> for DefiningDict {
    fn from_iter<I: IntoIterator<Item = (K, OptionValue)>>(iter: I) -> Self {
        DefiningDict(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl std::ops::Index<&str> for DefiningDict {
    type Output = OptionValue;

    fn index(&self, name: &str) -> &OptionValue {
        &self.0[name]
    }
}

/// Recognised options of an arrangement, after defaults have been applied.
#[derive(Debug)]
pub(crate) struct ResolvedOptions {
    arrangement: &'static str,
    values: IndexMap<&'static str, OptionValue>,
}

/// Apply the defaults of an arrangement to the supplied options. Any supplied
/// options that aren't among the defaults generate an
/// [`ArrangementError::UnrecognizedOption`].
pub(crate) fn resolve_options(
    arrangement_type: ArrangementType,
    defaults: &[(&'static str, OptionValue)],
    supplied: ArrangementOptions,
) -> Result<ResolvedOptions, ArrangementError> {
    let arrangement: &'static str = arrangement_type.into();
    let mut supplied = supplied.0;
    let values: IndexMap<&'static str, OptionValue> = defaults
        .iter()
        .map(|&(name, default)| (name, supplied.shift_remove(name).unwrap_or(default)))
        .collect();

    if !supplied.is_empty() {
        return Err(ArrangementError::UnrecognizedOption {
            arrangement,
            options: supplied.into_iter().map(|(name, _)| name).collect(),
        });
    }

    debug!("{arrangement}: resolved options {values:?}");
    Ok(ResolvedOptions {
        arrangement,
        values,
    })
}

impl ResolvedOptions {
    fn get(&self, option: &'static str) -> OptionValue {
        self.values.get(option).copied().unwrap_or(OptionValue::Null)
    }

    fn invalid(
        &self,
        option: &'static str,
        expected: &'static str,
        got: OptionValue,
    ) -> ArrangementError {
        ArrangementError::InvalidOptionType {
            arrangement: self.arrangement,
            option,
            expected,
            got: got.to_string(),
        }
    }

    /// Get an option as a float. Integers are promoted.
    pub(crate) fn get_f64(&self, option: &'static str) -> Result<f64, ArrangementError> {
        match self.get(option) {
            OptionValue::Int(i) => Ok(i as f64),
            OptionValue::Float(f) => Ok(f),
            v @ OptionValue::Null => Err(self.invalid(option, "a number", v)),
        }
    }

    /// Get an option as a count. Floats are accepted only if they are whole.
    pub(crate) fn get_usize(&self, option: &'static str) -> Result<usize, ArrangementError> {
        let v = self.get(option);
        as_whole_number(v)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.invalid(option, "a non-negative integer", v))
    }

    /// Get an option that may be null as a 32-bit unsigned integer.
    pub(crate) fn get_optional_u32(
        &self,
        option: &'static str,
    ) -> Result<Option<u32>, ArrangementError> {
        match self.get(option) {
            OptionValue::Null => Ok(None),
            v => as_whole_number(v)
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.invalid(option, "a non-negative 32-bit integer or null", v)),
        }
    }
}

fn as_whole_number(v: OptionValue) -> Option<u64> {
    match v {
        OptionValue::Int(i) => u64::try_from(i).ok(),
        OptionValue::Float(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => {
            // Whole floats beyond u64::MAX saturate.
            Some(f as u64)
        }
        _ => None,
    }
}
