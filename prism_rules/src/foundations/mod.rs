//! Moral foundations and the per-foundation maps built on them.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::RulesError;

/// The fixed set of value categories used to score rhetorical framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Foundation {
    Care,
    Fairness,
    Liberty,
    Loyalty,
    Authority,
    Sanctity,
    Security,
}

impl Foundation {
    /// Number of foundations.
    pub const COUNT: usize = 7;

    /// All foundations in enumeration order.
    pub const ALL: [Foundation; Foundation::COUNT] = [
        Foundation::Care,
        Foundation::Fairness,
        Foundation::Liberty,
        Foundation::Loyalty,
        Foundation::Authority,
        Foundation::Sanctity,
        Foundation::Security,
    ];

    /// Display label of this foundation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Foundation::Care => "Care",
            Foundation::Fairness => "Fairness",
            Foundation::Liberty => "Liberty",
            Foundation::Loyalty => "Loyalty",
            Foundation::Authority => "Authority",
            Foundation::Sanctity => "Sanctity",
            Foundation::Security => "Security",
        }
    }

    /// Position of this foundation in [`Foundation::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Foundation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Foundation {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Foundation::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| RulesError::UnknownFoundation(label.to_string()))
    }
}

/// A total map holding exactly one value per [`Foundation`].
///
/// Serialized as a `{ "Care": .., "Fairness": .. }` mapping. Entries missing
/// on input take `T::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoundationMap<T> {
    values: [T; Foundation::COUNT],
}

/// Raw or normalized score per foundation.
pub type Profile = FoundationMap<u32>;

/// Signed per-foundation deltas applied when deriving a counterpart.
pub type BiasProfile = FoundationMap<i32>;

impl<T> FoundationMap<T> {
    /// Build a map by evaluating `f` for every foundation.
    pub fn from_fn(mut f: impl FnMut(Foundation) -> T) -> Self {
        Self {
            values: std::array::from_fn(|i| f(Foundation::ALL[i])),
        }
    }

    /// Get the value for a foundation.
    pub fn get(&self, foundation: Foundation) -> &T {
        &self.values[foundation.index()]
    }

    /// Get a mutable reference to the value for a foundation.
    pub fn get_mut(&mut self, foundation: Foundation) -> &mut T {
        &mut self.values[foundation.index()]
    }

    /// Replace the value for a foundation.
    pub fn set(&mut self, foundation: Foundation, value: T) {
        self.values[foundation.index()] = value;
    }

    /// Iterate over `(foundation, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Foundation, &T)> {
        Foundation::ALL.into_iter().zip(self.values.iter())
    }

    /// Iterate over values in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Transform every value, keeping the foundation keys.
    pub fn map<U>(&self, mut f: impl FnMut(Foundation, &T) -> U) -> FoundationMap<U> {
        FoundationMap::from_fn(|foundation| f(foundation, self.get(foundation)))
    }
}

impl<T: Default> FoundationMap<T> {
    /// Build a map from sparse entries, defaulting the rest.
    pub fn from_entries(entries: impl IntoIterator<Item = (Foundation, T)>) -> Self {
        let mut map = Self::default();
        for (foundation, value) in entries {
            map.set(foundation, value);
        }
        map
    }
}

impl<T: Default> Default for FoundationMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Foundation> for FoundationMap<T> {
    type Output = T;

    fn index(&self, foundation: Foundation) -> &T {
        self.get(foundation)
    }
}

impl<T> IndexMut<Foundation> for FoundationMap<T> {
    fn index_mut(&mut self, foundation: Foundation) -> &mut T {
        self.get_mut(foundation)
    }
}

impl FoundationMap<u32> {
    /// Largest score in the profile.
    pub fn max_value(&self) -> u32 {
        self.values().copied().max().unwrap_or(0)
    }

    /// Sum of all scores.
    pub fn total(&self) -> u32 {
        self.values().sum()
    }
}

impl<T: Serialize> Serialize for FoundationMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for FoundationMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<Foundation, T>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}
