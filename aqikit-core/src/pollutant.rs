//! Pollutant identifiers and the fixed-size per-pollutant map
//!
//! ## Why Not a HashMap?
//!
//! The set of pollutants is closed (seven of them) and known at compile time,
//! so a map keyed by pollutant is just an array with one slot per variant:
//!
//! ```text
//! PollutantMap<u16>:
//! ┌──────┬──────┬──────┬──────┬──────┬──────┬──────┐
//! │ pm25 │ pm10 │  o3  │  co  │ no2  │ so2  │ nh3  │
//! └──────┴──────┴──────┴──────┴──────┴──────┴──────┘
//!   Some     Some   None   ...
//! ```
//!
//! This gives:
//! - No heap allocation, `Copy` when `T: Copy`
//! - O(1) insert and lookup
//! - Deterministic iteration order (declaration order), independent of how
//!   the reading was assembled
//!
//! Upstream payloads use string keys. Parsing goes through
//! [`Pollutant::from_str`]; keys that are not one of the seven pollutants are
//! dropped when a reading is built from pairs or deserialized.

use core::fmt;
use core::str::FromStr;

use thiserror_no_std::Error;

/// Number of pollutants known to any standard
pub const POLLUTANT_COUNT: usize = 7;

/// Pollutants covered by the EPA and/or NAQI breakpoint tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pollutant {
    /// Fine particulate matter, diameter ≤ 2.5 µm
    Pm25,
    /// Coarse particulate matter, diameter ≤ 10 µm
    Pm10,
    /// Ozone
    O3,
    /// Carbon monoxide
    Co,
    /// Nitrogen dioxide
    No2,
    /// Sulfur dioxide
    So2,
    /// Ammonia (NAQI only)
    Nh3,
}

impl Pollutant {
    /// All pollutants in declaration order
    pub const ALL: [Pollutant; POLLUTANT_COUNT] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::Co,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Nh3,
    ];

    /// Wire identifier (`"pm25"`, `"no2"`, ...)
    pub const fn as_str(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::O3 => "o3",
            Pollutant::Co => "co",
            Pollutant::No2 => "no2",
            Pollutant::So2 => "so2",
            Pollutant::Nh3 => "nh3",
        }
    }

    /// Human-readable name for reports
    pub const fn display_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O₃",
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO₂",
            Pollutant::So2 => "SO₂",
            Pollutant::Nh3 => "NH₃",
        }
    }

    /// Slot in a [`PollutantMap`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tie-break for equal sub-indices: the smaller wire identifier wins.
    pub(crate) fn outranks(self, other: Pollutant) -> bool {
        self.as_str() < other.as_str()
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier that does not name one of the known pollutants
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown pollutant identifier")]
pub struct UnknownPollutant;

impl FromStr for Pollutant {
    type Err = UnknownPollutant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownPollutant)
    }
}

/// Fixed-capacity map with one slot per pollutant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantMap<T> {
    slots: [Option<T>; POLLUTANT_COUNT],
}

/// Concentrations keyed by pollutant, in each table's native unit
pub type PollutantReading = PollutantMap<f64>;

impl<T> Default for PollutantMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PollutantMap<T> {
    /// Empty map
    pub const fn new() -> Self {
        Self {
            slots: [None, None, None, None, None, None, None],
        }
    }

    /// Set the value for `pollutant`, returning the previous one
    pub fn insert(&mut self, pollutant: Pollutant, value: T) -> Option<T> {
        self.slots[pollutant.index()].replace(value)
    }

    /// Remove and return the value for `pollutant`
    pub fn remove(&mut self, pollutant: Pollutant) -> Option<T> {
        self.slots[pollutant.index()].take()
    }

    /// Value for `pollutant`, if present
    pub fn get(&self, pollutant: Pollutant) -> Option<&T> {
        self.slots[pollutant.index()].as_ref()
    }

    /// Whether `pollutant` has a value
    pub fn contains(&self, pollutant: Pollutant) -> bool {
        self.slots[pollutant.index()].is_some()
    }

    /// Number of pollutants with a value
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no pollutant has a value
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Present entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, &T)> + '_ {
        Pollutant::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(p, slot)| slot.as_ref().map(|v| (*p, v)))
    }

    /// Pollutants with a value, in declaration order
    pub fn keys(&self) -> impl Iterator<Item = Pollutant> + '_ {
        self.iter().map(|(p, _)| p)
    }

    /// Apply `f` to every present value
    pub fn map<U, F>(&self, mut f: F) -> PollutantMap<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut out = PollutantMap::new();
        for (p, v) in self.iter() {
            out.insert(p, f(v));
        }
        out
    }

    /// Build from string-keyed pairs, dropping keys that are not pollutants
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, T)>,
    {
        let mut out = PollutantMap::new();
        for (key, value) in pairs {
            match key.parse::<Pollutant>() {
                Ok(p) => {
                    out.insert(p, value);
                }
                Err(_) => {
                    log_debug!("Skipping unrecognized pollutant key {:?}", key);
                }
            }
        }
        out
    }
}

impl<T: PartialOrd + Copy> PollutantMap<T> {
    /// Entry with the largest value; equal values go to the smaller identifier.
    ///
    /// Incomparable values (NaN) never win.
    pub fn max_entry(&self) -> Option<(Pollutant, T)> {
        let mut best: Option<(Pollutant, T)> = None;
        for (p, v) in self.iter() {
            if v.partial_cmp(v).is_none() {
                continue;
            }
            best = match best {
                None => Some((p, *v)),
                Some((bp, bv)) => {
                    if *v > bv || (*v == bv && p.outranks(bp)) {
                        Some((p, *v))
                    } else {
                        Some((bp, bv))
                    }
                }
            };
        }
        best
    }
}

impl<T> FromIterator<(Pollutant, T)> for PollutantMap<T> {
    fn from_iter<I: IntoIterator<Item = (Pollutant, T)>>(iter: I) -> Self {
        let mut out = PollutantMap::new();
        out.extend(iter);
        out
    }
}

impl<T> Extend<(Pollutant, T)> for PollutantMap<T> {
    fn extend<I: IntoIterator<Item = (Pollutant, T)>>(&mut self, iter: I) {
        for (p, v) in iter {
            self.insert(p, v);
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
    use serde::ser::{Serialize, SerializeMap, Serializer};

    use super::{Pollutant, PollutantMap};

    impl Serialize for Pollutant {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Pollutant {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let key = PollutantKey::deserialize(deserializer)?;
            key.0.ok_or_else(|| serde::de::Error::custom("unknown pollutant identifier"))
        }
    }

    /// Map key that tolerates identifiers outside the known set
    struct PollutantKey(Option<Pollutant>);

    impl<'de> Deserialize<'de> for PollutantKey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct KeyVisitor;

            impl<'de> Visitor<'de> for KeyVisitor {
                type Value = PollutantKey;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a pollutant identifier")
                }

                fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                    Ok(PollutantKey(v.parse().ok()))
                }
            }

            deserializer.deserialize_str(KeyVisitor)
        }
    }

    impl<T: Serialize> Serialize for PollutantMap<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (p, v) in self.iter() {
                map.serialize_entry(p.as_str(), v)?;
            }
            map.end()
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for PollutantMap<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct MapVisitor<T>(PhantomData<T>);

            impl<'de, T: Deserialize<'de>> Visitor<'de> for MapVisitor<T> {
                type Value = PollutantMap<T>;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map keyed by pollutant identifier")
                }

                fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                    let mut out = PollutantMap::new();
                    while let Some(key) = access.next_key::<PollutantKey>()? {
                        match key.0 {
                            Some(p) => {
                                out.insert(p, access.next_value()?);
                            }
                            None => {
                                access.next_value::<IgnoredAny>()?;
                            }
                        }
                    }
                    Ok(out)
                }
            }

            deserializer.deserialize_map(MapVisitor(PhantomData))
        }
    }
}
