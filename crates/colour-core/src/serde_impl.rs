//! Optional `serde` support (feature `serde`).
//!
//! A colour serialises as a map of channel name to value in declared order:
//!
//! ```text
//! {"r": 255.0, "g": 0.0, "b": 0.0}
//! ```
//!
//! Deserialisation goes through [`Colour::from_named`], so unknown,
//! missing and out-of-range channels are rejected.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::colour::Colour;
use crate::model::ColourModel;

impl<M: ColourModel<N>, const N: usize> Serialize for Colour<M, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(N))?;
        for (ch, value) in M::CHANNELS.iter().zip(self.values().iter()) {
            map.serialize_entry(ch.name, value)?;
        }
        map.end()
    }
}

struct ColourVisitor<M, const N: usize>(PhantomData<M>);

impl<'de, M: ColourModel<N>, const N: usize> Visitor<'de> for ColourVisitor<M, N> {
    type Value = Colour<M, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of {} channel values", M::NAME)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs: Vec<(String, f64)> = Vec::with_capacity(N);
        while let Some(entry) = access.next_entry::<String, f64>()? {
            pairs.push(entry);
        }
        Colour::from_named(pairs.iter().map(|(name, value)| (name.as_str(), *value)))
            .map_err(de::Error::custom)
    }
}

impl<'de, M: ColourModel<N>, const N: usize> Deserialize<'de> for Colour<M, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ColourVisitor(PhantomData))
    }
}
