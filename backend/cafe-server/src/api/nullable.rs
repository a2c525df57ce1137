//! Tri-state fields for partial updates.
//!
//! With `#[serde(default, deserialize_with = "nullable::deserialize")]` on an
//! `Option<Option<T>>`, an absent key stays `None` (leave unchanged), an
//! explicit `null` becomes `Some(None)` (clear) and a value becomes
//! `Some(Some(value))`.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
