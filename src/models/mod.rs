// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data shapes exchanged with the API gateway.

pub mod comment;
pub mod like;
pub mod recipe;
pub mod user;

pub use comment::{Comment, NewComment};
pub use like::Like;
pub use recipe::{NewRecipe, Recipe};
pub use user::{AuthOutcome, Credentials, NewUser};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
