// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recipe model as served by the gateway.

use serde::{Deserialize, Serialize};

/// Read projection of a recipe. Never cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    /// Free-form preparation time ("45 min")
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub prep_time: String,
    /// Raw image references; resolve with [`crate::services::build_image_urls`]
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub portions: u32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub steps: Vec<String>,
    /// Owner
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub user_id: String,
}

/// Body for `create_recipe`. The gateway assigns `id` and `user_id`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRecipe {
    pub title: String,
    pub prep_time: String,
    pub portions: u32,
    pub steps: Vec<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}
