// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

use serde::{Deserialize, Serialize};

/// Like record returned by `like_recipe`.
///
/// The gateway's shape is loose, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Like {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Updated aggregate, when the gateway includes it
    #[serde(default)]
    pub likes_count: Option<u64>,
}
