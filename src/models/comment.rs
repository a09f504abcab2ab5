// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recipe comments with single-level threading.

use serde::{Deserialize, Serialize};

/// Comment on a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Back-reference to the recipe
    pub recipe_id: String,
    /// Author display name (may be missing for anonymous comments)
    #[serde(default)]
    pub user_name: Option<String>,
    pub content: String,
    /// Creation timestamp as sent by the gateway (ISO 8601)
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub created_at: String,
    /// Set when this comment is a reply
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Body for `create_comment`. `parent_id` is omitted, not sent as null.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub recipe_id: &'a str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<&'a str>,
}
