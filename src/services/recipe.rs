// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipe, comment and like calls.
//!
//! Every method is exactly one round trip to the gateway. Nothing is
//! retried or cached.

use crate::error::ApiError;
use crate::models::{Comment, Like, NewComment, NewRecipe, Recipe};
use crate::services::gateway::{decode, GatewayClient};
use crate::services::image::build_image_urls;
use serde_json::Value;

pub(crate) mod paths {
    pub const GET_RECIPES: &str = "/recipe/graphql/get_recipes";
    pub const GET_RECIPES_BY_USER: &str = "/recipe/graphql/get_recipebyuser";
    pub const CREATE_RECIPE: &str = "/recipe/graphql/create_recipe";
    pub const CREATE_COMMENT: &str = "/recipe/graphql/comments_recipes";
    pub const LIKES_COUNT: &str = "/recipe/graphql/likes_count";
    pub const LIKE_RECIPE: &str = "/recipe/graphql/like_recipe";

    pub fn comments(recipe_id: &str) -> String {
        format!(
            "/recipe/graphql/recipes/{}/comments",
            urlencoding::encode(recipe_id)
        )
    }
}

#[derive(Clone)]
pub struct RecipeService {
    gateway: GatewayClient,
}

impl RecipeService {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// All recipes, newest first as ordered by the gateway.
    pub async fn fetch_all_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let recipes: Vec<Recipe> = self
            .gateway
            .send_json(self.gateway.get(paths::GET_RECIPES, None))
            .await?;
        tracing::debug!(count = recipes.len(), "Fetched recipes");
        Ok(recipes)
    }

    /// Look up a single recipe by id from the full listing.
    pub async fn fetch_recipe(&self, recipe_id: &str) -> Result<Option<Recipe>, ApiError> {
        let recipes = self.fetch_all_recipes().await?;
        Ok(recipes.into_iter().find(|r| r.id == recipe_id))
    }

    /// Recipes owned by the user behind `token`.
    ///
    /// An unauthorized token surfaces as `ApiError::Remote` with status 401/403.
    pub async fn fetch_user_recipes(&self, token: &str) -> Result<Vec<Recipe>, ApiError> {
        self.gateway
            .send_json(self.gateway.get(paths::GET_RECIPES_BY_USER, Some(token)))
            .await
    }

    pub async fn create_recipe(&self, recipe: &NewRecipe, token: &str) -> Result<Recipe, ApiError> {
        let created: Recipe = self
            .gateway
            .send_json(
                self.gateway
                    .post(paths::CREATE_RECIPE, Some(token))
                    .json(recipe),
            )
            .await?;
        tracing::info!(recipe_id = %created.id, "Recipe created");
        Ok(created)
    }

    /// Comments for a recipe. No comments is an empty list, not an error.
    pub async fn fetch_comments(&self, recipe_id: &str) -> Result<Vec<Comment>, ApiError> {
        let (status, value) = self
            .gateway
            .send_checked(self.gateway.get(&paths::comments(recipe_id), None))
            .await?;

        if value.is_null() {
            return Ok(Vec::new());
        }
        decode(status, value)
    }

    /// Post a comment, optionally as a reply to `parent_id`.
    ///
    /// Absent `parent_id` and `token` are left out of the request entirely.
    pub async fn create_comment(
        &self,
        recipe_id: &str,
        content: &str,
        parent_id: Option<&str>,
        token: Option<&str>,
    ) -> Result<Comment, ApiError> {
        let body = NewComment {
            recipe_id,
            content,
            parent_id,
        };

        let comment: Comment = self
            .gateway
            .send_json(self.gateway.post(paths::CREATE_COMMENT, token).json(&body))
            .await?;
        tracing::info!(recipe_id, comment_id = %comment.id, "Comment created");
        Ok(comment)
    }

    /// Like count for a recipe. The gateway answers with a bare number.
    pub async fn get_likes_count(&self, recipe_id: &str) -> Result<u64, ApiError> {
        let (status, value) = self
            .gateway
            .send_checked(
                self.gateway
                    .get(paths::LIKES_COUNT, None)
                    .query(&[("recipe_id", recipe_id)]),
            )
            .await?;

        scalar_count(&value).ok_or_else(|| ApiError::Decode {
            status: status.as_u16(),
            message: format!("expected a non-negative integer, got {}", value),
        })
    }

    pub async fn like_recipe(&self, recipe_id: &str, token: Option<&str>) -> Result<Like, ApiError> {
        let (status, value) = self
            .gateway
            .send_checked(
                self.gateway
                    .post(paths::LIKE_RECIPE, token)
                    .query(&[("recipe_id", recipe_id)]),
            )
            .await?;

        tracing::info!(recipe_id, "Recipe liked");
        if value.is_null() {
            return Ok(Like {
                recipe_id: Some(recipe_id.to_string()),
                ..Like::default()
            });
        }
        decode(status, value)
    }

    /// Fetchable URLs for a recipe's images.
    pub fn image_urls(&self, recipe: &Recipe) -> Vec<String> {
        build_image_urls(self.gateway.base_url(), &recipe.images)
    }
}

/// Accept `42`, `42.0` or `"42"` as a count.
fn scalar_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_count() {
        assert_eq!(scalar_count(&json!(42)), Some(42));
        assert_eq!(scalar_count(&json!(3.0)), Some(3));
        assert_eq!(scalar_count(&json!("7")), Some(7));
        assert_eq!(scalar_count(&json!(-1)), None);
        assert_eq!(scalar_count(&json!({"count": 42})), None);
    }

    #[test]
    fn test_comment_path_encodes_id() {
        assert_eq!(
            paths::comments("a b/c"),
            "/recipe/graphql/recipes/a%20b%2Fc/comments"
        );
    }
}
