// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API client façade and session handling.

pub mod auth;
pub mod gateway;
pub mod image;
pub mod recipe;
pub mod user;

pub use auth::{AuthService, TOKEN_VALIDITY_HOURS};
pub use gateway::GatewayClient;
pub use image::{build_image_url, build_image_urls};
pub use recipe::RecipeService;
pub use user::UserService;
