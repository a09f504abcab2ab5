// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resolve raw recipe image references to fetchable URLs.

const IMAGE_API_PREFIX: &str = "/api/image/";

/// Resolve one image reference against the gateway base URL.
///
/// - absolute `http(s)://` references are returned unchanged
/// - a leading `/api/image/` is stripped before joining
/// - anything else is joined to the base with a single `/`
pub fn build_image_url(base_url: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_string();
    }

    let base = base_url.trim_end_matches('/');
    let path = image.strip_prefix(IMAGE_API_PREFIX).unwrap_or(image);

    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

pub fn build_image_urls<S: AsRef<str>>(base_url: &str, images: &[S]) -> Vec<String> {
    images
        .iter()
        .map(|image| build_image_url(base_url, image.as_ref()))
        .collect()
}
