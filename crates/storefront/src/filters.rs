//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Content hash of main.css, computed at build time.
const CSS_HASH: &str = env!("CSS_HASH");

/// Content hash of app.js, computed at build time.
const JS_HASH: &str = env!("JS_HASH");

/// URL of a hashed asset, falling back to the unhashed source file when the
/// build could not hash it.
fn asset_url(dir: &str, stem: &str, extension: &str, hash: &str) -> String {
    if hash.is_empty() {
        format!("/static/{dir}/{stem}.{extension}")
    } else {
        format!("/static/derived/{stem}.{hash}.{extension}")
    }
}

/// Returns the URL of the stylesheet.
///
/// Usage in templates: `{{ ""|css_url }}`
#[askama::filter_fn]
pub fn css_url(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(asset_url("css", "main", "css", CSS_HASH))
}

/// Returns the URL of the page script.
///
/// Usage in templates: `{{ ""|js_url }}`
#[askama::filter_fn]
pub fn js_url(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(asset_url("js", "app", "js", JS_HASH))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
