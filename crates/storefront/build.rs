//! Build script for storefront crate.
//!
//! Generates content-based hashes for static assets (CSS and JS) so their
//! URLs change whenever their content does.

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    hash_asset("css/main.css", "main", "css", "CSS_HASH");
    hash_asset("js/app.js", "app", "js", "JS_HASH");
}

/// Hash a static asset and copy it to `static/derived/` with the hash in its
/// file name.
///
/// Sets `env_var` for use with `env!()`.
fn hash_asset(relative: &str, stem: &str, extension: &str, env_var: &str) {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let static_dir = Path::new(&manifest_dir).join("static");
    let asset_path = static_dir.join(relative);

    println!("cargo:rerun-if-changed={}", asset_path.display());

    let content = match fs::read(&asset_path) {
        Ok(content) => content,
        Err(e) => {
            println!("cargo:warning=Could not read {relative}: {e}");
            println!("cargo:rustc-env={env_var}=");
            return;
        }
    };

    // First 8 hex chars of SHA256
    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = hash.get(..8).unwrap_or(&hash);

    println!("cargo:rustc-env={env_var}={short_hash}");

    let derived_dir = static_dir.join("derived");
    fs::create_dir_all(&derived_dir).expect("Failed to create derived asset directory");

    let derived_path = derived_dir.join(format!("{stem}.{short_hash}.{extension}"));
    fs::copy(&asset_path, &derived_path).expect("Failed to copy asset to derived directory");
}
