//! Tea House storefront library.
//!
//! The HTTP side of the shop: configuration, file-backed storage, the
//! server-rendered views and the routes that drive them. Kept as a library
//! so the binary, the CLI and the integration tests share one code path.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod storage;
pub mod views;
