//! Library surface of the projection-map renderer; the binary in
//! `main.rs` drives these modules.
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro)]

pub mod basemap;
pub mod projections;
pub mod render;
pub mod reproject;
