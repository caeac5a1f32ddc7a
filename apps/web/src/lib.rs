//! EPOD ticket viewer
//!
//! The dataset model, its projection into ticket cards and the page state
//! are plain Rust; the Leptos components and the fetch live behind
//! `wasm32`.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod view_model;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod loader;
