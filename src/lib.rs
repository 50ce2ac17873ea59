//! Geopanel - Spatial Data Explorer
//!
//! A client-rendered web application for browsing raster cutouts served by
//! the Spatial Data API, built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;
