//! Genre bestseller pipeline: catalog proxy, ISBN conversion, fetch
//! orchestration and block rendering.

pub mod catalog;
pub mod config;
pub mod editor;
pub mod render;
pub mod types;
