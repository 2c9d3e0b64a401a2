//! # Config Crate
//!
//! Centralized configuration constants for the CSG realization pipeline.
//! Buffer limits, tessellation defaults and content-provider
//! settings live here so the mesh and content crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_COLOR, VERTEX_STRIDE};
//!
//! // position (3) + normal (3) + tex coords (2) + color (4)
//! assert_eq!(VERTEX_STRIDE, 12);
//! assert_eq!(DEFAULT_COLOR[3], 1.0);
//! ```

pub mod constants;
