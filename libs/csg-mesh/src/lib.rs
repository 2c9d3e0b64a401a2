//! # CSG Mesh
//!
//! Realizes CSG shapes into flat, renderer-consumable vertex/index streams.
//!
//! ## Architecture
//!
//! ```text
//! combination engine (Polygon list) → Shape → realize → ShapeBuilder (Mesh, GPU buffer, ...)
//! ```
//!
//! ## Algorithms
//!
//! - **Face normals**: Newell's method, recomputed per face at realization
//! - **Triangulation**: Fan from the first vertex (convex faces)
//! - **Shading**: Flat; vertices are never shared between triangles
//!
//! Boolean combination itself is out of scope: composite shapes delegate
//! to an external [`CombinationEngine`].
//!
//! ## Usage
//!
//! ```rust
//! use csg_mesh::{Cube, Mesh, Shape};
//! use glam::DVec3;
//!
//! let cube = Cube::new(DVec3::splat(2.0), true)?;
//! let mut mesh = Mesh::new();
//! let stats = cube.build(&mut mesh);
//!
//! assert_eq!(stats.triangles, 12);
//! assert_eq!(mesh.vertex_count(), 36);
//! # Ok::<(), csg_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod mesh;
pub mod polygon;
pub mod primitives;
pub mod realize;
pub mod shape;
pub mod vertex;

pub use builder::ShapeBuilder;
pub use error::MeshError;
pub use mesh::{Mesh, MeshVertex};
pub use polygon::Polygon;
pub use primitives::{Cube, Sphere};
pub use realize::{realize, RealizeStats};
pub use shape::{CombinationEngine, CombinedShape, CsgOperation, GeneratedShape, Shape};
pub use vertex::Vertex;
