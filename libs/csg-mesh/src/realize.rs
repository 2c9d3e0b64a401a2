//! # Realization
//!
//! Turns a finished polygon list into flat-shaded triangles on a
//! [`ShapeBuilder`].
//!
//! ## Algorithm
//!
//! For each polygon `v0..v(n-1)` with `n >= 3`:
//! 1. Face normal by Newell's method ([`Polygon::newell_normal`])
//! 2. Fan from `v0`: triangles `(v0, v[j-1], v[j])` for `j = 2..n`
//! 3. Each triangle corner is appended with the face normal, immediately
//!    followed by its index from a running counter
//!
//! An n-gon therefore yields `n - 2` triangles and `3 * (n - 2)` vertices and
//! indices. `v0` is re-emitted for every fan triangle; vertices are never
//! shared, so every triangle keeps its face's flat normal.
//!
//! ## Limitations
//!
//! The fan assumes convex, planar faces. Non-convex input produces
//! overlapping triangles. It is not detected.

use crate::builder::ShapeBuilder;
use crate::polygon::Polygon;
use crate::vertex::Vertex;
use glam::DVec3;
use log::{debug, trace};

// =============================================================================
// STATS
// =============================================================================

/// Summary of one realization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealizeStats {
    /// Polygons visited.
    pub polygons: usize,
    /// Polygons skipped for having fewer than three vertices.
    pub skipped: usize,
    /// Triangles emitted.
    pub triangles: usize,
    /// Vertices (and indices) emitted.
    pub vertices: usize,
}

// =============================================================================
// REALIZER
// =============================================================================

/// Realize `polygons` into `builder`.
///
/// The vertex counter starts at zero for every call and runs across all
/// polygons, so the emitted indices are exactly `0, 1, 2, ...`.
///
/// Per-vertex normals stored on the polygons are ignored: they are not
/// accurate enough for flat shading. The Newell normal is only computed
/// here and never written back, since the upstream partitioning stage fails
/// to terminate when its polygons carry these normals.
///
/// # Example
///
/// ```rust
/// use csg_mesh::{realize, Mesh, Polygon, Vertex};
/// use glam::DVec3;
///
/// let quad = Polygon::new(vec![
///     Vertex::at(DVec3::new(0.0, 0.0, 0.0)),
///     Vertex::at(DVec3::new(1.0, 0.0, 0.0)),
///     Vertex::at(DVec3::new(1.0, 1.0, 0.0)),
///     Vertex::at(DVec3::new(0.0, 1.0, 0.0)),
/// ]);
///
/// let mut mesh = Mesh::new();
/// let stats = realize(&[quad], &mut mesh);
/// assert_eq!(stats.triangles, 2);
/// assert_eq!(mesh.indices(), &[0, 1, 2, 3, 4, 5]);
/// ```
pub fn realize<B: ShapeBuilder + ?Sized>(polygons: &[Polygon], builder: &mut B) -> RealizeStats {
    let mut stats = RealizeStats {
        polygons: polygons.len(),
        ..RealizeStats::default()
    };
    let mut p: u32 = 0;

    for (i, poly) in polygons.iter().enumerate() {
        if poly.is_degenerate() {
            trace!("skipping polygon {} with {} vertices", i, poly.len());
            stats.skipped += 1;
            continue;
        }

        let normal = poly.newell_normal();
        let vertices = poly.vertices();

        for j in 2..vertices.len() {
            emit(builder, &vertices[0], normal, &mut p);
            emit(builder, &vertices[j - 1], normal, &mut p);
            emit(builder, &vertices[j], normal, &mut p);
            stats.triangles += 1;
        }
    }

    stats.vertices = p as usize;
    debug!(
        "realized {} polygons ({} skipped) into {} triangles",
        stats.polygons, stats.skipped, stats.triangles
    );
    stats
}

/// Append one fan corner and its index.
#[inline]
fn emit<B: ShapeBuilder + ?Sized>(builder: &mut B, vertex: &Vertex, normal: DVec3, p: &mut u32) {
    builder.add_vertex(vertex.position, normal, vertex.tex_coords, vertex.color);
    builder.add_index(*p);
    *p += 1;
}
