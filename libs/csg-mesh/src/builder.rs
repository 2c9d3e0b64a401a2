//! # Shape Builder
//!
//! Sink contract that realizers append vertices and indices to.
//!
//! A builder owns its storage strategy; the realizer only appends. Indices
//! are assigned implicitly: the n-th `add_vertex` call within one pass
//! creates vertex `n` (0-based). Builders must not deduplicate, reorder or
//! validate; the realizer guarantees every index refers to a vertex it has
//! already added.

use glam::{DVec2, DVec3};

/// Append-only sink for realized vertices and indices.
///
/// # Example
///
/// ```rust
/// use csg_mesh::ShapeBuilder;
/// use glam::{DVec2, DVec3};
///
/// #[derive(Default)]
/// struct Counter {
///     vertices: usize,
///     indices: Vec<u32>,
/// }
///
/// impl ShapeBuilder for Counter {
///     fn add_vertex(&mut self, _: DVec3, _: DVec3, _: DVec2, _: [f32; 4]) {
///         self.vertices += 1;
///     }
///     fn add_index(&mut self, index: u32) {
///         self.indices.push(index);
///     }
/// }
///
/// let mut counter = Counter::default();
/// counter.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO, [1.0; 4]);
/// counter.add_index(0);
/// assert_eq!(counter.vertices, 1);
/// ```
pub trait ShapeBuilder {
    /// Appends one vertex record. Its index is the number of vertices
    /// appended before it.
    fn add_vertex(&mut self, position: DVec3, normal: DVec3, tex_coords: DVec2, color: [f32; 4]);

    /// Appends one index referencing a previously appended vertex.
    fn add_index(&mut self, index: u32);
}

impl<B: ShapeBuilder + ?Sized> ShapeBuilder for &mut B {
    #[inline]
    fn add_vertex(&mut self, position: DVec3, normal: DVec3, tex_coords: DVec2, color: [f32; 4]) {
        (**self).add_vertex(position, normal, tex_coords, color);
    }

    #[inline]
    fn add_index(&mut self, index: u32) {
        (**self).add_index(index);
    }
}
