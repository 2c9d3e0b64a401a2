//! # Vertex
//!
//! Attribute record carried by every polygon corner.

use config::constants::DEFAULT_COLOR;
use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// VERTEX
// =============================================================================

/// A polygon corner: position plus shading attributes.
///
/// Vertices are plain values owned by the [`Polygon`](crate::Polygon) that
/// contains them. The stored `normal` is whatever the upstream stage supplied;
/// realization replaces it with the recomputed face normal.
///
/// # Example
///
/// ```rust
/// use csg_mesh::Vertex;
/// use glam::{DVec2, DVec3};
///
/// let v = Vertex::new(DVec3::X, DVec3::Z, DVec2::new(1.0, 0.0), [1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(v.position, DVec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in model space.
    pub position: DVec3,
    /// Normal supplied by the producer of this vertex.
    pub normal: DVec3,
    /// Texture coordinates.
    pub tex_coords: DVec2,
    /// RGBA color.
    pub color: [f32; 4],
}

impl Vertex {
    /// Create a vertex from all of its attributes.
    pub fn new(position: DVec3, normal: DVec3, tex_coords: DVec2, color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            tex_coords,
            color,
        }
    }

    /// Create a vertex at `position` with zero normal, zero texture
    /// coordinates and the default color.
    pub fn at(position: DVec3) -> Self {
        Self::new(position, DVec3::ZERO, DVec2::ZERO, DEFAULT_COLOR)
    }

    /// Returns a copy with a different color.
    pub fn with_color(&self, color: [f32; 4]) -> Vertex {
        Vertex { color, ..*self }
    }

    /// Returns a copy with a different texture coordinate.
    pub fn with_tex_coords(&self, tex_coords: DVec2) -> Vertex {
        Vertex { tex_coords, ..*self }
    }

    /// Returns a copy with the normal negated.
    pub fn flipped(&self) -> Vertex {
        Vertex {
            normal: -self.normal,
            ..*self
        }
    }

    /// Returns a copy transformed by `matrix`.
    ///
    /// `normal_matrix` must be the inverse transpose of `matrix`; it is passed
    /// in so a polygon computes it once for all of its vertices.
    pub(crate) fn transformed(&self, matrix: &DMat4, normal_matrix: &DMat4) -> Vertex {
        Vertex {
            position: matrix.transform_point3(self.position),
            normal: normal_matrix
                .transform_vector3(self.normal)
                .normalize_or_zero(),
            ..*self
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_at_defaults() {
        let v = Vertex::at(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.normal, DVec3::ZERO);
        assert_eq!(v.tex_coords, DVec2::ZERO);
        assert_eq!(v.color, DEFAULT_COLOR);
    }

    #[test]
    fn test_vertex_flipped() {
        let v = Vertex::new(DVec3::ZERO, DVec3::Y, DVec2::ONE, DEFAULT_COLOR);
        let f = v.flipped();
        assert_eq!(f.normal, -DVec3::Y);
        assert_eq!(f.tex_coords, DVec2::ONE);
    }

    #[test]
    fn test_vertex_transformed_translation_keeps_normal() {
        let v = Vertex::new(DVec3::ZERO, DVec3::Z, DVec2::ZERO, DEFAULT_COLOR);
        let m = DMat4::from_translation(DVec3::new(5.0, 0.0, 0.0));
        let t = v.transformed(&m, &m.inverse().transpose());
        assert_eq!(t.position, DVec3::new(5.0, 0.0, 0.0));
        assert!((t.normal - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_vertex_with_color() {
        let v = Vertex::at(DVec3::ZERO).with_color([0.0, 1.0, 0.0, 0.5]);
        assert_eq!(v.color, [0.0, 1.0, 0.0, 0.5]);
    }
}
