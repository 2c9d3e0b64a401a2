//! # Polygon
//!
//! Planar face produced by the upstream combination engine.

use crate::vertex::Vertex;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// POLYGON
// =============================================================================

/// An ordered, closed loop of vertices lying on a common plane.
///
/// Insertion order is winding order: it decides the sign of the face normal
/// and the fan order during realization. Planarity and convexity are the
/// producer's responsibility and are not checked here.
///
/// Polygons with fewer than three vertices are representable; the realizer
/// skips them.
///
/// # Example
///
/// ```rust
/// use csg_mesh::{Polygon, Vertex};
/// use glam::DVec3;
///
/// let quad = Polygon::new(vec![
///     Vertex::at(DVec3::new(0.0, 0.0, 0.0)),
///     Vertex::at(DVec3::new(1.0, 0.0, 0.0)),
///     Vertex::at(DVec3::new(1.0, 1.0, 0.0)),
///     Vertex::at(DVec3::new(0.0, 1.0, 0.0)),
/// ]);
/// assert_eq!(quad.len(), 4);
/// assert_eq!(quad.newell_normal(), DVec3::new(0.0, 0.0, -1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Create polygon from vertices in winding order.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Get polygon vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the polygon cannot form a triangle.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Face normal by Newell's method.
    ///
    /// Accumulates `cross(v[j + 1], v[j])` over every edge of the loop and
    /// normalizes the sum. Unlike a three-point cross product this stays
    /// stable for sliver faces and slightly non-planar loops.
    ///
    /// Returns the zero vector when the accumulation vanishes (collinear or
    /// empty loops).
    pub fn newell_normal(&self) -> DVec3 {
        let n = self.vertices.len();
        let mut normal = DVec3::ZERO;

        for j in 0..n {
            let current = self.vertices[j].position;
            let next = self.vertices[(j + 1) % n].position;
            normal += next.cross(current);
        }

        normal.normalize_or_zero()
    }

    /// Flip the polygon (reverse winding order and vertex normals).
    pub fn flipped(&self) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().rev().map(Vertex::flipped).collect(),
        }
    }

    /// Returns a copy with every vertex transformed by `matrix`.
    ///
    /// Normals go through the inverse transpose. A mirroring matrix does not
    /// reverse the winding; call [`flipped`](Self::flipped) afterwards if the
    /// face orientation must be preserved.
    pub fn transformed(&self, matrix: &DMat4) -> Polygon {
        let normal_matrix = matrix.inverse().transpose();
        Polygon {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.transformed(matrix, &normal_matrix))
                .collect(),
        }
    }

    /// Returns a copy with every vertex recolored.
    pub fn with_color(&self, color: [f32; 4]) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|v| v.with_color(color)).collect(),
        }
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Vertex> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
