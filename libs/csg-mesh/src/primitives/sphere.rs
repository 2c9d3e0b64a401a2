//! # Sphere Primitive
//!
//! Latitude/longitude sphere made of quad bands and two polygon caps.

use crate::error::MeshError;
use crate::polygon::Polygon;
use crate::shape::Shape;
use crate::vertex::Vertex;
use config::constants::{compute_fragments, DEFAULT_COLOR, DEFAULT_FA, DEFAULT_FS};
use glam::{DVec2, DVec3};
use std::borrow::Cow;
use std::f64::consts::{PI, TAU};

/// Sphere centered at the origin.
///
/// # Algorithm
///
/// - `num_rings = (segments + 1) / 2`
/// - Ring `i` sits at polar angle `phi = PI * (i + 0.5) / num_rings`
/// - No pole vertices: the first and last rings close as `segments`-gon caps
///
/// # Example
///
/// ```rust
/// use csg_mesh::{Shape, Sphere};
///
/// let sphere = Sphere::with_segments(5.0, 8).unwrap();
/// // 2 caps + 3 bands of 8 quads
/// assert_eq!(sphere.create_polygons().len(), 2 + 3 * 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    polygons: Vec<Polygon>,
}

impl Sphere {
    /// Creates a sphere with a segment count derived from its radius.
    pub fn new(radius: f64) -> Result<Self, MeshError> {
        Self::with_segments(radius, compute_fragments(radius, 0.0, DEFAULT_FA, DEFAULT_FS))
    }

    /// Creates a sphere with `segments` divisions around the equator.
    pub fn with_segments(radius: f64, segments: u32) -> Result<Self, MeshError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MeshError::degenerate(format!(
                "Sphere radius must be positive: {}",
                radius
            )));
        }

        if segments < 3 {
            return Err(MeshError::degenerate(format!(
                "Sphere segments must be at least 3: {}",
                segments
            )));
        }

        let segments = segments as usize;
        let num_rings = (segments + 1) / 2;

        // `j == segments` repeats the seam position with u = 1.
        let band_vertex = |i: usize, j: usize| {
            let phi = PI * (i as f64 + 0.5) / num_rings as f64;
            let theta = TAU * j as f64 / segments as f64;
            let normal = DVec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());
            let uv = DVec2::new(j as f64 / segments as f64, (i as f64 + 0.5) / num_rings as f64);
            Vertex::new(normal * radius, normal, uv, DEFAULT_COLOR)
        };

        // Caps get a planar projection of the ring instead.
        let cap_vertex = |i: usize, j: usize| {
            let v = band_vertex(i, j);
            let theta = TAU * j as f64 / segments as f64;
            v.with_tex_coords(DVec2::new(0.5 + 0.5 * theta.cos(), 0.5 + 0.5 * theta.sin()))
        };

        let mut polygons: Vec<Polygon> = Vec::with_capacity(2 + segments * (num_rings - 1));

        // Top cap
        polygons.push((0..segments).rev().map(|j| cap_vertex(0, j)).collect());

        // Middle bands
        for i in 0..num_rings - 1 {
            for j in 0..segments {
                polygons.push(Polygon::new(vec![
                    band_vertex(i, j),
                    band_vertex(i, j + 1),
                    band_vertex(i + 1, j + 1),
                    band_vertex(i + 1, j),
                ]));
            }
        }

        // Bottom cap
        polygons.push((0..segments).map(|j| cap_vertex(num_rings - 1, j)).collect());

        Ok(Self { polygons })
    }

    /// Returns the same sphere with every face recolored.
    pub fn with_color(self, color: [f32; 4]) -> Self {
        Self {
            polygons: self.polygons.iter().map(|p| p.with_color(color)).collect(),
        }
    }
}

impl Shape for Sphere {
    fn create_polygons(&self) -> Cow<'_, [Polygon]> {
        Cow::Borrowed(&self.polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mesh;

    fn centroid(poly: &Polygon) -> DVec3 {
        poly.vertices().iter().map(|v| v.position).sum::<DVec3>() / poly.len() as f64
    }

    #[test]
    fn test_sphere_triangle_count() {
        let segments = 12;
        let rings = (segments + 1) / 2;
        let mesh = Mesh::from_shape(&Sphere::with_segments(1.0, segments as u32).unwrap());

        let expected = 2 * (segments - 2) + 2 * segments * (rings - 1);
        assert_eq!(mesh.triangle_count(), expected);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let radius = 3.5;
        let mesh = Mesh::from_shape(&Sphere::with_segments(radius, 10).unwrap());
        for v in mesh.vertices() {
            assert!((v.position.length() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sphere_normals_outward() {
        let sphere = Sphere::with_segments(2.0, 9).unwrap();
        for poly in sphere.create_polygons().iter() {
            assert!(poly.newell_normal().dot(centroid(poly)) > 0.0);
        }
    }

    #[test]
    fn test_sphere_default_segments() {
        let sphere = Sphere::new(10.0).unwrap();
        let segments = compute_fragments(10.0, 0.0, DEFAULT_FA, DEFAULT_FS) as usize;
        let polygons = sphere.create_polygons();
        assert_eq!(polygons[0].len(), segments);
    }

    #[test]
    fn test_sphere_tex_coords_in_unit_square() {
        let mesh = Mesh::from_shape(&Sphere::with_segments(1.0, 7).unwrap());
        for v in mesh.vertices() {
            assert!((0.0..=1.0).contains(&v.tex_coords.x));
            assert!((0.0..=1.0).contains(&v.tex_coords.y));
        }
    }

    #[test]
    fn test_sphere_invalid() {
        assert!(Sphere::new(0.0).is_err());
        assert!(Sphere::new(f64::NAN).is_err());
        assert!(Sphere::with_segments(f64::NAN, 8).is_err());
        assert!(Sphere::with_segments(f64::INFINITY, 8).is_err());
        assert!(Sphere::with_segments(1.0, 2).is_err());
    }
}
