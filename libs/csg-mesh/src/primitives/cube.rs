//! # Cube Primitive
//!
//! Six quad faces of an axis-aligned box.

use crate::error::MeshError;
use crate::polygon::Polygon;
use crate::shape::Shape;
use crate::vertex::Vertex;
use config::constants::DEFAULT_COLOR;
use glam::{DVec2, DVec3};
use std::borrow::Cow;

/// Texture coordinates assigned to the four corners of every face.
const FACE_UVS: [DVec2; 4] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(1.0, 1.0),
    DVec2::new(0.0, 1.0),
];

/// Corner indices per face, clockwise seen from outside, with the outward
/// axis of the face.
///
/// Corners: 0 = (min, min, min), 1 = (max, min, min), 2 = (max, max, min),
/// 3 = (min, max, min), 4..7 are the same at max z.
const FACES: [([usize; 4], DVec3); 6] = [
    ([0, 1, 2, 3], DVec3::NEG_Z), // bottom
    ([4, 7, 6, 5], DVec3::Z),     // top
    ([0, 4, 5, 1], DVec3::NEG_Y), // front
    ([2, 6, 7, 3], DVec3::Y),     // back
    ([3, 7, 4, 0], DVec3::NEG_X), // left
    ([1, 5, 6, 2], DVec3::X),     // right
];

/// Axis-aligned box.
///
/// # Example
///
/// ```rust
/// use csg_mesh::{Cube, Shape};
/// use glam::DVec3;
///
/// let cube = Cube::new(DVec3::splat(10.0), false).unwrap();
/// assert_eq!(cube.create_polygons().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    polygons: Vec<Polygon>,
}

impl Cube {
    /// Creates a box of `size`.
    ///
    /// # Arguments
    ///
    /// * `size` - Dimensions [x, y, z]
    /// * `center` - If true, center at origin; if false, corner at origin
    pub fn new(size: DVec3, center: bool) -> Result<Self, MeshError> {
        if !size.cmpgt(DVec3::ZERO).all() {
            return Err(MeshError::degenerate(format!(
                "Cube size must be positive: {:?}",
                size
            )));
        }

        let (min, max) = if center {
            let half = size / 2.0;
            (-half, half)
        } else {
            (DVec3::ZERO, size)
        };

        let corners = [
            DVec3::new(min.x, min.y, min.z),
            DVec3::new(max.x, min.y, min.z),
            DVec3::new(max.x, max.y, min.z),
            DVec3::new(min.x, max.y, min.z),
            DVec3::new(min.x, min.y, max.z),
            DVec3::new(max.x, min.y, max.z),
            DVec3::new(max.x, max.y, max.z),
            DVec3::new(min.x, max.y, max.z),
        ];

        let polygons = FACES
            .iter()
            .map(|(face, normal)| {
                face.iter()
                    .zip(FACE_UVS)
                    .map(|(&c, uv)| Vertex::new(corners[c], *normal, uv, DEFAULT_COLOR))
                    .collect::<Polygon>()
            })
            .collect();

        Ok(Self { polygons })
    }

    /// Returns the same cube with every face recolored.
    pub fn with_color(self, color: [f32; 4]) -> Self {
        Self {
            polygons: self.polygons.iter().map(|p| p.with_color(color)).collect(),
        }
    }
}

impl Shape for Cube {
    fn create_polygons(&self) -> Cow<'_, [Polygon]> {
        Cow::Borrowed(&self.polygons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mesh;

    #[test]
    fn test_cube_counts() {
        let mesh = Mesh::from_shape(&Cube::new(DVec3::splat(10.0), false).unwrap());
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.vertex_count(), 36);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cube_not_centered() {
        let mesh = Mesh::from_shape(&Cube::new(DVec3::splat(10.0), false).unwrap());
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::splat(10.0));
    }

    #[test]
    fn test_cube_centered() {
        let mesh = Mesh::from_shape(&Cube::new(DVec3::new(2.0, 4.0, 6.0), true).unwrap());
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_cube_face_normals_outward() {
        let cube = Cube::new(DVec3::ONE, true).unwrap();
        for (poly, (_, axis)) in cube.create_polygons().iter().zip(FACES) {
            assert_eq!(poly.newell_normal(), axis);
        }
    }

    #[test]
    fn test_cube_face_uvs() {
        let cube = Cube::new(DVec3::ONE, false).unwrap();
        for poly in cube.create_polygons().iter() {
            let uvs: Vec<DVec2> = poly.vertices().iter().map(|v| v.tex_coords).collect();
            assert_eq!(uvs, FACE_UVS.to_vec());
        }
    }

    #[test]
    fn test_cube_with_color() {
        let blue = [0.0, 0.0, 1.0, 1.0];
        let mesh = Mesh::from_shape(&Cube::new(DVec3::ONE, false).unwrap().with_color(blue));
        assert!(mesh.vertices().iter().all(|v| v.color == blue));
    }

    #[test]
    fn test_cube_invalid_size() {
        assert!(Cube::new(DVec3::new(0.0, 10.0, 10.0), false).is_err());
        assert!(Cube::new(DVec3::new(-5.0, 10.0, 10.0), false).is_err());
        assert!(Cube::new(DVec3::new(f64::NAN, 1.0, 1.0), false).is_err());
    }
}
