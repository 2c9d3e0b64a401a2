//! # Mesh Data Structure
//!
//! Growable vertex/index buffer implementing [`ShapeBuilder`].

use crate::builder::ShapeBuilder;
use crate::error::MeshError;
use crate::polygon::Polygon;
use crate::realize::{realize, RealizeStats};
use crate::shape::Shape;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES, VERTEX_STRIDE};
use glam::{DVec2, DVec3};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// MESH VERTEX
// =============================================================================

/// One realized vertex record as stored by [`Mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    pub position: DVec3,
    pub normal: DVec3,
    pub tex_coords: DVec2,
    pub color: [f32; 4],
}

// =============================================================================
// MESH
// =============================================================================

/// A flat triangle list with per-vertex attributes.
///
/// All geometry is kept in f64. Narrowing to f32 only happens in the GPU
/// export helpers.
///
/// # Example
///
/// ```rust
/// use csg_mesh::{Mesh, ShapeBuilder};
/// use glam::{DVec2, DVec3};
///
/// let mut mesh = Mesh::new();
/// for (i, p) in [DVec3::ZERO, DVec3::X, DVec3::Y].into_iter().enumerate() {
///     mesh.add_vertex(p, DVec3::Z, DVec2::ZERO, [1.0; 4]);
///     mesh.add_index(i as u32);
/// }
/// assert_eq!(mesh.triangle_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex records in emission order
    vertices: Vec<MeshVertex>,
    /// Index buffer, three per triangle
    indices: Vec<u32>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Realizes a single shape into a new mesh.
    ///
    /// # Example
    ///
    /// ```rust
    /// use csg_mesh::{Cube, Mesh};
    /// use glam::DVec3;
    ///
    /// let cube = Cube::new(DVec3::ONE, true).unwrap();
    /// let mesh = Mesh::from_shape(&cube);
    /// assert_eq!(mesh.triangle_count(), 12);
    /// ```
    pub fn from_shape<S: Shape + ?Sized>(shape: &S) -> Self {
        let mut mesh = Mesh::new();
        shape.build(&mut mesh);
        mesh
    }

    /// Realizes independent shapes in parallel and concatenates the results
    /// in input order.
    ///
    /// Each shape gets its own mesh and its own realization pass, so no
    /// builder is shared between threads.
    pub fn from_shapes(shapes: &[&dyn Shape]) -> Result<Self, MeshError> {
        let parts: Vec<Mesh> = shapes
            .par_iter()
            .map(|shape| Mesh::from_shape(*shape))
            .collect();

        let vertex_count = parts.iter().map(Mesh::vertex_count).sum();
        let index_count = parts.iter().map(Mesh::index_count).sum();
        let mut mesh = Mesh::with_capacity(vertex_count, index_count);
        for part in &parts {
            mesh.merge(part)?;
        }

        debug!(
            "realized {} shapes into {} vertices",
            shapes.len(),
            mesh.vertex_count()
        );
        Ok(mesh)
    }

    /// Appends the realization of `polygons` to this mesh.
    ///
    /// The realizer numbers its vertices from zero, so the new indices are
    /// offset by the current vertex count.
    pub fn append_polygons(&mut self, polygons: &[Polygon]) -> Result<RealizeStats, MeshError> {
        let mut part = Mesh::new();
        let stats = realize(polygons, &mut part);
        self.merge(&part)?;
        Ok(stats)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of complete triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    /// Returns a reference to the indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates over complete index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Removes all vertices and indices, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.vertices.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.vertices[1..]
            .iter()
            .fold((first.position, first.position), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            })
    }

    /// Merges another mesh into this one.
    ///
    /// Fails without modifying `self` if the result would exceed
    /// `MAX_VERTICES`, which keeps every offset index within `u32`.
    pub fn merge(&mut self, other: &Mesh) -> Result<(), MeshError> {
        check_vertex_limit(self.vertices.len() + other.vertices.len())?;
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|index| index + offset));
        Ok(())
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Vertex and triangle counts are within limits
    /// - The index buffer holds whole triangles
    /// - All indices reference an existing vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        check_vertex_limit(self.vertices.len())?;

        if self.triangle_count() > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: self.triangle_count(),
                max: MAX_TRIANGLES,
            });
        }

        if self.indices.len() % 3 != 0 {
            return Err(MeshError::validation(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, &index)| index as usize >= vertex_count)
        {
            return Err(MeshError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.position.as_vec3().to_array())
            .collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.normal.as_vec3().to_array())
            .collect()
    }

    /// Exports texture coordinates as f32 array for GPU.
    pub fn tex_coords_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.tex_coords.as_vec2().to_array())
            .collect()
    }

    /// Exports RGBA colors as f32 array for GPU.
    pub fn colors_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.color).collect()
    }

    /// Exports one interleaved f32 vertex buffer.
    ///
    /// Each vertex occupies `VERTEX_STRIDE` floats: position, normal,
    /// tex coords, color.
    pub fn interleaved_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * VERTEX_STRIDE);
        for v in &self.vertices {
            result.extend_from_slice(&v.position.as_vec3().to_array());
            result.extend_from_slice(&v.normal.as_vec3().to_array());
            result.extend_from_slice(&v.tex_coords.as_vec2().to_array());
            result.extend_from_slice(&v.color);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices.clone()
    }
}

impl ShapeBuilder for Mesh {
    #[inline]
    fn add_vertex(&mut self, position: DVec3, normal: DVec3, tex_coords: DVec2, color: [f32; 4]) {
        self.vertices.push(MeshVertex {
            position,
            normal,
            tex_coords,
            color,
        });
    }

    #[inline]
    fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }
}

fn check_vertex_limit(count: usize) -> Result<(), MeshError> {
    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}
