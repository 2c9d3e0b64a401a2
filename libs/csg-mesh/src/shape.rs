//! # Shapes
//!
//! Every solid-producing node exposes the same two capabilities: produce its
//! polygon list, and realize that list into a [`ShapeBuilder`].
//!
//! ## Variants
//!
//! - [`GeneratedShape`]: finished faces handed over by the combination engine
//! - [`Cube`](crate::Cube), [`Sphere`](crate::Sphere): leaf primitives
//! - [`CombinedShape`]: boolean combination of two shapes, delegated to an
//!   external [`CombinationEngine`]
//!
//! Realization is a fixed two-step pipeline in [`Shape::build`]: obtain the
//! polygons, then hand them to the shared [`realize`] routine. Variants only
//! decide which polygons they describe.

use crate::builder::ShapeBuilder;
use crate::polygon::Polygon;
use crate::realize::{realize, RealizeStats};
use glam::DMat4;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// SHAPE
// =============================================================================

/// A solid described by planar polygon faces.
///
/// Shapes are immutable: `create_polygons` must return value-equal lists on
/// every call and must not have side effects.
pub trait Shape: Send + Sync {
    /// Returns the faces of this shape.
    fn create_polygons(&self) -> Cow<'_, [Polygon]>;

    /// Realizes this shape into `builder`.
    ///
    /// Indices start at zero for every call; reuse a builder across shapes
    /// only if it offsets indices itself.
    fn build(&self, builder: &mut dyn ShapeBuilder) -> RealizeStats {
        let polygons = self.create_polygons();
        realize(&polygons, builder)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn create_polygons(&self) -> Cow<'_, [Polygon]> {
        (**self).create_polygons()
    }
}

impl<S: Shape + ?Sized> Shape for Arc<S> {
    fn create_polygons(&self) -> Cow<'_, [Polygon]> {
        (**self).create_polygons()
    }
}

// =============================================================================
// GENERATED SHAPE
// =============================================================================

/// A shape whose faces were produced by combining other shapes.
///
/// # Example
///
/// ```rust
/// use csg_mesh::{GeneratedShape, Mesh, Polygon, Shape, Vertex};
/// use glam::DVec3;
///
/// let shape = GeneratedShape::new([Polygon::new(vec![
///     Vertex::at(DVec3::ZERO),
///     Vertex::at(DVec3::X),
///     Vertex::at(DVec3::Y),
/// ])]);
///
/// let mut mesh = Mesh::new();
/// let stats = shape.build(&mut mesh);
/// assert_eq!(stats.triangles, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedShape {
    polygons: Vec<Polygon>,
}

impl GeneratedShape {
    /// Creates a shape from finished faces.
    pub fn new(polygons: impl IntoIterator<Item = Polygon>) -> Self {
        Self {
            polygons: polygons.into_iter().collect(),
        }
    }

    /// Snapshots the current faces of any shape.
    pub fn from_shape<S: Shape + ?Sized>(shape: &S) -> Self {
        Self {
            polygons: shape.create_polygons().into_owned(),
        }
    }

    /// Stored faces.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns a new shape with every face transformed by `matrix`.
    pub fn transformed(&self, matrix: &DMat4) -> GeneratedShape {
        Self::new(self.polygons.iter().map(|p| p.transformed(matrix)))
    }
}

impl From<Vec<Polygon>> for GeneratedShape {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }
}

impl Shape for GeneratedShape {
    fn create_polygons(&self) -> Cow<'_, [Polygon]> {
        Cow::Borrowed(&self.polygons)
    }
}

// =============================================================================
// COMBINED SHAPE
// =============================================================================

/// Boolean operation applied by a [`CombinationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsgOperation {
    /// Everything inside either operand.
    Union,
    /// Inside the first operand but not the second.
    Subtract,
    /// Inside both operands.
    Intersect,
}

impl fmt::Display for CsgOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CsgOperation::Union => "union",
            CsgOperation::Subtract => "subtract",
            CsgOperation::Intersect => "intersect",
        };
        f.write_str(name)
    }
}

/// External boolean-combination engine.
///
/// Implementations must be deterministic: the same operands and operation
/// always give the same faces.
pub trait CombinationEngine: Send + Sync {
    /// Combines two face lists into the faces of the resulting solid.
    fn combine(&self, operation: CsgOperation, a: &[Polygon], b: &[Polygon]) -> Vec<Polygon>;
}

/// Shape defined as a boolean combination of two other shapes.
///
/// The combination runs on every [`create_polygons`](Shape::create_polygons)
/// call. Use [`GeneratedShape::from_shape`] to keep the result.
pub struct CombinedShape {
    operation: CsgOperation,
    a: Box<dyn Shape>,
    b: Box<dyn Shape>,
    engine: Arc<dyn CombinationEngine>,
}

impl CombinedShape {
    /// Creates a combination of `a` and `b`.
    pub fn new(
        operation: CsgOperation,
        a: impl Shape + 'static,
        b: impl Shape + 'static,
        engine: Arc<dyn CombinationEngine>,
    ) -> Self {
        Self {
            operation,
            a: Box::new(a),
            b: Box::new(b),
            engine,
        }
    }

    /// The boolean operation.
    pub fn operation(&self) -> CsgOperation {
        self.operation
    }
}

impl fmt::Debug for CombinedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedShape")
            .field("operation", &self.operation)
            .finish_non_exhaustive()
    }
}

impl Shape for CombinedShape {
    fn create_polygons(&self) -> Cow<'_, [Polygon]> {
        let a = self.a.create_polygons();
        let b = self.b.create_polygons();
        Cow::Owned(self.engine.combine(self.operation, &a, &b))
    }
}
