//! # Primitives
//!
//! Leaf shapes that describe their own faces (cube, sphere).
//!
//! Faces wind clockwise when viewed from outside the solid, so the
//! `cross(next, current)` Newell accumulation used by the realizer points
//! outward.

pub mod cube;
pub mod sphere;

pub use cube::Cube;
pub use sphere::Sphere;
