//! Collision shapes produced for the physics backend
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (triangles, bounding boxes)
//! - [`mesh`] - Triangle mesh shapes, plain and scaled
//! - [`shape`] - Box, compound and the [`CollisionShape`] enum tying them together
//!
//! Every shape is stored in its own local space. Placement only happens
//! through a [`CompoundShape`] child transform or the transform passed to a
//! query such as [`CollisionShape::aabb`].

pub mod primitives;
pub mod mesh;
pub mod shape;

// Re-export commonly used types
pub use primitives::{Triangle, AABB};
pub use mesh::{TriangleMeshShape, ScaledTriangleMeshShape};
pub use shape::{BoxShape, CollisionShape, CompoundChild, CompoundShape};
