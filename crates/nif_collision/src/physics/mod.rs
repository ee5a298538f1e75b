//! Physics module
//!
//! Shape types consumed by the rigid-body backend.

pub mod collision;

pub use collision::{
    BoxShape,
    CollisionShape,
    CompoundChild,
    CompoundShape,
    ScaledTriangleMeshShape,
    Triangle,
    TriangleMeshShape,
    AABB,
};
