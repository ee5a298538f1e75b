//! Result of converting one NIF file into collision geometry

use std::collections::BTreeMap;

use approx::AbsDiffEq;

use crate::foundation::math::{Isometry, Vec3};
use crate::physics::collision::{BoxShape, CollisionShape, CompoundShape};

/// How a model's collision interacts with the camera and actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualCollisionType {
    /// Regular collision
    #[default]
    None,
    /// Visible geometry without physical collision
    Default,
    /// Collides with the camera only
    Camera,
}

/// Author supplied bounding box replacing the mesh collision
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionBox {
    /// Half size along each axis
    pub extents: Vec3,
    /// Center in model space
    pub center: Vec3,
}

impl CollisionBox {
    /// Create a box override
    pub fn new(extents: Vec3, center: Vec3) -> Self {
        Self { extents, center }
    }

    /// Whether an override was found
    pub fn is_set(&self) -> bool {
        self != &Self::default()
    }

    /// The box as a compound holding one box child placed at `center`
    pub fn to_shape(&self) -> CollisionShape {
        let mut compound = CompoundShape::new();
        compound.add_child_shape(
            Isometry::translation(self.center.x, self.center.y, self.center.z),
            CollisionShape::Box(BoxShape::new(self.extents)),
        );
        CollisionShape::Compound(compound)
    }
}

/// Collision data of one model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollisionAsset {
    /// Shape used for physical collision
    pub collision_shape: Option<CollisionShape>,
    /// Shape used by pathfinding to steer around the model
    pub avoid_collision_shape: Option<CollisionShape>,
    /// Bounding box override
    pub collision_box: CollisionBox,
    /// Node record index to child index of the collision compound, for animated parts
    pub animated_shapes: BTreeMap<usize, usize>,
    /// Visual collision classification
    pub visual_collision_type: VisualCollisionType,
    /// Source file name
    pub file_name: String,
    /// Source content hash
    pub file_hash: String,
}

impl CollisionAsset {
    /// Whether the model produced no collision at all
    pub fn is_empty(&self) -> bool {
        self.collision_shape.is_none() && self.avoid_collision_shape.is_none() && !self.collision_box.is_set()
    }

    /// Compound child driven by the node with `record_index`
    pub fn animated_child_index(&self, record_index: usize) -> Option<usize> {
        self.animated_shapes.get(&record_index).copied()
    }

    /// Shape to hand to the physics backend: the box override if set, else the mesh compound
    pub fn physics_shape(&self) -> Option<CollisionShape> {
        if self.collision_box.is_set() {
            Some(self.collision_box.to_shape())
        } else {
            self.collision_shape.clone()
        }
    }
}

fn optional_shapes_eq(a: &Option<CollisionShape>, b: &Option<CollisionShape>, epsilon: f32) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.abs_diff_eq(b, epsilon),
        (None, None) => true,
        _ => false,
    }
}

impl AbsDiffEq for CollisionAsset {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        optional_shapes_eq(&self.collision_shape, &other.collision_shape, epsilon)
            && optional_shapes_eq(&self.avoid_collision_shape, &other.avoid_collision_shape, epsilon)
            && self.collision_box.extents.abs_diff_eq(&other.collision_box.extents, epsilon)
            && self.collision_box.center.abs_diff_eq(&other.collision_box.center, epsilon)
            && self.animated_shapes == other.animated_shapes
            && self.visual_collision_type == other.visual_collision_type
            && self.file_name == other.file_name
            && self.file_hash == other.file_hash
    }
}
