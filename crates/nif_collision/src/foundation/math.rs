//! Math utilities and types
//!
//! Provides the vector, matrix and transform types shared by the NIF record
//! model and the collision shapes.

pub use nalgebra::{
    Vector3,
    Matrix3,
    Rotation3,
    Translation3,
    IsometryMatrix3,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Rigid placement (rotation matrix + translation) used for compound children
pub type Isometry = IsometryMatrix3<f32>;

/// Transform representing translation, rotation, and uniform scale
///
/// Points are mapped as `rotation * (scale * p) + translation`, which is the
/// convention NIF files store their local transforms in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation in parent space
    pub translation: Vec3,

    /// Rotation matrix (column-vector convention)
    pub rotation: Mat3,

    /// Uniform scale factor
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Mat3::identity(),
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only a translation
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Create a transform from all three components
    pub fn from_parts(translation: Vec3, rotation: Mat3, scale: f32) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Builder pattern: Set uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: Set rotation from axis-angle
    pub fn with_rotation_axis_angle(mut self, axis: Vec3, angle: f32) -> Self {
        self.rotation = *Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle).matrix();
        self
    }

    /// Check whether this transform leaves every point where it is
    pub fn is_identity(&self) -> bool {
        self.translation == Vec3::zeros() && self.rotation == Mat3::identity() && self.scale == 1.0
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.rotation * (point * self.scale) + self.translation
    }

    /// Combine this transform (parent) with another (child)
    ///
    /// The result maps child-local points straight into this transform's
    /// parent space.
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            translation: self.translation + self.rotation * (other.translation * self.scale),
            rotation: self.rotation * other.rotation,
            scale: self.scale * other.scale,
        }
    }

    /// Rotation and translation without the scale
    pub fn isometry(&self) -> Isometry {
        Isometry::from_parts(
            Translation3::from(self.translation),
            Rotation3::from_matrix_unchecked(self.rotation),
        )
    }

    /// Scale as a per-axis vector
    pub fn scale_vector(&self) -> Vec3 {
        Vec3::repeat(self.scale)
    }
}
