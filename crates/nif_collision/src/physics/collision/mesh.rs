//! Triangle mesh collision shapes

use approx::AbsDiffEq;

use crate::foundation::math::{Isometry, Vec3};
use super::primitives::{Triangle, AABB};

/// Triangle soup stored in the space it was built in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMeshShape {
    triangles: Vec<Triangle>,
    local_aabb: AABB,
}

impl TriangleMeshShape {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from a list of triangles
    pub fn from_triangles(triangles: impl IntoIterator<Item = Triangle>) -> Self {
        let mut mesh = Self::new();
        for triangle in triangles {
            mesh.add_triangle(triangle);
        }
        mesh
    }

    /// Append a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        for vertex in triangle.vertices() {
            self.local_aabb.grow(&vertex);
        }
        self.triangles.push(triangle);
    }

    /// Append every triangle of another mesh
    pub fn append(&mut self, other: TriangleMeshShape) {
        self.local_aabb = self.local_aabb.merged(&other.local_aabb);
        self.triangles.extend(other.triangles);
    }

    /// Number of triangles
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangles in insertion order
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Bounds in the mesh's own space
    pub fn local_aabb(&self) -> AABB {
        self.local_aabb
    }

    /// Bounds after placing the mesh with `transform`
    pub fn aabb(&self, transform: &Isometry) -> AABB {
        self.local_aabb.transformed(transform, &Vec3::repeat(1.0))
    }
}

impl AbsDiffEq for TriangleMeshShape {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.triangles.len() == other.triangles.len()
            && self
                .triangles
                .iter()
                .zip(&other.triangles)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

/// Triangle mesh with a per-axis scale applied on top of its vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledTriangleMeshShape {
    mesh: TriangleMeshShape,
    local_scaling: Vec3,
}

impl ScaledTriangleMeshShape {
    /// Wrap a mesh with a scale
    pub fn new(mesh: TriangleMeshShape, local_scaling: Vec3) -> Self {
        Self { mesh, local_scaling }
    }

    /// Wrapped mesh
    pub fn mesh(&self) -> &TriangleMeshShape {
        &self.mesh
    }

    /// Per-axis scale
    pub fn local_scaling(&self) -> Vec3 {
        self.local_scaling
    }

    /// Number of triangles
    pub fn num_triangles(&self) -> usize {
        self.mesh.num_triangles()
    }

    /// Bounds after scaling and placing the mesh with `transform`
    pub fn aabb(&self, transform: &Isometry) -> AABB {
        self.mesh.local_aabb().transformed(transform, &self.local_scaling)
    }

    /// Triangles with the scale applied
    pub fn scaled_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.mesh
            .triangles()
            .iter()
            .map(|triangle| triangle.map(|v| v.component_mul(&self.local_scaling)))
    }
}

impl AbsDiffEq for ScaledTriangleMeshShape {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.local_scaling.abs_diff_eq(&other.local_scaling, epsilon)
            && self.mesh.abs_diff_eq(&other.mesh, epsilon)
    }
}
