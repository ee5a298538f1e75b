//! High-level collision shape abstractions
//!
//! Shapes handed to the physics backend. Meshes and boxes live in their own
//! local space; a [`CompoundShape`] places each child with a rigid transform.

use approx::AbsDiffEq;

use crate::foundation::math::{Isometry, Point3, Vec3};
use super::mesh::{ScaledTriangleMeshShape, TriangleMeshShape};
use super::primitives::{Triangle, AABB};

/// Box centered on its local origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    /// Half size along each axis
    pub half_extents: Vec3,
}

impl BoxShape {
    /// Create a box from half extents
    pub fn new(half_extents: Vec3) -> Self {
        Self { half_extents }
    }

    /// Local bounds
    pub fn local_aabb(&self) -> AABB {
        AABB::from_center_extents(Vec3::zeros(), self.half_extents)
    }

    /// The twelve surface triangles, two per face, wound outwards
    pub fn triangles(&self) -> [Triangle; 12] {
        let c = self.local_aabb().corners();
        let quad = |a: usize, b: usize, d: usize, e: usize| {
            [Triangle::new(c[a], c[b], c[d]), Triangle::new(c[a], c[d], c[e])]
        };
        let faces = [
            quad(0, 2, 3, 1), // -z
            quad(4, 5, 7, 6), // +z
            quad(0, 1, 5, 4), // -y
            quad(2, 6, 7, 3), // +y
            quad(0, 4, 6, 2), // -x
            quad(1, 3, 7, 5), // +x
        ];
        let mut triangles = [Triangle::new(Vec3::zeros(), Vec3::zeros(), Vec3::zeros()); 12];
        for (i, face) in faces.iter().enumerate() {
            triangles[2 * i] = face[0];
            triangles[2 * i + 1] = face[1];
        }
        triangles
    }
}

/// Child of a compound shape
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundChild {
    /// Placement in the compound's space
    pub transform: Isometry,
    /// The child shape
    pub shape: CollisionShape,
}

/// Ordered list of placed child shapes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundShape {
    children: Vec<CompoundChild>,
}

impl CompoundShape {
    /// Create an empty compound
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child, returning its index
    pub fn add_child_shape(&mut self, transform: Isometry, shape: CollisionShape) -> usize {
        self.children.push(CompoundChild { transform, shape });
        self.children.len() - 1
    }

    /// Number of children
    pub fn num_child_shapes(&self) -> usize {
        self.children.len()
    }

    /// Child at `index`
    pub fn child(&self, index: usize) -> Option<&CompoundChild> {
        self.children.get(index)
    }

    /// Children in insertion order
    pub fn children(&self) -> &[CompoundChild] {
        &self.children
    }

    /// Whether the compound has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Collision shape types understood by the physics backend
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionShape {
    /// Plain triangle mesh
    TriangleMesh(TriangleMeshShape),
    /// Triangle mesh with local scaling
    ScaledTriangleMesh(ScaledTriangleMeshShape),
    /// Box
    Box(BoxShape),
    /// Compound of placed children
    Compound(CompoundShape),
}

impl CollisionShape {
    /// Short name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::TriangleMesh(_) => "triangle mesh",
            Self::ScaledTriangleMesh(_) => "scaled triangle mesh",
            Self::Box(_) => "box",
            Self::Compound(_) => "compound",
        }
    }

    /// Compound contents, if this is a compound
    pub fn as_compound(&self) -> Option<&CompoundShape> {
        match self {
            Self::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    /// Bounds after placing the shape with `transform`
    pub fn aabb(&self, transform: &Isometry) -> AABB {
        match self {
            Self::TriangleMesh(mesh) => mesh.aabb(transform),
            Self::ScaledTriangleMesh(scaled) => scaled.aabb(transform),
            Self::Box(shape) => shape.local_aabb().transformed(transform, &Vec3::repeat(1.0)),
            Self::Compound(compound) => compound
                .children()
                .iter()
                .fold(AABB::empty(), |aabb, child| {
                    aabb.merged(&child.shape.aabb(&(transform * child.transform)))
                }),
        }
    }

    /// Total triangle count, compound children included
    pub fn num_triangles(&self) -> usize {
        match self {
            Self::TriangleMesh(mesh) => mesh.num_triangles(),
            Self::ScaledTriangleMesh(scaled) => scaled.num_triangles(),
            Self::Box(_) => 12,
            Self::Compound(compound) => compound
                .children()
                .iter()
                .map(|child| child.shape.num_triangles())
                .sum(),
        }
    }

    /// Visit every triangle in this shape's space
    ///
    /// Compound children are visited in insertion order with their placement
    /// and any mesh scaling applied.
    pub fn process_all_triangles(&self, callback: &mut dyn FnMut(&Triangle)) {
        self.process_triangles_placed(&Isometry::identity(), callback);
    }

    /// Collect every triangle in this shape's space
    pub fn all_triangles(&self) -> Vec<Triangle> {
        let mut triangles = Vec::with_capacity(self.num_triangles());
        self.process_all_triangles(&mut |triangle| triangles.push(*triangle));
        triangles
    }

    fn process_triangles_placed(&self, transform: &Isometry, callback: &mut dyn FnMut(&Triangle)) {
        let place = |v: &Vec3| transform.transform_point(&Point3::from(*v)).coords;
        match self {
            Self::TriangleMesh(mesh) => {
                for triangle in mesh.triangles() {
                    callback(&triangle.map(place));
                }
            }
            Self::ScaledTriangleMesh(scaled) => {
                for triangle in scaled.scaled_triangles() {
                    callback(&triangle.map(place));
                }
            }
            Self::Box(shape) => {
                for triangle in shape.triangles() {
                    callback(&triangle.map(place));
                }
            }
            Self::Compound(compound) => {
                for child in compound.children() {
                    child.shape.process_triangles_placed(&(transform * child.transform), callback);
                }
            }
        }
    }
}

impl AbsDiffEq for CompoundChild {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.transform.abs_diff_eq(&other.transform, epsilon) && self.shape.abs_diff_eq(&other.shape, epsilon)
    }
}

impl AbsDiffEq for CompoundShape {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl AbsDiffEq for CollisionShape {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        match (self, other) {
            (Self::TriangleMesh(a), Self::TriangleMesh(b)) => a.abs_diff_eq(b, epsilon),
            (Self::ScaledTriangleMesh(a), Self::ScaledTriangleMesh(b)) => a.abs_diff_eq(b, epsilon),
            (Self::Box(a), Self::Box(b)) => a.half_extents.abs_diff_eq(&b.half_extents, epsilon),
            (Self::Compound(a), Self::Compound(b)) => a.abs_diff_eq(b, epsilon),
            _ => false,
        }
    }
}
