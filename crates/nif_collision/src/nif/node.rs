//! Scene graph nodes

use crate::foundation::math::{Mat3, Transform, Vec3};
use super::controller::Controller;
use super::data::Geometry;
use super::extra::ExtraData;

slotmap::new_key_type! {
    /// Stable handle of a node inside a [`NifFile`](super::NifFile)
    pub struct NodeKey;
}

/// Local transform as stored in NIF records (rotation matrix, translation, uniform scale)
pub type NiTransform = Transform;

/// Bounding volume attached to a node
#[derive(Debug, Clone, PartialEq)]
pub enum BoundingVolume {
    /// Sphere
    Sphere {
        /// Center
        center: Vec3,
        /// Radius
        radius: f32,
    },
    /// Oriented box
    Box {
        /// Center
        center: Vec3,
        /// Box axes as matrix columns
        axes: Mat3,
        /// Half extents along each axis
        extents: Vec3,
    },
    /// Capsule
    Capsule {
        /// Center
        center: Vec3,
        /// Direction of the capsule segment
        axis: Vec3,
        /// Half length of the segment
        extent: f32,
        /// Radius
        radius: f32,
    },
    /// Half space
    HalfSpace {
        /// Plane normal
        normal: Vec3,
        /// Plane constant
        constant: f32,
    },
    /// Union of several volumes
    Union(Vec<BoundingVolume>),
}

impl BoundingVolume {
    /// Axis-aligned box bounds
    pub fn aligned_box(center: Vec3, extents: Vec3) -> Self {
        Self::Box {
            center,
            axes: Mat3::identity(),
            extents,
        }
    }

    /// Short name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Box { .. } => "box",
            Self::Capsule { .. } => "capsule",
            Self::HalfSpace { .. } => "half space",
            Self::Union(_) => "union",
        }
    }
}

/// Record type of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Leaf scene object that cannot hold children
    AvObject,
    /// Plain grouping node
    Node,
    /// Subtree used for pathfinding avoidance only
    AvoidNode,
    /// Author supplied collision hull
    RootCollisionNode,
    /// Node that can switch collision for its subtree off
    CollisionSwitch {
        /// Whether the subtree collides
        collision_active: bool,
    },
    /// Renderable triangle geometry
    Geometry(Geometry),
}

impl NodeKind {
    /// Whether nodes of this kind may have children attached
    pub fn can_have_children(&self) -> bool {
        !matches!(self, Self::AvObject | Self::Geometry(_))
    }

    /// Short name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AvObject => "NiAVObject",
            Self::Node => "NiNode",
            Self::AvoidNode => "AvoidNode",
            Self::RootCollisionNode => "RootCollisionNode",
            Self::CollisionSwitch { .. } => "NiCollisionSwitch",
            Self::Geometry(_) => "NiGeometry",
        }
    }
}

/// A node of the parsed scene graph
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) record_index: usize,

    /// Node name
    pub name: String,

    /// Record type
    pub kind: NodeKind,

    /// Transform relative to the parent
    pub transform: NiTransform,

    /// Optional bounding volume
    pub bounding_volume: Option<BoundingVolume>,

    /// Extra data chain in file order
    pub extra_data: Vec<ExtraData>,

    /// Controller chain in file order
    pub controllers: Vec<Controller>,

    /// Children in file order, null links kept
    pub children: Vec<Option<NodeKey>>,

    /// Every node this one is attached to
    pub parents: Vec<NodeKey>,
}

impl Node {
    /// Create a node with an identity transform
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            record_index: 0,
            name: name.into(),
            kind,
            transform: NiTransform::identity(),
            bounding_volume: None,
            extra_data: Vec::new(),
            controllers: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Create a geometry node
    pub fn geometry(name: impl Into<String>, geometry: Geometry) -> Self {
        Self::new(name, NodeKind::Geometry(geometry))
    }

    /// Builder pattern: Set the local transform
    pub fn with_transform(mut self, transform: NiTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder pattern: Set the bounding volume
    pub fn with_bounding_volume(mut self, volume: BoundingVolume) -> Self {
        self.bounding_volume = Some(volume);
        self
    }

    /// Builder pattern: Append an extra data record
    pub fn with_extra_data(mut self, extra: ExtraData) -> Self {
        self.extra_data.push(extra);
        self
    }

    /// Builder pattern: Append a controller
    pub fn with_controller(mut self, controller: Controller) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Index of the record in its file, assigned on insertion
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    /// Geometry payload, if this is a geometry node
    pub fn as_geometry(&self) -> Option<&Geometry> {
        match &self.kind {
            NodeKind::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }

    /// Whether an active controller re-poses this node at runtime
    pub fn has_transform_animation(&self) -> bool {
        self.controllers.iter().any(Controller::animates_transform)
    }
}
