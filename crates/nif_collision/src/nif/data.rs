//! Geometry records

use crate::foundation::math::Vec3;
use super::node::NodeKey;

/// Vertex and index data of a geometry node
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryData {
    /// Indexed triangle list
    TriShape {
        /// Vertex positions
        vertices: Vec<Vec3>,
        /// Flat list of vertex indices, three per triangle
        triangles: Vec<u16>,
    },
    /// Triangle strips
    TriStrips {
        /// Vertex positions
        vertices: Vec<Vec3>,
        /// Strips of vertex indices
        strips: Vec<Vec<u16>>,
    },
}

impl GeometryData {
    /// Vertex positions
    pub fn vertices(&self) -> &[Vec3] {
        match self {
            Self::TriShape { vertices, .. } | Self::TriStrips { vertices, .. } => vertices,
        }
    }
}

/// Skin binding of a geometry node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinInstance {
    /// Skeleton root
    pub root: Option<NodeKey>,
    /// Bones influencing the mesh
    pub bones: Vec<NodeKey>,
}

/// Payload of a geometry node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// Vertex data, absent when the link is null
    pub data: Option<GeometryData>,
    /// Skin binding
    pub skin: Option<SkinInstance>,
}

impl Geometry {
    /// Geometry backed by an indexed triangle list
    pub fn tri_shape(vertices: Vec<Vec3>, triangles: Vec<u16>) -> Self {
        Self {
            data: Some(GeometryData::TriShape { vertices, triangles }),
            skin: None,
        }
    }

    /// Geometry backed by triangle strips
    pub fn tri_strips(vertices: Vec<Vec3>, strips: Vec<Vec<u16>>) -> Self {
        Self {
            data: Some(GeometryData::TriStrips { vertices, strips }),
            skin: None,
        }
    }

    /// Builder pattern: Attach a skin
    pub fn with_skin(mut self, skin: SkinInstance) -> Self {
        self.skin = Some(skin);
        self
    }

    /// Whether the mesh is deformed by a skeleton
    pub fn is_skinned(&self) -> bool {
        self.skin.is_some()
    }
}
