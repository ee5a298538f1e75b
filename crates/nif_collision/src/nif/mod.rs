//! # NIF Record Model
//!
//! In-memory form of an already parsed NIF file. Nodes live in an arena owned
//! by [`NifFile`] and refer to each other through [`NodeKey`] handles, so a
//! node may be shared by several parents. Extra data and controller chains
//! are flattened into ordered vectors.

pub mod node;
pub mod data;
pub mod extra;
pub mod controller;
pub mod file;

pub use node::{BoundingVolume, NiTransform, Node, NodeKey, NodeKind};
pub use data::{Geometry, GeometryData, SkinInstance};
pub use extra::{BsxFlags, ExtraData};
pub use controller::{Controller, ControllerFlags, ControllerKind};
pub use file::{NifError, NifFile, NifVersion};
