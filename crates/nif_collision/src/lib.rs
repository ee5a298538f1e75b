//! # NIF Collision
//!
//! Builds rigid-body collision shapes from parsed NIF scene graphs.
//!
//! ## Features
//!
//! - **Scene Graph Traversal**: transform accumulation over shared subtrees
//! - **Triangle Extraction**: tri-shapes and tri-strips, degenerate data skipped
//! - **Compound Assembly**: static geometry baked to model space, animated parts
//!   placed individually and indexed by node record
//! - **Special Nodes**: bounding box overrides, avoid nodes, editor markers,
//!   camera-only and no-collision markers, explicit root collision nodes
//!
//! ## Quick Start
//!
//! ```rust
//! use nif_collision::prelude::*;
//!
//! fn main() -> Result<(), NifError> {
//!     let mut file = NifFile::new("meshes/crate.nif");
//!     let root = file.add_node(Node::new("Scene Root", NodeKind::Node));
//!     let shape = file.add_node(Node::geometry(
//!         "Tri Crate",
//!         Geometry::tri_shape(
//!             vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)],
//!             vec![0, 1, 2],
//!         ),
//!     ));
//!     file.attach_child(root, shape)?;
//!     file.add_root(root)?;
//!
//!     let asset = NifCollisionLoader::default().load(&file);
//!     assert_eq!(asset.collision_shape.map(|shape| shape.num_triangles()), Some(1));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod nif;
pub mod physics;
pub mod assets;

/// Common imports for loader users
pub mod prelude {
    pub use crate::{
        assets::{CollisionAsset, CollisionBox, NifCollisionLoader, VisualCollisionType},
        core::config::{CollisionLoaderConfig, Config, ConfigError, StaticMeshMode},
        foundation::math::{Isometry, Mat3, Transform, Vec3},
        nif::{
            BoundingVolume, BsxFlags, Controller, ControllerFlags, ControllerKind, ExtraData, Geometry,
            GeometryData, NifError, NifFile, NifVersion, Node, NodeKey, NodeKind,
        },
        physics::collision::{CollisionShape, CompoundShape, Triangle},
    };
}
