//! Collision asset loading
//!
//! Turns parsed NIF files into [`CollisionAsset`]s ready for the physics backend.

pub mod collision_asset;
pub mod nif_loader;

pub use collision_asset::{CollisionAsset, CollisionBox, VisualCollisionType};
pub use nif_loader::NifCollisionLoader;
