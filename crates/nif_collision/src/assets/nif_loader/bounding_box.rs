//! Search for an author supplied collision box

use crate::assets::collision_asset::CollisionBox;
use crate::foundation::logging::{debug, warn};
use crate::nif::{BoundingVolume, NifFile, Node};

/// Name of nodes whose box bounds replace the mesh collision
pub(super) const BOUNDING_BOX_NAME: &str = "Bounding Box";

/// Find the box override among all roots
///
/// Within one root the deepest candidate wins, so children are searched
/// before their parent. Boxes with a negative extent are rejected.
pub(super) fn find_collision_box(file: &NifFile, roots: &[&Node]) -> Option<CollisionBox> {
    roots.iter().find_map(|root| search(file, root))
}

fn search(file: &NifFile, node: &Node) -> Option<CollisionBox> {
    let from_children = node
        .children
        .iter()
        .flatten()
        .filter_map(|&key| file.node(key))
        .find_map(|child| search(file, child));
    from_children.or_else(|| candidate(node))
}

fn candidate(node: &Node) -> Option<CollisionBox> {
    if node.name != BOUNDING_BOX_NAME {
        return None;
    }
    match &node.bounding_volume {
        Some(BoundingVolume::Box { center, extents, .. }) => {
            if extents.iter().any(|&extent| extent < 0.0) {
                warn!(
                    "Bounding box node has invalid extents ({}, {}, {}), ignoring it",
                    extents.x, extents.y, extents.z
                );
                return None;
            }
            debug!("Using bounding box override with extents {:?} at {:?}", extents, center);
            Some(CollisionBox::new(*extents, *center))
        }
        Some(other) => {
            warn!("Unsupported bounding volume type {} on bounding box node", other.type_name());
            None
        }
        None => None,
    }
}
