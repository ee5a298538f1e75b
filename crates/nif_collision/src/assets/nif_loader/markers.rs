//! Root level classification from extra data

use crate::assets::collision_asset::VisualCollisionType;
use crate::nif::{BsxFlags, ExtraData, NifFile, NifVersion, Node, NodeKey, NodeKind};

/// Marker string that stops collision from being generated from visible geometry
const MARKER_STRING: &str = "MRK";

/// Name fragment of editor-only geometry
pub(super) const EDITOR_MARKER_NAME: &str = "EditorMarker";

/// What a root's extra data says about its collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct RootMarkers {
    /// Classification from an `NC` string
    pub visual_collision_type: Option<VisualCollisionType>,
    /// Visible geometry must not be turned into collision
    pub has_markers: bool,
}

impl RootMarkers {
    /// Read the root's extra data chain
    ///
    /// Strings count in every file version, the `BSX` flag only in newer ones.
    pub fn scan(root: &Node, version: NifVersion) -> Self {
        let mut markers = Self::default();
        for extra in &root.extra_data {
            match extra {
                ExtraData::String(value) => {
                    if let Some(kind) = no_collision_type(value) {
                        markers.visual_collision_type = Some(kind);
                    } else if value == MARKER_STRING {
                        markers.has_markers = true;
                    }
                }
                ExtraData::BsxFlags(flags)
                    if version >= NifVersion::BSX_EDITOR_MARKERS && flags.contains(BsxFlags::EDITOR_MARKER) =>
                {
                    markers.has_markers = true;
                }
                _ => {}
            }
        }
        markers
    }

    /// Visual collision classification of the root
    ///
    /// An `NC` string wins over the camera default of an empty root collision node.
    pub fn classify(&self, file: &NifFile, root: &Node) -> Option<VisualCollisionType> {
        self.visual_collision_type.or_else(|| {
            find_root_collision_node(file, root)
                .filter(|(_, collision_node)| !has_usable_children(file, collision_node))
                .map(|_| VisualCollisionType::Camera)
        })
    }
}

/// Classification of an `NC` string, `None` for other strings
///
/// The prefix is matched case-insensitively but only an uppercase third `C`
/// means camera-only.
fn no_collision_type(value: &str) -> Option<VisualCollisionType> {
    let bytes = value.as_bytes();
    if bytes.len() < 2 || !bytes[..2].eq_ignore_ascii_case(b"NC") {
        return None;
    }
    if bytes.get(2) == Some(&b'C') {
        Some(VisualCollisionType::Camera)
    } else {
        Some(VisualCollisionType::Default)
    }
}

/// Whether a geometry node is an editor-only helper
pub(super) fn is_editor_marker(node: &Node) -> bool {
    node.name.contains(EDITOR_MARKER_NAME)
}

/// The root's first `RootCollisionNode` child
pub(super) fn find_root_collision_node<'a>(file: &'a NifFile, root: &Node) -> Option<(NodeKey, &'a Node)> {
    root.children
        .iter()
        .flatten()
        .filter_map(|&key| file.node(key).map(|node| (key, node)))
        .find(|(_, node)| matches!(node.kind, NodeKind::RootCollisionNode))
}

/// Whether a node has at least one child that resolves
pub(super) fn has_usable_children(file: &NifFile, node: &Node) -> bool {
    node.children.iter().flatten().any(|&key| file.node(key).is_some())
}
