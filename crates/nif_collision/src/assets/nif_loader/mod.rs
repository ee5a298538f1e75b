//! NIF to collision shape conversion
//!
//! [`NifCollisionLoader::load`] walks every root of a parsed [`NifFile`] and
//! builds a [`CollisionAsset`]:
//!
//! - a node named "Bounding Box" with valid box bounds replaces all mesh
//!   collision with that box
//! - geometry under an `AvoidNode` goes to the avoidance shape
//! - geometry under an active transform controller, or in a file whose name
//!   carries the animated prefix, becomes an individually placed child that
//!   the animation system can re-pose
//! - everything else is static and baked into model space
//!
//! The loader never fails. Malformed geometry simply contributes nothing.

mod bounding_box;
mod geometry;
mod markers;


use std::collections::BTreeMap;

use crate::assets::collision_asset::{CollisionAsset, VisualCollisionType};
use crate::core::config::{CollisionLoaderConfig, StaticMeshMode};
use crate::foundation::logging::{debug, info};
use crate::foundation::math::{Isometry, Transform, Vec3};
use crate::nif::{Geometry, NifFile, Node, NodeKey, NodeKind};
use crate::physics::collision::{CollisionShape, CompoundShape, ScaledTriangleMeshShape, TriangleMeshShape};

use markers::RootMarkers;

/// Converts parsed NIF files into collision assets
#[derive(Debug, Clone, Default)]
pub struct NifCollisionLoader {
    config: CollisionLoaderConfig,
}

impl NifCollisionLoader {
    /// Create a loader with the given settings
    pub fn new(config: CollisionLoaderConfig) -> Self {
        Self { config }
    }

    /// Loader settings
    pub fn config(&self) -> &CollisionLoaderConfig {
        &self.config
    }

    /// Build the collision asset of a file
    pub fn load(&self, file: &NifFile) -> CollisionAsset {
        let mut asset = CollisionAsset {
            file_name: file.file_name().to_string(),
            file_hash: file.hash().to_string(),
            ..Default::default()
        };

        let mut roots = Vec::with_capacity(file.roots().len());
        for (index, root) in file.roots().iter().enumerate() {
            match root.and_then(|key| file.node(key)) {
                Some(node) => roots.push(node),
                None => debug!("{}: root {} is null, skipping", file.file_name(), index),
            }
        }

        if let Some(collision_box) = bounding_box::find_collision_box(file, &roots) {
            info!("{}: using bounding box override instead of mesh collision", file.file_name());
            asset.collision_box = collision_box;
            asset.visual_collision_type = roots.iter().fold(VisualCollisionType::None, |current, root| {
                RootMarkers::scan(root, file.version()).classify(file, root).unwrap_or(current)
            });
            return asset;
        }

        let mut builder = ShapeBuilder::new(file, &self.config);
        for root in roots {
            builder.add_root(root);
        }
        builder.finish(asset)
    }
}

/// Traversal state carried down one path of the scene graph
#[derive(Debug, Clone, Copy)]
struct PathState {
    transform: Transform,
    animated: bool,
    avoid: bool,
    /// Outside an explicit collision node, so visible geometry is the collision
    autogenerated: bool,
    has_markers: bool,
    /// Empty collision node of the current root
    skip: Option<NodeKey>,
}

impl PathState {
    /// State below `node`
    fn enter(&self, node: &Node) -> Self {
        Self {
            transform: self.transform.combine(&node.transform),
            animated: self.animated || node.has_transform_animation(),
            avoid: self.avoid || matches!(node.kind, NodeKind::AvoidNode),
            ..*self
        }
    }
}

/// One output compound plus the static geometry waiting to be merged into it
#[derive(Debug, Default)]
struct CompoundBuilder {
    compound: CompoundShape,
    pending_static: TriangleMeshShape,
}

impl CompoundBuilder {
    fn add_static(&mut self, mesh: TriangleMeshShape, mode: StaticMeshMode) {
        match mode {
            StaticMeshMode::PerGeometry => {
                self.compound.add_child_shape(Isometry::identity(), unscaled(mesh));
            }
            StaticMeshMode::MergedPerRoot => self.pending_static.append(mesh),
        }
    }

    fn flush_static(&mut self) {
        let mesh = std::mem::take(&mut self.pending_static);
        if !mesh.is_empty() {
            self.compound.add_child_shape(Isometry::identity(), unscaled(mesh));
        }
    }

    fn into_shape(self) -> Option<CollisionShape> {
        if self.compound.is_empty() {
            None
        } else {
            Some(CollisionShape::Compound(self.compound))
        }
    }
}

fn unscaled(mesh: TriangleMeshShape) -> CollisionShape {
    CollisionShape::ScaledTriangleMesh(ScaledTriangleMeshShape::new(mesh, Vec3::repeat(1.0)))
}

/// Per-call state of one conversion
struct ShapeBuilder<'a> {
    file: &'a NifFile,
    config: &'a CollisionLoaderConfig,
    animated_file: bool,
    collision: CompoundBuilder,
    avoid: CompoundBuilder,
    animated_shapes: BTreeMap<usize, usize>,
    visual_collision_type: VisualCollisionType,
}

impl<'a> ShapeBuilder<'a> {
    fn new(file: &'a NifFile, config: &'a CollisionLoaderConfig) -> Self {
        let animated_file = config.is_animated_file(file.file_name());
        if animated_file {
            debug!("{}: animated file, all geometry is placed individually", file.file_name());
        }
        Self {
            file,
            config,
            animated_file,
            collision: CompoundBuilder::default(),
            avoid: CompoundBuilder::default(),
            animated_shapes: BTreeMap::new(),
            visual_collision_type: VisualCollisionType::None,
        }
    }

    fn add_root(&mut self, root: &Node) {
        let markers = RootMarkers::scan(root, self.file.version());
        let mut state = PathState {
            transform: Transform::identity(),
            animated: self.animated_file,
            avoid: false,
            autogenerated: true,
            has_markers: markers.has_markers,
            skip: None,
        };

        match markers::find_root_collision_node(self.file, root) {
            Some((_, collision_node)) if markers::has_usable_children(self.file, collision_node) => {
                debug!("{}: using explicit collision node of root '{}'", self.file.file_name(), root.name);
                state.autogenerated = false;
                let below_root = state.enter(root);
                self.handle_node(collision_node, below_root);
            }
            Some((collision_key, _)) => {
                // An empty collision node keeps the visible geometry solid for the camera only
                state.skip = Some(collision_key);
                self.handle_node(root, state);
            }
            None => self.handle_node(root, state),
        }

        if let Some(kind) = markers.classify(self.file, root) {
            self.visual_collision_type = kind;
        }
        if markers.has_markers {
            debug!("{}: root '{}' contains editor markers", self.file.file_name(), root.name);
        }
        self.collision.flush_static();
        self.avoid.flush_static();
    }

    fn handle_node(&mut self, node: &Node, parent: PathState) {
        match node.kind {
            NodeKind::CollisionSwitch { collision_active: false } => {
                debug!("Collision switch '{}' is off, skipping its subtree", node.name);
                return;
            }
            NodeKind::RootCollisionNode if parent.autogenerated => {
                info!(
                    "{}: RootCollisionNode '{}' is not attached to the root node, treating it as a common node",
                    self.file.file_name(),
                    node.name
                );
            }
            _ => {}
        }

        let state = parent.enter(node);
        if let NodeKind::Geometry(geometry) = &node.kind {
            self.handle_geometry(node, geometry, &state);
            return;
        }

        for &child_key in node.children.iter().flatten() {
            if state.skip == Some(child_key) {
                continue;
            }
            if let Some(child) = self.file.node(child_key) {
                self.handle_node(child, state);
            }
        }
    }

    fn handle_geometry(&mut self, node: &Node, geometry: &Geometry, state: &PathState) {
        if markers::is_editor_marker(node) {
            debug!("Skipping editor marker '{}'", node.name);
            return;
        }
        if state.autogenerated && state.has_markers {
            return;
        }
        let Some(data) = &geometry.data else {
            return;
        };

        let local = geometry::extract_triangles(data, &node.name);
        if local.is_empty() {
            return;
        }

        let animated = state.animated && !geometry.is_skinned();
        let target = if state.avoid { &mut self.avoid } else { &mut self.collision };

        if animated {
            let mesh = TriangleMeshShape::from_triangles(local);
            let shape = ScaledTriangleMeshShape::new(mesh, state.transform.scale_vector());
            let index = target
                .compound
                .add_child_shape(state.transform.isometry(), CollisionShape::ScaledTriangleMesh(shape));
            if !state.avoid {
                self.animated_shapes.entry(node.record_index()).or_insert(index);
            }
        } else {
            let transform = state.transform;
            let baked = geometry::transform_triangles(&local, |v| transform.transform_point(v));
            target.add_static(TriangleMeshShape::from_triangles(baked), self.config.static_meshes);
        }
    }

    fn finish(self, mut asset: CollisionAsset) -> CollisionAsset {
        asset.collision_shape = self.collision.into_shape();
        asset.avoid_collision_shape = self.avoid.into_shape();
        asset.animated_shapes = self.animated_shapes;
        asset.visual_collision_type = self.visual_collision_type;
        debug!(
            "{}: {} collision triangles, {} avoidance triangles, {} animated parts",
            asset.file_name,
            asset.collision_shape.as_ref().map_or(0, CollisionShape::num_triangles),
            asset.avoid_collision_shape.as_ref().map_or(0, CollisionShape::num_triangles),
            asset.animated_shapes.len()
        );
        asset
    }
}
