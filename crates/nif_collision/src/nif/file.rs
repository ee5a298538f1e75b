//! Parsed NIF file

use std::fmt;

use slotmap::SlotMap;

use super::node::{Node, NodeKey};

/// Packed NIF format revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NifVersion(pub u32);

impl NifVersion {
    /// Morrowind era files
    pub const MORROWIND: Self = Self::new(4, 0, 0, 2);

    /// First revision whose `BSX` flags mark editor geometry
    pub const BSX_EDITOR_MARKERS: Self = Self::new(10, 0, 1, 0);

    /// Pack a dotted version
    pub const fn new(major: u8, minor: u8, patch: u8, revision: u8) -> Self {
        Self(((major as u32) << 24) | ((minor as u32) << 16) | ((patch as u32) << 8) | revision as u32)
    }
}

impl Default for NifVersion {
    fn default() -> Self {
        Self::MORROWIND
    }
}

impl fmt::Display for NifVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.0 >> 24,
            (self.0 >> 16) & 0xff,
            (self.0 >> 8) & 0xff,
            self.0 & 0xff
        )
    }
}

/// Errors raised while assembling a scene graph
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NifError {
    /// Key does not belong to this file
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeKey),

    /// Parent record cannot hold children
    #[error("Node '{name}' of type {kind} cannot have children")]
    CannotHaveChildren {
        /// Parent name
        name: String,
        /// Parent record type
        kind: &'static str,
    },
}

/// A parsed NIF file: node records plus the ordered root list
#[derive(Debug, Clone, Default)]
pub struct NifFile {
    file_name: String,
    hash: String,
    version: NifVersion,
    nodes: SlotMap<NodeKey, Node>,
    roots: Vec<Option<NodeKey>>,
    next_record: usize,
}

impl NifFile {
    /// Create an empty file
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Builder pattern: Set the content hash
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Builder pattern: Set the format revision
    pub fn with_version(mut self, version: NifVersion) -> Self {
        self.version = version;
        self
    }

    /// File name as resolved by the virtual file system
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Content hash
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Format revision
    pub fn version(&self) -> NifVersion {
        self.version
    }

    /// Insert a node record, assigning the next record index
    pub fn add_node(&mut self, mut node: Node) -> NodeKey {
        node.record_index = self.next_record;
        self.next_record += 1;
        node.children.clear();
        node.parents.clear();
        self.nodes.insert(node)
    }

    /// Append a root
    pub fn add_root(&mut self, key: NodeKey) -> Result<(), NifError> {
        if !self.nodes.contains_key(key) {
            return Err(NifError::UnknownNode(key));
        }
        self.roots.push(Some(key));
        Ok(())
    }

    /// Append a null root link
    pub fn add_null_root(&mut self) {
        self.roots.push(None);
    }

    /// Link `child` under `parent`, recording the back reference
    pub fn attach_child(&mut self, parent: NodeKey, child: NodeKey) -> Result<(), NifError> {
        if !self.nodes.contains_key(child) {
            return Err(NifError::UnknownNode(child));
        }
        self.children_of(parent)?.push(Some(child));
        if let Some(node) = self.nodes.get_mut(child) {
            node.parents.push(parent);
        }
        Ok(())
    }

    /// Append a null child link under `parent`
    pub fn attach_null_child(&mut self, parent: NodeKey) -> Result<(), NifError> {
        self.children_of(parent)?.push(None);
        Ok(())
    }

    fn children_of(&mut self, parent: NodeKey) -> Result<&mut Vec<Option<NodeKey>>, NifError> {
        let node = self.nodes.get_mut(parent).ok_or(NifError::UnknownNode(parent))?;
        if !node.kind.can_have_children() {
            return Err(NifError::CannotHaveChildren {
                name: node.name.clone(),
                kind: node.kind.type_name(),
            });
        }
        Ok(&mut node.children)
    }

    /// Look up a node
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Look up a node for modification
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Roots in file order, null links kept
    pub fn roots(&self) -> &[Option<NodeKey>] {
        &self.roots
    }

    /// Number of node records
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the file has no node records
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
