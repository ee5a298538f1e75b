//! Extra data records

use bitflags::bitflags;

bitflags! {
    /// Flags stored in a `BSX` integer extra data record
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BsxFlags: u32 {
        /// Model is animated
        const ANIMATED = 0x0001;
        /// Model has Havok collision
        const HAVOK = 0x0002;
        /// Ragdoll
        const RAGDOLL = 0x0004;
        /// Complex collision
        const COMPLEX = 0x0008;
        /// Addon nodes present
        const ADDON = 0x0010;
        /// Editor marker geometry present
        const EDITOR_MARKER = 0x0020;
        /// Dynamic rigid body
        const DYNAMIC = 0x0040;
        /// Articulated
        const ARTICULATED = 0x0080;
        /// Needs transform updates
        const NEEDS_TRANSFORM_UPDATES = 0x0100;
        /// External emittance
        const EXTERNAL_EMIT = 0x0200;
    }
}

/// One entry of a node's extra data chain
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraData {
    /// String payload (`NiStringExtraData`)
    String(String),
    /// Integer payload (`NiIntegerExtraData`)
    Integer(u32),
    /// `BSX` flags (`BSXFlags`)
    BsxFlags(BsxFlags),
    /// Animation text keys (`NiTextKeyExtraData`)
    TextKeys(Vec<(f32, String)>),
}

impl ExtraData {
    /// String payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// BSX flags payload, if any
    pub fn bsx_flags(&self) -> Option<BsxFlags> {
        match self {
            Self::BsxFlags(flags) => Some(*flags),
            _ => None,
        }
    }
}
