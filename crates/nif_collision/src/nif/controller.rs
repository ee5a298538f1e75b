//! Time controllers

use bitflags::bitflags;

bitflags! {
    /// Flags of a time controller
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControllerFlags: u16 {
        /// Time starts at application init instead of application time
        const APP_INIT = 0x0001;
        /// Reverse cycle
        const CYCLE_REVERSE = 0x0002;
        /// Clamp cycle
        const CYCLE_CLAMP = 0x0004;
        /// Controller is running
        const ACTIVE = 0x0008;
        /// Play backwards
        const PLAY_BACKWARDS = 0x0010;
        /// Driven by a controller manager
        const MANAGER_CONTROLLED = 0x0020;
    }
}

/// Record type of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerKind {
    /// `NiKeyframeController`
    Keyframe,
    /// `NiPathController`
    Path,
    /// `NiRollController`
    Roll,
    /// `NiVisController`
    Visibility,
    /// `NiAlphaController`
    Alpha,
    /// `NiUVController`
    UvAnimation,
    /// `NiGeomMorpherController`
    GeomMorpher,
    /// Particle system controller
    Particle,
    /// Anything else
    Other,
}

impl ControllerKind {
    /// Whether this kind moves the node it is attached to
    pub fn animates_transform(self) -> bool {
        matches!(self, Self::Keyframe | Self::Path | Self::Roll)
    }
}

/// One entry of a node's controller chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controller {
    /// Record type
    pub kind: ControllerKind,
    /// Flags
    pub flags: ControllerFlags,
}

impl Controller {
    /// Create a controller
    pub fn new(kind: ControllerKind, flags: ControllerFlags) -> Self {
        Self { kind, flags }
    }

    /// Whether the controller is running
    pub fn is_active(&self) -> bool {
        self.flags.contains(ControllerFlags::ACTIVE)
    }

    /// Whether the controller is running and moves its node
    pub fn animates_transform(&self) -> bool {
        self.is_active() && self.kind.animates_transform()
    }
}
