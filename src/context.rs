// offscreen-fbo/src/context.rs
//
//! Attributes that control which buffers a render context allocates.

use bitflags::bitflags;

/// The number of samples per pixel the multisample provider asks for by default.
pub const DEFAULT_SAMPLES: i32 = 4;

bitflags! {
    /// Which ancillary buffers accompany the color buffer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ContextAttributeFlags: u8 {
        const DEPTH   = 0x01;
        const STENCIL = 0x02;
    }
}

/// Describes the framebuffers a provider builds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextAttributes {
    pub flags: ContextAttributeFlags,
    /// Samples per pixel for multisampled framebuffers. Ignored by single-sample providers.
    pub samples: i32,
}

impl Default for ContextAttributes {
    fn default() -> ContextAttributes {
        ContextAttributes {
            flags: ContextAttributeFlags::DEPTH | ContextAttributeFlags::STENCIL,
            samples: DEFAULT_SAMPLES,
        }
    }
}
