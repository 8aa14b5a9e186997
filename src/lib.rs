// offscreen-fbo/src/lib.rs
//
//! Off-screen OpenGL rendering through framebuffer objects.
//!
//! The render context providers allocate framebuffer objects sized to a viewport, validate
//! them, resolve multisampled rendering, and read finished frames back into CPU memory so they
//! can be presented by whatever owns the display. `VertexBuffer` wraps a single buffer object
//! and its attribute pointers.
//!
//! All GL calls go through `GlDriver`, which every `glow::HasContext` implements.

#[macro_use]
extern crate log;

pub(crate) use glow as gl;

pub mod driver;
pub use crate::driver::GlDriver;

pub mod error;
pub use crate::error::{Error, FramebufferStatus};

mod context;
pub use crate::context::{ContextAttributeFlags, ContextAttributes, DEFAULT_SAMPLES};

mod provider;
pub use crate::provider::RenderContextProvider;

mod fbo;
pub use crate::fbo::FboRenderContextProvider;

mod multisample;
pub use crate::multisample::MultisampleFboRenderContextProvider;

mod surface;
pub use crate::surface::{PixelSurface, PresentTarget, BYTES_PER_PIXEL};

mod vertex_buffer;
pub use crate::vertex_buffer::{AttributeUnits, VertexAttribute, VertexBuffer};

mod framebuffer;
mod renderbuffers;
