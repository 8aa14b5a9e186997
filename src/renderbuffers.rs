// offscreen-fbo/src/renderbuffers.rs
//
//! Depth and stencil renderbuffers that accompany a framebuffer's color attachment.

use crate::context::{ContextAttributeFlags, ContextAttributes};
use crate::driver::GlDriver;
use crate::error::Error;
use crate::gl;

use euclid::default::Size2D;
use std::thread;

pub(crate) enum Renderbuffers<D>
where
    D: GlDriver,
{
    IndividualDepthStencil {
        depth: Option<D::Renderbuffer>,
        stencil: Option<D::Renderbuffer>,
    },
    CombinedDepthStencil(Option<D::Renderbuffer>),
}

impl<D> Drop for Renderbuffers<D>
where
    D: GlDriver,
{
    fn drop(&mut self) {
        match *self {
            Renderbuffers::IndividualDepthStencil {
                depth: None,
                stencil: None,
            }
            | Renderbuffers::CombinedDepthStencil(None) => {}
            _ => {
                if !thread::panicking() {
                    panic!("Should have destroyed the FBO renderbuffers with `destroy()`!")
                }
            }
        }
    }
}

/// Creates a renderbuffer and allocates its storage. A sample count of zero means a
/// single-sampled renderbuffer.
pub(crate) fn create_renderbuffer<D>(
    gl: &D,
    format: u32,
    size: &Size2D<i32>,
    samples: i32,
) -> Result<D::Renderbuffer, Error>
where
    D: GlDriver,
{
    unsafe {
        let renderbuffer = gl
            .create_renderbuffer()
            .map_err(Error::ObjectCreationFailed)?;
        gl.bind_renderbuffer(gl::RENDERBUFFER, Some(renderbuffer));
        if samples > 0 {
            gl.renderbuffer_storage_multisample(
                gl::RENDERBUFFER,
                samples,
                format,
                size.width,
                size.height,
            );
        } else {
            gl.renderbuffer_storage(gl::RENDERBUFFER, format, size.width, size.height);
        }
        gl.bind_renderbuffer(gl::RENDERBUFFER, None);
        Ok(renderbuffer)
    }
}

impl<D> Renderbuffers<D>
where
    D: GlDriver,
{
    pub(crate) fn new(
        gl: &D,
        size: &Size2D<i32>,
        attributes: &ContextAttributes,
        samples: i32,
    ) -> Result<Renderbuffers<D>, Error> {
        if attributes
            .flags
            .contains(ContextAttributeFlags::DEPTH | ContextAttributeFlags::STENCIL)
        {
            let renderbuffer = create_renderbuffer(gl, gl::DEPTH24_STENCIL8, size, samples)?;
            return Ok(Renderbuffers::CombinedDepthStencil(Some(renderbuffer)));
        }

        let depth = if attributes.flags.contains(ContextAttributeFlags::DEPTH) {
            Some(create_renderbuffer(gl, gl::DEPTH_COMPONENT24, size, samples)?)
        } else {
            None
        };
        let stencil = if attributes.flags.contains(ContextAttributeFlags::STENCIL) {
            match create_renderbuffer(gl, gl::STENCIL_INDEX8, size, samples) {
                Ok(renderbuffer) => Some(renderbuffer),
                Err(err) => {
                    if let Some(depth) = depth {
                        unsafe { gl.delete_renderbuffer(depth) };
                    }
                    return Err(err);
                }
            }
        } else {
            None
        };

        Ok(Renderbuffers::IndividualDepthStencil { depth, stencil })
    }

    pub(crate) fn bind_to_current_framebuffer(&self, gl: &D) {
        unsafe {
            match *self {
                Renderbuffers::CombinedDepthStencil(renderbuffer) => {
                    if renderbuffer.is_some() {
                        gl.framebuffer_renderbuffer(
                            gl::FRAMEBUFFER,
                            gl::DEPTH_STENCIL_ATTACHMENT,
                            gl::RENDERBUFFER,
                            renderbuffer,
                        );
                    }
                }
                Renderbuffers::IndividualDepthStencil {
                    depth: depth_renderbuffer,
                    stencil: stencil_renderbuffer,
                } => {
                    if depth_renderbuffer.is_some() {
                        gl.framebuffer_renderbuffer(
                            gl::FRAMEBUFFER,
                            gl::DEPTH_ATTACHMENT,
                            gl::RENDERBUFFER,
                            depth_renderbuffer,
                        );
                    }
                    if stencil_renderbuffer.is_some() {
                        gl.framebuffer_renderbuffer(
                            gl::FRAMEBUFFER,
                            gl::STENCIL_ATTACHMENT,
                            gl::RENDERBUFFER,
                            stencil_renderbuffer,
                        );
                    }
                }
            }
        }
    }

    pub(crate) fn destroy(&mut self, gl: &D) {
        unsafe {
            gl.bind_renderbuffer(gl::RENDERBUFFER, None);

            match *self {
                Renderbuffers::CombinedDepthStencil(ref mut renderbuffer) => {
                    if let Some(renderbuffer) = renderbuffer.take() {
                        gl.delete_renderbuffer(renderbuffer);
                    }
                }
                Renderbuffers::IndividualDepthStencil {
                    depth: ref mut depth_renderbuffer,
                    stencil: ref mut stencil_renderbuffer,
                } => {
                    if let Some(stencil_renderbuffer) = stencil_renderbuffer.take() {
                        gl.delete_renderbuffer(stencil_renderbuffer);
                    }
                    if let Some(depth_renderbuffer) = depth_renderbuffer.take() {
                        gl.delete_renderbuffer(depth_renderbuffer);
                    }
                }
            }
        }
    }
}
