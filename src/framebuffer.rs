// offscreen-fbo/src/framebuffer.rs
//
//! A framebuffer object with a color renderbuffer and optional depth/stencil renderbuffers.

use crate::context::ContextAttributes;
use crate::driver::GlDriver;
use crate::error::{Error, FramebufferStatus};
use crate::gl;
use crate::renderbuffers::{self, Renderbuffers};

use euclid::default::Size2D;
use std::thread;

pub(crate) struct Framebuffer<D>
where
    D: GlDriver,
{
    framebuffer_object: Option<D::Framebuffer>,
    color_renderbuffer: Option<D::Renderbuffer>,
    renderbuffers: Renderbuffers<D>,
    size: Size2D<i32>,
    samples: i32,
}

impl<D> Drop for Framebuffer<D>
where
    D: GlDriver,
{
    fn drop(&mut self) {
        if (self.framebuffer_object.is_some() || self.color_renderbuffer.is_some())
            && !thread::panicking()
        {
            panic!("Should have destroyed the framebuffer with `destroy()`!")
        }
    }
}

impl<D> Framebuffer<D>
where
    D: GlDriver,
{
    /// Builds and validates a framebuffer. On success it is left bound to `GL_FRAMEBUFFER`.
    ///
    /// If any step fails, everything allocated so far is released before the error is returned.
    pub(crate) fn new(
        gl: &D,
        size: &Size2D<i32>,
        attributes: &ContextAttributes,
        samples: i32,
    ) -> Result<Framebuffer<D>, Error> {
        debug!(
            "creating framebuffer {}x{} samples={} flags={:?}",
            size.width, size.height, samples, attributes.flags
        );

        let framebuffer_object = unsafe {
            let framebuffer_object = gl
                .create_framebuffer()
                .map_err(Error::ObjectCreationFailed)?;
            gl.bind_framebuffer(gl::FRAMEBUFFER, Some(framebuffer_object));
            framebuffer_object
        };

        let mut framebuffer = Framebuffer {
            framebuffer_object: Some(framebuffer_object),
            color_renderbuffer: None,
            renderbuffers: Renderbuffers::IndividualDepthStencil {
                depth: None,
                stencil: None,
            },
            size: *size,
            samples,
        };

        if let Err(err) = framebuffer.attach(gl, attributes) {
            framebuffer.destroy(gl);
            return Err(err);
        }

        Ok(framebuffer)
    }

    fn attach(&mut self, gl: &D, attributes: &ContextAttributes) -> Result<(), Error> {
        let color_renderbuffer =
            renderbuffers::create_renderbuffer(gl, gl::RGBA8, &self.size, self.samples)?;
        self.color_renderbuffer = Some(color_renderbuffer);
        self.renderbuffers = Renderbuffers::new(gl, &self.size, attributes, self.samples)?;

        unsafe {
            gl.framebuffer_renderbuffer(
                gl::FRAMEBUFFER,
                gl::COLOR_ATTACHMENT0,
                gl::RENDERBUFFER,
                self.color_renderbuffer,
            );
            self.renderbuffers.bind_to_current_framebuffer(gl);

            FramebufferStatus::check(gl.check_framebuffer_status(gl::FRAMEBUFFER))
        }
    }

    #[inline]
    pub(crate) fn framebuffer_object(&self) -> Option<D::Framebuffer> {
        self.framebuffer_object
    }

    #[inline]
    pub(crate) fn size(&self) -> Size2D<i32> {
        self.size
    }

    /// Releases the renderbuffers, then the framebuffer object.
    pub(crate) fn destroy(&mut self, gl: &D) {
        self.renderbuffers.destroy(gl);
        unsafe {
            if let Some(color_renderbuffer) = self.color_renderbuffer.take() {
                gl.delete_renderbuffer(color_renderbuffer);
            }
            if let Some(framebuffer_object) = self.framebuffer_object.take() {
                gl.bind_framebuffer(gl::FRAMEBUFFER, None);
                gl.delete_framebuffer(framebuffer_object);
            }
        }
    }
}
