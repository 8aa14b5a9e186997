// offscreen-fbo/src/fbo.rs
//
//! A render context provider that draws into a single-sampled framebuffer object.

use crate::context::ContextAttributes;
use crate::driver::GlDriver;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::gl;
use crate::provider::{self, RenderContextProvider};
use crate::surface::{PixelSurface, PresentTarget};

use euclid::default::Size2D;

/// Owns one framebuffer object, with a color renderbuffer and depth/stencil renderbuffers sized
/// to the viewport, plus a CPU-side surface that frames are read back into.
pub struct FboRenderContextProvider<D>
where
    D: GlDriver,
{
    attributes: ContextAttributes,
    framebuffer: Option<Framebuffer<D>>,
    pixel_surface: Option<PixelSurface>,
    size: Size2D<i32>,
    bit_depth: u32,
}

impl<D> Default for FboRenderContextProvider<D>
where
    D: GlDriver,
{
    fn default() -> FboRenderContextProvider<D> {
        FboRenderContextProvider::new(ContextAttributes::default())
    }
}

impl<D> FboRenderContextProvider<D>
where
    D: GlDriver,
{
    pub fn new(attributes: ContextAttributes) -> FboRenderContextProvider<D> {
        FboRenderContextProvider {
            attributes,
            framebuffer: None,
            pixel_surface: None,
            size: Size2D::zero(),
            bit_depth: 0,
        }
    }

    #[inline]
    pub fn attributes(&self) -> &ContextAttributes {
        &self.attributes
    }

    fn destroy_framebuffer(&mut self, gl: &D) {
        if let Some(mut framebuffer) = self.framebuffer.take() {
            framebuffer.destroy(gl);
        }
    }
}

impl<D> RenderContextProvider for FboRenderContextProvider<D>
where
    D: GlDriver,
{
    type Driver = D;

    fn create(&mut self, gl: &D, size: Size2D<i32>, bit_depth: u32) -> Result<(), Error> {
        if self.framebuffer.is_some() {
            return Err(Error::AlreadyCreated);
        }
        provider::validate_size(&size)?;

        self.framebuffer = Some(Framebuffer::new(gl, &size, &self.attributes, 0)?);
        self.pixel_surface = Some(PixelSurface::new(size, bit_depth));
        self.size = size;
        self.bit_depth = bit_depth;
        debug!("created FBO render context {}x{}@{}", size.width, size.height, bit_depth);
        Ok(())
    }

    fn set_dimensions(&mut self, gl: &D, size: Size2D<i32>) -> Result<(), Error> {
        if self.framebuffer.is_none() {
            return Err(Error::NotCreated);
        }
        provider::validate_size(&size)?;

        debug!(
            "resizing FBO render context {}x{} -> {}x{}",
            self.size.width, self.size.height, size.width, size.height
        );
        if let Some(ref mut pixel_surface) = self.pixel_surface {
            pixel_surface.resize(size, self.bit_depth);
        }

        self.destroy_framebuffer(gl);
        match Framebuffer::new(gl, &size, &self.attributes, 0) {
            Ok(framebuffer) => {
                self.framebuffer = Some(framebuffer);
                self.size = size;
                Ok(())
            }
            Err(err) => {
                self.pixel_surface = None;
                self.size = Size2D::zero();
                Err(err)
            }
        }
    }

    fn blit(&mut self, gl: &D, target: &mut dyn PresentTarget) -> Result<(), Error> {
        let (framebuffer, pixel_surface) = match (&self.framebuffer, &mut self.pixel_surface) {
            (Some(framebuffer), Some(pixel_surface)) => (framebuffer, pixel_surface),
            _ => return Ok(()),
        };

        let size = framebuffer.size();
        unsafe {
            gl.bind_framebuffer(gl::FRAMEBUFFER, framebuffer.framebuffer_object());
            gl.read_buffer(gl::COLOR_ATTACHMENT0);
            gl.read_pixels(
                0,
                0,
                size.width,
                size.height,
                gl::BGRA,
                gl::UNSIGNED_BYTE,
                pixel_surface.data_mut(),
            );
        }

        target.present(pixel_surface)
    }

    fn destroy(&mut self, gl: &D) {
        if self.framebuffer.is_none() && self.pixel_surface.is_none() {
            return;
        }
        self.destroy_framebuffer(gl);
        self.pixel_surface = None;
        self.size = Size2D::zero();
        debug!("destroyed FBO render context");
    }

    #[inline]
    fn is_created(&self) -> bool {
        self.framebuffer.is_some()
    }

    #[inline]
    fn size(&self) -> Size2D<i32> {
        self.size
    }

    #[inline]
    fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    #[inline]
    fn framebuffer(&self) -> Option<D::Framebuffer> {
        self.framebuffer
            .as_ref()
            .and_then(|framebuffer| framebuffer.framebuffer_object())
    }

    #[inline]
    fn pixel_surface(&self) -> Option<&PixelSurface> {
        self.pixel_surface.as_ref()
    }
}
