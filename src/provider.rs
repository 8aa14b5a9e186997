// offscreen-fbo/src/provider.rs
//
//! The lifecycle shared by all off-screen render context providers.
//!
//! A rendering loop calls `create()` once, draws into `framebuffer()`, calls `blit()` every frame
//! to present, calls `set_dimensions()` when the viewport changes, and finally `destroy()`.
//! Everything happens on the thread whose GL context is current.

use crate::driver::GlDriver;
use crate::error::Error;
use crate::gl;
use crate::surface::{PixelSurface, PresentTarget};

use euclid::default::Size2D;

/// An off-screen render target backed by framebuffer objects.
pub trait RenderContextProvider {
    type Driver: GlDriver;

    /// Allocates the framebuffers and the readback surface and validates completeness.
    fn create(&mut self, gl: &Self::Driver, size: Size2D<i32>, bit_depth: u32)
        -> Result<(), Error>;

    /// Recreates every attachment at a new size.
    fn set_dimensions(&mut self, gl: &Self::Driver, size: Size2D<i32>) -> Result<(), Error>;

    /// Reads the rendered frame back and hands it to `target`. Does nothing if the provider
    /// hasn't been created.
    fn blit(&mut self, gl: &Self::Driver, target: &mut dyn PresentTarget) -> Result<(), Error>;

    /// Releases all GL objects and the readback surface. Calling it twice is harmless.
    fn destroy(&mut self, gl: &Self::Driver);

    fn is_created(&self) -> bool;

    fn size(&self) -> Size2D<i32>;

    fn bit_depth(&self) -> u32;

    /// The framebuffer that draw calls should target.
    fn framebuffer(&self) -> Option<<Self::Driver as GlDriver>::Framebuffer>;

    /// The surface the last `blit()` read into.
    fn pixel_surface(&self) -> Option<&PixelSurface>;

    /// Binds `framebuffer()` to `GL_FRAMEBUFFER`.
    fn bind(&self, gl: &Self::Driver) -> Result<(), Error> {
        let framebuffer = self.framebuffer().ok_or(Error::NotCreated)?;
        unsafe {
            gl.bind_framebuffer(gl::FRAMEBUFFER, Some(framebuffer));
        }
        Ok(())
    }
}

pub(crate) fn validate_size(size: &Size2D<i32>) -> Result<(), Error> {
    if size.width <= 0 || size.height <= 0 {
        return Err(Error::InvalidDimensions(*size));
    }
    Ok(())
}
