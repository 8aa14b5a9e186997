// offscreen-fbo/src/multisample.rs
//
//! A render context provider that draws into a multisampled framebuffer and resolves it into a
//! single-sampled one before presenting.

use crate::context::ContextAttributes;
use crate::driver::GlDriver;
use crate::error::Error;
use crate::fbo::FboRenderContextProvider;
use crate::framebuffer::Framebuffer;
use crate::gl;
use crate::provider::{self, RenderContextProvider};
use crate::surface::{PixelSurface, PresentTarget};

use euclid::default::Size2D;

pub struct MultisampleFboRenderContextProvider<D>
where
    D: GlDriver,
{
    resolve: FboRenderContextProvider<D>,
    multisample_framebuffer: Option<Framebuffer<D>>,
    samples: i32,
}

impl<D> Default for MultisampleFboRenderContextProvider<D>
where
    D: GlDriver,
{
    fn default() -> MultisampleFboRenderContextProvider<D> {
        MultisampleFboRenderContextProvider::new(ContextAttributes::default())
    }
}

impl<D> MultisampleFboRenderContextProvider<D>
where
    D: GlDriver,
{
    pub fn new(attributes: ContextAttributes) -> MultisampleFboRenderContextProvider<D> {
        MultisampleFboRenderContextProvider {
            resolve: FboRenderContextProvider::new(attributes),
            multisample_framebuffer: None,
            samples: 0,
        }
    }

    #[inline]
    pub fn attributes(&self) -> &ContextAttributes {
        self.resolve.attributes()
    }

    /// The sample count actually in use, after clamping to the driver's limit. Zero until
    /// created.
    #[inline]
    pub fn samples(&self) -> i32 {
        self.samples
    }

    /// The single-sampled framebuffer that frames are resolved into.
    #[inline]
    pub fn resolve_framebuffer(&self) -> Option<D::Framebuffer> {
        self.resolve.framebuffer()
    }

    fn supported_samples(&self, gl: &D) -> Result<i32, Error> {
        let requested = self.attributes().samples;
        let max_samples = unsafe { gl.get_parameter_i32(gl::MAX_SAMPLES) };
        let samples = if requested > max_samples {
            warn!(
                "{} samples requested but the driver supports at most {}",
                requested, max_samples
            );
            max_samples
        } else {
            requested
        };
        if samples <= 0 {
            return Err(Error::UnsupportedSamples);
        }
        Ok(samples)
    }

    fn create_multisample_framebuffer(&mut self, gl: &D, size: &Size2D<i32>) -> Result<(), Error> {
        let attributes = *self.attributes();
        match Framebuffer::new(gl, size, &attributes, self.samples) {
            Ok(framebuffer) => {
                self.multisample_framebuffer = Some(framebuffer);
                Ok(())
            }
            Err(err) => {
                self.resolve.destroy(gl);
                self.samples = 0;
                Err(err)
            }
        }
    }

    fn destroy_multisample_framebuffer(&mut self, gl: &D) {
        if let Some(mut framebuffer) = self.multisample_framebuffer.take() {
            framebuffer.destroy(gl);
        }
    }
}

impl<D> RenderContextProvider for MultisampleFboRenderContextProvider<D>
where
    D: GlDriver,
{
    type Driver = D;

    fn create(&mut self, gl: &D, size: Size2D<i32>, bit_depth: u32) -> Result<(), Error> {
        if self.is_created() {
            return Err(Error::AlreadyCreated);
        }
        provider::validate_size(&size)?;
        let samples = self.supported_samples(gl)?;

        self.resolve.create(gl, size, bit_depth)?;
        self.samples = samples;
        self.create_multisample_framebuffer(gl, &size)?;
        debug!("created multisample FBO render context with {} samples", samples);
        Ok(())
    }

    fn set_dimensions(&mut self, gl: &D, size: Size2D<i32>) -> Result<(), Error> {
        if !self.is_created() {
            return Err(Error::NotCreated);
        }
        provider::validate_size(&size)?;

        self.destroy_multisample_framebuffer(gl);
        if let Err(err) = self.resolve.set_dimensions(gl, size) {
            self.resolve.destroy(gl);
            self.samples = 0;
            return Err(err);
        }
        self.create_multisample_framebuffer(gl, &size)
    }

    fn blit(&mut self, gl: &D, target: &mut dyn PresentTarget) -> Result<(), Error> {
        let multisample_framebuffer = match self.multisample_framebuffer {
            Some(ref framebuffer) => framebuffer.framebuffer_object(),
            None => return Ok(()),
        };
        let resolve_framebuffer = self.resolve.framebuffer();
        let size = self.resolve.size();

        unsafe {
            gl.bind_framebuffer(gl::READ_FRAMEBUFFER, multisample_framebuffer);
            gl.bind_framebuffer(gl::DRAW_FRAMEBUFFER, resolve_framebuffer);
            gl.blit_framebuffer(
                0,
                0,
                size.width,
                size.height,
                0,
                0,
                size.width,
                size.height,
                gl::COLOR_BUFFER_BIT,
                gl::LINEAR,
            );
        }

        let result = self.resolve.blit(gl, target);

        // Subsequent draws go to the multisampled framebuffer again.
        unsafe {
            gl.bind_framebuffer(gl::FRAMEBUFFER, multisample_framebuffer);
        }
        result
    }

    fn destroy(&mut self, gl: &D) {
        self.destroy_multisample_framebuffer(gl);
        self.resolve.destroy(gl);
        self.samples = 0;
    }

    #[inline]
    fn is_created(&self) -> bool {
        self.multisample_framebuffer.is_some()
    }

    #[inline]
    fn size(&self) -> Size2D<i32> {
        self.resolve.size()
    }

    #[inline]
    fn bit_depth(&self) -> u32 {
        self.resolve.bit_depth()
    }

    #[inline]
    fn framebuffer(&self) -> Option<D::Framebuffer> {
        self.multisample_framebuffer
            .as_ref()
            .and_then(|framebuffer| framebuffer.framebuffer_object())
    }

    #[inline]
    fn pixel_surface(&self) -> Option<&PixelSurface> {
        self.resolve.pixel_surface()
    }
}
