// offscreen-fbo/src/driver.rs
//
//! The OpenGL entry points that render context providers and vertex buffers call.
//!
//! Every `glow::HasContext` implements `GlDriver`, so a `glow::Context` can be handed straight
//! to the providers. All methods require the owning GL context to be current on the calling
//! thread, which is why they are `unsafe`, just like their `glow` counterparts.

use glow::{HasContext, PixelPackData};
use std::fmt::Debug;

/// The subset of OpenGL needed to build, resolve, and read back framebuffer objects and to
/// configure vertex buffers.
pub trait GlDriver {
    /// A framebuffer object name.
    type Framebuffer: Copy + Debug + PartialEq;
    /// A renderbuffer object name.
    type Renderbuffer: Copy + Debug + PartialEq;
    /// A buffer object name.
    type Buffer: Copy + Debug + PartialEq;

    unsafe fn create_framebuffer(&self) -> Result<Self::Framebuffer, String>;
    unsafe fn delete_framebuffer(&self, framebuffer: Self::Framebuffer);
    unsafe fn bind_framebuffer(&self, target: u32, framebuffer: Option<Self::Framebuffer>);
    unsafe fn check_framebuffer_status(&self, target: u32) -> u32;
    #[allow(clippy::too_many_arguments)]
    unsafe fn blit_framebuffer(
        &self,
        src_x0: i32,
        src_y0: i32,
        src_x1: i32,
        src_y1: i32,
        dst_x0: i32,
        dst_y0: i32,
        dst_x1: i32,
        dst_y1: i32,
        mask: u32,
        filter: u32,
    );
    unsafe fn read_buffer(&self, source: u32);
    #[allow(clippy::too_many_arguments)]
    unsafe fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        gltype: u32,
        pixels: &mut [u8],
    );

    unsafe fn create_renderbuffer(&self) -> Result<Self::Renderbuffer, String>;
    unsafe fn delete_renderbuffer(&self, renderbuffer: Self::Renderbuffer);
    unsafe fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<Self::Renderbuffer>);
    unsafe fn renderbuffer_storage(&self, target: u32, format: u32, width: i32, height: i32);
    unsafe fn renderbuffer_storage_multisample(
        &self,
        target: u32,
        samples: i32,
        format: u32,
        width: i32,
        height: i32,
    );
    unsafe fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: Option<Self::Renderbuffer>,
    );

    unsafe fn create_buffer(&self) -> Result<Self::Buffer, String>;
    unsafe fn delete_buffer(&self, buffer: Self::Buffer);
    unsafe fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    unsafe fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32);
    unsafe fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    unsafe fn enable_vertex_attrib_array(&self, index: u32);

    unsafe fn get_parameter_i32(&self, parameter: u32) -> i32;
}

impl<T> GlDriver for T
where
    T: HasContext,
{
    type Framebuffer = T::Framebuffer;
    type Renderbuffer = T::Renderbuffer;
    type Buffer = T::Buffer;

    #[inline]
    unsafe fn create_framebuffer(&self) -> Result<Self::Framebuffer, String> {
        HasContext::create_framebuffer(self)
    }

    #[inline]
    unsafe fn delete_framebuffer(&self, framebuffer: Self::Framebuffer) {
        HasContext::delete_framebuffer(self, framebuffer)
    }

    #[inline]
    unsafe fn bind_framebuffer(&self, target: u32, framebuffer: Option<Self::Framebuffer>) {
        HasContext::bind_framebuffer(self, target, framebuffer)
    }

    #[inline]
    unsafe fn check_framebuffer_status(&self, target: u32) -> u32 {
        HasContext::check_framebuffer_status(self, target)
    }

    #[inline]
    unsafe fn blit_framebuffer(
        &self,
        src_x0: i32,
        src_y0: i32,
        src_x1: i32,
        src_y1: i32,
        dst_x0: i32,
        dst_y0: i32,
        dst_x1: i32,
        dst_y1: i32,
        mask: u32,
        filter: u32,
    ) {
        HasContext::blit_framebuffer(
            self, src_x0, src_y0, src_x1, src_y1, dst_x0, dst_y0, dst_x1, dst_y1, mask, filter,
        )
    }

    #[inline]
    unsafe fn read_buffer(&self, source: u32) {
        HasContext::read_buffer(self, source)
    }

    #[inline]
    unsafe fn read_pixels(
        &self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        format: u32,
        gltype: u32,
        pixels: &mut [u8],
    ) {
        HasContext::read_pixels(
            self,
            x,
            y,
            width,
            height,
            format,
            gltype,
            PixelPackData::Slice(Some(pixels)),
        )
    }

    #[inline]
    unsafe fn create_renderbuffer(&self) -> Result<Self::Renderbuffer, String> {
        HasContext::create_renderbuffer(self)
    }

    #[inline]
    unsafe fn delete_renderbuffer(&self, renderbuffer: Self::Renderbuffer) {
        HasContext::delete_renderbuffer(self, renderbuffer)
    }

    #[inline]
    unsafe fn bind_renderbuffer(&self, target: u32, renderbuffer: Option<Self::Renderbuffer>) {
        HasContext::bind_renderbuffer(self, target, renderbuffer)
    }

    #[inline]
    unsafe fn renderbuffer_storage(&self, target: u32, format: u32, width: i32, height: i32) {
        HasContext::renderbuffer_storage(self, target, format, width, height)
    }

    #[inline]
    unsafe fn renderbuffer_storage_multisample(
        &self,
        target: u32,
        samples: i32,
        format: u32,
        width: i32,
        height: i32,
    ) {
        HasContext::renderbuffer_storage_multisample(self, target, samples, format, width, height)
    }

    #[inline]
    unsafe fn framebuffer_renderbuffer(
        &self,
        target: u32,
        attachment: u32,
        renderbuffer_target: u32,
        renderbuffer: Option<Self::Renderbuffer>,
    ) {
        HasContext::framebuffer_renderbuffer(
            self,
            target,
            attachment,
            renderbuffer_target,
            renderbuffer,
        )
    }

    #[inline]
    unsafe fn create_buffer(&self) -> Result<Self::Buffer, String> {
        HasContext::create_buffer(self)
    }

    #[inline]
    unsafe fn delete_buffer(&self, buffer: Self::Buffer) {
        HasContext::delete_buffer(self, buffer)
    }

    #[inline]
    unsafe fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        HasContext::bind_buffer(self, target, buffer)
    }

    #[inline]
    unsafe fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        HasContext::buffer_data_u8_slice(self, target, data, usage)
    }

    #[inline]
    unsafe fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        HasContext::vertex_attrib_pointer_f32(self, index, size, data_type, normalized, stride, offset)
    }

    #[inline]
    unsafe fn enable_vertex_attrib_array(&self, index: u32) {
        HasContext::enable_vertex_attrib_array(self, index)
    }

    #[inline]
    unsafe fn get_parameter_i32(&self, parameter: u32) -> i32 {
        HasContext::get_parameter_i32(self, parameter)
    }
}
