// offscreen-fbo/src/vertex_buffer.rs
//
//! A vertex buffer object holding `f32` vertex data, and the attribute layouts that read it.
//!
//! Whether the buffer is currently bound is GL state; it isn't tracked here. `set_data()` and
//! `set_attribute_data()` act on whatever is bound to `GL_ARRAY_BUFFER`, so call `bind()` first.

use crate::driver::GlDriver;
use crate::error::Error;
use crate::gl;

use std::mem;
use std::slice;
use std::thread;

/// The unit that a vertex attribute's stride and offset are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AttributeUnits {
    /// Counted in `f32` components and scaled by `size_of::<f32>()` before reaching GL.
    #[default]
    Floats,
    /// Counted in bytes and passed to GL as is.
    Bytes,
}

/// Describes how one vertex shader input reads from the bound vertex buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexAttribute {
    pub index: u32,
    /// Components per vertex, 1 to 4.
    pub size: i32,
    pub normalized: bool,
    pub stride: i32,
    pub offset: i32,
    pub units: AttributeUnits,
}

impl VertexAttribute {
    /// A tightly packed attribute starting at the beginning of the buffer.
    pub fn new(index: u32, size: i32, normalized: bool) -> VertexAttribute {
        VertexAttribute {
            index,
            size,
            normalized,
            stride: 0,
            offset: 0,
            units: AttributeUnits::Floats,
        }
    }

    pub fn with_stride(mut self, stride: i32) -> VertexAttribute {
        self.stride = stride;
        self
    }

    pub fn with_offset(mut self, offset: i32) -> VertexAttribute {
        self.offset = offset;
        self
    }

    /// Treats stride and offset as byte counts.
    pub fn in_bytes(mut self) -> VertexAttribute {
        self.units = AttributeUnits::Bytes;
        self
    }

    /// The stride in bytes, or `None` if it doesn't fit in an `i32`.
    pub fn byte_stride(&self) -> Option<i32> {
        self.scaled(self.stride)
    }

    /// The offset in bytes, or `None` if it doesn't fit in an `i32`.
    pub fn byte_offset(&self) -> Option<i32> {
        self.scaled(self.offset)
    }

    fn scaled(&self, count: i32) -> Option<i32> {
        match self.units {
            AttributeUnits::Floats => count.checked_mul(mem::size_of::<f32>() as i32),
            AttributeUnits::Bytes => Some(count),
        }
    }
}

/// Owns a single GL buffer object used as `GL_ARRAY_BUFFER`.
pub struct VertexBuffer<D>
where
    D: GlDriver,
{
    buffer: Option<D::Buffer>,
}

impl<D> Drop for VertexBuffer<D>
where
    D: GlDriver,
{
    fn drop(&mut self) {
        if self.buffer.is_some() && !thread::panicking() {
            panic!("Should have destroyed the vertex buffer with `destroy()`!")
        }
    }
}

impl<D> Default for VertexBuffer<D>
where
    D: GlDriver,
{
    fn default() -> VertexBuffer<D> {
        VertexBuffer::new()
    }
}

impl<D> VertexBuffer<D>
where
    D: GlDriver,
{
    pub fn new() -> VertexBuffer<D> {
        VertexBuffer { buffer: None }
    }

    pub fn create(&mut self, gl: &D) -> Result<(), Error> {
        if self.buffer.is_some() {
            return Err(Error::AlreadyCreated);
        }
        let buffer = unsafe { gl.create_buffer().map_err(Error::ObjectCreationFailed)? };
        self.buffer = Some(buffer);
        Ok(())
    }

    #[inline]
    pub fn is_created(&self) -> bool {
        self.buffer.is_some()
    }

    #[inline]
    pub fn buffer(&self) -> Option<D::Buffer> {
        self.buffer
    }

    /// Uploads `data` into the buffer bound to `GL_ARRAY_BUFFER` for static drawing.
    pub fn set_data(&self, gl: &D, data: &[f32]) {
        unsafe {
            let bytes =
                slice::from_raw_parts(data.as_ptr() as *const u8, mem::size_of_val(data));
            gl.buffer_data_u8_slice(gl::ARRAY_BUFFER, bytes, gl::STATIC_DRAW);
        }
    }

    /// Points `attribute.index` at the bound buffer and enables it.
    pub fn set_attribute_data(&self, gl: &D, attribute: &VertexAttribute) -> Result<(), Error> {
        let (stride, offset) = match (attribute.byte_stride(), attribute.byte_offset()) {
            (Some(stride), Some(offset)) => (stride, offset),
            _ => return Err(Error::InvalidAttribute(attribute.index)),
        };
        unsafe {
            gl.vertex_attrib_pointer_f32(
                attribute.index,
                attribute.size,
                gl::FLOAT,
                attribute.normalized,
                stride,
                offset,
            );
            gl.enable_vertex_attrib_array(attribute.index);
        }
        Ok(())
    }

    pub fn bind(&self, gl: &D) -> Result<(), Error> {
        let buffer = self.buffer.ok_or(Error::NotCreated)?;
        unsafe {
            gl.bind_buffer(gl::ARRAY_BUFFER, Some(buffer));
        }
        Ok(())
    }

    pub fn unbind(&self, gl: &D) {
        unsafe {
            gl.bind_buffer(gl::ARRAY_BUFFER, None);
        }
    }

    pub fn destroy(&mut self, gl: &D) {
        if let Some(buffer) = self.buffer.take() {
            unsafe {
                gl.delete_buffer(buffer);
            }
        }
    }
}
