// offscreen-fbo/src/surface.rs
//
//! CPU-side pixel storage for framebuffer readback, and the sink it is presented to.

use crate::error::Error;

use euclid::default::Size2D;

/// Bytes per pixel of the readback format (32-bit BGRA).
pub const BYTES_PER_PIXEL: usize = 4;

/// A CPU-readable surface that framebuffer contents are read back into.
///
/// Rows are tightly packed 32-bit BGRA and stored bottom-up, the order `glReadPixels` produces.
/// The bit depth is carried along for the presenter; it does not change the storage layout.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    size: Size2D<i32>,
    bit_depth: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    pub fn new(size: Size2D<i32>, bit_depth: u32) -> PixelSurface {
        PixelSurface {
            size,
            bit_depth,
            data: vec![0; byte_len(&size)],
        }
    }

    /// Reallocates the surface at a new size. The contents are cleared.
    pub fn resize(&mut self, size: Size2D<i32>, bit_depth: u32) {
        self.size = size;
        self.bit_depth = bit_depth;
        self.data.clear();
        self.data.resize(byte_len(&size), 0);
    }

    #[inline]
    pub fn size(&self) -> Size2D<i32> {
        self.size
    }

    #[inline]
    pub fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// The number of bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.size.width.max(0) as usize * BYTES_PER_PIXEL
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Returns row `y`, counted from the bottom of the image.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let stride = self.stride();
        self.data.get(y * stride..(y + 1) * stride)
    }
}

fn byte_len(size: &Size2D<i32>) -> usize {
    size.width.max(0) as usize * size.height.max(0) as usize * BYTES_PER_PIXEL
}

/// Something a finished frame can be copied onto, such as a window or an image encoder.
pub trait PresentTarget {
    fn present(&mut self, surface: &PixelSurface) -> Result<(), Error>;
}

impl<F> PresentTarget for F
where
    F: FnMut(&PixelSurface) -> Result<(), Error>,
{
    fn present(&mut self, surface: &PixelSurface) -> Result<(), Error> {
        (self)(surface)
    }
}
