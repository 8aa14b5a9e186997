// offscreen-fbo/src/error.rs
//
//! Various errors that methods can produce.

use crate::gl;

use euclid::default::Size2D;
use std::error;
use std::fmt::{self, Display, Formatter};

/// Various errors that methods can produce.
#[derive(Debug)]
pub enum Error {
    /// The framebuffer failed its completeness check.
    FramebufferIncomplete(FramebufferStatus),
    /// The driver couldn't allocate a framebuffer, renderbuffer, or buffer object.
    ObjectCreationFailed(String),
    /// A width or height was zero or negative.
    InvalidDimensions(Size2D<i32>),
    /// `create()` was called on a provider or buffer that already owns GL objects.
    AlreadyCreated,
    /// The method needs GL objects that haven't been created yet, or were destroyed.
    NotCreated,
    /// The driver reports no multisampling support.
    UnsupportedSamples,
    /// The present target refused the frame.
    PresentFailed(String),
    /// The stride or offset of the vertex attribute at this index overflows a byte count.
    InvalidAttribute(u32),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match *self {
            Error::FramebufferIncomplete(status) => {
                write!(formatter, "framebuffer incomplete: {}", status)
            }
            Error::ObjectCreationFailed(ref message) => {
                write!(formatter, "GL object creation failed: {}", message)
            }
            Error::InvalidDimensions(size) => {
                write!(formatter, "invalid dimensions {}x{}", size.width, size.height)
            }
            Error::AlreadyCreated => formatter.write_str("already created"),
            Error::NotCreated => formatter.write_str("not created"),
            Error::UnsupportedSamples => formatter.write_str("multisampling is unsupported"),
            Error::PresentFailed(ref message) => write!(formatter, "present failed: {}", message),
            Error::InvalidAttribute(index) => {
                write!(formatter, "vertex attribute {} stride or offset overflows", index)
            }
        }
    }
}

impl error::Error for Error {}

// The `_EXT` values from `EXT_framebuffer_object` that never made it into core GL.
const FRAMEBUFFER_INCOMPLETE_DIMENSIONS: u32 = 0x8cd9;
const FRAMEBUFFER_INCOMPLETE_FORMATS: u32 = 0x8cda;

/// A status code returned by `glCheckFramebufferStatus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FramebufferStatus(pub u32);

impl FramebufferStatus {
    /// Turns a raw status into `Ok(())` if the framebuffer is complete.
    pub fn check(status: u32) -> Result<(), Error> {
        if status == gl::FRAMEBUFFER_COMPLETE {
            Ok(())
        } else {
            Err(Error::FramebufferIncomplete(FramebufferStatus(status)))
        }
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.0
    }

    /// The human-readable part of the status message.
    pub fn description(&self) -> &'static str {
        match self.0 {
            gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => "Incomplete Attachment",
            gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => "Missing Attachment",
            FRAMEBUFFER_INCOMPLETE_DIMENSIONS => "Incomplete Dimensions",
            FRAMEBUFFER_INCOMPLETE_FORMATS => "Incomplete Formats",
            gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => "Incomplete draw buffer",
            gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => "Incomplete read buffer",
            gl::FRAMEBUFFER_UNSUPPORTED => "Framebuffer unsupported",
            gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => "Incomplete multisample",
            gl::INVALID_ENUM => "Target is not a framebuffer",
            _ => "An error has occurred",
        }
    }

    /// The full message: the numeric code followed by its description.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for FramebufferStatus {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", self.0, self.description())
    }
}
