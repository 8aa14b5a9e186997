// offscreen-fbo/demos/offscreen.rs
//
//! Renders a clear color into an off-screen framebuffer, reads it back, and writes it to a PNG.
//!
//! A headless GL context is created with `surfman`; everything after that goes through the
//! render context providers.

use clap::{App, Arg};
use euclid::default::Size2D;
use glow::HasContext;
use offscreen_fbo::{ContextAttributes, Error, FboRenderContextProvider, PixelSurface};
use offscreen_fbo::{MultisampleFboRenderContextProvider, PresentTarget, RenderContextProvider};
use png::{BitDepth, ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use surfman::{Connection, ContextAttributeFlags, GLVersion, SurfaceAccess, SurfaceType};

const FRAMEBUFFER_WIDTH: i32 = 640;
const FRAMEBUFFER_HEIGHT: i32 = 480;

static APP_NAME: &'static str = "offscreen-fbo readback example";

/// Writes presented frames to a PNG file, flipping them upright and swizzling BGRA to RGBA.
struct PngTarget {
    path: PathBuf,
}

impl PresentTarget for PngTarget {
    fn present(&mut self, surface: &PixelSurface) -> Result<(), Error> {
        let size = surface.size();
        let mut rgba = Vec::with_capacity(surface.data().len());
        for y in (0..size.height as usize).rev() {
            let row = surface.row(y).ok_or(Error::NotCreated)?;
            for pixel in row.chunks(4) {
                rgba.extend_from_slice(&[pixel[2], pixel[1], pixel[0], pixel[3]]);
            }
        }

        let file = File::create(&self.path).map_err(|err| Error::PresentFailed(err.to_string()))?;
        let mut encoder = Encoder::new(BufWriter::new(file), size.width as u32, size.height as u32);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|err| Error::PresentFailed(err.to_string()))?;
        writer
            .write_image_data(&rgba)
            .map_err(|err| Error::PresentFailed(err.to_string()))
    }
}

fn render<P>(gl: &glow::Context, provider: &mut P, target: &mut PngTarget) -> Result<(), Error>
where
    P: RenderContextProvider<Driver = glow::Context>,
{
    let size = Size2D::new(FRAMEBUFFER_WIDTH, FRAMEBUFFER_HEIGHT);
    provider.create(gl, size, 32)?;
    let result = provider.bind(gl).and_then(|()| {
        unsafe {
            gl.viewport(0, 0, size.width, size.height);
            gl.clear_color(0.2, 0.4, 0.8, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
        provider.blit(gl, target)
    });
    provider.destroy(gl);
    result
}

fn main() {
    let matches = App::new(APP_NAME)
        .arg(
            Arg::with_name("multisample")
                .short("m")
                .long("multisample")
                .help("Render through a multisampled framebuffer"),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .required(true)
                .index(1)
                .help("Output PNG file"),
        )
        .get_matches();

    let mut target = PngTarget {
        path: PathBuf::from(matches.value_of("OUTPUT").unwrap()),
    };

    let connection = Connection::new().unwrap();
    let adapter = connection.create_adapter().unwrap();
    let mut device = connection.create_device(&adapter).unwrap();

    let context_attributes = surfman::ContextAttributes {
        version: GLVersion::new(3, 3),
        flags: ContextAttributeFlags::empty(),
    };
    let context_descriptor = device
        .create_context_descriptor(&context_attributes)
        .unwrap();
    let mut context = device.create_context(&context_descriptor, None).unwrap();
    let surface = device
        .create_surface(
            &context,
            SurfaceAccess::GPUOnly,
            SurfaceType::Generic {
                size: Size2D::new(1, 1),
            },
        )
        .unwrap();
    device
        .bind_surface_to_context(&mut context, surface)
        .unwrap();
    device.make_context_current(&context).unwrap();

    let gl = unsafe {
        glow::Context::from_loader_function(|symbol_name| {
            device.get_proc_address(&context, symbol_name) as *const _
        })
    };

    let result = if matches.is_present("multisample") {
        let mut provider = MultisampleFboRenderContextProvider::new(ContextAttributes::default());
        render(&gl, &mut provider, &mut target)
    } else {
        let mut provider = FboRenderContextProvider::new(ContextAttributes::default());
        render(&gl, &mut provider, &mut target)
    };

    if let Some(mut surface) = device.unbind_surface_from_context(&mut context).unwrap() {
        device.destroy_surface(&mut context, &mut surface).unwrap();
    }
    device.destroy_context(&mut context).unwrap();

    if let Err(err) = result {
        eprintln!("{}: {}", APP_NAME, err);
        std::process::exit(1);
    }
}
