//! Viewport-sized raster buffer and full-canvas pixel snapshots.
//!
//! The [`Raster`] owns a single cairo ARGB32 image surface. Drawing contexts
//! are created per operation and dropped before pixels are read back, because
//! cairo refuses to hand out pixel data while another reference to the
//! surface is alive.

use cairo::{Context, Format, ImageSurface, Operator};
use flate2::{Compression, bufread::GzDecoder, write::GzEncoder};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::io::{Read, Write};
use thiserror::Error;

/// Errors raised by raster and snapshot operations.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid raster dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("raster pixels are still borrowed: {0}")]
    Borrowed(#[from] cairo::BorrowError),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("snapshot compression failed: {0}")]
    Compression(#[from] std::io::Error),

    #[error("snapshot holds {actual} bytes but {expected} were expected")]
    CorruptSnapshot { expected: usize, actual: usize },
}

/// Width and height of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    fn validate(self) -> Result<Self, RasterError> {
        if self.width <= 0 || self.height <= 0 {
            Err(RasterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(self)
        }
    }
}

/// Owned copy of every pixel on the raster at one point in time.
#[derive(Clone)]
pub struct Snapshot {
    width: i32,
    height: i32,
    stride: i32,
    pixels: SnapshotPixels,
}

#[derive(Clone)]
enum SnapshotPixels {
    Raw(Vec<u8>),
    Gzip(Vec<u8>),
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("compressed", &self.is_compressed())
            .field("stored_bytes", &self.stored_len())
            .finish()
    }
}

impl Snapshot {
    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of the decoded pixel data in bytes.
    pub fn expected_len(&self) -> usize {
        self.stride as usize * self.height as usize
    }

    /// Number of bytes the snapshot currently occupies.
    pub fn stored_len(&self) -> usize {
        match &self.pixels {
            SnapshotPixels::Raw(data) | SnapshotPixels::Gzip(data) => data.len(),
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.pixels, SnapshotPixels::Gzip(_))
    }

    /// Returns a gzip-compressed copy of this snapshot.
    ///
    /// Blank or sparsely painted canvases compress to a tiny fraction of
    /// their raw size. Already compressed snapshots are returned unchanged.
    pub fn compressed(self) -> Result<Self, RasterError> {
        let SnapshotPixels::Raw(raw) = &self.pixels else {
            return Ok(self);
        };

        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(raw)?;
        let packed = encoder.finish()?;

        Ok(Self {
            pixels: SnapshotPixels::Gzip(packed),
            ..self
        })
    }

    /// Returns the premultiplied ARGB32 pixel data, decompressing if needed.
    pub fn pixels(&self) -> Result<Cow<'_, [u8]>, RasterError> {
        match &self.pixels {
            SnapshotPixels::Raw(data) => Ok(Cow::Borrowed(data)),
            SnapshotPixels::Gzip(packed) => {
                let mut data = Vec::with_capacity(self.expected_len());
                GzDecoder::new(packed.as_slice()).read_to_end(&mut data)?;
                if data.len() != self.expected_len() {
                    return Err(RasterError::CorruptSnapshot {
                        expected: self.expected_len(),
                        actual: data.len(),
                    });
                }
                Ok(Cow::Owned(data))
            }
        }
    }

    /// Returns true if both snapshots hold identical dimensions and pixels.
    pub fn same_pixels(&self, other: &Snapshot) -> Result<bool, RasterError> {
        if (self.width, self.height, self.stride) != (other.width, other.height, other.stride) {
            return Ok(false);
        }
        Ok(self.pixels()? == other.pixels()?)
    }
}

/// Fixed-resolution drawing buffer sized to the viewport.
pub struct Raster {
    surface: ImageSurface,
}

impl Raster {
    /// Allocates a fully transparent raster of the given size.
    pub fn new(viewport: Viewport) -> Result<Self, RasterError> {
        let viewport = viewport.validate()?;
        let surface = ImageSurface::create(Format::ARgb32, viewport.width, viewport.height)?;
        Ok(Self { surface })
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.surface.width(), self.surface.height())
    }

    /// Creates a drawing context targeting this raster.
    ///
    /// The context must be dropped before [`Raster::snapshot`] or
    /// [`Raster::pixel`] is called.
    pub fn context(&self) -> Result<Context, RasterError> {
        Ok(Context::new(&self.surface)?)
    }

    /// Replaces the buffer with a blank one of the new size.
    ///
    /// Like a canvas element, resizing discards every pixel; callers that
    /// want to keep the drawing must repaint a snapshot afterwards.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), RasterError> {
        let viewport = viewport.validate()?;
        self.surface = ImageSurface::create(Format::ARgb32, viewport.width, viewport.height)?;
        Ok(())
    }

    /// Wipes every pixel to fully transparent.
    pub fn clear(&mut self) -> Result<(), RasterError> {
        let ctx = self.context()?;
        ctx.set_operator(Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Copies the whole buffer into a new [`Snapshot`].
    pub fn snapshot(&mut self) -> Result<Snapshot, RasterError> {
        let width = self.surface.width();
        let height = self.surface.height();
        let stride = self.surface.stride();
        let data = self.surface.data()?;
        Ok(Snapshot {
            width,
            height,
            stride,
            pixels: SnapshotPixels::Raw(data.to_vec()),
        })
    }

    /// Paints `snapshot` at the origin, replacing the pixels it covers.
    ///
    /// Snapshots larger than the raster are cropped; pixels outside a
    /// smaller snapshot are left as they are.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), RasterError> {
        let pixels = snapshot.pixels()?.into_owned();
        let image = ImageSurface::create_for_data(
            pixels,
            Format::ARgb32,
            snapshot.width,
            snapshot.height,
            snapshot.stride,
        )?;
        self.paint_surface(&image)
    }

    /// Copies the raster into a standalone image surface.
    ///
    /// Unlike [`Raster::snapshot`] the copy stays in cairo's format and can be
    /// painted back with [`Raster::paint_surface`] without decoding.
    pub fn copy_surface(&self) -> Result<ImageSurface, RasterError> {
        let copy = ImageSurface::create(
            Format::ARgb32,
            self.surface.width(),
            self.surface.height(),
        )?;
        {
            let ctx = Context::new(&copy)?;
            ctx.set_operator(Operator::Source);
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        Ok(copy)
    }

    /// Paints `source` at the origin, replacing the pixels it covers.
    pub fn paint_surface(&mut self, source: &ImageSurface) -> Result<(), RasterError> {
        let ctx = self.context()?;
        ctx.rectangle(0.0, 0.0, source.width() as f64, source.height() as f64);
        ctx.clip();
        ctx.set_operator(Operator::Source);
        ctx.set_source_surface(source, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Reads one pixel as un-premultiplied `[r, g, b, a]` bytes.
    ///
    /// Returns `None` for coordinates outside the raster.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<[u8; 4]>, RasterError> {
        if x < 0 || y < 0 || x >= self.surface.width() || y >= self.surface.height() {
            return Ok(None);
        }
        let stride = self.surface.stride() as usize;
        let data = self.surface.data()?;
        let offset = y as usize * stride + x as usize * 4;
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);

        let a = (word >> 24) as u8;
        let unpremultiply = |channel: u32| -> u8 {
            if a == 0 {
                0
            } else {
                ((channel & 0xff) * 255 / a as u32).min(255) as u8
            }
        };
        Ok(Some([
            unpremultiply(word >> 16),
            unpremultiply(word >> 8),
            unpremultiply(word),
            a,
        ]))
    }

    /// Encodes the raster as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), RasterError> {
        self.surface.write_to_png(writer)?;
        Ok(())
    }
}
