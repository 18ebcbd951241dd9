//! JPEG format adapter.
//!
//! This crate provides reading and writing of baseline JPEG files
//! through the [`FormatAdapter`] contract, declared as the [`JPEG`]
//! format entry. Decoding is delegated to [`jpeg_decoder`] and
//! encoding to [`jpeg_encoder`].
//!
//! Grayscale streams become arrays of 1-component 8-bit elements
//! and color streams arrays of 3-component 8-bit elements,
//! tagged with the respective [channel semantics](arrio_core::tags).
//! Following the bottom-up convention of the array container,
//! row 0 of the array is the image's last scanline on both paths.
//!
//! A JPEG file holds exactly one image: appending is rejected,
//! and so is writing a second array to the same open file.

use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom};
use std::mem;
use std::path::Path;

use arrio_core::{tags, ArrayContainer, Samples, TagList};
use arrio_format::error::{
    CloseFileSnafu, NotOpenSnafu, OpenFileSnafu, RewindFileSnafu, UnsupportedSnafu,
};
use arrio_format::snafu::prelude::*;
use arrio_format::{DynFormatAdapter, FormatAdapter, FormatEntry, Result, WriteMode};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use tracing::{debug, warn};

/// Encoding quality on a scale of 1 to 100.
const QUALITY: u8 = 85;

/// The JPEG format, holding a single baseline image per file.
pub const JPEG: FormatEntry = FormatEntry::new("jpeg", &["jpg", "jpeg"], new_adapter);

fn new_adapter() -> DynFormatAdapter {
    Box::new(JpegAdapter::new())
}

/// The open file handle of an adapter, if any.
#[derive(Debug, Default)]
enum Handle {
    #[default]
    Closed,
    Reading(BufReader<File>),
    Writing {
        writer: BufWriter<File>,
        written: bool,
    },
}

/// Format adapter for baseline JPEG files.
#[derive(Debug, Default)]
pub struct JpegAdapter {
    handle: Handle,
}

impl JpegAdapter {
    /// Create a new adapter in the closed state.
    pub fn new() -> Self {
        JpegAdapter::default()
    }
}

impl FormatAdapter for JpegAdapter {
    fn open_read(&mut self, path: &Path, _tags: &TagList) -> Result<()> {
        self.close()?;
        let file = File::open(path).context(OpenFileSnafu { path })?;
        self.handle = Handle::Reading(BufReader::new(file));
        Ok(())
    }

    fn open_write(&mut self, path: &Path, mode: WriteMode, _tags: &TagList) -> Result<()> {
        // a JPEG file holds a single image, there is nothing to append to
        ensure!(
            mode != WriteMode::Append,
            UnsupportedSnafu {
                feature: "append mode",
            }
        );
        self.close()?;
        let file = File::create(path).context(OpenFileSnafu { path })?;
        self.handle = Handle::Writing {
            writer: BufWriter::new(file),
            written: false,
        };
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // the handle is released even when the final flush fails
        match mem::replace(&mut self.handle, Handle::Closed) {
            Handle::Closed | Handle::Reading(_) => Ok(()),
            Handle::Writing { writer, .. } => writer
                .into_inner()
                .map(drop)
                .map_err(|e| e.into_error())
                .context(CloseFileSnafu),
        }
    }

    fn array_count(&self) -> i32 {
        match self.handle {
            Handle::Closed => -1,
            Handle::Reading(_) | Handle::Writing { .. } => 1,
        }
    }

    fn has_more(&mut self) -> bool {
        match &mut self.handle {
            Handle::Reading(reader) => {
                reader.fill_buf().map(|buf| !buf.is_empty()).unwrap_or(false)
            }
            _ => false,
        }
    }

    /// Decode the single image in the open file into an array container.
    fn read_array(&mut self, index: u32) -> Result<ArrayContainer> {
        self.seek_forbidden(index)?;
        let reader = match &mut self.handle {
            Handle::Reading(reader) => reader,
            _ => return NotOpenSnafu { operation: "reading" }.fail(),
        };

        // repeated reads of array 0 start over from the beginning
        reader.seek(SeekFrom::Start(0)).context(RewindFileSnafu)?;

        let mut decoder = Decoder::new(&mut *reader);
        decoder
            .read_info()
            .map_err(|e| Box::new(e) as Box<_>)
            .whatever_context("JPEG decoder failure")?;
        let info = decoder
            .info()
            .whatever_context("JPEG stream carries no image description")?;

        let rows = u32::from(info.height);
        let cols = u32::from(info.width);
        let (components, channels): (u32, &[&str]) = match info.pixel_format {
            PixelFormat::L8 => (1, &[tags::CHANNEL_LUMINANCE]),
            PixelFormat::RGB24 => {
                (3, &[tags::CHANNEL_RED, tags::CHANNEL_GREEN, tags::CHANNEL_BLUE])
            }
            other => {
                return UnsupportedSnafu {
                    feature: format!("JPEG pixel format {:?}", other),
                }
                .fail()
            }
        };

        let pixels = decoder
            .decode()
            .map_err(|e| Box::new(e) as Box<_>)
            .whatever_context("JPEG decoder failure")?;

        // scanlines are decoded top-down, the array is filled bottom-up
        let row_len = cols as usize * components as usize;
        let mut samples = Vec::with_capacity(pixels.len());
        for row in pixels.chunks_exact(row_len).rev() {
            samples.extend_from_slice(row);
        }

        let mut array = ArrayContainer::from_samples(samples, &[rows, cols], components)
            .map_err(|e| Box::new(e) as Box<_>)
            .whatever_context("JPEG image does not fit an array container")?;
        for (i, channel) in channels.iter().enumerate() {
            if let Some(component_tags) = array.component_tags_mut(i as u32) {
                component_tags.insert(tags::CHANNEL, *channel);
            }
        }

        debug!(
            "decoded {}x{} JPEG image with {} component(s)",
            cols, rows, components
        );
        Ok(array)
    }

    /// Encode an array container as the single image of the open file.
    fn write_array(&mut self, array: &ArrayContainer) -> Result<()> {
        ensure!(
            array.dim_count() == 2,
            UnsupportedSnafu {
                feature: format!("{}-dimensional arrays", array.dim_count()),
            }
        );
        let rows = array.dims()[0];
        let cols = array.dims()[1];
        ensure!(
            rows > 0 && cols > 0,
            UnsupportedSnafu {
                feature: "empty images",
            }
        );
        ensure!(
            rows <= i32::MAX as u32 && cols <= i32::MAX as u32,
            UnsupportedSnafu {
                feature: "image dimensions beyond the signed 31-bit range",
            }
        );
        let data = match array.samples() {
            Samples::U8(samples) => samples.as_slice(),
            other => {
                return UnsupportedSnafu {
                    feature: format!("{} samples", other.kind()),
                }
                .fail()
            }
        };
        let components = array.components();
        let color_type = match components {
            1 => ColorType::Luma,
            3 => ColorType::Rgb,
            _ => {
                return UnsupportedSnafu {
                    feature: format!("{} components per element", components),
                }
                .fail()
            }
        };
        let enc_rows = u16::try_from(rows).ok().context(UnsupportedSnafu {
            feature: "image dimensions above 65535",
        })?;
        let enc_cols = u16::try_from(cols).ok().context(UnsupportedSnafu {
            feature: "image dimensions above 65535",
        })?;

        let (writer, written) = match &mut self.handle {
            Handle::Writing { writer, written } => (writer, written),
            _ => return NotOpenSnafu { operation: "writing" }.fail(),
        };
        // a second image would corrupt the stream already written
        ensure!(
            !*written,
            UnsupportedSnafu {
                feature: "more than one image per file",
            }
        );

        // row 0 of the array is the image's last scanline
        let row_len = cols as usize * components as usize;
        let mut scanlines = Vec::with_capacity(data.len());
        for row in data.chunks_exact(row_len).rev() {
            scanlines.extend_from_slice(row);
        }

        let mut encoder = Encoder::new(&mut *writer, QUALITY);
        encoder.set_progressive(false);
        encoder
            .encode(&scanlines, enc_cols, enc_rows, color_type)
            .whatever_context("JPEG encoding failed")?;
        *written = true;

        debug!(
            "encoded {}x{} JPEG image with {} component(s)",
            cols, rows, components
        );
        Ok(())
    }
}

impl Drop for JpegAdapter {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("could not close JPEG file on drop: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_describes_the_format() {
        assert_eq!(JPEG.name(), "jpeg");
        assert!(JPEG.matches_path(Path::new("x.jpg")));
        assert!(JPEG.matches_path(Path::new("x.JPEG")));
        assert!(!JPEG.matches_path(Path::new("x.png")));
    }

    #[test]
    fn fresh_adapters_start_closed() {
        let mut adapter = JPEG.create();
        assert_eq!(adapter.array_count(), -1);
        assert!(!adapter.has_more());
        assert!(adapter.close().is_ok());
    }
}
