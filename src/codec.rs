use std::path::Path;

use image::{io::Reader as ImageReader, ColorType, ImageError, ImageFormat};
use tracing::debug;

use crate::{
    buffer::{ChannelMode, LdrImage, LinearImage},
    error::Error,
};

/// Reads a linear light image from disk.
pub trait Decode {
    fn decode(&self, path: &Path) -> Result<LinearImage, Error>;
}

/// Writes an 8-bit image to disk.
pub trait Encode {
    fn encode(&self, path: &Path, image: &LdrImage) -> Result<(), Error>;
}

/// OpenEXR decoder and PNG encoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl Decode for ImageCodec {
    fn decode(&self, path: &Path) -> Result<LinearImage, Error> {
        let decode_error = |source: ImageError| Error::Decode {
            path: path.to_path_buf(),
            source,
        };

        let mut reader =
            ImageReader::open(path).map_err(|e| decode_error(ImageError::IoError(e)))?;
        reader.set_format(ImageFormat::OpenExr);

        let decoded = reader.decode().map_err(decode_error)?;
        debug!(
            "decoded `{}` as {:?} {}x{}",
            path.display(),
            decoded.color(),
            decoded.width(),
            decoded.height()
        );

        // missing alpha is filled with 1.0
        let rgba = decoded.into_rgba32f();
        let (width, height) = rgba.dimensions();

        Ok(LinearImage::new(width, height, rgba.into_raw()))
    }
}

impl Encode for ImageCodec {
    fn encode(&self, path: &Path, image: &LdrImage) -> Result<(), Error> {
        let color = match image.mode() {
            ChannelMode::Rgb => ColorType::Rgb8,
            ChannelMode::Rgba => ColorType::Rgba8,
        };

        image::save_buffer_with_format(
            path,
            image.pixels(),
            image.width(),
            image.height(),
            color,
            ImageFormat::Png,
        )
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}
