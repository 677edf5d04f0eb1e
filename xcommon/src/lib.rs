use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Decoded source image that can be stretched to arbitrary target sizes.
///
/// The color type and bit depth of the source are kept.
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("decoding {}", path.display());
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("failed to read {}", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode {}", path.display()))?;
        Ok(Self { img })
    }

    /// Resizes to exactly `width` x `height` with a Lanczos3 filter.
    ///
    /// The aspect ratio of the source is not preserved and nothing is
    /// cropped, the image is stretched to fill the target.
    pub fn resize(&self, width: u32, height: u32) -> Scaled {
        Scaled {
            img: self.img.resize_exact(width, height, FilterType::Lanczos3),
        }
    }
}

/// A resized image ready to be written to one or more locations.
pub struct Scaled {
    img: DynamicImage,
}

impl Scaled {
    /// Writes the image as png, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("writing {}", path.display());
        self.img
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
