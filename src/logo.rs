use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::error::LogoError;

const INPUT: &str = "./webrend/public/logo/logo.png";
const INVERTED: &str = "./webrend/public/logo/logo_inverted.png";
const BLACK: &str = "./webrend/public/logo/logo_black.png";

/// Where the source logo is read from and where its variants land.
/// Relative paths resolve against the working directory.
pub struct LogoPaths {
    pub input: PathBuf,
    pub inverted: PathBuf,
    pub black: PathBuf,
}

impl Default for LogoPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT),
            inverted: PathBuf::from(INVERTED),
            black: PathBuf::from(BLACK),
        }
    }
}

pub struct Logo {
    image: DynamicImage,
    format: ImageFormat,
}

impl Logo {
    pub fn open(path: &Path) -> Result<Self, LogoError> {
        let reader = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|source| LogoError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let format = reader
            .format()
            .ok_or_else(|| LogoError::UnknownFormat(path.to_path_buf()))?;
        let image = reader.decode().map_err(|source| LogoError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "loaded {} ({}x{}, {:?}, {format:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(Self { image, format })
    }

    pub const fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    /// Encode `img` to `path` with the same format the logo was read in,
    /// whatever the target's extension says.
    pub fn save(&self, img: &DynamicImage, path: &Path) -> Result<(), LogoError> {
        img.save_with_format(path, self.format)
            .map_err(|source| LogoError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 4]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        path
    }

    #[test]
    fn open_detects_format_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "logo.bin");

        let logo = Logo::open(&path).unwrap();
        assert_eq!(logo.format(), ImageFormat::Png);
        assert_eq!(logo.image().color(), image::ColorType::Rgba8);
        assert_eq!((logo.image().width(), logo.image().height()), (3, 2));
    }

    #[test]
    fn save_keeps_input_encoding() {
        let dir = tempfile::tempdir().unwrap();
        let logo = Logo::open(&write_png(dir.path(), "logo.png")).unwrap();

        let out = dir.path().join("variant.out");
        logo.save(logo.image(), &out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn missing_input_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Logo::open(&dir.path().join("nope.png")).err().unwrap();
        assert!(matches!(err, LogoError::Open { .. }), "{err}");
    }

    #[test]
    fn garbage_input_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = Logo::open(&path).err().unwrap();
        assert!(
            matches!(err, LogoError::Decode { .. } | LogoError::UnknownFormat(_)),
            "{err}"
        );
    }

    #[test]
    fn unwritable_target_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let logo = Logo::open(&write_png(dir.path(), "logo.png")).unwrap();

        let err = logo
            .save(logo.image(), &dir.path().join("missing/dir/out.png"))
            .err()
            .unwrap();
        assert!(matches!(err, LogoError::Write { .. }), "{err}");
    }
}
