use std::path::Path;

use image::ImageReader;
use log::debug;

use crate::error::{Error, Result};

/// 8-bit single channel raster, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl From<image::GrayImage> for GrayFrame {
    fn from(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

/// Decode any image format `image` understands, converting colour to luma.
pub fn load_grayscale(path: &Path) -> Result<GrayFrame> {
    let decode_err = |source| Error::Decode {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;
    debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_luma8().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn loads_gray_png_row_major() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.png");
        let img = GrayImage::from_fn(3, 2, |x, y| Luma([(y * 3 + x) as u8 * 10]));
        img.save(&path).unwrap();

        let frame = load_grayscale(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.data, vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn colour_is_converted_to_luma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.png");
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        img.save(&path).unwrap();

        let frame = load_grayscale(&path).unwrap();
        assert_eq!(frame.data, vec![255; 4]);
    }

    #[test]
    fn missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        let err = load_grayscale(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            load_grayscale(&path).unwrap_err(),
            Error::Decode { .. }
        ));
    }
}
