//! PNG input and output.

use std::path::Path;

use image::{ImageBuffer, RgbaImage};

use crate::error::{Result, StitchError};

/// Decode an image file into an RGBA pixel grid.
pub fn open_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| StitchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to decode image: {}", e),
    })?;
    Ok(img.to_rgba8())
}

/// Write an image to a PNG file with optional integer scaling.
///
/// Uses nearest-neighbour scaling so the grid stays crisp. A scale of 0 is
/// treated as 1.
pub fn write_png(image: &RgbaImage, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1);

    let out: RgbaImage = if scale == 1 {
        image.clone()
    } else {
        ImageBuffer::from_fn(image.width() * scale, image.height() * scale, |x, y| {
            *image.get_pixel(x / scale, y / scale)
        })
    };

    out.save(path).map_err(|e| StitchError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_write_png_round_trip() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.png");

        write_png(&img, &path, 1).unwrap();

        let read = open_image(&path).unwrap();
        assert_eq!(read.width(), 2);
        assert_eq!(read.height(), 1);
        assert_eq!(read.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(read.get_pixel(1, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_scaled() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&img, &path, 2).unwrap();

        let read = open_image(&path).unwrap();
        assert_eq!(read.width(), 4);
        assert_eq!(read.height(), 2);
        assert_eq!(read.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(read.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(read.get_pixel(2, 0).0, [0, 255, 0, 255]);
        assert_eq!(read.get_pixel(3, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_write_png_scale_zero_treated_as_one() {
        let img = RgbaImage::new(1, 1);

        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.png");

        write_png(&img, &path, 0).unwrap();

        let read = open_image(&path).unwrap();
        assert_eq!(read.width(), 1);
        assert_eq!(read.height(), 1);
    }

    #[test]
    fn test_open_image_missing_file() {
        let result = open_image(Path::new("/nonexistent/input.png"));
        assert!(result.is_err());
    }
}
