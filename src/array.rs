use crate::error::MixevalError;
use std::path::Path;

/// An owned `height x width x channels` array of 8-bit samples.
///
/// Samples are stored row-major with interleaved channels, the same layout a
/// browser canvas or a decoded RGB buffer uses. Nothing about the content is
/// validated: any channel count and any values are accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageArray {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<u8>,
}

impl ImageArray {
    /// Wraps a raw sample buffer.
    ///
    /// Fails when `data.len()` is not `height * width * channels` or when that
    /// product overflows.
    pub fn new(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, MixevalError> {
        let expected = sample_count(height, width, channels, data.len())?;
        if data.len() != expected {
            return Err(MixevalError::Shape {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Creates an array with every sample set to `value`.
    pub fn filled(
        height: usize,
        width: usize,
        channels: usize,
        value: u8,
    ) -> Result<Self, MixevalError> {
        let len = sample_count(height, width, channels, 0)?;
        Ok(Self {
            height,
            width,
            channels,
            data: vec![value; len],
        })
    }

    /// Decodes uploaded image bytes (PNG, JPEG, GIF, WebP, BMP, TIFF) into an
    /// RGB array.
    ///
    /// An empty payload means no image was supplied and yields `Ok(None)`.
    pub fn decode(bytes: &[u8]) -> Result<Option<Self>, MixevalError> {
        if bytes.is_empty() {
            return Ok(None);
        }

        let decoded = image::load_from_memory(bytes)?;
        Ok(Some(Self::from_rgb(decoded.to_rgb8())))
    }

    /// Reads and decodes an image file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MixevalError> {
        let bytes = std::fs::read(path)?;
        let decoded = image::load_from_memory(&bytes)?;
        Ok(Self::from_rgb(decoded.to_rgb8()))
    }

    fn from_rgb(rgb: image::RgbImage) -> Self {
        let (width, height) = rgb.dimensions();
        Self {
            height: height as usize,
            width: width as usize,
            channels: 3,
            data: rgb.into_raw(),
        }
    }

    /// Returns `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Arithmetic mean over every sample. An empty array has a NaN mean.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return f64::NAN;
        }
        let sum: u64 = self.data.iter().map(|&v| u64::from(v)).sum();
        sum as f64 / self.data.len() as f64
    }
}

/// `height * width * channels`, or a shape error when it does not fit a `usize`.
fn sample_count(
    height: usize,
    width: usize,
    channels: usize,
    actual: usize,
) -> Result<usize, MixevalError> {
    height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(MixevalError::Shape {
            expected: usize::MAX,
            actual,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    // 1x1 GIF89a
    const TINY_GIF: &[u8] = &[
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00, 0x00, 0xff, 0xff,
        0xff, 0x00, 0x00, 0x00, 0x21, 0xf9, 0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0x2c, 0x00, 0x00,
        0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x02, 0x44, 0x01, 0x00, 0x3b,
    ];

    fn encode_png(img: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn new_rejects_mismatched_buffer() {
        let err = ImageArray::new(2, 2, 3, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            MixevalError::Shape {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn mean_of_known_values() {
        let img = ImageArray::new(1, 2, 2, vec![0, 10, 20, 30]).unwrap();
        assert_eq!(img.mean(), 15.0);
        assert_eq!(ImageArray::filled(4, 4, 1, 255).unwrap().mean(), 255.0);
    }

    #[test]
    fn mean_of_empty_array_is_nan() {
        assert!(ImageArray::filled(0, 5, 3, 0).unwrap().mean().is_nan());
    }

    #[test]
    fn overflowing_dimensions_are_a_shape_error() {
        let err = ImageArray::new(usize::MAX, 2, 3, vec![0; 6]).unwrap_err();
        assert!(matches!(err, MixevalError::Shape { actual: 6, .. }));

        let err = ImageArray::filled(usize::MAX, 2, 3, 0).unwrap_err();
        assert!(matches!(err, MixevalError::Shape { .. }));
    }

    #[test]
    fn decode_empty_payload_is_no_image() {
        assert!(ImageArray::decode(&[]).unwrap().is_none());
    }

    #[test]
    fn decode_png_keeps_dimensions() {
        let png = encode_png(&RgbImage::from_pixel(7, 5, image::Rgb([1, 2, 3])));
        let img = ImageArray::decode(&png).unwrap().unwrap();
        assert_eq!(img.shape(), (5, 7, 3));
        assert_eq!(&img.as_slice()[..3], &[1, 2, 3]);
    }

    #[test]
    fn decode_bmp_and_gif() {
        let mut bmp = Cursor::new(Vec::new());
        RgbImage::from_pixel(4, 3, image::Rgb([9, 9, 9]))
            .write_to(&mut bmp, ImageFormat::Bmp)
            .unwrap();
        let img = ImageArray::decode(bmp.get_ref()).unwrap().unwrap();
        assert_eq!(img.shape(), (3, 4, 3));

        let img = ImageArray::decode(TINY_GIF).unwrap().unwrap();
        assert_eq!(img.shape(), (1, 1, 3));
    }

    #[test]
    fn decode_garbage_fails() {
        let err = ImageArray::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, MixevalError::Decode(_)));
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let err = ImageArray::open("/nonexistent/mixeval/sample.png").unwrap_err();
        assert!(matches!(err, MixevalError::Io(_)));
    }
}
