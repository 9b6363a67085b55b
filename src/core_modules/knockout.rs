// THEORY:
// The `knockout` module lifts the single-pixel rule in `Pixel` to a whole image.
// It walks the flat RGBA buffer four bytes at a time in row-major order and
// builds a fresh buffer of the same length, so pixel count and ordering are
// preserved by construction. Every pixel is decided independently; there is no
// neighborhood, no edge smoothing and no partial alpha.

pub mod knockout {
    use crate::core_modules::pixel::pixel::{Bytes, CHANNELS, Pixel};
    use crate::error::{KnockoutError, Result};
    use image::RgbaImage;

    /// Pixel count before and after are equal; `knocked_out` is how many matched
    /// the near-white rule and were written as transparent white.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BufferStats {
        pub pixels: usize,
        pub knocked_out: usize,
    }

    /// Applies the knockout rule to a flat RGBA buffer.
    pub fn knock_out_buffer(buffer: &[u8]) -> Result<(Bytes, BufferStats)> {
        if buffer.len() % CHANNELS != 0 {
            return Err(KnockoutError::MalformedBuffer { len: buffer.len() });
        }

        let mut output = Bytes::with_capacity(buffer.len());
        let mut knocked_out = 0usize;

        for chunk in buffer.chunks_exact(CHANNELS) {
            let pixel = Pixel::from(chunk);
            if pixel.is_near_white() {
                knocked_out += 1;
            }
            let result = pixel.knocked_out();
            output.extend_from_slice(&[result.red, result.green, result.blue, result.alpha]);
        }

        let stats = BufferStats {
            pixels: buffer.len() / CHANNELS,
            knocked_out,
        };
        Ok((output, stats))
    }

    /// Applies the knockout rule to an image. The result has the same
    /// dimensions as `image`.
    pub fn knock_out_image(image: &RgbaImage) -> (RgbaImage, BufferStats) {
        let (width, height) = image.dimensions();
        let mut output = RgbaImage::new(width, height);
        let mut knocked_out = 0usize;

        for (x, y, rgba) in image.enumerate_pixels() {
            let pixel = Pixel::from(*rgba);
            if pixel.is_near_white() {
                knocked_out += 1;
            }
            output.put_pixel(x, y, pixel.knocked_out().into());
        }

        let stats = BufferStats {
            pixels: width as usize * height as usize,
            knocked_out,
        };
        (output, stats)
    }
}
