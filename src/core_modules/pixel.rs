// THEORY:
// The `Pixel` module is the smallest unit of the knockout filter. It is a "dumb"
// RGBA container plus the one single-pixel decision the crate makes: is this
// pixel white enough to be removed? The decision only reads the color channels.
// Alpha is carried through untouched for kept pixels and is never consulted,
// which is what makes the filter idempotent on its own output.

pub mod pixel {
    use image::Rgba;

    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 4;

    /// A color channel must be strictly greater than this to count as "white".
    pub const WHITE_THRESHOLD: Channel = 240;

    /// The replacement written in place of every near-white pixel.
    pub const TRANSPARENT_WHITE: Pixel = Pixel::new(255, 255, 255, 0);

    /// A single RGBA pixel, 8 bits per channel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// True when red, green and blue all exceed `WHITE_THRESHOLD`.
        ///
        /// The comparison is strict and per channel: `(240, 240, 240)` is kept,
        /// `(241, 241, 241)` is not. Alpha plays no part.
        pub fn is_near_white(&self) -> bool {
            self.red > WHITE_THRESHOLD && self.green > WHITE_THRESHOLD && self.blue > WHITE_THRESHOLD
        }

        /// The pixel as it should appear in the output image.
        pub fn knocked_out(self) -> Pixel {
            if self.is_near_white() {
                TRANSPARENT_WHITE
            } else {
                self
            }
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Rgba<Byte>> for Pixel {
        fn from(rgba: Rgba<Byte>) -> Self {
            let [red, green, blue, alpha] = rgba.0;
            Pixel::new(red, green, blue, alpha)
        }
    }

    impl From<Pixel> for Rgba<Byte> {
        fn from(pixel: Pixel) -> Self {
            Rgba([pixel.red, pixel.green, pixel.blue, pixel.alpha])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;
    use image::Rgba;

    #[test]
    fn threshold_is_strict() {
        assert!(!Pixel::new(240, 240, 240, 255).is_near_white());
        assert!(Pixel::new(241, 241, 241, 255).is_near_white());
    }

    #[test]
    fn every_color_channel_must_pass() {
        assert!(!Pixel::new(255, 255, 240, 255).is_near_white());
        assert!(!Pixel::new(255, 240, 255, 255).is_near_white());
        assert!(!Pixel::new(240, 255, 255, 255).is_near_white());
        assert!(!Pixel::new(0, 255, 255, 255).is_near_white());
    }

    #[test]
    fn alpha_is_ignored_by_the_test() {
        assert!(Pixel::new(250, 250, 250, 0).is_near_white());
        assert!(Pixel::new(250, 250, 250, 17).is_near_white());
        assert!(!Pixel::new(10, 10, 10, 255).is_near_white());
    }

    #[test]
    fn near_white_becomes_transparent_white() {
        for value in 241..=255u8 {
            for alpha in [0u8, 1, 128, 255] {
                let out = Pixel::new(value, 255, value, alpha).knocked_out();
                assert_eq!(out, TRANSPARENT_WHITE);
            }
        }
    }

    #[test]
    fn other_pixels_are_untouched() {
        let samples = [
            Pixel::new(240, 240, 240, 255),
            Pixel::new(255, 255, 0, 200),
            Pixel::new(12, 34, 56, 78),
            Pixel::new(241, 241, 240, 3),
        ];
        for pixel in samples {
            assert_eq!(pixel.knocked_out(), pixel);
        }
    }

    #[test]
    fn conversions_preserve_channel_order() {
        let bytes: &[u8] = &[1, 2, 3, 4];
        let pixel = Pixel::from(bytes);
        assert_eq!(pixel, Pixel::new(1, 2, 3, 4));
        assert_eq!(Rgba::<u8>::from(pixel), Rgba([1, 2, 3, 4]));
        assert_eq!(Pixel::from(Rgba([1u8, 2, 3, 4])), pixel);
        assert_eq!(Bytes::from(pixel), vec![1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "Cannot convert 3 bytes into pixel.")]
    fn short_slice_panics() {
        let bytes: &[u8] = &[1, 2, 3];
        let _ = Pixel::from(bytes);
    }
}
