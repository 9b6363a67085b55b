pub mod image_helper {
    use crate::core_modules::pixel::pixel::CHANNELS;
    use crate::error::{KnockoutError, Result};
    use image::{ImageEncoder, ImageReader, RgbaImage};
    use log::debug;
    use std::io::{BufWriter, ErrorKind, Write};
    use std::path::Path;

    /// Decodes the file at `path`, sniffing the format from its content, and
    /// widens it to 8-bit RGBA.
    pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => KnockoutError::NotFound {
                    path: path.to_path_buf(),
                },
                _ => KnockoutError::Decode {
                    path: path.to_path_buf(),
                    source: image::ImageError::IoError(e),
                },
            })?;

        let decoded = reader.decode().map_err(|source| KnockoutError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "decoded {} as {:?} ({}x{})",
            path.display(),
            decoded.color(),
            decoded.width(),
            decoded.height()
        );

        Ok(decoded.to_rgba8())
    }

    /// Encodes an RGBA8 buffer as PNG, truncating whatever was at `path`.
    pub fn save_png(path: &Path, width: u32, height: u32, buffer: &[u8]) -> Result<()> {
        let expected = width as usize * height as usize * CHANNELS;
        if buffer.len() != expected {
            return Err(KnockoutError::MalformedBuffer { len: buffer.len() });
        }

        let write_error = |source: image::ImageError| KnockoutError::Write {
            path: path.to_path_buf(),
            source,
        };

        let output = std::fs::File::create(path).map_err(|e| write_error(e.into()))?;
        let mut writer = BufWriter::new(output);
        let encoder = image::codecs::png::PngEncoder::new(&mut writer);

        encoder
            .write_image(buffer, width, height, image::ExtendedColorType::Rgba8)
            .map_err(write_error)?;
        writer.flush().map_err(|e| write_error(e.into()))?;

        Ok(())
    }
}
