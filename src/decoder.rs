use image::{DynamicImage, GenericImageView};
use serde::Serialize;

/// A decoded image as rows × pixels × channels of unsigned bytes.
/// Serialises as the nested numeric array the serving endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PixelArray {
    rows: Vec<Vec<Vec<u8>>>,
}

impl PixelArray {
    pub fn new(rows: Vec<Vec<Vec<u8>>>) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn channels(&self) -> usize {
        self.rows
            .first()
            .and_then(|row| row.first())
            .map_or(0, Vec::len)
    }
}

/// Decode uploaded bytes into a pixel grid at the image's native size.
///
/// The channel layout is kept as the file carries it (grayscale stays one
/// channel, RGBA keeps its alpha); samples wider than 8 bits are narrowed
/// to 8. No resizing and no normalisation happen here, so the grid that
/// goes out on the wire has whatever dimensions the upload had.
pub fn decode(bytes: &[u8]) -> Result<PixelArray, image::ImageError> {
    let img = image::load_from_memory(bytes)?;
    let (width, _) = img.dimensions();

    let (raw, channels) = match img {
        DynamicImage::ImageLuma8(buf) => (buf.into_raw(), 1),
        DynamicImage::ImageLumaA8(buf) => (buf.into_raw(), 2),
        DynamicImage::ImageRgb8(buf) => (buf.into_raw(), 3),
        DynamicImage::ImageRgba8(buf) => (buf.into_raw(), 4),
        other => match other.color().channel_count() {
            1 => (other.to_luma8().into_raw(), 1),
            2 => (other.to_luma_alpha8().into_raw(), 2),
            4 => (other.to_rgba8().into_raw(), 4),
            _ => (other.to_rgb8().into_raw(), 3),
        },
    };

    let row_len = width as usize * channels;
    let rows = raw
        .chunks(row_len)
        .map(|row| row.chunks(channels).map(<[u8]>::to_vec).collect())
        .collect();

    Ok(PixelArray::new(rows))
}
