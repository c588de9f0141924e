use std::path::Path;

use ::image::ImageReader;
use thiserror::Error;

use crate::world::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Map,
    Collision,
    Sprite,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Map, AssetKind::Collision, AssetKind::Sprite];

    pub const fn as_str(self) -> &'static str {
        match self {
            AssetKind::Map => "map",
            AssetKind::Collision => "collision",
            AssetKind::Sprite => "sprite",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            AssetKind::Map => 0,
            AssetKind::Collision => 1,
            AssetKind::Sprite => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("{} asset is not ready", kind.as_str())]
    AssetNotReady { kind: AssetKind },
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    MalformedPixels { expected: usize, actual: usize },
}

/// RGBA8 pixels at the image's native resolution, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn expected_rgba_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageAsset {
    #[default]
    Pending,
    Failed(String),
    Decoded(DecodedImage),
}

impl ImageAsset {
    pub fn is_decoded(&self) -> bool {
        matches!(self, ImageAsset::Decoded(_))
    }

    pub fn decoded(&self, kind: AssetKind) -> Result<&DecodedImage, AssetError> {
        match self {
            ImageAsset::Decoded(image) => Ok(image),
            ImageAsset::Pending | ImageAsset::Failed(_) => Err(AssetError::AssetNotReady { kind }),
        }
    }

    pub fn dimensions(&self, kind: AssetKind) -> Result<Size, AssetError> {
        self.decoded(kind).map(DecodedImage::size)
    }

    pub fn into_decoded(self) -> Option<DecodedImage> {
        match self {
            ImageAsset::Decoded(image) => Some(image),
            ImageAsset::Pending | ImageAsset::Failed(_) => None,
        }
    }
}

pub fn load_image_rgba(path: &Path) -> Result<DecodedImage, String> {
    let reader = ImageReader::open(path).map_err(|error| format!("file_open_failed:{error}"))?;
    let decoded = reader
        .decode()
        .map_err(|error| format!("decode_failed:{error}"))?;
    let image = decoded.to_rgba8();
    Ok(DecodedImage {
        width: image.width(),
        height: image.height(),
        rgba: image.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn load_image_rgba_reads_png_at_native_resolution() {
        let temp = TempDir::new().expect("temp");
        let path = temp.path().join("collision-map.png");
        let mut source = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
        source.put_pixel(2, 1, Rgba([0, 0, 0, 255]));
        source.save(&path).expect("save png");

        let image = load_image_rgba(&path).expect("decode");
        assert_eq!(image.size(), Size::new(3, 2));
        assert_eq!(image.rgba.len(), image.expected_rgba_len());
        assert_eq!(&image.rgba[20..24], &[0, 0, 0, 255]);
        assert_eq!(&image.rgba[0..4], &[255, 255, 255, 255]);
    }

    #[test]
    fn load_image_rgba_reports_missing_file() {
        let temp = TempDir::new().expect("temp");
        let error = load_image_rgba(&temp.path().join("missing.png")).expect_err("missing");
        assert!(error.starts_with("file_open_failed:"), "error={error}");
    }

    #[test]
    fn load_image_rgba_reports_undecodable_file() {
        let temp = TempDir::new().expect("temp");
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"not a png").expect("write");
        let error = load_image_rgba(&path).expect_err("broken");
        assert!(error.starts_with("decode_failed:"), "error={error}");
    }

    #[test]
    fn pending_and_failed_assets_are_not_ready() {
        for asset in [ImageAsset::Pending, ImageAsset::Failed("x".to_string())] {
            assert_eq!(
                asset.dimensions(AssetKind::Map),
                Err(AssetError::AssetNotReady {
                    kind: AssetKind::Map
                })
            );
            assert!(!asset.is_decoded());
        }
    }

    #[test]
    fn not_ready_error_names_the_asset() {
        let error = AssetError::AssetNotReady {
            kind: AssetKind::Sprite,
        };
        assert_eq!(error.to_string(), "sprite asset is not ready");
    }
}
