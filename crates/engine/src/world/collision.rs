use crate::content::{AssetError, AssetKind, DecodedImage, ImageAsset};

use super::Size;

/// Per-pixel occupancy derived from the collision-source image. A pixel
/// blocks when it is opaque-ish pure black: `R == G == B == 0` and `A > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    blocked: Vec<bool>,
}

impl CollisionMask {
    pub fn build(source: &ImageAsset) -> Result<Self, AssetError> {
        let image = source.decoded(AssetKind::Collision)?;
        Self::from_image(image)
    }

    pub fn from_image(image: &DecodedImage) -> Result<Self, AssetError> {
        let expected = image.expected_rgba_len();
        if image.rgba.len() != expected {
            return Err(AssetError::MalformedPixels {
                expected,
                actual: image.rgba.len(),
            });
        }
        let blocked = image.rgba.chunks_exact(4).map(is_blocking_texel).collect();
        Ok(Self {
            width: image.width,
            height: image.height,
            blocked,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|blocked| **blocked).count()
    }

    pub fn is_blocked(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.blocked[y as usize * self.width as usize + x as usize]
    }

    /// Rectangle query in mask pixels. The origin is floored, the rectangle
    /// is clipped to the mask, and an empty clipped region never blocks.
    pub fn is_blocked_region(&self, x: f32, y: f32, width: u32, height: u32) -> bool {
        let origin_x = x.floor() as i64;
        let origin_y = y.floor() as i64;
        let left = origin_x.max(0);
        let top = origin_y.max(0);
        let right = origin_x
            .saturating_add(width as i64)
            .min(self.width as i64);
        let bottom = origin_y
            .saturating_add(height as i64)
            .min(self.height as i64);
        if right <= left || bottom <= top {
            return false;
        }

        let row_len = self.width as usize;
        let (left, right) = (left as usize, right as usize);
        (top as usize..bottom as usize).any(|row| {
            let start = row * row_len;
            self.blocked[start + left..start + right]
                .iter()
                .any(|blocked| *blocked)
        })
    }
}

fn is_blocking_texel(texel: &[u8]) -> bool {
    texel[0] == 0 && texel[1] == 0 && texel[2] == 0 && texel[3] > 0
}

#[cfg(test)]
pub(crate) fn mask_with_blocked_rects(
    width: u32,
    height: u32,
    rects: &[(u32, u32, u32, u32)],
) -> CollisionMask {
    let mut rgba = vec![255u8; width as usize * height as usize * 4];
    for &(rx, ry, rw, rh) in rects {
        for y in ry..(ry + rh).min(height) {
            for x in rx..(rx + rw).min(width) {
                let offset = (y as usize * width as usize + x as usize) * 4;
                rgba[offset..offset + 3].copy_from_slice(&[0, 0, 0]);
            }
        }
    }
    CollisionMask::from_image(&DecodedImage {
        width,
        height,
        rgba,
    })
    .expect("mask")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from_texels(width: u32, height: u32, texels: &[[u8; 4]]) -> DecodedImage {
        DecodedImage {
            width,
            height,
            rgba: texels.iter().flatten().copied().collect(),
        }
    }

    #[test]
    fn only_opaque_pure_black_blocks() {
        let image = image_from_texels(
            4,
            1,
            &[[0, 0, 0, 255], [0, 0, 0, 0], [1, 0, 0, 255], [0, 0, 0, 1]],
        );
        let mask = CollisionMask::from_image(&image).expect("mask");

        assert!(mask.is_blocked(0, 0));
        assert!(!mask.is_blocked(1, 0));
        assert!(!mask.is_blocked(2, 0));
        assert!(mask.is_blocked(3, 0));
        assert_eq!(mask.blocked_count(), 2);
    }

    #[test]
    fn build_fails_while_source_is_pending() {
        assert_eq!(
            CollisionMask::build(&ImageAsset::Pending),
            Err(AssetError::AssetNotReady {
                kind: AssetKind::Collision
            })
        );
    }

    #[test]
    fn build_rejects_truncated_pixel_buffer() {
        let image = DecodedImage {
            width: 2,
            height: 2,
            rgba: vec![0; 12],
        };
        assert_eq!(
            CollisionMask::from_image(&image),
            Err(AssetError::MalformedPixels {
                expected: 16,
                actual: 12
            })
        );
    }

    #[test]
    fn build_accepts_empty_image() {
        let image = DecodedImage {
            width: 0,
            height: 0,
            rgba: Vec::new(),
        };
        let mask = CollisionMask::from_image(&image).expect("mask");
        assert_eq!(mask.size(), Size::new(0, 0));
        assert!(!mask.is_blocked_region(0.0, 0.0, 16, 16));
    }

    #[test]
    fn region_query_detects_single_blocked_pixel() {
        let mask = mask_with_blocked_rects(20, 20, &[(10, 10, 1, 1)]);

        assert!(mask.is_blocked_region(5.0, 5.0, 6, 6));
        assert!(!mask.is_blocked_region(5.0, 5.0, 5, 5));
        assert!(!mask.is_blocked_region(11.0, 11.0, 4, 4));
    }

    #[test]
    fn region_origin_is_floored() {
        let mask = mask_with_blocked_rects(20, 20, &[(10, 10, 1, 1)]);

        assert!(mask.is_blocked_region(10.9, 10.9, 1, 1));
        assert!(!mask.is_blocked_region(11.0, 10.0, 1, 1));
        assert!(mask.is_blocked_region(-0.5, 9.5, 12, 2));
    }

    #[test]
    fn region_is_clipped_to_mask_bounds() {
        let mask = mask_with_blocked_rects(20, 20, &[(0, 0, 1, 1), (19, 19, 1, 1)]);

        assert!(mask.is_blocked_region(-5.0, -5.0, 6, 6));
        assert!(mask.is_blocked_region(15.0, 15.0, 16, 16));
        assert!(!mask.is_blocked_region(-5.0, -5.0, 5, 5));
    }

    #[test]
    fn fully_off_mask_region_never_blocks() {
        let mask = mask_with_blocked_rects(10, 10, &[(0, 0, 10, 10)]);

        assert!(!mask.is_blocked_region(10.0, 0.0, 4, 4));
        assert!(!mask.is_blocked_region(0.0, -4.0, 4, 4));
        assert!(!mask.is_blocked_region(-100.0, -100.0, 16, 16));
        assert!(!mask.is_blocked_region(2.0, 2.0, 0, 4));
    }

    #[test]
    fn single_pixel_query_outside_bounds_is_free() {
        let mask = mask_with_blocked_rects(4, 4, &[(0, 0, 4, 4)]);
        assert!(mask.is_blocked(3, 3));
        assert!(!mask.is_blocked(4, 0));
        assert!(!mask.is_blocked(-1, 0));
    }
}
