use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::image::{load_image_rgba, AssetKind, ImageAsset};

pub const MAP_FILE_NAME: &str = "map.png";
pub const COLLISION_FILE_NAME: &str = "collision-map.png";
pub const SPRITE_FILE_NAME: &str = "char.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub map: PathBuf,
    pub collision: PathBuf,
    pub sprite: PathBuf,
}

impl AssetPaths {
    pub fn under(asset_dir: &Path) -> Self {
        Self {
            map: asset_dir.join(MAP_FILE_NAME),
            collision: asset_dir.join(COLLISION_FILE_NAME),
            sprite: asset_dir.join(SPRITE_FILE_NAME),
        }
    }

    pub fn path_for(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Map => &self.map,
            AssetKind::Collision => &self.collision,
            AssetKind::Sprite => &self.sprite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUpdate {
    pub kind: AssetKind,
    pub asset: ImageAsset,
}

/// Decodes the three controller images one per `poll`, so readiness reaches
/// the stepper incrementally across frames.
#[derive(Debug)]
pub struct AssetLoader {
    paths: AssetPaths,
    pending: VecDeque<AssetKind>,
}

impl AssetLoader {
    pub fn new(paths: AssetPaths) -> Self {
        Self {
            paths,
            pending: AssetKind::ALL.into_iter().collect(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn poll(&mut self) -> Option<AssetUpdate> {
        let kind = self.pending.pop_front()?;
        let path = self.paths.path_for(kind);
        let asset = match load_image_rgba(path) {
            Ok(image) => {
                info!(
                    asset = kind.as_str(),
                    width = image.width,
                    height = image.height,
                    "asset_decoded"
                );
                ImageAsset::Decoded(image)
            }
            Err(reason) => {
                warn!(
                    asset = kind.as_str(),
                    path = %path.display(),
                    reason = reason.as_str(),
                    "asset_decode_failed"
                );
                ImageAsset::Failed(reason)
            }
        };
        Some(AssetUpdate { kind, asset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(dir.join(name))
            .expect("save png");
    }

    #[test]
    fn poll_decodes_map_collision_then_sprite() {
        let temp = TempDir::new().expect("temp");
        write_png(temp.path(), MAP_FILE_NAME, 8, 6);
        write_png(temp.path(), COLLISION_FILE_NAME, 8, 6);
        write_png(temp.path(), SPRITE_FILE_NAME, 2, 3);
        let mut loader = AssetLoader::new(AssetPaths::under(temp.path()));

        let kinds: Vec<AssetKind> = std::iter::from_fn(|| loader.poll())
            .map(|update| {
                assert!(update.asset.is_decoded(), "kind={:?}", update.kind);
                update.kind
            })
            .collect();

        assert_eq!(kinds, AssetKind::ALL.to_vec());
        assert!(loader.is_finished());
        assert!(loader.poll().is_none());
    }

    #[test]
    fn missing_asset_is_reported_failed_without_retry() {
        let temp = TempDir::new().expect("temp");
        write_png(temp.path(), MAP_FILE_NAME, 4, 4);
        let mut loader = AssetLoader::new(AssetPaths::under(temp.path()));

        let map = loader.poll().expect("map");
        let collision = loader.poll().expect("collision");

        assert!(map.asset.is_decoded());
        assert_eq!(collision.kind, AssetKind::Collision);
        assert!(matches!(collision.asset, ImageAsset::Failed(_)));
        assert_eq!(loader.poll().map(|update| update.kind), Some(AssetKind::Sprite));
        assert!(loader.poll().is_none());
    }

    #[test]
    fn paths_are_resolved_under_asset_dir() {
        let paths = AssetPaths::under(Path::new("/game/assets"));
        assert_eq!(
            paths.path_for(AssetKind::Collision),
            Path::new("/game/assets/collision-map.png")
        );
        assert_eq!(paths.path_for(AssetKind::Sprite), Path::new("/game/assets/char.png"));
    }
}
