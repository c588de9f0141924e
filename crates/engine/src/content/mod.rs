mod image;
mod loader;

pub use self::image::{load_image_rgba, AssetError, AssetKind, DecodedImage, ImageAsset};
pub use loader::{
    AssetLoader, AssetPaths, AssetUpdate, COLLISION_FILE_NAME, MAP_FILE_NAME, SPRITE_FILE_NAME,
};
