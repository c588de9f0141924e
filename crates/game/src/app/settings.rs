use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use tilewalk_engine::world::MAX_DEAD_ZONE_FACTOR;
use tilewalk_engine::{LoopConfig, Vec2};

pub(crate) const SETTINGS_FILE_NAME: &str = "tilewalk.json";

type SettingsResult<T> = Result<T, String>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SettingsFile {
    #[serde(default)]
    window: WindowSettings,
    #[serde(default)]
    timing: TimingSettings,
    #[serde(default)]
    controller: ControllerSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct WindowSettings {
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimingSettings {
    target_tps: Option<u32>,
    max_ticks_per_frame: Option<u32>,
    max_render_fps: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ControllerSettings {
    spawn: Option<SavedVec2>,
    speed: Option<u32>,
    zoom: Option<f32>,
    dead_zone_factor: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct SavedVec2 {
    x: f32,
    y: f32,
}

/// Reads the optional settings file. A missing file is not an error.
pub(crate) fn load_settings(path: &Path) -> SettingsResult<Option<SettingsFile>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(format!("read settings: {error}")),
    };
    let settings = parse_settings_json(&raw)?;
    settings.validate()?;
    Ok(Some(settings))
}

fn parse_settings_json(raw: &str) -> SettingsResult<SettingsFile> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, SettingsFile>(&mut deserializer) {
        Ok(settings) => Ok(settings),
        Err(error) => {
            let path = error.path().to_string();
            let source = error.into_inner();
            if path.is_empty() || path == "." {
                Err(format!("parse settings json: {source}"))
            } else {
                Err(format!("parse settings json at {path}: {source}"))
            }
        }
    }
}

fn validation_err(path: &str, message: impl Into<String>) -> String {
    format!("validation failed at {path}: {}", message.into())
}

impl SettingsFile {
    fn validate(&self) -> SettingsResult<()> {
        if self.window.width == Some(0) {
            return Err(validation_err("window.width", "must be positive"));
        }
        if self.window.height == Some(0) {
            return Err(validation_err("window.height", "must be positive"));
        }
        if self.timing.target_tps == Some(0) {
            return Err(validation_err("timing.target_tps", "must be positive"));
        }
        if self.controller.speed == Some(0) {
            return Err(validation_err("controller.speed", "must be at least 1"));
        }
        if let Some(zoom) = self.controller.zoom {
            if !(zoom.is_finite() && zoom > 0.0) {
                return Err(validation_err("controller.zoom", "must be a positive number"));
            }
        }
        if let Some(factor) = self.controller.dead_zone_factor {
            if !(0.0..=MAX_DEAD_ZONE_FACTOR).contains(&factor) {
                return Err(validation_err(
                    "controller.dead_zone_factor",
                    format!("must be within 0.0..={MAX_DEAD_ZONE_FACTOR}"),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn apply_to(self, mut config: LoopConfig) -> LoopConfig {
        if let Some(title) = self.window.title {
            config.window_title = title;
        }
        if let Some(width) = self.window.width {
            config.window_width = width;
        }
        if let Some(height) = self.window.height {
            config.window_height = height;
        }
        if let Some(target_tps) = self.timing.target_tps {
            config.target_tps = target_tps;
        }
        if let Some(max_ticks) = self.timing.max_ticks_per_frame {
            config.max_ticks_per_frame = max_ticks;
        }
        if let Some(cap) = self.timing.max_render_fps {
            config.max_render_fps = Some(cap);
        }

        let controller = &mut config.controller;
        if let Some(spawn) = self.controller.spawn {
            controller.spawn = Vec2::new(spawn.x, spawn.y);
        }
        if let Some(speed) = self.controller.speed {
            controller.speed = speed;
        }
        if let Some(zoom) = self.controller.zoom {
            controller.zoom = zoom;
        }
        if let Some(factor) = self.controller.dead_zone_factor {
            controller.dead_zone_factor = factor;
        }
        config.controller = config.controller.normalized();
        config
    }
}
