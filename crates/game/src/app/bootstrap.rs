use std::path::PathBuf;

use tilewalk_engine::{resolve_app_paths, AppPaths, LoopConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use super::settings::{load_settings, SETTINGS_FILE_NAME};

const SETTINGS_ENV_VAR: &str = "TILEWALK_SETTINGS";

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) paths: AppPaths,
}

pub(crate) fn build_app() -> Option<AppWiring> {
    init_tracing();
    info!("=== tilewalk startup ===");

    let paths = match resolve_app_paths() {
        Ok(paths) => paths,
        Err(err) => {
            error!(error = %err, "startup_failed");
            return None;
        }
    };

    let settings_path =
        settings_path_from_env().unwrap_or_else(|| paths.root.join(SETTINGS_FILE_NAME));
    let settings = match load_settings(&settings_path) {
        Ok(settings) => settings,
        Err(err) => {
            error!(path = %settings_path.display(), error = err.as_str(), "settings_invalid");
            return None;
        }
    };
    let config = match settings {
        Some(settings) => {
            info!(path = %settings_path.display(), "settings_loaded");
            settings.apply_to(LoopConfig::default())
        }
        None => LoopConfig::default(),
    };

    Some(AppWiring { config, paths })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

fn settings_path_from_env() -> Option<PathBuf> {
    std::env::var(SETTINGS_ENV_VAR)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}
