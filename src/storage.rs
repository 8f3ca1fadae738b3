use crate::nutrition::FoodCatalog;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub const CATALOG_PATH_VAR: &str = "MEAL_CATALOG_PATH";

pub fn resolve_catalog_path() -> Option<PathBuf> {
    env::var(CATALOG_PATH_VAR)
        .ok()
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

/// Reads a catalog file, falling back to the built-in foods when the file is
/// absent or unreadable.
pub async fn load_catalog(path: Option<&Path>) -> FoodCatalog {
    let Some(path) = path else {
        return FoodCatalog::builtin();
    };

    match fs::read(path).await {
        Ok(bytes) => match FoodCatalog::from_json(&bytes) {
            Ok(catalog) => {
                info!("loaded {} foods from {}", catalog.len(), path.display());
                catalog
            }
            Err(err) => {
                error!("failed to parse catalog file: {err}");
                FoodCatalog::builtin()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            error!("catalog file {} not found, using built-in foods", path.display());
            FoodCatalog::builtin()
        }
        Err(err) => {
            error!("failed to read catalog file: {err}");
            FoodCatalog::builtin()
        }
    }
}
