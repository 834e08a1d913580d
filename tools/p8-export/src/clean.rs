//! `--clean`: remove artifacts left by a previous export

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

use crate::export::{ATLAS_PNG, MAP_JSON, MAP_PNG, SHEET_JSON, SHEET_PNG, SPRITES_DIR};

/// Remove the sprites directory and top-level artifacts. Missing entries are skipped.
///
/// Returns the number of entries removed.
pub fn clean_outputs(output_dir: &Path) -> Result<usize> {
    let mut removed = 0;

    let sprites = output_dir.join(SPRITES_DIR);
    match std::fs::remove_dir_all(&sprites) {
        Ok(()) => {
            tracing::info!("Removed old {:?} folder", sprites);
            removed += 1;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to remove {:?}", sprites));
        }
    }

    for name in [MAP_PNG, SHEET_PNG, ATLAS_PNG, SHEET_JSON, MAP_JSON] {
        let path = output_dir.join(name);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {:?}", path);
                removed += 1;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to remove {:?}", path));
            }
        }
    }

    Ok(removed)
}
