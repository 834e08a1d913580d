//! Artifact export
//!
//! Writes every PNG and JSON artifact of a conversion. Artifacts are
//! independent: a failed write is logged and recorded, and the remaining
//! artifacts are still written.

use anyhow::{Context, Result};
use p8_common::model::sprite_filename;
use p8_common::Conversion;
use std::path::{Path, PathBuf};

use crate::png_writer::{save_indexed, save_rgba};

pub const MAP_PNG: &str = "map.png";
pub const SHEET_PNG: &str = "spritesheet.png";
pub const ATLAS_PNG: &str = "atlas.png";
pub const SPRITES_DIR: &str = "sprites";
pub const SHEET_JSON: &str = "spritesheet.json";
pub const MAP_JSON: &str = "map.json";

/// One artifact that could not be written.
#[derive(Debug)]
pub struct ExportFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<ExportFailure>,
}

impl ExportReport {
    fn record(&mut self, path: PathBuf, write: impl FnOnce(&Path) -> Result<()>) {
        match write(&path) {
            Ok(()) => {
                tracing::debug!("Wrote {:?}", path);
                self.written.push(path);
            }
            Err(error) => {
                tracing::error!("Failed to export {:?}: {:#}", path, error);
                self.failures.push(ExportFailure { path, error });
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

fn write_json(path: &Path, json: serde_json::Result<String>) -> Result<()> {
    let json = json.context("Failed to serialize document")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write JSON: {:?}", path))
}

/// Write all artifacts of `conversion` under `output_dir`.
pub fn export_all(conversion: &Conversion, output_dir: &Path, map_name: &str) -> ExportReport {
    let mut report = ExportReport::default();

    if let Err(error) = std::fs::create_dir_all(output_dir) {
        report.failures.push(ExportFailure {
            path: output_dir.to_path_buf(),
            error: anyhow::Error::new(error).context("Failed to create output directory"),
        });
        return report;
    }

    report.record(output_dir.join(MAP_PNG), |path| {
        save_indexed(&conversion.map_image(), path)
    });
    report.record(output_dir.join(ATLAS_PNG), |path| {
        save_rgba(conversion.atlas_image(), path)
    });

    let sprites_dir = output_dir.join(SPRITES_DIR);
    let mut sprite_count = 0;
    for id in conversion.available_sprite_ids() {
        report.record(sprites_dir.join(sprite_filename(id)), |path| {
            save_indexed(&conversion.sprite_image(id), path)
        });
        sprite_count += 1;
    }

    let bands = conversion.sprite_bands();
    for band in &bands {
        report.record(
            sprites_dir.join(format!("section_{}.png", band.index)),
            |path| save_indexed(&band.image, path),
        );
    }
    tracing::info!(
        "Saved {} sprites and {} sections into {:?}",
        sprite_count,
        bands.len(),
        sprites_dir
    );

    report.record(output_dir.join(SHEET_PNG), |path| {
        save_rgba(conversion.sheet_image(), path)
    });

    let atlas_doc = conversion.atlas_document();
    report.record(output_dir.join(SHEET_JSON), |path| {
        write_json(path, atlas_doc.to_json())
    });
    tracing::info!(
        "Sprite atlas: {} sprites ({} used)",
        atlas_doc.sprites.len(),
        atlas_doc.used_count()
    );

    let map_doc = conversion.tilemap_document(map_name);
    report.record(output_dir.join(MAP_JSON), |path| {
        write_json(path, map_doc.to_json())
    });
    tracing::info!(
        "Tile map: {}x{} tiles, {} cells",
        map_doc.width,
        map_doc.height,
        map_doc.cells.len()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use p8_common::DualPurposeOptions;
    use tempfile::tempdir;

    fn zero_cart() -> String {
        let mut text = String::from("__gfx__\n");
        for _ in 0..128 {
            text.push_str(&"0".repeat(128));
            text.push('\n');
        }
        text.push_str("__map__\n");
        for _ in 0..32 {
            text.push_str(&"0".repeat(256));
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_export_writes_all_artifacts() {
        let dir = tempdir().expect("Failed to create temp dir");
        let conversion = Conversion::run(&zero_cart(), DualPurposeOptions::default()).unwrap();

        let report = export_all(&conversion, dir.path(), "zero");
        assert!(report.is_success(), "{:?}", report.failures);
        // map, atlas, 256 sprites, 4 sections, sheet, 2 documents
        assert_eq!(report.written.len(), 2 + 256 + 4 + 1 + 2);

        for name in [MAP_PNG, ATLAS_PNG, SHEET_PNG, SHEET_JSON, MAP_JSON] {
            assert!(dir.path().join(name).exists(), "{} missing", name);
        }
        assert!(dir.path().join("sprites/sprite_255.png").exists());
        assert!(dir.path().join("sprites/section_3.png").exists());
    }

    #[test]
    fn test_export_with_both_bands() {
        let dir = tempdir().expect("Failed to create temp dir");
        let conversion = Conversion::run(&zero_cart(), DualPurposeOptions::new(true, true)).unwrap();

        let report = export_all(&conversion, dir.path(), "zero");
        assert!(report.is_success());
        assert!(dir.path().join("sprites/sprite_127.png").exists());
        assert!(!dir.path().join("sprites/sprite_128.png").exists());
        assert!(!dir.path().join("sprites/section_2.png").exists());
    }

    #[test]
    fn test_failed_artifact_does_not_stop_export() {
        let dir = tempdir().expect("Failed to create temp dir");
        // A plain file where the sprites directory should go
        std::fs::write(dir.path().join(SPRITES_DIR), b"blocked").unwrap();
        let conversion = Conversion::run(&zero_cart(), DualPurposeOptions::default()).unwrap();

        let report = export_all(&conversion, dir.path(), "zero");
        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 256 + 4);
        assert!(dir.path().join(MAP_PNG).exists());
        assert!(dir.path().join(SHEET_PNG).exists());
        assert!(dir.path().join(MAP_JSON).exists());
    }
}
