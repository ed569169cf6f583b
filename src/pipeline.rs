use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use crate::backup;
use crate::config::{Config, Mode};
use crate::patch::{self, InjectOutcome, PatchError};
use crate::report;

#[derive(Debug)]
pub struct PatchOutcome {
    pub backup_path: Option<PathBuf>,
    pub helper: InjectOutcome,
    pub changed: bool,
}

/// Run the patch checkpoints in order: preflight, backup, read, transform,
/// write. The first failing checkpoint aborts the run; the target file is
/// only ever written as the final step. Check mode stops before the backup
/// and write steps.
pub fn run(config: &Config) -> Result<PatchOutcome> {
    if !config.frontend_file.exists() {
        return Err(PatchError::FrontendFileMissing(config.frontend_file.clone()).into());
    }
    if !config.mappings_file.exists() {
        return Err(PatchError::MappingsFileMissing(config.mappings_file.clone()).into());
    }
    report::inputs_ok();

    let backup_path = match config.mode {
        Mode::Apply => {
            let path = backup::create_backup(&config.frontend_file, Local::now())?;
            report::backed_up(&path);
            Some(path)
        }
        Mode::Check => None,
    };

    let target_text = fs::read_to_string(&config.frontend_file)
        .with_context(|| format!("failed to read {}", config.frontend_file.display()))?;
    let mappings_text = fs::read_to_string(&config.mappings_file)
        .with_context(|| format!("failed to read {}", config.mappings_file.display()))?;

    let new_body = patch::extract_fixed_mappings(&mappings_text)?;
    let substituted = patch::replace_field_mappings(&target_text, &new_body)?;
    let (final_text, helper) = patch::inject_transform_boolean(&substituted);

    if helper == InjectOutcome::AnchorMissing {
        eprintln!(
            "警告: 未找到 {} 函数, transformBoolean 未插入 / anchor function not found, helper not inserted",
            patch::INJECTION_ANCHOR
        );
    }

    let changed = final_text != target_text;
    if config.mode == Mode::Apply {
        fs::write(&config.frontend_file, &final_text)
            .with_context(|| format!("failed to write {}", config.frontend_file.display()))?;
    }

    Ok(PatchOutcome {
        backup_path,
        helper,
        changed,
    })
}
