use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Sibling path for the backup copy: `<file-name>.backup_<YYYYMMDD_HHMMSS>`.
pub fn backup_path(target: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let name = target
        .file_name()
        .ok_or_else(|| anyhow!("target path has no file name: {}", target.display()))?;
    let mut backup_name = name.to_os_string();
    backup_name.push(format!(".backup_{}", now.format(TIMESTAMP_FORMAT)));
    Ok(target.with_file_name(backup_name))
}

pub fn create_backup(target: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let path = backup_path(target, now)?;
    fs::copy(target, &path).with_context(|| {
        format!(
            "failed to back up {} to {}",
            target.display(),
            path.display()
        )
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn backup_name_embeds_second_precision_timestamp() {
        let now = Local.with_ymd_and_hms(2026, 2, 26, 9, 30, 5).unwrap();
        let path = backup_path(Path::new("frontend/src/views/import/ExcelImport.vue"), now).unwrap();
        assert_eq!(
            path,
            Path::new("frontend/src/views/import/ExcelImport.vue.backup_20260226_093005")
        );
    }

    #[test]
    fn backup_path_rejects_nameless_target() {
        let now = Local.with_ymd_and_hms(2026, 2, 26, 9, 30, 5).unwrap();
        assert!(backup_path(Path::new("/"), now).is_err());
    }
}
