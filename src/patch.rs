use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

pub const TRANSFORM_BOOLEAN_SENTINEL: &str = "function transformBoolean";
pub const INJECTION_ANCHOR: &str = "function transformLogisticsStatus";

// Booleans arrive from Excel as empty cells, 0/1 numbers, or localized
// yes/no strings; the injected helper normalizes all of them.
pub const TRANSFORM_BOOLEAN_FN: &str = "function transformBoolean(value: any): boolean {
  if (value === null || value === undefined || value === '') return false
  if (typeof value === 'boolean') return value
  if (typeof value === 'number') return value === 1
  if (typeof value === 'string') {
    return ['是', 'yes', 'true', '1', 'y'].includes(value.toLowerCase().trim())
  }
  return false
}
";

static FIXED_MAPPINGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)FIXED_FIELD_MAPPINGS: FieldMapping\[\] = \[(.*?)\];")
        .expect("fixed-mappings pattern is valid")
});

static FIELD_MAPPINGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(const FIELD_MAPPINGS: FieldMapping\[\] = \[)(.*?)(\])")
        .expect("field-mappings pattern is valid")
});

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("错误: 前端文件不存在 / frontend file not found: {}", .0.display())]
    FrontendFileMissing(PathBuf),
    #[error("错误: 修复后的映射文件不存在 / fixed mappings file not found: {}", .0.display())]
    MappingsFileMissing(PathBuf),
    #[error(
        "错误: 无法从映射文件中提取数组内容 / could not extract the FIXED_FIELD_MAPPINGS array body"
    )]
    FixedMappingsNotFound,
    #[error(
        "错误: 目标文件中没有 FIELD_MAPPINGS 数组声明 / no FIELD_MAPPINGS array declaration in the target file"
    )]
    FieldMappingsNotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    Inserted,
    AlreadyPresent,
    AnchorMissing,
}

/// Pull the array body out of the source-of-truth text. First match only;
/// the body ends at the first `];`.
pub fn extract_fixed_mappings(mappings_text: &str) -> Result<String, PatchError> {
    let caps = FIXED_MAPPINGS_RE
        .captures(mappings_text)
        .ok_or(PatchError::FixedMappingsNotFound)?;
    Ok(caps[1].trim().to_owned())
}

/// Swap the body of the target's FIELD_MAPPINGS declaration for `new_body`,
/// keeping the declaration header and closing bracket.
pub fn replace_field_mappings(target_text: &str, new_body: &str) -> Result<String, PatchError> {
    if !FIELD_MAPPINGS_RE.is_match(target_text) {
        return Err(PatchError::FieldMappingsNotFound);
    }
    // Closure replacement: mapping bodies may contain `$`, which must not be
    // interpreted as a capture reference.
    let replaced = FIELD_MAPPINGS_RE.replace(target_text, |caps: &Captures<'_>| {
        format!("{}\n  {}\n{}", &caps[1], new_body, &caps[3])
    });
    Ok(replaced.into_owned())
}

/// Insert the transformBoolean helper before the anchor function unless the
/// sentinel is already present. An absent anchor leaves the text unchanged.
pub fn inject_transform_boolean(text: &str) -> (String, InjectOutcome) {
    if text.contains(TRANSFORM_BOOLEAN_SENTINEL) {
        return (text.to_owned(), InjectOutcome::AlreadyPresent);
    }
    match text.find(INJECTION_ANCHOR) {
        Some(pos) => {
            let mut patched =
                String::with_capacity(text.len() + TRANSFORM_BOOLEAN_FN.len() + 2);
            patched.push_str(&text[..pos]);
            patched.push_str(TRANSFORM_BOOLEAN_FN);
            patched.push_str("\n\n");
            patched.push_str(&text[pos..]);
            (patched, InjectOutcome::Inserted)
        }
        None => (text.to_owned(), InjectOutcome::AnchorMissing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAPPINGS_FILE: &str = "\
// corrected mappings
export const FIXED_FIELD_MAPPINGS: FieldMapping[] = [
  { excelField: '集装箱号', table: 'process_containers', field: 'container_number', required: true },
  { excelField: '是否加急', table: 'process_containers', field: 'is_urgent' },
];
";

    const TARGET_FILE: &str = "\
const FIELD_MAPPINGS: FieldMapping[] = [
  { excelField: '集装箱号', table: 'containers', field: 'container_no' },
];

function transformLogisticsStatus(value: string): string {
  return value
}
";

    #[test]
    fn extracts_trimmed_body() {
        let body = extract_fixed_mappings(MAPPINGS_FILE).unwrap();
        assert!(body.starts_with("{ excelField: '集装箱号'"));
        assert!(body.ends_with("field: 'is_urgent' },"));
    }

    #[test]
    fn extraction_uses_first_declaration_only() {
        let doubled = format!("{MAPPINGS_FILE}\nconst FIXED_FIELD_MAPPINGS: FieldMapping[] = [\n  {{ excelField: 'other' }},\n];\n");
        let body = extract_fixed_mappings(&doubled).unwrap();
        assert!(body.contains("container_number"));
        assert!(!body.contains("'other'"));
    }

    #[test]
    fn extraction_failure_on_missing_declaration() {
        let err = extract_fixed_mappings("const SOMETHING_ELSE = [];").unwrap_err();
        assert!(matches!(err, PatchError::FixedMappingsNotFound));
    }

    #[test]
    fn substitution_keeps_header_and_bracket() {
        let replaced =
            replace_field_mappings(TARGET_FILE, "{ excelField: 'a', table: 't', field: 'f' },")
                .unwrap();
        assert!(replaced.contains("const FIELD_MAPPINGS: FieldMapping[] = [\n"));
        assert!(replaced.contains("{ excelField: 'a', table: 't', field: 'f' },\n];"));
        assert!(!replaced.contains("container_no"));
    }

    #[test]
    fn substitution_failure_on_missing_declaration() {
        let err = replace_field_mappings("nothing here", "{},").unwrap_err();
        assert!(matches!(err, PatchError::FieldMappingsNotFound));
    }

    #[test]
    fn dollar_signs_in_body_are_literal() {
        let replaced =
            replace_field_mappings(TARGET_FILE, "{ excelField: '金额($)', field: 'amount' },")
                .unwrap();
        assert!(replaced.contains("金额($)"));
    }

    #[test]
    fn injects_helper_before_anchor() {
        let (patched, outcome) = inject_transform_boolean(TARGET_FILE);
        assert_eq!(outcome, InjectOutcome::Inserted);
        let helper_at = patched.find(TRANSFORM_BOOLEAN_SENTINEL).unwrap();
        let anchor_at = patched.find(INJECTION_ANCHOR).unwrap();
        assert!(helper_at < anchor_at);
        assert_eq!(patched.matches(TRANSFORM_BOOLEAN_SENTINEL).count(), 1);
    }

    #[test]
    fn injection_skipped_when_sentinel_present() {
        let (patched, _) = inject_transform_boolean(TARGET_FILE);
        let (again, outcome) = inject_transform_boolean(&patched);
        assert_eq!(outcome, InjectOutcome::AlreadyPresent);
        assert_eq!(again, patched);
    }

    #[test]
    fn injection_noop_without_anchor() {
        let text = "const FIELD_MAPPINGS: FieldMapping[] = [\n];\n";
        let (patched, outcome) = inject_transform_boolean(text);
        assert_eq!(outcome, InjectOutcome::AnchorMissing);
        assert_eq!(patched, text);
    }
}
