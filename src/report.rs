use std::path::Path;

use crate::patch::InjectOutcome;
use crate::pipeline::PatchOutcome;

const RULE: &str = "==================================================";
const TITLE: &str = "Excel 导入字段映射修复 / Excel import field-mapping fix";

pub fn print_banner() {
    println!("{RULE}");
    println!("{TITLE}");
    println!("{RULE}");
}

pub fn inputs_ok() {
    println!("✓ 文件检查通过 / input files located");
}

pub fn backed_up(path: &Path) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("✓ 原文件已备份到 / original backed up to: {name}");
}

pub fn print_summary() {
    println!("✓ 字段映射已更新 / field mappings updated");
    println!();
    println!("修复内容 / applied fixes:");
    println!("  1. 添加了缺失的字段映射 / added the missing field mappings");
    println!("  2. 修正了字段名不匹配的问题 / corrected mismatched field names");
    println!("  3. 修正了字段错位问题 / corrected misaligned fields");
    println!("  4. 添加了 transformBoolean 工具函数 / added the transformBoolean helper");
    println!();
    println!("{RULE}");
    println!("修复完成! / fix complete!");
    println!("{RULE}");
    println!();
    println!("下一步操作 / next steps:");
    println!("  1. 检查修复后的文件 / review the patched file");
    println!("  2. 重启前端服务以应用更改 / restart the frontend dev server");
    println!("  3. 重新导入Excel数据 / re-import the Excel data");
}

pub fn print_check_summary(outcome: &PatchOutcome) {
    if outcome.changed {
        println!("检查结果: 目标文件将被修改 / check result: the target file would change");
    } else {
        println!("检查结果: 目标文件无需修改 / check result: the target file is already up to date");
    }
    let helper_line = match outcome.helper {
        InjectOutcome::Inserted => "transformBoolean 函数将被插入 / the transformBoolean helper would be inserted",
        InjectOutcome::AlreadyPresent => "transformBoolean 函数已存在 / the transformBoolean helper is already present",
        InjectOutcome::AnchorMissing => "未找到插入位置, transformBoolean 不会插入 / no insertion point, the helper would not be inserted",
    };
    println!("  - {helper_line}");
    println!("  - 未写入任何文件 / no files were written");
}
