//! 検証結果とPFプレビューの表示

use crate::error::Result;
use cpn_common::{InvalidRow, PairingRow};
use std::path::Path;

const LINE_HEADER: &str = "Ligne";
const VALUE_HEADER: &str = "Réf. interne";

/// 不正行の一覧表
pub fn format_invalid_rows(rows: &[InvalidRow]) -> String {
    let line_width = rows
        .iter()
        .map(|r| r.row.to_string().len())
        .max()
        .unwrap_or(0)
        .max(LINE_HEADER.len());

    let mut out = format!("  {:>width$}  {}\n", LINE_HEADER, VALUE_HEADER, width = line_width);
    for row in rows {
        let value = if row.value.is_empty() { "(vide)" } else { row.value.as_str() };
        out.push_str(&format!("  {:>width$}  {}\n", row.row, value, width = line_width));
    }
    out
}

pub fn print_invalid_rows(rows: &[InvalidRow]) {
    println!(
        "❌ {} Réf. interne invalide(s)（数字8桁ちょうどである必要があります）",
        rows.len()
    );
    print!("{}", format_invalid_rows(rows));
}

/// 不正行をJSONで保存
pub fn write_invalid_report(rows: &[InvalidRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// PF先頭n行のプレビュー（タブ区切り）
pub fn format_preview(rows: &[PairingRow], limit: usize) -> Vec<String> {
    rows.iter()
        .take(limit)
        .map(|r| r.as_record().join("\t"))
        .collect()
}

/// プレビュー表示用の行（件数超過時は残り行数を付ける）
pub fn preview_lines(rows: &[PairingRow], limit: usize) -> Vec<String> {
    if rows.is_empty() {
        return vec!["(PFは空です)".to_string()];
    }

    let mut lines = format_preview(rows, limit);
    if rows.len() > limit {
        lines.push(format!("...（残り{}行）", rows.len() - limit));
    }
    lines
}

pub fn print_preview(rows: &[PairingRow], limit: usize) {
    for line in preview_lines(rows, limit) {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn invalid(row: usize, value: &str) -> InvalidRow {
        InvalidRow { row, value: value.to_string() }
    }

    #[test]
    fn test_format_invalid_rows() {
        let text = format_invalid_rows(&[invalid(2, "1234567"), invalid(120, "")]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  Ligne  Réf. interne");
        assert_eq!(lines[1], "      2  1234567");
        assert_eq!(lines[2], "    120  (vide)");
    }

    #[test]
    fn test_write_invalid_report() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("reports").join("invalid.json");

        write_invalid_report(&[invalid(3, "abc")], &path).unwrap();

        let loaded: Vec<InvalidRow> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, vec![invalid(3, "abc")]);
    }

    #[test]
    fn test_format_preview() {
        let rows: Vec<PairingRow> = (0..7)
            .map(|i| PairingRow::new("12345678", format!("C{}", i)))
            .collect();

        let preview = format_preview(&rows, 5);
        assert_eq!(preview.len(), 5);
        assert_eq!(preview[0], "12345678\tC0\t12345678");
    }

    #[test]
    fn test_preview_lines_zero_limit() {
        let rows = vec![
            PairingRow::new("12345678", "C1"),
            PairingRow::new("12345678", "C2"),
        ];

        assert_eq!(preview_lines(&rows, 0), vec!["...（残り2行）"]);
        assert_eq!(preview_lines(&[], 5), vec!["(PFは空です)"]);
    }

    #[test]
    fn test_preview_lines_remaining() {
        let rows: Vec<PairingRow> = (0..3)
            .map(|i| PairingRow::new("12345678", format!("C{}", i)))
            .collect();

        let lines = preview_lines(&rows, 2);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "...（残り1行）");
        assert_eq!(preview_lines(&rows, 3).len(), 3);
    }
}
