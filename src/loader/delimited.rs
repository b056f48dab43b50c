use crate::error::{CpnError, Result};
use cpn_common::{Cell, Table};

/// デコード済みテキストを区切りテキストとして解析
///
/// 1行目はヘッダー。列数が揃わない行も受け付け、`Table::new` で幅を揃える。
pub fn parse_delimited(text: &str, delimiter: u8, source: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() {
        return Err(CpnError::EmptyTable(source.to_string()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            tracing::warn!(
                file = %source,
                line = record.position().map(|p| p.line()).unwrap_or(0),
                fields = record.len(),
                "row has more fields than header, extra fields ignored"
            );
        }

        let row: Vec<Cell> = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Table::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let table = parse_delimited("ref,client\n12345678,C1\n87654321,C2\n", b',', "t.csv").unwrap();

        assert_eq!(table.headers, vec!["ref", "client"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][0].as_deref(), Some("87654321"));
    }

    #[test]
    fn test_leading_zeros_kept_as_text() {
        let table = parse_delimited("ref\n00000001\n", b',', "t.csv").unwrap();
        assert_eq!(table.rows[0][0].as_deref(), Some("00000001"));
    }

    #[test]
    fn test_empty_fields_are_null() {
        let table = parse_delimited("a,b\n,x\n1\n", b',', "t.csv").unwrap();

        assert_eq!(table.rows[0], vec![None, Some("x".to_string())]);
        assert_eq!(table.rows[1], vec![Some("1".to_string()), None]);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let table = parse_delimited("ref;client\n12345678;C1\n", b';', "t.csv").unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.rows[0][1].as_deref(), Some("C1"));
    }

    #[test]
    fn test_quoted_fields() {
        let table = parse_delimited("ref,name\n12345678,\"Dupont, SA\"\n", b',', "t.csv").unwrap();
        assert_eq!(table.rows[0][1].as_deref(), Some("Dupont, SA"));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_delimited("", b',', "empty.csv").unwrap_err();
        assert!(matches!(err, CpnError::EmptyTable(_)));
    }
}
