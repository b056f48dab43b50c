//! Réf. interne × Réf. client の直積（PF）

use crate::types::{Cell, PairingRow};

/// 列から参照リストを作る
///
/// 空セル・空白のみのセルは除外し、trimした値を元の順序で返す。
pub fn reference_list(column: &[Cell]) -> Vec<String> {
    column
        .iter()
        .flatten()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect()
}

/// 直積を生成する
///
/// Réf. interne を外側、Réf. client を内側でループする。
/// 行数は常に `internal.len() * clients.len()`。重複除去はしない。
pub fn cross_join(internal: &[String], clients: &[String]) -> Vec<PairingRow> {
    let mut rows = Vec::with_capacity(internal.len() * clients.len());

    for internal_ref in internal {
        for client_ref in clients {
            rows.push(PairingRow::new(internal_ref.as_str(), client_ref.as_str()));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cross_join_order() {
        let rows = cross_join(&strings(&["00000001", "00000002"]), &strings(&["C1", "C2"]));

        let records: Vec<[&str; 3]> = rows.iter().map(|r| r.as_record()).collect();
        assert_eq!(
            records,
            vec![
                ["00000001", "C1", "00000001"],
                ["00000001", "C2", "00000001"],
                ["00000002", "C1", "00000002"],
                ["00000002", "C2", "00000002"],
            ]
        );
    }

    #[test]
    fn test_cross_join_size_and_membership() {
        let internal = strings(&["11111111", "22222222", "33333333"]);
        let clients = strings(&["A", "B", "C", "D", "E"]);
        let rows = cross_join(&internal, &clients);

        assert_eq!(rows.len(), 15);
        for (i, row) in rows.iter().enumerate() {
            let [first, second, third] = row.as_record();
            assert_eq!(first, third);
            assert_eq!(first, internal[i / clients.len()]);
            assert_eq!(second, clients[i % clients.len()]);
        }
    }

    #[test]
    fn test_cross_join_keeps_duplicates() {
        let rows = cross_join(&strings(&["12345678", "12345678"]), &strings(&["C1", "C1"]));
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.client_ref == "C1"));
    }

    #[test]
    fn test_cross_join_empty_lists() {
        assert!(cross_join(&[], &strings(&["C1"])).is_empty());
        assert!(cross_join(&strings(&["12345678"]), &[]).is_empty());
        assert!(cross_join(&[], &[]).is_empty());
    }

    #[test]
    fn test_reference_list_drops_empty_and_trims() {
        let column = vec![
            Some(" C1 ".to_string()),
            None,
            Some("   ".to_string()),
            Some("C2".to_string()),
            Some("C1".to_string()),
        ];

        assert_eq!(reference_list(&column), strings(&["C1", "C2", "C1"]));
    }
}
