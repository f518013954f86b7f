use std::collections::BTreeMap;

use crate::shared::tabular::TabularDocument;

use super::error::ReportError;
use super::normalizer::{normalize, ExclusionSet};

/// Обязательная колонка входного файла
pub const SELLER_ARTICLE_COLUMN: &str = "Артикул продавца";

/// Суммы по каноническим артикулам. BTreeMap даёт детерминированный
/// порядок вывода — по возрастанию артикула.
pub type AggregatedReport = BTreeMap<String, i64>;

/// Сворачивает строки файла в суммы по артикулам.
///
/// Всё или ничего: одна неразборная строка — и весь файл отклоняется,
/// частичный отчёт не строится. Порядок строк на результат не влияет.
pub fn aggregate(
    doc: &TabularDocument,
    exclusions: &ExclusionSet,
) -> Result<AggregatedReport, ReportError> {
    let column = doc
        .column_index(SELLER_ARTICLE_COLUMN)
        .ok_or_else(|| ReportError::MissingColumn {
            column: SELLER_ARTICLE_COLUMN.to_string(),
        })?;

    let mut report = AggregatedReport::new();
    for row in 0..doc.row_count() {
        let line = normalize(doc.cell(row, column), exclusions)?;
        *report.entry(line.article).or_insert(0) += line.quantity;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(codes: &[&str]) -> TabularDocument {
        TabularDocument {
            headers: vec![SELLER_ARTICLE_COLUMN.to_string()],
            rows: codes.iter().map(|c| vec![c.to_string()]).collect(),
        }
    }

    #[test]
    fn test_groups_and_sums_by_canonical_article() {
        let report = aggregate(
            &doc(&["123-2", "123-3", "456", "123-45-3", "123-45-1"]),
            &ExclusionSet::default(),
        )
        .unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report["123"], 5);
        assert_eq!(report["123-45"], 4);
        assert_eq!(report["456"], 1);
    }

    #[test]
    fn test_row_order_does_not_change_result() {
        let ex = ExclusionSet::default();
        let a = aggregate(&doc(&["123-2", "456-1", "123-3", "789"]), &ex).unwrap();
        let b = aggregate(&doc(&["789", "123-3", "123-2", "456-1"]), &ex).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_is_in_ascending_article_order() {
        let report = aggregate(&doc(&["b-1", "a-1", "c-1"]), &ExclusionSet::default()).unwrap();
        let keys: Vec<&String> = report.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_missing_column_fails_before_rows() {
        let doc = TabularDocument {
            headers: vec!["Другая колонка".to_string()],
            rows: vec![vec!["123-abc".to_string()]],
        };
        // Ошибка именно про колонку, до разбора заведомо битой строки
        assert_eq!(
            aggregate(&doc, &ExclusionSet::default()),
            Err(ReportError::MissingColumn {
                column: SELLER_ARTICLE_COLUMN.to_string()
            })
        );
    }

    #[test]
    fn test_single_bad_row_rejects_whole_batch() {
        let result = aggregate(&doc(&["123-2", "oops-xx", "456-1"]), &ExclusionSet::default());
        assert_eq!(
            result,
            Err(ReportError::InvalidQuantitySegment {
                code: "oops-xx".to_string()
            })
        );
    }

    #[test]
    fn test_exclusions_feed_aggregation() {
        let ex = ExclusionSet::new(["709421-1"]);
        let report = aggregate(&doc(&["709421-1", "709421-1", "709421-2"]), &ex).unwrap();
        assert_eq!(report["709421-1"], 2);
        assert_eq!(report["709421"], 2);
    }

    #[test]
    fn test_empty_input_is_empty_report() {
        let report = aggregate(&doc(&[]), &ExclusionSet::default()).unwrap();
        assert!(report.is_empty());
    }
}
