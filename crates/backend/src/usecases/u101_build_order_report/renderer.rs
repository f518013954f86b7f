use super::aggregator::AggregatedReport;

/// Формирует текст отчёта: по строке на артикул, "<артикул> <кол-во>шт",
/// без завершающего перевода строки. Пустой отчёт — пустая строка.
pub fn render(report: &AggregatedReport) -> String {
    report
        .iter()
        .map(|(article, quantity)| format!("{} {}шт", article, quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_shape() {
        let mut report = AggregatedReport::new();
        report.insert("123".to_string(), 5);
        report.insert("123-45".to_string(), 2);

        assert_eq!(render(&report), "123 5шт\n123-45 2шт");
    }

    #[test]
    fn test_render_empty_report() {
        assert_eq!(render(&AggregatedReport::new()), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut report = AggregatedReport::new();
        report.insert("b".to_string(), 1);
        report.insert("a".to_string(), 2);

        let first = render(&report);
        let second = render(&report);
        assert_eq!(first, second);
        assert_eq!(first, "a 2шт\nb 1шт");
    }
}
