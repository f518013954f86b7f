use anyhow::{Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// Табличный документ в нормализованном виде: строка заголовков плюс строки
/// данных, все ячейки приведены к строкам. Общий вход для xlsx и csv.
#[derive(Debug, Clone)]
pub struct TabularDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TabularDocument {
    /// Индекс колонки по точному имени заголовка (заголовки при чтении
    /// обрезаются по краям)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Значение ячейки; для коротких строк (flexible csv) — пустая строка
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Читает первый лист xlsx/xls из байтов файла
    pub fn from_xlsx_bytes(bytes: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut workbook =
            open_workbook_auto_from_rs(cursor).context("Failed to open workbook")?;

        let range = workbook
            .worksheet_range_at(0)
            .context("Workbook has no sheets")?
            .context("Failed to read first sheet")?;

        let mut rows_iter = range.rows();
        let headers = match rows_iter.next() {
            Some(header_row) => header_row
                .iter()
                .map(|c| cell_to_string(c).trim().to_string())
                .collect(),
            None => Vec::new(),
        };

        let rows = rows_iter
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        Ok(Self { headers, rows })
    }

    /// Читает csv из байтов файла (UTF-8, допускается BOM)
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).context("CSV is not valid UTF-8")?;
        // Strip UTF-8 BOM if present
        let text = text.trim_start_matches('\u{FEFF}');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .context("Failed to read CSV headers")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.context("Failed to read CSV record")?;
            rows.push(record.iter().map(|v| v.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }
}

/// Приводит ячейку xlsx к строке так, как её видит человек в таблице:
/// целые числовые ячейки — без дробного хвоста ("709421" вместо "709421.0")
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_with_bom_and_header_lookup() {
        let csv = "\u{FEFF}Артикул продавца;extra\n123-7;x\n";
        // Наши выгрузки используют запятую; точка с запятой здесь — обычная ячейка
        let doc = TabularDocument::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(doc.headers, vec!["Артикул продавца;extra".to_string()]);

        let csv = "\u{FEFF}Артикул продавца,Количество\n123-7,1\n456,2\n";
        let doc = TabularDocument::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(doc.column_index("Артикул продавца"), Some(0));
        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.cell(0, 0), "123-7");
        assert_eq!(doc.cell(1, 1), "2");
    }

    #[test]
    fn test_csv_short_rows_read_as_empty_cells() {
        let csv = "a,b\n1\n2,3\n";
        let doc = TabularDocument::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(doc.cell(0, 1), "");
        assert_eq!(doc.cell(1, 1), "3");
    }

    #[test]
    fn test_missing_column_lookup() {
        let csv = "Другая колонка\nx\n";
        let doc = TabularDocument::from_csv_bytes(csv.as_bytes()).unwrap();
        assert_eq!(doc.column_index("Артикул продавца"), None);
    }

    #[test]
    fn test_cell_to_string_coercion() {
        assert_eq!(cell_to_string(&Data::String("709421-1".into())), "709421-1");
        assert_eq!(cell_to_string(&Data::Float(709421.0)), "709421");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
