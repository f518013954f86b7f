use std::collections::HashSet;

use super::error::ReportError;

/// Артикулы, чей собственный код содержит дефисы и не должен разбираться
/// по общему правилу "хвост после дефиса — количество". Неизменяемый набор,
/// задаётся конфигурацией при старте.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    codes: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}

/// Разобранная строка заказа: канонический артикул и количество
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub article: String,
    pub quantity: i64,
}

/// Разбирает код продавца в (артикул, количество).
///
/// Правила, порядок важен:
/// 1. Код из списка исключений остаётся как есть, количество 1.
/// 2. Ровно два дефиса: артикул — первые два сегмента через дефис,
///    количество — третий сегмент.
/// 3. Ровно один дефис: артикул — первый сегмент, количество — второй.
/// 4. Иначе (ноль дефисов или три и больше): код как есть, количество 1.
///
/// Нечисловой сегмент количества — ошибка для этой строки; всё остальное
/// в кодах не валидируется, это данные "как прислал продавец".
pub fn normalize(code: &str, exclusions: &ExclusionSet) -> Result<ParsedLine, ReportError> {
    if exclusions.contains(code) {
        return Ok(ParsedLine {
            article: code.to_string(),
            quantity: 1,
        });
    }

    match code.matches('-').count() {
        2 => {
            let parts: Vec<&str> = code.split('-').collect();
            Ok(ParsedLine {
                article: format!("{}-{}", parts[0], parts[1]),
                quantity: parse_quantity(parts[2], code)?,
            })
        }
        1 => {
            let parts: Vec<&str> = code.split('-').collect();
            Ok(ParsedLine {
                article: parts[0].to_string(),
                quantity: parse_quantity(parts[1], code)?,
            })
        }
        _ => Ok(ParsedLine {
            article: code.to_string(),
            quantity: 1,
        }),
    }
}

fn parse_quantity(segment: &str, code: &str) -> Result<i64, ReportError> {
    segment
        .trim()
        .parse::<i64>()
        .map_err(|_| ReportError::InvalidQuantitySegment {
            code: code.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exclusions() -> ExclusionSet {
        ExclusionSet::new([
            "709598-1", "709596-1", "709597-1", "709421-1", "709540-1", "709301-1",
        ])
    }

    fn parsed(article: &str, quantity: i64) -> ParsedLine {
        ParsedLine {
            article: article.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_excluded_codes_kept_verbatim_with_quantity_one() {
        let ex = exclusions();
        for code in [
            "709598-1", "709596-1", "709597-1", "709421-1", "709540-1", "709301-1",
        ] {
            assert_eq!(normalize(code, &ex).unwrap(), parsed(code, 1));
        }
    }

    #[test]
    fn test_two_dashes_split_article_and_quantity() {
        assert_eq!(
            normalize("123-45-3", &exclusions()).unwrap(),
            parsed("123-45", 3)
        );
    }

    #[test]
    fn test_one_dash_split() {
        assert_eq!(normalize("123-7", &exclusions()).unwrap(), parsed("123", 7));
        // Не входит в исключения — разбирается по общему правилу
        assert_eq!(
            normalize("709421-2", &exclusions()).unwrap(),
            parsed("709421", 2)
        );
    }

    #[test]
    fn test_no_dash_is_unit_quantity() {
        assert_eq!(normalize("123", &exclusions()).unwrap(), parsed("123", 1));
    }

    #[test]
    fn test_three_or_more_dashes_kept_verbatim() {
        assert_eq!(
            normalize("1-2-3-4", &exclusions()).unwrap(),
            parsed("1-2-3-4", 1)
        );
    }

    #[test]
    fn test_non_numeric_quantity_segment_is_error() {
        assert_eq!(
            normalize("123-abc", &exclusions()),
            Err(ReportError::InvalidQuantitySegment {
                code: "123-abc".to_string()
            })
        );
        assert_eq!(
            normalize("12-34-x", &exclusions()),
            Err(ReportError::InvalidQuantitySegment {
                code: "12-34-x".to_string()
            })
        );
    }

    #[test]
    fn test_empty_exclusion_set() {
        let ex = ExclusionSet::default();
        assert_eq!(normalize("709421-1", &ex).unwrap(), parsed("709421", 1));
    }
}
