use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;
use once_cell::sync::Lazy;

use contracts::usecases::common::{UseCaseError, UseCaseMetadata};
use contracts::usecases::u101_build_order_report::{BuildOrderReport, BuildReportResponse};
use contracts::usecases::u102_report_history::{HistoryResponse, ReportHistory};

use crate::shared::tabular::TabularDocument;
use crate::shared::{config, history};
use crate::usecases::u101_build_order_report::{BuildReportExecutor, ExclusionSet};
use crate::usecases::u102_report_history::HistoryExecutor;

type ApiError = (StatusCode, Json<UseCaseError>);

// ============================================================================
// UseCase u101: Build order report
// ============================================================================

static REPORT_EXECUTOR: Lazy<BuildReportExecutor> = Lazy::new(|| {
    let config = config::get();
    BuildReportExecutor::new(
        ExclusionSet::new(config.parsing.excluded_articles.iter().cloned()),
        history::store(),
    )
});

/// POST /api/u101/build-report
///
/// Multipart с полем "file": файл заказов (.xlsx/.xls/.csv). В ответ —
/// готовый текст отчёта; он же дописан в журнал.
pub async fn u101_build_report(
    mut multipart: Multipart,
) -> Result<Json<BuildReportResponse>, ApiError> {
    let (file_name, bytes) = read_file_field(&mut multipart).await?;
    tracing::info!(
        "{}: получен файл {} ({} байт)",
        BuildOrderReport::full_name(),
        file_name,
        bytes.len()
    );

    let doc = parse_document(&file_name, &bytes)?;

    match REPORT_EXECUTOR.execute(&doc) {
        Ok(response) => Ok(Json(response)),
        // MissingColumn и InvalidQuantitySegment — негодный вход, не 500
        Err(e) => {
            tracing::error!("Ошибка обработки файла {}: {}", file_name, e);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(UseCaseError::validation(e.to_string()).with_details(file_name)),
            ))
        }
    }
}

/// Достаёт из multipart первое файловое поле
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            tracing::error!("Ошибка чтения multipart: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(UseCaseError::validation("Некорректный multipart запрос")),
            )
        })?;

        let Some(field) = field else {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(UseCaseError::validation(
                    "В запросе нет файла (ожидается поле \"file\")",
                )),
            ));
        };

        if field.file_name().is_none() && field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("report.xlsx").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!("Ошибка загрузки файла: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    Json(UseCaseError::validation("Не удалось прочитать файл из запроса")),
                )
            })?
            .to_vec();

        return Ok((file_name, bytes));
    }
}

/// Выбирает парсер по расширению файла (аналог проверки mime у исходного
/// транспорта): xlsx/xls — Excel, csv — текстовая выгрузка
fn parse_document(file_name: &str, bytes: &[u8]) -> Result<TabularDocument, ApiError> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let parsed = match extension.as_deref() {
        Some("xlsx") | Some("xls") => TabularDocument::from_xlsx_bytes(bytes),
        Some("csv") => TabularDocument::from_csv_bytes(bytes),
        _ => {
            return Err((
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(UseCaseError::validation(
                    "Пожалуйста, отправьте Excel файл (.xlsx) или csv",
                )),
            ))
        }
    };

    parsed.map_err(|e| {
        tracing::error!("Не удалось разобрать файл {}: {:#}", file_name, e);
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(
                UseCaseError::validation("Не удалось прочитать табличный файл")
                    .with_details(format!("{:#}", e)),
            ),
        )
    })
}

// ============================================================================
// UseCase u102: Report history
// ============================================================================

static HISTORY_EXECUTOR: Lazy<HistoryExecutor> =
    Lazy::new(|| HistoryExecutor::new(history::store(), config::get().history.max_chars));

/// GET /api/u102/history
pub async fn u102_history() -> Result<Json<HistoryResponse>, ApiError> {
    tracing::info!("{}: запрошена история", ReportHistory::full_name());
    match HISTORY_EXECUTOR.execute() {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Ошибка чтения истории: {:#}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UseCaseError::internal("Не удалось прочитать историю отчётов")),
            ))
        }
    }
}
