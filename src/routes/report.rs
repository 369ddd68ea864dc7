use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::error;

use crate::report::{generate_sample_report, REPORT_FILENAME};

pub fn router() -> Router {
    Router::new().route("/api/report", get(download_report))
}

/// GET /api/report - Sample certificate report as a PDF attachment
async fn download_report() -> Response {
    match generate_sample_report() {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime::APPLICATION_PDF.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", REPORT_FILENAME),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to generate report: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.to_string())],
                "Failed to generate report",
            )
                .into_response()
        }
    }
}
