use actix_web::HttpResponse;

use crate::errors::AppError;
use crate::models::{consistency, Dataset};

/// GET /api/consistency - arithmetic cross-checks over the embedded tables
pub async fn report() -> Result<HttpResponse, AppError> {
    let data = Dataset::load()?;
    let report = consistency::check(&data);
    if !report.is_consistent() {
        log::warn!("{} consistency issue(s) in embedded tables", report.issues.len());
    }
    Ok(HttpResponse::Ok().json(report))
}
