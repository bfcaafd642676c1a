use actix_web::{web, HttpResponse};

use crate::charts::{self, FigureId};
use crate::errors::AppError;
use crate::models::Dataset;
use crate::templates_structs::ApiErrorResponse;

/// GET /api/figures - every chart on the page, in page order
pub async fn list() -> Result<HttpResponse, AppError> {
    let data = Dataset::load()?;
    Ok(HttpResponse::Ok().json(charts::build_all(&data)))
}

/// GET /api/figures/{id} - a single chart
pub async fn show(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let Ok(figure_id) = id.parse::<FigureId>() else {
        log::debug!("Unknown figure id requested: {id}");
        return Ok(HttpResponse::NotFound().json(ApiErrorResponse {
            error: "Figure not found".to_string(),
            details: Some(format!("no figure with id '{id}'")),
        }));
    };
    let data = Dataset::load()?;
    Ok(HttpResponse::Ok().json(figure_id.build(&data)))
}
