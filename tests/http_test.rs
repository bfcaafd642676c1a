/// HTTP-level tests: routes, rendered page content, JSON endpoints.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use nyc311_dashboard::handlers;

mod common;
use common::{test_config, GRAND_TOTAL, TEST_PLOTLY_SRC};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_config()))
                .service(actix_files::Files::new("/static", "./static"))
                .configure(handlers::configure)
                .default_service(web::to(handlers::not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_root_redirects_to_dashboard() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("Location").unwrap(), "/dashboard");
}

#[actix_web::test]
async fn test_dashboard_renders_every_section() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).expect("utf8 body");

    assert!(html.contains("NYC 311 Service Requests"));
    assert!(html.contains("December 2025"));
    assert!(html.contains("332,102"));
    assert!(html.contains("10,713 daily avg"));
    assert!(html.contains("90.7%"));
    assert!(html.contains("+53%"));
    assert!(html.contains("-42%"));
    for section in [
        "Complaint Analysis",
        "Response Performance",
        "Temporal Patterns",
        "Geographic Distribution",
    ] {
        assert!(html.contains(section), "missing section {section}");
    }
    for id in [
        "fig-daily-trend",
        "fig-complaints",
        "fig-channels",
        "fig-agencies",
        "fig-boroughs",
        "fig-weekly-heatmap",
        "fig-weekday-average",
        "fig-borough-top-issue",
    ] {
        assert!(html.contains(id), "missing chart container {id}");
    }
    assert!(html.contains(&format!(r#"<script src="{TEST_PLOTLY_SRC}""#)));
    assert!(html.contains("December 1-31, 2025"));
    // Status and borough tables
    assert!(html.contains("19,468"));
    assert!(html.contains("<strong>2.9 hrs</strong>"));
}

#[actix_web::test]
async fn test_static_stylesheet_is_served() {
    let app = init_app!();
    let html_req = test::TestRequest::get().uri("/dashboard").to_request();
    let html_body = test::call_and_read_body(&app, html_req).await;
    let html = std::str::from_utf8(&html_body).expect("utf8 body");
    assert!(html.contains("/static/dashboard.css"));

    let req = test::TestRequest::get().uri("/static/dashboard.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/css"), "{content_type}");
}

#[actix_web::test]
async fn test_dashboard_embeds_figure_json() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).expect("utf8 body");

    let start = html.find("const FIGURES = ").expect("figure script") + "const FIGURES = ".len();
    let end = start + html[start..].find(";\n").expect("statement end");
    let figures: Value = serde_json::from_str(&html[start..end]).expect("valid JSON");
    assert_eq!(figures.as_array().unwrap().len(), 8);
    assert_eq!(figures[0]["id"], "daily-trend");
}

#[actix_web::test]
async fn test_figure_list_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/figures").to_request();
    let figures: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<&str> = figures
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "daily-trend",
            "complaints",
            "channels",
            "agencies",
            "boroughs",
            "weekly-heatmap",
            "weekday-average",
            "borough-top-issue",
        ]
    );
}

#[actix_web::test]
async fn test_single_figure_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/figures/weekly-heatmap").to_request();
    let figure: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(figure["data"][0]["type"], "heatmap");
    assert_eq!(figure["layout"]["height"], 220);
}

#[actix_web::test]
async fn test_unknown_figure_is_404_json() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/figures/pie").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Figure not found");
}

#[actix_web::test]
async fn test_consistency_endpoint() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/consistency").to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report["grand_total"], GRAND_TOTAL);
    assert_eq!(report["daily_total"], GRAND_TOTAL);
    assert_eq!(report["issues"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_unknown_route_serves_404_page() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Page not found"));
}
