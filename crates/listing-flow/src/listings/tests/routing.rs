use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::listings::display::Formatter;
use crate::listings::domain::FlowType;
use crate::listings::router::{
    flow_handler, listing_router, render_handler, validate_handler, RenderRequest,
};

#[tokio::test]
async fn flow_handler_reports_detection_signal() {
    let payload = json!({
        "propertyDetails": {
            "flow": { "flowType": "land_sale" },
            "steps": { "res_rent_basic_details": {} }
        }
    });

    let Json(response) = flow_handler(Json(payload)).await;
    assert_eq!(response.flow_type, FlowType::LandSale);
    assert_eq!(response.flow_label, FlowType::LandSale.label());
}

#[tokio::test]
async fn validate_handler_uses_path_step() {
    let Json(result) = validate_handler(
        Path("res_rent_location".to_string()),
        Json(location_form("")),
    )
    .await;

    assert!(!result.is_valid);
    assert_eq!(result.rule_set, "res_rent_location");
}

#[tokio::test]
async fn render_handler_echoes_field_key() {
    let Json(response) = render_handler(
        State(Arc::new(Formatter::default())),
        Json(RenderRequest {
            field_key: "expectedPrice".to_string(),
            value: json!(1500000),
        }),
    )
    .await;

    assert_eq!(response.field_key, "expectedPrice");
    assert_eq!(response.display, "₹15,00,000");
}

#[tokio::test]
async fn flow_route_accepts_null_payload() {
    let router = listing_router(Arc::new(Formatter::default()));

    let response = router
        .oneshot(json_request("/api/v1/listings/flow", &json!(null)))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["flow_type"], "residential_rent");
    assert_eq!(payload["signal"], "default");
}

#[tokio::test]
async fn validate_route_returns_field_errors() {
    let router = listing_router(Arc::new(Formatter::default()));

    let response = router
        .oneshot(json_request(
            "/api/v1/listings/steps/res_rent_location/validate",
            &location_form(""),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["is_valid"], false);
    assert_eq!(payload["errors"]["address"], "Address is required");
}

#[tokio::test]
async fn render_route_defaults_missing_value_to_null() {
    let router = listing_router(Arc::new(Formatter::default()));

    let response = router
        .oneshot(json_request(
            "/api/v1/listings/fields/render",
            &json!({ "field_key": "availableFrom" }),
        ))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["display"], "Not specified");
}

#[tokio::test]
async fn view_route_renders_property_summary() {
    let router = listing_router(Arc::new(Formatter::default()));
    let record = serde_json::to_value(rent_record()).expect("record serializes");

    let response = router
        .oneshot(json_request("/api/v1/listings/view", &record))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["headline_price"], "₹22,000");
    assert_eq!(payload["flow"], "residential_rent");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let router = listing_router(Arc::new(Formatter::default()));

    let request = axum::http::Request::post("/api/v1/listings/flow")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .expect("request builds");
    let response = router.oneshot(request).await.expect("route executes");

    assert!(response.status().is_client_error());
}
