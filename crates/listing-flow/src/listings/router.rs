use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classifier::{DetectionSignal, FlowClassifier};
use super::display::Formatter;
use super::domain::FlowType;
use super::record::PropertyRecord;
use super::validation::{FieldValidator, ValidationResult};
use super::view::PropertyView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowResponse {
    pub flow_type: FlowType,
    pub flow_label: &'static str,
    pub signal: DetectionSignal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub field_key: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResponse {
    pub field_key: String,
    pub display: String,
}

/// Router builder exposing flow detection, step validation, and display endpoints.
pub fn listing_router(formatter: Arc<Formatter>) -> Router {
    Router::new()
        .route("/api/v1/listings/flow", post(flow_handler))
        .route(
            "/api/v1/listings/steps/:step_id/validate",
            post(validate_handler),
        )
        .route("/api/v1/listings/fields/render", post(render_handler))
        .route("/api/v1/listings/view", post(view_handler))
        .with_state(formatter)
}

pub(crate) async fn flow_handler(Json(payload): Json<Value>) -> Json<FlowResponse> {
    let record = PropertyRecord::from_value(&payload);
    let detection = FlowClassifier.explain(&record);
    Json(FlowResponse {
        flow_type: detection.flow,
        flow_label: detection.flow.label(),
        signal: detection.signal,
    })
}

pub(crate) async fn validate_handler(
    Path(step_id): Path<String>,
    Json(form_data): Json<Value>,
) -> Json<ValidationResult> {
    Json(FieldValidator.validate_step(&step_id, &form_data))
}

pub(crate) async fn render_handler(
    State(formatter): State<Arc<Formatter>>,
    Json(request): Json<RenderRequest>,
) -> Json<RenderResponse> {
    let display = formatter.render(&request.value, &request.field_key);
    Json(RenderResponse {
        field_key: request.field_key,
        display,
    })
}

pub(crate) async fn view_handler(
    State(formatter): State<Arc<Formatter>>,
    Json(payload): Json<Value>,
) -> Json<PropertyView> {
    let record = PropertyRecord::from_value(&payload);
    Json(PropertyView::build_with(&record, &formatter))
}
