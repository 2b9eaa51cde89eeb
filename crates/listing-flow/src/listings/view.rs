use super::classifier::{DetectionSignal, FlowClassifier};
use super::coerce::is_blank;
use super::display::{classify_field_kind, humanize_key, FieldKind, Formatter};
use super::domain::FlowType;
use super::extract::{self, FieldLocator, LocationDetails, RoomDetails, LEGACY_SECTIONS};
use super::record::PropertyRecord;
use super::validation::rule_for;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayField {
    pub key: String,
    pub label: String,
    pub display: String,
}

/// Display-ready summary of one property record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyView {
    pub id: String,
    pub owner_id: String,
    pub flow: FlowType,
    pub flow_label: &'static str,
    pub detected_by: DetectionSignal,
    pub headline_label: &'static str,
    pub headline_price: String,
    pub location_line: String,
    pub location: LocationDetails,
    pub rooms: RoomDetails,
    pub area: String,
    pub amenities: Vec<String>,
    pub fields: Vec<DisplayField>,
}

impl PropertyView {
    pub fn build(record: &PropertyRecord) -> Self {
        Self::build_with(record, &Formatter::default())
    }

    pub fn build_with(record: &PropertyRecord, formatter: &Formatter) -> Self {
        let detection = FlowClassifier.explain(record);
        let locator = FieldLocator::with_flow(record, detection.flow);

        let pricing = extract::pricing(&locator);
        let location = extract::location(&locator);
        let rooms = extract::room_details(&locator);
        let amenities = extract::amenities(&locator);

        let area = match rooms.built_up_area {
            Some(area) => formatter.area(&Value::from(area), rooms.area_unit.as_deref()),
            None => formatter.placeholder().to_string(),
        };
        let location_line = location
            .display_line()
            .unwrap_or_else(|| formatter.placeholder().to_string());

        Self {
            id: record.id.clone(),
            owner_id: record.owner_id.clone(),
            flow: detection.flow,
            flow_label: detection.flow.label(),
            detected_by: detection.signal,
            headline_label: pricing.label,
            headline_price: formatter.currency(&Value::from(pricing.amount)),
            location_line,
            location,
            rooms,
            area,
            amenities,
            fields: display_fields(record, detection.flow, formatter),
        }
    }
}

/// Every populated field, flow steps first and legacy sections after, rendered once per key.
fn display_fields(record: &PropertyRecord, flow: FlowType, formatter: &Formatter) -> Vec<DisplayField> {
    let unit = record
        .details()
        .get("areaUnit")
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut sources: Vec<&Map<String, Value>> = flow
        .step_ids()
        .iter()
        .filter_map(|step| record.step(step))
        .collect();
    if let Some(steps) = record.steps() {
        sources.extend(
            steps
                .iter()
                .filter(|(step, _)| !flow.step_ids().contains(&step.as_str()))
                .filter_map(|(_, values)| values.as_object()),
        );
    }
    sources.extend(LEGACY_SECTIONS.iter().filter_map(|section| record.section(section)));

    let mut seen = HashSet::new();
    let mut fields = Vec::new();
    for source in sources {
        let unit = source
            .get("areaUnit")
            .and_then(Value::as_str)
            .or(unit.as_deref());
        for (key, value) in source {
            if is_blank(value) || key == "areaUnit" || !seen.insert(key.clone()) {
                continue;
            }
            let display = match classify_field_kind(key) {
                FieldKind::Area => formatter.area(value, unit),
                _ => formatter.render(value, key),
            };
            let label = rule_for(key)
                .map(|rule| rule.label.to_string())
                .unwrap_or_else(|| humanize_key(key));
            fields.push(DisplayField {
                key: key.clone(),
                label,
                display,
            });
        }
    }
    fields
}
