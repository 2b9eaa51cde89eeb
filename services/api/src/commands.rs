use crate::infra::read_json;
use clap::Args;
use listing_flow::config::AppConfig;
use listing_flow::error::AppError;
use listing_flow::listings::{
    import, FieldValidator, Formatter, PropertyRecord, PropertyView, ValidationResult,
};
use listing_flow::telemetry::{self, LogSink};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct InspectArgs {
    /// JSON file holding one property record
    pub(crate) record: PathBuf,
    /// Print the view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Wizard step id, e.g. res_rent_location
    #[arg(long)]
    pub(crate) step: String,
    /// JSON file holding the form data
    pub(crate) form: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV table export with id, owner_id, price, and property_details columns
    pub(crate) csv: PathBuf,
}

/// Loads configuration and routes logs to stderr so stdout stays parseable.
fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;
    Ok(config)
}

pub(crate) fn run_inspect(args: InspectArgs) -> Result<(), AppError> {
    let formatter = Formatter::new(cli_config()?.display);
    let record = PropertyRecord::from_value(&read_json(&args.record)?);
    let view = PropertyView::build_with(&record, &formatter);

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &view)?;
        writeln!(out)?;
    } else {
        write_view(&mut out, &view)?;
    }
    Ok(())
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    cli_config()?;
    let form = read_json(&args.form)?;
    let result = FieldValidator.validate_step(&args.step, &form);
    write_validation(&mut io::stdout().lock(), &args.step, &result)?;
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let formatter = Formatter::new(cli_config()?.display);
    let records = import::from_path(&args.csv)?;
    tracing::info!(path = %args.csv.display(), count = records.len(), "imported listing export");

    let mut out = io::stdout().lock();
    for record in &records {
        let view = PropertyView::build_with(record, &formatter);
        write_import_line(&mut out, &view)?;
    }
    writeln!(out, "{} records", records.len())?;
    Ok(())
}

pub(crate) fn write_view(out: &mut impl Write, view: &PropertyView) -> io::Result<()> {
    writeln!(out, "Listing {} (owner {})", display_id(&view.id), display_id(&view.owner_id))?;
    writeln!(out, "- Flow: {} [{}]", view.flow_label, view.flow)?;
    writeln!(out, "- {}: {}", view.headline_label, view.headline_price)?;
    writeln!(out, "- Location: {}", view.location_line)?;
    writeln!(out, "- Area: {}", view.area)?;
    if !view.amenities.is_empty() {
        writeln!(out, "- Amenities: {}", view.amenities.join(", "))?;
    }

    if !view.fields.is_empty() {
        writeln!(out, "Details:")?;
        for field in &view.fields {
            writeln!(out, "  - {}: {}", field.label, field.display)?;
        }
    }
    Ok(())
}

pub(crate) fn write_validation(
    out: &mut impl Write,
    step: &str,
    result: &ValidationResult,
) -> io::Result<()> {
    let verdict = if result.is_valid { "valid" } else { "invalid" };
    if result.rule_set == step {
        writeln!(out, "Step {step}: {verdict}")?;
    } else {
        writeln!(out, "Step {step}: {verdict} (unrecognized step, {} rules applied)", result.rule_set)?;
    }
    for (field, message) in &result.errors {
        writeln!(out, "  - {field}: {message}")?;
    }
    Ok(())
}

pub(crate) fn write_import_line(out: &mut impl Write, view: &PropertyView) -> io::Result<()> {
    writeln!(
        out,
        "{} | {} | {} {} | {}",
        display_id(&view.id),
        view.flow,
        view.headline_label,
        view.headline_price,
        view.location_line
    )
}

fn display_id(id: &str) -> &str {
    if id.trim().is_empty() {
        "<unknown>"
    } else {
        id
    }
}
