use listing_flow::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads a JSON document from disk, e.g. an exported property row or a saved form.
pub(crate) fn read_json(path: &Path) -> Result<Value, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("listing-flow-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        path
    }

    #[test]
    fn read_json_parses_documents() {
        let path = temp_file("record.json", r#"{"id":"p-1"}"#);
        let value = read_json(&path).expect("json loads");
        assert_eq!(value["id"], "p-1");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn read_json_separates_io_and_parse_failures() {
        let missing = read_json(Path::new("/definitely/not/here.json")).expect_err("missing");
        assert!(matches!(missing, AppError::Io(_)));

        let path = temp_file("broken.json", "{oops");
        let broken = read_json(&path).expect_err("invalid json");
        assert!(matches!(broken, AppError::Json(_)));
        let _ = std::fs::remove_file(path);
    }
}
