//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::SbGraphvizError;
use crate::inspector::ActionInspector;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, inspector: &ActionInspector) -> Result<String, SbGraphvizError> {
        let anomalies: Vec<_> = inspector
            .anomalies()
            .iter()
            .map(|anomaly| {
                let mut value = serde_json::to_value(anomaly)?;
                value["severity"] = serde_json::to_value(anomaly.severity())?;
                value["message"] = json!(anomaly.to_string());
                Ok(value)
            })
            .collect::<Result<_, serde_json::Error>>()?;

        let report = json!({
            "has_warnings": inspector.has_warnings(),
            "warning_count": inspector.warning_count(),
            "anomaly_count": inspector.anomaly_count(),
            "anomalies": anomalies,
        });

        serde_json::to_string_pretty(&report).map_err(SbGraphvizError::Json)
    }
}
