use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// [observability]
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Trace export for `mcp-pool serve`.
///
/// Request spans from the HTTP layer and the per-call `provider`/`method`
/// events are always logged as JSON. An exporter endpoint additionally
/// ships them to an OTLP/gRPC collector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Collector address, e.g. `http://localhost:4317`. Blank means off.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    #[serde(default = "d_service_name")]
    pub service_name: String,

    /// Fraction of traces kept, `0.0..=1.0`.
    #[serde(default = "d_sample_rate")]
    pub sample_rate: f64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: d_service_name(),
            sample_rate: d_sample_rate(),
        }
    }
}

impl ObservabilityConfig {
    /// The collector to export to, if any. Surrounding whitespace is
    /// ignored and an empty value disables export.
    pub fn exporter_endpoint(&self) -> Option<&str> {
        self.otlp_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn sample_rate_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.sample_rate)
    }

    /// The gRPC exporter only dials `http://` and `https://` addresses.
    pub fn endpoint_has_scheme(&self) -> bool {
        self.exporter_endpoint()
            .map_or(true, |e| e.starts_with("http://") || e.starts_with("https://"))
    }
}

fn d_service_name() -> String {
    "mcp-pool".into()
}

fn d_sample_rate() -> f64 {
    1.0
}
