use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Providers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Names of the providers compiled into the gateway.
pub const BUILTIN_PROVIDERS: &[&str] = &["convex", "material-ui"];

/// Which providers to register at startup.
///
/// Names are routing keys: each one becomes a URL prefix (`/convex/...`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "d_enabled")]
    pub enabled: Vec<String>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            enabled: d_enabled(),
        }
    }
}

impl ProvidersConfig {
    /// Enabled names that no built-in provider answers to.
    pub fn unknown(&self) -> Vec<&str> {
        self.enabled
            .iter()
            .map(String::as_str)
            .filter(|name| !BUILTIN_PROVIDERS.contains(name))
            .collect()
    }

    /// Names listed more than once (each reported once, in first-seen order).
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        let mut dupes = Vec::new();
        for name in &self.enabled {
            if seen.contains(&name.as_str()) {
                if !dupes.contains(&name.as_str()) {
                    dupes.push(name.as_str());
                }
            } else {
                seen.push(name.as_str());
            }
        }
        dupes
    }
}

fn d_enabled() -> Vec<String> {
    BUILTIN_PROVIDERS.iter().map(|s| s.to_string()).collect()
}
