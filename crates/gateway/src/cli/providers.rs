//! `mcp-pool providers`: what the current config would serve.

use pool_domain::config::Config;
use pool_providers::ProviderRegistry;

/// One registered provider and the size of its catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSummary {
    pub name: String,
    pub scheme: String,
    pub tools: usize,
    pub resources: usize,
}

/// Summarize every provider in `registry`, in name order.
pub async fn summarize(registry: &ProviderRegistry) -> anyhow::Result<Vec<ProviderSummary>> {
    let mut out = Vec::with_capacity(registry.len());
    for (name, provider) in registry.iter() {
        let tools = provider
            .list_tools()
            .await
            .map_err(|e| anyhow::anyhow!("{name}: listing tools: {e}"))?;
        let resources = provider
            .list_resources()
            .await
            .map_err(|e| anyhow::anyhow!("{name}: listing resources: {e}"))?;
        out.push(ProviderSummary {
            name: name.clone(),
            scheme: provider.uri_scheme().unwrap_or(name).to_string(),
            tools: tools.len(),
            resources: resources.len(),
        });
    }
    Ok(out)
}

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let registry = ProviderRegistry::from_config(&config.providers);
    let summaries = summarize(&registry).await?;

    if summaries.is_empty() {
        println!("No providers enabled.");
        return Ok(());
    }

    for s in &summaries {
        println!(
            "{:<14} {}://  {} tool(s), {} resource(s)",
            s.name, s.scheme, s.tools, s.resources
        );
    }
    Ok(())
}
