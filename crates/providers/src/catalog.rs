//! Static tool/resource catalogs.
//!
//! A [`Catalog`] is built once when a provider is constructed and never
//! changes afterwards. It answers the two list operations, resolves a tool
//! call to its descriptor with validated arguments, and gates resource
//! reads to the URIs it lists.

use pool_protocol::{ResourceDescriptor, ToolDescriptor};
use serde_json::{Map, Value};

use crate::schema::validate_arguments;
use crate::traits::ProviderError;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
    resources: Vec<ResourceDescriptor>,
}

impl Catalog {
    pub fn new(tools: Vec<ToolDescriptor>, resources: Vec<ResourceDescriptor>) -> Self {
        Self { tools, resources }
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn resources(&self) -> &[ResourceDescriptor] {
        &self.resources
    }

    pub fn tool(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// The listed resource at exactly `uri`.
    pub fn resource(&self, uri: &str) -> Result<&ResourceDescriptor, ProviderError> {
        self.resources
            .iter()
            .find(|r| r.uri == uri)
            .ok_or_else(|| ProviderError::ResourceNotFound(uri.to_string()))
    }

    /// Resolve `name` and check `args` against its input schema.
    pub fn prepare_call(&self, name: &str, args: Value) -> Result<Map<String, Value>, ProviderError> {
        let tool = self
            .tool(name)
            .ok_or_else(|| ProviderError::ToolNotFound(name.to_string()))?;
        validate_arguments(&tool.input_schema, args)
    }
}
