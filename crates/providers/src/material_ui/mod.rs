//! `material-ui`: component reference and code generators for MUI.
//!
//! Resources live under the `mui://` scheme rather than the provider name.

mod codegen;
mod components;

use pool_protocol::{ResourceContent, ResourceDescriptor, ToolCallResult, ToolDescriptor};
use serde_json::{json, Map, Value};

use crate::catalog::Catalog;
use crate::traits::{Provider, ProviderError, ProviderResult};
use crate::util::{now_rfc3339, str_arg};

use self::components::{
    categories_json, components_json, find, in_category, names, COMPONENTS, SEARCH_CATEGORIES,
};

pub const URI_SCHEME: &str = "mui";

const INSTALLATION_GUIDE: &str = r#"# Material-UI Installation Guide

## 1. Install Material-UI

```bash
npm install @mui/material @emotion/react @emotion/styled
```

## 2. Install Icon Package (Optional)

```bash
npm install @mui/icons-material
```

## 3. Setup Theme Provider

```jsx
import { ThemeProvider, createTheme } from '@mui/material/styles';
import CssBaseline from '@mui/material/CssBaseline';

const theme = createTheme({
  palette: {
    mode: 'light',
    primary: {
      main: '#1976d2',
    },
  },
});

function App() {
  return (
    <ThemeProvider theme={theme}>
      <CssBaseline />
      {/* Your app content */}
    </ThemeProvider>
  );
}
```

## 4. Import Components

```jsx
import { Button, TextField, Card } from '@mui/material';
```

## 5. Ready to Use!

Your Material-UI setup is complete.
"#;

pub struct MaterialUiProvider {
    catalog: Catalog,
}

impl Default for MaterialUiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialUiProvider {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(tools(), resources()),
        }
    }

    fn generate_component(&self, args: &Map<String, Value>) -> ToolCallResult {
        // The schema enum has already restricted `component` to known names.
        let name = str_arg(args, "component");
        let empty = Map::new();
        let props = args.get("props").and_then(Value::as_object).unwrap_or(&empty);
        let children = args.get("children").and_then(Value::as_str).unwrap_or("");
        let typescript = args.get("typescript").and_then(Value::as_bool).unwrap_or(false);

        ToolCallResult::text(codegen::component(name, props, children, typescript))
    }

    fn get_component_props(&self, args: &Map<String, Value>) -> ProviderResult<ToolCallResult> {
        let name = str_arg(args, "component");
        let component = find(name)
            .ok_or_else(|| ProviderError::Execution(format!("Unknown component: {name}")))?;
        Ok(ToolCallResult::text(codegen::props_doc(component)))
    }

    fn create_theme(&self, args: &Map<String, Value>) -> ToolCallResult {
        let primary = args
            .get("primaryColor")
            .and_then(Value::as_str)
            .unwrap_or(codegen::DEFAULT_PRIMARY);
        let secondary = args
            .get("secondaryColor")
            .and_then(Value::as_str)
            .unwrap_or(codegen::DEFAULT_SECONDARY);
        let mode = args.get("mode").and_then(Value::as_str).unwrap_or("light");
        let typography = args.get("typography").and_then(Value::as_object);

        let config = codegen::theme_config(primary, secondary, mode, typography);
        ToolCallResult::text(codegen::theme(&config))
    }

    fn generate_form(&self, args: &Map<String, Value>) -> ProviderResult<ToolCallResult> {
        let fields = args
            .get("fields")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let submit = args
            .get("submitLabel")
            .and_then(Value::as_str)
            .unwrap_or("Submit");
        codegen::form(fields, submit).map(ToolCallResult::text)
    }

    fn search_components(&self, args: &Map<String, Value>) -> ToolCallResult {
        let query = str_arg(args, "query");
        let needle = query.to_lowercase();
        let category = args.get("category").and_then(Value::as_str);

        let hits: Vec<_> = COMPONENTS
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
            })
            .filter(|c| category.map_or(true, |cat| in_category(cat, c.name)))
            .collect();

        ToolCallResult::text(codegen::search_results(query, &hits))
    }
}

#[async_trait::async_trait]
impl Provider for MaterialUiProvider {
    async fn list_tools(&self) -> ProviderResult<Vec<ToolDescriptor>> {
        Ok(self.catalog.tools().to_vec())
    }

    async fn list_resources(&self) -> ProviderResult<Vec<ResourceDescriptor>> {
        Ok(self.catalog.resources().to_vec())
    }

    async fn read_resource(&self, uri: &str) -> ProviderResult<Vec<ResourceContent>> {
        let resource = self.catalog.resource(uri)?;
        let body = match resource.uri.as_str() {
            "mui://components" => json!({
                "components": components_json(),
                "count": COMPONENTS.len(),
                "categories": categories_json(),
                "timestamp": now_rfc3339(),
            }),
            "mui://theme" => json!({
                "theme": default_theme(),
                "timestamp": now_rfc3339(),
            }),
            "mui://examples" => {
                let examples: Map<String, Value> = COMPONENTS
                    .iter()
                    .map(|c| {
                        let entry = json!({
                            "description": c.description,
                            "examples": c.examples,
                            "documentation": c.documentation,
                        });
                        (c.name.to_string(), entry)
                    })
                    .collect();
                json!({ "examples": examples, "timestamp": now_rfc3339() })
            }
            "mui://installation" => {
                return Ok(vec![ResourceContent::text(
                    uri,
                    resource.mime_type.as_str(),
                    INSTALLATION_GUIDE,
                )])
            }
            other => {
                return Err(ProviderError::Internal(format!(
                    "resource '{other}' is listed but has no content"
                )))
            }
        };
        Ok(vec![ResourceContent::json(uri, &body)])
    }

    async fn call_tool(&self, name: &str, arguments: Value) -> ProviderResult<ToolCallResult> {
        let args = self.catalog.prepare_call(name, arguments)?;
        tracing::debug!(tool = %name, "material-ui tool call");

        match name {
            "generate_component" => Ok(self.generate_component(&args)),
            "get_component_props" => self.get_component_props(&args),
            "create_theme" => Ok(self.create_theme(&args)),
            "generate_form" => self.generate_form(&args),
            "search_components" => Ok(self.search_components(&args)),
            other => Err(ProviderError::Internal(format!(
                "tool '{other}' is listed but has no handler"
            ))),
        }
    }

    fn uri_scheme(&self) -> Option<&str> {
        Some(URI_SCHEME)
    }
}

fn default_theme() -> Value {
    json!({
        "palette": {
            "mode": "light",
            "primary": { "main": codegen::DEFAULT_PRIMARY },
            "secondary": { "main": codegen::DEFAULT_SECONDARY },
            "error": { "main": "#d32f2f" },
            "warning": { "main": "#ed6c02" },
            "info": { "main": "#0288d1" },
            "success": { "main": "#2e7d32" },
        },
        "typography": {
            "fontFamily": "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif",
            "h1": { "fontSize": "2.125rem" },
            "h2": { "fontSize": "1.5rem" },
            "body1": { "fontSize": "1rem" },
        },
        "spacing": 8,
        "breakpoints": { "xs": 0, "sm": 600, "md": 900, "lg": 1200, "xl": 1536 },
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Catalog
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn tools() -> Vec<ToolDescriptor> {
    let component_names = names();
    vec![
        ToolDescriptor::new(
            "generate_component",
            "Generate Material-UI component code with specified props",
            json!({
                "type": "object",
                "properties": {
                    "component": {
                        "type": "string",
                        "description": "Name of the Material-UI component",
                        "enum": component_names,
                    },
                    "props": { "type": "object", "description": "Props to apply to the component" },
                    "children": { "type": "string", "description": "Content inside the component" },
                    "typescript": {
                        "type": "boolean",
                        "description": "Generate TypeScript version",
                        "default": false,
                    },
                },
                "required": ["component"],
            }),
        ),
        ToolDescriptor::new(
            "get_component_props",
            "Get available props and documentation for a component",
            json!({
                "type": "object",
                "properties": {
                    "component": {
                        "type": "string",
                        "description": "Name of the Material-UI component",
                        "enum": component_names,
                    },
                },
                "required": ["component"],
            }),
        ),
        ToolDescriptor::new(
            "create_theme",
            "Generate a custom Material-UI theme configuration",
            json!({
                "type": "object",
                "properties": {
                    "primaryColor": {
                        "type": "string",
                        "description": "Primary color for the theme",
                        "default": codegen::DEFAULT_PRIMARY,
                    },
                    "secondaryColor": {
                        "type": "string",
                        "description": "Secondary color for the theme",
                        "default": codegen::DEFAULT_SECONDARY,
                    },
                    "mode": {
                        "type": "string",
                        "description": "Theme mode",
                        "enum": ["light", "dark"],
                        "default": "light",
                    },
                    "typography": { "type": "object", "description": "Typography customizations" },
                },
            }),
        ),
        ToolDescriptor::new(
            "generate_form",
            "Generate a complete form using Material-UI components",
            json!({
                "type": "object",
                "properties": {
                    "fields": {
                        "type": "array",
                        "description": "Array of form fields",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "label": { "type": "string" },
                                "type": { "type": "string" },
                                "required": { "type": "boolean" },
                            },
                        },
                    },
                    "submitLabel": {
                        "type": "string",
                        "description": "Submit button label",
                        "default": "Submit",
                    },
                },
                "required": ["fields"],
            }),
        ),
        ToolDescriptor::new(
            "search_components",
            "Search for Material-UI components by functionality",
            json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string", "description": "Search query for component functionality" },
                    "category": {
                        "type": "string",
                        "description": "Component category",
                        "enum": SEARCH_CATEGORIES,
                    },
                },
                "required": ["query"],
            }),
        ),
    ]
}

fn resources() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor::new(
            "mui://components",
            "Material-UI Components",
            "Complete list of available Material-UI components",
            "application/json",
        ),
        ResourceDescriptor::new(
            "mui://theme",
            "Default Theme Configuration",
            "Default Material-UI theme structure and values",
            "application/json",
        ),
        ResourceDescriptor::new(
            "mui://examples",
            "Component Examples",
            "Code examples for all components",
            "application/json",
        ),
        ResourceDescriptor::new(
            "mui://installation",
            "Installation Guide",
            "How to install and setup Material-UI",
            "text/markdown",
        ),
    ]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
