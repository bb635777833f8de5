//! Source-code snippets produced by the Material-UI tools.

use serde_json::{json, Map, Value};

use super::components::Component;
use crate::traits::ProviderError;
use crate::util::pretty;

pub(crate) const DEFAULT_PRIMARY: &str = "#1976d2";
pub(crate) const DEFAULT_SECONDARY: &str = "#dc004e";
const FONT_FAMILY: &str = r#""Roboto", "Helvetica", "Arial", sans-serif"#;

/// JSX attribute for one prop. `false` booleans are dropped entirely.
fn jsx_attr(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(format!("{key}=\"{s}\"")),
        Value::Bool(true) => Some(key.to_string()),
        Value::Bool(false) => None,
        other => Some(format!("{key}={{{other}}}")),
    }
}

/// The TypeScript type a JS runtime would report for `value`.
fn ts_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}

pub(crate) fn component(
    name: &str,
    props: &Map<String, Value>,
    children: &str,
    typescript: bool,
) -> String {
    let attrs: Vec<String> = props.iter().filter_map(|(k, v)| jsx_attr(k, v)).collect();
    let open = if attrs.is_empty() {
        name.to_string()
    } else {
        format!("{name} {}", attrs.join(" "))
    };

    let mut out = format!(
        "Generated {name} component!\n\n**Import:**\n```jsx\nimport {{ {name} }} from '@mui/material';\n```\n\n**Component:**\n```jsx\n<{open}>{children}</{name}>\n```"
    );

    if typescript {
        let fields: Vec<String> = props
            .iter()
            .map(|(k, v)| format!("  {k}?: {};", ts_type(v)))
            .collect();
        out.push_str(&format!(
            "\n\n**TypeScript Types:**\n```typescript\n// TypeScript Props Interface\ninterface {name}Props {{\n{}\n}}\n```",
            fields.join("\n")
        ));
    }
    out
}

pub(crate) fn props_doc(c: &Component) -> String {
    let props: Vec<String> = c.props.iter().map(|p| format!("• {p}")).collect();
    format!(
        "{} Component Documentation\n\n**Description:**\n{}\n\n**Available Props:**\n{}\n\n**Examples:**\n```jsx\n{}\n```\n\n**Documentation:** {}",
        c.name,
        c.description,
        props.join("\n"),
        c.examples.join("\n\n"),
        c.documentation
    )
}

/// Theme object as passed to `createTheme`.
pub(crate) fn theme_config(
    primary: &str,
    secondary: &str,
    mode: &str,
    typography: Option<&Map<String, Value>>,
) -> Value {
    let mut typo = Map::new();
    typo.insert("fontFamily".into(), Value::from(FONT_FAMILY));
    if let Some(extra) = typography {
        typo.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    json!({
        "palette": {
            "mode": mode,
            "primary": { "main": primary },
            "secondary": { "main": secondary },
        },
        "typography": typo,
        "spacing": 8,
    })
}

pub(crate) fn theme(config: &Value) -> String {
    let code = format!(
        "import {{ createTheme }} from '@mui/material/styles';\n\nconst theme = createTheme({});\n\nexport default theme;",
        pretty(config)
    );
    format!(
        "Custom Material-UI Theme Generated!\n\n```javascript\n{code}\n```\n\n**Usage:**\n```jsx\nimport {{ ThemeProvider }} from '@mui/material/styles';\nimport theme from './theme';\n\nfunction App() {{\n  return (\n    <ThemeProvider theme={{theme}}>\n      {{/* Your app */}}\n    </ThemeProvider>\n  );\n}}\n```"
    )
}

pub(crate) fn form(fields: &[Value], submit_label: &str) -> Result<String, ProviderError> {
    let mut rendered = Vec::with_capacity(fields.len());

    for (i, field) in fields.iter().enumerate() {
        let obj = field.as_object().ok_or_else(|| {
            ProviderError::Execution(format!("form field {i} must be an object"))
        })?;
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ProviderError::Execution(format!("form field {i} is missing a name")))?;
        let label = obj.get("label").and_then(Value::as_str).unwrap_or(name);
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or("text");
        let required = obj.get("required").and_then(Value::as_bool).unwrap_or(false);

        let mut lines = vec![
            "    <TextField".to_string(),
            format!("      name=\"{name}\""),
            format!("      label=\"{label}\""),
            format!("      type=\"{kind}\""),
        ];
        if required {
            lines.push("      required".into());
        }
        lines.push("      fullWidth".into());
        lines.push("      margin=\"normal\"".into());
        lines.push("    />".into());
        rendered.push(lines.join("\n"));
    }

    let code = format!(
        "import {{ Box, TextField, Button }} from '@mui/material';\n\nfunction MyForm() {{\n  const handleSubmit = (event) => {{\n    event.preventDefault();\n  }};\n\n  return (\n    <Box component=\"form\" onSubmit={{handleSubmit}} sx={{{{ mt: 1 }}}}>\n{}\n      <Button\n        type=\"submit\"\n        fullWidth\n        variant=\"contained\"\n        sx={{{{ mt: 3, mb: 2 }}}}\n      >\n        {submit_label}\n      </Button>\n    </Box>\n  );\n}}\n\nexport default MyForm;",
        rendered.join("\n")
    );

    Ok(format!("Generated Material-UI Form!\n\n```jsx\n{code}\n```"))
}

pub(crate) fn search_results(query: &str, hits: &[&Component]) -> String {
    let entries: Vec<String> = hits
        .iter()
        .map(|c| format!("**{}**\n{}\n{}", c.name, c.description, c.documentation))
        .collect();
    format!(
        "Search Results for \"{query}\"\n\n{} components found:\n\n{}",
        hits.len(),
        entries.join("\n\n")
    )
}
