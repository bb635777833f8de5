//! The Material-UI component reference the provider serves.

use serde_json::{json, Map, Value};

pub(crate) struct Component {
    pub name: &'static str,
    pub description: &'static str,
    pub props: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub documentation: &'static str,
}

impl Component {
    pub fn to_json(&self) -> Value {
        json!({
            "description": self.description,
            "props": self.props,
            "examples": self.examples,
            "documentation": self.documentation,
        })
    }
}

pub(crate) static COMPONENTS: &[Component] = &[
    Component {
        name: "Button",
        description: "Interactive button component with various styles and states",
        props: &["variant", "color", "size", "disabled", "startIcon", "endIcon", "fullWidth"],
        examples: &[
            r#"<Button variant="contained" color="primary">Click me</Button>"#,
            r#"<Button variant="outlined" color="secondary" disabled>Disabled</Button>"#,
            r#"<Button variant="text" size="large" fullWidth>Full Width</Button>"#,
        ],
        documentation: "https://mui.com/material-ui/react-button/",
    },
    Component {
        name: "TextField",
        description: "Input field component for text data with validation and styling",
        props: &["label", "variant", "value", "onChange", "placeholder", "type", "required", "error", "helperText"],
        examples: &[
            r#"<TextField label="Name" variant="outlined" />"#,
            r#"<TextField label="Email" type="email" required />"#,
            r#"<TextField label="Password" type="password" variant="filled" />"#,
        ],
        documentation: "https://mui.com/material-ui/react-text-field/",
    },
    Component {
        name: "Card",
        description: "Surface component for displaying content in contained format",
        props: &["elevation", "variant", "sx"],
        examples: &[
            "<Card><CardContent>Basic card content</CardContent></Card>",
            r#"<Card elevation={3}><CardHeader title="Card Title" /></Card>"#,
            r#"<Card variant="outlined"><CardActions><Button>Action</Button></CardActions></Card>"#,
        ],
        documentation: "https://mui.com/material-ui/react-card/",
    },
    Component {
        name: "Typography",
        description: "Text display component with consistent theming and hierarchy",
        props: &["variant", "color", "component", "align", "gutterBottom", "noWrap"],
        examples: &[
            r#"<Typography variant="h1">Main Heading</Typography>"#,
            r#"<Typography variant="body1" color="textSecondary">Body text</Typography>"#,
            r#"<Typography variant="caption" align="center">Caption text</Typography>"#,
        ],
        documentation: "https://mui.com/material-ui/react-typography/",
    },
    Component {
        name: "Box",
        description: "Layout component for styling, spacing, and responsive design",
        props: &["sx", "component", "display", "flexDirection", "justifyContent", "alignItems"],
        examples: &[
            "<Box sx={{ padding: 2 }}>Content with padding</Box>",
            r#"<Box display="flex" justifyContent="center">Centered content</Box>"#,
            r#"<Box component="section" sx={{ backgroundColor: "primary.main" }}>Styled box</Box>"#,
        ],
        documentation: "https://mui.com/system/react-box/",
    },
    Component {
        name: "Grid",
        description: "Responsive layout component using CSS Grid and Flexbox",
        props: &["container", "item", "xs", "sm", "md", "lg", "xl", "spacing", "direction"],
        examples: &[
            "<Grid container spacing={2}><Grid item xs={12}>Full width</Grid></Grid>",
            "<Grid container><Grid item xs={6}>Half width</Grid></Grid>",
            r#"<Grid container direction="column" spacing={1}>Vertical layout</Grid>"#,
        ],
        documentation: "https://mui.com/material-ui/react-grid/",
    },
    Component {
        name: "Paper",
        description: "Surface component that mimics physical paper with elevation",
        props: &["elevation", "variant", "square", "sx"],
        examples: &[
            "<Paper elevation={1}>Basic paper</Paper>",
            r#"<Paper variant="outlined" square>Outlined square paper</Paper>"#,
            r#"<Paper sx={{ padding: 3, backgroundColor: "grey.100" }}>Styled paper</Paper>"#,
        ],
        documentation: "https://mui.com/material-ui/react-paper/",
    },
    Component {
        name: "Chip",
        description: "Compact component for tags, categories, or user input",
        props: &["label", "variant", "color", "size", "onDelete", "onClick", "avatar", "icon"],
        examples: &[
            r#"<Chip label="Basic chip" />"#,
            "<Chip label=\"Deletable\" onDelete={() => {}} />",
            "<Chip label=\"Clickable\" onClick={() => {}} color=\"primary\" />",
        ],
        documentation: "https://mui.com/material-ui/react-chip/",
    },
];

/// Category → member components. `navigation` and `feedback` are accepted
/// search categories with no members yet.
pub(crate) static CATEGORIES: &[(&str, &[&str])] = &[
    ("input", &["TextField", "Button"]),
    ("display", &["Typography", "Chip"]),
    ("layout", &["Box", "Grid", "Paper"]),
    ("surfaces", &["Card", "Paper"]),
];

pub(crate) const SEARCH_CATEGORIES: &[&str] = &["input", "display", "layout", "navigation", "feedback"];

pub(crate) fn find(name: &str) -> Option<&'static Component> {
    COMPONENTS.iter().find(|c| c.name == name)
}

pub(crate) fn names() -> Vec<&'static str> {
    COMPONENTS.iter().map(|c| c.name).collect()
}

pub(crate) fn in_category(category: &str, component: &str) -> bool {
    CATEGORIES
        .iter()
        .find(|(cat, _)| *cat == category)
        .is_some_and(|(_, members)| members.contains(&component))
}

pub(crate) fn components_json() -> Value {
    let map: Map<String, Value> = COMPONENTS
        .iter()
        .map(|c| (c.name.to_string(), c.to_json()))
        .collect();
    Value::Object(map)
}

pub(crate) fn categories_json() -> Value {
    let map: Map<String, Value> = CATEGORIES
        .iter()
        .map(|(cat, members)| (cat.to_string(), json!(members)))
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_components() {
        assert_eq!(COMPONENTS.len(), 8);
        assert!(find("Chip").is_some());
        assert!(find("chip").is_none());
    }

    #[test]
    fn category_membership() {
        assert!(in_category("layout", "Paper"));
        assert!(in_category("surfaces", "Paper"));
        assert!(!in_category("input", "Paper"));
        assert!(!in_category("navigation", "Button"));
    }

    #[test]
    fn categorised_components_exist() {
        for (_, members) in CATEGORIES {
            for m in *members {
                assert!(find(m).is_some(), "{m}");
            }
        }
    }
}
