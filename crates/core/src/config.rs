use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Below this many in-scope modules the navigation is a single flat list.
pub const MODULE_THRESHOLD: usize = 10;

pub const INDEX_URL: &str = "index.html";
pub const GLOBALS_URL: &str = "globals.html";

/// Options that shape the generated site.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct RenderOptions {
    /// Dotted path of the container documented as the site root,
    /// e.g. `"core.engine"`. Defaults to the whole project.
    pub entry_point: Option<String>,
    /// Whether a readme page exists. Without one the entry point itself is
    /// rendered as `index.html` and no separate `globals.html` is emitted.
    pub readme: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            entry_point: None,
            readme: true,
        }
    }
}

impl RenderOptions {
    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = Some(entry_point.into());
        self
    }

    pub fn without_readme(mut self) -> Self {
        self.readme = false;
        self
    }

    /// Url of the page showing the entry point.
    pub fn entry_url(&self) -> &'static str {
        if self.readme { GLOBALS_URL } else { INDEX_URL }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let options: RenderOptions = serde_json::from_str(r#"{"entry_point": "a.b"}"#).unwrap();
        assert_eq!(options.entry_point.as_deref(), Some("a.b"));
        assert!(options.readme);
        assert_eq!(options.entry_url(), "globals.html");
    }

    #[test]
    fn no_readme_renders_entry_as_index() {
        let options = RenderOptions::default().without_readme();
        assert_eq!(options.entry_url(), "index.html");
    }
}
