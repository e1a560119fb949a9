use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A tagged piece of a comment, e.g. `@param name text`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct CommentTag {
    /// Tag name without the `@` (`param`, `typeparam`, `returns`, ...).
    #[serde(rename = "tag")]
    pub tag_name: String,
    /// Addressed parameter, empty when the tag has none.
    #[serde(rename = "param", default)]
    pub param_name: String,
    #[serde(default)]
    pub text: String,
}

impl CommentTag {
    pub fn new(tag_name: impl Into<String>, param_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            param_name: param_name.into(),
            text: text.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct Comment {
    #[serde(default)]
    pub short_text: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<CommentTag>,
}

impl Comment {
    pub fn new(short_text: impl Into<String>) -> Self {
        Self {
            short_text: short_text.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: CommentTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Comment built for a symbol that claimed `text` from an ancestor:
    /// empty body, a single untagged fragment.
    pub fn claimed(text: impl Into<String>) -> Self {
        Self {
            short_text: String::new(),
            text: String::new(),
            tags: vec![CommentTag::new("", "", text)],
        }
    }

    /// Position of the first tag matching both the tag name and the parameter.
    pub fn tag_index(&self, tag_name: &str, param_name: &str) -> Option<usize> {
        self.tags
            .iter()
            .position(|t| t.tag_name == tag_name && t.param_name == param_name)
    }

    pub fn is_empty(&self) -> bool {
        self.short_text.is_empty() && self.text.is_empty() && self.tags.is_empty()
    }
}
