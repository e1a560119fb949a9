use docscope_api::{REFLECTION_TEMPLATE, ReflectionKind};

/// Rule deciding that symbols of some kinds get a page of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMapping {
    pub kinds: Vec<ReflectionKind>,
    /// Descendants of a leaf page never get pages of their own.
    pub is_leaf: bool,
    pub directory: String,
    pub template: String,
}

impl TemplateMapping {
    pub fn new(
        kinds: impl IntoIterator<Item = ReflectionKind>,
        is_leaf: bool,
        directory: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
            is_leaf,
            directory: directory.into(),
            template: template.into(),
        }
    }

    pub fn matches(&self, kind: ReflectionKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Ordered rule list; the first rule matching a kind wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    rules: Vec<TemplateMapping>,
}

impl MappingTable {
    pub fn new(rules: Vec<TemplateMapping>) -> Self {
        Self { rules }
    }

    pub fn lookup(&self, kind: ReflectionKind) -> Option<&TemplateMapping> {
        self.rules.iter().find(|rule| rule.matches(kind))
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::new(vec![
            TemplateMapping::new([ReflectionKind::Class], false, "classes", REFLECTION_TEMPLATE),
            TemplateMapping::new(
                [ReflectionKind::Interface],
                false,
                "interfaces",
                REFLECTION_TEMPLATE,
            ),
            TemplateMapping::new([ReflectionKind::Enum], false, "enums", REFLECTION_TEMPLATE),
            TemplateMapping::new(
                [ReflectionKind::Module, ReflectionKind::ExternalModule],
                false,
                "modules",
                REFLECTION_TEMPLATE,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_rules() {
        let table = MappingTable::default();
        assert_eq!(table.lookup(ReflectionKind::Class).unwrap().directory, "classes");
        assert_eq!(
            table.lookup(ReflectionKind::ExternalModule).unwrap().directory,
            "modules"
        );
        assert!(table.lookup(ReflectionKind::Method).is_none());
        assert!(table.lookup(ReflectionKind::Function).is_none());
    }

    #[test]
    fn first_match_wins() {
        let table = MappingTable::new(vec![
            TemplateMapping::new([ReflectionKind::Class], true, "first", "a"),
            TemplateMapping::new([ReflectionKind::Class], false, "second", "b"),
        ]);
        let rule = table.lookup(ReflectionKind::Class).unwrap();
        assert_eq!(rule.directory, "first");
        assert!(rule.is_leaf);
    }
}
