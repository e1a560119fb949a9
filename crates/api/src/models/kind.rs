use crate::error::ApiError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract categorization of a documentable symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionKind {
    /// The project root.
    Global,
    ExternalModule,
    Module,
    Enum,
    EnumMember,
    Variable,
    Function,
    Class,
    Interface,
    Constructor,
    Property,
    Method,
    CallSignature,
    IndexSignature,
    ConstructorSignature,
    Parameter,
    TypeLiteral,
    TypeParameter,
    Accessor,
    GetSignature,
    SetSignature,
    ObjectLiteral,
    TypeAlias,
    Event,
}

impl ReflectionKind {
    pub const ALL: [ReflectionKind; 24] = [
        ReflectionKind::Global,
        ReflectionKind::ExternalModule,
        ReflectionKind::Module,
        ReflectionKind::Enum,
        ReflectionKind::EnumMember,
        ReflectionKind::Variable,
        ReflectionKind::Function,
        ReflectionKind::Class,
        ReflectionKind::Interface,
        ReflectionKind::Constructor,
        ReflectionKind::Property,
        ReflectionKind::Method,
        ReflectionKind::CallSignature,
        ReflectionKind::IndexSignature,
        ReflectionKind::ConstructorSignature,
        ReflectionKind::Parameter,
        ReflectionKind::TypeLiteral,
        ReflectionKind::TypeParameter,
        ReflectionKind::Accessor,
        ReflectionKind::GetSignature,
        ReflectionKind::SetSignature,
        ReflectionKind::ObjectLiteral,
        ReflectionKind::TypeAlias,
        ReflectionKind::Event,
    ];

    /// PascalCase kind name, the source of the `tsd-kind-*` style tokens.
    pub fn name(self) -> &'static str {
        match self {
            ReflectionKind::Global => "Global",
            ReflectionKind::ExternalModule => "ExternalModule",
            ReflectionKind::Module => "Module",
            ReflectionKind::Enum => "Enum",
            ReflectionKind::EnumMember => "EnumMember",
            ReflectionKind::Variable => "Variable",
            ReflectionKind::Function => "Function",
            ReflectionKind::Class => "Class",
            ReflectionKind::Interface => "Interface",
            ReflectionKind::Constructor => "Constructor",
            ReflectionKind::Property => "Property",
            ReflectionKind::Method => "Method",
            ReflectionKind::CallSignature => "CallSignature",
            ReflectionKind::IndexSignature => "IndexSignature",
            ReflectionKind::ConstructorSignature => "ConstructorSignature",
            ReflectionKind::Parameter => "Parameter",
            ReflectionKind::TypeLiteral => "TypeLiteral",
            ReflectionKind::TypeParameter => "TypeParameter",
            ReflectionKind::Accessor => "Accessor",
            ReflectionKind::GetSignature => "GetSignature",
            ReflectionKind::SetSignature => "SetSignature",
            ReflectionKind::ObjectLiteral => "ObjectLiteral",
            ReflectionKind::TypeAlias => "TypeAlias",
            ReflectionKind::Event => "Event",
        }
    }

    /// Modules and namespaces, internal or external.
    pub fn is_module(self) -> bool {
        matches!(self, ReflectionKind::Module | ReflectionKind::ExternalModule)
    }

    /// Call/construct/index signatures and accessor halves.
    pub fn is_signature(self) -> bool {
        matches!(
            self,
            ReflectionKind::CallSignature
                | ReflectionKind::ConstructorSignature
                | ReflectionKind::IndexSignature
                | ReflectionKind::GetSignature
                | ReflectionKind::SetSignature
        )
    }

    /// Everything that is declared in source: not the project root, not a
    /// signature and not a (type) parameter.
    pub fn is_declaration(self) -> bool {
        !(self == ReflectionKind::Global
            || self.is_signature()
            || matches!(self, ReflectionKind::Parameter | ReflectionKind::TypeParameter))
    }

    /// Kinds that may serve as an entry point.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ReflectionKind::Global
                | ReflectionKind::ExternalModule
                | ReflectionKind::Module
                | ReflectionKind::Class
                | ReflectionKind::Interface
                | ReflectionKind::Enum
                | ReflectionKind::ObjectLiteral
        )
    }

    /// Title of a group of symbols of this kind.
    pub fn plural(self) -> String {
        match self {
            ReflectionKind::Class => "Classes".to_string(),
            ReflectionKind::Property => "Properties".to_string(),
            ReflectionKind::Enum => "Enumerations".to_string(),
            ReflectionKind::EnumMember => "Enumeration members".to_string(),
            ReflectionKind::TypeAlias => "Type aliases".to_string(),
            ReflectionKind::ExternalModule => "External modules".to_string(),
            ReflectionKind::ObjectLiteral => "Object literals".to_string(),
            _ => format!("{}s", self.name()),
        }
    }
}

impl fmt::Display for ReflectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectionKind {
    type Err = ApiError;

    /// Accepts both the PascalCase name and the snake_case wire form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect();
        ReflectionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ApiError::UnknownKind(s.to_string()))
    }
}
