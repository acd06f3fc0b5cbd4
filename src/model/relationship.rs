use super::option::OptionMap;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Entities that generated applications provide themselves; relationships may target
/// them without a declaration.
pub const BUILT_IN_ENTITIES: [&str; 2] = ["User", "Authority"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationshipType {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 4] = [
        RelationshipType::OneToOne,
        RelationshipType::OneToMany,
        RelationshipType::ManyToOne,
        RelationshipType::ManyToMany,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::OneToOne => "OneToOne",
            RelationshipType::OneToMany => "OneToMany",
            RelationshipType::ManyToOne => "ManyToOne",
            RelationshipType::ManyToMany => "ManyToMany",
        }
    }

    /// Match a PascalCase type name.
    #[must_use]
    pub fn from_pascal(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-relationship annotations split by where they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelationshipOptions {
    /// Apply regardless of direction.
    pub global: OptionMap,
    /// Declared on the `from` side.
    pub source: OptionMap,
    /// Declared on the `to` side.
    pub destination: OptionMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlRelationship {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    pub injected_field_in_from: Option<String>,
    pub injected_field_in_to: Option<String>,
    pub is_injected_field_in_from_required: bool,
    pub is_injected_field_in_to_required: bool,
    pub comment_in_from: Option<String>,
    pub comment_in_to: Option<String>,
    pub options: RelationshipOptions,
}

impl JdlRelationship {
    /// Composite identity: `<Type>_<From>{<injectedFieldInFrom>}_<To>{<injectedFieldInTo>}`,
    /// a side without an injected field drops its braces.
    #[must_use]
    pub fn key(&self) -> String {
        format!(
            "{}_{}{}_{}{}",
            self.relationship_type,
            self.from,
            braced(self.injected_field_in_from.as_deref()),
            self.to,
            braced(self.injected_field_in_to.as_deref()),
        )
    }
}

fn braced(field: Option<&str>) -> String {
    match field {
        Some(name) => format!("{{{}}}", name),
        None => String::new(),
    }
}

/// Relationships in declaration order, addressable by composite key.
///
/// Adding a relationship whose key already exists replaces the earlier one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JdlRelationships {
    by_key: IndexMap<String, JdlRelationship>,
}

impl JdlRelationships {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, relationship: JdlRelationship) {
        self.by_key.insert(relationship.key(), relationship);
    }

    #[must_use]
    pub fn get(&self, relationship_type: RelationshipType, key: &str) -> Option<&JdlRelationship> {
        self.by_key
            .get(key)
            .filter(|r| r.relationship_type == relationship_type)
    }

    #[must_use]
    pub fn get_one_to_one(&self, key: &str) -> Option<&JdlRelationship> {
        self.get(RelationshipType::OneToOne, key)
    }

    #[must_use]
    pub fn get_one_to_many(&self, key: &str) -> Option<&JdlRelationship> {
        self.get(RelationshipType::OneToMany, key)
    }

    #[must_use]
    pub fn get_many_to_one(&self, key: &str) -> Option<&JdlRelationship> {
        self.get(RelationshipType::ManyToOne, key)
    }

    #[must_use]
    pub fn get_many_to_many(&self, key: &str) -> Option<&JdlRelationship> {
        self.get(RelationshipType::ManyToMany, key)
    }

    pub fn of_type(&self, relationship_type: RelationshipType) -> impl Iterator<Item = &JdlRelationship> {
        self.iter()
            .filter(move |r| r.relationship_type == relationship_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JdlRelationship> {
        self.by_key.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_key.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
