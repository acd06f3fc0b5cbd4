use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::fmt;

/// Entity-name wildcard: "every entity in scope".
pub const WILDCARD: &str = "*";

/// Flag options: their presence alone means something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnaryOptionKind {
    SkipClient,
    SkipServer,
    NoFluentMethod,
    Filter,
    ReadOnly,
    Embedded,
}

impl UnaryOptionKind {
    /// Declaration order; converted options follow it.
    pub const ALL: [UnaryOptionKind; 6] = [
        UnaryOptionKind::SkipClient,
        UnaryOptionKind::SkipServer,
        UnaryOptionKind::NoFluentMethod,
        UnaryOptionKind::Filter,
        UnaryOptionKind::ReadOnly,
        UnaryOptionKind::Embedded,
    ];

    /// Name as written in JDL (`skipClient`, `readOnly`, ...).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOptionKind::SkipClient => "skipClient",
            UnaryOptionKind::SkipServer => "skipServer",
            UnaryOptionKind::NoFluentMethod => "noFluentMethod",
            UnaryOptionKind::Filter => "filter",
            UnaryOptionKind::ReadOnly => "readOnly",
            UnaryOptionKind::Embedded => "embedded",
        }
    }

    /// Look up a flag option by its JDL name; `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for UnaryOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which values a binary option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValues {
    /// A closed vocabulary; `use` clauses can select these values.
    Fixed(&'static [&'static str]),
    /// Any value (an application name, a folder, a suffix).
    Free,
}

/// Name/value options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryOptionKind {
    Dto,
    Service,
    Pagination,
    Microservice,
    Search,
    AngularSuffix,
    ClientRootFolder,
}

/// The value every fixed binary option accepts to switch itself off. It belongs to
/// several families and so can never be selected by a `use` clause.
pub const NO_VALUE: &str = "no";

impl BinaryOptionKind {
    /// Declaration order; converted options follow it.
    pub const ALL: [BinaryOptionKind; 7] = [
        BinaryOptionKind::Dto,
        BinaryOptionKind::Service,
        BinaryOptionKind::Pagination,
        BinaryOptionKind::Microservice,
        BinaryOptionKind::Search,
        BinaryOptionKind::AngularSuffix,
        BinaryOptionKind::ClientRootFolder,
    ];

    /// Canonical JDL name. `paginate` maps to `pagination`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOptionKind::Dto => "dto",
            BinaryOptionKind::Service => "service",
            BinaryOptionKind::Pagination => "pagination",
            BinaryOptionKind::Microservice => "microservice",
            BinaryOptionKind::Search => "search",
            BinaryOptionKind::AngularSuffix => "angularSuffix",
            BinaryOptionKind::ClientRootFolder => "clientRootFolder",
        }
    }

    /// Accepts the canonical name and the `paginate` keyword spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "paginate" {
            return Some(BinaryOptionKind::Pagination);
        }
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// The values this option accepts, `no` included for the fixed families.
    #[must_use]
    pub fn values(&self) -> OptionValues {
        match self {
            BinaryOptionKind::Dto => OptionValues::Fixed(&["mapstruct", NO_VALUE]),
            BinaryOptionKind::Service => {
                OptionValues::Fixed(&["serviceClass", "serviceImpl", NO_VALUE])
            }
            BinaryOptionKind::Pagination => {
                OptionValues::Fixed(&["pagination", "infinite-scroll", NO_VALUE])
            }
            BinaryOptionKind::Search => {
                OptionValues::Fixed(&["elasticsearch", "couchbase", NO_VALUE])
            }
            BinaryOptionKind::Microservice
            | BinaryOptionKind::AngularSuffix
            | BinaryOptionKind::ClientRootFolder => OptionValues::Free,
        }
    }

    /// Whether `value` belongs to this option's vocabulary. Free options accept anything.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self.values() {
            OptionValues::Fixed(values) => values.contains(&value),
            OptionValues::Free => true,
        }
    }

    /// The family owning a `use` clause value. Each fixed value other than `no`
    /// belongs to exactly one family; everything else resolves to `None`.
    #[must_use]
    pub fn for_use_value(value: &str) -> Option<Self> {
        if value == NO_VALUE {
            return None;
        }
        Self::ALL.into_iter().find(|kind| match kind.values() {
            OptionValues::Fixed(values) => values.contains(&value),
            OptionValues::Free => false,
        })
    }
}

impl fmt::Display for BinaryOptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flag option scoped to a set of entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlUnaryOption {
    pub name: UnaryOptionKind,
    pub entity_names: IndexSet<String>,
    pub excluded_names: IndexSet<String>,
}

/// Name/value option scoped to a set of entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlBinaryOption {
    pub name: BinaryOptionKind,
    pub value: String,
    pub entity_names: IndexSet<String>,
    pub excluded_names: IndexSet<String>,
}

/// A declared option. Same name and value with different scopes are separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "arity", rename_all = "camelCase")]
pub enum JdlOption {
    Unary(JdlUnaryOption),
    Binary(JdlBinaryOption),
}

impl JdlOption {
    /// Build a flag option over `entity_names`, minus `excluded_names`.
    ///
    /// ```
    /// use jdl_converter::model::{JdlOption, UnaryOptionKind};
    ///
    /// let option = JdlOption::unary(UnaryOptionKind::ReadOnly, ["*"], ["C"]);
    /// assert_eq!(option.name(), "readOnly");
    /// assert_eq!(option.resolve_entity_names(&["A", "C"]).len(), 1);
    /// ```
    #[must_use]
    pub fn unary<I, E>(name: UnaryOptionKind, entity_names: I, excluded_names: E) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        JdlOption::Unary(JdlUnaryOption {
            name,
            entity_names: entity_names.into_iter().map(Into::into).collect(),
            excluded_names: excluded_names.into_iter().map(Into::into).collect(),
        })
    }

    /// Build a name/value option over `entity_names`, minus `excluded_names`.
    ///
    /// The value is not checked against [`BinaryOptionKind::values`].
    #[must_use]
    pub fn binary<I, E>(
        name: BinaryOptionKind,
        value: impl Into<String>,
        entity_names: I,
        excluded_names: E,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        JdlOption::Binary(JdlBinaryOption {
            name,
            value: value.into(),
            entity_names: entity_names.into_iter().map(Into::into).collect(),
            excluded_names: excluded_names.into_iter().map(Into::into).collect(),
        })
    }

    /// JDL name of the option kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            JdlOption::Unary(o) => o.name.as_str(),
            JdlOption::Binary(o) => o.name.as_str(),
        }
    }

    /// The value of a binary option; `None` for flags.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            JdlOption::Unary(_) => None,
            JdlOption::Binary(o) => Some(&o.value),
        }
    }

    /// Entity names as declared, `*` included.
    #[must_use]
    pub fn entity_names(&self) -> &IndexSet<String> {
        match self {
            JdlOption::Unary(o) => &o.entity_names,
            JdlOption::Binary(o) => &o.entity_names,
        }
    }

    /// Names listed after `except`.
    #[must_use]
    pub fn excluded_names(&self) -> &IndexSet<String> {
        match self {
            JdlOption::Unary(o) => &o.excluded_names,
            JdlOption::Binary(o) => &o.excluded_names,
        }
    }

    /// True when the option was declared over `*`.
    #[must_use]
    pub fn has_wildcard(&self) -> bool {
        self.entity_names().contains(WILDCARD)
    }

    /// Concrete entity names the option applies to.
    ///
    /// A wildcard expands to `scope` minus the excluded names; otherwise the declared
    /// names are returned as-is, even when they fall outside `scope`.
    #[must_use]
    pub fn resolve_entity_names<S: AsRef<str>>(&self, scope: &[S]) -> IndexSet<String> {
        if self.has_wildcard() {
            let excluded = self.excluded_names();
            scope
                .iter()
                .map(|name| name.as_ref())
                .filter(|name| !excluded.contains(*name))
                .map(str::to_string)
                .collect()
        } else {
            self.entity_names().clone()
        }
    }
}

impl fmt::Display for JdlOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.entity_names().iter().map(String::as_str).collect();
        match self {
            JdlOption::Unary(o) => write!(f, "{} {}", o.name, names.join(", "))?,
            JdlOption::Binary(o) => {
                write!(f, "{} {} with {}", o.name, names.join(", "), o.value)?
            }
        }
        if !self.excluded_names().is_empty() {
            let excluded: Vec<&str> = self.excluded_names().iter().map(String::as_str).collect();
            write!(f, " except {}", excluded.join(", "))?;
        }
        Ok(())
    }
}

/// Value of a normalized annotation: a flag, a single value, or the distinct values of
/// a repeated annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// The single value, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Every string carried by the value, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        match self {
            OptionValue::Flag(_) => Vec::new(),
            OptionValue::Text(s) => vec![s.as_str()],
            OptionValue::List(values) => values.iter().flat_map(OptionValue::texts).collect(),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

/// Annotation name → value, in first-seen order.
pub type OptionMap = IndexMap<String, OptionValue>;
