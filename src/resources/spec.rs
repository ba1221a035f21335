//! Static binding declarations
//!
//! Every component declares its bindings once, as a `BindingSpec`: the name
//! of its own (group) entry, the domain path its default keys live under, and
//! the logical fields it renders.

/// How a field renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain value with a title and an empty-state text
    Text,
    /// Boolean answer, additionally bound to true/false/default texts
    Boolean {
        /// Use `resource.<domain>.<field>.<text>` instead of the sentinels
        domain_texts: bool,
    },
}

/// One logical field of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A plain field
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
        }
    }

    /// A boolean field using the sentinel true/false/default texts
    #[must_use]
    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Boolean {
                domain_texts: false,
            },
        }
    }

    /// A boolean field with domain-specific true/false/default texts
    #[must_use]
    pub const fn boolean_with_domain_texts(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Boolean { domain_texts: true },
        }
    }

    /// Whether the field carries true/false/default texts
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self.kind, FieldKind::Boolean { .. })
    }
}

/// Where a component's display title comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleSource {
    /// Always resolved from the group binding
    #[default]
    Binding,
    /// A `resourceValues.title` supplied by the caller replaces the group
    /// title binding entirely
    Upstream,
}

/// Declared bindings of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingSpec {
    /// Name of the component's own binding entry
    pub group: &'static str,
    /// Domain path for default keys; `None` for generic components, which
    /// only get a title when the caller supplies one
    pub domain: Option<&'static str>,
    /// Logical fields, in render order
    pub fields: &'static [FieldSpec],
    pub title_source: TitleSource,
    /// Use `resource.<domain>.emptyFieldText` for the group empty text
    pub domain_empty_text: bool,
    /// The group entry itself is a boolean answer
    pub boolean_group: bool,
}

impl BindingSpec {
    /// A component bound under a domain path
    #[must_use]
    pub const fn new(
        group: &'static str,
        domain: &'static str,
        fields: &'static [FieldSpec],
    ) -> Self {
        Self {
            group,
            domain: Some(domain),
            fields,
            title_source: TitleSource::Binding,
            domain_empty_text: false,
            boolean_group: false,
        }
    }

    /// A generic component with no domain defaults
    #[must_use]
    pub const fn generic(group: &'static str) -> Self {
        Self {
            group,
            domain: None,
            fields: &[],
            title_source: TitleSource::Binding,
            domain_empty_text: false,
            boolean_group: false,
        }
    }

    /// Accept an upstream-resolved title
    #[must_use]
    pub const fn with_upstream_title(mut self) -> Self {
        self.title_source = TitleSource::Upstream;
        self
    }

    /// Use a domain-specific group empty text
    #[must_use]
    pub const fn with_domain_empty_text(mut self) -> Self {
        self.domain_empty_text = true;
        self
    }

    /// Bind true/false/default texts on the group entry
    #[must_use]
    pub const fn with_boolean_texts(mut self) -> Self {
        self.boolean_group = true;
        self
    }

    /// Look up a declared field
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}
