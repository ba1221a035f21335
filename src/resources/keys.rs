//! Resource key naming
//!
//! Keys are dot-separated paths mirroring the domain hierarchy, e.g.
//! `resource.rammebetingelser.arealdisponering.tomtearealet.title`. Fixed
//! sentinels are used wherever no domain-specific default exists.

use std::fmt;

/// Prefix shared by every resource key
pub const RESOURCE_PREFIX: &str = "resource";

/// Sentinel empty-state text
pub const DEFAULT_EMPTY_FIELD_TEXT: &str = "resource.emptyFieldText.default";
/// Sentinel text for `true`
pub const DEFAULT_TRUE_TEXT: &str = "resource.trueText.default";
/// Sentinel text for `false`
pub const DEFAULT_FALSE_TEXT: &str = "resource.falseText.default";
/// Sentinel text for an unanswered boolean
pub const DEFAULT_DEFAULT_TEXT: &str = "resource.defaultText.default";

/// The sub-keys of a resource binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubKey {
    /// Field or group heading
    Title,
    /// Text shown when there is no value
    EmptyFieldText,
    /// Text shown for `true`
    TrueText,
    /// Text shown for `false`
    FalseText,
    /// Text shown for an unanswered boolean
    DefaultText,
}

impl SubKey {
    /// Every sub-key, in output order
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::EmptyFieldText,
        Self::TrueText,
        Self::FalseText,
        Self::DefaultText,
    ];

    /// The camelCase name used in override trees and key paths
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::EmptyFieldText => "emptyFieldText",
            Self::TrueText => "trueText",
            Self::FalseText => "falseText",
            Self::DefaultText => "defaultText",
        }
    }

    /// Sentinel key used when no domain-specific default is defined
    #[must_use]
    pub const fn sentinel(self) -> Option<&'static str> {
        match self {
            Self::Title => None,
            Self::EmptyFieldText => Some(DEFAULT_EMPTY_FIELD_TEXT),
            Self::TrueText => Some(DEFAULT_TRUE_TEXT),
            Self::FalseText => Some(DEFAULT_FALSE_TEXT),
            Self::DefaultText => Some(DEFAULT_DEFAULT_TEXT),
        }
    }
}

impl fmt::Display for SubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a domain-specific key: `resource.<domain>[.<field>].<subkey>`
#[must_use]
pub fn resource_key(domain: &str, field: Option<&str>, sub_key: SubKey) -> String {
    match field {
        Some(field) => format!("{RESOURCE_PREFIX}.{domain}.{field}.{sub_key}"),
        None => format!("{RESOURCE_PREFIX}.{domain}.{sub_key}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_key_paths() {
        assert_eq!(
            resource_key("rammebetingelser.arealdisponering", Some("tomtearealet"), SubKey::Title),
            "resource.rammebetingelser.arealdisponering.tomtearealet.title"
        );
        assert_eq!(
            resource_key("rammebetingelser.adkomst", None, SubKey::EmptyFieldText),
            "resource.rammebetingelser.adkomst.emptyFieldText"
        );
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(SubKey::Title.sentinel(), None);
        assert_eq!(SubKey::TrueText.sentinel(), Some("resource.trueText.default"));
        assert_eq!(
            SubKey::DefaultText.sentinel(),
            Some("resource.defaultText.default")
        );
    }
}
