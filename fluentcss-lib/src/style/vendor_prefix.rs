//! Static table of properties that need more than a single declaration.
//!
//! Each entry maps a standard property name to the policy used to expand it
//! into browser-specific declarations.

/// The `-webkit-` vendor prefix.
pub const WEBKIT: &str = "-webkit-";
/// The `-moz-` vendor prefix.
pub const MOZ: &str = "-moz-";

/// How a special property is expanded into declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixPolicy {
    /// Unprefixed, `-webkit-` and `-moz-`, all with the same property name.
    Standard,
    /// Unprefixed and `-webkit-` with the standard name, then `-moz-` with
    /// the legacy Gecko name (e.g. `border-radius-topleft`).
    LegacyMoz(&'static str),
    /// A single unprefixed declaration with the value wrapped as `url('...')`.
    UrlWrapped,
}

/// Properties handled by `RuleBuilder::add_special_rules`.
pub const SPECIAL_PROPERTIES: &[(&str, PrefixPolicy)] = &[
    ("border-radius", PrefixPolicy::Standard),
    (
        "border-top-left-radius",
        PrefixPolicy::LegacyMoz("border-radius-topleft"),
    ),
    (
        "border-top-right-radius",
        PrefixPolicy::LegacyMoz("border-radius-topright"),
    ),
    (
        "border-bottom-left-radius",
        PrefixPolicy::LegacyMoz("border-radius-bottomleft"),
    ),
    (
        "border-bottom-right-radius",
        PrefixPolicy::LegacyMoz("border-radius-bottomright"),
    ),
    ("box-shadow", PrefixPolicy::Standard),
    ("transition", PrefixPolicy::Standard),
    ("transition-delay", PrefixPolicy::Standard),
    ("transition-duration", PrefixPolicy::Standard),
    ("transition-property", PrefixPolicy::Standard),
    ("transition-timing-function", PrefixPolicy::Standard),
    ("background-image", PrefixPolicy::UrlWrapped),
];

/// Look up the expansion policy for `property`. Matching is exact and
/// case-sensitive.
pub fn policy_for(property: &str) -> Option<PrefixPolicy> {
    SPECIAL_PROPERTIES
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, policy)| *policy)
}

/// True if `property` has an entry in [`SPECIAL_PROPERTIES`].
pub fn is_special(property: &str) -> bool {
    policy_for(property).is_some()
}
