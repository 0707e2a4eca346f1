//! Programmatic generation of minified CSS.
//!
//! [`RuleBuilder`] collects selectors, pseudo-class states and declarations
//! through a chained API and emits them as one whitespace-free string, adding
//! `-webkit-`/`-moz-` variants for the properties listed in
//! [`style::vendor_prefix::SPECIAL_PROPERTIES`].

pub mod builder;
pub mod style;

pub use builder::RuleBuilder;
