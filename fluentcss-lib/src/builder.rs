//! Fluent builder that accumulates minified CSS.
//!
//! Declarations are collected for the current selector and written out as a
//! `selector{...}` block whenever the selector (or its set of pseudo-class
//! states) changes, and once more when the output is read.

use crate::style::block::{Block, Declaration, GroupedSelector, MediaBlock};
use crate::style::vendor_prefix::{self, PrefixPolicy, MOZ, WEBKIT};
use log::{debug, trace, warn};

/// An open `@media` query collecting finished blocks.
#[derive(Debug, Default)]
struct MediaQuery {
    condition: String,
    blocks: String,
}

/// Accumulates selectors, states and declarations into one minified string.
///
/// ```
/// use fluentcss_lib::RuleBuilder;
///
/// let mut css = RuleBuilder::new();
/// css.set_selector(".btn")
///     .add_selector_states([":hover", ":focus"])
///     .add_property("color", "red");
/// assert_eq!(css.css_output(), ".btn:hover,.btn:focus{color:red;}");
/// ```
#[derive(Debug, Default)]
pub struct RuleBuilder {
    selector: String,
    selector_states: Vec<String>,
    /// Declarations for the current selector, not yet part of any block.
    rules: String,
    output: String,
    media: Option<MediaQuery>,
}

impl RuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `selector` the target of the following declarations.
    ///
    /// Pending rules of the previous selector are flushed first, but only if
    /// that selector is non-empty; rules added before any selector was set
    /// carry over to the new one.
    pub fn set_selector(&mut self, selector: &str) -> &mut Self {
        if !self.selector.is_empty() {
            self.flush_rules();
        }
        self.selector.clear();
        self.selector.push_str(selector);
        self
    }

    /// Same as [`set_selector`](Self::set_selector).
    pub fn change_selector(&mut self, selector: &str) -> &mut Self {
        self.set_selector(selector)
    }

    /// Add a pseudo-class suffix such as `:hover`. With `reset` the current
    /// states are flushed and cleared first.
    pub fn add_selector_state(&mut self, state: &str, reset: bool) -> &mut Self {
        if reset {
            self.reset_selector_states();
        }
        self.selector_states.push(state.to_string());
        self
    }

    /// Replace the state list with `states`, kept in the given order.
    pub fn add_selector_states<I, S>(&mut self, states: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset_selector_states();
        for state in states {
            self.add_selector_state(state.as_ref(), false);
        }
        self
    }

    /// Flush the rules of the current selector/state combination and drop
    /// all states.
    pub fn reset_selector_states(&mut self) -> &mut Self {
        self.flush_rules();
        if !self.selector_states.is_empty() {
            self.selector_states.clear();
        }
        self
    }

    /// Append one declaration, optionally vendor-prefixed.
    pub fn add_rule(&mut self, property: &str, value: &str, prefix: Option<&str>) -> &mut Self {
        let declaration = Declaration {
            prefix,
            property,
            value,
        };
        trace!("adding declaration {}", declaration);
        self.rules.push_str(&declaration.to_string());
        self
    }

    /// Append the prefixed expansion of `property`.
    ///
    /// Properties without a table entry get the standard expansion
    /// (unprefixed, `-webkit-`, `-moz-`).
    pub fn add_special_rules(&mut self, property: &str, value: &str) -> &mut Self {
        match vendor_prefix::policy_for(property) {
            Some(PrefixPolicy::LegacyMoz(moz_name)) => {
                self.add_rule(property, value, None)
                    .add_rule(property, value, Some(WEBKIT))
                    .add_rule(moz_name, value, Some(MOZ));
            }
            Some(PrefixPolicy::UrlWrapped) => {
                let url = format!("url('{}')", value);
                self.add_rule(property, &url, None);
            }
            Some(PrefixPolicy::Standard) | None => {
                self.add_rule(property, value, None)
                    .add_rule(property, value, Some(WEBKIT))
                    .add_rule(property, value, Some(MOZ));
            }
        }
        self
    }

    /// Append `property:value;`, expanding special properties.
    pub fn add_property(&mut self, property: &str, value: &str) -> &mut Self {
        if vendor_prefix::is_special(property) {
            self.add_special_rules(property, value)
        } else {
            self.add_rule(property, value, None)
        }
    }

    /// Add every `(property, value)` pair in iteration order.
    pub fn add_properties<I, K, V>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (property, value) in properties {
            self.add_property(property.as_ref(), value.as_ref());
        }
        self
    }

    /// Route the following blocks into `@media <condition>{...}`.
    ///
    /// Queries do not nest: an open query is closed before the new one
    /// starts.
    pub fn start_media_query(&mut self, condition: &str) -> &mut Self {
        if let Some(open) = &self.media {
            warn!(
                "media query `{}` still open when starting `{}`, closing it",
                open.condition, condition
            );
            self.stop_media_query();
        }
        self.flush_rules();
        debug!("opening media query `{}`", condition);
        self.media = Some(MediaQuery {
            condition: condition.to_string(),
            blocks: String::new(),
        });
        self
    }

    /// Close the open media query and append it to the output. Without an
    /// open query this only flushes pending rules.
    pub fn stop_media_query(&mut self) -> &mut Self {
        self.flush_rules();
        if let Some(query) = self.media.take() {
            debug!("closing media query `{}`", query.condition);
            if !query.blocks.is_empty() {
                let media = MediaBlock {
                    condition: &query.condition,
                    blocks: &query.blocks,
                };
                self.output.push_str(&media.to_string());
            }
        }
        self
    }

    /// Flush what is still pending and return everything built so far.
    ///
    /// An open media query is closed. Calling this again returns the same
    /// text unless new rules were added in between.
    pub fn css_output(&mut self) -> &str {
        self.flush_rules();
        if self.media.is_some() {
            self.stop_media_query();
        }
        &self.output
    }

    /// Consuming variant of [`css_output`](Self::css_output).
    pub fn into_css(mut self) -> String {
        self.css_output();
        self.output
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn selector_states(&self) -> &[String] {
        &self.selector_states
    }

    /// Declarations added since the last flush.
    pub fn pending_rules(&self) -> &str {
        &self.rules
    }

    pub fn in_media_query(&self) -> bool {
        self.media.is_some()
    }

    /// Turn the pending rules into a block. No-op when nothing is pending.
    fn flush_rules(&mut self) {
        if self.rules.is_empty() {
            return;
        }

        let block = Block {
            selector: GroupedSelector {
                selector: &self.selector,
                states: &self.selector_states,
            },
            declarations: &self.rules,
        }
        .to_string();
        debug!("flushing block {}", block);

        match &mut self.media {
            Some(query) => query.blocks.push_str(&block),
            None => self.output.push_str(&block),
        }
        self.rules.clear();
    }
}
