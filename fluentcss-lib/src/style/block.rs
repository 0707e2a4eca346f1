// src/style/block.rs (minified text for declarations, blocks and media wrappers)
use std::fmt;

/// One `[prefix]property:value;` declaration. Values are written verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    /// e.g. "-webkit-"; `None` or empty for the standard property
    pub prefix: Option<&'a str>,
    pub property: &'a str,
    pub value: &'a str,
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            f.write_str(prefix)?;
        }
        write!(f, "{}:{};", self.property, self.value)
    }
}

/// The selector a block is emitted under: the bare selector, or one
/// `selector + state` entry per state joined by commas.
#[derive(Debug, Clone, Copy)]
pub struct GroupedSelector<'a> {
    pub selector: &'a str,
    pub states: &'a [String],
}

impl fmt::Display for GroupedSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.states.is_empty() {
            return f.write_str(self.selector);
        }
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}{}", self.selector, state)?;
        }
        Ok(())
    }
}

/// A finished `selector{declarations}` block.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub selector: GroupedSelector<'a>,
    /// Already formatted declarations, e.g. "color:red;margin:0;"
    pub declarations: &'a str,
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}}}", self.selector, self.declarations)
    }
}

/// `@media` wrapper around a run of blocks.
#[derive(Debug, Clone, Copy)]
pub struct MediaBlock<'a> {
    pub condition: &'a str,
    pub blocks: &'a str,
}

impl fmt::Display for MediaBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "(max-width: 400px)" needs no separator, "screen" does.
        let separator = if self.condition.starts_with('(') {
            ""
        } else {
            " "
        };
        write!(f, "@media{}{}{{{}}}", separator, self.condition, self.blocks)
    }
}
