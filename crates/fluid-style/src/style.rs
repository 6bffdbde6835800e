//! Breakpoint-keyed style objects.
//!
//! A [`StyleObject`] is what style functions return and what the engine
//! hands back: unconditional declarations plus media query blocks.
//!
//! ```text
//! {
//!   fontSize: "16px",
//!   "@media screen and (min-width: 40em)": { fontSize: "21px" }
//! }
//! ```
//!
//! Both halves keep insertion order. Serialization produces the flat shape
//! above with base declarations first.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::CssValue;

/// Property declarations: CSS property name to value.
pub type Declarations = IndexMap<String, CssValue>;

/// Base declarations plus media-query-scoped declaration blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    base: Declarations,
    media: IndexMap<String, Declarations>,
}

impl StyleObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an unconditional declaration, returning `self` for chaining.
    pub fn with(mut self, property: &str, value: impl Into<CssValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a declaration inside a media query block, returning `self` for chaining.
    pub fn with_media(
        mut self,
        query: &str,
        property: &str,
        value: impl Into<CssValue>,
    ) -> Self {
        self.insert_media(query, property, value);
        self
    }

    /// Sets an unconditional declaration.
    pub fn insert(&mut self, property: &str, value: impl Into<CssValue>) {
        self.base.insert(property.to_string(), value.into());
    }

    /// Sets a declaration inside a media query block, creating the block if needed.
    pub fn insert_media(&mut self, query: &str, property: &str, value: impl Into<CssValue>) {
        self.block_mut(query)
            .insert(property.to_string(), value.into());
    }

    /// Returns the block for a media query, creating an empty one if needed.
    pub fn block_mut(&mut self, query: &str) -> &mut Declarations {
        self.media.entry(query.to_string()).or_default()
    }

    /// Replaces (or adds) a whole media query block.
    pub fn set_block(&mut self, query: &str, declarations: Declarations) {
        self.media.insert(query.to_string(), declarations);
    }

    /// Returns the unconditional declarations.
    pub fn base(&self) -> &Declarations {
        &self.base
    }

    /// Returns all media query blocks, in order.
    pub fn media(&self) -> &IndexMap<String, Declarations> {
        &self.media
    }

    /// Returns the block for a media query.
    pub fn block(&self, query: &str) -> Option<&Declarations> {
        self.media.get(query)
    }

    /// Returns an unconditional declaration.
    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.base.get(property)
    }

    /// Returns a declaration inside a media query block.
    pub fn get_media(&self, query: &str, property: &str) -> Option<&CssValue> {
        self.media.get(query).and_then(|block| block.get(property))
    }

    /// Iterates over media query keys, in order.
    pub fn media_queries(&self) -> impl Iterator<Item = &str> {
        self.media.keys().map(String::as_str)
    }

    /// Returns `true` if there are no declarations and no blocks.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.media.is_empty()
    }
}

impl Serialize for StyleObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.base.len() + self.media.len()))?;
        for (property, value) in &self.base {
            map.serialize_entry(property, value)?;
        }
        for (query, block) in &self.media {
            map.serialize_entry(query, block)?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Value(CssValue),
    Block(Declarations),
}

struct StyleObjectVisitor;

impl<'de> Visitor<'de> for StyleObjectVisitor {
    type Value = StyleObject;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of CSS properties and media query blocks")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleObject, A::Error> {
        let mut style = StyleObject::new();
        while let Some((key, entry)) = access.next_entry::<String, Entry>()? {
            match entry {
                Entry::Value(value) => {
                    style.base.insert(key, value);
                }
                Entry::Block(block) => {
                    style.media.insert(key, block);
                }
            }
        }
        Ok(style)
    }
}

impl<'de> Deserialize<'de> for StyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StyleObjectVisitor)
    }
}
