// crates/travelreco-core/src/intent.rs
use crate::text::{normalize, singularize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed categories a keyword can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beach,
    Temple,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Beach, Category::Temple];

    /// Canonical (singular) keyword for the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beach => "beach",
            Category::Temple => "temple",
        }
    }

    /// Words that count as a mention of this category in catalog text.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Category::Beach => &["beach", "beaches", "coast", "shore", "playa"],
            Category::Temple => &["temple", "temples", "templo", "shrine"],
        }
    }

    /// Exact lookup on an already singularized keyword.
    pub fn from_singular(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == word)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a user keyword is asking for.
///
/// Serialized as `{"type": "category", "value": "beach"}` or
/// `{"type": "text", "value": "paris"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Intent {
    Category(Category),
    Text(String),
}

impl Intent {
    /// Classifies a raw keyword.
    ///
    /// Case and plural insensitive only for the two category words; anything
    /// else becomes a normalized free-text query.
    ///
    /// ```rust
    /// use travelreco_core::intent::{Category, Intent};
    ///
    /// assert_eq!(Intent::classify("Beaches"), Intent::Category(Category::Beach));
    /// assert_eq!(Intent::classify(" Paris "), Intent::Text("paris".into()));
    /// ```
    pub fn classify(keyword: &str) -> Self {
        match Category::from_singular(&singularize(keyword)) {
            Some(category) => Intent::Category(category),
            None => Intent::Text(normalize(keyword)),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Intent::Category(c) => Some(*c),
            Intent::Text(_) => None,
        }
    }
}

/// Free-function form of [`Intent::classify`].
#[inline]
pub fn classify(keyword: &str) -> Intent {
    Intent::classify(keyword)
}
