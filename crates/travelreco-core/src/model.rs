// crates/travelreco-core/src/model.rs
use crate::raw::{truthy_string, truthy_strings};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A destination inside a [`Country`].
///
/// The typed fields are a read-only view used for matching: each holds only
/// truthy values (see [`crate::raw`]). The entry itself is kept untouched in
/// `source`, which is what gets serialized, so a [`MatchResult`] hands back
/// exactly what the catalog contained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct City {
    pub name: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub r#type: Option<String>,
    pub image_url: Option<String>,
    /// Older catalogs use `image` instead of `imageUrl`.
    pub image: Option<String>,
    pub source: Map<String, Value>,
}

impl City {
    /// Decodes one catalog entry. Entries that are not objects become an
    /// empty city.
    pub fn from_value(v: &Value) -> Self {
        let Value::Object(map) = v else {
            return City::default();
        };
        let text = |key: &str| map.get(key).and_then(truthy_string);
        let seq = |key: &str| map.get(key).map(truthy_strings).unwrap_or_default();
        City {
            name: text("name"),
            description: text("description"),
            keywords: seq("keywords"),
            tags: seq("tags"),
            categories: seq("categories"),
            r#type: text("type"),
            image_url: text("imageUrl"),
            image: text("image"),
            source: map.clone(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// `imageUrl`, falling back to the legacy `image` field.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().or(self.image.as_deref())
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.source.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Ok(City::from_value(&v))
    }
}

/// A country and its cities.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Country {
    pub name: String,
    pub cities: Vec<City>,
}

impl Country {
    /// Decodes one catalog entry. A missing name becomes `""`, missing or
    /// non-array `cities` becomes empty.
    pub fn from_value(v: &Value) -> Self {
        let Value::Object(map) = v else {
            return Country::default();
        };
        let name = map
            .get("name")
            .and_then(truthy_string)
            .unwrap_or_default();
        let cities = match map.get("cities") {
            Some(Value::Array(items)) => items.iter().map(City::from_value).collect(),
            _ => Vec::new(),
        };
        Country { name, cities }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Ok(Country::from_value(&v))
    }
}

/// The loaded travel dataset.
///
/// Two source layouts are in circulation: a bare array of countries, or an
/// object carrying the array under `countries`. The layout is resolved once
/// here so everything downstream sees a plain `&[Country]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Catalog {
    /// `{"countries": [...], ...}`
    Wrapped(Vec<Country>),
    /// `[...]`
    Bare(Vec<Country>),
    /// Any other JSON value. Searches over it find nothing.
    #[default]
    Unrecognized,
}

impl Catalog {
    /// Resolves the layout of an arbitrary JSON value. Never fails.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use travelreco_core::Catalog;
    ///
    /// let wrapped = Catalog::from_value(json!({"countries": [{"name": "Japan"}]}));
    /// let bare = Catalog::from_value(json!([{"name": "Japan"}]));
    /// assert_eq!(wrapped.countries(), bare.countries());
    /// assert!(Catalog::from_value(json!("nope")).countries().is_empty());
    /// ```
    pub fn from_value(v: Value) -> Self {
        if let Some(Value::Array(items)) = v.get("countries") {
            return Catalog::Wrapped(items.iter().map(Country::from_value).collect());
        }
        match v {
            Value::Array(items) => Catalog::Bare(items.iter().map(Country::from_value).collect()),
            _ => Catalog::Unrecognized,
        }
    }

    /// The canonical country sequence, whatever the source layout.
    pub fn countries(&self) -> &[Country] {
        match self {
            Catalog::Wrapped(c) | Catalog::Bare(c) => c,
            Catalog::Unrecognized => &[],
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Catalog::Unrecognized)
    }
}

impl From<Vec<Country>> for Catalog {
    fn from(countries: Vec<Country>) -> Self {
        Catalog::Bare(countries)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = Value::deserialize(deserializer)?;
        Ok(Catalog::from_value(v))
    }
}

/// Countries of an optional catalog; an absent catalog has none.
pub fn list_countries(catalog: Option<&Catalog>) -> &[Country] {
    catalog.map(Catalog::countries).unwrap_or(&[])
}

/// A matched city, copied out of the catalog together with its country name.
///
/// Serializes as the flattened city followed by `"country"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub city: City,
    pub country: String,
}

impl MatchResult {
    /// Shallow copy of `city` tagged with `country`. A `country` key in the
    /// city's own entry is replaced.
    pub fn new(city: &City, country: &str) -> Self {
        let mut city = city.clone();
        city.source.remove("country");
        MatchResult {
            city,
            country: country.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        self.city.name()
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}
