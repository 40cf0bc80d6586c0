use crate::str::{normalize, pluralize, underscore};
use crate::{Error, Result};

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// An identifier split into lowercase parts.
///
/// Storage names are derived from it: a model named `OrderItem` becomes the
/// table `order_items`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    /// Splits a camelCase identifier on its case boundaries.
    pub fn new(src: &str) -> Self {
        Self::from_parts(&underscore(src))
    }

    /// Builds a name from arbitrary text, failing when nothing usable remains.
    pub fn normalized(src: &str) -> Result<Self> {
        let normalized = normalize(src);

        if normalized.is_empty() {
            return Err(Error::empty_name(src));
        }

        Ok(Self::from_parts(&normalized))
    }

    fn from_parts(snake: &str) -> Self {
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();

        Self { parts }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_snake_case(&self) -> String {
        self.snake_case().to_ascii_uppercase()
    }

    pub fn camel_case(&self) -> String {
        self.snake_case().to_lower_camel_case()
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    /// The pluralized snake-case form, used as a table name.
    pub fn plural(&self) -> String {
        pluralize(&self.snake_case())
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.snake_case())
    }
}

impl core::str::FromStr for Name {
    type Err = Error;

    /// Same as [`Name::normalized`]; camelCase boundaries are not split.
    fn from_str(src: &str) -> Result<Self> {
        Self::normalized(src)
    }
}
