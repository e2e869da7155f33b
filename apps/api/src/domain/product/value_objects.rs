use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog category of a product
///
/// Serialized as its lowercase name (`"mobile"`, `"computer"`, ...), which is
/// also the value submitted by the add form's select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Phones and other handheld devices
    Mobile,
    /// Desktops and laptops
    Computer,
    Tablet,
    Audio,
    /// Anything that does not fit elsewhere
    Other,
}

impl Category {
    /// Every category, in the order the add form lists them
    pub const ALL: [Category; 5] = [
        Category::Mobile,
        Category::Computer,
        Category::Tablet,
        Category::Audio,
        Category::Other,
    ];

    /// Returns the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mobile => "mobile",
            Category::Computer => "computer",
            Category::Tablet => "tablet",
            Category::Audio => "audio",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a lowercase category name
    ///
    /// # Example
    /// ```
    /// use productos_api::domain::product::Category;
    ///
    /// assert_eq!("computer".parse::<Category>(), Ok(Category::Computer));
    /// assert!("fridge".parse::<Category>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
