//! Product Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Food category (closed set)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Vegan,
    Vegetarian,
    Meat,
    Fish,
    Dessert,
}

impl Category {
    /// Parse a category token, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "VEGAN" => Some(Self::Vegan),
            "VEGETARIAN" => Some(Self::Vegetarian),
            "MEAT" => Some(Self::Meat),
            "FISH" => Some(Self::Fish),
            "DESSERT" => Some(Self::Dessert),
            _ => None,
        }
    }

    /// Canonical uppercase name, as shown in catalog listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegan => "VEGAN",
            Self::Vegetarian => "VEGETARIAN",
            Self::Meat => "MEAT",
            Self::Fish => "FISH",
            Self::Dessert => "DESSERT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific product payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "type")]
pub enum ProductKind {
    Food {
        category: Category,
        /// Calories, proteins, carbohydrates, fats
        nutritional_values: [f64; 4],
    },
    Drink {
        alcohol_free: bool,
        /// Available sizes in millilitres, at least one
        available_sizes: Vec<u32>,
    },
}

/// Product entity
///
/// Identity is by `name`, which is unique within a catalog. A product is
/// immutable after load; orders hold clones of the catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    /// Price in RON (minor currency unit, non-negative)
    pub price: i64,
    pub kind: ProductKind,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Price: {}RON; ", self.name, self.price)?;
        match &self.kind {
            ProductKind::Food {
                category,
                nutritional_values,
            } => {
                write!(
                    f,
                    "Category: {}; (calories, proteins, carbo, fats): (",
                    category
                )?;
                for (i, v) in nutritional_values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, ")")
            }
            ProductKind::Drink {
                alcohol_free,
                available_sizes,
            } => {
                write!(f, "Alcohol Free: {alcohol_free}; Available Size: ")?;
                for (i, s) in available_sizes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{s}ml")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("vegan"), Some(Category::Vegan));
        assert_eq!(Category::parse("MEAT"), Some(Category::Meat));
        assert_eq!(Category::parse("Dessert"), Some(Category::Dessert));
        assert_eq!(Category::parse("spicy"), None);
    }

    #[test]
    fn test_food_display() {
        let p = Product {
            name: "Salad".to_string(),
            price: 15,
            kind: ProductKind::Food {
                category: Category::Vegan,
                nutritional_values: [120.0, 5.0, 10.0, 2.0],
            },
        };
        assert_eq!(
            p.to_string(),
            "Salad; Price: 15RON; Category: VEGAN; (calories, proteins, carbo, fats): (120, 5, 10, 2)"
        );
    }

    #[test]
    fn test_drink_display() {
        let p = Product {
            name: "Cola".to_string(),
            price: 8,
            kind: ProductKind::Drink {
                alcohol_free: true,
                available_sizes: vec![250, 500],
            },
        };
        assert_eq!(
            p.to_string(),
            "Cola; Price: 8RON; Alcohol Free: true; Available Size: 250ml, 500ml"
        );
    }
}
