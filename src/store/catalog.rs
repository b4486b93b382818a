//! Catalog Loader
//!
//! Parses the flat-file product catalog. One product per line, comma
//! separated, leading discriminator token:
//!
//! ```text
//! food,Salad,15,vegan,120.0 5.0 10.0 2.0
//! drink,Cola,8,true,250 500 1000
//! ```
//!
//! A discriminator other than `food` is read as a drink, matching the
//! historical format. Parsing is strictly positional; the delimiter cannot
//! appear inside a field. The load is fail-fast: the first malformed line
//! aborts it and no partial catalog is returned.

use crate::core::{PosError, PosResult};
use crate::models::{Category, Product, ProductKind};
use std::path::Path;

/// The product catalog: an ordered, read-only sequence of products.
///
/// Line order in the source file is preserved and is the index space used
/// for 1-based interactive numbering.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse a whole catalog from text, in line order.
    pub fn parse(input: &str) -> PosResult<Self> {
        let mut products = Vec::new();
        for (idx, line) in input.lines().enumerate() {
            products.push(parse_product(line, idx + 1)?);
        }
        Ok(Self { products })
    }

    /// Read and parse the catalog file at `path`.
    pub fn load(path: impl AsRef<Path>) -> PosResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::parse(&text)?;
        tracing::info!(
            products = catalog.len(),
            path = %path.as_ref().display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product at a 0-based position.
    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// First product with exactly this name, if any.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

fn parse_product(line: &str, lineno: usize) -> PosResult<Product> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 {
        return Err(PosError::catalog(
            lineno,
            format!("expected 5 fields, got {}", fields.len()),
        ));
    }

    let name = fields[1];
    if name.is_empty() {
        return Err(PosError::catalog(lineno, "empty product name"));
    }
    let price: i64 = fields[2]
        .parse()
        .map_err(|_| PosError::catalog(lineno, format!("invalid price '{}'", fields[2])))?;
    if price < 0 {
        return Err(PosError::catalog(lineno, format!("negative price {price}")));
    }

    let kind = if fields[0] == "food" {
        parse_food(fields[3], fields[4], lineno)?
    } else {
        parse_drink(fields[3], fields[4], lineno)?
    };

    Ok(Product {
        name: name.to_string(),
        price,
        kind,
    })
}

fn parse_food(category: &str, values: &str, lineno: usize) -> PosResult<ProductKind> {
    let category = Category::parse(category)
        .ok_or_else(|| PosError::catalog(lineno, format!("unknown category '{category}'")))?;

    let mut nutritional_values = [0.0; 4];
    let mut parsed = 0;
    for token in values.split(' ') {
        let v: f64 = token
            .parse()
            .map_err(|_| PosError::catalog(lineno, format!("invalid nutritional value '{token}'")))?;
        if v < 0.0 {
            return Err(PosError::catalog(
                lineno,
                format!("negative nutritional value {v}"),
            ));
        }
        if parsed == 4 {
            return Err(PosError::catalog(lineno, "expected 4 nutritional values"));
        }
        nutritional_values[parsed] = v;
        parsed += 1;
    }
    if parsed != 4 {
        return Err(PosError::catalog(lineno, "expected 4 nutritional values"));
    }

    Ok(ProductKind::Food {
        category,
        nutritional_values,
    })
}

fn parse_drink(alcohol_free: &str, sizes: &str, lineno: usize) -> PosResult<ProductKind> {
    let alcohol_free = match alcohol_free {
        "true" => true,
        "false" => false,
        other => {
            return Err(PosError::catalog(
                lineno,
                format!("invalid boolean '{other}'"),
            ));
        }
    };

    let mut available_sizes = Vec::new();
    for token in sizes.split(' ') {
        let size: u32 = token
            .parse()
            .map_err(|_| PosError::catalog(lineno, format!("invalid size '{token}'")))?;
        if size == 0 {
            return Err(PosError::catalog(lineno, "size must be positive"));
        }
        available_sizes.push(size);
    }

    Ok(ProductKind::Drink {
        alcohol_free,
        available_sizes,
    })
}
