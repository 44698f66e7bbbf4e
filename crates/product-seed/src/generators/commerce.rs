//! Commerce vocabulary used for product names and descriptions.

use rand::Rng;
use rand::seq::SliceRandom;

const ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Electronic", "Rustic", "Intelligent", "Gorgeous", "Incredible",
    "Elegant", "Fantastic", "Practical", "Modern", "Recycled", "Sleek", "Bespoke", "Awesome",
    "Generic", "Handcrafted", "Handmade", "Oriental", "Licensed", "Luxurious", "Refined",
    "Unbranded", "Tasty",
];

const MATERIALS: &[&str] = &[
    "Steel", "Bronze", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal",
    "Soft", "Fresh", "Frozen", "Gold", "Silk", "Marble", "Ceramic",
];

const PRODUCTS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

/// Sentence templates; `{product}` and `{material}` are filled in per row.
const DESCRIPTION_TEMPLATES: &[&str] = &[
    "The {material} {product} combines comfort and durability for everyday use.",
    "Our {product} is built from {material} components chosen for reliability.",
    "A {material} {product} designed to fit modern homes and busy schedules.",
    "New range of {product} models with {material} finish and careful detailing.",
    "The slim {product} comes in {material} and ships ready to use out of the box.",
    "Carefully tested {material} {product} with a focus on long service life.",
    "This {product} pairs a {material} body with an understated design.",
    "Popular {material} {product}, restocked for the season.",
];

/// A product name broken into its parts so the description can refer back to them.
#[derive(Debug, Clone)]
pub struct ProductName {
    pub adjective: &'static str,
    pub material: &'static str,
    pub product: &'static str,
}

impl ProductName {
    /// Picks a random "adjective material product" combination.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            adjective: pick(ADJECTIVES, rng),
            material: pick(MATERIALS, rng),
            product: pick(PRODUCTS, rng),
        }
    }

    /// Renders a description sentence for this product.
    pub fn description(&self, rng: &mut impl Rng) -> String {
        pick(DESCRIPTION_TEMPLATES, rng)
            .replace("{material}", &self.material.to_lowercase())
            .replace("{product}", &self.product.to_lowercase())
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.adjective, self.material, self.product)
    }
}

fn pick(words: &'static [&'static str], rng: &mut impl Rng) -> &'static str {
    // Vocabulary lists are non-empty constants.
    words.choose(rng).copied().unwrap_or_default()
}
