//! Ingredient categories and their display labels

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Coarse classification of a fridge item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Meat,
    Fish,
    Dairy,
    Eggs,
    Vegetables,
    Fruits,
    Grains,
    Bakery,
    Oil,
    Sauce,
    Condiment,
    Spices,
    Beverages,
    Frozen,
    Sweets,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Meat,
        Category::Fish,
        Category::Dairy,
        Category::Eggs,
        Category::Vegetables,
        Category::Fruits,
        Category::Grains,
        Category::Bakery,
        Category::Oil,
        Category::Sauce,
        Category::Condiment,
        Category::Spices,
        Category::Beverages,
        Category::Frozen,
        Category::Sweets,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meat => "meat",
            Category::Fish => "fish",
            Category::Dairy => "dairy",
            Category::Eggs => "eggs",
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Grains => "grains",
            Category::Bakery => "bakery",
            Category::Oil => "oil",
            Category::Sauce => "sauce",
            Category::Condiment => "condiment",
            Category::Spices => "spices",
            Category::Beverages => "beverages",
            Category::Frozen => "frozen",
            Category::Sweets => "sweets",
            Category::Other => "other",
        }
    }

    /// Parse a backend category string. Backends disagree on singular/plural
    /// and sometimes send localized names; anything unrecognized is `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "meat" | "мясо" | "mięso" => Category::Meat,
            "fish" | "seafood" | "рыба" | "ryby" | "ryba" => Category::Fish,
            "dairy" | "milk" | "молочные" | "nabiał" => Category::Dairy,
            "egg" | "eggs" | "яйца" | "jajka" | "jaja" => Category::Eggs,
            "vegetable" | "vegetables" | "veg" | "овощи" | "warzywa" => Category::Vegetables,
            "fruit" | "fruits" | "фрукты" | "owoce" => Category::Fruits,
            "grain" | "grains" | "cereals" | "pasta" | "крупы" | "zboża" => Category::Grains,
            "bakery" | "bread" | "выпечка" | "pieczywo" => Category::Bakery,
            "oil" | "oils" | "масла" | "oleje" => Category::Oil,
            "sauce" | "sauces" | "соусы" | "sosy" => Category::Sauce,
            "condiment" | "condiments" | "приправы" | "przyprawy" => Category::Condiment,
            "spice" | "spices" | "специи" => Category::Spices,
            "beverage" | "beverages" | "drinks" | "напитки" | "napoje" => Category::Beverages,
            "frozen" | "заморозка" | "mrożonki" => Category::Frozen,
            "sweets" | "sweet" | "сладкое" | "słodycze" => Category::Sweets,
            _ => Category::Other,
        }
    }

    /// Human-readable label for this category
    pub fn label(&self, language: Language) -> &'static str {
        let table = match language {
            Language::Russian => LABELS_RU,
            Language::Polish => LABELS_PL,
            Language::English => LABELS_EN,
        };
        table
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, label)| *label)
            .unwrap_or(self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full label table for a language, in category order
pub fn category_labels(language: Language) -> Vec<(Category, &'static str)> {
    Category::ALL
        .iter()
        .map(|category| (*category, category.label(language)))
        .collect()
}

const LABELS_RU: &[(Category, &str)] = &[
    (Category::Meat, "Мясо"),
    (Category::Fish, "Рыба"),
    (Category::Dairy, "Молочные продукты"),
    (Category::Eggs, "Яйца"),
    (Category::Vegetables, "Овощи"),
    (Category::Fruits, "Фрукты"),
    (Category::Grains, "Крупы"),
    (Category::Bakery, "Выпечка"),
    (Category::Oil, "Масла"),
    (Category::Sauce, "Соусы"),
    (Category::Condiment, "Приправы"),
    (Category::Spices, "Специи"),
    (Category::Beverages, "Напитки"),
    (Category::Frozen, "Заморозка"),
    (Category::Sweets, "Сладкое"),
    (Category::Other, "Другое"),
];

const LABELS_PL: &[(Category, &str)] = &[
    (Category::Meat, "Mięso"),
    (Category::Fish, "Ryby"),
    (Category::Dairy, "Nabiał"),
    (Category::Eggs, "Jajka"),
    (Category::Vegetables, "Warzywa"),
    (Category::Fruits, "Owoce"),
    (Category::Grains, "Zboża"),
    (Category::Bakery, "Pieczywo"),
    (Category::Oil, "Oleje"),
    (Category::Sauce, "Sosy"),
    (Category::Condiment, "Przyprawy"),
    (Category::Spices, "Zioła i przyprawy korzenne"),
    (Category::Beverages, "Napoje"),
    (Category::Frozen, "Mrożonki"),
    (Category::Sweets, "Słodycze"),
    (Category::Other, "Inne"),
];

const LABELS_EN: &[(Category, &str)] = &[
    (Category::Meat, "Meat"),
    (Category::Fish, "Fish & seafood"),
    (Category::Dairy, "Dairy"),
    (Category::Eggs, "Eggs"),
    (Category::Vegetables, "Vegetables"),
    (Category::Fruits, "Fruits"),
    (Category::Grains, "Grains"),
    (Category::Bakery, "Bakery"),
    (Category::Oil, "Oils"),
    (Category::Sauce, "Sauces"),
    (Category::Condiment, "Condiments"),
    (Category::Spices, "Spices"),
    (Category::Beverages, "Beverages"),
    (Category::Frozen, "Frozen"),
    (Category::Sweets, "Sweets"),
    (Category::Other, "Other"),
];
