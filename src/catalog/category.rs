//! Car categories offered by the wizard.

use serde::{Deserialize, Serialize};

/// Icon shown next to a category title.
///
/// Only a hint for the rendering layer; it carries no behavior.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CategoryIcon {
    Users,
    Car,
    Gauge,
}

/// Display specs printed on a category card.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CategorySpecs {
    pub seats: String,
    pub fuel: String,
    pub body_type: String,
}

/// An example model revealed when hovering a category card.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CarModel {
    pub name: String,
    pub image: String,
}

impl CarModel {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// A selectable car category.
///
/// `title` is the selection key: the wizard stores the title of the chosen
/// category, and lookups compare titles by exact string equality.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CarCategory {
    pub title: String,
    pub description: String,
    pub price_range: String,
    pub specs: CategorySpecs,
    pub icon: CategoryIcon,
    pub image: String,
    pub possible_models: Vec<CarModel>,
}

const CARD_IMAGE: &str = "/placeholder.svg?height=200&width=400";
const MODEL_IMAGE: &str = "/placeholder.svg?height=100&width=200";

struct Entry {
    icon: CategoryIcon,
    title: &'static str,
    description: &'static str,
    price_range: &'static str,
    specs: [&'static str; 3],
    models: [&'static str; 3],
}

const STANDARD: [Entry; 3] = [
    Entry {
        icon: CategoryIcon::Users,
        title: "Family SUV",
        description: "Spacious SUVs perfect for family adventures",
        price_range: "from €399/month",
        specs: ["5-7 seats", "Hybrid/Electric", "SUV"],
        models: ["Jeep Compass", "Nissan Qashqai", "Skoda Enyaq"],
    },
    Entry {
        icon: CategoryIcon::Car,
        title: "City Compact",
        description: "Nimble cars ideal for urban driving",
        price_range: "from €279/month",
        specs: ["4-5 seats", "Petrol/Electric", "Compact"],
        models: ["VW ID.3", "Peugeot e-208", "Mini Cooper"],
    },
    Entry {
        icon: CategoryIcon::Gauge,
        title: "Premium Sport",
        description: "High-performance luxury vehicles",
        price_range: "from €599/month",
        specs: ["4-5 seats", "Petrol", "Sports"],
        models: ["Cupra Formentor", "BMW M135i", "Mercedes-AMG A35"],
    },
];

/// The three categories every wizard ships with.
pub fn standard_categories() -> Vec<CarCategory> {
    STANDARD
        .iter()
        .map(|entry| {
            let [seats, fuel, body_type] = entry.specs;
            CarCategory {
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                price_range: entry.price_range.to_string(),
                specs: CategorySpecs {
                    seats: seats.to_string(),
                    fuel: fuel.to_string(),
                    body_type: body_type.to_string(),
                },
                icon: entry.icon,
                image: CARD_IMAGE.to_string(),
                possible_models: entry
                    .models
                    .iter()
                    .map(|name| CarModel::new(*name, MODEL_IMAGE))
                    .collect(),
            }
        })
        .collect()
}
