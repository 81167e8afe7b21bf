use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a stored category string is not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category `{0}`")]
pub struct ParseCategoryError(pub String);

/// Error returned when an activity key does not match any known activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity `{0}`")]
pub struct ParseActivityError(pub String);

/// The fixed set of categories an activity entry can belong to.
///
/// Categories are stored as lowercase strings (`"transportation"`, ...) and
/// the set is closed: there is no escape hatch for free-form categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Transportation,
    Energy,
    Food,
    Waste,
    Consumption,
}

impl Category {
    /// The wire/storage representation of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::Energy => "energy",
            Category::Food => "food",
            Category::Waste => "waste",
            Category::Consumption => "consumption",
        }
    }

    /// All categories, in display order.
    pub fn all() -> [Category; 5] {
        [
            Category::Transportation,
            Category::Energy,
            Category::Food,
            Category::Waste,
            Category::Consumption,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transportation" => Ok(Category::Transportation),
            "energy" => Ok(Category::Energy),
            "food" => Ok(Category::Food),
            "waste" => Ok(Category::Waste),
            "consumption" => Ok(Category::Consumption),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// A loggable activity, identified on the wire by a snake_case key scoped to
/// its category (e.g. `car_gasoline_mile`).
///
/// Each variant knows its category and the unit its quantity is measured in,
/// so a typed `Activity` can never miss an emission factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    // transportation, per mile
    CarGasolineMile,
    CarElectricMile,
    BusMile,
    TrainMile,
    FlightDomesticMile,
    FlightInternationalMile,
    // energy
    ElectricityKwh,
    NaturalGasTherm,
    HeatingOilGallon,
    // food, per meal
    BeefMeal,
    PorkMeal,
    ChickenMeal,
    FishMeal,
    VegetarianMeal,
    VeganMeal,
    // waste, per kg
    LandfillKg,
    RecyclingKg,
    CompostKg,
    // consumption, per item
    ClothingItem,
    ElectronicsItem,
    BookItem,
}

impl Activity {
    /// The wire/storage key for this activity.
    pub fn key(&self) -> &'static str {
        match self {
            Activity::CarGasolineMile => "car_gasoline_mile",
            Activity::CarElectricMile => "car_electric_mile",
            Activity::BusMile => "bus_mile",
            Activity::TrainMile => "train_mile",
            Activity::FlightDomesticMile => "flight_domestic_mile",
            Activity::FlightInternationalMile => "flight_international_mile",
            Activity::ElectricityKwh => "electricity_kwh",
            Activity::NaturalGasTherm => "natural_gas_therm",
            Activity::HeatingOilGallon => "heating_oil_gallon",
            Activity::BeefMeal => "beef_meal",
            Activity::PorkMeal => "pork_meal",
            Activity::ChickenMeal => "chicken_meal",
            Activity::FishMeal => "fish_meal",
            Activity::VegetarianMeal => "vegetarian_meal",
            Activity::VeganMeal => "vegan_meal",
            Activity::LandfillKg => "landfill_kg",
            Activity::RecyclingKg => "recycling_kg",
            Activity::CompostKg => "compost_kg",
            Activity::ClothingItem => "clothing_item",
            Activity::ElectronicsItem => "electronics_item",
            Activity::BookItem => "book_item",
        }
    }

    /// The category this activity belongs to.
    pub fn category(&self) -> Category {
        match self {
            Activity::CarGasolineMile
            | Activity::CarElectricMile
            | Activity::BusMile
            | Activity::TrainMile
            | Activity::FlightDomesticMile
            | Activity::FlightInternationalMile => Category::Transportation,
            Activity::ElectricityKwh | Activity::NaturalGasTherm | Activity::HeatingOilGallon => {
                Category::Energy
            }
            Activity::BeefMeal
            | Activity::PorkMeal
            | Activity::ChickenMeal
            | Activity::FishMeal
            | Activity::VegetarianMeal
            | Activity::VeganMeal => Category::Food,
            Activity::LandfillKg | Activity::RecyclingKg | Activity::CompostKg => Category::Waste,
            Activity::ClothingItem | Activity::ElectronicsItem | Activity::BookItem => {
                Category::Consumption
            }
        }
    }

    /// Human-readable unit label for the quantity of this activity.
    pub fn unit(&self) -> &'static str {
        match self {
            Activity::CarGasolineMile
            | Activity::CarElectricMile
            | Activity::BusMile
            | Activity::TrainMile
            | Activity::FlightDomesticMile
            | Activity::FlightInternationalMile => "miles",
            Activity::ElectricityKwh => "kWh",
            Activity::NaturalGasTherm => "therms",
            Activity::HeatingOilGallon => "gallons",
            Activity::BeefMeal
            | Activity::PorkMeal
            | Activity::ChickenMeal
            | Activity::FishMeal
            | Activity::VegetarianMeal
            | Activity::VeganMeal => "meals",
            Activity::LandfillKg | Activity::RecyclingKg | Activity::CompostKg => "kg",
            Activity::ClothingItem | Activity::ElectronicsItem | Activity::BookItem => "items",
        }
    }

    /// All activities, grouped by category.
    pub fn all() -> [Activity; 21] {
        [
            Activity::CarGasolineMile,
            Activity::CarElectricMile,
            Activity::BusMile,
            Activity::TrainMile,
            Activity::FlightDomesticMile,
            Activity::FlightInternationalMile,
            Activity::ElectricityKwh,
            Activity::NaturalGasTherm,
            Activity::HeatingOilGallon,
            Activity::BeefMeal,
            Activity::PorkMeal,
            Activity::ChickenMeal,
            Activity::FishMeal,
            Activity::VegetarianMeal,
            Activity::VeganMeal,
            Activity::LandfillKg,
            Activity::RecyclingKg,
            Activity::CompostKg,
            Activity::ClothingItem,
            Activity::ElectronicsItem,
            Activity::BookItem,
        ]
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Activity {
    type Err = ParseActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::all()
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| ParseActivityError(s.to_string()))
    }
}
