//! Annual footprint formulas.
//!
//! Every subtotal is linear in its inputs and computed in kg CO2e per year.
//! Conversion to tonnes (and so to carbon credits) happens on the result.

use crate::factors::{
    Category, EmissionFactors, CARNIVORE_MEAT_MULTIPLIER, KG_PER_TONNE, MONTHS_PER_YEAR,
    WEEKS_PER_YEAR,
};
use crate::input::{DietType, FootprintInput, FuelType};

/// Per-category annual emissions in kg CO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Breakdown {
    pub energy_kg: f64,
    pub transport_kg: f64,
    pub diet_kg: f64,
    pub waste_kg: f64,
}

impl Breakdown {
    /// Returns the subtotal of one category in kg.
    pub fn kg(&self, category: Category) -> f64 {
        match category {
            Category::Energy => self.energy_kg,
            Category::Transport => self.transport_kg,
            Category::Diet => self.diet_kg,
            Category::Waste => self.waste_kg,
        }
    }

    /// Returns the subtotal of one category in tonnes.
    pub fn tonnes(&self, category: Category) -> f64 {
        self.kg(category) / KG_PER_TONNE
    }

    /// Iterates `(category, kg)` pairs in breakdown order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.kg(c)))
    }

    pub fn total_kg(&self) -> f64 {
        self.energy_kg + self.transport_kg + self.diet_kg + self.waste_kg
    }
}

/// Outcome of a footprint calculation.
///
/// Values are kept unrounded; [`FootprintReport`](crate::FootprintReport)
/// rounds them to two decimals for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FootprintResult {
    pub breakdown: Breakdown,
}

impl FootprintResult {
    pub fn total_kg(&self) -> f64 {
        self.breakdown.total_kg()
    }

    pub fn total_tonnes(&self) -> f64 {
        self.total_kg() / KG_PER_TONNE
    }

    /// Carbon credits needed to offset the footprint. One credit is one tonne.
    pub fn credits_to_offset(&self) -> f64 {
        self.total_tonnes()
    }
}

/// Computes the annual footprint of a household with the standard factors.
///
/// Pure and infallible: every typed input, including zero residents and
/// negative quantities, produces a result.
///
/// # Examples
///
/// ```
/// use footprint_core::{compute, DietType, FootprintInput};
///
/// let vegan = FootprintInput {
///     diet: DietType::Vegan,
///     ..FootprintInput::default()
/// };
///
/// let result = compute(&vegan);
/// assert_eq!(result.breakdown.diet_kg, 26.0);
/// // Clothing is always counted.
/// assert_eq!(result.breakdown.waste_kg, 150.0);
/// ```
pub fn compute(input: &FootprintInput) -> FootprintResult {
    compute_with(EmissionFactors::standard(), input)
}

/// Computes the annual footprint with an explicit factor table.
pub fn compute_with(factors: &EmissionFactors, input: &FootprintInput) -> FootprintResult {
    FootprintResult {
        breakdown: Breakdown {
            energy_kg: energy_kg(factors, input),
            transport_kg: transport_kg(factors, input),
            diet_kg: diet_kg(factors, input.diet),
            waste_kg: waste_kg(factors, input),
        },
    }
}

/// Building share plus electricity and piped gas.
pub fn energy_kg(factors: &EmissionFactors, input: &FootprintInput) -> f64 {
    let housing = if input.resident_count > 0 {
        input.house_area_m2 * factors.housing_per_m2 / input.resident_count as f64
    } else {
        0.0
    };

    housing
        + input.monthly_electricity_kwh * MONTHS_PER_YEAR * factors.electricity_kwh
        + input.monthly_gas_m3 * MONTHS_PER_YEAR * factors.piped_gas_m3
}

/// Car, bus and subway travel.
pub fn transport_kg(factors: &EmissionFactors, input: &FootprintInput) -> f64 {
    let car_factor = match input.fuel {
        FuelType::Ethanol => factors.car_ethanol_km,
        FuelType::Gasoline => factors.car_gasoline_km,
    };

    input.monthly_car_km * MONTHS_PER_YEAR * car_factor
        + input.monthly_bus_km * MONTHS_PER_YEAR * factors.bus_passenger_km
        + input.monthly_subway_km * MONTHS_PER_YEAR * factors.subway_passenger_km
}

/// Diet emissions depend on the diet alone.
pub fn diet_kg(factors: &EmissionFactors, diet: DietType) -> f64 {
    match diet {
        DietType::Carnivorous => {
            WEEKS_PER_YEAR * factors.red_meat_week * CARNIVORE_MEAT_MULTIPLIER
        }
        DietType::Vegetarian => WEEKS_PER_YEAR * factors.vegetarian_week,
        DietType::Vegan => WEEKS_PER_YEAR * factors.vegan_week,
        DietType::Unrecognized => 0.0,
    }
}

/// Household waste plus the fixed clothing term.
pub fn waste_kg(factors: &EmissionFactors, input: &FootprintInput) -> f64 {
    input.weekly_waste_kg * WEEKS_PER_YEAR * factors.waste_kg + factors.clothing_year
}
