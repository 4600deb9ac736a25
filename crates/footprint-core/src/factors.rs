//! Emission factors in kg CO2e per unit of activity.
//!
//! The table is a process-wide constant. Factor names are the keys the
//! service publishes on `/fatores`, so they stay in their wire spelling.

use std::fmt;

use serde::Serialize;

/// Months in a year; monthly activity inputs are annualized with this.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Weeks in a year; weekly activity inputs are annualized with this.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Kilograms per tonne. One carbon credit offsets one tonne.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Multiplier applied to the red-meat factor for the carnivorous diet.
///
/// Covers meat, poultry and fish together. Kept as a literal, not derived
/// from the poultry or fish factors.
pub const CARNIVORE_MEAT_MULTIPLIER: f64 = 3.0;

/// Footprint category an emission factor contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Residential electricity, gas and building share.
    Energy,
    /// Car, bus and subway travel.
    Transport,
    /// Food.
    Diet,
    /// Household waste and clothing consumption.
    Waste,
}

impl Category {
    /// All categories in breakdown order.
    pub const ALL: [Category; 4] = [
        Category::Energy,
        Category::Transport,
        Category::Diet,
        Category::Waste,
    ];

    /// Key used for this category in the response breakdown.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Category::Energy => "energia",
            Category::Transport => "transporte",
            Category::Diet => "alimentacao",
            Category::Waste => "residuos",
        }
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A single named entry of the factor table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactor {
    #[serde(rename = "nome")]
    pub name: &'static str,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "categoria")]
    pub category: Category,
}

/// Emission factor table.
///
/// Some factors (bottled gas, motorcycle, poultry/pork, fish) are published
/// but not read by any formula.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    /// Per kWh of grid electricity.
    pub electricity_kwh: f64,
    /// Per m3 of piped natural gas.
    pub piped_gas_m3: f64,
    /// Per kg of bottled LPG.
    pub bottled_gas_kg: f64,
    /// Per m2 of dwelling, shared between residents.
    pub housing_per_m2: f64,
    /// Per km driven on gasoline.
    pub car_gasoline_km: f64,
    /// Per km driven on ethanol.
    pub car_ethanol_km: f64,
    /// Per passenger-km by bus.
    pub bus_passenger_km: f64,
    /// Per passenger-km by subway.
    pub subway_passenger_km: f64,
    /// Per km by gasoline motorcycle.
    pub motorcycle_gasoline_km: f64,
    /// Per week of red-meat consumption.
    pub red_meat_week: f64,
    /// Per week of poultry and pork consumption.
    pub poultry_pork_week: f64,
    /// Per week of fish consumption.
    pub fish_week: f64,
    /// Per week on a vegetarian diet.
    pub vegetarian_week: f64,
    /// Per week on a vegan diet.
    pub vegan_week: f64,
    /// Per kg of household waste.
    pub waste_kg: f64,
    /// Fixed yearly clothing consumption.
    pub clothing_year: f64,
}

impl EmissionFactors {
    /// The factor table used by [`compute`](crate::compute).
    pub const STANDARD: EmissionFactors = EmissionFactors {
        electricity_kwh: 0.12,
        piped_gas_m3: 2.0,
        bottled_gas_kg: 3.0,
        housing_per_m2: 0.05,
        car_gasoline_km: 0.23,
        car_ethanol_km: 0.08,
        bus_passenger_km: 0.08,
        subway_passenger_km: 0.03,
        motorcycle_gasoline_km: 0.1,
        red_meat_week: 10.0,
        poultry_pork_week: 5.0,
        fish_week: 3.0,
        vegetarian_week: 1.5,
        vegan_week: 0.5,
        waste_kg: 0.5,
        clothing_year: 150.0,
    };

    /// Returns the standard table.
    pub fn standard() -> &'static EmissionFactors {
        &Self::STANDARD
    }

    /// Returns every factor with its published name, in table order.
    pub fn entries(&self) -> [EmissionFactor; 16] {
        use Category::*;

        let entry = |name, value, category| EmissionFactor {
            name,
            value,
            category,
        };

        [
            entry("eletricidade_kwh_brasil", self.electricity_kwh, Energy),
            entry("gas_encanado_m3", self.piped_gas_m3, Energy),
            entry("gas_botijao_kg", self.bottled_gas_kg, Energy),
            entry("media_residente_por_m2", self.housing_per_m2, Energy),
            entry("carro_gasolina_km", self.car_gasoline_km, Transport),
            entry("carro_etanol_km", self.car_ethanol_km, Transport),
            entry("onibus_km_passageiro", self.bus_passenger_km, Transport),
            entry("metro_km_passageiro", self.subway_passenger_km, Transport),
            entry("moto_km_gasolina", self.motorcycle_gasoline_km, Transport),
            entry("carne_vermelha_semana", self.red_meat_week, Diet),
            entry("aves_porco_semana", self.poultry_pork_week, Diet),
            entry("peixe_semana", self.fish_week, Diet),
            entry("dieta_vegetariana_semana", self.vegetarian_week, Diet),
            entry("dieta_vegana_semana", self.vegan_week, Diet),
            entry("residuo_kg_por_pessoa", self.waste_kg, Waste),
            entry("vestuario_anual", self.clothing_year, Waste),
        ]
    }

    /// Looks up a factor by its published name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::STANDARD
    }
}
