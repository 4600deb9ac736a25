//! Calculator input and its coercion from request fields.
//!
//! Requests arrive as loose key-value records where numbers may be sent as
//! strings. [`FootprintRequest`] keeps the raw record; converting it into a
//! [`FootprintInput`] is the only place input can fail.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use self::keys::*;
use crate::error::{FootprintError, Result};

/// Car fuel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FuelType {
    #[default]
    Gasoline,
    Ethanol,
}

impl FuelType {
    /// Maps a wire value to a fuel. Anything but `"etanol"` is gasoline.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "etanol" => FuelType::Ethanol,
            _ => FuelType::Gasoline,
        }
    }

    pub const fn wire_name(self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasolina",
            FuelType::Ethanol => "etanol",
        }
    }
}

/// Household diet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DietType {
    #[default]
    Carnivorous,
    Vegetarian,
    Vegan,
    /// A diet name the calculator does not know. Contributes nothing.
    Unrecognized,
}

impl DietType {
    /// Maps a wire value to a diet.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "carnivora" => DietType::Carnivorous,
            "vegetariana" => DietType::Vegetarian,
            "vegana" => DietType::Vegan,
            _ => DietType::Unrecognized,
        }
    }

    /// Wire name, or `None` for [`DietType::Unrecognized`].
    pub const fn wire_name(self) -> Option<&'static str> {
        match self {
            DietType::Carnivorous => Some("carnivora"),
            DietType::Vegetarian => Some("vegetariana"),
            DietType::Vegan => Some("vegana"),
            DietType::Unrecognized => None,
        }
    }
}

/// Typed household activity for one year of footprint.
///
/// Monthly and weekly quantities are annualized by the calculator. Negative
/// values are accepted and flow through the formulas unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FootprintInput {
    /// People sharing the dwelling. Zero or negative disables the housing term.
    pub resident_count: i64,
    pub house_area_m2: f64,
    pub monthly_electricity_kwh: f64,
    pub monthly_gas_m3: f64,
    pub monthly_car_km: f64,
    pub fuel: FuelType,
    pub monthly_bus_km: f64,
    pub monthly_subway_km: f64,
    pub diet: DietType,
    pub weekly_waste_kg: f64,
}

/// Request keys, in the order fields are coerced and errors reported.
pub mod keys {
    pub const RESIDENTS: &str = "num_residentes";
    pub const HOUSE_AREA: &str = "area_casa";
    pub const ELECTRICITY: &str = "consumo_energia_kwh";
    pub const GAS: &str = "consumo_gas_m3";
    pub const CAR_KM: &str = "km_carro_mensal";
    pub const FUEL: &str = "tipo_combustivel";
    pub const BUS_KM: &str = "km_onibus_mensal";
    pub const SUBWAY_KM: &str = "km_metro_mensal";
    pub const DIET: &str = "dieta_tipo";
    pub const WASTE: &str = "residuos_kg_semana";
}

/// Raw request record as received from a client.
///
/// Any JSON object deserializes; unknown keys are ignored during coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FootprintRequest(pub Map<String, Value>);

impl FootprintRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the request for chaining.
    pub(crate) fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    fn real(&self, field: &'static str) -> Result<f64> {
        match self.0.get(field) {
            None => Ok(0.0),
            Some(Value::Number(n)) => n
                .as_f64()
                .ok_or_else(|| FootprintError::invalid(field, format!("{n} is not a real number"))),
            Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
            Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
                FootprintError::invalid(field, format!("could not convert string to float: {s:?}"))
            }),
            Some(other) => Err(FootprintError::invalid(
                field,
                format!("expected a number, found {}", kind(other)),
            )),
        }
    }

    fn count(&self, field: &'static str) -> Result<i64> {
        match self.0.get(field) {
            None => Ok(0),
            Some(Value::Number(n)) => {
                if let Some(i) = n.as_i64() {
                    Ok(i)
                } else if n.is_u64() {
                    Err(FootprintError::invalid(field, format!("{n} is out of range")))
                } else {
                    // Reals truncate toward zero.
                    match n.as_f64() {
                        Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                        _ => Err(FootprintError::invalid(field, format!("{n} is out of range"))),
                    }
                }
            }
            Some(Value::Bool(b)) => Ok(i64::from(*b)),
            Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
                FootprintError::invalid(field, format!("invalid literal for integer: {s:?}"))
            }),
            Some(other) => Err(FootprintError::invalid(
                field,
                format!("expected an integer, found {}", kind(other)),
            )),
        }
    }

    /// Only an absent key defaults; `null` and non-strings are not `"etanol"`.
    fn fuel(&self) -> FuelType {
        match self.0.get(FUEL) {
            None => FuelType::default(),
            Some(Value::String(s)) => FuelType::from_wire(s),
            Some(_) => FuelType::Gasoline,
        }
    }

    /// Only an absent key defaults; `null` and non-strings name no known diet.
    fn diet(&self) -> DietType {
        match self.0.get(DIET) {
            None => DietType::default(),
            Some(Value::String(s)) => DietType::from_wire(s),
            Some(_) => DietType::Unrecognized,
        }
    }
}

impl TryFrom<&FootprintRequest> for FootprintInput {
    type Error = FootprintError;

    fn try_from(request: &FootprintRequest) -> Result<Self> {
        Ok(FootprintInput {
            resident_count: request.count(RESIDENTS)?,
            house_area_m2: request.real(HOUSE_AREA)?,
            monthly_electricity_kwh: request.real(ELECTRICITY)?,
            monthly_gas_m3: request.real(GAS)?,
            monthly_car_km: request.real(CAR_KM)?,
            fuel: request.fuel(),
            monthly_bus_km: request.real(BUS_KM)?,
            monthly_subway_km: request.real(SUBWAY_KM)?,
            diet: request.diet(),
            weekly_waste_kg: request.real(WASTE)?,
        })
    }
}

impl TryFrom<FootprintRequest> for FootprintInput {
    type Error = FootprintError;

    fn try_from(request: FootprintRequest) -> Result<Self> {
        FootprintInput::try_from(&request)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
