//! Footprint Core - annual household carbon footprint calculation
//!
//! This crate holds everything the footprint service knows about CO2e:
//! - [`factors`] - the fixed emission-factor table
//! - [`input`] - typed calculator input and coercion from loose request fields
//! - [`calculator`] - the footprint formulas and their result
//! - [`report`] - the two-decimal response record
//!
//! # Example
//!
//! ```
//! use footprint_core::{compute, DietType, FootprintInput, FootprintReport};
//!
//! let input = FootprintInput {
//!     resident_count: 4,
//!     house_area_m2: 120.0,
//!     monthly_electricity_kwh: 200.0,
//!     monthly_gas_m3: 10.0,
//!     monthly_car_km: 300.0,
//!     diet: DietType::Carnivorous,
//!     weekly_waste_kg: 5.0,
//!     ..FootprintInput::default()
//! };
//!
//! let result = compute(&input);
//! assert!((result.total_kg() - 3197.5).abs() < 1e-9);
//!
//! let report = FootprintReport::from(&result);
//! assert_eq!(report.total_toneladas, "3.20");
//! assert_eq!(report.creditos_compensar, "3.20");
//! ```

pub mod calculator;
pub mod error;
pub mod factors;
pub mod input;
pub mod report;


pub use calculator::{compute, compute_with, Breakdown, FootprintResult};
pub use error::{FootprintError, Result};
pub use factors::{Category, EmissionFactor, EmissionFactors};
pub use input::{DietType, FootprintInput, FootprintRequest, FuelType};
pub use report::{BreakdownReport, FootprintReport};
