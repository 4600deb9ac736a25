//! Response record with every figure rendered to two decimals.

use serde::{Deserialize, Serialize};

use crate::calculator::FootprintResult;
use crate::factors::Category;

/// Footprint as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintReport {
    /// Total footprint in tonnes CO2e.
    pub total_toneladas: String,
    /// Carbon credits to offset the total.
    pub creditos_compensar: String,
    /// Per-category tonnes CO2e.
    pub quebra: BreakdownReport,
}

/// Per-category tonnes, each rounded on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownReport {
    pub energia: String,
    pub transporte: String,
    pub alimentacao: String,
    pub residuos: String,
}

impl BreakdownReport {
    /// Returns the rendered figure for one category.
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Energy => &self.energia,
            Category::Transport => &self.transporte,
            Category::Diet => &self.alimentacao,
            Category::Waste => &self.residuos,
        }
    }
}

impl From<&FootprintResult> for FootprintReport {
    fn from(result: &FootprintResult) -> Self {
        let tonnes = |category| two_decimals(result.breakdown.tonnes(category));

        FootprintReport {
            total_toneladas: two_decimals(result.total_tonnes()),
            creditos_compensar: two_decimals(result.credits_to_offset()),
            quebra: BreakdownReport {
                energia: tonnes(Category::Energy),
                transporte: tonnes(Category::Transport),
                alimentacao: tonnes(Category::Diet),
                residuos: tonnes(Category::Waste),
            },
        }
    }
}

impl From<FootprintResult> for FootprintReport {
    fn from(result: FootprintResult) -> Self {
        FootprintReport::from(&result)
    }
}

fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}
