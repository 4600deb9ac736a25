//! Property tests for the footprint calculator.

use footprint_core::calculator::{diet_kg, energy_kg, transport_kg, waste_kg};
use footprint_core::{
    compute, Category, DietType, EmissionFactors, FootprintInput, FootprintReport, FuelType,
};
use proptest::prelude::*;

fn quantity() -> impl Strategy<Value = f64> {
    0.0..10_000.0f64
}

fn fuel() -> impl Strategy<Value = FuelType> {
    prop_oneof![Just(FuelType::Gasoline), Just(FuelType::Ethanol)]
}

fn diet() -> impl Strategy<Value = DietType> {
    prop_oneof![
        Just(DietType::Carnivorous),
        Just(DietType::Vegetarian),
        Just(DietType::Vegan),
        Just(DietType::Unrecognized),
    ]
}

prop_compose! {
    fn household()(
        resident_count in 0i64..20,
        house_area_m2 in quantity(),
        monthly_electricity_kwh in quantity(),
        monthly_gas_m3 in quantity(),
        monthly_car_km in quantity(),
        fuel in fuel(),
        monthly_bus_km in quantity(),
        monthly_subway_km in quantity(),
        diet in diet(),
        weekly_waste_kg in quantity(),
    ) -> FootprintInput {
        FootprintInput {
            resident_count,
            house_area_m2,
            monthly_electricity_kwh,
            monthly_gas_m3,
            monthly_car_km,
            fuel,
            monthly_bus_km,
            monthly_subway_km,
            diet,
            weekly_waste_kg,
        }
    }
}

fn parse(s: &str) -> f64 {
    s.parse().unwrap()
}

proptest! {
    #[test]
    fn rounded_breakdown_sums_to_total(input in household()) {
        let report = FootprintReport::from(&compute(&input));
        let sum: f64 = Category::ALL
            .iter()
            .map(|c| parse(report.quebra.get(*c)))
            .sum();

        prop_assert!((parse(&report.total_toneladas) - sum).abs() <= 0.02 + 1e-9);
    }

    #[test]
    fn credits_match_tonnes(input in household()) {
        let result = compute(&input);
        let report = FootprintReport::from(&result);

        prop_assert_eq!(result.credits_to_offset(), result.total_tonnes());
        prop_assert_eq!(report.creditos_compensar, report.total_toneladas);
    }

    #[test]
    fn diet_independent_of_other_fields(input in household()) {
        let diet = compute(&input).breakdown.diet_kg;
        prop_assert!([1560.0, 78.0, 26.0, 0.0].contains(&diet));
        prop_assert_eq!(diet, diet_kg(EmissionFactors::standard(), input.diet));
    }

    #[test]
    fn waste_at_least_clothing(input in household()) {
        let result = compute(&input);
        prop_assert!(result.breakdown.waste_kg >= 150.0);
        prop_assert!(result.breakdown.tonnes(Category::Waste) >= 0.15);
    }

    #[test]
    fn zero_residents_never_divide(input in household()) {
        let zero = FootprintInput { resident_count: 0, ..input };
        let without_housing = FootprintInput { house_area_m2: 0.0, ..zero };
        let factors = EmissionFactors::standard();

        let energy = energy_kg(factors, &zero);
        prop_assert!(energy.is_finite());
        prop_assert_eq!(energy, energy_kg(factors, &without_housing));
    }

    #[test]
    fn subtotals_monotone(input in household(), extra in quantity()) {
        let factors = EmissionFactors::standard();

        let more_energy = [
            FootprintInput { house_area_m2: input.house_area_m2 + extra, ..input },
            FootprintInput { monthly_electricity_kwh: input.monthly_electricity_kwh + extra, ..input },
            FootprintInput { monthly_gas_m3: input.monthly_gas_m3 + extra, ..input },
        ];
        for more in more_energy {
            prop_assert!(energy_kg(factors, &more) >= energy_kg(factors, &input));
        }

        let more_transport = [
            FootprintInput { monthly_car_km: input.monthly_car_km + extra, ..input },
            FootprintInput { monthly_bus_km: input.monthly_bus_km + extra, ..input },
            FootprintInput { monthly_subway_km: input.monthly_subway_km + extra, ..input },
        ];
        for more in more_transport {
            prop_assert!(transport_kg(factors, &more) >= transport_kg(factors, &input));
        }

        let more_waste = FootprintInput { weekly_waste_kg: input.weekly_waste_kg + extra, ..input };
        prop_assert!(waste_kg(factors, &more_waste) >= waste_kg(factors, &input));
    }
}
