use serde::Serialize;

use super::domain::{InsuranceTier, TravelMode};

/// Flat cost and payout ceiling for one tier on one travel mode, in rupees.
///
/// These figures are informational. The rate engine applies its own tier multiplier and never
/// adds `cost` to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCoverage {
    pub tier: InsuranceTier,
    pub cost: u32,
    pub coverage: u32,
    pub includes_delay: bool,
}

impl InsuranceCoverage {
    const fn none() -> Self {
        Self {
            tier: InsuranceTier::None,
            cost: 0,
            coverage: 0,
            includes_delay: false,
        }
    }

    const fn basic(cost: u32, coverage: u32) -> Self {
        Self {
            tier: InsuranceTier::Basic,
            cost,
            coverage,
            includes_delay: false,
        }
    }

    const fn premium(cost: u32, coverage: u32) -> Self {
        Self {
            tier: InsuranceTier::Premium,
            cost,
            coverage,
            includes_delay: true,
        }
    }
}

/// Looks up the coverage offered for `tier` on `mode`.
pub fn get_coverage(tier: InsuranceTier, mode: TravelMode) -> InsuranceCoverage {
    match tier {
        InsuranceTier::None => InsuranceCoverage::none(),
        InsuranceTier::Basic => match mode {
            TravelMode::Car | TravelMode::Bus | TravelMode::Bike => {
                InsuranceCoverage::basic(50, 3_000)
            }
            TravelMode::Train => InsuranceCoverage::basic(100, 5_000),
            TravelMode::Flight => InsuranceCoverage::basic(150, 10_000),
        },
        InsuranceTier::Premium => match mode {
            TravelMode::Car | TravelMode::Bus | TravelMode::Bike => {
                InsuranceCoverage::premium(100, 15_000)
            }
            TravelMode::Train => InsuranceCoverage::premium(200, 25_000),
            TravelMode::Flight => InsuranceCoverage::premium(300, 50_000),
        },
    }
}

/// All three tiers for a mode, cheapest first.
pub fn coverage_options(mode: TravelMode) -> [InsuranceCoverage; 3] {
    InsuranceTier::ALL.map(|tier| get_coverage(tier, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tier_is_free_and_empty_for_every_mode() {
        for mode in TravelMode::ALL {
            assert_eq!(
                get_coverage(InsuranceTier::None, mode),
                InsuranceCoverage {
                    tier: InsuranceTier::None,
                    cost: 0,
                    coverage: 0,
                    includes_delay: false,
                }
            );
        }
    }

    #[test]
    fn only_premium_includes_delay_cover() {
        for mode in TravelMode::ALL {
            let basic = get_coverage(InsuranceTier::Basic, mode);
            let premium = get_coverage(InsuranceTier::Premium, mode);
            assert_eq!(basic.tier, InsuranceTier::Basic);
            assert!(!basic.includes_delay);
            assert!(premium.includes_delay);
            assert!(premium.cost > basic.cost);
            assert!(premium.coverage > basic.coverage);
        }
    }

    #[test]
    fn flight_cover_is_the_richest() {
        let flight = get_coverage(InsuranceTier::Premium, TravelMode::Flight);
        assert_eq!((flight.cost, flight.coverage), (300, 50_000));

        let train = get_coverage(InsuranceTier::Basic, TravelMode::Train);
        assert_eq!((train.cost, train.coverage), (100, 5_000));

        let bike = get_coverage(InsuranceTier::Basic, TravelMode::Bike);
        assert_eq!((bike.cost, bike.coverage), (50, 3_000));
    }

    #[test]
    fn options_list_tiers_in_order() {
        let options = coverage_options(TravelMode::Bus);
        let tiers: Vec<_> = options.iter().map(|option| option.tier).collect();
        assert_eq!(
            tiers,
            vec![
                InsuranceTier::None,
                InsuranceTier::Basic,
                InsuranceTier::Premium
            ]
        );
    }
}
