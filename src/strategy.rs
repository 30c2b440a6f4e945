use crate::constraint::Constraint;
use crate::error::AppError;
use crate::{bruteforce, pillarseed, prefilter, reverse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Pillarseed,
    Reversing,
    BruteForce,
}

const REVERSING_MAX_CONSTRAINTS: usize = 10;

pub fn choose(constraints: &[Constraint], pillar_seed: Option<u32>) -> Result<Strategy, AppError> {
    if pillar_seed.is_some() {
        if constraints.is_empty() {
            return Err(AppError::StrategyInit(
                "pillar seed supplied with no constraints".to_string(),
            ));
        }
        return Ok(Strategy::Pillarseed);
    }

    let has_anchorable = constraints.iter().any(|c| c.is_shipwreck() || c.is_portal());
    if has_anchorable && (1..=REVERSING_MAX_CONSTRAINTS).contains(&constraints.len()) {
        Ok(Strategy::Reversing)
    } else {
        Ok(Strategy::BruteForce)
    }
}

pub fn run(
    constraints: &[Constraint],
    pillar_seed: Option<u32>,
) -> Result<Vec<i64>, AppError> {
    let strategy = choose(constraints, pillar_seed)?;
    let mut found = match strategy {
        Strategy::Pillarseed => pillarseed::run(constraints, pillar_seed.unwrap()),
        Strategy::Reversing => {
            let low = prefilter::run(constraints);
            reverse::run(constraints, &low)
        }
        Strategy::BruteForce => {
            let low = prefilter::run(constraints);
            bruteforce::run(constraints, &low)
        }
    };
    found.sort_unstable();
    found.dedup();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Rotation, ShipwreckConstraint, VillageConstraint, VillageType};

    #[test]
    fn pillar_seed_alone_with_no_constraints_fails_init() {
        assert!(matches!(
            choose(&[], Some(0)),
            Err(AppError::StrategyInit(_))
        ));
    }

    #[test]
    fn pillar_seed_with_constraints_picks_pillarseed() {
        let c = vec![Constraint::Shipwreck(ShipwreckConstraint {
            chunk_x: 0,
            chunk_z: 0,
            rotation: Rotation::None,
            shipwreck_type: "upright".to_string(),
            is_beached: false,
        })];
        assert_eq!(choose(&c, Some(1)).unwrap(), Strategy::Pillarseed);
    }

    #[test]
    fn shipwreck_within_bound_picks_reversing() {
        let c = vec![Constraint::Shipwreck(ShipwreckConstraint {
            chunk_x: 0,
            chunk_z: 0,
            rotation: Rotation::None,
            shipwreck_type: "upright".to_string(),
            is_beached: false,
        })];
        assert_eq!(choose(&c, None).unwrap(), Strategy::Reversing);
    }

    #[test]
    fn village_only_falls_back_to_bruteforce() {
        let c = vec![Constraint::Village(VillageConstraint {
            chunk_x: 0,
            chunk_z: 0,
            rotation: Rotation::None,
            start_piece: "plains_fountain_01".to_string(),
            village_type: VillageType::Plains,
            is_abandoned: false,
        })];
        assert_eq!(choose(&c, None).unwrap(), Strategy::BruteForce);
    }
}
