use rayon::prelude::*;

use crate::constraint::Constraint;
use crate::lcg::{JavaRandom, ADD, MASK, MULT_A, MULT_B, MULT_INV, XOR};
use crate::math::solve_linear_congruence;
use crate::placement::{PlacementConfig, PORTAL_CONFIG, SHIPWRECK_CONFIG};
use crate::verify;

const LOW_BITS: u32 = 20;
const UPPER_BITS: u32 = 28;
const LOW_MASK: i64 = (1 << LOW_BITS) - 1;

/// Portal first, then shipwreck. Villages never anchor, they don't draw
/// through the two bounded placement draws this solver inverts.
pub fn pick_anchor(constraints: &[Constraint]) -> Option<(&Constraint, &PlacementConfig)> {
    if let Some(c) = constraints.iter().find(|c| c.is_portal()) {
        return Some((c, &PORTAL_CONFIG));
    }
    constraints
        .iter()
        .find(|c| c.is_shipwreck())
        .map(|c| (c, &SHIPWRECK_CONFIG))
}

fn step_back(rng: JavaRandom) -> JavaRandom {
    let prev = rng.raw_state().wrapping_sub(ADD).wrapping_mul(MULT_INV) & MASK;
    JavaRandom::from_raw_state(prev)
}

/// Low 20 bits of state0/state1/state2 depend only on the seed's low 20,
/// never its unknown upper 28, so a representative seed with upper bits
/// zeroed reads them off directly.
fn known_low_bits(low: u32, region_x: i32, region_z: i32, cfg: &PlacementConfig) -> (i64, i64) {
    let mut rng = JavaRandom::set_region_seed(low as i64, region_x, region_z, cfg.salt);
    rng.next(31);
    let low1 = rng.raw_state() & LOW_MASK;
    rng.next(31);
    let low2 = rng.raw_state() & LOW_MASK;
    (low1, low2)
}

/// Solves for the high 28 bits of state2 consistent with the z draw (an
/// arithmetic progression, not all `2^28` values), then inverts each back
/// through state1 to state0 and on to the seed.
fn candidates_for_low(anchor_chunk: (i32, i32), cfg: &PlacementConfig, low: u32) -> Vec<i64> {
    let (region_x, region_z) = cfg.region_of(anchor_chunk.0, anchor_chunk.1);
    let offset = cfg.offset() as i64;
    let expected_x = (anchor_chunk.0 - region_x * cfg.spacing) as i64;
    let expected_z = (anchor_chunk.1 - region_z * cfg.spacing) as i64;

    let (low1, low2) = known_low_bits(low, region_x, region_z, cfg);
    let fixed3_x = (low1 >> 17) & 0x7;
    let fixed3_z = (low2 >> 17) & 0x7;

    let Some((h2_0, period)) = solve_linear_congruence(8, expected_z - fixed3_z, offset) else {
        return Vec::new();
    };

    let region_mix = (region_x as i64)
        .wrapping_mul(MULT_A)
        .wrapping_add((region_z as i64).wrapping_mul(MULT_B))
        .wrapping_add(cfg.salt as i64);

    let mut found = Vec::new();
    let mut h2 = h2_0;
    while h2 < (1i64 << UPPER_BITS) {
        let state2 = JavaRandom::from_raw_state(((h2 << LOW_BITS) | low2) & MASK);
        let state1 = step_back(state2);
        if (state1.raw_state() & LOW_MASK) == low1 && (state1.raw_state() >> 17) % offset == expected_x {
            let state0 = step_back(state1);
            let seed = (state0.raw_state() ^ XOR).wrapping_sub(region_mix) & MASK;
            found.push(seed);
        }
        h2 += period;
    }
    found
}

/// Narrows each low-20 value to the seeds placing the anchor, then confirms
/// against every constraint.
pub fn run(constraints: &[Constraint], low_candidates: &[u32]) -> Vec<i64> {
    let Some((anchor, cfg)) = pick_anchor(constraints) else {
        return Vec::new();
    };
    let anchor_chunk = anchor.chunk_pos();

    low_candidates
        .par_iter()
        .flat_map(|&low| {
            candidates_for_low(anchor_chunk, cfg, low)
                .into_par_iter()
                .filter(|&seed| constraints.iter().all(|c| verify::check(seed, c)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{Rotation, ShipwreckConstraint};

    #[test]
    fn pick_anchor_prefers_portal_over_shipwreck() {
        let constraints = vec![
            Constraint::Shipwreck(ShipwreckConstraint {
                chunk_x: 0,
                chunk_z: 0,
                rotation: Rotation::None,
                shipwreck_type: "upright".to_string(),
                is_beached: false,
            }),
            Constraint::Portal(crate::constraint::PortalConstraint {
                chunk_x: 1,
                chunk_z: 1,
                rotation: Rotation::None,
                mirror: crate::constraint::Mirror::None,
                portal_type: "portal_1".to_string(),
                biome_category: crate::constraint::BiomeCategory::Desert,
            }),
        ];
        let (anchor, _) = pick_anchor(&constraints).unwrap();
        assert!(anchor.is_portal());
    }

    #[test]
    fn no_anchorable_constraint_yields_no_candidates() {
        let village = Constraint::Village(crate::constraint::VillageConstraint {
            chunk_x: 0,
            chunk_z: 0,
            rotation: Rotation::None,
            start_piece: "plains_fountain_01".to_string(),
            village_type: crate::constraint::VillageType::Plains,
            is_abandoned: false,
        });
        assert!(pick_anchor(std::slice::from_ref(&village)).is_none());
    }

    #[test]
    fn candidates_for_low_only_contains_seeds_matching_the_low_bits() {
        let c = ShipwreckConstraint {
            chunk_x: -54,
            chunk_z: -14,
            rotation: Rotation::None,
            shipwreck_type: "upright".to_string(),
            is_beached: false,
        };
        let found = candidates_for_low((c.chunk_x, c.chunk_z), &SHIPWRECK_CONFIG, 777);
        for seed in found {
            assert_eq!(seed & LOW_MASK, 777);
            assert!(crate::placement::check_placement(
                seed,
                c.chunk_x,
                c.chunk_z,
                &SHIPWRECK_CONFIG
            ));
        }
    }

    #[test]
    fn candidates_for_low_recovers_a_seed_known_to_place_the_anchor() {
        let seed = 123456789i64 & MASK;
        let cfg = &SHIPWRECK_CONFIG;
        let (region_x, region_z) = cfg.region_of(0, 0);
        let mut rng = JavaRandom::set_region_seed(seed, region_x, region_z, cfg.salt);
        let offset = cfg.offset();
        let chunk_x = region_x * cfg.spacing + rng.next_int(offset);
        let chunk_z = region_z * cfg.spacing + rng.next_int(offset);

        let low = (seed & LOW_MASK) as u32;
        let found = candidates_for_low((chunk_x, chunk_z), cfg, low);
        assert!(found.contains(&seed));
    }
}
