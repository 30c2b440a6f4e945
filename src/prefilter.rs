use rayon::prelude::*;

use crate::constraint::{Constraint, ShipwreckConstraint};
use crate::lcg::{ADD, MULT, XOR};
use crate::placement::SHIPWRECK_CONFIG;

const LOW_BITS: u32 = 20;
const LOW_SPACE: u32 = 1 << LOW_BITS;

fn residues_match(low: u32, c: &ShipwreckConstraint) -> bool {
    let (region_x, region_z) = SHIPWRECK_CONFIG.region_of(c.chunk_x, c.chunk_z);

    let mix = (low as i64)
        .wrapping_add((region_x as i64).wrapping_mul(crate::lcg::MULT_A))
        .wrapping_add((region_z as i64).wrapping_mul(crate::lcg::MULT_B))
        .wrapping_add(SHIPWRECK_CONFIG.salt as i64)
        ^ XOR;

    let s1 = mix.wrapping_mul(MULT).wrapping_add(ADD);
    let x_bits = (s1 >> 17) & 0x3;
    if x_bits != (c.chunk_x as i64).rem_euclid(4) {
        return false;
    }

    let s2 = s1.wrapping_mul(MULT).wrapping_add(ADD);
    let z_bits = (s2 >> 17) & 0x3;
    z_bits == (c.chunk_z as i64).rem_euclid(4)
}

/// Returns all `2^20` values when no shipwreck constraint narrows the space.
pub fn run(constraints: &[Constraint]) -> Vec<u32> {
    let shipwrecks: Vec<&ShipwreckConstraint> = constraints
        .iter()
        .filter_map(|c| match c {
            Constraint::Shipwreck(s) => Some(s),
            _ => None,
        })
        .collect();

    if shipwrecks.is_empty() {
        return (0..LOW_SPACE).collect();
    }

    (0..LOW_SPACE)
        .into_par_iter()
        .filter(|&low| shipwrecks.iter().all(|c| residues_match(low, c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_constraint_set_yields_the_full_space() {
        assert_eq!(run(&[]).len(), LOW_SPACE as usize);
    }

    #[test]
    fn residues_match_is_deterministic() {
        let c = ShipwreckConstraint {
            chunk_x: -54,
            chunk_z: -14,
            rotation: crate::constraint::Rotation::None,
            shipwreck_type: "upright".to_string(),
            is_beached: false,
        };
        assert_eq!(residues_match(12345, &c), residues_match(12345, &c));
    }
}
