use rayon::prelude::*;

use crate::constraint::Constraint;
use crate::lcg::XOR;
use crate::verify;

const PILLAR_MULT: i64 = 1540035429;
const PILLAR_ADD: i64 = 239479465;

fn mid32(pillar_seed: u32, lower16: u16) -> i64 {
    let partial = ((pillar_seed as i64) << 16) | (lower16 as i64);
    let s1 = partial.wrapping_mul(PILLAR_MULT).wrapping_add(PILLAR_ADD);
    let s2 = s1.wrapping_mul(PILLAR_MULT).wrapping_add(PILLAR_ADD);
    (s2 ^ XOR) & 0xFFFF_FFFF
}

pub fn run(constraints: &[Constraint], pillar_seed: u32) -> Vec<i64> {
    run_with_bits(constraints, pillar_seed, 16, 16)
}

fn run_with_bits(constraints: &[Constraint], pillar_seed: u32, lower_bits: u32, upper_bits: u32) -> Vec<i64> {
    (0u32..(1 << lower_bits))
        .into_par_iter()
        .flat_map(|lower| {
            let mid = mid32(pillar_seed, lower as u16);
            (0u32..(1 << upper_bits))
                .into_par_iter()
                .filter_map(move |upper| {
                    let candidate = ((upper as i64) << 32) | mid;
                    if constraints.iter().all(|c| verify::check(candidate, c)) {
                        Some(candidate)
                    } else {
                        None
                    }
                })
        })
        .collect()
}
