use rayon::prelude::*;

use crate::constraint::Constraint;
use crate::verify;

const LOW_BITS: u32 = 20;
const UPPER_BITS: u32 = 28;

pub fn run(constraints: &[Constraint], low_candidates: &[u32]) -> Vec<i64> {
    run_with_upper_bits(constraints, low_candidates, UPPER_BITS)
}

fn run_with_upper_bits(constraints: &[Constraint], low_candidates: &[u32], upper_bits: u32) -> Vec<i64> {
    low_candidates
        .par_iter()
        .flat_map(|&low| {
            (0u32..(1 << upper_bits))
                .into_par_iter()
                .filter_map(move |upper| {
                    let seed = ((upper as i64) << LOW_BITS) | (low as i64);
                    if constraints.iter().all(|c| verify::check(seed, c)) {
                        Some(seed)
                    } else {
                        None
                    }
                })
        })
        .collect()
}
