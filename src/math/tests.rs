// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, SeedableRng};

use super::*;

#[test]
fn test_linspace() {
    let values = linspace(0.0, 1.0, 5);
    assert_abs_diff_eq!(values.as_slice(), [0.0, 0.25, 0.5, 0.75, 1.0].as_slice());

    let values = linspace(5.0, 90.0, 6);
    assert_eq!(values.len(), 6);
    assert_abs_diff_eq!(values[0], 5.0);
    assert_abs_diff_eq!(values[1], 22.0);
    // The end point is exact.
    assert_eq!(values[5], 90.0);
}

#[test]
fn test_linspace_degenerate() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);

    // Decreasing ranges are fine.
    let values = linspace(1.0, 0.0, 3);
    assert_abs_diff_eq!(values.as_slice(), [1.0, 0.5, 0.0].as_slice());
}

#[test]
fn test_uniform_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let values = uniform(&mut rng, 30.0, 90.0, 1000);
    assert_eq!(values.len(), 1000);
    assert!(values.iter().all(|&v| (30.0..90.0).contains(&v)));
}

#[test]
fn test_uniform_doesnt_panic_on_inverted_range() {
    let mut rng = StdRng::seed_from_u64(1);
    let values = uniform(&mut rng, 100.0, 90.0, 10);
    assert!(values.iter().all(|&v| v > 90.0 && v <= 100.0));

    let values = uniform(&mut rng, 90.0, 90.0, 3);
    assert_eq!(values, vec![90.0; 3]);
}

#[test]
fn test_uniform_is_reproducible() {
    let a = uniform(&mut StdRng::seed_from_u64(42), 0.0, 1.0, 5);
    let b = uniform(&mut StdRng::seed_from_u64(42), 0.0, 1.0, 5);
    assert_eq!(a, b);
}
