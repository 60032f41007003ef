// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.

#[cfg(test)]
mod tests;

use rand::Rng;

/// Get `num` evenly-spaced values from `start` to `stop`, inclusive of both
/// ends. With `num == 1`, only `start` is returned, and with `num == 0` the
/// result is empty.
///
/// # Examples
///
/// `assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);`
pub(crate) fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            // Don't let floating-point error move the end point.
            values[num - 1] = stop;
            values
        }
    }
}

/// Draw `num` values uniformly from `[low, high)`. Unlike `Rng::gen_range`,
/// this doesn't panic if the range is empty or inverted; the values are simply
/// `low + (high - low) * u` for `u` in `[0, 1)`.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64, num: usize) -> Vec<f64> {
    (0..num)
        .map(|_| low + (high - low) * rng.gen::<f64>())
        .collect()
}
