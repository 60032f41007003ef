// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sources along a line passing through the zenith.

use std::iter::repeat;

use super::{
    options::resolve_options, Arrangement, ArrangementError, ArrangementOptions, ArrangementType,
    DefiningDict, OptionValue, MIN_ALT_OPTION, NUM_SOURCES_OPTION,
};
use crate::{constants::*, math::linspace};

/// Sources evenly spaced along a line that runs from `min_alt` on one side of
/// the sky, through the zenith, down to `min_alt` on the other side. The first
/// half of the sources are at an azimuth of 180°, the second half at 0°.
///
/// With an odd number of sources, one source is exactly at the zenith. With an
/// even number, the two central sources straddle the zenith, each half a
/// spacing away from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongLine {
    num_sources: usize,

    /// \[degrees\]
    min_alt: f64,
}

impl LongLine {
    pub(crate) const DEFAULTS: &'static [(&'static str, OptionValue)] = &[
        (
            NUM_SOURCES_OPTION,
            OptionValue::Int(DEFAULT_LONG_LINE_NUM_SOURCES as i64),
        ),
        (
            MIN_ALT_OPTION,
            OptionValue::Float(DEFAULT_LONG_LINE_MIN_ALT_DEG),
        ),
    ];

    pub fn new(options: ArrangementOptions) -> Result<LongLine, ArrangementError> {
        let options = resolve_options(ArrangementType::LongLine, Self::DEFAULTS, options)?;
        Ok(LongLine {
            num_sources: options.get_usize(NUM_SOURCES_OPTION)?,
            min_alt: options.get_f64(MIN_ALT_OPTION)?,
        })
    }

    /// The number of sources on the 180° azimuth side of the line (including
    /// the zenith source, if there is one).
    fn num_first_half(&self) -> usize {
        (self.num_sources + 1) / 2
    }

    /// The angular distance between neighbouring sources \[degrees\].
    pub fn get_spacing(&self) -> f64 {
        let length = 180.0 - 2.0 * self.min_alt;
        length / (self.num_sources as f64 - 1.0)
    }
}

impl Default for LongLine {
    fn default() -> Self {
        LongLine {
            num_sources: DEFAULT_LONG_LINE_NUM_SOURCES,
            min_alt: DEFAULT_LONG_LINE_MIN_ALT_DEG,
        }
    }
}

impl Arrangement for LongLine {
    fn get_arrangement_type(&self) -> ArrangementType {
        ArrangementType::LongLine
    }

    fn get_num_sources(&self) -> usize {
        self.num_sources
    }

    fn alts(&self) -> Vec<f64> {
        let num_first_half = self.num_first_half();
        if self.num_sources % 2 == 0 {
            // Stop half a spacing short of the zenith, then mirror.
            let max_alt = ZENITH_ALT_DEG - self.get_spacing() / 2.0;
            let mut alts = linspace(self.min_alt, max_alt, num_first_half);
            alts.extend(alts.clone().into_iter().rev());
            alts
        } else {
            // Space downwards from the zenith so that a lone source sits on
            // the zenith rather than at `min_alt`.
            let mut alts = linspace(ZENITH_ALT_DEG, self.min_alt, num_first_half);
            alts.reverse();
            // Mirror everything except the zenith source.
            let mirrored: Vec<f64> = alts[..num_first_half - 1].iter().rev().copied().collect();
            alts.extend(mirrored);
            alts
        }
    }

    fn azs(&self) -> Vec<f64> {
        let num_first_half = self.num_first_half();
        repeat(LONG_LINE_FIRST_HALF_AZ_DEG)
            .take(num_first_half)
            .chain(repeat(LONG_LINE_SECOND_HALF_AZ_DEG).take(self.num_sources - num_first_half))
            .collect()
    }

    fn defining_dict(&self) -> DefiningDict {
        DefiningDict::from_iter([
            (NUM_SOURCES_OPTION, OptionValue::from(self.num_sources)),
            (MIN_ALT_OPTION, OptionValue::from(self.min_alt)),
        ])
    }
}
