// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A fixed pattern of sources near the zenith that spells out "HERA".

use super::{
    options::resolve_options, Arrangement, ArrangementError, ArrangementOptions, ArrangementType,
    DefiningDict, OptionValue,
};
use crate::constants::ZENITH_ALT_DEG;

/// \[degrees\]
#[rustfmt::skip]
pub(crate) const HERA_TEXT_AZS_DEG: [f64; 43] = [
    -254.055, -248.199, -236.310, -225.000, -206.565,
    -153.435, -123.690, -111.801, -105.945, -261.870,
    -258.690, -251.565, -135.000, -116.565, -101.310,
    -98.130, 90.000, 90.000, 90.000, 90.000, 90.000,
    -90.000, -90.000, -90.000, -90.000, -90.000,
    -90.000, 81.870, 78.690, 71.565, -45.000, -71.565,
    -78.690, -81.870, 74.055, 68.199, 56.310, 45.000,
    26.565, -26.565, -45.000, -56.310, -71.565,
];

/// \[degrees\]
#[rustfmt::skip]
pub(crate) const HERA_TEXT_ZENITH_ANGLES_DEG: [f64; 43] = [
    7.280, 5.385, 3.606, 2.828, 2.236, 2.236, 3.606,
    5.385, 7.280, 7.071, 5.099, 3.162, 1.414, 2.236,
    5.099, 7.071, 7.000, 6.000, 5.000, 3.000, 2.000,
    1.000, 2.000, 3.000, 5.000, 6.000, 7.000, 7.071,
    5.099, 3.162, 1.414, 3.162, 5.099, 7.071, 7.280,
    5.385, 3.606, 2.828, 2.236, 2.236, 2.828, 3.606, 6.325,
];

/// The "HERA" text pattern. Nothing about it is configurable. Note that some
/// azimuths are negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub struct HERAText;

impl HERAText {
    pub(crate) const DEFAULTS: &'static [(&'static str, OptionValue)] = &[];

    pub fn new(options: ArrangementOptions) -> Result<HERAText, ArrangementError> {
        resolve_options(ArrangementType::HERAText, Self::DEFAULTS, options)?;
        Ok(HERAText)
    }
}

impl Arrangement for HERAText {
    fn get_arrangement_type(&self) -> ArrangementType {
        ArrangementType::HERAText
    }

    /// The number of sources is however many altitudes there are.
    fn get_num_sources(&self) -> usize {
        HERA_TEXT_ZENITH_ANGLES_DEG.len()
    }

    fn alts(&self) -> Vec<f64> {
        HERA_TEXT_ZENITH_ANGLES_DEG
            .iter()
            .map(|za| ZENITH_ALT_DEG - za)
            .collect()
    }

    fn azs(&self) -> Vec<f64> {
        HERA_TEXT_AZS_DEG.to_vec()
    }

    fn defining_dict(&self) -> DefiningDict {
        DefiningDict::default()
    }
}
