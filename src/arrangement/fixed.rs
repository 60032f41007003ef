// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arrangements with a fixed layout: [`OffZenith`], [`Triangle`], [`Cross`] and
//! [`Zenith`].

use super::{
    options::resolve_options, Arrangement, ArrangementError, ArrangementOptions, ArrangementType,
    DefiningDict, OptionValue, ALT_OPTION, NUM_SOURCES_OPTION,
};
use crate::constants::*;

/// A single source away from the zenith. Its azimuth is the default azimuth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffZenith {
    /// \[degrees\]
    alt: f64,
}

impl OffZenith {
    pub(crate) const DEFAULTS: &'static [(&'static str, OptionValue)] =
        &[(ALT_OPTION, OptionValue::Float(DEFAULT_OFF_ZENITH_ALT_DEG))];

    pub fn new(options: ArrangementOptions) -> Result<OffZenith, ArrangementError> {
        let options = resolve_options(ArrangementType::OffZenith, Self::DEFAULTS, options)?;
        Ok(OffZenith {
            alt: options.get_f64(ALT_OPTION)?,
        })
    }

    /// Get the altitude of the source \[degrees\].
    pub fn get_alt(&self) -> f64 {
        self.alt
    }
}

impl Default for OffZenith {
    fn default() -> Self {
        OffZenith {
            alt: DEFAULT_OFF_ZENITH_ALT_DEG,
        }
    }
}

impl Arrangement for OffZenith {
    fn get_arrangement_type(&self) -> ArrangementType {
        ArrangementType::OffZenith
    }

    fn get_num_sources(&self) -> usize {
        1
    }

    fn alts(&self) -> Vec<f64> {
        vec![self.alt; self.get_num_sources()]
    }

    fn defining_dict(&self) -> DefiningDict {
        DefiningDict::from_iter([(ALT_OPTION, OptionValue::from(self.alt))])
    }
}

const TRIANGLE_AZS_DEG: [f64; 3] = [0.0, 120.0, 240.0];

/// Three equally-spaced sources, all at the same altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// \[degrees\]
    alt: f64,
}

impl Triangle {
    pub(crate) const DEFAULTS: &'static [(&'static str, OptionValue)] =
        &[(ALT_OPTION, OptionValue::Float(DEFAULT_TRIANGLE_ALT_DEG))];

    pub fn new(options: ArrangementOptions) -> Result<Triangle, ArrangementError> {
        let options = resolve_options(ArrangementType::Triangle, Self::DEFAULTS, options)?;
        Ok(Triangle {
            alt: options.get_f64(ALT_OPTION)?,
        })
    }

    /// Get the altitude of all sources \[degrees\].
    pub fn get_alt(&self) -> f64 {
        self.alt
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Triangle {
            alt: DEFAULT_TRIANGLE_ALT_DEG,
        }
    }
}

impl Arrangement for Triangle {
    fn get_arrangement_type(&self) -> ArrangementType {
        ArrangementType::Triangle
    }

    fn get_num_sources(&self) -> usize {
        TRIANGLE_AZS_DEG.len()
    }

    fn alts(&self) -> Vec<f64> {
        vec![self.alt; self.get_num_sources()]
    }

    fn azs(&self) -> Vec<f64> {
        TRIANGLE_AZS_DEG.to_vec()
    }

    fn defining_dict(&self) -> DefiningDict {
        DefiningDict::from_iter([(ALT_OPTION, OptionValue::from(self.alt))])
    }
}

const CROSS_ALTS_DEG: [f64; 4] = [88.0, 90.0, 86.0, 82.0];
const CROSS_AZS_DEG: [f64; 4] = [270.0, 0.0, 90.0, 135.0];
const CROSS_FLUXES: [f64; 4] = [5.0, 4.0, 1.0, 2.0];

/// A fixed four-source layout. Nothing about it is configurable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cross;

impl Cross {
    pub(crate) const DEFAULTS: &'static [(&'static str, OptionValue)] = &[];

    pub fn new(options: ArrangementOptions) -> Result<Cross, ArrangementError> {
        resolve_options(ArrangementType::Cross, Self::DEFAULTS, options)?;
        Ok(Cross)
    }
}

impl Arrangement for Cross {
    fn get_arrangement_type(&self) -> ArrangementType {
        ArrangementType::Cross
    }

    fn get_num_sources(&self) -> usize {
        CROSS_ALTS_DEG.len()
    }

    fn alts(&self) -> Vec<f64> {
        CROSS_ALTS_DEG.to_vec()
    }

    fn azs(&self) -> Vec<f64> {
        CROSS_AZS_DEG.to_vec()
    }

    fn fluxes(&self) -> Vec<f64> {
        CROSS_FLUXES.to_vec()
    }

    fn defining_dict(&self) -> DefiningDict {
        DefiningDict::default()
    }
}

/// Sources at the zenith. The fluxes always sum to one, regardless of how many
/// sources there are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zenith {
    num_sources: usize,
}

impl Zenith {
    pub(crate) const DEFAULTS: &'static [(&'static str, OptionValue)] = &[(
        NUM_SOURCES_OPTION,
        OptionValue::Int(DEFAULT_ZENITH_NUM_SOURCES as i64),
    )];

    pub fn new(options: ArrangementOptions) -> Result<Zenith, ArrangementError> {
        let options = resolve_options(ArrangementType::Zenith, Self::DEFAULTS, options)?;
        Ok(Zenith {
            num_sources: options.get_usize(NUM_SOURCES_OPTION)?,
        })
    }
}

impl Default for Zenith {
    fn default() -> Self {
        Zenith {
            num_sources: DEFAULT_ZENITH_NUM_SOURCES,
        }
    }
}

impl Arrangement for Zenith {
    fn get_arrangement_type(&self) -> ArrangementType {
        ArrangementType::Zenith
    }

    fn get_num_sources(&self) -> usize {
        self.num_sources
    }

    fn azs(&self) -> Vec<f64> {
        vec![0.0; self.num_sources]
    }

    fn fluxes(&self) -> Vec<f64> {
        vec![1.0 / self.num_sources as f64; self.num_sources]
    }

    fn defining_dict(&self) -> DefiningDict {
        DefiningDict::from_iter([(NUM_SOURCES_OPTION, OptionValue::from(self.num_sources))])
    }
}
