// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to abstract sky-source arrangements.
//!
//! [`Arrangement`] is a trait detailing what every arrangement must provide:
//! altitudes, azimuths and fluxes for each of its sources, as well as the
//! options that define it. The geometry is derived from the options every time
//! it's requested; nothing is cached. The exception to "pure" derivation is
//! [`Random`], which draws from a process-wide generator on every access.
//!
//! All angles are in degrees.

mod error;
mod fixed;
mod hera_text;
mod long_line;
mod options;
mod random;

pub use error::ArrangementError;
pub use fixed::{Cross, OffZenith, Triangle, Zenith};
pub use hera_text::HERAText;
pub use long_line::LongLine;
pub use options::{
    ArrangementOptions, DefiningDict, OptionValue, ALT_OPTION, MIN_ALT_OPTION, NUM_SOURCES_OPTION,
    RANDOM_SEED_OPTION,
};
pub use random::{reseed_generator, Random};

use itertools::{izip, Itertools};
use log::debug;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::constants::{DEFAULT_ALT_DEG, DEFAULT_AZ_DEG, DEFAULT_FLUX};

lazy_static::lazy_static! {
    pub static ref ARRANGEMENT_TYPES_COMMA_SEPARATED: String = ArrangementType::iter().join(", ");
}

/// Supported arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum ArrangementType {
    /// A single source away from the zenith.
    OffZenith,

    /// Three equally-spaced sources at the same altitude.
    Triangle,

    /// A fixed four-source layout.
    Cross,

    /// Sources at the zenith whose fluxes sum to one.
    Zenith,

    /// Sources scattered uniformly above a minimum altitude.
    Random,

    /// Sources along a line through the zenith.
    LongLine,

    /// A fixed 43-source pattern spelling out "HERA".
    HERAText,
}

impl ArrangementType {
    /// Get an arrangement type from its name. Case is ignored.
    pub fn from_name(name: &str) -> Result<ArrangementType, ArrangementError> {
        name.trim()
            .parse()
            .map_err(|_| ArrangementError::UnknownArrangement(name.to_string()))
    }

    /// The names of the options this arrangement recognises.
    pub fn recognized_options(self) -> Vec<&'static str> {
        let defaults = match self {
            ArrangementType::OffZenith => OffZenith::DEFAULTS,
            ArrangementType::Triangle => Triangle::DEFAULTS,
            ArrangementType::Cross => Cross::DEFAULTS,
            ArrangementType::Zenith => Zenith::DEFAULTS,
            ArrangementType::Random => Random::DEFAULTS,
            ArrangementType::LongLine => LongLine::DEFAULTS,
            ArrangementType::HERAText => HERAText::DEFAULTS,
        };
        defaults.iter().map(|&(name, _)| name).collect()
    }
}

/// A single source in the local horizon frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonSource {
    /// Altitude \[degrees\]
    pub alt_deg: f64,

    /// Azimuth \[degrees\]
    pub az_deg: f64,

    /// Flux (arbitrary units)
    pub flux: f64,
}

/// A trait abstracting sky-source arrangements.
///
/// For every arrangement, `alts`, `azs` and `fluxes` each have
/// `get_num_sources` elements.
pub trait Arrangement: Send + Sync {
    /// Get the type of arrangement.
    fn get_arrangement_type(&self) -> ArrangementType;

    /// Get the number of sources in this arrangement.
    fn get_num_sources(&self) -> usize;

    /// Get the altitudes of the sources \[degrees\].
    fn alts(&self) -> Vec<f64> {
        vec![DEFAULT_ALT_DEG; self.get_num_sources()]
    }

    /// Get the azimuths of the sources \[degrees\].
    fn azs(&self) -> Vec<f64> {
        vec![DEFAULT_AZ_DEG; self.get_num_sources()]
    }

    /// Get the fluxes of the sources.
    fn fluxes(&self) -> Vec<f64> {
        vec![DEFAULT_FLUX; self.get_num_sources()]
    }

    /// Get the options (and their current values) that define this
    /// arrangement.
    fn defining_dict(&self) -> DefiningDict;

    /// Get all sources of this arrangement. This reads each of the altitudes,
    /// azimuths and fluxes exactly once.
    fn sources(&self) -> Vec<HorizonSource> {
        izip!(self.alts(), self.azs(), self.fluxes())
            .map(|(alt_deg, az_deg, flux)| HorizonSource {
                alt_deg,
                az_deg,
                flux,
            })
            .collect()
    }
}

/// Create an arrangement from its type and options.
pub fn create_arrangement(
    arrangement_type: ArrangementType,
    options: ArrangementOptions,
) -> Result<Box<dyn Arrangement>, ArrangementError> {
    debug!("Creating a {arrangement_type} arrangement with options {options:?}");
    let arrangement: Box<dyn Arrangement> = match arrangement_type {
        ArrangementType::OffZenith => Box::new(OffZenith::new(options)?),
        ArrangementType::Triangle => Box::new(Triangle::new(options)?),
        ArrangementType::Cross => Box::new(Cross::new(options)?),
        ArrangementType::Zenith => Box::new(Zenith::new(options)?),
        ArrangementType::Random => Box::new(Random::new(options)?),
        ArrangementType::LongLine => Box::new(LongLine::new(options)?),
        ArrangementType::HERAText => Box::new(HERAText::new(options)?),
    };
    Ok(arrangement)
}
