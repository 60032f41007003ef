// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Randomly-scattered sources.
//!
//! All [`Random`] arrangements draw from a single process-wide generator. A
//! `Random` seeds this generator when it is created, and every call to
//! [`Arrangement::alts`] or [`Arrangement::azs`] advances it; two calls to the
//! same method generally give different values. Reproducing a set of draws
//! requires reseeding the generator with the same seed (e.g. by creating a new
//! `Random` with the seed in its defining options) and then repeating the same
//! sequence of calls.
//!
//! The generator is behind a mutex, but nothing orders draws between threads;
//! callers that need reproducible values must not draw from multiple threads
//! at once.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    options::resolve_options, Arrangement, ArrangementError, ArrangementOptions, ArrangementType,
    DefiningDict, OptionValue, MIN_ALT_OPTION, NUM_SOURCES_OPTION, RANDOM_SEED_OPTION,
};
use crate::{constants::*, math::uniform};

lazy_static::lazy_static! {
    static ref GENERATOR: Mutex<StdRng> = Mutex::new(StdRng::from_entropy());
}

fn lock_generator() -> MutexGuard<'static, StdRng> {
    // The generator's state is always valid, even if another thread panicked
    // while holding the lock.
    GENERATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reseed the shared generator used by [`Random`] arrangements. If no seed is
/// given, one is drawn from the thread-local entropy source. The seed that was
/// used is returned.
pub fn reseed_generator(seed: Option<u32>) -> u32 {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    *lock_generator() = StdRng::seed_from_u64(u64::from(seed));
    seed
}

/// Sources scattered uniformly in altitude (from a minimum altitude up to the
/// zenith) and in azimuth (all the way around the horizon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Random {
    num_sources: usize,

    /// \[degrees\]
    min_alt: f64,

    /// The seed given to the shared generator when this arrangement was made.
    rseed: u32,
}

impl Random {
    pub(crate) const DEFAULTS: &'static [(&'static str, OptionValue)] = &[
        (
            NUM_SOURCES_OPTION,
            OptionValue::Int(DEFAULT_RANDOM_NUM_SOURCES as i64),
        ),
        (
            MIN_ALT_OPTION,
            OptionValue::Float(DEFAULT_RANDOM_MIN_ALT_DEG),
        ),
        (RANDOM_SEED_OPTION, OptionValue::Null),
    ];

    pub fn new(options: ArrangementOptions) -> Result<Random, ArrangementError> {
        let options = resolve_options(ArrangementType::Random, Self::DEFAULTS, options)?;
        Ok(Random::with_seed(
            options.get_usize(NUM_SOURCES_OPTION)?,
            options.get_f64(MIN_ALT_OPTION)?,
            options.get_optional_u32(RANDOM_SEED_OPTION)?,
        ))
    }

    /// Create a new `Random` and (re)seed the shared generator. If `rseed` is
    /// `None`, a seed is chosen, and that seed is recorded instead.
    pub fn with_seed(num_sources: usize, min_alt: f64, rseed: Option<u32>) -> Random {
        let resolved = reseed_generator(rseed);
        match rseed {
            Some(_) => debug!("Seeded the shared generator with {resolved}"),
            None => debug!("No seed was given; seeded the shared generator with {resolved}"),
        }
        Random {
            num_sources,
            min_alt,
            rseed: resolved,
        }
    }

    /// Get the seed that this arrangement gave to the shared generator.
    pub fn get_seed(&self) -> u32 {
        self.rseed
    }

    /// Get the lowest altitude a source may have \[degrees\].
    pub fn get_min_alt(&self) -> f64 {
        self.min_alt
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::with_seed(
            DEFAULT_RANDOM_NUM_SOURCES,
            DEFAULT_RANDOM_MIN_ALT_DEG,
            None,
        )
    }
}

impl Arrangement for Random {
    fn get_arrangement_type(&self) -> ArrangementType {
        ArrangementType::Random
    }

    fn get_num_sources(&self) -> usize {
        self.num_sources
    }

    /// Draw new altitudes from `[min_alt, 90)`. This advances the shared
    /// generator.
    fn alts(&self) -> Vec<f64> {
        trace!("Drawing {} random altitudes", self.num_sources);
        uniform(
            &mut *lock_generator(),
            self.min_alt,
            ZENITH_ALT_DEG,
            self.num_sources,
        )
    }

    /// Draw new azimuths from `[0, 360)`. This advances the shared generator.
    fn azs(&self) -> Vec<f64> {
        trace!("Drawing {} random azimuths", self.num_sources);
        uniform(
            &mut *lock_generator(),
            0.0,
            RANDOM_MAX_AZ_DEG,
            self.num_sources,
        )
    }

    fn defining_dict(&self) -> DefiningDict {
        DefiningDict::from_iter([
            (NUM_SOURCES_OPTION, OptionValue::from(self.num_sources)),
            (MIN_ALT_OPTION, OptionValue::from(self.min_alt)),
            (RANDOM_SEED_OPTION, OptionValue::from(self.rseed)),
        ])
    }
}
