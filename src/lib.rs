// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Synthetic sky-source arrangements for radio-interferometric simulation tests.

An "arrangement" is a named recipe that produces a set of point sources in
the local horizon frame (altitude, azimuth; both in degrees) and a flux for
each source. All arrangements implement the [`Arrangement`] trait.
 */

pub mod arg_file;
pub mod arrangement;
pub mod constants;
pub(crate) mod math;

// Re-exports.
pub use arg_file::{ArgFileError, ArrangementArgs};
pub use arrangement::{
    create_arrangement, reseed_generator, Arrangement, ArrangementError, ArrangementOptions,
    ArrangementType, Cross, DefiningDict, HERAText, HorizonSource, LongLine, OffZenith,
    OptionValue, Random, Triangle, Zenith, ARRANGEMENT_TYPES_COMMA_SEPARATED,
};
