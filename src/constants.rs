// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All angles are in degrees. All constants *must* be double precision.
 */

/// The altitude of the zenith \[degrees\].
pub const ZENITH_ALT_DEG: f64 = 90.0;

/// The altitude given to sources by arrangements that don't specify their own
/// \[degrees\].
pub const DEFAULT_ALT_DEG: f64 = ZENITH_ALT_DEG;

/// The azimuth given to sources by arrangements that don't specify their own
/// \[degrees\].
pub const DEFAULT_AZ_DEG: f64 = 90.0;

/// The flux given to sources by arrangements that don't specify their own.
pub const DEFAULT_FLUX: f64 = 1.0;

/// The default altitude of the single `OffZenith` source \[degrees\].
pub const DEFAULT_OFF_ZENITH_ALT_DEG: f64 = 85.0;

/// The default altitude of all three `Triangle` sources \[degrees\].
pub const DEFAULT_TRIANGLE_ALT_DEG: f64 = 87.0;

/// The default number of `Zenith` sources.
pub const DEFAULT_ZENITH_NUM_SOURCES: usize = 1;

/// The default number of `Random` sources.
pub const DEFAULT_RANDOM_NUM_SOURCES: usize = 1;

/// The default lowest altitude a `Random` source may have \[degrees\].
pub const DEFAULT_RANDOM_MIN_ALT_DEG: f64 = 30.0;

/// The default number of `LongLine` sources.
pub const DEFAULT_LONG_LINE_NUM_SOURCES: usize = 10;

/// The default lowest altitude of the `LongLine` sources on either side of the
/// zenith \[degrees\].
pub const DEFAULT_LONG_LINE_MIN_ALT_DEG: f64 = 5.0;

/// The azimuth of the first half of the `LongLine` sources \[degrees\].
pub const LONG_LINE_FIRST_HALF_AZ_DEG: f64 = 180.0;

/// The azimuth of the second half of the `LongLine` sources \[degrees\].
pub const LONG_LINE_SECOND_HALF_AZ_DEG: f64 = 0.0;

/// `Random` azimuths are drawn from `[0, RANDOM_MAX_AZ_DEG)` \[degrees\].
pub const RANDOM_MAX_AZ_DEG: f64 = 360.0;
