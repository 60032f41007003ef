// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Build catalogs the way a simulation would consume them.

use approx::assert_abs_diff_eq;
use serial_test::serial;
use strum::IntoEnumIterator;

use sky_arrangements::{
    create_arrangement, Arrangement, ArrangementOptions, ArrangementType, HorizonSource,
    LongLine, Zenith,
};

#[test]
#[serial]
fn every_arrangement_produces_a_consistent_catalog() {
    for arrangement_type in ArrangementType::iter() {
        let arrangement = create_arrangement(arrangement_type, ArrangementOptions::new()).unwrap();
        let sources = arrangement.sources();
        assert_eq!(sources.len(), arrangement.get_num_sources());
        assert!(
            sources.iter().all(|s| s.flux >= 0.0),
            "{arrangement_type} has a negative flux"
        );
        assert!(
            sources.iter().all(|s| s.alt_deg <= 90.0),
            "{arrangement_type} has a source beyond the zenith"
        );
    }
}

#[test]
fn zenith_flux_is_conserved() {
    for n in [1_usize, 2, 3, 10, 128] {
        let zenith = Zenith::new(ArrangementOptions::new().with("Nsrcs", n)).unwrap();
        let total: f64 = zenith.sources().iter().map(|s| s.flux).sum();
        assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn long_line_is_symmetric_about_the_zenith() {
    for n in 1..=21_i64 {
        let line = LongLine::new(
            ArrangementOptions::new()
                .with("Nsrcs", n)
                .with("min_alt", 15.0),
        )
        .unwrap();
        let sources: Vec<HorizonSource> = line.sources();
        let n = n as usize;
        assert_eq!(sources.len(), n);
        for i in 0..n / 2 {
            let (a, b) = (sources[i], sources[n - 1 - i]);
            assert_eq!(a.alt_deg, b.alt_deg);
            assert_eq!(a.az_deg, 180.0);
            assert_eq!(b.az_deg, 0.0);
        }
        let num_at_zenith = sources.iter().filter(|s| s.alt_deg == 90.0).count();
        assert_eq!(num_at_zenith, n % 2);
        if n > 1 {
            assert_abs_diff_eq!(sources[0].alt_deg, 15.0);
        }
    }
}
