// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Record arrangements in argument files and reproduce them.

use serial_test::serial;
use tempfile::TempDir;

use super::make_file_in_dir;
use sky_arrangements::{
    ArgFileError, Arrangement, ArrangementArgs, ArrangementError, ArrangementOptions, Random,
};

#[test]
#[serial]
fn recorded_random_arrangement_is_reproducible() {
    let tmp_dir = TempDir::new().unwrap();
    let random = Random::new(
        ArrangementOptions::new()
            .with("Nsrcs", 50)
            .with("min_alt", 45.0),
    )
    .unwrap();
    let sources = random.sources();

    let toml_file = tmp_dir.path().join("random.toml");
    ArrangementArgs::from_arrangement(&random)
        .save_toml(&toml_file)
        .unwrap();

    let reproduced = ArrangementArgs::from_arg_file(&toml_file)
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(reproduced.sources(), sources);
}

#[test]
fn typos_in_arg_files_are_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let json_file = make_file_in_dir(
        "zenith.json",
        tmp_dir.path(),
        r#"{"arrangement": "Zenith", "options": {"nsrcs": 4}}"#,
    );
    let result = ArrangementArgs::from_arg_file(json_file).unwrap().parse();
    match result {
        Err(ArrangementError::UnrecognizedOption {
            arrangement,
            options,
        }) => {
            assert_eq!(arrangement, "Zenith");
            assert_eq!(options, vec!["nsrcs".to_string()]);
        }
        Err(e) => panic!("Unexpected error: {e}"),
        Ok(_) => panic!("Expected an error"),
    }
}

#[test]
fn arg_file_errors_are_descriptive() {
    let tmp_dir = TempDir::new().unwrap();
    let txt_file = make_file_in_dir("cross.txt", tmp_dir.path(), "Cross");
    let err = ArrangementArgs::from_arg_file(&txt_file).unwrap_err();
    assert!(matches!(err, ArgFileError::UnrecognisedExtension { .. }));
    assert!(err.to_string().contains("cross.txt"));
}
