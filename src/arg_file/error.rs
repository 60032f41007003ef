// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with arrangement argument files.

use thiserror::Error;

use super::ARG_FILE_TYPES_COMMA_SEPARATED;
use crate::arrangement::ArrangementError;

#[derive(Error, Debug)]
pub enum ArgFileError {
    #[error("Argument file '{file}' doesn't have a recognised file extension! Valid extensions are: {}", *ARG_FILE_TYPES_COMMA_SEPARATED)]
    UnrecognisedExtension { file: String },

    #[error("Couldn't decode toml structure from '{file}':\n{err}")]
    TomlDecode { file: String, err: String },

    #[error("Couldn't decode json structure from '{file}':\n{err}")]
    JsonDecode { file: String, err: String },

    #[error("Couldn't encode arrangement arguments as toml: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error(transparent)]
    Arrangement(#[from] ArrangementError),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}
