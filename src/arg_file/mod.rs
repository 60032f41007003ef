// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arrangements specified in argument files.
//!
//! An argument file names an arrangement and (optionally) its options, e.g.
//!
//! ```toml
//! arrangement = "LongLine"
//!
//! [options]
//! Nsrcs = 11
//! min_alt = 10.0
//! ```
//!
//! Supported formats are toml and json; the format is determined by the file
//! extension. Recording the arguments of an arrangement that was used (see
//! [`ArrangementArgs::from_arrangement`]) allows it to be reproduced later.

mod error;

pub use error::ArgFileError;

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::arrangement::{
    create_arrangement, Arrangement, ArrangementError, ArrangementOptions, ArrangementType,
};

lazy_static::lazy_static! {
    pub(crate) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");
}

#[derive(Debug, Display, EnumIter, EnumString)]
enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

/// The arguments needed to create an arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementArgs {
    /// The name of the arrangement, e.g. "Triangle". Case is ignored.
    pub arrangement: String,

    /// Options given to the arrangement. Options that aren't given take the
    /// arrangement's defaults.
    #[serde(default)]
    #[serde(skip_serializing_if = "ArrangementOptions::is_empty")]
    pub options: ArrangementOptions,
}

impl ArrangementArgs {
    /// Read arguments from a toml or json file.
    pub fn from_arg_file<P: AsRef<Path>>(arg_file: P) -> Result<ArrangementArgs, ArgFileError> {
        let arg_file = arg_file.as_ref();
        debug!("Attempting to parse argument file {}", arg_file.display());

        let arg_file_type = arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        let mut contents = String::new();
        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                trace!("Parsing toml file...");
                File::open(arg_file)?.read_to_string(&mut contents)?;
                toml::from_str(&contents).map_err(|err| ArgFileError::TomlDecode {
                    file: arg_file.display().to_string(),
                    err: err.to_string(),
                })
            }

            Some(ArgFileTypes::Json) => {
                trace!("Parsing json file...");
                File::open(arg_file)?.read_to_string(&mut contents)?;
                serde_json::from_str(&contents).map_err(|err| ArgFileError::JsonDecode {
                    file: arg_file.display().to_string(),
                    err: err.to_string(),
                })
            }

            None => Err(ArgFileError::UnrecognisedExtension {
                file: arg_file.display().to_string(),
            }),
        }
    }

    /// Capture the arguments that define an existing arrangement.
    pub fn from_arrangement(arrangement: &dyn Arrangement) -> ArrangementArgs {
        ArrangementArgs {
            arrangement: arrangement.get_arrangement_type().to_string(),
            options: arrangement.defining_dict().into_options(),
        }
    }

    /// Create the arrangement described by these arguments.
    pub fn parse(self) -> Result<Box<dyn Arrangement>, ArrangementError> {
        let arrangement_type = ArrangementType::from_name(&self.arrangement)?;
        create_arrangement(arrangement_type, self.options)
    }

    pub fn to_toml_string(&self) -> Result<String, ArgFileError> {
        Ok(toml::to_string(self)?)
    }

    /// Write these arguments into a new toml file that can be used to
    /// reproduce the arrangement.
    pub fn save_toml<P: AsRef<Path>>(&self, toml_file: P) -> Result<(), ArgFileError> {
        let toml_file = toml_file.as_ref();
        debug!("Writing arrangement arguments to {}", toml_file.display());
        let toml_str = self.to_toml_string()?;
        let mut f = BufWriter::new(File::create(toml_file)?);
        f.write_all(toml_str.as_bytes())?;
        f.flush()?;
        Ok(())
    }
}
