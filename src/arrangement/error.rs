// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with constructing arrangements.

use thiserror::Error;

use super::ARRANGEMENT_TYPES_COMMA_SEPARATED;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrangementError {
    #[error("The following options are not accepted in {arrangement}: {}", .options.join(", "))]
    UnrecognizedOption {
        arrangement: &'static str,
        options: Vec<String>,
    },

    #[error("{arrangement}: option '{option}' must be {expected}, but got {got}")]
    InvalidOptionType {
        arrangement: &'static str,
        option: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("Unknown arrangement '{0}'; valid arrangements are: {}", *ARRANGEMENT_TYPES_COMMA_SEPARATED)]
    UnknownArrangement(String),
}
