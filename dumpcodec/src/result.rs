//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the dumpcodec crate.
//!
//! Every error is terminal for the decode call that raised it: decoding is
//! all-or-nothing and no partial output is returned.

/// Result type alias for operations that may fail with a [`DumpError`].
pub type DumpResult<T> = Result<T, DumpError>;

/// Errors raised while configuring or running a hexdump decode.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// An option value is not one of the recognized values.
    ///
    /// Raised before any text is scanned.
    #[error("Invalid configuration: {field} = {value:?}")]
    InvalidConfiguration {
        /// Name of the offending option
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// A field does not match the grammar of the configured encoding or style.
    #[error("Malformed token {token:?} at line {line}, column {column}: {reason}")]
    MalformedToken {
        /// 1-based line number
        line: usize,
        /// 1-based character column where the field starts
        column: usize,
        /// The offending field text
        token: String,
        /// What was expected instead
        reason: String,
    },

    /// A numeric word does not fit in the configured word width.
    #[error("Word {token:?} at line {line}, column {column} overflows {width} byte(s)")]
    WordOverflow {
        /// 1-based line number
        line: usize,
        /// 1-based character column where the field starts
        column: usize,
        /// The offending field text
        token: String,
        /// Configured word width in bytes
        width: usize,
    },

    /// I/O error surfaced through the streaming codec
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DumpError {
    /// Builds an [`DumpError::InvalidConfiguration`].
    pub fn invalid_configuration(field: &'static str, value: impl ToString) -> Self {
        DumpError::InvalidConfiguration {
            field,
            value: value.to_string(),
        }
    }

    /// Line the error was raised on, if it came from scanning text.
    pub fn line(&self) -> Option<usize> {
        match self {
            DumpError::MalformedToken { line, .. } | DumpError::WordOverflow { line, .. } => {
                Some(*line)
            }
            DumpError::InvalidConfiguration { .. } | DumpError::Io(_) => None,
        }
    }

    /// Check if the error was raised by option validation
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, DumpError::InvalidConfiguration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DumpError::invalid_configuration("encoding", "hex_nibbles");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: encoding = \"hex_nibbles\""
        );
        assert!(err.is_configuration_error());
        assert_eq!(err.line(), None);

        let err = DumpError::WordOverflow {
            line: 3,
            column: 10,
            token: "256".to_string(),
            width: 1,
        };
        assert_eq!(
            err.to_string(),
            "Word \"256\" at line 3, column 10 overflows 1 byte(s)"
        );
        assert_eq!(err.line(), Some(3));
    }
}
