#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the stat card crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the loaders, the renderer and the CLI.
///
/// The aggregation engine itself never fails; every variant here describes
/// either an I/O problem, a malformed document, or a caller contract
/// violation detected by the layout engine (unknown locale, incomplete theme,
/// unknown icon).
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading input documents.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the configuration violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps JSON encoding and decoding errors for pages and models.
    #[error("invalid JSON document: {source}")]
    Json {
        /// Underlying serde_json error.
        source: serde_json::Error
    },
    /// Service errors when interacting with the GitHub API.
    #[error("service error: {message}")]
    Service {
        /// Human readable message describing the service error.
        message: String
    },
    /// Wraps I/O errors that occur while writing SVG cards.
    #[error("failed to write SVG at {path:?}: {source}")]
    SvgIo {
        /// Location of the SVG file being written.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps I/O errors that occur while writing JSON documents.
    #[error("failed to write {path:?}: {source}")]
    WriteIo {
        /// Location of the document being written.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// The requested locale has no label tables.
    #[error("unsupported locale '{code}'")]
    UnsupportedLocale {
        /// Locale code supplied by the caller.
        code: String
    },
    /// The requested builtin theme does not exist.
    #[error("unknown theme '{name}'")]
    UnknownTheme {
        /// Theme name supplied by the caller.
        name: String
    },
    /// A theme color map lacks a required key.
    #[error("theme is missing required key '{key}'")]
    MissingThemeKey {
        /// Name of the absent key.
        key: String
    },
    /// An icon key does not name an entry of the icon table.
    #[error("unknown icon '{key}'")]
    UnknownIcon {
        /// Icon key supplied by the theme or caller.
        key: String
    },
    /// A string is neither a named color nor a hex color.
    #[error("invalid color '{value}'")]
    InvalidColor {
        /// Offending value.
        value: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a service error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the service error.
    pub fn service<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Service {
            message: message.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source
        }
    }
}

impl From<octocrab::Error> for Error {
    fn from(error: octocrab::Error) -> Self {
        Self::Service {
            message: error.to_string()
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::SvgIo`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the SVG file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn svg_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::SvgIo {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::WriteIo`] variant capturing the failing path and
/// source.
pub fn write_io_error(path: &Path, source: std::io::Error) -> Error {
    Error::WriteIo {
        path: path.to_path_buf(),
        source
    }
}
