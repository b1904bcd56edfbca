// ObjMesh - Wavefront Model Loading
// Copyright (C) 2025 ObjMesh Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Error types for model and material loading

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What a face corner was pointing at when it went out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// A `v` record
    Position,
    /// A `vt` record
    TexCoord,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Position => write!(f, "position"),
            IndexKind::TexCoord => write!(f, "texture coordinate"),
        }
    }
}

/// Model loading errors
#[derive(Debug, Error)]
pub enum MeshError {
    /// Malformed directive, numeric literal or face record
    #[error("{}:{line}: {message}", file.display())]
    Format {
        /// File containing the bad record
        file: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// Face corner references a vertex or texcoord that was never declared
    #[error(
        "{}:{line}: {kind} index {index} out of range ({available} available)",
        file.display()
    )]
    OutOfRange {
        /// File containing the face record
        file: PathBuf,
        /// 1-based line number
        line: usize,
        /// Which array the index points into
        kind: IndexKind,
        /// The index as written in the file
        index: i64,
        /// Number of entries the object had at that point
        available: usize,
    },

    /// Model or material file could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        /// File that failed to open or read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Diffuse texture exists but could not be decoded
    #[error("Texture error in {}: {message}", path.display())]
    Texture {
        /// Texture file
        path: PathBuf,
        /// Decoder message
        message: String,
    },
}

impl MeshError {
    /// Build a format error for a given file and line
    pub fn format(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        MeshError::Format {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Build an IO error for a path
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        MeshError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Line number of the offending record, if the error is line-oriented
    pub fn line(&self) -> Option<usize> {
        match self {
            MeshError::Format { line, .. } | MeshError::OutOfRange { line, .. } => Some(*line),
            MeshError::Io { .. } | MeshError::Texture { .. } => None,
        }
    }

    /// File the error refers to
    pub fn file(&self) -> &Path {
        match self {
            MeshError::Format { file, .. } | MeshError::OutOfRange { file, .. } => file,
            MeshError::Io { path, .. } | MeshError::Texture { path, .. } => path,
        }
    }
}

/// Result type for loading operations
pub type Result<T> = std::result::Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display_names_file_and_line() {
        let err = MeshError::format("models/cube.obj", 12, "expected 3 floats");
        assert_eq!(err.to_string(), "models/cube.obj:12: expected 3 floats");
        assert_eq!(err.line(), Some(12));
        assert_eq!(err.file(), Path::new("models/cube.obj"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = MeshError::OutOfRange {
            file: PathBuf::from("a.obj"),
            line: 4,
            kind: IndexKind::TexCoord,
            index: 9,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "a.obj:4: texture coordinate index 9 out of range (2 available)"
        );
    }

    #[test]
    fn test_io_error_has_no_line() {
        let err = MeshError::io(
            Path::new("missing.mtl"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.line(), None);
        assert!(err.to_string().contains("missing.mtl"));
    }
}
