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

//! Line-oriented records shared by the OBJ and MTL readers

use crate::error::{MeshError, Result};
use std::path::Path;

/// One non-blank line of a document, borrowed from the file contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the source file
    pub number: usize,
    /// Line text with surrounding whitespace removed
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Directive keyword (`v`, `f`, `newmtl`, ...). Tabs count as separators.
    pub fn keyword(&self) -> &'a str {
        self.text.split_whitespace().next().unwrap_or("")
    }

    /// Everything after the keyword, trimmed
    pub fn rest(&self) -> &'a str {
        let keyword = self.keyword();
        self.text[keyword.len()..].trim()
    }

    /// Whitespace-separated arguments after the keyword
    pub fn args(&self) -> impl Iterator<Item = &'a str> {
        self.text.split_whitespace().skip(1)
    }

    /// `true` for `#` comment lines
    pub fn is_comment(&self) -> bool {
        self.text.starts_with('#')
    }
}

/// Read a whole document. Bytes that are not UTF-8 decode to U+FFFD
/// instead of failing the load.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| MeshError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split a document into numbered, trimmed, non-blank lines. A leading
/// byte-order mark is dropped.
pub fn source_lines(text: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines().enumerate().filter_map(|(idx, raw)| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(SourceLine {
                number: idx + 1,
                text: trimmed,
            })
        }
    })
}

/// Parse exactly the first `N` arguments of a line as floats. Extra
/// arguments (e.g. the optional `w` of `v x y z w`) are ignored.
pub fn parse_floats<const N: usize>(line: &SourceLine<'_>, file: &Path) -> Result<[f32; N]> {
    let mut out = [0.0f32; N];
    let mut args = line.args();

    for (i, slot) in out.iter_mut().enumerate() {
        let token = args.next().ok_or_else(|| {
            MeshError::format(
                file,
                line.number,
                format!(
                    "'{}' expects {} numeric values, found {}",
                    line.keyword(),
                    N,
                    i
                ),
            )
        })?;
        *slot = token.parse::<f32>().map_err(|_| {
            MeshError::format(
                file,
                line.number,
                format!("invalid number '{}' in '{}'", token, line.keyword()),
            )
        })?;
    }

    Ok(out)
}

/// Parse the first argument of a line as an integer
pub fn parse_int(line: &SourceLine<'_>, file: &Path) -> Result<i64> {
    let token = line.args().next().ok_or_else(|| {
        MeshError::format(
            file,
            line.number,
            format!("'{}' expects an integer value", line.keyword()),
        )
    })?;
    token.parse::<i64>().map_err(|_| {
        MeshError::format(
            file,
            line.number,
            format!("invalid integer '{}' in '{}'", token, line.keyword()),
        )
    })
}
