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

//! Resolution of file references recorded inside model and material files
//!
//! Exporters frequently write absolute paths from the artist's machine
//! (`C:\Users\art\textures\wood.png`). When the literal reference does not
//! exist we fall back to the bare file name next to the referencing document.

use std::path::{Path, PathBuf};
use tracing::trace;

/// Resolve `reference` as written inside `referencing_doc`.
///
/// Never fails: a path that still does not exist is reported by whoever
/// tries to open it.
pub fn resolve_reference(reference: &str, referencing_doc: &Path) -> PathBuf {
    let literal = Path::new(reference);
    if literal.is_file() {
        return literal.to_path_buf();
    }

    let normalized = reference.replace('\\', "/");
    let file_name = match normalized.rfind('/') {
        Some(pos) => &normalized[pos + 1..],
        None => normalized.as_str(),
    };

    let resolved = match referencing_doc.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    };

    trace!(
        reference,
        resolved = %resolved.display(),
        "Reference not found as written, using document directory"
    );
    resolved
}
