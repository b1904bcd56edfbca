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


//! Consistent, coloured terminal output for every command.
//!
//! Results go to stdout so they can be piped; errors go to stderr.
//!
//! ```ignore
//! output::header("cube.obj");
//! output::detail("Meshes", "2");
//! output::success("Loaded 1 model");
//! ```

use console::style;

/// Print a success message with a green check mark.
pub fn success(msg: &str) {
    println!("{} {}", style("✅").green().bold(), msg);
}

/// Print an error message to stderr with a red cross.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("❌").red().bold(), msg);
}

/// Print a warning message with a yellow sign.
pub fn warning(msg: &str) {
    println!("{} {}", style("⚠️").yellow(), msg);
}

/// Print a section header.
pub fn header(msg: &str) {
    println!("{} {}", style("🧊").cyan(), style(msg).cyan().bold());
}

/// Print an indented key-value line.
pub fn detail(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a doubly indented key-value line, used under a named item.
pub fn subdetail(key: &str, value: &str) {
    println!("    {}: {}", style(key).dim(), value);
}

/// Print a bold item title under a header.
pub fn item(name: &str) {
    println!("  {}", style(name).bold());
}

/// `r g b` with three decimals, the way MTL files write colours
pub fn rgb(c: [f32; 3]) -> String {
    format!("{:.3} {:.3} {:.3}", c[0], c[1], c[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_formatting() {
        assert_eq!(rgb([1.0, 0.5, 0.0]), "1.000 0.500 0.000");
    }
}
