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

//! Smooth vertex normals
//!
//! Each triangle adds its unnormalised face normal `(b - a) x (c - a)` to
//! its three vertices, so larger triangles weigh more. The per-vertex sums
//! are normalised at the end. Vertices referenced by no triangle, or whose
//! sum cancels out, get the zero vector.
//!
//! Seam copies are separate vertices and therefore shade independently.

use nalgebra_glm as glm;

/// Compute one normal per entry of `positions` from a triangle list
pub fn compute_normals(positions: &[glm::Vec3], indices: &[u32]) -> Vec<glm::Vec3> {
    let mut normals = vec![glm::Vec3::zeros(); positions.len()];

    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (a, b, c) = (positions[ia], positions[ib], positions[ic]);
        let face = glm::cross(&(b - a), &(c - a));
        normals[ia] += face;
        normals[ib] += face;
        normals[ic] += face;
    }

    for n in &mut normals {
        let length = glm::length(n);
        *n = if length > 0.0 && length.is_finite() {
            *n / length
        } else {
            glm::Vec3::zeros()
        };
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: &glm::Vec3, b: &glm::Vec3) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn test_single_triangle_faces_plus_z() {
        let positions = vec![
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(1.0, 0.0, 0.0),
            glm::vec3(0.0, 1.0, 0.0),
        ];
        let normals = compute_normals(&positions, &[0, 1, 2]);
        for n in &normals {
            assert!(near(n, &glm::vec3(0.0, 0.0, 1.0)));
        }
    }

    #[test]
    fn test_winding_flips_normal() {
        let positions = vec![
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(1.0, 0.0, 0.0),
            glm::vec3(0.0, 1.0, 0.0),
        ];
        let normals = compute_normals(&positions, &[0, 2, 1]);
        assert!(near(&normals[0], &glm::vec3(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_area_weighting() {
        // Shared edge between a large triangle facing +z and a small one facing +x
        let positions = vec![
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(0.0, 1.0, 0.0),
            glm::vec3(-10.0, 0.0, 0.0),
            glm::vec3(0.0, 0.0, 0.1),
        ];
        let normals = compute_normals(&positions, &[0, 1, 2, 0, 1, 3]);
        let shared = normals[0];
        assert!((shared.norm() - 1.0).abs() < 1e-5);
        // The large face dominates
        assert!(shared.z > 0.99);
        assert!(near(&normals[3], &glm::vec3(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_unreferenced_and_degenerate_are_zero() {
        let positions = vec![
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(1.0, 0.0, 0.0),
            glm::vec3(2.0, 0.0, 0.0),
            glm::vec3(5.0, 5.0, 5.0),
        ];
        let normals = compute_normals(&positions, &[0, 1, 2]);
        assert!(normals.iter().all(|n| *n == glm::Vec3::zeros()));
    }

    #[test]
    fn test_opposing_faces_cancel() {
        let positions = vec![
            glm::vec3(0.0, 0.0, 0.0),
            glm::vec3(1.0, 0.0, 0.0),
            glm::vec3(0.0, 1.0, 0.0),
        ];
        let normals = compute_normals(&positions, &[0, 1, 2, 0, 2, 1]);
        assert_eq!(normals[0], glm::Vec3::zeros());
    }
}
