use std::f32::consts::PI;

/// CPU-side triangle mesh with per-vertex normals and UVs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned box centered at the origin
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);
        let mut mesh = Self::default();

        // (normal, u axis, v axis) per face
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];

        for (normal, u, v) in faces {
            let base = mesh.positions.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let corner = [
                    (normal[0] + u[0] * su + v[0] * sv) * hx,
                    (normal[1] + u[1] * su + v[1] * sv) * hy,
                    (normal[2] + u[2] * su + v[2] * sv) * hz,
                ];
                mesh.positions.push(corner);
                mesh.normals.push(normal);
                mesh.uvs.push([(su + 1.0) * 0.5, 1.0 - (sv + 1.0) * 0.5]);
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        mesh
    }

    /// Plane in the XY plane facing +Z, centered at the origin
    pub fn plane(width: f32, height: f32) -> Self {
        let (hx, hy) = (width * 0.5, height * 0.5);
        Self {
            positions: vec![[-hx, -hy, 0.0], [hx, -hy, 0.0], [hx, hy, 0.0], [-hx, hy, 0.0]],
            normals: vec![[0.0, 0.0, 1.0]; 4],
            uvs: vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    /// Capped cylinder along the Y axis, centered at the origin
    pub fn cylinder(radius: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let hy = height * 0.5;
        let mut mesh = Self::default();

        // Side wall, seam vertex duplicated for UV continuity
        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            let theta = t * 2.0 * PI;
            let (sin, cos) = theta.sin_cos();
            for (y, v) in [(hy, 0.0), (-hy, 1.0)] {
                mesh.positions.push([radius * sin, y, radius * cos]);
                mesh.normals.push([sin, 0.0, cos]);
                mesh.uvs.push([t, v]);
            }
        }
        for i in 0..segments {
            let a = i * 2;
            let (top0, bottom0, top1, bottom1) = (a, a + 1, a + 2, a + 3);
            mesh.indices
                .extend_from_slice(&[top0, bottom0, top1, top1, bottom0, bottom1]);
        }

        for (y, ny) in [(hy, 1.0f32), (-hy, -1.0f32)] {
            let center = mesh.positions.len() as u32;
            mesh.positions.push([0.0, y, 0.0]);
            mesh.normals.push([0.0, ny, 0.0]);
            mesh.uvs.push([0.5, 0.5]);

            for i in 0..=segments {
                let theta = i as f32 / segments as f32 * 2.0 * PI;
                let (sin, cos) = theta.sin_cos();
                mesh.positions.push([radius * sin, y, radius * cos]);
                mesh.normals.push([0.0, ny, 0.0]);
                mesh.uvs.push([0.5 + sin * 0.5, 0.5 + cos * ny * 0.5]);
            }
            for i in 0..segments {
                let rim = center + 1 + i;
                if ny > 0.0 {
                    mesh.indices.extend_from_slice(&[center, rim, rim + 1]);
                } else {
                    mesh.indices.extend_from_slice(&[center, rim + 1, rim]);
                }
            }
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_within(mesh: &MeshData, half: [f32; 3]) {
        for p in &mesh.positions {
            for axis in 0..3 {
                assert!(p[axis].abs() <= half[axis] + 1e-5, "{:?} outside {:?}", p, half);
            }
        }
    }

    #[test]
    fn test_cuboid_counts() {
        let mesh = MeshData::cuboid(1.6, 1.0, 1.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert_eq!(mesh.uvs.len(), mesh.positions.len());
    }

    #[test]
    fn test_cuboid_extents() {
        let mesh = MeshData::cuboid(1.6, 1.0, 1.0);
        assert_within(&mesh, [0.8, 0.5, 0.5]);
        assert!(mesh.positions.iter().any(|p| (p[0] - 0.8).abs() < 1e-6));
    }

    #[test]
    fn test_plane_faces_positive_z() {
        let mesh = MeshData::plane(1.2, 0.9);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
        assert_within(&mesh, [0.6, 0.45, 0.0]);
    }

    #[test]
    fn test_cylinder_extents() {
        let mesh = MeshData::cylinder(0.05, 0.02, 24);
        assert_within(&mesh, [0.05, 0.01, 0.05]);
        // side + two caps
        assert_eq!(mesh.triangle_count(), 24 * 2 + 24 * 2);
    }

    #[test]
    fn test_indices_in_range() {
        for mesh in [
            MeshData::cuboid(1.0, 2.0, 3.0),
            MeshData::plane(1.0, 1.0),
            MeshData::cylinder(2.5, 0.05, 64),
        ] {
            let n = mesh.vertex_count() as u32;
            assert!(mesh.indices.iter().all(|&i| i < n));
        }
    }

    #[test]
    fn test_cylinder_min_segments() {
        let mesh = MeshData::cylinder(1.0, 1.0, 1);
        assert_eq!(mesh.triangle_count(), 3 * 4);
    }
}
