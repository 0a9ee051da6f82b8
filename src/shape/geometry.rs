use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::params::{BoxParams, CylinderParams, SphereParams, TorusParams};

/// Vertex layout shared by every shape mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    };

    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list, CPU side
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.next_index();
        self.vertices.push(Vertex::new(position, normal));
        index
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// One subdivided face of a box; `u`, `v`, `w` are axis indices
    #[allow(clippy::too_many_arguments)]
    fn push_plane(
        &mut self,
        (u, v, w): (usize, usize, usize),
        (udir, vdir): (f32, f32),
        width: f32,
        height: f32,
        depth: f32,
        grid_x: u32,
        grid_y: u32,
    ) {
        let start = self.next_index();
        let segment_width = width / grid_x as f32;
        let segment_height = height / grid_y as f32;
        let depth_half = depth / 2.0;

        let mut normal = Vec3::ZERO;
        normal[w] = if depth > 0.0 { 1.0 } else { -1.0 };

        for iy in 0..=grid_y {
            let y = iy as f32 * segment_height - height / 2.0;
            for ix in 0..=grid_x {
                let x = ix as f32 * segment_width - width / 2.0;
                let mut position = Vec3::ZERO;
                position[u] = x * udir;
                position[v] = y * vdir;
                position[w] = depth_half;
                self.push(position, normal);
            }
        }

        let row = grid_x + 1;
        for iy in 0..grid_y {
            for ix in 0..grid_x {
                let a = start + ix + row * iy;
                let b = start + ix + row * (iy + 1);
                let c = start + (ix + 1) + row * (iy + 1);
                let d = start + (ix + 1) + row * iy;
                self.triangle(a, b, d);
                self.triangle(b, c, d);
            }
        }
    }
}

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

pub fn box_geometry(params: &BoxParams) -> Geometry {
    let ws = params.width_segments.max(1);
    let hs = params.height_segments.max(1);
    let ds = params.depth_segments.max(1);
    let (w, h, d) = (params.width, params.height, params.depth);

    let mut geometry = Geometry::default();
    geometry.push_plane((Z, Y, X), (-1.0, -1.0), d, h, w, ds, hs);
    geometry.push_plane((Z, Y, X), (1.0, -1.0), d, h, -w, ds, hs);
    geometry.push_plane((X, Z, Y), (1.0, 1.0), w, d, h, ws, ds);
    geometry.push_plane((X, Z, Y), (1.0, -1.0), w, d, -h, ws, ds);
    geometry.push_plane((X, Y, Z), (1.0, -1.0), w, h, d, ws, hs);
    geometry.push_plane((X, Y, Z), (-1.0, -1.0), w, h, -d, ws, hs);
    geometry
}

pub fn sphere_geometry(params: &SphereParams) -> Geometry {
    let width_segments = params.width_segments.max(3);
    let height_segments = params.height_segments.max(2);
    let theta_end = (params.theta_start + params.theta_length).min(PI);

    let mut geometry = Geometry::default();
    let mut grid = Vec::with_capacity(height_segments as usize + 1);

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = params.theta_start + v * params.theta_length;
        let row = (0..=width_segments)
            .map(|ix| {
                let u = ix as f32 / width_segments as f32;
                let phi = params.phi_start + u * params.phi_length;
                let position = Vec3::new(
                    -params.radius * phi.cos() * theta.sin(),
                    params.radius * theta.cos(),
                    params.radius * phi.sin() * theta.sin(),
                );
                geometry.push(position, position.normalize_or_zero())
            })
            .collect::<Vec<_>>();
        grid.push(row);
    }

    for iy in 0..height_segments as usize {
        for ix in 0..width_segments as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];

            // Rows touching a closed pole collapse to a point
            if iy != 0 || params.theta_start > 0.0 {
                geometry.triangle(a, b, d);
            }
            if iy != height_segments as usize - 1 || theta_end < PI {
                geometry.triangle(b, c, d);
            }
        }
    }

    geometry
}

pub fn cylinder_geometry(params: &CylinderParams) -> Geometry {
    let radial = params.radial_segments.max(1);
    let height_segments = params.height_segments.max(1);
    let half_height = params.height / 2.0;
    let slope = if params.height != 0.0 {
        (params.radius_bottom - params.radius_top) / params.height
    } else {
        0.0
    };

    let mut geometry = Geometry::default();
    let mut rows = Vec::with_capacity(height_segments as usize + 1);

    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let radius = v * (params.radius_bottom - params.radius_top) + params.radius_top;
        let row = (0..=radial)
            .map(|x| {
                let u = x as f32 / radial as f32;
                let (sin, cos) = (u * params.theta_length + params.theta_start).sin_cos();
                let position = Vec3::new(radius * sin, -v * params.height + half_height, radius * cos);
                let normal = Vec3::new(sin, slope, cos).normalize_or_zero();
                geometry.push(position, normal)
            })
            .collect::<Vec<_>>();
        rows.push(row);
    }

    for x in 0..radial as usize {
        for y in 0..height_segments as usize {
            let a = rows[y][x];
            let b = rows[y + 1][x];
            let c = rows[y + 1][x + 1];
            let d = rows[y][x + 1];
            geometry.triangle(a, b, d);
            geometry.triangle(b, c, d);
        }
    }

    if !params.open_ended {
        if params.radius_top > 0.0 {
            push_cap(&mut geometry, params, true);
        }
        if params.radius_bottom > 0.0 {
            push_cap(&mut geometry, params, false);
        }
    }

    geometry
}

fn push_cap(geometry: &mut Geometry, params: &CylinderParams, top: bool) {
    let radial = params.radial_segments.max(1);
    let sign = if top { 1.0 } else { -1.0 };
    let radius = if top { params.radius_top } else { params.radius_bottom };
    let y = params.height / 2.0 * sign;
    let normal = Vec3::new(0.0, sign, 0.0);

    // One center vertex per segment keeps the fan's vertices independent
    let center_start = geometry.next_index();
    for _ in 0..radial {
        geometry.push(Vec3::new(0.0, y, 0.0), normal);
    }

    let rim_start = geometry.next_index();
    for x in 0..=radial {
        let u = x as f32 / radial as f32;
        let (sin, cos) = (u * params.theta_length + params.theta_start).sin_cos();
        geometry.push(Vec3::new(radius * sin, y, radius * cos), normal);
    }

    for x in 0..radial {
        let center = center_start + x;
        let rim = rim_start + x;
        if top {
            geometry.triangle(rim, rim + 1, center);
        } else {
            geometry.triangle(rim + 1, rim, center);
        }
    }
}

pub fn torus_geometry(params: &TorusParams) -> Geometry {
    let radial = params.radial_segments.max(2);
    let tubular = params.tubular_segments.max(1);

    let mut geometry = Geometry::default();

    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * params.arc;
            let ring = params.radius + params.tube * v.cos();
            let position = Vec3::new(ring * u.cos(), ring * u.sin(), params.tube * v.sin());
            let center = Vec3::new(params.radius * u.cos(), params.radius * u.sin(), 0.0);
            geometry.push(position, (position - center).normalize_or_zero());
        }
    }

    let stride = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            geometry.triangle(a, b, d);
            geometry.triangle(b, c, d);
        }
    }

    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_box_counts() {
        let geometry = box_geometry(&BoxParams::default());
        assert_eq!(geometry.vertices.len(), 24);
        assert_eq!(geometry.triangle_count(), 12);
    }

    #[test]
    fn test_box_faces_point_outward() {
        let geometry = box_geometry(&BoxParams::default());
        for vertex in &geometry.vertices {
            let position = Vec3::from_array(vertex.position);
            let normal = Vec3::from_array(vertex.normal);
            assert!(position.dot(normal) > 0.0, "{position:?} vs {normal:?}");
        }
    }

    #[test]
    fn test_closed_sphere_skips_pole_triangles() {
        let params = SphereParams {
            width_segments: 8,
            height_segments: 4,
            ..SphereParams::default()
        };
        let geometry = sphere_geometry(&params);
        assert_eq!(geometry.vertices.len(), 9 * 5);
        // 4 rows x 8 quads x 2, minus one triangle per quad in each pole row
        assert_eq!(geometry.triangle_count(), 4 * 8 * 2 - 2 * 8);
    }

    #[test]
    fn test_sphere_segments_clamped() {
        let params = SphereParams {
            width_segments: 0,
            height_segments: 0,
            ..SphereParams::default()
        };
        let geometry = sphere_geometry(&params);
        assert_eq!(geometry.vertices.len(), 4 * 3);
    }

    #[test]
    fn test_cone_has_no_top_cap() {
        let cone = cylinder_geometry(&CylinderParams {
            radius_top: 0.0,
            radial_segments: 8,
            ..CylinderParams::default()
        });
        let cylinder = cylinder_geometry(&CylinderParams {
            radial_segments: 8,
            ..CylinderParams::default()
        });
        assert_eq!(cylinder.triangle_count() - cone.triangle_count(), 8);
    }

    #[test]
    fn test_open_cylinder_has_only_sides() {
        let geometry = cylinder_geometry(&CylinderParams {
            radial_segments: 6,
            height_segments: 2,
            open_ended: true,
            ..CylinderParams::default()
        });
        assert_eq!(geometry.vertices.len(), 7 * 3);
        assert_eq!(geometry.triangle_count(), 6 * 2 * 2);
    }

    #[test]
    fn test_torus_vertices_on_tube_surface() {
        let params = TorusParams::default();
        let geometry = torus_geometry(&params);
        for vertex in &geometry.vertices {
            let p = Vec3::from_array(vertex.position);
            let ring = (p.x * p.x + p.y * p.y).sqrt() - params.radius;
            let distance = (ring * ring + p.z * p.z).sqrt();
            assert!((distance - params.tube).abs() < 1e-3);
        }
    }
}
