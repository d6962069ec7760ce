use crate::config::{CYLINDER_SECTORS, SPHERE_COLOR, SPHERE_SUBDIVISIONS};
use crate::objects::Point;
use crate::objects::figure::FigureKind;
use crate::objects::subdivision;
use itertools::Itertools;
use nalgebra::Vector3;
use std::f32::consts::PI;

/// Vertex of a figure: position plus an RGB color with channels in `0..=1`.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Point,
    pub color: [f32; 3],
}

impl Vertex {
    fn new(x: f32, y: f32, z: f32, color: [f32; 3]) -> Self {
        Self {
            position: Point::new(x, y, z),
            color,
        }
    }
}

/// Indexed triangle mesh. Built once per figure and immutable afterwards,
/// so the per-frame pipeline only reads it.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    normals: Vec<Vector3<f32>>,
    indices: Vec<u32>,
}

impl Mesh {
    fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        let normals = compute_normals(&vertices, &indices);
        Self {
            vertices,
            normals,
            indices,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Per-vertex unit normals, same order as [`Self::vertices`].
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Walks the flat index list as `(a, b, c)` vertex index triples.
    pub fn triangles(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.indices.iter().map(|&i| i as usize).tuples()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Builds the mesh for a figure kind with the configured defaults.
    pub fn for_kind(kind: FigureKind) -> Self {
        match kind {
            FigureKind::Cube => Self::cube(),
            FigureKind::Pyramid => Self::pyramid(),
            FigureKind::Cylinder => Self::cylinder(CYLINDER_SECTORS),
            FigureKind::Conus => Self::conus(),
            FigureKind::Sphere => Self::sphere(SPHERE_SUBDIVISIONS),
        }
    }

    /// Unit cube centered at the origin, red front face and white back face.
    pub fn cube() -> Self {
        const FRONT: [f32; 3] = [1.0, 0.0, 0.0];
        const BACK: [f32; 3] = [1.0, 1.0, 1.0];

        let vertices = vec![
            Vertex::new(0.5, 0.5, 0.5, FRONT),
            Vertex::new(-0.5, 0.5, 0.5, FRONT),
            Vertex::new(-0.5, -0.5, 0.5, FRONT),
            Vertex::new(0.5, -0.5, 0.5, FRONT),
            Vertex::new(0.5, -0.5, -0.5, BACK),
            Vertex::new(0.5, 0.5, -0.5, BACK),
            Vertex::new(-0.5, 0.5, -0.5, BACK),
            Vertex::new(-0.5, -0.5, -0.5, BACK),
        ];
        let indices = vec![
            0, 1, 2, 0, 2, 3, // front
            0, 3, 4, 0, 4, 5, // right
            0, 5, 6, 0, 6, 1, // top
            1, 6, 7, 1, 7, 2, // left
            7, 4, 3, 7, 3, 2, // bottom
            4, 7, 6, 4, 6, 5, // back
        ];
        Self::new(vertices, indices)
    }

    /// Square pyramid with a distinct color in every corner.
    pub fn pyramid() -> Self {
        let vertices = vec![
            Vertex::new(0.0, 0.5, 0.0, [1.0, 1.0, 1.0]),
            Vertex::new(-0.5, -0.5, 0.5, [1.0, 0.0, 1.0]),
            Vertex::new(0.5, -0.5, 0.5, [1.0, 0.0, 0.0]),
            Vertex::new(0.5, -0.5, -0.5, [1.0, 1.0, 0.0]),
            Vertex::new(-0.5, -0.5, -0.5, [0.0, 1.0, 0.0]),
        ];
        let indices = vec![
            0, 1, 2, // front
            0, 2, 3, // right
            0, 1, 4, // left
            0, 3, 4, // back
            1, 2, 4, 2, 3, 4, // base
        ];
        Self::new(vertices, indices)
    }

    /// Parametric cylinder with `sectors` angular steps around the axis.
    ///
    /// A top/bottom vertex pair is emitted at every second step, so the ring
    /// holds exactly `sectors` vertices and the cap centers land at indices
    /// `sectors` and `sectors + 1`. The element buffer used to store byte
    /// indices, which capped the mesh at 255 vertices; with `u32` indices any
    /// even `sectors >= 4` works, and the default still fits the old limit.
    pub fn cylinder(sectors: u32) -> Self {
        assert!(
            sectors >= 4 && sectors % 2 == 0,
            "sectors must be even and at least 4"
        );

        const TOP: [f32; 3] = [1.0, 0.0, 1.0];
        const BOTTOM: [f32; 3] = [1.0, 1.0, 0.0];

        let step = 2.0 * PI / sectors as f32;
        let mut vertices = Vec::with_capacity(sectors as usize + 2);
        let mut indices = Vec::with_capacity(6 * sectors as usize);

        for i in (0..sectors).step_by(2) {
            let angle = i as f32 * step;
            vertices.push(Vertex::new(angle.cos() / 2.0, 0.5, angle.sin() / 2.0, TOP));
            vertices.push(Vertex::new(
                angle.cos() / 2.0,
                -0.5,
                angle.sin() / 2.0,
                BOTTOM,
            ));

            // The last pair wraps around to the start and is closed below.
            if i + 4 <= sectors {
                indices.extend_from_slice(&[i, i + 1, i + 2, i + 1, i + 3, i + 2]);
                indices.extend_from_slice(&[sectors, i, i + 2]);
                indices.extend_from_slice(&[sectors + 1, i + 1, i + 3]);
            }
        }

        vertices.push(Vertex::new(0.0, 0.5, 0.0, TOP));
        vertices.push(Vertex::new(0.0, -0.5, 0.0, BOTTOM));

        indices.extend_from_slice(&[sectors - 2, sectors - 1, 0, sectors - 1, 1, 0]);
        indices.extend_from_slice(&[sectors, sectors - 2, 0]);
        indices.extend_from_slice(&[sectors + 1, sectors - 1, 1]);

        Self::new(vertices, indices)
    }

    /// Cone: apex, four rim vertices a quarter turn apart, base center.
    /// Every side and base triangle fans out from its own center vertex.
    pub fn conus() -> Self {
        const APEX: [f32; 3] = [1.0, 0.0, 1.0];
        const BASE: [f32; 3] = [1.0, 1.0, 0.0];
        const RIM: u32 = 4;

        let step = 2.0 * PI / RIM as f32;
        let mut vertices = vec![Vertex::new(0.0, 0.5, 0.0, APEX)];
        for i in 0..RIM {
            let angle = i as f32 * step;
            vertices.push(Vertex::new(
                angle.cos() / 2.0,
                -0.5,
                angle.sin() / 2.0,
                BASE,
            ));
        }
        vertices.push(Vertex::new(0.0, -0.5, 0.0, BASE));

        let center = RIM + 1;
        let mut indices = Vec::with_capacity(6 * RIM as usize);
        for i in 1..=RIM {
            let next = if i == RIM { 1 } else { i + 1 };
            indices.extend_from_slice(&[0, i, next]);
            indices.extend_from_slice(&[center, i, next]);
        }
        Self::new(vertices, indices)
    }

    /// Sphere approximation built by subdividing a tetrahedron.
    ///
    /// The subdivision emits a triangle soup with one flat normal per face,
    /// so the index list is sequential and the normals are taken as produced
    /// instead of being averaged. That is what keeps the look faceted.
    pub fn sphere(subdivisions: u32) -> Self {
        let soup = subdivision::tetrahedron(subdivisions);
        let vertices: Vec<Vertex> = soup
            .points
            .iter()
            .map(|p| Vertex {
                position: *p,
                color: SPHERE_COLOR,
            })
            .collect();
        let indices = (0..vertices.len() as u32).collect();
        Self {
            vertices,
            normals: soup.normals,
            indices,
        }
    }
}

/// Area-weighted vertex normals from the index list.
///
/// The index data winds some faces inward, so each face normal is oriented
/// away from the mesh center before it is accumulated. All the figures here
/// are convex and centered near the origin, which makes that test exact.
fn compute_normals(vertices: &[Vertex], indices: &[u32]) -> Vec<Vector3<f32>> {
    let centroid = vertices
        .iter()
        .fold(Vector3::zeros(), |acc, v| acc + v.position.coords)
        / vertices.len().max(1) as f32;

    let mut normals = vec![Vector3::zeros(); vertices.len()];
    for (a, b, c) in indices.iter().map(|&i| i as usize).tuples() {
        let mut face = (vertices[b].position - vertices[a].position)
            .cross(&(vertices[c].position - vertices[a].position));
        let face_center = (vertices[a].position.coords
            + vertices[b].position.coords
            + vertices[c].position.coords)
            / 3.0;
        if face.dot(&(face_center - centroid)) < 0.0 {
            face = -face;
        }
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals
        .into_iter()
        .map(|n| n.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_indices_valid(mesh: &Mesh) {
        assert_eq!(mesh.indices().len() % 3, 0);
        for &index in mesh.indices() {
            assert!((index as usize) < mesh.vertices().len());
        }
    }

    fn assert_normals_unit_and_outward(mesh: &Mesh) {
        let centroid = mesh
            .vertices()
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.position.coords)
            / mesh.vertices().len() as f32;
        for (vertex, normal) in mesh.vertices().iter().zip(mesh.normals()) {
            assert!((normal.norm() - 1.0).abs() < 1e-4);
            assert!(normal.dot(&(vertex.position.coords - centroid)) > 0.0);
        }
    }

    #[test]
    fn cube_has_twelve_triangles() {
        let mesh = Mesh::cube();
        assert_eq!(mesh.vertices().len(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert_indices_valid(&mesh);
        assert_normals_unit_and_outward(&mesh);
    }

    #[test]
    fn pyramid_has_six_triangles() {
        let mesh = Mesh::pyramid();
        assert_eq!(mesh.vertices().len(), 5);
        assert_eq!(mesh.triangle_count(), 6);
        assert_indices_valid(&mesh);
        assert_normals_unit_and_outward(&mesh);
    }

    #[test]
    fn default_cylinder_has_expected_counts() {
        let mesh = Mesh::cylinder(100);
        assert_eq!(mesh.vertices().len(), 102);
        assert_eq!(mesh.triangle_count(), 200);
        assert_indices_valid(&mesh);
        assert_normals_unit_and_outward(&mesh);
    }

    #[test]
    fn small_cylinder_index_layout() {
        let mesh = Mesh::cylinder(6);
        assert_eq!(mesh.vertices().len(), 8);
        let expected: Vec<u32> = vec![
            0, 1, 2, 1, 3, 2, 6, 0, 2, 7, 1, 3, // first sector pair
            2, 3, 4, 3, 5, 4, 6, 2, 4, 7, 3, 5, // second sector pair
            4, 5, 0, 5, 1, 0, 6, 4, 0, 7, 5, 1, // closing wrap
        ];
        assert_eq!(mesh.indices(), expected.as_slice());
    }

    #[test]
    fn cylinder_ring_alternates_top_and_bottom() {
        let mesh = Mesh::cylinder(8);
        for pair in mesh.vertices()[..8].chunks(2) {
            assert_eq!(pair[0].position.y, 0.5);
            assert_eq!(pair[1].position.y, -0.5);
            assert_eq!(pair[0].position.x, pair[1].position.x);
            assert_eq!(pair[0].position.z, pair[1].position.z);
        }
        let top_center = mesh.vertices()[8].position;
        let bottom_center = mesh.vertices()[9].position;
        assert_eq!(top_center, Point::new(0.0, 0.5, 0.0));
        assert_eq!(bottom_center, Point::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn large_cylinder_outgrows_byte_indices() {
        // 302 vertices would not fit the historical u8 element buffer.
        let mesh = Mesh::cylinder(300);
        assert_eq!(mesh.vertices().len(), 302);
        assert_eq!(mesh.triangle_count(), 600);
        assert!(mesh.indices().iter().any(|&i| i > u8::MAX as u32));
        assert_indices_valid(&mesh);
        assert_normals_unit_and_outward(&mesh);
    }

    #[test]
    #[should_panic]
    fn odd_cylinder_sector_count_is_rejected() {
        Mesh::cylinder(7);
    }

    #[test]
    fn conus_has_eight_triangles() {
        let mesh = Mesh::conus();
        assert_eq!(mesh.vertices().len(), 6);
        assert_eq!(mesh.triangle_count(), 8);
        assert_indices_valid(&mesh);
        assert_normals_unit_and_outward(&mesh);

        // Side and base triangles reference the rim, never each other's center.
        for (a, b, c) in mesh.triangles() {
            let has_apex = a == 0 || b == 0 || c == 0;
            let has_base_center = a == 5 || b == 5 || c == 5;
            assert!(has_apex != has_base_center);
        }
    }

    #[test]
    fn sphere_triangle_count_grows_four_times_per_level() {
        for level in 0..=SPHERE_SUBDIVISIONS {
            let mesh = Mesh::sphere(level);
            assert_eq!(mesh.triangle_count(), 4usize.pow(level + 1));
            assert_eq!(mesh.vertices().len(), mesh.indices().len());
            assert_indices_valid(&mesh);
        }
    }

    #[test]
    fn sphere_points_stay_near_unit_radius() {
        let mesh = Mesh::sphere(3);
        for vertex in mesh.vertices() {
            let radius = vertex.position.coords.norm();
            assert!((0.95..=1.05).contains(&radius), "radius {radius}");
        }
    }

    #[test]
    fn for_kind_builds_every_figure() {
        for kind in FigureKind::ALL {
            let mesh = Mesh::for_kind(kind);
            assert!(mesh.triangle_count() > 0);
            assert_indices_valid(&mesh);
        }
    }
}
