use crate::objects::Point;
use crate::utils::math::lerp;
use nalgebra::Vector3;

/// Triangle soup produced by subdivision: three consecutive points per face
/// and one flat normal repeated for each of them.
pub struct FlatTriangles {
    pub points: Vec<Point>,
    pub normals: Vec<Vector3<f32>>,
}

impl FlatTriangles {
    fn with_capacity(triangles: usize) -> Self {
        Self {
            points: Vec::with_capacity(3 * triangles),
            normals: Vec::with_capacity(3 * triangles),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.points.len() / 3
    }

    fn push_triangle(&mut self, a: Point, b: Point, c: Point) {
        let normal = face_normal(&a, &b, &c);
        self.points.extend([a, b, c]);
        self.normals.extend([normal; 3]);
    }
}

/// Flat normal of the face `(a, b, c)`, pointing out of the sphere for the
/// vertex orders produced by [`tetrahedron`].
pub fn face_normal(a: &Point, b: &Point, c: &Point) -> Vector3<f32> {
    (c - a).cross(&(b - a)).normalize()
}

/// Midpoint of an edge pushed onto the unit sphere.
fn midpoint(a: &Point, b: &Point) -> Point {
    Point::from(lerp(a.coords, b.coords, 0.5).normalize())
}

/// Splits `(a, b, c)` into four children `count` levels deep. Midpoints are
/// renormalized on every level, so the faces creep toward the unit sphere
/// while the source corner vertices stay where they are.
pub fn divide_triangle(a: Point, b: Point, c: Point, count: u32, out: &mut FlatTriangles) {
    if count > 0 {
        let ab = midpoint(&a, &b);
        let ac = midpoint(&a, &c);
        let bc = midpoint(&b, &c);

        divide_triangle(a, ab, ac, count - 1, out);
        divide_triangle(ab, b, bc, count - 1, out);
        divide_triangle(bc, c, ac, count - 1, out);
        divide_triangle(ab, bc, ac, count - 1, out);
    } else {
        out.push_triangle(a, b, c);
    }
}

/// Subdivides the four faces of a near-regular tetrahedron `count` levels
/// deep. The output holds `4^(count + 1)` triangles.
pub fn tetrahedron(count: u32) -> FlatTriangles {
    let a = Point::new(0.0, 0.0, -1.0);
    let b = Point::new(0.0, 0.94, 0.33);
    let c = Point::new(-0.81, -0.47, 0.33);
    let d = Point::new(0.87, -0.4, 0.33);

    let mut out = FlatTriangles::with_capacity(4usize.pow(count + 1));
    divide_triangle(a, b, c, count, &mut out);
    divide_triangle(d, c, b, count, &mut out);
    divide_triangle(a, d, b, count, &mut out);
    divide_triangle(a, c, d, count, &mut out);
    out
}
