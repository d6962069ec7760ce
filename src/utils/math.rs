use std::ops::{Add, Mul};

pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Mul<f32, Output = T> + Add<T, Output = T> + Copy,
{
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0f32, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0f32, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0f32, 6.0, 0.5), 4.0);
    }

    #[test]
    fn lerp_works_on_vectors() {
        let a = Vector3::new(0.0f32, 0.0, 0.0);
        let b = Vector3::new(2.0f32, -4.0, 8.0);
        assert_eq!(lerp(a, b, 0.5), Vector3::new(1.0, -2.0, 4.0));
    }
}
