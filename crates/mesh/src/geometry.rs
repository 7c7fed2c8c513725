pub type Vector2 = cgmath::Vector2<f64>;

/// A single triangle by its corner coordinates.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Triangle {
    pub a: Vector2,
    pub b: Vector2,
    pub c: Vector2,
}

impl Triangle {
    /// The arithmetic mean of the three corners.
    pub fn centroid(&self) -> Vector2 {
        (self.a + self.b + self.c) / 3.0
    }

    pub fn area(&self) -> f64 {
        0.5 * (self.b - self.a).perp_dot(self.c - self.a).abs()
    }
}
