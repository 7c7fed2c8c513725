use polymesh_mesh::{Hole, Triangle};

/// Assigns a triangle to the first hole whose interior contains its
/// centroid.
///
/// Returns `None` for triangles in the open (mined) area. Holes are tested
/// in reading order; in well-formed input a centroid lies inside at most one
/// pillar, and the first match wins otherwise.
pub fn classify_triangle(triangle: &Triangle, holes: &[Hole]) -> Option<usize> {
    let centroid = triangle.centroid();
    holes.iter().position(|hole| hole.outline.contains(centroid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymesh_mesh::{Polygon, Vector2};

    fn square_hole(x0: f64, y0: f64, size: f64) -> Hole {
        Hole {
            outline: Polygon::new(vec![
                Vector2::new(x0, y0),
                Vector2::new(x0 + size, y0),
                Vector2::new(x0 + size, y0 + size),
                Vector2::new(x0, y0 + size),
            ]),
            segments: Vec::new(),
        }
    }

    fn triangle_with_centroid(x: f64, y: f64) -> Triangle {
        Triangle {
            a: Vector2::new(x - 1.0, y - 1.0),
            b: Vector2::new(x + 2.0, y - 1.0),
            c: Vector2::new(x - 1.0, y + 2.0),
        }
    }

    #[test]
    fn centroid_inside_a_hole_takes_its_index() {
        let holes = [square_hole(0.0, 0.0, 10.0)];
        let triangle = triangle_with_centroid(5.0, 5.0);
        assert_eq!(classify_triangle(&triangle, &holes), Some(0));
    }

    #[test]
    fn centroid_outside_every_hole_is_mined() {
        let holes = [square_hole(0.0, 0.0, 10.0)];
        let triangle = triangle_with_centroid(20.0, 20.0);
        assert_eq!(classify_triangle(&triangle, &holes), None);
    }

    #[test]
    fn no_holes_means_everything_is_mined() {
        let triangle = triangle_with_centroid(5.0, 5.0);
        assert_eq!(classify_triangle(&triangle, &[]), None);
    }

    #[test]
    fn first_matching_hole_wins() {
        let holes = [square_hole(0.0, 0.0, 10.0), square_hole(0.0, 0.0, 10.0)];
        let triangle = triangle_with_centroid(5.0, 5.0);
        assert_eq!(classify_triangle(&triangle, &holes), Some(0));
    }

    #[test]
    fn holes_are_tested_in_reading_order() {
        let holes = [square_hole(0.0, 0.0, 4.0), square_hole(10.0, 10.0, 4.0)];
        let triangle = triangle_with_centroid(12.0, 12.0);
        assert_eq!(classify_triangle(&triangle, &holes), Some(1));
    }
}
