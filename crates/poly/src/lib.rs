use polymesh_mesh::{Hole, Polygon, Segment, Vector2};
use std::io::BufRead;
use std::path::Path;

// Category markers written by the tracing step at the start of each polygon
// record. The mesher skips these header lines; in the pillar file the `P`
// marker also delimits hole boundaries.
const BORDER_MARKER: char = 'M';
const PILLAR_MARKER: char = 'P';

/// Parses a vertex line of exactly two whitespace-separated numbers.
fn parse_vertex(line: &str) -> Option<Vector2> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Vector2::new(x, y))
}

fn is_header(line: &str) -> bool {
    line.starts_with(BORDER_MARKER) || line.starts_with(PILLAR_MARKER)
}

fn read_border_records<R: BufRead>(reader: R) -> std::io::Result<Polygon> {
    let mut points = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || is_header(line) {
            continue;
        }
        match parse_vertex(line) {
            Some(point) => points.push(point),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("border file: skipped {skipped} unparseable vertex lines");
    }
    Ok(Polygon::new(points))
}

fn finish_hole(points: &mut Vec<Vector2>, segments: &mut Vec<Segment>, holes: &mut Vec<Hole>) {
    if points.is_empty() {
        return;
    }
    // Close the loop back to the first vertex.
    segments.push(Segment {
        a: points.len() as u32 - 1,
        b: 0,
    });
    holes.push(Hole {
        outline: Polygon::new(std::mem::take(points)),
        segments: std::mem::take(segments),
    });
}

fn read_pillar_records<R: BufRead>(reader: R) -> std::io::Result<Vec<Hole>> {
    let mut holes = Vec::new();
    let mut points: Vec<Vector2> = Vec::new();
    let mut segments: Vec<Segment> = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(PILLAR_MARKER) {
            finish_hole(&mut points, &mut segments, &mut holes);
            continue;
        }
        match parse_vertex(line) {
            Some(point) => {
                points.push(point);
                if points.len() > 1 {
                    segments.push(Segment {
                        a: points.len() as u32 - 2,
                        b: points.len() as u32 - 1,
                    });
                }
            }
            None => skipped += 1,
        }
    }
    finish_hole(&mut points, &mut segments, &mut holes);

    if skipped > 0 {
        log::warn!("pillar file: skipped {skipped} unparseable vertex lines");
    }
    Ok(holes)
}

/// Reads the border vertex file into a single polygon.
///
/// Header lines and lines that do not parse as exactly two numbers are
/// skipped; an empty polygon is a valid (if unmeshable) result.
pub fn read_border<P: AsRef<Path>>(p: P) -> std::io::Result<Polygon> {
    let f = std::fs::File::open(p)?;
    read_border_records(std::io::BufReader::new(f))
}

pub fn parse_border(data: &[u8]) -> std::io::Result<Polygon> {
    read_border_records(std::io::Cursor::new(data))
}

/// Reads the pillar vertex file into one hole per `P` header.
///
/// Every header after the first finalizes the previous hole, appending its
/// closing segment; a trailing hole is finalized at end of input.
pub fn read_pillars<P: AsRef<Path>>(p: P) -> std::io::Result<Vec<Hole>> {
    let f = std::fs::File::open(p)?;
    read_pillar_records(std::io::BufReader::new(f))
}

pub fn parse_pillars(data: &[u8]) -> std::io::Result<Vec<Hole>> {
    read_pillar_records(std::io::Cursor::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_skips_headers_and_malformed_lines() {
        let data = b"M1\n0.0 0.0\n10.0 0.0\nnot a vertex\n10.0 10.0\n\n0.0 10.0\n";
        let border = parse_border(data).unwrap();
        assert_eq!(border.len(), 4);
        assert_eq!(border.points()[0], Vector2::new(0.0, 0.0));
        assert_eq!(border.points()[3], Vector2::new(0.0, 10.0));
    }

    #[test]
    fn border_lines_need_exactly_two_numbers() {
        let data = b"1.0 2.0 3.0\n4.0\n5.0 6.0\n";
        let border = parse_border(data).unwrap();
        assert_eq!(border.points(), &[Vector2::new(5.0, 6.0)]);
    }

    #[test]
    fn border_with_no_vertices_is_not_an_error() {
        let border = parse_border(b"M1\n").unwrap();
        assert!(border.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(read_border("no-such-file.txt").is_err());
        assert!(read_pillars("no-such-file.txt").is_err());
    }

    #[test]
    fn pillars_split_on_headers_and_close_each_loop() {
        let data = b"P1\n0.0 0.0\n4.0 0.0\n4.0 4.0\nP2\n8.0 8.0\n9.0 8.0\n9.0 9.0\n8.0 9.0\n";
        let holes = parse_pillars(data).unwrap();
        assert_eq!(holes.len(), 2);

        assert_eq!(holes[0].outline.len(), 3);
        assert_eq!(
            holes[0].segments,
            vec![
                Segment { a: 0, b: 1 },
                Segment { a: 1, b: 2 },
                Segment { a: 2, b: 0 },
            ]
        );

        assert_eq!(holes[1].outline.len(), 4);
        assert_eq!(holes[1].segments.len(), 4);
        assert_eq!(holes[1].segments.last(), Some(&Segment { a: 3, b: 0 }));
    }

    #[test]
    fn trailing_hole_is_finalized_at_end_of_input() {
        let data = b"P1\n0.0 0.0\n1.0 0.0\n1.0 1.0\n";
        let holes = parse_pillars(data).unwrap();
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].segments.last(), Some(&Segment { a: 2, b: 0 }));
    }

    #[test]
    fn pillar_headers_without_vertices_yield_no_holes() {
        assert!(parse_pillars(b"P1\nP2\n").unwrap().is_empty());
    }
}
