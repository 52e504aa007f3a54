//! Shape generation for 2D primitives

use glam::Vec2;

use super::scene::FilledRect;
use super::vertex::Vertex;

/// Generate two triangles covering a filled rectangle
pub fn rect(r: &FilledRect) -> [Vertex; 6] {
    let min = r.pos;
    let max = r.pos + r.size;
    let corner = |x: f32, y: f32| Vertex::new(Vec2::new(x, y), r.color);

    [
        corner(min.x, min.y),
        corner(max.x, min.y),
        corner(min.x, max.y),
        corner(min.x, max.y),
        corner(max.x, min.y),
        corner(max.x, max.y),
    ]
}

/// Flatten a draw list into a triangle list, skipping empty rectangles
pub fn rects(list: &[FilledRect]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.len() * 6);
    for r in list {
        if r.size.x <= 0.0 || r.size.y <= 0.0 {
            continue;
        }
        vertices.extend_from_slice(&rect(r));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let r = FilledRect::new(10.0, 20.0, 30.0, 40.0, [1.0; 4]);
        let v = rect(&r);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_empty_rects_skipped() {
        let list = [
            FilledRect::new(0.0, 0.0, 60.0, 0.0, [1.0; 4]),
            FilledRect::new(0.0, 0.0, 60.0, 10.0, [1.0; 4]),
        ];
        assert_eq!(rects(&list).len(), 6);
    }
}
