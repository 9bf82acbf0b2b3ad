use lyon::math::{point, Point};
use lyon::path::path::Builder;
use lyon::path::Path;

use crate::outline::{Outline, OutlineContour};
use crate::point::{OutlinePoint, PointType};

impl Outline {
    /// Builds a `lyon` path that can be handed to a tessellator.
    ///
    /// An open contour starts at its first point. A closed contour starts at its first on-curve point, and the points
    /// before it are processed after the last one, so every control point ends up in a curve. A closed contour made
    /// of quadratic control points only starts at the implied on-curve point between its last and first points.
    ///
    /// A single quadratic control point or a pair of cubic control points followed by an on-curve point produce a
    /// bezier segment. Runs of several quadratic control points have implied on-curve points in the middle between
    /// them. Control points at the end of a closed contour curve back to its start. Contours without points are
    /// skipped.
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder();
        for contour in self.contours() {
            add_contour(&mut builder, contour);
        }

        let path = builder.build();
        log::trace!("Built lyon path from {} contours", self.contour_count());

        path
    }
}

fn add_contour(builder: &mut Builder, contour: &OutlineContour) {
    if contour.is_empty() {
        return;
    }

    let start_index = if contour.is_closed() {
        contour
            .iter()
            .position(|p| p.point_type == PointType::OnCurve)
    } else {
        Some(0)
    };

    match start_index {
        Some(index) => add_from_point(builder, contour, index),
        None => add_control_ring(builder, contour),
    }

    builder.end(contour.is_closed());
}

fn add_from_point(builder: &mut Builder, contour: &OutlineContour, start_index: usize) {
    let (head, tail) = contour.split_at(start_index);
    let start = to_lyon(&tail[0]);

    let _ = builder.begin(start);
    let mut controls: Vec<&OutlinePoint> = Vec::with_capacity(2);
    for p in tail[1..].iter().chain(head) {
        match p.point_type {
            PointType::OnCurve => {
                add_segment(builder, &controls, to_lyon(p));
                controls.clear();
            }
            PointType::Quadratic | PointType::Cubic => controls.push(p),
        }
    }

    if !controls.is_empty() {
        if contour.is_closed() {
            add_segment(builder, &controls, start);
        } else {
            log::warn!(
                "Open contour ends with {} control points, they are connected with straight lines",
                controls.len()
            );
            add_polyline(builder, &controls);
        }
    }
}

// Closed contour without on-curve points. Not empty.
fn add_control_ring(builder: &mut Builder, contour: &OutlineContour) {
    let controls: Vec<&OutlinePoint> = contour.iter().collect();
    if controls.iter().all(|c| c.point_type == PointType::Quadratic) {
        let first = to_lyon(controls[0]);
        let start = to_lyon(controls[controls.len() - 1]).lerp(first, 0.5);
        let _ = builder.begin(start);
        add_segment(builder, &controls, start);
    } else {
        log::warn!(
            "Closed contour of {} control points has no on-curve points, they are connected with straight lines",
            controls.len()
        );
        let _ = builder.begin(to_lyon(controls[0]));
        add_polyline(builder, &controls[1..]);
    }
}

fn add_segment(builder: &mut Builder, controls: &[&OutlinePoint], to: Point) {
    match controls {
        [] => {
            let _ = builder.line_to(to);
        }
        [ctrl1, ctrl2]
            if ctrl1.point_type == PointType::Cubic && ctrl2.point_type == PointType::Cubic =>
        {
            let _ = builder.cubic_bezier_to(to_lyon(ctrl1), to_lyon(ctrl2), to);
        }
        _ if controls.iter().all(|c| c.point_type == PointType::Quadratic) => {
            for pair in controls.windows(2) {
                let ctrl = to_lyon(pair[0]);
                let implied = ctrl.lerp(to_lyon(pair[1]), 0.5);
                let _ = builder.quadratic_bezier_to(ctrl, implied);
            }

            if let Some(last) = controls.last() {
                let _ = builder.quadratic_bezier_to(to_lyon(last), to);
            }
        }
        _ => {
            log::warn!(
                "Unsupported sequence of {} control points, they are connected with straight lines",
                controls.len()
            );
            add_polyline(builder, controls);
            let _ = builder.line_to(to);
        }
    }
}

fn add_polyline(builder: &mut Builder, points: &[&OutlinePoint]) {
    for p in points {
        let _ = builder.line_to(to_lyon(p));
    }
}

fn to_lyon(p: &OutlinePoint) -> Point {
    point(p.x as f32, p.y as f32)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use lyon::path::Event;

    use super::*;

    fn on(x: i32, y: i32) -> OutlinePoint {
        OutlinePoint::new(x, y, PointType::OnCurve)
    }

    fn quad(x: i32, y: i32) -> OutlinePoint {
        OutlinePoint::new(x, y, PointType::Quadratic)
    }

    fn cubic(x: i32, y: i32) -> OutlinePoint {
        OutlinePoint::new(x, y, PointType::Cubic)
    }

    #[test]
    fn closed_polygon() {
        let outline = Outline::from(vec![OutlineContour::closed(vec![
            on(0, 0),
            on(0, 10),
            on(10, 10),
            on(10, 0),
        ])]);

        let events: Vec<_> = outline.to_lyon_path().iter().collect();
        assert_eq!(events.len(), 5);
        assert_matches!(events[0], Event::Begin { at } if at == point(0.0, 0.0));
        assert_matches!(events[3], Event::Line { to, .. } if to == point(10.0, 0.0));
        assert_matches!(events[4], Event::End { close: true, .. });
    }

    #[test]
    fn bezier_segments() {
        let outline = Outline::from(vec![
            OutlineContour::open(vec![on(0, 0), quad(5, 10), on(10, 0)]),
            OutlineContour::open(vec![on(0, 0), cubic(0, 10), cubic(10, 10), on(10, 0)]),
        ]);

        let events: Vec<_> = outline.to_lyon_path().iter().collect();
        assert_eq!(events.len(), 6);
        assert_matches!(
            events[1],
            Event::Quadratic { ctrl, to, .. } if ctrl == point(5.0, 10.0) && to == point(10.0, 0.0)
        );
        assert_matches!(events[2], Event::End { close: false, .. });
        assert_matches!(
            events[4],
            Event::Cubic { ctrl1, ctrl2, to, .. }
                if ctrl1 == point(0.0, 10.0) && ctrl2 == point(10.0, 10.0) && to == point(10.0, 0.0)
        );
    }

    #[test]
    fn implied_on_curve_points() {
        let outline = Outline::from(vec![OutlineContour::open(vec![
            on(0, 0),
            quad(0, 10),
            quad(10, 10),
            on(10, 0),
        ])]);

        let events: Vec<_> = outline.to_lyon_path().iter().collect();
        assert_matches!(
            events[1],
            Event::Quadratic { ctrl, to, .. } if ctrl == point(0.0, 10.0) && to == point(5.0, 10.0)
        );
        assert_matches!(
            events[2],
            Event::Quadratic { ctrl, to, .. } if ctrl == point(10.0, 10.0) && to == point(10.0, 0.0)
        );
    }

    #[test]
    fn trailing_controls() {
        let closed = Outline::from(vec![OutlineContour::closed(vec![
            on(0, 0),
            on(10, 0),
            quad(10, 10),
        ])]);
        let events: Vec<_> = closed.to_lyon_path().iter().collect();
        assert_matches!(
            events[2],
            Event::Quadratic { ctrl, to, .. } if ctrl == point(10.0, 10.0) && to == point(0.0, 0.0)
        );

        let open = Outline::from(vec![OutlineContour::open(vec![
            on(0, 0),
            on(10, 0),
            quad(10, 10),
        ])]);
        let events: Vec<_> = open.to_lyon_path().iter().collect();
        assert_matches!(events[2], Event::Line { to, .. } if to == point(10.0, 10.0));
    }

    #[test]
    fn closed_contour_starting_with_control_point() {
        let outline = Outline::from(vec![OutlineContour::closed(vec![
            quad(0, 10),
            on(10, 0),
            on(-10, 0),
        ])]);

        let events: Vec<_> = outline.to_lyon_path().iter().collect();
        assert_eq!(events.len(), 4);
        assert_matches!(events[0], Event::Begin { at } if at == point(10.0, 0.0));
        assert_matches!(events[1], Event::Line { to, .. } if to == point(-10.0, 0.0));
        assert_matches!(
            events[2],
            Event::Quadratic { ctrl, to, .. } if ctrl == point(0.0, 10.0) && to == point(10.0, 0.0)
        );
        assert_matches!(events[3], Event::End { close: true, .. });
    }

    #[test]
    fn closed_contour_of_quadratic_controls() {
        let outline = Outline::from(vec![OutlineContour::closed(vec![
            quad(0, 10),
            quad(10, 0),
        ])]);

        let events: Vec<_> = outline.to_lyon_path().iter().collect();
        assert_eq!(events.len(), 4);
        assert_matches!(events[0], Event::Begin { at } if at == point(5.0, 5.0));
        assert_matches!(
            events[1],
            Event::Quadratic { ctrl, to, .. } if ctrl == point(0.0, 10.0) && to == point(5.0, 5.0)
        );
        assert_matches!(
            events[2],
            Event::Quadratic { ctrl, to, .. } if ctrl == point(10.0, 0.0) && to == point(5.0, 5.0)
        );
    }

    #[test]
    fn open_contour_starts_at_first_point() {
        let outline = Outline::from(vec![OutlineContour::open(vec![
            quad(0, 10),
            on(10, 0),
        ])]);

        let events: Vec<_> = outline.to_lyon_path().iter().collect();
        assert_matches!(events[0], Event::Begin { at } if at == point(0.0, 10.0));
        assert_matches!(events[1], Event::Line { to, .. } if to == point(10.0, 0.0));
    }

    #[test]
    fn empty_contours_are_skipped() {
        let outline = Outline::from(vec![
            OutlineContour::closed(vec![]),
            OutlineContour::open(vec![on(1, 1), on(2, 2)]),
        ]);

        let events: Vec<_> = outline.to_lyon_path().iter().collect();
        assert_eq!(events.len(), 3);
        assert_matches!(events[0], Event::Begin { at } if at == point(1.0, 1.0));
    }
}
