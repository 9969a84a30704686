//! Vector-path sampler
//!
//! Turns SVG path data into a polygon by walking it at fixed arc-length
//! intervals (not fixed curve-parameter intervals), so vertex density is
//! even along curves and straight runs alike.

use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathEl, PathSeg, Point, SvgParseError};

/// Arc-length step used when props don't specify one.
pub const DEFAULT_SAMPLE_LENGTH: f64 = 15.0;

const ARCLEN_ACCURACY: f64 = 1e-4;

/// Parse `d` and sample it every `sample_length` units.
///
/// Parse errors come straight from kurbo.
pub fn sample_path(d: &str, sample_length: f64) -> Result<Vec<Point>, SvgParseError> {
    let path = BezPath::from_svg(d)?;
    Ok(sample_bez_path(&path, sample_length))
}

/// Sample an already parsed path.
///
/// The result never holds two identical consecutive points and always ends
/// on the path's true end point.
pub fn sample_bez_path(path: &BezPath, sample_length: f64) -> Vec<Point> {
    let step = if sample_length.is_finite() && sample_length > 0.0 {
        sample_length
    } else {
        DEFAULT_SAMPLE_LENGTH
    };

    let Some(start) = start_point(path) else {
        return Vec::new();
    };

    let segments: Vec<(PathSeg, f64)> = path
        .segments()
        .map(|seg| {
            let len = seg.arclen(ARCLEN_ACCURACY);
            (seg, len)
        })
        .collect();
    let total: f64 = segments.iter().map(|(_, len)| len).sum();

    let mut points = Vec::new();
    let mut walker = ArcWalker::new(&segments);
    let mut len = 0.0;
    while len < total {
        push_distinct(&mut points, walker.point_at(len).unwrap_or(start));
        len += step;
    }

    if points.is_empty() {
        points.push(start);
    }
    let end = segments.last().map(|(seg, _)| seg.end()).unwrap_or(start);
    push_distinct(&mut points, end);
    points
}

fn start_point(path: &BezPath) -> Option<Point> {
    match path.elements().first()? {
        PathEl::MoveTo(p) => Some(*p),
        _ => path.segments().next().map(|seg| seg.start()),
    }
}

fn push_distinct(points: &mut Vec<Point>, p: Point) {
    if points.last() != Some(&p) {
        points.push(p);
    }
}

/// Forward-only cursor over segments; lengths must be queried in
/// non-decreasing order.
struct ArcWalker<'a> {
    segments: &'a [(PathSeg, f64)],
    index: usize,
    consumed: f64,
}

impl<'a> ArcWalker<'a> {
    fn new(segments: &'a [(PathSeg, f64)]) -> Self {
        Self { segments, index: 0, consumed: 0.0 }
    }

    fn point_at(&mut self, len: f64) -> Option<Point> {
        while let Some((seg, seg_len)) = self.segments.get(self.index) {
            let local = len - self.consumed;
            if local <= *seg_len && *seg_len > 0.0 {
                let t = seg.inv_arclen(local.max(0.0), ARCLEN_ACCURACY);
                return Some(seg.eval(t));
            }
            if self.index + 1 == self.segments.len() {
                return Some(seg.end());
            }
            self.consumed += seg_len;
            self.index += 1;
        }
        None
    }
}
