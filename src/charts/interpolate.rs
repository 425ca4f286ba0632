//! Curve interpolation shared by the interactive and static backends.

/// Tension used for series drawn with `Interpolation::Cardinal`.
pub const CARDINAL_TENSION: f64 = 0.0;

/// Samples emitted per segment between two input points.
pub const SAMPLES_PER_SEGMENT: usize = 12;

/// Sample a cardinal spline through `points`.
///
/// Tension 0 gives a Catmull-Rom curve, tension 1 straight segments.
/// Every input point appears unchanged in the output.
pub fn cardinal_spline(
    points: &[[f64; 2]],
    tension: f64,
    samples_per_segment: usize,
) -> Vec<[f64; 2]> {
    let n = points.len();
    if n < 3 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let scale = (1.0 - tension) / 2.0;
    let tangent = |i: usize| -> [f64; 2] {
        let prev = points[i.saturating_sub(1)];
        let next = points[(i + 1).min(n - 1)];
        [scale * (next[0] - prev[0]), scale * (next[1] - prev[1])]
    };

    let mut out = Vec::with_capacity((n - 1) * samples_per_segment + 1);
    for i in 0..n - 1 {
        let (p0, p1) = (points[i], points[i + 1]);
        let (m0, m1) = (tangent(i), tangent(i + 1));

        for k in 0..samples_per_segment {
            let s = k as f64 / samples_per_segment as f64;
            let s2 = s * s;
            let s3 = s2 * s;
            let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
            let h10 = s3 - 2.0 * s2 + s;
            let h01 = -2.0 * s3 + 3.0 * s2;
            let h11 = s3 - s2;

            out.push([
                h00 * p0[0] + h10 * m0[0] + h01 * p1[0] + h11 * m1[0],
                h00 * p0[1] + h10 * m0[1] + h01 * p1[1] + h11 * m1[1],
            ]);
        }
    }
    out.push(points[n - 1]);
    out
}
