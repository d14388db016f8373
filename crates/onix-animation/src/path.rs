//! Pure waypoint evaluation: uniform segment lookup and linear interpolation
//!
//! The duration is split evenly across segments. A looping path has one
//! extra segment closing the last point back onto the first.

use onix_map::{Path, Waypoint};

/// Where a time falls on a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPosition {
    /// Segment index in `0..path.segment_count()`
    pub index: usize,
    /// Waypoint the segment starts at
    pub from: usize,
    /// Waypoint the segment ends at (wraps to 0 on the closing segment)
    pub to: usize,
    /// Normalized [0..1] progress within the segment
    pub local_t: f32,
}

/// Map an elapsed time onto `[0, duration]`.
///
/// Looping paths wrap (negative times wrap backwards, `duration` itself maps
/// to 0); open paths clamp.
pub fn wrap_path_time(path: &Path, t: f64) -> f64 {
    if !(path.duration > 0.0) {
        return 0.0;
    }
    if path.looping {
        let wrapped = t.rem_euclid(path.duration);
        // rem_euclid can round up to the divisor itself
        if wrapped >= path.duration {
            0.0
        } else {
            wrapped
        }
    } else {
        t.clamp(0.0, path.duration)
    }
}

/// Locate the segment containing time `t`.
///
/// Returns `None` for paths that must not be interpolated: fewer than two
/// points, a non-positive duration, or a non-finite time.
pub fn locate_segment(path: &Path, t: f64) -> Option<SegmentPosition> {
    let count = path.segment_count();
    if count == 0 || !(path.duration > 0.0) || !t.is_finite() {
        return None;
    }
    let n = path.points.len();
    let t = wrap_path_time(path, t);

    if !path.looping && t >= path.duration {
        return Some(SegmentPosition {
            index: count - 1,
            from: n - 2,
            to: n - 1,
            local_t: 1.0,
        });
    }

    let segment_duration = path.duration / count as f64;
    let index = ((t / segment_duration).floor() as usize).min(count - 1);
    let local_t = ((t - index as f64 * segment_duration) / segment_duration).clamp(0.0, 1.0);

    Some(SegmentPosition {
        index,
        from: index,
        to: (index + 1) % n,
        local_t: local_t as f32,
    })
}

/// Sample a path at time `t`.
///
/// Degenerate paths never interpolate: a single point is held, and an empty
/// path holds `rest` (the model's initial pose).
pub fn sample_path(path: &Path, t: f64, rest: &Waypoint) -> Waypoint {
    let Some(segment) = locate_segment(path, t) else {
        return path.points.first().copied().unwrap_or(*rest);
    };

    let from = &path.points[segment.from];
    let to = &path.points[segment.to];

    if segment.local_t >= 1.0 {
        return *to;
    }

    Waypoint {
        position: from.position.lerp(&to.position, segment.local_t),
        rotation: from.rotation.lerp(&to.rotation, segment.local_t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onix_core::Vec3;

    fn point(x: f32, yaw: f32) -> Waypoint {
        Waypoint {
            position: Vec3::new(x, 0.0, 0.0),
            rotation: Vec3::new(0.0, yaw, 0.0),
        }
    }

    fn path(points: Vec<Waypoint>, duration: f64, looping: bool) -> Path {
        Path {
            points,
            duration,
            looping,
        }
    }

    fn rest() -> Waypoint {
        Waypoint {
            position: Vec3::new(-1.0, -1.0, -1.0),
            rotation: Vec3::ZERO,
        }
    }

    #[test]
    fn start_is_first_waypoint() {
        for looping in [false, true] {
            let p = path(vec![point(3.0, 0.5), point(10.0, 1.0), point(20.0, 2.0)], 6.0, looping);
            assert_eq!(sample_path(&p, 0.0, &rest()), p.points[0]);
        }
    }

    #[test]
    fn open_path_ends_on_last_waypoint() {
        let p = path(vec![point(0.0, 0.0), point(10.0, 1.0), point(20.0, 2.0)], 6.0, false);
        assert_eq!(sample_path(&p, 6.0, &rest()), p.points[2]);
        // Held past the end, no wraparound
        assert_eq!(sample_path(&p, 100.0, &rest()), p.points[2]);
    }

    #[test]
    fn looping_path_wraps_to_start() {
        let p = path(vec![point(0.0, 0.0), point(10.0, 1.0), point(20.0, 2.0)], 6.0, true);
        let start = sample_path(&p, 0.0, &rest());
        assert_eq!(sample_path(&p, 6.0, &rest()), start);
        assert_eq!(sample_path(&p, 12.0, &rest()), start);
    }

    #[test]
    fn open_path_divides_duration_evenly() {
        // 3 points, open: 2 segments of 3s each
        let p = path(vec![point(0.0, 0.0), point(10.0, 1.0), point(40.0, 2.0)], 6.0, false);
        let mid_first = sample_path(&p, 1.5, &rest());
        assert!((mid_first.position.x - 5.0).abs() < 1e-5);
        assert!((mid_first.rotation.y - 0.5).abs() < 1e-5);

        let seg = locate_segment(&p, 4.5).unwrap();
        assert_eq!((seg.index, seg.from, seg.to), (1, 1, 2));
        assert!((seg.local_t - 0.5).abs() < 1e-6);
        assert!((sample_path(&p, 4.5, &rest()).position.x - 25.0).abs() < 1e-4);
    }

    #[test]
    fn looping_path_includes_closing_segment() {
        // 3 points, looping: 3 segments of 2s each
        let p = path(vec![point(0.0, 0.0), point(10.0, 0.0), point(20.0, 0.0)], 6.0, true);
        let seg = locate_segment(&p, 5.0).unwrap();
        assert_eq!((seg.index, seg.from, seg.to), (2, 2, 0));
        assert!((sample_path(&p, 5.0, &rest()).position.x - 10.0).abs() < 1e-4);
        assert!((sample_path(&p, 1.0, &rest()).position.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn negative_time_wraps_or_clamps() {
        let looping = path(vec![point(0.0, 0.0), point(10.0, 0.0)], 4.0, true);
        // -1s on a 4s loop is 3s in
        assert!((wrap_path_time(&looping, -1.0) - 3.0).abs() < 1e-9);

        let open = path(vec![point(0.0, 0.0), point(10.0, 0.0)], 4.0, false);
        assert_eq!(sample_path(&open, -3.0, &rest()), open.points[0]);
    }

    #[test]
    fn degenerate_paths_never_locate_a_segment() {
        let empty = path(vec![], 5.0, true);
        assert!(locate_segment(&empty, 1.0).is_none());
        assert_eq!(sample_path(&empty, 1.0, &rest()), rest());

        let single = path(vec![point(7.0, 1.0)], 5.0, true);
        assert!(locate_segment(&single, 2.5).is_none());
        assert_eq!(sample_path(&single, 2.5, &rest()), single.points[0]);

        let zero_duration = path(vec![point(1.0, 0.0), point(2.0, 0.0)], 0.0, false);
        assert!(locate_segment(&zero_duration, 0.0).is_none());
        assert_eq!(sample_path(&zero_duration, 0.0, &rest()), zero_duration.points[0]);
    }

    #[test]
    fn non_finite_time_holds_first_point() {
        let p = path(vec![point(0.0, 0.0), point(10.0, 0.0)], 4.0, true);
        assert!(locate_segment(&p, f64::NAN).is_none());
        assert_eq!(sample_path(&p, f64::INFINITY, &rest()), p.points[0]);
    }
}
