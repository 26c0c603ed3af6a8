// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::config::ZoomConfig;

/// Computes one edge-pan step for a pointer inside `container`.
///
/// Each axis has a band of `config.pan_range` times its extent along both
/// edges. While the pointer is inside a band the view scrolls towards that
/// edge by up to `config.pan_distance / level`, scaled linearly by how deep
/// the pointer is in the band. The axes are independent and the step is not
/// normalized for diagonal movement. Pointers on or outside the container
/// edge do not pan.
///
/// ```rust
/// use kurbo::{Point, Rect, Vec2};
/// use understory_zoom::{ZoomConfig, pan_delta};
///
/// let container = Rect::new(0.0, 0.0, 1000.0, 1000.0);
/// let config = ZoomConfig::default();
///
/// assert_eq!(pan_delta(container, Point::new(500.0, 500.0), 2.0, &config), Vec2::ZERO);
/// assert!(pan_delta(container, Point::new(50.0, 500.0), 2.0, &config).x < 0.0);
/// ```
#[must_use]
pub fn pan_delta(container: Rect, pointer: Point, level: f64, config: &ZoomConfig) -> Vec2 {
    let local = pointer - container.origin();
    let step = config.pan_distance / level;
    Vec2::new(
        axis_delta(local.x, container.width(), config.pan_range, step),
        axis_delta(local.y, container.height(), config.pan_range, step),
    )
}

fn axis_delta(offset: f64, extent: f64, range: f64, step: f64) -> f64 {
    let band = extent * range;
    if offset > 0.0 && offset < band {
        -(1.0 - offset / band) * step
    } else if offset > extent - band && offset < extent {
        (1.0 - (extent - offset) / band) * step
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::pan_delta;
    use crate::config::ZoomConfig;

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

    #[test]
    fn center_does_not_pan() {
        let config = ZoomConfig::default();
        let delta = pan_delta(CONTAINER, Point::new(500.0, 500.0), 3.0, &config);
        assert_eq!(delta, Vec2::ZERO);
    }

    #[test]
    fn left_band_pans_left_proportionally() {
        let config = ZoomConfig::default();
        let level = 2.0;
        let delta = pan_delta(CONTAINER, Point::new(50.0, 500.0), level, &config);
        let expected = -(1.0 - 50.0 / 120.0) * (14.0 / level);
        assert!((delta.x - expected).abs() < 1e-9);
        assert_eq!(delta.y, 0.0);
    }

    #[test]
    fn bottom_right_corner_pans_both_axes() {
        let config = ZoomConfig::default();
        let delta = pan_delta(CONTAINER, Point::new(970.0, 940.0), 1.0, &config);
        assert!((delta.x - (1.0 - 30.0 / 120.0) * 14.0).abs() < 1e-9);
        assert!((delta.y - (1.0 - 60.0 / 120.0) * 14.0).abs() < 1e-9);
    }

    #[test]
    fn step_shrinks_with_level() {
        let config = ZoomConfig::default();
        let near = Point::new(10.0, 10.0);
        let slow = pan_delta(CONTAINER, near, 4.0, &config);
        let fast = pan_delta(CONTAINER, near, 2.0, &config);
        assert!((fast.x - 2.0 * slow.x).abs() < 1e-9);
        assert!((fast.y - 2.0 * slow.y).abs() < 1e-9);
    }

    #[test]
    fn container_offset_is_respected() {
        let config = ZoomConfig::default();
        let container = Rect::new(200.0, 100.0, 600.0, 500.0);
        // 10px inside the top edge of a 400px tall container (48px band).
        let delta = pan_delta(container, Point::new(400.0, 110.0), 1.0, &config);
        assert_eq!(delta.x, 0.0);
        assert!((delta.y + (1.0 - 10.0 / 48.0) * 14.0).abs() < 1e-9);
    }

    #[test]
    fn edges_and_outside_do_not_pan() {
        let config = ZoomConfig::default();
        for pointer in [
            Point::new(0.0, 500.0),
            Point::new(1000.0, 500.0),
            Point::new(-20.0, 500.0),
            Point::new(500.0, 1200.0),
        ] {
            assert_eq!(pan_delta(CONTAINER, pointer, 1.0, &config), Vec2::ZERO);
        }
    }
}
