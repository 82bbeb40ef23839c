use std::f32::consts::PI;

/// Angle between two consecutive pages so that the whole album spans a half turn.
pub fn angular_delta(page_count: usize) -> f32 {
    PI / page_count.max(1) as f32
}

/// Position of a page on the binding ring.
pub fn offset_for(index: usize, angular_delta: f32, start_angle: f32, radius: f32) -> (f32, f32) {
    let angle = start_angle + angular_delta * index as f32;
    (radius * angle.sin(), -radius * angle.cos())
}

/// Largest size with the photo's aspect ratio that fits in `max_width` x `max_height`.
pub fn fit_photo(src_width: f32, src_height: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    if src_width <= 0.0 || src_height <= 0.0 {
        return (max_width, max_height);
    }

    let aspect = src_width / src_height;
    if aspect > max_width / max_height {
        // Wider than the page: clamp width
        (max_width, max_width / aspect)
    } else {
        // Taller than the page: clamp height
        (max_height * aspect, max_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub radius: f32,
    pub start_angle: f32,
    pub angular_delta: f32,
}

impl RingLayout {
    pub fn new(page_count: usize, radius: f32, start_angle: f32) -> Self {
        Self {
            radius,
            start_angle,
            angular_delta: angular_delta(page_count),
        }
    }

    pub fn offset_for(&self, index: usize) -> (f32, f32) {
        offset_for(index, self.angular_delta, self.start_angle, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn delta_spans_half_turn() {
        for n in 1..=12 {
            let delta = angular_delta(n);
            assert!((delta * n as f32 - PI).abs() < EPS, "n = {}", n);
        }
    }

    #[test]
    fn offsets_lie_on_ring() {
        for n in [1usize, 2, 5, 17] {
            let layout = RingLayout::new(n, 0.02, 0.3);
            for i in 0..n {
                let (x, y) = layout.offset_for(i);
                assert!(((x * x + y * y).sqrt() - 0.02).abs() < EPS);
            }
        }
    }

    #[test]
    fn first_page_sits_in_front_of_axis() {
        let (x, y) = offset_for(0, angular_delta(4), 0.0, 2.0);
        assert!(x.abs() < EPS);
        assert!((y + 2.0).abs() < EPS);

        // Half way round the ring the page is beside the axis
        let (x, y) = offset_for(2, angular_delta(4), 0.0, 2.0);
        assert!((x - 2.0).abs() < EPS);
        assert!(y.abs() < EPS);
    }

    #[test]
    fn wide_photo_is_clamped_to_width() {
        let (w, h) = fit_photo(4000.0, 2000.0, 800.0, 900.0);
        assert!((w - 800.0).abs() < EPS);
        assert!((h - 400.0).abs() < EPS);
    }

    #[test]
    fn tall_photo_is_clamped_to_height() {
        let (w, h) = fit_photo(1000.0, 3000.0, 800.0, 900.0);
        assert!((w - 300.0).abs() < EPS);
        assert!((h - 900.0).abs() < EPS);
    }

    #[test]
    fn degenerate_photo_fills_page() {
        assert_eq!(fit_photo(0.0, 10.0, 8.0, 9.0), (8.0, 9.0));
    }
}
