use std::f32::consts::PI;
use std::path::PathBuf;

use photoalbum::Slideshow;
use photoalbum::album::layout::angular_delta;

fn album(count: usize, delay: f64) -> Slideshow {
    let paths = (0..count).map(|i| PathBuf::from(format!("page_{:03}.jpg", i))).collect();
    Slideshow::new(paths, delay, false).expect("album with pages")
}

fn visible_count(s: &Slideshow) -> usize {
    s.pages().iter().filter(|p| p.visible).count()
}

#[test]
fn ring_spans_half_turn() {
    for n in 1..=9 {
        let s = album(n, 5.0);
        assert!((s.layout().angular_delta - angular_delta(n)).abs() < 1e-6);
        for page in s.pages() {
            let (x, y) = page.offset();
            assert!(((x * x + y * y).sqrt() - s.layout().radius).abs() < 1e-6);
        }
    }
}

#[test]
fn five_page_first_advance() {
    let mut s = album(5, 5.0);
    s.update(0.0);
    assert!(s.advance(0.0));

    let first = s.page(0).unwrap();
    assert_eq!(first.target_rotation(), PI);
    assert_eq!(first.target_time(), 1.0);
    assert_eq!(s.current(), 1);
    assert!(s.page(1).unwrap().visible);
}

#[test]
fn navigation_at_the_ends_is_a_noop() {
    let mut s = album(3, 5.0);
    assert!(!s.retreat(0.0));
    assert_eq!(s.current(), 0);

    assert!(s.advance(0.0));
    assert!(s.advance(0.1));
    assert!(!s.advance(0.2));
    assert_eq!(s.current(), 2);
}

#[test]
fn auto_advance_fires_once_after_delay() {
    let mut s = album(5, 5.0);
    s.toggle_auto_advance(0.0);

    s.tick(4.9);
    assert_eq!(s.current(), 0);
    s.tick(5.1);
    assert_eq!(s.current(), 1);
    s.tick(5.1);
    assert_eq!(s.current(), 1);
}

#[test]
fn frame_loop_settles_on_single_visible_page() {
    let mut s = album(4, 5.0);
    let frame = 1.0 / 60.0;
    let mut now = 0.0;

    s.update(now);
    s.advance(now);
    while now < 1.5 {
        now += frame;
        s.tick(now);
        s.update(now);
        for page in s.pages() {
            let r = page.rotation();
            assert!((0.0..=PI + 1e-6).contains(&r), "page {} at {}", page.index, r);
        }
    }
    s.tick(now);

    assert_eq!(s.page(0).unwrap().rotation(), PI);
    assert_eq!(visible_count(&s), 1);
    assert!(s.page(1).unwrap().visible);
}

#[test]
fn slideshow_runs_to_the_last_page_and_stops() {
    let mut s = album(3, 2.0);
    s.toggle_auto_advance(0.0);

    let mut now = 0.0;
    while now < 30.0 {
        now += 0.1;
        s.tick(now);
        s.update(now);
    }

    assert_eq!(s.current(), 2);
    assert!(s.pages()[..2].iter().all(|p| p.rotation() == PI));
    assert_eq!(visible_count(&s), 1);
}

#[test]
fn auto_advance_switched_on_mid_session_waits_a_full_delay() {
    let mut s = album(4, 5.0);
    let mut now = 0.0;
    while now < 60.0 {
        now += 0.5;
        s.advance_frame(now);
    }
    assert_eq!(s.current(), 0);

    s.toggle_auto_advance(now);
    let switched_on = now;
    while now < switched_on + 5.0 {
        now += 0.5;
        s.advance_frame(now);
        assert_eq!(s.current(), 0, "advanced early at {}", now);
    }
    now += 0.5;
    s.advance_frame(now);
    assert_eq!(s.current(), 1);
}
