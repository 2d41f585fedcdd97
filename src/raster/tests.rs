use super::*;

type Fb = Framebuffer<128, 8>;

fn patterned() -> Fb {
    let mut fb = Fb::new();
    let bytes: std::vec::Vec<u8> = (0..Fb::SIZE).map(|i| (i * 37 % 251) as u8).collect();
    fb.load(&bytes).unwrap();
    fb
}

#[test_log::test]
fn horizontal_line_sets_exactly_its_pixels() {
    let mut fb = Fb::new();
    fb.draw_line(0, 0, 9, 0, Color::On);
    let expected: std::vec::Vec<_> = (0..10).map(|x| (x, 0)).collect();
    assert_eq!(fb.lit_pixels(), expected);
}

#[test_log::test]
fn vertical_line_sets_exactly_its_pixels() {
    let mut fb = Fb::new();
    fb.draw_line(0, 0, 0, 9, Color::On);
    let expected: std::vec::Vec<_> = (0..10).map(|y| (0, y)).collect();
    assert_eq!(fb.lit_pixels(), expected);
}

#[test_log::test]
fn reversed_line_matches_forward_pixels() {
    let mut forward = Fb::new();
    let mut backward = Fb::new();
    forward.draw_line(3, 7, 3, 2, Color::On);
    backward.draw_line(3, 2, 3, 7, Color::On);
    assert_eq!(forward, backward);
}

#[test_log::test]
fn degenerate_line_is_a_point() {
    let mut fb = Fb::new();
    fb.draw_line(5, 6, 5, 6, Color::On);
    assert_eq!(fb.lit_pixels(), vec![(5, 6)]);
}

#[test_log::test]
fn diagonal_line_has_one_pixel_per_column() {
    let mut fb = Fb::new();
    fb.draw_line(0, 0, 127, 63, Color::On);
    let lit = fb.lit_pixels();
    assert_eq!(lit.len(), 128);
    assert!(fb.is_on(0, 0));
    assert!(fb.is_on(127, 63));
    for x in 0..128 {
        assert_eq!(lit.iter().filter(|p| p.0 == x).count(), 1, "column {x}");
    }
}

#[test_log::test]
fn off_color_clears_a_line() {
    let mut fb = Fb::new();
    fb.fill(Color::On);
    fb.draw_line(0, 5, 127, 5, Color::Off);
    assert!(fb.page(0).iter().all(|&b| b == 0b1101_1111));
}

#[test_log::test]
fn polyline_connects_vertices_in_order() {
    let mut fb = Fb::new();
    let path = [Vertex::new(0, 0), Vertex::new(10, 0), Vertex::new(10, 10)];
    fb.draw_polyline(&path, Color::On);

    let mut expected = Fb::new();
    expected.draw_line(0, 0, 10, 0, Color::On);
    expected.draw_line(10, 0, 10, 10, Color::On);
    assert_eq!(fb, expected);
}

#[test_log::test]
fn short_polylines_draw_nothing() {
    let mut fb = Fb::new();
    fb.draw_polyline(&[], Color::On);
    fb.draw_polyline(&[Vertex::from((4, 4))], Color::On);
    assert_eq!(fb, Fb::new());
}

#[test_log::test]
fn rectangle_outline_has_four_edges() {
    let mut fb = Fb::new();
    fb.draw_rectangle(9, 4, 0, 0, Color::On);
    assert_eq!(fb.lit_pixels().len(), 2 * 10 + 2 * 3);
    assert!(fb.is_on(0, 0) && fb.is_on(9, 0) && fb.is_on(0, 4) && fb.is_on(9, 4));
    assert!(!fb.is_on(5, 2));
}

#[test_log::test]
fn filled_rectangle_ignores_corner_order() {
    let mut a = Fb::new();
    let mut b = Fb::new();
    a.fill_rectangle(2, 3, 12, 20, Color::On);
    b.fill_rectangle(12, 20, 2, 3, Color::On);
    assert_eq!(a, b);
    assert_eq!(a.lit_pixels().len(), 11 * 18);
}

#[test_log::test]
fn filled_rectangle_is_clipped() {
    let mut fb = Fb::new();
    fb.fill_rectangle(-5, -5, 3, 3, Color::On);
    assert_eq!(fb.lit_pixels().len(), 16);
    fb.fill_rectangle(120, 60, 400, 400, Color::On);
    assert_eq!(fb.lit_pixels().len(), 16 + 8 * 4);
}

#[test_log::test]
fn out_of_bounds_primitives_leave_buffer_untouched() {
    let mut fb = patterned();
    let before = fb.clone();

    fb.set_pixel(128, 10, Color::On);
    fb.draw_line(200, 0, 250, 10, Color::On);
    fb.draw_line(0, 64, 127, 90, Color::Off);
    fb.draw_circle(128, 10, 5, Color::On);
    fb.fill_circle(10, 64, 5, Color::Off);
    fb.fill_circle(-1, 10, 5, Color::Off);
    fb.fill_rectangle(130, 70, 140, 80, Color::On);
    fb.draw_arc(300, 300, 10, 0, 360, Color::On);
    fb.fill_triangle(200, 0, 220, 10, 210, 40, Color::Off);

    assert_eq!(fb, before);
}

#[test_log::test]
fn circle_of_radius_zero_is_one_pixel() {
    let mut fb = Fb::new();
    fb.draw_circle(20, 20, 0, Color::On);
    assert_eq!(fb.lit_pixels(), vec![(20, 20)]);
}

#[test_log::test]
fn circle_touches_its_extremes() {
    let mut fb = Fb::new();
    fb.draw_circle(64, 32, 20, Color::On);
    for (x, y) in [(44, 32), (84, 32), (64, 12), (64, 52)] {
        assert!(fb.is_on(x, y), "({x}, {y})");
    }
    assert!(!fb.is_on(64, 32));
    assert!(!fb.is_on(43, 32));
}

#[test_log::test]
fn filled_circle_covers_outline() {
    for (cx, cy) in [(64, 32), (2, 2), (125, 60)] {
        for r in 0..=24u8 {
            let mut outline = Fb::new();
            let mut disc = Fb::new();
            outline.draw_circle(cx, cy, r, Color::On);
            disc.fill_circle(cx, cy, r, Color::On);
            for (x, y) in outline.lit_pixels() {
                assert!(disc.is_on(x, y), "r={r} center=({cx}, {cy}) missing ({x}, {y})");
            }
        }
    }
}

#[test_log::test]
fn filled_circle_is_solid_at_the_center_row() {
    let mut fb = Fb::new();
    fb.fill_circle(64, 32, 10, Color::On);
    for x in 54..=74 {
        assert!(fb.is_on(x, 32));
    }
    assert!(!fb.is_on(53, 32));
    assert!(!fb.is_on(75, 32));
}

#[test_log::test]
fn invert_twice_restores_buffer() {
    let mut fb = patterned();
    let before = fb.clone();
    for (x1, y1, x2, y2) in [(0, 0, 127, 63), (3, 5, 40, 6), (10, 3, 20, 50), (0, 8, 0, 15)] {
        fb.invert_rectangle(x1, y1, x2, y2).unwrap();
        assert_ne!(fb, before);
        fb.invert_rectangle(x1, y1, x2, y2).unwrap();
        assert_eq!(fb, before);
    }
}

#[test_log::test]
fn invert_flips_exactly_the_region() {
    let mut fb = Fb::new();
    fb.invert_rectangle(2, 5, 4, 17).unwrap();
    let lit = fb.lit_pixels();
    assert_eq!(lit.len(), 3 * 13);
    assert!(lit.iter().all(|&(x, y)| (2..=4).contains(&x) && (5..=17).contains(&y)));
    assert_eq!(fb.page(0)[2], 0b1110_0000);
    assert_eq!(fb.page(1)[3], 0xFF);
    assert_eq!(fb.page(2)[4], 0b0000_0011);
}

#[test_log::test]
fn invert_within_one_page_uses_a_mask() {
    let mut fb = Fb::new();
    fb.fill(Color::On);
    fb.invert_rectangle(0, 9, 127, 11).unwrap();
    assert!(fb.page(1).iter().all(|&b| b == 0b1111_0001));
    assert!(fb.page(0).iter().all(|&b| b == 0xFF));
}

#[test_log::test]
fn invert_rejects_bad_regions() {
    let mut fb = patterned();
    let before = fb.clone();
    for (x1, y1, x2, y2) in [(0, 0, 128, 10), (0, 0, 10, 64), (10, 0, 5, 10), (0, 10, 5, 3), (-1, 0, 5, 5)] {
        assert_eq!(
            fb.invert_rectangle(x1, y1, x2, y2),
            Err(BufferError::Range { x1, y1, x2, y2 })
        );
    }
    assert_eq!(fb, before);
}

#[test_log::test]
fn arc_covers_the_right_half_for_half_a_turn() {
    let mut fb = Fb::new();
    fb.draw_arc(64, 32, 20, 0, 180, Color::On);
    assert!(fb.is_on(64, 52));
    assert!(fb.is_on(64, 12));
    assert!(fb.lit_pixels().iter().all(|&(x, _)| x >= 64));
}

#[test_log::test]
fn arc_with_radius_lines_closes_the_sector() {
    let mut plain = Fb::new();
    let mut sector = Fb::new();
    plain.draw_arc(64, 32, 20, 0, 270, Color::On);
    sector.draw_arc_with_radius_line(64, 32, 20, 0, 270, Color::On);
    assert!(!plain.is_on(64, 40));
    assert!(!plain.is_on(50, 32));
    assert!(sector.is_on(64, 40));
    assert!(sector.is_on(50, 32));
    for (x, y) in plain.lit_pixels() {
        assert!(sector.is_on(x, y));
    }
}

#[test_log::test]
fn empty_sweep_draws_nothing() {
    let mut fb = Fb::new();
    fb.draw_arc(64, 32, 20, 0, 0, Color::On);
    fb.draw_arc_with_radius_line(64, 32, 20, 90, 0, Color::On);
    assert_eq!(fb, Fb::new());
}

#[test_log::test]
fn angles_normalize_like_the_controller_library() {
    assert_eq!(normalize_degrees(0), 0);
    assert_eq!(normalize_degrees(90), 90);
    assert_eq!(normalize_degrees(360), 360);
    assert_eq!(normalize_degrees(370), 10);
    assert_eq!(normalize_degrees(720), 360);
}

#[test_log::test]
fn collinear_triangle_draws_a_segment() {
    let mut fb = Fb::new();
    fb.fill_triangle(0, 0, 5, 5, 10, 10, Color::On);
    assert!(fb.is_on(0, 0));
    assert!(fb.is_on(10, 10));

    let mut flat = Fb::new();
    flat.fill_triangle(3, 7, 9, 7, 6, 7, Color::On);
    assert!(flat.lit_pixels().iter().all(|&(_, y)| y == 7));
    assert!(flat.is_on(3, 7) && flat.is_on(9, 7));

    let mut point = Fb::new();
    point.fill_triangle(4, 4, 4, 4, 4, 4, Color::On);
    assert_eq!(point.lit_pixels(), vec![(4, 4)]);
}

#[test_log::test]
fn triangle_fills_its_interior() {
    let mut fb = Fb::new();
    fb.fill_triangle(4, 38, 12, 30, 12, 46, Color::On);
    assert!(fb.is_on(10, 38));
    assert!(fb.is_on(12, 30));
    assert!(fb.is_on(12, 46));
    assert!(!fb.is_on(3, 38));
    assert!(!fb.is_on(13, 38));
    assert!(!fb.is_on(5, 31));
}

#[test_log::test]
fn triangle_vertex_order_does_not_matter() {
    let mut a = Fb::new();
    let mut b = Fb::new();
    a.fill_triangle(0, 63, 64, 0, 127, 63, Color::On);
    b.fill_triangle(127, 63, 0, 63, 64, 0, Color::On);
    assert_eq!(a, b);
    assert!(a.page(7).iter().all(|&byte| byte & 0x80 != 0));
}

#[test_log::test]
fn lines_reaching_the_coordinate_limits_are_clipped() {
    let mut fb = Fb::new();
    fb.draw_line(0, 0, i16::MAX, 0, Color::On);
    fb.draw_line(i16::MIN, 5, 0, 5, Color::On);
    fb.draw_line(i16::MIN, i16::MIN, i16::MAX, i16::MAX, Color::On);
    fb.draw_polyline(&[Vertex::new(i16::MAX, 2), Vertex::new(i16::MIN, 2)], Color::On);

    assert!((0..128).all(|x| fb.is_on(x, 0) && fb.is_on(x, 2)));
    assert!(fb.is_on(0, 5) && !fb.is_on(1, 5));
    // The diagonal through the origin crosses the whole panel.
    assert!(fb.is_on(30, 30) && fb.is_on(63, 63));
}

#[test_log::test]
fn shapes_at_the_coordinate_limits_stay_in_bounds() {
    let mut fb = Fb::new();
    fb.fill_triangle(i16::MIN, 0, 0, 5, i16::MAX, 10, Color::On);
    assert!(fb.is_on(0, 5));
    assert!(fb.lit_pixels().iter().all(|&(_, y)| (0..=10).contains(&y)));

    let before = fb.clone();
    fb.draw_arc(i16::MAX, 0, 10, 0, 180, Color::On);
    fb.draw_arc_with_radius_line(i16::MIN, i16::MIN, 255, 0, 360, Color::On);
    fb.draw_circle(i16::MAX, i16::MAX, 255, Color::On);
    fb.fill_circle(i16::MIN, 0, 255, Color::On);
    fb.fill_rectangle(i16::MIN, i16::MIN, i16::MIN + 1, i16::MAX, Color::On);
    fb.draw_rectangle(i16::MAX - 1, i16::MAX - 1, i16::MAX, i16::MAX, Color::On);
    fb.draw_bitmap(i16::MAX, i16::MIN, &[0xFF], 8, 1, Color::On);
    assert_eq!(
        fb.invert_rectangle(i16::MIN, 0, i16::MAX, 10),
        Err(BufferError::Range { x1: i16::MIN, y1: 0, x2: i16::MAX, y2: 10 })
    );
    assert_eq!(fb, before);
}
