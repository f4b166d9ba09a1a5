//! End-to-end drawing and compositing scenarios.
//!
//! Exercises the public API the way annotation code uses it: draw markers
//! into an image, join frames side by side, overlay heat regions.

#![allow(clippy::unwrap_used)]

use pixeldraw::prelude::*;

#[test]
fn annotated_frame_roundtrip() {
    let mut frame: Image<Rgb8> = Image::new(40, 30);

    // Feature marker: cross plus surrounding box.
    draw_cross(&mut frame, Coord::new(20, 15), 3.0, Rgb8::red());
    draw_box(&mut frame, Coord::new(15, 10), Coord::new(25, 20), Rgb8::yellow());

    // Detected region outline: circle around the same center.
    draw_shape(&mut frame, Coord::new(20, 15), &circle_points(8), Rgb8::green());

    assert_eq!(frame.get(Coord::new(20, 15)), Some(Rgb8::red()));
    assert_eq!(frame.get(Coord::new(15, 10)), Some(Rgb8::yellow()));
    assert_eq!(frame.get(Coord::new(20, 7)), Some(Rgb8::green()));
    // Untouched background stays zero.
    assert_eq!(frame.get(Coord::new(0, 29)), Some(Rgb8::black()));
}

#[test]
fn join_then_combine_pipeline() {
    let mut left: Image<Gray8> = Image::new(8, 8);
    let mut right: Image<Gray8> = Image::new(8, 6);
    draw_line_at(&mut left, Coord::new(0, 0), Coord::new(7, 7), Gray8::white());
    draw_line_at(&mut right, Coord::new(0, 5), Coord::new(7, 0), Gray8::gray());

    let mut joined: Image<Gray8> = Image::new(1, 1);
    join_images(&left, &right, &mut joined);
    assert_eq!(joined.size(), Coord::new(16, 8));
    assert_eq!(joined.get(Coord::new(3, 3)), Some(Gray8::white()));
    assert_eq!(joined.get(Coord::new(8, 5)), Some(Gray8::gray()));
    // Region below the shorter right image is zeroed.
    assert_eq!(joined.get(Coord::new(12, 7)), Some(Gray8::black()));

    // Overlay a response map onto the joined view.
    let mut response: Image<Gray8> = Image::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            response.set(Coord::new(x, y), Gray::<u8>(10));
        }
    }
    let base = joined.clone();
    let mut out: Image<Gray8> = Image::new(16, 8);
    combine_images(&base, &response, &mut out, Coord::new(14, 6), None, Coord::ORIGIN).unwrap();

    // Clamped to the 2x2 corner that fits.
    assert_eq!(out.get(Coord::new(14, 6)), Some(Gray::<u8>(10)));
    assert_eq!(out.get(Coord::new(15, 7)), Some(Gray::<u8>(10)));
    assert_eq!(out.get(Coord::new(13, 6)), joined.get(Coord::new(13, 6)));
}

#[test]
fn combine_precondition_errors_leave_output_intact() {
    let a: Image<Gray8> = Image::new(4, 4);
    let b: Image<Gray8> = Image::new(2, 2);

    let mut out: Image<Gray8> = Image::new(4, 4);
    out.set(Coord::new(0, 0), Gray::<u8>(99));
    assert!(matches!(
        combine_images(&a, &b, &mut out, Coord::new(0, 4), None, Coord::ORIGIN),
        Err(Error::RefOutOfImage { .. })
    ));
    assert_eq!(out.get(Coord::new(0, 0)), Some(Gray::<u8>(99)));

    let mut mismatched: Image<Gray8> = Image::new(3, 4);
    mismatched.set(Coord::new(0, 0), Gray::<u8>(77));
    assert!(matches!(
        combine_images(&a, &b, &mut mismatched, Coord::ORIGIN, None, Coord::ORIGIN),
        Err(Error::IncompatibleSizes { .. })
    ));
    assert_eq!(mismatched.get(Coord::new(0, 0)), Some(Gray::<u8>(77)));
}

#[test]
fn shaded_colors_draw_darker_markers() {
    let mut im: Image<Rgb8> = Image::new(10, 10);
    let dim_red = Rgb8::red().shade(0.5);
    draw_cross(&mut im, Coord::new(5, 5), 2.0, dim_red);

    assert_eq!(im.get(Coord::new(5, 5)), Some(Rgb8::new(127, 0, 0)));
}

#[test]
fn sixteen_bit_pipeline() {
    let mut a: Image<Gray16> = Image::new(6, 6);
    draw_line_at(&mut a, Coord::new(0, 3), Coord::new(5, 3), Gray16::white());

    let mut b: Image<Gray16> = Image::new(6, 6);
    draw_line_at(&mut b, Coord::new(3, 0), Coord::new(3, 5), Gray::<u16>(1));

    let mut out: Image<Gray16> = Image::new(6, 6);
    combine_images(&a, &b, &mut out, Coord::ORIGIN, None, Coord::ORIGIN).unwrap();

    // Intersection wraps around the 16-bit range: 65535 + 1 == 0.
    assert_eq!(out.get(Coord::new(3, 3)), Some(Gray::<u16>(0)));
    assert_eq!(out.get(Coord::new(1, 3)), Some(Gray16::white()));
}
