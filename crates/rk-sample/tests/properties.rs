use rk_core::{
    BoundaryPolicy, FloatPixel, Gray8, Gray16, Gray32F, Image, Pixel, PixelValue, Point2f, Rgba16,
};
use rk_sample::{
    Bicubic, ClampConvert, FilterKernel, FilterKind, Passthrough, Resampler, convolve, gather_row,
    resample_point, resample_point_accum,
};

fn gray_pattern(width: usize, height: usize) -> Image<Gray8> {
    let data = (0..width * height)
        .map(|i| Pixel([((i * 37 + 11) % 251) as u8]))
        .collect();
    Image::from_vec(width, height, data).expect("valid image")
}

fn rgba_pattern(width: usize, height: usize) -> Image<Rgba16> {
    let data = (0..width * height)
        .map(|i| {
            let v = (i * 977) as u16;
            Pixel([v, v.wrapping_mul(3), v.wrapping_add(1234), 65535 - v])
        })
        .collect();
    Image::from_vec(width, height, data).expect("valid image")
}

fn weights(kernel: &impl FilterKernel, frac: f32) -> Vec<f32> {
    let mut out = vec![0.0; kernel.window_size()];
    kernel.weights(frac, &mut out);
    out
}

fn bits<const N: usize>(px: FloatPixel<N>) -> [u32; N] {
    px.0.map(f32::to_bits)
}

#[test]
fn identical_inputs_give_bit_identical_output() {
    let img = rgba_pattern(9, 7);
    let xw = weights(&Bicubic::MITCHELL, 0.3);
    let yw = weights(&Bicubic::MITCHELL, 0.8);

    for policy in BoundaryPolicy::ALL {
        for p in [Point2f::new(4.3, 3.8), Point2f::new(-0.7, 6.8), Point2f::new(8.9, -1.2)] {
            let a = resample_point_accum(&img, p, &xw, &yw, 4, policy);
            let b = resample_point_accum(&img, p, &xw, &yw, 4, policy);
            assert_eq!(bits(a), bits(b));
        }
    }
}

#[test]
fn one_hot_weights_at_interior_points_reproduce_the_source() {
    let img = rgba_pattern(9, 7);
    let one_hot = [0.0, 1.0, 0.0, 0.0];
    let conv = ClampConvert::<u16>::new();

    for y in 1..6 {
        for x in 1..8 {
            let p = Point2f::new(x as f32, y as f32);
            let out = resample_point(&img, p, &one_hot, &one_hot, 4, BoundaryPolicy::Black, &conv);
            assert_eq!(Some(&out), img.get(x, y), "at ({x}, {y})");
        }
    }
}

#[test]
fn output_is_linear_in_the_weights() {
    let img = rgba_pattern(9, 7);
    let p = Point2f::new(4.4, 3.6);
    let xw = weights(&Bicubic::CATMULL_ROM, 0.4);
    let yw = weights(&Bicubic::CATMULL_ROM, 0.6);
    let base = resample_point_accum(&img, p, &xw, &yw, 4, BoundaryPolicy::EdgeCopy);

    for k in [0.5f32, 2.0, -1.0] {
        let xk: Vec<f32> = xw.iter().map(|w| w * k).collect();
        let yk: Vec<f32> = yw.iter().map(|w| w * k).collect();

        let x_only = resample_point_accum(&img, p, &xk, &yw, 4, BoundaryPolicy::EdgeCopy);
        let both = resample_point_accum(&img, p, &xk, &yk, 4, BoundaryPolicy::EdgeCopy);

        for c in 0..4 {
            assert!((x_only.0[c] - k * base.0[c]).abs() < 1e-5);
            assert!((both.0[c] - k * k * base.0[c]).abs() < 1e-5);
        }
    }
}

#[test]
fn edge_copy_one_past_the_last_column_matches_the_last_column() {
    let img = gray_pattern(10, 10);
    // Tap 0 carries no weight, so both anchors see only the last column.
    let xw = [0.0, 0.6, 0.3, 0.1];
    let yw = weights(&Bicubic::CATMULL_ROM, 0.3);

    let at = |x: f32| {
        resample_point_accum(&img, Point2f::new(x, 4.3), &xw, &yw, 4, BoundaryPolicy::EdgeCopy)
    };

    assert_eq!(bits(at(10.0)), bits(at(9.0)));
    assert_eq!(bits(at(40.0)), bits(at(9.0)));
}

#[test]
fn constant_fills_when_the_window_is_outside_on_one_axis() {
    let img = rgba_pattern(6, 6);
    let w = [0.25f32; 4];
    let conv = ClampConvert::<u16>::new();

    let outside = [
        Point2f::new(-3.5, 2.5),
        Point2f::new(8.1, 2.5),
        Point2f::new(2.5, -2.01),
        Point2f::new(2.5, 7.0),
    ];
    for p in outside {
        let black = resample_point(&img, p, &w, &w, 4, BoundaryPolicy::Black, &conv);
        assert_eq!(black, Rgba16::black(), "{p:?}");

        let clear = resample_point(&img, p, &w, &w, 4, BoundaryPolicy::Transparent, &conv);
        assert_eq!(clear, Rgba16::transparent(), "{p:?}");
    }
}

#[test]
fn one_hot_y_weights_reduce_to_the_horizontal_pass() {
    let img = gray_pattern(10, 8);
    let xw = weights(&FilterKind::Lanczos { lobes: 2 }, 0.35);
    let mut yw = [0.0f32; 4];
    yw[1] = 1.0;

    for policy in BoundaryPolicy::ALL {
        for p in [Point2f::new(4.35, 5.9), Point2f::new(0.35, 0.2), Point2f::new(9.35, 7.5)] {
            let two_d = resample_point_accum(&img, p, &xw, &yw, 4, policy);

            let row = img.as_view().row(p.y.floor() as usize);
            let mut taps = [Gray8::transparent(); 4];
            gather_row(row, p.x.floor() as isize, policy, &mut taps);
            let one_d = convolve(&taps, &xw);

            assert_eq!(bits(two_d), bits(one_d), "{policy} at {p:?}");
        }
    }
}

#[test]
fn constant_image_reconstructs_its_value() {
    let img = Image::new_fill(10, 10, Pixel([100u8]));
    let p = Point2f::new(5.5, 5.5);
    let conv = ClampConvert::<u8>::new();

    let kinds = [
        FilterKind::Bilinear,
        FilterKind::CatmullRom,
        FilterKind::Mitchell,
        FilterKind::BSpline,
        FilterKind::Lanczos { lobes: 2 },
        FilterKind::Gaussian { sigma: 0.6 },
    ];
    for kind in kinds {
        let out = Resampler::new(kind, BoundaryPolicy::Black).sample(&img, p, &conv);
        assert_eq!(out, Pixel([100]), "{kind}");
    }

    let w = [0.1f32, 0.4, 0.4, 0.1];
    let out = resample_point(&img, p, &w, &w, 4, BoundaryPolicy::Mirror, &conv);
    assert_eq!(out, Pixel([100]));
}

#[test]
fn query_left_of_the_image_under_black_is_black() {
    let img = Image::new_fill(10, 10, Pixel([100u8]));
    let p = Point2f::new(-2.3, 3.0);
    let xw = weights(&Bicubic::CATMULL_ROM, p.fract().x);

    for yw in [[0.25f32; 4], [1.0, -2.0, 3.0, 0.5], [0.0, 1.0, 0.0, 0.0]] {
        let out = resample_point(&img, p, &xw, &yw, 4, BoundaryPolicy::Black, &Passthrough);
        assert_eq!(out.0[0], 0.0);
    }
}

#[test]
fn mirror_reflects_about_the_edge_pixel_on_both_axes() {
    let img = gray_pattern(5, 5);
    let conv = ClampConvert::<u8>::new();
    // Weight only the first tap of each axis: for anchor (0, 0) that is (-1, -1),
    // which reflects to (1, 1).
    let first = [1.0, 0.0, 0.0, 0.0];
    let p = Point2f::new(0.0, 0.0);
    let out = resample_point(&img, p, &first, &first, 4, BoundaryPolicy::Mirror, &conv);
    assert_eq!(Some(&out), img.get(1, 1));

    // Last taps from anchor (4, 4) sit at (6, 6), which reflects to (2, 2).
    let last = [0.0, 0.0, 0.0, 1.0];
    let p = Point2f::new(4.0, 4.0);
    let out = resample_point(&img, p, &last, &last, 4, BoundaryPolicy::Mirror, &conv);
    assert_eq!(Some(&out), img.get(2, 2));
}

#[test]
fn far_but_finite_queries_resolve_through_the_policy() {
    let img = Image::new_fill(10, 10, Pixel([100u8]));
    let w = [0.25f32; 4];
    let conv = ClampConvert::<u8>::new();

    let far = [
        Point2f::new(-1e30, 3.0),
        Point2f::new(1e30, 3.0),
        Point2f::new(3.0, -1e30),
        Point2f::new(3.0, 1e30),
        Point2f::new(1e30, -1e30),
    ];
    for p in far {
        let at = |policy| resample_point(&img, p, &w, &w, 4, policy, &conv);

        assert_eq!(at(BoundaryPolicy::Black), Pixel([0]), "{p:?}");
        assert_eq!(at(BoundaryPolicy::Transparent), Pixel([0]), "{p:?}");
        assert_eq!(at(BoundaryPolicy::EdgeCopy), Pixel([100]), "{p:?}");
        assert_eq!(at(BoundaryPolicy::Mirror), Pixel([100]), "{p:?}");
    }
}

#[test]
fn float_source_reconstructs_constant_and_identity() {
    let img = Image::new_fill(10, 10, Pixel([0.4f32]));
    let out = Resampler::new(FilterKind::CatmullRom, BoundaryPolicy::EdgeCopy).sample(
        &img,
        Point2f::new(5.5, 5.5),
        &ClampConvert::<f32>::new(),
    );
    assert!((out.0[0] - 0.4).abs() < 1e-6);

    let data = (0..30).map(|i| Pixel([i as f32 / 30.0])).collect();
    let ramp: Image<Gray32F> = Image::from_vec(6, 5, data).expect("valid image");
    let one_hot = [0.0, 1.0, 0.0, 0.0];
    for y in 0..5 {
        for x in 0..6 {
            let p = Point2f::new(x as f32, y as f32);
            let out = resample_point(
                &ramp,
                p,
                &one_hot,
                &one_hot,
                4,
                BoundaryPolicy::Mirror,
                &Passthrough,
            );
            assert_eq!(out.0[0], ramp.get(x, y).expect("in range").0[0], "at ({x}, {y})");
        }
    }
}

#[test]
fn gray16_source_keeps_full_precision() {
    let data = (0..20u16).map(|i| Pixel([i * 3001])).collect();
    let img: Image<Gray16> = Image::from_vec(5, 4, data).expect("valid image");
    let one_hot = [0.0, 1.0, 0.0, 0.0];
    let conv = ClampConvert::<u16>::new();

    for y in 0..4 {
        for x in 0..5 {
            let p = Point2f::new(x as f32, y as f32);
            let out =
                resample_point(&img, p, &one_hot, &one_hot, 4, BoundaryPolicy::EdgeCopy, &conv);
            assert_eq!(Some(&out), img.get(x, y), "at ({x}, {y})");
        }
    }
}
