use scatter_rs::core::{ColorPalette, SequentialColorScale};

#[test]
fn rainbow_palette_is_cyclic() {
    let palette = ColorPalette::Rainbow;
    assert_eq!(palette.sample(0.0).to_rgb8(), [110, 64, 170]);
    assert_eq!(palette.sample(1.0).to_rgb8(), [110, 64, 170]);
    assert_eq!(palette.sample(0.5).to_rgb8(), [175, 240, 91]);
}

#[test]
fn out_of_domain_values_clamp_to_endpoints() {
    let scale = SequentialColorScale::new((2.0, 12.0), ColorPalette::Rainbow).expect("scale");
    assert_eq!(scale.apply(-50.0), scale.apply(2.0));
    assert_eq!(scale.apply(500.0), scale.apply(12.0));
    assert_eq!(scale.normalize(7.0), 0.5);
}

#[test]
fn reversed_domain_is_supported() {
    let scale = SequentialColorScale::new((10.0, 0.0), ColorPalette::Rainbow).expect("scale");
    assert_eq!(scale.normalize(10.0), 0.0);
    assert_eq!(scale.normalize(0.0), 1.0);
    assert_eq!(scale.normalize(2.5), 0.75);
}

#[test]
fn degenerate_domain_maps_to_palette_start() {
    let palette = ColorPalette::Ramp {
        from: [0, 0, 0],
        to: [255, 255, 255],
    };
    let scale = SequentialColorScale::new((3.0, 3.0), palette).expect("scale");
    assert_eq!(scale.apply(3.0), palette.sample(0.0));
    assert_eq!(scale.apply(100.0).to_rgb8(), [0, 0, 0]);
}

#[test]
fn ramp_palette_interpolates_channels() {
    let palette = ColorPalette::Ramp {
        from: [0, 100, 200],
        to: [200, 100, 0],
    };
    assert_eq!(palette.sample(0.5).to_rgb8(), [100, 100, 100]);
    assert_eq!(palette.sample(f64::NAN).to_rgb8(), [0, 100, 200]);
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(SequentialColorScale::new((0.0, f64::INFINITY), ColorPalette::Rainbow).is_err());
}
