use super::*;

fn samples() -> impl Iterator<Item = f64> {
    (-40..=40).map(|i| f64::from(i) * 0.125)
}

#[test]
fn clamp_bounds_and_passthrough() {
    assert_eq!(clamp(0.0, 1.0, 0.25), 0.25);
    assert_eq!(clamp(0.0, 1.0, -3.0), 0.0);
    assert_eq!(clamp(0.0, 1.0, 7.5), 1.0);
    assert_eq!(clamp(-2.0, 2.0, -2.0), -2.0);
    assert_eq!(clamp(-2.0, 2.0, 2.0), 2.0);
    for x in samples() {
        let c = clamp(-1.0, 2.0, x);
        assert!((-1.0..=2.0).contains(&c));
        if (-1.0..=2.0).contains(&x) {
            assert_eq!(c, x);
        }
    }
}

#[test]
fn clamp_with_inverted_bounds_yields_lower_argument() {
    for x in samples() {
        assert_eq!(clamp(3.0, 1.0, x), 3.0);
    }
}

#[test]
fn clamp_propagates_nan() {
    assert!(clamp(0.0, 1.0, f64::NAN).is_nan());
    assert!(clamp(f64::NAN, 1.0, 0.5).is_nan());
    assert_eq!(clamp(0.0, 1.0, f64::INFINITY), 1.0);
    assert_eq!(clamp(0.0, 1.0, f64::NEG_INFINITY), 0.0);
}

#[test]
fn lerp_endpoints_and_saturation() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    assert_eq!(lerp(2.0, 10.0, -4.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 9.0), 10.0);
    assert_eq!(lerp(10.0, 2.0, 0.25), 8.0);
}

#[test]
fn lerp_is_monotonic_in_t() {
    let mut prev = lerp(-3.0, 5.0, 0.0);
    for i in 1..=100 {
        let v = lerp(-3.0, 5.0, f64::from(i) / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn map_hits_range_endpoints_and_extrapolates() {
    assert_eq!(map(0.0, 10.0, 100.0, 200.0, 0.0), 100.0);
    assert_eq!(map(0.0, 10.0, 100.0, 200.0, 10.0), 200.0);
    assert_eq!(map(0.0, 10.0, 100.0, 200.0, 5.0), 150.0);
    assert_eq!(map(0.0, 10.0, 100.0, 200.0, 20.0), 300.0);
    assert_eq!(map(0.0, 10.0, 200.0, 100.0, 2.5), 175.0);
}

#[test]
fn map_with_degenerate_domain_is_not_finite() {
    assert!(map(1.0, 1.0, 0.0, 1.0, 1.0).is_nan());
    assert!(map(1.0, 1.0, 0.0, 1.0, 2.0).is_infinite());
}

#[test]
fn step_is_inclusive_on_the_high_side() {
    assert_eq!(step(1.0, 0.999), 0.0);
    assert_eq!(step(1.0, 1.0), 1.0);
    assert_eq!(step(1.0, 1.001), 1.0);
    assert_eq!(step(0.0, f64::NAN), 0.0);
}

#[test]
fn pulse_matches_step_difference() {
    for a in [-1.0, 0.0, 0.5, 2.0] {
        for b in [-1.0, 0.0, 0.5, 2.0] {
            for x in samples() {
                assert_eq!(pulse(a, b, x), step(a, x) - step(b, x));
            }
        }
    }
    assert_eq!(pulse(0.0, 1.0, 0.0), 1.0);
    assert_eq!(pulse(0.0, 1.0, 0.5), 1.0);
    assert_eq!(pulse(0.0, 1.0, 1.0), 0.0);
    assert_eq!(pulse(1.0, 0.0, 0.5), -1.0);
}

#[test]
fn linstep_is_clamped_ratio() {
    for x in samples() {
        assert_eq!(
            linstep(-1.5, 3.0, x),
            clamp(0.0, 1.0, (x - -1.5) / (3.0 - -1.5))
        );
    }
    assert_eq!(linstep(0.0, 4.0, 1.0), 0.25);
}

#[test]
fn smoothstep_edges_midpoint_and_monotonicity() {
    assert_eq!(smoothstep(1.0, 3.0, 1.0), 0.0);
    assert_eq!(smoothstep(1.0, 3.0, 3.0), 1.0);
    assert_eq!(smoothstep(1.0, 3.0, 2.0), 0.5);
    assert_eq!(smoothstep(1.0, 3.0, -9.0), 0.0);
    assert_eq!(smoothstep(1.0, 3.0, 9.0), 1.0);

    let mut prev = 0.0;
    for i in 0..=200 {
        let v = smoothstep(1.0, 3.0, 1.0 + f64::from(i) / 100.0);
        assert!(v >= prev);
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn smoothstep_uses_quintic_polynomial() {
    let t: f64 = 0.25;
    let expected = t * t * t * (t * (t * 6.0 - 15.0) + 10.0);
    assert!((smoothstep(0.0, 1.0, 0.25) - expected).abs() < 1e-12);
}

#[test]
fn helpers_are_generic_over_f32() {
    assert_eq!(clamp(0.0f32, 1.0, 2.0), 1.0f32);
    assert_eq!(lerp(0.0f32, 4.0, 0.5), 2.0f32);
    assert_eq!(smoothstep(0.0f32, 1.0, 1.0), 1.0f32);
    assert_eq!(pulse(0.0f32, 1.0, 0.5), 1.0f32);
}
