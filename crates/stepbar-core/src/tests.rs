#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::*;
    use web_time::{Duration, Instant};

    fn red_blue() -> Gradient {
        Gradient::new([
            GradientStop::new(Color::RED, 0.0),
            GradientStop::new(Color::BLUE, 1.0),
        ])
        .unwrap()
    }

    fn rgb_ramp() -> Gradient {
        Gradient::new([
            GradientStop::new(Color::RED, 0.0),
            GradientStop::new(Color::from_rgb(0, 255, 0), 0.5),
            GradientStop::new(Color::BLUE, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_lerp_rounds_and_clamps() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color(128, 128, 128, 255));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_extent_along_axis() {
        let b = BoxExtent {
            width: Extent::Bounded(200.0),
            height: Extent::Unbounded,
        };
        assert_eq!(b.along(Axis::Horizontal), Extent::Bounded(200.0));
        assert_eq!(b.across(Axis::Horizontal), Extent::Unbounded);
        assert_eq!(b.along(Axis::Vertical).bounded_or(7.0), 7.0);
        assert_eq!(b.across(Axis::Vertical).bounded_or(7.0), 200.0);
    }

    #[test]
    fn test_gradient_rejects_malformed_stops() {
        let one = Gradient::new([GradientStop::new(Color::RED, 0.0)]);
        assert_eq!(one, Err(GradientError::TooFewStops(1)));

        let backwards = Gradient::new([
            GradientStop::new(Color::RED, 0.0),
            GradientStop::new(Color::WHITE, 0.6),
            GradientStop::new(Color::BLUE, 0.6),
            GradientStop::new(Color::BLACK, 1.0),
        ]);
        assert_eq!(backwards, Err(GradientError::NotIncreasing { index: 2 }));

        let outside = Gradient::new([
            GradientStop::new(Color::RED, -0.1),
            GradientStop::new(Color::BLUE, 1.0),
        ]);
        assert!(matches!(
            outside,
            Err(GradientError::StopOutOfRange { index: 0, .. })
        ));

        let short = Gradient::new([
            GradientStop::new(Color::RED, 0.0),
            GradientStop::new(Color::BLUE, 0.9),
        ]);
        assert!(matches!(short, Err(GradientError::BadEndpoints { .. })));
    }

    #[test]
    fn test_gradient_endpoints() {
        for g in [red_blue(), rgb_ramp()] {
            assert_eq!(g.sample_at(0.0), g.first_color());
            assert_eq!(g.sample_at(1.0), g.last_color());
        }
    }

    #[test]
    fn test_gradient_clamps_outside_range() {
        let g = rgb_ramp();
        assert_eq!(g.sample_at(-3.0), Color::RED);
        assert_eq!(g.sample_at(7.0), Color::BLUE);
        assert_eq!(g.sample_at(f32::NAN), Color::RED);
    }

    #[test]
    fn test_gradient_interpolates_between_bracketing_stops() {
        let g = rgb_ramp();
        assert_eq!(g.sample_at(0.5), Color::from_rgb(0, 255, 0));
        // Halfway between the green stop and blue.
        assert_eq!(g.sample_at(0.75), Color::from_rgb(0, 128, 128));
    }

    #[test]
    fn test_sub_gradient_matches_parent_samples() {
        let g = rgb_ramp();
        for (start, end) in [(0.0, 1.0), (0.1, 0.45), (0.5, 0.5), (0.8, 0.2)] {
            let sub = g.sub_gradient(start, end);
            assert_eq!(sub.stops().len(), 2);
            assert_eq!(sub.sample_at(0.0), g.sample_at(start));
            assert_eq!(sub.sample_at(1.0), g.sample_at(end));
        }
        let clamped = g.sub_gradient(-1.0, 2.0);
        assert_eq!(clamped.first_color(), Color::RED);
        assert_eq!(clamped.last_color(), Color::BLUE);
    }

    #[test]
    fn test_sub_gradient_quarter_slice() {
        let sub = red_blue().sub_gradient(0.25, 0.75);
        let (a, b) = (sub.first_color(), sub.last_color());
        for c in [a, b] {
            assert!(c != Color::RED && c != Color::BLUE);
        }
        // The 0.25 sample leans red, the 0.75 sample leans blue.
        assert!(a.0 > a.2);
        assert!(b.2 > b.0);
        assert!(a.0 > b.0);
    }

    #[test]
    fn test_evenly_spaced_gradient() {
        let g = Gradient::evenly_spaced(&[Color::RED, Color::WHITE, Color::BLUE]).unwrap();
        let positions: Vec<f32> = g.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
        assert_eq!(
            Gradient::evenly_spaced(&[Color::RED]),
            Err(GradientError::TooFewStops(1))
        );
    }

    #[test]
    fn test_easing_endpoints() {
        let curves = [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::FAST_OUT_SLOW_IN,
        ];
        for e in curves {
            assert!(e.interpolate(0.0).abs() < 1e-4, "{e:?}");
            assert!((e.interpolate(1.0) - 1.0).abs() < 1e-4, "{e:?}");
        }
    }

    #[test]
    fn test_spring_settles_near_one() {
        let e = Easing::Spring {
            damping: 10.0,
            stiffness: 100.0,
        };
        assert!(e.interpolate(0.0).abs() < 1e-4);
        assert!(e.interpolate(0.5) > 0.0);
        let critical = Easing::Spring {
            damping: 40.0,
            stiffness: 10.0,
        };
        assert!((critical.interpolate(1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_cubic_bezier_is_monotonic() {
        let e = Easing::FAST_OUT_SLOW_IN;
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = e.interpolate(i as f32 / 20.0);
            assert!(v >= prev - 1e-4);
            prev = v;
        }
        // Linear control points reduce to identity.
        let lin = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        assert!((lin.interpolate(0.4) - 0.4).abs() < 1e-3);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = ManualClock::new(Instant::now());

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, clock.now());
        clock.advance(Duration::from_millis(250));
        assert!(a.update(clock.now()));
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update(clock.now());
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
        assert!(!a.update(clock.now()));
    }

    #[test]
    fn test_animation_zero_duration_pins_immediately() {
        let clock = ManualClock::new(Instant::now());
        let mut a = AnimatedValue::new(1.0f32, AnimationSpec::none());
        a.set_target(3.0, clock.now());
        assert!(!a.is_animating());
        assert_eq!(*a.get(), 3.0);
    }

    #[test]
    fn test_animation_delay_holds_start() {
        let clock = ManualClock::new(Instant::now());
        let spec = AnimationSpec::tween(Duration::from_millis(100), Easing::Linear)
            .with_delay(Duration::from_millis(50));
        let mut a = AnimatedValue::new(0.0f32, spec);
        a.set_target(1.0, clock.now());
        clock.advance(Duration::from_millis(40));
        assert!(a.update(clock.now()));
        assert_eq!(*a.get(), 0.0);
        clock.advance(Duration::from_millis(60));
        assert!(a.update(clock.now()));
        assert!((*a.get() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_retarget_from_previous_target() {
        let clock = ManualClock::new(Instant::now());
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.set_target(4.0, clock.now());
        clock.advance(Duration::from_millis(50));
        a.update(clock.now());
        assert!((*a.get() - 2.0).abs() < 0.01);

        a.set_target(8.0, clock.now());
        // Jumps to the old target and heads for the new one from there.
        assert_eq!(*a.get(), 4.0);
        clock.advance(Duration::from_millis(50));
        a.update(clock.now());
        assert!((*a.get() - 6.0).abs() < 0.01);
    }

    #[test]
    fn test_timing_change_restarts_from_current_value() {
        let clock = ManualClock::new(Instant::now());
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, clock.now());
        clock.advance(Duration::from_millis(500));
        a.update(clock.now());
        assert!((*a.get() - 5.0).abs() < 0.01);

        a.set_spec(
            AnimationSpec::tween(Duration::from_millis(2000), Easing::Linear),
            clock.now(),
        );
        assert!((*a.get() - 5.0).abs() < 0.01);
        assert_eq!(*a.target(), 10.0);
        clock.advance(Duration::from_millis(1000));
        assert!(a.update(clock.now()));
        assert!((*a.get() - 7.5).abs() < 0.01);

        a.set_spec(AnimationSpec::none(), clock.now());
        assert!(!a.is_animating());
        assert_eq!(*a.get(), 10.0);
    }

    #[test]
    fn test_timing_change_while_idle_keeps_value() {
        let clock = ManualClock::new(Instant::now());
        let mut a = AnimatedValue::new(3.0f32, AnimationSpec::none());
        a.set_spec(
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
            clock.now(),
        );
        assert!(!a.is_animating());
        assert_eq!(*a.get(), 3.0);
        a.set_target(5.0, clock.now());
        clock.advance(Duration::from_millis(50));
        a.update(clock.now());
        assert!((*a.get() - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_retarget_from_current_value() {
        let clock = ManualClock::new(Instant::now());
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        )
        .with_policy(RestartPolicy::FromCurrentValue);
        a.set_target(4.0, clock.now());
        clock.advance(Duration::from_millis(50));
        a.update(clock.now());

        a.set_target(8.0, clock.now());
        assert!((*a.get() - 2.0).abs() < 0.01);
        clock.advance(Duration::from_millis(50));
        a.update(clock.now());
        assert!((*a.get() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_corner_radii_mapping() {
        let h = CornerRadii::from_corners(Corners::LEADING, 3.0, false);
        assert_eq!(
            h,
            CornerRadii {
                top_left: 3.0,
                top_right: 0.0,
                bottom_right: 0.0,
                bottom_left: 3.0,
            }
        );
        let v = CornerRadii::from_corners(Corners::TRAILING, 3.0, true);
        assert_eq!(
            v,
            CornerRadii {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: 3.0,
                bottom_left: 3.0,
            }
        );
        assert_eq!(
            CornerRadii::from_corners(Corners::all(), 2.0, false),
            CornerRadii::uniform(2.0)
        );
        assert!(CornerRadii::from_corners(Corners::empty(), 2.0, true).is_zero());
    }
}
