use std::fmt::Write as _;

use web_time::Instant;

use stepbar::{IndicatorConfig, StepFrame, segment_rect};
use stepbar_core::{Brush, Color, Rect, Scene, SceneNode};

fn hex(c: Color) -> String {
    format!("#{:02X}{:02X}{:02X}{:02X}", c.0, c.1, c.2, c.3)
}

fn brush_label(b: &Brush) -> String {
    match b {
        Brush::Solid(c) => format!("solid {}", hex(*c)),
        Brush::Linear {
            start_color,
            end_color,
            ..
        } => format!("linear {}->{}", hex(*start_color), hex(*end_color)),
    }
}

/// One header line, then one line per segment.
pub fn describe(frame: &StepFrame) -> String {
    let mut out = format!(
        "{:?} value={:.2} length={:.1} cross={:.1}",
        frame.strategy, frame.animated_value, frame.available_length, frame.cross_extent
    );
    for s in &frame.segments {
        let _ = write!(
            out,
            "\n#{} @{:.1} len={:.1} size={:.1} fill={:.2} {}",
            s.index,
            s.offset,
            s.length,
            s.size,
            s.fill_fraction,
            brush_label(&s.brush)
        );
        if let Some(r) = &s.remainder {
            let _ = write!(out, " rest={}", brush_label(r));
        }
        for (on, flag) in [
            (s.is_first, "first"),
            (s.is_last, "last"),
            (s.is_only_step, "only"),
            (s.content.is_some(), "content"),
            (s.on_activate.is_some(), "tap"),
        ] {
            if on {
                out.push(' ');
                out.push_str(flag);
            }
        }
    }
    out
}

pub struct Hud {
    pub inspector_enabled: bool,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
    pub metrics: Option<Metrics>,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            inspector_enabled: false,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
            metrics: None,
        }
    }
    pub fn toggle_inspector(&mut self) {
        self.inspector_enabled = !self.inspector_enabled;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.fps_smooth
    }

    /// Counts a frame shown at `now`.
    pub fn record_frame(&mut self, now: Instant) {
        self.frame_count += 1;
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = now.saturating_duration_since(prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }
    }

    /// Outlines every segment and adds a stats line above `bounds`.
    pub fn overlay(
        &self,
        scene: &mut Scene,
        frame: &StepFrame,
        bounds: Rect,
        config: &IndicatorConfig,
    ) {
        for seg in &frame.segments {
            let color = if seg.is_partial() {
                Color::from_hex("#FFAA44")
            } else {
                Color::from_hex("#44AAFF")
            };
            scene.nodes.push(SceneNode::Border {
                rect: segment_rect(seg, bounds, config.axis),
                color,
                width: 1.0,
                radius: 0.0,
            });
        }

        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
            format!("{:?} @ {:.2}", frame.strategy, frame.animated_value),
        ];
        if let Some(m) = &self.metrics {
            lines.push(format!("plan: {:.2} ms", m.plan_ms));
            lines.push(format!("nodes: {}", m.scene_nodes));
        }
        scene.nodes.push(SceneNode::Text {
            rect: Rect {
                x: bounds.x,
                y: bounds.y - 18.0,
                w: 240.0,
                h: 16.0,
            },
            text: lines.join("  |  "),
            color: Color::from_hex("#AAAAAA"),
            size: 14.0,
        });
    }
}

#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub plan_ms: f32,
    pub scene_nodes: usize,
}

pub struct Inspector {
    pub hud: Hud,
}
impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self { hud: Hud::new() }
    }

    /// Records the frame and, when enabled, draws the overlay and logs the
    /// segment dump.
    pub fn frame(
        &mut self,
        now: Instant,
        scene: &mut Scene,
        frame: &StepFrame,
        bounds: Rect,
        config: &IndicatorConfig,
    ) {
        self.hud.record_frame(now);
        if self.hud.inspector_enabled {
            log::debug!("{}", describe(frame));
            self.hud.overlay(scene, frame, bounds, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepbar::{BoxExtent, Direction, Gradient, StepIndicator, Strategy, plan_frame};
    use web_time::Duration;

    #[test]
    fn describe_optimized_frame() {
        let cfg = IndicatorConfig::new(10).padding(0.0).progress(3.0);
        let bar = StepIndicator::new(cfg).unwrap();
        let frame = bar.layout(BoxExtent::bounded(100.0, 4.0));
        insta::assert_snapshot!(describe(&frame), @r"
        Optimized value=3.00 length=100.0 cross=4.0
        #0 @0.0 len=30.0 size=4.0 fill=1.00 solid #2196F3FF first
        #1 @30.0 len=70.0 size=4.0 fill=0.00 solid #E0E0E0FF last
        ");
    }

    #[test]
    fn describe_partial_gradient_step() {
        let cfg = IndicatorConfig::new(2)
            .padding(0.0)
            .direction(Direction::Reverse)
            .gradient(Gradient::evenly_spaced(&[Color::BLACK, Color::WHITE]).unwrap());
        let frame = plan_frame(&cfg, Strategy::PerStep, 1.5, BoxExtent::bounded(20.0, 4.0));
        insta::assert_snapshot!(describe(&frame), @r"
        PerStep value=1.50 length=20.0 cross=4.0
        #0 @0.0 len=10.0 size=4.0 fill=0.50 linear #808080FF->#FFFFFFFF rest=linear #808080FF->#FFFFFFFF first
        #1 @10.0 len=10.0 size=4.0 fill=1.00 linear #000000FF->#808080FF last
        ");
    }

    #[test]
    fn hud_smooths_fps() {
        let mut hud = Hud::new();
        let t0 = Instant::now();
        hud.record_frame(t0);
        assert_eq!(hud.fps(), 0.0);
        hud.record_frame(t0 + Duration::from_millis(10));
        assert!((hud.fps() - 100.0).abs() < 0.5);
        hud.record_frame(t0 + Duration::from_millis(30));
        // 0.8 * 100 + 0.2 * 50
        assert!((hud.fps() - 90.0).abs() < 0.5);
        assert_eq!(hud.frame_count(), 3);
    }

    #[test]
    fn overlay_only_when_enabled() {
        let cfg = IndicatorConfig::new(3).progress(1.5);
        let bar = StepIndicator::new(cfg.clone()).unwrap();
        let bounds = Rect {
            x: 0.0,
            y: 20.0,
            w: 90.0,
            h: 4.0,
        };
        let frame = bar.layout(BoxExtent::bounded(bounds.w, bounds.h));
        let mut inspector = Inspector::new();

        let mut scene = Scene::default();
        inspector.frame(Instant::now(), &mut scene, &frame, bounds, &cfg);
        assert!(scene.nodes.is_empty());

        inspector.hud.toggle_inspector();
        inspector.hud.metrics = Some(Metrics {
            plan_ms: 0.1,
            scene_nodes: 8,
        });
        inspector.frame(Instant::now(), &mut scene, &frame, bounds, &cfg);
        let borders = scene
            .nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::Border { .. }))
            .count();
        assert_eq!(borders, 3);
        let Some(SceneNode::Text { text, .. }) = scene.nodes.last() else {
            panic!("expected stats text");
        };
        assert!(text.starts_with("frame: 2"));
        assert!(text.contains("nodes: 8"));
    }
}
