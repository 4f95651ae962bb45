// Frame driver compositing order and tick behaviour against a recording surface.

use glam::Vec2;
use reveal_core::{
    BlendMode, FrameDriver, Outline, PathCommand, RevealConfig, Rgba, Surface, TickOutcome, Veil,
};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Veil(Veil),
    Blend(BlendMode),
    Outline { commands: usize, blend: BlendMode },
    Circle { alpha: f32, blend: BlendMode },
}

#[derive(Default)]
struct Recorder {
    size: Option<Vec2>,
    blend: BlendMode,
    ops: Vec<Op>,
    last_outline: Option<Outline>,
}

impl Recorder {
    fn sized(w: f32, h: f32) -> Self {
        Self {
            size: Some(Vec2::new(w, h)),
            ..Self::default()
        }
    }

    fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Circle { .. }))
            .count()
    }
}

impl Surface for Recorder {
    fn size(&self) -> Option<Vec2> {
        self.size
    }
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(Op::Clear);
    }
    fn paint_veil(&mut self, veil: &Veil) {
        self.ops.push(Op::Veil(*veil));
    }
    fn set_blend(&mut self, mode: BlendMode) {
        self.blend = mode;
        self.ops.push(Op::Blend(mode));
    }
    fn fill_outline(&mut self, outline: &Outline, _color: Rgba) {
        self.ops.push(Op::Outline {
            commands: outline.commands().len(),
            blend: self.blend,
        });
        self.last_outline = Some(outline.clone());
    }
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, color: Rgba) {
        self.ops.push(Op::Circle {
            alpha: color.a,
            blend: self.blend,
        });
    }
}

fn driver() -> FrameDriver {
    FrameDriver::new(RevealConfig::default(), Vec2::new(640.0, 360.0)).unwrap()
}

#[test]
fn tick_composites_in_fixed_order() {
    let mut d = driver();
    let mut s = Recorder::sized(1280.0, 720.0);
    // keep moving so particles exist and are drawn
    for i in 1..=5 {
        d.set_pointer(Vec2::new(640.0 + 10.0 * i as f32, 360.0));
        assert_eq!(d.tick(&mut s), TickOutcome::Rendered);
    }
    assert!(s.circles() > 0);

    assert_eq!(s.ops[0], Op::Clear);
    assert!(matches!(s.ops[1], Op::Veil(_)));
    assert_eq!(s.ops[2], Op::Blend(BlendMode::Erase));
    assert_eq!(
        s.ops[3],
        Op::Outline {
            commands: 32 + 2,
            blend: BlendMode::Erase
        }
    );
    assert_eq!(s.ops[4], Op::Blend(BlendMode::Over));
    for op in &s.ops[5..] {
        match op {
            Op::Circle { alpha, blend } => {
                assert_eq!(*blend, BlendMode::Over, "particles must not erase");
                assert!(*alpha > 0.0 && *alpha <= 0.7);
            }
            other => panic!("unexpected op after particles started: {other:?}"),
        }
    }
}

#[test]
fn veil_follows_pointer_and_surface_width() {
    let mut d = driver();
    let mut s = Recorder::sized(1000.0, 500.0);
    d.set_pointer(Vec2::new(120.0, 80.0));
    d.tick(&mut s);
    let Op::Veil(veil) = &s.ops[1] else {
        panic!("expected veil");
    };
    assert_eq!(veil.center, Vec2::new(120.0, 80.0));
    assert_eq!(veil.inner_radius, 100.0);
    assert!((veil.outer_radius - 800.0).abs() < 1e-3);
    assert_eq!(veil.inner_color, Rgba::rgb(0xff, 0xa5, 0x00));

    // resized between ticks
    s.size = Some(Vec2::new(500.0, 500.0));
    d.tick(&mut s);
    let Op::Veil(veil) = &s.ops[1] else {
        panic!("expected veil");
    };
    assert!((veil.outer_radius - 400.0).abs() < 1e-3);
}

#[test]
fn outline_is_centered_on_pointer() {
    let mut d = driver();
    let mut s = Recorder::sized(800.0, 600.0);
    d.set_pointer(Vec2::new(300.0, 200.0));
    for _ in 0..300 {
        d.tick(&mut s);
    }
    let outline = s.last_outline.clone().unwrap();
    let PathCommand::MoveTo(start) = outline.commands()[0] else {
        panic!("expected MoveTo");
    };
    // midpoint of anchors 0 and 1 on an 800px ring around the pointer
    let expected = Vec2::new(300.0, 200.0)
        + (Vec2::new(800.0, 0.0)
            + Vec2::new(
                (std::f32::consts::TAU / 32.0).cos(),
                (std::f32::consts::TAU / 32.0).sin(),
            ) * 800.0)
            * 0.5;
    assert!((start - expected).length() < 0.5, "start at {start}");
}

#[test]
fn rightward_motion_leaves_trailing_particles() {
    let mut d = driver();
    let mut s = Recorder::sized(1920.0, 1080.0);
    let mut x = 640.0;
    for _ in 0..10 {
        x += 10.0;
        d.set_pointer(Vec2::new(x, 360.0));
        d.tick(&mut s);
    }
    let particles = d.emitter().particles();
    assert!(!particles.is_empty());
    assert!(particles.len() <= 25);
    assert!(particles.iter().all(|p| p.velocity.x < 0.0));
}

#[test]
fn still_pointer_spawns_nothing() {
    let mut d = driver();
    let mut s = Recorder::sized(800.0, 600.0);
    for _ in 0..50 {
        d.tick(&mut s);
    }
    assert!(d.emitter().is_empty());
    assert_eq!(s.circles(), 0);
    assert!(d.boundary().max_home_distance() < 1e-3);
}

#[test]
fn missing_or_empty_surface_skips_tick() {
    let mut d = driver();
    let mut s = Recorder::default();
    d.set_pointer(Vec2::new(900.0, 360.0));
    assert_eq!(d.tick(&mut s), TickOutcome::Skipped);
    assert!(s.ops.is_empty());
    assert_eq!(d.ticks(), 0);
    assert_eq!(d.pointer().position(), Vec2::new(900.0, 360.0));
    assert_eq!(d.boundary().max_home_distance(), 0.0);

    s.size = Some(Vec2::new(0.0, 720.0));
    assert_eq!(d.tick(&mut s), TickOutcome::Skipped);
    assert!(s.ops.is_empty());

    // the jump made while hidden does not burst into motion afterwards
    s.size = Some(Vec2::new(1280.0, 720.0));
    assert_eq!(d.tick(&mut s), TickOutcome::Rendered);
    assert_eq!(d.ticks(), 1);
    assert!(d.emitter().is_empty());
    assert!(d.boundary().max_home_distance() < 1e-3);
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = RevealConfig::default();
    cfg.boundary.anchor_count = 1;
    assert!(FrameDriver::new(cfg, Vec2::ZERO).is_err());
}
