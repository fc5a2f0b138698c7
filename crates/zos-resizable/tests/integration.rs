//! Integration tests for InteractionEngine
//!
//! These tests drive the engine the way a host would:
//! - Reference resize/drag scenarios
//! - Full pointer-down → move → up cycles with the host applying updates
//! - Boundary clamping through the public API
//! - Flag exclusivity over arbitrary event sequences

use proptest::prelude::*;
use zos_resizable::{
    BoundaryConfig, CursorHint, GesturePhase, InteractionEngine, InteractionUpdate, OuterBoundary, Rect,
    ResizeHandle, Vec2,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Minimal host: keeps the surface rect and applies every update to it
struct Host {
    engine: InteractionEngine,
    rect: Rect,
    resizing: bool,
    dragging: bool,
}

impl Host {
    fn new(config: BoundaryConfig, rect: Rect) -> Self {
        Self {
            engine: InteractionEngine::new(config).unwrap(),
            rect,
            resizing: false,
            dragging: false,
        }
    }

    fn apply(&mut self, update: InteractionUpdate) -> InteractionUpdate {
        self.rect = update.apply(self.rect);
        if let Some(resizing) = update.resizing {
            self.resizing = resizing;
        }
        if let Some(dragging) = update.dragging {
            self.dragging = dragging;
        }
        update
    }

    fn down(&mut self, x: f32, y: f32) -> InteractionUpdate {
        let update = self.engine.on_pointer_down(Vec2::new(x, y), self.rect);
        self.apply(update)
    }

    fn moved(&mut self, x: f32, y: f32) -> InteractionUpdate {
        let update = self.engine.on_pointer_move(Vec2::new(x, y), self.rect);
        self.apply(update)
    }

    fn up(&mut self) -> InteractionUpdate {
        let update = self.engine.on_pointer_up();
        self.apply(update)
    }
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_scenario_left_edge_resize() {
    init_logging();
    let mut host = Host::new(BoundaryConfig::default(), Rect::new(100.0, 100.0, 200.0, 100.0));

    host.down(100.0, 150.0);
    assert_eq!(host.engine.phase(), GesturePhase::Resizing(ResizeHandle::Left));

    let update = host.moved(130.0, 150.0);
    assert_eq!(update.left, Some(130.0));
    assert_eq!(update.width, Some(170.0));
    assert_eq!(update.top, None);
    assert_eq!(update.height, None);
}

#[test]
fn test_scenario_right_edge_clamped() {
    init_logging();
    let config = BoundaryConfig::default().with_outer(OuterBoundary {
        right: Some(250.0),
        ..OuterBoundary::UNBOUNDED
    });
    let mut host = Host::new(config, Rect::new(100.0, 100.0, 200.0, 100.0));

    host.down(298.0, 150.0);
    assert_eq!(host.engine.phase(), GesturePhase::Resizing(ResizeHandle::Right));

    let update = host.moved(400.0, 150.0);
    assert_eq!(update.width, Some(150.0));
}

#[test]
fn test_scenario_interior_drag() {
    init_logging();
    let mut host = Host::new(BoundaryConfig::default(), Rect::new(0.0, 0.0, 50.0, 50.0));

    let update = host.down(25.0, 25.0);
    assert_eq!(host.engine.phase(), GesturePhase::Dragging);
    assert_eq!(update.dragging, Some(true));
    assert_eq!(update.resizing, None);

    let update = host.moved(40.0, 40.0);
    assert_eq!(update.left, Some(15.0));
    assert_eq!(update.top, Some(15.0));
}

#[test]
fn test_scenario_up_without_down() {
    init_logging();
    let mut engine = InteractionEngine::default();

    let update = engine.on_pointer_up();
    assert!(update.is_empty());
    assert_eq!(engine.phase(), GesturePhase::Idle);
}

// =============================================================================
// Full Gesture Cycles
// =============================================================================

#[test]
fn test_corner_resize_cycle() {
    init_logging();
    let mut host = Host::new(BoundaryConfig::default(), Rect::new(100.0, 100.0, 200.0, 100.0));

    let update = host.down(297.0, 102.0);
    assert_eq!(host.engine.phase(), GesturePhase::Resizing(ResizeHandle::TopRight));
    assert_eq!(update.cursor, Some(CursorHint::NeswResize));
    assert_eq!(update.translucent, Some(true));
    assert!(host.resizing);

    host.moved(317.0, 82.0);
    host.moved(337.0, 62.0);
    assert_eq!(host.rect, Rect::new(60.0, 100.0, 240.0, 140.0));

    let update = host.up();
    assert_eq!(update.top, Some(60.0));
    assert_eq!(update.left, Some(100.0));
    assert_eq!(update.translucent, Some(false));
    assert!(!host.resizing);
    assert!(host.engine.phase().is_idle());
}

#[test]
fn test_drag_cycle_inside_box() {
    init_logging();
    let config = BoundaryConfig::default().with_outer(OuterBoundary {
        top: Some(0.0),
        right: Some(800.0),
        bottom: Some(600.0),
        left: Some(0.0),
    });
    let mut host = Host::new(config, Rect::new(100.0, 100.0, 200.0, 100.0));

    host.down(200.0, 150.0);
    host.moved(1200.0, 1150.0);
    assert_eq!(host.rect, Rect::new(500.0, 600.0, 200.0, 100.0));

    host.moved(-900.0, -900.0);
    assert_eq!(host.rect, Rect::new(0.0, 0.0, 200.0, 100.0));

    let update = host.up();
    assert_eq!(update.top, Some(0.0));
    assert_eq!(update.left, Some(0.0));
    assert_eq!(update.dragging, Some(false));
}

#[test]
fn test_top_overshoot_keeps_last_top() {
    init_logging();
    let mut host = Host::new(BoundaryConfig::default(), Rect::new(100.0, 100.0, 200.0, 100.0));

    host.down(200.0, 102.0);
    host.moved(200.0, 152.0);
    assert_eq!(host.rect.top, 150.0);
    assert_eq!(host.rect.height, 50.0);

    // crossing the bottom edge collapses the height but leaves top alone
    let update = host.moved(200.0, 302.0);
    assert_eq!(update.top, None);
    assert_eq!(update.height, Some(0.0));
    assert_eq!(host.rect.top, 150.0);

    let update = host.up();
    assert_eq!(update.top, Some(150.0));
}

#[test]
fn test_cursor_feedback_while_idle() {
    init_logging();
    let mut host = Host::new(BoundaryConfig::default(), Rect::new(100.0, 100.0, 200.0, 100.0));

    assert_eq!(host.moved(200.0, 150.0).cursor, Some(CursorHint::Move));
    assert_eq!(host.moved(200.0, 103.0).cursor, Some(CursorHint::RowResize));
    assert_eq!(host.moved(200.0, 196.0).cursor, None);
    assert_eq!(host.moved(296.0, 150.0).cursor, Some(CursorHint::ColResize));
    assert_eq!(host.moved(102.0, 197.0).cursor, Some(CursorHint::NeswResize));
    assert_eq!(host.moved(296.0, 197.0).cursor, Some(CursorHint::NwseResize));
}

#[test]
fn test_engines_are_isolated() {
    init_logging();
    let mut a = Host::new(BoundaryConfig::default(), Rect::new(0.0, 0.0, 50.0, 50.0));
    let mut b = Host::new(BoundaryConfig::default(), Rect::new(0.0, 0.0, 50.0, 50.0));

    a.down(25.0, 25.0);
    assert!(a.engine.phase().is_dragging());
    assert!(b.engine.phase().is_idle());
    assert!(b.up().is_empty());
}

#[test]
fn test_update_json_wire_shape() {
    init_logging();
    let mut host = Host::new(BoundaryConfig::default(), Rect::new(100.0, 100.0, 200.0, 100.0));

    let update = host.down(100.0, 150.0);
    let json = serde_json::to_value(update).unwrap();
    assert_eq!(json["resizing"], true);
    assert_eq!(json["translucent"], true);
    assert_eq!(json["capture"], true);
    assert_eq!(json["cursor"], "col-resize");
    assert!(json.get("dragging").is_none());
    assert!(json.get("width").is_none());
}

#[test]
fn test_config_from_host_json() {
    init_logging();
    let config: BoundaryConfig =
        serde_json::from_str(r#"{"boundarySize": 4, "resizableOnRight": false, "leftOuterBoundary": 0}"#).unwrap();
    let mut host = Host::new(config, Rect::new(100.0, 100.0, 200.0, 100.0));

    // 6px from the left edge is outside a 4px zone
    host.down(106.0, 150.0);
    assert!(host.engine.phase().is_dragging());
    host.up();

    // right edge is disabled
    host.down(298.0, 150.0);
    assert!(host.engine.phase().is_dragging());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Event {
    Down(f32, f32),
    Move(f32, f32),
    Up,
    Cancel,
}

fn event() -> impl Strategy<Value = Event> {
    let coord = || (-100i32..500).prop_map(|v| v as f32);
    prop_oneof![
        (coord(), coord()).prop_map(|(x, y)| Event::Down(x, y)),
        (coord(), coord()).prop_map(|(x, y)| Event::Move(x, y)),
        Just(Event::Up),
        Just(Event::Cancel),
    ]
}

proptest! {
    #[test]
    fn resize_and_drag_never_coexist(events in prop::collection::vec(event(), 1..40)) {
        let config = BoundaryConfig::default().with_outer(OuterBoundary {
            top: Some(0.0),
            right: Some(400.0),
            bottom: Some(400.0),
            left: Some(0.0),
        });
        let mut host = Host::new(config, Rect::new(100.0, 100.0, 200.0, 100.0));

        for event in events {
            let update = match event {
                Event::Down(x, y) => host.down(x, y),
                Event::Move(x, y) => host.moved(x, y),
                Event::Up => host.up(),
                Event::Cancel => {
                    let update = host.engine.on_pointer_cancel();
                    host.apply(update)
                }
            };
            prop_assert!(update.resizing != Some(true) || update.dragging != Some(true));
            prop_assert!(!(host.resizing && host.dragging));
            prop_assert_eq!(host.resizing, host.engine.phase().is_resizing());
            prop_assert_eq!(host.dragging, host.engine.phase().is_dragging());
            prop_assert!(host.rect.width >= 0.0);
            prop_assert!(host.rect.height >= 0.0);
            prop_assert!(host.rect.left >= 0.0);
            prop_assert!(host.rect.top >= 0.0);
            prop_assert!(host.rect.right() <= 400.0);
            prop_assert!(host.rect.bottom() <= 400.0);
        }
    }
}
