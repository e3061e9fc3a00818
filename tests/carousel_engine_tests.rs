//! Carousel Engine Tests
//!
//! Tests for:
//! - construction invariants (zero cards refused)
//! - recompute idempotence and advance additivity
//! - drag/throw scaling through the shared sensitivity constant
//! - the cancelable auto-rotate handle
//! - resize-driven radius recomputation

use conveyor::carousel::{
    CarouselEngine, DragEvent, RecordingSink, AUTO_ROTATE_STEP, DRAG_SENSITIVITY,
};
use conveyor::errors::ConveyorError;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn zero_cards_is_refused() {
    let result = CarouselEngine::new(0, 1280.0);
    assert!(matches!(result, Err(ConveyorError::EmptyCarousel)));
}

#[test]
fn construction_derives_spacing_and_radius() {
    let engine = CarouselEngine::new(6, 1280.0).unwrap();
    assert_eq!(engine.card_count(), 6);
    assert!(approx(engine.angle_step(), std::f32::consts::TAU / 6.0));
    // 1280 ≥ 1200 → fixed desktop radius.
    assert!(approx(engine.radius(), 1000.0));
    assert_eq!(engine.rotation(), 0.0);
}

// ============================================================================
// Recompute: idempotence
// ============================================================================

#[test]
fn recompute_is_idempotent() {
    let mut engine = CarouselEngine::new(6, 900.0).unwrap();
    let mut sink = RecordingSink::new();

    engine.recompute_layout(&mut sink);
    let first = sink.snapshot();

    engine.recompute_layout(&mut sink);
    let second = sink.snapshot();

    // Bit-identical, not merely approximately equal.
    assert_eq!(first, second);
    assert_eq!(sink.applied(), 12);
}

// ============================================================================
// Advance: additivity and accumulation
// ============================================================================

#[test]
fn advance_accumulates_additively() {
    let mut split = CarouselEngine::new(5, 900.0).unwrap();
    let mut combined = CarouselEngine::new(5, 900.0).unwrap();
    let mut sink_a = RecordingSink::new();
    let mut sink_b = RecordingSink::new();

    split.advance(0.1, &mut sink_a);
    split.advance(0.25, &mut sink_a);
    combined.advance(0.35, &mut sink_b);

    assert!(approx(split.rotation(), combined.rotation()));
    for i in 0..5 {
        let a = split.transform_of(i);
        let b = combined.transform_of(i);
        assert!(approx(a.x, b.x), "card {i} x diverged");
        assert!(approx(a.scale, b.scale));
        assert!(approx(a.opacity, b.opacity));
    }
}

#[test]
fn rotation_is_unbounded() {
    let mut engine = CarouselEngine::new(4, 900.0).unwrap();
    let mut sink = RecordingSink::new();

    // Many full revolutions: no wrap, no clamp, layout still sane.
    for _ in 0..10_000 {
        engine.advance(-AUTO_ROTATE_STEP, &mut sink);
    }
    assert!(engine.rotation() < -60.0);
    let t = engine.transform_of(0);
    assert!((0.6 - EPSILON..=1.4 + EPSILON).contains(&t.scale));
    assert!((0.1..=1.0 + EPSILON).contains(&t.opacity));
}

// ============================================================================
// Drag scaling
// ============================================================================

#[test]
fn drag_of_hundred_pixels_advances_point_three_radians() {
    let mut engine = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    engine.apply_drag(DragEvent::Drag { delta_x: 100.0 }, &mut sink);
    assert_eq!(engine.rotation(), 100.0 * DRAG_SENSITIVITY);
}

#[test]
fn throw_uses_the_same_scaling_as_drag() {
    let mut dragged = CarouselEngine::new(6, 1280.0).unwrap();
    let mut thrown = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    dragged.apply_drag(DragEvent::Drag { delta_x: -42.0 }, &mut sink);
    thrown.apply_drag(DragEvent::Throw { delta_x: -42.0 }, &mut sink);
    assert_eq!(dragged.rotation(), thrown.rotation());
}

// ============================================================================
// Auto-rotate handle
// ============================================================================

#[test]
fn tick_without_handle_is_inert() {
    let mut engine = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    engine.tick(&mut sink);
    assert_eq!(engine.rotation(), 0.0);
    assert_eq!(sink.applied(), 0);
}

#[test]
fn tick_advances_while_handle_is_alive() {
    let mut engine = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    let handle = engine.start_auto_rotate();
    assert!(handle.is_active());

    engine.tick(&mut sink);
    engine.tick(&mut sink);
    assert!(approx(engine.rotation(), -2.0 * AUTO_ROTATE_STEP));
}

#[test]
fn stopping_the_handle_halts_the_advance() {
    let mut engine = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    let handle = engine.start_auto_rotate();
    engine.tick(&mut sink);
    let after_one = engine.rotation();

    handle.stop();
    assert!(!handle.is_active());
    engine.tick(&mut sink);
    assert_eq!(engine.rotation(), after_one);
}

#[test]
fn dropping_the_handle_halts_the_advance() {
    let mut engine = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    let handle = engine.start_auto_rotate();
    engine.tick(&mut sink);
    let after_one = engine.rotation();

    drop(handle);
    engine.tick(&mut sink);
    assert_eq!(engine.rotation(), after_one);

    // A fresh handle resumes the advance.
    let _handle = engine.start_auto_rotate();
    engine.tick(&mut sink);
    assert!(approx(engine.rotation(), after_one - AUTO_ROTATE_STEP));
}

#[test]
fn stale_stopped_handle_cannot_cancel_a_fresh_one() {
    let mut engine = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    let old = engine.start_auto_rotate();
    old.stop();

    let fresh = engine.start_auto_rotate();
    drop(old);

    // The defunct handle controls only its own flag; the fresh one still
    // drives the advance.
    assert!(fresh.is_active());
    engine.tick(&mut sink);
    assert!(approx(engine.rotation(), -AUTO_ROTATE_STEP));
}

#[test]
fn dropping_a_stale_active_handle_does_not_cancel_its_successor() {
    let mut engine = CarouselEngine::new(6, 1280.0).unwrap();
    let mut sink = RecordingSink::new();

    let old = engine.start_auto_rotate();
    let fresh = engine.start_auto_rotate();
    drop(old);

    assert!(fresh.is_active());
    engine.tick(&mut sink);
    assert!(approx(engine.rotation(), -AUTO_ROTATE_STEP));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn resize_recomputes_radius_and_layout() {
    let mut engine = CarouselEngine::new(6, 1400.0).unwrap();
    let mut sink = RecordingSink::new();
    assert!(approx(engine.radius(), 1000.0));

    engine.on_resize(500.0, &mut sink);
    assert!(approx(engine.radius(), 225.0));

    // The applied layout reflects the new radius immediately.
    let front = sink.get(0).copied().unwrap();
    assert!(approx(front.x, 0.0));
    assert_eq!(front.stack_order, 225);
}

#[test]
fn resize_preserves_rotation() {
    let mut engine = CarouselEngine::new(6, 1400.0).unwrap();
    let mut sink = RecordingSink::new();

    engine.advance(0.5, &mut sink);
    engine.on_resize(900.0, &mut sink);
    assert!(approx(engine.rotation(), 0.5));
}
