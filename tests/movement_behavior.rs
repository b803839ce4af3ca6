//! End-to-end movement tests: scripted input through the scene update.

use macroquad::prelude::RED;
use macroquad::math::{vec2, Vec2};
use sidestep::{
    Actor, Bounds, FrameInput, FrameOutcome, InputSource, Key, MovementPolicy, MovementSettings,
    Obstacle, PointerState, Scene, SidestepResult,
};
use std::collections::HashSet;

/// Input source that reports a fixed set of held keys and pointer state.
#[derive(Default)]
struct ScriptedInput {
    held: HashSet<Key>,
    pointer: PointerState,
}

impl ScriptedInput {
    fn holding(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            pointer: PointerState::default(),
        }
    }

    fn clicking(mut self, at: Vec2) -> Self {
        self.pointer = PointerState {
            button_down: true,
            position: at,
        };
        self
    }

    fn frame(&self) -> FrameInput {
        FrameInput::capture(self)
    }
}

impl InputSource for ScriptedInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn pointer(&self) -> PointerState {
        self.pointer
    }
}

fn build_scene(policy: MovementPolicy, actor: Bounds, walls: &[Bounds]) -> SidestepResult<Scene> {
    let obstacles = walls.iter().map(|b| Obstacle::new(*b, RED)).collect();
    let settings = MovementSettings {
        policy,
        move_speed: 2.0,
        rotation_speed: 2.0,
    };
    Scene::new(Actor::new(actor), obstacles, settings)
}

#[test]
fn test_diagonal_into_wall_keeps_vertical_motion() -> SidestepResult<()> {
    // Wall directly to the right, open space below
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[Bounds::new(133.0, 60.0, 40.0, 200.0)],
    )?;

    let input = ScriptedInput::holding(&[Key::Right, Key::Down]);
    scene.advance(&input.frame());

    assert_eq!(scene.actor().position(), vec2(100.0, 102.0));
    Ok(())
}

#[test]
fn test_vertical_check_uses_resolved_horizontal_position() -> SidestepResult<()> {
    // Corner block below-right: clear at the frame-start X, hit at the moved X
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(0.0, 0.0, 32.0, 32.0),
        &[Bounds::new(33.0, 33.0, 32.0, 32.0)],
    )?;

    let input = ScriptedInput::holding(&[Key::Right, Key::Down]);
    scene.advance(&input.frame());

    assert_eq!(scene.actor().position(), vec2(2.0, 0.0));
    Ok(())
}

#[test]
fn test_actor_slides_until_flush_with_wall() -> SidestepResult<()> {
    let wall = Bounds::new(140.0, 0.0, 20.0, 400.0);
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[wall],
    )?;

    let input = ScriptedInput::holding(&[Key::Right]);
    for _ in 0..20 {
        scene.advance(&input.frame());
        assert!(!scene.is_blocked(&scene.actor().bounds));
    }

    // Touching is allowed, overlapping is not
    assert_eq!(scene.actor().bounds.right(), wall.x);
    Ok(())
}

#[test]
fn test_seek_lands_exactly_on_target() -> SidestepResult<()> {
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[],
    )?;

    scene.advance(&ScriptedInput::default().clicking(vec2(101.5, 110.0)).frame());
    assert_eq!(scene.actor().bounds.x, 101.5);

    let idle = ScriptedInput::default();
    for _ in 0..10 {
        scene.advance(&idle.frame());
        assert_eq!(scene.actor().bounds.x, 101.5);
    }
    assert_eq!(scene.actor().position(), vec2(101.5, 110.0));
    assert!(!scene.actor().seeking_target);
    Ok(())
}

#[test]
fn test_seek_around_obstacle_keeps_free_axis() -> SidestepResult<()> {
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(0.0, 0.0, 32.0, 32.0),
        &[Bounds::new(40.0, 0.0, 32.0, 32.0)],
    )?;

    scene.advance(&ScriptedInput::default().clicking(vec2(100.0, 100.0)).frame());
    let idle = ScriptedInput::default();
    for _ in 0..100 {
        scene.advance(&idle.frame());
        assert!(!scene.is_blocked(&scene.actor().bounds));
    }

    // X was held back until Y cleared the obstacle, then both reached the target
    assert_eq!(scene.actor().position(), vec2(100.0, 100.0));
    Ok(())
}

#[test]
fn test_keyboard_overrides_previous_target() -> SidestepResult<()> {
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[],
    )?;

    scene.advance(&ScriptedInput::default().clicking(vec2(300.0, 100.0)).frame());
    assert!(scene.actor().seeking_target);
    assert_eq!(scene.actor().position(), vec2(102.0, 100.0));

    scene.advance(&ScriptedInput::holding(&[Key::Up]).frame());
    assert!(!scene.actor().seeking_target);
    assert_eq!(scene.actor().position(), vec2(102.0, 98.0));

    // The old target is not resumed
    scene.advance(&ScriptedInput::default().frame());
    assert_eq!(scene.actor().position(), vec2(102.0, 98.0));
    Ok(())
}

#[test]
fn test_click_while_moving_resumes_seek_same_frame() -> SidestepResult<()> {
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[],
    )?;

    let input = ScriptedInput::holding(&[Key::Left]).clicking(vec2(100.0, 200.0));
    scene.advance(&input.frame());

    assert!(scene.actor().seeking_target);
    // Keyboard moved X left, then the seek pass moved it back and stepped Y
    assert_eq!(scene.actor().position(), vec2(100.0, 102.0));
    Ok(())
}

#[test]
fn test_heading_diagonal_rollback_is_all_or_nothing() -> SidestepResult<()> {
    let mut scene = build_scene(
        MovementPolicy::Heading,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[Bounds::new(133.0, 60.0, 40.0, 200.0)],
    )?;
    scene.set_heading(45.0);

    scene.advance(&ScriptedInput::holding(&[Key::Up]).frame());

    assert_eq!(scene.actor().position(), vec2(100.0, 100.0));
    Ok(())
}

#[test]
fn test_heading_turns_and_drives() -> SidestepResult<()> {
    let mut scene = build_scene(
        MovementPolicy::Heading,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[],
    )?;

    // 45 frames at 2 degrees per frame points straight down
    let turn = ScriptedInput::holding(&[Key::Right]);
    for _ in 0..45 {
        scene.advance(&turn.frame());
    }
    assert_eq!(scene.actor().angle, 90.0);

    scene.advance(&ScriptedInput::holding(&[Key::Up]).frame());
    let position = scene.actor().position();
    assert!((position.x - 100.0).abs() < 1e-3);
    assert!((position.y - 102.0).abs() < 1e-3);

    scene.advance(&ScriptedInput::holding(&[Key::Down]).frame());
    let position = scene.actor().position();
    assert!((position.y - 100.0).abs() < 1e-3);
    Ok(())
}

#[test]
fn test_quit_key_stops_without_moving() -> SidestepResult<()> {
    let mut scene = build_scene(
        MovementPolicy::AxisSeparated,
        Bounds::new(100.0, 100.0, 32.0, 32.0),
        &[],
    )?;

    let input = ScriptedInput::holding(&[Key::Quit, Key::Right]).clicking(vec2(0.0, 0.0));
    assert_eq!(scene.advance(&input.frame()), FrameOutcome::Terminate);
    assert_eq!(scene.actor().position(), vec2(100.0, 100.0));
    assert!(!scene.actor().seeking_target);
    Ok(())
}
