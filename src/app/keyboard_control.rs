use crate::{app::session::InputEvent, basic::Dir};
use ggez::input::keyboard::KeyCode;

/// Arrow keys steer, space restarts, everything else is ignored
pub fn input_event_for_key(key: KeyCode) -> Option<InputEvent> {
    use InputEvent::*;
    match key {
        KeyCode::Up => Some(DirectionPressed(Dir::Up)),
        KeyCode::Down => Some(DirectionPressed(Dir::Down)),
        KeyCode::Left => Some(DirectionPressed(Dir::Left)),
        KeyCode::Right => Some(DirectionPressed(Dir::Right)),
        KeyCode::Space => Some(RestartPressed),
        _ => None,
    }
}

#[test]
fn test_key_mapping() {
    use InputEvent::*;
    for (key, expect) in [
        (KeyCode::Up, Some(DirectionPressed(Dir::Up))),
        (KeyCode::Down, Some(DirectionPressed(Dir::Down))),
        (KeyCode::Left, Some(DirectionPressed(Dir::Left))),
        (KeyCode::Right, Some(DirectionPressed(Dir::Right))),
        (KeyCode::Space, Some(RestartPressed)),
        (KeyCode::W, None),
        (KeyCode::Escape, None),
    ] {
        assert_eq!(input_event_for_key(key), expect, "{:?}", key);
    }
}
