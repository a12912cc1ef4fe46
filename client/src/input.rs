use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::view::Screen;

/// What the player asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Play the next mark on a cell (0-8)
    Play(usize),
    JumpTo(usize),
    StepBack,
    StepForward,
    JumpToStart,
    JumpToLatest,
    ToggleOrder,
    Quit,
}

/// Translate a terminal event, resolving clicks against the screen on display
pub fn map_event(event: &Event, screen: &Screen) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, screen),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|digit| Action::Play(digit as usize - 1)),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => Some(Action::StepBack),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => Some(Action::StepForward),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::JumpToStart),
        KeyCode::End | KeyCode::Char('G') => Some(Action::JumpToLatest),
        KeyCode::Char('r') => Some(Action::ToggleOrder),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, screen: &Screen) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => screen.target_at(mouse.column, mouse.row),
        _ => None,
    }
}
