use std::ops::ControlFlow;

use crossterm::event;
use tracing::{debug, info};
use tris_common::{Game, MoveResult};

use crate::config::Config;
use crate::error::Result;
use crate::input::{self, Action};
use crate::ui::Terminal;
use crate::view;

/// Render, wait for one event, apply it; until the player quits
pub fn run(config: &Config) -> Result<()> {
    let mut terminal = Terminal::enter(config.mouse)?;
    let mut game = Game::with_order(config.order);
    info!(order = %config.order, mouse = config.mouse, "Game started");

    loop {
        let screen = view::render(&game);
        terminal.draw(&screen)?;

        let event = event::read()?;
        let Some(action) = input::map_event(&event, &screen) else {
            continue;
        };

        if dispatch(&mut game, action).is_break() {
            break;
        }
    }

    info!(moves = game.history().last_step(), status = %game.status(), "Game closed");
    Ok(())
}

/// Apply one action to the game
pub fn dispatch(game: &mut Game, action: Action) -> ControlFlow<()> {
    debug!(?action, step = game.step(), "Dispatching");

    match action {
        Action::Play(index) => {
            if let MoveResult::Accepted { step, mark } = game.apply_move(index) {
                info!(index, %mark, step, status = %game.status(), "Move played");
            }
        }
        Action::JumpTo(step) => {
            game.jump_to(step);
        }
        Action::StepBack => {
            game.step_back();
        }
        Action::StepForward => {
            game.step_forward();
        }
        Action::JumpToStart => {
            game.jump_to(0);
        }
        Action::JumpToLatest => {
            game.jump_to_latest();
        }
        Action::ToggleOrder => game.toggle_order(),
        Action::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}
