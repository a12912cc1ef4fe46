//! Pure layout of the game screen.
//!
//! Rendering produces plain styled text plus the clickable regions on it;
//! drawing to the terminal happens elsewhere.

use std::ops::Range;

use tris_common::{Board, Cell, Game, Mark, MoveListItem, WinningLine, BOARD_SIDE};

use crate::input::Action;

/// Visual role of a span, mapped to colors when drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Dim,
    Title,
    MarkX,
    MarkO,
    Winning,
    Button,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Plain)
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn width(&self) -> u16 {
        self.text.chars().count() as u16
    }
}

pub type Line = Vec<Span>;

/// Clickable region: one screen row, a range of columns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitTarget {
    pub row: u16,
    pub cols: Range<u16>,
    pub action: Action,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Line>,
    pub targets: Vec<HitTarget>,
}

impl Screen {
    /// Action under the given terminal cell, if any
    pub fn target_at(&self, column: u16, row: u16) -> Option<Action> {
        self.targets
            .iter()
            .find(|target| target.row == row && target.cols.contains(&column))
            .map(|target| target.action)
    }

    fn blank(&mut self) {
        self.lines.push(Vec::new());
    }

    /// Append a line, registering a target for every span that carries an action
    fn push(&mut self, spans: Vec<(Span, Option<Action>)>) {
        let row = self.lines.len() as u16;
        let mut column = 0;
        let mut line = Vec::with_capacity(spans.len());

        for (span, action) in spans {
            let width = span.width();
            if let Some(action) = action {
                self.targets.push(HitTarget {
                    row,
                    cols: column..column + width,
                    action,
                });
            }
            column += width;
            line.push(span);
        }

        self.lines.push(line);
    }
}

const MARGIN: &str = "  ";
const CELL_SEPARATOR: &str = "│";
const ROW_SEPARATOR: &str = "───┼───┼───";

/// Lay out the whole game: title, status, board, move list and order button
pub fn render(game: &Game) -> Screen {
    let mut screen = Screen::default();

    screen.blank();
    screen.push(vec![
        (Span::plain(MARGIN), None),
        (Span::styled("─── Tic Tac Toe ───", Tone::Title).bold(), None),
    ]);
    screen.blank();
    screen.push(vec![
        (Span::plain(MARGIN), None),
        (render_status(game), None),
    ]);
    screen.blank();

    render_board(&mut screen, &game.current().squares, game.winning_line());
    screen.blank();

    for (position, item) in game.move_list().iter().enumerate() {
        screen.push(render_move(position, item));
    }
    screen.blank();

    screen.push(vec![
        (Span::plain(MARGIN), None),
        (
            Span::styled(format!("[ {} ]", game.order().toggle_label()), Tone::Button),
            Some(Action::ToggleOrder),
        ),
    ]);
    screen.blank();
    screen.push(vec![
        (Span::plain(MARGIN), None),
        (
            Span::styled("click or 1-9 to play · ←/→ step · g/G start/end · r reverse · q quit", Tone::Dim),
            None,
        ),
    ]);

    screen
}

fn render_status(game: &Game) -> Span {
    let status = Span::plain(game.status());
    if game.winning_line().is_some() {
        status.bold()
    } else {
        status
    }
}

/// Three rows of squares separated by grid lines
fn render_board(screen: &mut Screen, board: &Board, winning_line: Option<WinningLine>) {
    for row in 0..BOARD_SIDE {
        let mut spans = vec![(Span::plain(MARGIN), None)];
        for col in 0..BOARD_SIDE {
            let Some(index) = Board::coords_to_index(row, col) else {
                continue;
            };
            let winning = winning_line.is_some_and(|line| line.contains(&index));
            spans.push((render_square(board.get(index), winning), Some(Action::Play(index))));
            if col + 1 < BOARD_SIDE {
                spans.push((Span::styled(CELL_SEPARATOR, Tone::Dim), None));
            }
        }
        screen.push(spans);

        if row + 1 < BOARD_SIDE {
            screen.push(vec![
                (Span::plain(MARGIN), None),
                (Span::styled(ROW_SEPARATOR, Tone::Dim), None),
            ]);
        }
    }
}

/// A single cell, three columns wide
pub fn render_square(cell: Cell, winning: bool) -> Span {
    let (symbol, tone) = match cell {
        Some(Mark::X) => ("X", Tone::MarkX),
        Some(Mark::O) => ("O", Tone::MarkO),
        None => (" ", Tone::Plain),
    };

    if winning {
        Span::styled(format!(" {symbol} "), Tone::Winning).bold()
    } else {
        let span = Span::styled(format!(" {symbol} "), tone);
        if cell.is_some() {
            span.bold()
        } else {
            span
        }
    }
}

fn render_move(position: usize, item: &MoveListItem) -> Vec<(Span, Option<Action>)> {
    let number = Span::styled(format!("{:>2}. ", position + 1), Tone::Dim);
    let description = Span::plain(item.description());
    let description = if item.is_current { description.bold() } else { description };

    vec![
        (Span::plain(MARGIN), None),
        (number, None),
        (description, Some(Action::JumpTo(item.step))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.iter().map(|span| span.text.as_str()).collect()
    }

    fn find_row(screen: &Screen, needle: &str) -> u16 {
        screen
            .lines
            .iter()
            .position(|line| line_text(line).contains(needle))
            .unwrap_or_else(|| panic!("'{needle}' not rendered")) as u16
    }

    fn play_target(screen: &Screen, index: usize) -> &HitTarget {
        screen
            .targets
            .iter()
            .find(|target| target.action == Action::Play(index))
            .unwrap()
    }

    #[test]
    fn test_render_new_game() {
        let screen = render(&Game::new());
        let text: Vec<String> = screen.lines.iter().map(line_text).collect();

        assert!(text.iter().any(|line| line.contains("Next player: X")));
        assert!(text.iter().any(|line| line.contains("Go to game start")));
        assert!(text.iter().any(|line| line.contains("[ Show descending ]")));
        assert!(!text.iter().any(|line| line.contains("Go to move #")));
    }

    #[test]
    fn test_every_square_is_clickable() {
        let screen = render(&Game::new());
        for index in 0..9 {
            let target = play_target(&screen, index);
            assert_eq!(target.cols.len(), 3);
            assert_eq!(screen.target_at(target.cols.start + 1, target.row), Some(Action::Play(index)));
        }

        // Squares on one row share the row, next rows are two lines down
        let first = play_target(&screen, 0);
        let second = play_target(&screen, 1);
        let below = play_target(&screen, 3);
        assert_eq!(first.row, second.row);
        assert_eq!(first.cols, 2..5);
        assert_eq!(second.cols, 6..9);
        assert_eq!(below.row, first.row + 2);
        assert_eq!(below.cols, first.cols);
    }

    #[test]
    fn test_separators_are_not_clickable() {
        let screen = render(&Game::new());
        let first = play_target(&screen, 0);
        assert_eq!(screen.target_at(5, first.row), None);
        assert_eq!(screen.target_at(3, first.row + 1), None);
        assert_eq!(screen.target_at(0, first.row), None);
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut game = Game::new();
        for index in [0, 1, 4, 2, 8] {
            game.apply_move(index);
        }
        let screen = render(&game);
        let row = find_row(&screen, "Winner: X");
        assert!(screen.lines[row as usize][1].bold);

        let highlighted: Vec<usize> = (0..9)
            .filter(|&index| {
                let target = play_target(&screen, index);
                let line = &screen.lines[target.row as usize];
                // margin, then square/separator pairs
                let col = index % 3;
                line[1 + col * 2].tone == Tone::Winning
            })
            .collect();
        assert_eq!(highlighted, vec![0, 4, 8]);
    }

    #[test]
    fn test_move_list_click_targets() {
        let mut game = Game::new();
        game.apply_move(4);
        game.apply_move(0);

        let screen = render(&game);
        let row = find_row(&screen, "Go to move #1 (2, 2)");
        let target = screen
            .targets
            .iter()
            .find(|target| target.row == row)
            .unwrap();
        assert_eq!(target.action, Action::JumpTo(1));

        let current = find_row(&screen, "Go to move #2 (1, 1)");
        assert!(screen.lines[current as usize][2].bold);
        assert!(!screen.lines[row as usize][2].bold);
    }

    #[test]
    fn test_descending_move_list() {
        let mut game = Game::new();
        game.apply_move(4);
        game.apply_move(0);
        game.toggle_order();

        let screen = render(&game);
        let latest = find_row(&screen, "Go to move #2");
        let start = find_row(&screen, "Go to game start");
        assert!(latest < start);
        assert!(line_text(&screen.lines[latest as usize]).contains(" 1. "));

        // Each row jumps to the step it shows, not to its position
        let jumps: Vec<Action> = screen
            .targets
            .iter()
            .filter(|target| matches!(target.action, Action::JumpTo(_)))
            .map(|target| target.action)
            .collect();
        assert_eq!(jumps, vec![Action::JumpTo(2), Action::JumpTo(1), Action::JumpTo(0)]);
        assert_eq!(screen.target_at(6, latest), Some(Action::JumpTo(2)));
        assert_eq!(screen.target_at(6, start), Some(Action::JumpTo(0)));

        let toggle_row = find_row(&screen, "[ Show ascending ]");
        let toggle = screen
            .targets
            .iter()
            .find(|target| target.row == toggle_row)
            .unwrap();
        assert_eq!(toggle.action, Action::ToggleOrder);
    }

    #[test]
    fn test_render_square() {
        assert_eq!(render_square(None, false), Span::plain("   "));
        assert_eq!(render_square(Some(Mark::O), false), Span::styled(" O ", Tone::MarkO).bold());
        assert_eq!(render_square(Some(Mark::X), true).tone, Tone::Winning);
    }
}
