use std::io::{self, Stdout, Write};

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::warn;

use crate::view::{Screen, Span, Tone};

/// Raw-mode alternate screen, restored when dropped
pub struct Terminal {
    stdout: Stdout,
    mouse: bool,
}

impl Terminal {
    pub fn enter(mouse: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        let entered = if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
        } else {
            execute!(stdout, EnterAlternateScreen, cursor::Hide)
        };
        if let Err(e) = entered {
            // Some commands may already have reached the terminal
            undo_setup(&mut stdout, mouse);
            return Err(e);
        }

        Ok(Self { stdout, mouse })
    }

    /// Repaint the whole screen
    pub fn draw(&mut self, screen: &Screen) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        for (row, line) in screen.lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for span in line {
                queue!(self.stdout, Print(paint(span)))?;
            }
        }

        self.stdout.flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.mouse {
            execute!(self.stdout, DisableMouseCapture)?;
        }
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Best-effort rollback of a partially entered terminal
fn undo_setup<W: Write>(out: &mut W, mouse: bool) {
    if mouse {
        let _ = execute!(out, DisableMouseCapture);
    }
    let _ = execute!(out, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn paint(span: &Span) -> ColoredString {
    let text = span.text.as_str();
    let painted = match span.tone {
        Tone::Plain => text.normal(),
        Tone::Dim => text.dimmed(),
        Tone::Title => text.bright_cyan(),
        Tone::MarkX => text.green(),
        Tone::MarkO => text.red(),
        Tone::Winning => text.black().on_bright_green(),
        Tone::Button => text.bright_yellow(),
    };

    if span.bold {
        painted.bold()
    } else {
        painted
    }
}
