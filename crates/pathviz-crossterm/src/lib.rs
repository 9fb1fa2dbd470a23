//! Crossterm terminal front end for pathviz.
//!
//! Provides a [`TerminalView`] that draws a [`GridGraph`] as coloured
//! blocks, an algorithm button bar and a message line, and maps terminal
//! events to editing [`Input`]s. [`Animator`] and [`KeyboardCancel`] plug
//! the view into a running search as its step notifier and cancellation
//! poll.

mod palette;
mod step;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind},
    execute, queue,
    style::{self, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Cell, GridGraph, NodeState};
use pathviz_search::Algorithm;

pub use palette::state_color;
pub use step::{Animator, KeyboardCancel};

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Editing command decoded from a terminal event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Primary button on a grid cell.
    Paint(Cell),
    /// Secondary button on a grid cell.
    Erase(Cell),
    Run,
    Select(Algorithm),
    NextAlgorithm,
    Clear,
    Restart,
    Scatter,
    /// The screen must be repainted from scratch.
    Redraw,
    Quit,
}

/// A terminal view of a square grid with a status area below it.
pub struct TerminalView {
    mouse_enabled: bool,
    rows: i32,
    // statuses as last flushed; `None` forces a full redraw
    shown: Option<Vec<NodeState>>,
    // (algorithm, first column, one past last column)
    buttons: Vec<(Algorithm, u16, u16)>,
}

impl TerminalView {
    /// Create a view for a grid with `rows` cells per side.
    pub fn new(rows: i32) -> Self {
        let mut buttons = Vec::with_capacity(Algorithm::ALL.len());
        let mut x: u16 = 1;
        for a in Algorithm::ALL {
            let w = a.label().len() as u16 + 2;
            buttons.push((a, x, x + w));
            x += w + 2;
        }
        Self {
            mouse_enabled: true,
            rows,
            shown: None,
            buttons,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        self.shown = None;
        Ok(())
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    /// Forget what is on screen so the next [`draw`](Self::draw) repaints
    /// every cell.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw every cell whose status changed since the previous call.
    pub fn draw(&mut self, grid: &GridGraph) -> io::Result<()> {
        let mut stdout = io::stdout();
        let shown = self.shown.get_or_insert_with(Vec::new);
        let full = shown.len() != grid.len();
        if full {
            shown.clear();
            shown.resize(grid.len(), NodeState::Unvisited);
            queue!(stdout, terminal::Clear(ClearType::All))?;
        }

        for (i, (cell, status)) in grid.cells().enumerate() {
            if !full && shown[i] == status {
                continue;
            }
            shown[i] = status;
            queue!(
                stdout,
                cursor::MoveTo(screen_x(cell.col), clamp_u16(cell.row)),
                SetBackgroundColor(state_color(status)),
                style::Print("  ")
            )?;
        }

        queue!(stdout, style::ResetColor)?;
        stdout.flush()
    }

    /// Draw the algorithm buttons (the selected one highlighted) and a
    /// message line below the grid.
    pub fn draw_status(&mut self, selected: Algorithm, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        let y = self.button_row();
        queue!(
            stdout,
            cursor::MoveTo(0, y),
            terminal::Clear(ClearType::CurrentLine)
        )?;
        for &(a, x0, _) in &self.buttons {
            let bg = if a == selected {
                palette::RED
            } else {
                palette::BUTTON
            };
            queue!(
                stdout,
                cursor::MoveTo(x0, y),
                SetBackgroundColor(bg),
                SetForegroundColor(palette::WHITE),
                style::Print(format!(" {} ", a.label()))
            )?;
        }
        queue!(
            stdout,
            style::ResetColor,
            cursor::MoveTo(0, y + 1),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(palette::GREY),
            style::Print(message),
            style::ResetColor
        )?;
        stdout.flush()
    }

    /// Wait up to `timeout` for a terminal event and decode it.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let ev = event::read()?;
        Ok(self.translate(ev))
    }

    /// Decode a terminal event.
    pub fn translate(&self, ev: Event) -> Option<Input> {
        match ev {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char(' ') => Some(Input::Run),
                KeyCode::Tab => Some(Input::NextAlgorithm),
                KeyCode::Char('1') => Some(Input::Select(Algorithm::AStar)),
                KeyCode::Char('2') => Some(Input::Select(Algorithm::Bfs)),
                KeyCode::Char('3') => Some(Input::Select(Algorithm::Dfs)),
                KeyCode::Char('c') => Some(Input::Clear),
                KeyCode::Char('r') => Some(Input::Restart),
                KeyCode::Char('w') => Some(Input::Scatter),
                KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
                _ => None,
            },
            Event::Mouse(me) => match me.kind {
                MouseEventKind::Down(MouseButton::Left) => self
                    .button_at(me.column, me.row)
                    .map(Input::Select)
                    .or_else(|| self.to_cell(me.column, me.row).map(Input::Paint)),
                MouseEventKind::Drag(MouseButton::Left) => {
                    self.to_cell(me.column, me.row).map(Input::Paint)
                }
                MouseEventKind::Down(MouseButton::Right)
                | MouseEventKind::Drag(MouseButton::Right) => {
                    self.to_cell(me.column, me.row).map(Input::Erase)
                }
                _ => None,
            },
            Event::Resize(..) => Some(Input::Redraw),
            _ => None,
        }
    }

    /// Grid cell under terminal position (`column`, `row`).
    pub fn to_cell(&self, column: u16, row: u16) -> Option<Cell> {
        let cell = Cell::new(row as i32, (column / CELL_WIDTH) as i32);
        if cell.row < self.rows && cell.col < self.rows {
            Some(cell)
        } else {
            None
        }
    }

    /// Algorithm button under terminal position (`column`, `row`).
    pub fn button_at(&self, column: u16, row: u16) -> Option<Algorithm> {
        if row != self.button_row() {
            return None;
        }
        self.buttons
            .iter()
            .find(|&&(_, x0, x1)| column >= x0 && column < x1)
            .map(|&(a, _, _)| a)
    }

    #[inline]
    fn button_row(&self) -> u16 {
        clamp_u16(self.rows).saturating_add(1)
    }
}

/// Terminal column of the left edge of grid column `col`.
#[inline]
fn screen_x(col: i32) -> u16 {
    clamp_u16(col).saturating_mul(CELL_WIDTH)
}

#[inline]
fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn terminal_position_to_cell() {
        let v = TerminalView::new(10);
        assert_eq!(v.to_cell(0, 0), Some(Cell::new(0, 0)));
        assert_eq!(v.to_cell(5, 3), Some(Cell::new(3, 2)));
        assert_eq!(v.to_cell(19, 9), Some(Cell::new(9, 9)));
        assert_eq!(v.to_cell(20, 9), None);
        assert_eq!(v.to_cell(0, 10), None);
    }

    #[test]
    fn screen_coordinates_saturate_on_huge_grids() {
        assert_eq!(screen_x(3), 6);
        assert_eq!(screen_x(40_000), u16::MAX);
        assert_eq!(clamp_u16(-1), 0);
        let v = TerminalView::new(70_000);
        assert_eq!(v.button_row(), u16::MAX);
        assert_eq!(v.button_at(1, u16::MAX), Some(Algorithm::AStar));
        assert_eq!(v.to_cell(65_534, 65_000), Some(Cell::new(65_000, 32_767)));
    }

    #[test]
    fn keys_map_to_commands() {
        let v = TerminalView::new(5);
        assert_eq!(v.translate(key(KeyCode::Char(' '))), Some(Input::Run));
        assert_eq!(v.translate(key(KeyCode::Tab)), Some(Input::NextAlgorithm));
        assert_eq!(
            v.translate(key(KeyCode::Char('2'))),
            Some(Input::Select(Algorithm::Bfs))
        );
        assert_eq!(v.translate(key(KeyCode::Char('c'))), Some(Input::Clear));
        assert_eq!(v.translate(key(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(v.translate(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn mouse_buttons_paint_and_erase() {
        let v = TerminalView::new(5);
        assert_eq!(
            v.translate(mouse(MouseEventKind::Down(MouseButton::Left), 4, 1)),
            Some(Input::Paint(Cell::new(1, 2)))
        );
        assert_eq!(
            v.translate(mouse(MouseEventKind::Drag(MouseButton::Left), 9, 4)),
            Some(Input::Paint(Cell::new(4, 4)))
        );
        assert_eq!(
            v.translate(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            Some(Input::Erase(Cell::new(0, 0)))
        );
        assert_eq!(
            v.translate(mouse(MouseEventKind::Down(MouseButton::Left), 40, 2)),
            None
        );
    }

    #[test]
    fn clicking_a_button_selects_it() {
        let v = TerminalView::new(5);
        let (x0, x1) = (v.buttons[1].1, v.buttons[1].2);
        assert_eq!(v.button_at(x0, 6), Some(Algorithm::Bfs));
        assert_eq!(v.button_at(x1 - 1, 6), Some(Algorithm::Bfs));
        assert_eq!(v.button_at(x1, 6), None);
        assert_eq!(v.button_at(x0, 5), None);
        assert_eq!(
            v.translate(mouse(MouseEventKind::Down(MouseButton::Left), 1, 6)),
            Some(Input::Select(Algorithm::AStar))
        );
    }
}
