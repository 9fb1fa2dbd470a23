//! Hooks connecting a running search to the terminal.

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use pathviz_core::GridGraph;
use pathviz_search::{CancellationPoll, StepNotifier};

use crate::TerminalView;

/// Step notifier that redraws the grid after every search step and then
/// waits `delay`, pacing the animation.
///
/// A notifier cannot fail the search, so the first drawing error is kept
/// and later frames are skipped; [`finish`](Self::finish) reports it.
pub struct Animator<'a> {
    view: &'a mut TerminalView,
    delay: Duration,
    frames: usize,
    error: Option<io::Error>,
}

impl<'a> Animator<'a> {
    pub fn new(view: &'a mut TerminalView, delay: Duration) -> Self {
        Self {
            view,
            delay,
            frames: 0,
            error: None,
        }
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Number of frames drawn, or the first drawing error.
    pub fn finish(self) -> io::Result<usize> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.frames),
        }
    }
}

impl StepNotifier for Animator<'_> {
    fn step(&mut self, graph: &GridGraph) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.view.draw(graph) {
            log::warn!("frame {} not drawn: {e}", self.frames);
            self.error = Some(e);
            return;
        }
        self.frames += 1;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Cancellation poll that drains pending terminal input without blocking
/// and fires once `Esc` or `q` was pressed.
#[derive(Debug, Default)]
pub struct KeyboardCancel {
    requested: bool,
}

impl KeyboardCancel {
    /// Whether cancellation was requested.
    pub fn requested(&self) -> bool {
        self.requested
    }
}

impl CancellationPoll for KeyboardCancel {
    fn is_cancelled(&mut self) -> bool {
        while !self.requested {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("input poll failed: {e}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(KeyEvent {
                    code: KeyCode::Esc | KeyCode::Char('q'),
                    kind: KeyEventKind::Press,
                    ..
                })) => self.requested = true,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("input read failed: {e}");
                    break;
                }
            }
        }
        self.requested
    }
}
