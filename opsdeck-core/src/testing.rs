//! Test utilities for opsdeck applications
//!
//! - [`key`]: build a `KeyEvent` from a string (`key("shift+tab")`)
//! - [`TestHarness`]: state plus an action channel to capture emitted actions
//! - [`RenderHarness`]: render components into an in-memory terminal
//! - `assert_emitted!` / `assert_not_emitted!` / `count_emitted!` macros
//!
//! ```ignore
//! let mut render = RenderHarness::new(40, 6);
//! let output = render.render_to_string_plain(|frame| {
//!     view.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Credential"));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use crate::event::EventKind;
use crate::keys::parse_key_string;
use crate::Action;

/// Create a `KeyEvent` from a key string.
///
/// # Panics
///
/// Panics if the string cannot be parsed.
///
/// ```
/// use crossterm::event::KeyCode;
/// use opsdeck_core::testing::key;
///
/// assert_eq!(key("enter").code, KeyCode::Enter);
/// ```
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// A key press for a plain character.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Wrap a key string as an [`EventKind`] for `handle_event` calls.
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// State under test plus a channel that captures emitted actions.
pub struct TestHarness<S, A: Action> {
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Sender to hand to effect handlers and task managers.
    pub fn sender(&self) -> mpsc::UnboundedSender<A> {
        self.tx.clone()
    }

    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    /// Everything emitted so far, without waiting.
    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Wait for the next emitted action (e.g. a spawned fetch reporting back).
    pub async fn next_emitted(&mut self) -> Option<A> {
        self.rx.recv().await
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Renders into a ratatui `TestBackend` and returns the buffer as text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render a frame and return the resulting buffer.
    pub fn render<F>(&mut self, f: F) -> &Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(f)
            .unwrap_or_else(|e| panic!("failed to draw test frame: {e}"));
        self.terminal.backend().buffer()
    }

    /// Render a frame and return its text, one line per row, styles dropped.
    pub fn render_to_string_plain<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(f);
        buffer_to_string_plain(buffer)
    }
}

/// Text content of a buffer, rows joined with `\n`, trailing spaces trimmed.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Assert that an action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count actions matching the pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
