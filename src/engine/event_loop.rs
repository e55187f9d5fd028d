//! `Engine`: Render, read a key, dispatch, repeat.

use super::Editor;
use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::input::{next_key, Key};
use crate::terminal::Console;

/// Where the loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Rendering frames and handling keys.
    Running,
    /// The quit key was pressed.
    Terminating,
}

/// The editing loop over a [`Console`].
pub struct Engine<C: Console> {
    console: C,
    editor: Editor,
    config: EditorConfig,
    state: LoopState,
    frame_count: u64,
}

impl<C: Console> Engine<C> {
    /// Create an engine for a `(rows, cols)` screen showing `buffer`.
    pub fn new(
        console: C,
        (rows, cols): (usize, usize),
        buffer: TextBuffer,
        config: EditorConfig,
    ) -> Self {
        tracing::debug!(rows, cols, lines = buffer.num_lines(), "engine ready");
        Self {
            console,
            editor: Editor::new(buffer, rows, cols),
            config,
            state: LoopState::Running,
            frame_count: 0,
        }
    }

    /// The editor state.
    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    /// The console.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Current loop state.
    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames written so far.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run until the quit key, then release the console.
    ///
    /// The console is released on both the quit path and the error path;
    /// an error from the loop takes precedence over one from the release.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let released = self.console.release();
        if let Err(err) = &result {
            tracing::error!(%err, "editing loop failed");
        }
        result.and(released)
    }

    /// One iteration: draw, wait for a key, dispatch it.
    pub fn step(&mut self) -> Result<LoopState> {
        self.refresh_screen()?;
        let key = next_key(&mut self.console)?;
        self.dispatch(key);
        Ok(self.state)
    }

    fn event_loop(&mut self) -> Result<()> {
        while self.state == LoopState::Running {
            self.step()?;
        }
        Ok(())
    }

    fn refresh_screen(&mut self) -> Result<()> {
        let frame = self.editor.draw(&self.config.welcome);
        self.console.write_frame(&frame)?;
        self.frame_count += 1;
        Ok(())
    }

    fn dispatch(&mut self, key: Key) {
        if key == Key::Char(self.config.quit_key) {
            tracing::debug!(frames = self.frame_count, "quit requested");
            self.state = LoopState::Terminating;
        } else {
            self.editor.process_key(key);
        }
    }
}
