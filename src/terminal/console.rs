//! Console: The editor's only channel to the terminal.

use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::os::fd::{AsFd, OwnedFd};

use super::output::OutputBuffer;
use super::session::RawMode;
use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::input::ByteSource;

/// A terminal the editing loop can drive.
///
/// Input comes through [`ByteSource`]; output is written one whole frame at
/// a time.
pub trait Console: ByteSource {
    /// Write a complete frame.
    fn write_frame(&mut self, frame: &OutputBuffer) -> Result<()>;

    /// Clear the screen, home the cursor and give the terminal back.
    ///
    /// Must be idempotent: only the first call has any effect.
    fn release(&mut self) -> Result<()>;
}

/// The controlling terminal in raw mode.
///
/// Input and output go through unbuffered duplicates of stdin and stdout,
/// so each frame reaches the terminal in a single `write()`.
#[derive(Debug)]
pub struct Terminal {
    input: File,
    output: File,
    raw_mode: RawMode,
}

impl Terminal {
    /// Put the controlling terminal into raw mode.
    pub fn acquire(config: &EditorConfig) -> Result<Self> {
        let input = io::stdin().as_fd().try_clone_to_owned().map_err(Error::Read)?;
        let output = io::stdout().as_fd().try_clone_to_owned().map_err(Error::Write)?;
        Self::open(input, output, config.vtime())
    }

    /// Put the terminal behind `input` into raw mode and draw frames to
    /// `output`.
    pub fn open(input: OwnedFd, output: OwnedFd, vtime: u8) -> Result<Self> {
        let raw_mode = RawMode::enable(input.try_clone().map_err(Error::Read)?, vtime)?;

        Ok(Self {
            input: File::from(input),
            output: File::from(output),
            raw_mode,
        })
    }
}

impl ByteSource for Terminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.input.read(&mut byte) {
            Ok(1) => Ok(Some(byte[0])),
            Ok(_) => Ok(None),
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => Err(Error::Read(e)),
        }
    }
}

impl Console for Terminal {
    fn write_frame(&mut self, frame: &OutputBuffer) -> Result<()> {
        frame.flush_to(&mut self.output).map_err(Error::Write)
    }

    fn release(&mut self) -> Result<()> {
        if !self.raw_mode.is_active() {
            return Ok(());
        }

        let mut out = OutputBuffer::with_capacity(8);
        out.clear_screen();
        out.cursor_home();
        let cleared = out.flush_to(&mut self.output).map_err(Error::Write);

        // Restore even if the clear could not be written.
        self.raw_mode.restore()?;
        cleared
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
