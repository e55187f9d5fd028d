//! `RawMode`: Scoped raw-mode acquisition for a terminal device.

use std::os::fd::OwnedFd;

use nix::sys::termios::{
    self, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices,
    Termios,
};

use crate::error::{Error, Result};

/// RAII guard for raw terminal mode.
///
/// Holds the attributes that were active before raw mode was applied and
/// puts them back on [`RawMode::restore`] or drop, whichever comes first.
#[derive(Debug)]
pub struct RawMode {
    fd: OwnedFd,
    original: Option<Termios>,
}

impl RawMode {
    /// Save the current mode of the terminal behind `fd` and switch it to raw
    /// mode.
    ///
    /// Reads return after at most `vtime` deciseconds, with or without data.
    pub fn enable(fd: OwnedFd, vtime: u8) -> Result<Self> {
        let original = termios::tcgetattr(&fd).map_err(|source| Error::Terminal {
            op: "tcgetattr",
            source,
        })?;

        let raw = raw_attributes(&original, vtime);
        termios::tcsetattr(&fd, SetArg::TCSAFLUSH, &raw).map_err(|source| Error::Terminal {
            op: "tcsetattr",
            source,
        })?;

        tracing::debug!(vtime, "raw mode enabled");
        Ok(Self {
            fd,
            original: Some(original),
        })
    }

    /// Whether the original mode still has to be restored.
    pub const fn is_active(&self) -> bool {
        self.original.is_some()
    }

    /// Put the original mode back. Later calls do nothing.
    pub fn restore(&mut self) -> Result<()> {
        let Some(original) = self.original.take() else {
            return Ok(());
        };
        termios::tcsetattr(&self.fd, SetArg::TCSAFLUSH, &original).map_err(|source| {
            Error::Terminal {
                op: "tcsetattr",
                source,
            }
        })?;
        tracing::debug!("raw mode disabled");
        Ok(())
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Derive raw attributes from `original`.
///
/// Disables line buffering, echo, signal keys, flow control, CR/NL
/// translation in both directions and output post-processing.
pub fn raw_attributes(original: &Termios, vtime: u8) -> Termios {
    let mut raw = original.clone();

    raw.input_flags.remove(
        InputFlags::BRKINT
            | InputFlags::ICRNL
            | InputFlags::INPCK
            | InputFlags::ISTRIP
            | InputFlags::IXON,
    );
    raw.output_flags.remove(OutputFlags::OPOST);
    raw.control_flags.insert(ControlFlags::CS8);
    raw.local_flags
        .remove(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG);

    raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
    raw.control_chars[SpecialCharacterIndices::VTIME as usize] = vtime;

    raw
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use nix::pty::{openpty, OpenptyResult};

    /// A fresh pseudo-terminal, still in its default cooked mode.
    pub(crate) fn pty() -> OpenptyResult {
        openpty(None, None).unwrap()
    }

    pub(crate) fn mode_of(fd: &OwnedFd) -> Termios {
        termios::tcgetattr(fd).unwrap()
    }

    pub(crate) fn assert_same_mode(left: &Termios, right: &Termios) {
        assert_eq!(left.input_flags, right.input_flags);
        assert_eq!(left.output_flags, right.output_flags);
        assert_eq!(left.control_flags, right.control_flags);
        assert_eq!(left.local_flags, right.local_flags);
        assert_eq!(left.control_chars, right.control_chars);
    }

    fn cooked() -> Termios {
        let pty = pty();
        let mode = mode_of(&pty.slave);
        assert!(mode.local_flags.contains(LocalFlags::ECHO | LocalFlags::ICANON));
        mode
    }

    #[test]
    fn test_raw_attributes_clear_cooked_flags() {
        let raw = raw_attributes(&cooked(), 1);

        assert!(!raw.local_flags.intersects(
            LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::ISIG | LocalFlags::IEXTEN
        ));
        assert!(!raw.input_flags.intersects(InputFlags::ICRNL | InputFlags::IXON));
        assert!(!raw.output_flags.contains(OutputFlags::OPOST));
        assert!(raw.control_flags.contains(ControlFlags::CS8));
    }

    #[test]
    fn test_raw_attributes_read_timeout() {
        let raw = raw_attributes(&cooked(), 3);
        assert_eq!(raw.control_chars[SpecialCharacterIndices::VMIN as usize], 0);
        assert_eq!(raw.control_chars[SpecialCharacterIndices::VTIME as usize], 3);
    }

    #[test]
    fn test_raw_attributes_leave_original_untouched() {
        let original = cooked();
        let _raw = raw_attributes(&original, 1);
        assert!(original.local_flags.contains(LocalFlags::ECHO));
    }

    #[test]
    fn test_enable_applies_raw_mode() {
        let pty = pty();
        let guard = RawMode::enable(pty.slave.try_clone().unwrap(), 2).unwrap();
        assert!(guard.is_active());

        let mode = mode_of(&pty.slave);
        assert!(!mode.local_flags.intersects(LocalFlags::ECHO | LocalFlags::ICANON));
        assert!(!mode.output_flags.contains(OutputFlags::OPOST));
        assert_eq!(mode.control_chars[SpecialCharacterIndices::VMIN as usize], 0);
        assert_eq!(mode.control_chars[SpecialCharacterIndices::VTIME as usize], 2);
    }

    #[test]
    fn test_restore_puts_back_original_mode() {
        let pty = pty();
        let original = mode_of(&pty.slave);

        let mut guard = RawMode::enable(pty.slave.try_clone().unwrap(), 1).unwrap();
        guard.restore().unwrap();

        assert!(!guard.is_active());
        assert_same_mode(&mode_of(&pty.slave), &original);
    }

    #[test]
    fn test_second_restore_is_a_no_op() {
        let pty = pty();
        let original = mode_of(&pty.slave);

        let mut guard = RawMode::enable(pty.slave.try_clone().unwrap(), 1).unwrap();
        guard.restore().unwrap();

        // Put the device in raw mode behind the guard's back; a spent guard
        // must leave it alone.
        let raw = raw_attributes(&original, 1);
        termios::tcsetattr(&pty.slave, SetArg::TCSANOW, &raw).unwrap();
        guard.restore().unwrap();
        drop(guard);

        assert!(!mode_of(&pty.slave).local_flags.contains(LocalFlags::ECHO));
    }

    #[test]
    fn test_drop_restores() {
        let pty = pty();
        let original = mode_of(&pty.slave);

        drop(RawMode::enable(pty.slave.try_clone().unwrap(), 1).unwrap());

        assert_same_mode(&mode_of(&pty.slave), &original);
    }

    #[test]
    fn test_enable_on_non_terminal_fails() {
        let file = tempfile::tempfile().unwrap();
        let err = RawMode::enable(OwnedFd::from(file), 1).unwrap_err();
        assert!(matches!(err, Error::Terminal { op: "tcgetattr", .. }));
    }
}
