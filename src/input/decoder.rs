//! Decoder: Turn raw terminal bytes into [`Key`] events.
//!
//! A byte other than `ESC` is a literal key. After `ESC` up to three more
//! bytes are read to recognize a navigation sequence:
//!
//! ```text
//! ESC [ <digit> ~     1/7 Home, 3 Delete, 4/8 End, 5 PageUp, 6 PageDown
//! ESC [ A|B|C|D       Up, Down, Right, Left
//! ESC [ H|F           Home, End
//! ESC O H|F           Home, End
//! ```
//!
//! Anything else, including a sequence cut short by a read timeout,
//! decodes as [`Key::Escape`].

use super::Key;
use crate::error::Result;

const ESC: u8 = 0x1b;

/// A source of single bytes with a bounded wait.
///
/// `Ok(None)` means no byte arrived before the timeout. Errors are
/// genuine read failures and are fatal.
pub trait ByteSource {
    /// Read one byte, or `None` if nothing is available.
    fn read_byte(&mut self) -> Result<Option<u8>>;
}

impl ByteSource for &[u8] {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let Some((&first, rest)) = self.split_first() else {
            return Ok(None);
        };
        *self = rest;
        Ok(Some(first))
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        (**self).read_byte()
    }
}

/// Decode at most one key.
///
/// Returns `None` when no byte is available at all.
pub fn poll_key<S: ByteSource + ?Sized>(source: &mut S) -> Result<Option<Key>> {
    let Some(byte) = source.read_byte()? else {
        return Ok(None);
    };
    let key = if byte == ESC {
        decode_escape(source)?
    } else {
        Key::Char(byte)
    };
    tracing::trace!(?key, "decoded key");
    Ok(Some(key))
}

/// Block until one key has been decoded.
pub fn next_key<S: ByteSource + ?Sized>(source: &mut S) -> Result<Key> {
    loop {
        if let Some(key) = poll_key(source)? {
            return Ok(key);
        }
    }
}

/// Decode the bytes following an `ESC`.
fn decode_escape<S: ByteSource + ?Sized>(source: &mut S) -> Result<Key> {
    let Some(first) = source.read_byte()? else {
        return Ok(Key::Escape);
    };
    let Some(second) = source.read_byte()? else {
        return Ok(Key::Escape);
    };

    let key = match (first, second) {
        (b'[', digit @ b'0'..=b'9') => {
            if source.read_byte()? != Some(b'~') {
                return Ok(Key::Escape);
            }
            match digit {
                b'1' | b'7' => Key::Home,
                b'3' => Key::Delete,
                b'4' | b'8' => Key::End,
                b'5' => Key::PageUp,
                b'6' => Key::PageDown,
                _ => Key::Escape,
            }
        }
        (b'[', b'A') => Key::ArrowUp,
        (b'[', b'B') => Key::ArrowDown,
        (b'[', b'C') => Key::ArrowRight,
        (b'[', b'D') => Key::ArrowLeft,
        (b'[' | b'O', b'H') => Key::Home,
        (b'[' | b'O', b'F') => Key::End,
        _ => Key::Escape,
    };

    if key == Key::Escape {
        tracing::warn!(first, second, "discarding unrecognized escape sequence");
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(mut bytes: &[u8]) -> Option<Key> {
        poll_key(&mut bytes).unwrap()
    }

    fn decode_all(mut bytes: &[u8]) -> Vec<Key> {
        let mut keys = Vec::new();
        while let Some(key) = poll_key(&mut bytes).unwrap() {
            keys.push(key);
        }
        keys
    }

    #[test]
    fn test_literal_bytes() {
        assert_eq!(decode(b"a"), Some(Key::Char(b'a')));
        assert_eq!(decode(b"\x11"), Some(Key::Char(0x11)));
        assert_eq!(decode(b"\r"), Some(Key::Char(b'\r')));
        assert_eq!(decode(b""), None);
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(decode(b"\x1b[A"), Some(Key::ArrowUp));
        assert_eq!(decode(b"\x1b[B"), Some(Key::ArrowDown));
        assert_eq!(decode(b"\x1b[C"), Some(Key::ArrowRight));
        assert_eq!(decode(b"\x1b[D"), Some(Key::ArrowLeft));
    }

    #[test]
    fn test_numeric_sequences() {
        assert_eq!(decode(b"\x1b[1~"), Some(Key::Home));
        assert_eq!(decode(b"\x1b[7~"), Some(Key::Home));
        assert_eq!(decode(b"\x1b[3~"), Some(Key::Delete));
        assert_eq!(decode(b"\x1b[4~"), Some(Key::End));
        assert_eq!(decode(b"\x1b[8~"), Some(Key::End));
        assert_eq!(decode(b"\x1b[5~"), Some(Key::PageUp));
        assert_eq!(decode(b"\x1b[6~"), Some(Key::PageDown));
    }

    #[test]
    fn test_unknown_digit_is_escape() {
        assert_eq!(decode(b"\x1b[9~"), Some(Key::Escape));
        assert_eq!(decode(b"\x1b[2~"), Some(Key::Escape));
    }

    #[test]
    fn test_alternate_home_end() {
        assert_eq!(decode(b"\x1b[H"), Some(Key::Home));
        assert_eq!(decode(b"\x1b[F"), Some(Key::End));
        assert_eq!(decode(b"\x1bOH"), Some(Key::Home));
        assert_eq!(decode(b"\x1bOF"), Some(Key::End));
    }

    #[test]
    fn test_truncated_sequences() {
        assert_eq!(decode(b"\x1b"), Some(Key::Escape));
        assert_eq!(decode(b"\x1b["), Some(Key::Escape));
        assert_eq!(decode(b"\x1b[5"), Some(Key::Escape));
    }

    #[test]
    fn test_digit_without_tilde_consumes_third_byte() {
        assert_eq!(decode_all(b"\x1b[5xq"), vec![Key::Escape, Key::Char(b'q')]);
    }

    #[test]
    fn test_unrecognized_sequences() {
        assert_eq!(decode(b"\x1b[Z"), Some(Key::Escape));
        assert_eq!(decode(b"\x1bOA"), Some(Key::Escape));
        assert_eq!(decode(b"\x1bxy"), Some(Key::Escape));
    }

    #[test]
    fn test_stream_of_keys() {
        let keys = decode_all(b"j\x1b[B\x1b[6~\x1bOFk");
        assert_eq!(
            keys,
            vec![
                Key::Char(b'j'),
                Key::ArrowDown,
                Key::PageDown,
                Key::End,
                Key::Char(b'k'),
            ]
        );
    }

    #[test]
    fn test_next_key_skips_empty_reads() {
        struct Gappy {
            reads: Vec<Option<u8>>,
        }

        impl ByteSource for Gappy {
            fn read_byte(&mut self) -> Result<Option<u8>> {
                Ok(if self.reads.is_empty() { None } else { self.reads.remove(0) })
            }
        }

        let mut source = Gappy {
            reads: vec![None, None, Some(b'x')],
        };
        assert_eq!(next_key(&mut source).unwrap(), Key::Char(b'x'));
    }

    #[test]
    fn test_read_error_propagates() {
        struct Broken;

        impl ByteSource for Broken {
            fn read_byte(&mut self) -> Result<Option<u8>> {
                Err(crate::Error::Read(std::io::Error::other("gone")))
            }
        }

        assert!(matches!(poll_key(&mut Broken), Err(crate::Error::Read(_))));
    }

    #[test]
    fn test_discarded_sequence_is_logged_as_warning() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(decode(b"\x1b[A"), Some(Key::ArrowUp));
            assert_eq!(decode(b"\x1b[9~"), Some(Key::Escape));
        });

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(log.lines().count(), 1);
        assert!(log.contains("WARN"));
        assert!(log.contains("discarding unrecognized escape sequence"));
    }
}
