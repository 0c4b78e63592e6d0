//! Feature-gated diagnostic logging for GainDial.
//!
//! Messages are formatted into fixed-size buffers and pushed through a
//! bounded ring, so a log call never allocates or blocks the caller. A
//! slow editor-side timer drains the ring to a file. Compiled out unless
//! the `debug` feature is enabled.

use std::fmt;

#[cfg(feature = "debug")]
pub mod logger {
    use std::cell::UnsafeCell;
    use std::fmt::{self, Write as _};
    use std::fs::OpenOptions;
    use std::io::Write as _;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::OnceLock;

    const RING_CAP: usize = 128;
    const MSG_MAX: usize = 256;

    const LOG_PATH: &str = "/tmp/gaindial.log";

    #[derive(Copy, Clone)]
    struct Message {
        len: usize,
        bytes: [u8; MSG_MAX],
    }

    impl Default for Message {
        fn default() -> Self {
            Self {
                len: 0,
                bytes: [0; MSG_MAX],
            }
        }
    }

    impl fmt::Write for Message {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let room = MSG_MAX - self.len;
            let n = s.len().min(room);
            self.bytes[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
            self.len += n;
            Ok(())
        }
    }

    /// Bounded ring of preformatted messages; full means drop, never wait.
    struct Ring {
        head: AtomicUsize,
        tail: AtomicUsize,
        slots: Box<[UnsafeCell<Message>]>,
    }

    unsafe impl Sync for Ring {}

    impl Ring {
        fn new() -> Self {
            let slots = (0..RING_CAP)
                .map(|_| UnsafeCell::new(Message::default()))
                .collect::<Vec<_>>()
                .into_boxed_slice();
            Self {
                head: AtomicUsize::new(0),
                tail: AtomicUsize::new(0),
                slots,
            }
        }

        fn push(&self, message: Message) {
            let head = self.head.load(Ordering::Relaxed);
            let next = (head + 1) % RING_CAP;
            if next == self.tail.load(Ordering::Acquire) {
                return;
            }
            unsafe {
                *self.slots[head].get() = message;
            }
            self.head.store(next, Ordering::Release);
        }

        fn pop(&self) -> Option<Message> {
            let tail = self.tail.load(Ordering::Relaxed);
            if tail == self.head.load(Ordering::Acquire) {
                return None;
            }
            let message = unsafe { *self.slots[tail].get() };
            self.tail.store((tail + 1) % RING_CAP, Ordering::Release);
            Some(message)
        }
    }

    static RING: OnceLock<Ring> = OnceLock::new();
    static ENABLED: AtomicBool = AtomicBool::new(false);

    pub fn init_logger() {
        let _ = RING.get_or_init(Ring::new);
        ENABLED.store(true, Ordering::Relaxed);
    }

    pub fn log_args(args: fmt::Arguments) {
        if !ENABLED.load(Ordering::Relaxed) {
            return;
        }
        let Some(ring) = RING.get() else { return };

        let mut message = Message::default();
        let _ = message.write_fmt(args);
        ring.push(message);
    }

    pub fn drain_to_file() {
        let Some(ring) = RING.get() else { return };
        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(LOG_PATH) else {
            return;
        };

        while let Some(message) = ring.pop() {
            if message.len == 0 {
                continue;
            }
            let text = std::str::from_utf8(&message.bytes[..message.len]).unwrap_or("<non-utf8>");
            let _ = writeln!(file, "{}", text);
        }
    }
}

#[cfg(feature = "debug")]
pub(crate) fn dial_log_inner(args: fmt::Arguments) {
    logger::log_args(args);
}

#[cfg(not(feature = "debug"))]
pub(crate) fn dial_log_inner(_args: fmt::Arguments) {}

#[macro_export]
macro_rules! dial_log {
    ($($arg:tt)*) => {
        $crate::debug::dial_log_inner(format_args!($($arg)*))
    };
}
