// Copyright (c) 2025 - Cowboy AI, Inc.
//! Diagnostic trace lines
//!
//! Trace output is gated by the configuration toggles and goes to the
//! `cim_propcheck::trace` tracing target. Emitting a line never influences
//! control flow.

/// Emit `line()` when `enabled`; the message is only built when needed
pub(crate) fn emit<F>(enabled: bool, line: F)
where
    F: FnOnce() -> String,
{
    if enabled {
        tracing::info!(target: "cim_propcheck::trace", "{}", line());
    }
}

/// Run `f` under a subscriber that records every log line it emits
#[cfg(test)]
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_respects_toggle() {
        let ((), output) = capture(|| {
            emit(true, || String::from("visible line"));
            emit(false, || String::from("hidden line"));
        });

        assert!(output.contains("cim_propcheck::trace"));
        assert!(output.contains("visible line"));
        assert!(!output.contains("hidden line"));
    }

    #[test]
    fn test_disabled_line_is_never_built() {
        let ((), _) = capture(|| {
            emit(false, || panic!("message built while disabled"));
        });
    }
}
