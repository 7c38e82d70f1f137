//! Logging setup.
//!
//! The library only emits `tracing` events; embedders decide where they
//! go. `init` installs a formatted subscriber filtered by `RUST_LOG`.
//!
//! On `wasm32` the fmt layer's default timer reads `SystemTime`, which
//! panics in the browser, so timestamps are left out there. With the `web`
//! feature each event is written to the browser console.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "areaviz=info";

#[cfg(not(target_arch = "wasm32"))]
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global fmt subscriber.
///
/// Returns false if a global subscriber was already set.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Install a global fmt subscriber without timestamps.
///
/// Returns false if a global subscriber was already set.
#[cfg(target_arch = "wasm32")]
pub fn init() -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_target(true)
        .without_time()
        .with_ansi(false);
    #[cfg(feature = "web")]
    let builder = builder.with_writer(console::ConsoleWriter::default);
    builder.try_init().is_ok()
}

/// Subscriber for tests: output captured by the test harness.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_test_writer()
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_for_tests() {
    init();
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod console {
    use std::io;

    /// Buffers one formatted event and logs it to the console when dropped
    #[derive(Default)]
    pub struct ConsoleWriter {
        line: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.line.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.line);
            let text = text.trim_end();
            if !text.is_empty() {
                web_sys::console::log_1(&text.into());
            }
        }
    }
}
