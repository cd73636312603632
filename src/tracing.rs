//! Tracing initialization.

use std::sync::{Once, OnceLock};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, util::SubscriberInitExt};

static INIT: Once = Once::new();
// Holds the test-mode subscriber's guard alive for the process lifetime —
// `set_default`'s guard resets the subscriber on drop, so letting it fall
// out of scope at the end of `call_once` would silently undo the init.
static TEST_GUARD: OnceLock<tracing::subscriber::DefaultGuard> = OnceLock::new();

/// Initialize tracing. Safe to call multiple times.
pub fn init() {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        if is_test {
            let _ = TEST_GUARD.set(builder.with_test_writer().finish().set_default());
        } else {
            if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
                eprintln!("Failed to initialize tracing: {}", e)
            }
        }
    });
}
