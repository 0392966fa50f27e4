//! Tracing configuration for debugging fold runs.
//!
//! ```bash
//! # See the driver's per-declaration events
//! TSFOLD_LOG=trace my-tool file.ts
//!
//! # Fine-grained filtering
//! TSFOLD_LOG="tsfold::reader=debug" my-tool file.ts
//! ```
//!
//! The subscriber is only initialised when `TSFOLD_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal builds.

use tracing_subscriber::EnvFilter;

/// Build an `EnvFilter` from `TSFOLD_LOG`, falling back to `RUST_LOG`.
///
/// `TSFOLD_LOG` takes precedence when both are set. Values use the same
/// syntax as `RUST_LOG` (e.g. `debug`, `tsfold::reader=trace`).
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TSFOLD_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        // RUST_LOG is set (caller already checked).  Use it as-is.
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TSFOLD_LOG` nor `RUST_LOG` is set, keeping
/// startup cost at zero for normal usage. Safe to call more than once;
/// later calls are ignored.
///
/// All output goes to stderr so it never interferes with whatever the
/// embedding tool writes to stdout.
pub fn init_tracing() {
    // Only pay for tracing when explicitly requested.
    let has_tsfold_log = std::env::var("TSFOLD_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_tsfold_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
