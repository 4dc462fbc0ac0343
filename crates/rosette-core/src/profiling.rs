//! Profiling utilities based on the `puffin` crate.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

use crate::config::ProfilingMode;

#[cfg(feature = "profiling-server")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Enable scope recording according to `mode`.
///
/// # Example
/// ```no_run
/// use rosette_core::profiling::init_profiling;
/// use rosette_core::ProfilingMode;
///
/// init_profiling(ProfilingMode::On);
/// ```
pub fn init_profiling(mode: ProfilingMode) {
    match mode {
        ProfilingMode::Off => puffin::set_scopes_on(false),
        ProfilingMode::On => puffin::set_scopes_on(true),
        ProfilingMode::WithServer { port } => {
            puffin::set_scopes_on(true);
            start_server(port);
        }
    }
}

#[cfg(feature = "profiling-server")]
fn start_server(port: u16) {
    let addr = format!("0.0.0.0:{port}");
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", addr);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

#[cfg(not(feature = "profiling-server"))]
fn start_server(port: u16) {
    tracing::warn!(
        port,
        "profiling server requested but the `profiling-server` feature is disabled"
    );
}

/// Mark a frame boundary so scopes recorded by one render pass group together.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
