//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every check is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (selector changes).
    pub print_ui_interactions: bool,
    /// Emit a line per completed fetch with its round-trip time.
    pub print_fetch_timings: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: false,
    print_fetch_timings: false,
    print_shutdown: false,
};
