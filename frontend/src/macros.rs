//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console in debug builds only.
///
/// Host builds (unit tests) compile the call away so reducers can log
/// without touching JS imports.
///
/// ```rust,ignore
/// debug_log!("mounted {} views", count);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(all(debug_assertions, target_arch = "wasm32"))]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}
