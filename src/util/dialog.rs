//! Native browser dialogs. Outside the browser, `confirm` answers "no"
//! so destructive actions never proceed in a headless environment.

/// Blocking confirm dialog.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
