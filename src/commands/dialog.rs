/// Show a blocking `window.alert`
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}
