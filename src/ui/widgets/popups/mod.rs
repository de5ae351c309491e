use crate::app::App;
use ratatui::Frame;

pub mod devices;
pub mod error;
pub mod help;
pub mod input;
pub mod toast;

pub fn render(f: &mut Frame, app: &mut App) {
    // DEVICE PICKER
    if app.device_dialog.is_open() {
        devices::render(f, app);
    }

    // TOAST NOTIFICATION
    if app.toast.is_some() {
        toast::render(f, app);
    }

    // INPUT POPUP
    if app.input_state.is_some() {
        input::render(f, app);
    }

    // FOOTER / WHICHKEY POPUP
    if app.show_keyhints {
        help::render(f, app);
    }

    // Errors sit above everything else until dismissed
    if app.store.error_message.is_some() {
        error::render(f, app);
    }
}
