mod attach_button;
mod attach_dialog;

pub use attach_button::AttachButton;
pub use attach_dialog::AttachDialog;
