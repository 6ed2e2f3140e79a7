mod scroll_button;
mod snap_strip;
mod status_bar;

pub use scroll_button::ScrollButtonWidget;
pub use snap_strip::SnapStripWidget;
pub use status_bar::StatusBarWidget;
