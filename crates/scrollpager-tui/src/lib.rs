pub mod app;
pub mod button;
pub mod event;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use button::{ButtonAttribute, ScrollButton};
pub use theme::GruvboxMaterial;
