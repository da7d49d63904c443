mod bottom_nav;
mod drag_row;
mod home;
mod profile;
mod status_bar;

pub use bottom_nav::BottomNavWidget;
pub use drag_row::{DragRow, DragRowState, RowCard, CARD_HEIGHT};
pub use home::HomeWidget;
pub use profile::ProfileWidget;
pub use status_bar::StatusBarWidget;
