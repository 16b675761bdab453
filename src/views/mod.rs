//! UI-agnostic view models for the menu pages.
//!
//! Each view owns a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! tied to its lifetime: closing or dropping the view cancels whatever it
//! still has in flight, and a cancelled response is never applied.

pub mod admin_edit;
pub mod description;
pub mod dish_detail;
pub mod menu;
pub mod price;
pub mod viewport;

pub use admin_edit::{AdminEditView, DishForm, EditPhase};
pub use dish_detail::{DetailState, DishDetailView};
pub use menu::{MenuPhase, MenuView};
pub use viewport::Viewport;

/// Side effects a view asks its host to perform.
pub trait ViewHost: Send + Sync {
    /// Blocking message box.
    fn alert(&self, message: &str);

    /// Yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;

    fn navigate(&self, path: &str);
}
