use super::viewport::{self, Viewport};
use crate::client::{ClientResult, MenuApi, cancellable};
use crate::models::{PublicBeverage, PublicDish};
use futures::future::join;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuPhase {
    /// Desktop viewport: only the refusal message is shown.
    Refused,
    Loading,
    Ready,
}

impl MenuPhase {
    /// Heading and body to show instead of the menu, if any.
    pub fn refusal_text(self) -> Option<(&'static str, &'static str)> {
        match self {
            MenuPhase::Refused => Some(viewport::refusal_text()),
            _ => None,
        }
    }
}

/// Public landing page: beverages strip plus the dish grid.
pub struct MenuView {
    api: Arc<dyn MenuApi>,
    viewport: Viewport,
    dishes: Vec<PublicDish>,
    beverages: Vec<PublicBeverage>,
    phase: MenuPhase,
    cancel: CancellationToken,
}

impl MenuView {
    pub fn new(api: Arc<dyn MenuApi>, viewport: Viewport) -> Self {
        let phase = if viewport.is_desktop() {
            MenuPhase::Refused
        } else {
            MenuPhase::Loading
        };

        Self {
            api,
            viewport,
            dishes: Vec::new(),
            beverages: Vec::new(),
            phase,
            cancel: CancellationToken::new(),
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn dishes(&self) -> &[PublicDish] {
        &self.dishes
    }

    pub fn beverages(&self) -> &[PublicBeverage] {
        &self.beverages
    }

    /// The beverages section is omitted when there is nothing to show.
    pub fn shows_beverages(&self) -> bool {
        !self.beverages.is_empty()
    }

    pub fn dish_link(dish: &PublicDish) -> String {
        format!("/prato/{}", dish.id)
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    /// Fetches both listings concurrently. A failed listing is shown as
    /// empty without affecting the other one.
    pub async fn load(&mut self) {
        if self.viewport.is_desktop() {
            self.phase = MenuPhase::Refused;
            return;
        }
        self.phase = MenuPhase::Loading;

        let (dishes, beverages) = join(
            cancellable(&self.cancel, self.api.public_dishes()),
            cancellable(&self.cancel, self.api.public_beverages()),
        )
        .await;

        if self.cancel.is_cancelled() {
            return;
        }

        self.dishes = listing_or_empty("dishes", dishes);
        self.beverages = listing_or_empty("beverages", beverages);
        self.phase = MenuPhase::Ready;
    }

    /// Re-evaluates the viewport; turning into a phone triggers a load.
    pub async fn resize(&mut self, width_px: u32) {
        let viewport = Viewport::from_width(width_px);
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;

        if viewport.is_desktop() {
            self.phase = MenuPhase::Refused;
        } else {
            self.load().await;
        }
    }
}

impl Drop for MenuView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn listing_or_empty<T>(what: &str, result: ClientResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!("Could not load {}: {}", what, e);
        Vec::new()
    })
}
