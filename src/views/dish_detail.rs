use super::viewport::{self, Viewport};
use crate::client::{ClientError, MenuApi, cancellable};
use crate::models::DishWithCategory;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Longest description shown before it is cut with an ellipsis.
pub const DESCRIPTION_DISPLAY_LIMIT: usize = 400;

pub const MSG_MISSING_ID: &str = "ID do prato não encontrado";
pub const MSG_NOT_FOUND: &str = "Prato não encontrado";
pub const MSG_UNREACHABLE: &str = "Erro ao conectar com o servidor";

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    /// Desktop viewport: only the refusal message is shown.
    Refused,
    Loading,
    Error(String),
    NotFound,
    Ready(Box<DishWithCategory>),
}

impl DetailState {
    pub fn refusal_text(&self) -> Option<(&'static str, &'static str)> {
        match self {
            DetailState::Refused => Some(viewport::refusal_text()),
            _ => None,
        }
    }

    /// Text shown in place of the dish for error and not-found states.
    pub fn message(&self) -> Option<&str> {
        match self {
            DetailState::Error(msg) => Some(msg),
            DetailState::NotFound => Some(MSG_NOT_FOUND),
            _ => None,
        }
    }
}

/// Cuts `text` to `limit` characters, trims, and appends `...`.
pub fn truncate_description(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut.trim())
}

/// Description shown on the detail page: the full text when present,
/// otherwise the short presentation.
pub fn display_description(dish: &DishWithCategory) -> String {
    let text = [&dish.full_description, &dish.mini_presentation]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(String::as_str)
        .unwrap_or("");

    truncate_description(text, DESCRIPTION_DISPLAY_LIMIT)
}

/// Read-only page for one dish.
pub struct DishDetailView {
    api: Arc<dyn MenuApi>,
    dish_id: Option<String>,
    viewport: Viewport,
    state: DetailState,
    cancel: CancellationToken,
}

impl DishDetailView {
    pub fn new(api: Arc<dyn MenuApi>, dish_id: Option<String>, viewport: Viewport) -> Self {
        let state = if viewport.is_desktop() {
            DetailState::Refused
        } else {
            DetailState::Loading
        };

        Self {
            api,
            dish_id,
            viewport,
            state,
            cancel: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn title(&self) -> String {
        match &self.state {
            DetailState::Ready(dish) => format!("{} - Cardápio", dish.name),
            _ => "Cardápio".to_string(),
        }
    }

    pub fn description(&self) -> Option<String> {
        match &self.state {
            DetailState::Ready(dish) => Some(display_description(dish)),
            _ => None,
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    /// Re-evaluates the viewport; turning into a phone triggers a load.
    pub async fn resize(&mut self, width_px: u32) {
        let viewport = Viewport::from_width(width_px);
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;

        if viewport.is_desktop() {
            self.state = DetailState::Refused;
        } else {
            self.load().await;
        }
    }

    pub async fn load(&mut self) {
        if self.viewport.is_desktop() {
            self.state = DetailState::Refused;
            return;
        }

        let Some(id) = self
            .dish_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        else {
            self.state = DetailState::Error(MSG_MISSING_ID.to_string());
            return;
        };

        self.state = DetailState::Loading;
        debug!("Loading dish {}", id);

        let result = cancellable(&self.cancel, self.api.get_dish(id)).await;
        self.state = match result {
            Err(ClientError::Cancelled) => return,
            Ok(dish) => DetailState::Ready(Box::new(dish)),
            // 404 included: not-found is reserved for a 200 that is not a dish.
            Err(ClientError::Status(status)) => {
                error!("Failed to load dish {}: status {}", id, status);
                DetailState::Error(format!("Erro ao carregar prato ({})", status.as_u16()))
            }
            // A 200 whose body is not a dish.
            Err(ClientError::Decode(e)) => {
                error!("Dish {} response is not a dish: {}", id, e);
                DetailState::NotFound
            }
            Err(e) => {
                error!("Failed to load dish {}: {}", id, e);
                DetailState::Error(MSG_UNREACHABLE.to_string())
            }
        };
    }
}

impl Drop for DishDetailView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::status::ItemStatus;

    fn dish(full: Option<&str>, mini: Option<&str>) -> DishWithCategory {
        DishWithCategory {
            id: 1,
            name: "Churros".to_string(),
            mini_presentation: mini.map(str::to_string),
            full_description: full.map(str::to_string),
            image_url: None,
            category_id: None,
            price: 19.0,
            status: ItemStatus::Active,
            display_order: 0,
            created_at: None,
            updated_at: None,
            category_name: None,
        }
    }

    #[test]
    fn test_truncate_401_chars() {
        let text = "a".repeat(401);
        let shown = truncate_description(&text, DESCRIPTION_DISPLAY_LIMIT);
        assert_eq!(shown, format!("{}...", "a".repeat(400)));
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        let text = "b".repeat(400);
        assert_eq!(truncate_description(&text, DESCRIPTION_DISPLAY_LIMIT), text);
    }

    #[test]
    fn test_truncate_trims_before_ellipsis() {
        let text = format!("{}   {}", "c".repeat(397), "d".repeat(10));
        let shown = truncate_description(&text, DESCRIPTION_DISPLAY_LIMIT);
        assert_eq!(shown, format!("{}...", "c".repeat(397)));
    }

    #[test]
    fn test_state_messages() {
        assert_eq!(DetailState::NotFound.message(), Some(MSG_NOT_FOUND));
        assert_eq!(
            DetailState::Error(MSG_UNREACHABLE.to_string()).message(),
            Some(MSG_UNREACHABLE)
        );
        assert_eq!(DetailState::Loading.message(), None);
        assert_eq!(
            DetailState::Refused.refusal_text(),
            Some(viewport::refusal_text())
        );
        assert_eq!(DetailState::NotFound.refusal_text(), None);
    }

    #[test]
    fn test_prefers_full_description() {
        assert_eq!(display_description(&dish(Some("longa"), Some("curta"))), "longa");
        assert_eq!(display_description(&dish(Some(""), Some("curta"))), "curta");
        assert_eq!(display_description(&dish(None, Some("curta"))), "curta");
        assert_eq!(display_description(&dish(None, None)), "");
    }
}
