use super::ViewHost;
use super::description::{self, EditRejection, Key};
use super::price::PriceInput;
use crate::client::{ClientError, MenuApi, cancellable};
use crate::entities::status::ItemStatus;
use crate::models::{DishPayload, DishWithCategory};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub const ADMIN_HOME: &str = "/admin";

pub const MSG_LOAD_FAILED: &str = "Erro ao carregar dados do prato";
pub const MSG_LOAD_UNREACHABLE: &str = "Erro ao carregar dados do prato. Verifique o console.";
pub const MSG_SAVED: &str = "Prato atualizado com sucesso!";
pub const MSG_SAVE_FAILED: &str = "Erro ao atualizar prato";
pub const MSG_CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este prato?";
pub const MSG_DELETED: &str = "Prato excluído com sucesso!";
pub const MSG_DELETE_FAILED: &str = "Erro ao excluir prato";

/// Statuses the form lets an admin pick, with their labels.
pub const STATUS_OPTIONS: [(ItemStatus, &str); 2] =
    [(ItemStatus::Active, "Ativo"), (ItemStatus::Paused, "Pausado")];

/// Local edit state of one dish.
#[derive(Clone, Debug, PartialEq)]
pub struct DishForm {
    pub name: String,
    pub mini_presentation: String,
    full_description: String,
    pub image_url: String,
    pub category_id: Option<i32>,
    pub price: PriceInput,
    pub status: ItemStatus,
    pub display_order: i32,
}

impl Default for DishForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            mini_presentation: String::new(),
            full_description: String::new(),
            image_url: String::new(),
            category_id: None,
            price: PriceInput::default(),
            status: ItemStatus::Active,
            display_order: 0,
        }
    }
}

impl DishForm {
    /// Seeds the form from a fetched dish, falling back to empty values.
    pub fn from_dish(dish: &DishWithCategory) -> Self {
        Self {
            name: dish.name.clone(),
            mini_presentation: dish.mini_presentation.clone().unwrap_or_default(),
            full_description: dish.full_description.clone().unwrap_or_default(),
            image_url: dish.image_url.clone().unwrap_or_default(),
            category_id: dish.category_id.filter(|id| *id != 0),
            price: PriceInput::Value(dish.price),
            status: dish.status,
            display_order: dish.display_order,
        }
    }

    pub fn full_description(&self) -> &str {
        &self.full_description
    }

    /// Replaces the description unless the new text breaks a cap, in which
    /// case the previous value is kept.
    pub fn set_full_description(&mut self, text: &str) -> Result<(), EditRejection> {
        description::check_description(text)?;
        self.full_description = text.to_string();
        Ok(())
    }

    pub fn description_key_allowed(&self, key: Key) -> bool {
        description::key_allowed(&self.full_description, key)
    }

    pub fn description_counter(&self) -> String {
        description::counter_label(&self.full_description)
    }

    /// Full PUT body. A zero category is sent as null.
    pub fn to_payload(&self) -> DishPayload {
        DishPayload {
            name: Some(self.name.clone()),
            mini_presentation: Some(self.mini_presentation.clone()),
            full_description: Some(self.full_description.clone()),
            image_url: Some(self.image_url.clone()),
            category_id: self.category_id.filter(|id| *id != 0),
            price: Some(self.price.value()),
            status: Some(self.status),
            display_order: Some(self.display_order),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditPhase {
    Loading,
    Ready,
    Saving,
    /// Saved or deleted; the host has been sent back to the admin list.
    Done,
}

/// Admin page editing a single dish.
pub struct AdminEditView {
    api: Arc<dyn MenuApi>,
    host: Arc<dyn ViewHost>,
    dish_id: String,
    form: DishForm,
    phase: EditPhase,
    cancel: CancellationToken,
}

impl AdminEditView {
    pub fn new(api: Arc<dyn MenuApi>, host: Arc<dyn ViewHost>, dish_id: impl Into<String>) -> Self {
        Self {
            api,
            host,
            dish_id: dish_id.into(),
            form: DishForm::default(),
            phase: EditPhase::Loading,
            cancel: CancellationToken::new(),
        }
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn form(&self) -> &DishForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DishForm {
        &mut self.form
    }

    /// Token the host cancels when the page goes away.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn close(&self) {
        self.cancel.cancel();
    }

    pub async fn load(&mut self) {
        self.phase = EditPhase::Loading;

        let result = cancellable(&self.cancel, self.api.get_dish(&self.dish_id)).await;
        match result {
            Err(ClientError::Cancelled) => return,
            Ok(dish) => {
                self.form = DishForm::from_dish(&dish);
            }
            Err(ClientError::Status(status)) => {
                error!("Failed to load dish {}: status {}", self.dish_id, status);
                self.host.alert(MSG_LOAD_FAILED);
            }
            Err(e) => {
                error!("Failed to load dish {}: {}", self.dish_id, e);
                self.host.alert(MSG_LOAD_UNREACHABLE);
            }
        }

        self.phase = EditPhase::Ready;
    }

    /// Sends the whole form. Returns `true` when the dish was saved.
    pub async fn save(&mut self) -> bool {
        if self.phase == EditPhase::Saving {
            return false;
        }
        self.phase = EditPhase::Saving;

        let payload = self.form.to_payload();
        let result = cancellable(
            &self.cancel,
            self.api.update_dish(&self.dish_id, &payload),
        )
        .await;

        match result {
            Err(ClientError::Cancelled) => false,
            Ok(()) => {
                info!("Dish {} saved", self.dish_id);
                self.host.alert(MSG_SAVED);
                self.host.navigate(ADMIN_HOME);
                self.phase = EditPhase::Done;
                true
            }
            Err(e) => {
                error!("Failed to save dish {}: {}", self.dish_id, e);
                self.host.alert(MSG_SAVE_FAILED);
                self.phase = EditPhase::Ready;
                false
            }
        }
    }

    /// Asks for confirmation, then deletes. Returns `true` when deleted.
    pub async fn delete(&mut self) -> bool {
        if !self.host.confirm(MSG_CONFIRM_DELETE) {
            return false;
        }

        let result = cancellable(&self.cancel, self.api.delete_dish(&self.dish_id)).await;
        match result {
            Err(ClientError::Cancelled) => false,
            Ok(()) => {
                info!("Dish {} deleted", self.dish_id);
                self.host.alert(MSG_DELETED);
                self.host.navigate(ADMIN_HOME);
                self.phase = EditPhase::Done;
                true
            }
            Err(e) => {
                error!("Failed to delete dish {}: {}", self.dish_id, e);
                self.host.alert(MSG_DELETE_FAILED);
                false
            }
        }
    }
}

impl Drop for AdminEditView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
