use async_trait::async_trait;
use menu_backend::client::{ClientError, ClientResult, MenuApi};
use menu_backend::entities::status::ItemStatus;
use menu_backend::models::{DishPayload, DishWithCategory, PublicBeverage, PublicDish};
use menu_backend::views::admin_edit::{
    ADMIN_HOME, MSG_CONFIRM_DELETE, MSG_DELETE_FAILED, MSG_DELETED, MSG_LOAD_FAILED,
    MSG_LOAD_UNREACHABLE, MSG_SAVE_FAILED, MSG_SAVED,
};
use menu_backend::views::dish_detail::{MSG_MISSING_ID, MSG_NOT_FOUND, MSG_UNREACHABLE};
use menu_backend::views::price::PriceInput;
use menu_backend::views::viewport::{DESKTOP_REFUSAL_BODY, DESKTOP_REFUSAL_TITLE};
use menu_backend::views::{
    AdminEditView, DetailState, DishDetailView, EditPhase, MenuPhase, MenuView, ViewHost, Viewport,
};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Copy)]
enum Outcome {
    Ok,
    Status(u16),
    Decode,
}

fn fail<T>(outcome: Outcome) -> ClientResult<T> {
    Err(match outcome {
        Outcome::Status(code) => {
            ClientError::Status(StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        }
        Outcome::Decode | Outcome::Ok => {
            ClientError::Decode(serde_json::from_str::<DishWithCategory>("[]").unwrap_err())
        }
    })
}

// Any non-status failure reads as "server unreachable" to the views.
fn unreachable_error<T>() -> ClientResult<T> {
    Err(ClientError::Url(url::ParseError::EmptyHost))
}

struct MockApi {
    dish: Outcome,
    update: Outcome,
    delete: Outcome,
    dishes: Outcome,
    beverages: Outcome,
    delay: Option<Duration>,
    unreachable: bool,
    updates: Mutex<Vec<(String, DishPayload)>>,
    deletes: Mutex<Vec<String>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            dish: Outcome::Ok,
            update: Outcome::Ok,
            delete: Outcome::Ok,
            dishes: Outcome::Ok,
            beverages: Outcome::Ok,
            delay: None,
            unreachable: false,
            updates: Mutex::new(Vec::new()),
            deletes: Mutex::new(Vec::new()),
        }
    }
}

impl MockApi {
    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn result<T>(&self, outcome: Outcome, value: impl FnOnce() -> T) -> ClientResult<T> {
        match outcome {
            Outcome::Ok => Ok(value()),
            _ if self.unreachable => unreachable_error(),
            other => fail(other),
        }
    }
}

fn sample_dish(id: i32) -> DishWithCategory {
    DishWithCategory {
        id,
        name: "Tacos al Pastor".to_string(),
        mini_presentation: Some("Três tacos".to_string()),
        full_description: Some("Tortilhas de milho com porco marinado".to_string()),
        image_url: Some("/img/tacos.jpg".to_string()),
        category_id: Some(2),
        price: 42.5,
        status: ItemStatus::Active,
        display_order: 1,
        created_at: None,
        updated_at: None,
        category_name: Some("Pratos Principais".to_string()),
    }
}

#[async_trait]
impl MenuApi for MockApi {
    async fn get_dish(&self, id: &str) -> ClientResult<DishWithCategory> {
        self.pause().await;
        let id = id.parse().unwrap_or(0);
        self.result(self.dish, || sample_dish(id))
    }

    async fn update_dish(&self, id: &str, payload: &DishPayload) -> ClientResult<()> {
        self.pause().await;
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), payload.clone()));
        self.result(self.update, || ())
    }

    async fn delete_dish(&self, id: &str) -> ClientResult<()> {
        self.pause().await;
        self.deletes.lock().unwrap().push(id.to_string());
        self.result(self.delete, || ())
    }

    async fn public_dishes(&self) -> ClientResult<Vec<PublicDish>> {
        self.pause().await;
        self.result(self.dishes, || {
            vec![PublicDish {
                id: 7,
                name: "Churros".to_string(),
                mini_presentation: None,
                image_url: None,
                price: 19.0,
                category_name: None,
            }]
        })
    }

    async fn public_beverages(&self) -> ClientResult<Vec<PublicBeverage>> {
        self.pause().await;
        self.result(self.beverages, || {
            vec![PublicBeverage {
                id: 1,
                name: "Horchata".to_string(),
                image_url: None,
            }]
        })
    }
}

#[derive(Default)]
struct RecordingHost {
    accept: bool,
    alerts: Mutex<Vec<String>>,
    confirms: Mutex<Vec<String>>,
    navigations: Mutex<Vec<String>>,
}

impl RecordingHost {
    fn accepting() -> Self {
        Self {
            accept: true,
            ..Default::default()
        }
    }

    fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl ViewHost for RecordingHost {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.accept
    }

    fn navigate(&self, path: &str) {
        self.navigations.lock().unwrap().push(path.to_string());
    }
}

// Admin edit

#[tokio::test]
async fn test_admin_load_fills_form() {
    let api = Arc::new(MockApi::default());
    let host = Arc::new(RecordingHost::default());
    let mut view = AdminEditView::new(api, host.clone(), "12");
    assert_eq!(view.phase(), EditPhase::Loading);

    view.load().await;

    assert_eq!(view.phase(), EditPhase::Ready);
    assert_eq!(view.form().name, "Tacos al Pastor");
    assert_eq!(view.form().category_id, Some(2));
    assert_eq!(view.form().price, PriceInput::Value(42.5));
    assert!(host.alerts().is_empty());
}

#[tokio::test]
async fn test_admin_load_failures_alert() {
    let api = Arc::new(MockApi {
        dish: Outcome::Status(404),
        ..Default::default()
    });
    let host = Arc::new(RecordingHost::default());
    let mut view = AdminEditView::new(api, host.clone(), "12");
    view.load().await;
    assert_eq!(host.alerts(), vec![MSG_LOAD_FAILED]);
    assert_eq!(view.phase(), EditPhase::Ready);

    let api = Arc::new(MockApi {
        dish: Outcome::Status(500),
        unreachable: true,
        ..Default::default()
    });
    let host = Arc::new(RecordingHost::default());
    let mut view = AdminEditView::new(api, host.clone(), "12");
    view.load().await;
    assert_eq!(host.alerts(), vec![MSG_LOAD_UNREACHABLE]);
}

#[tokio::test]
async fn test_admin_save_sends_normalized_body_and_navigates() {
    let api = Arc::new(MockApi::default());
    let host = Arc::new(RecordingHost::default());
    let mut view = AdminEditView::new(api.clone(), host.clone(), "12");
    view.load().await;

    view.form_mut().price.on_change("12,50");
    view.form_mut().category_id = Some(0);
    view.form_mut().status = ItemStatus::Paused;

    assert!(view.save().await);
    assert_eq!(view.phase(), EditPhase::Done);
    assert_eq!(host.alerts(), vec![MSG_SAVED]);
    assert_eq!(host.navigations(), vec![ADMIN_HOME]);

    let updates = api.updates.lock().unwrap();
    let (id, payload) = &updates[0];
    assert_eq!(id, "12");
    assert_eq!(payload.price, Some(12.5));
    assert_eq!(payload.category_id, None);
    assert_eq!(payload.status, Some(ItemStatus::Paused));
    assert_eq!(payload.name.as_deref(), Some("Tacos al Pastor"));
}

#[tokio::test]
async fn test_admin_save_failure_keeps_form() {
    let api = Arc::new(MockApi {
        update: Outcome::Status(500),
        ..Default::default()
    });
    let host = Arc::new(RecordingHost::default());
    let mut view = AdminEditView::new(api, host.clone(), "12");
    view.load().await;
    view.form_mut().name = "Novo nome".to_string();

    assert!(!view.save().await);
    assert_eq!(view.phase(), EditPhase::Ready);
    assert_eq!(view.form().name, "Novo nome");
    assert_eq!(host.alerts(), vec![MSG_SAVE_FAILED]);
    assert!(host.navigations().is_empty());
}

#[tokio::test]
async fn test_admin_delete_declined_sends_nothing() {
    let api = Arc::new(MockApi::default());
    let host = Arc::new(RecordingHost::default());
    let mut view = AdminEditView::new(api.clone(), host.clone(), "12");
    view.load().await;

    assert!(!view.delete().await);
    assert_eq!(*host.confirms.lock().unwrap(), vec![MSG_CONFIRM_DELETE]);
    assert!(api.deletes.lock().unwrap().is_empty());
    assert!(host.alerts().is_empty());
}

#[tokio::test]
async fn test_admin_delete_confirmed() {
    let api = Arc::new(MockApi::default());
    let host = Arc::new(RecordingHost::accepting());
    let mut view = AdminEditView::new(api.clone(), host.clone(), "12");
    view.load().await;

    assert!(view.delete().await);
    assert_eq!(*api.deletes.lock().unwrap(), vec!["12"]);
    assert_eq!(host.alerts(), vec![MSG_DELETED]);
    assert_eq!(host.navigations(), vec![ADMIN_HOME]);
    assert_eq!(view.phase(), EditPhase::Done);
}

#[tokio::test]
async fn test_admin_delete_failure_alerts() {
    let api = Arc::new(MockApi {
        delete: Outcome::Status(500),
        ..Default::default()
    });
    let host = Arc::new(RecordingHost::accepting());
    let mut view = AdminEditView::new(api, host.clone(), "12");
    view.load().await;

    assert!(!view.delete().await);
    assert_eq!(host.alerts(), vec![MSG_DELETE_FAILED]);
    assert!(host.navigations().is_empty());
}

#[tokio::test]
async fn test_admin_cancelled_load_is_not_applied() {
    let api = Arc::new(MockApi {
        delay: Some(Duration::from_secs(5)),
        ..Default::default()
    });
    let host = Arc::new(RecordingHost::default());
    let mut view = AdminEditView::new(api, host.clone(), "12");

    let token = view.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });
    view.load().await;

    assert_eq!(view.phase(), EditPhase::Loading);
    assert_eq!(view.form().name, "");
    assert!(host.alerts().is_empty());
}

// Menu

#[tokio::test]
async fn test_menu_loads_both_listings() {
    let mut view = MenuView::new(Arc::new(MockApi::default()), Viewport::from_width(375));
    view.load().await;

    assert_eq!(view.phase(), MenuPhase::Ready);
    assert_eq!(view.dishes().len(), 1);
    assert!(view.shows_beverages());
    assert_eq!(MenuView::dish_link(&view.dishes()[0]), "/prato/7");
}

#[tokio::test]
async fn test_menu_beverage_failure_keeps_dishes() {
    let api = Arc::new(MockApi {
        beverages: Outcome::Status(500),
        ..Default::default()
    });
    let mut view = MenuView::new(api, Viewport::Mobile);
    view.load().await;

    assert_eq!(view.phase(), MenuPhase::Ready);
    assert_eq!(view.dishes().len(), 1);
    assert!(!view.shows_beverages());
}

#[tokio::test]
async fn test_menu_dish_failure_keeps_beverages() {
    let api = Arc::new(MockApi {
        dishes: Outcome::Status(500),
        unreachable: true,
        ..Default::default()
    });
    let mut view = MenuView::new(api, Viewport::Mobile);
    view.load().await;

    assert_eq!(view.phase(), MenuPhase::Ready);
    assert!(view.dishes().is_empty());
    assert_eq!(view.beverages().len(), 1);
}

#[tokio::test]
async fn test_menu_refuses_desktop() {
    let mut view = MenuView::new(Arc::new(MockApi::default()), Viewport::from_width(1024));
    assert_eq!(view.phase(), MenuPhase::Refused);
    assert_eq!(
        view.phase().refusal_text(),
        Some((DESKTOP_REFUSAL_TITLE, DESKTOP_REFUSAL_BODY))
    );

    view.load().await;
    assert_eq!(view.phase(), MenuPhase::Refused);
    assert!(view.dishes().is_empty());

    view.resize(400).await;
    assert_eq!(view.phase(), MenuPhase::Ready);
    assert_eq!(view.phase().refusal_text(), None);
    assert_eq!(view.dishes().len(), 1);

    view.resize(1280).await;
    assert_eq!(view.phase(), MenuPhase::Refused);
}

#[tokio::test]
async fn test_menu_close_drops_pending_results() {
    let api = Arc::new(MockApi {
        delay: Some(Duration::from_secs(5)),
        ..Default::default()
    });
    let mut view = MenuView::new(api, Viewport::Mobile);
    view.close();
    view.load().await;

    assert_eq!(view.phase(), MenuPhase::Loading);
    assert!(view.dishes().is_empty());
    assert!(view.beverages().is_empty());
}

// Dish detail

#[tokio::test]
async fn test_detail_ready() {
    let mut view = DishDetailView::new(
        Arc::new(MockApi::default()),
        Some("5".to_string()),
        Viewport::Mobile,
    );
    view.load().await;

    match view.state() {
        DetailState::Ready(dish) => assert_eq!(dish.id, 5),
        other => panic!("unexpected state: {:?}", other),
    }
    assert_eq!(view.title(), "Tacos al Pastor - Cardápio");
    assert_eq!(
        view.description().as_deref(),
        Some("Tortilhas de milho com porco marinado")
    );
}

#[tokio::test]
async fn test_detail_missing_id() {
    let mut view = DishDetailView::new(Arc::new(MockApi::default()), None, Viewport::Mobile);
    view.load().await;
    assert_eq!(*view.state(), DetailState::Error(MSG_MISSING_ID.to_string()));

    let mut view = DishDetailView::new(
        Arc::new(MockApi::default()),
        Some("  ".to_string()),
        Viewport::Mobile,
    );
    view.load().await;
    assert_eq!(*view.state(), DetailState::Error(MSG_MISSING_ID.to_string()));
}

#[tokio::test]
async fn test_detail_failures() {
    let cases = [
        (
            Outcome::Status(404),
            false,
            DetailState::Error("Erro ao carregar prato (404)".to_string()),
        ),
        (
            Outcome::Status(500),
            false,
            DetailState::Error("Erro ao carregar prato (500)".to_string()),
        ),
        (Outcome::Decode, false, DetailState::NotFound),
        (
            Outcome::Status(500),
            true,
            DetailState::Error(MSG_UNREACHABLE.to_string()),
        ),
    ];

    for (outcome, unreachable, expected) in cases {
        let api = Arc::new(MockApi {
            dish: outcome,
            unreachable,
            ..Default::default()
        });
        let mut view = DishDetailView::new(api, Some("5".to_string()), Viewport::Mobile);
        view.load().await;
        assert_eq!(*view.state(), expected);
        assert_eq!(view.title(), "Cardápio");
        assert!(view.state().message().is_some());
    }
}

#[tokio::test]
async fn test_detail_body_without_dish_is_not_found() {
    let api = Arc::new(MockApi {
        dish: Outcome::Decode,
        ..Default::default()
    });
    let mut view = DishDetailView::new(api, Some("5".to_string()), Viewport::Mobile);
    view.load().await;

    assert_eq!(*view.state(), DetailState::NotFound);
    assert_eq!(view.state().message(), Some(MSG_NOT_FOUND));
}

#[tokio::test]
async fn test_detail_refuses_desktop() {
    let mut view = DishDetailView::new(
        Arc::new(MockApi::default()),
        Some("5".to_string()),
        Viewport::Desktop,
    );
    view.load().await;
    assert_eq!(*view.state(), DetailState::Refused);
    assert_eq!(
        view.state().refusal_text(),
        Some((DESKTOP_REFUSAL_TITLE, DESKTOP_REFUSAL_BODY))
    );

    view.resize(360).await;
    match view.state() {
        DetailState::Ready(dish) => assert_eq!(dish.id, 5),
        other => panic!("unexpected state: {:?}", other),
    }

    view.resize(1440).await;
    assert_eq!(*view.state(), DetailState::Refused);

    // Same class of width: nothing to redo.
    view.resize(1920).await;
    assert_eq!(*view.state(), DetailState::Refused);
}

#[tokio::test]
async fn test_detail_cancelled_load_keeps_loading() {
    let api = Arc::new(MockApi {
        delay: Some(Duration::from_secs(5)),
        ..Default::default()
    });
    let mut view = DishDetailView::new(api, Some("5".to_string()), Viewport::Mobile);
    view.close();
    view.load().await;
    assert_eq!(*view.state(), DetailState::Loading);
}
