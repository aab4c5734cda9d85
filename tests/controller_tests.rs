use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use vendor_portal::client::VendorApi;
use vendor_portal::controllers::account_controller::{
    AccountController, DeleteConfirmation, DeleteOutcome,
};
use vendor_portal::controllers::dashboard_controller::{DashboardController, DashboardNotice};
use vendor_portal::controllers::password_controller::{PasswordController, PasswordState};
use vendor_portal::controllers::profile_controller::ProfileController;
use vendor_portal::dto::profile_dto::{ApiResponse, UpdateProfileRequest};
use vendor_portal::models::user::SessionUser;
use vendor_portal::models::vehicle::{Vehicle, VehicleStatus};
use vendor_portal::navigation::{Navigator, Route};
use vendor_portal::state::SessionStore;
use vendor_portal::utils::errors::{AppError, AppResult};

#[tokio::test]
async fn test_fetch_forbidden_shows_access_denied_notice() {
    let api = Arc::new(FakeVendorApi::failing_vehicles(AppError::Forbidden(
        String::new(),
    )));
    let mut dashboard = DashboardController::new(api, session_with_token().await);

    dashboard.load_vehicles().await;

    assert_eq!(dashboard.notice(), Some(DashboardNotice::AccessDenied));
    assert!(!dashboard.is_loading());
    assert!(dashboard.vehicles().is_empty());
}

#[tokio::test]
async fn test_fetch_unauthorized_shows_session_expired_notice() {
    let api = Arc::new(FakeVendorApi::failing_vehicles(AppError::Unauthorized(
        String::new(),
    )));
    let mut dashboard = DashboardController::new(api, session_with_token().await);

    dashboard.load_vehicles().await;

    assert_eq!(dashboard.notice(), Some(DashboardNotice::SessionExpired));
    assert!(!dashboard.is_loading());
}

#[tokio::test]
async fn test_generic_fetch_error_is_log_only() {
    let api = Arc::new(FakeVendorApi::failing_vehicles(AppError::ExternalApi {
        status: Some(500),
        message: None,
    }));
    let mut dashboard = DashboardController::new(api, session_with_token().await);

    dashboard.load_vehicles().await;

    // Sin aviso para errores genéricos; el flag de carga termina limpio
    assert_eq!(dashboard.notice(), None);
    assert!(!dashboard.is_loading());
    assert!(dashboard.vehicles().is_empty());
}

#[tokio::test]
async fn test_stats_derive_from_fetched_snapshot() {
    let api = Arc::new(FakeVendorApi::with_vehicles(vec![
        vehicle(VehicleStatus::Available, 1000),
        vehicle(VehicleStatus::Booked, 2000),
    ]));
    let mut dashboard = DashboardController::new(api, session_with_token().await);

    dashboard.load_vehicles().await;
    let stats = dashboard.stats();

    assert_eq!(stats.total_cars, 2);
    assert_eq!(stats.available_cars, 1);
    assert_eq!(stats.rented_cars, 1);
    assert_eq!(stats.maintenance_cars, 0);
    assert_eq!(stats.total_earnings, Decimal::from(3000));
    assert!(!stats.booking_metrics.is_integrated());
}

#[tokio::test]
async fn test_short_password_is_rejected_without_api_call() {
    let api = Arc::new(FakeVendorApi::default());
    let mut controller = PasswordController::new(api.clone(), session_with_token().await);

    controller.open();
    controller.form_mut().current_password = "actual".to_string();
    controller.form_mut().new_password = "abc".to_string();
    controller.form_mut().confirm_password = "abc".to_string();

    let result = controller.submit().await;

    assert_eq!(
        result.unwrap_err(),
        "Password must be at least 6 characters long"
    );
    assert_eq!(api.update_calls(), 0);
    assert_eq!(controller.state(), PasswordState::Error);
}

#[tokio::test]
async fn test_password_mismatch_is_rejected_before_length() {
    let api = Arc::new(FakeVendorApi::default());
    let mut controller = PasswordController::new(api.clone(), session_with_token().await);

    controller.open();
    controller.form_mut().current_password = "actual".to_string();
    controller.form_mut().new_password = "abc".to_string();
    controller.form_mut().confirm_password = "abd".to_string();

    let result = controller.submit().await;

    assert_eq!(
        result.unwrap_err(),
        "New password and confirm password do not match"
    );
    assert_eq!(api.update_calls(), 0);
}

#[tokio::test]
async fn test_password_change_success_closes_and_clears() {
    let api = Arc::new(FakeVendorApi::default());
    let mut controller = PasswordController::new(api.clone(), session_with_token().await);

    controller.open();
    controller.form_mut().current_password = "actual".to_string();
    controller.form_mut().new_password = "nueva123".to_string();
    controller.form_mut().confirm_password = "nueva123".to_string();

    let result = controller.submit().await;

    assert_eq!(result.unwrap(), "Password changed successfully!");
    assert_eq!(controller.state(), PasswordState::Idle);
    assert!(controller.form().current_password.is_empty());
    assert!(controller.form().new_password.is_empty());
    assert!(controller.form().confirm_password.is_empty());
    assert!(controller.error().is_none());

    let payload = api.last_update_payload().expect("update_profile called");
    assert_eq!(payload.current_password.as_deref(), Some("actual"));
    assert_eq!(payload.password.as_deref(), Some("nueva123"));
}

#[tokio::test]
async fn test_password_failure_keeps_modal_open_with_server_message() {
    let api = Arc::new(FakeVendorApi::default());
    api.fail_next_update(AppError::ExternalApi {
        status: Some(400),
        message: Some("Current password is incorrect".to_string()),
    });
    let mut controller = PasswordController::new(api.clone(), session_with_token().await);

    controller.open();
    controller.form_mut().current_password = "equivocada".to_string();
    controller.form_mut().new_password = "nueva123".to_string();
    controller.form_mut().confirm_password = "nueva123".to_string();

    let result = controller.submit().await;

    assert_eq!(result.unwrap_err(), "Current password is incorrect");
    assert_eq!(controller.state(), PasswordState::Error);
    assert_eq!(controller.error(), Some("Current password is incorrect"));
    // Los campos siguen disponibles para reintentar
    assert_eq!(controller.form().new_password, "nueva123");
}

#[tokio::test]
async fn test_profile_save_payload_contains_exactly_name_and_phone() {
    let api = Arc::new(FakeVendorApi::default());
    let session = session_with_user().await;
    let mut profile = ProfileController::new(api.clone(), session.clone());
    profile.refresh_from_session().await;

    // Editar campos de negocio no amplía el payload
    profile.form_mut().business_name = "Otro Nombre SL".to_string();
    profile.form_mut().tax_id = "X123".to_string();

    profile.save().await.expect("save should succeed");

    let payload = api.last_update_payload().expect("update_profile called");
    let value = serde_json::to_value(&payload).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["name", "phoneNo"]);
    assert_eq!(value["name"], "Ravi Verma");
    assert_eq!(value["phoneNo"], "+91 90000 00001");
}

#[tokio::test]
async fn test_profile_save_merges_patch_into_session() {
    let api = Arc::new(FakeVendorApi::default());
    let session = session_with_user().await;
    let mut profile = ProfileController::new(api, session.clone());
    profile.refresh_from_session().await;
    profile.form_mut().full_name = "Ravi V. Verma".to_string();

    profile.save().await.expect("save should succeed");

    let user = session.current_user().await.unwrap();
    assert_eq!(user.name.as_deref(), Some("Ravi V. Verma"));
    assert!(profile.save_succeeded());
}

#[tokio::test]
async fn test_profile_save_failure_surfaces_server_message() {
    let api = Arc::new(FakeVendorApi::default());
    api.fail_next_update(AppError::ExternalApi {
        status: Some(409),
        message: Some("Phone number already in use".to_string()),
    });
    let session = session_with_user().await;
    let mut profile = ProfileController::new(api, session);
    profile.refresh_from_session().await;

    let result = profile.save().await;

    assert_eq!(result.unwrap_err(), "Phone number already in use");
    assert!(!profile.save_succeeded());
    assert!(!profile.is_saving());
}

#[tokio::test]
async fn test_delete_account_confirmed_logs_out_and_navigates_once() {
    let api = Arc::new(FakeVendorApi::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let session = session_with_token().await;
    let mut account = AccountController::new(api.clone(), session.clone(), navigator.clone());

    let outcome = account.delete_account(DeleteConfirmation::Confirmed).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(api.delete_calls(), 1);
    assert!(!session.is_authenticated().await);
    assert_eq!(navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn test_delete_account_cancelled_makes_no_call() {
    let api = Arc::new(FakeVendorApi::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let session = session_with_token().await;
    let mut account = AccountController::new(api.clone(), session.clone(), navigator.clone());

    let outcome = account.delete_account(DeleteConfirmation::Cancelled).await;

    assert_eq!(outcome, DeleteOutcome::Aborted);
    assert_eq!(api.delete_calls(), 0);
    assert!(session.is_authenticated().await);
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn test_delete_account_failure_keeps_session_intact() {
    let api = Arc::new(FakeVendorApi::default());
    api.fail_next_delete(AppError::ExternalApi {
        status: Some(500),
        message: None,
    });
    let navigator = Arc::new(RecordingNavigator::default());
    let session = session_with_token().await;
    let mut account = AccountController::new(api.clone(), session.clone(), navigator.clone());

    let outcome = account.delete_account(DeleteConfirmation::Confirmed).await;

    assert_eq!(
        outcome,
        DeleteOutcome::Failed("Failed to delete account. Please try again.".to_string())
    );
    assert!(session.is_authenticated().await);
    assert!(navigator.routes().is_empty());
}

// Función helper para crear una sesión de test con token
async fn session_with_token() -> SessionStore {
    let session = SessionStore::new();
    session
        .set_session(SessionUser::default(), "test-token".to_string())
        .await;
    session
}

// Sesión de test con un usuario completo
async fn session_with_user() -> SessionStore {
    let session = SessionStore::new();
    let user = SessionUser {
        name: Some("Ravi Verma".to_string()),
        email: Some("ravi@example.com".to_string()),
        phone_no: Some("+91 90000 00001".to_string()),
        ..Default::default()
    };
    session.set_session(user, "test-token".to_string()).await;
    session
}

fn vehicle(status: VehicleStatus, price: i64) -> Vehicle {
    Vehicle {
        status,
        price_per_day: Decimal::from(price),
        ..Default::default()
    }
}

/// Implementación en memoria del API para los tests de controladores
#[derive(Default)]
struct FakeVendorApi {
    vehicles: Mutex<Vec<Vehicle>>,
    vehicles_error: Mutex<Option<AppError>>,
    update_error: Mutex<Option<AppError>>,
    delete_error: Mutex<Option<AppError>>,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    last_update_payload: Mutex<Option<UpdateProfileRequest>>,
}

impl FakeVendorApi {
    fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        let api = Self::default();
        *api.vehicles.lock().unwrap() = vehicles;
        api
    }

    fn failing_vehicles(error: AppError) -> Self {
        let api = Self::default();
        *api.vehicles_error.lock().unwrap() = Some(error);
        api
    }

    fn fail_next_update(&self, error: AppError) {
        *self.update_error.lock().unwrap() = Some(error);
    }

    fn fail_next_delete(&self, error: AppError) {
        *self.delete_error.lock().unwrap() = Some(error);
    }

    fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn last_update_payload(&self) -> Option<UpdateProfileRequest> {
        self.last_update_payload.lock().unwrap().clone()
    }
}

#[async_trait]
impl VendorApi for FakeVendorApi {
    async fn get_vendor_vehicles(&self, _token: &str) -> AppResult<Vec<Vehicle>> {
        if let Some(error) = self.vehicles_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.vehicles.lock().unwrap().clone())
    }

    async fn update_profile(
        &self,
        _token: &str,
        request: &UpdateProfileRequest,
    ) -> AppResult<ApiResponse<SessionUser>> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_update_payload.lock().unwrap() = Some(request.clone());

        if let Some(error) = self.update_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(ApiResponse::success(SessionUser::default()))
    }

    async fn delete_profile(&self, _token: &str) -> AppResult<ApiResponse<()>> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.delete_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(ApiResponse::success(()))
    }
}

/// Navegador de test que registra las transiciones solicitadas
#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
