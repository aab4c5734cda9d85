//! Controlador del editor de perfil
//! 
//! Formulario de datos del vendedor sembrado desde el usuario de sesión.
//! El guardado transmite únicamente nombre y teléfono, replica el parche en
//! la sesión compartida y muestra un banner de éxito que se autodescarta.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::client::VendorApi;
use crate::dto::profile_dto::UpdateProfileRequest;
use crate::models::preferences::{NotificationPreferences, PreferenceKey};
use crate::state::SessionStore;

/// Duración del banner de éxito antes de autodescartarse
const SAVE_BANNER_SECS: u64 = 3;

/// Mensaje genérico cuando el servidor no aporta uno
const GENERIC_SAVE_ERROR: &str = "Failed to save settings. Please try again.";

// Valores locales por defecto de los campos de negocio; no provienen del
// backend y no se reconcilian con él
const DEFAULT_BUSINESS_NAME: &str = "RentYourCar Express";
const DEFAULT_BUSINESS_ADDRESS: &str = "123 Car Street, Mumbai, MH 400001";
const DEFAULT_BUSINESS_PHONE: &str = "+91 98765 43200";
const DEFAULT_TAX_ID: &str = "TIN123456789";

/// Campos editables del formulario de vendedor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorInfoForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub business_address: String,
    pub business_phone: String,
    pub tax_id: String,
}

impl Default for VendorInfoForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            business_name: DEFAULT_BUSINESS_NAME.to_string(),
            business_address: DEFAULT_BUSINESS_ADDRESS.to_string(),
            business_phone: DEFAULT_BUSINESS_PHONE.to_string(),
            tax_id: DEFAULT_TAX_ID.to_string(),
        }
    }
}

/// Controlador de la sección de perfil de la pantalla de ajustes
pub struct ProfileController {
    api: Arc<dyn VendorApi>,
    session: SessionStore,
    form: VendorInfoForm,
    preferences: NotificationPreferences,
    saving: bool,
    save_success: Arc<AtomicBool>,
    banner_timer: Option<JoinHandle<()>>,
    error: Option<String>,
}

impl ProfileController {
    pub fn new(api: Arc<dyn VendorApi>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            form: VendorInfoForm::default(),
            preferences: NotificationPreferences::default(),
            saving: false,
            save_success: Arc::new(AtomicBool::new(false)),
            banner_timer: None,
            error: None,
        }
    }

    /// Resembrar nombre, email y teléfono desde el usuario de sesión.
    /// Se invoca cada vez que el usuario de sesión cambia; los campos de
    /// negocio conservan su valor local.
    pub async fn refresh_from_session(&mut self) {
        if let Some(user) = self.session.current_user().await {
            self.form.full_name = user.display_name().unwrap_or_default().to_string();
            self.form.email = user.email.clone().unwrap_or_default();
            self.form.phone = user.contact_phone().unwrap_or_default().to_string();
        }
    }

    pub fn form(&self) -> &VendorInfoForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut VendorInfoForm {
        &mut self.form
    }

    pub fn preferences(&self) -> &NotificationPreferences {
        &self.preferences
    }

    /// Toggle local de una preferencia.
    /// Las preferencias todavía no se persisten: el guardado solo transmite
    /// campos de perfil.
    pub fn toggle_preference(&mut self, key: PreferenceKey) {
        self.preferences.toggle(key);
    }

    /// Guardar los ajustes del perfil.
    ///
    /// Transmite exactamente `name` y `phoneNo`; el resto de campos
    /// editables queda pendiente de soporte del backend. En éxito replica
    /// el parche en la sesión compartida y muestra el banner temporal.
    pub async fn save(&mut self) -> Result<(), String> {
        self.saving = true;

        let request =
            UpdateProfileRequest::profile_update(self.form.full_name.clone(), self.form.phone.clone());
        let token = self.session.auth_token().await.unwrap_or_default();

        let result = match self.api.update_profile(&token, &request).await {
            Ok(_) => {
                self.session.update_user(&request).await;
                self.show_save_banner();
                self.error = None;
                Ok(())
            }
            Err(err) => {
                log::error!("❌ Error al guardar el perfil: {}", err);
                let message = err.user_message(GENERIC_SAVE_ERROR);
                self.error = Some(message.clone());
                Err(message)
            }
        };

        self.saving = false;
        result
    }

    /// Mostrar el banner de éxito y programar su autodescarte.
    /// Reprogramar cancela el temporizador anterior.
    fn show_save_banner(&mut self) {
        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }

        self.save_success.store(true, Ordering::SeqCst);
        let flag = Arc::clone(&self.save_success);
        self.banner_timer = Some(tokio::spawn(async move {
            sleep(Duration::from_secs(SAVE_BANNER_SECS)).await;
            flag.store(false, Ordering::SeqCst);
        }));
    }

    pub fn save_succeeded(&self) -> bool {
        self.save_success.load(Ordering::SeqCst)
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Drop for ProfileController {
    fn drop(&mut self) {
        // Cancelar el temporizador del banner al desmontar
        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }
    }
}
