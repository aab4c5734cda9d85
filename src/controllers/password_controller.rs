//! Controlador del cambio de contraseña
//! 
//! Máquina de estados del modal de cambio de contraseña, con validación
//! local previa: la validación nunca llega al API.

use std::sync::Arc;

use crate::client::VendorApi;
use crate::dto::profile_dto::UpdateProfileRequest;
use crate::state::SessionStore;
use crate::utils::validation::validate_password_change;

/// Mensaje genérico cuando el servidor no aporta uno
const GENERIC_PASSWORD_ERROR: &str =
    "Failed to change password. Please check your current password.";

/// Notificación de éxito para el usuario
const PASSWORD_CHANGED_MESSAGE: &str = "Password changed successfully!";

/// Estado del modal de cambio de contraseña
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordState {
    /// Modal cerrado
    Idle,
    /// Modal abierto, campos editables
    Editing,
    /// Petición en curso
    Submitting,
    /// Fallo de validación o del servidor; el modal sigue abierto
    Error,
}

/// Campos transitorios del formulario de contraseña
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Controlador del modal de cambio de contraseña
pub struct PasswordController {
    api: Arc<dyn VendorApi>,
    session: SessionStore,
    state: PasswordState,
    form: PasswordForm,
    error: Option<String>,
}

impl PasswordController {
    pub fn new(api: Arc<dyn VendorApi>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            state: PasswordState::Idle,
            form: PasswordForm::default(),
            error: None,
        }
    }

    /// Abrir el modal
    pub fn open(&mut self) {
        self.state = PasswordState::Editing;
    }

    /// Cerrar o cancelar: limpia campos y error incondicionalmente
    pub fn close(&mut self) {
        self.form = PasswordForm::default();
        self.error = None;
        self.state = PasswordState::Idle;
    }

    /// Enviar el cambio de contraseña.
    ///
    /// Las reglas de validación se evalúan en orden y cortan en el primer
    /// fallo sin llamar al API. En éxito se cierra el modal y se limpia
    /// todo; en fallo del servidor el modal queda abierto para reintentar.
    pub async fn submit(&mut self) -> Result<String, String> {
        self.error = None;

        if let Err(err) = validate_password_change(
            &self.form.current_password,
            &self.form.new_password,
            &self.form.confirm_password,
        ) {
            let message = err.user_message(GENERIC_PASSWORD_ERROR);
            self.error = Some(message.clone());
            self.state = PasswordState::Error;
            return Err(message);
        }

        self.state = PasswordState::Submitting;
        let request = UpdateProfileRequest::password_change(
            self.form.current_password.clone(),
            self.form.new_password.clone(),
        );
        let token = self.session.auth_token().await.unwrap_or_default();

        match self.api.update_profile(&token, &request).await {
            Ok(_) => {
                self.close();
                Ok(PASSWORD_CHANGED_MESSAGE.to_string())
            }
            Err(err) => {
                log::error!("❌ Error al cambiar la contraseña: {}", err);
                let message = err.user_message(GENERIC_PASSWORD_ERROR);
                self.error = Some(message.clone());
                self.state = PasswordState::Error;
                Err(message)
            }
        }
    }

    pub fn state(&self) -> PasswordState {
        self.state
    }

    pub fn form(&self) -> &PasswordForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PasswordForm {
        &mut self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
