//! Controlador de borrado de cuenta
//! 
//! El borrado es irreversible: exige confirmación explícita antes de emitir
//! ninguna petición. En éxito termina la sesión y navega al login; en fallo
//! la cuenta queda intacta.

use std::sync::Arc;

use crate::client::VendorApi;
use crate::navigation::{Navigator, Route};
use crate::state::SessionStore;

/// Mensaje genérico cuando el servidor no aporta uno
const GENERIC_DELETE_ERROR: &str = "Failed to delete account. Please try again.";

/// Respuesta del usuario a la doble confirmación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteConfirmation {
    Confirmed,
    Cancelled,
}

/// Resultado del intento de borrado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// El usuario no confirmó; no se emitió ninguna petición
    Aborted,
    /// Cuenta borrada; sesión terminada y navegación al login
    Deleted,
    /// El API falló; la cuenta queda intacta
    Failed(String),
}

/// Controlador de la acción de borrado de cuenta
pub struct AccountController {
    api: Arc<dyn VendorApi>,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    deleting: bool,
}

impl AccountController {
    pub fn new(
        api: Arc<dyn VendorApi>,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            deleting: false,
        }
    }

    /// Borrar la cuenta del vendedor tras la confirmación explícita
    pub async fn delete_account(&mut self, confirmation: DeleteConfirmation) -> DeleteOutcome {
        if confirmation != DeleteConfirmation::Confirmed {
            return DeleteOutcome::Aborted;
        }

        self.deleting = true;
        let token = self.session.auth_token().await.unwrap_or_default();

        let outcome = match self.api.delete_profile(&token).await {
            Ok(_) => {
                log::info!("🗑️ Cuenta borrada; terminando la sesión");
                self.session.logout().await;
                self.navigator.navigate_to(Route::Login);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                log::error!("❌ Error al borrar la cuenta: {}", err);
                DeleteOutcome::Failed(err.user_message(GENERIC_DELETE_ERROR))
            }
        };

        self.deleting = false;
        outcome
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}
