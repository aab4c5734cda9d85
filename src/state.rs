//! Estado de sesión compartido
//! 
//! Este módulo define el almacén de sesión que comparten los controladores:
//! usuario autenticado actual y token de sesión, con una interfaz estrecha
//! de lectura, merge y limpieza. La emisión del token es responsabilidad
//! del colaborador de autenticación.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::dto::profile_dto::UpdateProfileRequest;
use crate::models::user::SessionUser;

/// Almacén de sesión compartido entre controladores
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
}

#[derive(Default)]
struct SessionInner {
    user: Option<SessionUser>,
    token: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iniciar sesión con el usuario y token que entrega el colaborador
    /// de autenticación
    pub async fn set_session(&self, user: SessionUser, token: String) {
        log::info!(
            "🔑 Sesión iniciada para '{}'",
            user.display_name().unwrap_or("<anon>")
        );
        let mut inner = self.inner.write().await;
        inner.user = Some(user);
        inner.token = Some(token);
    }

    /// Usuario autenticado actual (copia del snapshot)
    pub async fn current_user(&self) -> Option<SessionUser> {
        self.inner.read().await.user.clone()
    }

    /// Token de sesión actual
    pub async fn auth_token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    /// ¿Hay sesión activa?
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.token.is_some()
    }

    /// Merge de un parche de perfil sobre el usuario de sesión.
    /// Solo toca los campos presentes en el parche; los campos de
    /// credenciales nunca se reflejan en el usuario.
    pub async fn update_user(&self, patch: &UpdateProfileRequest) {
        let mut inner = self.inner.write().await;
        match inner.user.as_mut() {
            Some(user) => {
                if let Some(name) = &patch.name {
                    user.name = Some(name.clone());
                }
                if let Some(phone_no) = &patch.phone_no {
                    user.phone_no = Some(phone_no.clone());
                }
                log::info!("💾 Usuario de sesión actualizado");
            }
            None => log::warn!("❌ update_user sin sesión activa"),
        }
    }

    /// Cerrar la sesión: limpia usuario y token
    pub async fn logout(&self) {
        let mut inner = self.inner.write().await;
        inner.user = None;
        inner.token = None;
        log::info!("🔒 Sesión terminada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_user_merges_patch_fields() {
        let store = SessionStore::new();
        let user = SessionUser {
            name: Some("Ravi".to_string()),
            email: Some("ravi@example.com".to_string()),
            ..Default::default()
        };
        store.set_session(user, "token".to_string()).await;

        let patch = UpdateProfileRequest::profile_update("Ravi Verma", "+91 90000 00001");
        store.update_user(&patch).await;

        let user = store.current_user().await.unwrap();
        assert_eq!(user.name.as_deref(), Some("Ravi Verma"));
        assert_eq!(user.phone_no.as_deref(), Some("+91 90000 00001"));
        // Los campos no parcheados se conservan
        assert_eq!(user.email.as_deref(), Some("ravi@example.com"));
    }

    #[tokio::test]
    async fn test_logout_clears_user_and_token() {
        let store = SessionStore::new();
        store
            .set_session(SessionUser::default(), "token".to_string())
            .await;
        assert!(store.is_authenticated().await);

        store.logout().await;

        assert!(!store.is_authenticated().await);
        assert!(store.current_user().await.is_none());
        assert!(store.auth_token().await.is_none());
    }

    #[tokio::test]
    async fn test_update_user_without_session_is_noop() {
        let store = SessionStore::new();
        let patch = UpdateProfileRequest::profile_update("x", "y");
        store.update_user(&patch).await;
        assert!(store.current_user().await.is_none());
    }
}
