//! Cliente HTTP del portal de vendedores
//! 
//! Este módulo contiene el trait del API remoto que consumen los
//! controladores y su implementación HTTP. El token de sesión lo emite el
//! colaborador de autenticación y se pasa por llamada.

use async_trait::async_trait;
use reqwest::Client;

use crate::dto::profile_dto::{ApiErrorBody, ApiResponse, UpdateProfileRequest};
use crate::models::user::SessionUser;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};

/// Operaciones del API remoto del portal
#[async_trait]
pub trait VendorApi: Send + Sync {
    /// Obtener los vehículos del vendedor autenticado
    async fn get_vendor_vehicles(&self, token: &str) -> AppResult<Vec<Vehicle>>;

    /// Actualización parcial del perfil; el cambio de contraseña usa el
    /// mismo endpoint con los campos de credenciales
    async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> AppResult<ApiResponse<SessionUser>>;

    /// Borrar la cuenta del vendedor
    async fn delete_profile(&self, token: &str) -> AppResult<ApiResponse<()>>;
}

/// Cliente HTTP del API del portal
pub struct VendorPortalClient {
    client: Client,
    base_url: String,
}

impl VendorPortalClient {
    /// Crear el cliente con timeout de transporte configurable
    pub fn new(base_url: String, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Construir el error tipado a partir de una respuesta no exitosa,
    /// rescatando el mensaje del servidor si el cuerpo lo trae
    async fn error_from_response(response: reqwest::Response) -> AppError {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);

        AppError::from_status(status, message)
    }
}

#[async_trait]
impl VendorApi for VendorPortalClient {
    async fn get_vendor_vehicles(&self, token: &str) -> AppResult<Vec<Vehicle>> {
        let url = format!("{}/api/vendor/vehicles", self.base_url);
        log::info!("🚗 Solicitando vehículos del vendedor: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Error HTTP {} al obtener vehículos", status);
            return Err(Self::error_from_response(response).await);
        }

        // Cuerpo ausente o nulo equivale a lista vacía
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let vehicles: Option<Vec<Vehicle>> = serde_json::from_str(&body).map_err(|e| {
            log::error!("❌ Error parseando vehículos: {}", e);
            AppError::ExternalApi {
                status: None,
                message: Some(format!("Error parsing JSON: {}", e)),
            }
        })?;

        Ok(vehicles.unwrap_or_default())
    }

    async fn update_profile(
        &self,
        token: &str,
        request: &UpdateProfileRequest,
    ) -> AppResult<ApiResponse<SessionUser>> {
        let url = format!("{}/api/users/profile", self.base_url);
        log::info!("👤 Actualizando perfil del vendedor");

        let response = self
            .client
            .put(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Error HTTP {} al actualizar el perfil", status);
            return Err(Self::error_from_response(response).await);
        }

        Ok(response.json().await?)
    }

    async fn delete_profile(&self, token: &str) -> AppResult<ApiResponse<()>> {
        let url = format!("{}/api/users/profile", self.base_url);
        log::info!("🗑️ Borrando la cuenta del vendedor");

        let response = self.client.delete(&url).bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Error HTTP {} al borrar la cuenta", status);
            return Err(Self::error_from_response(response).await);
        }

        // El endpoint puede responder 204 sin cuerpo
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(ApiResponse::success(()));
        }

        serde_json::from_str(&body).map_err(|e| AppError::ExternalApi {
            status: None,
            message: Some(format!("Error parsing JSON: {}", e)),
        })
    }
}
