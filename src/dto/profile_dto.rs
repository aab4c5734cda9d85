//! DTOs del API de perfil
//! 
//! Tipos de request/response del endpoint de perfil del portal.

use serde::{Deserialize, Serialize};

/// Request de actualización parcial del perfil
///
/// El endpoint acepta campos opcionales y solo se serializan los presentes.
/// El guardado de ajustes envía exactamente `name` y `phoneNo`; el cambio
/// de contraseña envía `currentPassword` y `password`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_no: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateProfileRequest {
    /// Payload del guardado de ajustes: solo nombre y teléfono.
    ///
    /// Los campos de negocio del formulario (nombre comercial, dirección,
    /// teléfono de empresa, NIF) no se transmiten todavía; queda pendiente
    /// de confirmación de soporte en el backend.
    pub fn profile_update(name: impl Into<String>, phone_no: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            phone_no: Some(phone_no.into()),
            ..Default::default()
        }
    }

    /// Payload del cambio de contraseña
    pub fn password_change(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: Some(current_password.into()),
            password: Some(new_password.into()),
            ..Default::default()
        }
    }
}

/// Respuesta genérica del API del portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Cuerpo de error del API, para extraer el `message` del servidor
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
