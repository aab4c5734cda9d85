//! Sistema de manejo de errores
//! 
//! Este módulo define los tipos de errores del lado cliente y su
//! clasificación según el código de estado HTTP del API remoto.

use http::StatusCode;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("External API error (status {status:?}): {message:?}")]
    ExternalApi {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl AppError {
    /// Clasificar una respuesta de error del API según su código de estado.
    /// 401 y 403 son las únicas ramas específicas por código del sistema.
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(message.unwrap_or_default()),
            StatusCode::FORBIDDEN => AppError::Forbidden(message.unwrap_or_default()),
            _ => AppError::ExternalApi {
                status: Some(status.as_u16()),
                message,
            },
        }
    }

    /// Mensaje para mostrar al usuario: el del servidor si existe,
    /// si no el genérico de la operación.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::ExternalApi {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            AppError::Unauthorized(message) | AppError::Forbidden(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            _ => generic.to_string(),
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: &str) -> AppError {
    AppError::Validation(message.to_string())
}
