//! Utilidades de validación
//! 
//! Este módulo contiene funciones helper para validación de datos
//! del lado cliente, previa a cualquier llamada al API.

use validator::ValidationError;

use crate::utils::errors::{validation_error, AppResult};

/// Longitud mínima de la nueva contraseña
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validar que un string no esté vacío
///
/// Sin recorte de espacios: un valor de solo espacios cuenta como presente,
/// igual que en el formulario original.
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima en caracteres
pub fn validate_min_length(value: &str, min: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        let mut error = ValidationError::new("min_length");
        error.add_param("min".into(), &min);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar un cambio de contraseña antes de enviarlo al API
///
/// Las reglas se evalúan en orden y se corta en el primer fallo:
/// campos presentes, confirmación igual a la nueva, longitud mínima.
pub fn validate_password_change(
    current_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> AppResult<()> {
    if validate_not_empty(current_password).is_err()
        || validate_not_empty(new_password).is_err()
        || validate_not_empty(confirm_password).is_err()
    {
        return Err(validation_error("All fields are required"));
    }

    if new_password != confirm_password {
        return Err(validation_error(
            "New password and confirm password do not match",
        ));
    }

    if validate_min_length(new_password, MIN_PASSWORD_LEN).is_err() {
        return Err(validation_error(
            "Password must be at least 6 characters long",
        ));
    }

    Ok(())
}
