//! Formato de moneda
//! 
//! Este módulo contiene los helpers de formato de importes en rupias.
//! El formato es de configuración regional fija: separador de miles y
//! símbolo ₹, con abreviatura en miles ("K") para la tarjeta de
//! estadísticas.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formatear un importe en rupias enteras con separador de miles
pub fn format_inr(amount: Decimal) -> String {
    let whole = amount.trunc().to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };

    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("₹{}{}", sign, grouped)
}

/// Formato compacto en miles para la tarjeta de estadísticas ("₹4K")
pub fn format_inr_compact(amount: Decimal) -> String {
    let thousands = (amount / Decimal::from(1000))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("₹{}K", thousands)
}
