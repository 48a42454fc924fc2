//! # Checkout Parameter Normalization
//!
//! The cnb (checkout button) operations share one canonicalization routine.
//! Input arrives as loose JSON from the caller; after normalization `version`
//! and `amount` are JSON numbers, the other known fields are strings,
//! `language` is one of the supported set, and the merchant public key is
//! injected. Validation failures abort before any encoding work.

use relay_core::{RelayError, RelayResult};
use serde_json::Value;

/// Loose field-name-to-value mapping, pre- or post-normalization
pub type Params = serde_json::Map<String, Value>;

/// Languages LiqPay's checkout button ships translations for
pub const SUPPORTED_LANGUAGES: &[&str] = &["ru", "uk", "en"];

/// Fallback when `language` is absent or unsupported
pub const DEFAULT_LANGUAGE: &str = "uk";

/// Fields that must be present as (coercible-to) strings.
/// `language` is coerced too, but only when present.
const REQUIRED_STRING_FIELDS: &[&str] = &["action", "currency", "description"];

/// Canonicalize a parameter set for signing.
///
/// Rules, in order:
/// 1. the merchant `public_key` is injected, overwriting any supplied value;
/// 2. `version` and `amount` are required and coerced to numbers
///    (numeric-looking strings parse; anything else fails);
/// 3. `action`, `currency`, `description` are required and coerced to
///    strings; `language` is coerced only if present;
/// 4. an unsupported `language` is silently replaced with the default.
pub fn normalize(params: &Params, public_key: &str) -> RelayResult<Params> {
    let mut out = params.clone();

    out.insert(
        "public_key".to_string(),
        Value::String(public_key.to_string()),
    );

    coerce_number(&mut out, "version")?;
    coerce_number(&mut out, "amount")?;

    for field in REQUIRED_STRING_FIELDS {
        coerce_string(&mut out, field, true)?;
    }
    coerce_string(&mut out, "language", false)?;

    if let Some(Value::String(lang)) = out.get("language") {
        if !SUPPORTED_LANGUAGES.contains(&lang.as_str()) {
            out.insert(
                "language".to_string(),
                Value::String(DEFAULT_LANGUAGE.to_string()),
            );
        }
    }

    Ok(out)
}

fn coerce_number(params: &mut Params, field: &str) -> RelayResult<()> {
    match params.get(field) {
        None | Some(Value::Null) => Err(RelayError::validation(
            field,
            format!("{} is null", field),
        )),
        Some(Value::Number(_)) => Ok(()),
        Some(Value::String(s)) => match s.parse::<serde_json::Number>() {
            Ok(n) => {
                params.insert(field.to_string(), Value::Number(n));
                Ok(())
            }
            Err(_) => Err(RelayError::validation(
                field,
                format!(
                    "{} must be a number or a string that can be converted to a number",
                    field
                ),
            )),
        },
        Some(_) => Err(RelayError::validation(
            field,
            format!(
                "{} must be a number or a string that can be converted to a number",
                field
            ),
        )),
    }
}

fn coerce_string(params: &mut Params, field: &str, required: bool) -> RelayResult<()> {
    let missing = || RelayError::validation(field, format!("{} is null or not provided", field));

    match params.get(field) {
        None | Some(Value::Null) => {
            if required {
                Err(missing())
            } else {
                Ok(())
            }
        }
        Some(Value::String(s)) => {
            if s.is_empty() && required {
                Err(missing())
            } else {
                Ok(())
            }
        }
        Some(Value::Number(n)) => {
            let rendered = n.to_string();
            params.insert(field.to_string(), Value::String(rendered));
            Ok(())
        }
        Some(Value::Bool(b)) => {
            let rendered = b.to_string();
            params.insert(field.to_string(), Value::String(rendered));
            Ok(())
        }
        Some(_) => Err(RelayError::validation(
            field,
            format!("{} cannot be represented as a string", field),
        )),
    }
}
