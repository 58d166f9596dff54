//! Environment variable expansion for search credentials.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use serde_json::Value;

use crate::ConfigError;

/// Search options that may reference environment variables.
const EXPANDED_SEARCH_OPTIONS: [&str; 3] = ["endpoint", "apiKey", "appId"];

/// Expand `${VAR}` references in `themeConfig.search.options` credentials.
///
/// Non-string values are left alone; the validator reports them.
pub(crate) fn expand_search_options(raw: &mut Value) -> Result<(), ConfigError> {
    let Some(options) = raw
        .pointer_mut("/themeConfig/search/options")
        .and_then(Value::as_object_mut)
    else {
        return Ok(());
    };

    for key in EXPANDED_SEARCH_OPTIONS {
        if let Some(Value::String(value)) = options.get_mut(key) {
            *value = expand_env(value, &format!("themeConfig.search.options.{key}"))?;
        }
    }
    Ok(())
}

/// Expand environment variable references in a string.
///
/// Strings without `${` are returned unchanged, so a bare `$` in an API key
/// survives.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.var_name),
    })
}

/// Variable that could not be resolved.
struct LookupError {
    var_name: String,
}
