//! Search provider selection.
//!
//! ```text
//! search: { provider: "local" | "external", options?: { ... } }
//! ```
//!
//! Options are checked against the selected provider: an option that only
//! the other provider understands is reported as
//! [`DiagnosticKind::InvalidSearchProviderOption`].

use super::{FieldPath, Object};
use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::model::{
    ExternalSearchOptions, LocalSearchOptions, SearchConfig, SearchProvider, is_root_relative,
};

/// URL schemes accepted for an external endpoint.
const ENDPOINT_SCHEMES: [&str; 2] = ["https://", "http://"];

pub(super) fn select_search(theme: Object<'_>, diag: &mut Diagnostics) -> SearchConfig {
    let path = theme.field_path("search");
    let Some(map) = theme.optional_map("search", diag) else {
        return SearchConfig::default();
    };
    let search = Object::new(map, &path);
    search.report_unknown(&["provider", "options"]);

    let Some(name) = search.required_str("provider", diag) else {
        return SearchConfig::default();
    };
    let Some(provider) = SearchProvider::parse(name) else {
        diag.error(
            DiagnosticKind::MalformedField,
            &search.field_path("provider"),
            format!("unknown search provider `{name}`, expected `local` or `external`"),
        );
        return SearchConfig::default();
    };

    let options_path = search.field_path("options");
    let options = search
        .optional_map("options", diag)
        .map(|map| Object::new(map, &options_path));
    if let Some(options) = options {
        check_option_owners(options, provider, diag);
    }

    let selected = match provider {
        SearchProvider::Local => SearchConfig::Local(read_local(options, diag)),
        SearchProvider::External => match read_external(options, &options_path, diag) {
            Some(external) => SearchConfig::External(external),
            None => SearchConfig::default(),
        },
    };
    tracing::debug!(provider = provider.as_str(), "Selected search provider");
    selected
}

fn check_option_owners(options: Object<'_>, provider: SearchProvider, diag: &mut Diagnostics) {
    for (key, _) in options.entries() {
        match SearchProvider::owning(key) {
            Some(owner) if owner != provider => diag.error(
                DiagnosticKind::InvalidSearchProviderOption,
                &options.field_path(key),
                format!(
                    "option `{key}` belongs to the `{}` provider but `{}` is selected",
                    owner.as_str(),
                    provider.as_str()
                ),
            ),
            Some(_) => {}
            None => {
                tracing::debug!(path = %options.field_path(key), "Ignoring unknown search option");
            }
        }
    }
}

fn read_local(options: Option<Object<'_>>, diag: &mut Diagnostics) -> LocalSearchOptions {
    let Some(options) = options else {
        return LocalSearchOptions::default();
    };

    let scope = options.optional_str("scope", diag);
    if let Some(scope) = scope
        && !is_root_relative(scope)
    {
        diag.error(
            DiagnosticKind::MalformedLink,
            &options.field_path("scope"),
            format!("search scope `{scope}` must be a root-relative path"),
        );
    }

    LocalSearchOptions {
        detailed_view: options.optional_bool("detailedView", diag).unwrap_or(false),
        scope: scope.map(str::to_owned),
    }
}

/// `endpoint` and `apiKey` are required; returns `None` when either is unusable.
fn read_external(
    options: Option<Object<'_>>,
    options_path: &FieldPath,
    diag: &mut Diagnostics,
) -> Option<ExternalSearchOptions> {
    let Some(options) = options else {
        for key in ["endpoint", "apiKey"] {
            diag.error(
                DiagnosticKind::MissingRequiredField,
                &options_path.key(key),
                format!("the `external` search provider requires `{key}`"),
            );
        }
        return None;
    };

    let endpoint = options.required_str("endpoint", diag);
    let endpoint = endpoint.filter(|endpoint| {
        let valid = ENDPOINT_SCHEMES
            .iter()
            .any(|scheme| endpoint.len() > scheme.len() && endpoint.starts_with(scheme));
        if !valid {
            diag.error(
                DiagnosticKind::MalformedField,
                &options.field_path("endpoint"),
                "search endpoint must start with http:// or https://",
            );
        }
        valid
    });

    let api_key = options.required_str("apiKey", diag);
    let api_key = api_key.filter(|key| {
        let present = !key.trim().is_empty();
        if !present {
            diag.error(
                DiagnosticKind::MissingRequiredField,
                &options.field_path("apiKey"),
                "search apiKey must not be empty",
            );
        }
        present
    });

    let app_id = options.optional_str("appId", diag);
    let index_name = options.optional_str("indexName", diag);

    Some(ExternalSearchOptions {
        endpoint: endpoint?.to_owned(),
        api_key: api_key?.to_owned(),
        app_id: app_id.map(str::to_owned),
        index_name: index_name.map(str::to_owned),
    })
}
