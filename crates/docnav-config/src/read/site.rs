//! Site metadata, logo and footer.

use serde_json::Value;

use super::{Object, type_name};
use crate::diagnostic::{DiagnosticKind, Diagnostics};
use crate::model::{
    Appearance, DEFAULT_LANG, Footer, Logo, SiteMeta, ThemeConfig, is_language_tag,
};

pub(super) fn read_site_meta(root: Object<'_>, diag: &mut Diagnostics) -> SiteMeta {
    let title = root.required_str("title", diag);
    if let Some(title) = title
        && title.trim().is_empty()
    {
        diag.error(
            DiagnosticKind::MissingRequiredField,
            &root.field_path("title"),
            "site title must not be empty",
        );
    }

    let lang = match root.optional_str("lang", diag) {
        Some(lang) if !is_language_tag(lang) => {
            diag.error(
                DiagnosticKind::MalformedField,
                &root.field_path("lang"),
                format!("`{lang}` is not a valid language tag"),
            );
            lang
        }
        Some(lang) => lang,
        None => DEFAULT_LANG,
    };

    SiteMeta {
        title: title.unwrap_or_default().to_owned(),
        description: root
            .optional_str("description", diag)
            .unwrap_or_default()
            .to_owned(),
        lang: lang.to_owned(),
        last_updated: root.optional_bool("lastUpdated", diag).unwrap_or(false),
    }
}

pub(super) fn read_theme(theme: Option<Object<'_>>, diag: &mut Diagnostics) -> ThemeConfig {
    let Some(theme) = theme else {
        return ThemeConfig::default();
    };
    ThemeConfig {
        logo: read_logo(theme, diag),
        footer: read_footer(theme, diag),
    }
}

/// `logo` is either one asset for both modes or `{light, dark}`.
fn read_logo(theme: Object<'_>, diag: &mut Diagnostics) -> Option<Logo> {
    let value = theme.get("logo")?;
    let path = theme.field_path("logo");
    let mut logo = Logo::default();

    match value {
        Value::String(asset) => {
            if asset.trim().is_empty() {
                diag.error(
                    DiagnosticKind::MissingRequiredField,
                    &path,
                    "logo asset path must not be empty",
                );
                return None;
            }
            for mode in Appearance::ALL {
                logo.set(mode, asset.clone());
            }
        }
        Value::Object(map) => {
            let modes = Object::new(map, &path);
            modes.report_unknown(&["light", "dark"]);
            for mode in Appearance::ALL {
                let Some(asset) = modes.optional_str(mode.as_str(), diag) else {
                    continue;
                };
                if asset.trim().is_empty() {
                    diag.error(
                        DiagnosticKind::MissingRequiredField,
                        &modes.field_path(mode.as_str()),
                        format!("logo for `{}` mode must not be empty", mode.as_str()),
                    );
                } else {
                    logo.set(mode, asset.to_owned());
                }
            }
        }
        other => {
            diag.error(
                DiagnosticKind::MalformedField,
                &path,
                format!("expected a string or an object, found {}", type_name(other)),
            );
            return None;
        }
    }

    let declared = logo.declared().next().is_some();
    declared.then_some(logo)
}

fn read_footer(theme: Object<'_>, diag: &mut Diagnostics) -> Option<Footer> {
    let path = theme.field_path("footer");
    let footer = Object::new(theme.optional_map("footer", diag)?, &path);
    footer.report_unknown(&["message", "copyright"]);

    let footer = Footer {
        message: footer.optional_str("message", diag).map(str::to_owned),
        copyright: footer.optional_str("copyright", diag).map(str::to_owned),
    };
    (!footer.is_empty()).then_some(footer)
}
