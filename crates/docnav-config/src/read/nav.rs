//! Top navigation entries.

use super::{NavDraft, Object, expect_object};
use crate::diagnostic::Diagnostics;
use crate::model::NavTarget;

pub(super) fn read_nav(theme: Object<'_>, diag: &mut Diagnostics) -> Vec<NavDraft> {
    let Some(items) = theme.optional_array("nav", diag) else {
        return Vec::new();
    };
    let nav_path = theme.field_path("nav");

    let mut entries = Vec::with_capacity(items.len());
    for (index, value) in items.iter().enumerate() {
        let path = nav_path.index(index);
        let Some(entry) = expect_object(value, &path, diag) else {
            continue;
        };
        entry.report_unknown(&["text", "link"]);

        let label = entry.required_str("text", diag);
        let link = entry.required_str("link", diag);
        if let (Some(label), Some(link)) = (label, link) {
            entries.push(NavDraft {
                label: label.to_owned(),
                link: link.to_owned(),
                target: NavTarget::parse(link),
                path: path.clone(),
            });
        }
    }
    entries
}
