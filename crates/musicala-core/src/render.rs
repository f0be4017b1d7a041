//! Render models and markup for the dots, cards and text fields.
//!
//! Titles and descriptions come from editable data, so every string is
//! escaped before it is interpolated into markup.

use std::fmt::Write;

use crate::catalog::Catalog;

/// Escape `&`, `<`, `>`, `"` and `'` for use in element content and
/// quoted attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Plain-text fields describing the current spot.
///
/// These are written as text content, never as markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotText {
    /// Spot title.
    pub title: String,
    /// Spot description.
    pub desc: String,
    /// Status pill: icon, title and `n/N` position.
    pub pill: String,
    /// Announcement for the assistive-technology live region.
    pub status: String,
    /// Target of the open-file action (the spot's media path).
    pub open_href: String,
}

/// Build the text fields for the spot at `index`.
#[must_use]
pub fn spot_text(catalog: &Catalog, index: usize) -> SpotText {
    let spot = catalog.spot(index);
    let position = index % catalog.len() + 1;
    SpotText {
        title: spot.title.clone(),
        desc: spot.desc.clone(),
        pill: format!(
            "{} {} · {position}/{}",
            spot.icon,
            spot.title,
            catalog.len()
        ),
        status: format!("Mostrando: {}", spot.title),
        open_href: spot.file.clone(),
    }
}

/// Markup for the dot indicators, one button per spot.
#[must_use]
pub fn dots_markup(catalog: &Catalog, current: usize) -> String {
    let total = catalog.len();
    let mut html = String::new();
    for (i, spot) in catalog.iter().enumerate() {
        let on = if i == current { " is-on" } else { "" };
        let label = escape_html(&format!("Ir a {} ({} de {total})", spot.title, i + 1));
        let _ = write!(
            html,
            r#"<button type="button" class="dot{on}" data-index="{i}" aria-label="{label}"></button>"#
        );
    }
    html
}

/// Markup for the spot cards, one activatable card per spot.
#[must_use]
pub fn cards_markup(catalog: &Catalog, current: usize) -> String {
    let mut html = String::new();
    for (i, spot) in catalog.iter().enumerate() {
        let active = if i == current { " is-active" } else { "" };
        let label = escape_html(&format!("Abrir {}", spot.title));
        let icon = escape_html(&spot.icon);
        let title = escape_html(&spot.title);
        let desc = escape_html(&spot.desc);
        let _ = write!(
            html,
            r#"<div class="card{active}" role="button" tabindex="0" data-index="{i}" aria-label="{label}"><div class="card__icon">{icon}</div><div class="card__meta"><p class="card__title">{title}</p><p class="card__desc">{desc}</p></div></div>"#
        );
    }
    html
}
