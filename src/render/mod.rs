//! Rendering of info-panel sections.
//!
//! Projection ([`crate::hotel_info::sections`]) and presentation are kept
//! apart: a [`SectionRenderer`] only ever sees [`InfoSection`] descriptors.
//!
//! - [`HtmlRenderer`]: markup for the web panel
//! - [`TextRenderer`]: plain text for terminals

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::hotel_info::{self, Address, HotelInfo, InfoSection};

/// Star glyph repeated once per rating point.
pub const STAR: &str = "⭐";

/// Turns section descriptors into a displayable string.
///
/// Implementations must be pure: the same sections always give the same
/// output.
pub trait SectionRenderer: Send + Sync + std::fmt::Debug {
    /// Render all sections in order.
    fn render(&self, sections: &[InfoSection]) -> String;
}

/// Project `info` and render it with `renderer`.
pub fn render_hotel_info(info: &HotelInfo, renderer: &dyn SectionRenderer) -> String {
    renderer.render(&hotel_info::sections(info))
}

/// `street, city postal_code`, skipping whatever is missing.
pub(crate) fn location_line(address: &Address) -> String {
    let locality: Vec<&str> = [address.city.as_deref(), address.postal_code.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let locality = locality.join(" ");

    [address.street.as_deref().unwrap_or_default(), locality.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `4.6/5`, or `?/5` when the average is missing.
pub(crate) fn rating_label(average: Option<f64>) -> String {
    match average {
        Some(average) => format!("{average}/5"),
        None => "?/5".to_string(),
    }
}

/// Labeled lines of the key/value sections, present values only.
pub(crate) fn labeled_items(section: &InfoSection) -> Vec<(&'static str, &str)> {
    let pairs: Vec<(&'static str, Option<&str>)> = match section {
        InfoSection::Hours(hours) => vec![
            ("Desayuno", hours.breakfast.as_deref()),
            ("Spa", hours.spa.as_deref()),
            ("Piscina", hours.pool.as_deref()),
        ],
        InfoSection::Contact(contact) => vec![
            ("Teléfono", contact.phone.as_deref()),
            ("Email", contact.email.as_deref()),
        ],
        InfoSection::Policies(policies) => vec![
            ("Cancelación", policies.cancellation.as_deref()),
            ("Depósito", policies.deposit.as_deref()),
        ],
        InfoSection::Location(_) | InfoSection::Rating { .. } | InfoSection::Faqs(_) => {
            Vec::new()
        }
    };

    pairs
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| (label, value)))
        .collect()
}
