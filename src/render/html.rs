//! Info-panel markup.

use std::fmt::Write as _;

use super::{STAR, SectionRenderer, labeled_items, location_line, rating_label};
use crate::hotel_info::InfoSection;

/// Renders sections as the `info-section` blocks of the web panel.
///
/// All text coming from the backend is escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl SectionRenderer for HtmlRenderer {
    fn render(&self, sections: &[InfoSection]) -> String {
        let mut html = String::new();
        for section in sections {
            write_section(&mut html, section);
        }
        html
    }
}

fn write_section(html: &mut String, section: &InfoSection) {
    html.push_str("<div class=\"info-section\">\n");
    let _ = writeln!(
        html,
        "  <div class=\"info-section-title\">{}</div>",
        section.title()
    );
    html.push_str("  <div class=\"info-section-content\">\n");

    match section {
        InfoSection::Location(address) => {
            let _ = writeln!(html, "    {}", escape(&location_line(address)));
        }
        InfoSection::Rating { stars, average } => {
            html.push_str("    <div class=\"info-rating\">\n");
            let _ = writeln!(
                html,
                "      <span class=\"info-stars\">{}</span>",
                STAR.repeat(*stars)
            );
            let _ = writeln!(html, "      <span>{}</span>", rating_label(*average));
            html.push_str("    </div>\n");
        }
        InfoSection::Faqs(faqs) => {
            for faq in faqs {
                html.push_str("    <div class=\"info-faq\">\n");
                if let Some(q) = &faq.q {
                    let _ = writeln!(html, "      <div class=\"info-faq-q\">{}</div>", escape(q));
                }
                if let Some(a) = &faq.a {
                    let _ = writeln!(html, "      <div class=\"info-faq-a\">{}</div>", escape(a));
                }
                html.push_str("    </div>\n");
            }
        }
        InfoSection::Hours(_) | InfoSection::Contact(_) | InfoSection::Policies(_) => {
            for (label, value) in labeled_items(section) {
                let _ = writeln!(
                    html,
                    "    <div class=\"info-item\"><strong>{label}:</strong> {}</div>",
                    escape(value)
                );
            }
        }
    }

    html.push_str("  </div>\n");
    html.push_str("</div>\n");
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel_info::{Faq, HotelInfo, Rating};
    use crate::render::render_hotel_info;

    #[test]
    fn test_rating_markup() {
        let info = HotelInfo {
            rating: Some(Rating { average: Some(4.6) }),
            ..HotelInfo::default()
        };
        let html = render_hotel_info(&info, &HtmlRenderer);

        assert!(html.contains("<span class=\"info-stars\">⭐⭐⭐⭐⭐</span>"));
        assert!(html.contains("4.6/5"));
        assert_eq!(html.matches("class=\"info-section\"").count(), 1);
    }

    #[test]
    fn test_rating_above_scale_shows_every_star() {
        let info = HotelInfo {
            rating: Some(Rating { average: Some(5.6) }),
            ..HotelInfo::default()
        };
        let html = render_hotel_info(&info, &HtmlRenderer);

        assert!(html.contains("<span class=\"info-stars\">⭐⭐⭐⭐⭐⭐</span>"));
        assert!(html.contains("5.6/5"));
    }

    #[test]
    fn test_faq_missing_parts_are_omitted() {
        let info = HotelInfo {
            faqs: Some(vec![
                Faq {
                    q: Some("¿Hay parking?".into()),
                    a: None,
                },
                Faq {
                    q: None,
                    a: Some("Gratis".into()),
                },
            ]),
            ..HotelInfo::default()
        };
        let html = render_hotel_info(&info, &HtmlRenderer);

        assert_eq!(html.matches("class=\"info-faq\"").count(), 2);
        assert_eq!(html.matches("class=\"info-faq-q\"").count(), 1);
        assert_eq!(html.matches("class=\"info-faq-a\"").count(), 1);
        assert!(!html.contains("\"></div>"));
    }

    #[test]
    fn test_faq_items_in_order() {
        let info = HotelInfo {
            faqs: Some(vec![
                Faq {
                    q: Some("¿Hay parking?".into()),
                    a: Some("Sí".into()),
                },
                Faq {
                    q: Some("¿Wifi?".into()),
                    a: Some("Gratis".into()),
                },
            ]),
            ..HotelInfo::default()
        };
        let html = render_hotel_info(&info, &HtmlRenderer);

        assert_eq!(html.matches("class=\"info-faq\"").count(), 2);
        let parking = html.find("¿Hay parking?").unwrap();
        let wifi = html.find("¿Wifi?").unwrap();
        assert!(parking < wifi);
    }

    #[test]
    fn test_backend_text_is_escaped() {
        let info = HotelInfo {
            faqs: Some(vec![Faq {
                q: Some("<script>alert(1)</script>".into()),
                a: Some("Tom & Jerry".into()),
            }]),
            ..HotelInfo::default()
        };
        let html = render_hotel_info(&info, &HtmlRenderer);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_empty_record_renders_nothing() {
        assert_eq!(render_hotel_info(&HotelInfo::default(), &HtmlRenderer), "");
    }
}
