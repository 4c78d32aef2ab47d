//! Plain-text panel for terminals.

use std::fmt::Write as _;

use super::{STAR, SectionRenderer, labeled_items, location_line, rating_label};
use crate::hotel_info::InfoSection;

/// Renders sections as indented plain text, separated by blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl SectionRenderer for TextRenderer {
    fn render(&self, sections: &[InfoSection]) -> String {
        let mut out = String::new();
        for (idx, section) in sections.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", section.title());
            match section {
                InfoSection::Location(address) => {
                    let _ = writeln!(out, "  {}", location_line(address));
                }
                InfoSection::Rating { stars, average } => {
                    let _ = writeln!(out, "  {} {}", STAR.repeat(*stars), rating_label(*average));
                }
                InfoSection::Faqs(faqs) => {
                    for (n, faq) in faqs.iter().enumerate() {
                        match &faq.q {
                            Some(q) => {
                                let _ = writeln!(out, "  {}. {q}", n + 1);
                            }
                            None => {
                                let _ = writeln!(out, "  {}.", n + 1);
                            }
                        }
                        if let Some(a) = &faq.a {
                            let _ = writeln!(out, "     {a}");
                        }
                    }
                }
                InfoSection::Hours(_) | InfoSection::Contact(_) | InfoSection::Policies(_) => {
                    for (label, value) in labeled_items(section) {
                        let _ = writeln!(out, "  {label}: {value}");
                    }
                }
            }
        }
        out
    }
}
