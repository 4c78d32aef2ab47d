//! Projection of [`HotelInfo`] into display sections.

use super::{Address, Contact, Faq, Hours, HotelInfo, Policies};

/// One block of the info panel.
///
/// Rendering targets consume these; they never look at [`HotelInfo`] directly.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoSection {
    /// Street, city and postal code.
    Location(Address),
    /// Star count plus the raw average (absent when the backend omitted it).
    Rating { stars: usize, average: Option<f64> },
    /// Breakfast, spa and pool hours.
    Hours(Hours),
    /// Phone and email.
    Contact(Contact),
    /// Question/answer pairs in arrival order. Never empty.
    Faqs(Vec<Faq>),
    /// Cancellation and deposit policies.
    Policies(Policies),
}

impl InfoSection {
    /// Panel heading for this section.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Location(_) => "📍 Ubicación",
            Self::Rating { .. } => "⭐ Valoración",
            Self::Hours(_) => "🕐 Horarios",
            Self::Contact(_) => "📞 Contacto",
            Self::Faqs(_) => "❓ Preguntas Frecuentes",
            Self::Policies(_) => "📋 Políticas",
        }
    }
}

/// Build the ordered section list for `info`.
///
/// Order is fixed: location, rating, hours, contact, FAQs, policies. Absent
/// fields produce nothing, and so does an empty FAQ list.
pub fn sections(info: &HotelInfo) -> Vec<InfoSection> {
    let mut out = Vec::with_capacity(6);

    if let Some(address) = &info.address {
        out.push(InfoSection::Location(address.clone()));
    }

    if let Some(rating) = &info.rating {
        out.push(InfoSection::Rating {
            stars: rating.average.map_or(0, star_count),
            average: rating.average,
        });
    }

    if let Some(hours) = &info.hours {
        out.push(InfoSection::Hours(hours.clone()));
    }

    if let Some(contact) = &info.contact {
        out.push(InfoSection::Contact(contact.clone()));
    }

    if let Some(faqs) = info.faqs.as_ref().filter(|faqs| !faqs.is_empty()) {
        out.push(InfoSection::Faqs(faqs.clone()));
    }

    if let Some(policies) = &info.policies {
        out.push(InfoSection::Policies(policies.clone()));
    }

    out
}

/// Round `average` to the nearest integer, ties up.
///
/// Negative and non-finite averages give no stars. There is no upper bound:
/// an average above the scale shows as many stars as it rounds to.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn star_count(average: f64) -> usize {
    if !average.is_finite() || average <= 0.0 {
        return 0;
    }
    (average + 0.5).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel_info::Rating;
    use serde_json::json;

    fn full_info() -> HotelInfo {
        serde_json::from_value(json!({
            "policies": { "cancellation": "Gratis hasta 48h antes", "deposit": "No se requiere" },
            "faqs": [
                { "q": "¿Hay parking?", "a": "Sí, 15€/día" },
                { "q": "¿Se admiten mascotas?", "a": "Sí, bajo petición" }
            ],
            "contact": { "phone": "+34 965 000 000", "email": "recepcion@costaazul.es" },
            "hours": { "breakfast": "7:30-10:30", "spa": "10:00-20:00", "pool": "9:00-19:00" },
            "rating": { "average": 4.6 },
            "address": { "street": "Av. del Mar 12", "city": "Alicante", "postal_code": "03001" }
        }))
        .unwrap()
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let titles: Vec<&str> = sections(&full_info()).iter().map(InfoSection::title).collect();
        assert_eq!(
            titles,
            vec![
                "📍 Ubicación",
                "⭐ Valoración",
                "🕐 Horarios",
                "📞 Contacto",
                "❓ Preguntas Frecuentes",
                "📋 Políticas",
            ]
        );
    }

    #[test]
    fn test_absent_fields_yield_no_section() {
        assert!(sections(&HotelInfo::default()).is_empty());

        let info = HotelInfo {
            contact: Some(Contact {
                phone: Some("+34 965 000 000".into()),
                email: None,
            }),
            ..HotelInfo::default()
        };
        let out = sections(&info);
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], InfoSection::Contact(_)));
    }

    #[test]
    fn test_empty_faqs_yield_no_section() {
        let info = HotelInfo {
            faqs: Some(Vec::new()),
            ..HotelInfo::default()
        };
        assert!(sections(&info).is_empty());
    }

    #[test]
    fn test_faqs_keep_arrival_order() {
        let out = sections(&full_info());
        let InfoSection::Faqs(faqs) = &out[4] else {
            panic!("expected FAQ section, got {:?}", out[4]);
        };
        assert_eq!(faqs[0].q.as_deref(), Some("¿Hay parking?"));
        assert_eq!(faqs[1].q.as_deref(), Some("¿Se admiten mascotas?"));
    }

    #[test]
    fn test_rating_stars() {
        let info = HotelInfo {
            rating: Some(Rating { average: Some(4.6) }),
            ..HotelInfo::default()
        };
        assert_eq!(
            sections(&info),
            vec![InfoSection::Rating {
                stars: 5,
                average: Some(4.6)
            }]
        );
    }

    #[test]
    fn test_rating_without_average() {
        let info = HotelInfo {
            rating: Some(Rating { average: None }),
            ..HotelInfo::default()
        };
        assert_eq!(
            sections(&info),
            vec![InfoSection::Rating {
                stars: 0,
                average: None
            }]
        );
    }

    #[test]
    fn test_star_count_rounding() {
        assert_eq!(star_count(4.6), 5);
        assert_eq!(star_count(4.4), 4);
        assert_eq!(star_count(3.5), 4);
        assert_eq!(star_count(2.5), 3);
        assert_eq!(star_count(0.4), 0);
        assert_eq!(star_count(-1.0), 0);
        assert_eq!(star_count(f64::NAN), 0);
    }

    #[test]
    fn test_star_count_is_not_capped_at_scale() {
        assert_eq!(star_count(5.0), 5);
        assert_eq!(star_count(5.6), 6);
        assert_eq!(star_count(12.0), 12);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let info = full_info();
        assert_eq!(sections(&info), sections(&info));
    }
}
