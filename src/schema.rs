// File: ./src/schema.rs
//! schema.org `DanceEvent` JSON-LD for search engines, one object per milonga.
use crate::config::Config;
use crate::model::Milonga;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOptions {
    pub address_country: String,
    /// Offer URL for milongas without a URL of their own.
    pub site_url: String,
}

impl SchemaOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            address_country: config.address_country.clone(),
            site_url: config.site_url.clone(),
        }
    }
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub fn dance_event(m: &Milonga, opts: &SchemaOptions) -> Value {
    let date = m.iso_date();
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "DanceEvent",
        "name": m.title,
        "startDate": format!("{}T{}", date, m.start_time),
        "endDate": format!("{}T{}", date, m.end_time),
        "eventStatus": "https://schema.org/EventScheduled",
        "eventAttendanceMode": "https://schema.org/OfflineEventAttendanceMode",
        "location": {
            "@type": "Place",
            "name": m.venue,
            "address": {
                "@type": "PostalAddress",
                "streetAddress": format!("{} {}", m.street, m.house_number),
                "addressLocality": m.city,
                "postalCode": m.postal_code,
                "addressCountry": opts.address_country,
            }
        },
        "performer": {
            "@type": "Person",
            "name": m.dj,
        }
    });

    if let Value::Object(obj) = &mut schema {
        insert_optional_fields(obj, m, opts);
    }

    schema
}

fn insert_optional_fields(obj: &mut Map<String, Value>, m: &Milonga, opts: &SchemaOptions) {
    if let Some(desc) = &m.description {
        obj.insert("description".into(), json!(desc));
    }
    if let Some(url) = &m.url {
        obj.insert("url".into(), json!(url));
    }
    if let Some(organizer) = &m.organizer {
        let mut org = Map::new();
        org.insert("@type".into(), json!("Organization"));
        org.insert("name".into(), json!(organizer));
        if let Some(org_url) = &m.organizer_url {
            org.insert("url".into(), json!(org_url));
        }
        obj.insert("organizer".into(), Value::Object(org));
    }
    if let Some(price) = &m.price {
        let mut offer = Map::new();
        offer.insert("@type".into(), json!("Offer"));
        offer.insert("price".into(), json!(price));
        if let Some(currency) = &m.currency {
            offer.insert("priceCurrency".into(), json!(currency));
        }
        offer.insert("availability".into(), json!("https://schema.org/InStock"));
        offer.insert(
            "url".into(),
            json!(m.url.as_deref().unwrap_or(&opts.site_url)),
        );
        obj.insert("offers".into(), Value::Object(offer));
    }
}

/// `<script type="application/ld+json">` block for one milonga.
pub fn script_tag(m: &Milonga, opts: &SchemaOptions) -> String {
    // "</" inside a JSON string would end the script element early.
    let body = dance_event(m, opts).to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{}</script>"#, body)
}

pub fn script_tags(milongas: &[Milonga], opts: &SchemaOptions) -> Vec<String> {
    milongas.iter().map(|m| script_tag(m, opts)).collect()
}
