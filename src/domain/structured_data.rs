//! schema.org `Event` document rendered as JSON-LD

use crate::domain::SiteProfile;
use crate::error::{Result, SeoError};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Event details from the `[event]` configuration section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub name: String,
    pub description: String,
    /// ISO 8601 with UTC offset
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_attendance_mode")]
    pub attendance_mode: String,
    pub organizer: String,
    #[serde(default = "default_price")]
    pub price: String,
    pub currency: String,
    #[serde(default = "default_availability")]
    pub availability: String,
    pub valid_from: String,
    pub locations: Vec<EventLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLocation {
    pub name: String,
    /// Defaults to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    pub region: String,
    pub country: String,
}

fn default_status() -> String {
    "https://schema.org/EventScheduled".to_string()
}

fn default_attendance_mode() -> String {
    "https://schema.org/OfflineEventAttendanceMode".to_string()
}

fn default_price() -> String {
    "0".to_string()
}

fn default_availability() -> String {
    "https://schema.org/InStock".to_string()
}

impl EventDetails {
    /// Check the dates parse as RFC 3339 and the event does not end before it starts
    pub fn validate(&self) -> Result<()> {
        let start = parse_date("start_date", &self.start_date)?;
        let end = parse_date("end_date", &self.end_date)?;
        parse_date("valid_from", &self.valid_from)?;

        if end < start {
            return Err(SeoError::Config(format!(
                "Event end_date {} is before start_date {}",
                self.end_date, self.start_date
            )));
        }

        if self.locations.is_empty() {
            return Err(SeoError::Config(
                "Event needs at least one location".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_date(field: &str, value: &str) -> Result<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|e| {
        SeoError::Config(format!(
            "Invalid event {}: '{}' ({}). Expected e.g. 2026-02-19T09:00:00+05:30",
            field, value, e
        ))
    })
}

// Field order below is the key order of the emitted JSON.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDocument<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    start_date: &'a str,
    end_date: &'a str,
    event_status: &'a str,
    event_attendance_mode: &'a str,
    location: Vec<Place<'a>>,
    image: &'a str,
    organizer: Organization<'a>,
    url: &'a str,
    offers: Offer<'a>,
    performer: Performer<'a>,
}

#[derive(Serialize)]
struct Place<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    address: PostalAddress<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostalAddress<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    address_locality: &'a str,
    address_region: &'a str,
    address_country: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    url: &'a str,
    email: &'a str,
    same_as: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Offer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    url: &'a str,
    price: &'a str,
    price_currency: &'a str,
    availability: &'a str,
    valid_from: &'a str,
}

#[derive(Serialize)]
struct Performer<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

/// Serialize the event document as 2-space indented JSON.
///
/// `</` is written as `<\/` so the text can sit inside a `<script>` element.
pub fn render_event_json(site: &SiteProfile, event: &EventDetails) -> Result<String> {
    let document = EventDocument {
        context: SCHEMA_CONTEXT,
        kind: "Event",
        name: &event.name,
        description: &event.description,
        start_date: &event.start_date,
        end_date: &event.end_date,
        event_status: &event.status,
        event_attendance_mode: &event.attendance_mode,
        location: event
            .locations
            .iter()
            .map(|loc| Place {
                kind: "Place",
                name: &loc.name,
                address: PostalAddress {
                    kind: "PostalAddress",
                    address_locality: loc.locality.as_deref().unwrap_or(&loc.name),
                    address_region: &loc.region,
                    address_country: &loc.country,
                },
            })
            .collect(),
        image: &site.og_image,
        organizer: Organization {
            kind: "Organization",
            name: &event.organizer,
            url: site.base_url(),
            email: &site.support_email,
            same_as: vec![site.instagram_url(), site.registration_url.clone()],
        },
        url: site.base_url(),
        offers: Offer {
            kind: "Offer",
            url: &site.registration_url,
            price: &event.price,
            price_currency: &event.currency,
            availability: &event.availability,
            valid_from: &event.valid_from,
        },
        performer: Performer {
            kind: "Organization",
            name: &event.organizer,
        },
    };

    let json = serde_json::to_string_pretty(&document)?;
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::site::tests::sample_site;

    pub(crate) fn sample_event() -> EventDetails {
        EventDetails {
            name: "Example Fest".to_string(),
            description: "Two days & one night".to_string(),
            start_date: "2026-02-19T09:00:00+05:30".to_string(),
            end_date: "2026-02-20T09:00:00+05:30".to_string(),
            status: default_status(),
            attendance_mode: default_attendance_mode(),
            organizer: "Example Org".to_string(),
            price: default_price(),
            currency: "INR".to_string(),
            availability: default_availability(),
            valid_from: "2025-12-01T00:00:00+05:30".to_string(),
            locations: vec![
                EventLocation {
                    name: "Bengaluru".to_string(),
                    locality: None,
                    region: "KA".to_string(),
                    country: "IN".to_string(),
                },
                EventLocation {
                    name: "Pune".to_string(),
                    locality: None,
                    region: "MH".to_string(),
                    country: "IN".to_string(),
                },
            ],
        }
    }

    #[test]
    fn keys_follow_schema_order() {
        let json = render_event_json(&sample_site(), &sample_event()).unwrap();

        let keys = [
            "\"@context\"",
            "\"@type\": \"Event\"",
            "\"name\"",
            "\"description\"",
            "\"startDate\"",
            "\"endDate\"",
            "\"eventStatus\"",
            "\"eventAttendanceMode\"",
            "\"location\"",
            "\"image\"",
            "\"organizer\"",
            "\"url\": \"https://example.org\"",
            "\"offers\"",
            "\"performer\"",
        ];
        let mut last = 0;
        for key in keys {
            let pos = json[last..]
                .find(key)
                .unwrap_or_else(|| panic!("{} missing or out of order", key));
            last += pos + key.len();
        }
    }

    #[test]
    fn uses_two_space_indentation() {
        let json = render_event_json(&sample_site(), &sample_event()).unwrap();
        assert!(json.starts_with("{\n  \"@context\": \"https://schema.org\",\n"));
        assert!(json.contains("\n    {\n      \"@type\": \"Place\",\n"));
        assert!(json.ends_with("\n}"));
    }

    #[test]
    fn nests_postal_address_and_same_as() {
        let json = render_event_json(&sample_site(), &sample_event()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value["location"][0];
        assert_eq!(first["@type"], "Place");
        assert_eq!(first["address"]["@type"], "PostalAddress");
        assert_eq!(first["address"]["addressLocality"], "Bengaluru");
        assert_eq!(first["address"]["addressRegion"], "KA");

        let same_as = value["organizer"]["sameAs"].as_array().unwrap();
        assert_eq!(same_as[0], "https://instagram.com/example.fest");
        assert_eq!(same_as[1], "https://tickets.example.com/fest");

        assert_eq!(value["offers"]["price"], "0");
        assert_eq!(value["performer"]["@type"], "Organization");
        assert!(value["performer"].get("url").is_none());
    }

    #[test]
    fn output_is_deterministic() {
        let site = sample_site();
        let event = sample_event();
        assert_eq!(
            render_event_json(&site, &event).unwrap(),
            render_event_json(&site, &event).unwrap()
        );
    }

    #[test]
    fn closing_script_sequence_is_escaped() {
        let mut event = sample_event();
        event.description = "</script><b>".to_string();
        let json = render_event_json(&sample_site(), &event).unwrap();

        assert!(!json.contains("</script>"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["description"], "</script><b>");
    }

    #[test]
    fn validate_rejects_bad_dates() {
        let mut event = sample_event();
        event.start_date = "19-02-2026".to_string();
        assert!(event.validate().is_err());

        let mut event = sample_event();
        event.end_date = "2026-02-18T09:00:00+05:30".to_string();
        assert!(event.validate().is_err());

        assert!(sample_event().validate().is_ok());
    }
}
