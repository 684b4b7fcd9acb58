//! Content resolution: overlay stored section overrides onto the
//! compiled-in defaults for an event type.
//!
//! Resolution is a pure function of the record set passed in. Callers
//! read the full set once and re-resolve after any write; nothing here
//! touches the database.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;

use super::defaults::default_sections;
use super::key::{storage_key, StorageKeyKind};
use super::model::{ContentRecord, EventType, SectionKey};

/// Fully resolved content for one event page: all eight sections,
/// non-null by construction. Stored overrides are carried verbatim, so
/// a section's value is whatever JSON the admin last saved for it.
#[derive(Debug, Clone, Serialize)]
pub struct EventContent {
    pub hero: Value,
    pub ticker: Value,
    pub signature: Value,
    pub mantra: Value,
    pub about: Value,
    pub cta: Value,
    pub faq: Value,
    pub reviews: Value,
}

impl EventContent {
    fn section_mut(&mut self, section: SectionKey) -> &mut Value {
        match section {
            SectionKey::Hero => &mut self.hero,
            SectionKey::Ticker => &mut self.ticker,
            SectionKey::Signature => &mut self.signature,
            SectionKey::Mantra => &mut self.mantra,
            SectionKey::About => &mut self.about,
            SectionKey::Cta => &mut self.cta,
            SectionKey::Faq => &mut self.faq,
            SectionKey::Reviews => &mut self.reviews,
        }
    }

    pub fn section(&self, section: SectionKey) -> &Value {
        match section {
            SectionKey::Hero => &self.hero,
            SectionKey::Ticker => &self.ticker,
            SectionKey::Signature => &self.signature,
            SectionKey::Mantra => &self.mantra,
            SectionKey::About => &self.about,
            SectionKey::Cta => &self.cta,
            SectionKey::Faq => &self.faq,
            SectionKey::Reviews => &self.reviews,
        }
    }

    fn from_defaults(event: EventType) -> Self {
        let defaults = default_sections(event);
        // Serializing the typed defaults cannot fail; the structs are
        // plain strings and vectors.
        Self {
            hero: serde_json::to_value(&defaults.hero).unwrap_or(Value::Null),
            ticker: serde_json::to_value(&defaults.ticker).unwrap_or(Value::Null),
            signature: serde_json::to_value(&defaults.signature).unwrap_or(Value::Null),
            mantra: serde_json::to_value(&defaults.mantra).unwrap_or(Value::Null),
            about: serde_json::to_value(&defaults.about).unwrap_or(Value::Null),
            cta: serde_json::to_value(&defaults.cta).unwrap_or(Value::Null),
            faq: serde_json::to_value(&defaults.faq).unwrap_or(Value::Null),
            reviews: serde_json::to_value(&defaults.reviews).unwrap_or(Value::Null),
        }
    }
}

/// Resolve the content bundle for one event type.
///
/// For each section, in `SectionKey::ALL` order:
/// 1. a stored record under `event.{type}.{section}` wins,
/// 2. else, for `corporate` only, a stored record under the bare
///    legacy `{section}` key,
/// 3. else the compiled-in default.
///
/// Section content is swapped wholesale - no deep merge and no shape
/// validation of the stored JSON.
pub fn resolve_event_content(event: EventType, records: &[ContentRecord]) -> EventContent {
    // Classify the record set once. Unknown keys parse as legacy and
    // never match a bare section name, so they stay inert.
    let mut namespaced: HashMap<&str, &Value> = HashMap::new();
    let mut legacy: HashMap<&str, &Value> = HashMap::new();
    for record in records {
        match StorageKeyKind::parse(&record.section_key) {
            StorageKeyKind::Namespaced { .. } => {
                namespaced.insert(record.section_key.as_str(), &record.content);
            }
            StorageKeyKind::Legacy(_) => {
                legacy.insert(record.section_key.as_str(), &record.content);
            }
        }
    }

    let mut content = EventContent::from_defaults(event);
    for section in SectionKey::ALL {
        if let Some(value) = namespaced.get(storage_key(event, section).as_str()) {
            *content.section_mut(section) = (*value).clone();
        } else if event == EventType::Corporate {
            if let Some(value) = legacy.get(section.as_str()) {
                *content.section_mut(section) = (*value).clone();
            }
        }
    }

    content
}

/// Resolve all four event types against the same record set in one
/// pass. Used by the admin editor, which shows every page at once.
pub fn resolve_all_event_content(
    records: &[ContentRecord],
) -> BTreeMap<EventType, EventContent> {
    EventType::ALL
        .into_iter()
        .map(|event| (event, resolve_event_content(event, records)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn record(section_key: &str, content: Value) -> ContentRecord {
        ContentRecord {
            id: 1,
            section_key: section_key.to_string(),
            content,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_store_yields_eight_non_null_sections_for_every_event() {
        for event in EventType::ALL {
            let content = resolve_event_content(event, &[]);
            for section in SectionKey::ALL {
                assert!(
                    !content.section(section).is_null(),
                    "{event} {section} resolved to null"
                );
            }
        }
    }

    #[test]
    fn namespaced_override_is_returned_verbatim() {
        let override_faq = json!({
            "title": "CUSTOM FAQ",
            "items": [{"question": "Q", "answer": "A"}]
        });
        let records = vec![record("event.wedding.faq", override_faq.clone())];

        let content = resolve_event_content(EventType::Wedding, &records);
        assert_eq!(content.faq, override_faq);

        // Other sections still come from defaults.
        assert!(content.hero.get("subtitle").is_some());
    }

    #[test]
    fn legacy_bare_key_applies_to_corporate_only() {
        let legacy_about = json!({"title": "LEGACY ABOUT"});
        let records = vec![record("about", legacy_about.clone())];

        let corporate = resolve_event_content(EventType::Corporate, &records);
        assert_eq!(corporate.about, legacy_about);

        for event in [EventType::Wedding, EventType::Private, EventType::Other] {
            let other = resolve_event_content(event, &records);
            assert_ne!(other.about, legacy_about, "{event} honored a legacy key");
        }
    }

    #[test]
    fn namespaced_record_beats_legacy_record() {
        let namespaced = json!({"title": "NAMESPACED"});
        let legacy = json!({"title": "LEGACY"});
        let records = vec![
            record("about", legacy),
            record("event.corporate.about", namespaced.clone()),
        ];

        let content = resolve_event_content(EventType::Corporate, &records);
        assert_eq!(content.about, namespaced);
    }

    #[test]
    fn override_for_one_event_does_not_leak_into_another() {
        let records = vec![record("event.private.cta", json!({"title": "PRIVATE CTA"}))];

        let private = resolve_event_content(EventType::Private, &records);
        let wedding = resolve_event_content(EventType::Wedding, &records);
        assert_eq!(private.cta["title"], "PRIVATE CTA");
        assert_ne!(wedding.cta["title"], "PRIVATE CTA");
    }

    #[test]
    fn unknown_keys_are_inert() {
        let records = vec![
            record("event.gala.hero", json!({"subtitle": "GALA"})),
            record("banner", json!({"x": 1})),
        ];
        for event in EventType::ALL {
            let content = resolve_event_content(event, &records);
            assert_ne!(content.hero["subtitle"], "GALA");
        }
    }

    #[test]
    fn resolve_all_covers_every_event_type() {
        let records = vec![record("event.wedding.hero", json!({"subtitle": "W"}))];
        let all = resolve_all_event_content(&records);

        assert_eq!(all.len(), 4);
        assert_eq!(all[&EventType::Wedding].hero["subtitle"], "W");
        assert_ne!(all[&EventType::Corporate].hero["subtitle"], "W");
    }
}
