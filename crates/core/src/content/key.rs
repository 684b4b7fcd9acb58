/// Storage-key conventions for section records.
///
/// Section overrides are keyed two ways:
/// - Namespaced: `event.{eventType}.{section}`
/// - Legacy: bare `{section}`, written before namespacing existed and
///   honored only when resolving the `corporate` event type.
use super::model::{EventType, SectionKey};

const EVENT_PREFIX: &str = "event.";

/// Build the namespaced storage key for an event/section pair.
pub fn storage_key(event: EventType, section: SectionKey) -> String {
    format!("{EVENT_PREFIX}{event}.{section}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKeyKind {
    Namespaced {
        event: EventType,
        section: SectionKey,
    },
    /// Anything that is not a well-formed namespaced key. Bare section
    /// keys land here, as do unknown keys (which stay inert).
    Legacy(String),
}

impl StorageKeyKind {
    /// Parse a stored key into its kind.
    pub fn parse(key: &str) -> Self {
        if let Some(rest) = key.strip_prefix(EVENT_PREFIX) {
            if let Some((event, section)) = rest.split_once('.') {
                if let (Some(event), Some(section)) =
                    (EventType::parse(event), SectionKey::parse(section))
                {
                    return StorageKeyKind::Namespaced { event, section };
                }
            }
        }
        StorageKeyKind::Legacy(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_namespaced_key() {
        assert_eq!(
            storage_key(EventType::Wedding, SectionKey::Faq),
            "event.wedding.faq"
        );
        assert_eq!(
            storage_key(EventType::Corporate, SectionKey::Hero),
            "event.corporate.hero"
        );
    }

    #[test]
    fn parse_namespaced_key() {
        let kind = StorageKeyKind::parse("event.private.cta");
        assert_eq!(
            kind,
            StorageKeyKind::Namespaced {
                event: EventType::Private,
                section: SectionKey::Cta,
            }
        );
    }

    #[test]
    fn parse_bare_key_as_legacy() {
        let kind = StorageKeyKind::parse("about");
        assert_eq!(kind, StorageKeyKind::Legacy("about".to_string()));
    }

    #[test]
    fn parse_unknown_event_or_section_as_legacy() {
        // Unknown event type
        assert_eq!(
            StorageKeyKind::parse("event.gala.hero"),
            StorageKeyKind::Legacy("event.gala.hero".to_string())
        );
        // Unknown section
        assert_eq!(
            StorageKeyKind::parse("event.wedding.banner"),
            StorageKeyKind::Legacy("event.wedding.banner".to_string())
        );
        // Prefix only
        assert_eq!(
            StorageKeyKind::parse("event.wedding"),
            StorageKeyKind::Legacy("event.wedding".to_string())
        );
    }

    #[test]
    fn round_trip_all_pairs() {
        for event in EventType::ALL {
            for section in SectionKey::ALL {
                let key = storage_key(event, section);
                assert_eq!(
                    StorageKeyKind::parse(&key),
                    StorageKeyKind::Namespaced { event, section }
                );
            }
        }
    }
}
