use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event-type namespace for page content. Fixed set, never persisted
/// on its own; only used to discriminate storage keys and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Corporate,
    Wedding,
    Private,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Corporate,
        EventType::Wedding,
        EventType::Private,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Corporate => "corporate",
            EventType::Wedding => "wedding",
            EventType::Private => "private",
            EventType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "corporate" => Some(EventType::Corporate),
            "wedding" => Some(EventType::Wedding),
            "private" => Some(EventType::Private),
            "other" => Some(EventType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named content region of a page. `ALL` lists the regions in the
/// fixed order the resolver walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Hero,
    Ticker,
    Signature,
    Mantra,
    About,
    Cta,
    Faq,
    Reviews,
}

impl SectionKey {
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Hero,
        SectionKey::Ticker,
        SectionKey::Signature,
        SectionKey::Mantra,
        SectionKey::About,
        SectionKey::Cta,
        SectionKey::Faq,
        SectionKey::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Ticker => "ticker",
            SectionKey::Signature => "signature",
            SectionKey::Mantra => "mantra",
            SectionKey::About => "about",
            SectionKey::Cta => "cta",
            SectionKey::Faq => "faq",
            SectionKey::Reviews => "reviews",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hero" => Some(SectionKey::Hero),
            "ticker" => Some(SectionKey::Ticker),
            "signature" => Some(SectionKey::Signature),
            "mantra" => Some(SectionKey::Mantra),
            "about" => Some(SectionKey::About),
            "cta" => Some(SectionKey::Cta),
            "faq" => Some(SectionKey::Faq),
            "reviews" => Some(SectionKey::Reviews),
            _ => None,
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored section override. Rows of the `corporate_content` and
/// `site_content` tables; at most one row per `section_key`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: i32,
    pub section_key: String,
    pub content: Value,
    pub updated_at: DateTime<Utc>,
}

/// Section write issued by the admin editor. Content replaces the
/// stored value wholesale; there is no field-level merge.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertContent {
    pub section_key: String,
    pub content: Value,
}

/// Booking inquiry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i32,
    pub event_type: String,
    pub location: String,
    pub date: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Inquiry as submitted by the booking form, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub event_type: String,
    pub location: String,
    pub date: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Uploaded image bound to a named slot. Rows of `site_images`;
/// at most one row per `image_key`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SiteImage {
    pub id: i32,
    pub image_key: String,
    pub url: String,
    pub original_name: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSiteImage {
    pub image_key: String,
    pub url: String,
    pub original_name: Option<String>,
}

/// Location-page blog post.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub location: String,
    pub title: String,
    pub category: String,
    pub image_url: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub location: String,
    pub title: String,
    pub category: String,
    pub content: String,
}
