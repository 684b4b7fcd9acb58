//! Compiled-in default content per event type.
//!
//! These are the values a page renders when no stored override exists.
//! The typed structs double as the per-section schema: stored JSON is
//! untyped, so consumers deserialize through these shapes and missing
//! optional leaves fall back to serde defaults (e.g. a review with no
//! `rating` reads as 5).

use serde::{Deserialize, Serialize};

use super::model::EventType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub subtitle: String,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerContent {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureContent {
    pub quote: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MantraContent {
    pub title: String,
    pub quote: String,
    pub subtitle: String,
    pub paragraph1: String,
    pub paragraph2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
    pub footer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaContent {
    pub title: String,
    pub subtitle: String,
    pub button: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqContent {
    pub title: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewItem {
    pub author: String,
    pub role: String,
    pub text: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsContent {
    pub title: String,
    #[serde(rename = "ratingText")]
    pub rating_text: String,
    pub items: Vec<ReviewItem>,
}

/// The eight typed sections of one event page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSections {
    pub hero: HeroContent,
    pub ticker: TickerContent,
    pub signature: SignatureContent,
    pub mantra: MantraContent,
    pub about: AboutContent,
    pub cta: CtaContent,
    pub faq: FaqContent,
    pub reviews: ReviewsContent,
}

fn s(v: &str) -> String {
    v.to_string()
}

fn faq(category: &str, question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: s(question),
        answer: s(answer),
        category: Some(s(category)),
    }
}

fn review(author: &str, role: &str, text: &str) -> ReviewItem {
    ReviewItem {
        author: s(author),
        role: s(role),
        text: s(text),
        rating: 5,
    }
}

// Mantra and about copy is shared across all four event pages.
fn shared_mantra() -> MantraContent {
    MantraContent {
        title: s("MANTRA"),
        quote: s("PRESENCE, INTENTION, & LEADERSHIP."),
        subtitle: s(
            "Every event is approached with mindfulness, balance, and care - and 200% of my energy.",
        ),
        paragraph1: s(
            "DJ Miss Haze believes in the power of conscious curation. She approaches events \
             with the same guideline as she does her personal life: with presence, intention, \
             emotional awareness, focus and calm leadership. She welcomes and respects all \
             cultures, religions, identities, and orientations.",
        ),
        paragraph2: s(
            "DJ Miss Haze applies the same principles and high ethical standards she has for \
             her personal life to her work as a DJ. With her, you will not just book a DJ. You \
             will partner with an experienced DJ and event host who masters the art of \
             reading, and leading the room.",
        ),
    }
}

fn shared_about() -> AboutContent {
    AboutContent {
        title: s("ABOUT"),
        paragraph1: s(
            "DJ Miss Haze was born and raised in Germany, where she officially started her DJ \
             career in 2010 after a decade of recording mixtapes for her family, friends and \
             ultimately across her entire hometown.",
        ),
        paragraph2: s(
            "Her career started out as a Club DJ in a highly competitive club environment in \
             Frankfurt, Germany. Besides launching the 1st ever radio show dedicated to Hip \
             Hop R&B on German Radio, she also worked with renowned artists such as Kendrick \
             Lamar, Trey Songz, Lloyd, Snap!, Mario and others as their Tour DJ.",
        ),
        paragraph3: s(
            "In 2014, she started receiving steady work as a Corporate Event DJ and a year \
             later took on her 1st gig as a wedding DJ. She moved to the U.S. in 2019 and has \
             since established herself as a top choice for weddings, corporate, and private \
             events.",
        ),
        footer: s("AVAILABLE IN CHICAGO, DALLAS FORT WORTH, DENVER & BEYOND"),
    }
}

fn corporate_sections() -> EventSections {
    EventSections {
        hero: HeroContent {
            subtitle: s("Corporate Event DJ & MC"),
            locations: vec![s("Chicago"), s("Dallas"), s("Denver")],
        },
        ticker: TickerContent {
            items: vec![
                s("HIGH-ENERGY"),
                s("CLASSY & TIMELESS"),
                s("BOLD & ECLECTIC"),
                s("SOPHISTICATED"),
                s("ON BRAND"),
                s("FUN & INCLUSIVE"),
            ],
        },
        signature: SignatureContent {
            quote: s(
                "DJ Miss Haze delivers a premium experience that aligns with your brand and \
                 engages your audience.",
            ),
            description: s(
                "Specializing in Corporate Events across Chicago, Dallas-Fort Worth, and \
                 Denver plus surrounding areas, DJ Miss Haze is trusted by companies, \
                 agencies, and event planners who expect professionalism, adaptability, and \
                 premium sound design.",
            ),
        },
        mantra: shared_mantra(),
        about: shared_about(),
        cta: CtaContent {
            title: s("READY TO BOOST YOUR BRAND?"),
            subtitle: s("Secure your date now for 2026 - 2028"),
            button: s("Inquire Now"),
        },
        faq: FaqContent {
            title: s("FREQUENTLY ASKED"),
            items: vec![
                faq(
                    "DJ & MC Services",
                    "How experienced are you with Corporate Events?",
                    "Over the past 10 years, DJ Miss Haze worked over 200 Corporate Events, \
                     ranging from medium store events, school events or fashion shows to large \
                     company celebrations including Fortune 500 companies.",
                ),
                faq(
                    "Booking",
                    "What is your minimum booking fee?",
                    "Corporate Events start at $1,800. Final pricing will be determined during \
                     the first contact call or zoom meeting with DJ Miss Haze.",
                ),
                faq(
                    "Locations",
                    "Do you charge travel fees?",
                    "Events in Chicago, Dallas Fort Worth and Denver plus 100 miles radius \
                     have ZERO travel fees. Events beyond are subject to travel fees.",
                ),
                faq(
                    "Logistics & Reliability",
                    "Are you insured?",
                    "Yes, DJ Miss Haze carries full liability insurance. If your venue \
                     requires a Certificate of Insurance, we are happy to provide it directly \
                     to them at no extra charge.",
                ),
            ],
        },
        reviews: ReviewsContent {
            title: s("BRAND REVIEWS"),
            rating_text: s("5.0 stars"),
            items: vec![
                review(
                    "Jasmine",
                    "Chicago, IL / Famous Streetwear x Converse Influencer Event",
                    "DJ Miss Haze was such a pleasure to work with for an event we hosted last \
                     month. Everyone was raving about her incredibly curated playlist and I \
                     would absolutely recommend her for any future events.",
                ),
                review(
                    "Wendy",
                    "Denver, CO / Denver Art Museum",
                    "DJ Miss Haze recently played for a fundraising gala at the Denver Art \
                     Museum, and she was incredible at creating an energetic vibe. I highly \
                     recommend DJ Miss Haze for any event!",
                ),
            ],
        },
    }
}

fn wedding_sections() -> EventSections {
    EventSections {
        hero: HeroContent {
            subtitle: s("Wedding DJ & MC"),
            locations: vec![s("Chicago"), s("Dallas"), s("Denver")],
        },
        ticker: TickerContent {
            items: vec![
                s("ROMANTIC"),
                s("TIMELESS"),
                s("HIGH-ENERGY"),
                s("ELEGANT"),
                s("PERSONAL"),
                s("UNFORGETTABLE"),
            ],
        },
        signature: SignatureContent {
            quote: s(
                "Your wedding soundtrack, curated with intention from the first look to the \
                 last dance.",
            ),
            description: s(
                "DJ Miss Haze has curated almost 500 weddings over the past 7 years, covering \
                 music from pre-ceremony to the last song and exit, and is available for \
                 wedding afterparties.",
            ),
        },
        mantra: shared_mantra(),
        about: shared_about(),
        cta: CtaContent {
            title: s("READY TO DANCE ALL NIGHT?"),
            subtitle: s("Secure your date now for 2026 - 2028"),
            button: s("Inquire Now"),
        },
        faq: FaqContent {
            title: s("FREQUENTLY ASKED"),
            items: vec![
                faq(
                    "DJ & MC Services",
                    "Can you DJ and MC?",
                    "Yes, DJ Miss Haze is a professional DJ with live, dynamic music mixing \
                     who also MCs her events. She handles all necessary announcements, \
                     introductions (with phonetic pronunciation checks), and coordinates with \
                     your planner and vendors.",
                ),
                faq(
                    "Booking",
                    "How far in advance should I book?",
                    "We recommend booking 4-24 months in advance for weddings. DJ Miss Haze is \
                     able to cover last minute weddings, subject to availability.",
                ),
                faq(
                    "Booking",
                    "What is your minimum booking fee?",
                    "Weddings start at $2,800. Final pricing will be determined during the \
                     first contact call or zoom meeting with DJ Miss Haze.",
                ),
                faq(
                    "Equipment",
                    "What equipment do you bring to a wedding?",
                    "DJ Miss Haze brings a professional BOSE speaker system, Shure cordless \
                     microphone with mic stand, and dance floor lighting. All equipment is \
                     insured, maintained and tested before every wedding.",
                ),
            ],
        },
        reviews: ReviewsContent {
            title: s("COUPLE REVIEWS"),
            rating_text: s("5.0 stars"),
            items: vec![
                review(
                    "Haley",
                    "Denver, CO / Wedding",
                    "The dance floor was packed all night. DJ Miss Haze read the room \
                     perfectly and kept the energy high from the grand entrance to the last \
                     song.",
                ),
                review(
                    "Marcus & Elena",
                    "Dallas, TX / Wedding",
                    "Professional, talented, and always brings the perfect vibe. Our guests \
                     are still talking about the music.",
                ),
            ],
        },
    }
}

fn private_sections() -> EventSections {
    EventSections {
        hero: HeroContent {
            subtitle: s("Private Event DJ & MC"),
            locations: vec![s("Chicago"), s("Dallas"), s("Denver")],
        },
        ticker: TickerContent {
            items: vec![
                s("INTIMATE"),
                s("HIGH-ENERGY"),
                s("PERSONAL"),
                s("FUN & INCLUSIVE"),
                s("TAILORED"),
                s("MEMORABLE"),
            ],
        },
        signature: SignatureContent {
            quote: s("Birthdays, anniversaries, holiday parties - every celebration gets 200%."),
            description: s(
                "DJ Miss Haze has extensive experience with private events including \
                 birthdays, anniversaries, holiday parties, and intimate gatherings across \
                 Chicago, Dallas-Fort Worth, and Denver.",
            ),
        },
        mantra: shared_mantra(),
        about: shared_about(),
        cta: CtaContent {
            title: s("READY TO CELEBRATE?"),
            subtitle: s("Secure your date now for 2026 - 2028"),
            button: s("Inquire Now"),
        },
        faq: FaqContent {
            title: s("FREQUENTLY ASKED"),
            items: vec![
                faq(
                    "Booking",
                    "What is your minimum booking fee?",
                    "Private events start at $1,500. Final pricing will be determined during \
                     the first contact call or zoom meeting with DJ Miss Haze.",
                ),
                faq(
                    "Booking",
                    "How far in advance should I book?",
                    "We recommend booking 2-6 months in advance for private events. DJ Miss \
                     Haze is able to cover last minute events, subject to availability.",
                ),
                faq(
                    "Locations",
                    "Which locations do you service?",
                    "DJ Miss Haze operates out of three hubs: Chicago (Illinois), Dallas Fort \
                     Worth (Texas) and Denver (Colorado). She is also available for \
                     destination events anywhere in the world.",
                ),
            ],
        },
        reviews: ReviewsContent {
            title: s("CLIENT REVIEWS"),
            rating_text: s("5.0 stars"),
            items: vec![
                review(
                    "Sarah M.",
                    "Birthday Party Host",
                    "DJ Miss Haze made our party unforgettable! She read the room perfectly \
                     and kept everyone dancing all night long.",
                ),
                review(
                    "Marcus T.",
                    "Birthday Party Host",
                    "Incredible energy and professionalism. She knows exactly how to get the \
                     party started and keep it going!",
                ),
                review(
                    "Elena R.",
                    "Event Planner",
                    "I've worked with many DJs over the years, and DJ Miss Haze is truly one \
                     of the best. Professional, talented, and always brings the perfect vibe.",
                ),
            ],
        },
    }
}

fn other_sections() -> EventSections {
    EventSections {
        hero: HeroContent {
            subtitle: s("PR Show & Brand Event DJ"),
            locations: vec![s("Chicago"), s("Dallas"), s("Denver")],
        },
        ticker: TickerContent {
            items: vec![
                s("ON BRAND"),
                s("RED CARPET"),
                s("HIGH-ENERGY"),
                s("EDITORIAL"),
                s("BOLD & ECLECTIC"),
                s("POLISHED"),
            ],
        },
        signature: SignatureContent {
            quote: s("Music that matches your brand's identity and event objectives."),
            description: s(
                "Over the past 10 years, DJ Miss Haze has worked with publicists, brands, and \
                 creative agencies on events ranging from red carpet galas and brand \
                 activations to product launches and influencer events.",
            ),
        },
        mantra: shared_mantra(),
        about: shared_about(),
        cta: CtaContent {
            title: s("READY TO LAUNCH?"),
            subtitle: s("Secure your date now for 2026 - 2028"),
            button: s("Inquire Now"),
        },
        faq: FaqContent {
            title: s("FREQUENTLY ASKED"),
            items: vec![
                faq(
                    "DJ & MC Services",
                    "How experienced are you with PR Shows and Brand Events?",
                    "Over the past 10 years, DJ Miss Haze has worked with publicists, brands, \
                     and creative agencies on events ranging from red carpet galas and brand \
                     activations to product launches and influencer events.",
                ),
                faq(
                    "Booking",
                    "What is your minimum booking fee?",
                    "Event pricing varies based on scope, location, and requirements. Final \
                     pricing will be determined during the first contact call or zoom meeting \
                     with DJ Miss Haze.",
                ),
            ],
        },
        reviews: ReviewsContent {
            title: s("BRAND REVIEWS"),
            rating_text: s("5.0 stars"),
            items: vec![review(
                "Jasmine",
                "Chicago, IL / Influencer Event",
                "She was very responsive, helped execute our vision for the event and brought \
                 amazing positive energy and fun vibes!",
            )],
        },
    }
}

/// Default sections for one event type. Mantra and about are identical
/// across all four; everything else is per-event copy.
pub fn default_sections(event: EventType) -> EventSections {
    match event {
        EventType::Corporate => corporate_sections(),
        EventType::Wedding => wedding_sections(),
        EventType::Private => private_sections(),
        EventType::Other => other_sections(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_event_type_has_complete_defaults() {
        for event in EventType::ALL {
            let sections = default_sections(event);
            assert!(!sections.hero.subtitle.is_empty());
            assert!(!sections.ticker.items.is_empty());
            assert!(!sections.faq.items.is_empty());
            assert!(!sections.reviews.items.is_empty());
        }
    }

    #[test]
    fn review_rating_defaults_to_five_when_absent() {
        let raw = serde_json::json!({
            "author": "Rilie",
            "role": "Kansas City, MO / JE Dunn",
            "text": "10/10 recommend!"
        });
        let item: ReviewItem = serde_json::from_value(raw).unwrap();
        assert_eq!(item.rating, 5);
    }

    #[test]
    fn faq_category_is_optional() {
        let raw = serde_json::json!({
            "question": "Can you DJ and MC?",
            "answer": "Yes."
        });
        let item: FaqItem = serde_json::from_value(raw).unwrap();
        assert!(item.category.is_none());
    }

    #[test]
    fn mantra_and_about_are_shared_across_event_types() {
        let corporate = default_sections(EventType::Corporate);
        let wedding = default_sections(EventType::Wedding);
        assert_eq!(corporate.mantra.quote, wedding.mantra.quote);
        assert_eq!(corporate.about.footer, wedding.about.footer);
    }
}
