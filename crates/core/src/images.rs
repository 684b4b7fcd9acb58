//! Image slot bookkeeping: the fixed slot registry, upload constraints,
//! and stored-filename generation.
//!
//! The registry is advisory. Storage accepts any `image_key`, but the
//! presentation layer only ever requests keys from this set, so unknown
//! keys are inert rather than erroneous.

/// Maximum accepted upload size: 20 MiB.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Extensions accepted for upload (images plus short video loops).
pub const ALLOWED_EXTENSIONS: [&str; 8] =
    ["jpg", "jpeg", "png", "webp", "gif", "svg", "mp4", "mov"];

/// A named image slot with its compiled-in fallback asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSlot {
    pub key: &'static str,
    pub default_asset: &'static str,
}

/// One hero slot per event type plus the shared about portrait.
pub const SLOT_REGISTRY: [ImageSlot; 5] = [
    ImageSlot {
        key: "hero_corporate",
        default_asset: "/assets/hero-corporate.jpg",
    },
    ImageSlot {
        key: "hero_wedding",
        default_asset: "/assets/hero-wedding.jpg",
    },
    ImageSlot {
        key: "hero_private",
        default_asset: "/assets/hero-private.jpg",
    },
    ImageSlot {
        key: "hero_other",
        default_asset: "/assets/hero-other.jpg",
    },
    ImageSlot {
        key: "about_photo",
        default_asset: "/assets/hero-corporate.jpg",
    },
];

/// Look up a slot in the fixed registry.
pub fn slot(key: &str) -> Option<&'static ImageSlot> {
    SLOT_REGISTRY.iter().find(|s| s.key == key)
}

fn extension(filename: &str) -> Option<&str> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext)
}

/// Whether the original filename carries an allow-listed extension.
pub fn is_allowed_file(filename: &str) -> bool {
    extension(filename)
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Strip the original stem down to [A-Za-z0-9-_], replacing everything
/// else with underscores.
fn sanitize_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Collision-resistant stored filename: sanitized stem plus a
/// millisecond stamp, keeping the original extension.
pub fn unique_filename(original: &str, stamp_millis: i64) -> String {
    match original.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            format!("{}-{stamp_millis}.{ext}", sanitize_stem(stem))
        }
        _ => format!("{}-{stamp_millis}", sanitize_stem(original)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_one_hero_per_event_plus_shared_about() {
        assert_eq!(SLOT_REGISTRY.len(), 5);
        for key in ["hero_corporate", "hero_wedding", "hero_private", "hero_other"] {
            assert!(slot(key).is_some(), "missing hero slot {key}");
        }
        assert!(slot("about_photo").is_some());
        assert!(slot("hero_gala").is_none());
    }

    #[test]
    fn allow_list_accepts_images_and_videos_case_insensitively() {
        assert!(is_allowed_file("venue.jpg"));
        assert!(is_allowed_file("loop.MP4"));
        assert!(is_allowed_file("portrait.WebP"));
        assert!(!is_allowed_file("script.exe"));
        assert!(!is_allowed_file("notes.pdf"));
        assert!(!is_allowed_file("no-extension"));
        assert!(!is_allowed_file(".gitignore"));
    }

    #[test]
    fn unique_filename_sanitizes_and_stamps() {
        let name = unique_filename("My Venue (night).jpg", 1750000000000);
        assert_eq!(name, "My_Venue__night_-1750000000000.jpg");
    }

    #[test]
    fn unique_filename_without_extension() {
        let name = unique_filename("rawfile", 42);
        assert_eq!(name, "rawfile-42");
    }
}
