//! Editable site copy, one typed document per content key.
//!
//! Each [`ContentKey`] has its own record type. [`SectionContent`] is the
//! tagged union over them; it serializes untagged so the wire and storage
//! shape of a section is exactly its record. Incoming JSON is decoded against
//! the record chosen by the key, never guessed from the body.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// The fixed set of editable content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKey {
    Hero,
    About,
    Skills,
    Contact,
    Social,
    Banners,
    Backgrounds,
}

impl ContentKey {
    pub const ALL: [ContentKey; 7] = [
        ContentKey::Hero,
        ContentKey::About,
        ContentKey::Skills,
        ContentKey::Contact,
        ContentKey::Social,
        ContentKey::Banners,
        ContentKey::Backgrounds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKey::Hero => "hero",
            ContentKey::About => "about",
            ContentKey::Skills => "skills",
            ContentKey::Contact => "contact",
            ContentKey::Social => "social",
            ContentKey::Banners => "banners",
            ContentKey::Backgrounds => "backgrounds",
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ContentKey::ALL.iter().map(|k| k.as_str()).collect();
                CoreError::Validation(format!(
                    "Unknown content key '{s}'. Valid keys: {}",
                    valid.join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Per-key records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub ctas: Vec<CallToAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub summary: String,
    pub highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsContent {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub devops: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub whatsapp_number: String,
}

/// Social network name to profile URL (`github`, `linkedin`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialContent {
    pub links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub image_url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannersContent {
    pub items: Vec<Banner>,
}

/// Background image URLs for the page sections that support one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundsContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagged union
// ---------------------------------------------------------------------------

/// The content document of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Hero(HeroContent),
    About(AboutContent),
    Skills(SkillsContent),
    Contact(ContactContent),
    Social(SocialContent),
    Banners(BannersContent),
    Backgrounds(BackgroundsContent),
}

impl SectionContent {
    /// The key this document belongs to.
    pub fn key(&self) -> ContentKey {
        match self {
            SectionContent::Hero(_) => ContentKey::Hero,
            SectionContent::About(_) => ContentKey::About,
            SectionContent::Skills(_) => ContentKey::Skills,
            SectionContent::Contact(_) => ContentKey::Contact,
            SectionContent::Social(_) => ContentKey::Social,
            SectionContent::Banners(_) => ContentKey::Banners,
            SectionContent::Backgrounds(_) => ContentKey::Backgrounds,
        }
    }

    /// Decode a JSON document as the record type of `key`.
    ///
    /// Missing fields take their defaults and unknown fields are ignored; a
    /// value of the wrong JSON type is a validation error.
    pub fn from_value(key: ContentKey, value: serde_json::Value) -> Result<Self, CoreError> {
        fn decode<T: serde::de::DeserializeOwned>(
            key: ContentKey,
            value: serde_json::Value,
        ) -> Result<T, CoreError> {
            serde_json::from_value(value)
                .map_err(|e| CoreError::Validation(format!("Invalid '{key}' content: {e}")))
        }

        Ok(match key {
            ContentKey::Hero => SectionContent::Hero(decode(key, value)?),
            ContentKey::About => SectionContent::About(decode(key, value)?),
            ContentKey::Skills => SectionContent::Skills(decode(key, value)?),
            ContentKey::Contact => SectionContent::Contact(decode(key, value)?),
            ContentKey::Social => SectionContent::Social(decode(key, value)?),
            ContentKey::Banners => SectionContent::Banners(decode(key, value)?),
            ContentKey::Backgrounds => SectionContent::Backgrounds(decode(key, value)?),
        })
    }

    /// Encode as a JSON document for storage.
    pub fn to_value(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self)
            .map_err(|e| CoreError::Internal(format!("Failed to encode '{}' content: {e}", self.key())))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn keys_parse_and_display() {
        for key in ContentKey::ALL {
            assert_eq!(key.as_str().parse::<ContentKey>().unwrap(), key);
            assert_eq!(key.to_string(), key.as_str());
        }
    }

    #[test]
    fn unknown_key_lists_valid_keys() {
        let err = "resume".parse::<ContentKey>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("hero") && msg.contains("backgrounds"));
    }

    #[test]
    fn hero_decodes_with_defaults() {
        let content =
            SectionContent::from_value(ContentKey::Hero, json!({ "title": "Hi" })).unwrap();
        assert_matches!(&content, SectionContent::Hero(h) if h.title == "Hi" && h.ctas.is_empty());
        assert_eq!(content.key(), ContentKey::Hero);
    }

    #[test]
    fn wire_shape_is_the_bare_record() {
        let content = SectionContent::from_value(
            ContentKey::Skills,
            json!({ "frontend": ["React"], "backend": ["Rust"], "devops": [], "extra": 1 }),
        )
        .unwrap();
        assert_eq!(
            content.to_value().unwrap(),
            json!({ "frontend": ["React"], "backend": ["Rust"], "devops": [] })
        );
    }

    #[test]
    fn social_is_a_flat_map() {
        let content = SectionContent::from_value(
            ContentKey::Social,
            json!({ "github": "https://github.com/me", "linkedin": "https://linkedin.com/in/me" }),
        )
        .unwrap();
        let value = content.to_value().unwrap();
        assert_eq!(value["github"], "https://github.com/me");
    }

    #[test]
    fn wrong_shape_is_a_validation_error() {
        let result = SectionContent::from_value(ContentKey::About, json!({ "highlights": "nope" }));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("'about'"));

        let result = SectionContent::from_value(ContentKey::Banners, json!([1, 2]));
        assert_matches!(result, Err(CoreError::Validation(_)));
    }
}
