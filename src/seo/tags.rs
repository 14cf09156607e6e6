use serde_json::json;

use crate::config::SiteConfig;
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Website,
    Article,
    Profile,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Website => "website",
            ContentType::Article => "article",
            ContentType::Profile => "profile",
        }
    }
}

/// Descriptive fields of one page.
///
/// Values are written to the head verbatim: nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
    pub content_type: ContentType,
    pub author: String,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            keywords: DEFAULT_KEYWORDS.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            url: DEFAULT_URL.to_string(),
            content_type: ContentType::Website,
            author: BRAND_NAME.to_string(),
            published_time: None,
            modified_time: None,
        }
    }
}

/// Logical identity of a head node the synchronizer owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadKey {
    Title,
    MetaName(&'static str),
    MetaProperty(&'static str),
    ArticleTag(&'static str),
    Canonical,
    Preconnect { href: &'static str, crossorigin: bool },
    JsonLd,
}

/// Where a node keeps the value the synchronizer writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSlot {
    Text,
    Attr(&'static str),
}

const FONTS_API: &str = "https://fonts.googleapis.com";
const FONTS_STATIC: &str = "https://fonts.gstatic.com";
const ARTICLE_SECTION: &str = "Finance";
const ARTICLE_TAGS: [&str; 2] = ["Gestion de trésorerie", "Cash Management"];

impl HeadKey {
    pub fn tag_name(&self) -> &'static str {
        match self {
            HeadKey::Title => "title",
            HeadKey::MetaName(_) | HeadKey::MetaProperty(_) | HeadKey::ArticleTag(_) => "meta",
            HeadKey::Canonical | HeadKey::Preconnect { .. } => "link",
            HeadKey::JsonLd => "script",
        }
    }

    /// CSS selector matching every node that addresses this key.
    pub fn selector(&self) -> String {
        match self {
            HeadKey::Title => "head > title".to_string(),
            HeadKey::MetaName(name) => format!("meta[name=\"{}\"]", name),
            HeadKey::MetaProperty(property) => format!("meta[property=\"{}\"]", property),
            HeadKey::ArticleTag(tag) => format!("meta[property=\"article:tag\"][content=\"{}\"]", tag),
            HeadKey::Canonical => "link[rel=\"canonical\"]".to_string(),
            HeadKey::Preconnect { href, .. } => format!("link[rel=\"preconnect\"][href=\"{}\"]", href),
            HeadKey::JsonLd => "script[type=\"application/ld+json\"]".to_string(),
        }
    }

    /// Attributes stamped on a freshly created node.
    pub fn identity_attrs(&self) -> Vec<(&'static str, &'static str)> {
        match *self {
            HeadKey::Title => vec![],
            HeadKey::MetaName(name) => vec![("name", name)],
            HeadKey::MetaProperty(property) => vec![("property", property)],
            HeadKey::ArticleTag(_) => vec![("property", "article:tag")],
            HeadKey::Canonical => vec![("rel", "canonical")],
            HeadKey::Preconnect { crossorigin: true, .. } => {
                vec![("rel", "preconnect"), ("crossorigin", "anonymous")]
            }
            HeadKey::Preconnect { crossorigin: false, .. } => vec![("rel", "preconnect")],
            HeadKey::JsonLd => vec![("type", "application/ld+json")],
        }
    }

    pub fn value_slot(&self) -> ValueSlot {
        match self {
            HeadKey::Title | HeadKey::JsonLd => ValueSlot::Text,
            HeadKey::Canonical | HeadKey::Preconnect { .. } => ValueSlot::Attr("href"),
            _ => ValueSlot::Attr("content"),
        }
    }
}

/// Every key the synchronizer may create. Anything listed here but absent
/// from the desired set is removed from the head.
pub const OWNED_KEYS: &[HeadKey] = &[
    HeadKey::Title,
    HeadKey::MetaName("title"),
    HeadKey::MetaName("description"),
    HeadKey::MetaName("keywords"),
    HeadKey::MetaName("author"),
    HeadKey::MetaName("robots"),
    HeadKey::MetaName("language"),
    HeadKey::MetaName("revisit-after"),
    HeadKey::Canonical,
    HeadKey::MetaProperty("og:type"),
    HeadKey::MetaProperty("og:title"),
    HeadKey::MetaProperty("og:description"),
    HeadKey::MetaProperty("og:image"),
    HeadKey::MetaProperty("og:url"),
    HeadKey::MetaProperty("og:site_name"),
    HeadKey::MetaProperty("og:locale"),
    HeadKey::MetaName("twitter:card"),
    HeadKey::MetaName("twitter:title"),
    HeadKey::MetaName("twitter:description"),
    HeadKey::MetaName("twitter:image"),
    HeadKey::MetaName("twitter:creator"),
    HeadKey::MetaProperty("linkedin:title"),
    HeadKey::MetaProperty("linkedin:description"),
    HeadKey::MetaProperty("linkedin:image"),
    HeadKey::MetaProperty("article:published_time"),
    HeadKey::MetaProperty("article:modified_time"),
    HeadKey::MetaProperty("article:author"),
    HeadKey::MetaProperty("article:section"),
    HeadKey::ArticleTag(ARTICLE_TAGS[0]),
    HeadKey::ArticleTag(ARTICLE_TAGS[1]),
    HeadKey::MetaName("geo.region"),
    HeadKey::MetaName("geo.placename"),
    HeadKey::MetaName("geo.position"),
    HeadKey::MetaName("ICBM"),
    HeadKey::MetaName("viewport"),
    HeadKey::MetaName("format-detection"),
    HeadKey::Preconnect { href: FONTS_API, crossorigin: false },
    HeadKey::Preconnect { href: FONTS_STATIC, crossorigin: true },
    HeadKey::JsonLd,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub key: HeadKey,
    pub value: String,
}

impl HeadTag {
    fn new(key: HeadKey, value: impl Into<String>) -> Self {
        Self { key, value: value.into() }
    }
}

/// Page title with the brand suffix, unless the brand is already there.
pub fn full_title(title: &str, config: &SiteConfig) -> String {
    if title.contains(&config.brand_name) {
        title.to_string()
    } else {
        format!("{} | {}", title, config.brand_name)
    }
}

/// schema.org description of the firm, serialized into the JSON-LD node.
pub fn structured_data(meta: &PageMetadata, config: &SiteConfig) -> serde_json::Value {
    let url = config.absolute_url(&meta.url);
    json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": config.brand_name,
        "description": meta.description,
        "url": url,
        "logo": config.absolute_url(LOGO_PATH),
        "image": config.absolute_url(&meta.image),
        "telephone": config.contact.phone,
        "email": config.contact.email,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": config.geo.placename,
            "addressRegion": "QC",
            "addressCountry": "CA"
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": config.geo.latitude,
            "longitude": config.geo.longitude
        },
        "openingHours": ["Mo-Fr 09:00-17:00"],
        "serviceType": [
            "Gestion de trésorerie",
            "Cash Management",
            "Consultation financière",
            "Optimisation des processus financiers"
        ],
        "areaServed": {
            "@type": "Country",
            "name": "Canada"
        }
    })
}

/// The head as it should look for `meta`, one entry per key.
pub fn desired_tags(meta: &PageMetadata, config: &SiteConfig) -> Vec<HeadTag> {
    let title = full_title(&meta.title, config);
    let url = config.absolute_url(&meta.url);
    let image = config.absolute_url(&meta.image);

    let mut tags = vec![
        HeadTag::new(HeadKey::Title, title.clone()),
        HeadTag::new(HeadKey::MetaName("title"), title.clone()),
        HeadTag::new(HeadKey::MetaName("description"), meta.description.clone()),
        HeadTag::new(HeadKey::MetaName("keywords"), meta.keywords.clone()),
        HeadTag::new(HeadKey::MetaName("author"), meta.author.clone()),
        HeadTag::new(HeadKey::MetaName("robots"), "index, follow"),
        HeadTag::new(HeadKey::MetaName("language"), LANGUAGE),
        HeadTag::new(HeadKey::MetaName("revisit-after"), "7 days"),
        HeadTag::new(HeadKey::Canonical, url.clone()),
        // Open Graph
        HeadTag::new(HeadKey::MetaProperty("og:type"), meta.content_type.as_str()),
        HeadTag::new(HeadKey::MetaProperty("og:title"), title.clone()),
        HeadTag::new(HeadKey::MetaProperty("og:description"), meta.description.clone()),
        HeadTag::new(HeadKey::MetaProperty("og:image"), image.clone()),
        HeadTag::new(HeadKey::MetaProperty("og:url"), url),
        HeadTag::new(HeadKey::MetaProperty("og:site_name"), config.brand_name.clone()),
        HeadTag::new(HeadKey::MetaProperty("og:locale"), LOCALE),
        // Twitter
        HeadTag::new(HeadKey::MetaName("twitter:card"), "summary_large_image"),
        HeadTag::new(HeadKey::MetaName("twitter:title"), title.clone()),
        HeadTag::new(HeadKey::MetaName("twitter:description"), meta.description.clone()),
        HeadTag::new(HeadKey::MetaName("twitter:image"), image.clone()),
        HeadTag::new(HeadKey::MetaName("twitter:creator"), config.social.twitter.clone()),
        // LinkedIn
        HeadTag::new(HeadKey::MetaProperty("linkedin:title"), title),
        HeadTag::new(HeadKey::MetaProperty("linkedin:description"), meta.description.clone()),
        HeadTag::new(HeadKey::MetaProperty("linkedin:image"), image),
    ];

    if meta.content_type == ContentType::Article {
        if let Some(published) = &meta.published_time {
            tags.push(HeadTag::new(HeadKey::MetaProperty("article:published_time"), published.clone()));
        }
        if let Some(modified) = &meta.modified_time {
            tags.push(HeadTag::new(HeadKey::MetaProperty("article:modified_time"), modified.clone()));
        }
        tags.push(HeadTag::new(HeadKey::MetaProperty("article:author"), meta.author.clone()));
        tags.push(HeadTag::new(HeadKey::MetaProperty("article:section"), ARTICLE_SECTION));
        for tag in ARTICLE_TAGS {
            tags.push(HeadTag::new(HeadKey::ArticleTag(tag), tag));
        }
    }

    tags.extend([
        HeadTag::new(HeadKey::MetaName("geo.region"), config.geo.region.clone()),
        HeadTag::new(HeadKey::MetaName("geo.placename"), config.geo.placename.clone()),
        HeadTag::new(HeadKey::MetaName("geo.position"), config.geo_position()),
        HeadTag::new(HeadKey::MetaName("ICBM"), config.icbm()),
        HeadTag::new(HeadKey::MetaName("viewport"), "width=device-width, initial-scale=1.0"),
        HeadTag::new(HeadKey::MetaName("format-detection"), "telephone=yes"),
        HeadTag::new(HeadKey::Preconnect { href: FONTS_API, crossorigin: false }, FONTS_API),
        HeadTag::new(HeadKey::Preconnect { href: FONTS_STATIC, crossorigin: true }, FONTS_STATIC),
        HeadTag::new(HeadKey::JsonLd, structured_data(meta, config).to_string()),
    ]);

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tag<'a>(tags: &'a [HeadTag], key: HeadKey) -> Option<&'a str> {
        tags.iter().find(|t| t.key == key).map(|t| t.value.as_str())
    }

    #[test]
    fn test_full_title_suffix() {
        let config = SiteConfig::default();
        assert_eq!(full_title("Nos Services", &config), "Nos Services | Cabinet CM360");
        assert_eq!(
            full_title("Contact – Cabinet CM360 | Consultation", &config),
            "Contact – Cabinet CM360 | Consultation"
        );
    }

    #[test]
    fn test_desired_keys_are_unique_and_owned() {
        let config = SiteConfig::default();
        let meta = PageMetadata {
            content_type: ContentType::Article,
            published_time: Some("2025-01-01T00:00:00Z".to_string()),
            modified_time: Some("2025-02-01T00:00:00Z".to_string()),
            ..PageMetadata::default()
        };
        let tags = desired_tags(&meta, &config);
        let keys: HashSet<HeadKey> = tags.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), tags.len());
        let owned: HashSet<HeadKey> = OWNED_KEYS.iter().copied().collect();
        assert!(keys.is_subset(&owned));
        // With every optional article field set, the desired set is the owned set
        assert_eq!(keys, owned);
    }

    #[test]
    fn test_canonical_and_images_are_qualified() {
        let config = SiteConfig::default();
        let meta = PageMetadata {
            url: "/services".to_string(),
            ..PageMetadata::default()
        };
        let tags = desired_tags(&meta, &config);
        assert_eq!(tag(&tags, HeadKey::Canonical), Some("https://cabinetcm360.com/services"));
        assert_eq!(
            tag(&tags, HeadKey::MetaProperty("og:image")),
            Some("https://cabinetcm360.com/og-image.jpg")
        );
    }

    #[test]
    fn test_article_tags_only_for_articles() {
        let config = SiteConfig::default();
        let website = desired_tags(&PageMetadata::default(), &config);
        assert!(tag(&website, HeadKey::MetaProperty("article:author")).is_none());

        let article = PageMetadata {
            content_type: ContentType::Article,
            published_time: Some("2025-03-01".to_string()),
            ..PageMetadata::default()
        };
        let tags = desired_tags(&article, &config);
        assert_eq!(tag(&tags, HeadKey::MetaProperty("article:published_time")), Some("2025-03-01"));
        assert!(tag(&tags, HeadKey::MetaProperty("article:modified_time")).is_none());
        assert_eq!(tag(&tags, HeadKey::MetaProperty("article:section")), Some("Finance"));
        assert_eq!(tag(&tags, HeadKey::MetaProperty("og:type")), Some("article"));
    }

    #[test]
    fn test_structured_data() {
        let config = SiteConfig::default();
        let data = structured_data(&PageMetadata::default(), &config);
        assert_eq!(data["@type"], "ProfessionalService");
        assert_eq!(data["url"], "https://cabinetcm360.com/");
        assert_eq!(data["logo"], "https://cabinetcm360.com/logo.png");
        assert_eq!(data["telephone"], "438-521-3151");
        assert_eq!(data["geo"]["latitude"], "45.5017");
    }

    #[test]
    fn test_selectors() {
        assert_eq!(HeadKey::MetaName("description").selector(), "meta[name=\"description\"]");
        assert_eq!(HeadKey::MetaProperty("og:url").selector(), "meta[property=\"og:url\"]");
        assert_eq!(HeadKey::Canonical.value_slot(), ValueSlot::Attr("href"));
        assert_eq!(HeadKey::JsonLd.value_slot(), ValueSlot::Text);
    }
}
