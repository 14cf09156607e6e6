//! Length and keyword checks for page titles and meta descriptions.

use std::ops::RangeInclusive;

pub const TITLE_OPTIMAL: RangeInclusive<usize> = 30..=60;
pub const DESCRIPTION_OPTIMAL: RangeInclusive<usize> = 120..=160;

const TITLE_KEYWORDS: [&str; 2] = ["cabinet", "trésorerie"];
const DESCRIPTION_KEYWORDS: [&str; 2] = ["trésorerie", "cash management"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAudit {
    pub length: usize,
    pub is_optimal: bool,
    pub contains_keyword: bool,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoAudit {
    pub title: FieldAudit,
    pub description: FieldAudit,
}

impl SeoAudit {
    pub fn suggestions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.title.suggestions.iter().chain(&self.description.suggestions).copied()
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

pub fn audit(title: &str, description: &str) -> SeoAudit {
    let title_len = title.chars().count();
    let mut title_audit = FieldAudit {
        length: title_len,
        is_optimal: TITLE_OPTIMAL.contains(&title_len),
        contains_keyword: contains_any(title, &TITLE_KEYWORDS),
        suggestions: Vec::new(),
    };

    let description_len = description.chars().count();
    let mut description_audit = FieldAudit {
        length: description_len,
        is_optimal: DESCRIPTION_OPTIMAL.contains(&description_len),
        contains_keyword: contains_any(description, &DESCRIPTION_KEYWORDS),
        suggestions: Vec::new(),
    };

    if title_len < *TITLE_OPTIMAL.start() {
        title_audit.suggestions.push("Titre trop court - ajouter plus de mots-clés descriptifs");
    }
    if title_len > *TITLE_OPTIMAL.end() {
        title_audit.suggestions.push("Titre trop long - risque de troncature dans les résultats de recherche");
    }
    if description_len < *DESCRIPTION_OPTIMAL.start() {
        description_audit.suggestions.push("Description trop courte - ajouter plus de détails sur les services");
    }
    if description_len > *DESCRIPTION_OPTIMAL.end() {
        description_audit.suggestions.push("Description trop longue - risque de troncature dans les résultats");
    }
    if !title_audit.contains_keyword {
        title_audit.suggestions.push("Inclure des mots-clés principaux dans le titre");
    }
    if !description_audit.contains_keyword {
        description_audit.suggestions.push("Inclure des mots-clés principaux dans la description");
    }

    SeoAudit {
        title: title_audit,
        description: description_audit,
    }
}
