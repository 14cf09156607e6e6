//! Diff between the desired head and what is currently in the document.

use std::collections::{BTreeMap, HashSet};

use crate::seo::tags::{HeadKey, HeadTag, OWNED_KEYS};

/// Values of the nodes currently addressing each owned key, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadSnapshot {
    nodes: BTreeMap<HeadKey, Vec<String>>,
}

impl HeadSnapshot {
    pub fn record(&mut self, key: HeadKey, value: String) {
        self.nodes.entry(key).or_default().push(value);
    }

    pub fn values(&self, key: HeadKey) -> &[String] {
        self.nodes.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, key: HeadKey) -> usize {
        self.values(key).len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadOp {
    /// Create the node and append it to the head.
    Insert(HeadTag),
    /// Overwrite the value of the first node for the key.
    Update(HeadTag),
    /// Drop every node for the key but the first.
    Dedupe(HeadKey),
    /// Drop every node for the key.
    Remove(HeadKey),
}

/// Minimal list of operations turning `current` into `desired`.
///
/// Applying the result and reconciling again yields no operations.
pub fn reconcile(desired: &[HeadTag], current: &HeadSnapshot) -> Vec<HeadOp> {
    let mut ops = Vec::new();

    for tag in desired {
        let existing = current.values(tag.key);
        match existing {
            [] => ops.push(HeadOp::Insert(tag.clone())),
            [first, rest @ ..] => {
                if !rest.is_empty() {
                    ops.push(HeadOp::Dedupe(tag.key));
                }
                if *first != tag.value {
                    ops.push(HeadOp::Update(tag.clone()));
                }
            }
        }
    }

    let wanted: HashSet<HeadKey> = desired.iter().map(|t| t.key).collect();
    for key in OWNED_KEYS {
        if !wanted.contains(key) && current.count(*key) > 0 {
            ops.push(HeadOp::Remove(*key));
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::seo::tags::{desired_tags, ContentType, PageMetadata};

    /// In-memory model of what `dom::apply` does to the head.
    fn apply(snapshot: &mut HeadSnapshot, ops: &[HeadOp]) {
        for op in ops {
            match op {
                HeadOp::Insert(tag) => snapshot.record(tag.key, tag.value.clone()),
                HeadOp::Update(tag) => {
                    if let Some(first) = snapshot.nodes.get_mut(&tag.key).and_then(|v| v.first_mut()) {
                        *first = tag.value.clone();
                    }
                }
                HeadOp::Dedupe(key) => {
                    if let Some(values) = snapshot.nodes.get_mut(key) {
                        values.truncate(1);
                    }
                }
                HeadOp::Remove(key) => {
                    snapshot.nodes.remove(key);
                }
            }
        }
    }

    fn sync(snapshot: &mut HeadSnapshot, meta: &PageMetadata) {
        let desired = desired_tags(meta, &SiteConfig::default());
        let ops = reconcile(&desired, snapshot);
        apply(snapshot, &ops);
    }

    fn assert_single_nodes(snapshot: &HeadSnapshot) {
        for key in OWNED_KEYS {
            assert!(snapshot.count(*key) <= 1, "{:?} en double", key);
        }
    }

    fn services_page() -> PageMetadata {
        PageMetadata {
            title: "Nos Services".to_string(),
            url: "/services".to_string(),
            ..PageMetadata::default()
        }
    }

    fn article() -> PageMetadata {
        PageMetadata {
            content_type: ContentType::Article,
            published_time: Some("2025-05-01".to_string()),
            modified_time: Some("2025-06-01".to_string()),
            ..PageMetadata::default()
        }
    }

    #[test]
    fn test_empty_head_gets_one_insert_per_tag() {
        let desired = desired_tags(&PageMetadata::default(), &SiteConfig::default());
        let ops = reconcile(&desired, &HeadSnapshot::default());
        assert_eq!(ops.len(), desired.len());
        assert!(ops.iter().all(|op| matches!(op, HeadOp::Insert(_))));
    }

    #[test]
    fn test_resync_same_metadata_is_a_no_op() {
        let mut snapshot = HeadSnapshot::default();
        sync(&mut snapshot, &PageMetadata::default());
        let desired = desired_tags(&PageMetadata::default(), &SiteConfig::default());
        assert!(reconcile(&desired, &snapshot).is_empty());
    }

    #[test]
    fn test_repeated_syncs_never_duplicate() {
        let mut snapshot = HeadSnapshot::default();
        let pages = [PageMetadata::default(), services_page(), article(), services_page(), article()];
        for page in pages.iter().cycle().take(20) {
            sync(&mut snapshot, page);
            assert_single_nodes(&snapshot);
        }
    }

    #[test]
    fn test_changed_metadata_updates_in_place() {
        let mut snapshot = HeadSnapshot::default();
        sync(&mut snapshot, &PageMetadata::default());

        let desired = desired_tags(&services_page(), &SiteConfig::default());
        let ops = reconcile(&desired, &snapshot);
        assert!(ops.iter().all(|op| matches!(op, HeadOp::Update(_))));
        assert!(ops.contains(&HeadOp::Update(HeadTag {
            key: HeadKey::Canonical,
            value: "https://cabinetcm360.com/services".to_string(),
        })));

        apply(&mut snapshot, &ops);
        assert_eq!(snapshot.values(HeadKey::Title), ["Nos Services | Cabinet CM360".to_string()]);
    }

    #[test]
    fn test_leaving_an_article_removes_article_tags() {
        let mut snapshot = HeadSnapshot::default();
        sync(&mut snapshot, &article());
        assert_eq!(snapshot.count(HeadKey::MetaProperty("article:section")), 1);

        sync(&mut snapshot, &PageMetadata::default());
        assert_eq!(snapshot.count(HeadKey::MetaProperty("article:section")), 0);
        assert_eq!(snapshot.count(HeadKey::MetaProperty("article:published_time")), 0);
        assert_eq!(snapshot.count(HeadKey::ArticleTag("Cash Management")), 0);
    }

    #[test]
    fn test_foreign_duplicates_are_collapsed() {
        // e.g. a static index.html that already ships a description
        let mut snapshot = HeadSnapshot::default();
        snapshot.record(HeadKey::MetaName("description"), "ancienne".to_string());
        snapshot.record(HeadKey::MetaName("description"), "autre".to_string());

        let desired = desired_tags(&PageMetadata::default(), &SiteConfig::default());
        let ops = reconcile(&desired, &snapshot);
        assert!(ops.contains(&HeadOp::Dedupe(HeadKey::MetaName("description"))));

        apply(&mut snapshot, &ops);
        assert_single_nodes(&snapshot);
        assert!(reconcile(&desired, &snapshot).is_empty());
    }
}
