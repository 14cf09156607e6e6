use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::seo::reconcile::{reconcile, HeadOp, HeadSnapshot};
use crate::seo::tags::{desired_tags, HeadKey, HeadTag, PageMetadata, ValueSlot, OWNED_KEYS};

fn document() -> Result<Document, SiteError> {
    web_sys::window()
        .ok_or(SiteError::NoWindow)?
        .document()
        .ok_or(SiteError::NoDocument)
}

fn nodes_for(document: &Document, key: HeadKey) -> Result<Vec<Element>, SiteError> {
    let list = document.query_selector_all(&key.selector())?;
    let mut nodes = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            nodes.push(element);
        }
    }
    Ok(nodes)
}

fn read_value(element: &Element, slot: ValueSlot) -> String {
    match slot {
        ValueSlot::Text => element.text_content().unwrap_or_default(),
        ValueSlot::Attr(name) => element.get_attribute(name).unwrap_or_default(),
    }
}

fn write_value(element: &Element, slot: ValueSlot, value: &str) -> Result<(), SiteError> {
    match slot {
        ValueSlot::Text => element.set_text_content(Some(value)),
        ValueSlot::Attr(name) => element.set_attribute(name, value)?,
    }
    Ok(())
}

/// Read every owned key from the live document.
pub fn snapshot(document: &Document) -> Result<HeadSnapshot, SiteError> {
    let mut snapshot = HeadSnapshot::default();
    for key in OWNED_KEYS {
        for element in nodes_for(document, *key)? {
            snapshot.record(*key, read_value(&element, key.value_slot()));
        }
    }
    Ok(snapshot)
}

fn insert(document: &Document, tag: &HeadTag) -> Result<(), SiteError> {
    let head = document.head().ok_or(SiteError::NoHead)?;
    let element = document.create_element(tag.key.tag_name())?;
    for (name, value) in tag.key.identity_attrs() {
        element.set_attribute(name, value)?;
    }
    write_value(&element, tag.key.value_slot(), &tag.value)?;
    head.append_child(&element)?;
    Ok(())
}

pub fn apply(document: &Document, ops: &[HeadOp]) -> Result<(), SiteError> {
    for op in ops {
        match op {
            HeadOp::Insert(tag) => insert(document, tag)?,
            HeadOp::Update(tag) => {
                if let Some(first) = nodes_for(document, tag.key)?.first() {
                    write_value(first, tag.key.value_slot(), &tag.value)?;
                }
            }
            HeadOp::Dedupe(key) => {
                for extra in nodes_for(document, *key)?.iter().skip(1) {
                    extra.remove();
                }
            }
            HeadOp::Remove(key) => {
                for node in nodes_for(document, *key)? {
                    node.remove();
                }
            }
        }
    }
    Ok(())
}

/// Bring the document head in line with `meta`. Returns the number of
/// operations applied.
pub fn synchronize(meta: &PageMetadata, config: &SiteConfig) -> Result<usize, SiteError> {
    let document = document()?;
    let desired = desired_tags(meta, config);
    let ops = reconcile(&desired, &snapshot(&document)?);
    apply(&document, &ops)?;
    debug!(url = %meta.url, ops = ops.len(), "en-tête synchronisé");
    Ok(ops.len())
}
