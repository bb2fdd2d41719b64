//! Запись мета-тегов страницы в `<head>`

use contracts::shared::seo::PageMeta;
use leptos::prelude::*;
use web_sys::{window, Document, HtmlHeadElement};

fn upsert_meta(document: &Document, head: &HtmlHeadElement, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}=\"{}\"]", attr, key);
    let element = match document.query_selector(&selector) {
        Ok(Some(element)) => element,
        _ => {
            let Ok(element) = document.create_element("meta") else {
                return;
            };
            let _ = element.set_attribute(attr, key);
            let _ = head.append_child(&element);
            element
        }
    };
    let _ = element.set_attribute("content", content);
}

fn upsert_canonical(document: &Document, head: &HtmlHeadElement, href: &str) {
    let element = match document.query_selector("link[rel=\"canonical\"]") {
        Ok(Some(element)) => element,
        _ => {
            let Ok(element) = document.create_element("link") else {
                return;
            };
            let _ = element.set_attribute("rel", "canonical");
            let _ = head.append_child(&element);
            element
        }
    };
    let _ = element.set_attribute("href", href);
}

pub fn apply_page_meta(meta: &PageMeta) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };

    document.set_title(&meta.title);

    upsert_meta(&document, &head, "name", "description", &meta.description);
    upsert_meta(&document, &head, "name", "keywords", &meta.keywords);

    upsert_meta(&document, &head, "property", "og:title", &meta.title);
    upsert_meta(&document, &head, "property", "og:description", &meta.description);
    upsert_meta(&document, &head, "property", "og:image", &meta.og_image);
    upsert_meta(&document, &head, "property", "og:url", &meta.og_url);

    upsert_meta(&document, &head, "property", "twitter:title", &meta.title);
    upsert_meta(&document, &head, "property", "twitter:description", &meta.description);
    upsert_meta(&document, &head, "property", "twitter:image", &meta.og_image);

    upsert_canonical(&document, &head, &meta.canonical);
}

/// Обновляет мета-теги при каждом изменении входных сигналов
pub fn use_page_meta<F>(build: F)
where
    F: Fn() -> PageMeta + Send + Sync + 'static,
{
    Effect::new(move |_| {
        apply_page_meta(&build());
    });
}
