//! Page metadata collaborator.
//!
//! Each navigation transition hands this module view-appropriate copy;
//! applying it rewrites the document title and the description/keywords
//! meta tags. Failures are non-fatal — a missing tag is simply skipped.

/// Metadata for one page state.
#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

pub fn categories_meta(total_careers: usize) -> PageMeta {
    PageMeta {
        title: format!(
            "Career Explorer - Discover {total_careers}+ Career Paths with Education Routes & Salary Info"
        ),
        description: format!(
            "Explore {total_careers}+ careers across Technology, Healthcare, Finance, Engineering, \
             Education, Arts, Science and Creative fields. Find education pathways, salary ranges, \
             and career requirements."
        ),
        keywords: "career explorer, career guidance, job search, education pathways, \
                   salary information"
            .to_string(),
    }
}

pub fn careers_meta(category: &str, count: usize) -> PageMeta {
    let lowered = category.to_lowercase();
    PageMeta {
        title: format!("{category} Careers - {count} Jobs | Career Explorer"),
        description: format!(
            "Discover {count} {lowered} careers with detailed salary information, education \
             pathways, and skill requirements."
        ),
        keywords: format!("{lowered} careers, {lowered} jobs, {lowered} salary, career guidance"),
    }
}

pub fn details_meta(name: &str, category: &str, brief: Option<&str>) -> PageMeta {
    let description = match brief {
        Some(text) => text.to_string(),
        None => format!(
            "Explore career details for {name} including education pathways, salary \
             information, skills required, and job outlook."
        ),
    };
    let lowered = name.to_lowercase();
    PageMeta {
        title: format!("{name} Career Guide - Salary, Education & Skills | Career Explorer"),
        description,
        keywords: format!(
            "{lowered}, {lowered} career, {lowered} salary, {} careers",
            category.to_lowercase()
        ),
    }
}

/// Push the metadata into the document. No-op outside the browser.
#[cfg(target_arch = "wasm32")]
pub fn apply(meta: &PageMeta) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    document.set_title(&meta.title);
    set_meta_content(&document, "meta[name=\"description\"]", &meta.description);
    set_meta_content(&document, "meta[name=\"keywords\"]", &meta.keywords);
    set_meta_content(&document, "meta[property=\"og:title\"]", &meta.title);
    set_meta_content(
        &document,
        "meta[property=\"og:description\"]",
        &meta.description,
    );
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply(_meta: &PageMeta) {}

#[cfg(target_arch = "wasm32")]
fn set_meta_content(document: &web_sys::Document, selector: &str, content: &str) {
    if let Ok(Some(element)) = document.query_selector(selector) {
        let _ = element.set_attribute("content", content);
    }
}
