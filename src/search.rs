use crate::render::SectionId;

#[derive(Debug, Clone)]
pub struct SearchableItem {
    pub section: SectionId,
    pub text: String,
}

impl SearchableItem {
    pub fn new(section: SectionId, text: String) -> Self {
        Self { section, text }
    }

    // `term` must already be lowercased; the controller normalizes it once
    // per event rather than per item.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.text.to_lowercase().contains(term)
    }
}
