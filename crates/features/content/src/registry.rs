use agency_domain::registry::{Keyed, RegistryKind};
use fxhash::FxHashMap;
use std::slice::Iter;
use tracing::debug;

/// An id-indexed view over a static table.
///
/// Entries keep declaration order. If an id appears twice the first entry
/// wins the lookup; [`crate::validate`] reports the duplicate.
#[derive(Debug)]
pub struct Registry<T: Keyed> {
    kind: RegistryKind,
    entries: &'static [T],
    index: FxHashMap<&'static str, usize>,
}

impl<T: Keyed> Registry<T> {
    pub fn new(kind: RegistryKind, entries: &'static [T]) -> Self {
        let mut index = FxHashMap::default();
        for (position, entry) in entries.iter().enumerate() {
            index.entry(entry.key()).or_insert(position);
        }
        Self { kind, entries, index }
    }

    /// Returns the entry with `id`, or `None` when the id is not a key.
    pub fn get(&self, id: &str) -> Option<&'static T> {
        let entries = self.entries;
        let found = self.index.get(id).and_then(|&position| entries.get(position));
        if found.is_none() {
            debug!(registry = %self.kind, id, "Content lookup miss");
        }
        found
    }

    /// All ids in declaration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(Keyed::key).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> Iter<'static, T> {
        self.entries.iter()
    }

    pub const fn entries(&self) -> &'static [T] {
        self.entries
    }

    pub const fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agency_domain::content::{Faq, FaqGroup};

    const FAQS: &[Faq] = &[Faq { question: "Q?", answer: "A." }];

    static REPEATED: &[FaqGroup] = &[
        FaqGroup { id: "billing", title: Some("First"), description: None, faqs: FAQS },
        FaqGroup { id: "hosting", title: None, description: None, faqs: FAQS },
        FaqGroup { id: "billing", title: Some("Second"), description: None, faqs: FAQS },
    ];

    #[test]
    fn first_entry_wins_for_a_repeated_id() {
        let registry = Registry::new(RegistryKind::Faqs, REPEATED);

        let found = registry.get("billing").expect("repeated id resolves");
        assert_eq!(found.title, Some("First"));
        assert!(std::ptr::eq(found, &REPEATED[0]));
    }

    #[test]
    fn ids_still_list_every_entry_in_order() {
        let registry = Registry::new(RegistryKind::Faqs, REPEATED);

        assert_eq!(registry.ids(), ["billing", "hosting", "billing"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("hosting"));
        assert!(registry.get("Billing").is_none());
    }
}
