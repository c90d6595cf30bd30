//! Reference (target) metadata lookup

use rustc_hash::FxHashMap;

/// Title and length of a target by id, both O(1)
pub trait ReferenceStore {
    fn title(&self, target_id: usize) -> &str;
    fn length(&self, target_id: usize) -> usize;
}

/// In-memory reference metadata
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    titles: Vec<String>,
    lengths: Vec<usize>,
    ids: FxHashMap<String, usize>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a target and return its id.
    pub fn push<S: Into<String>>(&mut self, title: S, length: usize) -> usize {
        let title = title.into();
        let id = self.titles.len();
        self.ids.entry(title.clone()).or_insert(id);
        self.titles.push(title);
        self.lengths.push(length);
        id
    }

    /// Id of `title`, adding it with `length` if it is new.
    pub fn get_or_insert(&mut self, title: &str, length: usize) -> usize {
        match self.ids.get(title) {
            Some(&id) => id,
            None => self.push(title, length),
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

impl ReferenceStore for ReferenceTable {
    fn title(&self, target_id: usize) -> &str {
        &self.titles[target_id]
    }

    fn length(&self, target_id: usize) -> usize {
        self.lengths[target_id]
    }
}
