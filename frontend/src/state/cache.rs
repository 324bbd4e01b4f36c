use crate::api::{Endpoint, Tag};
use leptos::*;

/// Tag-invalidation cache shared by every page.
///
/// List resources read `generation(tag)` as their source signal, so bumping a
/// tag's generation makes every mounted list for that resource refetch.
#[derive(Clone, Copy)]
pub struct QueryCache {
    employees: RwSignal<u32>,
    attendance: RwSignal<u32>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            employees: create_rw_signal(0),
            attendance: create_rw_signal(0),
        }
    }

    fn slot(&self, tag: Tag) -> RwSignal<u32> {
        match tag {
            Tag::Employees => self.employees,
            Tag::Attendance => self.attendance,
        }
    }

    /// Tracked read; call from a resource source closure.
    pub fn generation(&self, tag: Tag) -> u32 {
        self.slot(tag).get()
    }

    pub fn generation_untracked(&self, tag: Tag) -> u32 {
        self.slot(tag).get_untracked()
    }

    pub fn invalidate(&self, tag: Tag) {
        self.slot(tag).update(|generation| *generation = generation.wrapping_add(1));
        log::debug!(
            "cache tag {} invalidated (generation {})",
            tag.as_str(),
            self.generation_untracked(tag)
        );
    }

    /// Marks stale whatever the given mutation invalidates. Queries are no-ops.
    pub fn settle(&self, endpoint: &Endpoint) {
        if let Some(tag) = endpoint.invalidates() {
            self.invalidate(tag);
        }
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_query_cache() -> QueryCache {
    match use_context::<QueryCache>() {
        Some(cache) => cache,
        None => {
            let cache = QueryCache::new();
            provide_context(cache);
            cache
        }
    }
}
