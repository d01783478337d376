//! In-memory bug store: insertion-ordered records and a monotonic id counter.
//! Constructed explicitly and owned by `AppState`; there is no process-global instance.

use crate::model::{timestamp, Bug, BugPatch, NewBug, Status, DEFAULT_PRIORITY};

/// First id handed out by a fresh (or cleared) store.
pub const FIRST_ID: u64 = 1;

#[derive(Debug)]
pub struct BugStore {
    bugs: Vec<Bug>,
    next_id: u64,
}

impl Default for BugStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BugStore {
    pub fn new() -> Self {
        Self {
            bugs: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    pub fn len(&self) -> usize {
        self.bugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }

    /// Snapshot of every record in insertion order.
    pub fn get_all(&self) -> Vec<Bug> {
        self.bugs.clone()
    }

    /// Snapshot filtered by exact status and/or priority. `None` matches anything.
    pub fn list_filtered(&self, status: Option<Status>, priority: Option<&str>) -> Vec<Bug> {
        self.bugs
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .filter(|b| priority.map_or(true, |p| b.priority == p))
            .cloned()
            .collect()
    }

    pub fn get_by_id(&self, id: u64) -> Option<Bug> {
        self.bugs.iter().find(|b| b.id == id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.bugs.iter().any(|b| b.id == id)
    }

    /// Append a record with the next id. Status and priority fall back to their defaults.
    pub fn create(&mut self, data: NewBug) -> Bug {
        let now = timestamp::now();
        let bug = Bug {
            id: self.next_id,
            title: data.title,
            description: data.description,
            status: data.status.unwrap_or_default(),
            priority: data.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.bugs.push(bug.clone());
        tracing::debug!(id = bug.id, "bug created");
        bug
    }

    /// Merge `patch` onto the record. `id` and `created_at` never change; `updated_at`
    /// never moves backwards. Returns `None` and leaves the store untouched if `id` is unknown.
    pub fn update(&mut self, id: u64, patch: BugPatch) -> Option<Bug> {
        let bug = self.bugs.iter_mut().find(|b| b.id == id)?;
        patch.apply_to(bug);
        bug.updated_at = timestamp::now().max(bug.updated_at);
        tracing::debug!(id, "bug updated");
        Some(bug.clone())
    }

    /// Run `check` against the merged record before committing it. Nothing is written when
    /// `check` fails.
    pub fn try_update<E>(
        &mut self,
        id: u64,
        patch: BugPatch,
        check: impl FnOnce(&Bug) -> Result<(), E>,
    ) -> Option<Result<Bug, E>> {
        let index = self.bugs.iter().position(|b| b.id == id)?;
        let mut merged = self.bugs[index].clone();
        patch.apply_to(&mut merged);
        if let Err(e) = check(&merged) {
            return Some(Err(e));
        }
        merged.updated_at = timestamp::now().max(merged.updated_at);
        self.bugs[index] = merged.clone();
        tracing::debug!(id, "bug updated");
        Some(Ok(merged))
    }

    /// Remove the record. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.bugs.iter().position(|b| b.id == id) {
            Some(index) => {
                self.bugs.remove(index);
                tracing::debug!(id, "bug deleted");
                true
            }
            None => false,
        }
    }

    /// Drop every record and restart ids at `FIRST_ID`. Test/reset use only.
    pub fn clear(&mut self) {
        self.bugs.clear();
        self.next_id = FIRST_ID;
    }
}
