use std::{collections::BTreeMap, sync::Arc};

use parking_lot::RwLock;
use serde::Serialize;

use crate::entities::{
    account::{Account, AccountId},
    project::{Project, ProjectId},
    technology::{Technology, TechnologyId},
};

/// Process-wide in-memory store. Cloning yields another handle to the same
/// tables.
///
/// Maps are keyed by monotonically assigned ids, so id order is insertion
/// order.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub(crate) tables: Arc<RwLock<Tables>>,
}

pub(crate) struct Tables {
    pub accounts: BTreeMap<AccountId, Account>,
    pub projects: BTreeMap<ProjectId, Project>,
    pub technologies: BTreeMap<TechnologyId, Technology>,
    next_account_id: AccountId,
    next_project_id: ProjectId,
    next_technology_id: TechnologyId,
}

impl Default for Tables {
    fn default() -> Self {
        Tables {
            accounts: BTreeMap::new(),
            projects: BTreeMap::new(),
            technologies: BTreeMap::new(),
            next_account_id: 1,
            next_project_id: 1,
            next_technology_id: 1,
        }
    }
}

impl Tables {
    pub fn allocate_account_id(&mut self) -> AccountId {
        let id = self.next_account_id;
        self.next_account_id += 1;
        id
    }

    pub fn allocate_project_id(&mut self) -> ProjectId {
        let id = self.next_project_id;
        self.next_project_id += 1;
        id
    }

    pub fn allocate_technology_id(&mut self) -> TechnologyId {
        let id = self.next_technology_id;
        self.next_technology_id += 1;
        id
    }

    pub fn technologies_for(&self, project_id: ProjectId) -> Vec<Technology> {
        self.technologies
            .values()
            .filter(|tech| tech.project_id == project_id)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordCounts {
    pub projects: usize,
    pub technologies: usize,
    pub accounts: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}
