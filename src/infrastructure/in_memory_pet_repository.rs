use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    domain::pet::{NewPet, Pet, PetFilter, PetPatch},
    infrastructure::PetRepository,
};

const FIRST_PET_ID: u64 = 1;

/// Map and id counter move together, so both sit behind the same lock.
#[derive(Debug)]
struct PetTable {
    pets_by_id: BTreeMap<u64, Pet>,
    next_id: u64,
}

impl Default for PetTable {
    fn default() -> Self {
        Self {
            pets_by_id: BTreeMap::new(),
            next_id: FIRST_PET_ID,
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    table: RwLock<PetTable>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.pets_by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.pets_by_id.is_empty()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn list(&self, filter: PetFilter) -> Vec<Pet> {
        // BTreeMap iteration is already ascending by id.
        self.table
            .read()
            .await
            .pets_by_id
            .values()
            .filter(|pet| filter.matches(pet))
            .cloned()
            .collect()
    }

    async fn get(&self, id: u64) -> Option<Pet> {
        self.table.read().await.pets_by_id.get(&id).cloned()
    }

    async fn create(&self, pet: NewPet) -> Pet {
        let mut table = self.table.write().await;

        let id = table.next_id;
        table.next_id += 1;

        let created = Pet::from_new(id, pet, Utc::now());
        table.pets_by_id.insert(id, created.clone());
        created
    }

    async fn update(&self, id: u64, patch: PetPatch) -> Option<Pet> {
        let mut table = self.table.write().await;
        let existing = table.pets_by_id.get(&id)?;

        let updated = existing.merged(patch);
        table.pets_by_id.insert(id, updated.clone());
        Some(updated)
    }

    async fn delete(&self, id: u64) -> bool {
        self.table.write().await.pets_by_id.remove(&id).is_some()
    }
}
