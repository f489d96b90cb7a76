//! # Inventory Repository
//!
//! Company assets created from the "add asset" form.

use inlin_core::{InventoryItem, NewAsset};

use super::InventoryRepository;
use crate::error::StoreResult;

impl InventoryRepository {
    /// Appends a new asset, `Available` and unassigned.
    pub fn create(&mut self, form: NewAsset) -> StoreResult<InventoryItem> {
        self.insert_with(|id| form.into_item(id))
    }
}
