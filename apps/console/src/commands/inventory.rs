//! # Inventory Commands
//!
//! Asset create, delete, and edit-lookup. All need the Inventory page.

use inlin_core::{Collection, InventoryItem, NewAsset, RecordId};
use tracing::debug;

use super::authorized;
use crate::error::ApiError;
use crate::state::StoreState;

/// Adds an asset from the "add asset" form.
///
/// New assets are `Available` and unassigned. The value text is parsed
/// (`"$1,200"`, `"999"`, `"12.50"`); anything else is a validation error.
pub fn create_asset(state: &StoreState, form: NewAsset) -> Result<InventoryItem, ApiError> {
    debug!(name = %form.name, value = %form.value, "create_asset command");

    authorized(state, Collection::Inventory, |store, _| {
        Ok(store.inventory_mut().create(form)?)
    })
}

pub fn delete_asset(state: &StoreState, id: RecordId) -> Result<Option<InventoryItem>, ApiError> {
    debug!(id, "delete_asset command");

    authorized(state, Collection::Inventory, |store, _| {
        Ok(store.inventory_mut().delete(id))
    })
}

pub fn get_asset(state: &StoreState, id: RecordId) -> Result<InventoryItem, ApiError> {
    debug!(id, "get_asset command");

    authorized(state, Collection::Inventory, |store, _| {
        Ok(store.inventory().require(id)?.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use inlin_core::{AssetStatus, Money, UNASSIGNED};
    use inlin_store::Store;

    fn signed_in_as(email: &str) -> StoreState {
        let state = StoreState::new(Store::seeded());
        state.with_store_mut(|s| s.authenticate(email));
        state
    }

    fn form(value: &str) -> NewAsset {
        NewAsset {
            name: "Standing Desk".to_string(),
            category: "Furniture".to_string(),
            purchase_date: "2025-04-01".to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_create_asset_defaults() {
        let state = signed_in_as("mike@inlintech.net");

        let item = create_asset(&state, form("$1,450")).unwrap();

        assert_eq!(item.id, 5);
        assert_eq!(item.status, AssetStatus::Available);
        assert_eq!(item.assigned_to, UNASSIGNED);
        assert_eq!(item.value, Money::from_whole(1450));
    }

    #[test]
    fn test_bad_value_is_rejected() {
        let state = signed_in_as("mike@inlintech.net");

        let err = create_asset(&state, form("a lot")).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.with_store(|s| s.inventory().len()), 4);
    }

    #[test]
    fn test_hr_cannot_touch_inventory() {
        let state = signed_in_as("sarah@inlintech.net");
        assert_eq!(delete_asset(&state, 1).unwrap_err().code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_delete_asset_twice() {
        let state = signed_in_as("admin@inlintech.net");

        assert!(delete_asset(&state, 3).unwrap().is_some());
        assert!(delete_asset(&state, 3).unwrap().is_none());
        assert_eq!(state.with_store(|s| s.inventory().len()), 3);
    }
}
