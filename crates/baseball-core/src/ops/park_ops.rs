use crate::errors::{BaseballError, Result};
use crate::model::Park;
use crate::ops::Store;

/// Create a park if absent
///
/// Idempotent: inserting an existing id changes nothing.
///
/// # Errors
///
/// Never fails.
pub fn insert_park(store: &mut Store, park_id: &str) -> Result<()> {
    store.load_park(Park::new(park_id));
    Ok(())
}

/// Update a park
///
/// Parks carry no mutable fields, so this only checks that the id is
/// well-formed. The park does not have to exist.
///
/// # Errors
///
/// Returns `FormatError` for an empty or whitespace-only id.
pub fn update_park(_store: &mut Store, park_id: &str) -> Result<()> {
    if park_id.trim().is_empty() {
        return Err(BaseballError::format("ParkId", park_id, "a non-empty park id"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_park_idempotent() {
        let mut store = Store::new();
        insert_park(&mut store, "BOS07").unwrap();
        insert_park(&mut store, "BOS07").unwrap();
        assert_eq!(store.parks().len(), 1);
    }

    #[test]
    fn test_update_park_does_not_require_existence() {
        let mut store = Store::new();
        update_park(&mut store, "NOWHERE").unwrap();
        assert!(store.park("NOWHERE").is_none());
    }

    #[test]
    fn test_update_park_rejects_blank_id() {
        let mut store = Store::new();
        assert!(matches!(
            update_park(&mut store, "  "),
            Err(BaseballError::FormatError { .. })
        ));
    }
}
