//! `localStorage` access.

use musicala_core::port::StorageError;

/// The window's `localStorage`, or an error if it is disabled.
///
/// Looked up on every call: some browsers throw on access in private
/// mode, and the store can be cleared out from under the page.
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Failed(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

/// Read `key` from `localStorage`.
///
/// # Errors
///
/// Returns a [`StorageError`] if storage is disabled or the read throws.
pub fn get_item(key: &str) -> Result<Option<String>, StorageError> {
    local_storage()?
        .get_item(key)
        .map_err(|e| StorageError::Failed(format!("{e:?}")))
}

/// Write `value` under `key` in `localStorage`.
///
/// # Errors
///
/// Returns a [`StorageError`] if storage is disabled or full.
pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| StorageError::Failed(format!("{e:?}")))
}
