use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("session storage rejected the operation: {0}")]
    Rejected(String),
}

/// One string slot in some key/value store.
pub trait KeyStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, value: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// A single key in the browser's `sessionStorage`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionKey {
    key: &'static str,
}

impl SessionKey {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

fn rejected(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected(format!("{:?}", err))
}

impl KeyStore for SessionKey {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(self.key).map_err(rejected)
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(self.key, value).map_err(rejected)
    }

    fn remove(&self) -> Result<(), StorageError> {
        Self::storage()?.remove_item(self.key).map_err(rejected)
    }
}

#[cfg(test)]
pub mod memory {
    use super::{KeyStore, StorageError};
    use std::cell::RefCell;

    /// In-memory slot for driving form models outside a browser.
    #[derive(Default)]
    pub struct MemoryKey {
        value: RefCell<Option<String>>,
        pub writes: RefCell<usize>,
    }

    impl MemoryKey {
        pub fn with(value: &str) -> Self {
            Self {
                value: RefCell::new(Some(value.to_string())),
                writes: RefCell::new(0),
            }
        }

        pub fn get(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl KeyStore for MemoryKey {
        fn read(&self) -> Result<Option<String>, StorageError> {
            Ok(self.value.borrow().clone())
        }

        fn write(&self, value: &str) -> Result<(), StorageError> {
            *self.writes.borrow_mut() += 1;
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }

        fn remove(&self) -> Result<(), StorageError> {
            *self.writes.borrow_mut() += 1;
            *self.value.borrow_mut() = None;
            Ok(())
        }
    }
}
