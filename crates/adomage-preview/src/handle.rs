//! Revocable preview handles.
//!
//! A preview handle is a runtime-issued string token (a Blob URL in the
//! browser) that resolves to the bytes of a selected image. The runtime
//! keeps the bytes alive until it is told the token is no longer needed,
//! so every handle must be revoked exactly once.
//!
//! [`PreviewHandle`] ties that obligation to ownership: the token is
//! revoked when the handle is dropped, and the handle can be neither
//! cloned nor copied.

use std::fmt;

use crate::file::SelectedFile;

/// Errors that can occur while managing preview handles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    /// The runtime refused to create a handle.
    #[error("could not create preview: {0}")]
    Runtime(String),

    /// The stage has been torn down and accepts no further selections.
    #[error("preview stage has been torn down")]
    TornDown,
}

/// The runtime resource manager that mints and revokes preview handles.
///
/// Implementations are expected to be cheap to clone; each live
/// [`PreviewHandle`] keeps its own copy so it can revoke itself.
pub trait ObjectUrlRegistry: Clone {
    /// Create a display token for `file`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::Runtime`] if the runtime cannot create
    /// the token.
    fn create(&self, file: &SelectedFile) -> Result<String, PreviewError>;

    /// Tell the runtime that `url` is no longer needed.
    fn revoke(&self, url: &str);
}

/// Exclusive owner of one preview token.
///
/// Revokes the token on drop.
pub struct PreviewHandle<R: ObjectUrlRegistry> {
    url: String,
    registry: R,
}

impl<R: ObjectUrlRegistry> PreviewHandle<R> {
    /// Create a token for `file` through `registry`.
    ///
    /// # Errors
    ///
    /// Propagates the registry's [`PreviewError::Runtime`].
    pub fn acquire(registry: R, file: &SelectedFile) -> Result<Self, PreviewError> {
        let url = registry.create(file)?;
        tracing::debug!(%url, name = file.name(), "preview handle created");
        Ok(Self { url, registry })
    }

    /// The token to bind to an `<img src>`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<R: ObjectUrlRegistry> Drop for PreviewHandle<R> {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
        tracing::debug!(url = %self.url, "preview handle released");
    }
}

impl<R: ObjectUrlRegistry> fmt::Debug for PreviewHandle<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewHandle").field(&self.url).finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    //! In-memory registry that records every create and revoke.

    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use super::{ObjectUrlRegistry, PreviewError};
    use crate::file::SelectedFile;

    /// One call observed by [`RecordingRegistry`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Created(String),
        Revoked(String),
    }

    #[derive(Debug, Default)]
    struct Ledger {
        next_id: u32,
        active: BTreeSet<String>,
        events: Vec<Event>,
        fail_next: bool,
        max_active: usize,
    }

    #[derive(Debug, Clone, Default)]
    pub struct RecordingRegistry {
        ledger: Rc<RefCell<Ledger>>,
    }

    impl RecordingRegistry {
        pub fn fail_next_create(&self) {
            self.ledger.borrow_mut().fail_next = true;
        }

        pub fn events(&self) -> Vec<Event> {
            self.ledger.borrow().events.clone()
        }

        pub fn creates(&self) -> usize {
            self.count(|e| matches!(e, Event::Created(_)))
        }

        pub fn revokes(&self) -> usize {
            self.count(|e| matches!(e, Event::Revoked(_)))
        }

        pub fn active(&self) -> usize {
            self.ledger.borrow().active.len()
        }

        /// Highest number of simultaneously live tokens, counted after
        /// each revoke.
        pub fn max_active_after_revoke(&self) -> usize {
            self.ledger.borrow().max_active
        }

        fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
            self.ledger.borrow().events.iter().filter(|e| pred(e)).count()
        }
    }

    impl ObjectUrlRegistry for RecordingRegistry {
        fn create(&self, file: &SelectedFile) -> Result<String, PreviewError> {
            let mut ledger = self.ledger.borrow_mut();
            if std::mem::take(&mut ledger.fail_next) {
                return Err(PreviewError::Runtime("quota exceeded".into()));
            }
            ledger.next_id += 1;
            let url = format!("blob:test/{}/{}", ledger.next_id, file.name());
            ledger.active.insert(url.clone());
            ledger.events.push(Event::Created(url.clone()));
            Ok(url)
        }

        fn revoke(&self, url: &str) {
            let mut ledger = self.ledger.borrow_mut();
            assert!(ledger.active.remove(url), "revoked unknown or released url {url}");
            ledger.events.push(Event::Revoked(url.to_owned()));
            ledger.max_active = ledger.max_active.max(ledger.active.len());
        }
    }

    pub fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name, vec![1, 2, 3, 4]).unwrap()
    }
}
