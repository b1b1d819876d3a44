//! The caller-held "current result".

use std::sync::{Arc, RwLock};

use crate::models::FeatureResult;
use crate::render::{render, Document};

/// Holds the last successfully rendered result.
///
/// Cloning shares the slot. Publishing replaces whatever was there; when two
/// generations race, the one that finishes last wins.
#[derive(Debug, Clone, Default)]
pub struct ResultSlot {
    current: Arc<RwLock<Option<Arc<FeatureResult>>>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `result`, then make it current. The slot only changes once the
    /// document exists, so export never sees a result that was not rendered.
    pub fn publish(&self, result: FeatureResult) -> Document {
        let document = render(&result);
        let mut current = self.current.write().expect("result slot lock poisoned");
        *current = Some(Arc::new(result));
        document
    }

    pub fn current(&self) -> Option<Arc<FeatureResult>> {
        self.current
            .read()
            .expect("result slot lock poisoned")
            .clone()
    }

    /// Whether there is something to export.
    pub fn is_ready(&self) -> bool {
        self.current().is_some()
    }
}
