//! File selection and the editor handoff.

use crate::types::FileRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Receives files chosen in the tree.
pub trait EditorCollaborator {
    /// A file entry was chosen for viewing or editing.
    fn on_file_select(&mut self, record: &FileRecord);

    /// Whether the currently open file has edits that were not written back.
    fn has_unsaved_changes(&self) -> bool {
        false
    }
}

/// What to do when a new file is selected while the editor holds unsaved edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsavedPolicy {
    /// Replace the open file; the edits are lost.
    #[default]
    Discard,
    /// Park the new selection until the caller confirms or cancels it.
    Hold,
}

/// Result of a selection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The editor received the record.
    Forwarded,
    /// The record is pending behind unsaved edits.
    Held,
}

/// Tracks the selected file and forwards selections to the editor.
pub struct SelectionCoordinator<E: EditorCollaborator> {
    editor: E,
    policy: UnsavedPolicy,
    selected: Option<FileRecord>,
    pending: Option<FileRecord>,
}

impl<E: EditorCollaborator> SelectionCoordinator<E> {
    pub fn new(editor: E) -> Self {
        Self::with_policy(editor, UnsavedPolicy::default())
    }

    pub fn with_policy(editor: E, policy: UnsavedPolicy) -> Self {
        Self {
            editor,
            policy,
            selected: None,
            pending: None,
        }
    }

    /// Select `record`, replacing any prior selection.
    pub fn select_file(&mut self, record: FileRecord) -> SelectOutcome {
        if self.editor.has_unsaved_changes() {
            match self.policy {
                UnsavedPolicy::Discard => {
                    warn!(
                        path = %record.path,
                        "Discarding unsaved edits for new selection"
                    );
                }
                UnsavedPolicy::Hold => {
                    debug!(path = %record.path, "Holding selection behind unsaved edits");
                    self.pending = Some(record);
                    return SelectOutcome::Held;
                }
            }
        }
        self.forward(record);
        SelectOutcome::Forwarded
    }

    /// Forward the held selection. Returns false when nothing was pending.
    pub fn confirm_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(record) => {
                self.forward(record);
                true
            }
            None => false,
        }
    }

    /// Drop the held selection and keep the current one.
    pub fn cancel_pending(&mut self) -> Option<FileRecord> {
        self.pending.take()
    }

    fn forward(&mut self, record: FileRecord) {
        debug!(path = %record.path, "Selected file");
        self.pending = None;
        self.editor.on_file_select(&record);
        self.selected = Some(record);
    }

    pub fn selected(&self) -> Option<&FileRecord> {
        self.selected.as_ref()
    }

    pub fn pending(&self) -> Option<&FileRecord> {
        self.pending.as_ref()
    }

    pub fn policy(&self) -> UnsavedPolicy {
        self.policy
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.pending = None;
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }
}
