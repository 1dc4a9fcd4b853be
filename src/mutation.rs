//! Task Mutation State
//!
//! The editor, the two-phase delete confirmation and the status of the
//! mutation currently being submitted.

use crate::models::{Task, TaskDraft};
use crate::validation::TaskSchema;

pub const SAVE_FAILED: &str = "Failed to save task";
pub const DELETE_FAILED: &str = "Failed to delete task";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Editor {
    #[default]
    Closed,
    Creating,
    Editing(Task),
}

impl Editor {
    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    /// Initial form values
    pub fn draft(&self) -> TaskDraft {
        match self {
            Editor::Editing(task) => TaskDraft::from(task),
            _ => TaskDraft::default(),
        }
    }

    pub fn schema(&self) -> TaskSchema {
        match self {
            Editor::Editing(_) => TaskSchema::Update,
            _ => TaskSchema::Create,
        }
    }
}

/// Task waiting for the user to confirm its deletion
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteStage {
    #[default]
    None,
    Staged(Task),
}

impl DeleteStage {
    pub fn target(&self) -> Option<&Task> {
        match self {
            DeleteStage::Staged(task) => Some(task),
            DeleteStage::None => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MutationStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl MutationStatus {
    pub fn is_submitting(&self) -> bool {
        *self == MutationStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MutationStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fake;

    #[test]
    fn test_editor_drafts() {
        assert_eq!(Editor::Creating.draft(), TaskDraft::default());
        assert_eq!(Editor::Creating.schema(), TaskSchema::Create);

        let task = fake::task(3, "Read");
        let editor = Editor::Editing(task.clone());
        assert_eq!(editor.draft().title, "Read");
        assert_eq!(editor.schema(), TaskSchema::Update);
        assert!(editor.is_open());
        assert!(!Editor::Closed.is_open());
    }

    #[test]
    fn test_status_helpers() {
        assert!(MutationStatus::Submitting.is_submitting());
        assert_eq!(MutationStatus::Failed(SAVE_FAILED.into()).error(), Some(SAVE_FAILED));
        assert_eq!(MutationStatus::Idle.error(), None);
        assert_eq!(DeleteStage::None.target(), None);
    }
}
