//! Effect descriptors returned by the controller.
//!
//! `update` never performs I/O. It returns a [`Task`] describing the fetches
//! to start, and the [`crate::Runtime`] executes them.

use dex_model::{RecordDetail, RecordRef};

/// One fetch to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the whole record listing.
    FetchRecords,
    /// Load the name set for a type key.
    FetchTypeNames(String),
    /// Load the name set for a habitat key.
    FetchHabitatNames(String),
    /// Load a record's detail, answering request `request`.
    FetchDetail { request: u64, record: RecordRef },
    /// Load the lineage of a fetched record.
    FetchLineage(RecordDetail),
}

/// A batch of commands.
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    commands: Vec<Command>,
}

impl Task {
    /// No follow-up work.
    pub fn none() -> Self {
        Self::default()
    }

    /// A single command.
    pub fn perform(command: Command) -> Self {
        Self {
            commands: vec![command],
        }
    }

    /// Merges several tasks.
    pub fn batch(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            commands: tasks.into_iter().flat_map(|task| task.commands).collect(),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
}

impl IntoIterator for Task {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattens_in_order() {
        let task = Task::batch([
            Task::perform(Command::FetchRecords),
            Task::none(),
            Task::perform(Command::FetchTypeNames("fire".to_string())),
        ]);
        assert_eq!(
            task.commands(),
            [
                Command::FetchRecords,
                Command::FetchTypeNames("fire".to_string())
            ]
        );
        assert!(Task::batch([Task::none(), Task::none()]).is_none());
    }
}
