use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::record::ProcessRecord;

/// Commands the user pinned to the top of the list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSet {
    commands: HashSet<String>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the command was already pinned
    pub fn pin<S: Into<String>>(&mut self, command: S) -> bool {
        self.commands.insert(command.into())
    }

    /// Returns false if the command was not pinned
    pub fn unpin(&mut self, command: &str) -> bool {
        self.commands.remove(command)
    }

    /// Flip the pin state; returns the new state
    pub fn toggle(&mut self, command: &str) -> bool {
        if self.unpin(command) {
            false
        } else {
            self.pin(command)
        }
    }

    pub fn is_pinned(&self, record: &ProcessRecord) -> bool {
        self.contains(&record.command)
    }

    pub fn contains(&self, command: &str) -> bool {
        self.commands.contains(command)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PinSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().map(Into::into).collect(),
        }
    }
}
