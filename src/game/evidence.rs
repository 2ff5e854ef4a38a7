//! Evidence gathered during a session.

use crate::data_structures::{ClueIndex, SuspectLookup};

/// The clue index and suspect table of one session.
///
/// Owned by the [`Session`](super::Session) and lent to the exploration and
/// verdict engines in turn.
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    clues: ClueIndex,
    suspects: SuspectLookup,
}

impl Evidence {
    /// Wraps an existing suspect table with an empty clue index.
    pub fn new(suspects: SuspectLookup) -> Self {
        Self {
            clues: ClueIndex::new(),
            suspects,
        }
    }

    /// Records a clue and the suspect it points at.
    ///
    /// The clue index ignores repeats; the suspect table always stores a new
    /// binding, shadowing any earlier one for the same clue.
    pub fn record(&mut self, clue: &str, suspect: &str) {
        self.clues.insert(clue);
        self.suspects.insert(clue, suspect);
    }

    /// Collected clues, ordered.
    pub fn clues(&self) -> &ClueIndex {
        &self.clues
    }

    /// Clue to suspect bindings.
    pub fn suspects(&self) -> &SuspectLookup {
        &self.suspects
    }

    /// Releases every clue and binding.
    pub fn release(&mut self) {
        self.clues.clear();
        self.suspects.clear();
        tracing::debug!("Evidence released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_release() {
        let mut evidence = Evidence::default();
        evidence.record("Faca fora do lugar", "Carlos");
        evidence.record("Faca fora do lugar", "Carlos");

        assert_eq!(evidence.clues().len(), 1);
        assert_eq!(evidence.suspects().len(), 2);
        assert_eq!(evidence.suspects().lookup("Faca fora do lugar"), Some("Carlos"));

        evidence.release();
        assert!(evidence.clues().is_empty());
        assert!(evidence.suspects().is_empty());
    }
}
