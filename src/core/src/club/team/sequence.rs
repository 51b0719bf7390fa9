use crate::TeamId;

/// Hands out team ids for one league under construction.
#[derive(Debug, Clone)]
pub struct TeamIdSequence {
    next: TeamId,
}

impl Default for TeamIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamIdSequence {
    pub fn new() -> Self {
        TeamIdSequence { next: 1 }
    }

    pub fn next_id(&mut self) -> TeamId {
        let id = self.next;
        self.next += 1;
        id
    }
}
