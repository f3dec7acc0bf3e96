use super::models::{
    Concept,
    Problem,
};

/// The full concept/problem state as of one fetch cycle. Replaced wholesale on
/// every refresh, never patched, so the renderers always see one consistent
/// snapshot. `generation` is stamped at request time; an incoming snapshot
/// with a generation at or below the applied one is stale and must be dropped.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub concepts: Vec<Concept>,
    pub problems: Vec<Problem>,
    pub generation: u64,
}

impl Snapshot {
    pub fn new(concepts: Vec<Concept>, problems: Vec<Problem>, generation: u64) -> Self {
        Self { concepts, problems, generation }
    }

    /// Whether `incoming` was requested after this snapshot. Last-issued-wins:
    /// out-of-order network completion never rolls the UI back.
    pub fn accepts(&self, incoming_generation: u64) -> bool {
        incoming_generation > self.generation
    }

    pub fn problem_by_id(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    pub fn concept_by_name(&self, name: &str) -> Option<&Concept> {
        self.concepts.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(id: &str) -> Problem {
        Problem {
            id: id.to_string(),
            name: None,
            concept: "Arrays".to_string(),
            difficulty: 1,
            completed: false,
        }
    }

    #[test]
    fn stale_generations_are_rejected() {
        let snapshot = Snapshot::new(Vec::new(), vec![problem("p1")], 3);

        assert!(snapshot.accepts(4));
        assert!(!snapshot.accepts(3));
        assert!(!snapshot.accepts(2));
    }

    #[test]
    fn lookup_by_id() {
        let snapshot = Snapshot::new(Vec::new(), vec![problem("p1"), problem("p2")], 1);

        assert!(snapshot.problem_by_id("p2").is_some());
        assert!(snapshot.problem_by_id("p9").is_none());
    }
}
