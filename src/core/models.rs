use serde::{
    Deserialize,
    Serialize,
};

/// A learning topic as served by `/concepts`. Identity key is `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub difficulty: u8,
    #[serde(default)]
    pub proficiency: f32,
    #[serde(default)]
    pub completed: bool,
}

/// A practice exercise tied to one concept. Identity key is `id`; `completed`
/// is server-authoritative and only changes through a refetched snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub concept: String,
    pub difficulty: u8,
    #[serde(default)]
    pub completed: bool,
}

impl Problem {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// One day of a generated study plan. The backend may ship problems either as
/// full objects or as bare id strings referencing the problem snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanDay {
    pub day: u32,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub problems: Vec<PlanEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanEntry {
    Full(Problem),
    Id(String),
}

/// Prerequisite graph snapshot from `/concept-graph`. Read-only, not
/// reconciled with the concept/problem snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub difficulty: u8,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub proficiency: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProblemRequest {
    pub problem_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_deserializes_backend_payload() {
        let json = r#"{
            "name": "Hash Tables",
            "difficulty": 3,
            "prerequisites": ["Arrays"],
            "proficiency": 0.5,
            "completed": false
        }"#;

        let concept: Concept = serde_json::from_str(json).unwrap();
        assert_eq!(concept.name, "Hash Tables");
        assert_eq!(concept.prerequisites, vec!["Arrays".to_string()]);
        assert_eq!(concept.difficulty, 3);
        assert!(!concept.completed);
    }

    #[test]
    fn problem_name_falls_back_to_id() {
        let json = r#"{"id": "p1", "concept": "Arrays", "difficulty": 2}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();

        assert_eq!(problem.display_name(), "p1");
        assert!(!problem.completed);
    }

    #[test]
    fn plan_entries_accept_objects_and_bare_ids() {
        let json = r#"{
            "day": 1,
            "concepts": ["Arrays"],
            "problems": [
                {"id": "p1", "name": "Two Sum", "concept": "Arrays", "difficulty": 1, "completed": false},
                "p2"
            ]
        }"#;

        let day: StudyPlanDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.problems.len(), 2);
        assert!(matches!(&day.problems[0], PlanEntry::Full(p) if p.id == "p1"));
        assert!(matches!(&day.problems[1], PlanEntry::Id(id) if id == "p2"));
    }

    #[test]
    fn graph_snapshot_shape() {
        let json = r#"{
            "nodes": [{"id": "Arrays", "difficulty": 2, "completed": true, "proficiency": 1.0}],
            "links": [{"source": "Arrays", "target": "Hash Tables"}]
        }"#;

        let graph: ConceptGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.links[0].source, "Arrays");
    }

    #[test]
    fn complete_request_uses_camel_case_key() {
        let body = CompleteProblemRequest { problem_id: "p1".to_string() };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["problemId"], "p1");
    }
}
