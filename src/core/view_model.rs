//! Pure view-model computation. Everything here works on a borrowed snapshot
//! and returns plain data, so the rendering surfaces stay free of logic and
//! the numbers stay testable without a UI host.

use super::{
    models::{
        PlanEntry,
        Problem,
        StudyPlanDay,
    },
    snapshot::Snapshot,
};

pub const DEFAULT_PLAN_DAYS: u32 = 10;

/// Which problems are visible in the problem list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConceptFilter {
    #[default]
    All,
    Only(String),
}

impl ConceptFilter {
    pub fn label(&self) -> &str {
        match self {
            ConceptFilter::All => "All Concepts",
            ConceptFilter::Only(name) => name,
        }
    }

    pub fn matches(&self, problem: &Problem) -> bool {
        match self {
            ConceptFilter::All => true,
            ConceptFilter::Only(name) => problem.concept == *name,
        }
    }
}

/// One concept's worth of rows in the problem list. The group header is only
/// shown when the filter is `All`.
#[derive(Debug, Clone)]
pub struct ProblemGroup<'a> {
    pub concept: &'a str,
    pub problems: Vec<&'a Problem>,
}

/// Partitions the visible problems by concept, groups sorted lexically by
/// concept name, rows preserving snapshot order within each group.
pub fn group_problems<'a>(problems: &'a [Problem], filter: &ConceptFilter) -> Vec<ProblemGroup<'a>> {
    let mut groups: Vec<ProblemGroup<'a>> = Vec::new();

    for problem in problems.iter().filter(|p| filter.matches(p)) {
        match groups.iter_mut().find(|g| g.concept == problem.concept) {
            Some(group) => group.problems.push(problem),
            None => {
                groups.push(ProblemGroup { concept: &problem.concept, problems: vec![problem] })
            }
        }
    }

    groups.sort_by(|a, b| a.concept.cmp(b.concept));
    groups
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStats {
    pub completed: usize,
    pub total: usize,
    pub percent: f32,
}

impl ProgressStats {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

fn stats<'a>(problems: impl Iterator<Item = &'a Problem>) -> ProgressStats {
    let mut completed = 0;
    let mut total = 0;
    for problem in problems {
        total += 1;
        if problem.completed {
            completed += 1;
        }
    }

    // 0% for an empty set, never NaN.
    let percent =
        if total == 0 { 0.0 } else { 100.0 * completed as f32 / total as f32 };

    ProgressStats { completed, total, percent }
}

pub fn overall_progress(snapshot: &Snapshot) -> ProgressStats {
    stats(snapshot.problems.iter())
}

pub fn concept_progress(snapshot: &Snapshot, concept_name: &str) -> ProgressStats {
    stats(snapshot.problems.iter().filter(|p| p.concept == concept_name))
}

/// Resolves one plan day against the problem snapshot. Bare-id entries with no
/// matching problem are dropped from the rendered day.
pub fn resolve_plan_day<'a>(day: &'a StudyPlanDay, snapshot: &'a Snapshot) -> Vec<&'a Problem> {
    day.problems
        .iter()
        .filter_map(|entry| match entry {
            PlanEntry::Full(problem) => Some(problem),
            PlanEntry::Id(id) => snapshot.problem_by_id(id),
        })
        .collect()
}

/// Day-count parsing for plan generation: non-numeric input falls back to the
/// default, zero clamps to one day.
pub fn parse_plan_days(input: &str) -> u32 {
    input.trim().parse::<u32>().unwrap_or(DEFAULT_PLAN_DAYS).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Concept;

    fn problem(id: &str, concept: &str, completed: bool) -> Problem {
        Problem {
            id: id.to_string(),
            name: None,
            concept: concept.to_string(),
            difficulty: 2,
            completed,
        }
    }

    fn snapshot(problems: Vec<Problem>) -> Snapshot {
        let concepts = vec![Concept {
            name: "Arrays".to_string(),
            prerequisites: Vec::new(),
            difficulty: 1,
            proficiency: 0.5,
            completed: false,
        }];
        Snapshot::new(concepts, problems, 1)
    }

    #[test]
    fn overall_progress_is_zero_for_empty_snapshot() {
        let stats = overall_progress(&snapshot(Vec::new()));
        assert_eq!(stats.percent, 0.0);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn overall_progress_ratio() {
        let stats = overall_progress(&snapshot(vec![
            problem("p1", "Arrays", true),
            problem("p2", "Arrays", false),
            problem("p3", "Strings", true),
            problem("p4", "Strings", false),
        ]));

        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.percent, 50.0);
    }

    #[test]
    fn concept_progress_guards_empty_concepts() {
        let snap = snapshot(vec![problem("p1", "Arrays", true)]);

        assert_eq!(concept_progress(&snap, "Arrays").percent, 100.0);
        assert_eq!(concept_progress(&snap, "Graphs").percent, 0.0);
    }

    #[test]
    fn grouping_sorts_concepts_and_preserves_row_order() {
        let problems = vec![
            problem("p3", "Strings", false),
            problem("p1", "Arrays", false),
            problem("p4", "Strings", false),
            problem("p2", "Arrays", false),
        ];

        let groups = group_problems(&problems, &ConceptFilter::All);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].concept, "Arrays");
        assert_eq!(groups[1].concept, "Strings");
        let string_ids: Vec<&str> =
            groups[1].problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(string_ids, vec!["p3", "p4"]);
    }

    #[test]
    fn filter_by_concept_yields_exact_subset() {
        let problems = vec![
            problem("p1", "Arrays", false),
            problem("p2", "Strings", false),
            problem("p3", "Arrays", true),
        ];

        let filter = ConceptFilter::Only("Arrays".to_string());
        let groups = group_problems(&problems, &filter);

        assert_eq!(groups.len(), 1);
        let ids: Vec<&str> = groups[0].problems.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
    }

    #[test]
    fn empty_filter_result_is_empty_not_missing() {
        let problems = vec![problem("p1", "Arrays", false)];
        let filter = ConceptFilter::Only("Graphs".to_string());
        assert!(group_problems(&problems, &filter).is_empty());
    }

    #[test]
    fn plan_entries_resolve_against_snapshot() {
        let snap = snapshot(vec![problem("p1", "Arrays", false)]);
        let day = StudyPlanDay {
            day: 1,
            concepts: vec!["Arrays".to_string()],
            problems: vec![
                PlanEntry::Id("p1".to_string()),
                PlanEntry::Id("missing".to_string()),
                PlanEntry::Full(problem("p9", "Strings", true)),
            ],
        };

        let resolved = resolve_plan_day(&day, &snap);
        let ids: Vec<&str> = resolved.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p9"]);
    }

    #[test]
    fn single_concept_snapshot_renders_one_group() {
        // Concepts [Arrays], problems [p1]: filter "all" yields one "Arrays"
        // group holding p1, which is incomplete until the next snapshot says
        // otherwise.
        let snap = snapshot(vec![problem("p1", "Arrays", false)]);
        let groups = group_problems(&snap.problems, &ConceptFilter::All);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].concept, "Arrays");
        assert_eq!(groups[0].problems.len(), 1);
        assert!(!groups[0].problems[0].completed);

        let completed = snapshot(vec![problem("p1", "Arrays", true)]);
        let groups = group_problems(&completed.problems, &ConceptFilter::All);
        assert!(groups[0].problems[0].completed);
    }

    #[test]
    fn non_numeric_day_input_defaults_to_ten() {
        assert_eq!(parse_plan_days("abc"), 10);
        assert_eq!(parse_plan_days(""), 10);
        assert_eq!(parse_plan_days("  7 "), 7);
        assert_eq!(parse_plan_days("0"), 1);
        assert_eq!(parse_plan_days("-3"), 10);
    }
}
