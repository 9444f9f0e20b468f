//! Evaluates prerequisite trees against completed courses.

use prereq_query::{Course, QueryNode};

use crate::traits::CourseSet;

/// Returns true if `completed` satisfies the tree.
///
/// - A group needs every child; an empty group is always satisfied.
/// - An or needs either side.
/// - A course needs its lower-cased name in `completed`.
/// - Recommended and co-requisite courses never block.
/// - A not is satisfied when its child is not.
///
/// # Example
///
/// ```rust
/// use prereq_matcher::{matches, CompletedCourses};
/// use prereq_query::QueryNode;
///
/// let tree = QueryNode::group(vec![
///     QueryNode::course("CS 161"),
///     QueryNode::or(QueryNode::course("MATH 2A"), QueryNode::course("MATH 3A")),
/// ]);
/// assert!(matches(&tree, &CompletedCourses::from_names(["cs 161", "math 3a"])));
/// assert!(!matches(&tree, &CompletedCourses::from_names(["cs 161"])));
/// ```
pub fn matches<S: CourseSet + ?Sized>(node: &QueryNode, completed: &S) -> bool {
    match node {
        QueryNode::Group(queries) => queries.iter().all(|q| matches(q, completed)),
        QueryNode::Or { left, right } => matches(left, completed) || matches(right, completed),
        QueryNode::Course { name } => completed.has_completed(&name.to_lowercase()),
        QueryNode::Recommended(_) | QueryNode::Coreq(_) => true,
        QueryNode::Not(course) => !matches(course, completed),
    }
}

/// Why a tree is not satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blocker {
    /// A required course that has not been completed.
    Missing(String),
    /// A completed course that the tree excludes.
    Excluded(String),
}

/// Lists what keeps `completed` from satisfying the tree.
///
/// Returns an empty list exactly when the tree matches. For an unsatisfied or, both
/// sides contribute, since completing either would help.
pub fn explain<S: CourseSet + ?Sized>(node: &QueryNode, completed: &S) -> Vec<Blocker> {
    let mut blockers = Vec::new();
    collect_blockers(node, completed, &mut blockers);
    blockers
}

fn collect_blockers<S: CourseSet + ?Sized>(
    node: &QueryNode,
    completed: &S,
    blockers: &mut Vec<Blocker>,
) {
    if matches(node, completed) {
        return;
    }
    match node {
        QueryNode::Group(queries) => {
            for q in queries {
                collect_blockers(q, completed, blockers);
            }
        }
        QueryNode::Or { left, right } => {
            collect_blockers(left, completed, blockers);
            collect_blockers(right, completed, blockers);
        }
        QueryNode::Course { name } => blockers.push(Blocker::Missing(name.clone())),
        QueryNode::Recommended(_) | QueryNode::Coreq(_) => {}
        QueryNode::Not(course) => {
            let before = blockers.len();
            blockers.extend(
                course
                    .course_names()
                    .into_iter()
                    .filter(|name| completed.has_completed(&name.to_lowercase()))
                    .map(|name| Blocker::Excluded(name.to_string())),
            );
            // The child can hold without any completed course, e.g. a
            // nested not or an empty group.
            if blockers.len() == before {
                blockers.push(Blocker::Excluded(course.label().into_owned()));
            }
        }
    }
}

/// Things that can be checked against a set of completed courses.
pub trait Satisfiable {
    /// Returns true if `completed` satisfies the prerequisites.
    fn is_satisfied_by<S: CourseSet + ?Sized>(&self, completed: &S) -> bool;
}

impl Satisfiable for QueryNode {
    fn is_satisfied_by<S: CourseSet + ?Sized>(&self, completed: &S) -> bool {
        matches(self, completed)
    }
}

impl Satisfiable for Course {
    fn is_satisfied_by<S: CourseSet + ?Sized>(&self, completed: &S) -> bool {
        matches(self.prereq(), completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CompletedCourses;

    fn course(name: &str) -> QueryNode {
        QueryNode::course(name)
    }

    fn set(names: &[&str]) -> CompletedCourses {
        CompletedCourses::from_names(names.iter().copied())
    }

    #[test]
    fn test_empty_group_always_matches() {
        let tree = QueryNode::group(vec![]);
        assert!(matches(&tree, &set(&[])));
        assert!(matches(&tree, &set(&["cs 161"])));
    }

    #[test]
    fn test_group_requires_all() {
        let tree = QueryNode::group(vec![course("A"), course("B")]);
        assert!(matches(&tree, &set(&["a", "b"])));
        assert!(!matches(&tree, &set(&["a"])));
        assert!(!matches(&tree, &set(&["b"])));
    }

    #[test]
    fn test_or_is_commutative() {
        let sets = [set(&[]), set(&["a"]), set(&["b"]), set(&["a", "b"])];
        for s in &sets {
            let ab = matches(&QueryNode::or(course("A"), course("B")), s);
            let ba = matches(&QueryNode::or(course("B"), course("A")), s);
            assert_eq!(ab, ba);
            assert_eq!(ab, s.contains("a") || s.contains("b"));
        }
    }

    #[test]
    fn test_course_is_case_insensitive() {
        assert!(matches(&course("CS 161"), &set(&["cs 161"])));
        let raw: &[&str] = &["cs 161"];
        assert!(matches(&course("CS 161"), raw));
    }

    #[test]
    fn test_advisory_nodes_never_block() {
        for tree in [
            QueryNode::recommended(course("CS 162")),
            QueryNode::coreq(course("CS 162")),
        ] {
            assert!(matches(&tree, &set(&[])));
            assert!(matches(&tree, &set(&["cs 162"])));
        }
    }

    #[test]
    fn test_not_inverts() {
        let empty = set(&[]);
        let universal = set(&["a", "b", "cs 161"]);
        let children = [
            course("CS 161"),
            QueryNode::group(vec![]),
            QueryNode::or(course("A"), course("Z")),
            QueryNode::coreq(course("Z")),
        ];
        for child in children {
            let negated = QueryNode::not(child.clone());
            for s in [&empty, &universal] {
                assert_eq!(matches(&negated, s), !matches(&child, s));
            }
        }
    }

    #[test]
    fn test_scenario_group_with_or() {
        let tree = QueryNode::group(vec![
            course("cs 161"),
            QueryNode::or(course("math 2a"), course("math 3a")),
        ]);
        assert!(matches(&tree, &set(&["cs 161", "math 3a"])));
        assert!(!matches(&tree, &set(&["cs 161"])));
    }

    #[test]
    fn test_explain_missing() {
        let tree = QueryNode::group(vec![
            course("CS 161"),
            QueryNode::or(course("MATH 2A"), course("MATH 3A")),
            QueryNode::coreq(course("CS 162")),
        ]);
        assert_eq!(
            explain(&tree, &set(&["cs 161"])),
            vec![
                Blocker::Missing("MATH 2A".to_string()),
                Blocker::Missing("MATH 3A".to_string()),
            ]
        );
        assert!(explain(&tree, &set(&["cs 161", "math 2a"])).is_empty());
    }

    #[test]
    fn test_explain_excluded() {
        let tree = QueryNode::group(vec![course("A"), QueryNode::not(course("CS 169"))]);
        assert_eq!(
            explain(&tree, &set(&["a", "cs 169"])),
            vec![Blocker::Excluded("CS 169".to_string())]
        );
    }

    #[test]
    fn test_explain_not_without_completed_course() {
        let cases = [
            (
                QueryNode::not(QueryNode::not(course("CS 161"))),
                "|NOT: CS 161|",
            ),
            (QueryNode::not(QueryNode::group(vec![])), "[  ]"),
            (
                QueryNode::not(QueryNode::coreq(course("Y 1"))),
                "|COREQ: Y 1|",
            ),
        ];
        for (tree, label) in cases {
            for completed in [set(&[]), set(&["z 9"])] {
                assert!(!matches(&tree, &completed));
                assert_eq!(
                    explain(&tree, &completed),
                    vec![Blocker::Excluded(label.to_string())]
                );
            }
        }
    }

    #[test]
    fn test_explain_empty_exactly_when_matched() {
        let trees = [
            QueryNode::not(QueryNode::not(course("A"))),
            QueryNode::not(QueryNode::group(vec![])),
            QueryNode::not(QueryNode::recommended(course("A"))),
            QueryNode::group(vec![course("A"), QueryNode::not(course("B"))]),
            QueryNode::or(QueryNode::not(course("A")), course("B")),
            QueryNode::not(QueryNode::or(course("A"), QueryNode::not(course("B")))),
        ];
        let sets = [set(&[]), set(&["a"]), set(&["b"]), set(&["a", "b"])];
        for tree in &trees {
            for s in &sets {
                assert_eq!(explain(tree, s).is_empty(), matches(tree, s), "{tree} with {s:?}");
            }
        }
    }

    #[test]
    fn test_satisfiable_for_course() {
        let c = Course::new("CS 162", "Formal Languages", course("CS 161"));
        assert!(c.is_satisfied_by(&set(&["cs 161"])));
        assert!(!c.prereq().is_satisfied_by(&set(&[])));
    }
}
