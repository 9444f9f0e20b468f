//! Parser for catalog prerequisite text, implemented with nom.
//!
//! Registrar listings describe prerequisites as text such as:
//!
//! ```text
//! I&C SCI 33 ( min grade = C ) AND ( MATH 2A OR MATH 5A ) AND STATS 7 recommended
//! ```
//!
//! Grammar (keywords are case-insensitive and whole-word):
//!
//! ```text
//! conjunction := clause ("AND" clause)*
//! clause      := dropped | annotated ("OR" annotated)*
//! annotated   := ["NO"] operand suffix*
//! suffix      := annotation | grade | dropped
//! annotation  := "recommended" | "coreq" | "(" annotation ")"
//! grade       := ["min"] "grade" "=" WORD ["or" "better"] | "(" grade ")"
//! dropped     := "NO REPEATS ALLOWED" | "LOWER DIVISION WRITING"
//! operand     := "(" conjunction ")" | WORD+
//! ```
//!
//! `OR` chains fold to the left. `NO` negates the operand right after it,
//! so `NO a OR b` reads as `(NO a) OR b`. An annotation wraps the operand
//! right before it; on a parenthesized group it wraps the group's last
//! member.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, multispace0, multispace1, satisfy},
    combinator::{all_consuming, map, not, opt, value, verify},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use crate::ast::QueryNode;
use crate::error::{QueryError, QueryResult};

const KEYWORDS: [&str; 5] = ["AND", "OR", "NO", "RECOMMENDED", "COREQ"];

/// Parse catalog prerequisite text into a tree.
///
/// The top level is a group of the `AND`-separated clauses, minified so that
/// a single clause stands on its own. Empty text gives an empty group, which
/// every student satisfies.
///
/// # Examples
///
/// ```rust
/// use prereq_query::{parse_prerequisites, QueryNode};
///
/// let tree = parse_prerequisites("I&C SCI 46 AND MATH 2A OR MATH 3A").unwrap();
/// assert_eq!(
///     tree,
///     QueryNode::group(vec![
///         QueryNode::course("I&C SCI 46"),
///         QueryNode::or(QueryNode::course("MATH 2A"), QueryNode::course("MATH 3A")),
///     ])
/// );
///
/// let tree = parse_prerequisites("NO COMPSCI 161").unwrap();
/// assert_eq!(tree, QueryNode::not(QueryNode::course("COMPSCI 161")));
/// ```
pub fn parse_prerequisites(input: &str) -> QueryResult<QueryNode> {
    match all_consuming(delimited(ws, conjunction, ws))(input) {
        Ok((_, queries)) => Ok(QueryNode::Group(queries).minify()),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = input.len() - e.input.len();
            Err(QueryError::Parse {
                position,
                message: format!("unexpected input at: '{}'", truncate(e.input, 20)),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(QueryError::Parse {
            position: input.len(),
            message: "incomplete input".to_string(),
        }),
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

// ============================================================================
// Clauses
// ============================================================================

fn conjunction(input: &str) -> IResult<&str, Vec<QueryNode>> {
    map(
        separated_list0(tuple((ws, keyword("AND"), ws)), clause),
        |clauses| clauses.into_iter().flatten().collect(),
    )(input)
}

fn clause(input: &str) -> IResult<&str, Option<QueryNode>> {
    alt((
        value(None, dropped_clause),
        map(disjunction, Some),
    ))(input)
}

fn disjunction(input: &str) -> IResult<&str, QueryNode> {
    let (input, first) = annotated(input)?;
    or_tail(input, first)
}

fn or_tail(input: &str, left: QueryNode) -> IResult<&str, QueryNode> {
    match preceded(tuple((ws, keyword("OR"), ws)), annotated)(input) {
        Ok((remaining, right)) => or_tail(remaining, QueryNode::or(left, right)),
        Err(_) => Ok((input, left)),
    }
}

fn dropped_clause(input: &str) -> IResult<&str, ()> {
    value(
        (),
        alt((
            tuple((
                keyword("NO"),
                multispace1,
                keyword("REPEATS"),
                multispace1,
                keyword("ALLOWED"),
            )),
            tuple((
                keyword("LOWER"),
                multispace1,
                keyword("DIVISION"),
                multispace1,
                keyword("WRITING"),
            )),
        )),
    )(input)
}

// ============================================================================
// Operands and suffixes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Annotation {
    Recommended,
    Coreq,
}

fn annotated(input: &str) -> IResult<&str, QueryNode> {
    let (mut input, mut node) = alt((negated, operand))(input)?;
    while let Ok((remaining, annotation)) = suffix(input) {
        input = remaining;
        if let Some(annotation) = annotation {
            node = annotate(node, annotation);
        }
    }
    Ok((input, node))
}

fn annotate(node: QueryNode, annotation: Annotation) -> QueryNode {
    match node {
        QueryNode::Group(mut queries) if !queries.is_empty() => {
            if let Some(last) = queries.pop() {
                queries.push(annotate(last, annotation));
            }
            QueryNode::Group(queries)
        }
        other => match annotation {
            Annotation::Recommended => QueryNode::recommended(other),
            Annotation::Coreq => QueryNode::coreq(other),
        },
    }
}

fn negated(input: &str) -> IResult<&str, QueryNode> {
    preceded(
        tuple((not(dropped_clause), keyword("NO"), ws)),
        map(operand, QueryNode::not),
    )(input)
}

fn operand(input: &str) -> IResult<&str, QueryNode> {
    alt((
        map(parenthesized(conjunction), QueryNode::Group),
        map(course_name, QueryNode::course),
    ))(input)
}

fn suffix(input: &str) -> IResult<&str, Option<Annotation>> {
    preceded(
        ws,
        alt((
            map(annotation, Some),
            value(None, grade_qualifier),
            value(None, dropped_clause),
        )),
    )(input)
}

fn annotation(input: &str) -> IResult<&str, Annotation> {
    alt((bare_annotation, parenthesized(bare_annotation)))(input)
}

fn bare_annotation(input: &str) -> IResult<&str, Annotation> {
    alt((
        value(Annotation::Recommended, keyword("recommended")),
        value(Annotation::Coreq, keyword("coreq")),
    ))(input)
}

fn grade_qualifier(input: &str) -> IResult<&str, ()> {
    alt((bare_grade_qualifier, parenthesized(bare_grade_qualifier)))(input)
}

fn bare_grade_qualifier(input: &str) -> IResult<&str, ()> {
    value(
        (),
        tuple((
            opt(pair(keyword("min"), ws)),
            keyword("grade"),
            ws,
            char('='),
            ws,
            word,
            opt(tuple((ws, keyword("or"), ws, keyword("better")))),
        )),
    )(input)
}

// ============================================================================
// Course names
// ============================================================================

fn course_name(input: &str) -> IResult<&str, String> {
    map(
        pair(course_word, many0(preceded(multispace1, course_word))),
        |(first, rest)| {
            let mut name = first.to_string();
            for w in rest {
                name.push(' ');
                name.push_str(w);
            }
            name
        },
    )(input)
}

fn course_word(input: &str) -> IResult<&str, &str> {
    preceded(not(grade_qualifier), verify(word, |w: &str| !is_keyword(w)))(input)
}

fn is_keyword(w: &str) -> bool {
    KEYWORDS.iter().any(|k| w.eq_ignore_ascii_case(k))
}

// ============================================================================
// Lexical helpers
// ============================================================================

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && c != '(' && c != ')'
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

fn keyword<'a>(kw: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    terminated(tag_no_case(kw), not(satisfy(is_word_char)))
}

fn parenthesized<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(pair(char('('), ws), inner, pair(ws, char(')')))
}

/// Optional whitespace.
fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str) -> QueryNode {
        QueryNode::course(name)
    }

    #[test]
    fn test_empty_text_is_empty_group() {
        assert_eq!(parse_prerequisites("").unwrap(), QueryNode::group(vec![]));
        assert_eq!(parse_prerequisites("   \n ").unwrap(), QueryNode::group(vec![]));
    }

    #[test]
    fn test_single_course_is_minified() {
        assert_eq!(parse_prerequisites("I&C SCI 31").unwrap(), course("I&C SCI 31"));
    }

    #[test]
    fn test_course_name_whitespace_is_normalized() {
        assert_eq!(
            parse_prerequisites("  I&C   SCI\t31 ").unwrap(),
            course("I&C SCI 31")
        );
    }

    #[test]
    fn test_and_clauses() {
        let tree = parse_prerequisites("I&C SCI 31 AND I&C SCI 32 and I&C SCI 33").unwrap();
        assert_eq!(
            tree,
            QueryNode::group(vec![
                course("I&C SCI 31"),
                course("I&C SCI 32"),
                course("I&C SCI 33"),
            ])
        );
    }

    #[test]
    fn test_or_folds_left() {
        let tree = parse_prerequisites("MATH 2A OR MATH 5A OR AP CALCULUS").unwrap();
        assert_eq!(
            tree,
            QueryNode::or(
                QueryNode::or(course("MATH 2A"), course("MATH 5A")),
                course("AP CALCULUS"),
            )
        );
    }

    #[test]
    fn test_parenthesized_group_stays_nested() {
        let tree = parse_prerequisites("I&C SCI 33 AND ( MATH 2A OR MATH 5A )").unwrap();
        assert_eq!(
            tree,
            QueryNode::group(vec![
                course("I&C SCI 33"),
                QueryNode::group(vec![QueryNode::or(course("MATH 2A"), course("MATH 5A"))]),
            ])
        );
    }

    #[test]
    fn test_or_with_group_operand() {
        let tree = parse_prerequisites("(A AND B) OR C").unwrap();
        assert_eq!(
            tree,
            QueryNode::or(QueryNode::group(vec![course("A"), course("B")]), course("C"))
        );
    }

    #[test]
    fn test_negation() {
        let tree = parse_prerequisites("I&C SCI 31 AND NO I&C SCI 33").unwrap();
        assert_eq!(
            tree,
            QueryNode::group(vec![course("I&C SCI 31"), QueryNode::not(course("I&C SCI 33"))])
        );

        let tree = parse_prerequisites("NO ( A OR B )").unwrap();
        assert_eq!(
            tree,
            QueryNode::not(QueryNode::group(vec![QueryNode::or(course("A"), course("B"))]))
        );
    }

    #[test]
    fn test_negation_starts_or_chain() {
        let tree = parse_prerequisites("NO MATH 2A OR MATH 5A").unwrap();
        assert_eq!(
            tree,
            QueryNode::or(QueryNode::not(course("MATH 2A")), course("MATH 5A"))
        );

        let tree = parse_prerequisites("I&C SCI 31 AND MATH 2A OR NO MATH 5A").unwrap();
        assert_eq!(
            tree,
            QueryNode::group(vec![
                course("I&C SCI 31"),
                QueryNode::or(course("MATH 2A"), QueryNode::not(course("MATH 5A"))),
            ])
        );
    }

    #[test]
    fn test_keyword_prefix_is_not_a_keyword() {
        assert_eq!(parse_prerequisites("NOTE 1").unwrap(), course("NOTE 1"));
        assert_eq!(parse_prerequisites("ORG 2 AND ANDES 3").unwrap(), QueryNode::group(vec![
            course("ORG 2"),
            course("ANDES 3"),
        ]));
    }

    #[test]
    fn test_annotations() {
        assert_eq!(
            parse_prerequisites("STATS 7 recommended").unwrap(),
            QueryNode::recommended(course("STATS 7"))
        );
        assert_eq!(
            parse_prerequisites("MATH 2B ( coreq )").unwrap(),
            QueryNode::coreq(course("MATH 2B"))
        );
        assert_eq!(
            parse_prerequisites("MATH 2A OR MATH 5A COREQ").unwrap(),
            QueryNode::or(course("MATH 2A"), QueryNode::coreq(course("MATH 5A")))
        );
    }

    #[test]
    fn test_annotation_on_group_applies_to_last_member() {
        let tree = parse_prerequisites("( A AND B ) coreq AND C").unwrap();
        assert_eq!(
            tree,
            QueryNode::group(vec![
                QueryNode::group(vec![course("A"), QueryNode::coreq(course("B"))]),
                course("C"),
            ])
        );
    }

    #[test]
    fn test_grade_qualifiers_are_dropped() {
        let tree = parse_prerequisites(
            "I&C SCI 31 min grade = C AND I&C SCI 32 ( min grade = C- ) AND MATH 2A grade = B or better",
        )
        .unwrap();
        assert_eq!(
            tree,
            QueryNode::group(vec![course("I&C SCI 31"), course("I&C SCI 32"), course("MATH 2A")])
        );
    }

    #[test]
    fn test_grade_or_better_does_not_swallow_or() {
        let tree = parse_prerequisites("MATH 2A grade = C OR MATH 5A").unwrap();
        assert_eq!(tree, QueryNode::or(course("MATH 2A"), course("MATH 5A")));
    }

    #[test]
    fn test_dropped_clauses() {
        assert_eq!(
            parse_prerequisites("I&C SCI 31 AND NO REPEATS ALLOWED").unwrap(),
            course("I&C SCI 31")
        );
        assert_eq!(
            parse_prerequisites("LOWER DIVISION WRITING AND I&C SCI 31").unwrap(),
            course("I&C SCI 31")
        );
        assert_eq!(
            parse_prerequisites("I&C SCI 31 NO REPEATS ALLOWED").unwrap(),
            course("I&C SCI 31")
        );
    }

    #[test]
    fn test_dangling_and_is_an_error() {
        let err = parse_prerequisites("A AND").unwrap_err();
        assert_eq!(
            err,
            QueryError::Parse {
                position: 2,
                message: "unexpected input at: 'AND'".to_string(),
            }
        );
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert!(matches!(
            parse_prerequisites("( A AND B"),
            Err(QueryError::Parse { .. })
        ));
        assert!(matches!(
            parse_prerequisites("A )"),
            Err(QueryError::Parse { position: 2, .. })
        ));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ÉCOLE 101", 3), "ÉCO");
        assert_eq!(truncate("abc", 20), "abc");
    }
}
