//! Fuzzy query compilation
//!
//! Turns the ordered comparison list into one Solr query string:
//! one fuzzy term per value, OR within a field group, the configured
//! operator across groups. Plain string assembly; the query surface is
//! small and fixed-shape.

use crate::comparison::DuplicateComparison;
use crate::config::DetectionConfig;

/// Escape Lucene query syntax metacharacters with a backslash.
///
/// Covers `\ + - ! ( ) : ^ [ ] " { } ~ * ? | & ; /` and whitespace,
/// the set the backend itself escapes. Applied to values only, never
/// to index field names.
pub fn escape_query_chars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        let is_special = matches!(
            c,
            '\\' | '+'
                | '-'
                | '!'
                | '('
                | ')'
                | ':'
                | '^'
                | '['
                | ']'
                | '"'
                | '{'
                | '}'
                | '~'
                | '*'
                | '?'
                | '|'
                | '&'
                | ';'
                | '/'
        ) || c.is_whitespace();
        if is_special {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Mangle a dotted field identifier into its index field name,
/// e.g. `dc.title` → `deduplication_dc_title_keyword`
pub fn index_field_name(field_id: &str, prefix: &str, suffix: &str) -> String {
    format!("{}_{}_{}", prefix, field_id.replace('.', "_"), suffix)
}

/// Compile the comparison list into one query string.
///
/// Comparisons group by field in first-seen order. Every value renders
/// as `indexField:escapedValue~distance`; distance 0 keeps the fuzzy
/// operator (near-exact match, not exact-match syntax). A group is
/// parenthesized when it has more than one term or when the query has
/// more than one group, and a multi-group query gets one outer pair of
/// parentheses.
///
/// Returns `None` for an empty comparison list so the caller can skip
/// the backend instead of sending an ambiguous empty query.
pub fn compile_query(
    comparisons: &[DuplicateComparison],
    config: &DetectionConfig,
) -> Option<String> {
    let mut groups: Vec<(&str, Vec<&DuplicateComparison>)> = Vec::new();
    for comparison in comparisons {
        match groups
            .iter_mut()
            .find(|(field_id, _)| *field_id == comparison.field_id)
        {
            Some((_, group)) => group.push(comparison),
            None => groups.push((comparison.field_id.as_str(), vec![comparison])),
        }
    }

    if groups.is_empty() {
        return None;
    }

    let multi_group = groups.len() > 1;
    let group_exprs: Vec<String> = groups
        .iter()
        .map(|(field_id, group)| {
            let index_field =
                index_field_name(field_id, &config.field_prefix, &config.field_suffix);
            let terms: Vec<String> = group
                .iter()
                .map(|c| {
                    format!(
                        "{}:{}~{}",
                        index_field,
                        escape_query_chars(&c.value),
                        c.distance
                    )
                })
                .collect();
            let joined = terms.join(" OR ");
            if terms.len() > 1 || multi_group {
                format!("({})", joined)
            } else {
                joined
            }
        })
        .collect();

    let query = group_exprs.join(&format!(" {} ", config.query_operator.as_str()));
    Some(if multi_group {
        format!("({})", query)
    } else {
        query
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryLogic;

    fn comparison(field_id: &str, value: &str, distance: u32) -> DuplicateComparison {
        DuplicateComparison {
            field_id: field_id.to_string(),
            value: value.to_string(),
            distance,
        }
    }

    #[test]
    fn test_empty_list_compiles_to_none() {
        assert_eq!(compile_query(&[], &DetectionConfig::default()), None);
    }

    #[test]
    fn test_single_term_has_no_parentheses() {
        let query = compile_query(
            &[comparison("dc.title", "thisisawonderfultitle", 1)],
            &DetectionConfig::default(),
        )
        .unwrap();
        assert_eq!(query, "deduplication_dc_title_keyword:thisisawonderfultitle~1");
    }

    #[test]
    fn test_multi_value_group_joins_with_or() {
        let query = compile_query(
            &[
                comparison("dc.title", "one", 1),
                comparison("dc.title", "two", 1),
            ],
            &DetectionConfig::default(),
        )
        .unwrap();
        assert_eq!(
            query,
            "(deduplication_dc_title_keyword:one~1 OR deduplication_dc_title_keyword:two~1)"
        );
    }

    #[test]
    fn test_multi_group_wraps_every_group_and_the_whole_query() {
        let query = compile_query(
            &[
                comparison("dc.title", "thetitle", 1),
                comparison("local.custom", "a/1", 0),
                comparison("local.custom", "a/2", 0),
            ],
            &DetectionConfig::default(),
        )
        .unwrap();
        assert_eq!(
            query,
            "((deduplication_dc_title_keyword:thetitle~1) AND \
             (deduplication_local_custom_keyword:a\\/1~0 OR \
             deduplication_local_custom_keyword:a\\/2~0))"
        );
    }

    #[test]
    fn test_configured_or_operator_joins_groups() {
        let config = DetectionConfig {
            query_operator: QueryLogic::Or,
            ..Default::default()
        };
        let query = compile_query(
            &[
                comparison("dc.title", "thetitle", 0),
                comparison("local.custom", "other", 0),
            ],
            &config,
        )
        .unwrap();
        assert_eq!(
            query,
            "((deduplication_dc_title_keyword:thetitle~0) OR \
             (deduplication_local_custom_keyword:other~0))"
        );
    }

    #[test]
    fn test_distance_zero_keeps_fuzzy_syntax() {
        let query = compile_query(
            &[comparison("dc.title", "exactish", 0)],
            &DetectionConfig::default(),
        )
        .unwrap();
        assert!(query.ends_with("~0"));
    }

    #[test]
    fn test_interleaved_comparisons_group_by_first_seen_field() {
        let query = compile_query(
            &[
                comparison("dc.title", "a", 0),
                comparison("local.custom", "b", 0),
                comparison("dc.title", "c", 0),
            ],
            &DetectionConfig::default(),
        )
        .unwrap();
        assert_eq!(
            query,
            "((deduplication_dc_title_keyword:a~0 OR deduplication_dc_title_keyword:c~0) AND \
             (deduplication_local_custom_keyword:b~0))"
        );
    }

    #[test]
    fn test_custom_prefix_and_suffix() {
        let config = DetectionConfig {
            field_prefix: "dedup".to_string(),
            field_suffix: "token".to_string(),
            ..Default::default()
        };
        let query = compile_query(&[comparison("dc.title", "v", 0)], &config).unwrap();
        assert_eq!(query, "dedup_dc_title_token:v~0");
    }

    #[test]
    fn test_index_field_name_mangles_dots() {
        assert_eq!(
            index_field_name("dc.description.abstract", "deduplication", "keyword"),
            "deduplication_dc_description_abstract_keyword"
        );
    }

    #[test]
    fn test_escape_slash() {
        assert_eq!(escape_query_chars("a/b"), "a\\/b");
    }

    #[test]
    fn test_escape_leaves_clean_values_alone() {
        assert_eq!(escape_query_chars("thisisawonderfultitle"), "thisisawonderfultitle");
    }

    #[test]
    fn test_escape_field_names_never_happens_in_terms() {
        // The colon separating field and value must stay unescaped
        let query = compile_query(
            &[comparison("dc.title", "with:colon", 0)],
            &DetectionConfig::default(),
        )
        .unwrap();
        assert_eq!(query, "deduplication_dc_title_keyword:with\\:colon~0");
    }
}
