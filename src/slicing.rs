//! The core expansion algorithm: feature text in, scenario records out.
//!
//! A single forward walk over the feature's children folds the current
//! background steps along, emits one record per plain scenario, and expands
//! each scenario outline into one record per example row with `<name>`
//! placeholders substituted from the example table.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{ExampleTable, FeatureChild, FeatureDocument, OutlineBlock};
use crate::errors::ParseError;
use crate::parsing::{self, convert_tags};
use crate::types::{SingleScenario, Step};

/// Matches `<placeholder>` tokens in outline step text.
///
/// The name must not start with whitespace and must not contain `>`, the
/// same token shape the examples table headers use. The pattern is a
/// compile-time constant, so construction cannot fail.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^>\s][^>]*)>").unwrap_or_else(|_| unreachable!()));

/// Filters applied while slicing a feature.
///
/// The default selects everything: no line restriction and no tag filters.
#[derive(Debug, Clone, Default)]
pub struct SliceOptions {
    /// Restrict output to the scenario or outline declared on this 1-based
    /// line. No scenario matching the line yields an empty result.
    pub scenario_line: Option<usize>,
    /// When non-empty, a scenario is emitted only if at least one of its
    /// tags matches one of these (case-insensitive; `@` optional).
    pub include_tags: Vec<String>,
    /// A scenario carrying any of these tags is never emitted, regardless
    /// of include matches (case-insensitive; `@` optional).
    pub exclude_tags: Vec<String>,
}

/// Slice feature text into self-contained single-scenario records.
///
/// Records are returned in document order. Scenario outlines contribute one
/// record per data row of their first examples table, with placeholders in
/// step text replaced by that row's values. Background steps accumulate
/// along the walk: each scenario inherits the steps of the most recent
/// background block declared before it.
///
/// # Errors
///
/// Returns [`ParseError`] when the text is not valid Gherkin, contains no
/// feature, or declares a scenario outline without an examples table. A
/// failure yields no partial output.
///
/// # Examples
///
/// ```
/// use feature_slicer::{slice_feature, SliceOptions};
///
/// let feature = "\
/// Feature: Checkout
///
///   Scenario Outline: Priced basket
///     Given <count> apples
///     Then the total is <total>
///
///     Examples:
///       | count | total |
///       | 1     | 30    |
///       | 2     | 60    |
/// ";
///
/// let scenarios = slice_feature(feature, &SliceOptions::default())?;
/// assert_eq!(scenarios.len(), 2);
/// let first = scenarios.first().map(|s| s.steps.clone()).unwrap_or_default();
/// assert_eq!(first.first().map(|s| s.text.as_str()), Some("Given 1 apples"));
/// # Ok::<(), feature_slicer::ParseError>(())
/// ```
pub fn slice_feature(
    feature_content: &str,
    options: &SliceOptions,
) -> Result<Vec<SingleScenario>, ParseError> {
    let document = parsing::parse_document(feature_content)?;
    slice_document(&document, options)
}

/// Walk a parsed document and emit the filtered scenario records.
pub(crate) fn slice_document(
    document: &FeatureDocument,
    options: &SliceOptions,
) -> Result<Vec<SingleScenario>, ParseError> {
    let include_tags = convert_tags(&options.include_tags);
    let exclude_tags = convert_tags(&options.exclude_tags);

    let mut scenarios = Vec::new();
    // Fold accumulator: the steps of the most recent background block seen
    // so far on this walk.
    let mut background_steps: Vec<Step> = Vec::new();

    for child in &document.children {
        match child {
            FeatureChild::Background(background) => {
                background_steps = background.steps.clone();
            }
            FeatureChild::Scenario(scenario) => {
                if !line_matches(options.scenario_line, scenario.line) {
                    continue;
                }
                if !passes_tag_filter(&scenario.tags, &include_tags, &exclude_tags) {
                    continue;
                }
                scenarios.push(SingleScenario {
                    feature_name: document.name.clone(),
                    name: scenario.name.clone(),
                    feature_tags: document.tags.clone(),
                    tags: scenario.tags.clone(),
                    background_steps: background_steps.clone(),
                    steps: scenario.steps.clone(),
                });
            }
            FeatureChild::Outline(outline) => {
                if !line_matches(options.scenario_line, outline.line) {
                    continue;
                }
                scenarios.extend(expand_outline(
                    outline,
                    document,
                    &background_steps,
                    &include_tags,
                    &exclude_tags,
                )?);
            }
        }
    }
    Ok(scenarios)
}

fn line_matches(requested: Option<usize>, declared: usize) -> bool {
    requested.is_none_or(|line| line == declared)
}

/// Expand one scenario outline into a record per example row.
///
/// The tag filter runs once for the outline; a filtered-out outline
/// produces no rows at all.
fn expand_outline(
    outline: &OutlineBlock,
    document: &FeatureDocument,
    background_steps: &[Step],
    include_tags: &[String],
    exclude_tags: &[String],
) -> Result<Vec<SingleScenario>, ParseError> {
    if !passes_tag_filter(&outline.tags, include_tags, exclude_tags) {
        return Ok(Vec::new());
    }

    let Some(table) = outline.tables.first() else {
        return Err(ParseError::OutlineWithoutExamples {
            scenario: outline.name.clone(),
        });
    };
    let columns = ExampleColumns::from_table(table);

    let mut scenarios = Vec::with_capacity(columns.row_count());
    for row in 0..columns.row_count() {
        scenarios.push(SingleScenario {
            feature_name: document.name.clone(),
            name: outline.name.clone(),
            feature_tags: document.tags.clone(),
            tags: outline.tags.clone(),
            background_steps: background_steps.to_vec(),
            steps: substitute_placeholders(&outline.steps, &columns, row),
        });
    }
    Ok(scenarios)
}

/// Replace `<name>` tokens in each step with the row's value for `name`.
///
/// Substitution is a single pass keyed by exact delimited tokens, so one
/// header being a prefix of another (`id` and `id2`) cannot change the
/// outcome. Tokens naming no column are left verbatim; data tables pass
/// through untouched.
fn substitute_placeholders(steps: &[Step], columns: &ExampleColumns, row: usize) -> Vec<Step> {
    steps
        .iter()
        .map(|step| {
            let text = PLACEHOLDER_RE.replace_all(&step.text, |caps: &regex::Captures<'_>| {
                let token = caps.get(0).map_or("", |m| m.as_str());
                let name = caps.get(1).map_or("", |m| m.as_str());
                columns
                    .value(name, row)
                    .map_or_else(|| token.to_string(), ToString::to_string)
            });
            Step {
                text: text.into_owned(),
                table: step.table.clone(),
            }
        })
        .collect()
}

/// Decide whether a scenario's tags pass the include/exclude filters.
///
/// An untagged scenario passes only when no include tags are given. A
/// tagged scenario must match at least one include tag (if any are given),
/// and any match against an exclude tag vetoes it unconditionally. Matching
/// is ASCII-case-insensitive exact comparison.
fn passes_tag_filter(
    scenario_tags: &[String],
    include_tags: &[String],
    exclude_tags: &[String],
) -> bool {
    log::debug!(
        "tag filter: scenario={scenario_tags:?} include={include_tags:?} exclude={exclude_tags:?}"
    );

    if scenario_tags.is_empty() {
        return include_tags.is_empty();
    }

    let mut included = include_tags.is_empty();
    for tag in scenario_tags {
        if exclude_tags
            .iter()
            .any(|excluded| tag.eq_ignore_ascii_case(excluded))
        {
            return false;
        }
        if include_tags
            .iter()
            .any(|include| tag.eq_ignore_ascii_case(include))
        {
            included = true;
        }
    }
    included
}

/// An examples table keyed by column header.
///
/// Column order is fixed to table order and every column holds one value
/// per data row, so the row count is the first column's value count. Ragged
/// tables are not re-validated; short rows read as empty cells.
struct ExampleColumns {
    columns: Vec<(String, Vec<String>)>,
}

impl ExampleColumns {
    fn from_table(table: &ExampleTable) -> Self {
        let Some((header, data_rows)) = table.rows.split_first() else {
            return Self {
                columns: Vec::new(),
            };
        };
        let columns = header
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let values = data_rows
                    .iter()
                    .map(|row| row.get(index).cloned().unwrap_or_default())
                    .collect();
                (name.clone(), values)
            })
            .collect();
        Self { columns }
    }

    fn row_count(&self) -> usize {
        self.columns
            .first()
            .map_or(0, |(_, values)| values.len())
    }

    fn value(&self, name: &str, row: usize) -> Option<&str> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .and_then(|(_, values)| values.get(row))
            .map(String::as_str)
    }
}
