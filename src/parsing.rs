//! Conversion of raw feature text into the internal document tree.
//!
//! This module is the only place that touches the `gherkin` crate. The rest
//! of the slicer works on [`FeatureDocument`] values, so swapping the
//! grammar parser is a one-module change.

use gherkin::{Feature, GherkinEnv};

use crate::document::{
    BackgroundBlock, ExampleTable, FeatureChild, FeatureDocument, OutlineBlock, ScenarioBlock,
};
use crate::errors::ParseError;
use crate::types::Step;

/// Parse feature text into a [`FeatureDocument`].
///
/// # Errors
///
/// Returns [`ParseError::InvalidFeature`] when the text is not valid Gherkin
/// or contains no feature declaration.
pub(crate) fn parse_document(feature_content: &str) -> Result<FeatureDocument, ParseError> {
    let feature = Feature::parse(feature_content, GherkinEnv::default())?;
    Ok(document_from_feature(&feature))
}

fn document_from_feature(feature: &Feature) -> FeatureDocument {
    let mut children = Vec::with_capacity(feature.scenarios.len() + 1);
    if let Some(background) = feature.background.as_ref() {
        children.push(FeatureChild::Background(BackgroundBlock {
            steps: convert_steps(&background.steps),
            line: background.position.line,
        }));
    }
    for scenario in &feature.scenarios {
        children.push(child_from_scenario(scenario));
    }
    // Children must reach the slicer in declaration order. Stable sort, so
    // ties keep parser order.
    children.sort_by_key(FeatureChild::line);

    FeatureDocument {
        name: feature.name.clone(),
        tags: convert_tags(&feature.tags),
        children,
    }
}

fn child_from_scenario(scenario: &gherkin::Scenario) -> FeatureChild {
    let name = scenario.name.clone();
    let tags = convert_tags(&scenario.tags);
    let steps = convert_steps(&scenario.steps);
    let line = scenario.position.line;

    if is_outline(scenario) {
        let tables = scenario
            .examples
            .iter()
            .filter_map(|examples| examples.table.as_ref())
            .map(|table| ExampleTable {
                rows: table.rows.clone(),
            })
            .collect();
        FeatureChild::Outline(OutlineBlock {
            name,
            tags,
            steps,
            tables,
            line,
        })
    } else {
        FeatureChild::Scenario(ScenarioBlock {
            name,
            tags,
            steps,
            line,
        })
    }
}

fn is_outline(scenario: &gherkin::Scenario) -> bool {
    scenario.keyword == "Scenario Outline" || !scenario.examples.is_empty()
}

/// Normalise parsed tags to `@`-prefixed strings.
///
/// Order is preserved and duplicates are kept; filtering decides what to do
/// with them, not conversion.
pub(crate) fn convert_tags(tags: &[String]) -> Vec<String> {
    tags.iter().map(|tag| format_tag(tag)).collect()
}

/// Prefix a tag with `@` unless it already carries one.
pub(crate) fn format_tag(tag: &str) -> String {
    if tag.starts_with('@') {
        tag.to_string()
    } else {
        format!("@{tag}")
    }
}

fn convert_steps(steps: &[gherkin::Step]) -> Vec<Step> {
    steps
        .iter()
        .map(|step| Step {
            text: format!("{} {}", step.keyword.trim(), step.value),
            table: step.table.as_ref().map(|table| table.rows.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{format_tag, parse_document};
    use crate::document::{FeatureChild, FeatureDocument};

    fn parse(feature: &str) -> FeatureDocument {
        parse_document(feature).unwrap_or_else(|err| panic!("parse feature: {err}"))
    }

    #[rstest]
    #[case("smoke", "@smoke")]
    #[case("@smoke", "@smoke")]
    #[case("UI-critical", "@UI-critical")]
    fn formats_tags_with_at_prefix(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_tag(input), expected);
    }

    #[test]
    fn builds_children_in_document_order() {
        let document = parse(
            "@shop\n\
             Feature: Checkout\n\
             \n\
             Background:\n\
             \x20 Given a signed-in customer\n\
             \n\
             Scenario: Empty basket\n\
             \x20 Then the total is 0\n\
             \n\
             Scenario Outline: Priced basket\n\
             \x20 Given <count> apples\n\
             \n\
             \x20 Examples:\n\
             \x20   | count |\n\
             \x20   | 1     |\n",
        );

        assert_eq!(document.name, "Checkout");
        assert_eq!(document.tags, vec!["@shop".to_string()]);
        match document.children.as_slice() {
            [
                FeatureChild::Background(background),
                FeatureChild::Scenario(scenario),
                FeatureChild::Outline(outline),
            ] => {
                assert_eq!(
                    background.steps.iter().map(|s| s.text.as_str()).collect::<Vec<_>>(),
                    vec!["Given a signed-in customer"],
                );
                assert_eq!(scenario.name, "Empty basket");
                assert_eq!(outline.name, "Priced basket");
                assert_eq!(outline.tables.len(), 1);
                assert!(background.line < scenario.line);
                assert!(scenario.line < outline.line);
            }
            other => panic!("unexpected children: {other:?}"),
        }
    }

    #[test]
    fn converted_steps_carry_keyword_and_data_table() {
        let document = parse(
            "Feature: Stock\n\
             \n\
             Scenario: Restock\n\
             \x20 Given the shelf holds:\n\
             \x20   | item   | count |\n\
             \x20   | apples | 2     |\n\
             \x20 When the delivery arrives\n",
        );

        let Some(FeatureChild::Scenario(scenario)) = document.children.first() else {
            panic!("expected one scenario, got {:?}", document.children);
        };
        let Some(first) = scenario.steps.first() else {
            panic!("expected steps on the scenario");
        };
        assert_eq!(first.text, "Given the shelf holds:");
        assert_eq!(
            first.table,
            Some(vec![
                vec!["item".to_string(), "count".to_string()],
                vec!["apples".to_string(), "2".to_string()],
            ]),
        );
        let texts: Vec<_> = scenario.steps.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Given the shelf holds:", "When the delivery arrives"],
        );
    }

    #[test]
    fn scenario_with_examples_classifies_as_outline() {
        let document = parse(
            "Feature: Stock\n\
             \n\
             Scenario Outline: Count <count>\n\
             \x20 Given <count> apples\n\
             \n\
             \x20 Examples:\n\
             \x20   | count |\n\
             \x20   | 1     |\n\
             \x20   | 2     |\n",
        );

        let Some(FeatureChild::Outline(outline)) = document.children.first() else {
            panic!("expected an outline, got {:?}", document.children);
        };
        let Some(table) = outline.tables.first() else {
            panic!("expected an examples table");
        };
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn rejects_text_without_a_feature() {
        let result = parse_document("this is not gherkin at all\n");
        assert!(result.is_err(), "expected a parse failure");
    }
}
