//! Internal document tree consumed by the slicer.
//!
//! The tree mirrors the shape of a parsed feature while staying independent
//! of the grammar crate: only [`crate::parsing`] knows how to build one.
//! Children are an explicit sum type so the slicer dispatches with an
//! exhaustive `match` rather than runtime type inspection.

use crate::types::Step;

/// A parsed feature with its children in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeatureDocument {
    pub(crate) name: String,
    /// Feature-level tags, `@`-prefixed, declaration order, duplicates kept.
    pub(crate) tags: Vec<String>,
    /// Background, scenario, and outline blocks ordered by source line.
    pub(crate) children: Vec<FeatureChild>,
}

/// One top-level block inside a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FeatureChild {
    Background(BackgroundBlock),
    Scenario(ScenarioBlock),
    Outline(OutlineBlock),
}

impl FeatureChild {
    /// 1-based source line of the block's declaration.
    pub(crate) fn line(&self) -> usize {
        match self {
            Self::Background(background) => background.line,
            Self::Scenario(scenario) => scenario.line,
            Self::Outline(outline) => outline.line,
        }
    }
}

/// Steps shared by every scenario declared after this block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BackgroundBlock {
    pub(crate) steps: Vec<Step>,
    pub(crate) line: usize,
}

/// A concrete scenario with literal steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScenarioBlock {
    pub(crate) name: String,
    pub(crate) tags: Vec<String>,
    pub(crate) steps: Vec<Step>,
    pub(crate) line: usize,
}

/// A scenario outline: templated steps plus one table per examples block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutlineBlock {
    pub(crate) name: String,
    pub(crate) tags: Vec<String>,
    /// Steps with `<placeholder>` tokens still in place.
    pub(crate) steps: Vec<Step>,
    /// Example tables in declaration order; only the first is expanded.
    pub(crate) tables: Vec<ExampleTable>,
    pub(crate) line: usize,
}

/// Header row plus data rows of an `Examples:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExampleTable {
    pub(crate) rows: Vec<Vec<String>>,
}
