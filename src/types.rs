//! Public value types produced by feature slicing.
//!
//! `SingleScenario` is the self-contained output record: everything a
//! downstream writer needs to render one scenario without consulting the
//! source feature again.

/// A single resolved scenario step.
///
/// The text carries the step keyword (`Given a basket`), so records remain
/// readable without the surrounding feature. An attached data table is
/// opaque to the slicer and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Keyword and step text, with outline placeholders already substituted.
    pub text: String,
    /// Data table rows attached to the step, if any.
    pub table: Option<Vec<Vec<String>>>,
}

impl Step {
    /// Construct a step without a data table.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            table: None,
        }
    }
}

/// One fully-resolved scenario extracted from a feature.
///
/// Instances own all of their data; nothing aliases back into the parsed
/// document. Feature-level values (`feature_name`, `feature_tags`,
/// `background_steps`) are copied into every record so each one stands
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleScenario {
    /// Name of the feature the scenario was sliced from.
    pub feature_name: String,
    /// Scenario (or scenario outline) name.
    pub name: String,
    /// Tags declared on the parent feature, in declaration order.
    pub feature_tags: Vec<String>,
    /// Tags declared on the scenario itself, in declaration order.
    pub tags: Vec<String>,
    /// Steps inherited from the most recent `Background` block.
    pub background_steps: Vec<Step>,
    /// The scenario's own steps, free of `<placeholder>` tokens.
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::Step;

    #[test]
    fn steps_compare_by_text_and_table() {
        let plain = Step::new("Given a basket");
        assert_eq!(plain, Step::new("Given a basket"));
        assert_ne!(plain, Step::new("Given a trolley"));

        let with_table = Step {
            text: "Given a basket".into(),
            table: Some(vec![vec!["apples".into(), "2".into()]]),
        };
        assert_ne!(plain, with_table);
        assert_eq!(with_table, with_table.clone());
    }
}
