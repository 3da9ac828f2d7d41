use serde::Serialize;

use crate::filter::{FilterId, PresetOperator};

/// What the builder shows after a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum BuilderView {
    Summary(Summary),
    Edit(EditForm),
}

impl BuilderView {
    pub fn is_summary(&self) -> bool {
        matches!(self, BuilderView::Summary(_))
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        match self {
            BuilderView::Edit(form) => Some(form),
            BuilderView::Summary(_) => None,
        }
    }
}

/// The committed filters of the working map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub values_header: String,
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub filter_id: FilterId,
    pub facet_id: String,
    pub facet_label: String,
    pub operator_label: String,
    pub values_label: String,
}

/// The form for editing one filter slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditForm {
    pub filter_id: FilterId,
    pub facet_id: String,
    pub title: String,
    pub operator: PresetOperator,
    /// `(machine name, label)` pairs, or `None` when the operator is fixed.
    pub operator_options: Option<Vec<(&'static str, &'static str)>>,
    /// Whether the form has a value input.
    pub value_input: bool,
    pub values: Vec<String>,
    pub is_new: bool,
}
