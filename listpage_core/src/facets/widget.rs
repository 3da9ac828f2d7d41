//! Facet widgets and their capabilities

use std::fmt;

use serde::{Deserialize, Serialize};

/// The selection strategy of a facet.
///
/// Callers ask widgets what they can do rather than which widget they are.
pub trait Widget: fmt::Debug {
    /// Machine name of the widget.
    fn id(&self) -> &'static str;

    /// Whether values can be combined with the any/all/none operators.
    fn supports_set_operators(&self) -> bool {
        false
    }

    /// Whether a fulltext search through this widget covers all indexed
    /// fulltext fields instead of only the facet's own field.
    fn fulltext_all_fields(&self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct MultiselectWidget;

impl Widget for MultiselectWidget {
    fn id(&self) -> &'static str {
        "oe_list_pages_multiselect"
    }

    fn supports_set_operators(&self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct LinksWidget;

impl Widget for LinksWidget {
    fn id(&self) -> &'static str {
        "links"
    }
}

#[derive(Debug)]
pub struct CheckboxWidget;

impl Widget for CheckboxWidget {
    fn id(&self) -> &'static str {
        "checkbox"
    }
}

#[derive(Debug)]
pub struct DateWidget;

impl Widget for DateWidget {
    fn id(&self) -> &'static str {
        "oe_list_pages_date"
    }
}

#[derive(Debug)]
pub struct FulltextWidget {
    pub all_fields: bool,
}

impl Widget for FulltextWidget {
    fn id(&self) -> &'static str {
        "oe_list_pages_fulltext"
    }

    fn fulltext_all_fields(&self) -> bool {
        self.all_fields
    }
}

/// Serializable widget description stored with a facet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetConfig {
    #[default]
    Multiselect,
    Links,
    Checkbox,
    Date,
    Fulltext {
        #[serde(default = "default_all_fields")]
        all_fields: bool,
    },
}

fn default_all_fields() -> bool {
    true
}

impl WidgetConfig {
    /// Instantiates the widget described by this configuration.
    pub fn instance(&self) -> Box<dyn Widget> {
        match self {
            WidgetConfig::Multiselect => Box::new(MultiselectWidget),
            WidgetConfig::Links => Box::new(LinksWidget),
            WidgetConfig::Checkbox => Box::new(CheckboxWidget),
            WidgetConfig::Date => Box::new(DateWidget),
            WidgetConfig::Fulltext { all_fields } => Box::new(FulltextWidget {
                all_fields: *all_fields,
            }),
        }
    }
}
