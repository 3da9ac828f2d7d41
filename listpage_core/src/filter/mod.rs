//! Preset filters, their ids and the maps that hold them

mod identity;
mod map;
mod preset;

pub use identity::{FilterId, derive_filter_id};
pub use map::FilterConfigurationMap;
pub use preset::{OperatorError, PresetFilter, PresetOperator};
