pub mod components;
pub mod expand;
pub mod relaxation;

pub use components::{label_components, label_components_with, ComponentStats, LabelMap, LabelStrategy};
pub use expand::{expand_labels, expand_labels_in_place};
