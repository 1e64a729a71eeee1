//! Ordering engine for selecting releases by version range

pub mod comparator;
pub mod selector;

pub use comparator::{compare, compare_detailed, sort_order, strategy_for, Comparison, Strategy};
pub use selector::{select, OrderedReleaseSet, Selection};
