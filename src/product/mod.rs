//! The configurable product: which scene nodes act as body, door pivot,
//! door and indicator, and where they came from.

mod binder;
mod placeholder;

pub use binder::{rebind, PartNames};
pub use placeholder::{build_placeholder, PlaceholderDimensions};

use crate::scene::NodeId;

/// Where the indicator of a loaded product comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorSource {
    /// The model provided its own indicator
    Model,
    /// The model had none, the placeholder's indicator stays bound
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSource {
    Placeholder,
    Loaded { indicator: IndicatorSource },
}

/// Live handles to the four logical parts of the active product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Node that carries the idle bob
    pub root: NodeId,
    pub body: NodeId,
    pub door_pivot: NodeId,
    pub door: NodeId,
    pub indicator: NodeId,
    pub source: ProductSource,
}

impl Product {
    pub fn is_placeholder(&self) -> bool {
        self.source == ProductSource::Placeholder
    }

    /// Parts whose materials follow the color, preset and texture selection
    pub fn editable_parts(&self) -> [NodeId; 2] {
        [self.body, self.door]
    }
}
