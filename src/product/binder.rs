use log::{debug, info};

use super::{IndicatorSource, Product, ProductSource};
use crate::scene::{NodeId, SceneGraph};

/// Node names a loaded model uses to expose its parts
pub struct PartNames;

impl PartNames {
    pub const BODY: &'static str = "Body";
    pub const DOOR_PIVOT: &'static str = "DoorPivot";
    pub const DOOR: &'static str = "Door";
    pub const INDICATOR: &'static str = "Indicator";

    /// Parts a model must provide before it can replace the placeholder
    pub const REQUIRED: [&'static str; 3] = [Self::BODY, Self::DOOR_PIVOT, Self::DOOR];
}

/// Resolves the named parts under `loaded_root` into a new product
///
/// Returns None and leaves the scene untouched unless body, door pivot and
/// door are all present. On success the current product's root is hidden.
/// A missing indicator keeps the current one bound, even though it now sits
/// under a hidden root.
pub fn rebind(scene: &mut SceneGraph, current: &Product, loaded_root: NodeId) -> Option<Product> {
    let find = |name| scene.find_by_name(loaded_root, name);

    let (Some(body), Some(door_pivot), Some(door)) = (
        find(PartNames::BODY),
        find(PartNames::DOOR_PIVOT),
        find(PartNames::DOOR),
    ) else {
        debug!("model lacks required parts {:?}", PartNames::REQUIRED);
        return None;
    };

    let (indicator, indicator_source) = match find(PartNames::INDICATOR) {
        Some(node) => (node, IndicatorSource::Model),
        None => {
            info!("model has no {} node, keeping current indicator", PartNames::INDICATOR);
            (current.indicator, IndicatorSource::Placeholder)
        }
    };

    scene.node_mut(current.root).visible = false;

    Some(Product {
        root: loaded_root,
        body,
        door_pivot,
        door,
        indicator,
        source: ProductSource::Loaded {
            indicator: indicator_source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{build_placeholder, PlaceholderDimensions};
    use crate::scene::{Material, MeshData};

    fn model(scene: &mut SceneGraph, names: &[&str]) -> NodeId {
        let root = scene.add_group(scene.root(), Some("Model"));
        for name in names {
            scene.add_mesh(root, Some(name), MeshData::plane(1.0, 1.0), Material::default());
        }
        root
    }

    #[test]
    fn test_rebind_complete_model() {
        let mut scene = SceneGraph::new();
        let placeholder = build_placeholder(&mut scene, &PlaceholderDimensions::default());
        let root = model(&mut scene, &["Body", "DoorPivot", "Door", "Indicator"]);

        let product = rebind(&mut scene, &placeholder, root).unwrap();
        assert_eq!(product.root, root);
        assert_eq!(product.indicator, scene.find_by_name(root, "Indicator").unwrap());
        assert_eq!(
            product.source,
            ProductSource::Loaded { indicator: IndicatorSource::Model }
        );
        assert!(!scene.node(placeholder.root).visible);
    }

    #[test]
    fn test_rebind_missing_required_part_keeps_scene() {
        let mut scene = SceneGraph::new();
        let placeholder = build_placeholder(&mut scene, &PlaceholderDimensions::default());
        let root = model(&mut scene, &["Body", "Door", "Indicator"]);

        assert!(rebind(&mut scene, &placeholder, root).is_none());
        assert!(scene.node(placeholder.root).visible);
    }

    #[test]
    fn test_rebind_without_indicator_borrows_placeholder() {
        let mut scene = SceneGraph::new();
        let placeholder = build_placeholder(&mut scene, &PlaceholderDimensions::default());
        let root = model(&mut scene, &["Body", "DoorPivot", "Door"]);

        let product = rebind(&mut scene, &placeholder, root).unwrap();
        assert_eq!(product.indicator, placeholder.indicator);
        assert_eq!(
            product.source,
            ProductSource::Loaded { indicator: IndicatorSource::Placeholder }
        );
    }
}
