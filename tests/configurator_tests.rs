use product_configurator::configurator::{MaterialPreset, TextureChoice};
use product_configurator::lighting::{INDICATOR_ON_EMISSIVE, POINT_LIGHT_ON_INTENSITY};
use product_configurator::math::{parse_color, BLACK};
use product_configurator::scene::CHECKER_REPEAT;
use product_configurator::{ConfigError, Session, UiEvent};

#[cfg(test)]
mod configurator_tests {
    use super::*;

    fn editable_materials(session: &Session) -> Vec<product_configurator::scene::Material> {
        let product = session.product();
        [product.body, product.door]
            .into_iter()
            .flat_map(|part| session.scene().part_materials(part))
            .map(|id| session.scene().material(id).clone())
            .collect()
    }

    #[test]
    fn test_base_color_reaches_body_and_door() {
        let mut session = Session::new(800, 600);
        session.set_base_color("#ff0000").unwrap();

        let materials = editable_materials(&session);
        assert!(!materials.is_empty());
        for material in materials {
            assert_eq!(material.color, [1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_base_color_touches_only_color() {
        let mut session = Session::new(800, 600);
        session.set_material_preset("metal").unwrap();
        session.set_texture("checker");
        session.set_light_on(true);
        let before = editable_materials(&session);

        session.set_base_color("#2080ff").unwrap();

        let after = editable_materials(&session);
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(&after) {
            assert_eq!(new.color, parse_color("#2080ff").unwrap());
            let restored = product_configurator::scene::Material {
                color: old.color,
                ..new.clone()
            };
            assert_eq!(&restored, old);
        }
    }

    #[test]
    fn test_texture_round_trip_keeps_other_fields() {
        let mut session = Session::new(800, 600);
        session.set_base_color("#804020").unwrap();
        session.set_material_preset("matte").unwrap();
        let before = editable_materials(&session);

        session.set_texture("checker");
        let textured = editable_materials(&session);
        for (old, new) in before.iter().zip(&textured) {
            assert_eq!(new.texture, Some(session.checker_texture()));
            assert_eq!(
                product_configurator::scene::Material { texture: None, ..new.clone() },
                *old
            );
        }

        session.set_texture("none");
        assert_eq!(editable_materials(&session), before);
    }

    #[test]
    fn test_invalid_color_changes_nothing() {
        let mut session = Session::new(800, 600);
        session.set_base_color("#00ff00").unwrap();

        let err = session.set_base_color("not-a-color").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { .. }));
        for material in editable_materials(&session) {
            assert_eq!(material.color, [0.0, 1.0, 0.0]);
        }
        assert_eq!(session.selection().color, "#00ff00");
    }

    #[test]
    fn test_metal_preset_then_unknown_preset() {
        let mut session = Session::new(800, 600);
        session.set_material_preset("metal").unwrap();

        let err = session.set_material_preset("gold").unwrap_err();
        assert_eq!(err, ConfigError::UnknownPreset("gold".to_string()));

        assert_eq!(session.preset(), MaterialPreset::Metal);
        for material in editable_materials(&session) {
            assert_eq!(material.metalness, 1.0);
            assert_eq!(material.roughness, 0.2);
        }
    }

    #[test]
    fn test_matte_preset() {
        let mut session = Session::new(800, 600);
        session.apply(UiEvent::MaterialPreset("matte".into())).unwrap();
        for material in editable_materials(&session) {
            assert_eq!(material.metalness, 0.0);
            assert_eq!(material.roughness, 0.95);
        }
    }

    #[test]
    fn test_checker_is_shared_and_cleared() {
        let mut session = Session::new(800, 600);
        session.set_texture("checker");

        let checker = session.checker_texture();
        for material in editable_materials(&session) {
            assert_eq!(material.texture, Some(checker));
        }
        let texture = session.scene().texture(checker);
        assert_eq!(texture.dimensions(), (256, 256));
        assert_eq!(texture.repeat, CHECKER_REPEAT);

        session.set_texture("wood");
        assert_eq!(session.texture(), TextureChoice::None);
        for material in editable_materials(&session) {
            assert_eq!(material.texture, None);
        }
    }

    #[test]
    fn test_light_toggle_drives_light_and_indicator() {
        let mut session = Session::new(800, 600);
        let indicator = session.product().indicator;

        session.set_light_on(true);
        assert_eq!(session.lighting().point.intensity, POINT_LIGHT_ON_INTENSITY);
        for id in session.scene().part_materials(indicator) {
            assert_eq!(session.scene().material(id).emissive, INDICATOR_ON_EMISSIVE);
        }

        session.set_light_on(false);
        assert_eq!(session.lighting().point.intensity, 0.0);
        for id in session.scene().part_materials(indicator) {
            assert_eq!(session.scene().material(id).emissive, BLACK);
        }
    }

    #[test]
    fn test_configuration_leaves_animation_alone() {
        let mut session = Session::new(800, 600);
        session.toggle_door();
        session.update();
        let before = *session.animation();

        session.set_base_color("#123456").unwrap();
        session.set_material_preset("plastic").unwrap();
        session.set_texture("checker");
        session.set_light_on(true);

        assert_eq!(*session.animation(), before);
    }

    #[test]
    fn test_operations_are_idempotent() {
        let mut session = Session::new(800, 600);
        session.set_base_color("#336699").unwrap();
        session.set_texture("checker");
        let once = editable_materials(&session);

        session.set_base_color("#336699").unwrap();
        session.set_texture("checker");
        assert_eq!(editable_materials(&session), once);
        assert_eq!(once[0].color, parse_color("#336699").unwrap());
    }
}
