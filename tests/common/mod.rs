#![allow(dead_code)]

use product_configurator::loaders::{load_model_from_slice, ModelData};

/// One triangle: (0,0,0), (1,0,0), (0,1,0) as little-endian f32
const TRIANGLE_BASE64: &str = "AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA";

/// Builds a small glTF document with the given part nodes
///
/// Every named part draws the same triangle with one shared red material.
/// `DoorPivot` gets `Door` as its child when both are listed.
pub fn gltf_fixture(parts: &[&str]) -> Vec<u8> {
    let mut nodes = vec![String::new()];
    let mut root_children = Vec::new();
    let door_index = parts.iter().position(|p| *p == "Door").map(|i| i + 1);
    let has_pivot = parts.contains(&"DoorPivot");

    for (i, part) in parts.iter().enumerate() {
        let index = i + 1;
        let node = match *part {
            "DoorPivot" => match door_index {
                Some(door) => format!(
                    r#"{{"name":"DoorPivot","translation":[0.45,0.5,0.5],"children":[{door}]}}"#
                ),
                None => r#"{"name":"DoorPivot","translation":[0.45,0.5,0.5]}"#.to_string(),
            },
            name => format!(r#"{{"name":"{name}","mesh":0}}"#),
        };
        nodes.push(node);
        if !(*part == "Door" && has_pivot) {
            root_children.push(index.to_string());
        }
    }
    nodes[0] = format!(
        r#"{{"name":"Product","children":[{}]}}"#,
        root_children.join(",")
    );

    let json = format!(
        r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [{{ "nodes": [0] }}],
  "nodes": [{nodes}],
  "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": 0 }}, "material": 0 }}] }}],
  "materials": [{{ "pbrMetallicRoughness": {{ "baseColorFactor": [1.0, 0.0, 0.0, 1.0], "metallicFactor": 0.0, "roughnessFactor": 1.0 }} }}],
  "buffers": [{{ "byteLength": 36, "uri": "data:application/octet-stream;base64,{TRIANGLE_BASE64}" }}],
  "bufferViews": [{{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }}],
  "accessors": [{{ "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3", "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] }}]
}}"#,
        nodes = nodes.join(",")
    );
    json.into_bytes()
}

pub fn load_fixture(parts: &[&str]) -> ModelData {
    load_model_from_slice(&gltf_fixture(parts)).expect("fixture should parse")
}

pub fn full_model() -> ModelData {
    load_fixture(&["Body", "DoorPivot", "Door", "Indicator"])
}
