use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Deserialize)]
struct EntityTypeEntry {
    name: String,
    parent: Option<String>,
    id: Option<i32>,
}

#[derive(Deserialize)]
struct AttributeModifier {
    name: String,
    uuid: String,
}

fn load<T: serde::de::DeserializeOwned>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let contents =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Cannot read {:?}: {}", path, e));
    serde_json::from_str(&contents).unwrap_or_else(|e| panic!("Invalid JSON in {:?}: {}", path, e))
}

fn variant_name(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn write_entity_types_1_21_2(out: &mut fs::File, types: &[EntityTypeEntry]) {
    writeln!(out, "/// Entity types of protocol 768, abstract types included.").unwrap();
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]").unwrap();
    writeln!(out, "pub enum EntityTypes1_21_2 {{").unwrap();
    for t in types {
        writeln!(out, "    {},", variant_name(&t.name)).unwrap();
    }
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "impl EntityTypes1_21_2 {{").unwrap();
    writeln!(
        out,
        "    pub const ALL: [EntityTypes1_21_2; {}] = [",
        types.len()
    )
    .unwrap();
    for t in types {
        writeln!(out, "        EntityTypes1_21_2::{},", variant_name(&t.name)).unwrap();
    }
    writeln!(out, "    ];").unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "    /// Concrete type for a protocol id."
    )
    .unwrap();
    writeln!(out, "    pub fn from_id(id: i32) -> Option<Self> {{").unwrap();
    writeln!(out, "        match id {{").unwrap();
    for t in types {
        if let Some(id) = t.id {
            writeln!(
                out,
                "            {} => Some(EntityTypes1_21_2::{}),",
                id,
                variant_name(&t.name)
            )
            .unwrap();
        }
    }
    writeln!(out, "            _ => None,").unwrap();
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "impl rewind_types::EntityType for EntityTypes1_21_2 {{").unwrap();
    writeln!(out, "    fn ordinal(self) -> usize {{").unwrap();
    writeln!(out, "        self as usize").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    fn parent(self) -> Option<Self> {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for t in types {
        match &t.parent {
            Some(parent) => writeln!(
                out,
                "            EntityTypes1_21_2::{} => Some(EntityTypes1_21_2::{}),",
                variant_name(&t.name),
                variant_name(parent)
            )
            .unwrap(),
            None => writeln!(
                out,
                "            EntityTypes1_21_2::{} => None,",
                variant_name(&t.name)
            )
            .unwrap(),
        }
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    fn id(self) -> Option<i32> {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for t in types {
        let id = t.id.map_or("None".to_string(), |id| format!("Some({})", id));
        writeln!(
            out,
            "            EntityTypes1_21_2::{} => {},",
            variant_name(&t.name),
            id
        )
        .unwrap();
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "    fn name(self) -> &'static str {{").unwrap();
    writeln!(out, "        match self {{").unwrap();
    for t in types {
        writeln!(
            out,
            "            EntityTypes1_21_2::{} => \"{}\",",
            variant_name(&t.name),
            t.name
        )
        .unwrap();
    }
    writeln!(out, "        }}").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
}

fn write_entity_types_1_21(out: &mut fs::File, names: &[String]) {
    writeln!(out, "/// Map an entity type name to its protocol 767 id.").unwrap();
    writeln!(
        out,
        "pub fn entity_type_id_1_21(name: &str) -> Option<i32> {{"
    )
    .unwrap();
    writeln!(out, "    match name {{").unwrap();
    for (id, name) in names.iter().enumerate() {
        writeln!(out, "        \"{}\" => Some({}),", name, id).unwrap();
    }
    writeln!(out, "        _ => None,").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();

    writeln!(out, "/// Map a protocol 767 entity type id to its name.").unwrap();
    writeln!(
        out,
        "pub fn entity_type_name_1_21(id: i32) -> Option<&'static str> {{"
    )
    .unwrap();
    writeln!(out, "    match id {{").unwrap();
    for (id, name) in names.iter().enumerate() {
        writeln!(out, "        {} => Some(\"{}\"),", id, name).unwrap();
    }
    writeln!(out, "        _ => None,").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
}

fn write_translations(out: &mut fs::File, translations: &BTreeMap<String, String>) {
    writeln!(
        out,
        "/// English text for translation keys unknown to a 1.21 client."
    )
    .unwrap();
    writeln!(
        out,
        "pub fn translation_fallback_1_21_2(key: &str) -> Option<&'static str> {{"
    )
    .unwrap();
    writeln!(out, "    match key {{").unwrap();
    for (key, text) in translations {
        writeln!(out, "        {:?} => Some({:?}),", key, text).unwrap();
    }
    writeln!(out, "        _ => None,").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
}

fn write_attribute_modifiers(out: &mut fs::File, modifiers: &BTreeMap<String, AttributeModifier>) {
    writeln!(
        out,
        "/// Legacy (name, uuid) of a 1.21 attribute modifier id."
    )
    .unwrap();
    writeln!(
        out,
        "pub fn attribute_modifier_1_21(id: &str) -> Option<(&'static str, &'static str)> {{"
    )
    .unwrap();
    writeln!(out, "    match id {{").unwrap();
    for (id, modifier) in modifiers {
        writeln!(
            out,
            "        {:?} => Some(({:?}, {:?})),",
            id, modifier.name, modifier.uuid
        )
        .unwrap();
    }
    writeln!(out, "        _ => None,").unwrap();
    writeln!(out, "    }}").unwrap();
    writeln!(out, "}}").unwrap();
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("data");
    let out_dir = std::env::var("OUT_DIR").unwrap();

    let types_1_21_2: Vec<EntityTypeEntry> = load(&data_dir.join("entity_types/1.21.2.json"));
    let names_1_21: Vec<String> = load(&data_dir.join("entity_types/1.21.json"));
    let translations: BTreeMap<String, String> =
        load(&data_dir.join("translations/1.21.2.json"));
    let modifiers: BTreeMap<String, AttributeModifier> =
        load(&data_dir.join("attribute_modifiers_1_21.json"));

    let out_dir = Path::new(&out_dir);
    let mut out = fs::File::create(out_dir.join("entity_types.rs")).unwrap();
    write_entity_types_1_21_2(&mut out, &types_1_21_2);
    write_entity_types_1_21(&mut out, &names_1_21);

    let mut out = fs::File::create(out_dir.join("translations.rs")).unwrap();
    write_translations(&mut out, &translations);

    let mut out = fs::File::create(out_dir.join("attribute_modifiers.rs")).unwrap();
    write_attribute_modifiers(&mut out, &modifiers);
}
