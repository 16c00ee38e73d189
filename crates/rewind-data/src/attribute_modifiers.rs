//! Legacy names and UUIDs of 1.21 attribute modifier ids.

use uuid::Uuid;

include!(concat!(env!("OUT_DIR"), "/attribute_modifiers.rs"));

fn namespaced(id: &str) -> String {
    if id.contains(':') {
        id.to_string()
    } else {
        format!("minecraft:{}", id)
    }
}

/// The UUID a 1.20.5 client knows this modifier by. Unknown ids get a name-based
/// (MD5, version 3) UUID of the id string.
pub fn modifier_uuid(id: &str) -> Uuid {
    attribute_modifier_1_21(&namespaced(id))
        .and_then(|(_, uuid)| Uuid::parse_str(uuid).ok())
        .unwrap_or_else(|| name_uuid(id))
}

/// Legacy display name of the modifier, if the id is a known vanilla one.
pub fn modifier_name(id: &str) -> Option<&'static str> {
    attribute_modifier_1_21(&namespaced(id)).map(|(name, _)| name)
}

fn name_uuid(id: &str) -> Uuid {
    let digest = md5::compute(id.as_bytes());
    uuid::Builder::from_md5_bytes(digest.0).into_uuid()
}

/// UUID as four big-endian ints, the tag representation.
pub fn uuid_to_int_array(uuid: &Uuid) -> [i32; 4] {
    let bits = uuid.as_u128();
    [
        (bits >> 96) as i32,
        (bits >> 64) as i32,
        (bits >> 32) as i32,
        bits as i32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modifier() {
        let uuid = modifier_uuid("minecraft:armor.boots");
        assert_eq!(uuid.to_string(), "845db27c-c624-495f-8c9f-6020a9a58b6b");
        assert_eq!(modifier_uuid("armor.boots"), uuid);
        assert_eq!(modifier_name("armor.boots"), Some("Armor modifier"));
    }

    #[test]
    fn test_unknown_modifier_is_stable() {
        let a = modifier_uuid("mymod:speed");
        assert_eq!(a, modifier_uuid("mymod:speed"));
        assert_ne!(a, modifier_uuid("mymod:jump"));
        assert_eq!(a.get_version_num(), 3);
        assert_eq!(modifier_name("mymod:speed"), None);
    }

    #[test]
    fn test_int_array() {
        let uuid = Uuid::from_u128(0x00000001_00000002_00000003_FFFFFFFF);
        assert_eq!(uuid_to_int_array(&uuid), [1, 2, 3, -1]);
    }
}
