//! Entity type registries of protocols 768 and 767 and the mapping between them.

use std::sync::OnceLock;

use rewind_types::{AncestorTable, EntityType};

include!(concat!(env!("OUT_DIR"), "/entity_types.rs"));

static ANCESTORS_1_21_2: OnceLock<AncestorTable> = OnceLock::new();

impl EntityTypes1_21_2 {
    /// Bitset-backed equivalent of [`EntityType::is_or_has_parent`].
    pub fn is_a(self, ancestor: EntityTypes1_21_2) -> bool {
        ANCESTORS_1_21_2
            .get_or_init(|| AncestorTable::build(&Self::ALL))
            .is_or_has_parent(self.ordinal(), ancestor.ordinal())
    }
}

/// How a 1.21.2 entity type is presented to a 1.21 client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedEntityType {
    pub id: i32,
    /// Translation key shown as the entity's custom name, for types replaced by a lookalike.
    pub display_name: Option<&'static str>,
}

/// Map a 1.21.2 entity type onto the 1.21 registry.
pub fn map_entity_type(ty: EntityTypes1_21_2) -> Option<MappedEntityType> {
    let (name, display_name) = match ty {
        EntityTypes1_21_2::Creaking => ("warden", Some("entity.minecraft.creaking")),
        EntityTypes1_21_2::CreakingTransient => ("text_display", None),
        _ if ty.is_a(EntityTypes1_21_2::AbstractChestBoat) => ("chest_boat", None),
        _ if ty.is_a(EntityTypes1_21_2::AbstractBoat) => ("boat", None),
        _ => (ty.name(), None),
    };
    entity_type_id_1_21(name).map(|id| MappedEntityType { id, display_name })
}

/// Map a 1.21.2 entity type id to a 1.21 entity type id.
pub fn map_entity_type_id(id: i32) -> Option<i32> {
    EntityTypes1_21_2::from_id(id)
        .and_then(map_entity_type)
        .map(|mapped| mapped.id)
}

/// Wood type index a 1.21 boat carries in its entity data.
pub fn boat_type(ty: EntityTypes1_21_2) -> i32 {
    match ty {
        EntityTypes1_21_2::OakBoat | EntityTypes1_21_2::OakChestBoat => 0,
        EntityTypes1_21_2::SpruceBoat | EntityTypes1_21_2::SpruceChestBoat => 1,
        EntityTypes1_21_2::BirchBoat | EntityTypes1_21_2::BirchChestBoat => 2,
        EntityTypes1_21_2::JungleBoat | EntityTypes1_21_2::JungleChestBoat => 3,
        EntityTypes1_21_2::AcaciaBoat | EntityTypes1_21_2::AcaciaChestBoat => 4,
        EntityTypes1_21_2::CherryBoat | EntityTypes1_21_2::CherryChestBoat => 5,
        EntityTypes1_21_2::DarkOakBoat | EntityTypes1_21_2::DarkOakChestBoat => 6,
        EntityTypes1_21_2::MangroveBoat | EntityTypes1_21_2::MangroveChestBoat => 7,
        EntityTypes1_21_2::BambooRaft | EntityTypes1_21_2::BambooChestRaft => 8,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_roundtrip_through_names() {
        for ty in EntityTypes1_21_2::ALL {
            if let Some(id) = ty.id() {
                assert_eq!(EntityTypes1_21_2::from_id(id), Some(ty));
            }
        }
        assert_eq!(EntityTypes1_21_2::from_id(29), Some(EntityTypes1_21_2::Creaking));
        assert_eq!(EntityTypes1_21_2::from_id(148), Some(EntityTypes1_21_2::Player));
        assert_eq!(EntityTypes1_21_2::from_id(150), None);
        assert_eq!(entity_type_name_1_21(116), Some("warden"));
    }

    #[test]
    fn test_hierarchy_queries() {
        assert!(EntityTypes1_21_2::PaleOakChestBoat.is_a(EntityTypes1_21_2::AbstractChestBoat));
        assert!(EntityTypes1_21_2::PaleOakChestBoat.is_a(EntityTypes1_21_2::AbstractBoat));
        assert!(!EntityTypes1_21_2::OakBoat.is_a(EntityTypes1_21_2::AbstractChestBoat));
        assert!(EntityTypes1_21_2::GlowSquid.is_a(EntityTypes1_21_2::AgeableWaterCreature));
        assert!(EntityTypes1_21_2::Trident.is_a(EntityTypes1_21_2::AbstractArrow));
        assert!(EntityTypes1_21_2::CreakingTransient.is_a(EntityTypes1_21_2::Creaking));
        assert!(!EntityTypes1_21_2::Salmon.is_a(EntityTypes1_21_2::AgeableWaterCreature));
        assert!(EntityTypes1_21_2::HopperMinecart.is_a(EntityTypes1_21_2::AbstractMinecart));
    }

    #[test]
    fn test_bitset_agrees_with_parent_chain() {
        for child in EntityTypes1_21_2::ALL {
            for ancestor in EntityTypes1_21_2::ALL {
                assert_eq!(child.is_a(ancestor), child.is_or_has_parent(ancestor));
            }
        }
    }

    #[test]
    fn test_every_concrete_type_maps() {
        for ty in EntityTypes1_21_2::ALL {
            if ty.id().is_some() {
                assert!(map_entity_type(ty).is_some(), "{:?}", ty);
            }
        }
    }

    #[test]
    fn test_replaced_types() {
        let boat = map_entity_type(EntityTypes1_21_2::PaleOakBoat).unwrap();
        assert_eq!(boat.id, entity_type_id_1_21("boat").unwrap());
        let chest_boat = map_entity_type(EntityTypes1_21_2::BambooChestRaft).unwrap();
        assert_eq!(chest_boat.id, 17);
        let creaking = map_entity_type(EntityTypes1_21_2::Creaking).unwrap();
        assert_eq!(creaking.id, 116);
        assert_eq!(creaking.display_name, Some("entity.minecraft.creaking"));
        assert_eq!(map_entity_type_id(30), Some(105));
        assert_eq!(map_entity_type_id(148), Some(128));
    }

    #[test]
    fn test_boat_types() {
        assert_eq!(boat_type(EntityTypes1_21_2::BambooRaft), 8);
        assert_eq!(boat_type(EntityTypes1_21_2::DarkOakChestBoat), 6);
        assert_eq!(boat_type(EntityTypes1_21_2::PaleOakBoat), 0);
    }
}
