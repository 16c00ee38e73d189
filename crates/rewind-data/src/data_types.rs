use rewind_protocol_core::{EntityDataKind, EntityDataTypes};

const KINDS: &[EntityDataKind] = &[
    EntityDataKind::Byte,
    EntityDataKind::VarInt,
    EntityDataKind::VarLong,
    EntityDataKind::Float,
    EntityDataKind::String,
    EntityDataKind::Component,
    EntityDataKind::OptionalComponent,
    EntityDataKind::Item,
    EntityDataKind::Boolean,
    EntityDataKind::Rotations,
    EntityDataKind::BlockPos,
    EntityDataKind::OptionalBlockPos,
    EntityDataKind::Direction,
    EntityDataKind::OptionalUuid,
    EntityDataKind::BlockState,
    EntityDataKind::OptionalBlockState,
    EntityDataKind::CompoundTag,
    EntityDataKind::Particle,
    EntityDataKind::Particles,
    EntityDataKind::VillagerData,
    EntityDataKind::OptionalVarInt,
    EntityDataKind::Pose,
    EntityDataKind::CatVariant,
    EntityDataKind::WolfVariant,
    EntityDataKind::FrogVariant,
    EntityDataKind::OptionalGlobalPos,
    EntityDataKind::PaintingVariant,
    EntityDataKind::SnifferState,
    EntityDataKind::ArmadilloState,
    EntityDataKind::Vector3,
    EntityDataKind::Quaternion,
];

/// Entity data serializers of protocol 767.
pub const ENTITY_DATA_TYPES_1_21: EntityDataTypes = EntityDataTypes {
    kinds: KINDS,
    // block, block_marker, dust, dust_color_transition, entity_effect, falling_dust,
    // sculk_charge, item, vibration
    particles_with_options: &[1, 2, 13, 14, 20, 28, 35, 44, 45],
};

/// Entity data serializers of protocol 768. The serializer table is unchanged, the
/// particle registry gained pale_oak_leaves (34) and trail.
pub const ENTITY_DATA_TYPES_1_21_2: EntityDataTypes = EntityDataTypes {
    kinds: KINDS,
    particles_with_options: &[1, 2, 13, 14, 20, 28, 36, 45, 46, 47],
};

/// Map a 1.21.2 serializer id to its 1.21 id.
pub fn map_data_type_1_21_2(type_id: i32) -> Option<i32> {
    ENTITY_DATA_TYPES_1_21_2
        .kind(type_id)
        .and_then(|kind| ENTITY_DATA_TYPES_1_21.type_id(kind))
}
