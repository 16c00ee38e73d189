//! Entity data (metadata) entries and their list codec.

use bytes::{BufMut, BytesMut};
use rewind_nbt::NbtValue;
use rewind_types::{BlockPos, GlobalPos};
use uuid::Uuid;

use crate::codec::*;
use crate::field::{Field, OptionalGlobalPos, Tag};

/// Index that terminates an entity data list.
pub const END_INDEX: u8 = 0xFF;

/// Serializer kinds shared by 1.21 and 1.21.2. The numeric type id of a kind is
/// version specific and comes from an [`EntityDataTypes`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityDataKind {
    Byte,
    VarInt,
    VarLong,
    Float,
    String,
    Component,
    OptionalComponent,
    Item,
    Boolean,
    Rotations,
    BlockPos,
    OptionalBlockPos,
    Direction,
    OptionalUuid,
    BlockState,
    OptionalBlockState,
    CompoundTag,
    Particle,
    Particles,
    VillagerData,
    OptionalVarInt,
    Pose,
    CatVariant,
    WolfVariant,
    FrogVariant,
    OptionalGlobalPos,
    PaintingVariant,
    SnifferState,
    ArmadilloState,
    Vector3,
    Quaternion,
}

/// Serializer id table of one protocol version.
#[derive(Debug, Clone, Copy)]
pub struct EntityDataTypes {
    /// Indexed by type id.
    pub kinds: &'static [EntityDataKind],
    /// Particle ids whose options follow the id on the wire.
    pub particles_with_options: &'static [i32],
}

impl EntityDataTypes {
    pub fn kind(&self, type_id: i32) -> Option<EntityDataKind> {
        usize::try_from(type_id)
            .ok()
            .and_then(|i| self.kinds.get(i).copied())
    }

    pub fn type_id(&self, kind: EntityDataKind) -> Option<i32> {
        self.kinds.iter().position(|k| *k == kind).map(|i| i as i32)
    }
}

/// An item stack without data component changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStack {
    pub item_id: i32,
    pub count: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VillagerData {
    pub villager_type: i32,
    pub profession: i32,
    pub level: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityDataValue {
    Byte(i8),
    VarInt(i32),
    VarLong(i64),
    Float(f32),
    String(String),
    Component(NbtValue),
    OptionalComponent(Option<NbtValue>),
    Item(Option<ItemStack>),
    Boolean(bool),
    Rotations([f32; 3]),
    BlockPos(BlockPos),
    OptionalBlockPos(Option<BlockPos>),
    Direction(i32),
    OptionalUuid(Option<Uuid>),
    BlockState(i32),
    /// Zero means air/absent.
    OptionalBlockState(i32),
    CompoundTag(NbtValue),
    /// Particle type id; only particles without options are representable.
    Particle(i32),
    Particles(Vec<i32>),
    VillagerData(VillagerData),
    OptionalVarInt(Option<i32>),
    Pose(i32),
    CatVariant(i32),
    WolfVariant(i32),
    FrogVariant(i32),
    OptionalGlobalPos(Option<GlobalPos>),
    /// Registry id of the variant.
    PaintingVariant(i32),
    SnifferState(i32),
    ArmadilloState(i32),
    Vector3([f32; 3]),
    Quaternion([f32; 4]),
}

impl EntityDataValue {
    pub fn kind(&self) -> EntityDataKind {
        match self {
            EntityDataValue::Byte(_) => EntityDataKind::Byte,
            EntityDataValue::VarInt(_) => EntityDataKind::VarInt,
            EntityDataValue::VarLong(_) => EntityDataKind::VarLong,
            EntityDataValue::Float(_) => EntityDataKind::Float,
            EntityDataValue::String(_) => EntityDataKind::String,
            EntityDataValue::Component(_) => EntityDataKind::Component,
            EntityDataValue::OptionalComponent(_) => EntityDataKind::OptionalComponent,
            EntityDataValue::Item(_) => EntityDataKind::Item,
            EntityDataValue::Boolean(_) => EntityDataKind::Boolean,
            EntityDataValue::Rotations(_) => EntityDataKind::Rotations,
            EntityDataValue::BlockPos(_) => EntityDataKind::BlockPos,
            EntityDataValue::OptionalBlockPos(_) => EntityDataKind::OptionalBlockPos,
            EntityDataValue::Direction(_) => EntityDataKind::Direction,
            EntityDataValue::OptionalUuid(_) => EntityDataKind::OptionalUuid,
            EntityDataValue::BlockState(_) => EntityDataKind::BlockState,
            EntityDataValue::OptionalBlockState(_) => EntityDataKind::OptionalBlockState,
            EntityDataValue::CompoundTag(_) => EntityDataKind::CompoundTag,
            EntityDataValue::Particle(_) => EntityDataKind::Particle,
            EntityDataValue::Particles(_) => EntityDataKind::Particles,
            EntityDataValue::VillagerData(_) => EntityDataKind::VillagerData,
            EntityDataValue::OptionalVarInt(_) => EntityDataKind::OptionalVarInt,
            EntityDataValue::Pose(_) => EntityDataKind::Pose,
            EntityDataValue::CatVariant(_) => EntityDataKind::CatVariant,
            EntityDataValue::WolfVariant(_) => EntityDataKind::WolfVariant,
            EntityDataValue::FrogVariant(_) => EntityDataKind::FrogVariant,
            EntityDataValue::OptionalGlobalPos(_) => EntityDataKind::OptionalGlobalPos,
            EntityDataValue::PaintingVariant(_) => EntityDataKind::PaintingVariant,
            EntityDataValue::SnifferState(_) => EntityDataKind::SnifferState,
            EntityDataValue::ArmadilloState(_) => EntityDataKind::ArmadilloState,
            EntityDataValue::Vector3(_) => EntityDataKind::Vector3,
            EntityDataValue::Quaternion(_) => EntityDataKind::Quaternion,
        }
    }
}

/// One entity data entry: slot index, wire type id and value.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityData {
    pub index: u8,
    pub type_id: i32,
    pub value: EntityDataValue,
}

impl EntityData {
    pub fn new(index: u8, type_id: i32, value: EntityDataValue) -> Self {
        Self {
            index,
            type_id,
            value,
        }
    }
}

fn read_particle(buf: &mut BytesMut, types: &EntityDataTypes) -> CodecResult<i32> {
    let id = read_varint(buf)?;
    if types.particles_with_options.contains(&id) {
        return Err(CodecError::Unsupported(format!(
            "particle {} with options",
            id
        )));
    }
    Ok(id)
}

fn read_floats<const N: usize>(buf: &mut BytesMut) -> CodecResult<[f32; N]> {
    let mut out = [0.0; N];
    for v in out.iter_mut() {
        *v = read_f32(buf)?;
    }
    Ok(out)
}

fn read_value(
    buf: &mut BytesMut,
    kind: EntityDataKind,
    types: &EntityDataTypes,
) -> CodecResult<EntityDataValue> {
    Ok(match kind {
        EntityDataKind::Byte => EntityDataValue::Byte(read_i8(buf)?),
        EntityDataKind::VarInt => EntityDataValue::VarInt(read_varint(buf)?),
        EntityDataKind::VarLong => EntityDataValue::VarLong(read_varlong(buf)?),
        EntityDataKind::Float => EntityDataValue::Float(read_f32(buf)?),
        EntityDataKind::String => EntityDataValue::String(read_string(buf, 32767)?),
        EntityDataKind::Component => EntityDataValue::Component(Tag::read(buf)?),
        EntityDataKind::OptionalComponent => {
            let component = if read_bool(buf)? {
                Some(Tag::read(buf)?)
            } else {
                None
            };
            EntityDataValue::OptionalComponent(component)
        }
        EntityDataKind::Item => {
            let count = read_varint(buf)?;
            if count <= 0 {
                EntityDataValue::Item(None)
            } else {
                let item_id = read_varint(buf)?;
                let added = read_varint(buf)?;
                let removed = read_varint(buf)?;
                if added != 0 || removed != 0 {
                    return Err(CodecError::Unsupported(
                        "item stack with component changes".into(),
                    ));
                }
                EntityDataValue::Item(Some(ItemStack { item_id, count }))
            }
        }
        EntityDataKind::Boolean => EntityDataValue::Boolean(read_bool(buf)?),
        EntityDataKind::Rotations => EntityDataValue::Rotations(read_floats(buf)?),
        EntityDataKind::BlockPos => {
            EntityDataValue::BlockPos(BlockPos::decode(read_i64(buf)? as u64))
        }
        EntityDataKind::OptionalBlockPos => {
            let pos = if read_bool(buf)? {
                Some(BlockPos::decode(read_i64(buf)? as u64))
            } else {
                None
            };
            EntityDataValue::OptionalBlockPos(pos)
        }
        EntityDataKind::Direction => EntityDataValue::Direction(read_varint(buf)?),
        EntityDataKind::OptionalUuid => {
            let uuid = if read_bool(buf)? {
                Some(read_uuid(buf)?)
            } else {
                None
            };
            EntityDataValue::OptionalUuid(uuid)
        }
        EntityDataKind::BlockState => EntityDataValue::BlockState(read_varint(buf)?),
        EntityDataKind::OptionalBlockState => {
            EntityDataValue::OptionalBlockState(read_varint(buf)?)
        }
        EntityDataKind::CompoundTag => EntityDataValue::CompoundTag(Tag::read(buf)?),
        EntityDataKind::Particle => EntityDataValue::Particle(read_particle(buf, types)?),
        EntityDataKind::Particles => {
            let len = read_length(buf)?;
            let mut particles = Vec::with_capacity(len.min(buf.len()));
            for _ in 0..len {
                particles.push(read_particle(buf, types)?);
            }
            EntityDataValue::Particles(particles)
        }
        EntityDataKind::VillagerData => EntityDataValue::VillagerData(VillagerData {
            villager_type: read_varint(buf)?,
            profession: read_varint(buf)?,
            level: read_varint(buf)?,
        }),
        EntityDataKind::OptionalVarInt => {
            let raw = read_varint(buf)?;
            EntityDataValue::OptionalVarInt(if raw == 0 { None } else { Some(raw - 1) })
        }
        EntityDataKind::Pose => EntityDataValue::Pose(read_varint(buf)?),
        EntityDataKind::CatVariant => EntityDataValue::CatVariant(read_varint(buf)?),
        EntityDataKind::WolfVariant => EntityDataValue::WolfVariant(read_varint(buf)?),
        EntityDataKind::FrogVariant => EntityDataValue::FrogVariant(read_varint(buf)?),
        EntityDataKind::OptionalGlobalPos => {
            EntityDataValue::OptionalGlobalPos(OptionalGlobalPos::read(buf)?)
        }
        EntityDataKind::PaintingVariant => {
            // holder: 0 is an inline definition, otherwise registry id + 1
            let raw = read_varint(buf)?;
            if raw == 0 {
                return Err(CodecError::Unsupported("inline painting variant".into()));
            }
            EntityDataValue::PaintingVariant(raw - 1)
        }
        EntityDataKind::SnifferState => EntityDataValue::SnifferState(read_varint(buf)?),
        EntityDataKind::ArmadilloState => EntityDataValue::ArmadilloState(read_varint(buf)?),
        EntityDataKind::Vector3 => EntityDataValue::Vector3(read_floats(buf)?),
        EntityDataKind::Quaternion => EntityDataValue::Quaternion(read_floats(buf)?),
    })
}

fn write_value(buf: &mut BytesMut, value: &EntityDataValue) {
    match value {
        EntityDataValue::Byte(v) => buf.put_i8(*v),
        EntityDataValue::VarInt(v)
        | EntityDataValue::Direction(v)
        | EntityDataValue::BlockState(v)
        | EntityDataValue::OptionalBlockState(v)
        | EntityDataValue::Pose(v)
        | EntityDataValue::CatVariant(v)
        | EntityDataValue::WolfVariant(v)
        | EntityDataValue::FrogVariant(v)
        | EntityDataValue::SnifferState(v)
        | EntityDataValue::ArmadilloState(v) => write_varint(buf, *v),
        EntityDataValue::VarLong(v) => write_varlong(buf, *v),
        EntityDataValue::Float(v) => buf.put_f32(*v),
        EntityDataValue::String(s) => write_string(buf, s),
        EntityDataValue::Component(tag) | EntityDataValue::CompoundTag(tag) => {
            tag.write_root_network(buf)
        }
        EntityDataValue::OptionalComponent(tag) => {
            buf.put_u8(tag.is_some() as u8);
            if let Some(tag) = tag {
                tag.write_root_network(buf);
            }
        }
        EntityDataValue::Item(stack) => match stack {
            Some(stack) => {
                write_varint(buf, stack.count);
                write_varint(buf, stack.item_id);
                write_varint(buf, 0);
                write_varint(buf, 0);
            }
            None => write_varint(buf, 0),
        },
        EntityDataValue::Boolean(v) => buf.put_u8(*v as u8),
        EntityDataValue::Rotations(v) | EntityDataValue::Vector3(v) => {
            for f in v {
                buf.put_f32(*f);
            }
        }
        EntityDataValue::Quaternion(v) => {
            for f in v {
                buf.put_f32(*f);
            }
        }
        EntityDataValue::BlockPos(pos) => buf.put_u64(pos.encode()),
        EntityDataValue::OptionalBlockPos(pos) => {
            buf.put_u8(pos.is_some() as u8);
            if let Some(pos) = pos {
                buf.put_u64(pos.encode());
            }
        }
        EntityDataValue::OptionalUuid(uuid) => {
            buf.put_u8(uuid.is_some() as u8);
            if let Some(uuid) = uuid {
                write_uuid(buf, uuid);
            }
        }
        EntityDataValue::Particle(id) => write_varint(buf, *id),
        EntityDataValue::Particles(ids) => {
            write_varint(buf, ids.len() as i32);
            for id in ids {
                write_varint(buf, *id);
            }
        }
        EntityDataValue::VillagerData(data) => {
            write_varint(buf, data.villager_type);
            write_varint(buf, data.profession);
            write_varint(buf, data.level);
        }
        EntityDataValue::OptionalVarInt(v) => write_varint(buf, v.map_or(0, |v| v + 1)),
        EntityDataValue::OptionalGlobalPos(pos) => OptionalGlobalPos::write(pos, buf),
        EntityDataValue::PaintingVariant(id) => write_varint(buf, id + 1),
    }
}

/// Read an entity data list up to and including the terminator.
pub fn read_entity_data(
    buf: &mut BytesMut,
    types: &EntityDataTypes,
) -> Result<Vec<EntityData>, EntityDataError> {
    let mut entries = Vec::new();
    loop {
        let index = read_u8(buf)?;
        if index == END_INDEX {
            return Ok(entries);
        }
        let type_id = read_varint(buf)?;
        let kind = types
            .kind(type_id)
            .ok_or(EntityDataError::UnknownType { index, type_id })?;
        let value = read_value(buf, kind, types)?;
        entries.push(EntityData::new(index, type_id, value));
    }
}

/// Write entries followed by the terminator.
pub fn write_entity_data(buf: &mut BytesMut, entries: &[EntityData]) {
    for entry in entries {
        buf.put_u8(entry.index);
        write_varint(buf, entry.type_id);
        write_value(buf, &entry.value);
    }
    buf.put_u8(END_INDEX);
}

#[derive(Debug, thiserror::Error)]
pub enum EntityDataError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("entity data index {index} has unknown type {type_id}")]
    UnknownType { index: u8, type_id: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_nbt::nbt_compound;

    const KINDS: &[EntityDataKind] = &[
        EntityDataKind::Byte,
        EntityDataKind::VarInt,
        EntityDataKind::Item,
        EntityDataKind::OptionalComponent,
        EntityDataKind::Particle,
        EntityDataKind::PaintingVariant,
        EntityDataKind::OptionalVarInt,
    ];

    const TYPES: EntityDataTypes = EntityDataTypes {
        kinds: KINDS,
        particles_with_options: &[13],
    };

    #[test]
    fn test_list_roundtrip() {
        let entries = vec![
            EntityData::new(0, 0, EntityDataValue::Byte(0x20)),
            EntityData::new(
                2,
                3,
                EntityDataValue::OptionalComponent(Some(nbt_compound! {
                    "text" => NbtValue::String("Bob".into())
                })),
            ),
            EntityData::new(8, 2, EntityDataValue::Item(None)),
            EntityData::new(
                9,
                2,
                EntityDataValue::Item(Some(ItemStack {
                    item_id: 800,
                    count: 1,
                })),
            ),
            EntityData::new(10, 6, EntityDataValue::OptionalVarInt(Some(0))),
            EntityData::new(11, 5, EntityDataValue::PaintingVariant(4)),
        ];
        let mut buf = BytesMut::new();
        write_entity_data(&mut buf, &entries);
        assert_eq!(buf[buf.len() - 1], END_INDEX);
        let read = read_entity_data(&mut buf, &TYPES).unwrap();
        assert_eq!(read, entries);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_unknown_type_id() {
        let mut buf = BytesMut::from(&[0x04, 0x30, 0x00, END_INDEX][..]);
        assert!(matches!(
            read_entity_data(&mut buf, &TYPES),
            Err(EntityDataError::UnknownType {
                index: 4,
                type_id: 0x30
            })
        ));
    }

    #[test]
    fn test_particle_with_options_is_unsupported() {
        let mut buf = BytesMut::from(&[0x0A, 0x04, 13, END_INDEX][..]);
        assert!(matches!(
            read_entity_data(&mut buf, &TYPES),
            Err(EntityDataError::Codec(CodecError::Unsupported(_)))
        ));
    }

    #[test]
    fn test_missing_terminator() {
        let mut buf = BytesMut::from(&[0x00, 0x00, 0x01][..]);
        assert!(read_entity_data(&mut buf, &TYPES).is_err());
    }

    #[test]
    fn test_kind_lookup() {
        assert_eq!(TYPES.kind(4), Some(EntityDataKind::Particle));
        assert_eq!(TYPES.kind(-1), None);
        assert_eq!(TYPES.type_id(EntityDataKind::Item), Some(2));
    }
}
