//! Entity spawn, data and tracking packets.

use std::sync::Arc;

use rewind_data::{
    boat_type, map_data_type_1_21_2, map_entity_type, EntityTypes1_21_2, MappingData,
    ENTITY_DATA_TYPES_1_21_2,
};
use rewind_nbt::{nbt_compound, NbtValue};
use rewind_protocol_core::field::*;
use rewind_protocol_core::*;
use rewind_rewriters::{ComponentRewriter, EntityDataFilter, EventResult, TranslatableRewriter};
use rewind_types::Identifier;
use tracing::debug;

use crate::adapter::Protocol1_21_2To1_21;

// Serializer ids of protocol 767
const VARINT_TYPE: i32 = 1;
const OPTIONAL_COMPONENT_TYPE: i32 = 6;
const BOOLEAN_TYPE: i32 = 8;

const CUSTOM_NAME_INDEX: u8 = 2;
const CUSTOM_NAME_VISIBLE_INDEX: u8 = 3;
const BOAT_TYPE_INDEX: u8 = 11;
const MINECART_DISPLAY_BLOCK_INDEX: u8 = 11;

pub(crate) fn register_packets(handlers: &mut PacketHandlers<Protocol1_21_2To1_21>) {
    handlers.clientbound(
        ClientboundPackets1_21_2::AddEntity,
        ClientboundPackets1_21::AddEntity,
        add_entity,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::SetEntityData,
        ClientboundPackets1_21::SetEntityData,
        set_entity_data,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::RemoveEntities,
        ClientboundPackets1_21::RemoveEntities,
        remove_entities,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::Login,
        ClientboundPackets1_21::Login,
        login,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::Respawn,
        ClientboundPackets1_21::Respawn,
        respawn,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::SetPassengers,
        ClientboundPackets1_21::SetPassengers,
        set_passengers,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::PlayerInfoUpdate,
        ClientboundPackets1_21::PlayerInfoUpdate,
        player_info_update,
    );
}

/// Entity data rules from the 1.21.2 schema down to 1.21.
pub(crate) fn entity_data_filter(
    mappings: &Arc<MappingData>,
) -> EntityDataFilter<EntityTypes1_21_2> {
    let mut filter = EntityDataFilter::new(&EntityTypes1_21_2::ALL);
    filter.map_data_type(map_data_type_1_21_2);

    let data_mappings = mappings.clone();
    let translatable = TranslatableRewriter::new(mappings.clone());
    filter.handler(move |_, data| {
        match &mut data.value {
            EntityDataValue::BlockState(id) => *id = data_mappings.map_block_state(*id),
            EntityDataValue::OptionalBlockState(id) if *id != 0 => {
                *id = data_mappings.map_block_state(*id)
            }
            EntityDataValue::Particle(id) => *id = data_mappings.map_particle(*id),
            EntityDataValue::Particles(ids) => {
                for id in ids.iter_mut() {
                    *id = data_mappings.map_particle(*id);
                }
            }
            EntityDataValue::Component(tag) => translatable.process_tag(tag),
            EntityDataValue::OptionalComponent(Some(tag)) => translatable.process_tag(tag),
            _ => {}
        }
        Ok(EventResult::Continue)
    });

    let minecart_mappings = mappings.clone();
    filter
        .of_type(EntityTypes1_21_2::AbstractMinecart)
        .handler(move |_, data| {
            if data.index == MINECART_DISPLAY_BLOCK_INDEX {
                if let EntityDataValue::VarInt(id) = &mut data.value {
                    *id = minecart_mappings.map_block_state(*id);
                }
            }
            Ok(EventResult::Continue)
        });

    filter
        .of_type(EntityTypes1_21_2::Creaking)
        .cancel(17) // active
        .cancel(16); // can move
    filter
        .of_type(EntityTypes1_21_2::CreakingTransient)
        .handler(|_, data| {
            // text displays end at index 7
            Ok(if data.index > 7 {
                EventResult::Cancel
            } else {
                EventResult::Continue
            })
        });
    filter
        .of_type(EntityTypes1_21_2::AbstractBoat)
        .add_index(BOAT_TYPE_INDEX);
    filter.of_type(EntityTypes1_21_2::Salmon).collapse_index(17); // size
    filter
        .of_type(EntityTypes1_21_2::AgeableWaterCreature)
        .collapse_index(16); // baby
    filter
        .of_type(EntityTypes1_21_2::AbstractArrow)
        .collapse_index(10); // in ground
    filter
}

fn add_entity(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let entity_id = wrapper.passthrough::<VarInt>()?;
    wrapper.passthrough::<Uuid>()?;
    let type_id = wrapper.read::<VarInt>()?;
    let entity_type = EntityTypes1_21_2::from_id(type_id);
    match entity_type.and_then(map_entity_type) {
        Some(mapped) => wrapper.write::<VarInt>(mapped.id),
        None => {
            debug!("Entity {} has unknown type {}", entity_id, type_id);
            wrapper.write::<VarInt>(type_id);
        }
    }

    wrapper.passthrough::<Double>()?; // x
    wrapper.passthrough::<Double>()?; // y
    wrapper.passthrough::<Double>()?; // z
    wrapper.passthrough::<Byte>()?; // pitch
    wrapper.passthrough::<Byte>()?; // yaw
    wrapper.passthrough::<Byte>()?; // head yaw
    let data = wrapper.read::<VarInt>()?;
    if entity_type == Some(EntityTypes1_21_2::FallingBlock) {
        wrapper.write::<VarInt>(protocol.mappings().map_block_state(data));
    } else {
        wrapper.write::<VarInt>(data);
    }
    user.require_mut::<EntityTracker>()?
        .add_entity(entity_id, type_id);

    if let Some(boat) = entity_type.filter(|ty| ty.is_a(EntityTypes1_21_2::AbstractBoat)) {
        let mut packet = PacketWrapper::create(
            Direction::Clientbound,
            ClientboundPackets1_21::SetEntityData.id(),
        );
        packet.write::<VarInt>(entity_id);
        write_entity_data(
            packet.output_mut(),
            &[EntityData::new(
                BOAT_TYPE_INDEX,
                VARINT_TYPE,
                EntityDataValue::VarInt(boat_type(boat)),
            )],
        );
        wrapper.send_after(packet);
    }
    Ok(())
}

fn set_entity_data(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let entity_id = wrapper.passthrough::<VarInt>()?;
    let mut entries = read_entity_data(wrapper.input_mut(), &ENTITY_DATA_TYPES_1_21_2)
        .inspect_err(|err| {
            if let EntityDataError::Codec(CodecError::Unsupported(value)) = err {
                debug!("Dropping entity data of entity {}: {}", entity_id, value);
            }
        })?;

    let tracker = user.require_mut::<EntityTracker>()?;
    let entity_type = tracker
        .entity_type(entity_id)
        .and_then(EntityTypes1_21_2::from_id);
    if entity_type.is_none() {
        debug!("Entity data for untracked entity {}", entity_id);
    }
    protocol
        .entity_data()
        .apply(entity_id, entity_type, &mut entries)?;

    let display_name = entity_type
        .and_then(map_entity_type)
        .and_then(|mapped| mapped.display_name);
    if let Some(key) = display_name {
        if tracker.mark_named(entity_id) {
            add_display_name(protocol, &mut entries, key);
        }
    }

    write_entity_data(wrapper.output_mut(), &entries);
    Ok(())
}

/// Show the original type's name on the lookalike entity, unless it already has a custom name.
fn add_display_name(protocol: &Protocol1_21_2To1_21, entries: &mut Vec<EntityData>, key: &str) {
    let mut name = nbt_compound! { "translate" => NbtValue::String(key.into()) };
    protocol.translatable().process_tag(&mut name);

    match entries.iter_mut().find(|e| e.index == CUSTOM_NAME_INDEX) {
        Some(entry) => {
            if let EntityDataValue::OptionalComponent(value) = &mut entry.value {
                if value.is_none() {
                    *value = Some(name);
                }
            }
        }
        None => {
            entries.push(EntityData::new(
                CUSTOM_NAME_INDEX,
                OPTIONAL_COMPONENT_TYPE,
                EntityDataValue::OptionalComponent(Some(name)),
            ));
            entries.retain(|e| e.index != CUSTOM_NAME_VISIBLE_INDEX);
            entries.push(EntityData::new(
                CUSTOM_NAME_VISIBLE_INDEX,
                BOOLEAN_TYPE,
                EntityDataValue::Boolean(true),
            ));
        }
    }
}

fn remove_entities(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let ids = wrapper.passthrough::<VarIntArray>()?;
    let tracker = user.require_mut::<EntityTracker>()?;
    for id in &ids {
        tracker.remove_entity(*id);
    }

    let vehicle = user.get::<ClientVehicle>().map(|v| v.vehicle_id);
    if vehicle.is_some_and(|vehicle| ids.contains(&vehicle)) {
        user.remove::<ClientVehicle>();
    }
    Ok(())
}

fn login(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let entity_id = wrapper.passthrough::<Int>()?;
    wrapper.passthrough::<Boolean>()?; // hardcore
    wrapper.passthrough::<StringArray>()?; // worlds
    wrapper.passthrough::<VarInt>()?; // max players
    wrapper.passthrough::<VarInt>()?; // view distance
    wrapper.passthrough::<VarInt>()?; // simulation distance
    wrapper.passthrough::<Boolean>()?; // reduced debug info
    wrapper.passthrough::<Boolean>()?; // show death screen
    wrapper.passthrough::<Boolean>()?; // limited crafting
    let world = passthrough_spawn_info(wrapper)?;

    let tracker = user.require_mut::<EntityTracker>()?;
    tracker.set_client_entity_id(entity_id);
    tracker.set_world(world);
    Ok(())
}

fn respawn(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let world = passthrough_spawn_info(wrapper)?;
    user.require_mut::<EntityTracker>()?.set_world(world);
    Ok(())
}

/// Spawn info shared by login and respawn, minus the sea level 1.21 does not have.
fn passthrough_spawn_info(
    wrapper: &mut PacketWrapper,
) -> Result<Identifier, TranslateError> {
    wrapper.passthrough::<VarInt>()?; // dimension type
    let world = wrapper
        .passthrough::<Str>()?
        .parse::<Identifier>()
        .map_err(CodecError::Unsupported)?;
    wrapper.passthrough::<Long>()?; // seed
    wrapper.passthrough::<UnsignedByte>()?; // gamemode
    wrapper.passthrough::<Byte>()?; // previous gamemode
    wrapper.passthrough::<Boolean>()?; // debug
    wrapper.passthrough::<Boolean>()?; // flat
    wrapper.passthrough::<OptionalGlobalPos>()?; // last death location
    wrapper.passthrough::<VarInt>()?; // portal cooldown
    wrapper.read::<VarInt>()?; // sea level
    Ok(world)
}

fn set_passengers(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let vehicle = wrapper.passthrough::<VarInt>()?;
    let passengers = wrapper.passthrough::<VarIntArray>()?;
    let client = user.require::<EntityTracker>()?.client_entity_id();

    if user
        .get::<ClientVehicle>()
        .is_some_and(|v| v.vehicle_id == vehicle)
    {
        user.remove::<ClientVehicle>();
    }
    if client.is_some_and(|id| passengers.contains(&id)) {
        user.put(ClientVehicle {
            vehicle_id: vehicle,
        });
    }
    Ok(())
}

const ADD_PLAYER: u8 = 1;
const INITIALIZE_CHAT: u8 = 1 << 1;
const UPDATE_GAME_MODE: u8 = 1 << 2;
const UPDATE_LISTED: u8 = 1 << 3;
const UPDATE_LATENCY: u8 = 1 << 4;
const UPDATE_DISPLAY_NAME: u8 = 1 << 5;
const UPDATE_LIST_ORDER: u8 = 1 << 6;

fn player_info_update(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    let actions = wrapper.read::<UnsignedByte>()?;
    wrapper.write::<UnsignedByte>(actions & !UPDATE_LIST_ORDER);

    let count = wrapper.passthrough::<VarInt>()?;
    for _ in 0..count {
        wrapper.passthrough::<Uuid>()?;
        if actions & ADD_PLAYER != 0 {
            wrapper.passthrough::<Str>()?; // name
            let properties = wrapper.passthrough::<VarInt>()?;
            for _ in 0..properties {
                wrapper.passthrough::<Str>()?; // name
                wrapper.passthrough::<Str>()?; // value
                wrapper.passthrough::<OptionalString>()?; // signature
            }
        }
        if actions & INITIALIZE_CHAT != 0 && wrapper.passthrough::<Boolean>()? {
            wrapper.passthrough::<Uuid>()?; // session id
            wrapper.passthrough::<Long>()?; // key expiry
            wrapper.passthrough::<ByteArray>()?; // public key
            wrapper.passthrough::<ByteArray>()?; // key signature
        }
        if actions & UPDATE_GAME_MODE != 0 {
            wrapper.passthrough::<VarInt>()?;
        }
        if actions & UPDATE_LISTED != 0 {
            wrapper.passthrough::<Boolean>()?;
        }
        if actions & UPDATE_LATENCY != 0 {
            wrapper.passthrough::<VarInt>()?;
        }
        if actions & UPDATE_DISPLAY_NAME != 0 {
            protocol.translatable().passthrough_optional_tag(wrapper)?;
        }
        if actions & UPDATE_LIST_ORDER != 0 {
            wrapper.read::<VarInt>()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::{protocol, run, user};
    use bytes::{BufMut, BytesMut};
    use rewind_data::ENTITY_DATA_TYPES_1_21;
    use rewind_types::EntityType;

    fn clientbound(
        protocol: &Protocol1_21_2To1_21,
        user: &mut UserConnection,
        packet: ClientboundPackets1_21_2,
        payload: BytesMut,
    ) -> Vec<OutgoingPacket> {
        run(
            protocol,
            user,
            ConnectionState::Play,
            Direction::Clientbound,
            packet.id(),
            payload,
        )
        .unwrap()
    }

    fn add_entity_payload(entity_id: i32, ty: EntityTypes1_21_2, data: i32) -> BytesMut {
        let mut buf = BytesMut::new();
        write_varint(&mut buf, entity_id);
        write_uuid(&mut buf, &uuid::Uuid::nil());
        write_varint(&mut buf, ty.id().unwrap());
        buf.put_f64(1.0);
        buf.put_f64(64.0);
        buf.put_f64(-3.5);
        buf.put_i8(0);
        buf.put_i8(64);
        buf.put_i8(64);
        write_varint(&mut buf, data);
        buf.put_i16(0);
        buf.put_i16(0);
        buf.put_i16(0);
        buf
    }

    fn entity_data_payload(entity_id: i32, entries: &[EntityData]) -> BytesMut {
        let mut buf = BytesMut::new();
        write_varint(&mut buf, entity_id);
        write_entity_data(&mut buf, entries);
        buf
    }

    fn read_output_data(packet: &OutgoingPacket) -> (i32, Vec<EntityData>) {
        let mut payload = packet.payload.clone();
        let entity_id = read_varint(&mut payload).unwrap();
        let entries = read_entity_data(&mut payload, &ENTITY_DATA_TYPES_1_21).unwrap();
        (entity_id, entries)
    }

    fn spawn(
        protocol: &Protocol1_21_2To1_21,
        user: &mut UserConnection,
        entity_id: i32,
        ty: EntityTypes1_21_2,
    ) -> Vec<OutgoingPacket> {
        clientbound(
            protocol,
            user,
            ClientboundPackets1_21_2::AddEntity,
            add_entity_payload(entity_id, ty, 0),
        )
    }

    #[test]
    fn test_boat_spawn_adds_boat_type() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let out = spawn(&protocol, &mut user, 12, EntityTypes1_21_2::BirchBoat);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, ClientboundPackets1_21::AddEntity.id());
        let mut spawned = out[0].payload.clone();
        read_varint(&mut spawned).unwrap();
        read_uuid(&mut spawned).unwrap();
        assert_eq!(read_varint(&mut spawned).unwrap(), 10); // boat

        assert_eq!(out[1].id, ClientboundPackets1_21::SetEntityData.id());
        let (entity_id, entries) = read_output_data(&out[1]);
        assert_eq!(entity_id, 12);
        assert_eq!(
            entries,
            vec![EntityData::new(11, VARINT_TYPE, EntityDataValue::VarInt(2))]
        );
        assert_eq!(
            user.require::<EntityTracker>().unwrap().entity_type(12),
            EntityTypes1_21_2::BirchBoat.id()
        );
    }

    #[test]
    fn test_chest_boat_maps_to_chest_boat() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let out = spawn(&protocol, &mut user, 3, EntityTypes1_21_2::OakChestBoat);
        let mut spawned = out[0].payload.clone();
        read_varint(&mut spawned).unwrap();
        read_uuid(&mut spawned).unwrap();
        assert_eq!(read_varint(&mut spawned).unwrap(), 17);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_falling_block_state_remapped() {
        let mappings = MappingData::from_json(r#"{"block_states": {"27000": 9}}"#).unwrap();
        let protocol =
            Protocol1_21_2To1_21::new(Arc::new(mappings), &TranslatorConfig::default());
        let mut user = user(&protocol);
        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::AddEntity,
            add_entity_payload(4, EntityTypes1_21_2::FallingBlock, 27000),
        );
        assert_eq!(out.len(), 1);
        let mut spawned = out[0].payload.clone();
        read_varint(&mut spawned).unwrap();
        read_uuid(&mut spawned).unwrap();
        assert_eq!(read_varint(&mut spawned).unwrap(), 40);
        for _ in 0..3 {
            read_f64(&mut spawned).unwrap();
        }
        for _ in 0..3 {
            read_i8(&mut spawned).unwrap();
        }
        assert_eq!(read_varint(&mut spawned).unwrap(), 9);
        assert_eq!(spawned.len(), 6); // velocity
    }

    #[test]
    fn test_boat_data_shifted_for_boat_type() {
        let protocol = protocol();
        let mut user = user(&protocol);
        spawn(&protocol, &mut user, 12, EntityTypes1_21_2::PaleOakBoat);
        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::SetEntityData,
            entity_data_payload(
                12,
                &[
                    EntityData::new(10, 3, EntityDataValue::Float(4.0)),
                    EntityData::new(11, 8, EntityDataValue::Boolean(true)),
                ],
            ),
        );
        let (_, entries) = read_output_data(&out[0]);
        assert_eq!(
            entries,
            vec![
                EntityData::new(10, 3, EntityDataValue::Float(4.0)),
                EntityData::new(12, 8, EntityDataValue::Boolean(true)),
            ]
        );
    }

    #[test]
    fn test_salmon_size_removed_from_partial_update() {
        let protocol = protocol();
        let mut user = user(&protocol);
        spawn(&protocol, &mut user, 8, EntityTypes1_21_2::Salmon);
        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::SetEntityData,
            entity_data_payload(
                8,
                &[
                    EntityData::new(0, 0, EntityDataValue::Byte(0)),
                    EntityData::new(17, 1, EntityDataValue::VarInt(2)),
                ],
            ),
        );
        let (_, entries) = read_output_data(&out[0]);
        assert_eq!(entries, vec![EntityData::new(0, 0, EntityDataValue::Byte(0))]);
    }

    #[test]
    fn test_creaking_gets_display_name_once() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let out = spawn(&protocol, &mut user, 20, EntityTypes1_21_2::Creaking);
        let mut spawned = out[0].payload.clone();
        read_varint(&mut spawned).unwrap();
        read_uuid(&mut spawned).unwrap();
        assert_eq!(read_varint(&mut spawned).unwrap(), 116); // warden

        let payload = || {
            entity_data_payload(
                20,
                &[
                    EntityData::new(16, 8, EntityDataValue::Boolean(true)),
                    EntityData::new(17, 8, EntityDataValue::Boolean(true)),
                ],
            )
        };
        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::SetEntityData,
            payload(),
        );
        let (_, entries) = read_output_data(&out[0]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].index, 2);
        match &entries[0].value {
            EntityDataValue::OptionalComponent(Some(name)) => {
                assert_eq!(name.get_string("translate"), Some("Creaking"))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            entries[1],
            EntityData::new(3, BOOLEAN_TYPE, EntityDataValue::Boolean(true))
        );

        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::SetEntityData,
            payload(),
        );
        let (_, entries) = read_output_data(&out[0]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_custom_name_kept() {
        let protocol = protocol();
        let mut user = user(&protocol);
        spawn(&protocol, &mut user, 20, EntityTypes1_21_2::Creaking);
        let custom = nbt_compound! { "text" => NbtValue::String("Bob".into()) };
        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::SetEntityData,
            entity_data_payload(
                20,
                &[EntityData::new(
                    2,
                    6,
                    EntityDataValue::OptionalComponent(Some(custom.clone())),
                )],
            ),
        );
        let (_, entries) = read_output_data(&out[0]);
        assert_eq!(
            entries,
            vec![EntityData::new(
                2,
                6,
                EntityDataValue::OptionalComponent(Some(custom))
            )]
        );
    }

    #[test]
    fn test_unknown_data_type_drops_packet() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let mut payload = BytesMut::new();
        write_varint(&mut payload, 1);
        payload.put_u8(0);
        write_varint(&mut payload, 99);
        payload.put_u8(0xFF);
        let result = run(
            &protocol,
            &mut user,
            ConnectionState::Play,
            Direction::Clientbound,
            ClientboundPackets1_21_2::SetEntityData.id(),
            payload,
        );
        assert!(matches!(
            result,
            Err(TranslateError::UnmappedDataType { index: 0, type_id: 99 })
        ));
    }

    #[test]
    fn test_unsupported_data_value_drops_packet() {
        let protocol = protocol();
        let mut user = user(&protocol);
        spawn(&protocol, &mut user, 8, EntityTypes1_21_2::AreaEffectCloud);
        let mut payload = BytesMut::new();
        write_varint(&mut payload, 8);
        payload.put_u8(10);
        write_varint(
            &mut payload,
            ENTITY_DATA_TYPES_1_21_2
                .type_id(EntityDataKind::Particle)
                .unwrap(),
        );
        write_varint(&mut payload, 13); // dust, carries options
        payload.put_u8(0xFF);
        let result = run(
            &protocol,
            &mut user,
            ConnectionState::Play,
            Direction::Clientbound,
            ClientboundPackets1_21_2::SetEntityData.id(),
            payload,
        );
        assert!(matches!(
            result,
            Err(TranslateError::Codec(CodecError::Unsupported(_)))
        ));
        assert!(user.require::<EntityTracker>().unwrap().entity_type(8).is_some());
    }

    #[test]
    fn test_truncated_spawn_not_tracked() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let mut payload = add_entity_payload(21, EntityTypes1_21_2::Zombie, 0);
        payload.truncate(30);
        let result = run(
            &protocol,
            &mut user,
            ConnectionState::Play,
            Direction::Clientbound,
            ClientboundPackets1_21_2::AddEntity.id(),
            payload,
        );
        assert!(result.is_err());
        assert_eq!(user.require::<EntityTracker>().unwrap().entity_type(21), None);
    }

    fn login_payload(entity_id: i32) -> BytesMut {
        let mut buf = BytesMut::new();
        buf.put_i32(entity_id);
        buf.put_u8(0); // hardcore
        write_varint(&mut buf, 1);
        write_string(&mut buf, "minecraft:overworld");
        write_varint(&mut buf, 20);
        write_varint(&mut buf, 10);
        write_varint(&mut buf, 8);
        buf.put_u8(0);
        buf.put_u8(1);
        buf.put_u8(0);
        write_varint(&mut buf, 0); // dimension type
        write_string(&mut buf, "minecraft:overworld");
        buf.put_i64(42);
        buf.put_u8(1);
        buf.put_i8(-1);
        buf.put_u8(0);
        buf.put_u8(0);
        buf.put_u8(0); // no death location
        write_varint(&mut buf, 0);
        buf
    }

    #[test]
    fn test_login_drops_sea_level() {
        let protocol = protocol();
        let mut user = user(&protocol);
        user.require_mut::<EntityTracker>()
            .unwrap()
            .add_entity(5, 148);
        let expected = {
            let mut buf = login_payload(77);
            buf.put_u8(1); // enforces secure chat
            buf
        };
        let mut payload = login_payload(77);
        write_varint(&mut payload, 63);
        payload.put_u8(1);

        let out = clientbound(&protocol, &mut user, ClientboundPackets1_21_2::Login, payload);
        assert_eq!(out[0].id, ClientboundPackets1_21::Login.id());
        assert_eq!(out[0].payload, expected);

        let tracker = user.require::<EntityTracker>().unwrap();
        assert_eq!(tracker.client_entity_id(), Some(77));
        // entities from before the first world are gone
        assert_eq!(tracker.entity_type(5), None);
    }

    #[test]
    fn test_vehicle_membership() {
        let protocol = protocol();
        let mut user = user(&protocol);
        user.require_mut::<EntityTracker>()
            .unwrap()
            .set_client_entity_id(1);

        let mut payload = BytesMut::new();
        write_varint(&mut payload, 5);
        write_varint(&mut payload, 1);
        write_varint(&mut payload, 1);
        clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::SetPassengers,
            payload,
        );
        assert_eq!(
            user.get::<ClientVehicle>(),
            Some(&ClientVehicle { vehicle_id: 5 })
        );

        let mut payload = BytesMut::new();
        write_varint(&mut payload, 1);
        write_varint(&mut payload, 5);
        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::RemoveEntities,
            payload,
        );
        assert_eq!(out.len(), 1);
        assert!(!user.has::<ClientVehicle>());
    }

    #[test]
    fn test_dismount_clears_vehicle() {
        let protocol = protocol();
        let mut user = user(&protocol);
        user.require_mut::<EntityTracker>()
            .unwrap()
            .set_client_entity_id(1);
        user.put(ClientVehicle { vehicle_id: 5 });

        let mut payload = BytesMut::new();
        write_varint(&mut payload, 5);
        write_varint(&mut payload, 0);
        clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::SetPassengers,
            payload,
        );
        assert!(!user.has::<ClientVehicle>());
    }

    #[test]
    fn test_player_info_list_order_dropped() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let id = uuid::Uuid::from_u128(7);

        let mut payload = BytesMut::new();
        payload.put_u8(UPDATE_GAME_MODE | UPDATE_LATENCY | UPDATE_LIST_ORDER);
        write_varint(&mut payload, 1);
        write_uuid(&mut payload, &id);
        write_varint(&mut payload, 1); // creative
        write_varint(&mut payload, 35);
        write_varint(&mut payload, 4); // list order

        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::PlayerInfoUpdate,
            payload,
        );
        let mut expected = BytesMut::new();
        expected.put_u8(UPDATE_GAME_MODE | UPDATE_LATENCY);
        write_varint(&mut expected, 1);
        write_uuid(&mut expected, &id);
        write_varint(&mut expected, 1);
        write_varint(&mut expected, 35);
        assert_eq!(out[0].payload, expected);
    }

    #[test]
    fn test_player_info_display_name_translated() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let mut payload = BytesMut::new();
        payload.put_u8(UPDATE_DISPLAY_NAME);
        write_varint(&mut payload, 1);
        write_uuid(&mut payload, &uuid::Uuid::nil());
        NbtValue::write_optional_network(
            Some(&nbt_compound! {
                "translate" => NbtValue::String("entity.minecraft.creaking".into())
            }),
            &mut payload,
        );

        let out = clientbound(
            &protocol,
            &mut user,
            ClientboundPackets1_21_2::PlayerInfoUpdate,
            payload,
        );
        let mut body = out[0].payload.clone();
        assert_eq!(read_u8(&mut body).unwrap(), UPDATE_DISPLAY_NAME);
        read_varint(&mut body).unwrap();
        read_uuid(&mut body).unwrap();
        let name = NbtValue::read_optional_network(&mut body).unwrap().unwrap();
        assert_eq!(name.get_string("translate"), Some("Creaking"));
    }

    #[test]
    fn test_serializer_ids_match_table() {
        assert_eq!(
            ENTITY_DATA_TYPES_1_21.type_id(EntityDataKind::VarInt),
            Some(VARINT_TYPE)
        );
        assert_eq!(
            ENTITY_DATA_TYPES_1_21.type_id(EntityDataKind::OptionalComponent),
            Some(OPTIONAL_COMPONENT_TYPE)
        );
        assert_eq!(
            ENTITY_DATA_TYPES_1_21.type_id(EntityDataKind::Boolean),
            Some(BOOLEAN_TYPE)
        );
    }
}
