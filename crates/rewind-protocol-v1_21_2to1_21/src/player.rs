//! Local player movement: teleports, rotation, input and held slot.

use std::f64::consts::PI;

use rewind_protocol_core::field::*;
use rewind_protocol_core::*;
use rewind_types::Vec3d;

use crate::adapter::Protocol1_21_2To1_21;

// Relative argument bits of 1.21.2 teleports
const REL_X: i32 = 1;
const REL_Y: i32 = 1 << 1;
const REL_Z: i32 = 1 << 2;
const REL_Y_ROT: i32 = 1 << 3;
const REL_X_ROT: i32 = 1 << 4;
const REL_DELTA_X: i32 = 1 << 5;
const REL_DELTA_Y: i32 = 1 << 6;
const REL_DELTA_Z: i32 = 1 << 7;
const REL_ROTATE_DELTA: i32 = 1 << 8;
const REL_DELTA: i32 = REL_DELTA_X | REL_DELTA_Y | REL_DELTA_Z;

// 1.21.2 player input flags
const INPUT_FORWARD: u8 = 1;
const INPUT_BACKWARD: u8 = 1 << 1;
const INPUT_LEFT: u8 = 1 << 2;
const INPUT_RIGHT: u8 = 1 << 3;
const INPUT_JUMP: u8 = 1 << 4;
const INPUT_SNEAK: u8 = 1 << 5;

pub(crate) fn register_packets(handlers: &mut PacketHandlers<Protocol1_21_2To1_21>) {
    handlers.clientbound(
        ClientboundPackets1_21_2::EntityPositionSync,
        ClientboundPackets1_21::TeleportEntity,
        entity_position_sync,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::TeleportEntity,
        ClientboundPackets1_21::TeleportEntity,
        teleport_entity,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::PlayerPosition,
        ClientboundPackets1_21::PlayerPosition,
        player_position,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::PlayerRotation,
        ClientboundPackets1_21::PlayerLookAt,
        player_rotation,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::SetHeldSlot,
        ClientboundPackets1_21::SetCarriedItem,
        set_held_slot,
    );

    handlers.serverbound(
        ServerboundPackets1_21::PlayerCommand,
        ServerboundPackets1_21_2::PlayerCommand,
        player_command,
    );
    handlers.serverbound(
        ServerboundPackets1_21::PlayerInput,
        ServerboundPackets1_21_2::PlayerInput,
        player_input,
    );
    handlers.serverbound(
        ServerboundPackets1_21::MovePlayerPos,
        ServerboundPackets1_21_2::MovePlayerPos,
        move_player_pos,
    );
    handlers.serverbound(
        ServerboundPackets1_21::MovePlayerPosRot,
        ServerboundPackets1_21_2::MovePlayerPosRot,
        move_player_pos_rot,
    );
    handlers.serverbound(
        ServerboundPackets1_21::MovePlayerRot,
        ServerboundPackets1_21_2::MovePlayerRot,
        move_player_rot,
    );
    handlers.serverbound(
        ServerboundPackets1_21::MovePlayerStatusOnly,
        ServerboundPackets1_21_2::MovePlayerStatusOnly,
        move_player_status_only,
    );
    handlers.serverbound(
        ServerboundPackets1_21::MoveVehicle,
        ServerboundPackets1_21_2::MoveVehicle,
        move_vehicle,
    );
}

/// Absolute or relative teleport target as sent by a 1.21.2 server.
#[derive(Debug, Clone, Copy)]
struct Teleport {
    position: Vec3d,
    movement: Vec3d,
    yaw: f32,
    pitch: f32,
    relatives: i32,
}

impl Teleport {
    fn read(wrapper: &mut PacketWrapper) -> CodecResult<Self> {
        Ok(Self {
            position: read_vec3d(wrapper)?,
            movement: read_vec3d(wrapper)?,
            yaw: wrapper.read::<Float>()?,
            pitch: wrapper.read::<Float>()?,
            relatives: wrapper.read::<Int>()?,
        })
    }

    /// The absolute target of this teleport when applied to `stored`.
    fn resolve(mut self, stored: &PlayerPosition) -> Self {
        if self.relatives & REL_X != 0 {
            self.position.x += stored.x;
        }
        if self.relatives & REL_Y != 0 {
            self.position.y += stored.y;
        }
        if self.relatives & REL_Z != 0 {
            self.position.z += stored.z;
        }
        if self.relatives & REL_Y_ROT != 0 {
            self.yaw += stored.yaw;
        }
        if self.relatives & REL_X_ROT != 0 {
            self.pitch += stored.pitch;
        }
        if self.relatives & REL_ROTATE_DELTA != 0 {
            self.movement =
                rotate_movement(self.movement, stored.yaw - self.yaw, stored.pitch - self.pitch);
        }
        self
    }
}

/// Rotates `movement` by `yaw` degrees in the X/Z plane, then by `pitch` degrees in the Y/Z plane.
fn rotate_movement(movement: Vec3d, yaw: f32, pitch: f32) -> Vec3d {
    let (sin, cos) = (yaw as f64).to_radians().sin_cos();
    let x = movement.x * cos + movement.z * sin;
    let z = movement.z * cos - movement.x * sin;

    let (sin, cos) = (pitch as f64).to_radians().sin_cos();
    let y = movement.y * cos + z * sin;
    let z = z * cos - movement.y * sin;
    Vec3d::new(x, y, z)
}

fn passthrough_vec3d(wrapper: &mut PacketWrapper) -> CodecResult<Vec3d> {
    Ok(Vec3d::new(
        wrapper.passthrough::<Double>()?,
        wrapper.passthrough::<Double>()?,
        wrapper.passthrough::<Double>()?,
    ))
}

fn write_vec3d(wrapper: &mut PacketWrapper, v: Vec3d) {
    wrapper.write::<Double>(v.x);
    wrapper.write::<Double>(v.y);
    wrapper.write::<Double>(v.z);
}

fn read_vec3d(wrapper: &mut PacketWrapper) -> CodecResult<Vec3d> {
    Ok(Vec3d::new(
        wrapper.read::<Double>()?,
        wrapper.read::<Double>()?,
        wrapper.read::<Double>()?,
    ))
}

fn write_packed_rotation(wrapper: &mut PacketWrapper, yaw: f32, pitch: f32) {
    wrapper.write::<Byte>(pack_angle(yaw));
    wrapper.write::<Byte>(pack_angle(pitch));
}

fn entity_position_sync(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    wrapper.passthrough::<VarInt>()?; // entity id
    passthrough_vec3d(wrapper)?;
    read_vec3d(wrapper)?; // delta movement
    let yaw = wrapper.read::<Float>()?;
    let pitch = wrapper.read::<Float>()?;
    write_packed_rotation(wrapper, yaw, pitch);
    Ok(())
}

fn teleport_entity(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let entity_id = wrapper.passthrough::<VarInt>()?;
    let teleport = Teleport::read(wrapper)?;

    // 1.21 entity teleports are absolute
    let client = user.require::<EntityTracker>()?.client_entity_id();
    let target = if client == Some(entity_id) {
        resolve_relative_arguments(protocol, wrapper, user, teleport)?
    } else {
        // no stored state for other entities, only absolute motion carries over
        if teleport.relatives & REL_DELTA == 0 {
            wrapper.send_after(entity_motion(entity_id, teleport.movement));
        }
        teleport
    };
    write_vec3d(wrapper, target.position);
    write_packed_rotation(wrapper, target.yaw, target.pitch);
    Ok(())
}

fn player_position(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let teleport_id = wrapper.read::<VarInt>()?;
    let teleport = Teleport::read(wrapper)?;
    write_vec3d(wrapper, teleport.position);
    wrapper.write::<Float>(teleport.yaw);
    wrapper.write::<Float>(teleport.pitch);
    wrapper.write::<Byte>(teleport.relatives as i8);
    wrapper.write::<VarInt>(teleport_id);

    resolve_relative_arguments(protocol, wrapper, user, teleport)?;
    Ok(())
}

/// Resolve a teleport against the stored player state and emulate its delta movement:
/// fully relative motion becomes a zero-power explosion, fully absolute motion an entity
/// motion packet. Mixed motion cannot be expressed and is dropped.
///
/// Nothing is stored unless the whole teleport can be applied.
fn resolve_relative_arguments(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
    teleport: Teleport,
) -> Result<Teleport, TranslateError> {
    let resolved = teleport.resolve(user.require::<PlayerPosition>()?);

    let emulation = match teleport.relatives & REL_DELTA {
        REL_DELTA => Some(explosion(resolved.movement)),
        0 => {
            let client = user
                .require::<EntityTracker>()?
                .client_entity_id()
                .ok_or(TranslateError::MissingStorage("client entity id"))?;
            Some(entity_motion(client, resolved.movement))
        }
        _ => None,
    };

    let storage = user.require_mut::<PlayerPosition>()?;
    storage.set_position(resolved.position.x, resolved.position.y, resolved.position.z);
    storage.set_rotation(resolved.yaw, resolved.pitch);

    match emulation {
        Some(packet) => wrapper.send_after(packet),
        None => protocol.warn_mixed_deltas(),
    }
    Ok(resolved)
}

/// An explosion without blocks, particles or power that only adds `knockback` to the player.
fn explosion(knockback: Vec3d) -> PacketWrapper {
    let mut packet =
        PacketWrapper::create(Direction::Clientbound, ClientboundPackets1_21::Explode.id());
    let center = Vec3d::ZERO;
    packet.write::<Double>(center.x);
    packet.write::<Double>(center.y);
    packet.write::<Double>(center.z);
    packet.write::<Float>(0.0); // power
    packet.write::<VarInt>(0); // affected blocks
    packet.write::<Float>(knockback.x as f32);
    packet.write::<Float>(knockback.y as f32);
    packet.write::<Float>(knockback.z as f32);
    packet.write::<VarInt>(0); // block interaction
    packet.write::<VarInt>(0); // small particle
    packet.write::<VarInt>(0); // large particle
    packet.write::<VarInt>(0); // inline sound event
    packet.write::<Str>(String::new());
    packet.write::<Boolean>(false); // no fixed range
    packet
}

fn entity_motion(entity_id: i32, motion: Vec3d) -> PacketWrapper {
    let mut packet = PacketWrapper::create(
        Direction::Clientbound,
        ClientboundPackets1_21::SetEntityMotion.id(),
    );
    packet.write::<VarInt>(entity_id);
    packet.write::<Short>(pack_velocity(motion.x));
    packet.write::<Short>(pack_velocity(motion.y));
    packet.write::<Short>(pack_velocity(motion.z));
    packet
}

/// Unit vector the player looks along.
fn look_vector(yaw: f32, pitch: f32) -> Vec3d {
    let y_rad = (yaw as f64).to_radians();
    let x_rad = (pitch as f64).to_radians();
    let factor = -(-x_rad).cos();
    Vec3d::new(
        (-y_rad - PI).sin() * factor,
        (-x_rad).sin(),
        (-y_rad - PI).cos() * factor,
    )
}

fn player_rotation(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let yaw = wrapper.read::<Float>()?;
    let pitch = wrapper.read::<Float>()?;

    let storage = user.require::<PlayerPosition>()?;
    let target = Vec3d::new(storage.x, storage.y, storage.z) + look_vector(yaw, pitch);
    wrapper.write::<VarInt>(0); // from feet
    wrapper.write::<Double>(target.x);
    wrapper.write::<Double>(target.y);
    wrapper.write::<Double>(target.z);
    wrapper.write::<Boolean>(false); // not at an entity

    // look-at does not report back to the server, so confirm the rotation for the client
    let mut rotation = PacketWrapper::create(
        Direction::Serverbound,
        ServerboundPackets1_21_2::MovePlayerRot.id(),
    );
    rotation.write::<Float>(yaw);
    rotation.write::<Float>(pitch);
    rotation.write::<UnsignedByte>(0); // on ground, horizontal collision
    wrapper.send_after(rotation);
    Ok(())
}

fn set_held_slot(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    let slot = wrapper.read::<VarInt>()?;
    wrapper.write::<Byte>(slot as i8);
    Ok(())
}

fn player_command(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    wrapper.passthrough::<VarInt>()?; // entity id
    let action = wrapper.passthrough::<VarInt>()?;

    let flags = user.require_mut::<MovementFlags>()?;
    match action {
        0 => flags.sneaking = true,
        1 => flags.sneaking = false,
        3 => flags.sprinting = true,
        4 => flags.sprinting = false,
        _ => {}
    }
    Ok(())
}

fn player_input(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let sideways = wrapper.read::<Float>()?;
    let forward = wrapper.read::<Float>()?;
    let flags = wrapper.read::<UnsignedByte>()?;

    let mut input = 0;
    if forward > 0.0 {
        input |= INPUT_FORWARD;
    } else if forward < 0.0 {
        input |= INPUT_BACKWARD;
    }
    if sideways < 0.0 {
        input |= INPUT_LEFT;
    } else if sideways > 0.0 {
        input |= INPUT_RIGHT;
    }
    if flags & 1 != 0 {
        input |= INPUT_JUMP;
    }
    let sneaking = flags & 2 != 0;
    if sneaking {
        input |= INPUT_SNEAK;
    }
    // sprinting is not part of the 1.21 input
    wrapper.write::<UnsignedByte>(input);

    // input no longer toggles sneaking on the server, tell it through a player command
    if user.require_mut::<MovementFlags>()?.set_sneaking(sneaking) {
        let client = user
            .require::<EntityTracker>()?
            .client_entity_id()
            .ok_or(TranslateError::MissingStorage("client entity id"))?;
        let mut command = PacketWrapper::create(
            Direction::Serverbound,
            ServerboundPackets1_21_2::PlayerCommand.id(),
        );
        command.write::<VarInt>(client);
        command.write::<VarInt>(if sneaking { 0 } else { 1 });
        command.write::<VarInt>(0); // data
        wrapper.send_after(command);
    }
    Ok(())
}

/// The on-ground boolean became a flags byte.
fn fix_on_ground(wrapper: &mut PacketWrapper) -> Result<(), TranslateError> {
    let on_ground = wrapper.read::<Boolean>()?;
    wrapper.write::<UnsignedByte>(on_ground as u8);
    Ok(())
}

fn move_player_pos(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let position = passthrough_vec3d(wrapper)?;
    fix_on_ground(wrapper)?;
    user.require_mut::<PlayerPosition>()?
        .set_position(position.x, position.y, position.z);
    Ok(())
}

fn move_player_pos_rot(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let position = passthrough_vec3d(wrapper)?;
    let yaw = wrapper.passthrough::<Float>()?;
    let pitch = wrapper.passthrough::<Float>()?;
    fix_on_ground(wrapper)?;
    let storage = user.require_mut::<PlayerPosition>()?;
    storage.set_position(position.x, position.y, position.z);
    storage.set_rotation(yaw, pitch);
    Ok(())
}

fn move_player_rot(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let yaw = wrapper.passthrough::<Float>()?;
    let pitch = wrapper.passthrough::<Float>()?;
    fix_on_ground(wrapper)?;
    user.require_mut::<PlayerPosition>()?
        .set_rotation(yaw, pitch);
    Ok(())
}

fn move_player_status_only(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    fix_on_ground(wrapper)
}

fn move_vehicle(
    _: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    user: &mut UserConnection,
) -> Result<(), TranslateError> {
    let position = passthrough_vec3d(wrapper)?;
    let yaw = wrapper.passthrough::<Float>()?;
    let pitch = wrapper.passthrough::<Float>()?;
    if user.has::<ClientVehicle>() {
        let storage = user.require_mut::<PlayerPosition>()?;
        storage.set_position(position.x, position.y, position.z);
        storage.set_rotation(yaw, pitch);
    }
    Ok(())
}
