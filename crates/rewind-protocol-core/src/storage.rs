//! Per-connection translation state.

use std::collections::{HashMap, HashSet};

use rewind_types::Identifier;
use tracing::debug;

use crate::error::TranslateError;

/// Last known position and rotation of the local player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
}

impl PlayerPosition {
    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn set_rotation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
    }
}

/// Sneak and sprint state of the local player.
///
/// `sneaking` and `sprinting` are what the server was last told through player commands.
/// `input_sneaking` is the sneak key state from the last player input packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementFlags {
    pub sneaking: bool,
    pub sprinting: bool,
    input_sneaking: bool,
}

impl MovementFlags {
    /// Record the sneak key state. Returns true when the key changed and the server
    /// does not already know about the new state, i.e. a player command must be sent.
    pub fn set_sneaking(&mut self, sneaking: bool) -> bool {
        let changed = self.input_sneaking != sneaking;
        self.input_sneaking = sneaking;
        if changed && self.sneaking != sneaking {
            self.sneaking = sneaking;
            true
        } else {
            false
        }
    }
}

/// The vehicle the local player is riding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientVehicle {
    pub vehicle_id: i32,
}

/// Entities and the world known to the client.
#[derive(Debug, Clone, Default)]
pub struct EntityTracker {
    client_entity_id: Option<i32>,
    entities: HashMap<i32, i32>,
    named: HashSet<i32>,
    current_world: Option<Identifier>,
}

impl EntityTracker {
    pub fn client_entity_id(&self) -> Option<i32> {
        self.client_entity_id
    }

    pub fn set_client_entity_id(&mut self, id: i32) {
        self.client_entity_id = Some(id);
    }

    /// Track an entity by its server-side type id.
    pub fn add_entity(&mut self, entity_id: i32, type_id: i32) {
        self.entities.insert(entity_id, type_id);
        self.named.remove(&entity_id);
    }

    pub fn remove_entity(&mut self, entity_id: i32) {
        self.entities.remove(&entity_id);
        self.named.remove(&entity_id);
    }

    pub fn entity_type(&self, entity_id: i32) -> Option<i32> {
        self.entities.get(&entity_id).copied()
    }

    /// Marks the entity as having received its display name. Returns false if it already had.
    pub fn mark_named(&mut self, entity_id: i32) -> bool {
        self.named.insert(entity_id)
    }

    /// Switch worlds. Entities do not survive a world change.
    pub fn set_world(&mut self, world: Identifier) {
        if self.current_world.as_ref() != Some(&world) {
            debug!("World changed to {}, forgetting {} entities", world, self.entities.len());
            self.entities.clear();
            self.named.clear();
        }
        self.current_world = Some(world);
    }
}

/// A record kind that a [`UserConnection`] can hold at most one of.
pub trait StorableObject: Sized + 'static {
    const NAME: &'static str;

    fn slot(user: &UserConnection) -> &Option<Self>;
    fn slot_mut(user: &mut UserConnection) -> &mut Option<Self>;
}

macro_rules! storable {
    ($ty:ty, $field:ident, $name:literal) => {
        impl StorableObject for $ty {
            const NAME: &'static str = $name;

            fn slot(user: &UserConnection) -> &Option<Self> {
                &user.$field
            }

            fn slot_mut(user: &mut UserConnection) -> &mut Option<Self> {
                &mut user.$field
            }
        }
    };
}

/// State owned by one client connection. Records exist only after being put.
#[derive(Debug, Default)]
pub struct UserConnection {
    position: Option<PlayerPosition>,
    movement: Option<MovementFlags>,
    vehicle: Option<ClientVehicle>,
    tracker: Option<EntityTracker>,
}

storable!(PlayerPosition, position, "player position");
storable!(MovementFlags, movement, "movement flags");
storable!(ClientVehicle, vehicle, "client vehicle");
storable!(EntityTracker, tracker, "entity tracker");

impl UserConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: StorableObject>(&self) -> Option<&T> {
        T::slot(self).as_ref()
    }

    pub fn get_mut<T: StorableObject>(&mut self) -> Option<&mut T> {
        T::slot_mut(self).as_mut()
    }

    pub fn has<T: StorableObject>(&self) -> bool {
        T::slot(self).is_some()
    }

    /// Store a record, replacing any previous one of the same kind.
    pub fn put<T: StorableObject>(&mut self, value: T) {
        *T::slot_mut(self) = Some(value);
    }

    pub fn remove<T: StorableObject>(&mut self) -> Option<T> {
        T::slot_mut(self).take()
    }

    /// Like [`get`](Self::get) for records the translator installs on init.
    pub fn require<T: StorableObject>(&self) -> Result<&T, TranslateError> {
        self.get::<T>().ok_or(TranslateError::MissingStorage(T::NAME))
    }

    pub fn require_mut<T: StorableObject>(&mut self) -> Result<&mut T, TranslateError> {
        self.get_mut::<T>()
            .ok_or(TranslateError::MissingStorage(T::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_does_not_create() {
        let user = UserConnection::new();
        assert!(user.get::<PlayerPosition>().is_none());
        assert!(!user.has::<ClientVehicle>());
        assert!(matches!(
            user.require::<EntityTracker>(),
            Err(TranslateError::MissingStorage("entity tracker"))
        ));
    }

    #[test]
    fn test_put_replace_remove() {
        let mut user = UserConnection::new();
        user.put(ClientVehicle { vehicle_id: 5 });
        user.put(ClientVehicle { vehicle_id: 6 });
        assert_eq!(user.get::<ClientVehicle>().unwrap().vehicle_id, 6);
        assert_eq!(user.remove::<ClientVehicle>(), Some(ClientVehicle { vehicle_id: 6 }));
        assert!(user.remove::<ClientVehicle>().is_none());
    }

    #[test]
    fn test_sneak_edges() {
        let mut flags = MovementFlags::default();
        assert!(flags.set_sneaking(true));
        assert!(!flags.set_sneaking(true));
        assert!(flags.set_sneaking(false));

        // server already knows via a player command
        flags.sneaking = true;
        assert!(!flags.set_sneaking(true));
        assert!(flags.set_sneaking(false));
    }

    #[test]
    fn test_world_change_clears_entities() {
        let mut tracker = EntityTracker::default();
        tracker.set_client_entity_id(1);
        tracker.set_world(Identifier::minecraft("overworld"));
        tracker.add_entity(7, 10);
        tracker.set_world(Identifier::minecraft("overworld"));
        assert_eq!(tracker.entity_type(7), Some(10));
        tracker.set_world(Identifier::minecraft("the_nether"));
        assert_eq!(tracker.entity_type(7), None);
        assert_eq!(tracker.client_entity_id(), Some(1));
    }

    #[test]
    fn test_mark_named_once() {
        let mut tracker = EntityTracker::default();
        tracker.add_entity(3, 29);
        assert!(tracker.mark_named(3));
        assert!(!tracker.mark_named(3));
        tracker.remove_entity(3);
        assert!(tracker.mark_named(3));
    }
}
