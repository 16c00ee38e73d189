use std::collections::HashMap;

use tracing::trace;

use crate::error::TranslateError;
use crate::packets::PacketType;
use crate::storage::UserConnection;
use crate::wrapper::PacketWrapper;
use crate::{ConnectionState, Direction};

/// A packet rewrite step. `C` is the translator that owns the handler.
pub type PacketHandler<C> =
    fn(&C, &mut PacketWrapper, &mut UserConnection) -> Result<(), TranslateError>;

struct HandlerEntry<C> {
    target: Option<i32>,
    handler: Option<PacketHandler<C>>,
}

/// Handler table keyed by (state, direction, source packet id), built once per translator.
///
/// Source ids are in the protocol the packet arrives in: the server protocol for clientbound
/// packets and the client protocol for serverbound ones.
pub struct PacketHandlers<C> {
    entries: HashMap<(ConnectionState, Direction, i32), HandlerEntry<C>>,
}

impl<C> Default for PacketHandlers<C> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<C> PacketHandlers<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source id. A `None` target cancels the packet.
    pub fn register(
        &mut self,
        state: ConnectionState,
        direction: Direction,
        source: i32,
        target: Option<i32>,
        handler: Option<PacketHandler<C>>,
    ) {
        self.entries
            .insert((state, direction, source), HandlerEntry { target, handler });
    }

    /// Map every packet of `F` onto the packet of `T` with the same name, without a
    /// handler. Packets with no counterpart are cancelled.
    pub fn map_by_name<F: PacketType, T: PacketType>(
        &mut self,
        state: ConnectionState,
        direction: Direction,
    ) {
        for packet in F::ALL {
            let target = T::from_name(packet.name()).map(T::id);
            self.register(state, direction, packet.id(), target, None);
        }
    }

    pub fn clientbound<F: PacketType, T: PacketType>(
        &mut self,
        from: F,
        to: T,
        handler: PacketHandler<C>,
    ) {
        self.register(
            ConnectionState::Play,
            Direction::Clientbound,
            from.id(),
            Some(to.id()),
            Some(handler),
        );
    }

    pub fn serverbound<F: PacketType, T: PacketType>(
        &mut self,
        from: F,
        to: T,
        handler: PacketHandler<C>,
    ) {
        self.register(
            ConnectionState::Play,
            Direction::Serverbound,
            from.id(),
            Some(to.id()),
            Some(handler),
        );
    }

    pub fn cancel_clientbound<F: PacketType>(&mut self, state: ConnectionState, packet: F) {
        self.register(state, Direction::Clientbound, packet.id(), None, None);
    }

    /// Remap the packet id and run its handler. Ids without an entry pass through unchanged.
    pub fn handle(
        &self,
        translator: &C,
        state: ConnectionState,
        wrapper: &mut PacketWrapper,
        user: &mut UserConnection,
    ) -> Result<(), TranslateError> {
        let direction = wrapper.direction();
        let Some(entry) = self.entries.get(&(state, direction, wrapper.id())) else {
            trace!("No handler for {:?} packet 0x{:02X}", direction, wrapper.id());
            return Ok(());
        };
        match entry.target {
            Some(target) => wrapper.set_id(target),
            None => {
                trace!("Cancelled {:?} packet 0x{:02X}", direction, wrapper.id());
                wrapper.cancel();
                return Ok(());
            }
        }
        if let Some(handler) = entry.handler {
            handler(translator, wrapper, user)?;
        }
        Ok(())
    }
}

/// A translator between two adjacent protocol versions.
/// The server side runs the newer protocol.
pub trait ProtocolTranslator: Send + Sync {
    /// Protocol version of the server side.
    fn server_protocol(&self) -> i32;

    /// Protocol version of the client side.
    fn client_protocol(&self) -> i32;

    /// Install the per-connection state this translator needs.
    fn init(&self, _user: &mut UserConnection) {}

    /// Rewrite one packet in place. Errors drop the packet.
    fn translate(
        &self,
        state: ConnectionState,
        wrapper: &mut PacketWrapper,
        user: &mut UserConnection,
    ) -> Result<(), TranslateError>;
}
