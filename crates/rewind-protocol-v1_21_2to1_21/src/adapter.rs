use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rewind_data::{EntityTypes1_21_2, MappingData};
use rewind_protocol_core::*;
use rewind_rewriters::{ComponentRewriter, EntityDataFilter, RegistryDataRewriter, TranslatableRewriter};
use tracing::warn;

use crate::{entity, player, registries};

/// Translates between a 1.21.2 server (protocol 768) and a 1.21 client (protocol 767).
pub struct Protocol1_21_2To1_21 {
    handlers: PacketHandlers<Self>,
    entity_data: EntityDataFilter<EntityTypes1_21_2>,
    mappings: Arc<MappingData>,
    translatable: TranslatableRewriter,
    registries: RegistryDataRewriter,
    warned_mixed_deltas: AtomicBool,
}

impl Protocol1_21_2To1_21 {
    pub fn new(mappings: Arc<MappingData>, config: &TranslatorConfig) -> Self {
        let mut handlers = PacketHandlers::new();
        handlers.map_by_name::<ClientboundPackets1_21_2, ClientboundPackets1_21>(
            ConnectionState::Play,
            Direction::Clientbound,
        );
        handlers.map_by_name::<ServerboundPackets1_21, ServerboundPackets1_21_2>(
            ConnectionState::Play,
            Direction::Serverbound,
        );
        entity::register_packets(&mut handlers);
        player::register_packets(&mut handlers);
        registries::register_packets(&mut handlers);
        register_text_packets(&mut handlers);

        Self {
            handlers,
            entity_data: entity::entity_data_filter(&mappings),
            translatable: TranslatableRewriter::new(mappings.clone()),
            registries: registries::registry_rewriter(),
            mappings,
            warned_mixed_deltas: AtomicBool::new(config.suppress_emulation_warnings),
        }
    }

    pub(crate) fn mappings(&self) -> &MappingData {
        &self.mappings
    }

    pub(crate) fn entity_data(&self) -> &EntityDataFilter<EntityTypes1_21_2> {
        &self.entity_data
    }

    pub(crate) fn translatable(&self) -> &TranslatableRewriter {
        &self.translatable
    }

    pub(crate) fn registries(&self) -> &RegistryDataRewriter {
        &self.registries
    }

    /// Mixed relative and absolute delta movement cannot be emulated. Logged once per
    /// translator unless suppressed in the config.
    pub(crate) fn warn_mixed_deltas(&self) {
        if !self.warned_mixed_deltas.swap(true, Ordering::Relaxed) {
            warn!(
                "Mixed relative and absolute delta movement is not supported for 1.21 clients, \
                 player movement will be off"
            );
        }
    }
}

impl ProtocolTranslator for Protocol1_21_2To1_21 {
    fn server_protocol(&self) -> i32 {
        768
    }

    fn client_protocol(&self) -> i32 {
        767
    }

    fn init(&self, user: &mut UserConnection) {
        user.put(PlayerPosition::default());
        user.put(MovementFlags::default());
        user.put(EntityTracker::default());
    }

    fn translate(
        &self,
        state: ConnectionState,
        wrapper: &mut PacketWrapper,
        user: &mut UserConnection,
    ) -> Result<(), TranslateError> {
        self.handlers.handle(self, state, wrapper, user)
    }
}

fn register_text_packets(handlers: &mut PacketHandlers<Protocol1_21_2To1_21>) {
    handlers.clientbound(
        ClientboundPackets1_21_2::SystemChat,
        ClientboundPackets1_21::SystemChat,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::SetActionBarText,
        ClientboundPackets1_21::SetActionBarText,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::SetTitleText,
        ClientboundPackets1_21::SetTitleText,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::SetSubtitleText,
        ClientboundPackets1_21::SetSubtitleText,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::Disconnect,
        ClientboundPackets1_21::Disconnect,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21_2::TabList,
        ClientboundPackets1_21::TabList,
        tab_list,
    );

    let disconnect = ClientboundConfigurationPackets1_21::Disconnect.id();
    handlers.register(
        ConnectionState::Configuration,
        Direction::Clientbound,
        disconnect,
        Some(disconnect),
        Some(component as PacketHandler<_>),
    );
}

fn component(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    protocol.translatable().passthrough_tag(wrapper)
}

fn tab_list(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    protocol.translatable().passthrough_tag(wrapper)?; // header
    protocol.translatable().passthrough_tag(wrapper) // footer
}
