use std::sync::Arc;

use rewind_data::MappingData;
use rewind_protocol_core::*;
use rewind_rewriters::{ComponentRewriter, RegistryDataRewriter};

use crate::component::ComponentRewriter1_21;

/// Translates between a 1.21 server (protocol 767) and a 1.20.5 client (protocol 766).
///
/// Serverbound packets are identical between the two versions and pass through.
pub struct Protocol1_21To1_20_5 {
    handlers: PacketHandlers<Self>,
    components: ComponentRewriter1_21,
    registries: RegistryDataRewriter,
}

impl Protocol1_21To1_20_5 {
    pub fn new(mappings: Arc<MappingData>) -> Self {
        let mut handlers = PacketHandlers::new();
        // custom_report_details and server_links have no 1.20.5 counterpart and are cancelled
        handlers.map_by_name::<ClientboundPackets1_21, ClientboundPackets1_20_5>(
            ConnectionState::Play,
            Direction::Clientbound,
        );
        handlers.map_by_name::<ClientboundConfigurationPackets1_21, ClientboundConfigurationPackets1_20_5>(
            ConnectionState::Configuration,
            Direction::Clientbound,
        );
        register_text_packets(&mut handlers);

        let registry_data = ClientboundConfigurationPackets1_21::RegistryData.id();
        handlers.register(
            ConnectionState::Configuration,
            Direction::Clientbound,
            registry_data,
            Some(ClientboundConfigurationPackets1_20_5::RegistryData.id()),
            Some(registry_data_handler as PacketHandler<_>),
        );

        let mut registries = RegistryDataRewriter::new();
        registries
            .remove_registry("minecraft:enchantment")
            .remove_registry("minecraft:jukebox_song");

        Self {
            handlers,
            components: ComponentRewriter1_21::new(mappings),
            registries,
        }
    }
}

impl ProtocolTranslator for Protocol1_21To1_20_5 {
    fn server_protocol(&self) -> i32 {
        767
    }

    fn client_protocol(&self) -> i32 {
        766
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

fn register_text_packets(handlers: &mut PacketHandlers<Protocol1_21To1_20_5>) {
    handlers.clientbound(
        ClientboundPackets1_21::SystemChat,
        ClientboundPackets1_20_5::SystemChat,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21::SetActionBarText,
        ClientboundPackets1_20_5::SetActionBarText,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21::SetTitleText,
        ClientboundPackets1_20_5::SetTitleText,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21::SetSubtitleText,
        ClientboundPackets1_20_5::SetSubtitleText,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21::Disconnect,
        ClientboundPackets1_20_5::Disconnect,
        component,
    );
    handlers.clientbound(
        ClientboundPackets1_21::TabList,
        ClientboundPackets1_20_5::TabList,
        tab_list,
    );

    handlers.register(
        ConnectionState::Configuration,
        Direction::Clientbound,
        ClientboundConfigurationPackets1_21::Disconnect.id(),
        Some(ClientboundConfigurationPackets1_20_5::Disconnect.id()),
        Some(component as PacketHandler<_>),
    );
}

fn component(
    protocol: &Protocol1_21To1_20_5,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    protocol.components.passthrough_tag(wrapper)
}

fn tab_list(
    protocol: &Protocol1_21To1_20_5,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    protocol.components.passthrough_tag(wrapper)?;
    protocol.components.passthrough_tag(wrapper)
}

fn registry_data_handler(
    protocol: &Protocol1_21To1_20_5,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    protocol.registries.handle(wrapper)?;
    Ok(())
}
