use rewind_nbt::NbtValue;
use rewind_protocol_core::*;
use rewind_rewriters::RegistryDataRewriter;

use crate::adapter::Protocol1_21_2To1_21;

pub(crate) fn registry_rewriter() -> RegistryDataRewriter {
    let mut rewriter = RegistryDataRewriter::new();
    rewriter.add_enchantment_effect_rewriter("change_item_damage", rename_change_item_damage);
    rewriter
}

/// `change_item_damage` is `damage_item` before 1.21.2.
fn rename_change_item_damage(effect: &mut NbtValue) {
    effect.put_string("type", "minecraft:damage_item");
}

pub(crate) fn register_packets(handlers: &mut PacketHandlers<Protocol1_21_2To1_21>) {
    let id = ClientboundConfigurationPackets1_21::RegistryData.id();
    handlers.register(
        ConnectionState::Configuration,
        Direction::Clientbound,
        id,
        Some(id),
        Some(registry_data as PacketHandler<_>),
    );
}

fn registry_data(
    protocol: &Protocol1_21_2To1_21,
    wrapper: &mut PacketWrapper,
    _: &mut UserConnection,
) -> Result<(), TranslateError> {
    protocol.registries().handle(wrapper)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::{protocol, run, user};
    use bytes::BytesMut;
    use rewind_nbt::{nbt_compound, nbt_list};
    use rewind_rewriters::{RegistryData, RegistryEntry};

    fn send(
        protocol: &Protocol1_21_2To1_21,
        user: &mut UserConnection,
        registry: &RegistryData,
    ) -> Vec<OutgoingPacket> {
        let mut payload = BytesMut::new();
        registry.write(&mut payload);
        run(
            protocol,
            user,
            ConnectionState::Configuration,
            Direction::Clientbound,
            ClientboundConfigurationPackets1_21::RegistryData.id(),
            payload,
        )
        .unwrap()
    }

    #[test]
    fn test_change_item_damage_renamed() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let registry = RegistryData {
            key: "minecraft:enchantment".into(),
            entries: vec![RegistryEntry {
                id: "minecraft:unbreaking".into(),
                data: Some(nbt_compound! {
                    "effects" => nbt_compound! {
                        "minecraft:item_damage" => nbt_list![nbt_compound! {
                            "effect" => nbt_compound! {
                                "type" => NbtValue::String("minecraft:change_item_damage".into())
                            }
                        }]
                    }
                }),
            }],
        };
        let out = send(&protocol, &mut user, &registry);
        assert_eq!(out.len(), 1);
        let rewritten = RegistryData::read(&mut out[0].payload.clone()).unwrap();
        let effect = rewritten.entries[0]
            .data
            .as_ref()
            .and_then(|data| data.get("effects"))
            .and_then(|effects| effects.get("minecraft:item_damage"))
            .and_then(|list| match list {
                NbtValue::List(items) => items.first(),
                _ => None,
            })
            .and_then(|item| item.get("effect"))
            .unwrap();
        assert_eq!(effect.get_string("type"), Some("minecraft:damage_item"));
    }

    #[test]
    fn test_other_registries_untouched() {
        let protocol = protocol();
        let mut user = user(&protocol);
        let registry = RegistryData {
            key: "minecraft:wolf_variant".into(),
            entries: vec![RegistryEntry {
                id: "minecraft:pale".into(),
                data: None,
            }],
        };
        let out = send(&protocol, &mut user, &registry);
        let mut expected = BytesMut::new();
        registry.write(&mut expected);
        assert_eq!(out[0].payload, expected);
    }
}
