use bytes::BytesMut;
use rewind_nbt::NbtValue;
use rewind_protocol_core::codec::{read_bool, read_length, read_string, write_string, write_varint};
use rewind_protocol_core::{CodecResult, PacketWrapper, TranslateError};
use rewind_types::Identifier;
use tracing::debug;

const MAX_IDENTIFIER: usize = 32767;

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    pub id: String,
    pub data: Option<NbtValue>,
}

/// Body of a configuration REGISTRY_DATA packet.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryData {
    pub key: String,
    pub entries: Vec<RegistryEntry>,
}

impl RegistryData {
    pub fn read(buf: &mut BytesMut) -> CodecResult<Self> {
        let key = read_string(buf, MAX_IDENTIFIER)?;
        let count = read_length(buf)?;
        let mut entries = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            let id = read_string(buf, MAX_IDENTIFIER)?;
            let data = if read_bool(buf)? {
                Some(NbtValue::read_root_network(buf)?)
            } else {
                None
            };
            entries.push(RegistryEntry { id, data });
        }
        Ok(Self { key, entries })
    }

    pub fn write(&self, buf: &mut BytesMut) {
        write_string(buf, &self.key);
        write_varint(buf, self.entries.len() as i32);
        for entry in &self.entries {
            write_string(buf, &entry.id);
            match &entry.data {
                Some(data) => {
                    buf.extend_from_slice(&[1]);
                    data.write_root_network(buf);
                }
                None => buf.extend_from_slice(&[0]),
            }
        }
    }

    /// Registry key without the `minecraft:` namespace.
    pub fn short_key(&self) -> &str {
        Identifier::strip_minecraft(&self.key)
    }
}

pub type EffectRewriter = fn(&mut NbtValue);

/// Rewrites registry contents sent during configuration.
#[derive(Default)]
pub struct RegistryDataRewriter {
    removed: Vec<String>,
    enchantment_effects: Vec<(String, EffectRewriter)>,
}

impl RegistryDataRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the whole registry; the older client has it built in.
    pub fn remove_registry(&mut self, key: &str) -> &mut Self {
        self.removed.push(Identifier::strip_minecraft(key).to_owned());
        self
    }

    /// Rewrite enchantment effect compounds whose `type` is `effect_type`.
    pub fn add_enchantment_effect_rewriter(
        &mut self,
        effect_type: &str,
        rewriter: EffectRewriter,
    ) -> &mut Self {
        self.enchantment_effects
            .push((Identifier::strip_minecraft(effect_type).to_owned(), rewriter));
        self
    }

    /// Apply the registered rewrites. Ids without a rewrite are left as they are.
    pub fn rewrite(&self, registry: &mut RegistryData) {
        if registry.short_key() != "enchantment" || self.enchantment_effects.is_empty() {
            return;
        }
        for entry in &mut registry.entries {
            if let Some(effects) = entry
                .data
                .as_mut()
                .and_then(|data| data.get_compound_mut("effects"))
            {
                self.rewrite_effects(effects);
            }
        }
    }

    fn rewrite_effects(&self, tag: &mut NbtValue) {
        match tag {
            NbtValue::List(items) => {
                for item in items {
                    self.rewrite_effects(item);
                }
            }
            NbtValue::Compound(entries) => {
                for (_, value) in entries.iter_mut() {
                    self.rewrite_effects(value);
                }
                let Some(ty) = tag.get_string("type").map(Identifier::strip_minecraft) else {
                    return;
                };
                if let Some((_, rewriter)) =
                    self.enchantment_effects.iter().find(|(name, _)| name == ty)
                {
                    rewriter(tag);
                }
            }
            _ => {}
        }
    }

    /// Read, rewrite and re-write a REGISTRY_DATA packet. Returns `None` when the
    /// registry was removed and the packet cancelled.
    pub fn handle(
        &self,
        wrapper: &mut PacketWrapper,
    ) -> Result<Option<RegistryData>, TranslateError> {
        let mut registry = RegistryData::read(wrapper.input_mut())?;
        if self.removed.iter().any(|key| key == registry.short_key()) {
            debug!("Removed registry {}", registry.key);
            wrapper.cancel();
            return Ok(None);
        }
        self.rewrite(&mut registry);
        registry.write(wrapper.output_mut());
        Ok(Some(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_nbt::{nbt_compound, nbt_list};
    use rewind_protocol_core::Direction;

    fn rename_damage(effect: &mut NbtValue) {
        effect.put_string("type", "damage_item");
    }

    fn enchantment() -> RegistryData {
        RegistryData {
            key: "minecraft:enchantment".into(),
            entries: vec![
                RegistryEntry {
                    id: "minecraft:unbreaking".into(),
                    data: Some(nbt_compound! {
                        "effects" => nbt_compound! {
                            "minecraft:item_damage" => nbt_list![nbt_compound! {
                                "effect" => nbt_compound! {
                                    "type" => NbtValue::String("minecraft:change_item_damage".into()),
                                },
                            }],
                        },
                    }),
                },
                RegistryEntry {
                    id: "minecraft:mending".into(),
                    data: None,
                },
            ],
        }
    }

    #[test]
    fn test_enchantment_effect_rewritten() {
        let mut rewriter = RegistryDataRewriter::new();
        rewriter.add_enchantment_effect_rewriter("change_item_damage", rename_damage);
        let mut registry = enchantment();
        rewriter.rewrite(&mut registry);
        let effect = registry.entries[0]
            .data
            .as_ref()
            .and_then(|d| d.get("effects"))
            .and_then(|e| e.get("minecraft:item_damage"))
            .and_then(|l| match l {
                NbtValue::List(items) => items[0].get("effect"),
                _ => None,
            })
            .unwrap();
        assert_eq!(effect.get_string("type"), Some("damage_item"));
        assert_eq!(registry.entries[1].data, None);
    }

    #[test]
    fn test_other_registries_untouched() {
        let mut rewriter = RegistryDataRewriter::new();
        rewriter.add_enchantment_effect_rewriter("change_item_damage", rename_damage);
        let mut registry = enchantment();
        registry.key = "minecraft:damage_type".into();
        let before = registry.clone();
        rewriter.rewrite(&mut registry);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_handle_round_trips_and_removes() {
        let mut payload = BytesMut::new();
        enchantment().write(&mut payload);

        let rewriter = RegistryDataRewriter::new();
        let mut wrapper = PacketWrapper::new(Direction::Clientbound, 0x07, payload.clone());
        let registry = rewriter.handle(&mut wrapper).unwrap();
        assert_eq!(registry, Some(enchantment()));
        assert_eq!(wrapper.finish()[0].payload, payload);

        let mut rewriter = RegistryDataRewriter::new();
        rewriter.remove_registry("minecraft:enchantment");
        let mut wrapper = PacketWrapper::new(Direction::Clientbound, 0x07, payload);
        assert_eq!(rewriter.handle(&mut wrapper).unwrap(), None);
        assert!(wrapper.finish().is_empty());
    }
}
