use std::sync::Arc;

use rewind_data::MappingData;
use rewind_nbt::NbtValue;
use rewind_protocol_core::field::{OptionalTag, Tag};
use rewind_protocol_core::{PacketWrapper, TranslateError};

/// Walks text components in their tag form and calls hooks on the parts a version
/// step needs to rewrite.
pub trait ComponentRewriter: Send + Sync {
    /// Called on every compound that carries a `translate` key.
    fn handle_translate(&self, _component: &mut NbtValue) {}

    /// Called on the item compound of a `show_item` hover event.
    fn handle_show_item(&self, _item: &mut NbtValue) {}

    fn process_tag(&self, tag: &mut NbtValue) {
        walk(self, tag);
    }

    /// Rewrite a required component field of the packet.
    fn passthrough_tag(&self, wrapper: &mut PacketWrapper) -> Result<(), TranslateError> {
        let mut tag = wrapper.read::<Tag>()?;
        self.process_tag(&mut tag);
        wrapper.write::<Tag>(tag);
        Ok(())
    }

    fn passthrough_optional_tag(&self, wrapper: &mut PacketWrapper) -> Result<(), TranslateError> {
        let mut tag = wrapper.read::<OptionalTag>()?;
        if let Some(tag) = tag.as_mut() {
            self.process_tag(tag);
        }
        wrapper.write::<OptionalTag>(tag);
        Ok(())
    }
}

fn walk<R: ComponentRewriter + ?Sized>(rewriter: &R, tag: &mut NbtValue) {
    match tag {
        NbtValue::List(items) => {
            for item in items {
                walk(rewriter, item);
            }
        }
        NbtValue::Compound(_) => {
            if tag.get_string("translate").is_some() {
                rewriter.handle_translate(tag);
            }
            for key in ["with", "extra"] {
                if let Some(items) = tag.get_list_mut(key) {
                    for item in items {
                        walk(rewriter, item);
                    }
                }
            }
            if let Some(separator) = tag.get_mut("separator") {
                walk(rewriter, separator);
            }
            for key in ["hover_event", "hoverEvent"] {
                if let Some(hover) = tag.get_compound_mut(key) {
                    walk_hover_event(rewriter, hover);
                }
            }
        }
        _ => {}
    }
}

fn walk_hover_event<R: ComponentRewriter + ?Sized>(rewriter: &R, hover: &mut NbtValue) {
    let Some(action) = hover.get_string("action").map(str::to_owned) else {
        return;
    };
    match action.strip_prefix("minecraft:").unwrap_or(&action) {
        "show_text" => {
            for key in ["contents", "value"] {
                if let Some(text) = hover.get_mut(key) {
                    walk(rewriter, text);
                }
            }
        }
        "show_entity" => {
            if let Some(name) = hover.get_mut("name") {
                walk(rewriter, name);
            }
            if let Some(name) = hover
                .get_compound_mut("contents")
                .and_then(|contents| contents.get_mut("name"))
            {
                walk(rewriter, name);
            }
        }
        "show_item" => match hover.get_compound_mut("contents") {
            Some(item) => rewriter.handle_show_item(item),
            // flattened form keeps the item fields on the event itself
            None => rewriter.handle_show_item(hover),
        },
        _ => {}
    }
}

/// Replaces translation keys the older client does not know with their text.
pub struct TranslatableRewriter {
    mappings: Arc<MappingData>,
}

impl TranslatableRewriter {
    pub fn new(mappings: Arc<MappingData>) -> Self {
        Self { mappings }
    }
}

impl ComponentRewriter for TranslatableRewriter {
    fn handle_translate(&self, component: &mut NbtValue) {
        let Some(key) = component.get_string("translate") else {
            return;
        };
        if let Some(text) = self.mappings.translation(key) {
            let text = text.to_owned();
            component.put_string("translate", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use rewind_nbt::{nbt_compound, nbt_list};
    use rewind_protocol_core::Direction;

    fn rewriter() -> TranslatableRewriter {
        TranslatableRewriter::new(Arc::new(MappingData::default()))
    }

    fn translate(key: &str) -> NbtValue {
        nbt_compound! { "translate" => NbtValue::String(key.into()) }
    }

    #[test]
    fn test_known_key_replaced() {
        let mut tag = translate("entity.minecraft.creaking");
        rewriter().process_tag(&mut tag);
        assert_eq!(tag.get_string("translate"), Some("Creaking"));
    }

    #[test]
    fn test_unknown_key_unchanged() {
        let mut tag = translate("chat.type.text");
        rewriter().process_tag(&mut tag);
        assert_eq!(tag.get_string("translate"), Some("chat.type.text"));
    }

    #[test]
    fn test_nested_components_walked() {
        let mut tag = nbt_compound! {
            "text" => NbtValue::String("".into()),
            "extra" => nbt_list![
                nbt_compound! {
                    "translate" => NbtValue::String("chat.type.text".into()),
                    "with" => nbt_list![translate("entity.minecraft.creaking")],
                },
            ],
            "hoverEvent" => nbt_compound! {
                "action" => NbtValue::String("show_entity".into()),
                "contents" => nbt_compound! {
                    "name" => translate("entity.minecraft.creaking"),
                },
            },
        };
        rewriter().process_tag(&mut tag);
        let extra = &tag.get_list_mut("extra").unwrap()[0];
        let with = match extra.get("with").unwrap() {
            NbtValue::List(items) => items[0].clone(),
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(with.get_string("translate"), Some("Creaking"));
        let name = tag
            .get("hoverEvent")
            .and_then(|hover| hover.get("contents"))
            .and_then(|contents| contents.get("name"))
            .unwrap();
        assert_eq!(name.get_string("translate"), Some("Creaking"));
    }

    struct ItemCounter(std::sync::atomic::AtomicUsize);

    impl ComponentRewriter for ItemCounter {
        fn handle_show_item(&self, item: &mut NbtValue) {
            assert_eq!(item.get_string("id"), Some("minecraft:stone"));
            self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        }
    }

    #[test]
    fn test_show_item_hook() {
        let mut tag = nbt_compound! {
            "text" => NbtValue::String("x".into()),
            "hover_event" => nbt_compound! {
                "action" => NbtValue::String("minecraft:show_item".into()),
                "contents" => nbt_compound! {
                    "id" => NbtValue::String("minecraft:stone".into()),
                },
            },
        };
        let counter = ItemCounter(Default::default());
        counter.process_tag(&mut tag);
        assert_eq!(counter.0.load(std::sync::atomic::Ordering::Relaxed), 1);
    }

    #[test]
    fn test_passthrough_tag() {
        let mut payload = BytesMut::new();
        translate("entity.minecraft.creaking").write_root_network(&mut payload);
        payload.extend_from_slice(&[0x01]);
        let mut wrapper = PacketWrapper::new(Direction::Clientbound, 0x6C, payload);
        rewriter().passthrough_tag(&mut wrapper).unwrap();
        let mut out = wrapper.finish().remove(0).payload;
        let tag = NbtValue::read_root_network(&mut out).unwrap();
        assert_eq!(tag.get_string("translate"), Some("Creaking"));
        assert_eq!(&out[..], &[0x01]);
    }
}
