use std::sync::Arc;

use rewind_data::attribute_modifiers::{modifier_name, modifier_uuid, uuid_to_int_array};
use rewind_data::MappingData;
use rewind_nbt::NbtValue;
use rewind_rewriters::{ComponentRewriter, TranslatableRewriter};
use tracing::trace;

/// Text component rewriter for 1.20.5 clients.
///
/// Besides translation fallbacks, items shown in hover events get their attribute
/// modifiers back in the 1.20.5 shape: 1.21 only sends the modifier id, 1.20.5 expects a
/// `uuid` and a `name` next to it.
pub struct ComponentRewriter1_21 {
    translatable: TranslatableRewriter,
}

impl ComponentRewriter1_21 {
    pub fn new(mappings: Arc<MappingData>) -> Self {
        Self {
            translatable: TranslatableRewriter::new(mappings),
        }
    }
}

impl ComponentRewriter for ComponentRewriter1_21 {
    fn handle_translate(&self, component: &mut NbtValue) {
        self.translatable.handle_translate(component);
    }

    fn handle_show_item(&self, item: &mut NbtValue) {
        let Some(modifiers) = item
            .get_compound_mut("components")
            .and_then(|components| components.get_namespaced_mut("attribute_modifiers"))
            .and_then(|attributes| attributes.get_list_mut("modifiers"))
        else {
            return;
        };

        trace!("Adding legacy fields to {} attribute modifiers", modifiers.len());
        for modifier in modifiers {
            let Some(id) = modifier.get_string("id").map(str::to_owned) else {
                continue;
            };
            let uuid = uuid_to_int_array(&modifier_uuid(&id));
            modifier.put("uuid", NbtValue::IntArray(uuid.to_vec()));
            modifier.put_string("name", modifier_name(&id).unwrap_or(id.as_str()));
        }
    }
}
