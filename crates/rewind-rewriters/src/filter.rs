//! Per entity type rules applied to entity data lists.

use rewind_protocol_core::{EntityData, TranslateError};
use rewind_types::{AncestorTable, EntityType};

/// Result of a custom handler for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Cancel,
}

/// Context handed to custom handlers.
#[derive(Debug)]
pub struct DataEvent {
    entity_id: i32,
    extra: Vec<EntityData>,
}

impl DataEvent {
    pub fn entity_id(&self) -> i32 {
        self.entity_id
    }

    /// Append an entry after the filtered list.
    pub fn create_extra(&mut self, data: EntityData) {
        self.extra.push(data);
    }
}

type HandlerFn =
    Box<dyn Fn(&mut DataEvent, &mut EntityData) -> Result<EventResult, TranslateError> + Send + Sync>;

enum Rule {
    Cancel(u8),
    AddIndex(u8),
    RemoveIndex(u8),
    CollapseIndex(u8),
    Handler(HandlerFn),
}

struct TypedRule<T> {
    entity_type: T,
    depth: usize,
    rule: Rule,
}

/// Ordered entity data rules for one protocol's entity types.
///
/// Application order: data type mapping, then rules without a type in registration
/// order, then typed rules from the root of the type hierarchy down to the leaf, in
/// registration order within one depth. A rule for a type also applies to all of its
/// descendants.
pub struct EntityDataFilter<T: EntityType> {
    ancestors: AncestorTable,
    map_data_type: Option<fn(i32) -> Option<i32>>,
    global: Vec<Rule>,
    typed: Vec<TypedRule<T>>,
}

impl<T: EntityType> EntityDataFilter<T> {
    /// `all` must list every type of the version, in ordinal order.
    pub fn new(all: &[T]) -> Self {
        Self {
            ancestors: AncestorTable::build(all),
            map_data_type: None,
            global: Vec::new(),
            typed: Vec::new(),
        }
    }

    /// Remap serializer ids. An entry without a mapping fails the whole list.
    pub fn map_data_type(&mut self, mapper: fn(i32) -> Option<i32>) -> &mut Self {
        self.map_data_type = Some(mapper);
        self
    }

    /// A handler for every entity, whatever its type.
    pub fn handler<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut DataEvent, &mut EntityData) -> Result<EventResult, TranslateError>
            + Send
            + Sync
            + 'static,
    {
        self.global.push(Rule::Handler(Box::new(handler)));
        self
    }

    /// Start registering rules for `entity_type` and its descendants.
    pub fn of_type(&mut self, entity_type: T) -> TypedFilter<'_, T> {
        TypedFilter {
            filter: self,
            entity_type,
        }
    }

    fn push_typed(&mut self, entity_type: T, rule: Rule) {
        let depth = entity_type.depth();
        // stable: keeps registration order within a depth
        let pos = self.typed.partition_point(|r| r.depth <= depth);
        self.typed.insert(
            pos,
            TypedRule {
                entity_type,
                depth,
                rule,
            },
        );
    }

    /// Apply all matching rules to `entries` in place.
    pub fn apply(
        &self,
        entity_id: i32,
        entity_type: Option<T>,
        entries: &mut Vec<EntityData>,
    ) -> Result<(), TranslateError> {
        if let Some(mapper) = self.map_data_type {
            for entry in entries.iter_mut() {
                entry.type_id = mapper(entry.type_id).ok_or(TranslateError::UnmappedDataType {
                    index: entry.index,
                    type_id: entry.type_id,
                })?;
            }
        }

        let mut event = DataEvent {
            entity_id,
            extra: Vec::new(),
        };
        for rule in &self.global {
            apply_rule(rule, &mut event, entries)?;
        }
        if let Some(ty) = entity_type {
            for typed in &self.typed {
                if self
                    .ancestors
                    .is_or_has_parent(ty.ordinal(), typed.entity_type.ordinal())
                {
                    apply_rule(&typed.rule, &mut event, entries)?;
                }
            }
        }
        entries.append(&mut event.extra);
        Ok(())
    }
}

fn apply_rule(
    rule: &Rule,
    event: &mut DataEvent,
    entries: &mut Vec<EntityData>,
) -> Result<(), TranslateError> {
    match rule {
        Rule::Cancel(index) => entries.retain(|e| e.index != *index),
        Rule::AddIndex(index) => {
            for entry in entries.iter_mut().filter(|e| e.index >= *index) {
                entry.index += 1;
            }
        }
        Rule::RemoveIndex(index) => {
            if !entries.iter().any(|e| e.index == *index) {
                return Err(TranslateError::MissingIndex { index: *index });
            }
            collapse(entries, *index);
        }
        Rule::CollapseIndex(index) => collapse(entries, *index),
        Rule::Handler(handler) => {
            let mut kept = Vec::with_capacity(entries.len());
            for mut entry in entries.drain(..) {
                if handler(event, &mut entry)? == EventResult::Continue {
                    kept.push(entry);
                }
            }
            *entries = kept;
        }
    }
    Ok(())
}

fn collapse(entries: &mut Vec<EntityData>, index: u8) {
    entries.retain(|e| e.index != index);
    for entry in entries.iter_mut().filter(|e| e.index > index) {
        entry.index -= 1;
    }
}

/// Builder for rules scoped to one entity type.
pub struct TypedFilter<'a, T: EntityType> {
    filter: &'a mut EntityDataFilter<T>,
    entity_type: T,
}

impl<T: EntityType> TypedFilter<'_, T> {
    /// Drop the entry at `index` if present.
    pub fn cancel(self, index: u8) -> Self {
        self.filter.push_typed(self.entity_type, Rule::Cancel(index));
        self
    }

    /// Shift entries at or above `index` up by one, leaving room for an entry the
    /// target version expects there.
    pub fn add_index(self, index: u8) -> Self {
        self.filter.push_typed(self.entity_type, Rule::AddIndex(index));
        self
    }

    /// Remove the entry at `index` and shift higher entries down. Fails if it is absent.
    pub fn remove_index(self, index: u8) -> Self {
        self.filter
            .push_typed(self.entity_type, Rule::RemoveIndex(index));
        self
    }

    /// Like [`remove_index`](Self::remove_index), but tolerates lists without the entry,
    /// as partial updates usually are.
    pub fn collapse_index(self, index: u8) -> Self {
        self.filter
            .push_typed(self.entity_type, Rule::CollapseIndex(index));
        self
    }

    pub fn handler<F>(self, handler: F) -> Self
    where
        F: Fn(&mut DataEvent, &mut EntityData) -> Result<EventResult, TranslateError>
            + Send
            + Sync
            + 'static,
    {
        self.filter
            .push_typed(self.entity_type, Rule::Handler(Box::new(handler)));
        self
    }
}
