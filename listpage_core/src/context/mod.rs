//! Viewing context and contextual filter resolution

mod resolver;

pub use resolver::{ContextualValueResolver, combine};

use crate::{Entity, FieldId, FieldValue};

/// An entity a list page can be viewed on.
pub trait ContextEntity {
    fn entity_type(&self) -> &str;

    /// The value of a field, if the entity carries it.
    fn field_value(&self, field: &str) -> Option<&FieldValue>;
}

impl ContextEntity for Entity {
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn field_value(&self, field: &str) -> Option<&FieldValue> {
        self.get_field(&FieldId::new(field))
    }
}

/// Where a list page is being rendered.
pub trait ViewingContext {
    /// The entity being viewed, if any.
    fn current_entity(&self) -> Option<&dyn ContextEntity>;
}

/// A viewing context holding at most one entity.
#[derive(Debug, Clone, Default)]
pub struct EntityContext {
    entity: Option<Entity>,
}

impl EntityContext {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity: Some(entity),
        }
    }

    /// A context with no entity, such as a listing rendered on its own.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entity(&self) -> Option<&Entity> {
        self.entity.as_ref()
    }
}

impl From<Option<Entity>> for EntityContext {
    fn from(entity: Option<Entity>) -> Self {
        Self { entity }
    }
}

impl ViewingContext for EntityContext {
    fn current_entity(&self) -> Option<&dyn ContextEntity> {
        self.entity.as_ref().map(|entity| entity as &dyn ContextEntity)
    }
}
