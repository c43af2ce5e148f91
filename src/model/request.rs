use crate::{dto::request::RequestDto, model::item::Item};

/// A user's declared need for an item, possibly answered later by items
/// created against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub id: i64,
    pub description: String,
    pub requestor_id: i64,
    pub created: chrono::NaiveDateTime,
    pub items: Vec<Item>,
}

impl Request {
    /// Builds the domain request from its entity and the items linked to it.
    pub fn from_parts(entity: entity::request::Model, items: Vec<entity::item::Model>) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            requestor_id: entity.requestor_id,
            created: entity.created,
            items: items.into_iter().map(Item::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> RequestDto {
        RequestDto {
            id: self.id,
            description: self.description,
            requestor_id: self.requestor_id,
            created: self.created,
            items: self.items.into_iter().map(Item::into_dto).collect(),
        }
    }
}

/// Parameters for creating a request. `created` is server-assigned.
#[derive(Debug, Clone)]
pub struct CreateRequestParams {
    pub description: String,
}
