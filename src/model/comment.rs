use crate::dto::item::CommentDto;

/// Feedback left on an item by a user who booked and used it.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub author_name: String,
    pub created: chrono::NaiveDateTime,
}

impl Comment {
    /// Builds the domain comment from its entity and the resolved author name.
    pub fn from_parts(entity: entity::comment::Model, author_name: String) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            author_name,
            created: entity.created,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            text: self.text,
            author_name: self.author_name,
            created: self.created,
        }
    }
}

/// Parameters for adding a comment to an item.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub text: String,
}
