//! Transport-neutral description of a model call.

use clausewise_core::{ChatMessage, EncodedDocument, Role};
use serde_json::Value;

/// Who authored a turn, as the model sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Model,
}

impl From<Role> for Speaker {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Self::User,
            Role::Assistant => Self::Model,
        }
    }
}

/// One piece of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Fixed task description written by us.
    Instruction(String),
    /// User-provided text: pasted contract text or a chat message.
    Text(String),
    /// Label announcing the document that follows.
    Separator(String),
    Document { data: String, media_type: String },
}

impl Part {
    pub fn document(doc: &EncodedDocument) -> Self {
        Self::Document {
            data: doc.content.clone(),
            media_type: doc.media_type.clone(),
        }
    }

    /// Text carried by the part, if it is a text-like part.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Instruction(s) | Self::Text(s) | Self::Separator(s) => Some(s),
            Self::Document { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    pub speaker: Speaker,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            speaker: Speaker::User,
            parts,
        }
    }

    pub fn from_message(message: &ChatMessage) -> Self {
        Self {
            speaker: message.role.into(),
            parts: vec![Part::Text(message.text.clone())],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub contents: Vec<Content>,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    /// When set, the model must answer with JSON matching this schema.
    pub response_schema: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateResponse {
    /// Concatenated text of the answer; `None` when the model produced none.
    pub text: Option<String>,
}
