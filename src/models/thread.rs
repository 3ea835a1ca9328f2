use serde::{Deserialize, Serialize};

use crate::error::{Result, ThreadPrintError};

// ============================================================================
// Thread Models
// ============================================================================

/// Messages of a thread, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageList {
    pub data: Vec<Message>,
}

impl MessageList {
    pub fn new(data: Vec<Message>) -> Self {
        Self { data }
    }

    /// Parse either a `{"data": [...]}` list envelope or a bare array of messages
    pub fn from_json(input: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;

        if value.is_array() {
            Ok(Self::new(serde_json::from_value(value)?))
        } else if value.get("data").is_some() {
            Ok(serde_json::from_value(value)?)
        } else {
            Err(ThreadPrintError::Input(
                "expected a JSON array of messages or an object with a \"data\" array".to_string(),
            ))
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Messages in display order (oldest first), paired with their input index
    pub fn chronological(&self) -> impl Iterator<Item = (usize, &Message)> {
        self.data.iter().enumerate().rev()
    }
}

/// Author of a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    /// Any role string the thread API may add later
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(role) => role,
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(role),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

/// A single thread message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message id, when the API supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role: Role,
    /// Content blocks; only the first one is displayed
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Message {
    /// Text of the first content block, if it has one
    pub fn text(&self) -> Option<&TextValue> {
        self.content.first().and_then(|block| block.text.as_ref())
    }
}

/// One block of message content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextValue>,
}

/// Text body with its annotation spans
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextValue {
    pub value: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub annotations: Vec<Annotation>,
}

/// A span of `TextValue::value` to be replaced by a footnote marker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Marker text the span originally held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Start offset in characters
    #[serde(default)]
    pub start_index: Option<usize>,
    /// End offset in characters (exclusive)
    #[serde(default)]
    pub end_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_citation: Option<UrlCitation>,
}

impl Annotation {
    /// Replaceable bounds, present only when both offsets are known
    pub fn span(&self) -> Option<(usize, usize)> {
        Some((self.start_index?, self.end_index?))
    }
}

/// Web source referenced by an annotation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlCitation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl UrlCitation {
    pub fn label(&self) -> String {
        format!("{}: {}", self.title, self.url)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Annotation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Annotation>>::deserialize(deserializer)?.unwrap_or_default())
}
