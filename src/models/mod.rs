//! Data models module
//!
//! Serde model of a chat thread as returned by a "list messages" API call.
//! Includes MessageList, Message, Role, ContentBlock, TextValue, Annotation.

pub mod thread;

#[allow(unused_imports)]
pub use thread::{Annotation, ContentBlock, Message, MessageList, Role, TextValue, UrlCitation};
