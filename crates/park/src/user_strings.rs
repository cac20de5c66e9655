use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{MAX_USER_STRINGS, USER_STRING_MAX_LENGTH};

/// Handle to a player-entered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringId(pub u16);

/// Interned player strings (ride names, sign text, park name).
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStringTable {
    strings: Vec<String>,
}

impl UserStringTable {
    /// Stores `text`, truncated to the maximum user string length on a char
    /// boundary. Returns `None` when the table is full.
    pub fn allocate(&mut self, text: &str) -> Option<StringId> {
        if self.strings.len() >= MAX_USER_STRINGS {
            return None;
        }
        let mut end = text.len().min(USER_STRING_MAX_LENGTH);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        self.strings.push(text[..end].to_owned());
        Some(StringId((self.strings.len() - 1) as u16))
    }

    pub fn get(&self, id: StringId) -> Option<&str> {
        self.strings.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
