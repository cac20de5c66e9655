use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::config::MAX_BANNERS;
use crate::user_strings::StringId;

/// Text shown on a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerText {
    /// Generic "sign" caption.
    Default,
    Custom(StringId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Slot of the banner object.
    pub entry_index: u8,
    pub flags: u8,
    pub text: BannerText,
    pub colour: Colour,
    pub text_colour: u8,
    pub x: u8,
    pub y: u8,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct BannerTable {
    slots: Vec<Option<Banner>>,
}

impl Default for BannerTable {
    fn default() -> Self {
        Self {
            slots: vec![None; MAX_BANNERS],
        }
    }
}

impl BannerTable {
    pub fn get(&self, index: usize) -> Option<&Banner> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn set(&mut self, index: usize, banner: Banner) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(banner);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_slots() {
        let mut table = BannerTable::default();
        let banner = Banner {
            entry_index: 2,
            flags: 0,
            text: BannerText::Default,
            colour: Colour::BRIGHT_RED,
            text_colour: 0,
            x: 4,
            y: 9,
        };
        assert!(table.set(7, banner));
        assert!(!table.set(MAX_BANNERS, banner));
        assert_eq!(table.get(7), Some(&banner));
        assert_eq!(table.count(), 1);
    }
}
