use bevy::prelude::*;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::objects::ObjectType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResearchCategory {
    Transport,
    Gentle,
    Rollercoaster,
    Thrill,
    Water,
    Shop,
    SceneryGroup,
}

impl ResearchCategory {
    pub fn flag(self) -> ResearchCategories {
        match self {
            ResearchCategory::Transport => ResearchCategories::TRANSPORT,
            ResearchCategory::Gentle => ResearchCategories::GENTLE,
            ResearchCategory::Rollercoaster => ResearchCategories::ROLLERCOASTER,
            ResearchCategory::Thrill => ResearchCategories::THRILL,
            ResearchCategory::Water => ResearchCategories::WATER,
            ResearchCategory::Shop => ResearchCategories::SHOP,
            ResearchCategory::SceneryGroup => ResearchCategories::SCENERY_GROUP,
        }
    }
}

bitflags! {
    /// Categories receiving research funding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ResearchCategories: u8 {
        const TRANSPORT = 1 << 0;
        const GENTLE = 1 << 1;
        const ROLLERCOASTER = 1 << 2;
        const THRILL = 1 << 3;
        const WATER = 1 << 4;
        const SHOP = 1 << 5;
        const SCENERY_GROUP = 1 << 6;
    }
}

/// Object unlocked by a research entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResearchItem {
    RideEntry { slot: u8, category: ResearchCategory },
    SceneryGroup { slot: u8 },
}

impl ResearchItem {
    pub fn object_type(self) -> ObjectType {
        match self {
            ResearchItem::RideEntry { .. } => ObjectType::Ride,
            ResearchItem::SceneryGroup { .. } => ObjectType::SceneryGroup,
        }
    }

    pub fn slot(self) -> u8 {
        match self {
            ResearchItem::RideEntry { slot, .. } | ResearchItem::SceneryGroup { slot } => slot,
        }
    }

    pub fn category(self) -> ResearchCategory {
        match self {
            ResearchItem::RideEntry { category, .. } => category,
            ResearchItem::SceneryGroup { .. } => ResearchCategory::SceneryGroup,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchEntry {
    pub item: ResearchItem,
    pub researched: bool,
}

/// Research list: invented entries first, then the entries still to
/// research, each part in insertion order.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchQueue {
    entries: Vec<ResearchEntry>,
    pub priorities: ResearchCategories,
    pub funding_level: u8,
    pub progress: u16,
    pub next_item: u8,
    pub next_category: u8,
}

impl ResearchQueue {
    /// Adds `item` at the end of its partition. Returns `false` if the same
    /// object is already listed, whichever partition it is in.
    pub fn insert(&mut self, item: ResearchItem, researched: bool) -> bool {
        if self.contains(item.object_type(), item.slot()) {
            return false;
        }
        let entry = ResearchEntry { item, researched };
        if researched {
            let split = self
                .entries
                .iter()
                .position(|e| !e.researched)
                .unwrap_or(self.entries.len());
            self.entries.insert(split, entry);
        } else {
            self.entries.push(entry);
        }
        true
    }

    pub fn contains(&self, object_type: ObjectType, slot: u8) -> bool {
        self.entries
            .iter()
            .any(|e| e.item.object_type() == object_type && e.item.slot() == slot)
    }

    pub fn entries(&self) -> &[ResearchEntry] {
        &self.entries
    }

    pub fn researched(&self) -> impl Iterator<Item = &ResearchItem> + '_ {
        self.entries.iter().filter(|e| e.researched).map(|e| &e.item)
    }

    pub fn to_research(&self) -> impl Iterator<Item = &ResearchItem> + '_ {
        self.entries.iter().filter(|e| !e.researched).map(|e| &e.item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
