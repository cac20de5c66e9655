// ---------------------------------------------------------------------------
// EntryList / EntryMap: legacy type codes to object slots
// ---------------------------------------------------------------------------

use park::objects::{ObjectIdentifier, ObjectType};

/// Insertion ordered, deduplicated list of the objects of one domain. The
/// position of an identifier is its object slot and never changes once
/// handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    object_type: ObjectType,
    entries: Vec<ObjectIdentifier>,
}

impl EntryList {
    pub fn new(object_type: ObjectType) -> Self {
        Self {
            object_type,
            entries: Vec::new(),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn capacity(&self) -> usize {
        self.object_type.capacity()
    }

    pub fn index_of(&self, identifier: &ObjectIdentifier) -> Option<u8> {
        self.entries
            .iter()
            .position(|e| e == identifier)
            .map(|i| i as u8)
    }

    /// Slot of `identifier`, appending it if it is new. Returns `None` when
    /// the identifier is new and the list is already at capacity.
    pub fn try_add(&mut self, identifier: ObjectIdentifier) -> Option<u8> {
        if let Some(index) = self.index_of(&identifier) {
            return Some(index);
        }
        if self.is_full() {
            return None;
        }
        self.entries.push(identifier);
        Some((self.entries.len() - 1) as u8)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity()
    }

    pub fn entries(&self) -> &[ObjectIdentifier] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where a legacy type code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntrySlot {
    /// Not seen during discovery.
    #[default]
    Unassigned,
    /// Known, but owns no object (always-available scenery themes).
    Reserved,
    Assigned(u8),
}

impl EntrySlot {
    pub fn slot(self) -> Option<u8> {
        match self {
            EntrySlot::Assigned(slot) => Some(slot),
            _ => None,
        }
    }
}

/// Table from legacy type code to [`EntrySlot`]. Only `Unassigned` codes
/// can be written; a code keeps the first slot it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMap<const N: usize> {
    slots: [EntrySlot; N],
}

impl<const N: usize> Default for EntryMap<N> {
    fn default() -> Self {
        Self {
            slots: [EntrySlot::Unassigned; N],
        }
    }
}

impl<const N: usize> EntryMap<N> {
    /// Codes past the table end read as `Unassigned`.
    pub fn get(&self, code: usize) -> EntrySlot {
        self.slots.get(code).copied().unwrap_or_default()
    }

    pub fn resolve(&self, code: usize) -> Option<u8> {
        self.get(code).slot()
    }

    pub fn is_unassigned(&self, code: usize) -> bool {
        self.get(code) == EntrySlot::Unassigned
    }

    /// Points `code` at `slot`. Returns `false` and changes nothing when the
    /// code is out of range or already set.
    pub fn assign(&mut self, code: usize, slot: u8) -> bool {
        self.set(code, EntrySlot::Assigned(slot))
    }

    pub fn reserve(&mut self, code: usize) -> bool {
        self.set(code, EntrySlot::Reserved)
    }

    fn set(&mut self, code: usize, value: EntrySlot) -> bool {
        match self.slots.get_mut(code) {
            Some(slot @ EntrySlot::Unassigned) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Codes currently `Assigned`, in code order.
    pub fn assigned(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(code, slot)| slot.slot().map(|s| (code, s)))
    }
}
