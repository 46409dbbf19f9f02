/// Number of inventory slots
pub const INVENTORY_SIZE: usize = 12;

/// Slots per grid row
pub const INVENTORY_COLUMNS: usize = 3;

/// Player's inventory
///
/// Each slot holds an index into the item registry, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: [Option<usize>; INVENTORY_SIZE],
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            slots: [None; INVENTORY_SIZE],
        }
    }

    /// First empty slot, scanning from slot 0
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Store an item in the first empty slot. Returns the slot used, or None when full.
    pub fn add(&mut self, item_index: usize) -> Option<usize> {
        let slot = self.first_empty()?;
        self.slots[slot] = Some(item_index);
        Some(slot)
    }

    pub fn get(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    /// Exchange the contents of two slots (either may be empty)
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b || a >= INVENTORY_SIZE || b >= INVENTORY_SIZE {
            return;
        }
        self.slots.swap(a, b);
    }

    /// Empty a slot, returning what it held
    pub fn take(&mut self, slot: usize) -> Option<usize> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.slots.iter().copied().enumerate()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_inventory_is_empty() {
        let inv = Inventory::new();
        assert!(inv.is_empty());
        assert_eq!(inv.iter().count(), INVENTORY_SIZE);
        assert_eq!(inv.first_empty(), Some(0));
    }

    #[test]
    fn test_add_fills_first_gap() {
        let mut inv = Inventory::new();
        assert_eq!(inv.add(4), Some(0));
        assert_eq!(inv.add(7), Some(1));
        assert_eq!(inv.add(2), Some(2));

        // Open a gap in the middle, the next add should land there
        assert_eq!(inv.take(1), Some(7));
        assert_eq!(inv.add(9), Some(1));
        assert_eq!(inv.get(1), Some(9));
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn test_add_when_full() {
        let mut inv = Inventory::new();
        for i in 0..INVENTORY_SIZE {
            assert_eq!(inv.add(i), Some(i));
        }
        assert!(inv.is_full());

        let before = inv.clone();
        assert_eq!(inv.add(99), None);
        assert_eq!(inv, before);
    }

    #[test]
    fn test_swap() {
        let mut inv = Inventory::new();
        inv.add(3);
        inv.add(5);

        inv.swap(0, 1);
        assert_eq!(inv.get(0), Some(5));
        assert_eq!(inv.get(1), Some(3));

        // Swapping into an empty slot moves the item
        inv.swap(1, 10);
        assert_eq!(inv.get(1), None);
        assert_eq!(inv.get(10), Some(3));

        // Same slot and out-of-range swaps do nothing
        inv.swap(0, 0);
        inv.swap(0, INVENTORY_SIZE);
        assert_eq!(inv.get(0), Some(5));
    }

    #[test]
    fn test_out_of_range_access() {
        let mut inv = Inventory::new();
        assert_eq!(inv.get(INVENTORY_SIZE), None);
        assert_eq!(inv.take(INVENTORY_SIZE + 3), None);
        assert!(!inv.is_occupied(42));
    }
}
