//! Entry definition and the slot pool that owns every stored entry

/// A stored non-zero cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Entry<T> {
    pub value: T,
    pub row: usize,
    pub col: usize,
}

impl<T> Entry<T> {
    #[inline]
    #[must_use]
    pub const fn new(value: T, row: usize, col: usize) -> Self {
        Self { value, row, col }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Handle to a pool slot. Row and column chains both hold the same handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Entry<T>),
    Vacant { next_free: Option<usize> },
}

/// Slot arena owning entries. Released slots form a free list and are reused.
#[derive(Debug, Clone)]
pub(crate) struct EntryPool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> EntryPool<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, entry: Entry<T>) -> EntryId {
        self.len += 1;
        if let Some(idx) = self.free_head {
            if let Some(Slot::Vacant { next_free }) = self.slots.get(idx) {
                self.free_head = *next_free;
                self.slots[idx] = Slot::Occupied(entry);
                return EntryId(idx);
            }
        }
        self.slots.push(Slot::Occupied(entry));
        EntryId(self.slots.len() - 1)
    }

    /// Release a slot, returning the entry it held. Releasing a vacant slot is a no-op.
    pub(crate) fn release(&mut self, id: EntryId) -> Option<Entry<T>> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let old = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match old {
            Slot::Occupied(entry) => Some(entry),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: EntryId) -> Option<&Entry<T>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry<T>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(entry)) => Some(entry),
            _ => None,
        }
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entry<T>> {
        self.slots.iter_mut().filter_map(|slot| match slot {
            Slot::Occupied(entry) => Some(entry),
            Slot::Vacant { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut pool = EntryPool::new();
        let a = pool.alloc(Entry::new(1, 0, 0));
        let b = pool.alloc(Entry::new(2, 0, 1));
        assert_eq!(pool.len(), 2);

        assert_eq!(pool.release(a), Some(Entry::new(1, 0, 0)));
        assert_eq!(pool.len(), 1);
        assert!(pool.get(a).is_none());

        let c = pool.alloc(Entry::new(3, 1, 1));
        assert_eq!(c, a);
        assert_eq!(pool.slots.len(), 2);
        assert_eq!(pool.get(b).map(|e| e.value), Some(2));
        assert_eq!(pool.get(c).map(|e| e.value), Some(3));
    }

    #[test]
    fn double_release_is_noop() {
        let mut pool = EntryPool::new();
        let a = pool.alloc(Entry::new(7.5, 2, 3));
        assert!(pool.release(a).is_some());
        assert!(pool.release(a).is_none());
        assert_eq!(pool.len(), 0);
        // The free list must not contain the slot twice.
        let x = pool.alloc(Entry::new(1.0, 0, 0));
        let y = pool.alloc(Entry::new(2.0, 0, 1));
        assert_ne!(x, y);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut pool = EntryPool::new();
        let ids: Vec<EntryId> = (0..4).map(|k| pool.alloc(Entry::new(k, 0, k))).collect();
        pool.release(ids[1]);
        pool.release(ids[3]);
        assert_eq!(pool.alloc(Entry::new(9, 0, 0)), ids[3]);
        assert_eq!(pool.alloc(Entry::new(9, 0, 0)), ids[1]);
        assert_eq!(pool.alloc(Entry::new(9, 0, 0)).index(), 4);
    }
}
