//! Stable-slot storage for the engine's polynomials.
//!
//! Critical pairs reference basis polynomials across insertions and
//! basis-to-reserve transfers, so they hold [`PolyId`] handles into a
//! slab whose slots never move. Freed slots are recycled through a free
//! list. The design follows the arena-with-handles pattern of the core
//! expression store.

use anf_poly::{MonomOrder, Poly};

/// A stable handle to a polynomial in a [`PolySlab`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolyId(u32);

impl PolyId {
    /// The slot index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A slab of polynomials with stable ids.
#[derive(Clone, Debug, Default)]
pub struct PolySlab<O: MonomOrder> {
    slots: Vec<Option<Poly<O>>>,
    free: Vec<u32>,
}

impl<O: MonomOrder> PolySlab<O> {
    /// An empty slab.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores a polynomial, returning its id.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` slots are ever needed.
    pub fn insert(&mut self, poly: Poly<O>) -> PolyId {
        if let Some(slot) = self.free.pop() {
            self.slots[slot as usize] = Some(poly);
            return PolyId(slot);
        }
        let slot = u32::try_from(self.slots.len()).expect("slab capacity exceeded");
        self.slots.push(Some(poly));
        PolyId(slot)
    }

    /// Removes the polynomial at `id`, recycling the slot.
    ///
    /// # Panics
    ///
    /// Panics on a vacant id.
    pub fn remove(&mut self, id: PolyId) -> Poly<O> {
        let poly = self.slots[id.index()].take().expect("vacant slot");
        self.free.push(id.0);
        poly
    }

    /// The polynomial at `id`.
    ///
    /// # Panics
    ///
    /// Panics on a vacant id.
    #[must_use]
    pub fn get(&self, id: PolyId) -> &Poly<O> {
        self.slots[id.index()].as_ref().expect("vacant slot")
    }

    /// Mutable access to the polynomial at `id`.
    ///
    /// # Panics
    ///
    /// Panics on a vacant id.
    pub fn get_mut(&mut self, id: PolyId) -> &mut Poly<O> {
        self.slots[id.index()].as_mut().expect("vacant slot")
    }

    /// Takes the polynomial out of its slot without freeing the slot;
    /// pair with [`put`](Self::put).
    pub fn take(&mut self, id: PolyId) -> Poly<O> {
        self.slots[id.index()].take().expect("vacant slot")
    }

    /// Restores a polynomial taken with [`take`](Self::take).
    pub fn put(&mut self, id: PolyId, poly: Poly<O>) {
        debug_assert!(self.slots[id.index()].is_none());
        self.slots[id.index()] = Some(poly);
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// True when no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every polynomial and recycles all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anf_poly::{Lex, Poly};

    #[test]
    fn test_ids_survive_insertions_and_removals() {
        let mut slab: PolySlab<Lex> = PolySlab::new();
        let a = slab.insert(Poly::parse(2, Lex, "x0").unwrap());
        let b = slab.insert(Poly::parse(2, Lex, "x1").unwrap());
        let c = slab.insert(Poly::parse(2, Lex, "x0 + x1").unwrap());
        slab.remove(b);
        // a and c are untouched by b's removal
        assert_eq!(slab.get(a).to_string(), "x0");
        assert_eq!(slab.get(c).to_string(), "x1 + x0");
        // the freed slot is recycled
        let d = slab.insert(Poly::parse(2, Lex, "1").unwrap());
        assert_eq!(d, b);
        assert_eq!(slab.len(), 3);
    }

    #[test]
    fn test_take_put_round_trip() {
        let mut slab: PolySlab<Lex> = PolySlab::new();
        let id = slab.insert(Poly::parse(2, Lex, "x0 x1").unwrap());
        let poly = slab.take(id);
        slab.put(id, poly);
        assert_eq!(slab.get(id).to_string(), "x0 x1");
    }
}
