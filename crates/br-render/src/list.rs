//! Liste simplement chaînée ordonnée, sans `unsafe`.
//!
//! Les noeuds vivent dans une arène de slots ; les liens sont des indices.
//! `head` possède logiquement la chaîne, `tail` n'est qu'un repère pour
//! l'ajout en O(1). Aucun lien arrière : `remove_last` reste O(n).

/// Element of an [`OrderedBuffer`]: one payload plus a forward link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferNode<T> {
    value: T,
    next: Option<usize>,
}

impl<T> BufferNode<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Borrow the payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take the payload out of the node.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Conteneur ordonné à accès par index, ajout O(1) aux deux bouts.
///
/// | operation        | cost |
/// |------------------|------|
/// | `add_first/last` | O(1) |
/// | `remove_first`   | O(1) |
/// | `remove_last`    | O(n), walks to the penultimate node |
/// | `get/insert/remove` | O(n) |
/// | `clear`          | releases the chain as a unit |
///
/// Out-of-range indices are clamped by `insert`/`remove` and answered with
/// `None` by `get`.
///
/// # Example
/// ```
/// use br_render::list::{BufferNode, OrderedBuffer};
///
/// let mut list = OrderedBuffer::new();
/// list.add_last(BufferNode::new('b'));
/// list.add_first(BufferNode::new('a'));
/// list.insert(BufferNode::new('z'), 99);
/// assert_eq!(list.iter().collect::<String>(), "abz");
/// assert_eq!(list.remove_last().map(BufferNode::into_value), Some('z'));
/// ```
#[derive(Clone, Debug)]
pub struct OrderedBuffer<T> {
    slots: Vec<Option<BufferNode<T>>>,
    /// Vacant slot indices, reused before growing `slots`.
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for OrderedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedBuffer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepend `node`.
    pub fn add_first(&mut self, mut node: BufferNode<T>) {
        node.next = self.head;
        let index = self.alloc(node);
        self.head = Some(index);
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.len += 1;
    }

    /// Append `node`.
    pub fn add_last(&mut self, mut node: BufferNode<T>) {
        node.next = None;
        let index = self.alloc(node);
        let tail = self.tail;
        match tail.and_then(|t| self.node_mut(t)) {
            Some(last) => last.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Peek at the first node.
    pub fn first(&self) -> Option<&BufferNode<T>> {
        self.head.and_then(|h| self.node(h))
    }

    /// Peek at the last node.
    pub fn last(&self) -> Option<&BufferNode<T>> {
        self.tail.and_then(|t| self.node(t))
    }

    /// Detach the first node.
    pub fn remove_first(&mut self) -> Option<BufferNode<T>> {
        let head = self.head?;
        let mut node = self.release(head)?;
        self.head = node.next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node)
    }

    /// Detach the last node. Walks from the head to find the new tail.
    pub fn remove_last(&mut self) -> Option<BufferNode<T>> {
        let tail = self.tail?;
        if self.len == 1 {
            let node = self.release(tail)?;
            self.head = None;
            self.tail = None;
            self.len = 0;
            return Some(node);
        }

        let penultimate = self.index_of(self.len - 2)?;
        if let Some(prev) = self.node_mut(penultimate) {
            prev.next = None;
        }
        self.tail = Some(penultimate);
        self.len -= 1;
        self.release(tail)
    }

    /// Node at `index`, `None` out of bounds.
    pub fn get(&self, index: usize) -> Option<&BufferNode<T>> {
        self.index_of(index).and_then(|i| self.node(i))
    }

    /// Insert `node` so that it ends up at `index`.
    ///
    /// `index == 0` prepends, `index >= len()` appends.
    pub fn insert(&mut self, mut node: BufferNode<T>, index: usize) {
        if index == 0 {
            self.add_first(node);
            return;
        }
        if index >= self.len {
            self.add_last(node);
            return;
        }
        let Some(prev) = self.index_of(index - 1) else {
            return;
        };
        node.next = self.node(prev).and_then(|p| p.next);
        let new = self.alloc(node);
        if let Some(p) = self.node_mut(prev) {
            p.next = Some(new);
        }
        self.len += 1;
    }

    /// Remove the node at `index`.
    ///
    /// `index == 0` removes the first node, `index >= len() - 1` the last
    /// one. `None` only when the buffer is empty.
    pub fn remove(&mut self, index: usize) -> Option<BufferNode<T>> {
        if self.is_empty() {
            return None;
        }
        if index == 0 {
            return self.remove_first();
        }
        if index >= self.len - 1 {
            return self.remove_last();
        }
        let prev = self.index_of(index - 1)?;
        let target = self.node(prev)?.next?;
        let after = self.node(target)?.next;
        if let Some(p) = self.node_mut(prev) {
            p.next = after;
        }
        self.len -= 1;
        let mut node = self.release(target)?;
        node.next = None;
        Some(node)
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate payloads front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buffer: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // === Arène ===

    fn alloc(&mut self, node: BufferNode<T>) -> usize {
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(node);
            index
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    fn release(&mut self, index: usize) -> Option<BufferNode<T>> {
        let node = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        Some(node)
    }

    fn node(&self, index: usize) -> Option<&BufferNode<T>> {
        self.slots.get(index)?.as_ref()
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut BufferNode<T>> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Slot index of the `position`-th node, walking from the head.
    fn index_of(&self, position: usize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        let mut cursor = self.head?;
        for _ in 0..position {
            cursor = self.node(cursor)?.next?;
        }
        Some(cursor)
    }
}

/// Front-to-back iterator over an [`OrderedBuffer`].
pub struct Iter<'a, T> {
    buffer: &'a OrderedBuffer<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.buffer.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
