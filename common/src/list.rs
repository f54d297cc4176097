use std::fmt;

// Nodes live in an arena and link to each other by slot index. The list owns
// the arena; `head` and `tail` are just indices into it, so no node ever has
// two owners.
#[derive(Clone, Debug)]
struct Node<T> {
    item: T,
    next: Option<usize>,
}

#[derive(Clone, Debug)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_vacant: Option<usize> },
}

/// Singly-linked list that tracks both ends and its size.
///
/// Insertion at either end and removal at the front are O(1). Removal at the
/// rear, indexed access and search walk the chain from the head.
///
/// `front`, `rear` and `item` expect the caller to have checked
/// [`is_empty`](Self::is_empty) or the bounds first and panic otherwise. The
/// `first`, `last` and `get` variants return `None` instead.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    vacant: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    size: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: None,
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn add_to_front(&mut self, item: T) {
        let index = self.allocate(Node {
            item,
            next: self.head,
        });

        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.size += 1;
    }

    pub fn add_to_rear(&mut self, item: T) {
        let index = self.allocate(Node { item, next: None });

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.size += 1;
    }

    /// Inserts `item` so that it ends up at `index`.
    ///
    /// Indexes at or below zero add to the front; indexes at or past the
    /// current size add to the rear.
    pub fn add_item(&mut self, index: isize, item: T) {
        if index <= 0 {
            self.add_to_front(item);
            return;
        }

        let index = index as usize;
        if index >= self.size {
            self.add_to_rear(item);
            return;
        }

        let before = self.link_at(index - 1);
        let next = self.node(before).next;
        let inserted = self.allocate(Node { item, next });
        self.node_mut(before).next = Some(inserted);
        self.size += 1;
    }

    pub fn front(&self) -> &T {
        match self.first() {
            Some(item) => item,
            None => panic!("front() called on an empty list"),
        }
    }

    pub fn rear(&self) -> &T {
        match self.last() {
            Some(item) => item,
            None => panic!("rear() called on an empty list"),
        }
    }

    pub fn item(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "item() index {} is out of bounds for a list of size {}",
                index, self.size
            ),
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.head.map(|head| &self.node(head).item)
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.map(|tail| &self.node(tail).item)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.size {
            return None;
        }
        Some(&self.node(self.link_at(index)).item)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.size,
        }
    }

    pub fn delete_front(&mut self) -> bool {
        self.pop_front().is_some()
    }

    pub fn delete_rear(&mut self) -> bool {
        self.pop_rear().is_some()
    }

    /// Removes the item at `index`. Returns `false`, leaving the list
    /// untouched, when the list is empty or `index` is outside `[0, len)`.
    pub fn delete_item(&mut self, index: isize) -> bool {
        if index < 0 {
            return false;
        }
        self.remove(index as usize).is_some()
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.node(head).next;

        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        Some(self.release(head))
    }

    pub fn pop_rear(&mut self) -> Option<T> {
        let tail = self.tail?;
        if self.size == 1 {
            return self.pop_front();
        }

        let before = self.link_at(self.size - 2);
        self.node_mut(before).next = None;
        self.tail = Some(before);
        Some(self.release(tail))
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.size {
            return None;
        }
        if index == 0 {
            return self.pop_front();
        }

        let before = self.link_at(index - 1);
        let target = self.node(before).next?;
        let next = self.node(target).next;

        self.node_mut(before).next = next;
        if self.tail == Some(target) {
            self.tail = Some(before);
        }
        Some(self.release(target))
    }

    /// Slot of the `index`th node. Callers guarantee `index < size`.
    fn link_at(&self, index: usize) -> usize {
        let mut cursor = self.head;
        for _ in 0..index {
            cursor = cursor.and_then(|link| self.node(link).next);
        }
        match cursor {
            Some(link) => link,
            None => unreachable!("chain is shorter than size {}", self.size),
        }
    }

    fn node(&self, link: usize) -> &Node<T> {
        match &self.slots[link] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link {} points at a vacant slot", link),
        }
    }

    fn node_mut(&mut self, link: usize) -> &mut Node<T> {
        match &mut self.slots[link] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("link {} points at a vacant slot", link),
        }
    }

    fn allocate(&mut self, node: Node<T>) -> usize {
        match self.vacant {
            Some(link) => {
                if let Slot::Vacant { next_vacant } = self.slots[link] {
                    self.vacant = next_vacant;
                }
                self.slots[link] = Slot::Occupied(node);
                link
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, link: usize) -> T {
        let slot = std::mem::replace(
            &mut self.slots[link],
            Slot::Vacant {
                next_vacant: self.vacant,
            },
        );
        self.vacant = Some(link);
        self.size -= 1;

        // An empty list keeps no arena around.
        if self.size == 0 {
            self.slots.clear();
            self.vacant = None;
        }

        match slot {
            Slot::Occupied(node) => node.item,
            Slot::Vacant { .. } => unreachable!("released a vacant slot {}", link),
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Index of the first item equal to `item`, if any.
    pub fn find_item(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.find_item(item).is_some()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add_to_rear(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.cursor?;
        let node = self.list.node(link);
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Prints e.g. `Front (3,4) (2,4) (1,1) Rear`. An empty list prints nothing.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        write!(f, "Front ")?;
        for item in self.iter() {
            write!(f, "{} ", item)?;
        }
        write!(f, "Rear")
    }
}
