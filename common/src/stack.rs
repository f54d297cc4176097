use crate::list::LinkedList;

/// LIFO stack backed by [`LinkedList`]; the top of the stack is the list's
/// front, so push, pop and peek are all O(1).
#[derive(Clone, Debug)]
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.list.add_to_front(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Top of the stack. Panics when the stack is empty; use [`Stack::top`]
    /// when that hasn't been checked.
    pub fn peek(&self) -> &T {
        match self.list.first() {
            Some(item) => item,
            None => panic!("peek() called on an empty stack"),
        }
    }

    pub fn top(&self) -> Option<&T> {
        self.list.first()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Items from top to bottom.
    pub fn iter(&self) -> crate::list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
