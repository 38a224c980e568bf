use bumpalo::Bump;
use core::fmt;
use std::cmp::Ordering;

/*
 * One link of the chain. A node is uniquely borrowed by its predecessor
 * (or by the list, for the head), so the chain can never loop back.
 */
pub struct Node<'a, T> {
    next: Option<&'a mut Node<'a, T>>,
    data: T,
}

impl<'a, T> Node<'a, T> {
    pub fn new(data: T) -> Self {
        Node { next: None, data }
    }

    pub fn next(&self) -> Option<&Node<'a, T>> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Node<'a, T>> {
        self.next.as_deref_mut()
    }

    /*
     * Replace the successor, handing back the previous one (the detached tail)
     */
    pub fn set_next(&mut self, next: Option<&'a mut Node<'a, T>>) -> Option<&'a mut Node<'a, T>> {
        std::mem::replace(&mut self.next, next)
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn set_data(&mut self, data: T) -> T {
        std::mem::replace(&mut self.data, data)
    }
}

/*
 * Singly linked list whose nodes live in a bump arena.
 * Nodes are never freed one by one: they go away with the arena.
 * The arena does not run destructors, so elements owning heap memory
 * should borrow it from the same arena instead.
 */
pub struct GenericList<'a, T> {
    bump: &'a Bump,
    head: Option<&'a mut Node<'a, T>>,
}

impl<'a, T> GenericList<'a, T> {
    pub fn new(bump: &'a Bump) -> Self {
        GenericList { bump, head: None }
    }

    /*
     * Push in front of the current head: O(1), and the newest
     * element is the first one yielded by `iter`.
     */
    pub fn add_head(&mut self, data: T) {
        let node = self.bump.alloc(Node::new(data));
        node.next = self.head.take();
        self.head = Some(node);
    }

    pub fn head(&self) -> Option<&Node<'a, T>> {
        self.head.as_deref()
    }

    pub fn head_mut(&mut self) -> Option<&mut Node<'a, T>> {
        self.head.as_deref_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    // Not stored, counted by walking the chain
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /*
     * Fresh head-to-tail traversal on every call
     */
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, 'a, T> {
        IterMut {
            current: self.head.as_deref_mut(),
        }
    }

    pub fn find_first<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|data| pred(data))
    }

    /*
     * Bubble sort by relinking nodes: each pass walks a cursor over the
     * links, and an out of order pair (cur, next) becomes (next, cur) by
     * rewriting three links. Element values never move, and equal
     * elements are never swapped, so the sort is stable.
     * Returns the number of swaps performed.
     */
    pub fn bubble_sort_by<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut swaps = 0;

        // Nothing to do for zero or one element
        if self.head.as_ref().map_or(true, |head| head.next.is_none()) {
            return swaps;
        }

        loop {
            let mut swapped = false;
            // Link pointing at the current node: the head, then some node's `next`
            let mut link = &mut self.head;

            loop {
                let Some(cur) = link.take() else { break };
                let Some(next) = cur.next.take() else {
                    *link = Some(cur);
                    break;
                };

                if compare(&cur.data, &next.data) == Ordering::Greater {
                    // predecessor -> next -> cur -> rest
                    cur.next = next.next.take();
                    next.next = Some(cur);
                    *link = Some(next);
                    swaps += 1;
                    swapped = true;
                } else {
                    cur.next = Some(next);
                    *link = Some(cur);
                }

                // Step over the node now sitting at `link`; after a swap the
                // moved-back node is compared again with its new successor
                let Some(node) = link else { break };
                link = &mut node.next;
            }

            if !swapped {
                return swaps;
            }
        }
    }

    pub fn bubble_sort_by_key<K, F>(&mut self, mut key: F) -> usize
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.bubble_sort_by(|a, b| key(a).cmp(&key(b)))
    }
}

impl<'a, T: Ord> GenericList<'a, T> {
    /*
     * Sort from lowest to highest in place
     */
    pub fn bubble_sort(&mut self) -> usize {
        self.bubble_sort_by(T::cmp)
    }
}

/*
 * Lookup by name, for elements that have one
 */
pub trait Named {
    fn name(&self) -> &str;
}

impl<'a, T: Named> GenericList<'a, T> {
    pub fn find_first_occurrence(&self, name: &str) -> Option<&T> {
        self.find_first(|data| data.name() == name)
    }
}

pub struct Iter<'l, 'a, T> {
    current: Option<&'l Node<'a, T>>,
}

impl<'l, 'a, T> Iterator for Iter<'l, 'a, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.data
        })
    }
}

pub struct IterMut<'l, 'a, T> {
    current: Option<&'l mut Node<'a, T>>,
}

impl<'l, 'a, T> Iterator for IterMut<'l, 'a, T> {
    type Item = &'l mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            &mut node.data
        })
    }
}

impl<'l, 'a, T> IntoIterator for &'l GenericList<'a, T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'l, 'a, T> IntoIterator for &'l mut GenericList<'a, T> {
    type Item = &'l mut T;
    type IntoIter = IterMut<'l, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/*
 * Display : a -> b -> c
 */
impl<'a, T: fmt::Display> fmt::Display for GenericList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, data) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", data)?;
        }
        Ok(())
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for GenericList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
