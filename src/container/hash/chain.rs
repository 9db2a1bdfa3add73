/// One link of a [`Chain`].
#[derive(Debug)]
pub struct Node {
    value: String,
    next: Option<Box<Node>>,
}

impl Node {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }
}

/// Singly linked list of keys sharing one bucket.
///
/// Keys keep insertion order and duplicates each take their own node.
#[derive(Debug, Default)]
pub struct Chain {
    head: Option<Box<Node>>,
    len: usize,
}

impl Chain {
    pub fn new() -> Chain {
        Chain { head: None, len: 0 }
    }

    pub fn append(&mut self, key: String) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node {
            value: key,
            next: None,
        }));
        self.len += 1;
    }

    pub fn contains(&self, key: &str) -> bool {
        self.iter().any(|value| value == key)
    }

    /// Unlinks the first node holding `key`.
    pub fn remove(&mut self, key: &str) -> bool {
        let mut cursor = &mut self.head;
        loop {
            match cursor {
                None => return false,
                Some(node) if node.value == key => break,
                Some(node) => cursor = &mut node.next,
            }
        }

        match cursor.take() {
            Some(mut node) => {
                *cursor = node.next.take();
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        // unlink node by node so long chains do not recurse on drop
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn first(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.first() }
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        self.clear();
    }
}

impl IntoIterator for Chain {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { chain: self }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Owning iterator, yields keys front to back while unlinking them.
pub struct IntoIter {
    chain: Chain,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.chain.head.take().map(|mut node| {
            self.chain.head = node.next.take();
            self.chain.len -= 1;
            node.value
        })
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next.map(|node| {
            self.next = node.next();
            node.value()
        })
    }
}
