//! Prefixed sequential id generation.
//!
//! Each generator is owned by the instance that needs ids (an RPC client's
//! correlation ids, a window manager's generated window ids), so two
//! instances never share a counter.

/// A prefixed, incrementing id generator. The first id issued is `"{prefix}1"`.
#[derive(Debug)]
pub struct IdGen {
    prefix: &'static str,
    next: u64,
}

impl IdGen {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1 }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut gen = IdGen::new("m");
        assert_eq!(gen.next_id(), "m1");
        assert_eq!(gen.next_id(), "m2");
        assert_eq!(gen.next_id(), "m3");
    }

    #[test]
    fn generators_are_independent() {
        let mut a = IdGen::new("w");
        let mut b = IdGen::new("w");
        assert_eq!(a.next_id(), "w1");
        assert_eq!(a.next_id(), "w2");
        // A fresh generator starts over; counters are instance-scoped.
        assert_eq!(b.next_id(), "w1");
    }
}
