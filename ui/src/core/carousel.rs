//! Index state for carousels, tab strips and slide dots.

use super::error::InputError;

/// Bounded, wrapping counter over `len` slides. Starts at 0 and never ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycler {
    len: usize,
    index: usize,
}

impl Cycler {
    pub fn new(len: usize) -> Result<Self, InputError> {
        if len == 0 {
            return Err(InputError::EmptyCollection { what: "carousel" });
        }
        Ok(Self { len, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump to `target`, wrapping out-of-range indices.
    pub fn go_to(&mut self, target: usize) -> usize {
        self.index = target % self.len;
        self.index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_wraps_forward() {
        let mut cycler = Cycler::new(3).unwrap();
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.next(), 1);
        assert_eq!(cycler.next(), 2);
        assert_eq!(cycler.next(), 0);
    }

    #[test]
    fn wraps_backward() {
        let mut cycler = Cycler::new(4).unwrap();
        assert_eq!(cycler.prev(), 3);
        assert_eq!(cycler.prev(), 2);
    }

    #[test]
    fn go_to_wraps() {
        let mut cycler = Cycler::new(3).unwrap();
        assert_eq!(cycler.go_to(2), 2);
        assert!(cycler.is_active(2));
        assert_eq!(cycler.go_to(7), 1);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut cycler = Cycler::new(1).unwrap();
        assert_eq!(cycler.next(), 0);
        assert_eq!(cycler.prev(), 0);
        assert!(Cycler::new(0).is_err());
    }
}
