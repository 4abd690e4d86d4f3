use alloc::{collections::VecDeque, string::String};

/// Unconsumed input held between `process` calls.
///
/// Fragments land at the back; the state machine drains classified
/// characters from the front. Whatever suffix cannot be classified yet stays
/// queued for the next call, so a fragment boundary can fall anywhere.
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    data: VecDeque<char>,
}

impl Buffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, text: &str) {
        self.data.extend(text.chars());
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.data.front().copied()
    }

    pub(crate) fn pop(&mut self) -> Option<char> {
        self.data.pop_front()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Non-consuming walk over the queued characters, front to back.
    pub(crate) fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.data.iter().copied()
    }

    /// Measures the longest front run satisfying `predicate`, then splices
    /// it into `dst` in one drain. Returns the run length.
    pub(crate) fn take_run<F>(&mut self, dst: &mut String, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let run = self.chars().take_while(|&ch| predicate(ch)).count();
        dst.extend(self.data.drain(..run));
        run
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::Buffer;

    #[test]
    fn push_then_drain_front() {
        let mut buf = Buffer::new();
        buf.push("ab");
        buf.push("c");
        assert_eq!(buf.peek(), Some('a'));
        assert_eq!(buf.pop(), Some('a'));
        assert_eq!(buf.pop(), Some('b'));
        assert_eq!(buf.pop(), Some('c'));
        assert_eq!(buf.pop(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn take_run_stops_at_predicate() {
        let mut buf = Buffer::new();
        buf.push("123x456");
        let mut dst = String::new();
        let run = buf.take_run(&mut dst, |c| c.is_ascii_digit());
        assert_eq!(run, 3);
        assert_eq!(dst, "123");
        assert_eq!(buf.peek(), Some('x'));
    }

    #[test]
    fn take_run_spanning_multiple_pushes() {
        let mut buf = Buffer::new();
        buf.push("ab");
        buf.push("cd,rest");
        let mut dst = String::new();
        let run = buf.take_run(&mut dst, |c| c != ',');
        assert_eq!(run, 4);
        assert_eq!(dst, "abcd");
        assert_eq!(buf.peek(), Some(','));
    }

    #[test]
    fn empty_run_leaves_buffer_untouched() {
        let mut buf = Buffer::new();
        buf.push("x");
        let mut dst = String::new();
        assert_eq!(buf.take_run(&mut dst, |c| c.is_ascii_digit()), 0);
        assert_eq!(dst, "");
        assert_eq!(buf.peek(), Some('x'));
    }

    #[test]
    fn chars_does_not_consume() {
        let mut buf = Buffer::new();
        buf.push("xy");
        let seen: alloc::vec::Vec<char> = buf.chars().collect();
        assert_eq!(seen, ['x', 'y']);
        assert_eq!(buf.peek(), Some('x'));
    }
}
