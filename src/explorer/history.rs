/// Session history, mirroring a browser's back/forward stack plus URL
/// fragment.
///
/// Each entry carries the location fragment: `Some(id)` for a detail view,
/// `None` for the root list. The entry at `cursor` is the current
/// location. A deep link seeds the stack with its fragment as the first
/// entry; that is never counted as a push.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Option<String>>,
    cursor: usize,
}

impl History {
    pub fn new(initial_fragment: Option<String>) -> Self {
        Self {
            entries: vec![initial_fragment],
            cursor: 0,
        }
    }

    /// Fragment of the current location.
    pub fn current_fragment(&self) -> Option<&str> {
        self.entries[self.cursor].as_deref()
    }

    /// Record a user-initiated navigation. Drops any forward entries,
    /// exactly like a browser push after going back.
    pub fn push(&mut self, fragment: Option<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment);
        self.cursor += 1;
    }

    /// Move one entry back. Returns true if the cursor moved; the caller
    /// then replays the location at `current_fragment()` without pushing.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward. Returns true if the cursor moved.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
