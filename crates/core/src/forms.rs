//! Input form state
//!
//! A form is a draft plus an open/closed flag. The draft survives a failed
//! submit untouched; only a successful write closes and resets it.

/// Draft being edited in a dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState<D> {
    open: bool,
    draft: D,
}

impl<D: Default> FormState<D> {
    pub fn new() -> Self {
        Self { open: false, draft: D::default() }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Open with a pre-filled draft.
    pub fn open_with(&mut self, draft: D) {
        self.draft = draft;
        self.open = true;
    }

    /// Dismiss without submitting. The draft is kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close after a successful submit and start the next draft fresh.
    pub fn close_and_reset(&mut self) {
        self.open = false;
        self.draft = D::default();
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn replace_draft(&mut self, draft: D) {
        self.draft = draft;
    }
}
