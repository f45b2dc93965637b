use crate::domain::ProductDraft;

/// Orders draft writes from the page. At most one write is outstanding;
/// edits made while it runs collapse into the latest value, which is
/// written next. A write can therefore never land after a newer one.
#[derive(Debug, Default)]
pub struct DraftSync {
    writing: bool,
    pending: Option<ProductDraft>,
}

impl DraftSync {
    /// Records `draft` as the latest value. Returns `true` when the caller
    /// should start draining with [`DraftSync::next`].
    pub fn push(&mut self, draft: ProductDraft) -> bool {
        self.pending = Some(draft);
        if self.writing {
            false
        } else {
            self.writing = true;
            true
        }
    }

    /// The next draft to write, or `None` once drained.
    pub fn next(&mut self) -> Option<ProductDraft> {
        let next = self.pending.take();
        if next.is_none() {
            self.writing = false;
        }
        next
    }

    pub fn is_writing(&self) -> bool {
        self.writing
    }
}
