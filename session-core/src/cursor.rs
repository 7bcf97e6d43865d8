//! Bounded navigation over an article's comment thread.

use shared::Comment;

/// What the comment carousel displays for one comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEntry {
    pub author: String,
    pub content: String,
}

impl From<&Comment> for CommentEntry {
    fn from(comment: &Comment) -> Self {
        Self {
            author: comment.author.clone(),
            content: comment.content.clone(),
        }
    }
}

/// A comment thread plus the index of the displayed comment.
///
/// `index < len()` whenever the thread is non-empty; moves saturate at
/// both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentCursor {
    thread: Vec<CommentEntry>,
    index: usize,
}

impl CommentCursor {
    /// Fresh load: show the first comment
    pub fn load(&mut self, thread: Vec<CommentEntry>) {
        self.thread = thread;
        self.index = 0;
    }

    /// Reload after an append: show the newest comment
    pub fn load_latest(&mut self, thread: Vec<CommentEntry>) {
        self.index = thread.len().saturating_sub(1);
        self.thread = thread;
    }

    pub fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.index + 1 < self.thread.len() {
            self.index += 1;
        }
    }

    /// The displayed comment, `None` for an empty thread
    pub fn current(&self) -> Option<&CommentEntry> {
        self.thread.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.thread.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thread.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.thread.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(n: usize) -> Vec<CommentEntry> {
        (0..n)
            .map(|i| CommentEntry {
                author: format!("user{}", i),
                content: format!("comment {}", i),
            })
            .collect()
    }

    #[test]
    fn empty_thread_has_no_current() {
        let mut cursor = CommentCursor::default();
        assert!(cursor.current().is_none());
        cursor.next();
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        assert!(cursor.current().is_none());
    }

    #[test]
    fn previous_at_start_is_noop() {
        let mut cursor = CommentCursor::default();
        cursor.load(thread(3));
        cursor.previous();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current().unwrap().author, "user0");
    }

    #[test]
    fn next_at_end_is_noop() {
        let mut cursor = CommentCursor::default();
        cursor.load(thread(2));
        cursor.next();
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 1);
        assert!(!cursor.has_next());
        assert!(cursor.has_previous());
    }

    #[test]
    fn load_resets_to_first() {
        let mut cursor = CommentCursor::default();
        cursor.load(thread(4));
        cursor.next();
        cursor.next();
        cursor.load(thread(4));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn load_latest_points_at_newest() {
        let mut cursor = CommentCursor::default();
        cursor.load(thread(2));
        cursor.load_latest(thread(3));
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.current().unwrap().content, "comment 2");
    }

    #[test]
    fn reload_to_shorter_or_empty_thread_stays_valid() {
        let mut cursor = CommentCursor::default();
        cursor.load_latest(thread(5));
        cursor.load_latest(Vec::new());
        assert_eq!(cursor.index(), 0);
        assert!(cursor.current().is_none());

        cursor.load_latest(thread(5));
        cursor.load(thread(1));
        assert!(cursor.current().is_some());
    }

    #[test]
    fn entry_from_backend_comment() {
        let comment = Comment {
            comment_id: 9,
            content: "Great read".into(),
            created_at: None,
            author: "carol".into(),
        };
        let entry = CommentEntry::from(&comment);
        assert_eq!(entry.author, "carol");
        assert_eq!(entry.content, "Great read");
    }
}
