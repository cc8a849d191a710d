//! Book model: pagination of a story and the page-turn state machine.
//!
//! Slot 0 of a book is the cover; slots `1..=page_count` hold consecutive
//! slices of the story. Pages are cut by character, never inside one.

use crate::story::StoryText;

/// Number of content pages a story is split into.
pub const CONTENT_PAGES: usize = 4;

/// Character lengths of the `parts` slices a text of `len` characters is cut
/// into: `ceil(len / parts)` each, with the last slice taking the remainder.
pub fn page_lengths(len: usize, parts: usize) -> Vec<usize> {
    if parts == 0 {
        return Vec::new();
    }
    let page_len = len.div_ceil(parts);
    (0..parts)
        .map(|i| {
            let start = (i * page_len).min(len);
            let end = if i + 1 == parts { len } else { ((i + 1) * page_len).min(len) };
            end - start
        })
        .collect()
}

/// Split `text` into contiguous slices sized by [`page_lengths`].
///
/// Concatenating the result always reproduces `text`.
pub fn split_pages(text: &str, parts: usize) -> Vec<String> {
    let mut rest = text;
    page_lengths(text.chars().count(), parts)
        .into_iter()
        .map(|take| {
            let split = rest.char_indices().nth(take).map(|(i, _)| i).unwrap_or(rest.len());
            let (page, tail) = rest.split_at(split);
            rest = tail;
            page.to_string()
        })
        .collect()
}

/// A story laid out as a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pages: Vec<String>,
}

/// What a single viewer slot shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    Cover { title: String, author: String },
    Content { number: usize, text: String },
}

impl Book {
    pub fn from_story(story: &StoryText, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            pages: split_pages(story.as_str(), CONTENT_PAGES),
        }
    }

    /// Number of content pages (the cover is not counted).
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Content pages in reading order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// The view for viewer slot `index`; `None` past the last page.
    pub fn view(&self, index: usize) -> Option<PageView> {
        if index == 0 {
            return Some(PageView::Cover {
                title: self.title.clone(),
                author: self.author.clone(),
            });
        }
        self.pages.get(index - 1).map(|text| PageView::Content {
            number: index,
            text: text.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Idle { page: usize },
    Flipping { page: usize, direction: FlipDirection },
}

/// Page-turn state machine.
///
/// A turn is requested, then completed by [`BookViewer::finish_flip`] once the
/// flip animation has run. Requests arriving mid-flip are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookViewer {
    page_count: usize,
    state: ViewerState,
}

impl BookViewer {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            state: ViewerState::Idle { page: 0 },
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn current_page(&self) -> usize {
        match self.state {
            ViewerState::Idle { page } | ViewerState::Flipping { page, .. } => page,
        }
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.state, ViewerState::Flipping { .. })
    }

    pub fn flip_direction(&self) -> Option<FlipDirection> {
        match self.state {
            ViewerState::Flipping { direction, .. } => Some(direction),
            ViewerState::Idle { .. } => None,
        }
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.state, ViewerState::Idle { page } if page < self.page_count)
    }

    pub fn can_go_prev(&self) -> bool {
        matches!(self.state, ViewerState::Idle { page } if page > 0)
    }

    /// Start turning forward. Returns whether a flip started.
    pub fn request_next(&mut self) -> bool {
        self.start_flip(FlipDirection::Next)
    }

    /// Start turning back. Returns whether a flip started.
    pub fn request_prev(&mut self) -> bool {
        self.start_flip(FlipDirection::Prev)
    }

    fn start_flip(&mut self, direction: FlipDirection) -> bool {
        let allowed = match direction {
            FlipDirection::Next => self.can_go_next(),
            FlipDirection::Prev => self.can_go_prev(),
        };
        if allowed {
            self.state = ViewerState::Flipping {
                page: self.current_page(),
                direction,
            };
        }
        allowed
    }

    /// Land the flip in progress, if any, and return the new page.
    pub fn finish_flip(&mut self) -> Option<usize> {
        let ViewerState::Flipping { page, direction } = self.state else {
            return None;
        };
        let landed = match direction {
            FlipDirection::Next => (page + 1).min(self.page_count),
            FlipDirection::Prev => page.saturating_sub(1),
        };
        self.state = ViewerState::Idle { page: landed };
        Some(landed)
    }

    /// "Cover" on the cover, "k / n" on content pages.
    pub fn indicator(&self) -> String {
        match self.current_page() {
            0 => "Cover".to_string(),
            page => format!("{} / {}", page, self.page_count),
        }
    }
}
