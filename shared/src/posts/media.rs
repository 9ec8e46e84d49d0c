use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    #[must_use]
    pub fn classify(url: &str) -> Self {
        if url.contains(".mp4") || url.contains("video") {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// Full-screen viewer over a post's media with wrap-around navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaViewer {
    items: Vec<String>,
    index: usize,
}

impl MediaViewer {
    /// `start` is the clicked thumbnail's `data-index`. Non-numeric input
    /// starts at the first item and anything past the end at the last.
    /// Returns `None` when there is nothing to show.
    #[must_use]
    pub fn open(items: Vec<String>, start: Option<&str>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let requested = start
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(0);
        let index = requested.min(items.len() - 1);
        Some(Self { items, index })
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn prev(&mut self) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.items[self.index]
    }

    #[must_use]
    pub fn current_kind(&self) -> MediaKind {
        MediaKind::classify(self.current())
    }

    #[must_use]
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("/media/{i}.jpg")).collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(MediaKind::classify("/media/clip.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::classify("/media/video/123"), MediaKind::Video);
        assert_eq!(MediaKind::classify("/media/room.jpg"), MediaKind::Image);
    }

    #[test]
    fn test_empty_list_does_not_open() {
        assert!(MediaViewer::open(Vec::new(), Some("0")).is_none());
    }

    #[test]
    fn test_start_index_parsing() {
        assert_eq!(MediaViewer::open(urls(3), Some("2")).unwrap().index(), 2);
        assert_eq!(MediaViewer::open(urls(3), Some("abc")).unwrap().index(), 0);
        assert_eq!(MediaViewer::open(urls(3), None).unwrap().index(), 0);
        assert_eq!(MediaViewer::open(urls(3), Some("-1")).unwrap().index(), 0);
        assert_eq!(MediaViewer::open(urls(3), Some("9")).unwrap().index(), 2);
    }

    #[test]
    fn test_circular_navigation() {
        let mut viewer = MediaViewer::open(urls(3), Some("0")).unwrap();
        viewer.prev();
        assert_eq!(viewer.index(), 2);
        assert_eq!(viewer.counter(), "3 / 3");
        viewer.next();
        assert_eq!(viewer.index(), 0);
        viewer.next();
        viewer.next();
        viewer.next();
        assert_eq!(viewer.index(), 0);
        assert_eq!(viewer.current(), "/media/0.jpg");
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut viewer = MediaViewer::open(urls(1), None).unwrap();
        viewer.next();
        assert_eq!(viewer.index(), 0);
        viewer.prev();
        assert_eq!(viewer.index(), 0);
        assert_eq!(viewer.counter(), "1 / 1");
    }

    #[test]
    fn test_current_kind_follows_index() {
        let items = vec!["/a.jpg".to_string(), "/b.mp4".to_string()];
        let mut viewer = MediaViewer::open(items, None).unwrap();
        assert_eq!(viewer.current_kind(), MediaKind::Image);
        viewer.next();
        assert_eq!(viewer.current_kind(), MediaKind::Video);
    }
}
