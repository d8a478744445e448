//! Vertical scroll position for overlays whose content may exceed the viewport

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute limits after a render; keeps the offset in range
    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.max_offset = content_lines
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down((self.viewport_height / 2).max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up((self.viewport_height / 2).max(1));
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_that_fits_cannot_scroll() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(10, 20);
        scroll.scroll_down(5);
        assert_eq!(scroll.offset, 0);
        assert_eq!(scroll.max_offset, 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100, 20);

        scroll.scroll_down(100);
        assert_eq!(scroll.offset, 80);

        scroll.scroll_up(200);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100, 20);
        scroll.jump_to_bottom();

        scroll.update_bounds(30, 20);
        assert_eq!(scroll.offset, 10);
    }

    #[test]
    fn test_page_moves_half_viewport() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(100, 20);

        scroll.page_down();
        assert_eq!(scroll.offset, 10);
        scroll.page_up();
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn test_page_with_tiny_viewport_still_moves() {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(10, 1);
        scroll.page_down();
        assert_eq!(scroll.offset, 1);
    }
}
