/// Card grid selection and scroll state.
///
/// `columns` and `visible_rows` are recomputed on every draw from the
/// current terminal size; navigation works on the flat visible-card index
/// and converts to rows only for scrolling.
pub struct GridState {
    pub selected: Option<usize>,
    /// First visible card row
    pub scroll_row: usize,
    pub columns: usize,
    pub visible_rows: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_row: 0,
            columns: 4,
            visible_rows: 4,
        }
    }
}

impl GridState {
    pub fn select_right(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_left(&mut self) {
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + self.columns).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_up(&mut self) {
        let i = match self.selected {
            Some(i) => i.saturating_sub(self.columns),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.columns * self.visible_rows.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self) {
        let jump = self.columns * self.visible_rows.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self) {
        self.selected = Some(0);
        self.scroll_row = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Reset selection after the visible set changed
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_row = 0;
    }

    fn ensure_visible(&mut self, index: usize) {
        if self.columns == 0 {
            return;
        }
        let row = index / self.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if self.visible_rows > 0 && row >= self.scroll_row + self.visible_rows {
            self.scroll_row = row - self.visible_rows + 1;
        }
    }
}
