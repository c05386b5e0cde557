//! Page clamping against the catalog's hard page ceiling.

/// The catalog refuses to serve pages past this index.
pub const MAX_TOTAL_PAGES: u32 = 500;

/// Clamp a backend-reported page count to `ceiling`.
pub fn clamp_total_pages(reported: u32, ceiling: u32) -> u32 {
    reported.min(ceiling)
}

/// `max(1, min(requested, total_pages))`.
pub fn clamp_page(requested: u32, total_pages: u32) -> u32 {
    requested.min(total_pages).max(1)
}

/// Previous/next controls for the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub current: u32,
    pub total: u32,
}

impl PageControls {
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current: clamp_page(current, total),
            total,
        }
    }

    /// Controls are only offered when there is more than one page.
    pub fn visible(&self) -> bool {
        self.total > 1
    }

    pub fn has_previous(&self) -> bool {
        self.visible() && self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.visible() && self.current < self.total
    }

    pub fn previous(&self) -> u32 {
        clamp_page(self.current.saturating_sub(1), self.total)
    }

    pub fn next(&self) -> u32 {
        clamp_page(self.current.saturating_add(1), self.total)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}
