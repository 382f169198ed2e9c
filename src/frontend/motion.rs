//! Entrance animation settings. Views read a [`MotionConfig`] from context and
//! turn it into inline styles driving the `reveal` keyframes in
//! `style/main.css`.

/// One fade-and-slide entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Vertical start offset; negative slides down from above.
    pub offset_px: i32,
}

impl Reveal {
    pub const fn new(duration_ms: u32, offset_px: i32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            offset_px,
        }
    }

    pub const fn after(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn style(&self) -> String {
        format!(
            "--reveal-offset: {}px; animation: reveal {}ms ease-out {}ms both;",
            self.offset_px, self.duration_ms, self.delay_ms
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionConfig {
    /// Page titles.
    pub header: Reveal,
    /// Larger blocks such as detail sections.
    pub section: Reveal,
    /// Cards in a grid, staggered by `stagger_ms`.
    pub item: Reveal,
    pub stagger_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            header: Reveal::new(500, -20),
            section: Reveal::new(400, 20),
            item: Reveal::new(500, 20),
            stagger_ms: 100,
        }
    }
}

impl MotionConfig {
    /// Style for the `index`-th item of a staggered list.
    pub fn item_style(&self, index: usize) -> String {
        let delay = self.item.delay_ms + self.stagger_ms.saturating_mul(index as u32);
        self.item.after(delay).style()
    }

    /// Style for the `step`-th section of a detail page.
    pub fn section_style(&self, step: u32) -> String {
        self.section.after(step * self.stagger_ms).style()
    }

    pub fn header_style(&self) -> String {
        self.header.style()
    }
}
