/// FAQ list where at most one answer is expanded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accordion {
    active: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Expand `index`, collapsing any other item, or collapse it if it was
    /// already expanded.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.active = if self.is_open(index) { None } else { Some(index) };
        self.active
    }
}
