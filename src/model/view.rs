#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Seasonal,
    Trend,
    Overall,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Seasonal => "Seasonal (Spectral + Max-lag)",
            ViewMode::Trend => "Trend (R2 + DTW)",
            ViewMode::Overall => "Composite (Trend + Seasonal)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Seasonal => "seasonal",
            ViewMode::Trend => "trend",
            ViewMode::Overall => "overall",
        }
    }
}
