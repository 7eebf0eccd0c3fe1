use std::fmt;

/// Phases of the token swap wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapPhase {
    /// Pick tokens and enter an amount
    Form,
    /// Confirm the committed amount
    Review,
    Done,
}

impl SwapPhase {
    pub const ALL: [Self; 3] = [Self::Form, Self::Review, Self::Done];

    pub fn title(self) -> &'static str {
        match self {
            SwapPhase::Form => "Swap",
            SwapPhase::Review => "Review swap",
            SwapPhase::Done => "Swap submitted",
        }
    }
}

impl fmt::Display for SwapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
