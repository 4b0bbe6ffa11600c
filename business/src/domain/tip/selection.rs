use super::errors::TipError;

/// Fixed tip percentages offered as one-tap choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipPreset {
    Ten,
    Fifteen,
    Twenty,
}

impl TipPreset {
    pub const ALL: [TipPreset; 3] = [TipPreset::Ten, TipPreset::Fifteen, TipPreset::Twenty];

    pub fn percent(self) -> f64 {
        match self {
            TipPreset::Ten => 10.0,
            TipPreset::Fifteen => 15.0,
            TipPreset::Twenty => 20.0,
        }
    }

    pub fn from_percent(percent: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.percent() == percent)
    }
}

impl std::fmt::Display for TipPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// The active tip choice. A preset and a custom entry are never active together.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TipSelection {
    #[default]
    None,
    Preset(TipPreset),
    Custom(f64),
}

impl TipSelection {
    /// Resolves caller input into a selection.
    ///
    /// A preset wins over a custom entry. A blank custom entry means no
    /// selection. Custom values are not range-checked.
    pub fn from_input(
        preset_percent: Option<f64>,
        custom_percent: Option<&str>,
    ) -> Result<Self, TipError> {
        if let Some(percent) = preset_percent {
            return TipPreset::from_percent(percent)
                .map(TipSelection::Preset)
                .ok_or(TipError::UnknownPreset);
        }

        match custom_percent.map(str::trim) {
            None | Some("") => Ok(TipSelection::None),
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .map(TipSelection::Custom)
                .ok_or(TipError::InvalidCustomPercent),
        }
    }

    pub fn percent(&self) -> f64 {
        match self {
            TipSelection::None => 0.0,
            TipSelection::Preset(preset) => preset.percent(),
            TipSelection::Custom(percent) => *percent,
        }
    }
}
