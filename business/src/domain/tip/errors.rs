#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TipError {
    #[error("tip.unknown_preset")]
    UnknownPreset,
    #[error("tip.invalid_custom_percent")]
    InvalidCustomPercent,
}
