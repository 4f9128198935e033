use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PositionParseError {
    #[error("invalid position notation; could not parse board from `{notation}`")]
    MalformedNotation { notation: String },
    #[error("pit or store count `{value}` is out of range")]
    CountOutOfRange { value: String },
    #[error("position holds {found} stones, expected {expected}")]
    WrongStoneTotal { found: u32, expected: u32 },
}
