/// Represents the error types that can occur in the notation utilities.
/// The core rule engine itself signals failure through absence (`None`),
/// so these only surface when translating external text into moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errors {
    /// A parsed square lies outside the bounds of the chess board.
    OutOfBounds,
    /// The provided long algebraic notation could not be parsed.
    InvalidAlgebraic,
    /// The notation parsed, but no legal continuation matches it.
    NoMatchingMove,
}
