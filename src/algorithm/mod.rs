/// Round orchestration
pub mod evaluator;
/// Random board generation
pub mod generation;
/// Win pattern detection
pub mod matching;
/// Payout computation
pub mod payout;
