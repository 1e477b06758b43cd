pub mod matching;
pub mod payout;
