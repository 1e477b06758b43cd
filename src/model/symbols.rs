use crate::io::document::SymbolDocument;
use crate::io::error::{Result, configuration_error};

/// Symbol identifier as it appears on the grid
pub type SymbolId = String;

/// Symbol classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Pays through matched win patterns
    Standard,
    /// Modifies the total payout by its presence
    Bonus,
}

/// Effect a bonus symbol has on the payout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BonusImpact {
    /// Multiply the running total
    MultiplyReward {
        /// Whole-number multiplier
        multiplier: u32,
    },
    /// Add a fixed amount when the running total exceeds the wager
    ExtraBonus {
        /// Amount added
        extra: u64,
    },
    /// No effect on the payout
    Miss,
}

/// A symbol definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolDefinition {
    /// Regular paying symbol
    Standard {
        /// Multiplier applied to the wager when any pattern matches
        reward_multiplier: f64,
    },
    /// Bonus symbol
    Bonus {
        /// What the symbol does to the payout
        impact: BonusImpact,
    },
}

impl SymbolDefinition {
    /// Classification of this symbol
    pub const fn kind(&self) -> SymbolKind {
        match self {
            Self::Standard { .. } => SymbolKind::Standard,
            Self::Bonus { .. } => SymbolKind::Bonus,
        }
    }

    /// Build a definition, enforcing the fields each kind requires
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the type is missing or unknown, or a
    /// field required by the type or impact is missing or invalid
    pub fn from_document(id: &str, document: &SymbolDocument) -> Result<Self> {
        let field = |name: &str| format!("symbols.{id}.{name}");

        match document.kind.as_deref() {
            Some("standard") => {
                let reward_multiplier = document.reward_multiplier.ok_or_else(|| {
                    configuration_error(field("reward_multiplier"), &"required for standard symbols")
                })?;
                if !reward_multiplier.is_finite() || reward_multiplier < 0.0 {
                    return Err(configuration_error(
                        field("reward_multiplier"),
                        &format!("must be a non-negative number, got {reward_multiplier}"),
                    ));
                }
                Ok(Self::Standard { reward_multiplier })
            }
            Some("bonus") => {
                let impact = match document.impact.as_deref() {
                    Some("multiply_reward") => {
                        let multiplier = document.reward_multiplier.ok_or_else(|| {
                            configuration_error(
                                field("reward_multiplier"),
                                &"required for multiply_reward",
                            )
                        })?;
                        BonusImpact::MultiplyReward {
                            multiplier: whole_number(multiplier)
                                .and_then(|value| u32::try_from(value).ok())
                                .ok_or_else(|| {
                                    configuration_error(
                                        field("reward_multiplier"),
                                        &format!(
                                            "must be a non-negative whole number, got {multiplier}"
                                        ),
                                    )
                                })?,
                        }
                    }
                    Some("extra_bonus") => {
                        let extra = document.extra.ok_or_else(|| {
                            configuration_error(field("extra"), &"required for extra_bonus")
                        })?;
                        BonusImpact::ExtraBonus {
                            extra: whole_number(extra).ok_or_else(|| {
                                configuration_error(
                                    field("extra"),
                                    &format!("must be a non-negative whole number, got {extra}"),
                                )
                            })?,
                        }
                    }
                    other => {
                        tracing::debug!(
                            symbol = id,
                            impact = ?other,
                            "bonus symbol has no payout effect"
                        );
                        BonusImpact::Miss
                    }
                };
                Ok(Self::Bonus { impact })
            }
            Some(other) => Err(configuration_error(
                field("type"),
                &format!("expected 'standard' or 'bonus', got '{other}'"),
            )),
            None => Err(configuration_error(field("type"), &"missing")),
        }
    }
}

fn whole_number(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64)
        .then_some(value as u64)
}
