//! Serializable catalog formats and their conversion into core types.

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use serde::{Deserialize, Serialize};
use upgrade_core::{
    Category, ConditionalEffect, GameRuleEffect, GameRuleKind, OnKillHealEffect, PlayerStatKind,
    PostDashDamageBuffEffect, Predicate, Rarity, SpawnMultiplierEffect, SpawnPoolModifierEffect,
    StatFlatEffect, StatMultiplierEffect, UpgradeDefinition, UpgradeDisplay, UpgradeEffect,
};

/// One effect entry as written in a catalog file.
///
/// Stats and rules are referenced by their identifier names
/// (`"AttackDamage"`, `"RoomCount"`); resolution happens in
/// [`into_effect`](Self::into_effect).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EffectSpec {
    StatFlat {
        stat: String,
        amount: f64,
    },
    StatMultiplier {
        stat: String,
        percent: f64,
    },
    SpawnMultiplier {
        multiplier: f64,
    },
    SpawnPoolModifier {
        #[serde(default)]
        add_to_pool: Vec<String>,
        #[serde(default)]
        remove_from_pool: Vec<String>,
    },
    GameRule {
        rule: String,
        #[serde(default)]
        flat_delta: f64,
        #[serde(default)]
        multiplier_delta: f64,
    },
    OnKillHeal {
        heal_amount: f64,
    },
    PostDashDamageBuff {
        damage_bonus: f64,
        duration: f64,
    },
    Conditional {
        predicate: PredicateSpec,
        #[serde(default)]
        when_true: Vec<EffectSpec>,
        #[serde(default)]
        when_false: Vec<EffectSpec>,
    },
}

impl EffectSpec {
    /// Convert into a core effect, resolving stat/rule names.
    pub fn into_effect(self) -> anyhow::Result<UpgradeEffect> {
        Ok(match self {
            Self::StatFlat { stat, amount } => {
                UpgradeEffect::StatFlat(StatFlatEffect::new(parse_stat(&stat)?, amount))
            }
            Self::StatMultiplier { stat, percent } => UpgradeEffect::StatMultiplier(
                StatMultiplierEffect::new(parse_stat(&stat)?, percent),
            ),
            Self::SpawnMultiplier { multiplier } => {
                if !(multiplier.is_finite() && multiplier > 0.0) {
                    bail!("spawn multiplier must be finite and positive, got {multiplier}");
                }
                UpgradeEffect::SpawnMultiplier(SpawnMultiplierEffect::new(multiplier))
            }
            Self::SpawnPoolModifier {
                add_to_pool,
                remove_from_pool,
            } => UpgradeEffect::SpawnPoolModifier(SpawnPoolModifierEffect::new(
                add_to_pool,
                remove_from_pool,
            )),
            Self::GameRule {
                rule,
                flat_delta,
                multiplier_delta,
            } => UpgradeEffect::GameRule(GameRuleEffect::new(
                parse_rule(&rule)?,
                flat_delta,
                multiplier_delta,
            )),
            Self::OnKillHeal { heal_amount } => {
                UpgradeEffect::OnKillHeal(OnKillHealEffect::new(heal_amount))
            }
            Self::PostDashDamageBuff {
                damage_bonus,
                duration,
            } => UpgradeEffect::PostDashDamageBuff(PostDashDamageBuffEffect::new(
                damage_bonus,
                duration,
            )),
            Self::Conditional {
                predicate,
                when_true,
                when_false,
            } => {
                let when_true = convert_all(when_true)?;
                let when_false = convert_all(when_false)?;
                UpgradeEffect::Conditional(ConditionalEffect::new(
                    predicate.into_predicate(),
                    when_true,
                    when_false,
                ))
            }
        })
    }
}

/// Branch condition as written in a catalog file. The code-only `Custom`
/// predicate has no spec form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PredicateSpec {
    HealthBelow(f64),
    HealthAbove(f64),
    FloorBelow(f64),
    FloorAbove(f64),
}

impl PredicateSpec {
    pub fn into_predicate(self) -> Predicate {
        match self {
            Self::HealthBelow(t) => Predicate::HealthBelow(t),
            Self::HealthAbove(t) => Predicate::HealthAbove(t),
            Self::FloorBelow(t) => Predicate::FloorBelow(t),
            Self::FloorAbove(t) => Predicate::FloorAbove(t),
        }
    }
}

/// One complete upgrade entry: gameplay and card face in one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeSpec {
    pub id: String,
    pub name: String,

    /// Empty means the card text is auto-built from the effects.
    #[serde(default)]
    pub description: String,

    pub rarity: Rarity,
    pub category: Category,

    /// -1 = unlimited, otherwise a positive cap.
    #[serde(default = "default_max_stacks")]
    pub max_stacks: i32,

    #[serde(default)]
    pub scale_with_stacks: bool,

    pub effects: Vec<EffectSpec>,
}

fn default_max_stacks() -> i32 {
    1
}

impl UpgradeSpec {
    /// Convert into the paired core definition and display.
    pub fn into_pair(self) -> anyhow::Result<(UpgradeDefinition, UpgradeDisplay)> {
        let max_stacks = match self.max_stacks {
            -1 => None,
            n if n > 0 => Some(n as u32),
            n => bail!("max_stacks must be -1 or positive, got {n}"),
        };
        let effects = convert_all(self.effects)
            .with_context(|| format!("in upgrade `{}`", self.id))?;

        let mut definition = UpgradeDefinition::new(self.id.clone(), max_stacks, effects);
        if self.scale_with_stacks {
            definition = definition.with_stack_scaling();
        }

        let mut display = UpgradeDisplay::new(self.id, self.name, self.rarity, self.category);
        if !self.description.is_empty() {
            display = display.with_description(self.description);
        }
        Ok((definition, display))
    }
}

/// Top-level catalog file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub upgrades: Vec<UpgradeSpec>,
}

fn convert_all(specs: Vec<EffectSpec>) -> anyhow::Result<Vec<UpgradeEffect>> {
    specs.into_iter().map(EffectSpec::into_effect).collect()
}

fn parse_stat(name: &str) -> anyhow::Result<PlayerStatKind> {
    PlayerStatKind::from_str(name).map_err(|_| anyhow!("unknown player stat `{name}`"))
}

fn parse_rule(name: &str) -> anyhow::Result<GameRuleKind> {
    GameRuleKind::from_str(name).map_err(|_| anyhow!("unknown game rule `{name}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_names_resolve() {
        let effect = EffectSpec::StatFlat {
            stat: "AttackDamage".into(),
            amount: 5.0,
        }
        .into_effect()
        .unwrap();
        assert_eq!(effect.describe(), "+5 Attack Damage");
    }

    #[test]
    fn unknown_stat_is_a_load_error() {
        let err = EffectSpec::StatFlat {
            stat: "Luck".into(),
            amount: 1.0,
        }
        .into_effect()
        .unwrap_err();
        assert!(err.to_string().contains("Luck"));
    }

    #[test]
    fn unlimited_and_invalid_stack_caps() {
        let spec = UpgradeSpec {
            id: "x".into(),
            name: "X".into(),
            description: String::new(),
            rarity: Rarity::Common,
            category: Category::Utility,
            max_stacks: -1,
            scale_with_stacks: false,
            effects: vec![],
        };
        let (definition, _) = spec.clone().into_pair().unwrap();
        assert_eq!(definition.max_stacks, None);

        let bad = UpgradeSpec {
            max_stacks: 0,
            ..spec
        };
        assert!(bad.into_pair().is_err());
    }

    #[test]
    fn nested_conditional_converts() {
        let spec = EffectSpec::Conditional {
            predicate: PredicateSpec::FloorBelow(5.0),
            when_true: vec![EffectSpec::StatFlat {
                stat: "MoveSpeed".into(),
                amount: 2.0,
            }],
            when_false: vec![],
        };
        let effect = spec.into_effect().unwrap();
        assert!(effect.describe().starts_with("While before floor 5"));
    }

    #[test]
    fn bad_name_inside_branch_names_the_upgrade() {
        let spec = UpgradeSpec {
            id: "broken".into(),
            name: "Broken".into(),
            description: String::new(),
            rarity: Rarity::Common,
            category: Category::Utility,
            max_stacks: 1,
            scale_with_stacks: false,
            effects: vec![EffectSpec::Conditional {
                predicate: PredicateSpec::HealthBelow(30.0),
                when_true: vec![EffectSpec::GameRule {
                    rule: "GoldRate".into(),
                    flat_delta: 1.0,
                    multiplier_delta: 0.0,
                }],
                when_false: vec![],
            }],
        };
        let err = spec.into_pair().unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("broken"));
        assert!(chain.contains("GoldRate"));
    }
}
