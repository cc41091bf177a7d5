//! Upgrade definitions and their card-face metadata.
//!
//! A definition is the gameplay half (stacking rules plus effect bundle);
//! the display is the presentational half. The two are paired 1:1 by id in
//! the [`UpgradeManager`](crate::manager::UpgradeManager).

use std::rc::Rc;

use strum::{Display, EnumIter, EnumString};

use crate::effect::UpgradeEffect;

/// Card rarity, which drives selection weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// Selection weight used by rarity-weighted draws.
    pub fn weight(self) -> u32 {
        match self {
            Self::Common => 60,
            Self::Uncommon => 25,
            Self::Rare => 12,
            Self::Legendary => 3,
        }
    }
}

/// Card category, presentational grouping only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Movement,
    Combat,
    Defence,
    #[default]
    Utility,
    Special,
}

/// Gameplay definition of one upgrade.
#[derive(Debug)]
pub struct UpgradeDefinition {
    /// Primary key; must match the paired display's id.
    pub id: String,

    /// Acquisition cap per run. `None` means unlimited.
    pub max_stacks: Option<u32>,

    /// Advisory flag for card text: numbers shown scale with the stack
    /// count. Application itself always runs once per acquired stack.
    pub scale_with_stacks: bool,

    /// Applied in order on acquire, removed in order on revoke.
    pub effects: Vec<Rc<UpgradeEffect>>,
}

impl UpgradeDefinition {
    pub fn new(
        id: impl Into<String>,
        max_stacks: Option<u32>,
        effects: Vec<UpgradeEffect>,
    ) -> Self {
        Self {
            id: id.into(),
            max_stacks,
            scale_with_stacks: false,
            effects: effects.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn with_stack_scaling(mut self) -> Self {
        self.scale_with_stacks = true;
        self
    }

    /// Whether `stacks` acquisitions hit the cap.
    pub fn at_cap(&self, stacks: u32) -> bool {
        self.max_stacks.is_some_and(|max| stacks >= max)
    }

    pub fn apply(&self, ctx: &crate::context::UpgradeContext) {
        for effect in &self.effects {
            effect.apply(ctx);
        }
    }

    pub fn remove(&self, ctx: &crate::context::UpgradeContext) {
        for effect in &self.effects {
            effect.remove(ctx);
        }
    }

    pub fn has_ticking_effects(&self) -> bool {
        self.effects.iter().any(|effect| effect.needs_tick())
    }

    /// One bullet line per effect, for cards without hand-written text.
    pub fn build_auto_description(&self) -> String {
        let mut lines = Vec::new();
        for effect in &self.effects {
            let text = effect.describe();
            if !text.is_empty() {
                lines.push(format!("\u{2022} {text}"));
            }
        }
        lines.join("\n")
    }
}

/// Presentational upgrade data, what the card UI shows. No game logic.
#[derive(Clone, Debug)]
pub struct UpgradeDisplay {
    /// Must exactly match the paired definition's id.
    pub id: String,
    pub name: String,
    /// Empty means auto-generate from the definition's effects.
    pub description: String,
    pub rarity: Rarity,
    pub category: Category,
}

impl UpgradeDisplay {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rarity: Rarity,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rarity,
            category,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Hand-written description, or the definition's auto-built one.
    pub fn description_or_auto(&self, definition: &UpgradeDefinition) -> String {
        if self.description.is_empty() {
            definition.build_auto_description()
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{SpawnMultiplierEffect, StatFlatEffect, StatMultiplierEffect};
    use crate::stats::PlayerStatKind;

    fn glass_cannon() -> UpgradeDefinition {
        UpgradeDefinition::new(
            "glass_cannon",
            Some(1),
            vec![
                UpgradeEffect::StatMultiplier(StatMultiplierEffect::new(
                    PlayerStatKind::AttackDamage,
                    1.0,
                )),
                UpgradeEffect::SpawnMultiplier(SpawnMultiplierEffect::new(1.5)),
            ],
        )
    }

    #[test]
    fn auto_description_is_one_bullet_per_effect() {
        assert_eq!(
            glass_cannon().build_auto_description(),
            "\u{2022} +100% Attack Damage\n\u{2022} 1.5× enemy spawn rate"
        );
    }

    #[test]
    fn display_falls_back_to_auto_description() {
        let definition = glass_cannon();
        let display = UpgradeDisplay::new("glass_cannon", "Glass Cannon", Rarity::Rare, Category::Combat);
        assert!(display.description_or_auto(&definition).contains("+100%"));

        let written = display.with_description("Hit harder, die faster.");
        assert_eq!(
            written.description_or_auto(&definition),
            "Hit harder, die faster."
        );
    }

    #[test]
    fn stack_cap() {
        let definition = glass_cannon();
        assert!(!definition.at_cap(0));
        assert!(definition.at_cap(1));

        let unlimited =
            UpgradeDefinition::new("dmg", None, vec![UpgradeEffect::StatFlat(
                StatFlatEffect::new(PlayerStatKind::AttackDamage, 5.0),
            )]);
        assert!(!unlimited.at_cap(1000));
    }

    #[test]
    fn rarity_weights() {
        assert_eq!(Rarity::Common.weight(), 60);
        assert_eq!(Rarity::Uncommon.weight(), 25);
        assert_eq!(Rarity::Rare.weight(), 12);
        assert_eq!(Rarity::Legendary.weight(), 3);
    }
}
