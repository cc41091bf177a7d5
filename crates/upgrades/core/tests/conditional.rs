//! Conditional effects driven through the manager and runner.

use std::cell::RefCell;
use std::rc::Rc;

use upgrade_core::{
    BusRegistry, Category, Collaborators, ConditionalEffect, ConditionalEffectRunner, GameEvents,
    GameRuleKind, GameRules, HealthSource, PlayerHandle, PlayerId, PlayerStatKind, PlayerStats,
    Predicate, Rarity, SpawnPool, StatFlatEffect, StatMultiplierEffect, UpgradeDefinition,
    UpgradeDisplay, UpgradeEffect, UpgradeManager,
};

struct Health {
    hp: f64,
    max: f64,
}

impl HealthSource for Health {
    fn current_hp(&self) -> f64 {
        self.hp
    }

    fn max_hp(&self) -> f64 {
        self.max
    }

    fn heal(&mut self, amount: f64) {
        self.hp = (self.hp + amount).min(self.max);
    }
}

fn session_with_health(hp: f64) -> (UpgradeManager, Collaborators, PlayerHandle, Rc<RefCell<Health>>) {
    let mut registry = BusRegistry::new();
    let events = GameEvents::new(&mut registry);
    let health = Rc::new(RefCell::new(Health { hp, max: 100.0 }));
    let collab = Collaborators::new(
        PlayerStats::default(),
        GameRules::default(),
        SpawnPool::default(),
        ConditionalEffectRunner::shared(),
        events,
    )
    .with_health(health.clone());
    let manager = UpgradeManager::new(collab.clone(), 42);
    (manager, collab, PlayerHandle::new(PlayerId(1)), health)
}

fn conditional_card(
    id: &str,
    predicate: Predicate,
    when_true: Vec<UpgradeEffect>,
    when_false: Vec<UpgradeEffect>,
) -> (UpgradeDefinition, UpgradeDisplay) {
    (
        UpgradeDefinition::new(
            id,
            Some(1),
            vec![UpgradeEffect::Conditional(ConditionalEffect::new(
                predicate, when_true, when_false,
            ))],
        ),
        UpgradeDisplay::new(id, id, Rarity::Uncommon, Category::Special),
    )
}

fn flat(stat: PlayerStatKind, amount: f64) -> UpgradeEffect {
    UpgradeEffect::StatFlat(StatFlatEffect::new(stat, amount))
}

#[test]
fn floor_conditional_swaps_branch_exactly_once() {
    let (mut mgr, collab, player, _health) = session_with_health(100.0);
    // Room count rule: 10 base, pulled down to 3 for the early floors.
    collab
        .rules
        .borrow_mut()
        .add_flat(GameRuleKind::RoomCount, -7.0);

    let (def, display) = conditional_card(
        "early_bird",
        Predicate::FloorBelow(5.0),
        vec![flat(PlayerStatKind::MoveSpeed, 2.0)],
        vec![flat(PlayerStatKind::MoveSpeed, -1.0)],
    );
    mgr.register(def, display);
    mgr.apply_upgrade("early_bird", &player).unwrap();

    // Rule value 3 < 5: true branch applied on registration.
    assert_eq!(collab.stats.borrow().move_speed(), 7.0);

    // Rule value climbs to 6; one tick swaps the branches exactly once.
    collab
        .rules
        .borrow_mut()
        .add_flat(GameRuleKind::RoomCount, 3.0);
    mgr.tick(0.016);
    assert_eq!(collab.stats.borrow().move_speed(), 4.0);

    // Further ticks without a flip change nothing.
    mgr.tick(0.016);
    mgr.tick(0.016);
    assert_eq!(collab.stats.borrow().move_speed(), 4.0);
}

#[test]
fn berserker_swaps_on_hp_threshold() {
    let (mut mgr, collab, player, health) = session_with_health(100.0);
    let (def, display) = conditional_card(
        "berserker",
        Predicate::HealthBelow(30.0),
        vec![UpgradeEffect::StatMultiplier(StatMultiplierEffect::new(
            PlayerStatKind::AttackDamage,
            0.5,
        ))],
        vec![UpgradeEffect::StatMultiplier(StatMultiplierEffect::new(
            PlayerStatKind::AttackDamage,
            -0.1,
        ))],
    );
    mgr.register(def, display);
    mgr.apply_upgrade("berserker", &player).unwrap();

    // Full HP: false branch, -10% damage.
    assert_eq!(collab.stats.borrow().attack_damage(), 9.0);

    health.borrow_mut().hp = 20.0;
    mgr.tick(0.016);
    assert_eq!(collab.stats.borrow().attack_damage(), 15.0);

    health.borrow_mut().hp = 80.0;
    mgr.tick(0.016);
    assert_eq!(collab.stats.borrow().attack_damage(), 9.0);
}

#[test]
fn revoking_conditional_removes_active_branch_only() {
    let (mut mgr, collab, player, health) = session_with_health(10.0);
    let (def, display) = conditional_card(
        "berserker",
        Predicate::HealthBelow(30.0),
        vec![flat(PlayerStatKind::AttackDamage, 6.0)],
        vec![flat(PlayerStatKind::Armor, 3.0)],
    );
    mgr.register(def, display);
    mgr.apply_upgrade("berserker", &player).unwrap();
    assert_eq!(collab.stats.borrow().attack_damage(), 16.0);

    mgr.revoke_upgrade("berserker", &player).unwrap();
    assert_eq!(collab.stats.borrow().attack_damage(), 10.0);
    assert_eq!(collab.stats.borrow().armor(), 0.0);
    assert!(collab.runner.borrow().is_empty());

    // A later HP swing has nothing left to swap.
    health.borrow_mut().hp = 90.0;
    mgr.tick(0.016);
    assert_eq!(collab.stats.borrow().attack_damage(), 10.0);
}

#[test]
fn reset_run_unhooks_conditionals() {
    let (mut mgr, collab, player, _health) = session_with_health(10.0);
    let (def, display) = conditional_card(
        "berserker",
        Predicate::HealthBelow(30.0),
        vec![flat(PlayerStatKind::AttackDamage, 6.0)],
        vec![],
    );
    mgr.register(def, display);
    mgr.apply_upgrade("berserker", &player).unwrap();
    assert_eq!(collab.stats.borrow().attack_damage(), 16.0);

    mgr.reset_run(&player);
    assert_eq!(collab.stats.borrow().attack_damage(), 10.0);
    assert!(collab.runner.borrow().is_empty());
}
