//! Play resolution integration tests.
//!
//! End-to-end scenarios through the public surface: catalog, ability
//! registry, field manager, target validation, and the resolver's
//! primary/deferred/reactive sequencing.

use std::cell::Cell;

use duelcore::{
    AbilityDef, AbilityId, AbilityRegistry, Capability, CardCatalog, CardDefinition, Color,
    EffectResolver, GameContext, IllegalTarget, PlayerState, ResolverHooks, RulesError, Side,
    SplashBonus, Target, FIELD_CAPACITY,
};

fn standard_catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for def in [
        CardDefinition::creature("Raider", 2, 3, 2),
        CardDefinition::creature("Wall", 2, 0, 4).with_ability(AbilityId::new("taunt")),
        CardDefinition::creature("Warded", 3, 2, 3).with_ability(AbilityId::new("spell_shield")),
        CardDefinition::creature("Shade", 3, 3, 1).with_ability(AbilityId::new("elusive")),
        CardDefinition::creature("Tide Ally", 2, 2, 2).with_color(Color::Blue),
        CardDefinition::creature("Tide Caller", 3, 2, 2)
            .with_color(Color::Blue)
            .with_splash_bonus(SplashBonus::BuffStats { attack: 1, health: 1 }),
        CardDefinition::spell("Zap", 1),
    ] {
        catalog.register(def).unwrap();
    }
    catalog
}

fn new_game() -> (CardCatalog, GameContext, EffectResolver) {
    (
        standard_catalog(),
        GameContext::new(PlayerState::new("Alice", 30), PlayerState::new("Bob", 30)),
        EffectResolver::new(AbilityRegistry::standard()),
    )
}

/// Scenario: a full friendly field rejects an eighth creature with no
/// state change.
#[test]
fn test_full_field_rejects_eighth_creature() {
    let (mut catalog, mut ctx, _) = new_game();

    for _ in 0..FIELD_CAPACITY {
        let c = catalog.instantiate("Raider").unwrap();
        ctx.field.add_creature(Side::Friendly, c).unwrap();
    }

    let extra = catalog.instantiate("Raider").unwrap();
    let err = ctx.field.add_creature(Side::Friendly, extra).unwrap_err();

    assert_eq!(err, RulesError::FieldFull);
    assert_eq!(ctx.field.len(Side::Friendly), FIELD_CAPACITY);
}

/// Scenario: the opposing field holds a Taunt creature T and a
/// non-Taunt creature N. Attacking N is rejected; attacking T is legal.
#[test]
fn test_taunt_redirects_the_attack() {
    let (mut catalog, mut ctx, mut resolver) = new_game();

    let wall = catalog.instantiate("Wall").unwrap();
    let wall_id = wall.instance_id;
    let bystander = catalog.instantiate("Raider").unwrap();
    let bystander_id = bystander.instance_id;
    ctx.field.add_creature(Side::Opposing, wall).unwrap();
    ctx.field.add_creature(Side::Opposing, bystander).unwrap();

    let attacker = catalog.instantiate("Raider").unwrap();
    let attacker_id = attacker.instance_id;
    ctx.field.add_creature(Side::Friendly, attacker.clone()).unwrap();

    let err = resolver
        .resolve_play(
            &attacker,
            Some(Target::Creature(bystander_id)),
            Side::Friendly,
            |_, _| panic!("illegal attack must not resolve"),
            &mut ctx,
            &ResolverHooks::new(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        RulesError::IllegalTarget(IllegalTarget::TauntMustBeAttackedFirst)
    );

    // No partial effect from the rejected attack.
    assert_eq!(ctx.field.creature(bystander_id).unwrap().health, 2);
    assert_eq!(ctx.field.len(Side::Opposing), 2);

    // Attacking the Taunt creature resolves, and its corpse is swept.
    resolver
        .resolve_play(
            &attacker,
            Some(Target::Creature(wall_id)),
            Side::Friendly,
            |card, ctx| {
                let damage = card.attack;
                let wall = ctx.field.creature_mut(wall_id).unwrap();
                let counter = wall.attack;
                wall.take_damage(damage);
                ctx.field
                    .creature_mut(attacker_id)
                    .unwrap()
                    .take_damage(counter);
                Ok(())
            },
            &mut ctx,
            &ResolverHooks::new(),
        )
        .unwrap();

    assert_eq!(ctx.field.creature(wall_id).unwrap().health, 1);
    assert_eq!(ctx.field.creature(attacker_id).unwrap().health, 2);
}

/// A spell against a shielded creature is rejected even when the
/// creature has other capabilities, and the shield is spent in the
/// process.
#[test]
fn test_spell_shield_blocks_once_regardless_of_other_capabilities() {
    let mut catalog = standard_catalog();
    let mut ctx = GameContext::new(PlayerState::new("Alice", 30), PlayerState::new("Bob", 30));

    // An ability granting both Taunt and Spell Shield.
    let mut abilities = AbilityRegistry::standard();
    abilities.register(
        AbilityId::new("bulwark"),
        AbilityDef::new("Taunt and Spell Shield.")
            .with_capability(Capability::Taunt)
            .with_capability(Capability::SpellShield),
    );
    let mut resolver = EffectResolver::new(abilities);

    catalog
        .register(
            CardDefinition::creature("Bulwark", 5, 3, 6).with_ability(AbilityId::new("bulwark")),
        )
        .unwrap();
    let bulwark = catalog.instantiate("Bulwark").unwrap();
    let bulwark_id = bulwark.instance_id;
    ctx.field.add_creature(Side::Opposing, bulwark).unwrap();

    let zap = catalog.instantiate("Zap").unwrap();
    let err = resolver
        .resolve_play(
            &zap,
            Some(Target::Creature(bulwark_id)),
            Side::Friendly,
            |_, _| panic!("blocked spell must not resolve"),
            &mut ctx,
            &ResolverHooks::new(),
        )
        .unwrap_err();

    assert_eq!(
        err,
        RulesError::IllegalTarget(IllegalTarget::SpellShieldBlocked)
    );
    assert_eq!(ctx.field.creature(bulwark_id).unwrap().health, 6);

    // Shield spent: the same spell now lands. Taunt still applies to
    // attacks but never to spells.
    let zap2 = catalog.instantiate("Zap").unwrap();
    resolver
        .resolve_play(
            &zap2,
            Some(Target::Creature(bulwark_id)),
            Side::Friendly,
            |_, ctx| {
                ctx.field.creature_mut(bulwark_id).unwrap().take_damage(2);
                Ok(())
            },
            &mut ctx,
            &ResolverHooks::new(),
        )
        .unwrap();
    assert_eq!(ctx.field.creature(bulwark_id).unwrap().health, 4);
}

/// Scenario: splash eligibility is captured before the primary handler,
/// so a handler that removes the synergy creature does not revoke the
/// bonus.
#[test]
fn test_splash_bonus_survives_losing_its_synergy_mid_play() {
    let (mut catalog, mut ctx, mut resolver) = new_game();

    let ally = catalog.instantiate("Tide Ally").unwrap();
    let ally_id = ally.instance_id;
    ctx.field.add_creature(Side::Friendly, ally).unwrap();

    let caller = catalog.instantiate("Tide Caller").unwrap();
    let caller_id = caller.instance_id;

    let hooks = ResolverHooks::new().with_apply_bonus(|card, _, ctx| {
        if let Some(SplashBonus::BuffStats { attack, health }) = &card.splash_bonus {
            if let Some(live) = ctx.field.creature_mut(card.instance_id) {
                live.buff(*attack, *health);
            }
        }
    });

    resolver
        .resolve_play(
            &caller,
            None,
            Side::Friendly,
            |card, ctx| {
                ctx.field.add_creature(Side::Friendly, card.clone())?;
                // Side effect: the synergy creature leaves the field.
                ctx.field.remove_creature(Side::Friendly, ally_id)?;
                Ok(())
            },
            &mut ctx,
            &hooks,
        )
        .unwrap();

    let live = ctx.field.creature(caller_id).unwrap();
    assert_eq!((live.attack, live.health), (3, 3));
}

/// A deferred bonus is applied at most once: the slot never carries
/// over into a later play, whatever happened to the one that set it.
#[test]
fn test_deferred_slot_never_leaks_between_plays() {
    let (mut catalog, mut ctx, mut resolver) = new_game();

    let ally = catalog.instantiate("Tide Ally").unwrap();
    ctx.field.add_creature(Side::Friendly, ally).unwrap();

    let applications = Cell::new(0u32);
    let hooks =
        ResolverHooks::new().with_apply_bonus(|_, _, _| applications.set(applications.get() + 1));

    // First play: eligible, but the handler fails.
    let caller = catalog.instantiate("Tide Caller").unwrap();
    let err = resolver
        .resolve_play(
            &caller,
            None,
            Side::Friendly,
            |_, _| Err(RulesError::Handler("fizzled".to_string())),
            &mut ctx,
            &hooks,
        )
        .unwrap_err();
    assert_eq!(err, RulesError::Handler("fizzled".to_string()));
    assert_eq!(applications.get(), 0);

    // Second play: a different, bonus-less card. Nothing to apply.
    let raider = catalog.instantiate("Raider").unwrap();
    resolver
        .resolve_play(
            &raider,
            None,
            Side::Friendly,
            |card, ctx| ctx.field.add_creature(Side::Friendly, card.clone()),
            &mut ctx,
            &hooks,
        )
        .unwrap();
    assert_eq!(applications.get(), 0);

    // Third play: eligible and successful. Exactly one application.
    let caller2 = catalog.instantiate("Tide Caller").unwrap();
    resolver
        .resolve_play(
            &caller2,
            None,
            Side::Friendly,
            |card, ctx| ctx.field.add_creature(Side::Friendly, card.clone()),
            &mut ctx,
            &hooks,
        )
        .unwrap();
    assert_eq!(applications.get(), 1);
}

/// An attack on an Elusive creature is rejected; the same creature is a
/// legal spell target and dies to the spell, firing its death hook.
#[test]
fn test_elusive_falls_to_spells_not_attacks() {
    let (mut catalog, mut ctx, mut resolver) = new_game();

    let shade = catalog.instantiate("Shade").unwrap();
    let shade_id = shade.instance_id;
    ctx.field.add_creature(Side::Opposing, shade).unwrap();

    let attacker = catalog.instantiate("Raider").unwrap();
    let err = resolver
        .resolve_play(
            &attacker,
            Some(Target::Creature(shade_id)),
            Side::Friendly,
            |_, _| panic!("illegal attack must not resolve"),
            &mut ctx,
            &ResolverHooks::new(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        RulesError::IllegalTarget(IllegalTarget::ElusiveCannotBeAttacked)
    );

    let died = Cell::new(false);
    let hooks = ResolverHooks::new().with_on_death(|card, side, _| {
        assert_eq!(card.name, "Shade");
        assert_eq!(side, Side::Opposing);
        died.set(true);
    });

    let zap = catalog.instantiate("Zap").unwrap();
    resolver
        .resolve_play(
            &zap,
            Some(Target::Creature(shade_id)),
            Side::Friendly,
            |_, ctx| {
                ctx.field.creature_mut(shade_id).unwrap().take_damage(2);
                Ok(())
            },
            &mut ctx,
            &hooks,
        )
        .unwrap();

    assert!(died.get());
    assert!(ctx.field.creature(shade_id).is_none());
}

/// The context log carries user-facing lines for rejections and deaths.
#[test]
fn test_log_narrates_the_action() {
    let (mut catalog, mut ctx, mut resolver) = new_game();

    let wall = catalog.instantiate("Wall").unwrap();
    let wall_id = wall.instance_id;
    ctx.field.add_creature(Side::Opposing, wall).unwrap();

    let attacker = catalog.instantiate("Raider").unwrap();
    let _ = resolver.resolve_play(
        &attacker,
        Some(Target::Player(Side::Opposing)),
        Side::Friendly,
        |_, _| Ok(()),
        &mut ctx,
        &ResolverHooks::new(),
    );

    assert!(ctx
        .log()
        .iter()
        .any(|line| line.contains("must attack Taunt creatures first")));

    resolver
        .resolve_play(
            &attacker,
            Some(Target::Creature(wall_id)),
            Side::Friendly,
            |_, ctx| {
                ctx.field.creature_mut(wall_id).unwrap().take_damage(9);
                Ok(())
            },
            &mut ctx,
            &ResolverHooks::new(),
        )
        .unwrap();

    assert!(ctx.log().iter().any(|line| line.contains("Wall is destroyed")));
}
