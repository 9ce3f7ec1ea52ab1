//! Monster planning and movement: the per-turn AI.
//!
//! Priority order per action: special attack, sight-based plans, scent,
//! sound. A monster acts repeatedly until its move budget goes negative;
//! every path through [`act`] costs budget, so the loop always terminates.
//!
//! Monsters are checked out of the roster while they act (an inert
//! placeholder keeps the slot), which leaves the rest of the world free to
//! mutate underneath them.

use std::sync::Arc;

use crate::actor::{Character, DiseaseKind, Monster, MonsterEffectKind};
use crate::catalog::{FieldKind, MonsterFlags, MonsterSize, SpecialAttack, TerrainFlags};
use crate::config::GameConfig;
use crate::geom::{Point, chebyshev_dist, line_to};
use crate::world::World;

/// How far a monster can see this turn. The Presenter's lighting model is
/// out of scope; a fixed daylight range stands in.
pub const SIGHT_RANGE: i32 = 25;

/// How a monster currently relates to an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Attitude {
    Friend,
    Ignore,
    Follow,
    Flee,
    Attack,
}

/// Who a monster is sizing up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetRef {
    Player,
    Npc(usize),
}

/// Wounded monsters whose aggression has run out turn tail.
pub fn is_fleeing(world: &World, mon: &Monster) -> bool {
    if mon.friendly != 0 {
        return false;
    }
    let def = mon.def(&world.catalog);
    let fleefactor = def.agro - (4 * (def.hp - mon.hp)) / def.hp.max(1);
    fleefactor <= 0
}

/// Attitude toward a specific actor (or the world at large).
pub fn attitude(world: &World, mon: &Monster) -> Attitude {
    if mon.friendly > 0 {
        return Attitude::Friend;
    }
    if mon.has_effect(MonsterEffectKind::Docile) {
        return Attitude::Ignore;
    }
    if is_fleeing(world, mon) {
        return Attitude::Flee;
    }
    let def = mon.def(&world.catalog);
    let effective = def.agro + mon.anger + mon.morale.min(0);
    if effective < 0 {
        Attitude::Ignore
    } else if effective < 10 {
        Attitude::Follow
    } else {
        Attitude::Attack
    }
}

/// Whether the monster could occupy this tile at all.
pub fn can_move_to(world: &World, mon: &Monster, p: Point) -> bool {
    let def = mon.def(&world.catalog);
    let flags = def.flags;
    if world.map.move_cost(p) == 0
        && (!flags.contains(MonsterFlags::DESTROYS) || !world.map.is_destructable(p))
        && (!can_submerge(mon, world) || !world.map.has_flag(TerrainFlags::SWIMMABLE, p))
    {
        return false;
    }
    if flags.contains(MonsterFlags::DIGS) && !world.map.has_flag(TerrainFlags::DIGGABLE, p) {
        return false;
    }
    if flags.contains(MonsterFlags::AQUATIC) && !world.map.has_flag(TerrainFlags::SWIMMABLE, p) {
        return false;
    }

    if flags.contains(MonsterFlags::ANIMAL) {
        // Wildlife keeps itself out of obvious hazards.
        if world.map.has_flag(TerrainFlags::SHARP, p)
            && !(attitude(world, mon) == Attitude::Attack || def.size == MonsterSize::Tiny)
        {
            return false;
        }
        if world.map.has_flag(TerrainFlags::PIT, p)
            && !(def.size == MonsterSize::Tiny || flags.contains(MonsterFlags::FLIES))
        {
            return false;
        }
        let field = world.map.field_at(p);
        if matches!(field.kind, FieldKind::Fire | FieldKind::Electricity) {
            return false;
        }
    }
    true
}

fn can_submerge(mon: &Monster, world: &World) -> bool {
    let flags = mon.def(&world.catalog).flags;
    flags.contains(MonsterFlags::NO_BREATHE)
        || flags.contains(MonsterFlags::SWIMS)
        || flags.contains(MonsterFlags::AQUATIC)
}

/// Rebuild the plan as the sight line to (x, y). Assumes the target is
/// visible; the tie-breaker picks the matching Bresenham line.
pub fn set_dest(mon: &mut Monster, target: Point, tiebreak: i32) {
    mon.plans = line_to(mon.pos, target, tiebreak);
}

/// Per-turn target acquisition: pick someone visible to chase or flee.
pub fn plan(world: &mut World, idx: usize) {
    let mut mon = std::mem::replace(&mut world.monsters[idx], Monster::placeholder());
    plan_inner(world, &mut mon);
    world.monsters[idx] = mon;
}

fn plan_inner(world: &mut World, mon: &mut Monster) {
    let catalog = Arc::clone(&world.catalog);
    let def = catalog.monster(mon.kind);
    let can_see = def.flags.contains(MonsterFlags::SEES);
    let mut dist = 1000;
    let mut fleeing = false;

    // Friendly monsters hunt hostiles instead of the player.
    if mon.friendly > 0 {
        let mut closest: Option<(Point, i32)> = None;
        for other in world.monsters.iter() {
            if other.dead || other.friendly > 0 {
                continue;
            }
            let d = chebyshev_dist(mon.pos, other.pos);
            if d < dist
                && let Some(tc) = world.map.sees(mon.pos, other.pos, SIGHT_RANGE)
            {
                closest = Some((other.pos, tc));
                dist = d;
            }
        }
        if mon.has_effect(MonsterEffectKind::Docile) {
            closest = None;
        }
        match closest {
            Some((target, tc)) => set_dest(mon, target, tc),
            None => {
                if world.rng.one_in(3) {
                    // Grow restless with no targets.
                    mon.friendly -= 1;
                }
            }
        }
        return;
    }

    // Track the player by sight.
    let mut target: Option<(Point, i32)> = None;
    if can_see && let Some(tc) = world.sees_player(mon.pos, SIGHT_RANGE) {
        dist = chebyshev_dist(mon.pos, world.player.pos);
        if is_fleeing(world, mon) {
            fleeing = true;
            let away = Point::new(
                mon.pos.x * 2 - world.player.pos.x,
                mon.pos.y * 2 - world.player.pos.y,
            );
            mon.wander_to(away, 40);
        } else {
            target = Some((world.player.pos, tc));
        }
    }

    // A nearer NPC wins.
    for npc in world.npcs.iter() {
        if npc.dead {
            continue;
        }
        let medist = chebyshev_dist(mon.pos, npc.body.pos);
        if medist < dist
            && can_see
            && let Some(tc) = world.map.sees(mon.pos, npc.body.pos, SIGHT_RANGE)
        {
            target = Some((npc.body.pos, tc));
            dist = medist;
        }
    }

    if !fleeing {
        fleeing = attitude(world, mon) == Attitude::Flee;
        if can_see {
            // Player-allied monsters are targets too.
            let allies: Vec<Point> = world
                .monsters
                .iter()
                .filter(|m| !m.dead && m.friendly > 0)
                .map(|m| m.pos)
                .collect();
            for ally in allies {
                let mondist = chebyshev_dist(mon.pos, ally);
                if mondist < dist
                    && let Some(tc) = world.map.sees(mon.pos, ally, SIGHT_RANGE)
                {
                    dist = mondist;
                    if fleeing {
                        let away =
                            Point::new(mon.pos.x * 2 - ally.x, mon.pos.y * 2 - ally.y);
                        mon.wander_to(away, 40);
                    } else {
                        target = Some((ally, tc));
                    }
                }
            }
        }
        if !fleeing && let Some((pos, tc)) = target {
            set_dest(mon, pos, tc);
        }
    }
}

/// One atomic action. Called repeatedly until the budget goes negative.
pub fn act(world: &mut World, idx: usize) {
    let mut mon = std::mem::replace(&mut world.monsters[idx], Monster::placeholder());
    act_inner(world, &mut mon);
    world.monsters[idx] = mon;
}

fn act_inner(world: &mut World, mon: &mut Monster) {
    let catalog = Arc::clone(&world.catalog);
    let def = catalog.monster(mon.kind);

    // Stale sound targets fade no matter what.
    if mon.wandf > 0 {
        mon.wandf -= 1;
    }

    // Hallucinations flicker out.
    if mon.hallucination && world.rng.one_in(25) {
        mon.hp = 0;
        mon.dead = true;
        return;
    }

    // Special attack first, if it's off cooldown.
    if mon.sp_timeout > 0 {
        mon.sp_timeout -= 1;
    }
    if mon.sp_timeout == 0
        && def.special != SpecialAttack::None
        && (mon.friendly <= 0 || def.flags.contains(MonsterFlags::FRIENDLY_SPECIAL))
        && !mon.hallucination
    {
        special_attack(world, mon);
    }

    if mon.moves < 0 {
        return;
    }
    if def.flags.contains(MonsterFlags::IMMOBILE) {
        mon.moves = 0;
        return;
    }
    if mon.has_effect(MonsterEffectKind::Stunned) {
        stumble(world, mon, false);
        mon.moves = 0;
        return;
    }
    if mon.has_effect(MonsterEffectKind::Downed)
        || mon.has_effect(MonsterEffectKind::Beartrap)
    {
        mon.moves = 0;
        return;
    }
    if mon.has_effect(MonsterEffectKind::Bouldering) {
        mon.moves -= 20;
        if mon.moves < 0 {
            return;
        }
    }

    if mon.friendly > 0 {
        mon.friendly -= 1;
        friendly_move(world, mon);
        return;
    }

    let current_attitude = attitude(world, mon);
    // Attitude is toward whoever waits at the end of the plan; with no plan
    // it is the monster's stance toward the world.
    // (Player and NPC attitudes share one formula here, so the endpoint
    // lookup collapses into the same value.)

    if current_attitude == Attitude::Ignore
        || (current_attitude == Attitude::Follow
            && mon.plans.len() <= GameConfig::MONSTER_FOLLOW_DIST)
    {
        mon.moves -= 100;
        stumble(world, mon, false);
        return;
    }

    let fleeing_player = is_fleeing(world, mon);
    let mut moved = false;
    let mut next = mon.pos;

    let plan_step = mon.plans.first().copied().filter(|&step| {
        let target_clear = match world.mon_at(step) {
            None => true,
            Some(i) => {
                world.monsters[i].friendly != mon.friendly
                    || def.flags.contains(MonsterFlags::ATTACKMON)
            }
        };
        !fleeing_player
            && target_clear
            && (can_move_to(world, mon, step)
                || step == world.player.pos
                || (world.map.is_bashable(step) && def.flags.contains(MonsterFlags::BASHES)))
    });
    if let Some(step) = plan_step {
        // Concrete plans, most likely based on sight.
        next = step;
        moved = true;
    } else if def.flags.contains(MonsterFlags::SMELLS) {
        // No sight, or plans that ran into something solid. Fall back to
        // smell.
        mon.plans.clear();
        if let Some(step) = scent_move(world, mon) {
            next = step;
            moved = true;
        }
    }
    if !moved && mon.wandf > 0 {
        // No line of sight and no scent; drift toward the last sound.
        mon.plans.clear();
        let step = wander_next(world, mon);
        if step != mon.pos {
            next = step;
            moved = true;
        }
    }

    if moved {
        let did_something = attack_at(world, mon, next)
            || bash_at(world, mon, next)
            || move_to(world, mon, next);
        if !did_something {
            // Without this burn, blocked monsters would loop forever.
            mon.moves -= 100;
        }
    } else {
        mon.moves -= 100;
    }

    // Close to the target, shamblers focus and stop stumbling.
    if (def.flags.contains(MonsterFlags::STUMBLES)
        && (mon.plans.len() > 3 || mon.plans.is_empty()))
        || !moved
    {
        stumble(world, mon, moved);
    }
}

/// Friendly monsters follow their plan and otherwise mill around.
fn friendly_move(world: &mut World, mon: &mut Monster) {
    let def_flags = mon.def(&world.catalog).flags;
    let mut moved = false;
    let mut next = mon.pos;
    if let Some(&step) = mon.plans.first()
        && step != world.player.pos
        && (can_move_to(world, mon, step)
            || (world.map.is_bashable(step) && def_flags.contains(MonsterFlags::BASHES)))
    {
        next = step;
        mon.plans.remove(0);
        moved = true;
    } else {
        mon.moves -= 100;
        stumble(world, mon, false);
    }
    if moved {
        let did_something = attack_at(world, mon, next)
            || bash_at(world, mon, next)
            || move_to(world, mon, next);
        if !did_something {
            stumble(world, mon, true);
            mon.moves -= 100;
        }
    }
}

/// Strongest adjacent scent (weakest when fleeing). Ties break uniformly.
fn scent_move(world: &mut World, mon: &Monster) -> Option<Point> {
    let def = mon.def(&world.catalog);
    let mut maxsmell = if def.flags.contains(MonsterFlags::KEENNOSE) {
        1
    } else {
        GameConfig::MIN_SCENT
    };
    let mut minsmell = 9999;
    let fleeing = is_fleeing(world, mon);
    let bashes = def.flags.contains(MonsterFlags::BASHES);
    let attackmon = def.flags.contains(MonsterFlags::ATTACKMON);
    let mut smoves = Vec::new();
    for q in mon.pos.neighborhood() {
        let smell = world.map.scent(q);
        let mondex = world.mon_at(q);
        let blocked = match mondex {
            Some(i) => world.monsters[i].friendly == mon.friendly && !attackmon,
            None => false,
        };
        if !blocked
            && (can_move_to(world, mon, q)
                || q == world.player.pos
                || (world.map.is_bashable(q) && bashes))
        {
            if (!fleeing && smell > maxsmell) || (fleeing && smell < minsmell) {
                smoves.clear();
                smoves.push(q);
                maxsmell = smell;
                minsmell = smell;
            } else if (!fleeing && smell == maxsmell) || (fleeing && smell == minsmell) {
                smoves.push(q);
            }
        }
    }
    if smoves.is_empty() {
        return None;
    }
    let pick = world.rng.rng(0, smoves.len() as i32 - 1) as usize;
    Some(smoves[pick])
}

/// Stupid movement toward the wander target: prefer the dominant axis, fall
/// through the nearby alternatives.
fn wander_next(world: &World, mon: &Monster) -> Point {
    let def_flags = mon.def(&world.catalog).flags;
    let bashes = def_flags.contains(MonsterFlags::BASHES);
    let (px, py) = (mon.pos.x, mon.pos.y);
    let xbest = (mon.wander.y - py).abs() <= (mon.wander.x - px).abs();

    let (mut x, mut x2, mut x3) = (px, px - 1, px + 1);
    let (mut y, mut y2, mut y3) = (py, py - 1, py + 1);
    if mon.wander.x < px {
        x -= 1;
        x2 += 1;
    }
    if mon.wander.x > px {
        x += 1;
        x2 += 1;
        x3 -= 2;
    }
    if mon.wander.y < py {
        y -= 1;
        y2 += 1;
    }
    if mon.wander.y > py {
        y += 1;
        y2 += 1;
        y3 -= 2;
    }

    let ok = |q: Point| {
        can_move_to(world, mon, q)
            || q == world.player.pos
            || (bashes && world.map.is_bashable(q))
    };
    let candidates: [Point; 5] = if xbest {
        [
            Point::new(x, y),
            Point::new(x, y2),
            Point::new(x2, y),
            Point::new(x, y3),
            Point::new(x3, y),
        ]
    } else {
        [
            Point::new(x, y),
            Point::new(x2, y),
            Point::new(x, y2),
            Point::new(x3, y),
            Point::new(x, y3),
        ]
    };
    candidates.into_iter().find(|&q| ok(q)).unwrap_or(mon.pos)
}

/// Zombie shuffle: a sideways lurch that sometimes replaces real progress.
fn stumble(world: &mut World, mon: &mut Monster, moved: bool) {
    // Not every turn: every 3rd, or 8th when real movement happened.
    if (moved && !world.rng.one_in(8)) || (!moved && !world.rng.one_in(3)) {
        return;
    }

    let def_flags = mon.def(&world.catalog).flags;
    let mut valid = Vec::new();
    for q in mon.pos.adjacent() {
        // Non-breathers don't wander INTO water, but may wander out.
        let water_trap = def_flags.contains(MonsterFlags::NO_BREATHE)
            && !def_flags.contains(MonsterFlags::SWIMS)
            && !def_flags.contains(MonsterFlags::AQUATIC)
            && world.map.has_flag(TerrainFlags::SWIMMABLE, q)
            && !world.map.has_flag(TerrainFlags::SWIMMABLE, mon.pos);
        if can_move_to(world, mon, q)
            && !water_trap
            && world.player.pos != q
            && world.mon_at(q).is_none()
        {
            valid.push(q);
        }
    }
    if valid.is_empty() {
        return;
    }
    let pick = valid[world.rng.rng(0, valid.len() as i32 - 1) as usize];
    mon.moves -= calc_movecost(world, mon, mon.pos, pick);
    mon.pos = pick;

    // The lurch invalidated the plan; re-path to the old target if it's
    // still in sight, else to the player, else give up.
    if let Some(&goal) = mon.plans.last() {
        if let Some(tc) = world.map.sees(mon.pos, goal, -1) {
            set_dest(mon, goal, tc);
        } else if let Some(tc) = world.sees_player(mon.pos, -1) {
            let target = world.player.pos;
            set_dest(mon, target, tc);
        } else {
            mon.plans.clear();
        }
    }
}

/// Movement cost between adjacent tiles for this monster's locomotion.
fn calc_movecost(world: &World, mon: &Monster, from: Point, to: Point) -> i32 {
    let flags = mon.def(&world.catalog).flags;
    if flags.contains(MonsterFlags::DIGS) || flags.contains(MonsterFlags::FLIES) {
        // Tunnelling and flight ignore the ground entirely.
        100
    } else if flags.contains(MonsterFlags::SWIMS) {
        let mut cost = 0;
        for p in [from, to] {
            if world.map.has_flag(TerrainFlags::SWIMMABLE, p) {
                cost += 25;
            } else {
                cost += 50 * world.map.move_cost(p);
            }
        }
        cost
    } else if can_submerge(mon, world) {
        let mut cost = 0;
        for p in [from, to] {
            if world.map.has_flag(TerrainFlags::SWIMMABLE, p) {
                cost += 150;
            } else {
                cost += 50 * world.map.move_cost(p);
            }
        }
        cost / 2
    } else {
        world.map.combined_movecost(from, to)
    }
}

/// Try to attack whatever occupies the tile. True if an attack happened.
fn attack_at(world: &mut World, mon: &mut Monster, p: Point) -> bool {
    if p == world.player.pos {
        hit_character(world, mon, TargetRef::Player, true);
        return true;
    }

    if let Some(mondex) = world.mon_at(p) {
        // Hallucination targets simply dissolve; no action spent.
        if world.monsters[mondex].hallucination {
            world.monsters[mondex].dead = true;
            world.monsters[mondex].hp = 0;
            return false;
        }
        let def = mon.def(&world.catalog);
        if def.melee_dice <= 0 {
            return false;
        }
        let is_enemy = world.monsters[mondex].friendly != mon.friendly
            || def.flags.contains(MonsterFlags::ATTACKMON);
        if is_enemy {
            hit_monster(world, mon, mondex);
            return true;
        }
        return false;
    }

    if let Some(npcdex) = world.npc_at(p)
        && mon.def(&world.catalog).melee_dice > 0
    {
        hit_character(world, mon, TargetRef::Npc(npcdex), true);
        return true;
    }
    false
}

/// Try to smash through the tile. True if a bash or demolition happened.
fn bash_at(world: &mut World, mon: &mut Monster, p: Point) -> bool {
    if mon.hallucination {
        return false;
    }
    let def = mon.def(&world.catalog);
    let flags = def.flags;
    let bashskill = def.melee_dice * def.melee_sides;
    let try_bash = !can_move_to(world, mon, p) || world.rng.one_in(3);
    let can_bash = world.map.is_bashable(p) && flags.contains(MonsterFlags::BASHES);
    if try_bash && can_bash {
        let result = world.map.bash(p, bashskill, &mut world.rng);
        world.sound(p, 18, &result.sound);
        mon.moves -= 100;
        return true;
    }
    if world.map.move_cost(p) == 0
        && !world.map.is_divable(p)
        && flags.contains(MonsterFlags::DESTROYS)
    {
        world.destroy_terrain(p);
        mon.moves -= 250;
        return true;
    }
    false
}

/// Step onto the tile, paying the cost and suffering whatever lives there.
/// True if the monster actually moved.
fn move_to(world: &mut World, mon: &mut Monster, p: Point) -> bool {
    if !world.is_empty(p) || !can_move_to(world, mon, p) {
        return false;
    }

    if !mon.plans.is_empty() {
        mon.plans.remove(0);
    }
    mon.moves -= calc_movecost(world, mon, mon.pos, p);

    let catalog = Arc::clone(&world.catalog);
    let def = catalog.monster(mon.kind);
    let flags = def.flags;

    let was_water = world.map.is_divable(mon.pos);
    let will_be_water = world.map.is_divable(p);
    if was_water != will_be_water && world.u_see(p) {
        let swimmer =
            flags.contains(MonsterFlags::SWIMS) || flags.contains(MonsterFlags::AQUATIC);
        let verb = match (was_water, swimmer) {
            (true, true) => "leaps from",
            (true, false) => "emerges from",
            (false, true) => "dives into",
            (false, false) => "sinks into",
        };
        let terrain = if was_water {
            world.map.tername(mon.pos)
        } else {
            world.map.tername(p)
        };
        world.add_msg(format!("A {} {} the {}!", def.name, verb, terrain));
    }

    mon.pos = p;

    if flags.contains(MonsterFlags::SLUDGETRAIL) {
        for q in p.neighborhood() {
            let fstr = 3 - (q.x - p.x).abs() - (q.y - p.y).abs();
            if fstr >= 2 {
                world.map.add_field(q, FieldKind::Sludge, fstr as u8);
            }
        }
    }

    footsteps(world, mon);
    if mon.hallucination {
        return true;
    }

    if def.size != MonsterSize::Tiny {
        if world.map.has_flag(TerrainFlags::SHARP, p) && !world.rng.one_in(4) {
            let dam = world.rng.rng(2, 3);
            mon.hurt(dam);
        }
        if world.map.has_flag(TerrainFlags::ROUGH, p) && world.rng.one_in(6) {
            let dam = world.rng.rng(1, 2);
            mon.hurt(dam);
        }
    }

    if !flags.contains(MonsterFlags::DIGS)
        && !flags.contains(MonsterFlags::FLIES)
        && !world.map.trap_at(p).is_none()
    {
        let avoidance = catalog.trap(world.map.trap_at(p)).avoidance;
        if world.rng.dice(3, def.dodge + 1) < world.rng.dice(3, avoidance) {
            world.trigger_trap_monster(mon, p);
        }
    }

    if !mon.dead {
        world.mon_in_field(mon, p);
    }

    // Diggers churn the ground behind them.
    if flags.contains(MonsterFlags::DIGS) {
        let mound = world.catalog.dig_mound;
        world.map.set_ter(p, mound);
    }
    if flags.contains(MonsterFlags::ACIDTRAIL) {
        world.map.add_field(p, FieldKind::Acid, 1);
    }
    true
}

/// Footstep noise, once per turn, scaled by size.
fn footsteps(world: &mut World, mon: &mut Monster) {
    if mon.made_footstep {
        return;
    }
    let def = mon.def(&world.catalog);
    if def.flags.contains(MonsterFlags::FLIES) {
        return;
    }
    mon.made_footstep = true;
    let base = if def.flags.contains(MonsterFlags::DIGS) {
        10
    } else {
        6
    };
    let volume = match def.size {
        MonsterSize::Tiny => return,
        MonsterSize::Small => base / 3,
        MonsterSize::Medium => base,
        MonsterSize::Large => base * 3 / 2,
        MonsterSize::Huge => base * 2,
    };
    let dist = chebyshev_dist(mon.pos, world.player.pos);
    if dist <= volume && !world.u_see(mon.pos) {
        world.add_msg("You hear footsteps!");
    }
}

/// Melee against the player or an NPC.
///
/// Miss odds decay exponentially with skill; the defender's dodge does the
/// opposite. A landed hit picks a body part off a 20-slot table biased by
/// how the attacker moves, then layers venom, bleeding and grabs on top.
pub fn hit_character(world: &mut World, mon: &mut Monster, target: TargetRef, can_grab: bool) {
    mon.moves -= 100;
    let catalog = Arc::clone(&world.catalog);
    let def = catalog.monster(mon.kind);
    if def.melee_dice == 0 {
        return;
    }
    let name = def.name;
    mon.add_effect(MonsterEffectKind::HitByPlayer, 3);
    if def.flags.contains(MonsterFlags::HIT_AND_RUN) {
        mon.add_effect(MonsterEffectKind::Run, 4);
    }

    let is_player = target == TargetRef::Player;
    let side = world.rng.rng(0, 1);

    // Body part selection off the 20-slot table.
    let mut highest_hit = match def.size {
        MonsterSize::Tiny => 3,
        MonsterSize::Small => 12,
        MonsterSize::Medium => 20,
        MonsterSize::Large => 28,
        MonsterSize::Huge => 35,
    };
    if def.flags.contains(MonsterFlags::DIGS) {
        highest_hit -= 8;
    }
    if def.flags.contains(MonsterFlags::FLIES) {
        highest_hit += 15;
    }
    let highest_hit = highest_hit.clamp(2, 20);
    let bp_rand = world.rng.rng(0, highest_hit - 1);
    use crate::actor::BodyPart;
    let bp_hit = if bp_rand <= 2 {
        BodyPart::Legs
    } else if bp_rand <= 10 {
        BodyPart::Torso
    } else if bp_rand <= 14 {
        BodyPart::Arms
    } else if bp_rand <= 16 {
        BodyPart::Mouth
    } else if bp_rand == 17 {
        BodyPart::Eyes
    } else {
        BodyPart::Head
    };
    let dam = world.rng.dice(def.melee_dice, def.melee_sides);
    let cut = def.melee_cut;

    // Chance to miss decays exponentially: ~80% at skill 1, 5% at 10.
    let p_miss = 11000.0 * (-0.3 * def.melee_skill as f64).exp();
    if (world.rng.rng(0, 10000) as f64) < p_miss {
        world.add_msg(format!("The {name} misses."));
        return;
    }

    // Defender's dodge, eroded by the attacker's skill.
    let target_dodge = target_body(world, target).dodge();
    let dodge_ii = (target_dodge - world.rng.rng(0, def.melee_skill)).max(0);
    let p_dodge = 10000.0 / (1.0 + 99.0 * (-0.6 * dodge_ii as f64).exp());
    if (world.rng.rng(0, 10000) as f64) < p_dodge {
        if is_player {
            world.add_msg(format!("You dodge the {name}."));
        }
        return;
    }

    if dam <= 0 {
        return;
    }

    // Hallucinations produce the message but not the wound.
    if mon.hallucination {
        if world.rng.one_in(7) {
            mon.dead = true;
            mon.hp = 0;
        }
        return;
    }

    let dealt = target_body(world, target).hit(bp_hit, side, dam, cut);
    if is_player {
        world.add_msg(format!("The {name} hits your {bp_hit}!"));
    }

    if dealt > 0 && def.flags.contains(MonsterFlags::VENOM) {
        if is_player {
            world.add_msg("You're poisoned!");
        }
        target_body(world, target).add_disease(DiseaseKind::Poison, 30);
    } else if dealt > 0 && def.flags.contains(MonsterFlags::BADVENOM) {
        if is_player {
            world.add_msg("You feel poison flood your body, wracking you with pain...");
        }
        target_body(world, target).add_disease(DiseaseKind::BadPoison, 40);
    }

    if def.flags.contains(MonsterFlags::BLEED) && dealt > 6 && cut > 0 {
        if is_player {
            world.add_msg("You're bleeding!");
        }
        let site = match bp_hit {
            BodyPart::Mouth | BodyPart::Eyes | BodyPart::Head => BodyPart::Head,
            BodyPart::Torso => BodyPart::Torso,
            other => other,
        };
        target_body(world, target).infect(DiseaseKind::Bleed, 60, Some(site));
    }

    // Grabbers hold on and strike again; same odds as the original hit.
    if can_grab
        && def.flags.contains(MonsterFlags::GRABS)
        && (world.rng.rng(0, 10000) as f64) > p_miss
    {
        if is_player {
            world.add_msg(format!("The {name} grabs you!"));
        }
        hit_character(world, mon, target, false);
    }

    if let TargetRef::Npc(i) = target
        && world.npcs[i].body.is_dead()
    {
        world.npcs[i].dead = true;
        mon.plans.clear();
    }

    // Kin react to one of their own wading into a fight.
    let kind = mon.kind;
    let anger = def.anger_on_friend_attacked;
    let fear = def.fear_on_friend_attacked;
    if anger || fear {
        for other in world.monsters.iter_mut() {
            if other.dead || other.kind != kind {
                continue;
            }
            if anger {
                other.anger += 15;
            }
            if fear {
                other.morale -= 15;
            }
        }
    }
}

fn target_body<'w>(world: &'w mut World, target: TargetRef) -> &'w mut Character {
    match target {
        TargetRef::Player => &mut world.player,
        TargetRef::Npc(i) => &mut world.npcs[i].body,
    }
}

/// Monster-on-monster melee, with size-adjusted dice.
fn hit_monster(world: &mut World, mon: &mut Monster, target_idx: usize) {
    let catalog = Arc::clone(&world.catalog);
    let def = catalog.monster(mon.kind);
    let target_def = world.monsters[target_idx].def(&catalog);
    let mut numdice = def.melee_skill;
    let mut dodgedice = target_def.dodge * 2;
    match target_def.size {
        MonsterSize::Tiny => dodgedice += 4,
        MonsterSize::Small => dodgedice += 2,
        MonsterSize::Large => numdice += 2,
        MonsterSize::Huge => numdice += 4,
        MonsterSize::Medium => {}
    }
    let (name, target_name) = (def.name, target_def.name);

    if world.rng.dice(numdice, 10) <= world.rng.dice(dodgedice, 10) {
        if world.u_see(mon.pos) {
            world.add_msg(format!("The {name} misses the {target_name}!"));
        }
        return;
    }
    if world.u_see(mon.pos) {
        world.add_msg(format!("The {name} hits the {target_name}!"));
    }
    let damage = world.rng.dice(def.melee_dice, def.melee_sides);
    world.monsters[target_idx].hurt(damage);
}

/// Fire the monster's special attack and rewind its cooldown.
fn special_attack(world: &mut World, mon: &mut Monster) {
    let catalog = Arc::clone(&world.catalog);
    let def = catalog.monster(mon.kind);
    match def.special {
        SpecialAttack::None => {}

        SpecialAttack::Shriek { volume } => {
            if world.sees_player(mon.pos, 4).is_none() {
                return;
            }
            mon.sp_timeout = def.sp_freq;
            mon.moves -= 240;
            world.sound(mon.pos, volume, "a terrible shriek!");
        }

        SpecialAttack::AcidSpit { range } => {
            if world.sees_player(mon.pos, range).is_none() {
                return;
            }
            mon.sp_timeout = def.sp_freq;
            mon.moves -= 300;
            if world.u_see(mon.pos) {
                world.add_msg(format!("The {} spits acid!", def.name));
            }
            let target = world.player.pos;
            let hit = Point::new(
                target.x + world.rng.rng(-2, 2),
                target.y + world.rng.rng(-2, 2),
            );
            let splash = world.rng.rng(1, 3) as u8;
            world.map.add_field(hit, FieldKind::Acid, splash);
            for q in hit.adjacent() {
                if world.rng.one_in(3) {
                    world.map.add_field(q, FieldKind::Acid, 1);
                }
            }
        }

        SpecialAttack::ShockField => {
            if world.sees_player(mon.pos, 2).is_none() {
                return;
            }
            mon.sp_timeout = def.sp_freq;
            mon.moves -= 80;
            for q in mon.pos.adjacent() {
                if world.map.move_cost(q) > 0 && world.rng.one_in(2) {
                    world.map.add_field(q, FieldKind::Electricity, 1);
                }
            }
        }
    }
}

impl World {
    /// Demolish a tile outright, detonating anything volatile in it.
    pub fn destroy_terrain(&mut self, p: Point) {
        let rubble = self.catalog.rubble;
        let explodes = self.map.destroy(p, rubble, &mut self.rng);
        self.sound(p, 40, "SMASH!!");
        if explodes {
            self.explosion(p, 40, 0, true);
        }
    }
}
