use crate::actor::effects::{MonsterEffect, MonsterEffectKind};
use crate::catalog::{Catalog, Material, MonsterDef, MonsterId};
use crate::geom::{Point, SubmapCoord};
use crate::item::Item;
use crate::map::SUBMAP_SIZE;
use crate::rng::GameRng;

/// A live monster. Type data stays in the catalog; this is mutable state
/// only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub kind: MonsterId,
    pub pos: Point,
    pub hp: i32,
    /// Current speed; fields and wounds erode it below the type's value.
    pub speed: i32,
    pub moves: i32,
    /// Negative: hostile to the player. Zero: neutral. Positive: friendly,
    /// counting down.
    pub friendly: i32,
    pub anger: i32,
    pub morale: i32,
    /// Turns until the special attack is ready again.
    pub sp_timeout: i32,
    /// Planned path, next step first.
    pub plans: Vec<Point>,
    /// Stale fallback target (usually a heard sound).
    pub wander: Point,
    /// Turns the wander target stays interesting.
    pub wandf: i32,
    pub effects: Vec<MonsterEffect>,
    /// Swallowed or snagged items; dropped with the corpse.
    pub inventory: Vec<Item>,
    /// Suppresses repeated footstep sounds within one turn.
    pub made_footstep: bool,
    pub hallucination: bool,
    /// Submap this monster belongs to when it despawns at the bubble edge.
    pub origin: Option<SubmapCoord>,
    pub dead: bool,
}

impl Monster {
    pub fn spawn(catalog: &Catalog, kind: MonsterId, pos: Point, rng: &mut GameRng) -> Self {
        let def = catalog.monster(kind);
        Self {
            kind,
            pos,
            hp: def.hp,
            speed: def.speed,
            moves: def.speed,
            friendly: 0,
            anger: 0,
            morale: 0,
            sp_timeout: if def.sp_freq > 0 {
                rng.rng(0, def.sp_freq)
            } else {
                0
            },
            plans: Vec::new(),
            wander: Point::new(-1, -1),
            wandf: 0,
            effects: Vec::new(),
            inventory: Vec::new(),
            made_footstep: false,
            hallucination: false,
            origin: None,
            dead: false,
        }
    }

    /// Inert slot filler used while a monster is checked out of the roster.
    pub fn placeholder() -> Self {
        Self {
            kind: MonsterId::NULL,
            pos: Point::new(-99, -99),
            hp: 0,
            speed: 0,
            moves: 0,
            friendly: 0,
            anger: 0,
            morale: 0,
            sp_timeout: 0,
            plans: Vec::new(),
            wander: Point::new(-1, -1),
            wandf: 0,
            effects: Vec::new(),
            inventory: Vec::new(),
            made_footstep: false,
            hallucination: false,
            origin: None,
            dead: true,
        }
    }

    pub fn def<'c>(&self, catalog: &'c Catalog) -> &'c MonsterDef {
        catalog.monster(self.kind)
    }

    pub fn made_of(&self, catalog: &Catalog, m: Material) -> bool {
        self.def(catalog).made_of(m)
    }

    /// Become another monster type (slimed by goo, fungalized).
    pub fn poly(&mut self, catalog: &Catalog, kind: MonsterId) {
        let def = catalog.monster(kind);
        self.kind = kind;
        self.moves = 0;
        self.speed = def.speed;
        self.hp = def.hp;
        self.sp_timeout = def.sp_freq;
    }

    pub fn has_effect(&self, kind: MonsterEffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Add a timed effect, keeping the longer duration when stacked.
    pub fn add_effect(&mut self, kind: MonsterEffectKind, duration: i32) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            if existing.duration != -1 && (duration == -1 || duration > existing.duration) {
                existing.duration = duration;
            }
            return;
        }
        self.effects.push(MonsterEffect { kind, duration });
    }

    pub fn remove_effect(&mut self, kind: MonsterEffectKind) {
        self.effects.retain(|e| e.kind != kind);
    }

    /// Age effects one turn and apply the ongoing ones.
    pub fn tick_effects(&mut self, catalog: &Catalog, rng: &mut GameRng) {
        if self.has_effect(MonsterEffectKind::OnFire) {
            let dam = match self.def(catalog).material {
                Material::Flesh => rng.rng(1, 3),
                Material::Veggy | Material::Paper | Material::Wood | Material::Cotton
                | Material::Wool => rng.rng(2, 6),
                _ => 0,
            };
            self.hurt(dam);
        }
        for e in self.effects.iter_mut() {
            if e.duration > 0 {
                e.duration -= 1;
            }
        }
        self.effects.retain(|e| e.duration != 0);
    }

    /// Take damage. Returns true when this kills the monster.
    pub fn hurt(&mut self, dam: i32) -> bool {
        self.hp -= dam;
        if self.hp < 1 {
            self.dead = true;
        }
        self.dead
    }

    pub fn wander_to(&mut self, target: Point, turns: i32) {
        self.wander = target;
        self.wandf = turns;
    }

    /// True while the monster has no plan and drifts.
    pub fn is_wandering(&self) -> bool {
        self.plans.is_empty()
    }

    /// Translate position, plans and wander target when the bubble shifts.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        let step = SUBMAP_SIZE as i32;
        self.pos.x -= dx * step;
        self.pos.y -= dy * step;
        for p in self.plans.iter_mut() {
            p.x -= dx * step;
            p.y -= dy * step;
        }
        if self.wandf > 0 {
            self.wander.x -= dx * step;
            self.wander.y -= dy * step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::effects::MonsterEffectKind;

    #[test]
    fn effect_stacking_keeps_longer() {
        let mut mon = Monster::placeholder();
        mon.add_effect(MonsterEffectKind::Stunned, 3);
        mon.add_effect(MonsterEffectKind::Stunned, 1);
        assert_eq!(mon.effects[0].duration, 3);
        mon.add_effect(MonsterEffectKind::Stunned, -1);
        assert_eq!(mon.effects[0].duration, -1);
    }

    #[test]
    fn shift_translates_plans() {
        let mut mon = Monster::placeholder();
        mon.pos = Point::new(20, 20);
        mon.plans = vec![Point::new(21, 20)];
        mon.shift(1, 0);
        assert_eq!(mon.pos, Point::new(8, 20));
        assert_eq!(mon.plans[0], Point::new(9, 20));
    }
}
