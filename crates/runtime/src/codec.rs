//! The per-submap text format.
//!
//! One submap per file, human readable, stable across versions:
//!
//! ```text
//! <turn-last-visited>
//! <12 lines, each 12 chars: terrain byte = id + 42>
//! <144 space-separated integers: radiation, row-major>
//! I <x> <y>
//! <item line>
//! C
//! <contained item line>
//! T <x> <y> <trap-id>
//! F <x> <y> <field-type> <intensity> <age>
//! S <mon-type> <count> <x> <y>
//! ```
//!
//! An item line is `<type-id> <charges> <damage> <active> <birthday>
//! <curammo>`, with -1 for no loaded ammunition.

use ashfall_core::{
    FieldCell, FieldKind, Item, ItemId, MonsterId, Point, SUBMAP_SIZE, SpawnPoint, Submap,
    TerrainId, TrapId,
};

use std::fmt::Write as _;

/// A submap file that could not be understood.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CodecError(pub String);

fn bad(detail: impl Into<String>) -> CodecError {
    CodecError(detail.into())
}

pub fn encode(submap: &Submap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", submap.turn_last_touched);

    for y in 0..SUBMAP_SIZE {
        for x in 0..SUBMAP_SIZE {
            out.push((submap.terrain[x][y].0 + 42) as char);
        }
        out.push('\n');
    }

    for y in 0..SUBMAP_SIZE {
        for x in 0..SUBMAP_SIZE {
            let _ = write!(out, "{} ", submap.radiation[x][y]);
        }
    }
    out.push('\n');

    for y in 0..SUBMAP_SIZE {
        for x in 0..SUBMAP_SIZE {
            for item in &submap.items[x][y] {
                let _ = writeln!(out, "I {x} {y}");
                let _ = writeln!(out, "{}", item_line(item));
                for content in &item.contents {
                    let _ = writeln!(out, "C ");
                    let _ = writeln!(out, "{}", item_line(content));
                }
            }
        }
    }

    for y in 0..SUBMAP_SIZE {
        for x in 0..SUBMAP_SIZE {
            let trap = submap.traps[x][y];
            if !trap.is_none() {
                let _ = writeln!(out, "T {x} {y} {}", trap.0);
            }
        }
    }

    for y in 0..SUBMAP_SIZE {
        for x in 0..SUBMAP_SIZE {
            let field = submap.fields[x][y];
            if field.kind != FieldKind::None {
                let _ = writeln!(
                    out,
                    "F {x} {y} {} {} {}",
                    field.kind as u8, field.intensity, field.age
                );
            }
        }
    }

    for spawn in &submap.spawns {
        let _ = writeln!(
            out,
            "S {} {} {} {}",
            spawn.monster.0, spawn.count, spawn.pos.x, spawn.pos.y
        );
    }
    out
}

fn item_line(item: &Item) -> String {
    format!(
        "{} {} {} {} {} {}",
        item.id.0,
        item.charges,
        item.damage,
        item.active as u8,
        item.birthday,
        item.curammo.map_or(-1, |a| a.0 as i32),
    )
}

fn parse_item_line(line: &str) -> Result<Item, CodecError> {
    let mut parts = line.split_whitespace();
    let mut next_int = |what: &str| -> Result<i64, CodecError> {
        parts
            .next()
            .ok_or_else(|| bad(format!("item line missing {what}")))?
            .parse::<i64>()
            .map_err(|_| bad(format!("item line has bad {what}")))
    };
    let id = next_int("type id")? as u16;
    let charges = next_int("charges")? as i32;
    let damage = next_int("damage")? as i32;
    let active = next_int("active flag")? != 0;
    let birthday = next_int("birthday")? as u32;
    let curammo = next_int("loaded ammo")?;
    Ok(Item {
        id: ItemId(id),
        charges,
        damage,
        active,
        birthday,
        curammo: (curammo >= 0).then(|| ItemId(curammo as u16)),
        contents: Vec::new(),
    })
}

pub fn decode(text: &str) -> Result<Submap, CodecError> {
    let mut submap = Submap::default();
    let mut lines = text.lines();

    submap.turn_last_touched = lines
        .next()
        .ok_or_else(|| bad("missing turn line"))?
        .trim()
        .parse::<u32>()
        .map_err(|_| bad("bad turn line"))?;

    for y in 0..SUBMAP_SIZE {
        let row = lines
            .next()
            .ok_or_else(|| bad(format!("missing terrain row {y}")))?;
        let bytes = row.as_bytes();
        if bytes.len() < SUBMAP_SIZE {
            return Err(bad(format!("short terrain row {y}")));
        }
        for x in 0..SUBMAP_SIZE {
            let raw = bytes[x] as i32 - 42;
            if raw < 0 {
                return Err(bad(format!("terrain byte out of range at {x},{y}")));
            }
            submap.terrain[x][y] = TerrainId(raw as u8);
        }
    }

    let rad_line = lines.next().ok_or_else(|| bad("missing radiation row"))?;
    let mut rads = rad_line.split_whitespace();
    for y in 0..SUBMAP_SIZE {
        for x in 0..SUBMAP_SIZE {
            submap.radiation[x][y] = rads
                .next()
                .ok_or_else(|| bad("short radiation row"))?
                .parse::<u32>()
                .map_err(|_| bad("bad radiation value"))?;
        }
    }

    // Tagged records until end of file. `C` lines attach to the item placed
    // by the most recent `I`.
    let mut last_item: Option<(usize, usize)> = None;
    while let Some(line) = lines.next() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };
        match tag {
            "I" => {
                let x = parse_coord(parts.next(), "I x")?;
                let y = parse_coord(parts.next(), "I y")?;
                let body = lines.next().ok_or_else(|| bad("I record missing item"))?;
                submap.items[x][y].push(parse_item_line(body)?);
                last_item = Some((x, y));
            }
            "C" => {
                let body = lines.next().ok_or_else(|| bad("C record missing item"))?;
                let (x, y) =
                    last_item.ok_or_else(|| bad("C record with no preceding item"))?;
                let content = parse_item_line(body)?;
                submap.items[x][y]
                    .last_mut()
                    .ok_or_else(|| bad("C record with no preceding item"))?
                    .contents
                    .push(content);
            }
            "T" => {
                let x = parse_coord(parts.next(), "T x")?;
                let y = parse_coord(parts.next(), "T y")?;
                let id = parts
                    .next()
                    .ok_or_else(|| bad("T record missing id"))?
                    .parse::<u8>()
                    .map_err(|_| bad("T record has bad id"))?;
                submap.traps[x][y] = TrapId(id);
            }
            "F" => {
                let x = parse_coord(parts.next(), "F x")?;
                let y = parse_coord(parts.next(), "F y")?;
                let kind = parts
                    .next()
                    .ok_or_else(|| bad("F record missing type"))?
                    .parse::<u8>()
                    .map_err(|_| bad("F record has bad type"))?;
                let kind = FieldKind::from_repr(kind)
                    .ok_or_else(|| bad(format!("unknown field type {kind}")))?;
                let intensity = parts
                    .next()
                    .ok_or_else(|| bad("F record missing intensity"))?
                    .parse::<u8>()
                    .map_err(|_| bad("F record has bad intensity"))?;
                let age = parts
                    .next()
                    .ok_or_else(|| bad("F record missing age"))?
                    .parse::<i32>()
                    .map_err(|_| bad("F record has bad age"))?;
                submap.fields[x][y] = FieldCell::new(kind, intensity, age);
            }
            "S" => {
                let kind = parts
                    .next()
                    .ok_or_else(|| bad("S record missing type"))?
                    .parse::<u16>()
                    .map_err(|_| bad("S record has bad type"))?;
                let count = parts
                    .next()
                    .ok_or_else(|| bad("S record missing count"))?
                    .parse::<i32>()
                    .map_err(|_| bad("S record has bad count"))?;
                let x = parse_coord(parts.next(), "S x")?;
                let y = parse_coord(parts.next(), "S y")?;
                submap.spawns.push(SpawnPoint {
                    monster: MonsterId(kind),
                    count,
                    pos: Point::new(x as i32, y as i32),
                });
            }
            other => return Err(bad(format!("unknown record tag {other:?}"))),
        }
    }
    Ok(submap)
}

fn parse_coord(token: Option<&str>, what: &str) -> Result<usize, CodecError> {
    let v = token
        .ok_or_else(|| bad(format!("missing {what}")))?
        .parse::<usize>()
        .map_err(|_| bad(format!("bad {what}")))?;
    if v >= SUBMAP_SIZE {
        return Err(bad(format!("{what} out of range: {v}")));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ashfall_core::GameRng;

    fn busy_submap() -> Submap {
        let mut sm = Submap::filled(TerrainId(3));
        sm.turn_last_touched = 123;
        let mut rng = GameRng::new(7);
        for n in 0..20u16 {
            let x = rng.rng(0, 11) as usize;
            let y = rng.rng(0, 11) as usize;
            let mut item = Item::with_charges(ItemId(n % 30), n as i32, 456);
            item.damage = (n % 4) as i32;
            if n % 5 == 0 {
                item.contents.push(Item::new(ItemId(2), 9));
            }
            if n % 7 == 0 {
                item.curammo = Some(ItemId(12));
            }
            sm.items[x][y].push(item);
        }
        for t in 1..=5u8 {
            sm.traps[t as usize][2 * t as usize] = TrapId(t);
        }
        sm.fields[4][4] = FieldCell::new(FieldKind::Fire, 2, -120);
        sm.fields[5][4] = FieldCell::new(FieldKind::Smoke, 1, 30);
        sm.fields[9][9] = FieldCell::new(FieldKind::Acid, 3, 0);
        sm.radiation[0][0] = 42;
        sm.radiation[11][11] = 7;
        sm.spawns.push(SpawnPoint {
            monster: MonsterId(1),
            count: 3,
            pos: Point::new(6, 6),
        });
        sm
    }

    #[test]
    fn round_trip_is_lossless() {
        let sm = busy_submap();
        let text = encode(&sm);
        let back = decode(&text).unwrap();
        assert_eq!(sm, back);
    }

    #[test]
    fn re_encode_is_byte_identical() {
        let sm = busy_submap();
        let text = encode(&sm);
        let text2 = encode(&decode(&text).unwrap());
        assert_eq!(text, text2);
    }

    #[test]
    fn layout_matches_the_legacy_format() {
        let mut sm = Submap::filled(TerrainId(1));
        sm.turn_last_touched = 9;
        sm.traps[3][5] = TrapId(4);
        let text = encode(&sm);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("9"));
        // Terrain id 1 encodes as '+' (43).
        let row = lines.next().unwrap();
        assert_eq!(row, "++++++++++++");
        for _ in 0..11 {
            lines.next();
        }
        let rad = lines.next().unwrap();
        assert_eq!(rad.split_whitespace().count(), 144);
        assert_eq!(lines.next(), Some("T 3 5 4"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode("").is_err());
        assert!(decode("notanumber\n").is_err());
        let mut sm = Submap::default();
        sm.turn_last_touched = 1;
        let mut text = encode(&sm);
        text.push_str("X 1 2\n");
        assert!(decode(&text).is_err());
    }

    #[test]
    fn container_contents_reattach() {
        let mut sm = Submap::default();
        let mut bottle = Item::new(ItemId(23), 0);
        bottle.contents.push(Item::with_charges(ItemId(22), 2, 0));
        sm.items[3][3].push(bottle);
        let back = decode(&encode(&sm)).unwrap();
        assert_eq!(back.items[3][3][0].contents.len(), 1);
        assert_eq!(back.items[3][3][0].contents[0].id, ItemId(22));
    }
}
