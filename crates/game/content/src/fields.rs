//! Static field descriptors, indexed by [`FieldKind`] discriminant.

use ashfall_core::{FieldDef, FieldKind};

pub fn fields() -> Vec<FieldDef> {
    let def = |names: [&'static str; 3],
               symbol: char,
               transparent: [bool; 3],
               dangerous: [bool; 3],
               halflife: i32,
               outdoor_age: i32| FieldDef {
        names,
        symbol,
        transparent,
        dangerous,
        halflife,
        outdoor_age,
    };

    let table = vec![
        // None
        def(["", "", ""], ' ', [true; 3], [false; 3], 0, 0),
        // Blood
        def(
            ["blood splatter", "blood stain", "puddle of blood"],
            '%',
            [true; 3],
            [false; 3],
            2500,
            0,
        ),
        // Bile
        def(
            ["bile splatter", "bile stain", "puddle of bile"],
            '%',
            [true; 3],
            [false; 3],
            2500,
            0,
        ),
        // Sludge
        def(
            ["sludge trail", "sludge trail", "thick sludge trail"],
            '%',
            [true; 3],
            [false; 3],
            900,
            0,
        ),
        // Acid
        def(
            ["acid splatter", "acid streak", "pool of acid"],
            '5',
            [true; 3],
            [true; 3],
            24,
            0,
        ),
        // Fire
        def(
            ["small fire", "fire", "raging fire"],
            '4',
            [true; 3],
            [true; 3],
            40,
            0,
        ),
        // Smoke
        def(
            ["thin smoke", "smoke", "thick smoke"],
            '8',
            [true, false, false],
            [false; 3],
            300,
            50,
        ),
        // TearGas
        def(
            ["hazy cloud", "tear gas", "thick tear gas"],
            '8',
            [true, false, false],
            [true, true, true],
            600,
            30,
        ),
        // NukeGas
        def(
            ["hazy cloud", "radioactive gas", "thick radioactive gas"],
            '8',
            [true, true, false],
            [true, true, true],
            1000,
            40,
        ),
        // Electricity
        def(
            ["sparks", "electric crackle", "electric cloud"],
            '9',
            [true; 3],
            [true; 3],
            2,
            0,
        ),
        // Fatigue
        def(
            ["odd ripple", "swirling air", "tear in reality"],
            '*',
            [true, true, false],
            [false; 3],
            0,
            0,
        ),
    ];
    debug_assert_eq!(table.len(), FieldKind::COUNT);
    table
}
