//! Example: Compare the Open and Alley map styles
//!
//! Generates both styles from the same seed to show how start-cell
//! selection and heading bias change the dungeon's shape.

use hex_dungeon_walk::*;

fn generate(map_type: MapType, seed: u64) -> HexDungeon {
    let config = DungeonConfigBuilder::new()
        .seed(seed)
        .dimensions(50, 18)
        .unwrap()
        .walks(6)
        .unwrap()
        .max_walk_length(22)
        .unwrap()
        .map_type(map_type)
        .build()
        .unwrap();

    HexDungeon::generate(config).expect("Failed to generate dungeon")
}

fn main() {
    println!("Map Type Comparison");
    println!("===================\n");

    for map_type in [MapType::Open, MapType::Alley] {
        let dungeon = generate(map_type, 2024);

        println!(
            "{} map (continuity alpha {}):",
            map_type.name(),
            map_type.continuity_alpha()
        );
        println!(
            "  {} carved cells, {} repair corridors",
            dungeon.carved_count(),
            dungeon.repaired_walks()
        );
        println!("{}\n", render_text(dungeon.grid(), &BasicGlyphMapper));
    }
}
