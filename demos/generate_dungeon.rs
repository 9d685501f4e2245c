//! Example: Generate a hex dungeon
//!
//! Demonstrates the basic usage of the carving pipeline.

use hex_dungeon_walk::*;

fn main() {
    println!("Hex Dungeon Generation Example");
    println!("==============================\n");

    // Create a configuration for a medium dungeon
    let config = DungeonConfigBuilder::new()
        .seed(42)
        .dimensions(50, 20)
        .unwrap()
        .walks(5)
        .unwrap()
        .max_walk_length(25)
        .unwrap()
        .build()
        .unwrap();

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Dimensions: {}x{}", config.width, config.height);
    println!("  Walks: {}", config.walks);
    println!("  Max walk length: {}", config.max_walk_length);
    println!("  Map type: {}", config.map_type.name());
    println!();

    // Generate the dungeon
    println!("Generating dungeon...");
    let dungeon = HexDungeon::generate(config).expect("Failed to generate dungeon");
    println!(
        "Carved {} of {} cells ({} paths, {} repairs)\n",
        dungeon.carved_count(),
        config.cell_count(),
        dungeon.paths().len(),
        dungeon.repaired_walks()
    );

    // Render the finished grid
    println!("{}", render_text(dungeon.grid(), &BasicGlyphMapper));

    println!("\nGeneration complete!");
}
