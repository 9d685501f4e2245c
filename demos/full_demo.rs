//! Complete workflow demonstration for hex_dungeon_walk

use hex_dungeon_walk::*;

fn main() -> Result<()> {
    println!("=== hex_dungeon_walk Complete Demo ===\n");

    // Step 1: Configure dungeon
    println!("Step 1: Configuring dungeon...");
    let config = DungeonConfigBuilder::new()
        .seed(12345)
        .dimensions(40, 16)?
        .walks(6)?
        .max_walk_length(20)?
        .build()?;

    println!("  Seed: {}", config.seed);
    println!("  Dimensions: {}x{} ({} cells)", config.width, config.height, config.cell_count());
    println!("  Walks: {} of up to {} steps", config.walks, config.max_walk_length);

    // Step 2: Generate dungeon
    println!("\nStep 2: Generating dungeon...");
    let dungeon = HexDungeon::generate(config)?;
    println!("  Carved {} cells", dungeon.carved_count());
    println!("  Paths: {}", dungeon.paths().len());
    println!("  Repair corridors: {}", dungeon.repaired_walks());
    println!("  Fully connected: {}", dungeon.is_fully_connected());

    // Step 3: Analyze tile distribution
    println!("\nStep 3: Tile distribution:");
    let grid = dungeon.grid();
    let mut tile_counts = std::collections::HashMap::new();
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            let tile = grid.get(Offset::new(row, col)).unwrap();
            *tile_counts.entry(tile).or_insert(0usize) += 1;
        }
    }
    let mut sorted_tiles: Vec<_> = tile_counts.iter().collect();
    sorted_tiles.sort_by_key(|(tile, _)| format!("{:?}", tile));
    for (tile, count) in sorted_tiles {
        let pct = (*count as f32 / config.cell_count() as f32) * 100.0;
        println!("  {:?}: {} ({:.1}%)", tile, count, pct);
    }

    // Step 4: Hex math queries
    println!("\nStep 4: Hex math:");
    let a = HexCoord::Offset(Offset::new(0, 0));
    let b = HexCoord::Offset(Offset::new(8, 12));
    let line = lerp(a, b)?;
    println!("  Line {:?} -> {:?}: {} cells", a, b, line.len());
    println!(
        "  Distance: {} steps",
        a.to_cube().distance(b.to_cube())
    );
    println!("  Ring radius 3 around origin: {} cells", ring(Cube::ORIGIN, 3).len());

    // Step 5: Render with both glyph sets
    println!("\nStep 5: Rendered map (debug glyphs):");
    println!("{}", render_text(grid, &CustomGlyphMapper::default()));

    println!("\n=== Demo Complete ===");
    Ok(())
}
