#![allow(clippy::cast_precision_loss)]
//! Prints a summary of a grid file or of every model in a JSON manifest.
//!
//! Run with: cargo run --example `grid_info` -- path/to/model.vtk
//! or:       cargo run --example `grid_info` -- path/to/scene.json

use std::path::Path;

use atlasview::{init_logging, load_grid_file, load_manifest, ParsedGrid, Result};

fn describe(name: &str, grid: &ParsedGrid) {
    let bbox = grid.bounding_box();
    let sphere = grid.bounding_sphere();
    println!("{name}");
    println!(
        "  {} vertices, {} triangles ({})",
        grid.num_vertices(),
        grid.num_faces(),
        if grid.is_point_cloud() { "point cloud" } else { "surface" }
    );
    println!("  bounds: {:?} .. {:?}", bbox.min, bbox.max);
    println!("  sphere: center {:?}, radius {:.3}", sphere.center, sphere.radius);

    if let Some(attributes) = grid.attributes() {
        let values = attributes.values();
        let mean = values.iter().sum::<f32>() / values.len().max(1) as f32;
        println!(
            "  scalars '{}' ({}): mean {mean:.3}",
            attributes.name(),
            attributes.scalar_type().keyword()
        );
    }
}

fn main() -> Result<()> {
    init_logging();

    let Some(arg) = std::env::args().nth(1) else {
        eprintln!("usage: grid_info <model.vtk | scene.json>");
        std::process::exit(2);
    };

    let path = Path::new(&arg);
    if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
        for model in load_manifest(path)? {
            describe(&model.name, &model.grid);
        }
    } else {
        let grid = load_grid_file(path)?;
        describe(&path.display().to_string(), &grid);
    }

    Ok(())
}
