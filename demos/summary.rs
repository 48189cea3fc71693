use airspace_boundary::{AirspaceReader, BoundingBox, ColorTable};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <airspace-json-file>", args[0]);
        std::process::exit(1);
    }

    let mut airspaces = AirspaceReader::new().read_path(&args[1])?;
    airspaces.sort_by(|a, b| a.id.cmp(&b.id));

    let colors = ColorTable::default();

    println!("=== Airspace Dataset ===");
    println!("Airspaces: {}", airspaces.len());

    let bounds = airspaces
        .iter()
        .filter_map(|airspace| airspace.bounding_box())
        .reduce(|mut bounds, bbox| {
            bounds.merge(bbox);
            bounds
        });
    if let Some(bounds) = bounds {
        print_bounds("", &bounds);
    }

    println!("\n=== Legend ===");
    for (prefix, color) in colors.entries() {
        println!("{prefix:<5} {}", color.to_hex());
    }

    for (i, airspace) in airspaces.iter().enumerate() {
        println!("\n{}. {} {}", i + 1, airspace.id, airspace.name);
        println!("   Type: {}", airspace.category);
        println!("   Limits: {}", airspace.vertical_limits());
        println!("   Color: {}", airspace.color(&colors).to_hex());
        println!(
            "   Vertices: {} from {} descriptors",
            airspace.boundary().len(),
            airspace.descriptors().len()
        );

        if let Some(bbox) = airspace.bounding_box() {
            print_bounds("   ", &bbox);
        }
    }

    Ok(())
}

fn print_bounds(indent: &str, bbox: &BoundingBox) {
    let north_west = bbox.top_left().to_coordinate();
    let south_east = bbox.bottom_right().to_coordinate();
    println!(
        "{indent}Bounds: W={:.4} S={:.4} E={:.4} N={:.4}",
        north_west.longitude, south_east.latitude, south_east.longitude, north_west.latitude
    );
}
