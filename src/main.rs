//! # road_geometry demo
//!
//! Loads a scene (or uses a built-in crossroads), snaps a cursor to the nearest
//! point and segment, lists where each segment is crossed by the others, and
//! prints the pseudo-3D roof corner of every scene point.
//!
//! ```text
//! road_geometry [scene.json] [config.json]
//! ```
//!
//! Set `RUST_LOG=debug` for more detail.

use log::{info, warn};
use std::error::Error;

use road_geometry::config::DemoConfig;
use road_geometry::scene::Scene;
use road_geometry::utils::get_random_color;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("road_geometry starting...");

    let mut args = std::env::args().skip(1);
    let scene = match args.next() {
        Some(path) => Scene::load(path)?,
        None => {
            info!("no scene given, using the sample crossroads");
            Scene::sample()
        }
    };
    let config = match args.next() {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    match scene.snap_point(&config.cursor, config.snap_threshold) {
        Some(p) => println!("nearest point to {:?}: {:?}", config.cursor, p),
        None => warn!("no point within {:?} of {:?}", config.snap_threshold, config.cursor),
    }
    match scene.snap_segment(&config.cursor, config.snap_threshold) {
        Some(s) => println!("nearest segment to {:?}: {:?}", config.cursor, s),
        None => warn!("no segment within {:?} of {:?}", config.snap_threshold, config.cursor),
    }

    for (i, segment) in scene.segments.iter().enumerate() {
        let color = get_random_color();
        let crossings = scene.crossings(segment);
        println!("segment {} [{}]: {} crossing(s)", i, color, crossings.len());
        for hit in crossings {
            println!("    at {:?} (offset {:.3})", hit.point, hit.offset);
        }
    }

    for point in &scene.points {
        let roof = config
            .projection
            .project(point, &config.view_point, config.building_height);
        println!("{:?} -> roof {:?}", point, roof);
    }

    info!("road_geometry exiting.");
    Ok(())
}
