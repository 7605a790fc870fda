use std::path::Path;
use std::process::exit;

use velomap::dashboard;
use velomap::load::DatasetCache;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mock/gbfs_stations.json".to_string());

    let mut cache = DatasetCache::new();
    let frame = match dashboard::refresh_with_defaults(&mut cache, Path::new(&path)) {
        Ok(frame) => frame,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };

    println!("Total Stations: {}", frame.summary.total);
    println!("Docked Stations: {}", frame.summary.docked);
    println!("Dockless Stations: {}", frame.summary.dockless);

    if frame.scene.is_none() {
        println!("Nothing to display for this snapshot.");
    }

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize frame: {err}"),
    }
}
