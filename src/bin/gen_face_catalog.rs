//! Derive and validate face catalogs from the canonical die meshes.
//!
//! Authoring tool: re-runs the geometry face mapper for every shape and
//! writes the resulting face map (catalog entries plus the triangle-index
//! to face-value table) as RON data. A shape that fails validation blocks
//! the whole run; nothing is emitted for it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dicetray::catalog::mapper::{derive_catalog, FaceMap};
use dicetray::Shape;

fn main() -> ExitCode {
    let out_dir = PathBuf::from("assets/face_maps");
    fs::create_dir_all(&out_dir).expect("create output dir");

    for shape in Shape::ALL {
        let map = match derive_catalog(shape) {
            Ok(map) => map,
            Err(e) => {
                eprintln!("{} catalog derivation failed: {e}", shape.name());
                return ExitCode::FAILURE;
            }
        };

        let path = out_dir.join(format!("{}.ron", shape.name().to_lowercase()));
        write_ron(&path, &map);
        println!(
            "{:>4}: {:2} faces, {:2} triangles -> {}",
            shape.name(),
            map.entries.len(),
            map.triangle_values.len(),
            path.display()
        );
    }

    println!("Wrote face maps to {}", out_dir.display());
    ExitCode::SUCCESS
}

fn write_ron(path: &Path, map: &FaceMap) {
    let ron = ron::ser::to_string_pretty(map, ron::ser::PrettyConfig::default())
        .unwrap_or_else(|e| panic!("failed to encode {}: {e}", path.display()));
    fs::write(path, ron).unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}
