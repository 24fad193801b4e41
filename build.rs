//! Build script to generate the color name lookup tables.
//!
//! Generates static `phf` maps from lowercase color names to their enum
//! variants so name parsing is a single case-insensitive hash lookup, and the
//! display name arrays the enums index by ordinal.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use phf_codegen::Map;

const MAJOR_COLORS: [&str; 5] = ["White", "Red", "Black", "Yellow", "Violet"];
const MINOR_COLORS: [&str; 5] = ["Blue", "Orange", "Green", "Brown", "Slate"];

fn write_tables(
    file: &mut impl Write,
    prefix: &str,
    ty: &str,
    names: &[&str],
) -> std::io::Result<()> {
    // phf_codegen borrows each value until build()
    let variants: Vec<String> = names
        .iter()
        .map(|name| format!("{}::{}", ty, name))
        .collect();

    let mut map = Map::new();
    for (name, variant) in names.iter().zip(&variants) {
        map.entry(name.to_lowercase(), variant);
    }

    writeln!(
        file,
        "static {}_NAMES: phf::Map<&'static str, {}> = \n{};\n",
        prefix,
        ty,
        map.build()
    )?;

    writeln!(
        file,
        "const {}_DISPLAY_NAMES: [&str; {}] = {:?};\n",
        prefix,
        names.len(),
        names
    )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("color_names.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());

    write_tables(&mut file, "MAJOR_COLOR", "MajorColor", &MAJOR_COLORS).unwrap();
    write_tables(&mut file, "MINOR_COLOR", "MinorColor", &MINOR_COLORS).unwrap();
}
