use std::env;
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::Path;

use uncased::UncasedStr;

/// Dialect names and aliases accepted by `Dialect::from_name`.
const DIALECTS: &[(&str, &str)] = &[
    ("generic", "Dialect::Generic"),
    ("default", "Dialect::Generic"),
    ("ansi", "Dialect::Generic"),
    ("oracle", "Dialect::Oracle"),
    ("plsql", "Dialect::Oracle"),
    ("sqlserver", "Dialect::SqlServer"),
    ("mssql", "Dialect::SqlServer"),
    ("tsql", "Dialect::SqlServer"),
    ("mysql", "Dialect::MySql"),
    ("mariadb", "Dialect::MySql"),
    ("postgres", "Dialect::Postgres"),
    ("postgresql", "Dialect::Postgres"),
    ("pg", "Dialect::Postgres"),
];

fn main() -> Result<()> {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("dialects.rs");
    let mut file = BufWriter::new(File::create(out_path)?);

    let mut map = phf_codegen::Map::<&UncasedStr>::new();
    for (name, dialect) in DIALECTS {
        map.entry(UncasedStr::new(name), *dialect);
    }
    writeln!(
        file,
        "/// Dialect lookup by case-insensitive name\nstatic DIALECTS: ::phf::Map<&'static ::uncased::UncasedStr, Dialect> = \n{};",
        map.build()
    )?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
