use std::{fs, path::PathBuf};

const NUM_GLYPHS: usize = 128;
const COLS: usize = 5;
const ROWS: usize = 7;

type PatternFile = [Option<Pattern>; NUM_GLYPHS];

/// One 5x7 glyph, each row packed into the low five bits (leftmost column highest).
#[derive(Debug, Copy, Clone)]
struct Pattern {
    rows: [u8; ROWS],
}

/// Generate the bitmap table Rust code that will be included in the crate.
fn generate_rust(patterns: &PatternFile) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "static PATTERN_5X7: [Option<Bitmap>; {}] = [\n",
        NUM_GLYPHS
    ));

    for pattern in patterns {
        match pattern {
            None => out.push_str("    None,\n"),
            Some(p) => {
                out.push_str("    Some(Bitmap { rows: [");
                for row in p.rows {
                    out.push_str(&format!("0b{:05b}, ", row));
                }
                out.push_str("] }),\n");
            }
        }
    }

    out.push_str("];\n");

    out
}

/// Parse one row of `#`/`.` cells.
fn parse_row(line: &str, glyph: char) -> u8 {
    let cells: Vec<char> = line.chars().collect();

    if cells.len() != COLS {
        panic!("glyph {glyph:?}: row {line:?} must have {COLS} cells");
    }

    cells.iter().fold(0, |acc, cell| match cell {
        '#' => (acc << 1) | 1,
        '.' => acc << 1,
        other => panic!("glyph {glyph:?}: unexpected cell {other:?}"),
    })
}

/// Load a file of `[X]` headed glyph definitions.
fn load_file(file: &str) -> PatternFile {
    let mut result = [None; NUM_GLYPHS];
    let mut lines = file
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'));

    while let Some(header) = lines.next() {
        let glyph = header
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .and_then(|name| name.chars().next())
            .unwrap_or_else(|| panic!("expected a [X] glyph header, found {header:?}"));

        let mut rows = [0u8; ROWS];
        for row in rows.iter_mut() {
            let line = lines
                .next()
                .unwrap_or_else(|| panic!("glyph {glyph:?}: expected {ROWS} rows"));
            *row = parse_row(line, glyph);
        }

        let code = glyph as usize;
        if code < NUM_GLYPHS {
            result[code] = Some(Pattern { rows });
        }
    }

    result
}

fn main() {
    let data = fs::read_to_string("data/pattern5x7.txt").unwrap();

    let patterns = load_file(&data);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("pattern5x7.rs");

    fs::write(out_file, generate_rust(&patterns)).unwrap();

    println!("cargo:rerun-if-changed=data/pattern5x7.txt");
}
