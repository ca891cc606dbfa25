use bmfont_reader::BmFontReader;
use std::env;
use std::fs::File;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-fnt-file> [--encoding <LABEL>]", args[0]);
        std::process::exit(1);
    }

    let fnt_path = &args[1];
    let mut reader = BmFontReader::new();
    // Parse --encoding argument
    if let Some(encoding_idx) = args.iter().position(|arg| arg == "--encoding") {
        match args.get(encoding_idx + 1) {
            Some(label) => reader = reader.with_encoding(label),
            None => {
                eprintln!("ERROR: --encoding flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    println!("Reading BMFont file: {} ({})", fnt_path, reader.encoding().name());
    println!("{}", "=".repeat(60));

    let file = match File::open(fnt_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("\nERROR: Failed to open {}", fnt_path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    match reader.parse(file) {
        Ok(font) => {
            println!("\nFont Information:");
            println!("  Face: {}", font.face);
            println!("  Size: {}", font.size);
            let charset = if font.charset.is_empty() {
                "(none)"
            } else {
                font.charset.as_str()
            };
            println!("  Charset: {}", charset);
            println!("  Unicode: {}", font.unicode);
            println!("  Bold/Italic: {}/{}", font.bold, font.italic);
            println!("  Line height: {}, base: {}", font.line_height, font.base);
            println!("  Texture size: {}x{}", font.scale_w(), font.scale_h());

            println!("\nPages:");
            for page in font.pages() {
                println!("  [{}] {}", page.id, page.file);
            }

            println!("\nStatistics:");
            println!("  Glyphs: {}", font.glyph_count());
            println!("  Kerning pairs: {}", font.kerning_count());

            println!("\nSample Glyphs (first 10):");
            for glyph in font.glyphs().take(10) {
                let shown = glyph
                    .as_char()
                    .filter(|c| !c.is_control())
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "?".to_string());
                println!("  '{}' {}", shown, glyph);
            }

            if font.glyph_count() > 10 {
                println!("  ... and {} more", font.glyph_count() - 10);
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read BMFont file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
