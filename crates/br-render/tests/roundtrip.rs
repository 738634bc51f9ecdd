use br_core::{BrailleEncoder, Font, FontConfig, PrinterConfig};
use br_glyph::{BrailleDecoder, BrailleFont, BrailleReader};
use br_render::{LinePrinter, ScanlineBuffer};

fn font(config: &FontConfig) -> BrailleFont {
    BrailleFont::new(config, &BrailleEncoder)
}

fn reader(cell_width: usize) -> BrailleReader<BrailleDecoder> {
    BrailleReader::new(BrailleDecoder::new(&BrailleEncoder)).with_cell_width(cell_width)
}

fn render(font: &BrailleFont, text: &str, spacing: usize) -> Vec<String> {
    let mut buffer = ScanlineBuffer::new();
    for ch in text.chars() {
        buffer.push(font.bitmap(ch).clone());
    }
    buffer.render_scanlines(spacing).unwrap_or_default()
}

#[test]
fn two_letters_round_trip() {
    let font = font(&FontConfig::default());
    let lines = render(&font, "hi", 1);
    assert_eq!(lines.len(), 3);
    assert_eq!(reader(2).translate(&lines, 'o', 1).unwrap(), "hi");
}

#[test]
fn alphabet_and_spaces_round_trip() {
    let font = font(&FontConfig::default());
    let text = "the quick brown fox jumps over the lazy dog";
    for spacing in 0..4 {
        let lines = render(&font, text, spacing);
        assert_eq!(reader(2).translate(&lines, 'o', spacing).unwrap(), text);
    }
}

#[test]
fn padded_font_round_trips_through_the_reader() {
    let config = FontConfig {
        height: 5,
        width: 4,
        dot_symbol: '#',
        space_symbol: '_',
    };
    let font = font(&config);
    let lines = render(&font, "zebra", 2);
    assert_eq!(lines.len(), 5);
    assert_eq!(reader(4).translate(&lines, '#', 2).unwrap(), "zebra");
}

#[test]
fn unsupported_characters_come_back_as_spaces() {
    let font = font(&FontConfig::default());
    let lines = render(&font, "Hello World", 1);
    // capitals and punctuation render as the whitespace cell
    assert_eq!(reader(2).translate(&lines, 'o', 1).unwrap(), " ello  orld");
}

#[test]
fn printed_output_reads_back_line_by_line() {
    let font = font(&FontConfig::default());
    let config = PrinterConfig {
        line_width: 4,
        spacing: 1,
    };
    let mut printer = LinePrinter::new(font, Vec::new(), &config);
    printer.print_str("braille text").unwrap();
    printer.flush().unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();

    let rows: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
    let decoded: Vec<String> = rows
        .chunks(3)
        .map(|block| reader(2).translate(block, 'o', 1).unwrap())
        .collect();
    assert_eq!(decoded, vec!["brai", "lle ", "text"]);
}

#[test]
fn tall_font_output_reads_back_as_a_page() {
    let config = FontConfig {
        height: 5,
        width: 4,
        dot_symbol: '#',
        space_symbol: '_',
    };
    let font = font(&config);
    let (height, width, dot) = (font.height(), font.width(), font.dot_symbol());
    let printer_config = PrinterConfig {
        line_width: 5,
        spacing: 2,
    };
    let mut printer = LinePrinter::new(font, Vec::new(), &printer_config);
    printer.print_str("tall fonts read back").unwrap();
    printer.flush().unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    // 4 printed lines of 5 scanlines plus their separators
    assert_eq!(lines.len(), 4 * (height + 1));

    let page = reader(width).translate_page(&lines, height, dot, 2).unwrap();
    assert_eq!(page, vec!["tall ", "fonts", " read", " back"]);
}
