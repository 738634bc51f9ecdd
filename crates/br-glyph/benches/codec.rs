use std::hint::black_box;

use br_core::{BrailleEncoder, Decoder, Font, FontConfig};
use br_glyph::{BrailleDecoder, BrailleFont, BrailleReader};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_font(c: &mut Criterion) {
    let config = FontConfig::default();
    c.bench_function("font_build_3x2", |b| {
        b.iter(|| BrailleFont::new(black_box(&config), &BrailleEncoder));
    });
}

fn bench_decode(c: &mut Criterion) {
    let font = BrailleFont::new(&FontConfig::default(), &BrailleEncoder);
    let decoder = BrailleDecoder::new(&BrailleEncoder);
    c.bench_function("decode_alphabet", |b| {
        b.iter(|| {
            for letter in 'a'..='z' {
                let _ = black_box(decoder.decode_bitmap(font.bitmap(letter), 'o'));
            }
        });
    });
}

fn bench_translate(c: &mut Criterion) {
    let reader = BrailleReader::new(BrailleDecoder::new(&BrailleEncoder));
    let font = BrailleFont::new(&FontConfig::default(), &BrailleEncoder);
    let text = "the quick brown fox jumps over the lazy dog";
    let lines: Vec<String> = (0..3)
        .map(|row| {
            text.chars()
                .map(|ch| font.bitmap(ch).row_string(row))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    c.bench_function("translate_pangram", |b| {
        b.iter(|| reader.translate(black_box(&lines), 'o', 1));
    });
}

criterion_group!(benches, bench_font, bench_decode, bench_translate);
criterion_main!(benches);
