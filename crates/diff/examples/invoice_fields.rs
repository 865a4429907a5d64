use smart_diff::{SegmentKind, SmartDiff, TextDiff};

fn main() {
    // OCR output next to the corrected invoice fields
    let fields = [
        ("item", "Paracetamol tab 500mg", "Paracetamol tablet 500mg"),
        ("note", "Diminum dgn air putih", "Diminum dengan air putih"),
        ("dose", "Dosis 500mg", "Dosis 250mg"),
        ("supplier", "PT. Kimia Farma, Tbk.", "PT Kimia Farma Tbk"),
        ("form", "Obat batuk anak", "Obat flu anak"),
        ("batch", "B-2291", "B-2291"),
    ];

    for (name, ocr, corrected) in fields {
        let diff = SmartDiff::compute(ocr, corrected);
        let summary = diff.summary();

        println!("{} ({} diff)", name, diff.strategy());
        println!("  {}", TextDiff::render_inline(diff.segments()));
        println!(
            "  +{} -{} ={} characters",
            summary.added_chars, summary.removed_chars, summary.unchanged_chars
        );

        // Print segments with color-coded kinds
        for segment in diff.segments() {
            match segment.kind {
                SegmentKind::Removed => println!("    \x1b[31m{:?}\x1b[0m", segment.text),
                SegmentKind::Added => println!("    \x1b[32m{:?}\x1b[0m", segment.text),
                SegmentKind::Unchanged => println!("    \x1b[37m{:?}\x1b[0m", segment.text),
            }
        }
    }
}
