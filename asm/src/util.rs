use color_print::cformat;

use crate::{assembler::Assembled, parser::Line};

pub fn print_dump(path: &str, source: &str, assembled: &Assembled) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(12),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );

    let mut words = assembled.words.iter().peekable();
    for (idx, raw) in source.lines().enumerate() {
        let comment = raw
            .find(';')
            .map(|pos| cformat!("<dim>{}</>", &raw[pos..]))
            .unwrap_or_default();
        let line_num = idx + 1;

        let word = words.next_if(|word| word.line_idx == idx);
        let body = match (word, Line::parse(raw)) {
            (Some(word), Ok(line)) => {
                let label = line
                    .label
                    .map(|label| cformat!("<g>{}:</> ", label))
                    .unwrap_or_default();
                format!(
                    "[{:02X}] {:04X} | {:>4}: {}{} {}",
                    word.addr,
                    word.bin,
                    line_num,
                    label,
                    word.inst.cformat(),
                    comment
                )
            }
            (None, Ok(Line { label: Some(label), .. })) => {
                let label = cformat!("<g>{}:</>", label);
                format!("{:12}| {:>4}: {} {}", "", line_num, label, comment)
            }
            _ => format!("{:12}| {:>4}: {}", "", line_num, comment),
        };
        println!("{}", body);
    }
    println!("------------+-----------------------------------------------------");

    for (name, symbol) in assembled.symbols.iter() {
        println!(
            "{}",
            cformat!("  <g>{:<16}</> <y>0x{:02X}</>  (line {})", name, symbol.addr, symbol.line)
        );
    }
}
