use color_print::cprintln;
use risc16_asm::{
    assembler::encode_program, error::print_warn, label::collect_labels, util::print_dump,
    Assembled, Error, LineError,
};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

/// Words of instruction memory addressable by a 6-bit target.
const IMEM_WORDS: usize = 64;

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input assembly file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output hex file
    #[clap(default_value = "program.hex")]
    output: String,

    /// Dump annotated listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("RISC-16 Assembler");

    println!("1. Read Source");
    println!("  < {}", args.input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            fail(&Error::InputNotFound(args.input.clone()))
        }
        Err(e) => fail(&Error::FileRead(args.input.clone(), e)),
    };

    println!("2. Collect Labels");
    let symbols = collect_labels(&source).unwrap_or_else(|e| fail_at(&e, &args.input));
    println!("  - found #{} labels", symbols.len());

    println!("3. Encode Instructions");
    let words = encode_program(&source, &symbols).unwrap_or_else(|e| fail_at(&e, &args.input));
    let assembled = Assembled { symbols, words };
    if let Some(word) = assembled.words.get(IMEM_WORDS) {
        let raw = source.lines().nth(word.line_idx).unwrap_or_default();
        print_warn(
            &format!(
                "Program has {} words; instruction memory holds {}",
                assembled.words.len(),
                IMEM_WORDS
            ),
            &args.input,
            word.line_idx,
            raw,
        );
    }

    println!("4. Write Output");
    println!("  > {}", args.output);
    if let Err(e) = std::fs::write(&args.output, assembled.to_hex()) {
        fail(&Error::FileWrite(args.output.clone(), e));
    }
    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        let yaml = match serde_yaml::to_string(&assembled.symbols) {
            Ok(yaml) => yaml,
            Err(e) => fail(&Error::SymbolExport(e)),
        };
        if let Err(e) = std::fs::write(path, yaml) {
            fail(&Error::FileWrite(path.clone(), e));
        }
    }

    if args.dump {
        print_dump(&args.input, &source, &assembled);
    }

    cprintln!(
        "<green,bold>Success!</> Assembled {} instructions to {}",
        assembled.words.len(),
        args.output
    );
}

fn fail_at(e: &LineError, file: &str) -> ! {
    e.print_diag(file);
    std::process::exit(1);
}

fn fail(e: &Error) -> ! {
    cprintln!("<red,bold>error</>: {}", e);
    let mut source = std::error::Error::source(e);
    while let Some(cause) = source {
        cprintln!("  <blue>caused by</>: {}", cause);
        source = cause.source();
    }
    std::process::exit(1);
}
