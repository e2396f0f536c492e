use clap::Parser;
use csv2sru::{record::Header, sru::convert};

/// Convert a capital-gains CSV export into a Skatteverket SRU file (K4).
#[derive(Parser)]
struct Cli {
    /// Capital-gains CSV to read
    input: String,
    /// Path the SRU file is written to
    output: String,
    /// Identity number for the #IDENTITET line
    #[clap(long)]
    identity: String,
    /// Filer name for the #NAMN line
    #[clap(long)]
    name: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let now = chrono::Local::now();
    let header = Header {
        identity: cli.identity,
        name: cli.name,
        date: now.format("%Y%m%d").to_string(),
        time: now.format("%H%M%S").to_string(),
    };

    let rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&cli.input)?;
    let output = std::fs::File::create(&cli.output)?;

    convert(rdr, output, header)?;

    println!("Conversion complete. Output saved to {}", cli.output);
    Ok(())
}
