// Command-line entry point for callsketch.

use callsketch::application::AnalyzeUsecase;
use callsketch::infrastructure::RegexExtractor;
use callsketch::ports::mermaid_exporter::MermaidExporter;
use clap::Parser;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the source tree to analyze
    #[arg(short, long, default_value = "src")]
    root: String,
}

fn main() {
    let cli = Cli::parse();

    let extractor = RegexExtractor::new();
    let usecase = AnalyzeUsecase {
        extractor: &extractor,
        exporter: &MermaidExporter,
    };

    match usecase.run(Path::new(&cli.root)) {
        Ok(report) => print!("{}", report),
        Err(e) => eprintln!("Error: {:#}", e),
    }
}
