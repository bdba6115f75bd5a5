use csv2strings::{
    cli, convert, csv_processor, AppConfig, ConverterError, StringsWriter, TemplateSource,
    TranslationTable,
};
use std::env;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default(Some("csv2strings.toml"));

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("csv2strings={}", config.logging.level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(|p| program_name(p))
        .unwrap_or("csv2strings")
        .to_string();

    match cli::parse(args.get(1..).unwrap_or_default()) {
        Ok(cli::Command::Help) => {
            println!("{}", cli::usage(&program));
        }
        Ok(cli::Command::Convert(options)) => {
            run(&options, &config);
        }
        Err(ConverterError::Usage(message)) => {
            eprintln!("Error: {message}");
            println!("{}", cli::usage(&program));
        }
        Err(e) => {
            eprintln!("Error: {e}");
        }
    }

    Ok(())
}

fn run(options: &cli::ConvertOptions, config: &AppConfig) {
    // A CSV that cannot be read degrades to an empty table: no languages, no
    // output files, no abort.
    let table = match csv_processor::parse_file(&options.csv) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("failed to read {}: {e}", options.csv.display());
            TranslationTable::default()
        }
    };

    let writer = StringsWriter::new(&config.output.directory);
    match &options.strings {
        Some(template) => {
            let source = TemplateSource::new(template);
            match convert::write_merged(&table, &source, &writer) {
                Ok(written) => tracing::info!("{written} file(s) written"),
                Err(e) => eprintln!("Error: {e}"),
            }
        }
        None => {
            let written = convert::write_plain(&table, &writer);
            tracing::info!("{written} file(s) written");
        }
    }
}

fn program_name(argv0: &str) -> &str {
    Path::new(argv0)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("csv2strings")
}
