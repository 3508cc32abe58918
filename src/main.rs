//! taxocode CLI: encode, decode and document compact error codes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

use taxocode::config::Config;
use taxocode::format::{Code, Format};
use taxocode::{TaxoResult, docs, registry};

#[derive(Parser)]
#[command(name = "taxocode", version, about = "Compact taxonomy-backed error codes")]
struct Cli {
    /// Path to a TOML config file (default: ./taxocode.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode field values into a code.
    Encode {
        /// Format name: tiny, simple, simple-5-11, app-component.
        format: String,
        /// One value per field, in layout order.
        #[arg(required = true)]
        fields: Vec<u32>,
    },

    /// Decode a code of any format and show its fields.
    Decode {
        /// Code such as EA0MTXD.
        code: String,
    },

    /// Print the dotted taxonomy name of a code.
    Name {
        /// Code such as EA0MTXD.
        code: String,
    },

    /// List every code defined by the taxonomies.
    List {
        /// Restrict to one format.
        format: Option<String>,

        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show each format's tag, length and field layout.
    Formats,

    /// Generate Markdown documentation for every format.
    Docs {
        /// Output file (overrides the config file).
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    let cli = Cli::parse();
    let config = Config::discover(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .init();

    run(cli.command, &config)?;
    Ok(())
}

fn run(command: Commands, config: &Config) -> TaxoResult<()> {
    match command {
        Commands::Encode { format, fields } => {
            let format = registry::by_name(&format)?;
            let code = Code::from_fields(format, &fields)?;
            println!("{}", code.encode()?);
        }

        Commands::Decode { code } => {
            let decoded = registry::decode(&code)?;
            let format = decoded.format();
            println!("Code: {code}");
            println!("  format:       {format} (tag {})", format.tag());
            for (field, value) in format.field_layout().iter().zip(decoded.fields()) {
                println!("  {:<13} {value}", format!("{}:", field.name));
            }
            match decoded.resolve() {
                Some(path) => {
                    println!("  name:         {}", path.name());
                    println!("  description:  {}", path.description());
                }
                None => println!("  name:         {}", decoded.render_name()),
            }
        }

        Commands::Name { code } => {
            println!("{}", registry::render_name(&code)?);
        }

        Commands::Formats => {
            for &format in registry::all() {
                print_format(format);
            }
        }

        Commands::Docs { output, stdout } => {
            if stdout {
                print!("{}", docs::render_markdown(&config.docs.title, &docs::sections()));
            } else {
                let path = output.unwrap_or_else(|| config.docs.output.clone());
                let count = docs::generate(&path, &config.docs.title)?;
                println!("Wrote {count} format sections to {}", path.display());
            }
        }

        Commands::List { format, json } => {
            let formats = match format {
                Some(name) => vec![registry::by_name(&name)?],
                None => registry::all().to_vec(),
            };
            let perms: Vec<_> = formats.iter().flat_map(|f| f.permutations()).collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&perms)?);
            } else {
                for perm in &perms {
                    println!(
                        "{:<8} {:<14} {} - {}",
                        perm.code, perm.format, perm.path, perm.description
                    );
                }
            }
        }
    }
    Ok(())
}

fn print_format(format: Format) {
    let layout = format.layout();
    println!("{} ({format})", format.descriptor().title);
    println!("  tag:     {}", format.tag());
    println!("  length:  {}", format.encoded_len());
    println!("  bits:    {}", layout.total_bits());
    for field in layout.fields {
        println!("  {:<13} {:>2} bits  {}", field.name, field.bits, field.description);
    }
}
