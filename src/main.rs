use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use schema_modelgen::naming::CaseConversion;
use schema_modelgen::{generate_models, BuildOptions, GenerationOptions, GenerationOutcome};

#[derive(Parser)]
#[command(name = "schema-modelgen")]
#[command(author, version, about = "Generate entity models from an introspected database schema")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize an introspected schema and write the entity models
    Generate {
        /// Path to the introspection document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (defaults to ./output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Per-type default attribute table (JSON)
        #[arg(short, long)]
        defaults: Option<PathBuf>,

        /// Generation options file (JSON); flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Expose raw foreign-key values next to owning relations
        #[arg(long)]
        relation_ids: bool,

        /// Generate entity constructors
        #[arg(long)]
        generate_constructor: bool,

        /// Use the active-record style
        #[arg(long)]
        active_record: bool,

        /// Convert entity names to the given case (pascal, camel, none)
        #[arg(long = "case-entity")]
        case_entity: Option<CaseConversion>,

        /// Convert property names to the given case (pascal, camel, none)
        #[arg(long = "case-property")]
        case_property: Option<CaseConversion>,

        /// Convert relation field names to the given case (pascal, camel, none)
        #[arg(long = "case-relation")]
        case_relation: Option<CaseConversion>,

        /// Convert file names to the given case (pascal, param, camel, none)
        #[arg(long = "case-file")]
        case_file: Option<CaseConversion>,

        /// Registered naming strategy to use
        #[arg(long)]
        naming_strategy: Option<String>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            defaults,
            config,
            relation_ids,
            generate_constructor,
            active_record,
            case_entity,
            case_property,
            case_relation,
            case_file,
            naming_strategy,
            verbose,
        } => {
            tracing_subscriber::fmt()
                .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
                .with_writer(std::io::stderr)
                .init();

            let mut generation = match &config {
                Some(path) => GenerationOptions::from_file(path)?,
                None => GenerationOptions::default(),
            };
            generation.relation_ids |= relation_ids;
            generation.generate_constructor |= generate_constructor;
            generation.active_record |= active_record;
            if let Some(case) = case_entity {
                generation.entity_case = case;
            }
            if let Some(case) = case_property {
                generation.property_case = case;
            }
            if let Some(case) = case_relation {
                generation.relation_case = case;
            }
            if let Some(case) = case_file {
                generation.file_case = case;
            }
            if naming_strategy.is_some() {
                generation.naming_strategy = naming_strategy;
            }
            if let Some(output) = output {
                generation.output_path = output;
            }

            let options = BuildOptions {
                input_path: input,
                defaults_path: defaults,
                generation,
            };

            match generate_models(options)? {
                GenerationOutcome::EmptySchema => {
                    println!("Tables not found in selected database. No models were generated.");
                }
                GenerationOutcome::Generated { files } => {
                    if verbose {
                        for file in &files {
                            println!("Wrote {}", file.display());
                        }
                    }
                    println!("Generated {} files", files.len());
                }
            }
        }
    }

    Ok(())
}
