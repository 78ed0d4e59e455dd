//! VickreyChain CLI
//!
//! Thin wrapper around vickreychain-core for inspecting the landing page
//! without opening a window.
//!
//! ## Usage
//!
//! ```bash
//! # List the feature grid
//! vickreychain features
//!
//! # FAQ as JSON
//! vickreychain faq --json
//!
//! # Check an address the way the early access form does
//! vickreychain check-email bidder@example.com
//!
//! # Show page metadata from a config file
//! vickreychain --config site.json meta
//!
//! # Print the effective config
//! vickreychain config
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use vickreychain_core::{content, EarlyAccessForm, LoggingBuilder, Section, SiteConfig};

/// VickreyChain - Vickrey auctions on the Internet Computer
#[derive(Parser)]
#[command(name = "vickreychain")]
#[command(version = "0.1.0")]
#[command(about = "VickreyChain - landing page content and configuration")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site config JSON file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the feature grid
    Features {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the FAQ entries
    Faq {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the "How It Works" steps
    Steps {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the page sections and their anchors
    Sections,

    /// Validate an email address the way the early access form does
    CheckEmail {
        /// Address to check
        address: String,
    },

    /// Show document metadata
    Meta,

    /// Print the effective site config as JSON
    Config,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingBuilder::new().verbosity(cli.verbose).stderr().init()?;

    let config = SiteConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Features { json } => {
            if json {
                print_json(content::features())?;
            } else {
                for feature in content::features() {
                    println!("{} {}", feature.icon, feature.title);
                    println!("  {}", feature.description);
                }
            }
        }

        Commands::Faq { json } => {
            if json {
                print_json(content::faqs())?;
            } else {
                for (i, faq) in content::faqs().iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("Q: {}", faq.question);
                    println!("A: {}", faq.answer);
                }
            }
        }

        Commands::Steps { json } => {
            if json {
                print_json(content::steps())?;
            } else {
                for step in content::steps() {
                    println!("{}. {}", step.number, step.title);
                    println!("   {}", step.description);
                }
            }
        }

        Commands::Sections => {
            for section in Section::NAV_ORDER {
                println!("#{:<14} {}", section.anchor(), section.nav_label());
            }
        }

        Commands::CheckEmail { address } => {
            let mut form = EarlyAccessForm::new();
            form.set_email(address);
            let accepted = form.submit()?;
            println!("accepted: {}", accepted);
        }

        Commands::Meta => {
            let meta = &config.meta;
            println!("{}", config.brand);
            println!();
            println!("Title:       {}", meta.title);
            println!("Description: {}", meta.description);
            println!("Viewport:    {}", meta.viewport);
            println!("Favicon:     {}", meta.favicon);
            println!();
            println!("{}", config.copyright_notice());
        }

        Commands::Config => {
            print_json(&config)?;
        }
    }

    Ok(())
}
