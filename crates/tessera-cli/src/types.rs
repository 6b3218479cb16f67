//! # Types Subcommand
//!
//! Lists the scalar type names accepted by `tessera check` and the aliases
//! defined in the configuration file.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::kinds::{Scalar, Shape, TypeExpr};

/// Arguments for the `tessera types` subcommand.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Known scalar names with their concrete types, plus configured aliases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeListing {
    /// Scalar name to concrete type name.
    pub scalars: BTreeMap<&'static str, String>,
    /// Alias name to type expression.
    pub aliases: BTreeMap<String, String>,
}

/// Collect the listing for `config`.
pub fn listing(config: &CliConfig) -> TypeListing {
    let scalars = Scalar::ALL
        .into_iter()
        .map(|scalar| {
            let expr = TypeExpr {
                shape: Shape::Scalar,
                scalar,
            };
            (scalar.name(), expr.type_name())
        })
        .collect();
    TypeListing {
        scalars,
        aliases: config.aliases.clone(),
    }
}

/// Render the listing in the requested format.
pub fn render(listing: &TypeListing, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(listing).context("failed to serialize type listing")
        }
        OutputFormat::Text => {
            let mut out = vec!["Scalars:".to_string()];
            out.extend(
                listing
                    .scalars
                    .iter()
                    .map(|(name, type_name)| format!("  {name:<10} {type_name}")),
            );
            out.push("Collections: list<scalar>, map<scalar>".to_string());
            if !listing.aliases.is_empty() {
                out.push("Aliases:".to_string());
                out.extend(
                    listing
                        .aliases
                        .iter()
                        .map(|(name, target)| format!("  {name} = {target}")),
                );
            }
            Ok(out.join("\n"))
        }
    }
}

/// Execute the types subcommand.
pub fn run_types(args: &TypesArgs, config: &CliConfig) -> Result<u8> {
    let listing = listing(config);
    println!("{}", render(&listing, config.output_format(args.format))?);
    Ok(0)
}
