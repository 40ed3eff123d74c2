//! Print the statement the server would run for a set of query parameters
//!
//! Goes through the same validation as the HTTP handlers, without a database.

use anyhow::Result;
use clap::{Parser, Subcommand};

use joyas_core::{BuiltQuery, FilterParams, ListingParams, QueryBuilder};

#[derive(Parser, Debug)]
pub struct ExplainArgs {
    #[command(subcommand)]
    pub command: ExplainCommands,
}

#[derive(Subcommand, Debug)]
pub enum ExplainCommands {
    /// Paginated listing (GET /joyas)
    Listing(ListingArgs),
    /// Filtered listing (GET /joyas/filtros)
    Filter(FilterArgs),
}

#[derive(Parser, Debug)]
pub struct ListingArgs {
    /// Items per page
    #[arg(long)]
    pub limits: Option<String>,

    /// Page number (1-indexed)
    #[arg(long)]
    pub page: Option<String>,

    /// Sort as <field>_<ASC|DESC>, e.g. stock_ASC
    #[arg(long)]
    pub order_by: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FilterArgs {
    /// Maximum price (inclusive)
    #[arg(long)]
    pub precio_max: Option<String>,

    /// Minimum price (inclusive)
    #[arg(long)]
    pub precio_min: Option<String>,

    /// Category to match
    #[arg(long)]
    pub categoria: Option<String>,

    /// Metal to match
    #[arg(long)]
    pub metal: Option<String>,
}

pub fn run_explain(args: ExplainArgs) -> Result<()> {
    let query = match args.command {
        ExplainCommands::Listing(args) => QueryBuilder::listing_from_params(&ListingParams {
            limits: args.limits,
            page: args.page,
            order_by: args.order_by,
        })?,
        ExplainCommands::Filter(args) => QueryBuilder::filtered_from_params(&FilterParams {
            precio_max: args.precio_max,
            precio_min: args.precio_min,
            categoria: args.categoria,
            metal: args.metal,
        })?,
    };

    print!("{}", render(&query));
    Ok(())
}

fn render(query: &BuiltQuery) -> String {
    let mut out = format!("{}\n", query.sql);
    for (i, value) in query.values.iter().enumerate() {
        out.push_str(&format!("  ${} = {}\n", i + 1, value));
    }
    out
}
