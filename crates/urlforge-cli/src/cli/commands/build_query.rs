//! `urlforge build-query` – build a standalone query string.

use anyhow::Result;
use std::io::{BufRead, Write};
use urlforge_core::boundary::query_record_from_json;
use urlforge_core::config::UrlforgeConfig;
use urlforge_core::{build_query, QueryBuildOptions, QueryOutput, QueryOutputMode};

use super::input::{query_inputs_from_args, read_json_records};
use super::output::collection_json;
use crate::cli::BuildQueryArgs;

pub fn run_build_query<R: BufRead, W: Write>(
    args: BuildQueryArgs,
    cfg: &UrlforgeConfig,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let mut inputs = query_inputs_from_args(&args.query.queries)?;
    if args.query.stdin {
        inputs.extend(read_json_records(stdin, query_record_from_json)?);
    }

    let options = QueryBuildOptions {
        null_value_handling: args
            .query
            .null_value_handling
            .unwrap_or(cfg.null_value_handling),
        encode_space_as_plus: args.query.encode_space_as_plus || cfg.encode_space_as_plus,
        output: if args.as_string {
            QueryOutputMode::Text
        } else {
            QueryOutputMode::Collection
        },
    };

    match build_query(inputs, &options)? {
        QueryOutput::Collection(collection) => {
            writeln!(out, "{}", serde_json::to_string(&collection_json(&collection))?)?
        }
        QueryOutput::Text(text) => writeln!(out, "{text}")?,
    }
    Ok(())
}
