//! `urlforge build-url` – build a URL from a base plus components.

use anyhow::Result;
use std::io::{BufRead, Write};
use urlforge_core::boundary::url_record_from_json;
use urlforge_core::config::UrlforgeConfig;
use urlforge_core::{
    build_url, Credential, UrlBase, UrlBuildOptions, UrlOutput, UrlOutputMode, UrlRecord,
};

use super::input::{query_inputs_from_args, read_json_records};
use super::output::model_json;
use crate::cli::BuildUrlArgs;

/// Records from flags first (extra `--query` inputs as query-only records), then stdin.
fn records_from_args(args: &BuildUrlArgs) -> Result<Vec<UrlRecord>> {
    let mut queries = query_inputs_from_args(&args.query.queries)?.into_iter();
    let first = UrlRecord {
        host: args.host.clone(),
        scheme: args.scheme.clone(),
        port: args.port,
        path: args.path.clone(),
        fragment: args.fragment.clone(),
        user_name: args.user_name.clone(),
        password: args.password.clone().map(Credential::new),
        query: queries.next(),
    };

    let mut records = vec![first];
    records.extend(queries.map(|q| UrlRecord {
        query: Some(q),
        ..Default::default()
    }));
    Ok(records)
}

pub fn run_build_url<R: BufRead, W: Write>(
    args: BuildUrlArgs,
    cfg: &UrlforgeConfig,
    stdin: R,
    out: &mut W,
) -> Result<()> {
    let mut records = records_from_args(&args)?;
    if args.query.stdin {
        records.extend(read_json_records(stdin, url_record_from_json)?);
    }

    let output = if args.as_uri {
        UrlOutputMode::Uri
    } else if args.as_string {
        UrlOutputMode::Text
    } else {
        UrlOutputMode::Model
    };
    let options = UrlBuildOptions {
        null_value_handling: args
            .query
            .null_value_handling
            .unwrap_or(cfg.null_value_handling),
        encode_space_as_plus: args.query.encode_space_as_plus || cfg.encode_space_as_plus,
        output,
        default_scheme: cfg.default_scheme.clone(),
    };

    let base = args.base.map(UrlBase::Text);
    match build_url(base, records, &options)? {
        UrlOutput::Model(model) => writeln!(out, "{}", serde_json::to_string_pretty(&model_json(&model))?)?,
        rendered => writeln!(out, "{rendered}")?,
    }
    Ok(())
}
