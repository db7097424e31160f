//! Offline generator for the compressed case-conversion tables.
//!
//! Reads UnicodeData.txt, compresses the simple upper/lower mappings of
//! the Basic Multilingual Plane into XOR ranges plus exceptions, and
//! emits the `case/tables.rs` source artifact. Writes to stdout when no
//! output path is given.
//!
//! Usage: `mkcasetable <UnicodeData.txt> [tables.rs]`

use std::{env, fs, process::ExitCode};

use prettyplease::unparse;
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};

use charbuf::builder::{compress, parse_unicode_data, BuilderOptions, CompressedTable};

fn hex(v: u16) -> TokenStream {
    format!("{v:#06X}").parse().expect("hex literal")
}

fn direction_tokens(prefix: &str, table: &CompressedTable) -> TokenStream {
    let range_count = format_ident!("{prefix}_RANGE_COUNT");
    let exception_count = format_ident!("{prefix}_EXCEPTION_COUNT");
    let ranges_name = format_ident!("{prefix}_RANGES");
    let exceptions_name = format_ident!("{prefix}_EXCEPTIONS");

    let rc = Literal::usize_unsuffixed(table.ranges.len());
    let ec = Literal::usize_unsuffixed(table.exceptions.len());

    let ranges = table.ranges.iter().map(|r| {
        let (xor, start, end) = (hex(r.xor), hex(r.start), hex(r.end));
        quote!(CaseRange { xor: #xor, start: #start, end: #end })
    });
    let exceptions = table.exceptions.iter().map(|e| {
        let (from, to) = (hex(e.from), hex(e.to));
        quote!(CaseException { from: #from, to: #to })
    });

    quote! {
        pub const #range_count: usize = #rc;
        pub const #exception_count: usize = #ec;
        pub static #ranges_name: [CaseRange; #range_count] = [#(#ranges),*];
        pub static #exceptions_name: [CaseException; #exception_count] = [#(#exceptions),*];
    }
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(input) = args.next() else {
        eprintln!("usage: mkcasetable <UnicodeData.txt> [tables.rs]");
        return ExitCode::FAILURE;
    };
    let output = args.next();

    let text = match fs::read_to_string(&input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("mkcasetable: {input}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let opts = BuilderOptions::default();
    let (maps, diag) = parse_unicode_data(&text);
    let upper = compress(&maps.upper, &opts);
    let lower = compress(&maps.lower, &opts);

    eprintln!(
        "mkcasetable: {} records, {} skipped; upcase {} ranges + {} exceptions, downcase {} ranges + {} exceptions",
        diag.records,
        diag.skipped,
        upper.ranges.len(),
        upper.exceptions.len(),
        lower.ranges.len(),
        lower.exceptions.len(),
    );

    let upcase = direction_tokens("UPCASE", &upper);
    let downcase = direction_tokens("DOWNCASE", &lower);
    let file = syn::parse_quote! {
        use super::{CaseException, CaseRange};
        #upcase
        #downcase
    };

    let BuilderOptions {
        min_xor_count,
        max_gap,
    } = opts;
    let mut source = format!(
        "// Generated by `mkcasetable` from UnicodeData.txt. Do not edit.\n//\n// min_xor_count = {min_xor_count}, max_gap = {max_gap}\n"
    );
    source.push_str(&unparse(&file));

    match output {
        Some(path) => {
            if let Err(e) = fs::write(&path, source) {
                eprintln!("mkcasetable: {path}: {e}");
                return ExitCode::FAILURE;
            }
        }
        None => print!("{source}"),
    }
    ExitCode::SUCCESS
}
