// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dendrite-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dendrite and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dendrite CLI entrypoint.
//!
//! Runs the interactive mind-map editor against a JSON document file
//! (default `mindmap.json` in the working directory).

use std::error::Error;
use std::path::PathBuf;

const DEFAULT_DOCUMENT: &str = "mindmap.json";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<file>]\n  {program} [--file <file>]\n\nOpens the interactive editor on <file> (default {DEFAULT_DOCUMENT}).\nAn existing file is loaded on startup; Ctrl+S writes back to it."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    file: Option<PathBuf>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => {
                if options.file.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.file = Some(PathBuf::from(file));
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.file.is_some() {
                    return Err(());
                }
                options.file = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "dendrite".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let path = options
            .file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT));
        dendrite::tui::run(path)
    })();

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn defaults_to_no_file() {
        assert_eq!(parse(&[]), Ok(CliOptions { file: None }));
    }

    #[test]
    fn accepts_a_positional_path() {
        assert_eq!(
            parse(&["ideas.json"]),
            Ok(CliOptions {
                file: Some(PathBuf::from("ideas.json"))
            })
        );
    }

    #[test]
    fn accepts_the_file_flag() {
        assert_eq!(
            parse(&["--file", "ideas.json"]),
            Ok(CliOptions {
                file: Some(PathBuf::from("ideas.json"))
            })
        );
    }

    #[test]
    fn rejects_duplicate_or_unknown_arguments() {
        assert_eq!(parse(&["a.json", "b.json"]), Err(()));
        assert_eq!(parse(&["--file"]), Err(()));
        assert_eq!(parse(&["--bogus"]), Err(()));
    }
}
