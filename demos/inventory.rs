// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  inventory.rs - CSV inventory demo for Rive files.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;

use rivemeta::metadata::*;
use rivemeta::report::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files or directories to scan. Directories are searched for .riv and
    /// .rev files, non-recursively.
    paths: Vec<PathBuf>,

    /// Print a short label per file to stderr as well.
    #[arg(short, long)]
    labels: bool,
}

fn is_rive_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("riv") || ext.eq_ignore_ascii_case("rev"))
}

fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Failed to read directory {}: {}", path.display(), e);
                continue;
            }
        };

        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_rive_file(p))
            .collect();
        found.sort();
        files.extend(found);
    }

    files
}

fn main() {
    let args = Args::parse();

    let mut parsed = Vec::new();
    for path in collect_files(&args.paths) {
        match parse(&path) {
            Ok(metadata) => parsed.push((path, metadata)),
            Err(error) => eprintln!("Error opening file {:?}: {}", path, error),
        }
    }

    if args.labels {
        for (path, metadata) in &parsed {
            let summary = Summary::from_metadata(path, metadata);
            eprintln!("{} [{}] {}", summary.name, summary.format, summary.caption());
        }
    }

    let entries = parsed
        .iter()
        .map(|(path, metadata)| (path.as_path(), metadata));
    if let Err(e) = write_csv(io::stdout().lock(), entries) {
        eprintln!("Failed to write inventory: {}", e);
    }
}
