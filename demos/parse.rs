// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  parse.rs - Metadata dump demo for Rive files.
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

use clap::Parser;

use rivemeta::metadata::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to read.
    file: String,
}

fn main() {
    let args = Args::parse();

    let metadata = match parse(&args.file) {
        Ok(metadata) => metadata,
        Err(error) => {
            eprintln!("Error opening file {:?}: {:?}", &args.file, error);
            return;
        }
    };

    if !metadata.is_valid {
        eprintln!("Not a Rive file: {:?}", &args.file);
    }

    println!("{:#?}", metadata);
    println!("Size: {}", format_file_size(metadata.file_size));
}
