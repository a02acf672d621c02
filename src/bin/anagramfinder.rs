extern crate clap;

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;
use clap::{Arg, App};
use log::{debug,error,info};

use anagramfinder::*;

fn main() {
    let args = App::new("Anagramfinder")
                    .version("0.1")
                    .about("Finds all anagrams of a word in a dictionary")
                    .arg(Arg::with_name("dictionary")
                        .help("Dictionary file with one word per line, relative to the current working directory")
                        .takes_value(true)
                        .required(false))
                    .arg(Arg::with_name("index")
                        .long("index")
                        .help("Output the anagram index (the anagram value followed by all its words, tab separated) instead of starting the interactive prompt")
                        .required(false))
                    .arg(Arg::with_name("single-thread")
                        .long("single-thread")
                        .help("Compute anagram values on a single thread while loading")
                        .required(false))
                    .arg(Arg::with_name("debug")
                        .long("debug")
                        .short("D")
                        .help("Debug")
                        .required(false))
                    .get_matches();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if args.is_present("debug") { "debug" } else { "warn" }))
        .target(env_logger::Target::Stderr)
        .init();

    let interactive = !args.is_present("index");

    if interactive {
        if let Err(err) = write_banner(io::stdout()) {
            error!("{}", err);
            exit(1);
        }
    }

    let filename = match args.value_of("dictionary") {
        Some(filename) => filename,
        None => {
            println!("{}", NO_DICTIONARY_MESSAGE);
            return;
        }
    };

    let path: PathBuf = match env::current_dir() {
        Ok(dir) => dir.join(filename),
        Err(err) => {
            debug!("Unable to determine working directory: {}", err);
            PathBuf::from(filename)
        }
    };

    let mut params = LoadParams::default();
    if args.is_present("single-thread") {
        params = params.with_single_thread();
    }
    let mut index = AnagramIndex::new_with_params(params);

    let begintime = Instant::now();
    if let Err(err) = index.read_dictionary(&path) {
        debug!("{:?}", err);
        if let Err(err) = write_load_error(&err, io::stdout()) {
            error!("{}", err);
        }
        exit(1);
    }
    let elapsed = begintime.elapsed().as_millis();
    info!("Loaded {} words in {} anagram groups", index.word_count(), index.len());

    let result = if interactive {
        println!("Dictionary loaded in {} ms", elapsed);
        let stdin = io::stdin();
        let stdout = io::stdout();
        run(&index, stdin.lock(), stdout.lock())
    } else {
        let stdout = io::stdout();
        write_index(&index, stdout.lock())
    };

    if let Err(err) = result {
        error!("{}", err);
        exit(1);
    }
}
