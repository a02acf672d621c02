use std::io::{self,BufRead,Write};
use std::time::Instant;
use log::debug;

use crate::{AnagramIndex,format_list};

///Entering this (in any casing) ends the interactive session
pub const EXIT_COMMAND: &str = ":exit";

pub const PROMPT: &str = "AnagramFinder>";

///Label used in messages when the query was empty
pub const EMPTY_INPUT_LABEL: &str = "empty input";

///Renders the outcome of a single query
pub fn format_result_message(word: &str, anagrams: &[&str], elapsed_ms: u128) -> String {
    let word = if word.is_empty() { EMPTY_INPUT_LABEL } else { word };
    match anagrams.len() {
        0 => format!("No anagrams found for {} in {}ms", word, elapsed_ms),
        count => format!("{} Anagram{} found for {} in {}ms\n{}",
                count,
                if count == 1 { "" } else { "s" },
                word,
                elapsed_ms,
                format_list(anagrams)),
    }
}

///Run the read-eval-print loop: prompt, read a word, print its anagrams.
///Returns when the exit command is entered or the input is exhausted.
pub fn run(index: &AnagramIndex, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "\n{}", PROMPT)?;
        output.flush()?;
        let query = match lines.next() {
            Some(line) => line?,
            None => {
                debug!("End of input, leaving interactive mode");
                writeln!(output)?;
                break;
            }
        };
        if query.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        let begintime = Instant::now();
        let anagrams = index.get_anagrams(&query);
        let elapsed = begintime.elapsed().as_millis();
        //each result is followed by an empty line
        writeln!(output, "{}\n", format_result_message(&query, &anagrams, elapsed))?;
    }
    Ok(())
}
