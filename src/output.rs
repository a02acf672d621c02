use std::io::{self,Write};

use crate::{AnagramIndex,AnaValue,LoadError,EXIT_COMMAND};

///Shown when no dictionary file was passed on the command line
pub const NO_DICTIONARY_MESSAGE: &str = "No dictionary file name provided";

pub fn write_banner(mut output: impl Write) -> io::Result<()> {
    writeln!(output, "Welcome to the Anagram Finder")?;
    writeln!(output, "---------------------------------")?;
    writeln!(output, "Enter '{}' to exit the program\n", EXIT_COMMAND)
}

///Output the anagram index, one group per line: the anagram value followed by all its words,
///tab separated. Groups are sorted by anagram value, words keep their load order.
pub fn write_index(index: &AnagramIndex, mut output: impl Write) -> io::Result<()> {
    let mut groups: Vec<(&AnaValue, Vec<&str>)> = index.iter().collect();
    groups.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (anahash, words) in groups {
        write!(output, "{}", anahash)?;
        for word in words {
            write!(output, "\t{}", word)?;
        }
        writeln!(output)?;
    }
    Ok(())
}

///Report a failed load to the user, preceeded by an empty line
pub fn write_load_error(err: &LoadError, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "\n{}", err.diagnostic())
}
