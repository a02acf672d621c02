use std::fs::File;
use std::io::{self,BufReader,BufRead};
use std::path::Path;
use log::{debug,info,trace};
use rayon::prelude::*;

pub mod types;
pub mod anahash;
pub mod vocab;
pub mod error;
pub mod interactive;
pub mod output;
pub mod test;


pub use crate::types::*;
pub use crate::anahash::*;
pub use crate::vocab::*;
pub use crate::error::*;
pub use crate::interactive::*;
pub use crate::output::*;


#[derive(Default)]
pub struct AnagramIndex {
    ///All loaded words, in load order
    pub decoder: VocabDecoder,

    ///The main index, mapping anagram values to instances
    pub index: AnaIndex,

    pub params: LoadParams,
}

impl AnagramIndex {
    pub fn new() -> AnagramIndex {
        Self::default()
    }

    pub fn new_with_params(params: LoadParams) -> AnagramIndex {
        AnagramIndex {
            decoder: Vec::new(),
            index: AnaIndex::new(),
            params,
        }
    }

    fn get_or_create_node(&mut self, anahash: AnaValue) -> &mut AnaIndexNode {
        self.index.entry(anahash).or_default()
    }

    ///Read a dictionary file, one word per line. Blank lines are skipped.
    ///Words are added to whatever was loaded before.
    ///
    ///Fails with `LoadError::NotFound` if the file does not exist and with `LoadError::Read`
    ///on any other I/O failure. Words read up to the point of failure remain in the index.
    pub fn read_dictionary(&mut self, filename: impl AsRef<Path>) -> Result<(), LoadError> {
        let filename = filename.as_ref();
        debug!("Reading dictionary from {}...", filename.display());
        let f = File::open(filename).map_err(|err| LoadError::from_io(filename, err))?;
        self.read_lines(BufReader::new(f), filename)
    }

    ///Read words from any buffered reader, `source` is only used for error reporting.
    ///Lines may end in `\n`, `\r\n` or a lone `\r`.
    pub fn read_lines(&mut self, reader: impl BufRead, source: impl AsRef<Path>) -> Result<(), LoadError> {
        let mut batch: Vec<(usize,String)> = Vec::new();
        let mut result = Ok(());
        for (i, line) in dictionary_lines(reader).enumerate() {
            match line {
                Ok(line) => {
                    if !line.is_empty() {
                        batch.push((i + 1, line));
                    }
                },
                Err(err) => {
                    debug!(" - Read failure at line {}: {}", i + 1, err);
                    result = Err(LoadError::Read { path: source.as_ref().to_path_buf(), source: err });
                    break;
                }
            }
        }
        self.add_batch(batch);
        result
    }

    ///Add words from lines that are already in memory. Blank lines are skipped.
    pub fn add_lines<I,S>(&mut self, lines: I) where I: IntoIterator<Item=S>, S: Into<String> {
        let batch: Vec<(usize,String)> = lines.into_iter()
            .map(|line| -> String { line.into() })
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| (i + 1, line))
            .collect();
        self.add_batch(batch);
    }

    fn insert(&mut self, anahash: AnaValue, text: String, lineno: usize) -> VocabId {
        let vocab_id = self.decoder.len() as VocabId;
        trace!("   -- Anavalue={} VocabId={} Text={}", &anahash, vocab_id, text);
        self.decoder.push(VocabValue { text, lineno });
        self.get_or_create_node(anahash).instances.push(vocab_id);
        vocab_id
    }

    fn add_batch(&mut self, batch: Vec<(usize,String)>) {
        let parallel = self.params.parallel(batch.len());
        info!("Computing anagram values for {} words{}...", batch.len(), if parallel { " (parallel)" } else { "" });

        //only the hashing is parallel, insertion must follow the input order
        let hashes: Vec<AnaValue> = if parallel {
            batch.par_iter().map(|(_, text)| text.anahash()).collect()
        } else {
            batch.iter().map(|(_, text)| text.anahash()).collect()
        };

        for ((lineno, text), anahash) in batch.into_iter().zip(hashes) {
            self.insert(anahash, text, lineno);
        }
        info!(" - Found {} anagram groups over {} words", self.index.len(), self.decoder.len());
    }

    pub fn contains_key(&self, key: &AnaValue) -> bool {
        self.index.contains_key(key)
    }

    ///Get all anagram instances for a specific entry, in the order they were loaded
    pub fn get_anagram_instances(&self, text: &str) -> Vec<&VocabValue> {
        let anavalue = text.anahash();
        let mut instances: Vec<&VocabValue> = Vec::new();
        if let Some(node) = self.index.get(&anavalue) {
            for vocab_id in node.instances.iter() {
                if let Some(value) = self.get_vocab(*vocab_id) {
                    instances.push(value);
                }
            }
        }
        instances
    }

    ///Get all words in the dictionary that are anagrams of the given word (including the word
    ///itself if it is in the dictionary). Matching ignores case, the words are returned as they
    ///were loaded. Returns an empty vector if there are none.
    pub fn get_anagrams(&self, word: &str) -> Vec<&str> {
        self.get_anagram_instances(word).into_iter().map(|value| value.text.as_str()).collect()
    }

    ///Tests if the dictionary has a specific entry, by exact text
    pub fn has(&self, text: &str) -> bool {
        self.get_anagram_instances(text).iter().any(|instance| instance.text == text)
    }

    ///Resolves a vocabulary ID
    pub fn get_vocab(&self, vocab_id: VocabId) -> Option<&VocabValue> {
        self.decoder.get(vocab_id as usize)
    }

    ///Number of anagram groups
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    ///Number of words loaded (duplicates included)
    pub fn word_count(&self) -> usize {
        self.decoder.len()
    }

    ///Iterate over all anagram groups (in arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item=(&AnaValue, Vec<&str>)> {
        self.index.iter().map(move |(anahash, node)| {
            let words = node.instances.iter()
                .filter_map(|vocab_id| self.get_vocab(*vocab_id))
                .map(|value| value.text.as_str())
                .collect();
            (anahash, words)
        })
    }
}

///Iterate over the lines of a reader, without their terminators.
///`\n`, `\r\n` and a lone `\r` all end a line. Invalid UTF-8 yields an `InvalidData` error.
pub fn dictionary_lines(reader: impl BufRead) -> impl Iterator<Item=io::Result<String>> {
    reader.split(b'\n').flat_map(|segment| {
        let lines: Vec<io::Result<String>> = match segment {
            Ok(mut bytes) => {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                bytes.split(|byte| *byte == b'\r')
                    .map(|line| String::from_utf8(line.to_vec()).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err)))
                    .collect()
            },
            Err(err) => vec!(Err(err)),
        };
        lines
    })
}

///Joins words with a comma and no spaces: `post,spot,stop`. Returns an empty string if there are no words.
pub fn format_list<S: AsRef<str>>(words: &[S]) -> String {
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push(',');
        }
        result.push_str(word.as_ref());
    }
    result
}
