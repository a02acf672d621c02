use crate::*;

///A small dictionary, blank lines and mixed casing included
pub const DICTIONARY: &[&str] = &[
    "post",
    "spot",
    "",
    "stop",
    "Listen",
    "tops",
    "exit",
    "silent",
    "enlist",
    "",
    "Tinsel",
    "stressed",
    "desserts",
    "a",
];

pub fn get_test_dictionary() -> Vec<String> {
    DICTIONARY.iter().map(|word| word.to_string()).collect()
}

pub fn get_test_index() -> AnagramIndex {
    let mut index = AnagramIndex::new_with_params(get_test_loadparams());
    index.add_lines(get_test_dictionary());
    index
}

pub fn get_test_loadparams() -> LoadParams {
    LoadParams {
        single_thread: true,
        parallel_threshold: 0,
    }
}
