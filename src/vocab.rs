#[derive(Clone,Debug,PartialEq)]
pub struct VocabValue {
    /// The word exactly as it appeared in the dictionary
    pub text: String,

    /// The line number in the source (1-indexed, blank lines included in the count)
    pub lineno: usize,
}

///Map integers (indices correspond to VocabId) to words
pub type VocabDecoder = Vec<VocabValue>;

#[derive(Clone,Debug,PartialEq)]
pub struct LoadParams {
    ///Compute anagram values on a single thread instead of leveraging multiple cores
    pub single_thread: bool,

    ///Batches with fewer words than this are always hashed on the current thread
    pub parallel_threshold: usize,
}

impl Default for LoadParams {
    fn default() -> Self {
        Self {
            single_thread: false,
            parallel_threshold: 10_000,
        }
    }
}

impl LoadParams {
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    ///Should a batch of the given size be hashed in parallel?
    pub fn parallel(&self, batchsize: usize) -> bool {
        !self.single_thread && batchsize >= self.parallel_threshold
    }
}
