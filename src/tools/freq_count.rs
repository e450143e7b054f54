use rustc_hash::FxHashMap;

/// Occurrence count of every distinct symbol in a text.
pub type FrequencyTable = FxHashMap<char, u64>;

/// Returns a frequency count of the symbols (Unicode scalar values) in the input text.
pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut freqs = FrequencyTable::default();
    text.chars().for_each(|c| *freqs.entry(c).or_insert(0) += 1);
    freqs
}
