use crate::index::InvertedIndex;
use crate::query::Query;
use crate::DocumentId;

/// Plus words of `query` present in the document, ascending.
/// Empty if the document contains any minus word.
pub fn matched_words(query: &Query, index: &InvertedIndex, doc_id: DocumentId) -> Vec<String> {
    if query.minus.iter().any(|word| index.contains(word, doc_id)) {
        return Vec::new();
    }
    // BTreeSet iteration is already sorted and distinct.
    query
        .plus
        .iter()
        .filter(|word| index.contains(word, doc_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::term_frequencies;
    use crate::query::parse_query;
    use crate::tokenizer::StopWords;

    fn index_of(docs: &[(DocumentId, &str)]) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for (id, text) in docs {
            let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
            index.insert(*id, &term_frequencies(&words));
        }
        index
    }

    #[test]
    fn returns_sorted_present_words() {
        let index = index_of(&[(1, "cat in the city")]);
        let query = parse_query("the zebra city in", &StopWords::default()).unwrap();
        assert_eq!(matched_words(&query, &index, 1), vec!["city", "in", "the"]);
    }

    #[test]
    fn minus_word_empties_the_match() {
        let index = index_of(&[(1, "cat in the city")]);
        let query = parse_query("cat -city", &StopWords::default()).unwrap();
        assert!(matched_words(&query, &index, 1).is_empty());
    }
}
