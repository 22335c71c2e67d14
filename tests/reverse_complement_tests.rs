use long_to_linked_pe::reverse_complement;

#[test]
fn test_reverse_complement_basic() {
    let input = b"ATGC";
    let expected = b"GCAT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_lowercase_preserved() {
    // Lower case complements stay lower case
    let input = b"atgc";
    let expected = b"gcat";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_mixed_case() {
    let input = b"AtGc";
    let expected = b"gCaT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_with_n() {
    // N has no complement and passes through, repositioned
    let input = b"ATGCN";
    let expected = b"NGCAT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_unknown_bases_pass_through() {
    let input = b"ATXGC";
    let expected = b"GCXAT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_empty() {
    let input = b"";
    let expected = b"";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_involution() {
    let input = b"AAATTTGGGCCCacgt";
    let twice = reverse_complement(&reverse_complement(input));
    assert_eq!(twice, input);
}

#[test]
fn test_reverse_complement_palindrome() {
    // EcoRI site
    let input = b"GAATTC";
    let expected = b"GAATTC";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}
