use protweight_core::fasta::DEFAULT_LINE_WIDTH;
use protweight_core::{parse_fasta, write_fasta, SequenceRecord};

#[test]
fn header_splits_into_name_and_description() {
    let records = parse_fasta(">P001 Hemoglobin alpha\nMVLS\n");

    assert_eq!(
        records,
        vec![SequenceRecord::new("P001", "Hemoglobin alpha", "MVLS")]
    );
}

#[test]
fn record_with_empty_sequence_is_dropped() {
    let records = parse_fasta(">a\n>b\nACDE\n");

    assert_eq!(records, vec![SequenceRecord::new("b", "", "ACDE")]);
}

#[test]
fn residue_lines_are_trimmed_and_concatenated() {
    let records = parse_fasta(">x multi line\n  MVLS \r\nPADK\t\n\nTNVK\n>y\nGG");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sequence, "MVLSPADKTNVK");
    assert_eq!(records[1].name, "y");
    assert_eq!(records[1].sequence, "GG");
}

#[test]
fn residue_characters_pass_through_unvalidated() {
    let records = parse_fasta(">odd\nAC-X*?z\n");

    assert_eq!(records[0].sequence, "AC-X*?z");
}

#[test]
fn records_keep_input_order() {
    let text = ">3\nA\n>1\nC\n>2\nD\n";
    let names: Vec<String> = parse_fasta(text).into_iter().map(|r| r.name).collect();

    assert_eq!(names, vec!["3", "1", "2"]);
}

#[test]
fn reparsing_rendered_records_is_stable() {
    let text = "\
>1ABC_1 mol:protein length:70  CHAIN A
MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQFEVV
HSLAKWKR
>1ABC_2
ACDEFGHIKLMNPQRSTVWY
";
    let records = parse_fasta(text);
    assert_eq!(records.len(), 2);

    for width in [0, 7, DEFAULT_LINE_WIDTH] {
        let rendered = write_fasta(&records, width);
        assert_eq!(parse_fasta(&rendered), records, "width {width}");
    }
}
