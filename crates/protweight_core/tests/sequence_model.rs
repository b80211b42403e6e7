use protweight_core::{AnalysisRow, PersistedProtein, SequenceRecord};

#[test]
fn sequence_record_serialization_uses_expected_fields() {
    let record = SequenceRecord::new("P001", "Hemoglobin alpha", "MVLS");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["name"], "P001");
    assert_eq!(json["description"], "Hemoglobin alpha");
    assert_eq!(json["sequence"], "MVLS");

    let decoded: SequenceRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn persisted_protein_serializes_missing_description_as_null() {
    let protein = PersistedProtein {
        id: 3,
        name: "1ABC".to_string(),
        description: None,
        sequence: "ACDE".to_string(),
    };

    let json = serde_json::to_value(&protein).unwrap();
    assert_eq!(json["id"], 3);
    assert!(json["description"].is_null());
}

#[test]
fn analysis_row_serializes_weight_as_number() {
    let row = AnalysisRow {
        id: 1,
        name: "1ABC".to_string(),
        molecular_weight: 210.3,
    };

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["molecular_weight"], 210.3);
}
