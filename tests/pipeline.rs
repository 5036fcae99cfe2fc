use dmrids_lib::error::DmrError;
use dmrids_lib::export::{export_users, left_just, ExportFormat, FIELD_WIDTHS};
use dmrids_lib::pipeline::select_for_export;
use dmrids_lib::reference::standard_tables;
use dmrids_lib::registry::DmrUser;
use dmrids_lib::selection::{CodeStatus, CriterionKind, SelectionCriteria, SelectionPlan};

fn norwegian_user() -> DmrUser {
    DmrUser {
        radio_id: 302123456,
        id: 77,
        callsign: "la1ab".to_string(),
        fname: "øle".to_string(),
        surname: "Nordmann".to_string(),
        name: "øle".to_string(),
        city: "Bodø".to_string(),
        state: "Nordland".to_string(),
        country: "Norway".to_string(),
        remarks: String::new(),
    }
}

fn plan(regions: &[i64], countries: &[i64]) -> SelectionPlan {
    let criteria = SelectionCriteria::new(regions.iter().copied(), countries.iter().copied());
    SelectionPlan::build(&criteria, standard_tables()).unwrap().0
}

#[test]
fn test_region_selection_end_to_end() {
    let users = vec![norwegian_user()];
    let (export, stats) = select_for_export(&users, &plan(&[3], &[]));

    assert_eq!(stats.included, 1);
    assert_eq!(export.len(), 1);
    assert_eq!(export[0].fname, "Ole");
    assert_eq!(export[0].callsign, "LA1AB");
    assert_eq!(export[0].city, "Bodo");
    assert_eq!(export[0].radio_id, 302123456);

    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("users-anytone.csv");
    let summary = export_users(&export, ExportFormat::Anytone, &csv_path).unwrap();
    assert_eq!(summary.count, 1);
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv.lines().nth(1).unwrap(),
        "302123456,LA1AB,Ole,Bodo,Nordland,Norway,,Private Call,None"
    );

    let txt_path = dir.path().join("users-text.txt");
    export_users(&export, ExportFormat::Text, &txt_path).unwrap();
    let txt = std::fs::read_to_string(&txt_path).unwrap();
    let row = txt.lines().nth(2).unwrap();
    let expected: String = [
        "Ole", "Ole", "Norway", "LA1AB", "Bodo", "Nordmann", "302123456", "77", "Nordland",
    ]
    .iter()
    .zip(FIELD_WIDTHS)
    .map(|(value, width)| left_just(value, width, ' '))
    .collect();
    assert_eq!(row, expected);
}

#[test]
fn test_exclusion_without_region_selects_nothing() {
    let mut user = norwegian_user();
    user.radio_id = 302999999;
    let users = vec![user];

    let (export, _) = select_for_export(&users, &plan(&[], &[-302]));
    assert!(export.is_empty());

    let (export, _) = select_for_export(&users, &plan(&[], &[301]));
    assert!(export.is_empty());
}

#[test]
fn test_unknown_country_has_no_effect() {
    let users = vec![norwegian_user()];
    let criteria = SelectionCriteria::new([3], [999]);
    let (plan, report) = SelectionPlan::build(&criteria, standard_tables()).unwrap();

    assert_eq!(report.status_of(CriterionKind::Country, 999), Some(CodeStatus::Unknown));
    let (export, _) = select_for_export(&users, &plan);
    assert_eq!(export.len(), 1);
}

#[test]
fn test_empty_criteria_stops_the_pipeline() {
    let result = SelectionPlan::build(&SelectionCriteria::default(), standard_tables());
    assert!(matches!(result, Err(DmrError::EmptyCriteria)));
}
