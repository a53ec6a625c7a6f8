use std::io::Write as _;

use fractic_reception_hierarchy::{
    display::{ExpansionState, NodePath},
    entities::{
        ContainsRows as _, Direction, ExpenseSign, HasTotals, HierarchyConfig, PositionNumber,
        ReceptionHierarchy, ReceptionPreview, Totals, TransactionRow,
    },
    util::ReceptionHierarchyUtil,
};
use indoc::indoc;

const SHEET: &str = indoc! {"
    reception_number,reception_date,counterparty,position,service,subdivision,work_group,item,type,quantity,price
    R-7,2024-05-01,ООО Ромашка,10,Overhaul,Shop 1,Engine,Piston_ID_1,Доходы,4,250
    R-7,2024-05-01,ООО Ромашка,2,Repair,Shop 2,Engine,Gasket_ID_1,Доходы,2,500
    R-7,2024-05-01,ООО Ромашка,2,Repair,Shop 2,Electrics,Cable_ID_9,Расходы,3,40
    R-7,2024-05-01,ООО Ромашка,Стенд,Test,Lab,Bench,Hours,Доходы,5,100
    R-7,2024-05-01,ООО Ромашка,2,Repair,Shop 2,Engine,Gasket_ID_2,Расходы,1,300
    R-7,2024-05-01,ООО Ромашка,10,Overhaul,Shop 1,Engine,Piston_ID_2,Расходы,4,75.5
    R-7,2024-05-01,ООО Ромашка,2,Repair,Shop 2,Engine,Bolt,Доходы,10,n/a
    R-7,2024-05-01,ООО Ромашка,1,Diagnostics,Shop 3,Engine,Check,Доходы,1,1000
"};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn row(position: i64, work_group: &str, item_name: &str, dir: Direction, q: f64, p: f64) -> TransactionRow {
    TransactionRow {
        position_number: PositionNumber::Number(position),
        work_group: work_group.into(),
        item_name: item_name.into(),
        transaction_type: dir,
        quantity: q,
        price: p,
        service_name: "Repair".into(),
        subdivision_name: "Shop 2".into(),
        reception_number: "R-1".into(),
        reception_date: "01.05.2024".into(),
        counterparty_name: "ООО Ромашка".into(),
    }
}

async fn sheet_hierarchy() -> ReceptionHierarchy {
    let (preview, _) = ReceptionHierarchyUtil::default()
        .from_string(SHEET)
        .await
        .unwrap();
    match preview {
        ReceptionPreview::Data(h) => h,
        ReceptionPreview::NoData => panic!("expected data"),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn assert_totals_eq(actual: Totals, expected: Totals) {
    assert!(
        close(actual.income_total, expected.income_total)
            && close(actual.expense_total, expected.expense_total)
            && close(actual.net_total, expected.net_total),
        "{:?} != {:?}",
        actual,
        expected
    );
}

fn sum<C: HasTotals>(children: &[C]) -> Totals {
    children.iter().map(|c| c.totals()).sum()
}

#[test]
fn gasket_scenario() {
    init_logging();
    let util = ReceptionHierarchyUtil::default();
    let preview = util
        .from_rows(vec![
            row(1, "Repair", "Gasket_ID_1", Direction::Income, 2.0, 500.0),
            row(1, "Repair", "Gasket_ID_2", Direction::Expense, 1.0, 300.0),
        ])
        .unwrap();
    let hierarchy = preview.hierarchy().unwrap();

    assert_eq!(hierarchy.positions.len(), 1);
    let position = &hierarchy.positions[0];
    assert_eq!(position.key, PositionNumber::Number(1));
    assert_eq!(position.children.len(), 1);
    let work_group = &position.children[0];
    assert_eq!(work_group.key, "Repair");
    assert_eq!(work_group.children.len(), 1);
    let base_item = &work_group.children[0];
    assert_eq!(base_item.key, "Gasket");
    assert_eq!(base_item.totals, Totals::new(1000.0, -300.0));
    assert_eq!(base_item.totals.net_total, 700.0);
    assert_eq!(hierarchy.totals, Totals::new(1000.0, -300.0));
}

#[test]
fn empty_input_is_no_data() {
    init_logging();
    let preview = ReceptionHierarchyUtil::default().from_rows(vec![]).unwrap();
    assert_eq!(preview, ReceptionPreview::NoData);
    assert!(preview.is_empty());
}

#[tokio::test]
async fn header_only_sheet_is_no_data() {
    init_logging();
    let (preview, outline) = ReceptionHierarchyUtil::default()
        .from_string("reception_number,reception_date\n")
        .await
        .unwrap();
    assert!(preview.is_empty());
    assert_eq!(outline, "Нет данных для отображения. Загрузите файл.\n");
}

#[tokio::test]
async fn header_comes_from_first_row() {
    init_logging();
    let hierarchy = sheet_hierarchy().await;
    assert_eq!(hierarchy.header.reception_number, "R-7");
    assert_eq!(hierarchy.header.reception_date, "2024-05-01");
    assert_eq!(hierarchy.header.counterparty_name, "ООО Ромашка");
    assert_eq!(
        hierarchy.header.parsed_date(),
        chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
    );
}

#[tokio::test]
async fn positions_sort_numerically_with_literals_last() {
    init_logging();
    let hierarchy = sheet_hierarchy().await;
    let keys: Vec<&PositionNumber> = hierarchy.positions.iter().map(|p| &p.key).collect();
    assert_eq!(
        keys,
        vec![
            &PositionNumber::Number(1),
            &PositionNumber::Number(2),
            &PositionNumber::Number(10),
            &PositionNumber::Literal("Стенд".into()),
        ]
    );
    let two = &hierarchy.positions[1];
    assert_eq!(two.header.service_name, "Repair");
    assert_eq!(two.header.subdivision_name, "Shop 2");
}

#[tokio::test]
async fn groups_keep_first_seen_order() {
    init_logging();
    let hierarchy = sheet_hierarchy().await;
    let two = &hierarchy.positions[1];
    let work_groups: Vec<&str> = two.children.iter().map(|w| w.key.as_str()).collect();
    assert_eq!(work_groups, vec!["Engine", "Electrics"]);
    let base_items: Vec<&str> = two.children[0]
        .children
        .iter()
        .map(|b| b.key.as_str())
        .collect();
    assert_eq!(base_items, vec!["Gasket", "Bolt"]);
    let gasket = &two.children[0].children[0];
    let directions: Vec<Direction> = gasket.children.iter().map(|d| d.direction).collect();
    assert_eq!(directions, vec![Direction::Income, Direction::Expense]);
}

#[tokio::test]
async fn every_row_lands_in_exactly_one_leaf() {
    init_logging();
    let hierarchy = sheet_hierarchy().await;
    let mut items: Vec<&str> = hierarchy
        .positions
        .iter()
        .flat_map(|p| p.rows())
        .map(|r| r.item_name.as_str())
        .collect();
    items.sort();
    let mut expected = vec![
        "Piston_ID_1",
        "Gasket_ID_1",
        "Cable_ID_9",
        "Hours",
        "Gasket_ID_2",
        "Piston_ID_2",
        "Bolt",
        "Check",
    ];
    expected.sort();
    assert_eq!(items, expected);

    for position in &hierarchy.positions {
        for row in position.rows() {
            assert_eq!(row.position_number, position.key);
        }
        for work_group in &position.children {
            for row in work_group.rows() {
                assert_eq!(row.work_group, work_group.key);
            }
            for base_item in &work_group.children {
                for direction in &base_item.children {
                    assert!(!direction.rows.is_empty());
                    for row in &direction.rows {
                        assert_eq!(row.transaction_type, direction.direction);
                    }
                }
            }
        }
    }
}

#[tokio::test]
async fn totals_are_consistent_at_every_level() {
    init_logging();
    let hierarchy = sheet_hierarchy().await;
    assert_totals_eq(hierarchy.totals, sum(&hierarchy.positions));
    for position in &hierarchy.positions {
        assert_totals_eq(position.totals, sum(&position.children));
        for work_group in &position.children {
            assert_totals_eq(work_group.totals, sum(&work_group.children));
            for base_item in &work_group.children {
                assert_totals_eq(base_item.totals, sum(&base_item.children));
                let t = base_item.totals;
                assert!(close(t.net_total, t.income_total + t.expense_total));
                assert!(t.expense_total <= 0.0);
            }
        }
    }
    // 4*250 + 2*500 + 5*100 + 1000 income; 3*40 + 300 + 4*75.5 expense; the
    // unpriced bolt contributes nothing.
    assert_totals_eq(hierarchy.totals, Totals::new(3500.0, -722.0));
}

#[tokio::test]
async fn unparsable_price_contributes_zero() {
    init_logging();
    let hierarchy = sheet_hierarchy().await;
    let bolt = hierarchy.positions[1].children[0]
        .children
        .iter()
        .find(|b| b.key == "Bolt")
        .unwrap();
    assert!(bolt.rows().all(|r| r.price.is_nan()));
    assert_eq!(bolt.totals, Totals::new(0.0, 0.0));
}

#[tokio::test]
async fn rebuilding_is_deterministic() {
    init_logging();
    let util = ReceptionHierarchyUtil::default();
    let (first, first_outline) = util.from_string(SHEET).await.unwrap();
    let (second, second_outline) = util.from_string(SHEET).await.unwrap();
    assert_eq!(
        util.to_json(&first).unwrap(),
        util.to_json(&second).unwrap()
    );
    assert_eq!(first_outline, second_outline);
}

#[test]
fn as_stored_expense_sign_keeps_sheet_values() {
    init_logging();
    let config = HierarchyConfig {
        expense_sign: ExpenseSign::AsStored,
        ..HierarchyConfig::default()
    };
    let preview = ReceptionHierarchyUtil::new(config)
        .from_rows(vec![
            row(1, "Repair", "Gasket_ID_1", Direction::Income, 2.0, 500.0),
            row(1, "Repair", "Gasket_ID_2", Direction::Expense, 1.0, 300.0),
        ])
        .unwrap();
    assert_eq!(
        preview.hierarchy().unwrap().totals,
        Totals::new(1000.0, 300.0)
    );
}

#[tokio::test]
async fn config_from_ron_changes_labels_and_delimiter() {
    init_logging();
    let config = HierarchyConfig::from_ron_str(
        r##"(base_item_delimiter: "#", income_label: "In", expense_label: "Out")"##,
    )
    .unwrap();
    let sheet = indoc! {"
        n,d,c,p,s,sd,wg,item,type,q,price
        R-1,,,1,,,W,Seal#1,In,1,10
        R-1,,,1,,,W,Seal#2,Out,1,4
    "};
    let (preview, outline) = ReceptionHierarchyUtil::new(config)
        .from_string(sheet)
        .await
        .unwrap();
    let hierarchy = preview.hierarchy().unwrap();
    assert_eq!(hierarchy.positions[0].children[0].children[0].key, "Seal");
    assert_eq!(hierarchy.totals, Totals::new(10.0, -4.0));
    assert!(outline.contains("↗ In"));
    assert!(outline.contains("↘ Out"));
}

#[tokio::test]
async fn unknown_transaction_type_rows_are_skipped() {
    init_logging();
    let util = ReceptionHierarchyUtil::default();
    let (only_unknown, _) = util
        .from_string("h\nR-1,,,1,,,W,Item,Transfer,1,1\n")
        .await
        .unwrap();
    assert!(only_unknown.is_empty());

    let sheet = indoc! {"
        h
        R-1,,,1,,,W,Seal_ID_1,Transfer,1,99
        R-1,,,1,,,W,Seal_ID_2,Доходы,1,10
    "};
    let (preview, _) = util.from_string(sheet).await.unwrap();
    let hierarchy = preview.hierarchy().unwrap();
    assert_eq!(hierarchy.totals, Totals::new(10.0, 0.0));
    assert_eq!(hierarchy.positions[0].rows().count(), 1);
}

#[test]
fn cancelling_large_amounts_do_not_fail_the_build() {
    init_logging();
    let preview = ReceptionHierarchyUtil::default()
        .from_rows(vec![
            row(1, "A", "Big_ID_1", Direction::Income, 1.0, 1e16),
            row(1, "B", "Small", Direction::Income, 1.0, 1.0),
            row(1, "A", "Big_ID_2", Direction::Income, 1.0, -1e16),
        ])
        .unwrap();
    let position = &preview.hierarchy().unwrap().positions[0];
    assert_eq!(position.children.len(), 2);
    assert_eq!(position.children[1].totals, Totals::new(1.0, 0.0));
    assert!(position.totals.net_total.is_finite());
}

#[tokio::test]
async fn reads_sheet_from_file() {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHEET.as_bytes()).unwrap();
    let util = ReceptionHierarchyUtil::default();
    let (from_file, file_outline) = util.from_file(file.path()).await.unwrap();
    let (from_string, string_outline) = util.from_string(SHEET).await.unwrap();
    assert_eq!(
        util.to_json(&from_file).unwrap(),
        util.to_json(&from_string).unwrap()
    );
    assert_eq!(file_outline, string_outline);
}

#[tokio::test]
async fn missing_file_is_an_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let result = ReceptionHierarchyUtil::default()
        .from_file(dir.path().join("missing.csv"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn outline_respects_expansion_state() {
    init_logging();
    let util = ReceptionHierarchyUtil::default();
    let (preview, expanded) = util.from_string(SHEET).await.unwrap();
    assert!(expanded.contains("Двигатели (4)"));
    assert!(expanded.contains("Piston_ID_1"));

    let mut state = ExpansionState::new();
    state.collapse(NodePath::Position(PositionNumber::Number(10)));
    let outline = util.print(&preview, &state);
    assert!(outline.contains("▸ 10 · Overhaul · Shop 1"));
    assert!(!outline.contains("Piston_ID_1"));
    assert!(outline.contains("Gasket_ID_1"));

    assert!(state.toggle(NodePath::Position(PositionNumber::Number(10))));
    assert_eq!(util.print(&preview, &state), expanded);
}

#[tokio::test]
async fn json_export() {
    init_logging();
    let util = ReceptionHierarchyUtil::default();

    let no_data: serde_json::Value =
        serde_json::from_str(&util.to_json(&ReceptionPreview::NoData).unwrap()).unwrap();
    assert_eq!(no_data["status"], "NoData");

    let (preview, _) = util.from_string(SHEET).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&util.to_json(&preview).unwrap()).unwrap();
    assert_eq!(json["status"], "Data");
    let hierarchy = &json["hierarchy"];
    assert_eq!(hierarchy["header"]["reception_number"], "R-7");
    assert_eq!(hierarchy["positions"][0]["key"], 1);
    assert_eq!(hierarchy["positions"][3]["key"], "Стенд");
    assert_eq!(hierarchy["totals"]["income_total"], 3500.0);
}
