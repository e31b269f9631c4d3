use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;

use mess_data_maker_rs::config::GenerationConfig;
use mess_data_maker_rs::generator::DatasetBuilder;
use mess_data_maker_rs::menu::MenuSchedule;
use mess_data_maker_rs::report::write_records;

const EXPECTED_HEADER: &str = "date,year,month,day,day_of_week,week_of_year,meal_type,menu_item,\
menu_popularity,weather,temperature_c,is_exam_period,is_festival,is_weekend,is_start_semester,\
is_end_semester,is_monsoon,total_capacity,students_attended,attendance_rate,food_prepared_kg,\
food_consumed_kg,food_wasted_kg,waste_percentage,cost_per_kg_rs,total_cost_rs,waste_cost_rs,\
staff_count,serving_duration_mins,student_satisfaction";

fn week_of_records() -> Vec<mess_data_maker_rs::MealRecord> {
    let config = GenerationConfig {
        end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        ..Default::default()
    };
    let mut builder = DatasetBuilder::new(config, MenuSchedule::new()).unwrap();
    builder.build().unwrap()
}

#[test]
fn test_csv_header_matches_model_schema() {
    let records = week_of_records();

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_records(&path, &records).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();

    assert_eq!(header, EXPECTED_HEADER);
}

#[test]
fn test_csv_row_count_and_first_row() {
    let records = week_of_records();

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_records(&path, &records).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();

    // Header plus one row per record
    assert_eq!(lines.len(), records.len() + 1);

    let first = lines[1];
    assert!(first.starts_with("2024-01-01,2024,1,1,Monday,1,Breakfast,Idli-Sambar,3.9,"));
}

#[test]
fn test_creates_parent_directories() {
    let records = week_of_records();

    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("raw").join("out.csv");
    write_records(&path, &records).unwrap();

    assert!(path.exists());
}

#[test]
fn test_csv_roundtrip_field_values() {
    let records = week_of_records();

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_records(&path, &records).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), records.len());

    for (row, record) in rows.iter().zip(&records) {
        assert_eq!(&row[6], record.meal_type.as_str());
        assert_eq!(&row[7], record.menu_item);
        assert_eq!(row[18].parse::<u32>().unwrap(), record.students_attended);
    }
}
