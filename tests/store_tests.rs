use chrono::NaiveDate;
use jobdesk::db::JobStore;
use jobdesk::models::NewJob;
use jobdesk::utils::date::{parse_display_date, to_display, to_storage};

mod common;
use common::setup_test_db;

fn new_job(worker_id: i64, name: &str, start: &str, end: Option<&str>) -> NewJob {
    NewJob {
        worker_id,
        job_name: name.to_string(),
        payment: 150.0,
        start_date: parse_display_date(start).expect("valid start"),
        end_date: end.map(|e| parse_display_date(e).expect("valid end")),
    }
}

fn open(name: &str) -> JobStore {
    JobStore::open(&setup_test_db(name)).expect("open store")
}

#[test]
fn test_add_then_lookup_returns_the_same_fields() {
    let store = open("store_add_lookup");

    let id = store
        .add_job(&new_job(7, "Paint fence", "01-06-2024", None))
        .unwrap();
    let job = store.get_job(id).unwrap().expect("job exists");

    assert_eq!(job.id, id);
    assert_eq!(job.worker_id, 7);
    assert_eq!(job.job_name, "Paint fence");
    assert_eq!(job.payment, 150.0);
    assert_eq!(to_storage(job.start_date), "2024-06-01");
    assert_eq!(job.end_date, None);
}

#[test]
fn test_edit_changes_only_the_target_row() {
    let store = open("store_edit");
    let a = store.add_job(&new_job(7, "Paint fence", "01-06-2024", None)).unwrap();
    let b = store.add_job(&new_job(8, "Fix roof", "02-06-2024", None)).unwrap();
    let before_b = store.get_job(b).unwrap();

    let changed = store
        .edit_job(a, &new_job(9, "Paint gate", "05-06-2024", Some("07-06-2024")))
        .unwrap();
    assert_eq!(changed, 1);

    let job = store.get_job(a).unwrap().unwrap();
    assert_eq!(job.id, a);
    assert_eq!(job.worker_id, 9);
    assert_eq!(job.job_name, "Paint gate");
    assert_eq!(job.end_date, NaiveDate::from_ymd_opt(2024, 6, 7));
    assert_eq!(store.get_job(b).unwrap(), before_b);
}

#[test]
fn test_delete_and_delete_missing() {
    let store = open("store_delete");
    let id = store.add_job(&new_job(7, "Paint fence", "01-06-2024", None)).unwrap();

    assert_eq!(store.delete_job(id).unwrap(), 1);
    assert!(store.get_job(id).unwrap().is_none());
    assert_eq!(store.delete_job(id).unwrap(), 0);
}

#[test]
fn test_search_by_worker_returns_exactly_that_workers_jobs() {
    let store = open("store_worker");
    let mut expected = Vec::new();
    for (i, worker) in [3, 7, 3, 5, 7, 7].into_iter().enumerate() {
        let id = store
            .add_job(&new_job(worker, &format!("job {i}"), "01-06-2024", None))
            .unwrap();
        if worker == 7 {
            expected.push(id);
        }
    }

    let found: Vec<i64> = store
        .search_jobs_by_worker_id(7)
        .unwrap()
        .into_iter()
        .map(|j| j.id)
        .collect();
    assert_eq!(found, expected);
    assert!(store.search_jobs_by_worker_id(42).unwrap().is_empty());
}

#[test]
fn test_task_search_by_substring() {
    let store = open("store_tasks");
    store
        .conn()
        .execute_batch(
            "INSERT INTO tasks (task_name, description) VALUES
                ('Paint shed', 'two coats'),
                ('Weld gate', NULL),
                ('Repaint door', NULL);",
        )
        .unwrap();

    assert_eq!(store.search_task_by_name("").unwrap().len(), 3);

    let names: Vec<String> = store
        .search_task_by_name("aint")
        .unwrap()
        .into_iter()
        .map(|t| t.task_name)
        .collect();
    assert_eq!(names, vec!["Paint shed", "Repaint door"]);

    // SQLite LIKE ignores ASCII case
    assert_eq!(store.search_task_by_name("WELD").unwrap().len(), 1);
    assert!(store.search_task_by_name("plaster").unwrap().is_empty());
}

#[test]
fn test_stored_dates_survive_the_form_round_trip() {
    let store = open("store_round_trip");
    let id = store
        .add_job(&new_job(7, "Paint fence", "29-02-2024", Some("01-03-2024")))
        .unwrap();
    let job = store.get_job(id).unwrap().unwrap();

    let start = parse_display_date(&to_display(job.start_date)).unwrap();
    let end = parse_display_date(&to_display(job.end_date.unwrap())).unwrap();
    assert_eq!(to_storage(start), "2024-02-29");
    assert_eq!(to_storage(end), "2024-03-01");
}

#[test]
fn test_data_survives_close_and_reopen() {
    let path = setup_test_db("store_reopen");
    let store = JobStore::open(&path).unwrap();
    store.add_job(&new_job(7, "Paint fence", "01-06-2024", None)).unwrap();
    store.close().unwrap();

    let reopened = JobStore::open(&path).unwrap();
    assert_eq!(reopened.list_all_jobs().unwrap().len(), 1);
}
