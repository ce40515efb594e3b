use feito::model::{Task, TaskStatus};
use feito::store::{self, StatusFilter};

fn tasks(n: usize) -> Vec<Task> {
    (1..=n)
        .map(|i| Task::new(&format!("Task {:02}", i), "2026-01-01"))
        .collect()
}

#[test]
fn test_pages_slice_insertion_order() {
    let list = tasks(25);

    let (rows, info) = store::view(&list, "", StatusFilter::All, 1, 10);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].name, "Task 01");
    assert_eq!(rows[9].name, "Task 10");
    assert_eq!(info.total_pages, 3);
    assert!(!info.has_prev);
    assert!(info.has_next);

    let (rows, info) = store::view(&list, "", StatusFilter::All, 3, 10);
    assert_eq!(rows.len(), 5, "the last page holds the remainder");
    assert_eq!(rows[0].name, "Task 21");
    assert_eq!(rows[4].name, "Task 25");
    assert!(info.has_prev);
    assert!(!info.has_next);
}

#[test]
fn test_empty_list_has_zero_pages() {
    let list = tasks(0);
    let (rows, info) = store::view(&list, "", StatusFilter::All, 1, 10);
    assert!(rows.is_empty());
    assert_eq!(info.total_pages, 0);
    assert!(!info.has_prev);
    assert!(!info.has_next);
}

#[test]
fn test_page_past_the_end_is_empty_but_not_an_error() {
    let list = tasks(5);
    let (rows, info) = store::view(&list, "", StatusFilter::All, 9, 10);
    assert!(rows.is_empty());
    assert_eq!(info.current_page, 9);
    assert!(info.has_prev);
    assert!(!info.has_next);
}

#[test]
fn test_name_filter_is_case_insensitive_contains() {
    let list = vec![
        Task::new("Buy Milk", "2026-01-01"),
        Task::new("buy bread", "2026-01-02"),
        Task::new("Call mom", "2026-01-03"),
    ];
    let (rows, _) = store::view(&list, "BUY", StatusFilter::All, 1, 10);
    let names: Vec<&str> = rows.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Buy Milk", "buy bread"]);
}

#[test]
fn test_status_and_text_filters_compose() {
    let mut list = vec![
        Task::new("Buy milk", "2026-01-01"),
        Task::new("Buy bread", "2026-01-02"),
        Task::new("Call mom", "2026-01-03"),
    ];
    list[0].status = TaskStatus::Done;

    let (rows, _) = store::view(&list, "buy", StatusFilter::Pending, 1, 10);
    let names: Vec<&str> = rows.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Buy bread"]);
}

#[test]
fn test_status_filter_done_only() {
    let mut list = tasks(4);
    list[1].status = TaskStatus::Done;
    list[3].status = TaskStatus::Done;

    let (rows, _) = store::view(&list, "", StatusFilter::Done, 1, 10);
    let names: Vec<&str> = rows.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Task 02", "Task 04"]);
}

#[test]
fn test_active_filter_bypasses_pagination() {
    let list = tasks(25);
    // Every name matches, so the filtered view shows all 25 at once.
    let (rows, _) = store::view(&list, "task", StatusFilter::All, 1, 10);
    assert_eq!(rows.len(), 25);
}

#[test]
fn test_filter_matches_regardless_of_current_page() {
    let mut list = tasks(25);
    list.push(Task::new("Needle", "2026-06-06"));

    // The match lives on page 3; the view is parked on page 1.
    let (rows, _) = store::view(&list, "needle", StatusFilter::All, 1, 10);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Needle");
}

#[test]
fn test_pagination_readout_reflects_the_unfiltered_list_while_filtering() {
    let list = tasks(25);
    let (rows, info) = store::view(&list, "Task 01", StatusFilter::All, 1, 10);
    assert_eq!(rows.len(), 1);
    assert_eq!(info.total_pages, 3, "page count tracks the full list");
}

#[test]
fn test_page_info_boundaries() {
    assert_eq!(store::page_info(10, 1, 10).total_pages, 1);
    assert!(!store::page_info(10, 1, 10).has_next);
    assert_eq!(store::page_info(11, 1, 10).total_pages, 2);
    assert!(store::page_info(11, 1, 10).has_next);
    assert_eq!(store::page_info(0, 1, 10).total_pages, 0);
}

#[test]
fn test_view_indices_point_into_the_master_list() {
    let mut list = tasks(12);
    list[11].status = TaskStatus::Done;

    let (indices, _) = store::view_indices(&list, "", StatusFilter::Done, 1, 10);
    assert_eq!(indices, [11], "indices refer to master positions, not view rows");
}
