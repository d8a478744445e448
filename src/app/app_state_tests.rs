//! Tests for app_state

use std::time::{Duration, Instant};

use super::*;
use crate::alert::AlertKind;
use crate::api::{ApiPayload, ApiRequest, DashboardStats, StatusFilter};
use crate::test_utils::test_helpers::{FakeWorker, reply, template, test_api};

fn app_on(screen: Screen) -> (App, FakeWorker) {
    let (api, worker) = test_api();
    (App::new(api, &Config::default(), screen), worker)
}

#[test]
fn test_initial_screen_is_mounted_and_loads() {
    let (app, mut worker) = app_on(Screen::Dashboard);
    assert_eq!(app.current_screen(), Screen::Dashboard);
    assert_eq!(
        worker.take_requests(),
        vec![
            ApiRequest::DashboardStats,
            ApiRequest::Notifications(StatusFilter::All)
        ]
    );
}

#[test]
fn test_switching_cancels_previous_screen() {
    let (mut app, mut worker) = app_on(Screen::Dashboard);
    let dashboard_jobs = worker.take_jobs();

    app.switch_to(Screen::Templates);
    assert_eq!(app.current_screen(), Screen::Templates);
    assert!(dashboard_jobs.iter().all(|j| j.cancel_token.is_cancelled()));
    assert_eq!(worker.take_requests(), vec![ApiRequest::Templates]);
}

#[test]
fn test_switching_to_current_screen_keeps_state() {
    let (mut app, mut worker) = app_on(Screen::Compose);
    let jobs = worker.take_jobs();

    app.switch_to(Screen::Compose);
    assert!(worker.take_jobs().is_empty());
    assert!(!jobs[0].cancel_token.is_cancelled());
}

#[test]
fn test_responses_reach_mounted_screen() {
    let (mut app, mut worker) = app_on(Screen::Templates);
    let job = worker.expect_job(|r| *r == ApiRequest::Templates);
    worker
        .responses
        .send(reply(
            &job,
            ApiPayload::Templates(Ok(vec![template(1, "welcome", "Hi", "Body")])),
        ))
        .unwrap();

    app.poll_responses();
    let ActiveScreen::Templates(state) = &app.screen else {
        panic!("templates screen expected");
    };
    assert_eq!(state.templates().len(), 1);
}

#[test]
fn test_reply_for_unmounted_screen_is_ignored() {
    let (mut app, mut worker) = app_on(Screen::Dashboard);
    let stats_job = worker.expect_job(|r| *r == ApiRequest::DashboardStats);
    app.switch_to(Screen::Dashboard);
    app.switch_to(Screen::Compose);
    app.switch_to(Screen::Dashboard);
    worker.take_jobs();

    worker
        .responses
        .send(reply(
            &stats_job,
            ApiPayload::DashboardStats(Ok(DashboardStats {
                total_notifications: 99,
                ..DashboardStats::default()
            })),
        ))
        .unwrap();
    app.poll_responses();

    let ActiveScreen::Dashboard(state) = &app.screen else {
        panic!("dashboard expected");
    };
    assert_eq!(state.stats.total_notifications, 0);
}

#[test]
fn test_worker_loss_shows_toast() {
    let (mut app, worker) = app_on(Screen::Compose);
    drop(worker);

    app.poll_responses();
    assert_eq!(app.toast.message(), Some(WORKER_LOST));
    assert_eq!(app.toast.kind(), Some(AlertKind::Failure));
}

#[test]
fn test_tick_drives_dashboard_refresh() {
    let (mut app, mut worker) = app_on(Screen::Dashboard);
    worker.take_jobs();

    app.tick(Instant::now());
    assert!(worker.take_jobs().is_empty());

    app.tick(Instant::now() + Duration::from_secs(31));
    assert_eq!(worker.take_jobs().len(), 2);
}

#[test]
fn test_screen_names_for_cli() {
    use clap::ValueEnum;
    let names: Vec<String> = Screen::value_variants()
        .iter()
        .filter_map(|s| s.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect();
    assert_eq!(names, vec!["dashboard", "send", "templates"]);
}
