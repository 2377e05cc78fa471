use super::*;
use crate::{
    feedback::FEEDBACK_HIDE_AFTER,
    test_support::{rejected, RecordingPage, ScriptedService, CHESS_ONLY, THREE_ACTIVITIES},
    view::Feedback,
};

fn controller(service: &Arc<ScriptedService>, page: &Arc<RecordingPage>) -> PortalController {
    PortalController::new(service.clone(), page.views(), FEEDBACK_HIDE_AFTER)
}

#[tokio::test(start_paused = true)]
async fn start_shows_loading_then_the_directory() {
    let service = ScriptedService::new();
    service.push_directory(THREE_ACTIVITIES);
    let page = RecordingPage::new();

    let status = controller(&service, &page).start().await;

    assert_eq!(status, RefreshStatus::Rendered { activities: 3 });
    let state = page.state();
    assert_eq!(state.list_replacements, 2);
    assert!(matches!(state.list, ListContent::Cards(ref cards) if cards.len() == 3));
}

#[tokio::test(start_paused = true)]
async fn accepted_signup_does_not_refetch_the_directory() {
    let service = ScriptedService::new();
    service.push_directory(CHESS_ONLY);
    service.push_reply(Duration::ZERO, Ok("Signed up".to_string()));
    let page = RecordingPage::new();
    let controller = controller(&service, &page);

    controller.start().await;
    page.fill_form("b@x.com", "Chess Club");
    let outcome = controller.submit_enrollment("b@x.com", "Chess Club").await;

    assert!(outcome.is_accepted());
    let state = page.state();
    assert_eq!(state.list_replacements, 2);
    match &state.list {
        ListContent::Cards(cards) => assert_eq!(cards[0].spots_left, 9),
        other => panic!("expected cards, got {other:?}"),
    }
    assert_eq!(state.email, "");
    assert_eq!(state.message, Some(Feedback::success("Signed up")));
}

#[tokio::test(start_paused = true)]
async fn rejected_signup_keeps_form_and_directory() {
    let service = ScriptedService::new();
    service.push_directory(CHESS_ONLY);
    service.push_reply(Duration::ZERO, Err(rejected(400, Some("Activity full"))));
    let page = RecordingPage::new();
    let controller = controller(&service, &page);

    controller.start().await;
    page.fill_form("b@x.com", "Chess Club");
    controller.submit_enrollment("b@x.com", "Chess Club").await;

    assert_eq!(page.visible_message(), Some(Feedback::error("Activity full")));
    let state = page.state();
    assert_eq!(state.email, "b@x.com");
    assert_eq!(state.selected_activity, "Chess Club");
}

#[tokio::test(start_paused = true)]
async fn refresh_and_submission_can_overlap() {
    let service = ScriptedService::new();
    service.push_directory(CHESS_ONLY);
    service.push_reply(Duration::from_millis(300), Ok("Signed up".to_string()));
    let page = RecordingPage::new();
    let controller = Arc::new(controller(&service, &page));

    let submit = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.submit_enrollment("b@x.com", "Chess Club").await })
    };
    let status = controller.refresh_directory().await;
    let outcome = submit.await.expect("submission task");

    assert_eq!(status, RefreshStatus::Rendered { activities: 1 });
    assert!(outcome.is_accepted());
}

#[tokio::test(start_paused = true)]
async fn withdraw_goes_through_the_unregister_call() {
    let service = ScriptedService::new();
    service.push_reply(Duration::ZERO, Err(rejected(400, Some("Student is not registered"))));
    let page = RecordingPage::new();

    let outcome = controller(&service, &page)
        .withdraw_enrollment("nobody@x.com", "Chess Club")
        .await;

    assert_eq!(outcome.message(), "Student is not registered");
    assert_eq!(
        service.calls()[0].action,
        shared::protocol::EnrollmentAction::Unregister
    );
}
