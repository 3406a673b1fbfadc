mod common;

use nutrilens::{
    error::ScreenError,
    model::{user, Session, Token},
    routes::Route,
    screens::{
        about_you::AboutYouForm,
        chat::{ChatScreen, NO_REPLY},
        display::DisplayView,
        upload::{PhotoUpload, UploadState},
    },
    App,
};

async fn signed_in_app(url: &str, dir: &std::path::Path) -> App {
    let app = common::start_app(url, dir);
    app.auth.login(common::PHONE, common::PASSWORD).await.unwrap();
    app
}

fn filled_form() -> AboutYouForm {
    let mut form = AboutYouForm::default();
    form.age = "31".to_owned();
    form.gender = "Male".to_owned();
    form.height = "180".to_owned();
    form
}

#[tokio::test]
async fn chat_appends_reply_or_fallback() {
    let (url, backend) = common::spawn().await;
    let dir = tempfile::tempdir().unwrap();
    let app = common::start_app(&url, dir.path());
    let mut chat = ChatScreen::default();

    chat.input = "   ".to_owned();
    chat.send(app.client()).await;
    assert!(chat.messages().is_empty());

    chat.input = "is kale good?".to_owned();
    chat.send(app.client()).await;
    chat.input = common::BREAK_BOT.to_owned();
    chat.send(app.client()).await;

    let texts: Vec<(&str, bool)> = chat
        .messages()
        .iter()
        .map(|message| (message.text.as_str(), message.is_bot))
        .collect();
    assert_eq!(
        texts,
        vec![
            ("is kale good?", false),
            ("You said: is kale good?", true),
            (common::BREAK_BOT, false),
            (NO_REPLY, true),
        ]
    );
    assert!(chat.input.is_empty());
    assert_eq!(backend.recorded.lock().await.chat_messages.len(), 2);
    app.shutdown().await;
}

#[tokio::test]
async fn upload_reports_progress_and_opens_display() {
    let (url, backend) = common::spawn().await;
    let dir = tempfile::tempdir().unwrap();
    let app = signed_in_app(&url, dir.path()).await;

    let image = dir.path().join("bar.jpg");
    std::fs::write(&image, vec![0xAB; 40_000]).unwrap();

    let mut upload = PhotoUpload::default();
    let progress = upload.progress();
    upload.select(&image).await.unwrap();
    assert_eq!(upload.state(), &UploadState::Selected);

    upload
        .upload(app.auth.current().as_ref(), app.client(), &app.navigator)
        .await
        .unwrap();

    assert_eq!(*progress.borrow(), 1.0);
    assert_eq!(app.navigator.current(), Route::Display);
    let DisplayView::Product(view) = DisplayView::new(upload.response()) else {
        panic!("expected a product view");
    };
    assert_eq!(view.title, "Oat Bar");
    assert_eq!(view.ingredients.len(), 2);
    assert_eq!(view.shopping[0].name, "Rolled oats 1kg");
    assert_eq!(view.shopping[0].store.as_deref(), Some("Corner Grocer"));
    assert_eq!(
        view.links(),
        vec!["https://video.example/oats", "https://shop.example/oats"]
    );

    let recorded = backend.recorded.lock().await;
    let sent = &recorded.uploads[0];
    assert_eq!(sent.user_id, "42");
    assert_eq!(sent.bearer, common::TOKEN);
    assert_eq!(sent.size, 40_000);
    assert!(sent.file_name.starts_with("photo-") && sent.file_name.ends_with(".jpg"));
    drop(recorded);

    // Picking another photo is refused until the screen is cleared.
    assert!(matches!(upload.select(&image).await, Err(ScreenError::Busy)));
    upload.clear();
    assert_eq!(upload.state(), &UploadState::Empty);
    app.shutdown().await;
}

#[tokio::test]
async fn upload_failure_is_shown_not_raised() {
    let (url, _backend) = common::spawn().await;
    let dir = tempfile::tempdir().unwrap();
    let app = common::start_app(&url, dir.path());

    let mut upload = PhotoUpload::default();
    let alert = upload
        .upload(None, app.client(), &app.navigator)
        .await
        .unwrap_err();
    assert_eq!(alert.title, "Upload Failed");
    assert_eq!(upload.state(), &UploadState::Empty);

    let image = dir.path().join("bar.jpg");
    std::fs::write(&image, b"not really a jpeg").unwrap();
    upload.select(&image).await.unwrap();

    let alert = upload
        .upload(None, app.client(), &app.navigator)
        .await
        .unwrap_err();
    assert_eq!(alert.title, "Upload Failed");
    assert!(matches!(upload.state(), UploadState::Failed(_)));
    assert_eq!(*upload.progress().borrow(), 0.0);
    assert_ne!(app.navigator.current(), Route::Display);
    app.shutdown().await;
}

#[tokio::test]
async fn missing_photo_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut upload = PhotoUpload::default();
    let result = upload.select(dir.path().join("nope.jpg")).await;
    assert!(matches!(result, Err(ScreenError::Photo(_))));
}

#[tokio::test]
async fn about_you_saves_preferences() {
    let (url, backend) = common::spawn().await;
    let dir = tempfile::tempdir().unwrap();
    let app = signed_in_app(&url, dir.path()).await;

    let mut form = filled_form();
    form.toggle_allergy("Nuts");
    form.other_allergy = "Kiwi".to_owned();
    form.toggle_disease("Asthma");
    form.select_purpose("Weight Management");

    let alert = form
        .submit(app.auth.current().as_ref(), app.client())
        .await
        .unwrap();
    assert_eq!(alert.title, "Success");

    let recorded = backend.recorded.lock().await;
    let body = &recorded.preferences[0];
    assert_eq!(body["personalInfo"]["height"], "180");
    assert_eq!(body["purpose"], "Weight Management");
    assert_eq!(body["allergies"], serde_json::json!(["Nuts", "Kiwi"]));
    assert_eq!(body["diseases"], serde_json::json!(["Asthma"]));
    drop(recorded);
    app.shutdown().await;
}

#[tokio::test]
async fn about_you_failures_pick_the_right_message() {
    let (url, backend) = common::spawn().await;
    let dir = tempfile::tempdir().unwrap();
    let app = common::start_app(&url, dir.path());
    let form = filled_form();

    let stale = Session::new(
        user::Id::from(42),
        "Aarohi".to_owned(),
        common::PHONE.to_owned(),
        Token::new("expired").unwrap(),
    );
    let rejected = form.submit(Some(&stale), app.client()).await.unwrap_err();
    assert_eq!(rejected.message, "Failed to save your information. Please try again.");

    let signed_out = form.submit(None, app.client()).await.unwrap_err();
    assert_eq!(signed_out.message, "An error occurred while saving your information.");

    let incomplete = AboutYouForm::default()
        .submit(Some(&stale), app.client())
        .await
        .unwrap_err();
    assert_eq!(incomplete.message, "Please fill out all personal information fields.");

    assert!(backend.recorded.lock().await.preferences.is_empty());
    app.shutdown().await;
}
