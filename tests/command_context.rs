use civic_tracker::cli::commands::{CommandContext, list, status, submit};
use civic_tracker::cli::{ListArgs, SubmitArgs};
use civic_tracker::config::Config;
use civic_tracker::storage::BackendKind;
use civic_lib::Status;

fn memory_config() -> Config {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut config = Config::defaults(dir.path());
    config.backend = BackendKind::Memory;
    config
}

fn memory_context() -> CommandContext {
    CommandContext::with_config(memory_config(), true, false).expect("open memory store")
}

fn pothole() -> SubmitArgs {
    SubmitArgs {
        title: "Pothole".to_string(),
        description: "Deep".to_string(),
        location: "Main St".to_string(),
        category: "pothole".to_string(),
        image: None,
    }
}

#[test]
fn test_commands_share_one_session() {
    let mut ctx = memory_context();
    submit::execute(&pothole(), &mut ctx).expect("submit");

    let id = ctx.session.store().issues()[0].id;
    status::execute(id, &mut ctx).expect("status");
    assert_eq!(ctx.session.store().get(id).map(|i| i.status), Some(Status::InProgress));

    let args = ListArgs {
        search: "main".to_string(),
        ..Default::default()
    };
    list::execute(&args, &mut ctx).expect("list");
    assert_eq!(ctx.session.filter().query, "main");
    assert_eq!(ctx.session.counters().in_progress, 1);
}

#[test]
fn test_invalid_submission_leaves_store_empty() {
    let mut ctx = memory_context();
    let err = submit::execute(&SubmitArgs::default(), &mut ctx).unwrap_err();
    assert!(err.to_string().contains("cannot be empty"));
    assert!(ctx.session.store().is_empty());
}

#[test]
fn test_out_of_range_notice_seconds_do_not_panic() {
    for secs in [10_i64.pow(16), 9 * 10_i64.pow(12), i64::MAX] {
        let mut config = memory_config();
        config.notice_seconds = secs;
        let mut ctx = CommandContext::with_config(config, true, false).expect("open memory store");
        submit::execute(&pothole(), &mut ctx).expect("submit");
        assert_eq!(ctx.session.store().len(), 1);
    }
}
