mod common;

use common::RecordingRunner;
use indexadmin_lib::{
    handle, resolve_targets, Action, ActionFlags, CommandOptions, Diagnostics, Result,
    SubcommandRunner, TargetOptions, TargetSelection, TargetWarning,
};

/// Runner that resolves the forwarded targeting flags like a real
/// subcommand would, recording the outcome.
#[derive(Debug, Default)]
struct ResolvingRunner {
    selections: Vec<(Action, TargetSelection)>,
    warnings: Vec<TargetWarning>,
}

impl Diagnostics for ResolvingRunner {
    fn warning(&mut self, warning: TargetWarning) {
        self.warnings.push(warning);
    }
}

impl SubcommandRunner for ResolvingRunner {
    fn invoke(&mut self, action: Action, options: &CommandOptions) -> Result<()> {
        let selection = resolve_targets(&options.targets, self)?;
        self.selections.push((action, selection));
        Ok(())
    }
}

fn options_with(actions: ActionFlags) -> CommandOptions {
    CommandOptions {
        actions,
        targets: TargetOptions::default(),
    }
}

#[test]
fn list_and_create_both_run_in_order() {
    let mut runner = RecordingRunner::default();
    let options = options_with(ActionFlags {
        list_available: Some(true),
        create: Some(true),
        ..ActionFlags::default()
    });

    handle(&options, &mut runner).expect("both subcommands succeed");
    assert_eq!(runner.invoked, vec![Action::List, Action::Create]);
}

#[test]
fn no_action_flags_succeeds_without_invocations() {
    let mut runner = RecordingRunner::default();
    handle(&CommandOptions::default(), &mut runner).expect("no-op invocation");
    assert!(runner.invoked.is_empty());
}

#[test]
fn prioritized_flags_run_exactly_one_action() {
    let everything = ActionFlags {
        list_available: None,
        create: Some(true),
        update: Some(true),
        drop: Some(true),
        activate: Some(true),
    };

    let mut runner = RecordingRunner::default();
    handle(&options_with(everything), &mut runner).expect("create wins");
    assert_eq!(runner.invoked, vec![Action::Create]);

    let mut without_create = everything;
    without_create.create = None;
    let mut runner = RecordingRunner::default();
    handle(&options_with(without_create), &mut runner).expect("update wins");
    assert_eq!(runner.invoked, vec![Action::Update]);

    let mut without_update = without_create;
    without_update.update = None;
    let mut runner = RecordingRunner::default();
    handle(&options_with(without_update), &mut runner).expect("activate wins");
    assert_eq!(runner.invoked, vec![Action::Activate]);

    let mut drop_only = without_update;
    drop_only.activate = None;
    let mut runner = RecordingRunner::default();
    handle(&options_with(drop_only), &mut runner).expect("drop wins");
    assert_eq!(runner.invoked, vec![Action::Drop]);
}

#[test]
fn flag_present_with_false_value_still_dispatches() {
    let mut runner = RecordingRunner::default();
    let options = options_with(ActionFlags {
        update: Some(false),
        ..ActionFlags::default()
    });

    handle(&options, &mut runner).expect("presence alone selects the action");
    assert_eq!(runner.invoked, vec![Action::Update]);
}

#[test]
fn forwarded_options_reach_the_subcommand_unchanged() {
    let mut runner = ResolvingRunner::default();
    let options = CommandOptions {
        actions: ActionFlags {
            drop: Some(true),
            ..ActionFlags::default()
        },
        targets: TargetOptions {
            names: vec!["products".to_string(), "reviews".to_string()],
            mode: None,
            all: false,
        },
    };

    handle(&options, &mut runner).expect("drop resolves its targets");
    assert_eq!(runner.selections.len(), 1);
    let (action, selection) = &runner.selections[0];
    assert_eq!(*action, Action::Drop);
    assert_eq!(selection.names, vec!["products", "reviews"]);
    assert!(runner.warnings.is_empty());
}

#[test]
fn failing_subcommand_aborts_with_its_error() {
    let mut runner = RecordingRunner::default();
    runner.fail_on.push(Action::Create);
    let options = options_with(ActionFlags {
        list_available: Some(true),
        create: Some(true),
        ..ActionFlags::default()
    });

    let err = handle(&options, &mut runner).expect_err("create fails");
    assert_eq!(err.to_string(), "create failed");
    assert_eq!(runner.invoked, vec![Action::List, Action::Create]);
}
