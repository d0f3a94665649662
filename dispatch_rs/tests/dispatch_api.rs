//! Public API behaviour of the dispatcher, driven the way a host program would.

use std::cell::RefCell;
use std::rc::Rc;

use cli_dispatch::convert::{to_double, to_integer};
use cli_dispatch::{
    Argument, Command, ConvertErrorKind, Dispatcher, ParseOutcome, ScanError, Slot,
};

type Calls = Rc<RefCell<Vec<Option<String>>>>;

fn recording_command(key: &str, calls: &Calls) -> Command {
    let calls = Rc::clone(calls);
    Command::new(key, move |value| {
        calls.borrow_mut().push(value.map(String::from))
    })
}

// ============================================
// Commands
// ============================================

mod commands {
    use super::*;

    #[test]
    fn valueless_command_fires_once_without_value() {
        let calls: Calls = Rc::default();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_command(recording_command("status", &calls))
            .unwrap();

        let outcome = dispatcher.parse(&["prog", "status"]).unwrap();
        assert_eq!(outcome, ParseOutcome::Continue);
        assert_eq!(*calls.borrow(), vec![None]);
    }

    #[test]
    fn required_value_is_forwarded() {
        let calls: Calls = Rc::default();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_command(recording_command("hello", &calls).with_required_value("Name"))
            .unwrap();

        dispatcher.parse(&["prog", "hello", "world"]).unwrap();
        assert_eq!(*calls.borrow(), vec![Some("world".to_string())]);
    }

    #[test]
    fn missing_required_value_fails_without_callback() {
        let calls: Calls = Rc::default();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_command(recording_command("hello", &calls).with_required_value("Name"))
            .unwrap();

        let err = dispatcher.parse(&["prog", "hello"]).unwrap_err();
        assert_eq!(
            err.failures,
            vec![ScanError::MissingCommandValue {
                key: "hello".into(),
                value_name: "Name".into(),
            }]
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn command_token_is_not_taken_as_value() {
        let hello: Calls = Rc::default();
        let square: Calls = Rc::default();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_command(recording_command("hello", &hello).with_required_value("Name"))
            .unwrap();
        dispatcher
            .add_command(recording_command("square", &square).with_required_value("Number"))
            .unwrap();

        dispatcher.parse(&["prog", "hello", "square", "3"]).unwrap();
        assert_eq!(*hello.borrow(), vec![None]);
        assert_eq!(*square.borrow(), vec![Some("3".to_string())]);
    }
}

// ============================================
// Arguments
// ============================================

mod arguments {
    use super::*;

    #[test]
    fn integer_destination_receives_value() {
        let count = Slot::new(0i64);
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_argument(
                Argument::new("--count", count.clone())
                    .short("-c")
                    .with_required_value("Number"),
            )
            .unwrap();

        dispatcher.parse(&["prog", "--count", "5"]).unwrap();
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn valueless_argument_sets_flag_and_consumes_nothing() {
        let version = Slot::new(false);
        let calls: Calls = Rc::default();
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_argument(Argument::new("--version", version.clone()).short("-v"))
            .unwrap();
        dispatcher
            .add_command(recording_command("status", &calls))
            .unwrap();

        dispatcher.parse(&["prog", "--version", "status"]).unwrap();
        assert!(version.get());
        assert_eq!(*calls.borrow(), vec![None]);
    }

    #[test]
    fn string_destination_owns_a_copy() {
        let output: Slot<Option<String>> = Slot::new(None);
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_argument(Argument::new("--output", output.clone()).with_required_value("File"))
            .unwrap();

        let tokens = vec!["prog".to_string(), "--output".to_string(), "out.txt".to_string()];
        dispatcher.parse(&tokens).unwrap();
        drop(tokens);
        assert_eq!(output.get(), Some("out.txt".to_string()));
    }

    #[test]
    fn float_destination_receives_value() {
        let ratio = Slot::new(1.0f64);
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_argument(Argument::new("--ratio", ratio.clone()).with_required_value("R"))
            .unwrap();

        dispatcher.parse(&["prog", "--ratio", "0.5"]).unwrap();
        assert_eq!(ratio.get(), 0.5);
    }

    #[test]
    fn non_ascii_float_value_is_a_conversion_failure() {
        let ratio = Slot::new(1.0f64);
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .add_argument(Argument::new("--ratio", ratio.clone()).with_required_value("R"))
            .unwrap();

        let err = dispatcher.parse(&["prog", "--ratio", "a€"]).unwrap_err();
        match err.failures.as_slice() {
            [ScanError::Conversion { key, source }] => {
                assert_eq!(key, "--ratio");
                assert_eq!(source.kind, ConvertErrorKind::Invalid);
                assert_eq!(source.input, "a€");
            }
            other => panic!("unexpected failures: {other:?}"),
        }
        assert_eq!(ratio.get(), 1.0);
    }

    #[test]
    fn help_stops_later_flags() {
        let version = Slot::new(false);
        let mut dispatcher = Dispatcher::new();
        dispatcher.generate_help().unwrap();
        dispatcher
            .add_argument(Argument::new("--version", version.clone()).short("-v"))
            .unwrap();

        let outcome = dispatcher.parse(&["prog", "-h", "--version"]).unwrap();
        let ParseOutcome::Exit(exit) = outcome else {
            panic!("expected an exit request");
        };
        assert_eq!(exit.code, 0);
        assert!(exit.message.contains("--version"));
        assert!(!version.get());
    }
}

// ============================================
// Lifecycle
// ============================================

mod lifecycle {
    use super::*;

    #[test]
    fn free_all_then_init_admits_new_registrations() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.add_command(Command::new("hello", |_| {})).unwrap();
        dispatcher
            .add_argument(Argument::new("--version", Slot::new(false)))
            .unwrap();

        dispatcher.free_all();
        assert!(dispatcher.commands().is_empty());
        assert!(dispatcher.arguments().is_empty());

        dispatcher.init();
        assert!(dispatcher.commands().is_empty());
        dispatcher.add_command(Command::new("hello", |_| {})).unwrap();
        assert_eq!(dispatcher.commands().len(), 1);
    }

    #[test]
    fn dispatchers_are_independent() {
        let mut first = Dispatcher::new();
        let second = Dispatcher::new();
        first.add_command(Command::new("hello", |_| {})).unwrap();
        assert_eq!(first.commands().len(), 1);
        assert!(second.commands().is_empty());
    }
}

// ============================================
// Converters
// ============================================

mod converters {
    use super::*;

    #[test]
    fn integer_conversion_signals_failures() {
        assert_eq!(to_integer("42"), Ok(42));
        assert!(to_integer("abc").is_err());
        assert!(to_integer("42x").is_err());
        assert_eq!(
            to_integer("999999999999999999999").unwrap_err().kind,
            ConvertErrorKind::OutOfRange
        );
    }

    #[test]
    fn double_conversion_signals_failures() {
        assert!((to_double("2.75").unwrap() - 2.75).abs() < 1e-12);
        assert!(to_double("").is_err());
        assert_eq!(to_double("inф").unwrap_err().kind, ConvertErrorKind::Invalid);
    }
}
