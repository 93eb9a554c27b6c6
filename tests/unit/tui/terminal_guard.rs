use super::*;
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<(&'static str, TerminalMode)>>>;

#[derive(Default)]
struct Recorder {
    log: Log,
    fail_on: Option<TerminalMode>,
}

impl TerminalModes for Recorder {
    fn enter(&mut self, mode: TerminalMode) -> io::Result<()> {
        if self.fail_on == Some(mode) {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        self.log.borrow_mut().push(("enter", mode));
        Ok(())
    }

    fn leave(&mut self, mode: TerminalMode) -> io::Result<()> {
        self.log.borrow_mut().push(("leave", mode));
        if self.fail_on == Some(mode) {
            return Err(io::Error::new(io::ErrorKind::Other, "stuck"));
        }
        Ok(())
    }
}

fn left(log: &Log) -> Vec<TerminalMode> {
    log.borrow()
        .iter()
        .filter(|(op, _)| *op == "leave")
        .map(|(_, mode)| *mode)
        .collect()
}

#[test]
fn modes_are_left_in_reverse_on_drop() {
    let log = Log::default();
    {
        let _guard = TerminalGuard::with_modes(Recorder {
            log: log.clone(),
            fail_on: None,
        })
        .unwrap();
        assert_eq!(log.borrow().len(), MODES.len());
    }

    let mut expected = MODES.to_vec();
    expected.reverse();
    assert_eq!(left(&log), expected);
}

#[test]
fn restore_runs_once() {
    let log = Log::default();
    let mut guard = TerminalGuard::with_modes(Recorder {
        log: log.clone(),
        fail_on: None,
    })
    .unwrap();

    guard.restore().unwrap();
    guard.restore().unwrap();
    drop(guard);

    assert_eq!(left(&log).len(), MODES.len());
}

#[test]
fn failed_setup_leaves_what_was_entered() {
    let log = Log::default();
    let result = TerminalGuard::with_modes(Recorder {
        log: log.clone(),
        fail_on: Some(TerminalMode::MouseCapture),
    });

    assert!(result.is_err());
    assert_eq!(
        left(&log),
        vec![TerminalMode::AlternateScreen, TerminalMode::RawInput]
    );
}

#[test]
fn restore_continues_past_a_failing_mode() {
    let log = Log::default();
    let mut guard = TerminalGuard::with_modes(Recorder {
        log: log.clone(),
        fail_on: None,
    })
    .unwrap();
    guard.modes.fail_on = Some(TerminalMode::FocusReports);

    assert!(guard.restore().is_err());
    assert_eq!(left(&log).len(), MODES.len());
}

#[test]
fn pending_reports_the_recorded_signal() {
    let signals = TerminationSignals {
        raised: Arc::new(AtomicUsize::new(0)),
    };
    assert_eq!(signals.pending(), None);

    signals.raised.store(RAISED_TERMINATE, Ordering::SeqCst);
    assert_eq!(signals.pending(), Some(TerminationSignal::Terminate));
}

#[test]
fn signal_exit_codes_follow_shell_convention() {
    assert_eq!(TerminationSignal::Interrupt.exit_code(), 130);
    assert_eq!(TerminationSignal::Terminate.exit_code(), 143);
}
