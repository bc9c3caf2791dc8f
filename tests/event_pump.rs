use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use inputbridge::config::PumpSettings;
use inputbridge::envelope::{Envelope, EnvelopeKind};
use inputbridge::event::{DeviceId, EventType, GamepadAxis, GamepadButton, NativeEvent};
use inputbridge::pump::{BackendError, EventPump, NativeBackend, PumpError};
use tokio::sync::mpsc;

const TIMEOUT: Duration = Duration::from_secs(5);
const RECORDED_POLLS: usize = 1000;

#[derive(Default)]
struct Script {
    events: VecDeque<NativeEvent>,
    opened: Vec<DeviceId>,
    closed: Vec<DeviceId>,
    poll_count: usize,
    // (when, whether an event was returned), first RECORDED_POLLS calls only
    polls: Vec<(Instant, bool)>,
    delays: Vec<Duration>,
}

#[derive(Clone, Default)]
struct SharedScript(Arc<Mutex<Script>>);

impl SharedScript {
    fn with_events(events: impl IntoIterator<Item = NativeEvent>) -> Self {
        let script = Self::default();
        script.lock().events.extend(events);
        script
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.0.lock().unwrap()
    }

    fn push(&self, event: NativeEvent) {
        self.lock().events.push_back(event);
    }

    fn init(&self) -> impl FnOnce() -> Result<ScriptedBackend, BackendError> + Send + 'static {
        let script = self.clone();
        move || Ok(ScriptedBackend { script })
    }

    fn wait_for_polls(&self, count: usize) {
        let deadline = Instant::now() + TIMEOUT;
        while self.lock().poll_count < count {
            assert!(Instant::now() < deadline, "backend was not polled {count} times");
            thread::sleep(Duration::from_millis(1));
        }
    }
}

struct ScriptedBackend {
    script: SharedScript,
}

impl NativeBackend for ScriptedBackend {
    type Gamepad = DeviceId;

    fn poll_event(&mut self) -> Option<NativeEvent> {
        let mut script = self.script.lock();
        let event = script.events.pop_front();
        script.poll_count += 1;
        if script.polls.len() < RECORDED_POLLS {
            script.polls.push((Instant::now(), event.is_some()));
        }
        event
    }

    fn open_gamepad(&mut self, which: DeviceId) -> DeviceId {
        self.script.lock().opened.push(which);
        which
    }

    fn close_gamepad(&mut self, gamepad: DeviceId) {
        self.script.lock().closed.push(gamepad);
    }

    fn delay(&mut self, duration: Duration) {
        self.script.lock().delays.push(duration);
        thread::sleep(duration);
    }
}

fn settings(event_delay_ms: u64) -> PumpSettings {
    PumpSettings {
        event_delay_ms,
        ..PumpSettings::default()
    }
}

fn recv_n(rx: &mut mpsc::UnboundedReceiver<Envelope>, n: usize) -> Vec<Envelope> {
    let deadline = Instant::now() + TIMEOUT;
    let mut received = Vec::with_capacity(n);
    while received.len() < n {
        match rx.try_recv() {
            Ok(envelope) => received.push(envelope),
            Err(_) => {
                assert!(Instant::now() < deadline, "only {} of {n} envelopes arrived", received.len());
                thread::sleep(Duration::from_millis(1));
            }
        }
    }
    received
}

#[test]
fn forwards_every_event_in_order() {
    let events = vec![
        NativeEvent::gamepad_added(0),
        NativeEvent::common(EventType::WINDOW_SHOWN),
        NativeEvent::gamepad_button(0, GamepadButton::South, true),
        NativeEvent::gamepad_axis(0, GamepadAxis::LeftTrigger, 20000),
        NativeEvent::gamepad_button(0, GamepadButton::South, false),
        NativeEvent::common(EventType::QUIT),
    ];
    let script = SharedScript::with_events(events.clone());
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(1));

    pump.start(script.init(), tx).unwrap();
    let received = recv_n(&mut rx, events.len());

    let kinds: Vec<EnvelopeKind> = received.iter().map(Envelope::kind).collect();
    assert_eq!(
        kinds,
        vec![
            EnvelopeKind::Device,
            EnvelopeKind::Generic,
            EnvelopeKind::Button,
            EnvelopeKind::Axis,
            EnvelopeKind::Button,
            EnvelopeKind::Generic,
        ]
    );
    for (envelope, record) in received.iter().zip(&events) {
        assert_eq!(envelope.data(), record);
        assert_eq!(envelope.event_type(), record.event_type);
    }

    // Events arriving later are picked up by a later pass.
    script.push(NativeEvent::gamepad_removed(0));
    let late = recv_n(&mut rx, 1);
    assert_eq!(late[0].event_type(), EventType::GAMEPAD_REMOVED);

    pump.stop();
    pump.wait().unwrap();
    assert!(rx.try_recv().is_err());
    assert_eq!(script.lock().opened, vec![0]);
    assert_eq!(script.lock().closed, vec![0]);
}

#[test]
fn gamepads_left_open_are_closed_once_on_shutdown() {
    let script = SharedScript::with_events([
        NativeEvent::gamepad_added(1),
        NativeEvent::gamepad_added(2),
        NativeEvent::gamepad_removed(1),
    ]);
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(1));

    pump.start(script.init(), tx).unwrap();
    recv_n(&mut rx, 3);
    assert_eq!(script.lock().closed, vec![1]);

    pump.stop();
    pump.wait().unwrap();
    assert_eq!(script.lock().closed, vec![1, 2]);
}

#[test]
fn second_start_is_rejected_while_running() {
    let script = SharedScript::default();
    let (tx, _rx) = mpsc::unbounded_channel::<Envelope>();
    let (tx2, _rx2) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(1));

    pump.start(script.init(), tx).unwrap();
    assert!(pump.is_running());
    assert!(matches!(
        pump.start(script.init(), tx2),
        Err(PumpError::AlreadyRunning)
    ));
    assert!(pump.is_running());

    pump.stop();
    pump.wait().unwrap();
    assert!(!pump.is_running());
}

#[test]
fn stopped_pump_can_start_again() {
    let script = SharedScript::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(1));

    pump.start(script.init(), tx.clone()).unwrap();
    pump.stop();
    pump.wait().unwrap();

    script.push(NativeEvent::common(EventType::KEY_DOWN));
    pump.start(script.init(), tx).unwrap();
    assert_eq!(recv_n(&mut rx, 1)[0].event_type(), EventType::KEY_DOWN);
}

#[test]
fn failed_init_does_not_start_the_loop() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(1));

    let result = pump.start(
        || -> Result<ScriptedBackend, BackendError> {
            Err(BackendError::InitializationError("no devices subsystem".into()))
        },
        tx,
    );

    assert!(matches!(result, Err(PumpError::BackendError(_))));
    assert!(!pump.is_running());
    assert!(rx.try_recv().is_err());
    pump.wait().unwrap();
}

#[test]
fn stop_returns_within_one_idle_delay() {
    let delay = Duration::from_millis(100);
    let script = SharedScript::default();
    let (tx, _rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(100));

    pump.start(script.init(), tx).unwrap();
    script.wait_for_polls(1);

    let started = Instant::now();
    pump.stop();
    pump.wait().unwrap();
    // Polls are instant here, so a single idle delay bounds the wait.
    assert!(started.elapsed() < delay + Duration::from_millis(400));
}

#[test]
fn idle_delay_separates_drain_passes() {
    let delay = Duration::from_millis(20);
    let script = SharedScript::with_events([NativeEvent::common(EventType::KEY_DOWN)]);
    let (tx, _rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(20));

    pump.start(script.init(), tx).unwrap();
    script.wait_for_polls(4);
    pump.stop();
    pump.wait().unwrap();

    let script = script.lock();
    assert!(script.delays.iter().all(|d| *d == delay));
    // A pass ends with the poll that came back empty; the next poll starts
    // the next pass.
    let gaps: Vec<Duration> = script
        .polls
        .windows(2)
        .filter(|pair| !pair[0].1)
        .map(|pair| pair[1].0 - pair[0].0)
        .collect();
    assert!(!gaps.is_empty());
    assert!(gaps.iter().all(|gap| *gap >= delay), "{gaps:?}");
}

#[test]
fn zero_delay_polls_continuously() {
    let script = SharedScript::default();
    let (tx, _rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(0));

    pump.start(script.init(), tx).unwrap();
    script.wait_for_polls(100);
    pump.stop();
    pump.wait().unwrap();

    assert!(script.lock().delays.is_empty());
}

#[test]
fn event_delay_changes_apply_to_later_passes() {
    let script = SharedScript::default();
    let (tx, _rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(0));
    assert_eq!(pump.event_delay(), Duration::ZERO);

    pump.start(script.init(), tx).unwrap();
    script.wait_for_polls(10);
    pump.set_event_delay(Duration::from_millis(5));
    assert_eq!(pump.event_delay(), Duration::from_millis(5));

    let deadline = Instant::now() + TIMEOUT;
    while script.lock().delays.len() < 2 {
        assert!(Instant::now() < deadline, "new delay never applied");
        thread::sleep(Duration::from_millis(1));
    }
    pump.stop();
    pump.wait().unwrap();

    assert!(script
        .lock()
        .delays
        .iter()
        .all(|d| *d == Duration::from_millis(5)));
}

#[test]
fn closed_host_queue_ends_the_pump() {
    let script = SharedScript::with_events([NativeEvent::gamepad_added(3)]);
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(1));

    pump.start(script.init(), tx).unwrap();
    recv_n(&mut rx, 1);
    drop(rx);

    let deadline = Instant::now() + TIMEOUT;
    while pump.is_running() {
        assert!(Instant::now() < deadline, "pump kept running without a host");
        thread::sleep(Duration::from_millis(1));
    }
    pump.wait().unwrap();
    assert_eq!(script.lock().closed, vec![3]);
}

#[test]
fn dropping_the_pump_stops_it() {
    let script = SharedScript::with_events([NativeEvent::gamepad_added(4)]);
    let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();
    let mut pump = EventPump::new(settings(1));

    pump.start(script.init(), tx).unwrap();
    recv_n(&mut rx, 1);
    drop(pump);

    assert_eq!(script.lock().closed, vec![4]);
}
