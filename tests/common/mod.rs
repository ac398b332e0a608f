// Shared mock UI and log capture for the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Mutex, Once};

use bindable::{ActivationHandler, Button, DataSource, UiRoot};

#[derive(Default)]
pub struct MockButton {
    name: String,
    handlers: RefCell<Vec<ActivationHandler>>,
}

impl MockButton {
    pub fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            handlers: RefCell::new(Vec::new()),
        })
    }

    /// Run every subscribed handler once, like a user click.
    pub fn click(&self) {
        let mut handlers = self.handlers.take();
        for handler in handlers.iter_mut() {
            handler();
        }
        // Handlers subscribed while clicking are kept after the existing ones.
        handlers.append(&mut self.handlers.borrow_mut());
        *self.handlers.borrow_mut() = handlers;
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl Button for MockButton {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_activate(&self, handler: ActivationHandler) {
        self.handlers.borrow_mut().push(handler);
    }
}

#[derive(Default)]
pub struct MockRoot {
    buttons: Vec<Rc<MockButton>>,
    data_source: RefCell<Option<DataSource>>,
    lookups: Cell<usize>,
}

impl MockRoot {
    pub fn with_buttons(names: &[&str]) -> Self {
        Self {
            buttons: names.iter().map(|name| MockButton::new(name)).collect(),
            ..Self::default()
        }
    }

    pub fn button(&self, name: &str) -> Rc<MockButton> {
        self.buttons
            .iter()
            .find(|b| b.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("no mock button {name}"))
    }

    pub fn data_source(&self) -> Option<DataSource> {
        self.data_source.borrow().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl UiRoot for MockRoot {
    fn set_data_source(&self, source: DataSource) {
        *self.data_source.borrow_mut() = Some(source);
    }

    fn find_button(&self, name: &str) -> Option<Rc<dyn Button>> {
        self.lookups.set(self.lookups.get() + 1);
        self.buttons
            .iter()
            .find(|b| b.name == name)
            .map(|b| Rc::clone(b) as Rc<dyn Button>)
    }
}

/// Records formatted log lines so tests can assert on warnings.
pub struct CaptureLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

pub fn capture_logs() -> &'static CaptureLogger {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(log::LevelFilter::Trace);
    });
    &LOGGER
}

impl CaptureLogger {
    /// Warnings whose message contains `needle`.
    pub fn warnings_containing(&self, needle: &str) -> Vec<String> {
        self.records
            .lock()
            .map(|records| {
                records
                    .iter()
                    .filter(|(level, message)| *level == log::Level::Warn && message.contains(needle))
                    .map(|(_, message)| message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}
