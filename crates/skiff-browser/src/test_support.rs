//! Recording renderer for controller and bridge tests.

use std::cell::RefCell;
use std::rc::Rc;

use skiff_common::{InputCommand, MountToken, Renderer, RendererError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Load(String),
    Reload,
    Back,
    Forward,
    Input(InputCommand),
    Visible(bool),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct FakeRenderer {
    token: MountToken,
    calls: CallLog,
    fail: bool,
}

impl FakeRenderer {
    pub fn new(token: u64) -> (Self, CallLog) {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let renderer = Self {
            token: MountToken(token),
            calls: Rc::clone(&calls),
            fail: false,
        };
        (renderer, calls)
    }

    /// A renderer whose every command records and then fails.
    pub fn failing(token: u64) -> (Self, CallLog) {
        let (mut renderer, calls) = Self::new(token);
        renderer.fail = true;
        (renderer, calls)
    }

    fn record(&self, call: Call) -> Result<(), RendererError> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            Err(RendererError::Engine("fake failure".into()))
        } else {
            Ok(())
        }
    }
}

impl Renderer for FakeRenderer {
    fn token(&self) -> MountToken {
        self.token
    }

    fn load_url(&mut self, url: &str) -> Result<(), RendererError> {
        self.record(Call::Load(url.to_string()))
    }

    fn reload(&self) -> Result<(), RendererError> {
        self.record(Call::Reload)
    }

    fn go_back(&self) -> Result<(), RendererError> {
        self.record(Call::Back)
    }

    fn go_forward(&self) -> Result<(), RendererError> {
        self.record(Call::Forward)
    }

    fn apply_input(&self, command: &InputCommand) -> Result<(), RendererError> {
        self.record(Call::Input(*command))
    }

    fn set_visible(&self, visible: bool) -> Result<(), RendererError> {
        self.record(Call::Visible(visible))
    }
}

/// Calls other than visibility changes, which most tests don't care about.
pub fn commands(log: &CallLog) -> Vec<Call> {
    log.borrow()
        .iter()
        .filter(|c| !matches!(c, Call::Visible(_)))
        .cloned()
        .collect()
}

/// Last visibility the renderer was set to, if any.
pub fn last_visibility(log: &CallLog) -> Option<bool> {
    log.borrow().iter().rev().find_map(|c| match c {
        Call::Visible(v) => Some(*v),
        _ => None,
    })
}
