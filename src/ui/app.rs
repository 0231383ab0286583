use crate::api::{FetchErrorKind, FetchFailure};
use crate::config::UiConfig;
use crate::ui::fetch::{FetchIntent, FetchOutcome, FetchReducer, FetchState, RequestId};
use crate::ui::mvi::Reducer;
use crate::ui::views::{MapInstance, MapSlot};
use tokio::sync::mpsc;

/// Work the UI asks the fetch worker to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchPlate { request: RequestId },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Result-fetch controller.
///
/// Owns the fetch lifecycle and the map slot. Views read state through
/// `fetch_state()` and `map()` and never write back.
pub struct App {
    should_quit: bool,
    /// Fetch lifecycle state (MVI pattern).
    fetch: FetchState,
    mounted: bool,
    next_request: RequestId,
    command_sender: Option<UiCommandSender>,
    map: MapSlot,
    animation_tick: u8,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            fetch: FetchState::default(),
            mounted: false,
            next_request: RequestId::FIRST,
            command_sender: None,
            map: MapSlot::new(config.map_span_degrees),
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn can_trigger(&self) -> bool {
        self.fetch.can_trigger()
    }

    pub fn map(&self) -> Option<&MapInstance> {
        self.map.current()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.fetch.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// First activation: issues the one automatic fetch.
    pub fn on_mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.trigger_fetch();
    }

    /// Starts a new request, superseding any request still in flight.
    ///
    /// The previous result stays on screen until the new one settles.
    pub fn trigger_fetch(&mut self) -> RequestId {
        let request = self.next_request;
        self.next_request = request.next();
        tracing::debug!(request = %request, "Fetch started");
        self.dispatch_fetch(FetchIntent::Start { request });

        if let Err(reason) = self.send_command(UiCommand::FetchPlate { request }) {
            tracing::warn!(request = %request, reason = %reason, "Fetch could not be queued");
            self.on_fetch_settled(
                request,
                Err(FetchFailure::new(FetchErrorKind::Transport, reason)),
            );
        }
        request
    }

    pub fn on_fetch_settled(&mut self, request: RequestId, outcome: FetchOutcome) {
        if !self.fetch.is_current(request) || !self.fetch.is_loading() {
            tracing::debug!(request = %request, "Discarding superseded fetch result");
            return;
        }

        match &outcome {
            Ok(record) => {
                tracing::info!(
                    request = %request,
                    image_filename = %record.image_filename,
                    plates = record.plates.len(),
                    "Fetch succeeded"
                );
                self.map
                    .sync(record.lat, record.lon, &record.address.street_address);
            }
            Err(failure) => {
                tracing::warn!(
                    request = %request,
                    kind = %failure.kind,
                    error = %failure.message,
                    "Fetch failed"
                );
            }
        }
        self.dispatch_fetch(FetchIntent::Settled { request, outcome });
    }

    /// Moves the map view; positive is north / east.
    pub fn pan_map(&mut self, north_steps: i32, east_steps: i32) {
        self.map.pan(north_steps, east_steps);
    }

    fn dispatch_fetch(&mut self, intent: FetchIntent) {
        dispatch_mvi!(self, fetch, FetchReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("Fetch worker is not running".to_string());
        };

        sender
            .try_send(command)
            .map_err(|err| format!("Fetch worker unavailable: {}", err))
    }
}
