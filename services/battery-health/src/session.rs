//! Session: drives the UI state machine on the tokio runtime
//!
//! All state lives in one [`Ui`] owned by the session loop. Effects run as spawned
//! tasks and report back through an unbounded channel, so a slow prediction never
//! holds up a probe and a slow probe never holds up a prediction.

use std::sync::Arc;
use std::time::Duration;

use battery_core::{
    ApiStatus, Effect, Event, RawFields, ResultView, StatusIndicator, StatusPoller, Ui,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::{HttpPredictionService, PredictionService};
use crate::config::Config;
use crate::display::{Surface, TerminalSurface};
use crate::io::{HttpClient, ReqwestHttpClient};

pub struct Session {
    ui: Ui,
    service: Arc<dyn PredictionService>,
    surface: Box<dyn Surface>,
    poller_enabled: bool,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
    committed_result: ResultView,
    committed_status: Option<StatusIndicator>,
}

impl Session {
    /// Sender for feeding events (typically `Submit`) from outside the loop
    pub fn events(&self) -> mpsc::UnboundedSender<Event> {
        self.events_tx.clone()
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Issue the initial status check and, if enabled, start the poll timer
    pub fn start(&mut self) {
        let effects = self.ui.start();
        self.commit(false);
        self.execute(effects);

        if self.poller_enabled {
            let events = self.events_tx.clone();
            let interval = self.ui.poll_interval();
            let cancel = self.cancel.clone();
            tokio::spawn(async move {
                poll_loop(events, interval, cancel).await;
            });
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        let accepted_submit = match &event {
            Event::Submit(_) if !self.ui.submit_enabled() => {
                tracing::info!("Submission already in progress; ignoring submit");
                false
            }
            Event::Submit(_) => true,
            _ => false,
        };

        let effects = self.ui.update(event);
        self.commit(accepted_submit);
        self.execute(effects);
    }

    /// Wait for and apply the next event. Returns false once the session is over.
    pub async fn next_event(&mut self) -> bool {
        match self.recv_event().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    async fn recv_event(&mut self) -> Option<Event> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            event = self.events_rx.recv() => event,
        }
    }

    /// Submit each entry from `input` in turn, processing events between them.
    ///
    /// The next entry is only taken once the previous attempt has settled. Returns on
    /// cancellation, or once `input` is closed and the last attempt has settled.
    pub async fn run_with_input(&mut self, mut input: mpsc::UnboundedReceiver<RawFields>) {
        let mut input_open = true;
        loop {
            let accepting = input_open && self.ui.submit_enabled();
            if !input_open && self.ui.submit_enabled() {
                tracing::debug!("Input ended and no attempt in flight");
                break;
            }

            let next = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => Next::Stop,
                event = self.events_rx.recv() => match event {
                    Some(event) => Next::Event(event),
                    None => Next::Stop,
                },
                fields = input.recv(), if accepting => match fields {
                    Some(fields) => Next::Event(Event::Submit(fields)),
                    None => Next::InputClosed,
                },
            };

            match next {
                Next::Event(event) => self.dispatch(event),
                Next::InputClosed => input_open = false,
                Next::Stop => break,
            }
        }
        tracing::debug!("Session loop stopped");
    }

    /// Submit once and wait until the attempt has settled
    pub async fn submit(&mut self, fields: RawFields) -> ResultView {
        self.dispatch(Event::Submit(fields));
        while !self.ui.submit_enabled() {
            if !self.next_event().await {
                break;
            }
        }
        self.ui.result().clone()
    }

    /// Probe once and wait for the outcome
    pub async fn check_status(&mut self) -> ApiStatus {
        self.dispatch(Event::PollTick);
        while let Some(event) = self.recv_event().await {
            let probed = matches!(event, Event::ProbeFinished(_));
            self.dispatch(event);
            if probed {
                break;
            }
        }
        self.ui.api_status()
    }

    fn commit(&mut self, force_result: bool) {
        let indicator = self.ui.status();
        if self.committed_status.as_ref() != Some(&indicator) {
            match indicator.status {
                ApiStatus::Offline => tracing::warn!("Prediction API is offline"),
                ApiStatus::Online => tracing::info!("Prediction API is online"),
                ApiStatus::Checking => tracing::debug!("Checking prediction API"),
            }
            self.surface.show_status(&indicator);
            self.committed_status = Some(indicator);
        }

        if force_result || self.ui.result() != &self.committed_result {
            self.surface.show_result(self.ui.result());
            self.committed_result = self.ui.result().clone();
        }
    }

    fn execute(&self, effects: Vec<Effect>) {
        for effect in effects {
            let events = self.events_tx.clone();
            match effect {
                Effect::Predict { attempt, input } => {
                    let service = Arc::clone(&self.service);
                    tracing::info!("Submitting prediction attempt {}", attempt);
                    tokio::spawn(async move {
                        let outcome = service.predict(&input).await;
                        match &outcome {
                            Ok(result) => tracing::debug!(
                                "Attempt {} returned status {:?}",
                                attempt,
                                result.status
                            ),
                            Err(e) => tracing::warn!("Prediction attempt {} failed: {}", attempt, e),
                        }
                        let _ = events.send(Event::PredictionFinished { attempt, outcome });
                    });
                }
                Effect::ScheduleTimeout { attempt, after } => {
                    let cancel = self.cancel.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            _ = tokio::time::sleep(after) => {
                                let _ = events.send(Event::PredictionTimedOut { attempt });
                            }
                            _ = cancel.cancelled() => {}
                        }
                    });
                }
                Effect::Probe => {
                    let service = Arc::clone(&self.service);
                    tokio::spawn(async move {
                        let outcome = service.probe().await;
                        tracing::debug!("Probe finished: {:?}", outcome);
                        let _ = events.send(Event::ProbeFinished(outcome));
                    });
                }
            }
        }
    }
}

enum Next {
    Event(Event),
    InputClosed,
    Stop,
}

async fn poll_loop(
    events: mpsc::UnboundedSender<Event>,
    interval: Duration,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = cancel.cancelled() => {
                tracing::debug!("Status polling cancelled");
                break;
            }
        }
        if events.send(Event::PollTick).is_err() {
            break;
        }
    }
}

/// Builder for a [`Session`], with injection points for tests
pub struct SessionBuilder {
    config: Config,
    http: Option<Arc<dyn HttpClient>>,
    service: Option<Arc<dyn PredictionService>>,
    surface: Option<Box<dyn Surface>>,
    cancel: Option<CancellationToken>,
    request_timeout: Option<Duration>,
    poll_interval: Option<Duration>,
}

impl SessionBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: None,
            service: None,
            surface: None,
            cancel: None,
            request_timeout: None,
            poll_interval: None,
        }
    }

    pub fn with_http_client(mut self, http: Arc<dyn HttpClient>) -> Self {
        self.http = Some(http);
        self
    }

    pub fn with_service(mut self, service: Arc<dyn PredictionService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn with_surface(mut self, surface: Box<dyn Surface>) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_cancellation_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Override the configured request timeout with sub-second precision
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Override the configured poll interval with sub-second precision
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    pub fn build(self) -> crate::Result<Session> {
        self.config.validate()?;

        let service = match self.service {
            Some(service) => service,
            None => {
                let http = self
                    .http
                    .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new()));
                Arc::new(HttpPredictionService::new(
                    &self.config.api.base_url,
                    self.config.probe_timeout(),
                    http,
                ))
            }
        };
        let surface = self
            .surface
            .unwrap_or_else(|| Box::new(TerminalSurface::stdout()));
        let request_timeout = self
            .request_timeout
            .unwrap_or_else(|| self.config.request_timeout());
        let poll_interval = self
            .poll_interval
            .unwrap_or_else(|| self.config.poll_interval());

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let ui = Ui::new(request_timeout, StatusPoller::new(poll_interval));
        // The surface starts out showing the initial indicator
        let committed_status = Some(ui.status());

        Ok(Session {
            ui,
            service,
            surface,
            poller_enabled: self.config.poller.enabled,
            events_tx,
            events_rx,
            cancel: self.cancel.unwrap_or_default(),
            committed_result: ResultView::Idle,
            committed_status,
        })
    }
}
