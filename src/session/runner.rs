//! Session loop: owns the [`AppState`] and the platform handles, consumes
//! [`SessionEvent`]s from `tokio::sync::mpsc` channels.
//!
//! Events are handled strictly one at a time; each goes through [`update`]
//! and the resulting effects are carried out before the next event is read.
//!
//! User input arrives on a bounded channel.  Platform notifications that a
//! recognizer emits while the loop is busy handling an event go on a
//! separate unbounded channel so they can never be dropped, and they are
//! read before the next user event.

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::speech::{
    Capabilities, RecognitionConfig, Recognizer, SpeechError, StatusUpdate, Synthesizer,
};

use super::state::AppState;
use super::update::{update, Effect, SessionEvent};

/// Drives one voice-characterizer session.
///
/// ```rust,no_run
/// use tokio::sync::mpsc;
/// use voice_characterizer::config::AppConfig;
/// use voice_characterizer::session::{Session, SessionEvent};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let (status_tx, mut status_rx) = mpsc::unbounded_channel();
/// let (event_tx, event_rx) = mpsc::channel(config.session.event_queue);
///
/// let session = Session::new(&config, status_tx);
/// event_tx.send(SessionEvent::ToggleListening).await.unwrap();
/// drop(event_tx);
///
/// let state = session.run(event_rx).await;
/// // No recognizer attached → "not supported" status.
/// assert!(status_rx.recv().await.is_some());
/// # let _ = state;
/// # }
/// ```
pub struct Session {
    state: AppState,
    recognition: RecognitionConfig,
    recognizer: Option<Box<dyn Recognizer>>,
    synthesizer: Option<Box<dyn Synthesizer>>,
    status_tx: mpsc::UnboundedSender<StatusUpdate>,
}

impl Session {
    /// Create a session with no platform capabilities attached.
    pub fn new(config: &AppConfig, status_tx: mpsc::UnboundedSender<StatusUpdate>) -> Self {
        Self {
            state: AppState::new(&config.session, Capabilities::none()),
            recognition: config.recognition.clone(),
            recognizer: None,
            synthesizer: None,
            status_tx,
        }
    }

    /// Attach the platform recognizer.
    pub fn with_recognizer(mut self, recognizer: Box<dyn Recognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self.state.capabilities.recognition = true;
        self
    }

    /// Attach the platform synthesizer.
    pub fn with_synthesizer(mut self, synthesizer: Box<dyn Synthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self.state.capabilities.synthesis = true;
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        self.state.capabilities
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // -----------------------------------------------------------------------
    // Main async loop
    // -----------------------------------------------------------------------

    /// Handle events until every sender is dropped, then return the final
    /// state.
    pub async fn run(self, events: mpsc::Receiver<SessionEvent>) -> AppState {
        let (_platform_tx, platform) = mpsc::unbounded_channel();
        self.run_with_platform(events, platform).await
    }

    /// Like [`run`](Self::run), also merging platform notifications from
    /// `platform`.  Pending platform events always go first.  The session
    /// ends when `events` closes; platform events still queued at that
    /// point are handled before returning.
    pub async fn run_with_platform(
        mut self,
        mut events: mpsc::Receiver<SessionEvent>,
        mut platform: mpsc::UnboundedReceiver<SessionEvent>,
    ) -> AppState {
        log::info!(
            "session: started (recognition={}, synthesis={})",
            self.state.capabilities.recognition,
            self.state.capabilities.synthesis
        );

        loop {
            tokio::select! {
                biased;
                Some(event) = platform.recv() => self.handle(event),
                event = events.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
            }
        }

        while let Ok(event) = platform.try_recv() {
            self.handle(event);
        }

        log::info!("session: event channel closed, shutting down");
        self.state
    }

    /// Process one event synchronously.
    pub fn handle(&mut self, event: SessionEvent) {
        log::debug!("session: {event:?}");
        for effect in update(&mut self.state, event) {
            self.apply(effect);
        }
    }

    // -----------------------------------------------------------------------
    // Effects
    // -----------------------------------------------------------------------

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Status(status) => self.set_status(status),

            Effect::CancelSpeech => {
                if let Some(synth) = self.synthesizer.as_mut() {
                    synth.cancel();
                }
            }

            Effect::Speak(request) => {
                if let Some(synth) = self.synthesizer.as_mut() {
                    log::info!(
                        "session: speaking {} chars (voice={:?}, rate={:.2}, pitch={:.2})",
                        request.text.len(),
                        request.voice.as_ref().map(|v| v.name.as_str()),
                        request.rate,
                        request.pitch
                    );
                    synth.speak(request);
                }
            }

            Effect::StartRecognition => {
                let Some(recognizer) = self.recognizer.as_mut() else {
                    return;
                };
                match recognizer.start(&self.recognition) {
                    Ok(()) => {}
                    Err(SpeechError::TransientRecognition) => {
                        // Rapid double activation; the running session carries on.
                        log::debug!("session: recognizer already started, ignoring");
                    }
                    Err(e) => {
                        log::warn!("session: recognizer failed to start: {e}");
                        self.set_status(StatusUpdate::idle(format!("Error: {e}")));
                    }
                }
            }

            Effect::StopRecognition => {
                if let Some(recognizer) = self.recognizer.as_mut() {
                    recognizer.stop();
                }
            }
        }
    }

    fn set_status(&mut self, status: StatusUpdate) {
        log::debug!("session: status {:?} (active={})", status.text, status.active);
        self.state.last_status = Some(status.clone());
        // A closed status channel only means nobody is displaying it.
        let _ = self.status_tx.send(status);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
