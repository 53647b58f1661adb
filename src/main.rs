//! Application entry point — console front-end for the voice characterizer.
//!
//! Each stdin line is delivered to the session as a final recognition
//! result, so spoken commands can be tried by typing them.  Lines starting
//! with `:` stand in for the buttons and sliders of a graphical front-end:
//!
//! | Line                 | Event                         |
//! |----------------------|-------------------------------|
//! | `:listen`            | toggle listening              |
//! | `:speak [text]`      | speak typed text / transcript |
//! | `:stop`              | cancel speech                 |
//! | `:clear`             | clear the transcript          |
//! | `:character <id>`    | select a character            |
//! | `:rate <x>`          | set the rate multiplier       |
//! | `:pitch <x>`         | set the pitch multiplier      |
//! | `:lang <tag\|auto>`  | set the language preference   |
//! | `:interim <text>`    | deliver an interim result     |
//! | `:voices <file>`     | load a JSON voice list        |
//! | `:quit`              | exit                          |
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create a current-thread [`tokio`] runtime.
//! 4. Create the event, platform and status channels.
//! 5. Build the session with console recognizer and synthesizer.
//! 6. Load the initial voice inventory, if configured.
//! 7. Spawn the stdin reader thread.
//! 8. Run the session until stdin closes.

use std::io::BufRead;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::mpsc;
use voice_characterizer::{
    character,
    config::AppConfig,
    session::{Session, SessionEvent},
    speech::{
        RecognitionAlternative, RecognitionBatch, RecognitionConfig, Recognizer, SpeechError,
        StatusUpdate, SynthesisRequest, Synthesizer,
    },
    voice::{LanguagePreference, VoiceInventory},
};

// ---------------------------------------------------------------------------
// Console platform
// ---------------------------------------------------------------------------

/// Prints synthesis requests instead of playing audio.
struct ConsoleSynthesizer;

impl Synthesizer for ConsoleSynthesizer {
    fn speak(&mut self, request: SynthesisRequest) {
        let voice = request
            .voice
            .as_ref()
            .map(|v| format!("{} ({})", v.name, v.language_tag))
            .unwrap_or_else(|| "platform default".into());
        println!(
            "[speak] voice={voice} rate={:.2} pitch={:.2} lang={}",
            request.rate,
            request.pitch,
            request.language.as_deref().unwrap_or("-")
        );
        println!("        {}", request.text);
    }

    fn cancel(&mut self) {
        log::debug!("console: cancel");
    }
}

/// Reports start/end back to the session like a platform recognizer would.
///
/// Notifications go on the session's unbounded platform channel, so they
/// are never lost behind a full stdin queue.
struct ConsoleRecognizer {
    events: mpsc::UnboundedSender<SessionEvent>,
    listening: Arc<AtomicBool>,
}

impl ConsoleRecognizer {
    fn notify(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            log::debug!("console: session gone, recognizer event discarded");
        }
    }
}

impl Recognizer for ConsoleRecognizer {
    fn start(&mut self, config: &RecognitionConfig) -> Result<(), SpeechError> {
        if self.listening.swap(true, Ordering::SeqCst) {
            return Err(SpeechError::TransientRecognition);
        }
        log::info!(
            "console: listening (lang={}, continuous={}, interim={})",
            config.language,
            config.continuous,
            config.interim_results
        );
        self.notify(SessionEvent::RecognitionStarted);
        Ok(())
    }

    fn stop(&mut self) {
        if self.listening.swap(false, Ordering::SeqCst) {
            self.notify(SessionEvent::RecognitionEnded);
        }
    }
}

// ---------------------------------------------------------------------------
// Input parsing
// ---------------------------------------------------------------------------

enum Input {
    Event(SessionEvent),
    Quit,
    Skip,
}

fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Skip;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Input::Event(SessionEvent::RecognitionResult(RecognitionBatch::new(
            vec![RecognitionAlternative::final_text(line)],
            0,
        )));
    };

    let (verb, arg) = match rest.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (rest, ""),
    };

    let event = match verb {
        "quit" | "q" => return Input::Quit,
        "listen" => SessionEvent::ToggleListening,
        "speak" => SessionEvent::Speak((!arg.is_empty()).then(|| arg.to_string())),
        "stop" => SessionEvent::StopSpeaking,
        "clear" => SessionEvent::ClearTranscript,
        "character" => SessionEvent::SelectCharacter(arg.to_string()),
        "lang" => SessionEvent::SetLanguage(LanguagePreference::from(arg)),
        "interim" => SessionEvent::RecognitionResult(RecognitionBatch::new(
            vec![RecognitionAlternative::interim(arg)],
            0,
        )),
        "error" => SessionEvent::RecognitionError(arg.to_string()),
        "rate" | "pitch" => match arg.parse::<f32>() {
            Ok(v) if verb == "rate" => SessionEvent::SetRate(v),
            Ok(v) => SessionEvent::SetPitch(v),
            Err(e) => {
                log::warn!("console: bad {verb} value {arg:?}: {e}");
                return Input::Skip;
            }
        },
        "voices" => match VoiceInventory::load_json(std::path::Path::new(arg)) {
            Ok(voices) => SessionEvent::VoicesChanged(voices),
            Err(e) => {
                log::warn!("console: {e}");
                return Input::Skip;
            }
        },
        "characters" => {
            for c in character::catalog() {
                println!("  {:<8} {:<12} {}", c.id, c.display_name, c.summary());
            }
            return Input::Skip;
        }
        other => {
            log::warn!("console: unknown command :{other}");
            return Input::Skip;
        }
    };
    Input::Event(event)
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Voice Characterizer starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Single-threaded runtime: the session is one cooperative event loop.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // 4. Channels
    let (event_tx, event_rx) = mpsc::channel::<SessionEvent>(config.session.event_queue.max(1));
    let (platform_tx, platform_rx) = mpsc::unbounded_channel::<SessionEvent>();
    let (status_tx, mut status_rx) = mpsc::unbounded_channel::<StatusUpdate>();

    // 5. Session
    let recognizer = ConsoleRecognizer {
        events: platform_tx,
        listening: Arc::new(AtomicBool::new(false)),
    };
    let session = Session::new(&config, status_tx)
        .with_recognizer(Box::new(recognizer))
        .with_synthesizer(Box::new(ConsoleSynthesizer));

    // 6. Initial voice inventory
    if let Some(path) = config.voices.resolve_inventory_file() {
        match VoiceInventory::load_json(&path) {
            Ok(voices) => {
                log::info!("Loaded {} voices from {}", voices.len(), path.display());
                event_tx.try_send(SessionEvent::VoicesChanged(voices))?;
            }
            Err(e) => log::warn!("Voice inventory unavailable: {e}"),
        }
    }

    // 7. stdin reader thread
    std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!("stdin: {e}");
                        break;
                    }
                };
                match parse_line(&line) {
                    Input::Event(event) => {
                        if event_tx.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Input::Quit => break,
                    Input::Skip => {}
                }
            }
        })?;

    // 8. Run until the reader drops its sender.
    let state = rt.block_on(async move {
        let printer = tokio::spawn(async move {
            while let Some(status) = status_rx.recv().await {
                let marker = if status.active { "*" } else { " " };
                println!("[status{marker}] {}", status.text);
            }
        });
        let state = session.run_with_platform(event_rx, platform_rx).await;
        let _ = printer.await;
        state
    });

    log::info!(
        "Session ended: character={}, rate={:.2}, pitch={:.2}, {} transcript lines",
        state.selected_character().display_name,
        state.rate_multiplier(),
        state.pitch_multiplier(),
        state.transcript.len()
    );
    Ok(())
}
