//! Flappy Sim headless demo
//!
//! Drives the simulation the way a render loop would, one tick per frame, with
//! the autopilot standing in for the player. Set `RUST_LOG=debug` to follow
//! spawns and cues.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::time::{SystemTime, UNIX_EPOCH};

    use flappy_sim::audio::{self, AudioManager};
    use flappy_sim::settings::Settings;
    use flappy_sim::sim::{Phase, Snapshot, activate, autopilot, tick};

    /// Frames per demo session (one minute at 60 Hz)
    const DEMO_FRAMES: u32 = 60 * 60;
    /// Runs to play before stopping early
    const DEMO_RUNS: u32 = 3;
    /// Frames to linger on the end screen before restarting
    const END_SCREEN_FRAMES: u32 = 30;

    pub fn run() {
        env_logger::init();
        log::info!("Flappy Sim (native) starting...");

        let settings = Settings::load();
        let fallback_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut state = settings.new_game(fallback_seed);
        let mut audio = AudioManager::from_settings(&settings);
        log::info!("Session seed {}", state.seed);

        let mut snapshot = Snapshot::capture(&state);
        let mut best = 0;
        let mut runs = 0;
        let mut end_frames = 0;

        for _ in 0..DEMO_FRAMES {
            match snapshot.phase {
                Phase::Ended => {
                    if end_frames == 0 {
                        runs += 1;
                        best = best.max(snapshot.score);
                        log::info!("Run {} over: score {}", runs, snapshot.score);
                        if runs >= DEMO_RUNS {
                            break;
                        }
                    }
                    end_frames += 1;
                    if end_frames >= END_SCREEN_FRAMES {
                        end_frames = 0;
                        activate(&mut state);
                    }
                }
                Phase::Ready | Phase::Active => {
                    if autopilot::wants_flap(&snapshot) {
                        activate(&mut state);
                    }
                }
            }

            snapshot = tick(&mut state);
            audio::dispatch(&mut audio, &state.drain_events());
        }

        best = best.max(snapshot.score);
        log::info!(
            "Demo finished: {} runs, best score {}, {} hit cues played",
            runs,
            best,
            audio.played()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive the library directly; nothing to run here
}
