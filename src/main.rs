//! Paddle Rivals entry point
//!
//! The windowed front end (input polling, text/shape drawing, audio
//! playback) plugs in around the library; this binary runs the full menu
//! shell and match core headless as a demo and sanity pass.

use std::path::Path;

use paddle_rivals::audio::{CueQueue, SoundCue};
use paddle_rivals::consts::SIM_DT;
use paddle_rivals::settings::Settings;
use paddle_rivals::shell::{NavIntent, Screen, Shell, ShellCommand};
use paddle_rivals::sim::{MatchSession, MoveIntent, Side, ai};

fn main() {
    env_logger::init();
    log::info!("Paddle Rivals (headless) starting...");

    let settings = Settings::load(Path::new("paddle_rivals_settings.json"));
    let mut shell = Shell::new(settings);
    let mut cues = CueQueue::new();

    // Drive the menus the way a player would: single player, Medium,
    // default name, first avatar.
    let menu_script = [
        NavIntent::Accept, // Start New Game
        NavIntent::Accept, // Single Player
        NavIntent::Accept, // Medium
        NavIntent::Accept, // keep default name
        NavIntent::Accept, // keep first avatar
    ];

    let mut session: Option<MatchSession> = None;
    for intent in menu_script {
        if let Some(command) = shell.handle(intent) {
            match command {
                ShellCommand::StartMatch(config) => {
                    let seed = std::process::id() as u64;
                    session = Some(MatchSession::new(config, seed));
                    cues.push(SoundCue::MusicStart);
                }
                ShellCommand::Quit => return,
                _ => {}
            }
        }
    }

    let mut session = session.expect("menu script should start a match");
    log::info!(
        "{} vs {}",
        shell.players[0].name,
        shell.players[1].name
    );

    // Fixed-step loop. The left paddle mirrors the AI controller so the
    // demo produces real rallies.
    while session.outcome().is_none() {
        let p1 = mirror_ai(&session);
        session.tick(SIM_DT, p1, MoveIntent::default());

        for event in session.drain_events() {
            cues.push_event(&event);
        }
        for cue in cues.drain() {
            log::debug!("cue: {:?}", cue);
        }
    }

    shell.match_ended();
    assert_eq!(shell.screen, Screen::GameOver);

    let outcome = session.outcome().expect("loop ended on outcome");
    let score = session.score();
    let line = match outcome.winner {
        Some(Side::Left) => format!(
            "Winner: {} ({} : {})",
            shell.players[0].name, score.left, score.right
        ),
        Some(Side::Right) => format!(
            "Winner: {} ({} : {})",
            shell.players[1].name, score.right, score.left
        ),
        None => format!("Draw! ({} : {})", score.left, score.right),
    };
    log::info!("{} - {:?}", line, outcome.reason);
    println!("{}", line);
}

/// Left-paddle demo pilot: the AI controller's decision, mirrored across
/// the centerline.
fn mirror_ai(session: &MatchSession) -> MoveIntent {
    use paddle_rivals::consts::COURT_WIDTH;

    let ball = session.ball();
    let paddle = session.paddle(Side::Left);

    // Reflect the ball into right-half coordinates, decide, then flip the
    // lateral intent back.
    let mut mirrored_ball = ball.clone();
    mirrored_ball.pos.x = COURT_WIDTH - ball.pos.x;
    let mut mirrored_paddle = paddle.clone();
    mirrored_paddle.pos.x = COURT_WIDTH - paddle.pos.x;

    let intent = ai::decide(&mirrored_ball, &mirrored_paddle, SIM_DT);
    MoveIntent::new(-intent.x, intent.y)
}
