use clap::{Parser, Subcommand};
use guess_frame_engine::{
    normalize, session::format_clock, AnswerMatcher, Deck, FrameOutcome, GameConfig, GameMode,
    GameSession, Progress,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "guess-frame-cli")]
#[command(about = "Guess the Frame answer matching and game CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (YAML or JSON); falls back to $GUESS_FRAME_CONFIG
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the normalized form of a title
    Normalize {
        text: String,
    },

    /// Check an answer against acceptable titles
    Check {
        /// The player's answer
        answer: String,

        /// Acceptable title (repeatable)
        #[arg(short, long = "title", required = true)]
        titles: Vec<String>,

        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },

    /// Points for an answer given after ELAPSED seconds
    Score {
        elapsed: f64,

        /// Score a wrong answer
        #[arg(long)]
        incorrect: bool,
    },

    /// Play a game in the terminal
    Play {
        /// Deck file (JSON array of frames)
        deck: PathBuf,

        /// hollywood, bollywood or mixed
        #[arg(short, long, default_value = "mixed")]
        mode: GameMode,

        /// Frames to play (overrides config)
        #[arg(short, long)]
        frames: Option<usize>,

        /// Shuffle seed for a repeatable game
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "guess_frame_engine=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Normalize { text } => {
            println!("{}", normalize(&text));
        }

        Commands::Check { answer, titles, json } => {
            let matcher = AnswerMatcher::new(config.matching);
            let verdict = matcher.check(&answer, &titles);

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict.report())?);
            } else if verdict.is_correct() {
                println!(
                    "✅ Correct ({}, {}% confidence)",
                    verdict.match_type(),
                    verdict.confidence()
                );
            } else {
                println!("❌ Incorrect");
            }
        }

        Commands::Score { elapsed, incorrect } => {
            let points = config.scoring.score(elapsed, !incorrect);
            let bonus = if incorrect { 0 } else { config.scoring.time_bonus(elapsed) };

            println!("Points: {}", points);
            println!("   Time bonus: +{}", bonus);
        }

        Commands::Play { deck, mode, frames, seed } => {
            let mut config = config;
            if let Some(frames) = frames {
                config.frames_per_game = frames;
            }

            let deck = Deck::load(&deck)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let session = GameSession::start(&deck, mode, &config, &mut rng)?;
            play(session).await?;
        }
    }

    Ok(())
}

async fn play(mut session: GameSession) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let time_limit = Duration::from_secs(session.countdown().duration_secs() as u64);

    println!(
        "🎮 Guess the Frame: {} frames, {}s each. Type the movie title and press Enter.",
        session.total_frames(),
        time_limit.as_secs()
    );

    loop {
        if let Some(frame) = session.current_frame() {
            println!(
                "\n🎬 Frame {}/{}: {}",
                session.frame_number(),
                session.total_frames(),
                frame.image_url
            );
        }

        session.reveal()?;
        let revealed = Instant::now();

        loop {
            let remaining = time_limit.saturating_sub(revealed.elapsed());
            match tokio::time::timeout(remaining, lines.next_line()).await {
                Ok(Ok(Some(line))) => {
                    if line.trim().is_empty() {
                        println!("   ({} left) type a title", format_clock(remaining.as_secs()));
                        continue;
                    }

                    let record = session.submit(&line, revealed.elapsed().as_secs_f64())?;
                    let title = session.show_answer()?;
                    match record.outcome {
                        FrameOutcome::TimedOut => println!("⏰ Time's up! It was {}", title),
                        _ if record.is_correct() => println!(
                            "✅ {} (+{} pts) {}",
                            title,
                            record.points,
                            record.praise().map(|p| p.message()).unwrap_or_default()
                        ),
                        _ => println!("❌ Nope, it was {}", title),
                    }
                    break;
                }
                Ok(Ok(None)) => {
                    // stdin closed
                    let title = session.show_answer()?;
                    println!("🏳️  It was {}", title);
                    break;
                }
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => {
                    session.time_up()?;
                    let title = session.show_answer()?;
                    println!("⏰ Time's up! It was {}", title);
                    break;
                }
            }
        }

        match session.next_frame()? {
            Progress::Next { .. } => println!("   Score: {}", session.score()),
            Progress::Complete(summary) => {
                println!("\n🏁 Game over!");
                println!("   Grade: {}", summary.grade);
                println!(
                    "   Score: {} / {} ({}%)",
                    summary.score, summary.max_possible, summary.score_percentage
                );
                println!(
                    "   Correct: {}/{} ({}% accuracy)",
                    summary.correct, summary.total, summary.accuracy
                );
                if summary.score > 0 {
                    println!("\n{}", summary.share_text());
                }
                return Ok(());
            }
        }
    }
}
