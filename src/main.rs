mod build_info;
mod constants;
mod input;
mod obstacles;
mod player;
mod power_ups;
mod rect;
mod session;
mod ui;

use constants::FRAME_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{apply_play_key, menu_action, FrameInput, MenuAction, PlayAction};
use obstacles::{CollisionOutcome, ObstacleManager};
use player::Dino;
use power_ups::PowerUpManager;
use ratatui::{backend::CrosstermBackend, Terminal};
use session::GameSession;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "dino-runner {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dino Runner - Terminal Endless Runner\n");
                println!("Usage: dino-runner\n");
                println!("In game:");
                println!("  Enter      Start a run (from the menu)");
                println!("  Space/Up   Jump");
                println!("  Down       Duck / stand up");
                println!("  Esc        Back to menu (quit from the menu)");
                println!("  q          Quit");
                println!("\nFlags:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dino-runner --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut session = GameSession::new();
    let mut dino = Dino::new();
    let mut obstacles = ObstacleManager::new();
    let mut power_ups = PowerUpManager::new(&mut rng);

    session.running = true;
    let mut last_frame = Instant::now();

    // Outer loop: whenever not playing, the menu owns the frame. Every
    // playing frame runs events, update, draw in that order.
    while session.running {
        if !session.playing {
            // The last run's score folds into the record before the
            // post-death summary renders it.
            if session.death_count > 0 {
                session.sync_record();
            }

            terminal.draw(|frame| ui::render_menu_scene(frame, frame.size(), &session))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = event::read()? {
                    match menu_action(&key_event) {
                        Some(MenuAction::StartRun) => {
                            session.start_run();
                            dino.reset();
                            obstacles.reset();
                            power_ups.reset(&mut rng);
                            last_frame = Instant::now();
                        }
                        Some(MenuAction::Quit) => {
                            session.playing = false;
                            session.running = false;
                        }
                        None => {}
                    }
                }
            }
            continue;
        }

        // (1) Poll events within the frame budget; this is the frame pacer.
        let mut frame_input = FrameInput::default();
        loop {
            let budget =
                Duration::from_millis(FRAME_MS).saturating_sub(last_frame.elapsed());
            if !event::poll(budget)? {
                break;
            }
            if let Event::Key(key_event) = event::read()? {
                match apply_play_key(&key_event, &mut frame_input) {
                    Some(PlayAction::Quit) => {
                        session.playing = false;
                        session.running = false;
                    }
                    Some(PlayAction::ExitToMenu) => {
                        session.playing = false;
                    }
                    None => {}
                }
            }
            if budget.is_zero() {
                break;
            }
        }
        last_frame = Instant::now();

        if !session.running {
            break;
        }
        if !session.playing {
            // Escape: back to the menu, score frozen for the record line
            continue;
        }

        // (2) Update, in the same order every frame
        dino.update(&frame_input);
        let outcome = obstacles.update(&mut rng, &mut session, &mut dino);
        session.update_score();
        power_ups.update(&mut rng, &session, &mut dino);
        session.advance_clock();
        session.scroll_background();
        session.scroll_cloud();
        session.tick_power_up(&mut dino);

        // (3) Draw the post-update state
        terminal.draw(|frame| {
            ui::render_play_scene(
                frame,
                frame.size(),
                &session,
                &dino,
                &obstacles,
                &power_ups,
            );
            if outcome == Some(CollisionOutcome::Fatal) {
                ui::play_scene::render_run_over_banner(frame, frame.size());
            }
        })?;

        if outcome == Some(CollisionOutcome::Fatal) {
            // Let the crash frame linger before the menu takes over
            std::thread::sleep(Duration::from_millis(500));
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
