use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lanedodge::build_info;
use lanedodge::config;
use lanedodge::constants::POLL_TIMEOUT_MS;
use lanedodge::game::{SessionManager, Track};
use lanedodge::input::{self, InputResult};
use lanedodge::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Lane Dodge - Terminal Lane-Dodging Game\n");
                println!("Usage: lanedodge [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls:");
                println!("  Left/A     Move one lane left");
                println!("  Right/D    Move one lane right");
                println!("  Space      Restart after a crash");
                println!("  Q/Esc      Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'lanedodge --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let dimensions = config::load_dimensions();
    let track = Track::new(dimensions.width, dimensions.height);

    let mut rng = rand::thread_rng();
    let mut manager = SessionManager::new(track, &mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let mut last_frame = Instant::now();
    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            ui::render_track(frame, area, &manager);
        })?;

        // Poll for input between frames
        if event::poll(Duration::from_millis(POLL_TIMEOUT_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if input::handle_key(key_event, &mut manager, &mut rng) == InputResult::Quit {
                    break;
                }
            }
        }

        // Advance the simulation by however long the frame took
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        manager.advance(dt_ms, &mut rng);
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Goodbye!");

    Ok(())
}
