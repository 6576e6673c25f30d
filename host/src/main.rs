use ringmaze::{
    default_config, generate_maze, parse_config, render_ascii, render_svg, RenderMode, DEFAULT_COLS,
    DEFAULT_ROWS,
};
use ringmaze_core::{MazeConfig, RenderOptions};
use std::env;
use std::fs;
use std::time::Instant;

/// Seed used when `--seed` is not given
const DEFAULT_SEED: u64 = 2918957128;

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];
    let options = parse_options(&args[2..]).unwrap_or_else(|e| {
        eprintln!("❌ Error: {}", e);
        print_usage(&args[0]);
        std::process::exit(1);
    });

    match command.as_str() {
        "render" => render_command(&options),
        "ascii" => ascii_command(&options),
        "stats" => stats_command(&options),
        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

/// Flags shared by all commands
struct CliOptions {
    config_file: Option<String>,
    seed: u64,
    mode: RenderMode,
    solution: bool,
    bw: bool,
    depths: bool,
    output_file: Option<String>,
}

fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        config_file: None,
        seed: DEFAULT_SEED,
        mode: RenderMode::default(),
        solution: false,
        bw: false,
        depths: false,
        output_file: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                options.config_file = Some(flag_value(args, i, "--config")?.to_string());
                i += 1;
            }
            "--seed" => {
                let value = flag_value(args, i, "--seed")?;
                options.seed = value.parse().map_err(|_| {
                    format!("Invalid seed '{}'. Must be a non-negative integer.", value)
                })?;
                i += 1;
            }
            "--mode" => {
                options.mode = flag_value(args, i, "--mode")?.parse()?;
                i += 1;
            }
            "--solution" => options.solution = true,
            "--bw" => options.bw = true,
            "--depths" => options.depths = true,
            other if other.starts_with("--") => {
                return Err(format!("Unknown flag: {}", other));
            }
            other => {
                if options.output_file.is_some() {
                    return Err(format!("Unexpected argument: {}", other));
                }
                options.output_file = Some(other.to_string());
            }
        }
        i += 1;
    }

    Ok(options)
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  render [--config <file>] [--seed <n>] [--mode grid|circular]");
    eprintln!("         [--solution] [--bw] [--depths] [output_file]");
    eprintln!("      Generate a maze and write it as SVG");
    eprintln!("      - output_file: Defaults to: <seed>_maze.svg");
    eprintln!();
    eprintln!("  ascii [--config <file>] [--seed <n>] [--solution]");
    eprintln!("      Generate a maze and print it as text");
    eprintln!();
    eprintln!("  stats [--config <file>] [--seed <n>]");
    eprintln!("      Generate a maze and print generation statistics");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file>  JSON file with rows, cols, canvas_width, canvas_height, start, end");
    eprintln!("                   Default: {}x{} maze on a square canvas", DEFAULT_ROWS, DEFAULT_COLS);
    eprintln!("  --seed <n>       RNG seed (default: {})", DEFAULT_SEED);
    eprintln!("  --mode <mode>    grid (rectangular) or circular (concentric rings)");
    eprintln!("  --solution       Overlay the start-to-end solution");
    eprintln!("  --bw             Black and white output");
    eprintln!("  --depths         Label each cell with its stack depth at first visit");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} render --seed 42 --mode circular --solution maze.svg", program);
}

fn load_config(options: &CliOptions) -> Result<MazeConfig, Box<dyn std::error::Error>> {
    match &options.config_file {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            parse_config(&json)
        }
        None => Ok(default_config(DEFAULT_ROWS, DEFAULT_COLS)),
    }
}

fn config_or_exit(options: &CliOptions) -> MazeConfig {
    match load_config(options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

fn render_command(options: &CliOptions) {
    let config = config_or_exit(options);

    println!("📋 Rendering maze");
    println!("  Size: {}x{} cells", config.rows, config.cols);
    println!("  Seed: {}", options.seed);
    println!("  Mode: {}", options.mode);
    println!();

    let start = Instant::now();
    let mut maze = match generate_maze(&config, options.seed) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("❌ Error generating maze: {}", e);
            std::process::exit(1);
        }
    };

    if options.solution {
        if let Err(e) = maze.solve() {
            eprintln!("❌ Error solving maze: {}", e);
            std::process::exit(1);
        }
    }

    let render_options = RenderOptions {
        projection: options.mode.into(),
        black_and_white: options.bw,
        show_solution: options.solution,
        show_depths: options.depths,
    };
    let svg = render_svg(maze.grid(), &render_options);
    println!("  Generation time: {:.3}s", start.elapsed().as_secs_f64());

    // Use default filename pattern if no output file specified
    let default_filename = format!("{}_maze.svg", options.seed);
    let file_to_save = options.output_file.as_deref().unwrap_or(&default_filename);

    match fs::write(file_to_save, svg) {
        Ok(()) => {
            println!("✅ Maze saved to: {}", file_to_save);
        }
        Err(e) => {
            eprintln!("❌ Error saving maze: {}", e);
            std::process::exit(1);
        }
    }
    println!("{}", "=".repeat(70));
}

fn ascii_command(options: &CliOptions) {
    let config = config_or_exit(options);

    let mut maze = match generate_maze(&config, options.seed) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("❌ Error generating maze: {}", e);
            std::process::exit(1);
        }
    };

    if options.solution {
        if let Err(e) = maze.solve() {
            eprintln!("❌ Error solving maze: {}", e);
            std::process::exit(1);
        }
    }

    print!("{}", render_ascii(maze.grid(), options.solution));
}

fn stats_command(options: &CliOptions) {
    let config = config_or_exit(options);

    let start = Instant::now();
    let mut maze = match generate_maze(&config, options.seed) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("❌ Error generating maze: {}", e);
            std::process::exit(1);
        }
    };
    let duration = start.elapsed();

    let path_len = match maze.solve() {
        Ok(path) => path.len(),
        Err(e) => {
            eprintln!("❌ Error solving maze: {}", e);
            std::process::exit(1);
        }
    };

    let result = maze.result();
    println!("📊 Maze statistics (seed {})", options.seed);
    println!("{}", "=".repeat(70));
    println!("  Grid: {}x{} ({} cells)", config.rows, config.cols, config.cell_count());
    println!("  Visited: {}", result.visited);
    println!("  Passages: {}", result.passages);
    println!("  Steps: {}", result.steps);
    println!("  Max stack depth: {} at {}", result.max_depth, result.max_depth_cell);
    println!("  Solution length: {} cells ({} -> {})", path_len, config.start, config.end);
    println!("  Generation time: {:.3}s", duration.as_secs_f64());
    println!("{}", "=".repeat(70));
}
