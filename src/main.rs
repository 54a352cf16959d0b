//! Rack Forge - CLI
//!
//! Generates balanced starting racks and rack catalogs for the word game, and
//! inspects the game's stored word list and progress.

use anyhow::{Context, Result, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rack_forge::{
    commands::{evaluate_rack, generate_catalog, generate_pairs, session},
    core::LetterBag,
    generator::{
        GeneratorConfig, Tolerances,
        config::{
            DEFAULT_MAX_DISPLAY, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORDS, DEFAULT_PAIRS_NEEDED,
            DEFAULT_SETS_NEEDED, DEFAULT_TILE_COUNT,
        },
    },
    output::{print_evaluated_set, print_game_status, print_generation_result, write_report},
    wordlists::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, Dictionary, LengthFilter, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "rack_forge",
    about = "Generate balanced Scrabble-style starting racks and playable word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DictionaryArgs {
    /// Word list file, one word per line
    #[arg(short = 'w', long)]
    wordlist: PathBuf,

    /// Shortest dictionary word to keep
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Longest dictionary word to keep
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,
}

#[derive(Args)]
struct SamplingArgs {
    /// Tiles per rack
    #[arg(long, default_value_t = DEFAULT_TILE_COUNT)]
    tile_count: usize,

    /// Letter distribution to draw from
    #[arg(long, value_enum, default_value_t = BagKind::Generator)]
    bag: BagKind,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many draws (default: keep drawing)
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BagKind {
    /// Weights the rack generator has always used (92 tiles)
    Generator,
    /// Standard English distribution without blanks (98 tiles)
    Standard,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate balanced pairs of starting racks
    Pairs {
        #[command(flatten)]
        dictionary: DictionaryArgs,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Number of pairs to produce
        #[arg(short = 'n', long, default_value_t = DEFAULT_PAIRS_NEEDED)]
        count: usize,

        /// Report file
        #[arg(short, long, default_value = "balanced_tile_pairs.txt")]
        output: PathBuf,

        /// Fewest listed words a rack needs
        #[arg(long, default_value_t = DEFAULT_MIN_WORDS)]
        min_words: usize,

        /// Words listed per rack
        #[arg(long, default_value_t = DEFAULT_MAX_DISPLAY)]
        max_display: usize,

        /// Largest allowed score difference within a pair
        #[arg(long, default_value_t = 5)]
        score_tolerance: u32,

        /// Largest allowed vowel-count difference within a pair
        #[arg(long, default_value_t = 1)]
        vowel_tolerance: usize,

        /// Largest allowed listed-word-count difference within a pair
        #[arg(long, default_value_t = 1)]
        word_tolerance: usize,
    },

    /// Generate a catalog of distinct racks
    Catalog {
        #[command(flatten)]
        dictionary: DictionaryArgs,

        #[command(flatten)]
        sampling: SamplingArgs,

        /// Number of racks to produce
        #[arg(short = 'n', long, default_value_t = DEFAULT_SETS_NEEDED)]
        count: usize,

        /// Report file
        #[arg(short, long, default_value = "tile_sets.txt")]
        output: PathBuf,

        /// Fewest matched words a rack needs
        #[arg(long, default_value_t = DEFAULT_MIN_WORDS)]
        min_words: usize,

        /// Most matched words a rack may have
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Words listed per rack
        #[arg(long, default_value_t = DEFAULT_MAX_DISPLAY)]
        max_display: usize,
    },

    /// Evaluate a single rack
    Evaluate {
        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// The rack letters, e.g. CATXXXX
        rack: String,

        /// Tiles per rack
        #[arg(long, default_value_t = DEFAULT_TILE_COUNT)]
        tile_count: usize,

        /// Words listed for the rack
        #[arg(long, default_value_t = DEFAULT_MAX_DISPLAY)]
        max_display: usize,
    },

    /// Inspect or extend the stored word list
    Words {
        /// Store file shared with the game commands
        #[arg(short, long, default_value = "rack_forge_store.json")]
        store: PathBuf,

        #[command(subcommand)]
        action: WordAction,
    },

    /// Track games and player stats
    Game {
        /// Store file shared with the word commands
        #[arg(short, long, default_value = "rack_forge_store.json")]
        store: PathBuf,

        #[command(subcommand)]
        action: GameAction,
    },
}

#[derive(Subcommand)]
enum WordAction {
    /// Check whether a word is in the list
    Check { word: String },
    /// Add a word to the list
    Add { word: String },
    /// Print every word
    List,
}

#[derive(Subcommand)]
enum GameAction {
    /// Start a new game
    Start {
        #[arg(default_value = "words")]
        kind: String,
    },
    /// Finish the current game with a final score
    End { score: u32 },
    /// Show the current game and stats
    Status,
    /// Erase all game state
    Clear,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pairs {
            dictionary,
            sampling,
            count,
            output,
            min_words,
            max_display,
            score_tolerance,
            vowel_tolerance,
            word_tolerance,
        } => {
            let tolerances = Tolerances {
                score: score_tolerance,
                vowels: vowel_tolerance,
                words: word_tolerance,
            };
            let config = GeneratorConfig::default()
                .with_tile_count(sampling.tile_count)
                .with_word_range(min_words, min_words.max(max_display))
                .with_max_display(max_display)
                .with_target(count)
                .with_tolerances(tolerances)
                .with_max_attempts(sampling.max_attempts);
            run_pairs_command(&dictionary, &sampling, config, &output)
        }
        Commands::Catalog {
            dictionary,
            sampling,
            count,
            output,
            min_words,
            max_words,
            max_display,
        } => {
            let config = GeneratorConfig::default()
                .with_tile_count(sampling.tile_count)
                .with_word_range(min_words, max_words)
                .with_max_display(max_display)
                .with_target(count)
                .with_max_attempts(sampling.max_attempts);
            run_catalog_command(&dictionary, &sampling, config, &output)
        }
        Commands::Evaluate {
            dictionary,
            rack,
            tile_count,
            max_display,
        } => run_evaluate_command(&dictionary, &rack, tile_count, max_display),
        Commands::Words { store, action } => run_words_command(&store, action),
        Commands::Game { store, action } => run_game_command(&store, action),
    }
}

fn load_dictionary(args: &DictionaryArgs) -> Result<Dictionary> {
    ensure!(
        args.min_len <= args.max_len,
        "--min-len ({}) must not exceed --max-len ({})",
        args.min_len,
        args.max_len
    );

    let filter = LengthFilter::new(args.min_len, args.max_len);
    let dictionary = load_from_file(&args.wordlist, filter)
        .with_context(|| format!("Failed to read word list {}", args.wordlist.display()))?;

    println!(
        "Loaded {} words ({}-{} letters) from {}",
        dictionary.len(),
        args.min_len,
        args.max_len,
        args.wordlist.display()
    );
    Ok(dictionary)
}

fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn build_bag(kind: BagKind) -> LetterBag {
    match kind {
        BagKind::Generator => LetterBag::generator(),
        BagKind::Standard => LetterBag::standard(),
    }
}

fn run_pairs_command(
    dictionary_args: &DictionaryArgs,
    sampling: &SamplingArgs,
    config: GeneratorConfig,
    output: &Path,
) -> Result<()> {
    let dictionary = load_dictionary(dictionary_args)?;
    let bag = build_bag(sampling.bag);
    let mut rng = build_rng(sampling.seed);

    println!("Generating {} balanced pairs...", config.target);
    let result = generate_pairs(&bag, &dictionary, config, &mut rng, !sampling.quiet)?;

    write_report(output, &result.report)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    print_generation_result(&result, output);
    Ok(())
}

fn run_catalog_command(
    dictionary_args: &DictionaryArgs,
    sampling: &SamplingArgs,
    config: GeneratorConfig,
    output: &Path,
) -> Result<()> {
    let dictionary = load_dictionary(dictionary_args)?;
    let bag = build_bag(sampling.bag);
    let mut rng = build_rng(sampling.seed);

    println!("Generating {} distinct racks...", config.target);
    let result = generate_catalog(&bag, &dictionary, config, &mut rng, !sampling.quiet)?;

    write_report(output, &result.report)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    print_generation_result(&result, output);
    Ok(())
}

fn run_evaluate_command(
    dictionary_args: &DictionaryArgs,
    rack: &str,
    tile_count: usize,
    max_display: usize,
) -> Result<()> {
    let dictionary = load_dictionary(dictionary_args)?;
    let set = evaluate_rack(rack, &dictionary, tile_count, max_display)
        .with_context(|| format!("Invalid rack '{rack}'"))?;
    print_evaluated_set(&set);
    Ok(())
}

fn run_words_command(store: &Path, action: WordAction) -> Result<()> {
    match action {
        WordAction::Check { word } => {
            if session::check_word(store, &word)? {
                println!("{} {}", word.to_uppercase().bright_green(), "is a word".green());
            } else {
                println!("{} {}", word.to_uppercase().bright_red(), "is not in the list".red());
            }
        }
        WordAction::Add { word } => {
            if session::add_word(store, &word)? {
                println!("Added {}", word.to_lowercase().bright_green());
            } else {
                println!("{} is already in the list", word.to_lowercase().yellow());
            }
        }
        WordAction::List => {
            for word in session::list_words(store)? {
                println!("{word}");
            }
        }
    }
    Ok(())
}

fn run_game_command(store: &Path, action: GameAction) -> Result<()> {
    match action {
        GameAction::Start { kind } => {
            let game = session::start_game(store, &kind, session::now_millis())?;
            println!("Started {} game at {}", game.kind.bright_green(), game.start_time);
        }
        GameAction::End { score } => match session::end_game(store, score, session::now_millis())? {
            Some(stats) => print_game_status(None, &stats),
            None => println!("{}", "No game in progress".yellow()),
        },
        GameAction::Status => {
            let (current, stats) = session::game_status(store)?;
            print_game_status(current.as_ref(), &stats);
        }
        GameAction::Clear => {
            session::clear_game(store)?;
            println!("Game state cleared");
        }
    }
    Ok(())
}
