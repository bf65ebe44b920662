//! CLI entrypoint for Show do Milhão
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use milhao_application::{
    BuiltinQuestionSource, GameController, GenerateQuestionsInput, GenerateQuestionsUseCase,
    LoadQuestionsUseCase, MatchResultSink, MigrateQuestionsUseCase, NoMatchSink,
    NoQuestionGenerator, NoQuestionStore, QuestionGenerator, QuestionSource, QuestionStore,
    build_request,
};
use milhao_domain::{Difficulty, GameSession, PrizeLadder};
use milhao_infrastructure::{
    ConfigLoader, FileConfig, GeminiQuestionGenerator, JsonFileQuestionSource, JsonlMatchSink,
    MatchSinkKind, QuestionSourceKind, SupabaseClient, SupabaseMatchSink,
    SupabaseQuestionSource, SupabaseQuestionStore,
};
use milhao_presentation::{Cli, Command, ConsoleGame, ConsoleRenderer, DifficultyArg, Spinner};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// File name prefix for the rolling log
const LOG_FILE: &str = "show-do-milhao.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = init_logging(cli.verbose, &config);

    config.validate().context("Invalid configuration")?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Show do Milhão");

    match cli.command() {
        Command::Play => play(&config, cli.seed).await,
        Command::Ladder { json } => {
            let ladder = PrizeLadder::standard();
            if json {
                println!("{}", ConsoleRenderer::ladder_json(&ladder));
            } else {
                println!("{}", ConsoleRenderer::ladder(&ladder, None));
            }
            Ok(())
        }
        Command::Generate {
            topic,
            amount,
            difficulty,
            save,
        } => generate(&config, &topic, amount, difficulty, save).await,
        Command::Migrate => migrate(&config).await,
    }
}

/// Initialize logging based on verbosity level, plus the optional daily log file
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

// ==================== Commands ====================

async fn play(config: &FileConfig, seed: Option<u64>) -> Result<()> {
    // === Dependency Injection ===
    let source = question_source(config)?;
    let sink = match_sink(config)?;

    let spinner = Spinner::start("Carregando perguntas...", false);
    let loaded = LoadQuestionsUseCase::new(source)
        .with_timeout(config.fetch_timeout())
        .execute()
        .await;
    spinner.clear();
    println!("{}", ConsoleRenderer::loaded(&loaded));

    let params = config.game_params(seed);
    let Some(session) = GameSession::start(Arc::clone(&loaded.pool), params.rules, params.rng())
    else {
        bail!("No question available to start a game");
    };

    let cancellation = CancellationToken::new();
    let (controller, handle) = GameController::new(session, sink, params);
    let controller = tokio::spawn(controller.with_cancellation(cancellation.clone()).run());

    tokio::select! {
        _ = ConsoleGame::new(handle, PrizeLadder::standard()).run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
        }
    }

    cancellation.cancel();
    let last = controller.await.context("Game controller task failed")?;
    info!(
        status = %last.status,
        level = last.current_level,
        prize = last.accumulated_money,
        "Session closed"
    );
    Ok(())
}

async fn generate(
    config: &FileConfig,
    topic: &str,
    amount: u8,
    difficulty: Option<DifficultyArg>,
    save: bool,
) -> Result<()> {
    let request = build_request(topic, amount, difficulty.map(Difficulty::from))
        .context("Invalid generation request")?;
    if save && config.supabase.credentials().is_none() {
        bail!("--save needs supabase.url and supabase.key");
    }

    let use_case =
        GenerateQuestionsUseCase::new(question_generator(config)?, question_store(config)?);

    let spinner = Spinner::start(
        format!("Gerando perguntas sobre {}...", request.topic()),
        false,
    );
    let output = use_case
        .execute(GenerateQuestionsInput::new(request).with_save(save))
        .await;
    if output.batch.is_mock {
        spinner.fail(output.to_string());
    } else {
        spinner.succeed(output.to_string());
    }

    println!("{}", ConsoleRenderer::generated(&output));
    Ok(())
}

async fn migrate(config: &FileConfig) -> Result<()> {
    let store = Arc::new(SupabaseQuestionStore::new(supabase_client(config)?));

    let spinner = Spinner::start("Migrando perguntas embutidas...", false);
    let report = MigrateQuestionsUseCase::new(store).execute().await;
    spinner.clear();

    println!("{}", ConsoleRenderer::migration(&report));
    if report.migrated == 0 && report.failed > 0 {
        bail!("Migration failed for every question");
    }
    Ok(())
}

// ==================== Adapter selection ====================

fn supabase_client(config: &FileConfig) -> Result<SupabaseClient> {
    let (url, key) = config
        .supabase
        .credentials()
        .context("supabase.url and supabase.key are required")?;
    SupabaseClient::new(url, key).context("Invalid Supabase configuration")
}

fn question_source(config: &FileConfig) -> Result<Arc<dyn QuestionSource>> {
    Ok(match config.questions.source {
        QuestionSourceKind::Builtin => Arc::new(BuiltinQuestionSource),
        QuestionSourceKind::File => {
            let path = config
                .questions
                .path
                .clone()
                .context("questions.path is required for the file source")?;
            Arc::new(JsonFileQuestionSource::new(path))
        }
        QuestionSourceKind::Supabase => {
            Arc::new(SupabaseQuestionSource::new(supabase_client(config)?))
        }
    })
}

fn match_sink(config: &FileConfig) -> Result<Arc<dyn MatchResultSink>> {
    Ok(match config.results.sink {
        MatchSinkKind::None => Arc::new(NoMatchSink),
        MatchSinkKind::Jsonl => match config.results.jsonl_path().and_then(JsonlMatchSink::new) {
            Some(sink) => {
                info!(path = %sink.path().display(), "Recording match results");
                Arc::new(sink)
            }
            None => {
                warn!("Match log unavailable, results will not be recorded");
                Arc::new(NoMatchSink)
            }
        },
        MatchSinkKind::Supabase => Arc::new(SupabaseMatchSink::new(supabase_client(config)?)),
    })
}

fn question_store(config: &FileConfig) -> Result<Arc<dyn QuestionStore>> {
    if config.supabase.credentials().is_none() {
        return Ok(Arc::new(NoQuestionStore));
    }
    Ok(Arc::new(SupabaseQuestionStore::new(supabase_client(
        config,
    )?)))
}

fn question_generator(config: &FileConfig) -> Result<Arc<dyn QuestionGenerator>> {
    let generator = &config.generator;
    match generator.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        Some(key) => Ok(Arc::new(
            GeminiQuestionGenerator::new(key, &generator.model, &generator.endpoint)
                .context("Failed to build the Gemini client")?,
        )),
        None => Ok(Arc::new(NoQuestionGenerator)),
    }
}
