//! Console rendering for game snapshots and command reports

use crate::input::intent::{COMMANDS_HELP, lifeline_key};
use colored::Colorize;
use milhao_application::{GenerateQuestionsOutput, LoadedQuestions, MigrationReport, QuestionOrigin};
use milhao_domain::{
    GameStatus, LifelineResult, LifelineView, LossReason, PrizeLadder, SessionSnapshot,
};

/// Currency shown next to every amount
const CURRENCY: &str = "Dracmas";

/// Remaining seconds that get a countdown warning
const WARNING_SECONDS: [u32; 5] = [10, 5, 3, 2, 1];

const WIDTH: usize = 60;

/// Formats game state for the terminal
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Full screen for a snapshot: the question while playing, the
    /// game-over card once terminal.
    pub fn render(snapshot: &SessionSnapshot, ladder: &PrizeLadder) -> String {
        if snapshot.status.is_terminal() {
            Self::game_over(snapshot, ladder)
        } else {
            Self::playing(snapshot)
        }
    }

    /// Warning line for the countdown, only on the warning seconds
    pub fn countdown_warning(snapshot: &SessionSnapshot) -> Option<String> {
        if snapshot.status != GameStatus::Playing
            || !WARNING_SECONDS.contains(&snapshot.time_left)
        {
            return None;
        }
        let text = format!("⏰ {}s restantes", snapshot.time_left);
        Some(if snapshot.time_left <= 5 {
            text.red().bold().to_string()
        } else {
            text.yellow().to_string()
        })
    }

    fn playing(snapshot: &SessionSnapshot) -> String {
        let mut output = String::new();

        let timer = format!("⏱ {:>2}s", snapshot.time_left);
        let timer = if snapshot.time_left <= 10 {
            timer.red().bold()
        } else {
            timer.white().bold()
        };
        output.push_str(&format!("{}\n", "=".repeat(WIDTH).cyan()));
        output.push_str(&format!(
            " {} {} / {}    {}    {} {} {}\n",
            "PERGUNTA".dimmed(),
            snapshot.current_level.to_string().yellow().bold(),
            snapshot.max_level,
            timer,
            "VALENDO".dimmed(),
            format_money(snapshot.current_prize).green().bold(),
            CURRENCY
        ));
        output.push_str(&format!("{}\n", "=".repeat(WIDTH).cyan()));

        let Some(question) = &snapshot.question else {
            output.push_str(&format!(
                "\n{}\n",
                "Não há mais perguntas disponíveis para este nível.".yellow()
            ));
            output.push_str(&format!("{}\n", Self::stop_line(snapshot)));
            return output;
        };

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            format!("[{}]", question.difficulty).dimmed(),
            question.text.bold()
        ));
        for (index, option) in question.options.iter().enumerate() {
            if snapshot.is_option_eliminated(index) {
                continue;
            }
            output.push_str(&format!(
                "  {} {}\n",
                format!("{}.", index + 1).yellow().bold(),
                option
            ));
        }

        output.push('\n');
        output.push_str(&Self::lifeline_bar(&snapshot.lifelines));
        output.push('\n');

        if let Some(result) = &snapshot.lifeline_result {
            output.push('\n');
            output.push_str(&Self::lifeline_modal(result));
        }

        output.push_str(&format!("\n{}\n", Self::stop_line(snapshot)));
        output.push_str(&format!("{}\n", COMMANDS_HELP.dimmed()));
        output
    }

    fn lifeline_bar(lifelines: &[LifelineView]) -> String {
        let items: Vec<String> = lifelines
            .iter()
            .map(|view| {
                let mut label = format!("[{}] {}", lifeline_key(view.kind), view.kind.display_name());
                if let Some(left) = view.uses_left {
                    label.push_str(&format!(" ({})", left));
                }
                if view.available {
                    label.cyan().to_string()
                } else {
                    label.dimmed().strikethrough().to_string()
                }
            })
            .collect();
        format!("{} {}", "Ajudas:".bold(), items.join("  "))
    }

    fn lifeline_modal(result: &LifelineResult) -> String {
        let mut output = String::new();
        match result {
            LifelineResult::ExpertHint { suggestion } => {
                output.push_str(&format!("{}\n", "O Pastor diz...".yellow().bold()));
                output.push_str(&format!(
                    "\"Irmão, eu estudei bastante sobre isso. Eu tenho quase certeza que a \
                     resposta correta é a número {}.\"\n",
                    (suggestion + 1).to_string().yellow().bold()
                ));
            }
            LifelineResult::CrowdVote { stats } => {
                output.push_str(&format!("{}\n", "Votação da Igreja".blue().bold()));
                for (index, percent) in stats.iter().enumerate() {
                    let bar = "█".repeat(usize::from(*percent) / 4);
                    output.push_str(&format!(
                        "  {} {:<25} {:>3}%\n",
                        format!("{}.", index + 1).bold(),
                        bar.blue(),
                        percent
                    ));
                }
            }
        }
        output.push_str(&format!("{}\n", "[ok] fechar".dimmed()));
        output
    }

    fn stop_line(snapshot: &SessionSnapshot) -> String {
        format!(
            "{} Parar Jogo ({} {})",
            "[s]".red().bold(),
            format_money(snapshot.stop_prize),
            CURRENCY
        )
        .red()
        .to_string()
    }

    fn game_over(snapshot: &SessionSnapshot, ladder: &PrizeLadder) -> String {
        let (banner, subtitle) = match (snapshot.status, snapshot.loss_reason) {
            (GameStatus::Won, _) => ("MILIONÁRIO!".yellow().bold(), "VOCÊ ZEROU O JOGO"),
            (GameStatus::Stopped, _) => ("PAROU!".blue().bold(), "VOCÊ PREFERIU NÃO ARRISCAR"),
            (_, Some(LossReason::Timeout)) => ("FIM DE JOGO".red().bold(), "O TEMPO ACABOU"),
            _ => ("FIM DE JOGO".red().bold(), "VOCÊ ERROU A QUESTÃO"),
        };

        let levels_completed = if snapshot.status == GameStatus::Won {
            snapshot.max_level
        } else {
            snapshot.current_level.saturating_sub(1)
        };

        let mut output = String::new();
        output.push_str(&format!("{}\n", "=".repeat(WIDTH).cyan()));
        output.push_str(&format!("{:^width$}\n", banner, width = WIDTH));
        output.push_str(&format!("{:^width$}\n", subtitle.dimmed(), width = WIDTH));
        output.push_str(&format!("{}\n\n", "=".repeat(WIDTH).cyan()));

        output.push_str(&format!(
            "{} {}\n",
            "Sua Patente Bíblica:".dimmed(),
            ladder.title_for_completed(levels_completed).bold()
        ));
        let prize = format!("{} {}", format_money(snapshot.accumulated_money), CURRENCY);
        output.push_str(&format!(
            "{} {}\n",
            "Prêmio Conquistado:".dimmed(),
            if snapshot.status == GameStatus::Won {
                prize.yellow().bold()
            } else {
                prize.green().bold()
            }
        ));

        if snapshot.status == GameStatus::Lost
            && let Some(reveal) = snapshot.question.as_ref().and_then(|q| q.reveal.as_ref())
        {
            output.push_str(&format!(
                "\n{} {}\n",
                "A resposta correta era:".red(),
                reveal.correct_answer.bold()
            ));
            if let Some(details) = &reveal.correct_details {
                output.push_str(&format!("💡 {}\n", details));
            }
        }

        output.push_str(&format!(
            "\n{}\n",
            "[n] jogar novamente · [q] sair".dimmed()
        ));
        output
    }

    /// Prize table, marking `current` when given
    pub fn ladder(ladder: &PrizeLadder, current: Option<u8>) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:>5}  {:>12}  {:>10}  {:>10}  {}\n",
            "Nível".bold(),
            "Prêmio".bold(),
            "Parar".bold(),
            "Errar".bold(),
            "Patente".bold()
        ));
        for entry in ladder.entries().iter().rev() {
            let line = format!(
                "{:>5}  {:>12}  {:>10}  {:>10}  {}",
                entry.level,
                format_money(entry.prize),
                format_money(entry.stop),
                format_money(entry.wrong),
                entry.title
            );
            if current == Some(entry.level) {
                output.push_str(&format!("{}\n", line.yellow().bold()));
            } else if entry.level == ladder.max_level() {
                output.push_str(&format!("{}\n", line.green()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
        output
    }

    pub fn ladder_json(ladder: &PrizeLadder) -> String {
        serde_json::to_string_pretty(ladder.entries()).unwrap_or_else(|_| "[]".to_string())
    }

    /// One-line notice about where the questions came from
    pub fn loaded(loaded: &LoadedQuestions) -> String {
        match &loaded.origin {
            QuestionOrigin::Source { name } => {
                let mut line = format!("{} perguntas carregadas de {}", loaded.pool.len(), name);
                if loaded.dropped > 0 {
                    line.push_str(&format!(" ({} inválidas ignoradas)", loaded.dropped));
                }
                line.green().to_string()
            }
            QuestionOrigin::Builtin { reason } => format!(
                "Usando as {} perguntas embutidas ({})",
                loaded.pool.len(),
                reason
            )
            .yellow()
            .to_string(),
        }
    }

    pub fn generated(output: &GenerateQuestionsOutput) -> String {
        let mut text = String::new();
        if output.batch.is_mock {
            text.push_str(&format!(
                "{} {}\n\n",
                "SIMULADO:".yellow().bold(),
                output
                    .batch
                    .error_reason
                    .as_deref()
                    .unwrap_or("gerador indisponível")
            ));
        }

        for (n, question) in output.batch.questions.iter().enumerate() {
            text.push_str(&format!(
                "{} {} {}\n",
                format!("{}.", n + 1).bold(),
                question.text,
                format!("[{}]", question.difficulty).dimmed()
            ));
            for (index, option) in question.options.iter().enumerate() {
                let line = format!("   {}) {}", index + 1, option);
                if index == question.correct_option {
                    text.push_str(&format!("{}\n", line.green()));
                } else {
                    text.push_str(&format!("{}\n", line));
                }
            }
        }

        for rejected in &output.rejected {
            text.push_str(&format!("{} {}\n", "rejeitada:".red(), rejected));
        }
        if let Some(report) = &output.save_report {
            text.push_str(&format!(
                "\n{} {}\n",
                "Salvas:".cyan().bold(),
                report.saved
            ));
            for error in &report.errors {
                text.push_str(&format!("  {} {}\n", "x".red(), error));
            }
        }
        text
    }

    pub fn migration(report: &MigrationReport) -> String {
        let mut text = format!(
            "{} {} migradas, {} falharam\n",
            "Migração:".cyan().bold(),
            report.migrated.to_string().green(),
            report.failed.to_string().red()
        );
        for error in &report.errors {
            text.push_str(&format!("  {} {}\n", "x".red(), error));
        }
        text
    }
}

/// `1234567` → `1.234.567`
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use milhao_application::{GenerateQuestionsOutput, MigrationReport, SaveReport};
    use milhao_domain::{
        Difficulty, GameRules, GameSession, GeneratedBatch, LifelineKind, QuestionPool,
        builtin_questions,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn plain() {
        colored::control::set_override(false);
    }

    fn session(seed: u64) -> GameSession {
        let pool = Arc::new(QuestionPool::from_questions(builtin_questions()));
        GameSession::start(pool, GameRules::default(), StdRng::seed_from_u64(seed)).unwrap()
    }

    fn correct(session: &GameSession) -> usize {
        session.current_question().unwrap().correct_option()
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "0");
        assert_eq!(format_money(500), "500");
        assert_eq!(format_money(2_500), "2.500");
        assert_eq!(format_money(1_000_000), "1.000.000");
    }

    #[test]
    fn test_playing_screen() {
        plain();
        let session = session(1);
        let snapshot = session.snapshot();
        let text = ConsoleRenderer::render(&snapshot, session.ladder());

        assert!(text.contains("PERGUNTA 1 / 16"));
        assert!(text.contains("VALENDO 1.000 Dracmas"));
        assert!(text.contains(&snapshot.question.as_ref().unwrap().text));
        assert!(text.contains("Parar Jogo (0 Dracmas)"));
        assert!(text.contains("[e] Cortar Joio"));
        assert!(text.contains("[r] Livramento (3)"));
    }

    #[test]
    fn test_eliminated_options_are_hidden() {
        plain();
        let mut session = session(2);
        session.use_lifeline(LifelineKind::EliminateTwo);
        let snapshot = session.snapshot();
        let text = ConsoleRenderer::render(&snapshot, session.ladder());

        let options = &snapshot.question.as_ref().unwrap().options;
        for index in 0..options.len() {
            let line = format!("{}. {}", index + 1, options[index]);
            assert_eq!(
                text.contains(&line),
                !snapshot.is_option_eliminated(index),
                "option {}",
                index
            );
        }
    }

    #[test]
    fn test_crowd_vote_modal() {
        plain();
        let mut session = session(3);
        session.use_lifeline(LifelineKind::CrowdVote);
        let text = ConsoleRenderer::render(&session.snapshot(), session.ladder());
        assert!(text.contains("Votação da Igreja"));
        assert!(text.contains("[ok] fechar"));
    }

    #[test]
    fn test_expert_modal_uses_one_based_number() {
        plain();
        let mut session = session(4);
        session.use_lifeline(LifelineKind::ExpertHint);
        let snapshot = session.snapshot();
        let Some(LifelineResult::ExpertHint { suggestion }) = &snapshot.lifeline_result else {
            panic!("expected an expert hint");
        };
        let text = ConsoleRenderer::render(&snapshot, session.ladder());
        assert!(text.contains(&format!("é a número {}.", suggestion + 1)));
    }

    #[test]
    fn test_wrong_answer_reveals_correct_option() {
        plain();
        let mut session = session(5);
        let answer = session.current_question().unwrap().correct_answer().to_string();
        let wrong = (correct(&session) + 1) % 4;
        session.answer(wrong);

        let text = ConsoleRenderer::render(&session.snapshot(), session.ladder());
        assert!(text.contains("FIM DE JOGO"));
        assert!(text.contains("VOCÊ ERROU A QUESTÃO"));
        assert!(text.contains("Vigia Irmão!"));
        assert!(text.contains("Prêmio Conquistado: 0 Dracmas"));
        assert!(text.contains(&format!("A resposta correta era: {}", answer)));
    }

    #[test]
    fn test_timeout_wording() {
        plain();
        let mut session = session(6);
        for _ in 0..30 {
            session.tick();
        }
        let text = ConsoleRenderer::render(&session.snapshot(), session.ladder());
        assert!(text.contains("O TEMPO ACABOU"));
    }

    #[test]
    fn test_stop_shows_title_of_last_cleared_level() {
        plain();
        let mut session = session(7);
        for _ in 0..3 {
            let index = correct(&session);
            session.answer(index);
        }
        session.stop();

        let text = ConsoleRenderer::render(&session.snapshot(), session.ladder());
        assert!(text.contains("PAROU!"));
        assert!(text.contains("Congregado"));
        assert!(text.contains("Prêmio Conquistado: 2.000 Dracmas"));
        assert!(!text.contains("A resposta correta era"));
    }

    #[test]
    fn test_stalled_screen_offers_only_stop() {
        plain();
        let easy = builtin_questions()
            .into_iter()
            .find(|q| q.difficulty() == Difficulty::Easy)
            .unwrap();
        let pool = Arc::new(QuestionPool::from_questions(vec![easy]));
        let mut session =
            GameSession::start(pool, GameRules::default(), StdRng::seed_from_u64(9)).unwrap();
        let index = correct(&session);
        session.answer(index);

        let snapshot = session.snapshot();
        assert!(snapshot.stalled);
        let text = ConsoleRenderer::render(&snapshot, session.ladder());
        assert!(text.contains("PERGUNTA 2 / 16"));
        assert!(text.contains("Não há mais perguntas disponíveis para este nível."));
        assert!(text.contains("Parar Jogo (0 Dracmas)"));
        assert!(!text.contains("[e]"));
    }

    #[test]
    fn test_report_labels_are_portuguese() {
        plain();
        let output = GenerateQuestionsOutput {
            batch: GeneratedBatch::mock(Vec::new(), "gerador indisponível"),
            rejected: vec!["resposta fora do intervalo".to_string()],
            save_report: Some(SaveReport {
                saved: 2,
                errors: Vec::new(),
            }),
        };
        let text = ConsoleRenderer::generated(&output);
        assert!(text.contains("SIMULADO: gerador indisponível"));
        assert!(text.contains("rejeitada: resposta fora do intervalo"));
        assert!(text.contains("Salvas: 2"));

        let report = MigrationReport {
            migrated: 3,
            failed: 1,
            errors: vec!["q9: duplicada".to_string()],
        };
        let text = ConsoleRenderer::migration(&report);
        assert!(text.starts_with("Migração: 3 migradas, 1 falharam"));
        assert!(text.contains("q9: duplicada"));
    }

    #[test]
    fn test_countdown_warning_seconds() {
        plain();
        let mut session = session(8);
        let mut warned = Vec::new();
        for _ in 0..29 {
            session.tick();
            let snapshot = session.snapshot();
            if ConsoleRenderer::countdown_warning(&snapshot).is_some() {
                warned.push(snapshot.time_left);
            }
        }
        assert_eq!(warned, vec![10, 5, 3, 2, 1]);
    }

    #[test]
    fn test_ladder_table() {
        plain();
        let text = ConsoleRenderer::ladder(&PrizeLadder::standard(), Some(5));
        assert_eq!(text.lines().count(), 17);
        assert!(text.contains("1.000.000"));
        assert!(text.contains("Apóstolo"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleRenderer::ladder_json(&PrizeLadder::standard())).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 16);
    }
}
