//! Maps typed commands to game intents

use milhao_application::GameIntent;
use milhao_domain::LifelineKind;

/// Help line listing every command
pub const COMMANDS_HELP: &str = "1-4/a-d responder · s parar · e cortar joio · i irmãos · \
     x pastor · r livramento · ok fechar · n jogar novamente · q sair";

/// Key that triggers a lifeline
pub fn lifeline_key(kind: LifelineKind) -> &'static str {
    match kind {
        LifelineKind::EliminateTwo => "e",
        LifelineKind::CrowdVote => "i",
        LifelineKind::ExpertHint => "x",
        LifelineKind::Reroll => "r",
    }
}

/// Parse one input line; `None` for anything unrecognized.
pub fn parse_intent(line: &str) -> Option<GameIntent> {
    let command = line.trim().to_lowercase();
    let intent = match command.as_str() {
        "1" | "a" => GameIntent::Answer(0),
        "2" | "b" => GameIntent::Answer(1),
        "3" | "c" => GameIntent::Answer(2),
        "4" | "d" => GameIntent::Answer(3),
        "s" | "stop" | "parar" => GameIntent::Stop,
        "e" => GameIntent::UseLifeline(LifelineKind::EliminateTwo),
        "i" => GameIntent::UseLifeline(LifelineKind::CrowdVote),
        "x" => GameIntent::UseLifeline(LifelineKind::ExpertHint),
        "r" => GameIntent::UseLifeline(LifelineKind::Reroll),
        "ok" => GameIntent::CloseLifelineModal,
        "n" => GameIntent::Restart,
        "q" | "quit" | "sair" => GameIntent::Quit,
        _ => return None,
    };
    Some(intent)
}
