//! Built-in question set
//!
//! Used whenever the configured question source is unavailable or empty, so
//! the game always stays playable. Covers every difficulty band: five easy,
//! five medium, five hard and one million-tier question.

use super::difficulty::Difficulty;
use super::entities::{Question, QuestionDraft};

struct BuiltinQuestion {
    id: u64,
    text: &'static str,
    options: [&'static str; 4],
    correct: usize,
    details: &'static str,
    difficulty: Difficulty,
}

const BUILTIN: [BuiltinQuestion; 16] = [
    BuiltinQuestion {
        id: 1,
        text: "Quem foi o primeiro homem criado por Deus?",
        options: ["Abraão", "Moisés", "Adão", "Noé"],
        correct: 2,
        details: "Adão (Gênesis 2:7)",
        difficulty: Difficulty::Easy,
    },
    BuiltinQuestion {
        id: 2,
        text: "Qual animal engoliu o profeta Jonas?",
        options: ["Um leão", "Uma baleia (grande peixe)", "Um urso", "Um jacaré"],
        correct: 1,
        details: "Um grande peixe (Jonas 1:17)",
        difficulty: Difficulty::Easy,
    },
    BuiltinQuestion {
        id: 3,
        text: "Quantos discípulos Jesus escolheu principalmente?",
        options: ["12", "7", "3", "70"],
        correct: 0,
        details: "Os doze apóstolos (Marcos 3:14)",
        difficulty: Difficulty::Easy,
    },
    BuiltinQuestion {
        id: 4,
        text: "Em quantos dias Deus criou o mundo segundo Gênesis 1?",
        options: ["3 dias", "6 dias", "7 dias", "10 dias"],
        correct: 1,
        details: "6 dias (descansou no sétimo)",
        difficulty: Difficulty::Easy,
    },
    BuiltinQuestion {
        id: 5,
        text: "Qual era o nome da esposa de Isaque?",
        options: ["Sara", "Rebeca", "Raquel", "Lia"],
        correct: 1,
        details: "Rebeca (Gênesis 24)",
        difficulty: Difficulty::Easy,
    },
    BuiltinQuestion {
        id: 6,
        text: "Quem interpretou o sonho do Faraó no Egito?",
        options: ["Daniel", "José", "Elias", "Arão"],
        correct: 1,
        details: "José (Gênesis 41)",
        difficulty: Difficulty::Medium,
    },
    BuiltinQuestion {
        id: 7,
        text: "Para qual cidade Paulo estava indo quando viu uma grande luz?",
        options: ["Jerusalém", "Jericó", "Damasco", "Roma"],
        correct: 2,
        details: "Damasco (Atos 9:3)",
        difficulty: Difficulty::Medium,
    },
    BuiltinQuestion {
        id: 8,
        text: "Quem foi lançado na cova dos leões?",
        options: ["Daniel", "Jeremias", "Sansão", "Davi"],
        correct: 0,
        details: "Daniel (Daniel 6)",
        difficulty: Difficulty::Medium,
    },
    BuiltinQuestion {
        id: 9,
        text: "Quantas pragas Deus enviou sobre o Egito?",
        options: ["7", "10", "12", "40"],
        correct: 1,
        details: "Dez pragas (Êxodo 7 a 12)",
        difficulty: Difficulty::Medium,
    },
    BuiltinQuestion {
        id: 10,
        text: "Quem liderou o povo de Israel após a morte de Moisés?",
        options: ["Josué", "Calebe", "Arão", "Gideão"],
        correct: 0,
        details: "Josué (Josué 1:1-9)",
        difficulty: Difficulty::Medium,
    },
    BuiltinQuestion {
        id: 11,
        text: "Qual o livro da Bíblia que vem logo após o livro de Jó?",
        options: ["Salmos", "Provérbios", "Isaías", "Ester"],
        correct: 0,
        details: "Salmos",
        difficulty: Difficulty::Hard,
    },
    BuiltinQuestion {
        id: 12,
        text: "Qual profeta foi levado ao céu num redemoinho?",
        options: ["Eliseu", "Elias", "Enoque", "Isaías"],
        correct: 1,
        details: "Elias (2 Reis 2:11)",
        difficulty: Difficulty::Hard,
    },
    BuiltinQuestion {
        id: 13,
        text: "Quantos livros tem o Antigo Testamento na Bíblia protestante?",
        options: ["27", "39", "46", "66"],
        correct: 1,
        details: "39 livros",
        difficulty: Difficulty::Hard,
    },
    BuiltinQuestion {
        id: 14,
        text: "Qual rei mandou construir o primeiro templo em Jerusalém?",
        options: ["Davi", "Saul", "Salomão", "Ezequias"],
        correct: 2,
        details: "Salomão (1 Reis 6)",
        difficulty: Difficulty::Hard,
    },
    BuiltinQuestion {
        id: 15,
        text: "Quem foi a mãe do profeta Samuel?",
        options: ["Ana", "Noemi", "Débora", "Rute"],
        correct: 0,
        details: "Ana (1 Samuel 1)",
        difficulty: Difficulty::Hard,
    },
    BuiltinQuestion {
        id: 16,
        text: "Qual é o capítulo mais curto da Bíblia?",
        options: ["Salmo 23", "Salmo 117", "Salmo 119", "Judas 1"],
        correct: 1,
        details: "Salmo 117",
        difficulty: Difficulty::Million,
    },
];

/// The built-in questions, ready for a [`QuestionPool`](super::pool::QuestionPool)
pub fn builtin_questions() -> Vec<Question> {
    BUILTIN
        .iter()
        .map(|b| {
            QuestionDraft {
                text: b.text.to_string(),
                options: b.options.map(str::to_string),
                correct_option: b.correct,
                difficulty: b.difficulty,
                correct_details: Some(b.details.to_string()),
            }
            .with_id(b.id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::entities::OPTION_COUNT;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_sixteen_questions() {
        assert_eq!(builtin_questions().len(), 16);
    }

    #[test]
    fn test_builtin_covers_every_band() {
        let questions = builtin_questions();
        for band in Difficulty::ALL {
            assert!(
                questions.iter().any(|q| q.difficulty() == band),
                "no builtin question for {}",
                band
            );
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let ids: HashSet<_> = builtin_questions().iter().map(|q| q.id().clone()).collect();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_builtin_questions_are_well_formed() {
        for q in builtin_questions() {
            assert!(q.correct_option() < OPTION_COUNT);
            assert!(!q.text().trim().is_empty());
            assert!(q.options().iter().all(|o| !o.is_empty()));
        }
    }
}
